// Copyright (C) 2026  Tunescout contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

/// Formats a duration in seconds into a human-readable `M:SS` string.
///
/// Minutes are not zero-padded; seconds always are. This is used for the
/// elapsed, total and remaining time displays in the player bar.
pub(crate) fn format_time(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let secs = total_seconds % 60;
    format!("{}:{:02}", mins, secs)
}

/// File name for a downloaded track.
///
/// Keeps word characters, whitespace and hyphens from the title, collapses
/// whitespace runs to single underscores, and fixes the extension.
pub(crate) fn sanitize_filename(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-' || c.is_whitespace())
        .collect();

    let mut name = String::new();
    for word in kept.split_whitespace() {
        if !name.is_empty() {
            name.push('_');
        }
        name.push_str(word);
    }

    format!("{}.mp3", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_render_with_unpadded_minutes() {
        assert_eq!(format_time(125), "2:05");
        assert_eq!(format_time(59), "0:59");
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(3600), "60:00");
    }

    #[test]
    fn filenames_strip_punctuation_and_collapse_whitespace() {
        assert_eq!(
            sanitize_filename("Song: Name (Live)!"),
            "Song_Name_Live.mp3"
        );
        assert_eq!(
            sanitize_filename("  spaced   out \t title "),
            "spaced_out_title.mp3"
        );
    }

    #[test]
    fn filenames_keep_hyphens_and_underscores() {
        assert_eq!(sanitize_filename("lo-fi_mix"), "lo-fi_mix.mp3");
    }

    #[test]
    fn slashes_never_reach_the_filesystem() {
        assert_eq!(sanitize_filename("AC/DC - Thunderstruck"), "ACDC_-_Thunderstruck.mp3");
        assert_eq!(sanitize_filename("../../etc/passwd"), "etcpasswd.mp3");
    }
}
