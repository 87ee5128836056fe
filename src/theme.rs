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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) gauge_track_colour: Color,

    pub(crate) input_colour: Color,
    pub(crate) hint_colour: Color,
    pub(crate) skeleton_colour: Color,
    pub(crate) selection_colour: Color,

    pub(crate) card_title_colour: Color,
    pub(crate) card_artist_colour: Color,
    pub(crate) card_meta_colour: Color,

    pub(crate) notice_info_colour: Color,
    pub(crate) notice_error_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(18, 18, 18),
            accent_colour: Color::Rgb(30, 215, 96),
            border_colour: Color::Rgb(102, 102, 102),
            gauge_track_colour: Color::Rgb(40, 40, 40),

            input_colour: Color::Rgb(255, 255, 255),
            hint_colour: Color::Rgb(162, 161, 166),
            skeleton_colour: Color::Rgb(60, 60, 60),
            selection_colour: Color::Rgb(40, 70, 50),

            card_title_colour: Color::Rgb(255, 255, 255),
            card_artist_colour: Color::Rgb(179, 157, 219),
            card_meta_colour: Color::Rgb(162, 161, 166),

            notice_info_colour: Color::Rgb(30, 215, 96),
            notice_error_colour: Color::Rgb(235, 87, 87),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences.
    ///
    /// # Arguments
    ///
    /// * `colour` - The Ratatui color to convert. Must be an `Rgb` variant.
    ///
    /// # Panics
    ///
    /// Panics if the provided color is not a [`Color::Rgb`] variant.
    pub(crate) fn to_hex(colour: Color) -> String {
        match colour {
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            _ => panic!("Unexpected non-RGB colour"),
        }
    }
}
