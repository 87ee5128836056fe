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

//! UI components.
//!
//! Each component pairs its state with event routing and rendering logic,
//! and reports user intent back to the event loop as an action enum instead
//! of mutating shared state.

mod results;
mod search;

pub(crate) use results::{ResultsAction, ResultsView};
pub(crate) use search::{SearchAction, SearchView};
