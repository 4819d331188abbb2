// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Line-oriented output sink shared by every demonstration.
//!
//! The executable prints straight to stdout; tests use [`Console::capture`]
//! and inspect [`Console::lines`] afterwards.

use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone)]
enum Sink {
    Stdout,
    Capture(Arc<Mutex<Vec<String>>>),
}

/// Cloneable handle to where demo output goes.
///
/// Clones share the same sink, so lines written from subscriber threads and
/// from the driver end up in one transcript.
#[derive(Debug, Clone)]
pub struct Console {
    sink: Sink,
}

impl Console {
    /// Writes every line to standard output.
    pub fn stdout() -> Self {
        Self { sink: Sink::Stdout }
    }

    /// Records lines in memory instead of printing them.
    pub fn capture() -> Self {
        Self {
            sink: Sink::Capture(Arc::new(Mutex::new(Vec::new()))),
        }
    }

    pub fn println(&self, line: impl Into<String>) {
        let line = line.into();
        match &self.sink {
            Sink::Stdout => println!("{line}"),
            Sink::Capture(lines) => lines.lock().push(line),
        }
    }

    /// Returns the captured transcript. Always empty for [`Console::stdout`].
    pub fn lines(&self) -> Vec<String> {
        match &self.sink {
            Sink::Stdout => Vec::new(),
            Sink::Capture(lines) => lines.lock().clone(),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::stdout()
    }
}
