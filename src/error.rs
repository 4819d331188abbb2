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

//! Error types for the pattern demonstrations.

use thiserror::Error;

/// Recoverable failures raised by the demonstrations.
///
/// A train that has to wait for the platform is *not* an error; it is
/// reported through the `bool` returned by
/// [`StationManager::request_arrival`](crate::StationManager::request_arrival).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// Undo requested with an empty command history
    #[error("nothing to undo")]
    NothingToUndo,

    /// Caretaker has no memento at the requested index
    #[error("no snapshot at index {index} (history holds {len})")]
    SnapshotNotFound { index: usize, len: usize },

    /// Cache constructed without room for a single entry
    #[error("cache capacity must be at least one")]
    ZeroCapacity,

    /// The station manager a train refers to has been dropped
    #[error("station manager is no longer available")]
    StationClosed,
}

#[cfg(test)]
mod tests {
    use super::PatternError;

    #[test]
    fn error_display_messages() {
        assert_eq!(PatternError::NothingToUndo.to_string(), "nothing to undo");
        assert_eq!(
            PatternError::SnapshotNotFound { index: 4, len: 2 }.to_string(),
            "no snapshot at index 4 (history holds 2)"
        );
        assert_eq!(
            PatternError::ZeroCapacity.to_string(),
            "cache capacity must be at least one"
        );
        assert_eq!(
            PatternError::StationClosed.to_string(),
            "station manager is no longer available"
        );
    }

    #[test]
    fn errors_are_cloneable() {
        let error = PatternError::SnapshotNotFound { index: 1, len: 0 };
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}
