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

//! Memento pattern: snapshots of an originator kept by a caretaker.

use crate::{Console, PatternError};
use serde::{Deserialize, Serialize};

/// Immutable snapshot of an [`Originator`]'s state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memento {
    state: String,
}

impl Memento {
    pub fn state(&self) -> &str {
        &self.state
    }
}

#[derive(Debug, Clone, Default)]
pub struct Originator {
    state: String,
}

impl Originator {
    pub fn new(state: impl Into<String>) -> Self {
        Self {
            state: state.into(),
        }
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = state.into();
    }

    pub fn create_memento(&self) -> Memento {
        Memento {
            state: self.state.clone(),
        }
    }

    pub fn restore_memento(&mut self, memento: &Memento) {
        self.state.clone_from(&memento.state);
    }
}

/// Keeps mementos in the order they were saved.
#[derive(Debug, Default)]
pub struct Caretaker {
    history: Vec<Memento>,
}

impl Caretaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_memento(&mut self, memento: Memento) {
        self.history.push(memento);
    }

    /// # Errors
    ///
    /// [`PatternError::SnapshotNotFound`] if nothing was saved at `index`.
    pub fn memento(&self, index: usize) -> Result<&Memento, PatternError> {
        self.history.get(index).ok_or(PatternError::SnapshotNotFound {
            index,
            len: self.history.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

pub fn run(console: &Console) -> Result<(), PatternError> {
    let mut caretaker = Caretaker::new();
    let mut originator = Originator::new("A");
    console.println(format!("Originator Current State: {}", originator.state()));
    caretaker.add_memento(originator.create_memento());

    originator.set_state("B");
    console.println(format!("Originator Current State: {}", originator.state()));
    caretaker.add_memento(originator.create_memento());

    originator.set_state("C");
    console.println(format!("Originator Current State: {}", originator.state()));

    originator.restore_memento(caretaker.memento(1)?);
    console.println(format!("Restored to State: {}", originator.state()));

    originator.restore_memento(caretaker.memento(0)?);
    console.println(format!("Restored to State: {}", originator.state()));
    Ok(())
}
