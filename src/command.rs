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

//! Command pattern: buttons and a remote driving a device.
//!
//! Invokers ([`Button`], [`Remote`]) only know the [`Command`] trait; the
//! commands know which [`Device`] method to call.

use crate::{Console, PatternError};
use parking_lot::Mutex;
use std::sync::Arc;

/// A receiver that can be switched on and off.
pub trait Device: Send {
    fn on(&mut self);
    fn off(&mut self);
    fn is_running(&self) -> bool;
}

/// Shared, lockable device handle held by commands.
pub type SharedDevice = Arc<Mutex<dyn Device>>;

#[derive(Debug)]
pub struct Tv {
    is_running: bool,
    console: Console,
}

impl Tv {
    pub fn new(console: Console) -> Self {
        Self {
            is_running: false,
            console,
        }
    }
}

impl Device for Tv {
    fn on(&mut self) {
        self.is_running = true;
        self.console.println("Turning tv on");
    }

    fn off(&mut self) {
        self.is_running = false;
        self.console.println("Turning tv off");
    }

    fn is_running(&self) -> bool {
        self.is_running
    }
}

pub trait Command: Send + Sync {
    fn execute(&self);

    /// Reverts the effect of [`Command::execute`].
    fn undo(&self);
}

pub struct OnCommand {
    device: SharedDevice,
}

impl OnCommand {
    pub fn new(device: SharedDevice) -> Self {
        Self { device }
    }
}

impl Command for OnCommand {
    fn execute(&self) {
        self.device.lock().on();
    }

    fn undo(&self) {
        self.device.lock().off();
    }
}

pub struct OffCommand {
    device: SharedDevice,
}

impl OffCommand {
    pub fn new(device: SharedDevice) -> Self {
        Self { device }
    }
}

impl Command for OffCommand {
    fn execute(&self) {
        self.device.lock().off();
    }

    fn undo(&self) {
        self.device.lock().on();
    }
}

/// Invoker bound to a single command.
pub struct Button {
    command: Arc<dyn Command>,
}

impl Button {
    pub fn new(command: Arc<dyn Command>) -> Self {
        Self { command }
    }

    pub fn press(&self) {
        self.command.execute();
    }
}

/// Invoker that remembers what it ran so it can be undone.
#[derive(Default)]
pub struct Remote {
    history: Vec<Arc<dyn Command>>,
}

impl Remote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, command: Arc<dyn Command>) {
        command.execute();
        self.history.push(command);
    }

    /// Reverts the most recently pressed command.
    ///
    /// # Errors
    ///
    /// [`PatternError::NothingToUndo`] when the history is empty.
    pub fn undo(&mut self) -> Result<(), PatternError> {
        let command = self.history.pop().ok_or(PatternError::NothingToUndo)?;
        command.undo();
        Ok(())
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}

/// On and off buttons, then a remote press that gets undone.
pub fn run(console: &Console) -> Result<(), PatternError> {
    let tv: SharedDevice = Arc::new(Mutex::new(Tv::new(console.clone())));
    let on: Arc<dyn Command> = Arc::new(OnCommand::new(Arc::clone(&tv)));
    let off: Arc<dyn Command> = Arc::new(OffCommand::new(Arc::clone(&tv)));

    Button::new(Arc::clone(&on)).press();
    Button::new(off).press();

    let mut remote = Remote::new();
    remote.press(on);
    remote.undo()?;
    Ok(())
}
