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

//! Train-station mediator.
//!
//! The [`StationManager`] owns the single platform and decides which train
//! may occupy it. Trains never coordinate with each other directly.
//!
//! ```text
//!            request_arrival (granted)
//!   Free ────────────────────────────────► Occupied ──┐
//!    ▲                                        │       │ notify_departure
//!    └──────── notify_departure ──────────────┘ ◄─────┘ (queue non-empty:
//!               (queue empty)                           head is promoted)
//! ```
//!
//! # Thread Safety
//!
//! `platform_free` and the wait queue live behind one [`Mutex`]; each
//! operation holds it for its whole critical section, so two concurrent
//! requests can never both see a free platform.

use crate::base::TrainId;
use crate::train::Train;
use log::debug;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;

/// Observable state of the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformState {
    Free,
    Occupied,
}

#[derive(Debug)]
struct PlatformData {
    platform_free: bool,
    /// Trains denied immediate arrival, oldest request first.
    wait_queue: VecDeque<Arc<dyn Train>>,
}

impl PlatformData {
    fn new() -> Self {
        Self {
            platform_free: true,
            wait_queue: VecDeque::new(),
        }
    }

    fn assert_invariants(&self) {
        debug_assert!(
            !self.platform_free || self.wait_queue.is_empty(),
            "Invariant violated: platform free with {} train(s) waiting",
            self.wait_queue.len()
        );
    }

    /// Takes the platform if it is free, otherwise queues the train.
    fn admit(&mut self, train: Arc<dyn Train>) -> bool {
        let granted = if self.platform_free {
            self.platform_free = false;
            true
        } else {
            self.wait_queue.push_back(train);
            false
        };
        self.assert_invariants();
        granted
    }

    /// Hands the platform to the longest-waiting train, or frees it.
    fn release(&mut self) -> Option<Arc<dyn Train>> {
        let next = self.wait_queue.pop_front();
        if next.is_none() {
            self.platform_free = true;
        }
        self.assert_invariants();
        next
    }
}

/// Mediator arbitrating access to the station's single platform.
#[derive(Debug)]
pub struct StationManager {
    inner: Mutex<PlatformData>,
}

impl StationManager {
    /// Creates a station with a free platform and nobody waiting.
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(PlatformData::new()),
        }
    }

    /// Requests the platform for `train`.
    ///
    /// Returns `true` if the platform was free and is now held by `train`.
    /// Otherwise `train` joins the tail of the wait queue and `false` is
    /// returned straight away; the call never blocks on other trains.
    pub fn request_arrival(&self, train: Arc<dyn Train>) -> bool {
        let id = train.id();
        let granted = self.inner.lock().admit(train);
        if granted {
            debug!("train {id} granted the platform");
        } else {
            debug!("train {id} queued for the platform");
        }
        granted
    }

    /// Releases the platform held by the departing train.
    ///
    /// The head of the wait queue, if any, is promoted without the platform
    /// ever becoming free, and its [`Train::permit_arrival`] callback is
    /// invoked once the lock has been released. Returns the promoted train's
    /// id. With nobody waiting the platform is freed; calling this on a free
    /// platform changes nothing.
    pub fn notify_departure(&self) -> Option<TrainId> {
        let promoted = self.inner.lock().release();

        match promoted {
            Some(train) => {
                let id = train.id();
                debug!("platform handed over to train {id}");
                train.permit_arrival();
                Some(id)
            }
            None => {
                debug!("platform is free");
                None
            }
        }
    }

    pub fn is_platform_free(&self) -> bool {
        self.inner.lock().platform_free
    }

    pub fn platform_state(&self) -> PlatformState {
        if self.is_platform_free() {
            PlatformState::Free
        } else {
            PlatformState::Occupied
        }
    }

    /// Ids of the queued trains, longest waiting first.
    pub fn waiting(&self) -> Vec<TrainId> {
        self.inner
            .lock()
            .wait_queue
            .iter()
            .map(|train| train.id())
            .collect()
    }

    pub fn waiting_len(&self) -> usize {
        self.inner.lock().wait_queue.len()
    }
}

impl Default for StationManager {
    fn default() -> Self {
        Self::new()
    }
}
