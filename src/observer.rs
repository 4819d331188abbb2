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

//! Observer pattern on top of a condition variable.
//!
//! Each subscriber runs on its own thread and sleeps on a shared
//! [`Condvar`]. [`Broadcaster::broadcast`] wakes all of them at once and
//! waits until every subscriber has handled the notification, which keeps
//! the printed transcript stable between broadcasts.

use crate::Console;
use crate::base::SubscriberId;
use crossbeam::channel::{self, Receiver, Sender};
use log::{trace, warn};
use parking_lot::{Condvar, Mutex};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

#[derive(Debug, Default)]
struct Signal {
    /// Bumped once per broadcast.
    generation: u64,
    closed: bool,
}

#[derive(Debug, Default)]
struct Shared {
    signal: Mutex<Signal>,
    cond: Condvar,
}

/// Notifies a set of subscriber threads.
#[derive(Debug)]
pub struct Broadcaster {
    shared: Arc<Shared>,
    console: Console,
    acks_tx: Sender<SubscriberId>,
    acks_rx: Receiver<SubscriberId>,
    subscribers: Vec<(SubscriberId, JoinHandle<()>)>,
}

impl Broadcaster {
    pub fn new(console: Console) -> Self {
        let (acks_tx, acks_rx) = channel::unbounded();
        Self {
            shared: Arc::new(Shared::default()),
            console,
            acks_tx,
            acks_rx,
            subscribers: Vec::new(),
        }
    }

    /// Starts a subscriber thread. It only sees broadcasts issued after
    /// this call returns.
    pub fn subscribe(&mut self, id: SubscriberId) {
        let shared = Arc::clone(&self.shared);
        let console = self.console.clone();
        let acks = self.acks_tx.clone();
        let mut seen = shared.signal.lock().generation;

        let handle = thread::spawn(move || {
            loop {
                {
                    let mut signal = shared.signal.lock();
                    while signal.generation == seen && !signal.closed {
                        shared.cond.wait(&mut signal);
                    }
                    if signal.closed {
                        break;
                    }
                    seen = signal.generation;
                }

                trace!("subscriber {id} woke for generation {seen}");
                console.println(format!("Subscriber {id} is notified"));
                if acks.send(id).is_err() {
                    break;
                }
            }
        });

        self.subscribers.push((id, handle));
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Wakes every subscriber and returns once all of them have been
    /// notified. Returns the number of subscribers reached.
    pub fn broadcast(&self) -> usize {
        {
            let mut signal = self.shared.signal.lock();
            signal.generation += 1;
            self.shared.cond.notify_all();
        }

        let mut notified = 0;
        while notified < self.subscribers.len() {
            // Every subscriber thread holds a sender clone and so does
            // `self`, so the channel cannot disconnect here.
            if self.acks_rx.recv().is_err() {
                break;
            }
            notified += 1;
        }
        notified
    }

    /// Stops and joins all subscriber threads.
    pub fn close(&mut self) {
        {
            let mut signal = self.shared.signal.lock();
            signal.closed = true;
            self.shared.cond.notify_all();
        }
        for (id, handle) in self.subscribers.drain(..) {
            if handle.join().is_err() {
                warn!("subscriber {id} panicked");
            }
        }
    }
}

impl Drop for Broadcaster {
    fn drop(&mut self) {
        self.close();
    }
}

/// Three subscribers, two broadcasts.
pub fn run(console: &Console) {
    let mut broadcaster = Broadcaster::new(console.clone());
    for id in 1..=3 {
        broadcaster.subscribe(SubscriberId(id));
    }

    broadcaster.broadcast();
    console.println("Once more");
    broadcaster.broadcast();

    broadcaster.close();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut lines: Vec<String>) -> Vec<String> {
        lines.sort();
        lines
    }

    #[test]
    fn broadcast_without_subscribers_returns_zero() {
        let broadcaster = Broadcaster::new(Console::capture());
        assert_eq!(broadcaster.broadcast(), 0);
    }

    #[test]
    fn every_subscriber_is_notified_once_per_broadcast() {
        let console = Console::capture();
        let mut broadcaster = Broadcaster::new(console.clone());
        broadcaster.subscribe(SubscriberId(1));
        broadcaster.subscribe(SubscriberId(2));

        assert_eq!(broadcaster.broadcast(), 2);
        assert_eq!(
            sorted(console.lines()),
            vec!["Subscriber 1 is notified", "Subscriber 2 is notified"]
        );

        assert_eq!(broadcaster.broadcast(), 2);
        assert_eq!(console.lines().len(), 4);
    }

    #[test]
    fn late_subscriber_misses_earlier_broadcasts() {
        let console = Console::capture();
        let mut broadcaster = Broadcaster::new(console.clone());
        broadcaster.subscribe(SubscriberId(1));
        broadcaster.broadcast();

        broadcaster.subscribe(SubscriberId(2));
        broadcaster.close();

        assert_eq!(console.lines(), vec!["Subscriber 1 is notified"]);
        assert_eq!(broadcaster.subscriber_count(), 0);
    }

    #[test]
    fn demo_separates_broadcasts() {
        let console = Console::capture();
        run(&console);

        let lines = console.lines();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[3], "Once more");
        assert_eq!(
            sorted(lines[..3].to_vec()),
            sorted(lines[4..].to_vec())
        );
    }
}
