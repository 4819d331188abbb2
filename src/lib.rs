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

//! # Patterns Demo
//!
//! Small, self-contained demonstrations of classical design patterns. Each
//! module pairs a handful of types with a `run` driver that prints to a
//! [`Console`].
//!
//! ## Core Components
//!
//! - [`StationManager`]: Mediator guarding a single platform and a FIFO wait queue
//! - [`Train`]: Capabilities shared by [`PassengerTrain`] and [`FreightTrain`]
//! - [`Console`]: Output sink, either stdout or an in-memory capture
//! - [`PatternError`]: Error types for the few fallible operations
//!
//! The remaining patterns live in [`iterator`], [`observer`], [`command`],
//! [`chain`], [`strategy`] and [`memento`].
//!
//! ## Example
//!
//! ```
//! use patterns_demo_rs::{Console, FreightTrain, PassengerTrain, StationManager, Train, TrainId};
//! use std::sync::Arc;
//!
//! let station = Arc::new(StationManager::new());
//! let console = Console::capture();
//! let passenger = PassengerTrain::new(TrainId(1), &station, console.clone());
//! let freight = FreightTrain::new(TrainId(2), &station, console.clone());
//!
//! assert!(Arc::clone(&passenger).request_arrival().unwrap());
//! assert!(!Arc::clone(&freight).request_arrival().unwrap());
//! assert_eq!(station.waiting(), vec![TrainId(2)]);
//!
//! // The freight train is promoted straight away; the platform never frees up.
//! passenger.departure().unwrap();
//! assert!(!station.is_platform_free());
//! assert!(station.waiting().is_empty());
//! ```
//!
//! ## Thread Safety
//!
//! The station manager keeps its state behind a single lock, so trains may
//! arrive and depart from any number of threads.

mod base;
pub mod chain;
pub mod command;
mod console;
pub mod demo;
pub mod error;
pub mod iterator;
pub mod memento;
pub mod observer;
mod station;
pub mod strategy;
mod train;

pub use base::{SubscriberId, TrainId};
pub use console::Console;
pub use error::PatternError;
pub use observer::Broadcaster;
pub use station::{PlatformState, StationManager};
pub use train::{FreightTrain, PassengerTrain, Train, TrainKind};
