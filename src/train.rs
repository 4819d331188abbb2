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

//! Trains that coordinate through a [`StationManager`].
//!
//! A train never talks to another train. It asks the manager for the
//! platform, and the manager calls [`Train::permit_arrival`] on a queued
//! train when the platform is handed over.
//!
//! # Example
//!
//! ```
//! use patterns_demo_rs::{Console, PassengerTrain, StationManager, Train, TrainId};
//! use std::sync::Arc;
//!
//! let manager = Arc::new(StationManager::new());
//! let console = Console::capture();
//! let train = PassengerTrain::new(TrainId(1), &manager, console.clone());
//!
//! assert!(Arc::clone(&train).request_arrival().unwrap());
//! assert_eq!(console.lines(), vec!["PassengerTrain #1: Arriving"]);
//! ```

use crate::base::TrainId;
use crate::{Console, PatternError, StationManager};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainKind {
    Passenger,
    Freight,
}

impl fmt::Display for TrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passenger => f.write_str("PassengerTrain"),
            Self::Freight => f.write_str("FreightTrain"),
        }
    }
}

/// Capabilities every train offers to the station.
pub trait Train: Send + Sync + fmt::Debug {
    fn id(&self) -> TrainId;

    fn kind(&self) -> TrainKind;

    /// Asks the station for the platform. Returns `true` when the train
    /// arrived immediately and `false` when it was queued.
    ///
    /// # Errors
    ///
    /// [`PatternError::StationClosed`] if the manager has been dropped.
    fn request_arrival(self: Arc<Self>) -> Result<bool, PatternError>;

    /// Leaves the platform and tells the station it may be reassigned.
    ///
    /// # Errors
    ///
    /// [`PatternError::StationClosed`] if the manager has been dropped.
    fn departure(&self) -> Result<(), PatternError>;

    /// Called by the station when this train is promoted from the queue.
    ///
    /// Runs after the station has released its lock, with the platform
    /// already handed over. Callbacks from concurrent departures may
    /// therefore finish out of queue order.
    fn permit_arrival(&self);
}

/// State shared by both train variants.
#[derive(Debug)]
struct TrainCore {
    id: TrainId,
    kind: TrainKind,
    /// Relation only: the train never keeps the station alive.
    station: Weak<StationManager>,
    console: Console,
}

impl TrainCore {
    fn new(id: TrainId, kind: TrainKind, station: &Arc<StationManager>, console: Console) -> Self {
        Self {
            id,
            kind,
            station: Arc::downgrade(station),
            console,
        }
    }

    fn station(&self) -> Result<Arc<StationManager>, PatternError> {
        self.station.upgrade().ok_or(PatternError::StationClosed)
    }

    fn say(&self, message: &str) {
        self.console
            .println(format!("{} #{}: {}", self.kind, self.id, message));
    }

    fn request_arrival(&self, train: Arc<dyn Train>) -> Result<bool, PatternError> {
        let granted = self.station()?.request_arrival(train);
        self.say(if granted { "Arriving" } else { "Waiting" });
        Ok(granted)
    }
}

/// Passenger service. Announces its departure before releasing the platform.
#[derive(Debug)]
pub struct PassengerTrain {
    core: TrainCore,
}

impl PassengerTrain {
    pub fn new(id: TrainId, station: &Arc<StationManager>, console: Console) -> Arc<Self> {
        Arc::new(Self {
            core: TrainCore::new(id, TrainKind::Passenger, station, console),
        })
    }
}

impl Train for PassengerTrain {
    fn id(&self) -> TrainId {
        self.core.id
    }

    fn kind(&self) -> TrainKind {
        self.core.kind
    }

    fn request_arrival(self: Arc<Self>) -> Result<bool, PatternError> {
        let station_train: Arc<dyn Train> = self.clone();
        self.core.request_arrival(station_train)
    }

    fn departure(&self) -> Result<(), PatternError> {
        let station = self.core.station()?;
        self.core.say("Leaving");
        station.notify_departure();
        Ok(())
    }

    fn permit_arrival(&self) {
        self.core.say("Arrival permitted");
    }
}

/// Freight service. Releases the platform first and announces afterwards.
#[derive(Debug)]
pub struct FreightTrain {
    core: TrainCore,
}

impl FreightTrain {
    pub fn new(id: TrainId, station: &Arc<StationManager>, console: Console) -> Arc<Self> {
        Arc::new(Self {
            core: TrainCore::new(id, TrainKind::Freight, station, console),
        })
    }
}

impl Train for FreightTrain {
    fn id(&self) -> TrainId {
        self.core.id
    }

    fn kind(&self) -> TrainKind {
        self.core.kind
    }

    fn request_arrival(self: Arc<Self>) -> Result<bool, PatternError> {
        let station_train: Arc<dyn Train> = self.clone();
        self.core.request_arrival(station_train)
    }

    fn departure(&self) -> Result<(), PatternError> {
        self.core.station()?.notify_departure();
        self.core.say("Leaving");
        Ok(())
    }

    fn permit_arrival(&self) {
        self.core.say("Arrival permitted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display_names() {
        assert_eq!(TrainKind::Passenger.to_string(), "PassengerTrain");
        assert_eq!(TrainKind::Freight.to_string(), "FreightTrain");
    }

    #[test]
    fn passenger_prints_before_promoting() {
        let station = Arc::new(StationManager::new());
        let console = Console::capture();
        let passenger = PassengerTrain::new(TrainId(1), &station, console.clone());
        let freight = FreightTrain::new(TrainId(2), &station, console.clone());

        Arc::clone(&passenger).request_arrival().unwrap();
        Arc::clone(&freight).request_arrival().unwrap();
        passenger.departure().unwrap();

        assert_eq!(
            console.lines(),
            vec![
                "PassengerTrain #1: Arriving",
                "FreightTrain #2: Waiting",
                "PassengerTrain #1: Leaving",
                "FreightTrain #2: Arrival permitted",
            ]
        );
    }

    #[test]
    fn freight_promotes_before_printing() {
        let station = Arc::new(StationManager::new());
        let console = Console::capture();
        let freight = FreightTrain::new(TrainId(1), &station, console.clone());
        let passenger = PassengerTrain::new(TrainId(2), &station, console.clone());

        Arc::clone(&freight).request_arrival().unwrap();
        Arc::clone(&passenger).request_arrival().unwrap();
        freight.departure().unwrap();

        assert_eq!(
            console.lines(),
            vec![
                "FreightTrain #1: Arriving",
                "PassengerTrain #2: Waiting",
                "PassengerTrain #2: Arrival permitted",
                "FreightTrain #1: Leaving",
            ]
        );
    }

    #[test]
    fn dropped_station_is_reported() {
        let station = Arc::new(StationManager::new());
        let console = Console::capture();
        let train = PassengerTrain::new(TrainId(1), &station, console.clone());
        drop(station);

        assert_eq!(
            Arc::clone(&train).request_arrival(),
            Err(PatternError::StationClosed)
        );
        assert_eq!(train.departure(), Err(PatternError::StationClosed));
        assert!(console.lines().is_empty());
    }
}
