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

//! Demo driver: runs every pattern in a fixed order behind a banner.

use crate::base::TrainId;
use crate::train::Train;
use crate::{
    Console, FreightTrain, PassengerTrain, PatternError, StationManager, chain, command, iterator,
    memento, observer, strategy,
};
use std::sync::Arc;

const BANNER_WIDTH: usize = 80;

/// Prints a section banner: a rule, the indented title, another rule and a
/// blank line.
pub fn banner(console: &Console, name: &str) {
    let line = "=".repeat(BANNER_WIDTH);
    console.println(line.as_str());
    console.println(format!("\t\t\t{name}"));
    console.println(line);
    console.println("");
}

/// Passenger takes the platform, freight queues, passenger leaves and the
/// freight train is promoted.
pub fn run_mediator(console: &Console) -> Result<(), PatternError> {
    let station = Arc::new(StationManager::new());
    let passenger = PassengerTrain::new(TrainId(1), &station, console.clone());
    let freight = FreightTrain::new(TrainId(2), &station, console.clone());

    Arc::clone(&passenger).request_arrival()?;
    Arc::clone(&freight).request_arrival()?;
    passenger.departure()?;
    Ok(())
}

/// Runs the whole transcript.
pub fn run_all(console: &Console) -> Result<(), PatternError> {
    banner(console, "Iterator");
    iterator::run(console);

    banner(console, "Observer");
    observer::run(console);

    banner(console, "Command");
    command::run(console)?;

    banner(console, "Chain of Responsibility");
    chain::run(console);

    banner(console, "Strategy");
    strategy::run(console)?;

    banner(console, "Memento");
    memento::run(console)?;

    banner(console, "Mediator");
    run_mediator(console)?;

    Ok(())
}
