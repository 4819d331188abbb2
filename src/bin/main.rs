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

use clap::Parser;
use log::LevelFilter;
use patterns_demo_rs::{Console, demo};
use std::process;

/// Design Patterns Demo - Print a transcript of each pattern in action
///
/// Runs the iterator, observer, command, chain of responsibility, strategy,
/// memento and mediator demonstrations in order. Set `RUST_LOG=debug` to see
/// the mediator's decisions on stderr.
#[derive(Parser, Debug)]
#[command(name = "patterns-demo-rs", version)]
#[command(about = "Prints a demonstration of classical design patterns", long_about = None)]
struct Args {}

fn main() {
    let _args = Args::parse();

    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    if let Err(e) = demo::run_all(&Console::stdout()) {
        eprintln!("Error running demo: {}", e);
        process::exit(1);
    }
}
