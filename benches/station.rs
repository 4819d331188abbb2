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

//! Benchmarks for the station manager.
//!
//! Run with: cargo bench
//!
//! Benchmarks include:
//! - Single-threaded request/departure cycles
//! - Queue build-up and drain
//! - Contended requests from the rayon thread pool

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use patterns_demo_rs::{PatternError, StationManager, Train, TrainId, TrainKind};
use rayon::prelude::*;
use std::sync::Arc;

// =============================================================================
// Helper Functions
// =============================================================================

/// Train that prints nothing, so benchmarks measure only the manager.
#[derive(Debug)]
struct SilentTrain(TrainId);

impl Train for SilentTrain {
    fn id(&self) -> TrainId {
        self.0
    }

    fn kind(&self) -> TrainKind {
        TrainKind::Freight
    }

    fn request_arrival(self: Arc<Self>) -> Result<bool, PatternError> {
        Ok(false)
    }

    fn departure(&self) -> Result<(), PatternError> {
        Ok(())
    }

    fn permit_arrival(&self) {}
}

fn make_train(id: u32) -> Arc<dyn Train> {
    Arc::new(SilentTrain(TrainId(id)))
}

// =============================================================================
// Single-Threaded Benchmarks
// =============================================================================

fn bench_arrive_depart(c: &mut Criterion) {
    c.bench_function("arrive_depart", |b| {
        let station = StationManager::new();
        let train = make_train(1);
        b.iter(|| {
            station.request_arrival(black_box(Arc::clone(&train)));
            station.notify_departure();
        })
    });
}

fn bench_queue_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_drain");

    for count in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let trains: Vec<Arc<dyn Train>> = (0..count).map(make_train).collect();
            b.iter(|| {
                let station = StationManager::new();
                for train in &trains {
                    station.request_arrival(Arc::clone(train));
                }
                while !station.is_platform_free() {
                    station.notify_departure();
                }
                black_box(&station);
            })
        });
    }
    group.finish();
}

// =============================================================================
// Multi-Threaded Benchmarks
// =============================================================================

fn bench_parallel_requests(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_requests");

    for count in [1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            b.iter(|| {
                let station = StationManager::new();
                (0..count).into_par_iter().for_each(|i| {
                    if i % 2 == 0 {
                        station.request_arrival(make_train(i));
                    } else {
                        station.notify_departure();
                    }
                });
                black_box(&station);
            })
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Groups
// =============================================================================

criterion_group!(single_threaded, bench_arrive_depart, bench_queue_drain,);

criterion_group!(multi_threaded, bench_parallel_requests,);

criterion_main!(single_threaded, multi_threaded);
