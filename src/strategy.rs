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

//! Strategy pattern: a cache with a swappable eviction algorithm.

use crate::{Console, PatternError};
use log::debug;
use std::collections::HashMap;
use std::fmt;

/// Book-keeping the eviction strategies choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStats {
    /// Position in insertion order.
    pub inserted: u64,
    /// Logical time of the last insert or read.
    pub last_access: u64,
    /// Number of inserts and reads.
    pub hits: u64,
}

/// Picks the entry to drop when the cache is full.
pub trait EvictionAlgo: fmt::Debug + Send {
    fn name(&self) -> &'static str;

    fn victim<'a>(&self, entries: &'a HashMap<String, (String, EntryStats)>) -> Option<&'a str>;
}

fn pick_min<'a, K: Ord>(
    entries: &'a HashMap<String, (String, EntryStats)>,
    key: impl Fn(&EntryStats) -> K,
) -> Option<&'a str> {
    entries
        .iter()
        .min_by_key(|(_, (_, stats))| key(stats))
        .map(|(k, _)| k.as_str())
}

/// Evicts the oldest insertion.
#[derive(Debug, Default, Clone, Copy)]
pub struct Fifo;

impl EvictionAlgo for Fifo {
    fn name(&self) -> &'static str {
        "fifo"
    }

    fn victim<'a>(&self, entries: &'a HashMap<String, (String, EntryStats)>) -> Option<&'a str> {
        pick_min(entries, |stats| stats.inserted)
    }
}

/// Evicts the entry untouched for the longest time.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lru;

impl EvictionAlgo for Lru {
    fn name(&self) -> &'static str {
        "lru"
    }

    fn victim<'a>(&self, entries: &'a HashMap<String, (String, EntryStats)>) -> Option<&'a str> {
        pick_min(entries, |stats| stats.last_access)
    }
}

/// Evicts the least used entry; ties go to the oldest insertion.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lfu;

impl EvictionAlgo for Lfu {
    fn name(&self) -> &'static str {
        "lfu"
    }

    fn victim<'a>(&self, entries: &'a HashMap<String, (String, EntryStats)>) -> Option<&'a str> {
        pick_min(entries, |stats| (stats.hits, stats.inserted))
    }
}

/// Bounded key/value store delegating eviction to an [`EvictionAlgo`].
#[derive(Debug)]
pub struct Cache {
    storage: HashMap<String, (String, EntryStats)>,
    eviction_algo: Box<dyn EvictionAlgo>,
    max_capacity: usize,
    clock: u64,
    console: Console,
}

impl Cache {
    /// # Errors
    ///
    /// [`PatternError::ZeroCapacity`] if `max_capacity` is zero.
    pub fn new(
        eviction_algo: Box<dyn EvictionAlgo>,
        max_capacity: usize,
        console: Console,
    ) -> Result<Self, PatternError> {
        if max_capacity == 0 {
            return Err(PatternError::ZeroCapacity);
        }
        Ok(Self {
            storage: HashMap::with_capacity(max_capacity),
            eviction_algo,
            max_capacity,
            clock: 0,
            console,
        })
    }

    pub fn set_eviction_algo(&mut self, eviction_algo: Box<dyn EvictionAlgo>) {
        self.eviction_algo = eviction_algo;
    }

    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Inserts or overwrites `key`, evicting one entry first if a new key
    /// would exceed the capacity.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let now = self.tick();

        if let Some((stored, stats)) = self.storage.get_mut(&key) {
            *stored = value.into();
            stats.last_access = now;
            stats.hits += 1;
            return;
        }

        if self.storage.len() >= self.max_capacity {
            self.evict();
        }
        self.storage.insert(
            key,
            (
                value.into(),
                EntryStats {
                    inserted: now,
                    last_access: now,
                    hits: 1,
                },
            ),
        );
    }

    /// Reads `key`, counting it as an access.
    pub fn get(&mut self, key: &str) -> Option<&str> {
        let now = self.tick();
        let (value, stats) = self.storage.get_mut(key)?;
        stats.last_access = now;
        stats.hits += 1;
        Some(value.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.storage.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    fn evict(&mut self) {
        self.console.println(format!(
            "Evicting by {} strategy",
            self.eviction_algo.name()
        ));
        let victim = self
            .eviction_algo
            .victim(&self.storage)
            .map(str::to_owned);
        if let Some(victim) = victim {
            debug!("evicted {victim}");
            self.storage.remove(&victim);
        }
    }
}

/// LFU cache of two, then switched to LRU and FIFO as entries arrive.
pub fn run(console: &Console) -> Result<(), PatternError> {
    let mut cache = Cache::new(Box::new(Lfu), 2, console.clone())?;
    cache.add("a", "1");
    cache.add("b", "2");
    cache.add("c", "3");

    cache.set_eviction_algo(Box::new(Lru));
    cache.add("d", "4");

    cache.set_eviction_algo(Box::new(Fifo));
    cache.add("e", "5");
    Ok(())
}
