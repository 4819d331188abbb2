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

//! Iterator pattern: a bounded counter.

use crate::Console;
use std::iter::FusedIterator;

/// Yields `0, 1, .., max - 1` and then stays exhausted.
#[derive(Debug, Clone)]
pub struct Counter {
    next: usize,
    max: usize,
}

impl Counter {
    pub fn new(max: usize) -> Self {
        Self { next: 0, max }
    }
}

impl Iterator for Counter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next >= self.max {
            return None;
        }
        self.next += 1;
        Some(self.next - 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.max.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Counter {}

impl FusedIterator for Counter {}

/// Prints every value of a five-step counter.
pub fn run(console: &Console) {
    for n in Counter::new(5) {
        console.println(n.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_from_zero_to_max_exclusive() {
        assert_eq!(Counter::new(5).collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn zero_max_yields_nothing() {
        assert_eq!(Counter::new(0).next(), None);
    }

    #[test]
    fn stays_exhausted() {
        let mut counter = Counter::new(1);
        assert_eq!(counter.next(), Some(0));
        assert_eq!(counter.next(), None);
        assert_eq!(counter.next(), None);
    }

    #[test]
    fn exact_length_is_tracked() {
        let mut counter = Counter::new(3);
        assert_eq!(counter.len(), 3);
        counter.next();
        assert_eq!(counter.len(), 2);
    }

    #[test]
    fn demo_prints_each_value() {
        let console = Console::capture();
        run(&console);
        assert_eq!(console.lines(), vec!["0", "1", "2", "3", "4"]);
    }
}
