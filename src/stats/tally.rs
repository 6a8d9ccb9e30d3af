// src/stats/tally.rs
use std::collections::BTreeMap;

/// Running statistics for one card in one pool (main deck or sideboard).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolTally {
    /// Fold events that counted as an inclusion.
    pub inclusions: u32,
    pub total_copies: u64,
    /// Every contributed count, in fold order. Needed for median and mode.
    pub copies: Vec<u32>,
}

impl PoolTally {
    pub fn record(&mut self, count: u32, include: bool) {
        if include {
            self.inclusions += 1;
        }
        self.total_copies += u64::from(count);
        self.copies.push(count);
    }

    pub fn is_empty(&self) -> bool {
        self.copies.is_empty()
    }

    /// `total_copies / inclusions`, 0 when the card was never included.
    pub fn average(&self) -> f64 {
        if self.inclusions == 0 {
            return 0.0;
        }
        self.total_copies as f64 / f64::from(self.inclusions)
    }

    pub fn median(&self) -> f64 {
        median(&self.copies)
    }

    pub fn mode(&self) -> u32 {
        mode(&self.copies)
    }
}

/// Middle value of the sorted sequence; mean of the two middles for even
/// lengths; 0 for an empty sequence.
pub fn median(values: &[u32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
    } else {
        f64::from(sorted[mid])
    }
}

/// Most frequent value; ties go to the smallest value. 0 for an empty sequence.
pub fn mode(values: &[u32]) -> u32 {
    let mut frequency: BTreeMap<u32, usize> = BTreeMap::new();
    for v in values {
        *frequency.entry(*v).or_insert(0) += 1;
    }

    // Ascending key order + strict comparison keeps the first (smallest) on ties.
    let mut best = (0u32, 0usize);
    for (value, freq) in frequency {
        if freq > best.1 {
            best = (value, freq);
        }
    }
    best.0
}
