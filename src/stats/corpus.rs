// src/stats/corpus.rs
use std::collections::{HashMap, HashSet};

use super::summary::{PoolSummary, Summary, SummaryRow};
use super::tally::PoolTally;
use crate::decklist::{Card, Decklist};

/// How inclusion counts are incremented while folding a decklist.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InclusionCounting {
    /// Every entry line counts. A key listed twice in one decklist is counted
    /// as two inclusions; this reproduces the historical card matrix numbers.
    #[default]
    PerEntry,
    /// A key counts at most once per decklist and pool. Copies are still
    /// summed over every entry.
    PerDecklist,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pool {
    Main,
    Sideboard,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardTally {
    pub main: PoolTally,
    pub sideboard: PoolTally,
}

impl CardTally {
    fn pool_mut(&mut self, pool: Pool) -> &mut PoolTally {
        match pool {
            Pool::Main => &mut self.main,
            Pool::Sideboard => &mut self.sideboard,
        }
    }
}

/// Aggregate state for a corpus of decklists. Built by folding decklists one
/// at a time, then turned into a [`Summary`] with [`CorpusStats::finalize`].
#[derive(Clone, Debug, Default)]
pub struct CorpusStats {
    counting: InclusionCounting,
    cards: HashMap<String, CardTally>,
    // First-seen order per pool; decides row order before sorting.
    main_order: Vec<String>,
    sideboard_order: Vec<String>,
    total_decklists: usize,
}

impl CorpusStats {
    pub fn new(counting: InclusionCounting) -> Self {
        Self { counting, ..Self::default() }
    }

    pub fn total_decklists(&self) -> usize {
        self.total_decklists
    }

    /// Distinct card keys seen in either pool.
    pub fn unique_cards(&self) -> usize {
        self.cards.len()
    }

    pub fn tally(&self, key: &str) -> Option<&CardTally> {
        self.cards.get(key)
    }

    /// Every folded decklist counts toward the total, even one with no cards.
    pub fn fold(&mut self, decklist: &Decklist) {
        self.fold_pool(Pool::Main, decklist.main_pool());
        self.fold_pool(Pool::Sideboard, decklist.sideboard_pool());
        self.total_decklists += 1;
    }

    fn fold_pool<'a, I>(&mut self, pool: Pool, cards: I)
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut seen: HashSet<String> = HashSet::new();

        for card in cards {
            let key = card.key();
            let include = match self.counting {
                InclusionCounting::PerEntry => true,
                InclusionCounting::PerDecklist => seen.insert(key.clone()),
            };

            let tally = self.cards.entry(key.clone()).or_default().pool_mut(pool);
            let first_seen = tally.is_empty();
            tally.record(card.count, include);

            if first_seen {
                match pool {
                    Pool::Main => self.main_order.push(key),
                    Pool::Sideboard => self.sideboard_order.push(key),
                }
            }
        }
    }

    /// One row per card key: main-deck keys in first-seen order, then
    /// sideboard-only keys, then sorted by main and sideboard inclusion.
    pub fn finalize(&self) -> Summary {
        let total = self.total_decklists;
        let sideboard_only = self
            .sideboard_order
            .iter()
            .filter(|key| self.cards.get(*key).is_some_and(|t| t.main.is_empty()));

        let mut rows: Vec<SummaryRow> = self
            .main_order
            .iter()
            .chain(sideboard_only)
            .filter_map(|key| {
                let tally = self.cards.get(key)?;
                Some(SummaryRow {
                    card_name: key.clone(),
                    main: PoolSummary::from_tally(&tally.main, total),
                    sideboard: PoolSummary::from_tally(&tally.sideboard, total),
                })
            })
            .collect();

        super::summary::sort_primary(&mut rows);
        Summary { rows, total_decklists: total }
    }
}
