use super::trial::Outcome;
use super::trial::Trial;
use crate::cards::category::Category;

/// Running counts over completed trials.
///
/// Merging is commutative and associative, so batches can fold their own
/// trials locally and combine in any order without changing the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    wins: usize,
    ties: usize,
    losses: usize,
    categories: [usize; Category::N],
}

impl Default for Tally {
    fn default() -> Self {
        Self {
            wins: 0,
            ties: 0,
            losses: 0,
            categories: [0; Category::N],
        }
    }
}

impl Tally {
    pub fn absorb(&mut self, trial: &Trial) {
        match trial.outcome() {
            Outcome::Win => self.wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::Loss => self.losses += 1,
        }
        self.categories[trial.category().index()] += 1;
    }

    pub fn merge(self, rhs: Self) -> Self {
        let mut categories = self.categories;
        for (mine, theirs) in categories.iter_mut().zip(rhs.categories) {
            *mine += theirs;
        }
        Self {
            wins: self.wins + rhs.wins,
            ties: self.ties + rhs.ties,
            losses: self.losses + rhs.losses,
            categories,
        }
    }

    pub fn total(&self) -> usize {
        self.wins + self.ties + self.losses
    }
    pub fn wins(&self) -> usize {
        self.wins
    }
    pub fn ties(&self) -> usize {
        self.ties
    }
    pub fn losses(&self) -> usize {
        self.losses
    }
    pub fn categories(&self) -> [usize; Category::N] {
        self.categories
    }
}
