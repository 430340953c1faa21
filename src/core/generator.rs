// src/core/generator.rs — Candidate assignment generation
//
// One call to `generate()` is one attempt. Each attempt builds its own
// gift-count ledger and receiver pool, so attempts never share state.

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::AssignmentPolicy;

/// Giver-by-category receiver matrix. `rows[g][k]` is the index of the
/// participant that giver `g` gives to in category `k`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMatrix {
    rows: Vec<Vec<usize>>,
}

impl CandidateMatrix {
    pub fn from_rows(rows: Vec<Vec<usize>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<usize>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn into_rows(self) -> Vec<Vec<usize>> {
        self.rows
    }
}

/// Result of a single generation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attempt {
    Complete(CandidateMatrix),
    /// A giver had no eligible receiver left. Retryable.
    Exhausted { giver: usize, category: usize },
}

/// Per-attempt bookkeeping.
struct AttemptState {
    /// Gift-count ledger, indexed by receiver.
    ledger: Vec<usize>,
    /// Receivers still in the pool.
    available: Vec<bool>,
    /// `claimed[k][r]`: receiver `r` already taken in category `k`.
    claimed: Vec<Vec<bool>>,
    cap: usize,
}

impl AttemptState {
    fn new(participants: usize, categories: usize, cap: usize) -> Self {
        Self {
            ledger: vec![0; participants],
            available: vec![true; participants],
            claimed: vec![vec![false; participants]; categories],
            cap,
        }
    }

    fn record(&mut self, receiver: usize, category: usize) {
        self.ledger[receiver] += 1;
        self.claimed[category][receiver] = true;
        if self.ledger[receiver] >= self.cap {
            self.available[receiver] = false;
        }
    }
}

pub struct Generator {
    participants: usize,
    categories: usize,
    cap: usize,
    column_aware: bool,
}

impl Generator {
    pub fn new(participants: usize, categories: usize, policy: &AssignmentPolicy) -> Self {
        Self {
            participants,
            categories,
            cap: policy.cap_for(categories),
            column_aware: policy.column_aware,
        }
    }

    /// Produce one candidate matrix, or report that this attempt ran dry.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Attempt {
        let mut state = AttemptState::new(self.participants, self.categories, self.cap);
        let mut rows = Vec::with_capacity(self.participants);
        let mut eligible = Vec::with_capacity(self.participants);

        for giver in 0..self.participants {
            let mut row: Vec<usize> = Vec::with_capacity(self.categories);

            for category in 0..self.categories {
                eligible.clear();
                eligible.extend((0..self.participants).filter(|&r| {
                    state.available[r]
                        && r != giver
                        && !row.contains(&r)
                        && !(self.column_aware && state.claimed[category][r])
                }));

                let Some(&receiver) = eligible.choose(rng) else {
                    return Attempt::Exhausted { giver, category };
                };

                row.push(receiver);
                state.record(receiver, category);
            }

            rows.push(row);
        }

        Attempt::Complete(CandidateMatrix { rows })
    }
}
