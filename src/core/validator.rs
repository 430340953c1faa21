// src/core/validator.rs — Certifies candidate matrices

use std::collections::HashMap;
use std::fmt;

use super::generator::{Attempt, CandidateMatrix};

/// Why a candidate was turned down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Exhausted { giver: usize, category: usize },
    Empty,
    RaggedRows { giver: usize, expected: usize, found: usize },
    SelfAssigned { giver: usize, category: usize },
    UnknownReceiver { giver: usize, receiver: usize },
    RepeatedReceiver { giver: usize, receiver: usize },
    ColumnConflict { category: usize, receiver: usize, first: usize, second: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted { giver, category } => {
                write!(f, "giver {giver} ran out of receivers at category {category}")
            }
            Self::Empty => write!(f, "empty matrix"),
            Self::RaggedRows {
                giver,
                expected,
                found,
            } => write!(f, "giver {giver} has {found} entries, expected {expected}"),
            Self::SelfAssigned { giver, category } => {
                write!(f, "giver {giver} assigned to self at category {category}")
            }
            Self::UnknownReceiver { giver, receiver } => {
                write!(f, "giver {giver} names unknown receiver {receiver}")
            }
            Self::RepeatedReceiver { giver, receiver } => {
                write!(f, "giver {giver} gives to {receiver} more than once")
            }
            Self::ColumnConflict {
                category,
                receiver,
                first,
                second,
            } => write!(
                f,
                "receiver {receiver} claimed twice at category {category} (givers {first} and {second})"
            ),
        }
    }
}

/// A matrix that passed validation. Only `validate()` constructs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertifiedMatrix(CandidateMatrix);

impl CertifiedMatrix {
    pub fn matrix(&self) -> &CandidateMatrix {
        &self.0
    }

    pub(crate) fn into_inner(self) -> CandidateMatrix {
        self.0
    }
}

/// Check a generation attempt against every structural invariant.
///
/// Every row must hold exactly `categories` receivers.
pub fn validate(attempt: Attempt, categories: usize) -> Result<CertifiedMatrix, Rejection> {
    let matrix = match attempt {
        Attempt::Complete(matrix) => matrix,
        Attempt::Exhausted { giver, category } => {
            return Err(Rejection::Exhausted { giver, category })
        }
    };

    let rows = matrix.rows();
    if rows.is_empty() || categories == 0 {
        return Err(Rejection::Empty);
    }

    if let Some((giver, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != categories) {
        return Err(Rejection::RaggedRows {
            giver,
            expected: categories,
            found: row.len(),
        });
    }

    let mut claims: HashMap<(usize, usize), usize> =
        HashMap::with_capacity(rows.len() * categories);

    for (giver, row) in rows.iter().enumerate() {
        for (category, &receiver) in row.iter().enumerate() {
            if receiver >= rows.len() {
                return Err(Rejection::UnknownReceiver { giver, receiver });
            }
            if receiver == giver {
                return Err(Rejection::SelfAssigned { giver, category });
            }
            if row[..category].contains(&receiver) {
                return Err(Rejection::RepeatedReceiver { giver, receiver });
            }
            if let Some(&first) = claims.get(&(category, receiver)) {
                return Err(Rejection::ColumnConflict {
                    category,
                    receiver,
                    first,
                    second: giver,
                });
            }
            claims.insert((category, receiver), giver);
        }
    }

    Ok(CertifiedMatrix(matrix))
}
