// src/core/registry.rs — Participant registry
//
// Every participant is both a giver and a potential receiver. Receivers are
// referenced by their index into the giver list.

use std::collections::{HashMap, HashSet};

use super::types::{Category, Giver, Participant};
use crate::infra::errors::SantaError;

#[derive(Debug, Clone)]
pub struct Registry {
    givers: Vec<Giver>,
    categories: Vec<Category>,
    index: HashMap<String, usize>,
    finalized: bool,
}

impl Registry {
    /// Build a registry, rejecting structurally invalid input.
    ///
    /// An empty category list becomes the single default category.
    pub fn new(
        participants: Vec<Participant>,
        categories: Vec<Category>,
    ) -> Result<Self, SantaError> {
        let categories = if categories.is_empty() {
            vec![Category::Default]
        } else {
            categories
        };

        let mut seen_categories = HashSet::new();
        for category in &categories {
            match category {
                Category::Named(name) if name.trim().is_empty() => {
                    return Err(SantaError::EmptyName)
                }
                Category::Default if categories.len() > 1 => {
                    return Err(SantaError::Config(
                        "the default category cannot be mixed with named categories".into(),
                    ))
                }
                _ => {}
            }
            if !seen_categories.insert(category) {
                return Err(SantaError::DuplicateCategory {
                    name: category.to_string(),
                });
            }
        }

        let mut index = HashMap::with_capacity(participants.len());
        for (i, participant) in participants.iter().enumerate() {
            if participant.name.trim().is_empty() {
                return Err(SantaError::EmptyName);
            }
            if index.insert(participant.name.clone(), i).is_some() {
                return Err(SantaError::DuplicateParticipant {
                    name: participant.name.clone(),
                });
            }
        }

        if participants.len() <= categories.len() {
            return Err(SantaError::TooFewParticipants {
                participants: participants.len(),
                categories: categories.len(),
            });
        }

        let givers = participants
            .into_iter()
            .map(|p| Giver::new(p, &categories))
            .collect();

        Ok(Self {
            givers,
            categories,
            index,
            finalized: false,
        })
    }

    /// Givers in input order.
    pub fn givers(&self) -> &[Giver] {
        &self.givers
    }

    pub fn giver(&self, name: &str) -> Option<&Giver> {
        self.index.get(name).map(|&i| &self.givers[i])
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.givers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.givers.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }

    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.givers.get(index).map(Giver::name)
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Fails with the first giver lacking a contact address.
    pub fn require_addresses(&self) -> Result<(), SantaError> {
        match self.givers.iter().find(|g| g.address().is_none()) {
            Some(giver) => Err(SantaError::MissingAddress {
                name: giver.name().to_string(),
            }),
            None => Ok(()),
        }
    }

    pub(crate) fn givers_mut(&mut self) -> &mut [Giver] {
        &mut self.givers
    }

    pub(crate) fn mark_finalized(&mut self) {
        self.finalized = true;
    }
}
