// src/core/types.rs — Core data types for the assignment engine

use std::fmt;

use crate::infra::config::AssignmentConfig;
use crate::infra::errors::SantaError;

/// Label used when rendering the single unnamed category.
pub const DEFAULT_CATEGORY_LABEL: &str = "Gift";

/// An assignment dimension. Runs without named categories use exactly one
/// `Default` category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Default,
    Named(String),
}

impl Category {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str(DEFAULT_CATEGORY_LABEL),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// One input participant, as supplied by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub address: Option<String>,
}

impl Participant {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// A category slot on a giver. `receiver` stays `None` until finalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub category: Category,
    pub receiver: Option<String>,
}

/// A participant in the giving role.
#[derive(Debug, Clone)]
pub struct Giver {
    name: String,
    address: Option<String>,
    slots: Vec<Slot>,
}

impl Giver {
    pub(crate) fn new(participant: Participant, categories: &[Category]) -> Self {
        Self {
            name: participant.name,
            address: participant.address,
            slots: categories
                .iter()
                .map(|category| Slot {
                    category: category.clone(),
                    receiver: None,
                })
                .collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The receiver assigned for `category`, if finalized.
    pub fn receiver_for(&self, category: &Category) -> Option<&str> {
        self.slots
            .iter()
            .find(|slot| &slot.category == category)
            .and_then(|slot| slot.receiver.as_deref())
    }

    /// `(category, receiver)` pairs in category order. Empty until finalized.
    pub fn assignments(&self) -> Vec<(&Category, &str)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.receiver.as_deref().map(|r| (&slot.category, r)))
            .collect()
    }

    /// Fill every slot, in category order. Only the finalizer calls this.
    pub(crate) fn assign(&mut self, receivers: Vec<String>) {
        for (slot, receiver) in self.slots.iter_mut().zip(receivers) {
            slot.receiver = Some(receiver);
        }
    }
}

/// Tunables for a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentPolicy {
    /// Maximum number of generate/validate cycles before giving up.
    pub max_attempts: u32,
    /// Ledger count at which a receiver is pruned from the pool.
    /// `None` means "the number of categories".
    pub fairness_cap: Option<usize>,
    /// Exclude receivers already claimed in the same category column.
    pub column_aware: bool,
}

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

impl Default for AssignmentPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            fairness_cap: None,
            column_aware: true,
        }
    }
}

impl From<&AssignmentConfig> for AssignmentPolicy {
    fn from(c: &AssignmentConfig) -> Self {
        Self {
            max_attempts: c.max_attempts,
            fairness_cap: c.fairness_cap,
            column_aware: c.column_aware,
        }
    }
}

impl AssignmentPolicy {
    /// The pruning threshold for a run with `categories` categories.
    pub fn cap_for(&self, categories: usize) -> usize {
        self.fairness_cap.unwrap_or(categories)
    }

    /// Reject policies that can never produce an assignment.
    pub fn check(&self, categories: usize) -> Result<(), SantaError> {
        if self.max_attempts == 0 {
            return Err(SantaError::Config(
                "max_attempts must be at least 1".into(),
            ));
        }
        let cap = self.cap_for(categories);
        if cap < categories {
            return Err(SantaError::Config(format!(
                "fairness_cap ({cap}) must be at least the number of categories ({categories})"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Default.to_string(), "Gift");
        assert_eq!(Category::named("Book").to_string(), "Book");
        assert!(Category::Default.is_default());
        assert!(!Category::named("Book").is_default());
    }

    #[test]
    fn test_giver_starts_unassigned() {
        let cats = vec![Category::named("Book"), Category::named("Game")];
        let giver = Giver::new(Participant::new("Alice"), &cats);
        assert_eq!(giver.slots().len(), 2);
        assert!(giver.assignments().is_empty());
        assert!(giver.receiver_for(&cats[0]).is_none());
    }

    #[test]
    fn test_giver_assign_in_category_order() {
        let cats = vec![Category::named("Book"), Category::named("Game")];
        let mut giver = Giver::new(Participant::new("Alice").with_address("a@x.org"), &cats);
        giver.assign(vec!["Bob".into(), "Carol".into()]);
        assert_eq!(giver.receiver_for(&cats[0]), Some("Bob"));
        assert_eq!(giver.receiver_for(&cats[1]), Some("Carol"));
        assert_eq!(giver.address(), Some("a@x.org"));
        let pairs: Vec<String> = giver
            .assignments()
            .iter()
            .map(|(c, r)| format!("{c}={r}"))
            .collect();
        assert_eq!(pairs, vec!["Book=Bob", "Game=Carol"]);
    }

    #[test]
    fn test_policy_cap_defaults_to_category_count() {
        let p = AssignmentPolicy::default();
        assert_eq!(p.cap_for(3), 3);
        let p = AssignmentPolicy {
            fairness_cap: Some(5),
            ..Default::default()
        };
        assert_eq!(p.cap_for(3), 5);
    }

    #[test]
    fn test_policy_check() {
        assert!(AssignmentPolicy::default().check(2).is_ok());
        let zero = AssignmentPolicy {
            max_attempts: 0,
            ..Default::default()
        };
        assert!(zero.check(1).is_err());
        let tight = AssignmentPolicy {
            fairness_cap: Some(1),
            ..Default::default()
        };
        assert!(tight.check(1).is_ok());
        assert!(tight.check(2).is_err());
    }

    #[test]
    fn test_policy_from_config() {
        let c = AssignmentConfig {
            max_attempts: 12,
            fairness_cap: Some(4),
            column_aware: false,
            seed: Some(1),
        };
        let p = AssignmentPolicy::from(&c);
        assert_eq!(p.max_attempts, 12);
        assert_eq!(p.fairness_cap, Some(4));
        assert!(!p.column_aware);
    }
}
