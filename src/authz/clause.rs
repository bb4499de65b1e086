use std::fmt;

use crate::models::Resource;

use super::actor::Actor;
use super::primitives::Predicate;

/// A predicate, possibly negated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    pub predicate: Predicate,
    pub negated: bool,
}

pub fn is(predicate: Predicate) -> Literal {
    Literal {
        predicate,
        negated: false,
    }
}

pub fn not(predicate: Predicate) -> Literal {
    Literal {
        predicate,
        negated: true,
    }
}

impl Literal {
    pub fn holds(&self, actor: &Actor, resource: &Resource) -> bool {
        self.predicate.eval(actor, resource) != self.negated
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("¬")?;
        }
        write!(f, "{}", self.predicate)
    }
}

/// Conjunction of literals. A policy action allows when any clause holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn of(literals: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: literals.into_iter().collect(),
        }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Short-circuits on the first literal that does not hold.
    pub fn matches(&self, actor: &Actor, resource: &Resource) -> bool {
        self.literals.iter().all(|lit| lit.holds(actor, resource))
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, lit) in self.literals.iter().enumerate() {
            if i > 0 {
                f.write_str(" ∧ ")?;
            }
            write!(f, "{lit}")?;
        }
        Ok(())
    }
}
