use std::collections::HashMap;

use crate::errors::PolicyError;
use crate::models::{Resource, ResourceKind};

use super::actor::Actor;
use super::clause::Clause;

/// Action table for one resource kind: each action maps to an ordered
/// disjunction of clauses. There are no deny rules.
#[derive(Debug, Clone)]
pub struct Policy {
    kind: ResourceKind,
    rules: HashMap<&'static str, Vec<Clause>>,
}

impl Policy {
    pub fn builder(kind: ResourceKind) -> PolicyBuilder {
        PolicyBuilder {
            kind,
            rules: Vec::new(),
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn rule(&self, action: &str) -> Option<&[Clause]> {
        self.rules.get(action).map(Vec::as_slice)
    }

    /// Action names in lexical order.
    pub fn actions(&self) -> Vec<&'static str> {
        let mut actions: Vec<&'static str> = self.rules.keys().copied().collect();
        actions.sort_unstable();
        actions
    }

    /// Index of the first clause of `action` that holds, `None` when the
    /// action is unknown or nothing matches.
    pub fn first_match(&self, action: &str, actor: &Actor, resource: &Resource) -> Option<usize> {
        self.rule(action)?
            .iter()
            .position(|clause| clause.matches(actor, resource))
    }
}

#[derive(Debug, Clone)]
pub struct PolicyBuilder {
    kind: ResourceKind,
    rules: Vec<(&'static str, Vec<Clause>)>,
}

impl PolicyBuilder {
    /// Appends `clause` to the disjunction for `action`.
    pub fn allow(mut self, action: &'static str, clause: Clause) -> Self {
        match self.rules.iter_mut().find(|(name, _)| *name == action) {
            Some((_, clauses)) => clauses.push(clause),
            None => self.rules.push((action, vec![clause])),
        }
        self
    }

    /// Adds one single-literal clause per literal, i.e. `a ∨ b ∨ …`.
    pub fn allow_any(
        mut self,
        action: &'static str,
        literals: impl IntoIterator<Item = super::clause::Literal>,
    ) -> Self {
        for literal in literals {
            self = self.allow(action, Clause::of([literal]));
        }
        self
    }

    pub fn build(self) -> Result<Policy, PolicyError> {
        if self.rules.is_empty() {
            return Err(PolicyError::EmptyPolicy(self.kind));
        }

        let mut rules = HashMap::with_capacity(self.rules.len());
        for (action, clauses) in self.rules {
            if clauses.iter().any(Clause::is_empty) {
                return Err(PolicyError::EmptyClause {
                    kind: self.kind,
                    action,
                });
            }
            rules.insert(action, clauses);
        }

        Ok(Policy {
            kind: self.kind,
            rules,
        })
    }
}
