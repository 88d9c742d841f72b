use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::literal::Literal;

/// A disjunction of literals. Literals are kept in ascending order and
/// deduplicated, so equal clauses compare, serialize, and iterate
/// identically no matter how they were built.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Clause(BTreeSet<Literal>);

impl Clause {
    pub fn new(literals: impl IntoIterator<Item = Literal>) -> Self {
        Self(literals.into_iter().collect())
    }

    pub fn unit(literal: Literal) -> Self {
        Self::new([literal])
    }

    /// An empty clause is the unsatisfiable disjunction of nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, literal: Literal) -> bool {
        self.0.contains(&literal)
    }

    /// Smallest literal, by the packed integer order.
    pub fn first(&self) -> Option<Literal> {
        self.0.iter().next().copied()
    }

    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.0.iter().copied()
    }

    /// Copy of this clause with one literal struck out.
    pub fn without(&self, literal: Literal) -> Clause {
        let mut literals = self.0.clone();
        literals.remove(&literal);
        Clause(literals)
    }
}

impl FromIterator<Literal> for Clause {
    fn from_iter<I: IntoIterator<Item = Literal>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (position, literal) in self.0.iter().enumerate() {
            if position > 0 {
                write!(f, " | ")?;
            }
            write!(f, "{}", literal)?;
        }
        write!(f, ")")
    }
}

impl fmt::Debug for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
