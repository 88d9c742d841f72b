use serde::{Deserialize, Serialize};

use crate::model::Clause;

/// Everything the table has established, held as a growing conjunction of
/// clauses. Strictly append-only: deduction accumulates and never retracts,
/// so queries can only become more informed over time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    clauses: Vec<Clause>,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one clause. Duplicates and tautologies are accepted as-is;
    /// nothing here rewrites or rejects.
    pub fn add_clause(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    pub fn extend(&mut self, delta: impl IntoIterator<Item = Clause>) {
        self.clauses.extend(delta);
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Card, Literal, Location};

    #[test]
    fn test_clauses_accumulate_in_insertion_order() {
        let a = Clause::unit(Literal::encode(Card::Rope, Location::CaseFile));
        let b = Clause::unit(-Literal::encode(Card::Rope, Location::Seat(Card::Plum)));
        let mut knowledge = KnowledgeBase::new();
        assert!(knowledge.is_empty());
        knowledge.add_clause(a.clone());
        knowledge.extend([b.clone(), a.clone()]);
        assert_eq!(knowledge.len(), 3);
        assert_eq!(knowledge.clauses(), &[a.clone(), b, a]);
    }
}
