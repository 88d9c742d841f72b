use log::trace;

use crate::model::{Clause, Literal, TriState};

use super::knowledge_base::KnowledgeBase;

/// True iff the stored clauses plus the assumption literals admit at least
/// one satisfying assignment. Runs on a private snapshot; solving never
/// writes anything back.
pub fn solve(knowledge: &KnowledgeBase, assumptions: &[Literal]) -> bool {
    let mut clauses: Vec<Clause> = Vec::with_capacity(assumptions.len() + knowledge.len());
    clauses.extend(assumptions.iter().copied().map(Clause::unit));
    clauses.extend(knowledge.clauses().iter().cloned());
    let satisfiable = dpll(&clauses);
    trace!(
        target: "oracle",
        "solve {:?} over {} clauses -> {}",
        assumptions,
        knowledge.len(),
        satisfiable
    );
    satisfiable
}

/// Like `solve`, but with a candidate clause delta instead of assumption
/// literals. Used to vet a move's clauses before anything is committed.
pub fn solve_with(knowledge: &KnowledgeBase, delta: &[Clause]) -> bool {
    let mut clauses: Vec<Clause> = Vec::with_capacity(delta.len() + knowledge.len());
    clauses.extend(delta.iter().cloned());
    clauses.extend(knowledge.clauses().iter().cloned());
    dpll(&clauses)
}

/// Entailment query. `False` means knowledge refutes the literal, `True`
/// means it refutes the negation, `Unknown` means both polarities are still
/// open. An unsatisfiable first solve call short-circuits the second.
pub fn test(knowledge: &KnowledgeBase, literal: Literal) -> TriState {
    if !solve(knowledge, &[literal]) {
        return TriState::False;
    }
    if !solve(knowledge, &[-literal]) {
        return TriState::True;
    }
    TriState::Unknown
}

/// Plain recursive DPLL over an immutable snapshot. The branch literal is
/// the first literal of the first shortest remaining clause, so unit
/// clauses always resolve before anything wider and results are the same
/// run to run. Satisfying polarity is tried first. Each recursion drops
/// satisfied clauses and strikes the losing polarity from the rest, so the
/// variable count strictly shrinks and the search terminates.
fn dpll(clauses: &[Clause]) -> bool {
    let mut pick: Option<Literal> = None;
    let mut shortest = usize::MAX;
    for clause in clauses {
        let len = clause.len();
        if len == 0 {
            return false;
        }
        if len < shortest {
            shortest = len;
            pick = clause.first();
            if len == 1 {
                break;
            }
        }
    }
    let literal = match pick {
        Some(literal) => literal,
        None => return true,
    };
    for candidate in [literal, -literal] {
        let reduced: Vec<Clause> = clauses
            .iter()
            .filter(|clause| !clause.contains(candidate))
            .map(|clause| clause.without(-candidate))
            .collect();
        if dpll(&reduced) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Card, Location};
    use crate::tests::UsingLogger;
    use test_context::test_context;

    fn lit(card: Card, location: Location) -> Literal {
        Literal::encode(card, location)
    }

    fn file(card: Card) -> Literal {
        lit(card, Location::CaseFile)
    }

    #[test]
    fn test_empty_knowledge_is_satisfiable() {
        let knowledge = KnowledgeBase::new();
        assert!(solve(&knowledge, &[]));
        assert!(solve(&knowledge, &[file(Card::Rope)]));
    }

    #[test]
    fn test_empty_clause_is_unsatisfiable() {
        let mut knowledge = KnowledgeBase::new();
        knowledge.add_clause(Clause::new([]));
        assert!(!solve(&knowledge, &[]));
    }

    #[test]
    fn test_opposing_units_are_unsatisfiable() {
        let mut knowledge = KnowledgeBase::new();
        knowledge.add_clause(Clause::unit(file(Card::Rope)));
        knowledge.add_clause(Clause::unit(-file(Card::Rope)));
        assert!(!solve(&knowledge, &[]));
    }

    #[test]
    fn test_assumptions_conflict_without_sticking() {
        let mut knowledge = KnowledgeBase::new();
        knowledge.add_clause(Clause::unit(file(Card::Rope)));
        assert!(!solve(&knowledge, &[-file(Card::Rope)]));
        // the failed solve left no trace
        assert_eq!(knowledge.len(), 1);
        assert!(solve(&knowledge, &[file(Card::Rope)]));
    }

    #[test_context(UsingLogger)]
    #[test]
    fn test_reports_entailment_both_ways(_: &mut UsingLogger) {
        let a = file(Card::Scarlett);
        let b = file(Card::Rope);
        let mut knowledge = KnowledgeBase::new();
        knowledge.add_clause(Clause::unit(a));
        knowledge.add_clause(Clause::new([-a, b]));
        // a and everything it implies
        assert_eq!(test(&knowledge, a), TriState::True);
        assert_eq!(test(&knowledge, b), TriState::True);
        assert_eq!(test(&knowledge, -a), TriState::False);
        assert_eq!(test(&knowledge, -b), TriState::False);
        // an unconstrained variable stays open
        let c = file(Card::Kitchen);
        assert_eq!(test(&knowledge, c), TriState::Unknown);
        assert_eq!(test(&knowledge, -c), TriState::Unknown);
    }

    #[test]
    fn test_is_idempotent() {
        let mut knowledge = KnowledgeBase::new();
        knowledge.add_clause(Clause::unit(file(Card::Wrench)));
        let literal = file(Card::Wrench);
        let first = test(&knowledge, literal);
        assert_eq!(first, TriState::True);
        assert_eq!(test(&knowledge, literal), first);
        assert_eq!(test(&knowledge, literal), first);
        assert_eq!(knowledge.len(), 1);
    }

    #[test]
    fn test_tautologies_and_duplicates_change_nothing() {
        let a = file(Card::Plum);
        let mut knowledge = KnowledgeBase::new();
        knowledge.add_clause(Clause::new([a, -a]));
        knowledge.add_clause(Clause::new([a, -a]));
        assert!(solve(&knowledge, &[]));
        assert_eq!(test(&knowledge, a), TriState::Unknown);
    }

    #[test]
    fn test_disjunctions_only_bind_when_forced() {
        let a = lit(Card::Dagger, Location::Seat(Card::Scarlett));
        let b = lit(Card::Dagger, Location::Seat(Card::Green));
        let mut knowledge = KnowledgeBase::new();
        knowledge.add_clause(Clause::new([a, b]));
        assert_eq!(test(&knowledge, a), TriState::Unknown);
        knowledge.add_clause(Clause::unit(-b));
        assert_eq!(test(&knowledge, a), TriState::True);
    }

    #[test]
    fn test_solve_with_vets_a_delta_without_committing() {
        let a = file(Card::Candlestick);
        let mut knowledge = KnowledgeBase::new();
        knowledge.add_clause(Clause::unit(a));
        assert!(solve_with(&knowledge, &[Clause::unit(a)]));
        assert!(!solve_with(&knowledge, &[Clause::unit(-a)]));
        assert_eq!(knowledge.len(), 1);
    }
}
