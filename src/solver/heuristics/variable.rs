//! Defines a collection of standard heuristics for selecting which variable
//! to branch on next during the search process.

use crate::solver::{
    domain::DomainStore,
    engine::Assignment,
    problem::{Problem, VariableId},
    value::ValueEquality,
};

/// A trait for variable-selection heuristics.
///
/// Implementors of this trait define a strategy for choosing which
/// unassigned variable the solver should branch on next. A good heuristic
/// can dramatically improve solver performance.
pub trait VariableSelectionHeuristic<V: ValueEquality> {
    /// Selects the next variable to be assigned, or `None` if every
    /// variable is already in the assignment.
    fn select_variable(
        &self,
        problem: &Problem<V>,
        assignment: &Assignment<V>,
        store: &DomainStore<V>,
    ) -> Option<VariableId>;
}

/// Selects the first unassigned variable in declaration order.
///
/// This provides a basic, deterministic way to select variables.
pub struct SelectFirstHeuristic;

impl<V: ValueEquality> VariableSelectionHeuristic<V> for SelectFirstHeuristic {
    fn select_variable(
        &self,
        problem: &Problem<V>,
        assignment: &Assignment<V>,
        _store: &DomainStore<V>,
    ) -> Option<VariableId> {
        problem
            .variables()
            .iter()
            .copied()
            .find(|var| !assignment.contains_key(var))
    }
}

/// Selects the unassigned variable with the Minimum Remaining Values (MRV)
/// in its domain.
///
/// This is a "fail-first" strategy that prioritizes the most constrained
/// variable, so contradictions surface near the top of the search tree.
/// Ties keep the variable declared earliest, which makes selection
/// deterministic across runs and platforms.
pub struct MinimumRemainingValuesHeuristic;

impl<V: ValueEquality> VariableSelectionHeuristic<V> for MinimumRemainingValuesHeuristic {
    fn select_variable(
        &self,
        problem: &Problem<V>,
        assignment: &Assignment<V>,
        store: &DomainStore<V>,
    ) -> Option<VariableId> {
        let mut best: Option<(VariableId, usize)> = None;
        for &var in problem.variables() {
            if assignment.contains_key(&var) {
                continue;
            }
            let size = store.get(var).unwrap().len();
            // Strictly-smaller keeps the earliest declared variable on ties.
            if best.map_or(true, |(_, smallest)| size < smallest) {
                best = Some((var, size));
            }
        }
        best.map(|(var, _)| var)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::domain::Domain;

    fn anything_goes(_x: VariableId, _vx: &i32, _y: VariableId, _vy: &i32) -> bool {
        true
    }

    fn problem_with_domains(domains: Vec<(VariableId, Vec<i32>)>) -> Problem<i32> {
        let variables = domains.iter().map(|(var, _)| *var).collect();
        let store = domains
            .into_iter()
            .map(|(var, values)| (var, Domain::new(values)))
            .collect();
        Problem::new(variables, store, HashMap::new(), anything_goes).unwrap()
    }

    #[test]
    fn mrv_picks_smallest_domain() {
        let problem =
            problem_with_domains(vec![(0, vec![1, 2, 3]), (1, vec![1, 2]), (2, vec![1, 2, 3])]);
        let selected = MinimumRemainingValuesHeuristic.select_variable(
            &problem,
            &Assignment::new(),
            problem.initial_store(),
        );
        assert_eq!(selected, Some(1));
    }

    #[test]
    fn mrv_breaks_ties_by_declaration_order() {
        let problem = problem_with_domains(vec![(5, vec![1, 2]), (3, vec![1, 2]), (4, vec![1, 2])]);
        let selected = MinimumRemainingValuesHeuristic.select_variable(
            &problem,
            &Assignment::new(),
            problem.initial_store(),
        );
        assert_eq!(selected, Some(5));
    }

    #[test]
    fn mrv_skips_assigned_variables() {
        let problem = problem_with_domains(vec![(0, vec![1]), (1, vec![1, 2])]);
        let assignment = Assignment::unit(0, 1);
        let selected = MinimumRemainingValuesHeuristic.select_variable(
            &problem,
            &assignment,
            problem.initial_store(),
        );
        assert_eq!(selected, Some(1));
    }

    #[test]
    fn nothing_selected_once_assignment_is_complete() {
        let problem = problem_with_domains(vec![(0, vec![1])]);
        let assignment = Assignment::unit(0, 1);
        let selected = MinimumRemainingValuesHeuristic.select_variable(
            &problem,
            &assignment,
            problem.initial_store(),
        );
        assert_eq!(selected, None);
    }

    #[test]
    fn select_first_follows_declaration_order() {
        let problem = problem_with_domains(vec![(2, vec![1, 2]), (0, vec![1])]);
        let selected = SelectFirstHeuristic.select_variable(
            &problem,
            &Assignment::new(),
            problem.initial_store(),
        );
        assert_eq!(selected, Some(2));
    }
}
