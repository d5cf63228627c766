use tracing::debug;

use crate::solver::{
    domain::{Domain, DomainStore},
    heuristics::{
        value::{IdentityValueHeuristic, ValueOrderingHeuristic},
        variable::{MinimumRemainingValuesHeuristic, VariableSelectionHeuristic},
    },
    problem::{Problem, VariableId},
    propagation::propagate,
    stats::SearchStats,
    value::ValueEquality,
};

/// A partial mapping from variable to chosen value, built up by the search.
/// Complete when its size equals the problem's variable count.
pub type Assignment<V> = im::HashMap<VariableId, V>;

/// The backtracking search driver.
///
/// The engine interleaves variable selection, value choice, and
/// arc-consistency propagation: after each tentative assignment it narrows
/// the chosen variable to the candidate value in a branch-local snapshot of
/// the domain store and propagates, recursing only when propagation
/// survives. The first complete assignment found is returned; an exhausted
/// search tree yields `None`. There is no fatal path for well-formed input.
pub struct SolverEngine<V: ValueEquality> {
    variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
    value_heuristic: Box<dyn ValueOrderingHeuristic<V>>,
}

impl<V: ValueEquality> SolverEngine<V> {
    pub fn new(
        variable_heuristic: Box<dyn VariableSelectionHeuristic<V>>,
        value_heuristic: Box<dyn ValueOrderingHeuristic<V>>,
    ) -> Self {
        Self {
            variable_heuristic,
            value_heuristic,
        }
    }

    /// Attempts to solve the problem.
    ///
    /// Establishes arc consistency on a snapshot of the initial domains,
    /// then searches. Returns the first constraint-satisfying assignment of
    /// every variable, or `None` once the search space is exhausted;
    /// unsatisfiability is an answer, not an error.
    ///
    /// Search recursion depth is bounded by the variable count, which is a
    /// consideration for problems with very large variable sets.
    pub fn solve(&self, problem: &Problem<V>) -> (Option<Assignment<V>>, SearchStats) {
        let mut stats = SearchStats::default();
        let mut store = problem.initial_store().clone();

        if !propagate(problem, &mut store, &mut stats) {
            debug!("initial propagation proved the problem unsatisfiable");
            return (None, stats);
        }

        let assignment = self.search(problem, Assignment::new(), store, &mut stats);
        (assignment, stats)
    }

    fn search(
        &self,
        problem: &Problem<V>,
        assignment: Assignment<V>,
        store: DomainStore<V>,
        stats: &mut SearchStats,
    ) -> Option<Assignment<V>> {
        stats.nodes_visited += 1;

        if assignment.len() == problem.variables().len() {
            return Some(assignment);
        }

        let Some(var) = self
            .variable_heuristic
            .select_variable(problem, &assignment, &store)
        else {
            // Unreachable while the assignment is incomplete; treated as
            // exhaustion rather than a panic.
            return None;
        };

        let domain = store.get(var).unwrap().clone();
        for value in self.value_heuristic.order_values(&domain) {
            if !consistent_with_assignment(problem, &assignment, var, value) {
                continue;
            }

            // Branch-local snapshot: narrowing and propagation happen on a
            // copy, so a failed branch leaves the parent store untouched.
            let mut branch_store = store.clone();
            branch_store.set(var, Domain::singleton(value.clone()));

            if propagate(problem, &mut branch_store, stats) {
                let extended = assignment.update(var, value.clone());
                if let Some(found) = self.search(problem, extended, branch_store, stats) {
                    return Some(found);
                }
            }
            stats.backtracks += 1;
        }

        None
    }
}

/// Checks a candidate value against every already-assigned neighbor of
/// `var`. Unassigned neighbors are deliberately not checked here; pruning
/// against them is propagation's job.
fn consistent_with_assignment<V: ValueEquality>(
    problem: &Problem<V>,
    assignment: &Assignment<V>,
    var: VariableId,
    value: &V,
) -> bool {
    problem.neighbors_of(var).iter().all(|&neighbor| {
        assignment
            .get(&neighbor)
            .map_or(true, |assigned| problem.compatible(var, value, neighbor, assigned))
    })
}

impl<V: ValueEquality> Default for SolverEngine<V> {
    /// MRV variable selection with domain-order value iteration.
    fn default() -> Self {
        Self::new(
            Box::new(MinimumRemainingValuesHeuristic),
            Box::new(IdentityValueHeuristic),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;

    fn differ(_x: VariableId, vx: &i32, _y: VariableId, vy: &i32) -> bool {
        vx != vy
    }

    fn colouring_problem(
        variables: Vec<VariableId>,
        colours: Vec<i32>,
        edges: &[(VariableId, VariableId)],
    ) -> Problem<i32> {
        let domains = variables
            .iter()
            .map(|&var| (var, colours.iter().copied().collect()))
            .collect();
        let mut neighbors: HashMap<VariableId, Vec<VariableId>> = HashMap::new();
        for &(a, b) in edges {
            neighbors.entry(a).or_default().push(b);
            neighbors.entry(b).or_default().push(a);
        }
        Problem::new(variables, domains, neighbors, differ).unwrap()
    }

    fn assert_valid(problem: &Problem<i32>, assignment: &Assignment<i32>) {
        assert_eq!(assignment.len(), problem.variables().len());
        for &x in problem.variables() {
            for &y in problem.neighbors_of(x) {
                assert!(problem.compatible(x, &assignment[&x], y, &assignment[&y]));
            }
        }
    }

    #[test]
    fn solves_two_variable_not_equal() {
        let problem = colouring_problem(vec![0, 1], vec![1, 2], &[(0, 1)]);
        let (assignment, stats) = SolverEngine::default().solve(&problem);
        let assignment = assignment.unwrap();

        assert_valid(&problem, &assignment);
        // Deterministic heuristics: variable 0 first, domain order values.
        assert_eq!(assignment[&0], 1);
        assert_eq!(assignment[&1], 2);
        assert!(stats.nodes_visited >= 1);
    }

    #[test]
    fn reports_unsatisfiable_singleton_conflict() {
        let problem = colouring_problem(vec![0, 1], vec![1], &[(0, 1)]);
        let (assignment, stats) = SolverEngine::default().solve(&problem);
        assert_eq!(assignment, None);
        assert!(stats.propagation_failures >= 1);
    }

    #[test]
    fn triangle_needs_three_colours() {
        let edges = [(0, 1), (1, 2), (0, 2)];
        let two = colouring_problem(vec![0, 1, 2], vec![1, 2], &edges);
        let (assignment, _) = SolverEngine::default().solve(&two);
        assert_eq!(assignment, None);

        let three = colouring_problem(vec![0, 1, 2], vec![1, 2, 3], &edges);
        let (assignment, _) = SolverEngine::default().solve(&three);
        assert_valid(&three, &assignment.unwrap());
    }

    #[test]
    fn path_is_two_colourable() {
        let problem = colouring_problem(vec![0, 1, 2], vec![1, 2], &[(0, 1), (1, 2)]);
        let (assignment, _) = SolverEngine::default().solve(&problem);
        assert_valid(&problem, &assignment.unwrap());
    }

    #[test]
    fn empty_initial_domain_is_immediately_unsatisfiable() {
        let problem = colouring_problem(vec![0, 1], vec![], &[(0, 1)]);
        let (assignment, _) = SolverEngine::default().solve(&problem);
        assert_eq!(assignment, None);
    }

    #[test]
    fn unconstrained_variables_are_still_assigned() {
        let problem = colouring_problem(vec![0, 1], vec![5], &[]);
        let (assignment, _) = SolverEngine::default().solve(&problem);
        let assignment = assignment.unwrap();
        assert_eq!(assignment.len(), 2);
        assert_eq!(assignment[&0], 5);
        assert_eq!(assignment[&1], 5);
    }

    proptest! {
        /// Any returned assignment is complete and satisfies every edge,
        /// and the solver terminates on arbitrary small graphs.
        #[test]
        fn returned_assignments_are_complete_and_valid(
            num_vars in 2u32..8,
            num_colours in 1i32..4,
            raw_edges in proptest::collection::vec((0u32..8, 0u32..8), 0..16),
        ) {
            let variables: Vec<VariableId> = (0..num_vars).collect();
            let edges: Vec<(VariableId, VariableId)> = raw_edges
                .into_iter()
                .map(|(a, b)| (a % num_vars, b % num_vars))
                .filter(|(a, b)| a != b)
                .collect();
            let colours: Vec<i32> = (0..num_colours).collect();
            let problem = colouring_problem(variables, colours, &edges);

            let (assignment, _) = SolverEngine::default().solve(&problem);
            if let Some(assignment) = assignment {
                assert_valid(&problem, &assignment);
            }
        }
    }
}
