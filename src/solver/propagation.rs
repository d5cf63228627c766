//! Arc-consistency propagation (AC-3).

use tracing::debug;

use crate::solver::{
    domain::DomainStore,
    problem::{Problem, VariableId},
    stats::SearchStats,
    value::ValueEquality,
    work_list::WorkList,
};

/// Narrows `store` until it is arc-consistent with respect to `problem`.
///
/// Returns `false` iff propagation emptied some domain, proving the store
/// unsatisfiable. `true` means every remaining value has at least one
/// supporting value in each neighbor's domain, a necessary but not
/// sufficient condition for solvability, so a search phase may still be
/// required.
///
/// The store is narrowed in place; values are only ever removed. Calling
/// this again on an already-consistent store removes nothing and returns
/// `true`.
pub fn propagate<V: ValueEquality>(
    problem: &Problem<V>,
    store: &mut DomainStore<V>,
    stats: &mut SearchStats,
) -> bool {
    let mut worklist = WorkList::new();
    for &x in problem.variables() {
        for &y in problem.neighbors_of(x) {
            worklist.push_back(x, y);
        }
    }

    while let Some((x, y)) = worklist.pop_front() {
        if revise(problem, x, y, store, stats) {
            if store.get(x).unwrap().is_empty() {
                stats.propagation_failures += 1;
                debug!(variable = x, "domain emptied, propagation failed");
                return false;
            }
            // x lost values, so arcs pointing at x must be rechecked. The
            // arc from y is already satisfied by construction.
            for &k in problem.neighbors_of(x) {
                if k != y {
                    worklist.push_back(k, x);
                }
            }
        }
    }

    true
}

/// Removes every value of `x` with no supporting value in `y`'s domain.
/// Returns whether anything was removed.
fn revise<V: ValueEquality>(
    problem: &Problem<V>,
    x: VariableId,
    y: VariableId,
    store: &mut DomainStore<V>,
    stats: &mut SearchStats,
) -> bool {
    stats.revise_calls += 1;

    let y_domain = store.get(y).unwrap().clone();
    let x_domain = store.get(x).unwrap();
    let before = x_domain.len();
    let narrowed =
        x_domain.retain(|vx| y_domain.iter().any(|vy| problem.compatible(x, vx, y, vy)));

    if narrowed.len() < before {
        stats.values_pruned += (before - narrowed.len()) as u64;
        store.set(x, narrowed);
        true
    } else {
        false
    }
}
