use std::collections::{HashMap, HashSet};

use crate::{
    error::{Error, Result},
    solver::{domain::DomainStore, value::ValueEquality},
};

/// Identifies a variable within a problem.
///
/// Ids are opaque to the engine; a frontend maps its own notion of a
/// variable (a cell, a region, a slot) onto them. The order in which ids
/// are declared to [`Problem::new`] is the enumeration order used to break
/// heuristic ties.
pub type VariableId = u32;

/// The binary compatibility predicate at the heart of a problem.
///
/// Implementations must be pure: no side effects, no dependence on call
/// order, and callable any number of times. For any pair of variables that
/// are not actually constrained together the predicate must return `true`
/// (vacuous compatibility). The engine only ever calls it with values drawn
/// from the declared domains.
///
/// Any `Fn(VariableId, &V, VariableId, &V) -> bool` closure qualifies via
/// the blanket impl.
pub trait ConstraintPredicate<V>: 'static {
    /// Whether assigning `vx` to `x` is compatible with assigning `vy` to `y`.
    fn compatible(&self, x: VariableId, vx: &V, y: VariableId, vy: &V) -> bool;
}

impl<V, F> ConstraintPredicate<V> for F
where
    F: Fn(VariableId, &V, VariableId, &V) -> bool + 'static,
{
    fn compatible(&self, x: VariableId, vx: &V, y: VariableId, vy: &V) -> bool {
        self(x, vx, y, vy)
    }
}

/// An immutable description of a binary CSP instance.
///
/// A problem is the four values every frontend must produce: the ordered
/// variable list, an initial domain per variable, the constraint predicate,
/// and the neighbor graph recording which variable pairs are constrained
/// together. It is constructed once per solve request; all mutable solving
/// state lives in [`DomainStore`] snapshots derived from it.
///
/// The neighbor graph is expected to be symmetric (if `b` is listed for
/// `a`, `a` must be listed for `b`). This is not verified: a one-sided
/// graph yields one-sided pruning and is a caller error.
pub struct Problem<V: ValueEquality> {
    variables: Vec<VariableId>,
    domains: DomainStore<V>,
    neighbors: HashMap<VariableId, Vec<VariableId>>,
    predicate: Box<dyn ConstraintPredicate<V>>,
}

impl<V: ValueEquality> Problem<V> {
    /// Builds a problem, validating its shape.
    ///
    /// Every declared variable must have a domain entry (an *empty* domain
    /// is legal and simply makes the problem immediately unsatisfiable),
    /// and neighbor lists may only reference declared variables.
    pub fn new(
        variables: Vec<VariableId>,
        domains: DomainStore<V>,
        neighbors: HashMap<VariableId, Vec<VariableId>>,
        predicate: impl ConstraintPredicate<V>,
    ) -> Result<Self> {
        let declared: HashSet<VariableId> = variables.iter().copied().collect();
        for &var in &variables {
            if !domains.contains_var(var) {
                return Err(Error::MissingDomain(var));
            }
        }
        for (&var, listed) in &neighbors {
            if !declared.contains(&var) {
                return Err(Error::UndeclaredVariable(var));
            }
            if let Some(&unknown) = listed.iter().find(|n| !declared.contains(*n)) {
                return Err(Error::UndeclaredVariable(unknown));
            }
        }

        Ok(Self {
            variables,
            domains,
            neighbors,
            predicate: Box::new(predicate),
        })
    }

    /// The declared variables, in enumeration order.
    pub fn variables(&self) -> &[VariableId] {
        &self.variables
    }

    /// The variables `var` shares a constraint with. A variable with no
    /// recorded neighbors contributes no arcs and is trivially consistent.
    pub fn neighbors_of(&self, var: VariableId) -> &[VariableId] {
        self.neighbors
            .get(&var)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn compatible(&self, x: VariableId, vx: &V, y: VariableId, vy: &V) -> bool {
        self.predicate.compatible(x, vx, y, vy)
    }

    /// The initial domains, as supplied by the frontend. Solving never
    /// mutates these; the engine works on clones.
    pub fn initial_store(&self) -> &DomainStore<V> {
        &self.domains
    }
}

impl<V: ValueEquality> std::fmt::Debug for Problem<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Problem")
            .field("variables", &self.variables)
            .field("domains", &self.domains)
            .field("neighbors", &self.neighbors)
            .finish_non_exhaustive()
    }
}
