use crate::solver::{domain::Domain, value::ValueEquality};

/// A trait for strategies that determine the order of values to try for a
/// variable.
pub trait ValueOrderingHeuristic<V: ValueEquality> {
    /// Given the domain of the variable being branched on, returns an
    /// iterator over its values in the order they should be tried.
    fn order_values<'a>(&self, domain: &'a Domain<V>) -> Box<dyn Iterator<Item = &'a V> + 'a>;
}

/// Yields values in domain order.
pub struct IdentityValueHeuristic;

impl<V: ValueEquality> ValueOrderingHeuristic<V> for IdentityValueHeuristic {
    fn order_values<'a>(&self, domain: &'a Domain<V>) -> Box<dyn Iterator<Item = &'a V> + 'a> {
        Box::new(domain.iter())
    }
}
