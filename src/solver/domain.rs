use im::{HashMap, Vector};

use crate::solver::{problem::VariableId, value::ValueEquality};

/// The ordered collection of candidate values for a single variable.
///
/// A domain only ever shrinks: propagation and search narrow it, nothing
/// repopulates it. An empty domain is legal and signals local inconsistency.
/// Backed by a persistent vector, so clones share structure and keeping one
/// per search branch is cheap. Iteration order is the order values were
/// supplied in, which is also the order the search tries them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain<V: ValueEquality>(Vector<V>);

impl<V: ValueEquality> Domain<V> {
    pub fn new(values: impl IntoIterator<Item = V>) -> Self {
        Self(values.into_iter().collect())
    }

    /// A domain narrowed to exactly one value.
    pub fn singleton(value: V) -> Self {
        Self(Vector::unit(value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_singleton(&self) -> bool {
        self.0.len() == 1
    }

    /// If the domain holds exactly one value, returns it.
    pub fn singleton_value(&self) -> Option<&V> {
        if self.is_singleton() {
            self.0.front()
        } else {
            None
        }
    }

    pub fn contains(&self, value: &V) -> bool {
        self.0.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.0.iter()
    }

    /// Creates a new domain containing only the values that satisfy the
    /// predicate, preserving their relative order.
    pub fn retain(&self, f: impl Fn(&V) -> bool) -> Self {
        Self(self.0.iter().filter(|v| f(v)).cloned().collect())
    }
}

impl<V: ValueEquality> FromIterator<V> for Domain<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// The per-variable domain map a solve operates on.
///
/// `Clone` takes a structurally-shared snapshot, which is how search
/// branches are isolated from one another: each tentative assignment runs
/// propagation against its own clone, and a failed branch is simply
/// discarded without touching the parent's store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainStore<V: ValueEquality>(HashMap<VariableId, Domain<V>>);

impl<V: ValueEquality> DomainStore<V> {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn get(&self, var: VariableId) -> Option<&Domain<V>> {
        self.0.get(&var)
    }

    /// Replaces `var`'s domain. Used by propagation (narrowing in place) and
    /// by the search when pinning a variable to a candidate value.
    pub fn set(&mut self, var: VariableId, domain: Domain<V>) {
        self.0.insert(var, domain);
    }

    pub fn contains_var(&self, var: VariableId) -> bool {
        self.0.contains_key(&var)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V: ValueEquality> Default for DomainStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: ValueEquality> FromIterator<(VariableId, Domain<V>)> for DomainStore<V> {
    fn from_iter<I: IntoIterator<Item = (VariableId, Domain<V>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn retain_preserves_order() {
        let domain = Domain::new([4, 1, 3, 2]);
        let narrowed = domain.retain(|v| *v != 3);
        assert_eq!(narrowed.iter().copied().collect::<Vec<_>>(), vec![4, 1, 2]);
    }

    #[test]
    fn singleton_value_only_for_single_candidate() {
        assert_eq!(Domain::new([7]).singleton_value(), Some(&7));
        assert_eq!(Domain::new([7, 8]).singleton_value(), None);
        assert_eq!(Domain::<i32>::new([]).singleton_value(), None);
    }

    #[test]
    fn store_snapshot_is_isolated() {
        let mut store: DomainStore<i32> = [(0, Domain::new([1, 2]))].into_iter().collect();
        let snapshot = store.clone();
        store.set(0, Domain::singleton(1));

        assert_eq!(store.get(0).unwrap().len(), 1);
        assert_eq!(snapshot.get(0).unwrap().len(), 2);
    }
}
