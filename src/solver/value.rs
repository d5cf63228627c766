/// The base trait for any value that can appear in a variable's domain.
///
/// This is the engine's only requirement on values: it must be cloneable,
/// debuggable, equatable, and hashable. Values are otherwise opaque: the
/// engine never inspects them beyond passing them to the constraint
/// predicate. This is a marker trait, so any type that satisfies these
/// bounds implements `ValueEquality`.
pub trait ValueEquality: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
impl<T> ValueEquality for T where T: Clone + std::fmt::Debug + Eq + std::hash::Hash + 'static {}
