use crate::solver::problem::VariableId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised for structurally malformed problem descriptions.
///
/// Unsatisfiability is never an error: both propagation and search report it
/// through their return values. These variants only cover descriptions the
/// engine cannot operate on at all.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("variable ?{0} has no initial domain")]
    MissingDomain(VariableId),

    #[error("neighbor list references undeclared variable ?{0}")]
    UndeclaredVariable(VariableId),
}
