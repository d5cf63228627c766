//! Necto is a solver for finite-domain *binary* constraint satisfaction
//! problems (CSPs): given variables, a candidate-value domain per variable,
//! a pairwise compatibility predicate, and a graph of which variable pairs
//! are constrained together, it finds an assignment of one value per
//! variable satisfying every constraint, or proves none exists.
//!
//! The engine combines AC-3 arc-consistency propagation with backtracking
//! search: after every tentative assignment, propagation runs on a
//! branch-local snapshot of the domains, so failed branches never leak
//! state into their siblings.
//!
//! # Core Concepts
//!
//! - **[`Problem`](solver::problem::Problem)**: the four values that
//!   describe an instance: variables, initial domains, the constraint
//!   predicate, and the neighbor graph.
//! - **[`propagate`](solver::propagation::propagate)**: the AC-3 loop that
//!   narrows domains to arc consistency and detects wipeouts.
//! - **[`SolverEngine`](solver::engine::SolverEngine)**: the backtracking
//!   search driver, parameterised by variable- and value-ordering
//!   heuristics (minimum-remaining-values by default).
//!
//! # Example: A Simple 2-Variable Problem
//!
//! Solving `?A != ?B` where `?A` can be `1` or `2` and `?B` can only be
//! `1`. The solver must deduce that `?A` is `2`.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use necto::solver::domain::{Domain, DomainStore};
//! use necto::solver::engine::SolverEngine;
//! use necto::solver::problem::{Problem, VariableId};
//!
//! let a: VariableId = 0;
//! let b: VariableId = 1;
//!
//! let domains: DomainStore<i32> = [(a, Domain::new([1, 2])), (b, Domain::new([1]))]
//!     .into_iter()
//!     .collect();
//! let neighbors = HashMap::from([(a, vec![b]), (b, vec![a])]);
//! let problem = Problem::new(
//!     vec![a, b],
//!     domains,
//!     neighbors,
//!     |_x: VariableId, vx: &i32, _y: VariableId, vy: &i32| vx != vy,
//! )
//! .unwrap();
//!
//! let (assignment, _stats) = SolverEngine::default().solve(&problem);
//! let assignment = assignment.expect("the problem is solvable");
//! assert_eq!(assignment[&a], 2);
//! assert_eq!(assignment[&b], 1);
//! ```
pub mod error;
pub mod puzzles;
pub mod solver;
