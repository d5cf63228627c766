//! Sudoku as a binary CSP.
//!
//! Each *blank* square is a variable; pre-filled squares are not modeled as
//! variables at all. Their values are baked into the initial domain of every
//! blank square sharing a row, column, or block, and they are excluded from
//! the neighbor graph. The solver therefore only ever reasons about blanks,
//! and a solution is merged back with the clues for display.

use std::collections::HashMap;

use crate::{
    error::Result,
    solver::{
        domain::Domain,
        problem::{Problem, VariableId},
    },
};

use super::grid::Grid;

/// A Sudoku instance, described by its pre-filled squares.
///
/// Squares are indexed 0..81 in row-major order.
#[derive(Debug, Clone)]
pub struct Sudoku {
    filled: HashMap<VariableId, u8>,
}

impl Sudoku {
    pub fn new(filled: HashMap<VariableId, u8>) -> Self {
        Self { filled }
    }

    /// Builds an instance from a 9×9 grid where 0 marks a blank square.
    pub fn from_grid(grid: &Grid) -> Self {
        let mut filled = HashMap::new();
        for (r, row) in grid.iter().enumerate() {
            for (c, &digit) in row.iter().enumerate() {
                if digit != 0 {
                    filled.insert(Self::square_index(r, c), digit);
                }
            }
        }
        Self::new(filled)
    }

    pub fn filled(&self) -> &HashMap<VariableId, u8> {
        &self.filled
    }

    pub fn square_index(row: usize, col: usize) -> VariableId {
        (row * 9 + col) as VariableId
    }

    pub fn row_of(square: VariableId) -> u32 {
        square / 9
    }

    pub fn col_of(square: VariableId) -> u32 {
        square % 9
    }

    /// The 3×3 block a square belongs to, numbered 0..9 in row-major order.
    pub fn block_of(square: VariableId) -> u32 {
        (square / 27) * 3 + (square % 9) / 3
    }

    /// Whether two distinct squares share a row, column, or block.
    pub fn same_unit(a: VariableId, b: VariableId) -> bool {
        a != b
            && (Self::row_of(a) == Self::row_of(b)
                || Self::col_of(a) == Self::col_of(b)
                || Self::block_of(a) == Self::block_of(b))
    }

    /// Candidate digits for a blank square: 1..=9 minus every clue sharing
    /// one of its units.
    fn candidates(&self, square: VariableId) -> Domain<u8> {
        (1..=9u8)
            .filter(|digit| {
                !self
                    .filled
                    .iter()
                    .any(|(&clue, &value)| value == *digit && Self::same_unit(clue, square))
            })
            .collect()
    }

    /// Produces the engine's four-value contract: blank squares as
    /// variables, clue-pruned initial domains, the same-unit neighbor
    /// graph over blanks, and the all-different-within-a-unit predicate.
    pub fn to_problem(&self) -> Result<Problem<u8>> {
        let variables: Vec<VariableId> = (0..81)
            .filter(|square| !self.filled.contains_key(square))
            .collect();

        let domains = variables
            .iter()
            .map(|&square| (square, self.candidates(square)))
            .collect();

        let neighbors: HashMap<VariableId, Vec<VariableId>> = variables
            .iter()
            .map(|&square| {
                let peers = variables
                    .iter()
                    .copied()
                    .filter(|&other| Self::same_unit(square, other))
                    .collect();
                (square, peers)
            })
            .collect();

        Problem::new(variables, domains, neighbors, squares_compatible)
    }
}

/// Squares sharing a unit must hold different digits; any other pair is
/// vacuously compatible.
fn squares_compatible(x: VariableId, vx: &u8, y: VariableId, vy: &u8) -> bool {
    !Sudoku::same_unit(x, y) || vx != vy
}
