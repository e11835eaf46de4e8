mod backtracker;
mod solver;

pub use backtracker::Backtracker;
pub use solver::Solver;

use thiserror::Error;

use crate::dims::Dims;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenError {
    #[error("invalid maze size: {0}")]
    InvalidSize(Dims),
}
