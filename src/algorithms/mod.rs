mod rnd_prims;

pub use rnd_prims::RndPrims;

use thiserror::Error;

use crate::dims::Dims;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid maze size: {0:?}")]
    InvalidSize(Dims),
    #[error("start cell {start:?} outside of maze of size {size:?}")]
    InvalidStart { size: Dims, start: Dims },
}
