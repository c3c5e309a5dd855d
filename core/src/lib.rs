mod analyzer;
mod die;
mod display;
mod game;
mod rng;
mod table;

pub use analyzer::Analyzer;
pub use die::Die;
pub use game::{Form, Game, NarrowRecord, Results};
pub use rng::{Rng, Seed};
pub use table::{FaceCounts, RollTable, Table, TupleCounts};

/*****************************************************************************************
 * Face
 */

/// Anything that can be printed on the side of a die
///
/// Faces must be totally ordered so that combos can be put into a canonical order, which also
/// means a single die can never mix incomparable kinds of faces.
pub trait Face: Clone + Ord + std::fmt::Debug {}

impl<T: Clone + Ord + std::fmt::Debug> Face for T {}

/*****************************************************************************************
 * Error Types
 */

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    InvalidFaces { reason: &'static str },
    UnknownFace { face: String },
    InvalidWeight { weight: f64 },
    InvalidCount { count: usize },
    DegenerateDistribution,
    NoDice,
    IncompatibleFaces { die: usize },
    UnknownForm { form: String },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidFaces { reason } => {
                write!(f, "Invalid faces: {reason}")
            }
            Error::UnknownFace { face } => {
                write!(f, "Face {face} is not on the die")
            }
            Error::InvalidWeight { weight } => {
                write!(f, "Weight must be a finite non-negative number, got {weight}")
            }
            Error::InvalidCount { count } => {
                write!(f, "Number of rolls must be a positive integer, got {count}")
            }
            Error::DegenerateDistribution => {
                write!(f, "Cannot roll a die whose weights are all zero")
            }
            Error::NoDice => {
                write!(f, "A game needs at least one die")
            }
            Error::IncompatibleFaces { die } => {
                write!(f, "Die {die} does not have the same faces as die 0")
            }
            Error::UnknownForm { form } => {
                write!(f, "Unknown form {form:?}, expected \"wide\" or \"narrow\"")
            }
        }
    }
}

impl std::error::Error for Error {}
