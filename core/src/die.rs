use crate::{Error, Face, Result, Rng};
use std::{cell::RefCell, rc::Rc};

/// A die with any number of distinct faces, each carrying its own weight
///
/// A `Die` is a handle: clones share the same faces and weights, so a weight changed through one
/// handle is seen by every game that holds another. Faces are fixed at construction, weights
/// start at 1.0 (a fair die) and can be changed any number of times.
#[derive(Debug, Clone)]
pub struct Die<F> {
    faces: Rc<[F]>,
    weights: Rc<RefCell<Vec<f64>>>,
}

impl<F: Face> Die<F> {
    pub fn new(faces: impl Into<Vec<F>>) -> Result<Self> {
        let faces = faces.into();

        if faces.is_empty() {
            return Err(Error::InvalidFaces {
                reason: "a die needs at least one face",
            });
        }

        let mut sorted: Vec<&F> = faces.iter().collect();
        sorted.sort_unstable();
        if sorted.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(Error::InvalidFaces {
                reason: "faces must be unique",
            });
        }

        let weights = vec![1.0; faces.len()];
        Ok(Self {
            faces: faces.into(),
            weights: Rc::new(RefCell::new(weights)),
        })
    }

    /// Faces in the order the die was created with
    pub fn faces(&self) -> &[F] {
        &self.faces
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    // a die always has at least one face
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn weight(&self, face: &F) -> Option<f64> {
        let idx = self.position(face)?;
        Some(self.weights.borrow()[idx])
    }

    /// Replaces the weight of a single face, leaving the others untouched
    ///
    /// Weights must be finite and non-negative. On error nothing is changed.
    pub fn change_weight(&self, face: &F, weight: f64) -> Result<()> {
        let idx = self.position(face).ok_or_else(|| Error::UnknownFace {
            face: format!("{face:?}"),
        })?;

        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight { weight });
        }

        log::debug!("changing weight of face {face:?} to {weight}");
        self.weights.borrow_mut()[idx] = weight;
        Ok(())
    }

    /// Rolls the die `count` times using the current weights
    ///
    /// Every roll is independent and with replacement; a face comes up with probability
    /// `weight / sum of weights`.
    pub fn roll(&self, count: usize, rng: &mut Rng) -> Result<Vec<F>> {
        if count < 1 {
            return Err(Error::InvalidCount { count });
        }

        let weights = self.weights.borrow();
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(Error::DegenerateDistribution);
        }

        let indices = rng.weighted_indices(&weights, count)?;
        log::trace!("rolled {count} times with weights {weights:?}");

        Ok(indices
            .into_iter()
            .map(|idx| self.faces[idx].clone())
            .collect())
    }

    /// Current faces and weights, in construction order
    pub fn show(&self) -> Vec<(F, f64)> {
        let weights = self.weights.borrow();
        self.faces
            .iter()
            .cloned()
            .zip(weights.iter().copied())
            .collect()
    }

    /// true if both dice have the same set of faces, in any order
    pub fn has_same_faces(&self, other: &Die<F>) -> bool {
        if self.faces.len() != other.faces.len() {
            return false;
        }
        let mut ours: Vec<&F> = self.faces.iter().collect();
        let mut theirs: Vec<&F> = other.faces.iter().collect();
        ours.sort_unstable();
        theirs.sort_unstable();
        ours == theirs
    }

    fn position(&self, face: &F) -> Option<usize> {
        self.faces.iter().position(|f| f == face)
    }
}
