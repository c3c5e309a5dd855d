use crate::{Error, Result};
use rand::{
    distributions::{Distribution as _, WeightedIndex},
    thread_rng, Rng as _, SeedableRng as _,
};
use std::{borrow::Cow, collections::VecDeque};

pub type Seed = u64;

/// Source of randomness for rolling dice
///
/// Either a Pcg32 that keeps track of the seed it was created with, or a queue of pre-fed uniform
/// numbers in `[0, 1)` which allows replaying exact sequences of rolls.
#[derive(Debug, Clone)]
pub enum Rng {
    Internal {
        initial_seed: Seed,
        rng: rand_pcg::Pcg32,
    },
    External {
        random_numbers: VecDeque<f64>,
    },
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

impl Rng {
    pub fn new() -> Self {
        Self::with_seed(thread_rng().gen())
    }

    pub fn with_seed(initial_seed: Seed) -> Self {
        Self::Internal {
            initial_seed,
            rng: rand_pcg::Pcg32::seed_from_u64(initial_seed),
        }
    }

    pub fn new_external(random_numbers: impl IntoIterator<Item = f64>) -> Self {
        let random_numbers: VecDeque<f64> = random_numbers.into_iter().collect();
        debug_assert!(
            random_numbers.iter().all(|n| (0.0..1.0).contains(n)),
            "external random numbers must be in [0, 1)"
        );
        Self::External { random_numbers }
    }

    pub fn initial_seed(&self) -> Option<Seed> {
        match self {
            Self::Internal { initial_seed, .. } => Some(*initial_seed),
            Self::External { .. } => None,
        }
    }

    /// Number of pre-fed numbers left, always 0 for the internal generator
    pub fn numbers_left(&self) -> usize {
        match self {
            Self::Internal { .. } => 0,
            Self::External { random_numbers } => random_numbers.len(),
        }
    }

    // generate methods

    /// Picks `count` indices into `weights`, independently and with replacement, each index
    /// chosen with probability proportional to its weight
    pub(crate) fn weighted_indices(
        &mut self,
        weights: &[f64],
        count: usize,
    ) -> Result<Vec<usize>> {
        let weights = rescaled(weights);
        let weights = weights.as_ref();
        match self {
            Self::Internal { rng, .. } => {
                let dist =
                    WeightedIndex::new(weights).map_err(|_| Error::DegenerateDistribution)?;
                Ok((0..count).map(|_| dist.sample(&mut *rng)).collect())
            }
            Self::External { random_numbers } => {
                let total: f64 = weights.iter().sum();
                if total <= 0.0 {
                    return Err(Error::DegenerateDistribution);
                }

                let mut indices = Vec::with_capacity(count);
                for _ in 0..count {
                    let random_number = random_numbers
                        .pop_front()
                        .expect("Ran out of external random numbers");
                    indices.push(pick_cumulative(weights, random_number * total));
                }
                Ok(indices)
            }
        }
    }
}

// finite weights can still overflow to an infinite sum, so scale them down by the largest one
fn rescaled(weights: &[f64]) -> Cow<'_, [f64]> {
    if weights.iter().sum::<f64>().is_finite() {
        return Cow::Borrowed(weights);
    }
    let max = weights.iter().copied().fold(0.0, f64::max);
    Cow::Owned(weights.iter().map(|weight| weight / max).collect())
}

// first index whose cumulative weight exceeds the target
fn pick_cumulative(weights: &[f64], target: f64) -> usize {
    let mut cumulative = 0.0;
    for (idx, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if cumulative > target {
            return idx;
        }
    }

    // rounding can leave the target just past the final sum
    weights
        .iter()
        .rposition(|&weight| weight > 0.0)
        .unwrap_or(weights.len() - 1)
}
