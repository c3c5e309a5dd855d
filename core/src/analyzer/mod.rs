use crate::{Face, FaceCounts, Game, RollTable, Table, TupleCounts};
use once_cell::unsync::OnceCell;
use std::collections::BTreeSet;

/// Descriptive statistics over the results of a single play of a [`Game`]
///
/// The analyzer takes its own copy of the game's results when it is created. Playing the game
/// again afterwards does not change what the analyzer sees; create a new analyzer for that.
///
/// Every statistic is computed the first time it is asked for and cached from then on.
#[derive(Debug)]
pub struct Analyzer<F> {
    results: RollTable<F>,
    jackpots: OnceCell<Vec<bool>>,
    face_counts: OnceCell<FaceCounts<F>>,
    combos: OnceCell<TupleCounts<F>>,
    permutations: OnceCell<TupleCounts<F>>,
}

impl<F: Face> Analyzer<F> {
    pub fn new(game: &Game<F>) -> Self {
        Self::from_results(game.results().cloned().unwrap_or_default())
    }

    pub fn from_results(results: RollTable<F>) -> Self {
        Self {
            results,
            jackpots: OnceCell::new(),
            face_counts: OnceCell::new(),
            combos: OnceCell::new(),
            permutations: OnceCell::new(),
        }
    }

    /// The results being analyzed, as they were when the analyzer was created
    pub fn results(&self) -> &RollTable<F> {
        &self.results
    }

    pub fn num_rolls(&self) -> usize {
        self.results.num_rows()
    }

    pub fn num_dice(&self) -> usize {
        self.results.num_columns()
    }

    /// Number of rolls in which every die landed on the same face
    pub fn jackpot(&self) -> usize {
        self.jackpot_flags().iter().filter(|&&jackpot| jackpot).count()
    }

    /// For every roll, whether it was a jackpot
    pub fn jackpot_flags(&self) -> &[bool] {
        self.jackpots.get_or_init(|| {
            log::debug!("finding jackpots in {} rolls", self.num_rolls());
            self.results.iter_rows().map(is_jackpot).collect()
        })
    }

    /// How many times each face came up in each roll
    ///
    /// There's one column for every face that was rolled at least once, in ascending order. Faces
    /// that never came up in any roll have no column.
    pub fn face_counts_per_roll(&self) -> &FaceCounts<F> {
        self.face_counts.get_or_init(|| {
            log::debug!("counting faces in {} rolls", self.num_rolls());
            face_counts(&self.results)
        })
    }

    /// Counts of each distinct combination of faces
    ///
    /// Order doesn't matter in a combination, each key is the roll's faces sorted in ascending
    /// order. Repeated faces are kept.
    pub fn combo(&self) -> &TupleCounts<F> {
        self.combos.get_or_init(|| {
            log::debug!("counting combos in {} rolls", self.num_rolls());
            TupleCounts::from_tuples(self.results.iter_rows().map(|row| {
                let mut combo = row.to_vec();
                combo.sort();
                combo
            }))
        })
    }

    /// Counts of each distinct permutation of faces, keyed by the faces in die order
    pub fn permutation(&self) -> &TupleCounts<F> {
        self.permutations.get_or_init(|| {
            log::debug!("counting permutations in {} rolls", self.num_rolls());
            TupleCounts::from_tuples(self.results.iter_rows().map(<[F]>::to_vec))
        })
    }
}

fn is_jackpot<F: Eq>(row: &[F]) -> bool {
    match row.split_first() {
        Some((first, rest)) => rest.iter().all(|face| face == first),
        None => false,
    }
}

fn face_counts<F: Face>(results: &RollTable<F>) -> FaceCounts<F> {
    let seen: BTreeSet<&F> = results.iter_rows().flatten().collect();
    let faces: Vec<F> = seen.into_iter().cloned().collect();

    let rows = results
        .iter_rows()
        .map(|row| {
            let mut counts = vec![0; faces.len()];
            for face in row {
                // every face in the row was collected above
                if let Ok(idx) = faces.binary_search(face) {
                    counts[idx] += 1;
                }
            }
            counts
        })
        .collect();

    Table::from_rows(faces, rows)
}

#[cfg(test)]
mod tests;
