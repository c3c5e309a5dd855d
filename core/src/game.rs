use crate::{Die, Error, Face, Result, Rng, RollTable, Seed, Table};

/// Shape of the results returned by [`Game::show`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Form {
    /// One row per roll, one column per die
    #[default]
    Wide,
    /// One record per (roll, die) pair
    Narrow,
}

impl std::str::FromStr for Form {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wide" => Ok(Form::Wide),
            "narrow" => Ok(Form::Narrow),
            _ => Err(Error::UnknownForm {
                form: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrowRecord<F> {
    pub roll: usize,
    pub die: usize,
    pub face: F,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Results<F> {
    Wide(RollTable<F>),
    Narrow(Vec<NarrowRecord<F>>),
}

impl<F> Results<F> {
    pub fn is_empty(&self) -> bool {
        match self {
            Results::Wide(table) => table.is_empty(),
            Results::Narrow(records) => records.is_empty(),
        }
    }
}

/// A set of dice that are rolled together
///
/// All dice must have the same faces, though their weights may differ. The game keeps handles to
/// the dice rather than copies, so weights changed after the game was created apply to the next
/// play. Only the results of the most recent play are kept.
#[derive(Debug)]
pub struct Game<F> {
    dice: Vec<Die<F>>,
    rng: Rng,
    results: Option<RollTable<F>>,
}

impl<F: Face> Game<F> {
    pub fn new(dice: Vec<Die<F>>) -> Result<Self> {
        Self::with_rng(dice, Rng::new())
    }

    pub fn with_rng(dice: Vec<Die<F>>, rng: Rng) -> Result<Self> {
        let first = dice.first().ok_or(Error::NoDice)?;
        if let Some(die) = dice.iter().position(|die| !die.has_same_faces(first)) {
            return Err(Error::IncompatibleFaces { die });
        }

        if let Some(seed) = rng.initial_seed() {
            log::debug!("new game with {} dice, seed {seed}", dice.len());
        }

        Ok(Self {
            dice,
            rng,
            results: None,
        })
    }

    pub fn dice(&self) -> &[Die<F>] {
        &self.dice
    }

    pub fn num_dice(&self) -> usize {
        self.dice.len()
    }

    /// Seed of the game's random number generator, if it has one
    pub fn seed(&self) -> Option<Seed> {
        self.rng.initial_seed()
    }

    /// Rolls every die `num_rolls` times, replacing the results of any previous play
    ///
    /// Each die is rolled in turn and its rolls become one column of the results. If any die
    /// can't be rolled the previous results are kept.
    pub fn play(&mut self, num_rolls: usize) -> Result<()> {
        if num_rolls < 1 {
            return Err(Error::InvalidCount { count: num_rolls });
        }

        let mut columns = Vec::with_capacity(self.dice.len());
        for die in &self.dice {
            columns.push(die.roll(num_rolls, &mut self.rng)?);
        }

        let labels = (0..self.dice.len()).collect();
        self.results = Some(Table::from_columns(labels, columns));

        log::debug!("played {num_rolls} rolls of {} dice", self.dice.len());
        Ok(())
    }

    /// Results of the most recent play, `None` if the game hasn't been played
    pub fn results(&self) -> Option<&RollTable<F>> {
        self.results.as_ref()
    }

    /// Copy of the results of the most recent play in the given form
    ///
    /// Empty if the game hasn't been played yet.
    pub fn show(&self, form: Form) -> Results<F> {
        match (form, &self.results) {
            (Form::Wide, None) => Results::Wide(Table::empty()),
            (Form::Narrow, None) => Results::Narrow(Vec::new()),
            (Form::Wide, Some(table)) => Results::Wide(table.clone()),
            (Form::Narrow, Some(table)) => Results::Narrow(narrow(table)),
        }
    }
}

fn narrow<F: Clone>(table: &RollTable<F>) -> Vec<NarrowRecord<F>> {
    let mut records = Vec::with_capacity(table.num_rows() * table.num_columns());
    for (roll, row) in table.iter_rows().enumerate() {
        for (die, face) in row.iter().enumerate() {
            records.push(NarrowRecord {
                roll,
                die,
                face: face.clone(),
            });
        }
    }
    records
}
