use std::collections::BTreeMap;

/// A rectangular table stored row-major with an explicit label for every column
///
/// Rows are labelled by their index, which for every table in this crate is the roll number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<C, T> {
    columns: Vec<C>,
    rows: usize,
    cells: Vec<T>,
}

/// Faces rolled in each roll, one column per die
pub type RollTable<F> = Table<usize, F>;

/// Number of times each face appears in each roll, one column per face
pub type FaceCounts<F> = Table<F, usize>;

impl<C, T> Table<C, T> {
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: 0,
            cells: Vec::new(),
        }
    }

    // every row must have exactly one cell per column
    pub(crate) fn from_rows(columns: Vec<C>, rows: Vec<Vec<T>>) -> Self {
        let num_rows = rows.len();
        let mut cells = Vec::with_capacity(num_rows * columns.len());
        for row in rows {
            debug_assert_eq!(row.len(), columns.len(), "row has the wrong number of cells");
            cells.extend(row);
        }
        Self {
            columns,
            rows: num_rows,
            cells,
        }
    }

    // every column must have the same length
    pub(crate) fn from_columns(columns: Vec<C>, data: Vec<Vec<T>>) -> Self
    where
        T: Clone,
    {
        debug_assert_eq!(columns.len(), data.len());
        let rows = data.first().map_or(0, Vec::len);
        debug_assert!(data.iter().all(|column| column.len() == rows));

        let mut cells = Vec::with_capacity(rows * columns.len());
        for row in 0..rows {
            cells.extend(data.iter().map(|column| column[row].clone()));
        }
        Self {
            columns,
            rows,
            cells,
        }
    }

    pub fn columns(&self) -> &[C] {
        &self.columns
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Cells of the given row, panics if the row is out of bounds
    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row {row} out of bounds");
        let width = self.columns.len();
        &self.cells[row * width..(row + 1) * width]
    }

    pub fn column(&self, column: usize) -> impl Iterator<Item = &T> + '_ {
        let width = self.columns.len();
        debug_assert!(column < width);
        self.cells.iter().skip(column).step_by(width.max(1))
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |row| self.row(row))
    }
}

impl<C, T> Default for Table<C, T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Number of occurrences of each distinct tuple of faces, ordered by tuple
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TupleCounts<F> {
    counts: BTreeMap<Vec<F>, usize>,
}

impl<F: Ord> TupleCounts<F> {
    pub(crate) fn from_tuples(tuples: impl IntoIterator<Item = Vec<F>>) -> Self {
        let mut counts = BTreeMap::new();
        for tuple in tuples {
            *counts.entry(tuple).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for the given tuple, 0 if it never came up
    pub fn get(&self, tuple: &[F]) -> usize {
        self.counts.get(tuple).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[F], usize)> + '_ {
        self.counts
            .iter()
            .map(|(tuple, &count)| (tuple.as_slice(), count))
    }

    /// Number of distinct tuples
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the number of rolls that were counted
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// The `n` tuples with the highest counts, ties broken by tuple order
    pub fn most_common(&self, n: usize) -> Vec<(&[F], usize)> {
        let mut entries: Vec<_> = self.iter().collect();
        // stable, so equal counts keep ascending tuple order
        entries.sort_by(|(_, a), (_, b)| b.cmp(a));
        entries.truncate(n);
        entries
    }
}
