// Plain text renderings of dice, results and statistics
use crate::{Die, Face, Results, Table, TupleCounts};
use std::fmt::{Display, Formatter, Result as FResult};

const ROLL_HEADER: &str = "roll number";

struct DisplayTuple<'a, F>(&'a [F]);

impl<'a, F: Display> Display for DisplayTuple<'a, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        write!(f, "(")?;
        if let Some((first, rest)) = self.0.split_first() {
            write!(f, "{first}")?;
            for face in rest {
                write!(f, ", {face}")?;
            }
        }
        write!(f, ")")
    }
}

// writes right aligned columns separated by two spaces, one line per row
fn write_grid(f: &mut Formatter<'_>, header: Vec<String>, rows: Vec<Vec<String>>) -> FResult {
    let mut widths: Vec<usize> = header.iter().map(String::len).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    write_line(f, &header, &widths)?;
    for row in &rows {
        write_line(f, row, &widths)?;
    }
    Ok(())
}

fn write_line(f: &mut Formatter<'_>, cells: &[String], widths: &[usize]) -> FResult {
    let mut cells = cells.iter().zip(widths);
    if let Some((cell, &width)) = cells.next() {
        write!(f, "{cell:>width$}")?;
    }
    for (cell, &width) in cells {
        write!(f, "  {cell:>width$}")?;
    }
    writeln!(f)
}

impl<C: Display, T: Display> Display for Table<C, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        let header: Vec<String> = std::iter::once(ROLL_HEADER.to_string())
            .chain(self.columns().iter().map(ToString::to_string))
            .collect();
        let rows: Vec<Vec<String>> = self
            .iter_rows()
            .enumerate()
            .map(|(roll, row)| {
                std::iter::once(roll.to_string())
                    .chain(row.iter().map(ToString::to_string))
                    .collect::<Vec<_>>()
            })
            .collect();
        write_grid(f, header, rows)
    }
}

impl<F: Display> Display for Results<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Results::Wide(table) => write!(f, "{table}"),
            Results::Narrow(records) => {
                let header = [ROLL_HEADER, "die number", "face"]
                    .map(ToString::to_string)
                    .to_vec();
                let rows = records
                    .iter()
                    .map(|record| {
                        vec![
                            record.roll.to_string(),
                            record.die.to_string(),
                            record.face.to_string(),
                        ]
                    })
                    .collect();
                write_grid(f, header, rows)
            }
        }
    }
}

impl<F: Face + Display> Display for TupleCounts<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        let header = vec!["faces".to_string(), "count".to_string()];
        let rows = self
            .iter()
            .map(|(tuple, count)| vec![DisplayTuple(tuple).to_string(), count.to_string()])
            .collect();
        write_grid(f, header, rows)
    }
}

impl<F: Face + Display> Display for Die<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        let header = vec!["face".to_string(), "weight".to_string()];
        let rows = self
            .show()
            .into_iter()
            .map(|(face, weight)| vec![face.to_string(), weight.to_string()])
            .collect();
        write_grid(f, header, rows)
    }
}
