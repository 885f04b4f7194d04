use std::io;
use std::io::Write;

use rand::Rng;

use crate::Cell;
use crate::rule::RuleTable;
use crate::rule::TransitionError;

/// Glyphs used by [`Grid::write_text`].
const LIVE_GLYPH: char = '¤';
const DEAD_GLYPH: char = '.';

/// The full history of an automaton run.
///
/// Rows are generations. Row 0 is the initial state; every other row is a
/// pure function of the row above it and the rule table. The row is
/// topologically a ring: the left neighbor of column 0 is the last column,
/// and the right neighbor of the last column is column 0.
pub struct Grid {
    /// Cells in row-major order, `width * height` entries.
    cells: Vec<Cell>,

    width: usize,
    height: usize,
}

impl Grid {
    /// Run the automaton from a random initial generation.
    ///
    /// The generator is injected so callers control seeding. Everything
    /// after row 0 is deterministic.
    pub fn generate<R: Rng>(
        width: usize,
        height: usize,
        rules: &RuleTable,
        rng: &mut R,
    ) -> Result<Self, TransitionError> {
        let mut row = vec![0; width];
        for cell in &mut row {
            *cell = rng.random_range(0..=1);
        }

        Self::from_seed_row(row, height, rules)
    }

    /// Run the automaton from an explicit initial generation.
    pub fn from_seed_row(
        row: Vec<Cell>,
        height: usize,
        rules: &RuleTable,
    ) -> Result<Self, TransitionError> {
        let width = row.len();

        let mut cells = vec![0; width * height];
        cells[..width].copy_from_slice(&row);

        for i in 0..height.saturating_sub(1) {
            let row_start = i * width;

            for j in 0..width {
                // Wrap the edges ("infinite plane").
                let left = cells[row_start + if j == 0 { width - 1 } else { j - 1 }];
                let center = cells[row_start + j];
                let right = cells[row_start + if j == width - 1 { 0 } else { j + 1 }];

                cells[(i + 1) * width + j] = rules.transition([left, center, right])?;
            }
        }

        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, i: usize, j: usize) -> Cell {
        self.cells[i * self.width + j]
    }

    pub fn row(&self, i: usize) -> &[Cell] {
        &self.cells[i * self.width..(i + 1) * self.width]
    }

    /// Dump the grid as text, one line per generation.
    ///
    /// Diagnostic output, not an interchange format.
    pub fn write_text<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for i in 0..self.height {
            let mut line = String::with_capacity(self.width + 1);

            for &cell in self.row(i) {
                line.push(if cell == 1 { LIVE_GLYPH } else { DEAD_GLYPH });
            }
            line.push('\n');

            w.write_all(line.as_bytes())?;
        }

        Ok(())
    }
}
