//! Boolean grids with rotation, reflection and border trimming
//!
//! Backs both the individual image tiles and the stitched image. All
//! transformations return new grids; a grid is never mutated after parsing.

use ndarray::{Array2, Axis, Slice};
use std::fmt;

use crate::io::error::{Result, invalid_input, parse_error};

/// One of the 8 symmetries of a square grid
///
/// Applied as `quarter_turns` clockwise rotations followed by an optional
/// flip about the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// Clockwise quarter turns (0..4)
    pub quarter_turns: u8,
    /// Whether the rows are reversed after rotating
    pub flipped: bool,
}

impl Orientation {
    /// The identity transformation
    pub const IDENTITY: Self = Self {
        quarter_turns: 0,
        flipped: false,
    };

    /// All 8 orientations, identity first
    pub const ALL: [Self; 8] = [
        Self::new(0, false),
        Self::new(0, true),
        Self::new(1, false),
        Self::new(1, true),
        Self::new(2, false),
        Self::new(2, true),
        Self::new(3, false),
        Self::new(3, true),
    ];

    /// Create an orientation, reducing turns modulo 4
    pub const fn new(quarter_turns: u8, flipped: bool) -> Self {
        Self {
            quarter_turns: quarter_turns % 4,
            flipped,
        }
    }
}

/// Rectangular grid of on/off cells
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoolGrid {
    cells: Array2<bool>,
}

impl BoolGrid {
    /// Wrap an existing array
    pub const fn from_array(cells: Array2<bool>) -> Self {
        Self { cells }
    }

    /// Build a grid from equally long rows
    ///
    /// # Errors
    ///
    /// Returns an error if the rows have different lengths
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        if let Some(ragged) = rows.iter().position(|row| row.len() != width) {
            return Err(invalid_input(&format!(
                "grid row {ragged} has a different width than row 0 ({width})"
            )));
        }

        let flat: Vec<bool> = rows.iter().flatten().copied().collect();
        let cells = Array2::from_shape_vec((rows.len(), width), flat)
            .map_err(|e| invalid_input(&format!("grid shape: {e}")))?;
        Ok(Self { cells })
    }

    /// Parse `#` (on) and `.` (off) characters, one row per line
    ///
    /// # Errors
    ///
    /// Returns an error for any other character or for ragged rows
    pub fn parse(text: &str) -> Result<Self> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '#' => Ok(true),
                        '.' => Ok(false),
                        other => Err(parse_error(line, &format!("unexpected cell '{other}'"))),
                    })
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::from_rows(&rows)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Borrow the underlying array
    pub const fn as_array(&self) -> &Array2<bool> {
        &self.cells
    }

    /// Cell value, `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get((row, col)).copied()
    }

    /// Whether the cell is on; out-of-bounds cells are off
    pub fn is_active(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// Copy of one row, left to right
    pub fn row(&self, index: usize) -> Vec<bool> {
        if index >= self.rows() {
            return Vec::new();
        }
        self.cells.row(index).to_vec()
    }

    /// Copy of one column, top to bottom
    pub fn column(&self, index: usize) -> Vec<bool> {
        if index >= self.cols() {
            return Vec::new();
        }
        self.cells.column(index).to_vec()
    }

    /// Rotate 90 degrees clockwise
    #[must_use]
    pub fn rotate_90(&self) -> Self {
        // Transposing then mirroring left-right is a clockwise quarter turn
        let mut view = self.cells.view().reversed_axes();
        view.invert_axis(Axis(1));
        Self {
            cells: view.to_owned(),
        }
    }

    /// Flip about the horizontal axis (reverse the row order)
    #[must_use]
    pub fn flip(&self) -> Self {
        let mut view = self.cells.view();
        view.invert_axis(Axis(0));
        Self {
            cells: view.to_owned(),
        }
    }

    /// Apply one of the 8 symmetries
    #[must_use]
    pub fn oriented(&self, orientation: Orientation) -> Self {
        let mut result = self.clone();
        for _ in 0..orientation.quarter_turns {
            result = result.rotate_90();
        }
        if orientation.flipped {
            result = result.flip();
        }
        result
    }

    /// All 8 orientations in [`Orientation::ALL`] order
    pub fn orientations(&self) -> Vec<(Orientation, Self)> {
        Orientation::ALL
            .iter()
            .map(|&orientation| (orientation, self.oriented(orientation)))
            .collect()
    }

    /// Drop the outermost row and column on every side
    #[must_use]
    pub fn inner(&self) -> Self {
        if self.rows() < 2 || self.cols() < 2 {
            return Self {
                cells: Array2::from_elem((0, 0), false),
            };
        }
        Self {
            cells: self
                .cells
                .slice_each_axis(|axis| Slice::from(1..axis.len - 1))
                .to_owned(),
        }
    }

    /// Number of cells that are on
    pub fn count_active(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

impl fmt::Display for BoolGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.rows().into_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                write!(f, "{}", if cell { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}
