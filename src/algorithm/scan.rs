//! Searching an image for a fixed multi-cell pattern
//!
//! The pattern is matched at every anchor of every orientation of the image.
//! Overlapping matches share cells, so coverage is a set union rather than a
//! count of matches times the pattern size.

use std::collections::HashSet;

use crate::io::configuration::SEA_MONSTER;
use crate::io::error::{Result, invalid_input, parse_error};
use crate::spatial::grid::{BoolGrid, Orientation};

/// Relative cell offsets that must all be active for a match
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    offsets: Vec<(usize, usize)>,
    height: usize,
    width: usize,
}

impl Pattern {
    /// Parse a pattern where `#` marks a required cell
    ///
    /// Spaces and `.` are don't-care cells. Leading spaces are significant.
    ///
    /// # Errors
    ///
    /// Returns an error for other characters or a pattern with no `#`
    pub fn parse(text: &str) -> Result<Self> {
        let mut offsets = Vec::new();
        for (row, line) in text.lines().enumerate() {
            for (col, c) in line.chars().enumerate() {
                match c {
                    '#' => offsets.push((row, col)),
                    ' ' | '.' => {}
                    other => {
                        return Err(parse_error(
                            line,
                            &format!("unexpected pattern cell '{other}'"),
                        ));
                    }
                }
            }
        }

        let height = offsets.iter().map(|&(row, _)| row + 1).max().unwrap_or(0);
        let width = offsets.iter().map(|&(_, col)| col + 1).max().unwrap_or(0);
        if offsets.is_empty() {
            return Err(invalid_input(&"pattern has no required cells"));
        }

        Ok(Self {
            offsets,
            height,
            width,
        })
    }

    /// The sea monster searched for in reassembled images
    ///
    /// # Errors
    ///
    /// Never fails for the built-in pattern text
    pub fn sea_monster() -> Result<Self> {
        Self::parse(SEA_MONSTER)
    }

    /// Required cells relative to the anchor
    pub fn offsets(&self) -> &[(usize, usize)] {
        &self.offsets
    }

    /// Rows spanned by the required cells
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Columns spanned by the required cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of required cells
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the pattern has no required cells
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Whether the pattern matches with its top-left corner at `anchor`
    pub fn matches_at(&self, image: &BoolGrid, anchor: (usize, usize)) -> bool {
        self.offsets
            .iter()
            .all(|&(dr, dc)| image.is_active(anchor.0 + dr, anchor.1 + dc))
    }
}

/// Every anchor where the pattern matches, row-major
pub fn find_matches(image: &BoolGrid, pattern: &Pattern) -> Vec<(usize, usize)> {
    if image.rows() < pattern.height() || image.cols() < pattern.width() {
        return Vec::new();
    }
    let rows = image.rows() - pattern.height() + 1;
    let cols = image.cols() - pattern.width() + 1;

    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .filter(|&anchor| pattern.matches_at(image, anchor))
        .collect()
}

/// Union of all cells covered by some match
pub fn covered_cells(image: &BoolGrid, pattern: &Pattern) -> HashSet<(usize, usize)> {
    find_matches(image, pattern)
        .into_iter()
        .flat_map(|(row, col)| {
            pattern
                .offsets()
                .iter()
                .map(move |&(dr, dc)| (row + dr, col + dc))
        })
        .collect()
}

/// Best orientation of an image for a pattern
#[derive(Debug, Clone)]
pub struct ScanResult {
    /// Orientation applied to the input image
    pub orientation: Orientation,
    /// The image in that orientation
    pub image: BoolGrid,
    /// Cells covered by the pattern in the oriented image
    pub covered: HashSet<(usize, usize)>,
    /// Active cells not covered by the pattern
    pub roughness: usize,
}

/// Scan all 8 orientations and keep the one with the most covered cells
///
/// Ties go to the earlier orientation in [`Orientation::ALL`] order.
pub fn scan(image: &BoolGrid, pattern: &Pattern) -> ScanResult {
    let active = image.count_active();
    let mut best: Option<ScanResult> = None;

    for (orientation, oriented) in image.orientations() {
        let covered = covered_cells(&oriented, pattern);
        if best
            .as_ref()
            .is_none_or(|current| covered.len() > current.covered.len())
        {
            best = Some(ScanResult {
                orientation,
                roughness: active - covered.len(),
                image: oriented,
                covered,
            });
        }
    }

    best.unwrap_or_else(|| ScanResult {
        orientation: Orientation::IDENTITY,
        image: image.clone(),
        covered: HashSet::new(),
        roughness: active,
    })
}
