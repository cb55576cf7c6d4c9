//! Joins the inner pixels of an arrangement into one image

use ndarray::{Array2, Axis, Slice};

use crate::algorithm::arrangement::Arrangement;
use crate::io::error::{Result, invalid_input};
use crate::spatial::grid::BoolGrid;

/// Drop every tile's border and concatenate the rest in grid order
///
/// The result is `side * (n - 2)` cells on each side for tiles of size `n`.
///
/// # Errors
///
/// Returns an error if the placed tiles differ in size
pub fn stitch(arrangement: &Arrangement) -> Result<BoolGrid> {
    let side = arrangement.side();
    let inner_size = arrangement
        .get(0, 0)
        .map_or(0, |placed| placed.grid.rows().saturating_sub(2));
    let total = side * inner_size;
    let mut image = Array2::from_elem((total, total), false);

    for (row, tiles) in arrangement.rows().enumerate() {
        for (col, placed) in tiles.iter().enumerate() {
            let inner = placed.grid.inner();
            if inner.rows() != inner_size || inner.cols() != inner_size {
                return Err(invalid_input(&format!(
                    "tile {} does not match the size of the other tiles",
                    placed.id
                )));
            }
            let top = row * inner_size;
            let left = col * inner_size;
            image
                .slice_each_axis_mut(|axis| {
                    let start = if axis.axis == Axis(0) { top } else { left };
                    Slice::from(start..start + inner_size)
                })
                .assign(inner.as_array());
        }
    }

    Ok(BoolGrid::from_array(image))
}
