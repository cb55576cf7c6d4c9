//! PNG export of a reassembled image with highlighted pattern cells

use crate::io::configuration::{ACTIVE_COLOR, HIGHLIGHT_COLOR, INACTIVE_COLOR};
use crate::io::error::{AdventError, Result, invalid_input};
use crate::spatial::grid::BoolGrid;
use image::{ImageBuffer, Rgba};
use std::collections::HashSet;
use std::path::Path;

/// Color of one cell: highlighted cells win over plain active cells
fn cell_color(active: bool, highlighted: bool) -> Rgba<u8> {
    let rgba = if highlighted {
        HIGHLIGHT_COLOR
    } else if active {
        ACTIVE_COLOR
    } else {
        INACTIVE_COLOR
    };
    Rgba(rgba)
}

/// Build the in-memory image, one pixel per cell
///
/// # Errors
///
/// Returns an error if the grid is empty
pub fn render_image(
    image: &BoolGrid,
    highlight: &HashSet<(usize, usize)>,
) -> Result<ImageBuffer<Rgba<u8>, Vec<u8>>> {
    if image.rows() == 0 || image.cols() == 0 {
        return Err(invalid_input(&"cannot render an empty image"));
    }

    let width = image.cols() as u32;
    let height = image.rows() as u32;
    let mut img = ImageBuffer::new(width, height);

    for ((row, col), &active) in image.as_array().indexed_iter() {
        let color = cell_color(active, highlight.contains(&(row, col)));
        img.put_pixel(col as u32, row as u32, color);
    }

    Ok(img)
}

/// Export the image as a PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The grid is empty
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_image_as_png(
    image: &BoolGrid,
    highlight: &HashSet<(usize, usize)>,
    output_path: &Path,
) -> Result<()> {
    let img = render_image(image, highlight)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| AdventError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AdventError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
