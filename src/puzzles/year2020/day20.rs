//! Jurassic Jigsaw: reassemble an image from shuffled, rotated tiles

use crate::algorithm::arrangement::{Arrangement, arrange};
use crate::algorithm::matching::EdgeCensus;
use crate::algorithm::scan::{Pattern, ScanResult, scan};
use crate::algorithm::stitching::stitch;
use crate::io::error::{Result, invariant_error};
use crate::puzzles::answer::Answers;
use crate::spatial::tiles::{Tile, parse_tiles};

/// Parse the tile blocks
///
/// # Errors
///
/// Returns an error for malformed blocks, mismatched sizes or repeated ids
pub fn parse(text: &str) -> Result<Vec<Tile>> {
    parse_tiles(text)
}

/// Border statistics of the input, for checking that matching is exact
pub fn census(tiles: &[Tile]) -> EdgeCensus {
    EdgeCensus::of(tiles)
}

/// Arrange the tiles once their borders are known to match unambiguously
///
/// # Errors
///
/// Returns an error if a border is a palindrome or shared by more than two
/// tiles, or if the tiles cannot be arranged
pub fn checked_arrange(tiles: &[Tile]) -> Result<Arrangement> {
    let census = census(tiles);
    if !census.is_unambiguous() {
        return Err(invariant_error(
            "tile matching",
            &format!(
                "borders do not pair up uniquely ({} palindromes, histogram {:?})",
                census.palindromes(),
                census.histogram()
            ),
        ));
    }
    arrange(tiles)
}

/// Product of the ids of the four corner tiles
///
/// # Errors
///
/// Returns an error if the tiles cannot be arranged unambiguously
pub fn part1(tiles: &[Tile]) -> Result<u64> {
    checked_arrange(tiles)?.corner_product()
}

/// Stitch the arranged tiles and find the best sea-monster orientation
///
/// # Errors
///
/// Returns an error if the tiles cannot be arranged unambiguously
pub fn reassemble(tiles: &[Tile]) -> Result<(Arrangement, ScanResult)> {
    let arrangement = checked_arrange(tiles)?;
    let image = stitch(&arrangement)?;
    let pattern = Pattern::sea_monster()?;
    Ok((arrangement, scan(&image, &pattern)))
}

/// Active cells of the image not covered by any sea monster
///
/// # Errors
///
/// Returns an error if the tiles cannot be arranged
pub fn part2(tiles: &[Tile]) -> Result<usize> {
    reassemble(tiles).map(|(_, result)| result.roughness)
}

/// Solve both parts
///
/// # Errors
///
/// Returns an error if parsing or arrangement fails
pub fn solve(text: &str) -> Result<Answers> {
    let tiles = parse(text)?;
    let (arrangement, result) = reassemble(&tiles)?;
    Ok(Answers::new(arrangement.corner_product()?, result.roughness))
}
