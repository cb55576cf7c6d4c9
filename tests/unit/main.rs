//! Unit tests, one file per source file

mod io;
mod puzzles;
mod spatial;
