//! Advent of Code 2017

use crate::puzzles::registry::Solver;

/// Inverse Captcha
pub mod day01;
/// Corruption Checksum
pub mod day02;
/// Spiral Memory
pub mod day03;
/// High-Entropy Passphrases
pub mod day04;
/// A Maze of Twisty Trampolines
pub mod day05;
/// Memory Reallocation
pub mod day06;
/// Recursive Circus
pub mod day07;
/// I Heard You Like Registers
pub mod day08;
/// Stream Processing
pub mod day09;
/// Knot Hash
pub mod day10;
/// Hex Ed
pub mod day11;
/// Digital Plumber
pub mod day12;
/// Packet Scanners
pub mod day13;

/// Entry points by day
pub const SOLVERS: &[(u8, Solver)] = &[
    (1, day01::solve),
    (2, day02::solve),
    (3, day03::solve),
    (4, day04::solve),
    (5, day05::solve),
    (6, day06::solve),
    (7, day07::solve),
    (8, day08::solve),
    (9, day09::solve),
    (10, day10::solve),
    (11, day11::solve),
    (12, day12::solve),
    (13, day13::solve),
];
