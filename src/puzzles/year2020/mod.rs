//! Advent of Code 2020

use crate::puzzles::registry::Solver;

/// Report Repair
pub mod day01;
/// Password Philosophy
pub mod day02;
/// Toboggan Trajectory
pub mod day03;
/// Passport Processing
pub mod day04;
/// Binary Boarding
pub mod day05;
/// Custom Customs
pub mod day06;
/// Handy Haversacks
pub mod day07;
/// Handheld Halting
pub mod day08;
/// Encoding Error
pub mod day09;
/// Adapter Array
pub mod day10;
/// Seating System
pub mod day11;
/// Rain Risk
pub mod day12;
/// Shuttle Search
pub mod day13;
/// Docking Data
pub mod day14;
/// Rambunctious Recitation
pub mod day15;
/// Ticket Translation
pub mod day16;
/// Conway Cubes
pub mod day17;
/// Operation Order
pub mod day18;
/// Monster Messages
pub mod day19;
/// Jurassic Jigsaw
pub mod day20;
/// Allergen Assessment
pub mod day21;
/// Crab Combat
pub mod day22;
/// Crab Cups
pub mod day23;
/// Lobby Layout
pub mod day24;
/// Combo Breaker
pub mod day25;

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
    (14, day14::solve),
    (15, day15::solve),
    (16, day16::solve),
    (17, day17::solve),
    (18, day18::solve),
    (19, day19::solve),
    (20, day20::solve),
    (21, day21::solve),
    (22, day22::solve),
    (23, day23::solve),
    (24, day24::solve),
    (25, day25::solve),
];
