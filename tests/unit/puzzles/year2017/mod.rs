mod day01;
mod day02;
mod day04;
mod day06;
mod day08;
mod day13;
