//! Command-line interface for solving one puzzle or a whole year

use crate::io::configuration::DEFAULT_INPUTS_DIR;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_image_as_png;
use crate::io::input::{default_input_path, read_input};
use crate::io::progress::ProgressManager;
use crate::puzzles::registry::{self, PuzzleId, available_days, available_years};
use crate::puzzles::{Answers, year2020};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

/// Year and day of the only puzzle that can be rendered
pub const RENDERABLE: PuzzleId = PuzzleId::new(2020, 20);

#[derive(Parser, Debug)]
#[command(name = "advent")]
#[command(author, version, about = "Solve daily puzzles from plain-text inputs")]
/// Command-line arguments for the puzzle runner
pub struct Cli {
    /// Event year
    #[arg(value_name = "YEAR")]
    pub year: u16,

    /// Day of December; omit to run every day with an input file
    #[arg(value_name = "DAY", value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Input file, overriding the default location
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Directory holding `year<YYYY>/day<DD>.txt` inputs
    #[arg(long, value_name = "DIR", default_value = DEFAULT_INPUTS_DIR)]
    pub inputs: PathBuf,

    /// Suppress progress and status output
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the reassembled image of the tile puzzle to this PNG
    #[arg(short, long, value_name = "PNG")]
    pub render: Option<PathBuf>,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Input file for `day`: the explicit path if given, else the default
    pub fn input_path(&self, day: u8) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| default_input_path(&self.inputs, self.year, day))
    }

    /// Reject argument combinations that cannot run
    ///
    /// # Errors
    ///
    /// Returns [`crate::AdventError::InvalidParameter`] for an unknown year,
    /// an input path without a day, or `--render` on a puzzle other than the
    /// tile puzzle
    pub fn validate(&self) -> Result<()> {
        if !available_years().contains(&self.year) {
            return Err(invalid_parameter(
                "year",
                &self.year,
                &format!("solutions exist for {:?}", available_years()),
            ));
        }
        if self.day.is_none() && self.input.is_some() {
            return Err(invalid_parameter(
                "input",
                &self.input_display(),
                &"an input file needs a day",
            ));
        }
        if let Some(ref render) = self.render
            && self.day.map(|day| PuzzleId::new(self.year, day)) != Some(RENDERABLE)
        {
            return Err(invalid_parameter(
                "render",
                &render.display(),
                &format!("only {RENDERABLE} can be rendered"),
            ));
        }
        Ok(())
    }

    fn input_display(&self) -> String {
        self.input
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_default()
    }
}

/// Runs the requested puzzles with optional progress display
pub struct PuzzleRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl PuzzleRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Solve and print according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if validation, reading an input or solving fails
    // Allow print for the answers themselves
    #[allow(clippy::print_stdout)]
    pub fn run(&mut self) -> Result<()> {
        self.cli.validate()?;

        match self.cli.day {
            Some(day) => {
                let answers = self.solve_day(day)?;
                println!("{answers}");
            }
            None => {
                for (id, answers) in self.solve_year()? {
                    println!("{id}\n{answers}");
                }
            }
        }

        Ok(())
    }

    /// Solve one day, rendering the image if requested
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read, the puzzle is unknown,
    /// solving fails or the image cannot be written
    // Allow print for user feedback about the input in use
    #[allow(clippy::print_stderr)]
    pub fn solve_day(&self, day: u8) -> Result<Answers> {
        let id = PuzzleId::new(self.cli.year, day);
        let path = self.cli.input_path(day);
        if !self.cli.quiet {
            eprintln!("Running using input from {}", path.display());
        }
        let text = read_input(&path)?;

        match self.cli.render {
            Some(ref output) if id == RENDERABLE => {
                let tiles = year2020::day20::parse(&text)?;
                let (arrangement, result) = year2020::day20::reassemble(&tiles)?;
                export_image_as_png(&result.image, &result.covered, output)?;
                Ok(Answers::new(arrangement.corner_product()?, result.roughness))
            }
            _ => registry::solve(id, &text),
        }
    }

    /// Solve every registered day of the year that has a default input
    ///
    /// # Errors
    ///
    /// Returns the first read or solving error
    // Allow print for user feedback about skipped days
    #[allow(clippy::print_stderr)]
    pub fn solve_year(&mut self) -> Result<Vec<(PuzzleId, Answers)>> {
        let days = available_days(self.cli.year);
        if days.is_empty() {
            return Err(invalid_parameter(
                "year",
                &self.cli.year,
                &format!("solutions exist for {:?}", available_years()),
            ));
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(days.len(), &self.cli.year.to_string());
        }

        let mut solved = Vec::new();
        for day in days {
            let id = PuzzleId::new(self.cli.year, day);
            let label = id.to_string();
            let start_time = Instant::now();

            if let Some(ref pm) = self.progress_manager {
                pm.start_puzzle(&label);
            }

            let path = default_input_path(&self.cli.inputs, self.cli.year, day);
            if path.is_file() {
                let text = read_input(&path)?;
                solved.push((id, registry::solve(id, &text)?));
            } else if !self.cli.quiet {
                let note = || eprintln!("Skipping {label}: no input at {}", path.display());
                match self.progress_manager {
                    Some(ref pm) => pm.suspend(note),
                    None => note(),
                }
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_puzzle(&label, start_time.elapsed());
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(solved)
    }
}
