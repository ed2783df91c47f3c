//! Interactive menu loop
//!
//! Generic over its input and output so whole sessions can be scripted in
//! tests. End of input ends the session the same way "Exit" does.

use crate::render;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use triage_core::domain::{CategoryId, DomainError, Priority};
use triage_core::Registry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddPatient,
    PrintPatients,
    NextPatient,
    Statistics,
    ClearScreen,
    Exit,
}

impl MenuChoice {
    fn from_number(n: usize) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::AddPatient),
            2 => Some(MenuChoice::PrintPatients),
            3 => Some(MenuChoice::NextPatient),
            4 => Some(MenuChoice::Statistics),
            5 => Some(MenuChoice::ClearScreen),
            6 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Whether the session keeps going after a step
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ShellOptions {
    /// Render listing and statistics as JSON
    pub json: bool,
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    registry: Registry,
    options: ShellOptions,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, registry: Registry, options: ShellOptions) -> Self {
        Self {
            input,
            output,
            registry,
            options,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn run(&mut self) -> Result<()> {
        render::banner(&mut self.output)?;

        loop {
            render::menu(&mut self.output)?;
            let Some(choice) = self.read_number(
                "Invalid input. Please enter a number between 1 and 6: ",
                |_, n| MenuChoice::from_number(n).is_some(),
            )?
            else {
                break;
            };
            writeln!(self.output)?;

            let flow = match MenuChoice::from_number(choice) {
                Some(MenuChoice::AddPatient) => self.add_patient()?,
                Some(MenuChoice::PrintPatients) => self.print_patients()?,
                Some(MenuChoice::NextPatient) => self.next_patient()?,
                Some(MenuChoice::Statistics) => self.print_statistics()?,
                Some(MenuChoice::ClearScreen) => {
                    render::clear_screen(&mut self.output)?;
                    render::banner(&mut self.output)?;
                    Flow::Continue
                }
                Some(MenuChoice::Exit) | None => {
                    writeln!(self.output, "Exiting program...")?;
                    Flow::Exit
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Next input line, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    /// Re-prompt until a number accepted by `valid` is entered
    fn read_number(
        &mut self,
        retry_prompt: &str,
        valid: impl Fn(&Registry, usize) -> bool,
    ) -> Result<Option<usize>> {
        loop {
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match line.trim().parse::<usize>() {
                Ok(n) if valid(&self.registry, n) => return Ok(Some(n)),
                _ => write!(self.output, "{}", retry_prompt)?,
            }
        }
    }

    fn read_category(&mut self) -> Result<Option<CategoryId>> {
        let count = self.registry.category_count();
        write!(self.output, "Enter specialization (1-{}): ", count)?;

        let retry = format!(
            "Invalid input. Please enter a number between 1 and {}: ",
            count
        );
        self.read_number(&retry, |registry, n| registry.queue(n).is_ok())
    }

    fn add_patient(&mut self) -> Result<Flow> {
        let Some(category) = self.read_category()? else {
            return Ok(Flow::Exit);
        };

        write!(self.output, "Enter patient name: ")?;
        self.output.flush()?;
        let Some(name) = self.read_line()? else {
            return Ok(Flow::Exit);
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            writeln!(
                self.output,
                "{}",
                "Invalid name. Please enter a valid name.".red()
            )?;
            writeln!(self.output)?;
            return Ok(Flow::Continue);
        }

        write!(self.output, "Enter status (0 for regular, 1 for urgent): ")?;
        let Some(status) = self.read_number(
            "Invalid input. Please enter 0 for regular or 1 for urgent: ",
            |_, n| n <= 1,
        )?
        else {
            return Ok(Flow::Exit);
        };
        let priority = Priority::from_urgent_flag(status == 1);

        match self.registry.admit(category, name, priority) {
            Ok(patient) => {
                let ticket = patient.id().to_string();
                writeln!(self.output, "{}", "Patient added successfully.".green())?;
                writeln!(self.output, "Ticket: {}", ticket)?;
            }
            Err(DomainError::CapacityExceeded { category, .. }) => {
                writeln!(
                    self.output,
                    "{}",
                    format!(
                        "Sorry, we can't add more patients for specialization {}.",
                        category
                    )
                    .yellow()
                )?;
            }
            Err(e) => writeln!(self.output, "{}", e.to_string().red())?,
        }
        writeln!(self.output)?;

        Ok(Flow::Continue)
    }

    fn next_patient(&mut self) -> Result<Flow> {
        let Some(category) = self.read_category()? else {
            return Ok(Flow::Exit);
        };

        match self.registry.dispatch_next(category) {
            Ok(patient) => render::dispatched(&mut self.output, &patient)?,
            Err(DomainError::EmptyQueue { category }) => {
                writeln!(self.output)?;
                writeln!(
                    self.output,
                    "No patients in specialization {} at the moment. Have rest, Doctor.",
                    category
                )?;
                writeln!(self.output)?;
            }
            Err(e) => writeln!(self.output, "{}", e.to_string().red())?,
        }

        Ok(Flow::Continue)
    }

    fn print_patients(&mut self) -> Result<Flow> {
        let snapshots = self.registry.list_non_empty();
        if self.options.json {
            render::json(&mut self.output, &snapshots)?;
        } else {
            render::listing(&mut self.output, &snapshots)?;
        }
        Ok(Flow::Continue)
    }

    fn print_statistics(&mut self) -> Result<Flow> {
        let stats = self.registry.statistics();
        if self.options.json {
            render::json(&mut self.output, &stats)?;
        } else {
            render::statistics(&mut self.output, &stats)?;
        }
        Ok(Flow::Continue)
    }
}
