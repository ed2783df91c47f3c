//! Text and JSON rendering of registry state

use chrono::Local;
use colored::{ColoredString, Colorize};
use std::io::Write;
use tabled::{Table, Tabled};
use triage_core::domain::{CategoryStats, OccupancyStatus, Patient, Snapshot};

const RULE: &str = "----------------------------------------";
const DOUBLE_RULE: &str = "========================================";
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn banner(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", DOUBLE_RULE)?;
    writeln!(out, "{}", "   HOSPITAL MANAGEMENT SYSTEM".bold())?;
    writeln!(out, "{}", DOUBLE_RULE)?;
    writeln!(out)
}

pub fn menu(out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Main Menu:")?;
    writeln!(out, "1) Add new patient")?;
    writeln!(out, "2) Print all patients")?;
    writeln!(out, "3) Get next patient")?;
    writeln!(out, "4) View statistics")?;
    writeln!(out, "5) Clear screen")?;
    writeln!(out, "6) Exit")?;
    write!(out, "Enter your choice (1-6): ")?;
    out.flush()
}

pub fn clear_screen(out: &mut impl Write) -> std::io::Result<()> {
    write!(out, "\x1B[2J\x1B[1;1H")?;
    out.flush()
}

/// Local wall-clock arrival time
pub fn arrival_time(patient: &Patient) -> String {
    patient
        .arrived_at_utc()
        .with_timezone(&Local)
        .format(TIME_FORMAT)
        .to_string()
}

pub fn dispatched(out: &mut impl Write, patient: &Patient) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        format!("{}, please go with the Doctor.", patient.name())
            .green()
            .bold()
    )?;
    writeln!(
        out,
        "({} case, arrived at {})",
        patient.priority(),
        arrival_time(patient)
    )?;
    writeln!(out)
}

/// Per-category listing; `snapshots` holds only non-empty categories
pub fn listing(out: &mut impl Write, snapshots: &[Snapshot<'_>]) -> std::io::Result<()> {
    if snapshots.is_empty() {
        writeln!(
            out,
            "{}",
            "No patients in any specialization at the moment.".yellow()
        )?;
        return writeln!(out);
    }

    for snapshot in snapshots {
        writeln!(
            out,
            "Specialization {} ({} patients):",
            snapshot.category(),
            snapshot.len()
        )?;
        writeln!(out, "{}", RULE)?;
        for patient in snapshot {
            writeln!(
                out,
                "{:<20} ({}, Arrived: {})",
                patient.name(),
                patient.priority(),
                arrival_time(patient)
            )?;
        }
        writeln!(out, "{}", RULE)?;
        writeln!(out)?;
    }

    Ok(())
}

#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Specialization")]
    category: usize,
    #[tabled(rename = "Urgent")]
    urgent: usize,
    #[tabled(rename = "Regular")]
    regular: usize,
    #[tabled(rename = "Total")]
    total: usize,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&CategoryStats> for StatsRow {
    fn from(stats: &CategoryStats) -> Self {
        Self {
            category: stats.category,
            urgent: stats.urgent,
            regular: stats.regular,
            total: stats.total,
            status: status_cell(stats.status).to_string(),
        }
    }
}

fn status_cell(status: OccupancyStatus) -> ColoredString {
    let label = status.to_string();
    match status {
        OccupancyStatus::Empty => label.dimmed(),
        OccupancyStatus::Available => label.green(),
        OccupancyStatus::Busy => label.yellow(),
        OccupancyStatus::Full => label.red().bold(),
    }
}

pub fn statistics(out: &mut impl Write, stats: &[CategoryStats]) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Hospital Statistics:".cyan().bold())?;

    let rows: Vec<StatsRow> = stats.iter().map(StatsRow::from).collect();
    writeln!(out, "{}", Table::new(rows))?;
    writeln!(out)
}

/// Pretty JSON for `--json` mode
pub fn json<T: serde::Serialize + ?Sized>(out: &mut impl Write, value: &T) -> anyhow::Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}
