//! Plain-text rendering of a [`HarnessReport`].
//!
//! For each scenario the operands are listed row by row, then the reference
//! product for every transpose mode. A kernel value that disagrees is written
//! on its own `error:` line under the row it belongs to. The last line is
//! the verdict, `PASS` or `FAIL`.

use std::io::{self, Write};

use bam_core::Grid;

use crate::harness::{HarnessReport, ModeOutcome};

const RULE: &str = "====================";

fn write_row<W: Write>(out: &mut W, i: usize, row: &[i64]) -> io::Result<()> {
    write!(out, "row {}:", i)?;
    for v in row {
        write!(out, " {}", v)?;
    }
    writeln!(out)
}

fn write_grid<W: Write, const N: usize>(out: &mut W, grid: &Grid<N>) -> io::Result<()> {
    for (i, row) in grid.iter().enumerate() {
        write_row(out, i, row)?;
    }
    Ok(())
}

fn write_mode<W: Write, const N: usize>(out: &mut W, outcome: &ModeOutcome<N>) -> io::Result<()> {
    writeln!(
        out,
        "-- transpose selector {} ({}) --",
        outcome.mode.selector(),
        outcome.mode
    )?;
    for (i, row) in outcome.reference.iter().enumerate() {
        write_row(out, i, row)?;
        for output in &outcome.outputs {
            for (j, (&want, &got)) in row.iter().zip(output.result[i].iter()).enumerate() {
                if want != got {
                    writeln!(
                        out,
                        "error: row {} column {}: {} produced {}, reference is {}",
                        i, j, output.kernel, got, want
                    )?;
                }
            }
        }
    }
    Ok(())
}

/// Write the full report, ending with the verdict line.
pub fn write_report<W: Write, const N: usize>(
    out: &mut W,
    report: &HarnessReport<N>,
) -> io::Result<()> {
    for outcome in &report.outcomes {
        let scenario = &outcome.scenario;
        writeln!(out, "{} scenario: {} ({}) {}", RULE, scenario.name, scenario.category, RULE)?;
        writeln!(out, "A inputs")?;
        write_grid(out, &scenario.a)?;
        writeln!(out, "B inputs")?;
        write_grid(out, &scenario.b)?;
        writeln!(out, "outputs")?;
        for mode in &outcome.modes {
            write_mode(out, mode)?;
        }
        writeln!(out)?;
    }
    writeln!(
        out,
        "{} comparisons, {} mismatches",
        report.comparisons,
        report.mismatches.len()
    )?;
    writeln!(out, "{}", report.verdict())
}
