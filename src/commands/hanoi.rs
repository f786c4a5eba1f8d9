//! Hanoi command: solve the puzzle and trace or report the moves.
use std::cell::RefCell;
use std::io::{self, BufWriter, Write};

use anyhow::{Context as _, Result};
use serde::ser::{Error as _, SerializeSeq as _, SerializeStruct as _};
use serde::{Serialize, Serializer};

use crate::cli::HanoiOpts;
use crate::error::ToolError;
use crate::hanoi::{self, Peg, Towers};
use crate::logging::Log;
use crate::prompt;

/// Disk counts above this print a warning with the total move count.
pub const LARGE_DISK_COUNT: u32 = 10;

/// Run the hanoi command.
///
/// # Errors
///
/// Returns an error if the disk count is missing, not an integer, or out of
/// range, or if the JSON report cannot be produced.
pub fn run(opts: &HanoiOpts, log: &dyn Log) -> Result<()> {
    let requested = match opts.disks {
        Some(n) => n,
        None => prompt::ask_integer("Enter number of disks: ")?,
    };
    let disks = disk_count(requested)?;

    if disks > LARGE_DISK_COUNT {
        log.warn("Large number of disks will result in many steps");
        log.warn(&format!(
            "Total moves required: {}",
            hanoi::total_moves(disks)
        ));
    }

    if opts.json {
        let mut out = write_json_report(disks, BufWriter::new(io::stdout().lock()))?;
        writeln!(out).and_then(|()| out.flush()).context("writing hanoi report")?;
        return Ok(());
    }

    let moves = trace(disks, !opts.quiet, log)?;
    log.info(&format!("Solved {disks} disks in {moves} moves"));
    Ok(())
}

/// Convert a raw count into a disk count.
///
/// # Errors
///
/// Returns [`ToolError::InvalidInput`] for counts below one or beyond
/// [`hanoi::MAX_DISKS`].
pub fn disk_count(requested: i64) -> Result<u32, ToolError> {
    if requested < 1 {
        return Err(ToolError::invalid_input(
            "Number of disks must be at least 1",
        ));
    }
    u32::try_from(requested)
        .ok()
        .filter(|n| *n <= hanoi::MAX_DISKS)
        .ok_or_else(|| {
            ToolError::invalid_input(format!(
                "Number of disks must be at most {}",
                hanoi::MAX_DISKS
            ))
        })
}

/// Solve for `disks`, logging every move and intermediate state when
/// `show_steps` is set. Returns the number of moves.
///
/// # Errors
///
/// Returns [`ToolError::InvalidInput`] for an invalid disk count.
pub fn trace(disks: u32, show_steps: bool, log: &dyn Log) -> Result<u64, ToolError> {
    let mut towers = Towers::new(disks)?;
    if show_steps {
        log.stage("Initial state");
        log.info(&towers.to_string());
    }
    let moves = hanoi::transfer(
        disks,
        Peg::A,
        Peg::C,
        Peg::B,
        &mut towers,
        &mut |mv, state: &Towers| {
            if show_steps {
                log.info(&mv.to_string());
                log.info(&format!("Intermediate state: {state}"));
            }
        },
    )?;
    if show_steps {
        log.stage("Final state");
        log.info(&towers.to_string());
    }
    Ok(moves)
}

/// Solve for `disks` and stream the report to `out` as pretty JSON.
///
/// The document has the fields `disks`, `total_moves`, `moves` and
/// `final_state`. Moves are serialised as the solver produces them, so memory
/// use does not grow with the move count.
///
/// # Errors
///
/// Returns an error for an invalid disk count or a write failure.
pub fn write_json_report<W: Write>(disks: u32, out: W) -> Result<W> {
    let mut ser = serde_json::Serializer::pretty(out);
    let final_state = RefCell::new(None);
    let mut doc = ser
        .serialize_struct("HanoiReport", 4)
        .context("writing hanoi report")?;
    doc.serialize_field("disks", &disks)?;
    doc.serialize_field("total_moves", &hanoi::total_moves(disks))?;
    doc.serialize_field(
        "moves",
        &MoveStream {
            disks,
            final_state: &final_state,
        },
    )?;
    let towers = final_state
        .into_inner()
        .context("solver finished without a final state")?;
    doc.serialize_field("final_state", &towers)?;
    serde::ser::SerializeStruct::end(doc)?;
    Ok(ser.into_inner())
}

/// Serialises the solution for `disks` as a JSON array while solving, and
/// leaves the solved towers in `final_state`.
struct MoveStream<'a> {
    disks: u32,
    final_state: &'a RefCell<Option<Towers>>,
}

impl Serialize for MoveStream<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = usize::try_from(hanoi::total_moves(self.disks)).ok();
        let mut seq = serializer.serialize_seq(len)?;
        let mut failed = None;
        let towers = hanoi::solve(self.disks, &mut |mv, _: &Towers| {
            if failed.is_none()
                && let Err(e) = seq.serialize_element(&mv)
            {
                failed = Some(e);
            }
        })
        .map_err(S::Error::custom)?;
        if let Some(e) = failed {
            return Err(e);
        }
        self.final_state.replace(Some(towers));
        seq.end()
    }
}
