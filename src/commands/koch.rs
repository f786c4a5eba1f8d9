//! Koch command: render a snowflake outline to an SVG file.
use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::Result;

use crate::cli::KochOpts;
use crate::error::ToolError;
use crate::fractal::svg::{Frame, SvgStyle, SvgWriter};
use crate::fractal::{self, CurveSpec, Turtle};
use crate::logging::Log;
use crate::prompt;

/// Depths above this print a slow-render warning.
pub const SLOW_DEPTH: u32 = 6;

/// Run the koch command.
///
/// # Errors
///
/// Returns an error if the depth is missing, not an integer, or out of range,
/// the length is not positive, or the SVG file cannot be written.
pub fn run(opts: &KochOpts, log: &dyn Log) -> Result<()> {
    let depth = match opts.depth {
        Some(d) => d,
        None => prompt::ask_integer("Enter recursion level (0-6 recommended): ")?,
    };
    let spec = CurveSpec::new(opts.length, depth)?;

    if spec.depth() > SLOW_DEPTH {
        log.warn("High recursion levels may be slow to render");
    }

    log.info(&format!(
        "Drawing Koch snowflake with recursion level {}...",
        spec.depth()
    ));
    let file = File::create(&opts.output).map_err(|e| ToolError::io(&opts.output, e))?;
    write_snowflake(&spec, BufWriter::new(file))
        .and_then(|mut out| out.flush())
        .map_err(|e| ToolError::io(&opts.output, e))?;
    log.debug(&format!(
        "{} segments of length {:.4}",
        3 * u128::from(spec.segment_count()),
        spec.segment_length()
    ));
    log.info(&format!("Wrote {}", opts.output.display()));
    Ok(())
}

/// Draw a snowflake for `spec`, streaming the SVG document into `out`.
///
/// # Errors
///
/// Returns the first I/O error raised by `out`.
pub fn write_snowflake<W: Write>(spec: &CurveSpec, out: W) -> io::Result<W> {
    let (min, max) = fractal::snowflake_bounds(spec.length());
    let svg = SvgWriter::begin(out, &SvgStyle::snowflake(spec.depth()), Frame { min, max })?;
    let (x, y) = fractal::snowflake_origin(spec.length());
    let mut turtle = Turtle::with_sink(x, y, svg);
    fractal::draw_snowflake(&mut turtle, spec);
    turtle.into_sink().finish()
}
