//! Koch curve and snowflake generation.
use crate::error::ToolError;

use super::pen::{Pen, Point};

/// Deepest subdivision accepted: the largest depth whose `4^depth` segment
/// count still fits in a `u64`.
pub const MAX_DEPTH: u32 = 31;

/// Validated curve parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSpec {
    length: f64,
    depth: u32,
}

impl CurveSpec {
    /// Validate a side `length` and subdivision `depth`.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::InvalidInput`] if `depth` is negative or above
    /// [`MAX_DEPTH`], or `length` is not a positive finite number.
    pub fn new(length: f64, depth: i64) -> Result<Self, ToolError> {
        if depth < 0 {
            return Err(ToolError::invalid_input(
                "Recursion level must be non-negative",
            ));
        }
        let depth = u32::try_from(depth)
            .ok()
            .filter(|d| *d <= MAX_DEPTH)
            .ok_or_else(|| {
                ToolError::invalid_input(format!("Recursion level must be at most {MAX_DEPTH}"))
            })?;
        if !length.is_finite() || length <= 0.0 {
            return Err(ToolError::invalid_input("Length must be positive"));
        }
        Ok(Self { length, depth })
    }

    /// Side length.
    #[must_use]
    pub const fn length(&self) -> f64 {
        self.length
    }

    /// Subdivision depth.
    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    /// Number of straight segments in one curve: `4^depth`.
    #[must_use]
    pub const fn segment_count(&self) -> u64 {
        4u64.pow(self.depth)
    }

    /// Length of each straight segment: `length / 3^depth`.
    #[must_use]
    pub fn segment_length(&self) -> f64 {
        self.length / 3f64.powi(i32::try_from(self.depth).unwrap_or(i32::MAX))
    }
}

/// Draw one Koch curve of `length` with `depth` levels of subdivision.
///
/// Ends `length` further along the starting heading with a net turn of zero.
///
/// # Errors
///
/// Returns [`ToolError::InvalidInput`] before touching the pen if the
/// parameters are rejected by [`CurveSpec::new`].
pub fn draw<P: Pen + ?Sized>(pen: &mut P, length: f64, depth: i64) -> Result<(), ToolError> {
    let spec = CurveSpec::new(length, depth)?;
    koch_curve(pen, spec.length, spec.depth);
    Ok(())
}

/// Draw a closed snowflake: three curves joined by 120 degree right turns.
///
/// # Errors
///
/// Returns [`ToolError::InvalidInput`] before touching the pen if the
/// parameters are rejected by [`CurveSpec::new`].
pub fn snowflake<P: Pen + ?Sized>(pen: &mut P, length: f64, depth: i64) -> Result<(), ToolError> {
    let spec = CurveSpec::new(length, depth)?;
    draw_snowflake(pen, &spec);
    Ok(())
}

/// Draw a snowflake from already validated parameters.
pub fn draw_snowflake<P: Pen + ?Sized>(pen: &mut P, spec: &CurveSpec) {
    for _ in 0..3 {
        koch_curve(pen, spec.length, spec.depth);
        pen.turn(-120.0);
    }
}

/// Starting point that roughly centres a snowflake of side `length` on the
/// origin.
#[must_use]
pub fn snowflake_origin(length: f64) -> (f64, f64) {
    (-length / 2.0, length / 3.0)
}

/// Lower-left and upper-right corners of a square holding the snowflake
/// drawn from [`snowflake_origin`].
///
/// The outline never leaves the circumcircle of its base triangle, so the
/// square around that circle bounds every depth.
#[must_use]
pub fn snowflake_bounds(length: f64) -> (Point, Point) {
    let radius = length / 3f64.sqrt();
    let centre_y = length / 3.0 - length * 3f64.sqrt() / 6.0;
    (
        Point {
            x: -radius,
            y: centre_y - radius,
        },
        Point {
            x: radius,
            y: centre_y + radius,
        },
    )
}

fn koch_curve<P: Pen + ?Sized>(pen: &mut P, length: f64, depth: u32) {
    if depth == 0 {
        pen.advance(length);
        return;
    }
    let third = length / 3.0;
    koch_curve(pen, third, depth - 1);
    pen.turn(60.0);
    koch_curve(pen, third, depth - 1);
    pen.turn(-120.0);
    koch_curve(pen, third, depth - 1);
    pen.turn(60.0);
    koch_curve(pen, third, depth - 1);
}
