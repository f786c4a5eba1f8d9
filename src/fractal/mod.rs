//! Koch curve generation behind a turtle-style [`Pen`] interface, with a
//! streaming SVG writer.

mod koch;
mod pen;
pub mod svg;

pub use koch::{
    CurveSpec, MAX_DEPTH, draw, draw_snowflake, snowflake, snowflake_bounds, snowflake_origin,
};
pub use pen::{Pen, Point, PointSink, Turtle};
