//! Drawing capability used by the curve generator.

/// A point in turtle coordinates (y grows upward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

/// Minimal turtle-graphics interface.
///
/// The curve generator only ever moves forward and turns; any backend that
/// can do both can draw a Koch curve.
#[cfg_attr(test, mockall::automock)]
pub trait Pen {
    /// Move forward by `length` along the current heading, drawing a line.
    fn advance(&mut self, length: f64);
    /// Rotate the heading by `degrees`; positive turns left (counter-clockwise).
    fn turn(&mut self, degrees: f64);
}

/// Receiver for the points a [`Turtle`] visits, starting point first.
pub trait PointSink {
    /// Accept the next point of the path.
    fn push(&mut self, point: Point);
}

impl PointSink for Vec<Point> {
    fn push(&mut self, point: Point) {
        Self::push(self, point);
    }
}

/// Pen that tracks position and heading and hands every visited point to a
/// [`PointSink`]. The default sink records the whole path in memory.
#[derive(Debug, Clone)]
pub struct Turtle<S = Vec<Point>> {
    position: Point,
    heading: f64,
    sink: S,
}

impl Turtle {
    /// Start a recording turtle at `(x, y)` heading east.
    #[must_use]
    pub fn at(x: f64, y: f64) -> Self {
        Self::with_sink(x, y, Vec::new())
    }

    /// Every point visited so far, starting point first.
    #[must_use]
    pub fn path(&self) -> &[Point] {
        &self.sink
    }

    /// Consume the turtle and return its path.
    #[must_use]
    pub fn into_path(self) -> Vec<Point> {
        self.sink
    }
}

impl<S: PointSink> Turtle<S> {
    /// Start at `(x, y)` heading east, feeding points to `sink`.
    pub fn with_sink(x: f64, y: f64, mut sink: S) -> Self {
        let position = Point { x, y };
        sink.push(position);
        Self {
            position,
            heading: 0.0,
            sink,
        }
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Current heading in degrees, normalised to `[0, 360)`.
    #[must_use]
    pub fn heading(&self) -> f64 {
        self.heading.rem_euclid(360.0)
    }

    /// Consume the turtle and return its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: PointSink> Pen for Turtle<S> {
    fn advance(&mut self, length: f64) {
        let radians = self.heading.to_radians();
        self.position = Point {
            x: length.mul_add(radians.cos(), self.position.x),
            y: length.mul_add(radians.sin(), self.position.y),
        };
        self.sink.push(self.position);
    }

    fn turn(&mut self, degrees: f64) {
        self.heading += degrees;
    }
}
