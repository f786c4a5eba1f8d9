//! Streaming SVG output for pen paths.
//!
//! Points are written as they arrive, in `<polyline>` chunks of at most
//! [`CHUNK_POINTS`] points, so memory stays flat however long the path is.
//! Consecutive chunks share their boundary point.
use std::fmt::{self, Write as _};
use std::io::{self, Write};

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use super::pen::{Point, PointSink};

const MARGIN: f64 = 20.0;

/// Largest number of points in one `<polyline>` element.
pub const CHUNK_POINTS: usize = 1024;

/// Presentation options for [`SvgWriter`].
#[derive(Debug, Clone)]
pub struct SvgStyle {
    /// Document title.
    pub title: String,
    /// Stroke colour of the outline.
    pub stroke: String,
    /// Background fill.
    pub background: String,
}

impl SvgStyle {
    /// Blue outline on white, titled after the recursion level.
    #[must_use]
    pub fn snowflake(depth: u32) -> Self {
        Self {
            title: format!("Koch Snowflake - Level {depth}"),
            stroke: "blue".to_string(),
            background: "white".to_string(),
        }
    }
}

/// Region of turtle space (y grows upward) that the document shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Lower-left corner.
    pub min: Point,
    /// Upper-right corner.
    pub max: Point,
}

impl Frame {
    fn width(&self) -> f64 {
        MARGIN.mul_add(2.0, self.max.x - self.min.x)
    }

    fn height(&self) -> f64 {
        MARGIN.mul_add(2.0, self.max.y - self.min.y)
    }

    /// Flip a turtle point into SVG space and offset it by the margin.
    fn project(&self, p: Point) -> (f64, f64) {
        (p.x - self.min.x + MARGIN, self.max.y - p.y + MARGIN)
    }
}

/// [`PointSink`] that streams an SVG document to `W`.
///
/// The header is written by [`begin`](Self::begin); the closing tag by
/// [`finish`](Self::finish). Write errors during drawing are held back and
/// returned from `finish`.
pub struct SvgWriter<W: Write> {
    xml: Writer<W>,
    frame: Frame,
    stroke: String,
    points: String,
    pending: usize,
    last: Option<Point>,
    error: Option<io::Error>,
}

impl<W: Write> fmt::Debug for SvgWriter<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SvgWriter")
            .field("frame", &self.frame)
            .field("pending", &self.pending)
            .field("failed", &self.error.is_some())
            .finish_non_exhaustive()
    }
}

impl<W: Write> SvgWriter<W> {
    /// Write the document header for `frame` and return a writer ready for
    /// points.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the header cannot be written.
    pub fn begin(out: W, style: &SvgStyle, frame: Frame) -> io::Result<Self> {
        let mut xml = Writer::new_with_indent(out, b' ', 2);
        let (width, height) = (frame.width(), frame.height());
        let size = (format!("{width:.0}"), format!("{height:.0}"));
        let view_box = format!("0 0 {width:.3} {height:.3}");
        let svg = BytesStart::new("svg").with_attributes([
            ("xmlns", "http://www.w3.org/2000/svg"),
            ("width", size.0.as_str()),
            ("height", size.1.as_str()),
            ("viewBox", view_box.as_str()),
        ]);
        emit(&mut xml, Event::Start(svg))?;
        emit(&mut xml, Event::Start(BytesStart::new("title")))?;
        emit(&mut xml, Event::Text(BytesText::new(&style.title)))?;
        emit(&mut xml, Event::End(BytesEnd::new("title")))?;
        let rect = BytesStart::new("rect").with_attributes([
            ("width", "100%"),
            ("height", "100%"),
            ("fill", style.background.as_str()),
        ]);
        emit(&mut xml, Event::Empty(rect))?;
        Ok(Self {
            xml,
            frame,
            stroke: style.stroke.clone(),
            points: String::new(),
            pending: 0,
            last: None,
            error: None,
        })
    }

    /// Flush the last chunk, close the document and return the output.
    ///
    /// # Errors
    ///
    /// Returns the first I/O error met while writing points, or the error
    /// from writing the tail.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error.take() {
            return Err(e);
        }
        if self.pending > 1 {
            self.flush_chunk()?;
        }
        emit(&mut self.xml, Event::End(BytesEnd::new("svg")))?;
        let mut out = self.xml.into_inner();
        out.write_all(b"\n")?;
        Ok(out)
    }

    fn append(&mut self, p: Point) {
        let (x, y) = self.frame.project(p);
        if self.pending > 0 {
            self.points.push(' ');
        }
        let _ = write!(self.points, "{x:.3},{y:.3}");
        self.pending += 1;
    }

    fn flush_chunk(&mut self) -> io::Result<()> {
        let line = BytesStart::new("polyline").with_attributes([
            ("fill", "none"),
            ("stroke", self.stroke.as_str()),
            ("stroke-width", "1"),
            ("points", self.points.as_str()),
        ]);
        emit(&mut self.xml, Event::Empty(line))?;
        self.points.clear();
        self.pending = 0;
        Ok(())
    }
}

impl<W: Write> PointSink for SvgWriter<W> {
    fn push(&mut self, point: Point) {
        if self.error.is_some() {
            return;
        }
        self.append(point);
        self.last = Some(point);
        if self.pending >= CHUNK_POINTS {
            if let Err(e) = self.flush_chunk() {
                self.error = Some(e);
                return;
            }
            if let Some(last) = self.last {
                self.append(last);
            }
        }
    }
}

fn emit<W: Write>(xml: &mut Writer<W>, event: Event<'_>) -> io::Result<()> {
    xml.write_event(event).map_err(io::Error::other)
}
