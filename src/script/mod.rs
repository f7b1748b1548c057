//! Line-oriented drawing script.
//!
//! Each non-blank line is one command with whitespace-separated arguments.
//! Algorithm names are resolved here, so a parsed [`Command`] only ever
//! carries a valid selector.
//!
//! # Syntax
//!
//! ```text
//! resetCanvas <width> <height>
//! saveCanvas <name>
//! setColor <r> <g> <b>
//! drawLine <id> <x0> <y0> <x1> <y1> <Naive|DDA|Bresenham>
//! drawPolyline <id> <x0> <y0> <x1> <y1> ... <Naive|DDA|Bresenham>
//! drawPolygon <id> <x0> <y0> <x1> <y1> ... <Naive|DDA|Bresenham>
//! drawEllipse <id> <x0> <y0> <x1> <y1>
//! drawCurve <id> <x0> <y0> <x1> <y1> ... <Bezier|B-spline>
//! translate <id> <dx> <dy>
//! rotate <id> <x> <y> <degrees>
//! scale <id> <x> <y> <factor>
//! clip <id> <x0> <y0> <x1> <y1> <Cohen-Sutherland|Liang-Barsky>
//! ```
//!
//! # Example
//!
//! ```rust
//! use trueno_raster::script::{parse_command, Command};
//!
//! let cmd = parse_command("translate line1 10 -5").unwrap();
//! assert!(matches!(cmd, Some(Command::Translate { dx: 10, dy: -5, .. })));
//! ```

mod runner;

pub use runner::{LineError, RunReport, ScriptRunner};

use std::str::FromStr;

use crate::clip::ClipAlgorithm;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::{ClipWindow, Point, MAX_COORDINATE};
use crate::primitive::PrimitiveKind;
use crate::render::{CurveAlgorithm, LineAlgorithm};

/// A parsed script command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Resize the canvas and drop every primitive.
    ResetCanvas {
        /// Canvas width in pixels.
        width: u32,
        /// Canvas height in pixels.
        height: u32,
    },
    /// Render the scene and write `<name>.png`.
    SaveCanvas {
        /// File stem.
        name: String,
    },
    /// Set the pen color for subsequently defined primitives.
    SetColor(Rgba),
    /// Define (or redefine) a primitive.
    Draw {
        /// Primitive id.
        id: String,
        /// Shape and algorithm.
        kind: PrimitiveKind,
        /// Control points.
        points: Vec<Point>,
    },
    /// Translate a primitive.
    Translate {
        /// Primitive id.
        id: String,
        /// Horizontal offset.
        dx: i32,
        /// Vertical offset.
        dy: i32,
    },
    /// Rotate a primitive clockwise about a pivot.
    Rotate {
        /// Primitive id.
        id: String,
        /// Rotation center.
        pivot: Point,
        /// Angle in degrees.
        degrees: f64,
    },
    /// Scale a primitive about a pivot.
    Scale {
        /// Primitive id.
        id: String,
        /// Scaling center.
        pivot: Point,
        /// Uniform scale factor.
        factor: f64,
    },
    /// Clip a line primitive to a window.
    Clip {
        /// Primitive id.
        id: String,
        /// Clip rectangle.
        window: ClipWindow,
        /// Clipping algorithm.
        algorithm: ClipAlgorithm,
    },
}

impl Command {
    /// Script keyword of this command.
    #[must_use]
    pub const fn keyword(&self) -> &'static str {
        match self {
            Self::ResetCanvas { .. } => "resetCanvas",
            Self::SaveCanvas { .. } => "saveCanvas",
            Self::SetColor(_) => "setColor",
            Self::Draw { kind, .. } => match kind {
                PrimitiveKind::Line(_) => "drawLine",
                PrimitiveKind::Polyline(_) | PrimitiveKind::Pencil => "drawPolyline",
                PrimitiveKind::Polygon(_) => "drawPolygon",
                PrimitiveKind::Ellipse => "drawEllipse",
                PrimitiveKind::Curve(_) => "drawCurve",
            },
            Self::Translate { .. } => "translate",
            Self::Rotate { .. } => "rotate",
            Self::Scale { .. } => "scale",
            Self::Clip { .. } => "clip",
        }
    }
}

/// Parse one script line.
///
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// Returns [`Error::InvalidCommand`] for an unknown keyword, a wrong number of
/// arguments or a malformed number, [`Error::CoordinateOutOfRange`] for a
/// coordinate or offset beyond `±MAX_COORDINATE`, and
/// [`Error::UnknownAlgorithm`] for an algorithm name outside the fixed set.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&keyword, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match keyword {
        "resetCanvas" => {
            expect_args(keyword, args, 2)?;
            Command::ResetCanvas {
                width: parse_num(args[0])?,
                height: parse_num(args[1])?,
            }
        }
        "saveCanvas" => {
            expect_args(keyword, args, 1)?;
            Command::SaveCanvas {
                name: args[0].to_string(),
            }
        }
        "setColor" => {
            expect_args(keyword, args, 3)?;
            Command::SetColor(Rgba::rgb(
                parse_num(args[0])?,
                parse_num(args[1])?,
                parse_num(args[2])?,
            ))
        }
        "drawLine" => {
            expect_args(keyword, args, 6)?;
            Command::Draw {
                id: args[0].to_string(),
                kind: PrimitiveKind::Line(LineAlgorithm::from_str(args[5])?),
                points: parse_points(&args[1..5])?,
            }
        }
        "drawPolyline" | "drawPolygon" => {
            let (id, coords, alg) = split_point_list(keyword, args)?;
            let alg = LineAlgorithm::from_str(alg)?;
            let kind = if keyword == "drawPolygon" {
                PrimitiveKind::Polygon(alg)
            } else {
                PrimitiveKind::Polyline(alg)
            };
            Command::Draw {
                id: id.to_string(),
                kind,
                points: parse_points(coords)?,
            }
        }
        "drawEllipse" => {
            expect_args(keyword, args, 5)?;
            Command::Draw {
                id: args[0].to_string(),
                kind: PrimitiveKind::Ellipse,
                points: parse_points(&args[1..5])?,
            }
        }
        "drawCurve" => {
            let (id, coords, alg) = split_point_list(keyword, args)?;
            Command::Draw {
                id: id.to_string(),
                kind: PrimitiveKind::Curve(CurveAlgorithm::from_str(alg)?),
                points: parse_points(coords)?,
            }
        }
        "translate" => {
            expect_args(keyword, args, 3)?;
            Command::Translate {
                id: args[0].to_string(),
                dx: parse_coord(args[1])?,
                dy: parse_coord(args[2])?,
            }
        }
        "rotate" => {
            expect_args(keyword, args, 4)?;
            Command::Rotate {
                id: args[0].to_string(),
                pivot: Point::new(parse_coord(args[1])?, parse_coord(args[2])?),
                degrees: parse_real(args[3])?,
            }
        }
        "scale" => {
            expect_args(keyword, args, 4)?;
            Command::Scale {
                id: args[0].to_string(),
                pivot: Point::new(parse_coord(args[1])?, parse_coord(args[2])?),
                factor: parse_real(args[3])?,
            }
        }
        "clip" => {
            expect_args(keyword, args, 6)?;
            Command::Clip {
                id: args[0].to_string(),
                window: ClipWindow::new(
                    parse_coord(args[1])?,
                    parse_coord(args[2])?,
                    parse_coord(args[3])?,
                    parse_coord(args[4])?,
                ),
                algorithm: ClipAlgorithm::from_str(args[5])?,
            }
        }
        _ => return Err(Error::InvalidCommand(format!("unknown command: {keyword}"))),
    };

    Ok(Some(command))
}

fn expect_args(keyword: &str, args: &[&str], count: usize) -> Result<()> {
    if args.len() == count {
        Ok(())
    } else {
        Err(Error::InvalidCommand(format!(
            "{keyword} takes {count} arguments, got {}",
            args.len()
        )))
    }
}

/// Split `id x0 y0 ... xn yn alg` into its parts, requiring at least two points.
fn split_point_list<'a>(
    keyword: &str,
    args: &'a [&'a str],
) -> Result<(&'a str, &'a [&'a str], &'a str)> {
    match args {
        [id, coords @ .., alg] if coords.len() >= 4 && coords.len() % 2 == 0 => {
            Ok((*id, coords, *alg))
        }
        _ => Err(Error::InvalidCommand(format!(
            "{keyword} takes an id, at least two x y pairs and an algorithm"
        ))),
    }
}

fn parse_points(coords: &[&str]) -> Result<Vec<Point>> {
    coords
        .chunks_exact(2)
        .map(|pair| Ok(Point::new(parse_coord(pair[0])?, parse_coord(pair[1])?)))
        .collect()
}

/// Parse a coordinate or offset, bounded by `±MAX_COORDINATE`.
fn parse_coord(token: &str) -> Result<i32> {
    let value: i64 = parse_num(token)?;
    if value.unsigned_abs() > u64::from(MAX_COORDINATE.unsigned_abs()) {
        return Err(Error::CoordinateOutOfRange { value });
    }
    Ok(value as i32)
}

fn parse_real(token: &str) -> Result<f64> {
    let value: f64 = parse_num(token)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidCommand(format!("not a finite number: {token}")))
    }
}

fn parse_num<T: FromStr>(token: &str) -> Result<T> {
    token
        .parse()
        .map_err(|_| Error::InvalidCommand(format!("not a valid number: {token}")))
}
