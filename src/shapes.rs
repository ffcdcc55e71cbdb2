//! Figure types for the drawing store.
//!
//! `Figure` is the closed set of shapes the document format knows about.
//! Constructors validate sizes and colors, so an invalid figure can never
//! enter the store or the codec.

use std::fmt;

use thiserror::Error;

/// Validation failure when constructing a figure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FigureError {
    #[error("{field} cannot be negative (got {value})")]
    InvalidDimension { field: &'static str, value: i32 },

    #[error("color must be a non-empty token without whitespace or quotes (got {0:?})")]
    InvalidColor(String),
}

/// A drawable figure.
///
/// Circle and Rectangle carry one reference point (center / top-left
/// corner); Line carries two independent endpoints, both of which move
/// together under translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Figure {
    Circle {
        cx: i32,
        cy: i32,
        radius: i32,
        fill: String,
    },
    Rectangle {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        fill: String,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        stroke: String,
    },
}

impl Figure {
    /// Create a circle centered at (cx, cy). Fails on a negative radius
    /// or an unusable color token.
    pub fn circle(
        cx: i32,
        cy: i32,
        radius: i32,
        fill: impl Into<String>,
    ) -> Result<Self, FigureError> {
        check_dimension("radius", radius)?;
        let fill = check_color(fill.into())?;
        Ok(Figure::Circle {
            cx,
            cy,
            radius,
            fill,
        })
    }

    /// Create a rectangle with its top-left corner at (x, y).
    pub fn rectangle(
        x: i32,
        y: i32,
        width: i32,
        height: i32,
        fill: impl Into<String>,
    ) -> Result<Self, FigureError> {
        check_dimension("width", width)?;
        check_dimension("height", height)?;
        let fill = check_color(fill.into())?;
        Ok(Figure::Rectangle {
            x,
            y,
            width,
            height,
            fill,
        })
    }

    /// Create a line from (x1, y1) to (x2, y2). Endpoints are free;
    /// only the color is validated.
    pub fn line(
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        stroke: impl Into<String>,
    ) -> Result<Self, FigureError> {
        let stroke = check_color(stroke.into())?;
        Ok(Figure::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
        })
    }

    /// The lowercase kind word used in listings ("circle", "rectangle",
    /// "line").
    pub fn kind(&self) -> &'static str {
        match self {
            Figure::Circle { .. } => "circle",
            Figure::Rectangle { .. } => "rectangle",
            Figure::Line { .. } => "line",
        }
    }
}

/// Listing format: kind word, coordinate fields in declaration order,
/// color last.
impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Circle {
                cx,
                cy,
                radius,
                fill,
            } => {
                write!(f, "circle {cx} {cy} {radius} {fill}")
            }
            Figure::Rectangle {
                x,
                y,
                width,
                height,
                fill,
            } => {
                write!(f, "rectangle {x} {y} {width} {height} {fill}")
            }
            Figure::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
            } => {
                write!(f, "line {x1} {y1} {x2} {y2} {stroke}")
            }
        }
    }
}

fn check_dimension(field: &'static str, value: i32) -> Result<(), FigureError> {
    if value < 0 {
        return Err(FigureError::InvalidDimension { field, value });
    }
    Ok(())
}

// The color token is embedded unescaped inside a single-quoted attribute
// value, so quotes and whitespace would corrupt the document.
fn check_color(color: String) -> Result<String, FigureError> {
    if color.is_empty()
        || color
            .chars()
            .any(|c| c.is_whitespace() || c == '\'' || c == '"')
    {
        return Err(FigureError::InvalidColor(color));
    }
    Ok(color)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_radius_is_rejected() {
        assert_eq!(
            Figure::circle(0, 0, -1, "red"),
            Err(FigureError::InvalidDimension {
                field: "radius",
                value: -1
            })
        );
    }

    #[test]
    fn negative_rectangle_sides_are_rejected() {
        assert!(matches!(
            Figure::rectangle(0, 0, -3, 5, "red"),
            Err(FigureError::InvalidDimension { field: "width", .. })
        ));
        assert!(matches!(
            Figure::rectangle(0, 0, 3, -5, "red"),
            Err(FigureError::InvalidDimension { field: "height", .. })
        ));
    }

    #[test]
    fn zero_sizes_are_allowed() {
        assert!(Figure::circle(1, 2, 0, "red").is_ok());
        assert!(Figure::rectangle(1, 2, 0, 0, "red").is_ok());
    }

    #[test]
    fn unusable_colors_are_rejected() {
        for bad in ["", "light red", "re'd", "re\"d", "\t"] {
            assert!(
                matches!(Figure::circle(0, 0, 1, bad), Err(FigureError::InvalidColor(_))),
                "expected rejection of {bad:?}"
            );
        }
    }

    #[test]
    fn lines_accept_any_endpoints() {
        assert!(Figure::line(-10, -10, -20, -20, "blue").is_ok());
    }

    #[test]
    fn listing_format() {
        assert_eq!(
            Figure::circle(10, 10, 5, "red").unwrap().to_string(),
            "circle 10 10 5 red"
        );
        assert_eq!(
            Figure::rectangle(0, 0, 4, 2, "blue").unwrap().to_string(),
            "rectangle 0 0 4 2 blue"
        );
        assert_eq!(
            Figure::line(1, 1, 5, 5, "green").unwrap().to_string(),
            "line 1 1 5 5 green"
        );
    }
}
