//! Text codec for the figure document.
//!
//! The format is a restrictive SVG subset, not XML: a fixed `<svg ...>`
//! header line, one self-closed shape tag per line, and a `</svg>` footer.
//! Attribute values are single-quoted with no escaping. Parsing is
//! fail-soft: a malformed line is skipped with a warning, and a document
//! with broken framing yields an empty figure list, never an error.

use std::collections::HashMap;
use std::fmt::Write;

use thiserror::Error;

use crate::shapes::{Figure, FigureError};

/// Canonical header. Header attributes are ignored on parse and
/// regenerated on every serialize.
pub const HEADER: &str = "<svg xmlns='http://www.w3.org/2000/svg' width='500' height='500'>";

/// Canonical footer.
pub const FOOTER: &str = "</svg>";

/// Recoverable conditions recorded while parsing. None of these abort the
/// parse; each names the 1-based document line it came from where that
/// applies.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseWarning {
    #[error("document has no '>' / '</svg>' framing; no figures loaded")]
    MalformedDocument,

    #[error("line {line}: unrecognized tag, skipped: {text}")]
    UnrecognizedTag { line: usize, text: String },

    #[error("line {line}: <{tag}> is missing attribute '{attribute}'")]
    MissingAttribute {
        line: usize,
        tag: &'static str,
        attribute: &'static str,
    },

    #[error("line {line}: attribute '{attribute}' is not an integer (got {value:?})")]
    InvalidNumber {
        line: usize,
        attribute: &'static str,
        value: String,
    },

    #[error("line {line}: rejected figure: {source}")]
    InvalidFigure { line: usize, source: FigureError },
}

/// Parse a document into its figures plus whatever was wrong with it.
///
/// Broken framing (no `>`, no `</svg>`, or the footer before the header)
/// degrades to an empty list with a single structural warning.
pub fn parse(text: &str) -> (Vec<Figure>, Vec<ParseWarning>) {
    let mut figures = Vec::new();
    let mut warnings = Vec::new();

    let Some(body) = document_body(text) else {
        warnings.push(ParseWarning::MalformedDocument);
        return (figures, warnings);
    };

    for (index, raw) in body.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line, index + 1) {
            Ok(Some(figure)) => figures.push(figure),
            // Lines that don't even look like a tag are passed over
            // silently.
            Ok(None) => {}
            Err(warning) => warnings.push(warning),
        }
    }

    (figures, warnings)
}

/// Serialize figures in sequence order with canonical attribute order and
/// whitespace. The output fully replaces any previous document.
pub fn serialize(figures: &[Figure]) -> String {
    let mut out = String::new();
    writeln!(out, "{HEADER}").unwrap();
    for figure in figures {
        match figure {
            Figure::Circle {
                cx,
                cy,
                radius,
                fill,
            } => {
                writeln!(out, "  <circle cx='{cx}' cy='{cy}' r='{radius}' fill='{fill}' />")
                    .unwrap();
            }
            Figure::Rectangle {
                x,
                y,
                width,
                height,
                fill,
            } => {
                writeln!(
                    out,
                    "  <rect x='{x}' y='{y}' width='{width}' height='{height}' fill='{fill}' />"
                )
                .unwrap();
            }
            Figure::Line {
                x1,
                y1,
                x2,
                y2,
                stroke,
            } => {
                writeln!(
                    out,
                    "  <line x1='{x1}' y1='{y1}' x2='{x2}' y2='{y2}' stroke='{stroke}' />"
                )
                .unwrap();
            }
        }
    }
    out.push_str(FOOTER);
    out.push('\n');
    out
}

/// The text between the first `>` (end of the opening `<svg ...>` tag)
/// and the last `</svg>`. `None` when either marker is missing or they
/// are inverted.
fn document_body(text: &str) -> Option<&str> {
    let start = text.find('>')? + 1;
    let end = text.rfind(FOOTER)?;
    if start > end {
        return None;
    }
    Some(&text[start..end])
}

/// Parse one trimmed, non-blank body line. `Ok(None)` means the line is
/// not a tag at all and is skipped without comment.
fn parse_line(line: &str, number: usize) -> Result<Option<Figure>, ParseWarning> {
    if !line.starts_with('<') {
        return Ok(None);
    }

    let attrs = attributes(line);
    let figure = if line.starts_with("<circle") {
        Figure::circle(
            require_int(&attrs, "circle", "cx", number)?,
            require_int(&attrs, "circle", "cy", number)?,
            require_int(&attrs, "circle", "r", number)?,
            require(&attrs, "circle", "fill", number)?,
        )
    } else if line.starts_with("<rect") {
        Figure::rectangle(
            require_int(&attrs, "rect", "x", number)?,
            require_int(&attrs, "rect", "y", number)?,
            require_int(&attrs, "rect", "width", number)?,
            require_int(&attrs, "rect", "height", number)?,
            require(&attrs, "rect", "fill", number)?,
        )
    } else if line.starts_with("<line") {
        Figure::line(
            require_int(&attrs, "line", "x1", number)?,
            require_int(&attrs, "line", "y1", number)?,
            require_int(&attrs, "line", "x2", number)?,
            require_int(&attrs, "line", "y2", number)?,
            require(&attrs, "line", "stroke", number)?,
        )
    } else {
        return Err(ParseWarning::UnrecognizedTag {
            line: number,
            text: line.to_string(),
        });
    };

    // A figure the constructors reject (e.g. a hand-edited negative size)
    // is treated exactly like any other bad line: skipped with a warning.
    figure.map(Some).map_err(|source| ParseWarning::InvalidFigure {
        line: number,
        source,
    })
}

/// Scan `name='value'` pairs out of a tag line into an unordered lookup,
/// so attribute order within the line never matters. Values run to the
/// next single quote; there is no escaping. On a duplicated name the
/// first occurrence wins.
fn attributes(line: &str) -> HashMap<&str, &str> {
    let mut attrs = HashMap::new();
    let mut rest = line;
    while let Some(eq) = rest.find("='") {
        let name = rest[..eq]
            .rsplit(|c: char| c.is_whitespace() || c == '<')
            .next()
            .unwrap_or("");
        let after = &rest[eq + 2..];
        let Some(close) = after.find('\'') else {
            break;
        };
        if !name.is_empty() {
            attrs.entry(name).or_insert(&after[..close]);
        }
        rest = &after[close + 1..];
    }
    attrs
}

fn require<'a>(
    attrs: &HashMap<&'a str, &'a str>,
    tag: &'static str,
    attribute: &'static str,
    line: usize,
) -> Result<&'a str, ParseWarning> {
    attrs
        .get(attribute)
        .copied()
        .ok_or(ParseWarning::MissingAttribute {
            line,
            tag,
            attribute,
        })
}

fn require_int(
    attrs: &HashMap<&str, &str>,
    tag: &'static str,
    attribute: &'static str,
    line: usize,
) -> Result<i32, ParseWarning> {
    let value = require(attrs, tag, attribute, line)?;
    value.parse().map_err(|_| ParseWarning::InvalidNumber {
        line,
        attribute,
        value: value.to_string(),
    })
}
