//! The drawing store - the only stateful piece of the application.
//!
//! Owns one ordered figure sequence addressed by 1-based display index,
//! plus the path of the backing document. Loading replaces the whole
//! sequence; saving rewrites the whole document. There is no dirty
//! tracking and no merging - last writer wins.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::geometry::{self, Boundary};
use crate::shapes::Figure;
use crate::svg;

pub struct Drawing {
    figures: Vec<Figure>,
    path: PathBuf,
}

impl Drawing {
    /// An empty drawing backed by `path`. Nothing is read until
    /// [`load_from_file`](Self::load_from_file).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            figures: Vec::new(),
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the in-memory sequence with the backing document's
    /// contents. An absent file is an empty drawing, not an error; parse
    /// warnings are logged and the surviving figures kept.
    pub fn load_from_file(&mut self) -> Result<()> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no backing document, starting empty");
            self.figures.clear();
            return Ok(());
        }

        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let (figures, warnings) = svg::parse(&text);
        for warning in &warnings {
            warn!(path = %self.path.display(), "{warning}");
        }
        debug!(count = figures.len(), skipped = warnings.len(), "loaded document");
        self.figures = figures;
        Ok(())
    }

    /// Serialize the full current sequence and overwrite the backing
    /// document. The text is written to a sibling temporary path and
    /// renamed into place, so a failed write never truncates an existing
    /// document.
    pub fn save_to_file(&self) -> Result<()> {
        let text = svg::serialize(&self.figures);

        let mut tmp = self.path.clone();
        tmp.as_mut_os_string().push(".tmp");
        fs::write(&tmp, &text).with_context(|| format!("failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        debug!(count = self.figures.len(), path = %self.path.display(), "saved document");
        Ok(())
    }

    /// Append a figure at the end of the sequence.
    pub fn add_figure(&mut self, figure: Figure) {
        self.figures.push(figure);
    }

    /// Look up a figure by 1-based display index.
    pub fn figure(&self, index: usize) -> Option<&Figure> {
        index.checked_sub(1).and_then(|i| self.figures.get(i))
    }

    /// Remove by 1-based display index, shifting later figures down by
    /// one. Returns the removed figure, or `None` when the index is out
    /// of range.
    pub fn remove_figure(&mut self, index: usize) -> Option<Figure> {
        if index == 0 || index > self.figures.len() {
            return None;
        }
        Some(self.figures.remove(index - 1))
    }

    /// Translate every figure in place, preserving order.
    pub fn translate_all(&mut self, dx: i32, dy: i32) {
        for figure in &mut self.figures {
            geometry::translate(figure, dx, dy);
        }
    }

    /// Translate one figure by 1-based display index. `false` when the
    /// index is out of range.
    pub fn translate_figure(&mut self, index: usize, dx: i32, dy: i32) -> bool {
        let Some(figure) = index.checked_sub(1).and_then(|i| self.figures.get_mut(i)) else {
            return false;
        };
        geometry::translate(figure, dx, dy);
        true
    }

    /// Figures fully contained in the boundary described by `kind` and
    /// its parameters, in display order. The result is a copy, and an
    /// unknown kind matches nothing.
    pub fn figures_within(&self, kind: &str, x: i32, y: i32, p1: i32, p2: i32) -> Vec<Figure> {
        let Some(boundary) = Boundary::from_kind(kind, x, y, p1, p2) else {
            return Vec::new();
        };
        self.figures
            .iter()
            .filter(|figure| geometry::is_within(figure, &boundary))
            .cloned()
            .collect()
    }

    /// Copy of the whole sequence in display order.
    pub fn all_figures(&self) -> Vec<Figure> {
        self.figures.clone()
    }

    pub fn figure_count(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }
}
