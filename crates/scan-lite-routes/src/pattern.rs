// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! URL path patterns with named parameter segments (`/product/:barcode`)

use crate::error::{Result, RouteError};
use rustc_hash::FxHashSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One segment of a path pattern
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Segment {
    /// Literal text that must match exactly
    Static(String),
    /// Named parameter that captures any non-empty segment
    Param(String),
}

impl Segment {
    pub fn is_static(&self) -> bool {
        matches!(self, Segment::Static(_))
    }
}

/// Parsed path pattern
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern such as `/` or `/product/:barcode`.
    ///
    /// A single trailing slash is ignored, so `/product/` and `/product`
    /// are the same pattern. Empty segments (`//`) are rejected.
    pub fn parse(raw: &str) -> Result<Self> {
        if !raw.starts_with('/') {
            return Err(RouteError::pattern(raw, "must start with '/'"));
        }

        let mut segments = Vec::new();
        let mut names = FxHashSet::default();

        for part in split_path(raw) {
            if part.is_empty() {
                return Err(RouteError::pattern(raw, "empty segment"));
            }
            if part.contains(['*', '?', '#']) {
                return Err(RouteError::pattern(
                    raw,
                    format!("unsupported character in segment '{}'", part),
                ));
            }

            if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(RouteError::pattern(raw, "parameter name is empty"));
                }
                if name.contains(':') {
                    return Err(RouteError::pattern(
                        raw,
                        format!("parameter name '{}' contains ':'", name),
                    ));
                }
                if !names.insert(name) {
                    return Err(RouteError::pattern(
                        raw,
                        format!("parameter '{}' appears more than once", name),
                    ));
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Static(part.to_string()));
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// Pattern for the site root
    pub(crate) fn root() -> Self {
        Self {
            raw: "/".to_string(),
            segments: Vec::new(),
        }
    }

    /// Build a pattern from known-good parts without validation
    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        let raw = segments
            .iter()
            .map(|s| match s {
                Segment::Static(text) => format!("/{}", text),
                Segment::Param(name) => format!("/:{}", name),
            })
            .collect::<String>();
        Self { raw, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of literal segments, used to rank competing matches
    pub fn static_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_static()).count()
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// Two patterns overlap when every URL one accepts the other also
    /// accepts with the same rank: same length, same literals in the same
    /// positions, parameters in the same positions.
    pub fn same_shape(&self, other: &PathPattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(a, b)| match (a, b) {
                    (Segment::Static(x), Segment::Static(y)) => x == y,
                    (Segment::Param(_), Segment::Param(_)) => true,
                    _ => false,
                })
    }

    /// Match already-split path segments, returning captured parameters
    pub fn captures<'p, 'a>(&'p self, path: &[&'a str]) -> Option<Vec<(&'p str, &'a str)>> {
        if path.len() != self.segments.len() {
            return None;
        }

        let mut captured = Vec::new();
        for (segment, part) in self.segments.iter().zip(path) {
            match segment {
                Segment::Static(text) if text == part => {}
                Segment::Static(_) => return None,
                Segment::Param(_) if part.is_empty() => return None,
                Segment::Param(name) => captured.push((name.as_str(), *part)),
            }
        }
        Some(captured)
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Drop query string and fragment, one leading and one trailing `/`, then
/// split on `/`. Empty segments are kept, so `//product//42` does not look
/// like `/product/42`.
pub fn split_path(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let path = path.strip_prefix('/').unwrap_or(path);
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() {
        return Vec::new();
    }
    path.split('/').collect()
}
