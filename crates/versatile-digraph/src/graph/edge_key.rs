//! Edge key types.
//!
//! Edges are keyed by `v`, `w`, and a mandatory `name`. Names are unique across the whole graph,
//! so the key also tells apart parallel edges between the same ordered pair.

use serde::Serialize;
use std::hash::{Hash, Hasher};

#[derive(Clone, Copy, Hash)]
pub(in crate::graph) struct EdgeKeyView<'a> {
    pub(in crate::graph) v: &'a str,
    pub(in crate::graph) w: &'a str,
    pub(in crate::graph) name: &'a str,
}

impl<'a> hashbrown::Equivalent<EdgeKey> for EdgeKeyView<'a> {
    fn equivalent(&self, key: &EdgeKey) -> bool {
        key.v == self.v && key.w == self.w && key.name == self.name
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EdgeKey {
    pub v: String,
    pub w: String,
    pub name: String,
}

impl EdgeKey {
    pub fn new(v: impl Into<String>, w: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            v: v.into(),
            w: w.into(),
            name: name.into(),
        }
    }

    pub(in crate::graph) fn view(&self) -> EdgeKeyView<'_> {
        EdgeKeyView {
            v: &self.v,
            w: &self.w,
            name: &self.name,
        }
    }
}

impl PartialEq for EdgeKey {
    fn eq(&self, other: &Self) -> bool {
        self.v == other.v && self.w == other.w && self.name == other.name
    }
}

impl Eq for EdgeKey {}

// Must hash exactly like `EdgeKeyView` so borrowed lookups hit the same bucket.
impl Hash for EdgeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.v.hash(state);
        self.w.hash(state);
        self.name.hash(state);
    }
}

/// Borrowed view of a stored edge: endpoints, name and weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeRef<'a> {
    pub v: &'a str,
    pub w: &'a str,
    pub name: &'a str,
    pub weight: f64,
}

impl EdgeRef<'_> {
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.v, self.w, self.name)
    }
}
