//! Route entities
//!
//! A `RouteEntry` is one (url path, component file) pair produced by a route
//! source. A `RouteTable` folds an ordered sequence of entries into one
//! component per url path.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single route candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Url path, e.g. `/users/list`
    pub path: String,
    /// Page component file backing the route
    pub component: PathBuf,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, component: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            component: component.into(),
        }
    }
}

/// Url path to component mapping
///
/// Keys keep the position of their first insertion; a repeated url path
/// replaces the component (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: IndexMap<String, PathBuf>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route, replacing any component already registered for `path`
    pub fn insert(&mut self, path: impl Into<String>, component: impl Into<PathBuf>) {
        self.routes.insert(path.into(), component.into());
    }

    pub fn get(&self, path: &str) -> Option<&Path> {
        self.routes.get(path).map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Routes in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.routes
            .iter()
            .map(|(path, component)| (path.as_str(), component.as_path()))
    }
}

impl<'a> FromIterator<&'a RouteEntry> for RouteTable {
    fn from_iter<I: IntoIterator<Item = &'a RouteEntry>>(iter: I) -> Self {
        let mut table = RouteTable::new();
        for entry in iter {
            table.insert(entry.path.clone(), entry.component.clone());
        }
        table
    }
}

impl FromIterator<RouteEntry> for RouteTable {
    fn from_iter<I: IntoIterator<Item = RouteEntry>>(iter: I) -> Self {
        let mut table = RouteTable::new();
        for entry in iter {
            table.insert(entry.path, entry.component);
        }
        table
    }
}
