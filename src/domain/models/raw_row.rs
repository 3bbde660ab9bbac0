// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// One data row of a results table, with cells keyed by the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    cells: Vec<(String, String)>,
    href: Option<String>,
}

impl RawRow {
    /// Zips header keys against cell values. Extra keys or extra cells are
    /// dropped, the shorter side wins.
    pub fn new<K, V>(keys: K, values: V, href: Option<String>) -> Self
    where
        K: IntoIterator<Item = String>,
        V: IntoIterator<Item = String>,
    {
        Self {
            cells: keys.into_iter().zip(values).collect(),
            href,
        }
    }

    /// Value of the cell under `key`. A duplicated header resolves to the
    /// right-most cell.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Relative link to the detail page, if the row had one.
    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
