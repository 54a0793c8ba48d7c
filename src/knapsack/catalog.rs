//! Item catalog and its text loader.
//!
//! The catalog source is plain text holding whitespace-separated
//! `weight value` integer pairs. Loading reads pairs until the requested
//! number of items is reached; a source that runs out early is an error.

use log::debug;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// A catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub weight: u32,
    pub value: u32,
}

impl Item {
    pub fn new(weight: u32, value: u32) -> Self {
        Self { weight, value }
    }
}

/// Errors raised while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("cannot read item source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("token {position} ({token:?}) is not a non-negative integer")]
    Parse { position: usize, token: String },
    #[error("item source holds {found} complete items, expected {expected}")]
    Incomplete { expected: usize, found: usize },
    #[error("catalog must contain at least one item")]
    EmptyCatalog,
}

/// Fixed, ordered list of items. Position `i` is gene `i` of every
/// chromosome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Wraps an in-memory item list.
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Parses exactly `count` items from `text`.
    ///
    /// Pairs past the first `count` are ignored.
    pub fn parse(text: &str, count: usize) -> Result<Self, CatalogError> {
        if count == 0 {
            return Err(CatalogError::EmptyCatalog);
        }

        let mut items = Vec::with_capacity(count);
        let mut tokens = text.split_whitespace().enumerate();
        while items.len() < count {
            let Some(weight) = next_number(&mut tokens)? else {
                break;
            };
            let Some(value) = next_number(&mut tokens)? else {
                break;
            };
            items.push(Item::new(weight, value));
        }

        if items.len() < count {
            return Err(CatalogError::Incomplete {
                expected: count,
                found: items.len(),
            });
        }
        if tokens.next().is_some() {
            debug!("item source holds more than {count} items, ignoring the rest");
        }
        Ok(Self { items })
    }

    /// Reads the whole of `reader` and parses `count` items from it.
    pub fn from_reader<R: Read>(mut reader: R, count: usize) -> Result<Self, CatalogError> {
        let mut text = String::new();
        reader
            .read_to_string(&mut text)
            .map_err(|source| CatalogError::Io {
                path: PathBuf::from("<reader>"),
                source,
            })?;
        Self::parse(&text, count)
    }

    /// Loads `count` items from the file at `path`.
    pub fn load(path: impl AsRef<Path>, count: usize) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::parse(&text, count)?;
        debug!("loaded {} items from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Number of items (N).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }
}

fn next_number<'a, I>(tokens: &mut I) -> Result<Option<u32>, CatalogError>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    match tokens.next() {
        None => Ok(None),
        Some((position, token)) => token.parse().map(Some).map_err(|_| CatalogError::Parse {
            position,
            token: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pairs() {
        let catalog = Catalog::parse("2 3\n3 4\n4 5\n5 6\n", 4).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(0), Some(&Item::new(2, 3)));
        assert_eq!(catalog.get(3), Some(&Item::new(5, 6)));
        assert_eq!(catalog.get(4), None);
    }

    #[test]
    fn test_parse_any_whitespace() {
        let catalog = Catalog::parse("  2\t3 3\n\n4   4 5", 3).unwrap();
        assert_eq!(
            catalog.items(),
            &[Item::new(2, 3), Item::new(3, 4), Item::new(4, 5)]
        );
    }

    #[test]
    fn test_parse_ignores_surplus() {
        let catalog = Catalog::parse("1 1 2 2 3 3", 2).unwrap();
        assert_eq!(catalog.items(), &[Item::new(1, 1), Item::new(2, 2)]);
    }

    #[test]
    fn test_parse_too_few_items() {
        let err = Catalog::parse("1 1 2 2", 3).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::Incomplete {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_parse_dangling_weight() {
        let err = Catalog::parse("1 1 2", 2).unwrap_err();
        assert!(matches!(err, CatalogError::Incomplete { found: 1, .. }));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = Catalog::parse("1 1 x 2", 2).unwrap_err();
        match err {
            CatalogError::Parse { position, token } => {
                assert_eq!(position, 2);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rejects_negative() {
        assert!(matches!(
            Catalog::parse("-1 4", 1),
            Err(CatalogError::Parse { .. })
        ));
    }

    #[test]
    fn test_parse_zero_count() {
        assert!(matches!(
            Catalog::parse("1 1", 0),
            Err(CatalogError::EmptyCatalog)
        ));
    }

    #[test]
    fn test_from_reader() {
        let catalog = Catalog::from_reader("7 8 9 10".as_bytes(), 2).unwrap();
        assert_eq!(catalog.items(), &[Item::new(7, 8), Item::new(9, 10)]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Catalog::load("/nonexistent/u-knapsack/data.txt", 4).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("data.txt"));
    }
}
