//! Protein sequence lookup
//!
//! The converter only needs one capability from a sequence database: given an
//! identifier, return the full residue sequence. [`SequenceDatabase`] captures that
//! seam, [`FastaDatabase`] implements it over a FASTA file, and [`SequenceResolver`]
//! adds a per-run cache in front of any implementation.

use std::collections::HashMap;
use std::rc::Rc;

use log::debug;

use crate::hit::HitError;

pub use error::DatabaseError;
pub use fasta::FastaDatabase;

mod error;
mod fasta;

/// Read-only protein sequence source.
pub trait SequenceDatabase {
    /// Full sequence for `identifier`, looked up verbatim, or `None` if absent.
    fn lookup(&self, identifier: &str) -> Option<String>;
}

impl SequenceDatabase for HashMap<String, String> {
    fn lookup(&self, identifier: &str) -> Option<String> {
        self.get(identifier).cloned()
    }
}

impl<D: SequenceDatabase + ?Sized> SequenceDatabase for &D {
    fn lookup(&self, identifier: &str) -> Option<String> {
        (**self).lookup(identifier)
    }
}

/// Caching front end for a [`SequenceDatabase`].
///
/// Misses are cached too, so an absent protein is only looked up once per run.
#[derive(Debug)]
pub struct SequenceResolver<D> {
    database: D,
    cache: HashMap<String, Option<Rc<str>>>,
    lookups: usize,
    cache_hits: usize,
}

impl<D: SequenceDatabase> SequenceResolver<D> {
    /// Wrap a database
    pub fn new(database: D) -> Self {
        Self {
            database,
            cache: HashMap::new(),
            lookups: 0,
            cache_hits: 0,
        }
    }

    /// Resolve a protein identifier to its sequence.
    ///
    /// # Errors
    ///
    /// [`HitError::SequenceLookupMiss`] if the database has no such identifier.
    pub fn resolve(&mut self, identifier: &str) -> Result<Rc<str>, HitError> {
        self.lookups += 1;
        let sequence = match self.cache.get(identifier) {
            Some(cached) => {
                self.cache_hits += 1;
                cached.clone()
            }
            None => {
                let sequence = self.database.lookup(identifier).map(Rc::from);
                debug!(
                    "Database lookup for '{}': {}",
                    identifier,
                    if sequence.is_some() { "found" } else { "missing" }
                );
                self.cache.insert(identifier.to_string(), sequence.clone());
                sequence
            }
        };
        sequence.ok_or_else(|| HitError::SequenceLookupMiss(identifier.to_string()))
    }

    /// Forget cached sequences and reset the counters
    pub fn clear_cache(&mut self) {
        self.cache.clear();
        self.lookups = 0;
        self.cache_hits = 0;
    }

    /// Number of resolve calls since the last reset
    pub fn lookups(&self) -> usize {
        self.lookups
    }

    /// Number of resolve calls answered from the cache
    pub fn cache_hits(&self) -> usize {
        self.cache_hits
    }

    /// The wrapped database
    pub fn database(&self) -> &D {
        &self.database
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct CountingDatabase {
        sequences: HashMap<String, String>,
        calls: Cell<usize>,
    }

    impl SequenceDatabase for CountingDatabase {
        fn lookup(&self, identifier: &str) -> Option<String> {
            self.calls.set(self.calls.get() + 1);
            self.sequences.lookup(identifier)
        }
    }

    fn database() -> CountingDatabase {
        let mut sequences = HashMap::new();
        sequences.insert("P1".to_string(), "MKPEPTIDE".to_string());
        CountingDatabase {
            sequences,
            calls: Cell::new(0),
        }
    }

    #[test]
    fn test_resolve_hit_and_miss() {
        let mut resolver = SequenceResolver::new(database());
        assert_eq!(&*resolver.resolve("P1").unwrap(), "MKPEPTIDE");
        assert_eq!(
            resolver.resolve("P2"),
            Err(HitError::SequenceLookupMiss("P2".to_string()))
        );
    }

    #[test]
    fn test_identifiers_are_not_normalized() {
        let mut resolver = SequenceResolver::new(database());
        assert!(resolver.resolve("p1").is_err());
        assert!(resolver.resolve(" P1").is_err());
    }

    #[test]
    fn test_cache_avoids_repeated_lookups() {
        let mut resolver = SequenceResolver::new(database());
        for _ in 0..3 {
            resolver.resolve("P1").unwrap();
            let _ = resolver.resolve("missing");
        }
        assert_eq!(resolver.database().calls.get(), 2);
        assert_eq!(resolver.lookups(), 6);
        assert_eq!(resolver.cache_hits(), 4);

        resolver.clear_cache();
        resolver.resolve("P1").unwrap();
        assert_eq!(resolver.database().calls.get(), 3);
        assert_eq!(resolver.cache_hits(), 0);
    }
}
