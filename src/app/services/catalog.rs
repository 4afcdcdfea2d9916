//! Catalog store service
//!
//! Owns the insertion-ordered mapping of movie title → rating. Enforces
//! title uniqueness (exact, case-sensitive) and rating range validation.
//! All other services read a consistent snapshot through [`Catalog::entries`];
//! only the mutation operations here change catalog state.

use crate::app::models::Entry;
use crate::constants::{RATING_MAX, RATING_MIN, SEED_MOVIES};
use crate::{Error, Result};
use tracing::debug;

/// In-memory movie catalog preserving insertion order
///
/// Backed by a vector: catalogs are small (tens of entries) and the listing
/// order invariant matters more than lookup complexity. Lookups are exact
/// title matches.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<Entry>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a fresh catalog pre-populated with the fixed seed set
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        for &(title, rating) in SEED_MOVIES {
            // Seed data is static and valid by construction
            catalog.entries.push(Entry::new(title, rating));
        }
        debug!(count = catalog.len(), "seeded catalog");
        catalog
    }

    /// Number of entries in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up an entry by exact title
    pub fn get(&self, title: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.title == title)
    }

    /// Whether an exact title is present
    pub fn contains(&self, title: &str) -> bool {
        self.get(title).is_some()
    }

    /// Add a new entry
    ///
    /// Fails with `DuplicateTitle` if the title is already present,
    /// `InvalidTitle` if the title is empty, or `InvalidRating` if the
    /// rating falls outside the valid range. On failure the catalog is
    /// left unchanged.
    pub fn add(&mut self, title: &str, rating: f64) -> Result<()> {
        if title.is_empty() {
            return Err(Error::invalid_title("title must not be empty"));
        }
        if self.contains(title) {
            return Err(Error::duplicate_title(title));
        }
        validate_rating(rating)?;

        self.entries.push(Entry::new(title, rating));
        debug!(title, rating, "added movie");
        Ok(())
    }

    /// Remove an entry by exact title
    ///
    /// Fails with `TitleNotFound` if the title is absent.
    pub fn delete(&mut self, title: &str) -> Result<()> {
        let index = self
            .entries
            .iter()
            .position(|e| e.title == title)
            .ok_or_else(|| Error::title_not_found(title))?;

        self.entries.remove(index);
        debug!(title, "deleted movie");
        Ok(())
    }

    /// Overwrite the rating of an existing entry, preserving its position
    ///
    /// Fails with `TitleNotFound` if the title is absent or `InvalidRating`
    /// if the new rating falls outside the valid range.
    pub fn update(&mut self, title: &str, rating: f64) -> Result<()> {
        let index = self
            .entries
            .iter()
            .position(|e| e.title == title)
            .ok_or_else(|| Error::title_not_found(title))?;

        validate_rating(rating)?;
        self.entries[index].rating = rating;
        debug!(title, rating, "updated movie");
        Ok(())
    }
}

/// Check that a rating lies within the valid closed range
pub fn validate_rating(rating: f64) -> Result<()> {
    if (RATING_MIN..=RATING_MAX).contains(&rating) {
        Ok(())
    } else {
        Err(Error::invalid_rating(rating))
    }
}
