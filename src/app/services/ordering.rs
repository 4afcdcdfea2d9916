//! Ordering view and random selection
//!
//! Read-only views over a catalog snapshot: a stable rating-descending
//! listing and uniform random entry selection.

use crate::app::models::Entry;
use crate::app::services::catalog::Catalog;
use crate::{Error, Result};
use rand::seq::SliceRandom;
use rand::Rng;

/// Entries sorted by rating, highest first
///
/// The sort is stable: entries with equal ratings keep their relative
/// catalog order. This is a correctness property, not an implementation
/// detail; tie order must be deterministic.
pub fn sorted_by_rating_desc(catalog: &Catalog) -> Vec<Entry> {
    let mut entries: Vec<Entry> = catalog.entries().to_vec();
    entries.sort_by(|a, b| b.rating.partial_cmp(&a.rating).expect("ratings are never NaN"));
    entries
}

/// Pick one entry uniformly at random
///
/// Fails with `EmptyCatalog` if there is nothing to pick from.
pub fn pick_random(catalog: &Catalog) -> Result<&Entry> {
    pick_random_with(catalog, &mut rand::thread_rng())
}

/// Pick one entry uniformly using the supplied RNG
///
/// Seedable entry point for deterministic tests.
pub fn pick_random_with<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    rng: &mut R,
) -> Result<&'a Entry> {
    catalog
        .entries()
        .choose(rng)
        .ok_or_else(|| Error::empty_catalog("pick a random movie"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_sorted_by_rating_desc() {
        let catalog = Catalog::seeded();
        let sorted = sorted_by_rating_desc(&catalog);

        assert_eq!(sorted.len(), 10);
        assert_eq!(sorted[0].title, "The Shawshank Redemption");
        assert_eq!(sorted[9].title, "The Room");

        // Non-increasing ratings throughout
        for pair in sorted.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn test_sort_is_stable_for_equal_ratings() {
        let catalog = Catalog::seeded();
        let sorted = sorted_by_rating_desc(&catalog);
        let titles: Vec<_> = sorted.iter().map(|e| e.title.as_str()).collect();

        // 9.0 tie keeps seed order
        let part_ii = titles.iter().position(|t| *t == "The Godfather: Part II");
        let dark_knight = titles.iter().position(|t| *t == "The Dark Knight");
        assert!(part_ii < dark_knight);

        // 8.8 tie keeps seed order
        let pulp = titles.iter().position(|t| *t == "Pulp Fiction");
        let gump = titles.iter().position(|t| *t == "Forrest Gump");
        assert!(pulp < gump);
    }

    #[test]
    fn test_sorted_view_does_not_mutate_catalog() {
        let catalog = Catalog::seeded();
        let _ = sorted_by_rating_desc(&catalog);
        assert_eq!(catalog.entries()[0].title, "The Shawshank Redemption");
        assert_eq!(catalog.entries()[1].title, "Pulp Fiction");
    }

    #[test]
    fn test_pick_random_empty_catalog() {
        let catalog = Catalog::new();
        assert!(matches!(
            pick_random(&catalog),
            Err(Error::EmptyCatalog { .. })
        ));
    }

    #[test]
    fn test_pick_random_every_entry_selectable() {
        let catalog = Catalog::seeded();
        let mut rng = StdRng::seed_from_u64(42);

        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let entry = pick_random_with(&catalog, &mut rng).unwrap();
            seen.insert(entry.title.clone());
        }

        // No entry is structurally excluded
        assert_eq!(seen.len(), catalog.len());
    }

    #[test]
    fn test_pick_random_single_entry() {
        let mut catalog = Catalog::new();
        catalog.add("Only", 5.0).unwrap();

        let entry = pick_random(&catalog).unwrap();
        assert_eq!(entry.title, "Only");
    }
}
