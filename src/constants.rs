//! Application constants for the movie catalog
//!
//! This module contains rating bounds, search tuning values, histogram
//! geometry, and the fixed seed set used to populate a fresh catalog.

// =============================================================================
// Rating Domain
// =============================================================================

/// Minimum accepted rating
pub const RATING_MIN: f64 = 0.0;

/// Maximum accepted rating
pub const RATING_MAX: f64 = 10.0;

/// Sentinel for unparseable rating input; always fails the range check
pub const INVALID_RATING_SENTINEL: f64 = -1.0;

// =============================================================================
// Search Tuning
// =============================================================================

/// Maximum number of approximate-match suggestions to return
pub const SUGGESTION_LIMIT: usize = 5;

/// Minimum similarity score for a title to qualify as a suggestion
pub const SIMILARITY_CUTOFF: f64 = 0.4;

// =============================================================================
// Histogram Geometry
// =============================================================================

/// Number of fixed-width bins partitioning the rating domain
pub const HISTOGRAM_BINS: usize = 11;

// =============================================================================
// Seed Catalog
// =============================================================================

/// Fixed title/rating pairs loaded into a fresh catalog at startup
pub const SEED_MOVIES: &[(&str, f64)] = &[
    ("The Shawshank Redemption", 9.5),
    ("Pulp Fiction", 8.8),
    ("The Room", 3.6),
    ("The Godfather", 9.2),
    ("The Godfather: Part II", 9.0),
    ("The Dark Knight", 9.0),
    ("12 Angry Men", 8.9),
    ("Everything Everywhere All At Once", 8.9),
    ("Forrest Gump", 8.8),
    ("Star Wars: Episode V", 8.7),
];
