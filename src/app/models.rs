//! Data models for the movie catalog
//!
//! This module contains the core data structures shared across the catalog
//! services: catalog entries, computed rating statistics, search outcomes,
//! and bucketed histogram data.

// =============================================================================
// Catalog Entry
// =============================================================================

/// A single catalog entry: a movie title with its rating
///
/// Titles are unique within a catalog (exact, case-sensitive match) and
/// ratings always lie within the valid rating domain once stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    /// Movie title - the catalog key
    pub title: String,

    /// Rating in the closed range [0, 10]
    pub rating: f64,
}

impl Entry {
    /// Create a new entry
    pub fn new(title: impl Into<String>, rating: f64) -> Self {
        Self {
            title: title.into(),
            rating,
        }
    }
}

// =============================================================================
// Rating Statistics
// =============================================================================

/// Aggregate rating statistics computed over a catalog snapshot
///
/// `best` and `worst` carry the full tie sets: every title whose rating
/// exactly equals the maximum or minimum, in catalog listing order.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingStats {
    /// Arithmetic mean of all ratings
    pub mean: f64,

    /// Median rating (average of the two central values for even counts)
    pub median: f64,

    /// Minimum rating value
    pub min: f64,

    /// Maximum rating value
    pub max: f64,

    /// All titles rated exactly `max`, in catalog order
    pub best: Vec<String>,

    /// All titles rated exactly `min`, in catalog order
    pub worst: Vec<String>,
}

// =============================================================================
// Search Outcome
// =============================================================================

/// Result of a catalog search
///
/// The three states must be rendered distinctly by callers: direct hits,
/// "did you mean" suggestions, and a total miss.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Titles containing the query (case-insensitive), in catalog order
    ExactHits(Vec<Entry>),

    /// No substring hits; similar titles ranked by descending score
    Suggestions(Vec<String>),

    /// No substring hits and no title cleared the similarity cutoff
    NoMatch,
}

// =============================================================================
// Histogram
// =============================================================================

/// Bucketed rating counts over the full rating domain
///
/// Holds one count per fixed-width bin plus the bin edges (one more edge
/// than bins). Produced by the ordering/export view and consumed by a
/// histogram rendering backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Number of ratings falling in each bin
    pub counts: Vec<usize>,

    /// Bin boundaries, ascending; `counts.len() + 1` values
    pub edges: Vec<f64>,
}

impl Histogram {
    /// Total number of ratings across all bins
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Largest single-bin count (0 for an all-empty histogram)
    pub fn peak(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}
