//! Movie Catalog Library
//!
//! A Rust library backing an interactive console tool that maintains a small
//! in-memory catalog of movies (title → rating).
//!
//! This library provides:
//! - An insertion-ordered catalog store with title uniqueness and rating validation
//! - Rating statistics (mean, median, min/max with full tie sets)
//! - Case-insensitive substring search with approximate-match fallback
//! - Stable rating-descending views and uniform random selection
//! - Histogram bucketing with a pluggable PNG rendering backend

pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod catalog;
        pub mod histogram;
        pub mod ordering;
        pub mod search;
        pub mod stats;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
    pub mod menu;
}

// Re-export commonly used types
pub use app::models::{Entry, Histogram, RatingStats, SearchOutcome};
pub use app::services::catalog::Catalog;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for catalog operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Rating outside the valid range (or unparseable, mapped to the -1 sentinel)
    #[error("Rating {rating} is invalid")]
    InvalidRating { rating: f64 },

    /// Empty or otherwise unusable movie title
    #[error("Invalid title: {reason}")]
    InvalidTitle { reason: String },

    /// Title already present in the catalog
    #[error("Movie {title} already exists!")]
    DuplicateTitle { title: String },

    /// Title not present in the catalog
    #[error("Movie {title} doesn't exist")]
    TitleNotFound { title: String },

    /// Operation requires a non-empty catalog
    #[error("Catalog is empty: cannot {operation}")]
    EmptyCatalog { operation: String },

    /// Menu selection outside 1-9 or unparseable
    #[error("Invalid choice '{input}' (expected a number between 1 and 9)")]
    InvalidChoice { input: String },

    /// Empty or unusable output filename
    #[error("Invalid filename: {reason}")]
    InvalidFilename { reason: String },

    /// Histogram rendering backend failed to write the image
    #[error("Failed to save histogram to '{path}': {message}")]
    RenderIo { path: String, message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid rating error
    pub fn invalid_rating(rating: f64) -> Self {
        Self::InvalidRating { rating }
    }

    /// Create an invalid title error
    pub fn invalid_title(reason: impl Into<String>) -> Self {
        Self::InvalidTitle {
            reason: reason.into(),
        }
    }

    /// Create a duplicate title error
    pub fn duplicate_title(title: impl Into<String>) -> Self {
        Self::DuplicateTitle {
            title: title.into(),
        }
    }

    /// Create a title not found error
    pub fn title_not_found(title: impl Into<String>) -> Self {
        Self::TitleNotFound {
            title: title.into(),
        }
    }

    /// Create an empty catalog error naming the rejected operation
    pub fn empty_catalog(operation: impl Into<String>) -> Self {
        Self::EmptyCatalog {
            operation: operation.into(),
        }
    }

    /// Create an invalid menu choice error
    pub fn invalid_choice(input: impl Into<String>) -> Self {
        Self::InvalidChoice {
            input: input.into(),
        }
    }

    /// Create an invalid filename error
    pub fn invalid_filename(reason: impl Into<String>) -> Self {
        Self::InvalidFilename {
            reason: reason.into(),
        }
    }

    /// Create a render I/O error
    pub fn render_io(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RenderIo {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
