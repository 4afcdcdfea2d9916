//! Menu definition and rendering
//!
//! The nine catalog operations form a closed enumeration parsed from the
//! user's numeric choice, giving exhaustiveness-checked dispatch instead
//! of magic-number branching.

use crate::{Error, Result};
use colored::Colorize;

/// The nine menu operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ListMovies,
    AddMovie,
    DeleteMovie,
    UpdateMovie,
    Stats,
    RandomMovie,
    SearchMovie,
    SortedByRating,
    RatingHistogram,
}

impl MenuChoice {
    /// Parse a raw input line into a menu choice
    ///
    /// Fails with `InvalidChoice` when the input is not an integer in 1-9.
    pub fn parse(input: &str) -> Result<Self> {
        let choice = match input.trim().parse::<u32>() {
            Ok(n) => n,
            Err(_) => return Err(Error::invalid_choice(input.trim())),
        };

        match choice {
            1 => Ok(Self::ListMovies),
            2 => Ok(Self::AddMovie),
            3 => Ok(Self::DeleteMovie),
            4 => Ok(Self::UpdateMovie),
            5 => Ok(Self::Stats),
            6 => Ok(Self::RandomMovie),
            7 => Ok(Self::SearchMovie),
            8 => Ok(Self::SortedByRating),
            9 => Ok(Self::RatingHistogram),
            _ => Err(Error::invalid_choice(input.trim())),
        }
    }

    /// Menu label shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Self::ListMovies => "List movies",
            Self::AddMovie => "Add movie",
            Self::DeleteMovie => "Delete movie",
            Self::UpdateMovie => "Update movie",
            Self::Stats => "Stats",
            Self::RandomMovie => "Random movie",
            Self::SearchMovie => "Search movie",
            Self::SortedByRating => "Movies sorted by rating",
            Self::RatingHistogram => "Create Rating Histogram",
        }
    }

    /// All choices in menu order
    pub fn all() -> &'static [MenuChoice] {
        &[
            Self::ListMovies,
            Self::AddMovie,
            Self::DeleteMovie,
            Self::UpdateMovie,
            Self::Stats,
            Self::RandomMovie,
            Self::SearchMovie,
            Self::SortedByRating,
            Self::RatingHistogram,
        ]
    }
}

/// Print the banner and numbered menu
pub fn print_menu() {
    println!("{}", "********** My Movies Database **********".magenta());
    println!();
    println!("{}", "Menu".cyan());
    for (i, choice) in MenuChoice::all().iter().enumerate() {
        println!("{}", format!("{}. {}", i + 1, choice.label()).cyan());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_parse_valid_choices() {
        assert_eq!(MenuChoice::parse("1").unwrap(), MenuChoice::ListMovies);
        assert_eq!(MenuChoice::parse("5").unwrap(), MenuChoice::Stats);
        assert_eq!(MenuChoice::parse("9").unwrap(), MenuChoice::RatingHistogram);

        // Surrounding whitespace is tolerated
        assert_eq!(MenuChoice::parse(" 7 \n").unwrap(), MenuChoice::SearchMovie);
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(
            MenuChoice::parse("0"),
            Err(Error::InvalidChoice { .. })
        ));
        assert!(matches!(
            MenuChoice::parse("10"),
            Err(Error::InvalidChoice { .. })
        ));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert!(matches!(
            MenuChoice::parse("abc"),
            Err(Error::InvalidChoice { .. })
        ));
        assert!(matches!(
            MenuChoice::parse(""),
            Err(Error::InvalidChoice { .. })
        ));
        assert!(matches!(
            MenuChoice::parse("-3"),
            Err(Error::InvalidChoice { .. })
        ));
    }

    #[test]
    fn test_menu_has_nine_choices() {
        assert_eq!(MenuChoice::all().len(), 9);
    }
}
