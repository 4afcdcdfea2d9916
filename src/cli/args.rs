//! Command-line argument definitions for the movie catalog
//!
//! The program is menu-driven, so arguments only control the ambient
//! environment: logging verbosity and color handling.

use clap::Parser;

/// CLI arguments for the movie catalog
///
/// Launches an interactive menu over an in-memory movie rating catalog
/// seeded with a fixed set of titles.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "movie-catalog",
    version,
    about = "Interactive in-memory movie rating catalog",
    long_about = "An interactive console tool that maintains a small in-memory catalog of \
                  movies. List, add, delete, update, search, and sort entries, view rating \
                  statistics, pick a random movie, or export the rating distribution as an \
                  image. The catalog lives only for the process lifetime."
)]
pub struct Args {
    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only log errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Disable colored terminal output
    #[arg(long = "no-color", help = "Disable colored terminal output")]
    pub no_color: bool,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        let mut args = Args {
            verbose: 0,
            quiet: false,
            no_color: false,
        };

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }
}
