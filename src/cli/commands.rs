//! Menu loop and per-choice handlers
//!
//! Drives one user request/response cycle at a time over the single
//! catalog instance. Every handler error is recoverable: it is reported
//! in color and the loop continues. Only stdin I/O failures terminate
//! the loop.

use crate::app::services::catalog::Catalog;
use crate::app::services::histogram::{bucket_ratings, HistogramRenderer, PngHistogramRenderer};
use crate::app::services::ordering::{pick_random, sorted_by_rating_desc};
use crate::app::services::search::{search, SequenceRatioScorer, SimilarityScorer};
use crate::app::services::stats::compute_stats;
use crate::cli::args::Args;
use crate::cli::input;
use crate::cli::menu::{self, MenuChoice};
use crate::app::models::SearchOutcome;
use crate::{Error, Result};
use colored::Colorize;
use std::path::Path;
use tracing::debug;

/// Set up structured logging from the verbosity flags
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("movie_catalog={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Run the interactive menu loop until stdin closes
pub fn run(args: Args) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }
    setup_logging(&args)?;

    let mut catalog = Catalog::seeded();
    let scorer = SequenceRatioScorer;
    let renderer = PngHistogramRenderer::new();

    loop {
        menu::print_menu();

        let raw = input::prompt_line("Enter choice (1-9): ")?;
        println!();

        let choice = match MenuChoice::parse(&raw) {
            Ok(choice) => choice,
            Err(error) => {
                println!("{}", error.to_string().red());
                println!();
                continue;
            }
        };

        if let Err(error) = dispatch(choice, &mut catalog, &scorer, &renderer) {
            report_error(&error);
            // Loop terminates only when the terminal itself is gone
            if matches!(error, Error::Io { .. }) {
                return Err(error);
            }
        }

        input::wait_for_enter()?;
        println!();
    }
}

/// Dispatch one menu choice to its handler
fn dispatch(
    choice: MenuChoice,
    catalog: &mut Catalog,
    scorer: &dyn SimilarityScorer,
    renderer: &dyn HistogramRenderer,
) -> Result<()> {
    match choice {
        MenuChoice::ListMovies => handle_list(catalog),
        MenuChoice::AddMovie => handle_add(catalog),
        MenuChoice::DeleteMovie => handle_delete(catalog),
        MenuChoice::UpdateMovie => handle_update(catalog),
        MenuChoice::Stats => handle_stats(catalog),
        MenuChoice::RandomMovie => handle_random(catalog),
        MenuChoice::SearchMovie => handle_search(catalog, scorer),
        MenuChoice::SortedByRating => handle_sorted(catalog),
        MenuChoice::RatingHistogram => handle_histogram(catalog, renderer),
    }
}

/// Print a handler error in the color its severity calls for
fn report_error(error: &Error) {
    match error {
        // A duplicate is a warning in the original program, not a failure
        Error::DuplicateTitle { .. } => println!("{}", error.to_string().yellow()),
        _ => println!("{}", error.to_string().red()),
    }
    println!();
}

fn handle_list(catalog: &Catalog) -> Result<()> {
    for entry in catalog.entries() {
        println!("{}", format!("{}, {}", entry.title, entry.rating).green());
    }
    println!();
    Ok(())
}

fn handle_add(catalog: &mut Catalog) -> Result<()> {
    let title = input::prompt_line("Enter a new movie name: ")?;

    // Reject duplicates before asking for a rating
    if catalog.contains(&title) {
        return Err(Error::duplicate_title(title));
    }

    let rating = input::prompt_rating("Enter new movie rating (0-10): ")?;
    catalog.add(&title, rating)?;

    println!("{}", format!("Movie {} successfully added", title).green());
    println!();
    Ok(())
}

fn handle_delete(catalog: &mut Catalog) -> Result<()> {
    let title = input::prompt_line("Enter movie name to delete: ")?;
    catalog.delete(&title)?;

    println!("{}", format!("Movie {} successfully deleted", title).green());
    println!();
    Ok(())
}

fn handle_update(catalog: &mut Catalog) -> Result<()> {
    let title = input::prompt_line("Enter movie name: ")?;

    if !catalog.contains(&title) {
        return Err(Error::title_not_found(title));
    }

    let rating = input::prompt_rating("Enter new movie rating (0-10): ")?;
    catalog.update(&title, rating)?;

    println!("{}", format!("Movie {} successfully updated", title).green());
    println!();
    Ok(())
}

fn handle_stats(catalog: &Catalog) -> Result<()> {
    let stats = compute_stats(catalog)?;

    println!("{}", format!("Average rating: {}", stats.mean).green());
    println!("{}", format!("Median rating: {}", stats.median).green());
    println!(
        "{}",
        format!("Best movie: {}, {}", stats.best.join(", "), stats.max).green()
    );
    println!(
        "{}",
        format!("Worst movie: {}, {}", stats.worst.join(", "), stats.min).green()
    );
    println!();
    Ok(())
}

fn handle_random(catalog: &Catalog) -> Result<()> {
    let entry = pick_random(catalog)?;

    println!(
        "{}",
        format!(
            "Your movie for tonight: {}, it's rated {}",
            entry.title, entry.rating
        )
        .green()
    );
    println!();
    Ok(())
}

fn handle_search(catalog: &Catalog, scorer: &dyn SimilarityScorer) -> Result<()> {
    let query = input::prompt_line("Enter part of movie name: ")?;
    println!();

    match search(catalog, &query, scorer) {
        SearchOutcome::ExactHits(hits) => {
            for entry in hits {
                println!("{}", format!("{}, {}", entry.title, entry.rating).green());
            }
        }
        SearchOutcome::Suggestions(titles) => {
            println!(
                "{}",
                format!("The movie \"{}\" does not exist.", query).red()
            );
            println!("{}", "Did you mean:".yellow());
            for title in titles {
                println!("{}", title.green());
            }
        }
        SearchOutcome::NoMatch => {
            println!(
                "{}",
                format!("The movie \"{}\" does not exist.", query).red()
            );
            println!("{}", "No similar movies were found.".red());
        }
    }
    println!();
    Ok(())
}

fn handle_sorted(catalog: &Catalog) -> Result<()> {
    for entry in sorted_by_rating_desc(catalog) {
        println!("{}", format!("{}, {}", entry.title, entry.rating).green());
    }
    println!();
    Ok(())
}

fn handle_histogram(catalog: &Catalog, renderer: &dyn HistogramRenderer) -> Result<()> {
    // Bucket before prompting: an empty catalog never reaches the renderer
    let histogram = bucket_ratings(catalog)?;

    let filename = input::prompt_filename("Enter output filename (e.g., ratings.png): ")?;
    renderer.render(&histogram, Path::new(&filename))?;

    println!("{}", format!("Histogram saved to {}", filename).green());
    println!();
    Ok(())
}
