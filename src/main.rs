use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use movie_recs::{
    config::Config,
    error::AppError,
    models::{MovieId, DEFAULT_OVERVIEW_LENGTH},
    services::{
        browse::{self, SortKey},
        catalog::{load_catalog, CsvCatalog},
        recommendations,
    },
};

#[derive(Parser)]
#[command(name = "movie-recs")]
#[command(about = "Find movies similar to one you like")]
#[command(version)]
struct Cli {
    /// Catalog CSV file (overrides MOVIE_RECS_CATALOG_PATH)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Movies most similar to the given one
    Similar {
        /// Catalog id of the selected movie
        id: u64,

        /// Number of results
        #[arg(short, long)]
        count: Option<usize>,
    },

    /// Most popular movies
    Popular {
        #[arg(short, long)]
        count: Option<usize>,
    },

    /// Highest rated movies
    TopRated {
        #[arg(short, long)]
        count: Option<usize>,
    },

    /// Highest rated movies in a genre
    Genre {
        /// Genre name, matched case-insensitively anywhere in the genre field
        name: String,

        #[arg(short, long)]
        count: Option<usize>,
    },

    /// Movies whose title, genre or overview contains a term
    Search {
        term: String,
    },

    /// All genres in the catalog
    Genres,

    /// One-line summary of a movie
    Show {
        id: u64,
    },

    /// The whole catalog in a given order
    Sort {
        /// title, rating, popularity, year or none
        key: SortKey,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let catalog_path = cli.catalog.unwrap_or(config.catalog_path);
    let catalog = load_catalog(&CsvCatalog::new(catalog_path));

    match cli.command {
        Commands::Similar { id, count } => {
            let count = count.unwrap_or(config.similar_count);
            tracing::info!(query_id = id, count, "Finding similar movies");
            print_json(&recommendations::similar_movies(&catalog, MovieId(id), count))
        }
        Commands::Popular { count } => print_json(&recommendations::popular(
            &catalog,
            count.unwrap_or(config.ranking_count),
        )),
        Commands::TopRated { count } => print_json(&recommendations::top_rated(
            &catalog,
            count.unwrap_or(config.ranking_count),
        )),
        Commands::Genre { name, count } => print_json(&recommendations::by_genre(
            &catalog,
            &name,
            count.unwrap_or(config.ranking_count),
        )),
        Commands::Search { term } => print_json(&browse::search(&catalog, &term)),
        Commands::Genres => print_json(&browse::unique_genres(&catalog)),
        Commands::Sort { key } => print_json(&browse::sort_movies(&catalog, key)),
        Commands::Show { id } => {
            let movie = catalog
                .iter()
                .find(|movie| movie.id == MovieId(id))
                .ok_or(AppError::NotFound(MovieId(id)))?;
            println!(
                "{} ({}) - {} - {}",
                movie.title,
                movie.display_year(),
                movie.display_rating(),
                movie.truncated_overview(DEFAULT_OVERVIEW_LENGTH)
            );
            Ok(())
        }
    }
}

/// Initialize the tracing subscriber; logs go to stderr so stdout stays JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("movie_recs=info,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
