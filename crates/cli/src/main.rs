use anyhow::{Context, Result};
use browser::{
    load_catalog_or_empty, DetailsOutcome, InMemoryReviews, MovieBrowser, MovieListView,
    ReviewSource, SearchView,
};
use catalog::{Movie, MovieId};
use clap::{Parser, Subcommand};
use colored::Colorize;
use query::{QueryEngine, SearchCriteria};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::info;

/// ReelCatalog - Movie Catalog Browser
#[derive(Parser)]
#[command(name = "reel-catalog")]
#[command(about = "Browse and search a movie catalog", long_about = None)]
struct Cli {
    /// Path to the movie dataset (JSON array)
    #[arg(
        short,
        long,
        global = true,
        env = "REEL_CATALOG_DATA",
        default_value = "data/movies.json"
    )]
    data_file: PathBuf,

    /// Optional path to a reviews file (JSON array)
    #[arg(short, long, global = true, env = "REEL_CATALOG_REVIEWS")]
    reviews_file: Option<PathBuf>,

    /// Print views as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every movie in the catalog
    List,

    /// Search movies by name, id and/or genre
    Search {
        /// Part of the movie title (case-insensitive)
        #[arg(long)]
        name: Option<String>,

        /// Exact movie ID
        #[arg(long, allow_negative_numbers = true)]
        id: Option<MovieId>,

        /// Part of the genre (case-insensitive)
        #[arg(long)]
        genre: Option<String>,
    },

    /// Show one movie with its reviews
    Details {
        /// Movie ID to display
        #[arg(long, allow_negative_numbers = true)]
        id: MovieId,
    },

    /// List the distinct genres in the catalog
    Genres,

    /// Run concurrent queries against the shared catalog
    Benchmark {
        /// Number of queries to run
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Maximum number of queries in flight
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing on stderr so stdout carries only command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // A broken dataset leaves the catalog empty rather than aborting
    let start = Instant::now();
    let catalog = Arc::new(load_catalog_or_empty(&cli.data_file));
    eprintln!(
        "{} Loaded {} movies from {} in {:?}",
        "✓".green(),
        catalog.len(),
        cli.data_file.display(),
        start.elapsed()
    );

    let reviews: Arc<dyn ReviewSource> = match &cli.reviews_file {
        Some(path) => Arc::new(
            InMemoryReviews::load_from_file(path)
                .with_context(|| format!("Failed to load reviews from {}", path.display()))?,
        ),
        None => Arc::new(InMemoryReviews::new()),
    };

    let engine = QueryEngine::new(catalog);
    let browser = MovieBrowser::new(engine.clone(), reviews);

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::List => handle_list(&browser, cli.json)?,
        Commands::Search { name, id, genre } => {
            let criteria = SearchCriteria { name, id, genre };
            handle_search(&browser, &criteria, cli.json)?
        }
        Commands::Details { id } => handle_details(&browser, id, cli.json)?,
        Commands::Genres => handle_genres(&engine, cli.json)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(engine, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'list' command
fn handle_list(browser: &MovieBrowser, json: bool) -> Result<()> {
    let view = browser.list();
    if json {
        return print_json(&view);
    }

    print_list(&view);
    Ok(())
}

/// Handle the 'search' command
fn handle_search(browser: &MovieBrowser, criteria: &SearchCriteria, json: bool) -> Result<()> {
    let view = browser.search(criteria);
    if json {
        return print_json(&view);
    }

    print_search(&view);
    Ok(())
}

/// Handle the 'details' command
fn handle_details(browser: &MovieBrowser, id: MovieId, json: bool) -> Result<()> {
    let outcome = browser.details(id);
    if json {
        return print_json(&outcome);
    }

    match outcome {
        DetailsOutcome::Found(view) => {
            print_movie_details(&view.movie);
            if view.reviews.is_empty() {
                println!("{}", "No reviews yet.".dimmed());
            } else {
                println!("{}", "Reviews:".bold());
                for review in &view.reviews {
                    println!(
                        "  - {} ({:.1}): {}",
                        review.author.cyan(),
                        review.rating,
                        review.comment
                    );
                }
            }
        }
        DetailsOutcome::NotFound { title, message } => {
            println!("{}", title.bold().red());
            println!("{}", message);
        }
    }
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres(engine: &QueryEngine, json: bool) -> Result<()> {
    let genres = engine.distinct_genres();
    if json {
        return print_json(&genres);
    }

    println!("{}", "Genres:".bold().blue());
    for genre in &genres {
        println!("{}{}", "• ".green(), genre);
    }
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(engine: QueryEngine, requests: usize, concurrent: usize) -> Result<()> {
    if requests == 0 {
        println!("Nothing to run: --requests is 0");
        return Ok(());
    }

    info!(
        "Running {} queries with at most {} in flight",
        requests, concurrent
    );
    let genres = engine.distinct_genres();
    let max_id = engine.all_movies().len().max(1) as u32;
    let permits = Arc::new(Semaphore::new(concurrent.max(1)));

    // Mix lookups and genre searches, all reading the same Arc<Catalog>
    let wall_clock = Instant::now();
    let mut handles = Vec::with_capacity(requests);
    for request in 0..requests {
        let engine = engine.clone();
        let permits = permits.clone();
        let id = (rand::random::<u32>() % max_id + 1) as MovieId;
        let genre = genres
            .get(rand::random::<u32>() as usize % genres.len().max(1))
            .cloned();

        let handle = tokio::spawn(async move {
            let _permit = permits.acquire_owned().await?;
            let start = Instant::now();
            if request % 2 == 0 {
                let _ = engine.find_by_id(Some(id));
            } else {
                let criteria = SearchCriteria {
                    genre,
                    ..SearchCriteria::default()
                };
                let _ = engine.search(&criteria);
            }
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    // Wait for all tasks to complete and collect timings
    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    for handle in handles {
        timings.push(handle.await??);
    }
    let total_time = wall_clock.elapsed();

    timings.sort();
    let busy_time: Duration = timings.iter().sum();
    let avg_latency = busy_time / timings.len() as u32;
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(&timings, 0.50));
    println!("P95 latency: {:?}", percentile(&timings, 0.95));
    println!("P99 latency: {:?}", percentile(&timings, 0.99));
    println!("Throughput: {:.2} queries/second", throughput);

    Ok(())
}

/// Nearest-rank percentile of already sorted timings
fn percentile(sorted: &[Duration], fraction: f64) -> Duration {
    let rank = (sorted.len() as f64 * fraction) as usize;
    sorted[rank.min(sorted.len() - 1)]
}

/// Render a view as pretty-printed JSON
fn render_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to render JSON")
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", render_json(value)?);
    Ok(())
}

fn print_list(view: &MovieListView) {
    println!("{}", "Movies:".bold().blue());
    print_movie_rows(&view.movies);
    println!("{} {}", "Genres:".bold(), view.genres.join(", "));
}

fn print_search(view: &SearchView) {
    if let Some(message) = &view.error_message {
        println!("{}", message.red());
        return;
    }
    if let Some(message) = &view.no_results_message {
        println!("{}", message.yellow());
        return;
    }
    if let Some(message) = &view.success_message {
        println!("{}", message.green());
    }
    print_movie_rows(&view.movies);
}

fn print_movie_rows(movies: &[Movie]) {
    for movie in movies {
        println!(
            "{:>4}. {} ({}) [{}] - {} min - IMDb {:.1}",
            movie.id.to_string().green(),
            movie.title,
            movie.year,
            movie.genre,
            movie.duration_minutes,
            movie.imdb_rating
        );
    }
}

fn print_movie_details(movie: &Movie) {
    println!("{}", format!("{} ({})", movie.title, movie.year).bold().blue());
    println!("{}Director: {}", "• ".green(), movie.director);
    println!("{}Genre: {}", "• ".green(), movie.genre);
    println!("{}Duration: {} min", "• ".green(), movie.duration_minutes);
    println!("{}IMDb rating: {:.1}", "• ".green(), movie.imdb_rating);
    println!("\n{}\n", movie.description);
}
