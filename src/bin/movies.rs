//! Command-line prerenderer for the movie page.
//!
//! Runs the same fetch, map and render steps as the server once, without
//! starting an HTTP listener.
//!
//! # Usage
//!
//! ```bash
//! # Render the movie page to stdout
//! cargo run --bin movies -- render
//!
//! # Render it to a file (parent directories are created)
//! cargo run --bin movies -- render --out dist/movies.html
//!
//! # Print the movie list as a table
//! cargo run --bin movies -- list
//!
//! # Print the page context as JSON
//! cargo run --bin movies -- list --json
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see `movie_page::config`.

use movie_page::config;
use movie_page::domain::entities::MoviePage;
use movie_page::server::build_state;
use movie_page::telemetry;
use movie_page::web::prerender;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

/// CLI tool for prerendering the movie page.
#[derive(Parser)]
#[command(name = "movies")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the configured search term
    #[arg(short, long, global = true)]
    search: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch movies once and render the HTML page
    Render {
        /// Output file; stdout when omitted
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Fetch movies once and print them
    List {
        /// Print the page context as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::Config::from_env();
    if let Some(search) = cli.search {
        config.omdb_search = search;
    }
    config.validate().context("Invalid configuration")?;

    telemetry::init_stderr(&config.log_level, &config.log_format);

    let state = build_state(&config)?;
    let page = state
        .movie_service
        .list_movies()
        .await
        .context("Failed to fetch movies")?;

    match cli.command {
        Commands::Render { out } => render(page, out)?,
        Commands::List { json } => list(&page, json, state.movie_service.search_term())?,
    }

    Ok(())
}

/// Renders the movie page to a file or stdout.
fn render(page: MoviePage, out: Option<PathBuf>) -> Result<()> {
    match out {
        Some(path) => {
            let count = prerender::write_page(page, &path)?;

            eprintln!(
                "{} {} movies to {}",
                "✅ Rendered".green().bold(),
                count,
                path.display().to_string().cyan()
            );
        }
        None => println!("{}", prerender::render_page(page)?),
    }

    Ok(())
}

/// Prints the movie list as a table or JSON.
fn list(page: &MoviePage, json: bool, search: &str) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(page).context("Failed to serialize movies")?
        );
        return Ok(());
    }

    println!(
        "{} {}",
        "🎬 Movies matching".bright_blue().bold(),
        format!("\"{search}\"").bright_white().bold()
    );
    println!("{}", format!("Generated at {}", page.generated_at).dimmed());
    println!();

    if page.movies.is_empty() {
        println!("{}", "No movies found".yellow());
        return Ok(());
    }

    println!(
        "  {:<12} {:<6} {:<8} {}",
        "ID".bold(),
        "YEAR".bold(),
        "TYPE".bold(),
        "TITLE".bold()
    );
    for movie in &page.movies {
        println!(
            "  {:<12} {:<6} {:<8} {}",
            movie.id.as_deref().unwrap_or("-"),
            movie.year.as_deref().unwrap_or("-"),
            movie.kind.as_deref().unwrap_or("-"),
            movie.display_title().cyan()
        );
    }
    println!();
    println!("{} {}", "Total:".bright_white(), page.movies.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_json() {
        let cli = Cli::try_parse_from(["movies", "list", "--json"]).unwrap();

        assert!(cli.search.is_none());
        assert!(matches!(cli.command, Commands::List { json: true }));
    }

    #[test]
    fn test_parse_render_out_with_search() {
        let cli = Cli::try_parse_from([
            "movies",
            "render",
            "--out",
            "dist/movies.html",
            "--search",
            "alien",
        ])
        .unwrap();

        assert_eq!(cli.search.as_deref(), Some("alien"));
        match cli.command {
            Commands::Render { out } => {
                assert_eq!(out, Some(PathBuf::from("dist/movies.html")));
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_parse_list_defaults_to_table() {
        let cli = Cli::try_parse_from(["movies", "list"]).unwrap();

        assert!(matches!(cli.command, Commands::List { json: false }));
    }
}
