//! One-shot rendering of the movie page outside the HTTP server.

use std::path::Path;

use anyhow::{Context, Result};
use askama::Template;

use crate::domain::entities::MoviePage;
use crate::web::handlers::MoviesTemplate;

/// Renders the movie page to an HTML string.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_page(page: MoviePage) -> Result<String> {
    MoviesTemplate::from(page)
        .render()
        .context("Failed to render movie page")
}

/// Renders the movie page into `path`, creating missing parent directories.
///
/// Returns the number of movies written.
///
/// # Errors
///
/// Returns an error if rendering fails or the file cannot be written.
pub fn write_page(page: MoviePage, path: &Path) -> Result<usize> {
    let count = page.movies.len();
    let html = render_page(page)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!(count, path = %path.display(), "Wrote movie page");

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Movie;
    use chrono::{TimeZone, Utc};
    use tempfile::TempDir;

    fn page() -> MoviePage {
        let movies = vec![
            Movie {
                id: Some("tt0076759".to_string()),
                title: Some("A New Hope".to_string()),
                year: Some("1977".to_string()),
                kind: Some("movie".to_string()),
                poster: Some("http://x/1.jpg".to_string()),
            },
            Movie {
                id: Some("tt0080684".to_string()),
                title: Some("The Empire Strikes Back".to_string()),
                year: Some("1980".to_string()),
                kind: Some("movie".to_string()),
                poster: Some("N/A".to_string()),
            },
        ];

        MoviePage::new(movies, Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_write_page_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dist").join("nested").join("movies.html");

        let count = write_page(page(), &path).unwrap();

        assert_eq!(count, 2);
        assert!(path.exists());

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("<h2>A New Hope</h2>"));
        assert!(html.contains("<h2>The Empire Strikes Back</h2>"));
        assert!(html.contains("This page was built 2024-01-01T12:00:00.000Z"));
    }

    #[test]
    fn test_write_page_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("movies.html");
        std::fs::write(&path, "stale").unwrap();

        write_page(page(), &path).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(!html.contains("stale"));
        assert!(html.contains("A New Hope"));
    }

    #[test]
    fn test_write_page_fails_when_parent_is_a_file() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let result = write_page(page(), &blocker.join("movies.html"));

        assert!(result.is_err());
    }

    #[test]
    fn test_render_page_matches_template() {
        let html = render_page(page()).unwrap();

        assert!(html.contains("<h1>Movies</h1>"));
        assert!(html.contains("src=\"http://x/1.jpg\""));
    }
}
