//! Load a person/movie dataset from a directory of CSV files.
//!
//! A dataset directory holds three headered files:
//! `people.csv` (`id,name,birth`), `movies.csv` (`id,title,year`) and
//! `stars.csv` (`person_id,movie_id`).

use crate::graph::{Graph, Movie, Person};
use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

const PEOPLE_FILE: &str = "people.csv";
const MOVIES_FILE: &str = "movies.csv";
const STARS_FILE: &str = "stars.csv";

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    #[serde(default)]
    birth: String,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    #[serde(default)]
    year: String,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Paths of the three dataset files inside `dir`.
pub fn dataset_files(dir: &Path) -> [PathBuf; 3] {
    [
        dir.join(PEOPLE_FILE),
        dir.join(MOVIES_FILE),
        dir.join(STARS_FILE),
    ]
}

/// Check whether all dataset files exist in `dir`.
pub fn dataset_exists(dir: &Path) -> bool {
    dataset_files(dir).iter().all(|p| p.is_file())
}

/// Load people, movies, then star links from `dir`.
///
/// Star rows that reference an unknown person or movie are skipped.
pub fn load_dir(dir: &Path) -> Result<Graph> {
    let [people_path, movies_path, stars_path] = dataset_files(dir);
    let mut graph = Graph::new();

    let mut duplicate_people = 0usize;
    for row in read_rows::<PersonRow>(&people_path)? {
        let person = Person::new(row.id, row.name, parse_year(&row.birth));
        if graph.insert_person(person).is_some() {
            duplicate_people += 1;
        }
    }

    let mut duplicate_movies = 0usize;
    for row in read_rows::<MovieRow>(&movies_path)? {
        let movie = Movie::new(row.id, row.title, parse_year(&row.year));
        if graph.insert_movie(movie).is_some() {
            duplicate_movies += 1;
        }
    }

    let mut skipped = 0usize;
    for row in read_rows::<StarRow>(&stars_path)? {
        if !graph.add_star(&row.person_id, &row.movie_id) {
            tracing::debug!(
                person_id = %row.person_id,
                movie_id = %row.movie_id,
                "skipping star row with unknown person or movie"
            );
            skipped += 1;
        }
    }

    if duplicate_people > 0 || duplicate_movies > 0 {
        tracing::warn!(
            duplicate_people,
            duplicate_movies,
            "duplicate ids in {}: later rows replaced earlier ones",
            dir.display()
        );
    }
    if skipped > 0 {
        tracing::warn!("skipped {} dangling rows in {}", skipped, stars_path.display());
    }

    let stats = graph.stats();
    tracing::info!(
        people = stats.people,
        movies = stats.movies,
        stars = stats.stars,
        "loaded dataset from {}",
        dir.display()
    );

    Ok(graph)
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    reader
        .deserialize()
        .enumerate()
        .map(|(i, row)| {
            // +2: one for the header, one for 1-based line numbers
            row.with_context(|| format!("malformed row at {}:{}", path.display(), i + 2))
        })
        .collect()
}

/// Parse a birth or release year cell. Empty and non-numeric cells are unknown.
fn parse_year(cell: &str) -> Option<u16> {
    cell.trim().parse().ok()
}
