//! Graph store for the bipartite person/movie graph.
//!
//! Persons are never linked directly: two persons are adjacent when they
//! share a movie. The store is pure data and is read-only during search.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id!(
    /// Identifier of a person (the `id` column of `people.csv`).
    PersonId
);

string_id!(
    /// Identifier of a movie (the `id` column of `movies.csv`).
    MovieId
);

/// A person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub birth: Option<u16>,
    /// Movies this person starred in.
    pub movies: BTreeSet<MovieId>,
}

impl Person {
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>, birth: Option<u16>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth,
            movies: BTreeSet::new(),
        }
    }
}

/// A movie record. Movies are the shared context that links persons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub year: Option<u16>,
    /// Persons who starred in this movie.
    pub stars: BTreeSet<PersonId>,
}

impl Movie {
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>, year: Option<u16>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year,
            stars: BTreeSet::new(),
        }
    }
}

/// Counts describing a loaded graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub people: usize,
    pub movies: usize,
    /// Person/movie membership links.
    pub stars: usize,
    /// Distinct lowercased names.
    pub names: usize,
    /// Names shared by more than one person.
    pub ambiguous_names: usize,
}

/// The person/movie graph together with its lowercased name index.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    /// Lowercased name → every person carrying that name.
    names: HashMap<String, BTreeSet<PersonId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a person, indexing it by lowercased name.
    ///
    /// Re-inserting an existing id replaces name and birth but keeps the
    /// movie memberships already recorded, so the graph stays consistent.
    /// Returns the previous record if there was one.
    pub fn insert_person(&mut self, mut person: Person) -> Option<Person> {
        let previous = self.people.remove(&person.id);
        if let Some(old) = &previous {
            let key = old.name.to_lowercase();
            if let Some(ids) = self.names.get_mut(&key) {
                ids.remove(&old.id);
                if ids.is_empty() {
                    self.names.remove(&key);
                }
            }
            person.movies.extend(old.movies.iter().cloned());
        }

        self.names
            .entry(person.name.to_lowercase())
            .or_default()
            .insert(person.id.clone());
        self.people.insert(person.id.clone(), person);
        previous
    }

    /// Insert a movie. Same replacement rule as [`Graph::insert_person`].
    pub fn insert_movie(&mut self, mut movie: Movie) -> Option<Movie> {
        let previous = self.movies.remove(&movie.id);
        if let Some(old) = &previous {
            movie.stars.extend(old.stars.iter().cloned());
        }
        self.movies.insert(movie.id.clone(), movie);
        previous
    }

    /// Record that `person` starred in `movie`, on both sides.
    ///
    /// Returns false (and changes nothing) if either id is unknown.
    pub fn add_star(&mut self, person: &str, movie: &str) -> bool {
        let (Some(p), Some(m)) = (self.people.get_mut(person), self.movies.get_mut(movie)) else {
            return false;
        };
        p.movies.insert(m.id.clone());
        m.stars.insert(p.id.clone());
        true
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &str) -> Option<&Movie> {
        self.movies.get(id)
    }

    pub fn contains_person(&self, id: &str) -> bool {
        self.people.contains_key(id)
    }

    /// Case-insensitive lookup of every person with the given name.
    pub fn person_ids_for_name(&self, name: &str) -> Option<&BTreeSet<PersonId>> {
        self.names.get(&name.to_lowercase())
    }

    /// All indexed names, lowercased.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            people: self.people.len(),
            movies: self.movies.len(),
            stars: self.people.values().map(|p| p.movies.len()).sum(),
            names: self.names.len(),
            ambiguous_names: self.names.values().filter(|ids| ids.len() > 1).count(),
        }
    }
}
