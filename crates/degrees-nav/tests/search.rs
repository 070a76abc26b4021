use degrees_core::graph::{Graph, Movie, Person, PersonId};
use degrees_nav::error::SearchError;
use degrees_nav::node::Link;
use degrees_nav::search::{Connection, SearchOptions, shortest_path, shortest_path_with};
use proptest::prelude::*;
use std::collections::{HashMap, HashSet, VecDeque};

fn make_graph(people: usize, memberships: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::new();
    for p in 0..people {
        graph.insert_person(Person::new(format!("p{}", p), format!("Person {}", p), None));
    }
    for &(p, m) in memberships {
        let movie = format!("m{}", m);
        if graph.movie(&movie).is_none() {
            graph.insert_movie(Movie::new(movie.as_str(), format!("Movie {}", m), None));
        }
        graph.add_star(&format!("p{}", p), &movie);
    }
    graph
}

fn pid(i: usize) -> PersonId {
    PersonId::new(format!("p{}", i))
}

/// Person-level BFS distances from `source`, independent of the engine.
fn reference_distances(graph: &Graph, source: &str) -> HashMap<String, usize> {
    let mut dist = HashMap::from([(source.to_string(), 0usize)]);
    let mut queue = VecDeque::from([source.to_string()]);
    while let Some(current) = queue.pop_front() {
        let d = dist[&current];
        for movie in &graph.person(&current).unwrap().movies {
            for star in &graph.movie(movie.as_str()).unwrap().stars {
                if !dist.contains_key(star.as_str()) {
                    dist.insert(star.to_string(), d + 1);
                    queue.push_back(star.to_string());
                }
            }
        }
    }
    dist
}

/// Number of distinct `(movie, person)` states reachable from `source`, plus the root.
fn reachable_states(graph: &Graph, source: &str) -> usize {
    let component = reference_distances(graph, source);
    let links: HashSet<(String, String)> = component
        .keys()
        .flat_map(|p| {
            graph.person(p).unwrap().movies.iter().filter_map(move |m| {
                let movie = graph.movie(m.as_str()).unwrap();
                (movie.stars.len() > 1).then(|| (m.to_string(), p.clone()))
            })
        })
        .collect();
    links.len() + 1
}

fn assert_valid_path(graph: &Graph, source: &PersonId, steps: &[Link]) {
    let mut prev = source.clone();
    for step in steps {
        let movie = graph.movie(step.movie.as_str()).expect("step movie exists");
        assert!(movie.stars.contains(&prev), "{} not in {}", prev, step.movie);
        assert!(
            movie.stars.contains(&step.person),
            "{} not in {}",
            step.person,
            step.movie
        );
        prev = step.person.clone();
    }
}

#[test]
fn test_chain_scenario() {
    // A=0, B=1, C=2, D=3; G1={A,B}, G2={B,C}, G3={C,D}
    let graph = make_graph(4, &[(0, 1), (1, 1), (1, 2), (2, 2), (2, 3), (3, 3)]);
    let connection = shortest_path(&graph, &pid(0), &pid(3)).unwrap();
    assert_eq!(
        connection.path().unwrap().steps(),
        &[
            Link::new("m1", "p1"),
            Link::new("m2", "p2"),
            Link::new("m3", "p3")
        ]
    );
}

#[test]
fn test_shortcut_is_preferred() {
    // Long chain 0-1-2-3-4 plus a movie shared by 0 and 4
    let graph = make_graph(
        5,
        &[
            (0, 1),
            (1, 1),
            (1, 2),
            (2, 2),
            (2, 3),
            (3, 3),
            (3, 4),
            (4, 4),
            (0, 9),
            (4, 9),
        ],
    );
    let connection = shortest_path(&graph, &pid(0), &pid(4)).unwrap();
    assert_eq!(connection.path().unwrap().steps(), &[Link::new("m9", "p4")]);
}

#[test]
fn test_ties_return_a_shortest_path() {
    // Diamond: 0-1 via m1, 0-2 via m2, 1-3 via m3, 2-3 via m4
    let graph = make_graph(
        4,
        &[(0, 1), (1, 1), (0, 2), (2, 2), (1, 3), (3, 3), (2, 4), (3, 4)],
    );
    let connection = shortest_path(&graph, &pid(0), &pid(3)).unwrap();
    let path = connection.path().unwrap();
    assert_eq!(path.len(), 2);
    assert_valid_path(&graph, &pid(0), path.steps());
}

#[test]
fn test_disconnected_components() {
    let graph = make_graph(4, &[(0, 1), (1, 1), (2, 2), (3, 2)]);
    assert_eq!(
        shortest_path(&graph, &pid(0), &pid(3)).unwrap(),
        Connection::NotConnected
    );
}

#[test]
fn test_invalid_person_is_an_error_not_a_miss() {
    let graph = make_graph(2, &[(0, 1), (1, 1)]);
    assert!(matches!(
        shortest_path(&graph, &pid(0), &PersonId::from("nobody")),
        Err(SearchError::InvalidPerson(_))
    ));
}

#[test]
fn test_budget_applies_to_long_searches() {
    let memberships: Vec<(usize, usize)> = (0..50).flat_map(|i| [(i, i), (i + 1, i)]).collect();
    let graph = make_graph(51, &memberships);
    let options = SearchOptions {
        max_expansions: Some(10),
    };
    assert_eq!(
        shortest_path_with(&graph, &pid(0), &pid(50), &options).unwrap_err(),
        SearchError::BudgetExhausted { expanded: 10 }
    );

    let connection = shortest_path(&graph, &pid(0), &pid(50)).unwrap();
    assert_eq!(connection.degrees(), Some(50));
}

#[test]
fn test_dense_graph_all_pairs_match_reference() {
    // 9 people over 6 movies, most pairs tied through several movies; p8 has none
    let memberships: Vec<(usize, usize)> = (0..8)
        .flat_map(|p| [(p, p % 6), (p, (p * 2 + 1) % 6), (p, (p + 3) % 6)])
        .collect();
    let graph = make_graph(9, &memberships);

    for s in 0..9 {
        let distances = reference_distances(&graph, &format!("p{}", s));
        for t in 0..9 {
            let connection = shortest_path(&graph, &pid(s), &pid(t)).unwrap();
            let expected = distances.get(&format!("p{}", t)).copied();
            assert_eq!(connection.degrees(), expected, "p{} -> p{}", s, t);
            if let Some(path) = connection.path() {
                assert_valid_path(&graph, &pid(s), path.steps());
            }
        }
    }
}

fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..12, 1usize..8).prop_flat_map(|(people, movies)| {
        (
            Just(people),
            prop::collection::vec((0..people, 0..movies), 0..30),
        )
    })
}

proptest! {
    #[test]
    fn prop_length_matches_reference_bfs(
        (people, memberships) in arb_graph(),
        s in 0usize..12,
        t in 0usize..12,
    ) {
        let (s, t) = (s % people, t % people);
        let graph = make_graph(people, &memberships);
        let expected = reference_distances(&graph, &format!("p{}", s))
            .get(&format!("p{}", t))
            .copied();

        let connection = shortest_path(&graph, &pid(s), &pid(t)).unwrap();
        prop_assert_eq!(connection.degrees(), expected);

        if let Some(path) = connection.path() {
            assert_valid_path(&graph, &pid(s), path.steps());
            if s == t {
                prop_assert!(path.is_empty());
            } else {
                let target = pid(t);
                prop_assert_eq!(path.target(), Some(&target));
            }
        }
    }

    #[test]
    fn prop_never_explores_a_state_twice(
        (people, memberships) in arb_graph(),
        s in 0usize..12,
        t in 0usize..12,
    ) {
        let (s, t) = (s % people, t % people);
        let graph = make_graph(people, &memberships);
        let report =
            shortest_path_with(&graph, &pid(s), &pid(t), &SearchOptions::default()).unwrap();
        let bound = reachable_states(&graph, &format!("p{}", s));
        prop_assert!(report.stats.expanded <= bound);
        prop_assert!(report.stats.discovered <= bound);
    }

    #[test]
    fn prop_repeated_calls_agree_on_length(
        (people, memberships) in arb_graph(),
        s in 0usize..12,
        t in 0usize..12,
    ) {
        let (s, t) = (s % people, t % people);
        let graph = make_graph(people, &memberships);
        let first = shortest_path(&graph, &pid(s), &pid(t)).unwrap();
        let second = shortest_path(&graph, &pid(s), &pid(t)).unwrap();
        prop_assert_eq!(first.degrees(), second.degrees());
    }
}
