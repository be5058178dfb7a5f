use movie_recs::{
    models::{Movie, MovieId, RecommendationRequest},
    services::{
        browse,
        catalog::{load_catalog, parse_catalog, CsvCatalog},
        extract_features, explain_match, recommend, recommendations, similarity,
    },
};

const CATALOG_CSV: &str = "\
id,title,overview,genre,release_date,vote_average,vote_count,popularity,original_language
1,The Dark Knight,\"Batman raises the stakes in his war on crime, facing the Joker\",\"Drama, Action, Crime, Thriller\",2008-07-16,8.5,30000,120.5,en
2,Batman Begins,\"Driven by tragedy, billionaire Bruce Wayne dedicates his life to fighting crime\",\"Action, Crime, Drama\",2005-06-10,7.7,19000,60.1,en
3,The Notebook,\"An epic love story centered around an older man who reads aloud\",\"Romance, Drama\",2004-06-25,7.9,11000,55.0,en
4,Toy Story,\"Woody the cowboy toy feels threatened by a new space ranger\",\"Animation, Comedy, Family\",1995-10-30,8.0,17000,99.9,en
5,Heat,\"Obsessive master thief McCauley leads a crew on crime jobs in Los Angeles\",\"Action, Crime, Drama, Thriller\",1995-12-15,7.9,6800,41.2,en
6,Untitled Project,,,,,,,
";

fn catalog() -> Vec<Movie> {
    parse_catalog(CATALOG_CSV.as_bytes()).unwrap()
}

fn example_catalog() -> Vec<Movie> {
    vec![
        Movie::new(1, "A")
            .with_genre("Action, Drama")
            .with_overview("a hero fights"),
        Movie::new(2, "B")
            .with_genre("Action")
            .with_overview("a hero battles"),
        Movie::new(3, "C")
            .with_genre("Comedy")
            .with_overview("jokes and fun"),
    ]
}

#[test]
fn test_catalog_fixture_loads_every_row() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog[5].title, "Untitled Project");
    assert!(extract_features(&catalog[5]).is_empty());
}

#[test]
fn test_shared_terms_rank_first() {
    let catalog = example_catalog();
    let results = recommend(&RecommendationRequest::new(&catalog, MovieId(1)).with_count(2));

    let ids: Vec<MovieId> = results.iter().map(|r| r.movie.id).collect();
    assert_eq!(ids, vec![MovieId(2), MovieId(3)]);
    assert!(results[0].score > results[1].score);
}

#[test]
fn test_missing_query_yields_empty_list() {
    let catalog = example_catalog();
    let results = recommend(&RecommendationRequest::new(&catalog, MovieId(99)).with_count(5));
    assert!(results.is_empty());
}

#[test]
fn test_recommendations_are_deterministic() {
    let catalog = catalog();
    let request = RecommendationRequest::new(&catalog, MovieId(1)).with_count(5);
    assert_eq!(recommend(&request), recommend(&request));
}

#[test]
fn test_recommendation_properties_hold_for_every_query() {
    let catalog = catalog();

    for query in &catalog {
        for count in [0, 1, 3, 5, 10] {
            let results = recommend(&RecommendationRequest::new(&catalog, query.id).with_count(count));

            assert!(results.len() <= count.min(catalog.len() - 1));
            assert!(results.iter().all(|r| r.movie.id != query.id));
            assert!(results.windows(2).all(|pair| pair[0].score >= pair[1].score));
            for result in &results {
                assert!((0.0..=1.0).contains(&result.score));
                assert!(!result.reasons.is_empty());
            }
        }
    }
}

#[test]
fn test_crime_dramas_cluster_together() {
    let catalog = catalog();
    let results = recommendations::similar_movies(&catalog, MovieId(1), 3);

    let ids: Vec<u64> = results.iter().map(|r| r.movie.id.0).collect();
    assert_eq!(ids[0], 5);
    assert!(ids.contains(&2));
    assert!(results[0]
        .reasons
        .starts_with("Shared genres: Drama, Action, Crime, Thriller"));
}

#[test]
fn test_featureless_movie_never_scores() {
    let catalog = catalog();
    let empty = extract_features(&catalog[5]);

    for movie in &catalog {
        assert_eq!(similarity(&empty, &extract_features(movie)), 0.0);
    }

    let results = recommendations::similar_movies(&catalog, MovieId(6), 10);
    assert_eq!(results.len(), 5);
    assert!(results.iter().all(|r| r.score == 0.0));
    let ids: Vec<u64> = results.iter().map(|r| r.movie.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_explanation_with_every_clause() {
    let a = Movie::new(10, "First")
        .with_genre("Action")
        .with_release_date("2020-01-01")
        .with_vote_average(7.0);
    let b = Movie::new(11, "Second")
        .with_genre("Action")
        .with_release_date("2021-01-01")
        .with_vote_average(7.3);

    assert_eq!(
        explain_match(&a, &b),
        "Shared genres: Action, Similar rating, Similar time period"
    );
}

#[test]
fn test_auxiliary_views() {
    let catalog = catalog();

    let popular: Vec<u64> = recommendations::popular(&catalog, 3)
        .iter()
        .map(|m| m.id.0)
        .collect();
    assert_eq!(popular, vec![1, 4, 2]);

    let top: Vec<u64> = recommendations::top_rated(&catalog, 10)
        .iter()
        .map(|m| m.id.0)
        .collect();
    assert_eq!(top, vec![1, 4, 3, 5, 2]);

    let crime: Vec<u64> = recommendations::by_genre(&catalog, "crime", 10)
        .iter()
        .map(|m| m.id.0)
        .collect();
    assert_eq!(crime, vec![1, 5, 2]);
}

#[test]
fn test_browse_over_loaded_catalog() {
    let catalog = catalog();

    assert_eq!(browse::search(&catalog, "batman").len(), 2);
    assert_eq!(
        browse::unique_genres(&catalog),
        vec!["Action", "Animation", "Comedy", "Crime", "Drama", "Family", "Romance", "Thriller"]
    );

    let by_year: Vec<u64> = browse::sort_movies(&catalog, browse::SortKey::Year)
        .iter()
        .map(|m| m.id.0)
        .collect();
    assert_eq!(by_year, vec![1, 2, 3, 5, 4, 6]);
}

#[test]
fn test_csv_file_source() {
    let path = std::env::temp_dir().join(format!("movie-recs-{}.csv", std::process::id()));
    std::fs::write(&path, CATALOG_CSV).unwrap();

    let movies = load_catalog(&CsvCatalog::new(&path));
    std::fs::remove_file(&path).unwrap();

    assert_eq!(movies, catalog());
}
