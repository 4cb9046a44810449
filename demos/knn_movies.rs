//! Movie KNN Demo
//!
//! Ranks a toy movie database against a query movie and prints the top-k
//! most similar titles under cosine similarity. Each movie is a 5-dimensional
//! vector of genre affinities: action, sci-fi, romance, comedy, drama.
//!
//! To run this demo:
//! ```bash
//! cargo run --example knn_movies
//! ```

use anyhow::Result;
use vecrank::metric::MetricKind;
use vecrank::ranker::{Candidate, SimilarityRanker};
use vecrank::vector::Vector;

const MOVIES: &str = r#"{
    "The Matrix":          [0.9, 0.8, 0.1, 0.2, 0.7],
    "Inception":           [0.8, 0.9, 0.2, 0.1, 0.8],
    "Titanic":             [0.1, 0.0, 0.9, 0.8, 0.9],
    "Blade Runner":        [0.7, 0.9, 0.1, 0.0, 0.6],
    "The Notebook":        [0.0, 0.0, 0.9, 0.9, 0.8],
    "The Matrix Reloaded": [0.9, 0.8, 0.1, 0.2, 0.7],
    "Interstellar":        [0.6, 0.9, 0.3, 0.1, 0.8],
    "Casablanca":          [0.2, 0.0, 0.8, 0.7, 0.9],
    "John Wick":           [0.95, 0.3, 0.0, 0.1, 0.4],
    "La La Land":          [0.1, 0.0, 0.8, 0.9, 0.7]
}"#;

fn main() -> Result<()> {
    println!("=== Movie KNN Demo ===\n");

    let movies: std::collections::BTreeMap<String, Vector> = serde_json::from_str(MOVIES)?;

    let query_title = "Inception";
    let k = 3;
    let query = movies
        .get(query_title)
        .cloned()
        .expect("query movie is in the database");

    // Everything except the query movie is a candidate.
    let candidates: Vec<Candidate> = movies
        .iter()
        .filter(|(title, _)| title.as_str() != query_title)
        .map(|(title, vector)| Candidate::new(title.clone(), vector.clone()))
        .collect();

    let ranker = SimilarityRanker::new(MetricKind::Cosine);
    let results = ranker.rank(&query, &candidates, k)?;

    println!("Query movie: {query_title}");
    println!("Top {k} similar movies:\n");
    for (i, result) in results.iter().enumerate() {
        println!("{}. {} (similarity: {:.3})", i + 1, result.id, result.score);
    }

    Ok(())
}
