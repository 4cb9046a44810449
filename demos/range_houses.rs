//! House Range Query Demo
//!
//! Finds every house within a euclidean distance threshold of a query house.
//! Each house is a 4-dimensional vector: price (thousands of dollars),
//! size (square feet), bedrooms, bathrooms.
//!
//! To run this demo:
//! ```bash
//! cargo run --example range_houses
//! ```

use anyhow::Result;
use vecrank::metric::MetricKind;
use vecrank::ranker::{Candidate, SimilarityRanker};
use vecrank::vector::Vector;

fn main() -> Result<()> {
    println!("=== House Range Query Demo ===\n");

    let houses = vec![
        Candidate::new("House A", vec![500.0, 2000.0, 3.0, 2.0]),
        Candidate::new("House B", vec![600.0, 2200.0, 4.0, 3.0]),
        Candidate::new("House C", vec![300.0, 1500.0, 2.0, 1.0]),
        Candidate::new("House D", vec![550.0, 2100.0, 3.0, 2.0]),
        Candidate::new("House E", vec![400.0, 1800.0, 3.0, 2.0]),
        Candidate::new("House F", vec![700.0, 2500.0, 4.0, 3.0]),
        Candidate::new("House G", vec![350.0, 1600.0, 2.0, 2.0]),
        Candidate::new("House H", vec![480.0, 1950.0, 3.0, 2.0]),
    ];

    let query_house = "House A";
    let threshold = 150.0;
    let query: Vector = houses
        .iter()
        .find(|c| c.id == query_house)
        .map(|c| c.vector.clone())
        .expect("query house is in the database");

    let candidates: Vec<Candidate> = houses
        .iter()
        .filter(|c| c.id != query_house)
        .cloned()
        .collect();

    let ranker = SimilarityRanker::new(MetricKind::Euclidean);
    let results = ranker.rank_within(&query, &candidates, threshold)?;

    println!("Query house: {query_house}");
    println!("Distance threshold: {threshold}");
    println!("Houses within range: {}\n", results.len());
    for result in &results {
        println!("- {} (distance: {:.1})", result.id, result.score);
    }
    if results.is_empty() {
        println!("No houses found within the specified range");
    }

    Ok(())
}
