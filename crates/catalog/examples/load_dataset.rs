use catalog::loader;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/movies.json");

    println!("Loading movie dataset...\n");

    let start = Instant::now();
    let catalog = loader::load_from_file(path).expect("Failed to load dataset");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", catalog.len());
    println!("Distinct ids: {}", catalog.indexed_count());
}
