use data_loader::CocktailIndex;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/cocktails.json");

    println!("Loading cocktail dataset...\n");

    let start = Instant::now();
    let index = CocktailIndex::load_from_file(path)
        .expect("Failed to load dataset");
    let elapsed = start.elapsed();

    let ingredient_refs: usize = index.cocktails().iter().map(|c| c.ingredients.len()).sum();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Cocktails: {}", index.len());
    println!("Ingredient entries: {}", ingredient_refs);
    println!("\nPerformance: {:.0} cocktails/second",
             index.len() as f64 / elapsed.as_secs_f64());
}
