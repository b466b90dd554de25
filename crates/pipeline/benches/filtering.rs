//! Benchmarks for filtering and ingredient counting
//!
//! Run with: cargo bench --package pipeline
//!
//! Uses a synthetic menu so the benchmark needs no data files.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use data_loader::{Cocktail, IngredientRef};
use pipeline::{
    apply_filters, count_ingredients, filters_from_user_options, FilterToggle, IngredientsRule,
    UserFilterOptions,
};
use std::collections::HashSet;

const INGREDIENTS: [&str; 12] = [
    "rum", "gin", "vodka", "tequila", "whiskey", "lime", "lemon", "sugar", "mint", "soda",
    "cream", "egg white",
];
const GLASSES: [&str; 4] = ["coupe", "highball", "rocks", "martini"];

fn synthetic_menu(size: u32) -> Vec<Cocktail> {
    (0..size)
        .map(|id| {
            let n = id as usize;
            Cocktail {
                id,
                name: format!("Cocktail {}", id),
                ingredients: (0..3)
                    .map(|k| IngredientRef::new(INGREDIENTS[(n + k * 5) % INGREDIENTS.len()]))
                    .collect(),
                glass: GLASSES[n % GLASSES.len()].to_string(),
                category: if n % 3 == 0 { "classic" } else { "modern" }.to_string(),
            }
        })
        .collect()
}

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn bench_user_option_filters(c: &mut Criterion) {
    let menu = synthetic_menu(2_000);
    let options = UserFilterOptions {
        name_filter: Some("1".to_string()),
        active_filters: vec![
            FilterToggle::ByIngredient,
            FilterToggle::VeganOnly,
            FilterToggle::ByGlass,
        ],
        ingredients_rule: IngredientsRule::MustInclude,
        ingredients: set(&["lime"]),
        glasses: set(&["coupe", "rocks"]),
        ..Default::default()
    };
    let filters = filters_from_user_options(
        &options,
        &HashSet::new(),
        &set(&["cream", "egg white"]),
        &HashSet::new(),
    );

    c.bench_function("apply_user_option_filters", |b| {
        b.iter(|| {
            let filtered = apply_filters(black_box(&menu), black_box(&filters));
            black_box(filtered)
        })
    });
}

fn bench_count_ingredients(c: &mut Criterion) {
    let menu = synthetic_menu(2_000);

    c.bench_function("count_ingredients", |b| {
        b.iter(|| {
            let counts = count_ingredients(black_box(&menu));
            black_box(counts)
        })
    });
}

criterion_group!(benches, bench_user_option_filters, bench_count_ingredients);
criterion_main!(benches);
