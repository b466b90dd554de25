use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::{parser, Cocktail, CocktailId, CocktailIndex};
use pipeline::{
    apply_filters, count_ingredients, filters_from_user_options, FilterList, FilterToggle,
    IngredientCount, IngredientsRule, UserFilterOptions,
};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Cocktail Finder - filter a cocktail list by name, ingredients, glass and more
#[derive(Parser)]
#[command(name = "cocktail-finder")]
#[command(about = "Filter cocktails and count their ingredients", long_about = None)]
struct Cli {
    /// Path to the cocktail JSON file
    #[arg(short, long, global = true, default_value = "data/cocktails.json")]
    data: PathBuf,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter cocktails using the same switches as the options screen
    Filter(FilterArgs),

    /// Apply filters from a JSON file (a single filter, a list, or null)
    Apply {
        /// JSON file holding the filters
        #[arg(long)]
        filters: PathBuf,

        /// Also print ingredient counts for the matches
        #[arg(long)]
        count: bool,
    },

    /// Count ingredients across every cocktail
    Count,
}

#[derive(Args)]
struct FilterArgs {
    /// JSON file with user filter options; replaces the option flags below
    #[arg(long)]
    options: Option<PathBuf>,

    /// Only cocktails whose name contains this text (case-insensitive)
    #[arg(long)]
    name: Option<String>,

    /// Rule used with --by-ingredient
    #[arg(long, value_enum, default_value_t = RuleArg::MustInclude)]
    rule: RuleArg,

    /// Ingredient for --by-ingredient (repeatable)
    #[arg(long = "ingredient")]
    ingredients: Vec<String>,

    /// Category to keep (repeatable)
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Glass to keep (repeatable)
    #[arg(long = "glass")]
    glasses: Vec<String>,

    /// Apply the ingredient rule
    #[arg(long)]
    by_ingredient: bool,

    /// Only cocktails makeable from --bar
    #[arg(long)]
    bar_only: bool,

    /// Drop cocktails containing any --non-vegan ingredient
    #[arg(long)]
    vegan_only: bool,

    /// Only cocktails listed with --favourite
    #[arg(long)]
    favourites_only: bool,

    /// Ingredient available in the bar (repeatable)
    #[arg(long)]
    bar: Vec<String>,

    /// Ingredient treated as non-vegan (repeatable)
    #[arg(long)]
    non_vegan: Vec<String>,

    /// Favourite cocktail id (repeatable)
    #[arg(long = "favourite")]
    favourites: Vec<CocktailId>,

    /// Also print ingredient counts for the matches
    #[arg(long)]
    count: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum RuleArg {
    MustInclude,
    CanInclude,
    MustNotInclude,
    MakeableFrom,
}

impl From<RuleArg> for IngredientsRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::MustInclude => IngredientsRule::MustInclude,
            RuleArg::CanInclude => IngredientsRule::CanInclude,
            RuleArg::MustNotInclude => IngredientsRule::MustNotInclude,
            RuleArg::MakeableFrom => IngredientsRule::MakeableFrom,
        }
    }
}

impl FilterArgs {
    /// Build user options from `--options` or from the individual flags
    fn user_options(&self) -> Result<UserFilterOptions> {
        if let Some(path) = &self.options {
            return parser::read_json(path)
                .with_context(|| format!("Failed to read filter options from {}", path.display()));
        }

        let switches = [
            (self.by_ingredient, FilterToggle::ByIngredient),
            (self.bar_only, FilterToggle::BarOnly),
            (self.vegan_only, FilterToggle::VeganOnly),
            (!self.categories.is_empty(), FilterToggle::ByCategory),
            (self.favourites_only, FilterToggle::FavouritesOnly),
            (!self.glasses.is_empty(), FilterToggle::ByGlass),
        ];

        Ok(UserFilterOptions {
            name_filter: self.name.clone(),
            active_filters: switches
                .into_iter()
                .filter_map(|(on, toggle)| on.then_some(toggle))
                .collect(),
            ingredients_rule: self.rule.into(),
            ingredients: self.ingredients.iter().cloned().collect(),
            categories: self.categories.iter().cloned().collect(),
            glasses: self.glasses.iter().cloned().collect(),
        })
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let index = CocktailIndex::load_from_file(&cli.data)
        .with_context(|| format!("Failed to load cocktails from {}", cli.data.display()))?;
    tracing::debug!("Loaded dataset in {:?}", start.elapsed());

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Filter(args) => handle_filter(&index, &args, cli.json)?,
        Commands::Apply { filters, count } => handle_apply(&index, &filters, count, cli.json)?,
        Commands::Count => handle_count(&index, cli.json)?,
    }

    Ok(())
}

/// Handle the 'filter' command
fn handle_filter(index: &CocktailIndex, args: &FilterArgs, json: bool) -> Result<()> {
    let options = args.user_options()?;
    let bar: HashSet<String> = args.bar.iter().cloned().collect();
    let non_vegan: HashSet<String> = args.non_vegan.iter().cloned().collect();
    let favourites: HashSet<CocktailId> = args.favourites.iter().copied().collect();

    let filters = filters_from_user_options(&options, &bar, &non_vegan, &favourites);
    let matches = apply_filters(index.cocktails(), &filters);

    print_results(&matches, args.count, json)
}

/// Handle the 'apply' command
fn handle_apply(index: &CocktailIndex, path: &Path, count: bool, json: bool) -> Result<()> {
    let list: Option<FilterList> = parser::read_json(path)
        .with_context(|| format!("Failed to read filters from {}", path.display()))?;
    let filters = list.unwrap_or_default().into_filters();

    let matches = apply_filters(index.cocktails(), &filters);

    print_results(&matches, count, json)
}

/// Handle the 'count' command
fn handle_count(index: &CocktailIndex, json: bool) -> Result<()> {
    let counts = count_ingredients(index.cocktails());

    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
    } else {
        print_counts(&counts);
    }
    Ok(())
}

fn print_results(matches: &[Cocktail], with_counts: bool, json: bool) -> Result<()> {
    let counts = with_counts.then(|| count_ingredients(matches));

    if json {
        let value = match counts {
            Some(counts) => serde_json::json!({ "cocktails": matches, "ingredients": counts }),
            None => serde_json::json!({ "cocktails": matches }),
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_cocktails(matches);
    if let Some(counts) = counts {
        println!();
        print_counts(&counts);
    }
    Ok(())
}

/// Helper function to format and print cocktails
fn print_cocktails(cocktails: &[Cocktail]) {
    println!(
        "{}",
        format!("{} matching cocktails:", cocktails.len()).bold().blue()
    );
    for (rank, cocktail) in cocktails.iter().enumerate() {
        let ingredients = cocktail
            .ingredients
            .iter()
            .filter_map(|i| i.ingredient.as_deref())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{}. {} ({}, {}) [{}]",
            (rank + 1).to_string().green(),
            cocktail.name.bold(),
            cocktail.category,
            cocktail.glass,
            ingredients
        );
    }
}

fn print_counts(counts: &[IngredientCount]) {
    println!("{}", "Ingredient counts:".bold().blue());
    for entry in counts {
        let name = entry.name.as_deref().unwrap_or("(unnamed)");
        println!("{}{}: {}", "• ".cyan(), name, entry.count);
    }
}
