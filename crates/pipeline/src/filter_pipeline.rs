//! Applying filters to cocktail lists.
//!
//! [`apply_filter`] narrows a list by one filter, [`apply_filters`] folds a
//! sequence of filters left to right, and [`FilterPipeline`] is the builder
//! form of the same fold.
//!
//! Inputs are only ever borrowed. Every call returns a fresh list whose
//! cocktails keep their relative order from the input.

use crate::filter::Filter;
use data_loader::Cocktail;
use tracing;

/// Keep the cocktails that pass `filter`.
pub fn apply_filter(cocktails: &[Cocktail], filter: &Filter) -> Vec<Cocktail> {
    if let Filter::Unrecognized = filter {
        tracing::warn!(
            "Unrecognized filter rule, keeping all {} cocktails",
            cocktails.len()
        );
        return cocktails.to_vec();
    }

    cocktails
        .iter()
        .filter(|cocktail| filter.matches(cocktail))
        .cloned()
        .collect()
}

/// Apply filters one after the other, each narrowing the previous result.
///
/// `filters` may be anything yielding `&Filter` or `Option<&Filter>`:
/// a slice of filters, a slice of optional filters (`None` entries are
/// skipped), or a single `Option<&Filter>` (absent means no filtering).
///
/// ## Algorithm
/// 1. Start with a copy of the input cocktails
/// 2. For each present filter in order:
///    a. Log filter name and input count
///    b. Apply the filter
///    c. Log output count
/// 3. Return final filtered list
pub fn apply_filters<'a, I>(cocktails: &[Cocktail], filters: I) -> Vec<Cocktail>
where
    I: IntoIterator,
    I::Item: Into<Option<&'a Filter>>,
{
    filters
        .into_iter()
        .filter_map(Into::<Option<&'a Filter>>::into)
        .fold(cocktails.to_vec(), |current, filter| {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            let next = apply_filter(&current, filter);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                next.len()
            );
            next
        })
}

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(Filter::MakeableFrom { ingredients: bar })
///     .add_filter(Filter::InGlass { glasses });
///
/// let filtered = pipeline.apply(index.cocktails());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPipeline {
    filters: Vec<Filter>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the end of the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// The filters in application order
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the cocktails.
    pub fn apply(&self, cocktails: &[Cocktail]) -> Vec<Cocktail> {
        apply_filters(cocktails, &self.filters)
    }
}

impl FromIterator<Filter> for FilterPipeline {
    fn from_iter<T: IntoIterator<Item = Filter>>(iter: T) -> Self {
        Self {
            filters: iter.into_iter().collect(),
        }
    }
}
