// Product x listing matching over a manufacturer index

use crate::core::engine::is_matched;
use crate::domain::model::{Listing, MatchResult, Product};
use std::collections::HashMap;

/// Listings grouped by lowercase manufacturer, in input order within each group.
#[derive(Debug, Default)]
pub struct ManufacturerIndex<'a> {
    groups: HashMap<&'a str, Vec<&'a Listing>>,
}

impl<'a> ManufacturerIndex<'a> {
    pub fn build(listings: &'a [Listing]) -> Self {
        let mut groups: HashMap<&'a str, Vec<&'a Listing>> = HashMap::new();
        for listing in listings {
            groups
                .entry(listing.lower_manufacturer())
                .or_default()
                .push(listing);
        }
        Self { groups }
    }

    /// Empty when no listing has this manufacturer.
    pub fn candidates(&self, lower_manufacturer: &str) -> &[&'a Listing] {
        self.groups
            .get(lower_manufacturer)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn manufacturer_count(&self) -> usize {
        self.groups.len()
    }
}

pub fn find_matching_listings<'a>(product: &Product, candidates: &[&'a Listing]) -> Vec<&'a Listing> {
    candidates
        .iter()
        .copied()
        .filter(|listing| is_matched(product, listing))
        .collect()
}

/// One result per product, in product order, including products without matches.
pub fn match_all<'a>(products: &'a [Product], listings: &'a [Listing]) -> Vec<MatchResult<'a>> {
    let index = ManufacturerIndex::build(listings);
    tracing::debug!(
        "Indexed {} listings under {} manufacturers",
        listings.len(),
        index.manufacturer_count()
    );

    products
        .iter()
        .map(|product| {
            let candidates = index.candidates(product.lower_manufacturer());
            let matched = find_matching_listings(product, candidates);
            tracing::debug!(
                "{}: {} of {} candidates matched",
                product.product_name,
                matched.len(),
                candidates.len()
            );
            MatchResult {
                product_name: &product.product_name,
                listings: matched,
            }
        })
        .collect()
}

/// Aggregate counts over a match run, for reporting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchSummary {
    pub products: usize,
    pub products_with_matches: usize,
    pub matched_pairs: usize,
    pub distinct_listings: usize,
}

impl MatchSummary {
    pub fn from_results(results: &[MatchResult<'_>]) -> Self {
        let mut distinct: Vec<&Listing> = Vec::new();
        let mut summary = MatchSummary {
            products: results.len(),
            ..Default::default()
        };

        for result in results {
            if !result.listings.is_empty() {
                summary.products_with_matches += 1;
            }
            summary.matched_pairs += result.listings.len();
            for &listing in &result.listings {
                // 同一筆 listing 可能被多個產品匹配，以位址判斷是否重複
                if !distinct.iter().any(|seen| std::ptr::eq(*seen, listing)) {
                    distinct.push(listing);
                }
            }
        }

        summary.distinct_listings = distinct.len();
        summary
    }
}
