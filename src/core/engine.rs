// Listing/product match test

use crate::core::pattern::Boundary;
use crate::domain::model::{Listing, Product};

/// True when any of the product's patterns occurs in the listing title.
///
/// Patterns are tried strictest first. Each one is tested against the
/// lowercased title, then against the lowercased title with dashes removed.
/// Manufacturer eligibility is the caller's concern.
pub fn is_matched(product: &Product, listing: &Listing) -> bool {
    let patterns = product.patterns();
    let texts = [listing.lower_title(), listing.lower_title_no_dash()];

    Boundary::LADDER.iter().any(|&boundary| {
        let regex = patterns.get(boundary);
        texts.iter().any(|text| regex.is_match(text))
    })
}
