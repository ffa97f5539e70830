//! Market Listing Comparison
//!
//! Annotates market listings with their price delta against a reference
//! retail valuation. A reference of zero or below means no valid book
//! value was available, and the delta is reported as explicitly absent
//! rather than zero.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One market listing as returned by the listings search source.
///
/// Only `price` matters for comparison; every other descriptive field
/// (year, make, model, mileage, source URL, ...) is carried through
/// untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketListing {
    /// Asking price; listings occasionally omit it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Remaining listing fields, passed through as-is
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// A market listing annotated with its delta against the reference value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedListing {
    #[serde(flatten)]
    pub listing: MarketListing,
    /// `price - reference`, or null when no valid reference exists.
    /// Serialized even when absent so callers can tell "no reference"
    /// apart from a listing priced exactly at reference.
    pub price_vs_retail: Option<f64>,
}

/// Annotate each listing with its price position against `reference`.
///
/// Order-preserving and one-to-one; the input is not modified. A
/// listing without a price is treated as priced at zero.
pub fn annotate(listings: &[MarketListing], reference: f64) -> Vec<AnnotatedListing> {
    listings
        .iter()
        .map(|listing| AnnotatedListing {
            price_vs_retail: if reference > 0.0 {
                Some(listing.price.unwrap_or(0.0) - reference)
            } else {
                None
            },
            listing: listing.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn listing(price: Option<f64>) -> MarketListing {
        MarketListing {
            price,
            details: Map::new(),
        }
    }

    #[test]
    fn test_delta_against_reference() {
        let listings = vec![listing(Some(20_000.0)), listing(Some(18_000.0))];
        let annotated = annotate(&listings, 19_000.0);
        assert_eq!(annotated[0].price_vs_retail, Some(1_000.0));
        assert_eq!(annotated[1].price_vs_retail, Some(-1_000.0));
    }

    #[test]
    fn test_zero_reference_yields_no_delta() {
        let annotated = annotate(&[listing(Some(20_000.0))], 0.0);
        assert_eq!(annotated.len(), 1);
        assert_eq!(annotated[0].price_vs_retail, None);
    }

    #[test]
    fn test_negative_reference_yields_no_delta() {
        let annotated = annotate(&[listing(Some(20_000.0))], -500.0);
        assert_eq!(annotated[0].price_vs_retail, None);
    }

    #[test]
    fn test_missing_price_defaults_to_zero() {
        let annotated = annotate(&[listing(None)], 19_000.0);
        assert_eq!(annotated[0].price_vs_retail, Some(-19_000.0));
    }

    #[test]
    fn test_absent_delta_serializes_as_null() {
        let annotated = annotate(&[listing(Some(20_000.0))], 0.0);
        let json = serde_json::to_value(&annotated[0]).unwrap();
        let map = json.as_object().unwrap();
        assert!(map.contains_key("price_vs_retail"));
        assert!(map["price_vs_retail"].is_null());
    }

    #[test]
    fn test_details_pass_through() {
        let mut details = Map::new();
        details.insert("make".to_string(), Value::from("Toyota"));
        details.insert("mileage".to_string(), Value::from(42_000));
        let input = MarketListing {
            price: Some(21_500.0),
            details,
        };

        let annotated = annotate(&[input.clone()], 20_000.0);
        assert_eq!(annotated[0].listing, input);

        let json = serde_json::to_value(&annotated[0]).unwrap();
        assert_eq!(json["make"], "Toyota");
        assert_eq!(json["mileage"], 42_000);
        assert_eq!(json["price_vs_retail"], 1_500.0);
    }

    proptest! {
        /// Annotation preserves length and order for any input.
        #[test]
        fn prop_length_and_order_preserved(
            prices in proptest::collection::vec(proptest::option::of(0.0..100_000.0f64), 0..20),
            reference in -10_000.0..60_000.0f64,
        ) {
            let listings: Vec<MarketListing> = prices.iter().map(|p| listing(*p)).collect();
            let annotated = annotate(&listings, reference);
            prop_assert_eq!(annotated.len(), listings.len());
            for (output, input) in annotated.iter().zip(&listings) {
                prop_assert_eq!(&output.listing, input);
                match output.price_vs_retail {
                    Some(delta) => {
                        prop_assert!(reference > 0.0);
                        prop_assert_eq!(delta, input.price.unwrap_or(0.0) - reference);
                    }
                    None => prop_assert!(reference <= 0.0),
                }
            }
        }
    }
}
