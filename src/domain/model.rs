use crate::core::normalizer::{model_variants, ModelVariants};
use crate::core::pattern::ProductPatterns;
use crate::utils::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// A catalog entry with its matching data derived once at construction.
#[derive(Debug, Clone)]
pub struct Product {
    pub manufacturer: String,
    pub model: String,
    pub product_name: String,
    lower_manufacturer: String,
    variants: ModelVariants,
    patterns: ProductPatterns,
}

impl Product {
    pub fn new(manufacturer: String, model: String, product_name: String) -> Result<Self> {
        let variants = model_variants(&model);
        let patterns = ProductPatterns::compile(&variants)?;

        Ok(Self {
            lower_manufacturer: manufacturer.to_lowercase(),
            manufacturer,
            model,
            product_name,
            variants,
            patterns,
        })
    }

    pub fn lower_manufacturer(&self) -> &str {
        &self.lower_manufacturer
    }

    pub fn variants(&self) -> &ModelVariants {
        &self.variants
    }

    pub fn patterns(&self) -> &ProductPatterns {
        &self.patterns
    }
}

/// A marketplace entry. The source JSON object is kept verbatim for output.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub title: String,
    pub manufacturer: String,
    raw: Map<String, Value>,
    lower_title: String,
    lower_title_no_dash: String,
    lower_manufacturer: String,
}

impl Listing {
    pub fn new(title: String, manufacturer: String) -> Self {
        let mut raw = Map::new();
        raw.insert("title".to_string(), Value::String(title.clone()));
        raw.insert("manufacturer".to_string(), Value::String(manufacturer.clone()));
        Self::with_raw(title, manufacturer, raw)
    }

    /// `raw` is the full source object; `title` and `manufacturer` are its required fields.
    pub fn with_raw(title: String, manufacturer: String, raw: Map<String, Value>) -> Self {
        let lower_title = title.to_lowercase();
        let lower_title_no_dash = lower_title.replace('-', "");

        Self {
            lower_manufacturer: manufacturer.to_lowercase(),
            title,
            manufacturer,
            raw,
            lower_title,
            lower_title_no_dash,
        }
    }

    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn lower_title(&self) -> &str {
        &self.lower_title
    }

    pub fn lower_title_no_dash(&self) -> &str {
        &self.lower_title_no_dash
    }

    pub fn lower_manufacturer(&self) -> &str {
        &self.lower_manufacturer
    }
}

impl Serialize for Listing {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// Matches of one product, in scan order.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
    pub product_name: &'a str,
    pub listings: Vec<&'a Listing>,
}

/// Everything read from the two input sources.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub listings: Vec<Listing>,
}
