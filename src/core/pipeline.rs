use crate::core::matcher::match_all;
use crate::core::records::{encode_results, parse_listings, parse_products};
use crate::core::{Catalog, ConfigProvider, MatchResult, Pipeline, Storage};
use crate::utils::error::Result;

pub struct MatchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> MatchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for MatchPipeline<S, C> {
    fn extract(&self) -> Result<Catalog> {
        let products_path = self.config.products_path();
        tracing::info!("Loading products from '{}'...", products_path);
        let products = parse_products(products_path, &self.storage.read_file(products_path)?)?;
        tracing::info!("Loaded {} products.", products.len());

        let listings_path = self.config.listings_path();
        tracing::info!("Loading listings from '{}'...", listings_path);
        let listings = parse_listings(listings_path, &self.storage.read_file(listings_path)?)?;
        tracing::info!("Loaded {} listings.", listings.len());

        Ok(Catalog { products, listings })
    }

    fn transform<'a>(&self, catalog: &'a Catalog) -> Result<Vec<MatchResult<'a>>> {
        tracing::info!("Matching...");
        Ok(match_all(&catalog.products, &catalog.listings))
    }

    fn load(&self, results: &[MatchResult<'_>]) -> Result<String> {
        let output_path = self.config.output_path();
        let data = encode_results(results)?;

        // 一次寫入：失敗時不會留下部分輸出
        tracing::debug!("Writing {} result lines ({} bytes)", results.len(), data.len());
        self.storage.write_file(output_path, &data)?;

        Ok(output_path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::MatchError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
    }

    impl MockStorage {
        fn with_file(self, path: &str, content: &str) -> Self {
            self.files
                .borrow_mut()
                .insert(path.to_string(), content.as_bytes().to_vec());
            self
        }

        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.borrow().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.get_file(path).ok_or_else(|| {
                std::io::Error::new(std::io::ErrorKind::NotFound, path.to_string()).into()
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files.borrow_mut().insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct TestConfig;

    impl ConfigProvider for TestConfig {
        fn products_path(&self) -> &str {
            "products.txt"
        }

        fn listings_path(&self) -> &str {
            "listings.txt"
        }

        fn output_path(&self) -> &str {
            "matches.txt"
        }

        fn monitoring_enabled(&self) -> bool {
            false
        }
    }

    const PRODUCTS: &str = r#"{"product_name":"Canon_EOS_1D","manufacturer":"Canon","model":"EOS-1D"}
{"product_name":"Nikon_D90","manufacturer":"Nikon","model":"D90"}
"#;

    const LISTINGS: &str = r#"{"title":"Canon EOS 1D Camera","manufacturer":"Canon","price":"3999.00"}
{"title":"Nikon D90 body","manufacturer":"Canon","price":"10.00"}
"#;

    #[test]
    fn test_extract_loads_both_sources() {
        let storage = MockStorage::default()
            .with_file("products.txt", PRODUCTS)
            .with_file("listings.txt", LISTINGS);
        let pipeline = MatchPipeline::new(storage, TestConfig);

        let catalog = pipeline.extract().unwrap();
        assert_eq!(catalog.products.len(), 2);
        assert_eq!(catalog.listings.len(), 2);
    }

    #[test]
    fn test_extract_missing_source_is_io_error() {
        let storage = MockStorage::default().with_file("products.txt", PRODUCTS);
        let pipeline = MatchPipeline::new(storage, TestConfig);

        assert!(matches!(pipeline.extract(), Err(MatchError::IoError(_))));
    }

    #[test]
    fn test_full_pass_writes_one_line_per_product() {
        let storage = MockStorage::default()
            .with_file("products.txt", PRODUCTS)
            .with_file("listings.txt", LISTINGS);
        let pipeline = MatchPipeline::new(&storage, TestConfig);

        let catalog = pipeline.extract().unwrap();
        let results = pipeline.transform(&catalog).unwrap();
        let output_path = pipeline.load(&results).unwrap();
        assert_eq!(output_path, "matches.txt");

        let written = String::from_utf8(storage.get_file("matches.txt").unwrap()).unwrap();
        let lines: Vec<serde_json::Value> = written
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["product_name"], "Canon_EOS_1D");
        assert_eq!(lines[0]["listings"][0]["price"], "3999.00");
        assert_eq!(lines[1]["product_name"], "Nikon_D90");
        assert_eq!(lines[1]["listings"], serde_json::json!([]));
    }
}
