// Line-delimited JSON records
// One JSON object per line in, one JSON object per line out

use crate::domain::model::{Listing, MatchResult, Product};
use crate::utils::error::{MatchError, Result};
use serde_json::{Map, Value};

fn decode_lines<'d>(source_name: &str, data: &'d [u8]) -> Result<impl Iterator<Item = (usize, &'d str)>> {
    let text = std::str::from_utf8(data).map_err(|e| {
        // 錯誤所在行號 = 有效前綴中的換行數 + 1
        let line = data[..e.valid_up_to()].iter().filter(|&&b| b == b'\n').count() + 1;
        MatchError::malformed(source_name, line, format!("invalid UTF-8: {}", e))
    })?;
    Ok(text.lines().enumerate().map(|(i, line)| (i + 1, line)))
}

/// Parse products. Any bad line aborts the whole load.
pub fn parse_products(source_name: &str, data: &[u8]) -> Result<Vec<Product>> {
    let mut products = Vec::new();
    for (line_no, line) in decode_lines(source_name, data)? {
        let object = parse_object(source_name, line_no, line)?;

        let manufacturer = required_string(&object, "manufacturer", source_name, line_no)?;
        let model = required_string(&object, "model", source_name, line_no)?;
        let product_name = required_string(&object, "product_name", source_name, line_no)?;
        products.push(Product::new(manufacturer, model, product_name)?);
    }
    Ok(products)
}

/// Duplicate keys keep the last value.
fn parse_object(source_name: &str, line_no: usize, line: &str) -> Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(line)
        .map_err(|e| MatchError::malformed(source_name, line_no, e.to_string()))?;
    match value {
        Value::Object(object) => Ok(object),
        _ => Err(MatchError::malformed(source_name, line_no, "expected a JSON object")),
    }
}

fn required_string(
    object: &Map<String, Value>,
    field: &str,
    source_name: &str,
    line_no: usize,
) -> Result<String> {
    match object.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(MatchError::malformed(
            source_name,
            line_no,
            format!("field `{}` must be a string, found {}", field, other),
        )),
        None => Err(MatchError::malformed(
            source_name,
            line_no,
            format!("missing field `{}`", field),
        )),
    }
}

/// Parse listings, keeping each source object for output.
pub fn parse_listings(source_name: &str, data: &[u8]) -> Result<Vec<Listing>> {
    let mut listings = Vec::new();
    for (line_no, line) in decode_lines(source_name, data)? {
        let object = parse_object(source_name, line_no, line)?;

        let title = required_string(&object, "title", source_name, line_no)?;
        let manufacturer = required_string(&object, "manufacturer", source_name, line_no)?;
        listings.push(Listing::with_raw(title, manufacturer, object));
    }
    Ok(listings)
}

/// Encode results as one `{"product_name", "listings"}` object per line.
pub fn encode_results(results: &[MatchResult<'_>]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    for result in results {
        serde_json::to_writer(&mut out, result)?;
        out.push(b'\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_products_ignores_extra_fields() {
        let data = br#"{"product_name":"Canon_G12","manufacturer":"Canon","model":"G12","family":"PowerShot","announced-date":"2010-09-14"}
{"product_name":"Sony_A7","manufacturer":"Sony","model":"A7"}
"#;
        let products = parse_products("products.txt", data).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].product_name, "Canon_G12");
        assert_eq!(products[0].lower_manufacturer(), "canon");
        assert_eq!(products[1].model, "A7");
        assert_eq!(products[1].variants().original(), "a7");
    }

    #[test]
    fn test_product_missing_model_reports_line() {
        let data = b"{\"product_name\":\"a\",\"manufacturer\":\"b\",\"model\":\"c\"}\n{\"product_name\":\"x\",\"manufacturer\":\"y\"}\n";
        let err = parse_products("products.txt", data).unwrap_err();
        match err {
            MatchError::MalformedRecord { source_name, line, reason } => {
                assert_eq!(source_name, "products.txt");
                assert_eq!(line, 2);
                assert!(reason.contains("model"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_product_non_string_model_is_malformed() {
        let data = br#"{"product_name":"a","manufacturer":"b","model":42}"#;
        assert!(matches!(
            parse_products("products.txt", data),
            Err(MatchError::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn test_product_not_an_object_is_malformed() {
        let data = br#"["Canon","G12","Canon_G12"]"#;
        let err = parse_products("products.txt", data).unwrap_err();
        match err {
            MatchError::MalformedRecord { line, reason, .. } => {
                assert_eq!(line, 1);
                assert_eq!(reason, "expected a JSON object");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_product_duplicate_key_keeps_last_value() {
        let data = br#"{"product_name":"Canon_G12","manufacturer":"Canon","model":"G11","model":"G12"}"#;
        let products = parse_products("products.txt", data).unwrap();
        assert_eq!(products[0].model, "G12");
    }

    #[test]
    fn test_parse_listings_keeps_raw_object() {
        let data = br#"{"title":"Canon G12","manufacturer":"Canon","currency":"CAD","price":"499.99"}"#;
        let listings = parse_listings("listings.txt", data).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].lower_title(), "canon g12");
        assert_eq!(
            Value::Object(listings[0].raw().clone()),
            json!({"title":"Canon G12","manufacturer":"Canon","currency":"CAD","price":"499.99"})
        );
    }

    #[test]
    fn test_listing_lower_title_no_dash() {
        let data = br#"{"title":"Canon EOS-1D Mark-IV","manufacturer":"Canon"}"#;
        let listings = parse_listings("listings.txt", data).unwrap();
        assert_eq!(listings[0].lower_title_no_dash(), "canon eos1d markiv");
    }

    #[test]
    fn test_listing_missing_title_is_malformed() {
        let data = br#"{"manufacturer":"Canon"}"#;
        let err = parse_listings("listings.txt", data).unwrap_err();
        assert!(err.to_string().contains("missing field `title`"));
    }

    #[test]
    fn test_listing_not_an_object_is_malformed() {
        let data = b"[1,2,3]\n";
        assert!(matches!(
            parse_listings("listings.txt", data),
            Err(MatchError::MalformedRecord { line: 1, .. })
        ));
    }

    #[test]
    fn test_blank_line_is_malformed() {
        let data = b"{\"title\":\"a\",\"manufacturer\":\"b\"}\n\n{\"title\":\"c\",\"manufacturer\":\"d\"}\n";
        assert!(matches!(
            parse_listings("listings.txt", data),
            Err(MatchError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let data = b"{\"title\":\"a\",\"manufacturer\":\"b\"}\n\xff\xfe\n";
        assert!(matches!(
            parse_listings("listings.txt", data),
            Err(MatchError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn test_encode_results_preserves_listing_fields() {
        let data = br#"{"title":"Canon G12","manufacturer":"Canon","price":"499.99"}"#;
        let listings = parse_listings("listings.txt", data).unwrap();
        let results = vec![
            MatchResult {
                product_name: "Canon_G12",
                listings: vec![&listings[0]],
            },
            MatchResult {
                product_name: "Nikon_D90",
                listings: vec![],
            },
        ];

        let encoded = String::from_utf8(encode_results(&results).unwrap()).unwrap();
        assert_eq!(
            encoded,
            "{\"product_name\":\"Canon_G12\",\"listings\":[{\"title\":\"Canon G12\",\"manufacturer\":\"Canon\",\"price\":\"499.99\"}]}\n\
             {\"product_name\":\"Nikon_D90\",\"listings\":[]}\n"
        );
    }
}
