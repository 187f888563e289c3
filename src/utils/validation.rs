use crate::utils::error::{MatchError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(MatchError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 輸出檔不可覆蓋任何輸入檔
pub fn validate_output_distinct(field_name: &str, output: &str, inputs: &[&str]) -> Result<()> {
    let output_path = Path::new(output);
    for input in inputs {
        if Path::new(input) == output_path {
            return Err(MatchError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: output.to_string(),
                reason: format!("Output would overwrite input file '{}'", input),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input.products", "products.txt").is_ok());
        assert!(validate_path("input.products", "").is_err());
        assert!(validate_path("input.products", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_output_distinct() {
        let inputs = ["products.txt", "listings.txt"];
        assert!(validate_output_distinct("output.path", "matches.txt", &inputs).is_ok());
        assert!(validate_output_distinct("output.path", "listings.txt", &inputs).is_err());
    }
}
