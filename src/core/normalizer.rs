// Model identifier normalization
// Derives the spacing/dash spellings of a model that a listing title may use

/// The five lowercased spellings of a model, each escaped for literal use in a regex.
///
/// Order is fixed: original, no spaces, no dashes, dashes as spaces, spaces as dashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelVariants([String; 5]);

impl ModelVariants {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn original(&self) -> &str {
        &self.0[0]
    }

    pub fn no_space(&self) -> &str {
        &self.0[1]
    }

    pub fn no_dash(&self) -> &str {
        &self.0[2]
    }

    pub fn dash_to_space(&self) -> &str {
        &self.0[3]
    }

    pub fn space_to_dash(&self) -> &str {
        &self.0[4]
    }
}

/// Build the model variants for `model`. Any string is accepted, including the empty one.
pub fn model_variants(model: &str) -> ModelVariants {
    let lower = model.to_lowercase();

    ModelVariants([
        regex::escape(&lower),
        regex::escape(&lower.replace(' ', "")),
        regex::escape(&lower.replace('-', "")),
        regex::escape(&lower.replace('-', " ")),
        regex::escape(&lower.replace(' ', "-")),
    ])
}
