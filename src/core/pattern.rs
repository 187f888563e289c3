// Boundary pattern construction
// Turns model variants into unanchored alternation patterns with boundary requirements

use crate::core::normalizer::ModelVariants;
use crate::utils::error::Result;
use regex::Regex;

/// What must surround the matched alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// Non-word character before and after.
    Strict,
    /// Non-word character before, non-digit after.
    Trail,
    /// Non-digit character before and after.
    LeadTrail,
}

impl Boundary {
    /// Strictest first; the order in which a title is tested.
    pub const LADDER: [Boundary; 3] = [Boundary::Strict, Boundary::Trail, Boundary::LeadTrail];

    fn lead(self) -> &'static str {
        match self {
            Boundary::Strict | Boundary::Trail => r"\W",
            Boundary::LeadTrail => r"\D",
        }
    }

    fn trail(self) -> &'static str {
        match self {
            Boundary::Strict => r"\W",
            Boundary::Trail | Boundary::LeadTrail => r"\D",
        }
    }
}

/// An alternation of escaped literals plus the boundary it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternationPattern {
    alternatives: Vec<String>,
    boundary: Boundary,
}

impl AlternationPattern {
    /// `alternatives` must already be regex-escaped.
    pub fn new(alternatives: &[String], boundary: Boundary) -> Self {
        let mut unique: Vec<String> = Vec::with_capacity(alternatives.len());
        for alt in alternatives {
            if !unique.contains(alt) {
                unique.push(alt.clone());
            }
        }
        Self {
            alternatives: unique,
            boundary,
        }
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn alternatives(&self) -> &[String] {
        &self.alternatives
    }

    pub fn to_regex_string(&self) -> String {
        format!(
            "{}(?:{}){}",
            self.boundary.lead(),
            self.alternatives.join("|"),
            self.boundary.trail()
        )
    }

    pub fn compile(&self) -> Result<Regex> {
        Ok(Regex::new(&self.to_regex_string())?)
    }
}

/// The three compiled patterns of one product, built once at load time.
#[derive(Debug, Clone)]
pub struct ProductPatterns {
    strict: Regex,
    trail: Regex,
    lead_trail: Regex,
}

impl ProductPatterns {
    pub fn compile(variants: &ModelVariants) -> Result<Self> {
        let build = |boundary| AlternationPattern::new(variants.as_slice(), boundary).compile();

        Ok(Self {
            strict: build(Boundary::Strict)?,
            trail: build(Boundary::Trail)?,
            lead_trail: build(Boundary::LeadTrail)?,
        })
    }

    pub fn get(&self, boundary: Boundary) -> &Regex {
        match boundary {
            Boundary::Strict => &self.strict,
            Boundary::Trail => &self.trail,
            Boundary::LeadTrail => &self.lead_trail,
        }
    }
}
