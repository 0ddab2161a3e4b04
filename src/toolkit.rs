//! Capability interfaces for the external language machinery, plus the
//! implementations shipped with the crate. Checks depend on these narrow
//! traits, never on a particular model or library.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Sentence tokenization and sentiment polarity. Implementations must be
/// deterministic so that scoring is reproducible.
pub trait LanguageToolkit {
    /// Split text into sentences, in order, trimmed, punctuation kept.
    fn sentences(&self, text: &str) -> Vec<String>;

    /// Sentiment polarity in [-1, 1].
    fn polarity(&self, text: &str) -> f64;
}

/// Entity label classes kept by the entity density check. Recognizers map
/// their model's tag set onto these five and drop everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityLabel {
    Org,
    Product,
    Gpe,
    Person,
    Event,
}

/// A named-entity span found in body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    /// Byte offset of the span in the scanned text.
    pub offset: usize,
}

/// Named-entity recognition. Optional: when no model is installed the
/// entity density check degrades to a skipped result, never an error.
pub trait EntityRecognizer {
    /// Whether a model is loaded and ready.
    fn is_available(&self) -> bool;

    /// Entities in document order. Only called when [`is_available`] is true.
    ///
    /// [`is_available`]: EntityRecognizer::is_available
    fn entities(&self, text: &str) -> Vec<Entity>;
}

// A sentence ends at terminal punctuation, optionally followed by closing
// quotes/brackets, then whitespace or end of input.
static SENTENCE_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[.!?]["'\u{201D}\u{2019})\]]*(?:\s+|$)"#).unwrap());

/// The toolkit shipped with the crate: a regex sentence splitter and VADER
/// compound polarity. Deterministic, no model files to install.
#[derive(Debug, Default)]
pub struct RegexToolkit;

impl RegexToolkit {
    pub fn new() -> Self {
        Self
    }
}

impl LanguageToolkit for RegexToolkit {
    fn sentences(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut start = 0;
        for m in SENTENCE_BOUNDARY_RE.find_iter(text) {
            let sentence = text[start..m.end()].trim();
            if !sentence.is_empty() {
                out.push(sentence.to_string());
            }
            start = m.end();
        }
        let tail = text[start..].trim();
        if !tail.is_empty() {
            out.push(tail.to_string());
        }
        out
    }

    fn polarity(&self, text: &str) -> f64 {
        // The analyzer is a pair of references into the crate's static
        // lexicons; constructing one per call is free.
        vader_sentiment::SentimentIntensityAnalyzer::new()
            .polarity_scores(text)
            .get("compound")
            .copied()
            .unwrap_or(0.0)
    }
}

/// Placeholder recognizer used when no NER model is installed.
pub struct NoEntityModel;

impl EntityRecognizer for NoEntityModel {
    fn is_available(&self) -> bool {
        false
    }

    fn entities(&self, _text: &str) -> Vec<Entity> {
        Vec::new()
    }
}
