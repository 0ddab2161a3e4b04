//! Request/response records. Every check returns an immutable result record
//! with all score fields present, even on empty input.

use serde::{Deserialize, Serialize};

use crate::error::AuditError;
use crate::toolkit::EntityLabel;

/// One document to audit. Field names follow the JSON wire format: `content`
/// is the raw body (may carry markup), `html` overrides it for the
/// structure-aware checks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub html: Option<String>,
}

// ---------------------------------------------------------------------------
// Per-check result records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperienceSignalsResult {
    /// Saturating score: 3 qualifying sentences = 100.
    pub score: f64,
    pub experience_sentences: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentTrigger {
    TooPositive,
    TooNegative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleHyperboleResult {
    pub is_clickbait: bool,
    pub trigger_word: Option<String>,
    /// VADER-style compound polarity, rounded to 3 decimals.
    pub sentiment_polarity: f64,
    pub sentiment_trigger: Option<SentimentTrigger>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataDensityResult {
    /// Data points per 100 words, rounded to 2 decimals.
    pub density_score: f64,
    pub data_point_count: usize,
    pub word_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionIssue {
    TooThin,
    WallOfText,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionFlag {
    pub section_label: String,
    pub word_count: usize,
    pub issue: SectionIssue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkimmabilityResult {
    pub pass_fail: Verdict,
    pub problematic_sections: Vec<SectionFlag>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporalConsistencyResult {
    pub consistency_score: Verdict,
    pub title_year: Option<i32>,
    pub stale_year_references: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuriedAnswer {
    pub heading_text: String,
    pub first_sentence: String,
    pub word_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerFirstResult {
    /// Percentage of question headings answered within 30 words, 1 decimal.
    pub direct_answer_ratio: f64,
    pub buried_answers: Vec<BuriedAnswer>,
    pub total_questions: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityDensityResult {
    /// Unique entities per 100 tokens, rounded to 2 decimals.
    pub density_percent: f64,
    pub top_entities: Vec<(String, EntityLabel)>,
    pub unique_entity_count: usize,
    /// Set when no NER model is installed; the check is optional.
    pub skipped_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityVarianceResult {
    pub variance_score: Verdict,
    /// Sentences over 40 words, verbatim.
    pub fatigue_sentences: Vec<String>,
    pub monotony_detected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LazyPhrasingResult {
    /// Fluff density: matches per 100 words, rounded to 2 decimals.
    /// Under 1.0 is considered healthy (advisory, not pass/fail).
    pub score: f64,
    pub found_transitions: Vec<String>,
    pub found_hype: Vec<String>,
    pub found_tells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceStartResult {
    pub is_repetitive: bool,
    pub repeating_word: Option<String>,
}

// ---------------------------------------------------------------------------
// Batch response
// ---------------------------------------------------------------------------

/// One slot of the batch response: the check's result, or an error descriptor
/// for that check alone.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CheckSlot<T> {
    Ok(T),
    Err { error: String },
}

impl<T> From<Result<T, AuditError>> for CheckSlot<T> {
    fn from(result: Result<T, AuditError>) -> Self {
        match result {
            Ok(value) => CheckSlot::Ok(value),
            Err(e) => CheckSlot::Err {
                error: e.to_string(),
            },
        }
    }
}

/// The full report: one slot per check, named as in the JSON wire format.
#[derive(Debug, Serialize)]
pub struct AuditReport {
    pub experience_signals: CheckSlot<ExperienceSignalsResult>,
    pub title_hyperbole: CheckSlot<TitleHyperboleResult>,
    pub data_density: CheckSlot<DataDensityResult>,
    pub skimmability: CheckSlot<SkimmabilityResult>,
    pub temporal_consistency: CheckSlot<TemporalConsistencyResult>,
    pub answer_first_structure: CheckSlot<AnswerFirstResult>,
    pub entity_density: CheckSlot<EntityDensityResult>,
    pub readability_variance: CheckSlot<ReadabilityVarianceResult>,
    pub lazy_phrasing: CheckSlot<LazyPhrasingResult>,
    pub sentence_starts: CheckSlot<SentenceStartResult>,
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
