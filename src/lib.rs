//! Batch scoring of long-form content against E-E-A-T and lazy-writing
//! quality signals. One document in (title + body, optionally HTML), one
//! structured report of independent check results out. No state is held
//! across documents and nothing is learned.
//!
//! The checks live on [`QualityAuditor`] and [`PhrasingAuditor`] and are
//! independently callable; [`run_audit`] runs the whole battery, isolating
//! each check's failure to its own slot in the report.

use once_cell::sync::Lazy;
use regex::Regex;

pub mod error;
mod patterns;
pub mod phrasing;
pub mod quality;
pub mod report;
pub mod sections;
pub mod toolkit;

pub use error::AuditError;
pub use phrasing::PhrasingAuditor;
pub use quality::QualityAuditor;
pub use report::{AuditReport, AuditRequest, CheckSlot};
pub use sections::{extract_sections, Section};
pub use toolkit::{Entity, EntityLabel, EntityRecognizer, LanguageToolkit, RegexToolkit};

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
static WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip tags and collapse whitespace. Thin glue for deriving the plain-text
/// view of a request body; not a markup parser.
pub fn html_to_plain(s: &str) -> String {
    let stripped = TAG_RE.replace_all(s, " ");
    WS_RE.replace_all(&stripped, " ").trim().to_string()
}

fn slot<T>(name: &str, result: Result<T, AuditError>) -> CheckSlot<T> {
    if let Err(e) = &result {
        log::warn!("check {name} failed: {e}");
    }
    result.into()
}

/// Run every check over one request. Checks are independent: a failing check
/// fills its own slot with an error descriptor and the rest still run.
pub fn run_audit(
    request: &AuditRequest,
    quality: &QualityAuditor,
    phrasing: &PhrasingAuditor,
) -> AuditReport {
    let title = request.title.trim();
    let content = request.content.trim();
    let html = request
        .html
        .as_deref()
        .map(str::trim)
        .filter(|h| !h.is_empty())
        // The raw body doubles as markup when no separate html is supplied.
        .or((!content.is_empty()).then_some(content));
    let plain = html_to_plain(content);

    log::debug!(
        "auditing document: title {} chars, body {} words, markup: {}",
        title.len(),
        plain.split_whitespace().count(),
        html.is_some(),
    );

    AuditReport {
        experience_signals: slot(
            "experience_signals",
            quality.check_experience_signals(&plain),
        ),
        title_hyperbole: slot("title_hyperbole", quality.check_title_hyperbole(title)),
        data_density: CheckSlot::Ok(quality.check_data_density(&plain)),
        skimmability: CheckSlot::Ok(quality.check_skimmability(&plain, html)),
        temporal_consistency: CheckSlot::Ok(quality.check_temporal_consistency(title, &plain)),
        answer_first_structure: CheckSlot::Ok(quality.check_answer_first(html.unwrap_or(""))),
        entity_density: CheckSlot::Ok(quality.check_entity_density(&plain)),
        readability_variance: slot(
            "readability_variance",
            quality.check_readability_variance(&plain),
        ),
        lazy_phrasing: CheckSlot::Ok(phrasing.check_lazy_phrasing(&plain)),
        sentence_starts: CheckSlot::Ok(phrasing.check_sentence_starts(&plain)),
    }
}
