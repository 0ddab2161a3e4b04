//! The E-E-A-T and content integrity checks: experience signals, title
//! hyperbole, data density, skimmability, temporal consistency, answer-first
//! structure, entity density, and readability variance.
//!
//! Every check is a pure function of its input plus the constant tables and
//! the injected capabilities; checks share no mutable state and may run in
//! any order or concurrently.

use std::collections::HashSet;

use scraper::{Html, Selector};

use crate::error::AuditError;
use crate::patterns::{
    ACTION_PROOF_VERBS, CITATION_RES, CLICKBAIT_PATTERNS, CURRENCY_RE, EXPERIENCE_PHRASE_RES,
    EXPERIENCE_PRONOUNS, FAQ_HEADING_RE, FIRST_PERSON_PRONOUNS, MAGNITUDE_RE, MULTIPLIER_RE,
    PERCENT_RE, QUESTION_START_RE, STEP_HEADING_RE, SUMMARY_HEADING_RE, WORD_TOKEN_RE,
    YEAR_CONTEXT_RE, YEAR_RE,
};
use crate::report::{
    round_to, AnswerFirstResult, BuriedAnswer, DataDensityResult, EntityDensityResult,
    ExperienceSignalsResult, ReadabilityVarianceResult, SectionFlag, SectionIssue,
    SentimentTrigger, SkimmabilityResult, TemporalConsistencyResult, TitleHyperboleResult,
    Verdict,
};
use crate::sections::{extract_sections, word_count, HeadingLevel};
use crate::toolkit::{EntityLabel, EntityRecognizer, LanguageToolkit, RegexToolkit};

/// At most this many characters of body text are handed to the recognizer.
const NER_SCAN_LIMIT: usize = 1_000_000;

/// Saturation point: this many experience signals score 100%.
const EXPERIENCE_TARGET: usize = 3;

const SECTION_THIN_WORDS: usize = 50;
const SECTION_WALL_WORDS: usize = 300;
const STALE_YEAR_GRACE: i32 = 2;
const DIRECT_ANSWER_MAX_WORDS: usize = 30;
const FATIGUE_SENTENCE_WORDS: usize = 40;
const MONOTONY_WINDOW: usize = 5;
const MONOTONY_SPAN: usize = 2;
const POLARITY_CUTOFF: f64 = 0.8;

/// Runs the quality and trust checks. Holds the injected capabilities and
/// nothing else; all pattern tables are process-wide statics.
pub struct QualityAuditor {
    toolkit: Option<Box<dyn LanguageToolkit + Send + Sync>>,
    ner: Option<Box<dyn EntityRecognizer + Send + Sync>>,
}

impl QualityAuditor {
    /// Default capabilities: the built-in regex toolkit, no NER model.
    pub fn new() -> Self {
        Self {
            toolkit: Some(Box::new(RegexToolkit::new())),
            ner: None,
        }
    }

    pub fn with_toolkit(mut self, toolkit: impl LanguageToolkit + Send + Sync + 'static) -> Self {
        self.toolkit = Some(Box::new(toolkit));
        self
    }

    pub fn with_entity_recognizer(
        mut self,
        ner: impl EntityRecognizer + Send + Sync + 'static,
    ) -> Self {
        self.ner = Some(Box::new(ner));
        self
    }

    /// Drop the language toolkit. Checks that need it will report
    /// `CapabilityUnavailable` instead of running.
    pub fn without_toolkit(mut self) -> Self {
        self.toolkit = None;
        self
    }

    fn require_toolkit(&self) -> Result<&(dyn LanguageToolkit + Send + Sync), AuditError> {
        self.toolkit
            .as_deref()
            .ok_or(AuditError::CapabilityUnavailable("language toolkit"))
    }

    // -----------------------------------------------------------------------
    // Quality & trust
    // -----------------------------------------------------------------------

    /// Sentences with a first/second-person pronoun plus an action/proof verb,
    /// or matching a known experience phrase. Three signals saturate at 100:
    /// a few strong signals count, long articles are not penalized.
    pub fn check_experience_signals(
        &self,
        text: &str,
    ) -> Result<ExperienceSignalsResult, AuditError> {
        let toolkit = self.require_toolkit()?;
        if text.trim().is_empty() {
            return Ok(ExperienceSignalsResult {
                score: 0.0,
                experience_sentences: Vec::new(),
            });
        }

        let mut experience_sentences = Vec::new();
        for sentence in toolkit.sentences(text) {
            let lower = sentence.to_lowercase();
            let words: HashSet<&str> = WORD_TOKEN_RE
                .find_iter(&lower)
                .map(|m| m.as_str())
                .collect();

            let has_pronoun = words
                .iter()
                .any(|w| FIRST_PERSON_PRONOUNS.contains(w) || EXPERIENCE_PRONOUNS.contains(w));
            let has_verb = words.iter().any(|w| ACTION_PROOF_VERBS.contains(w));
            let phrase_match = EXPERIENCE_PHRASE_RES.iter().any(|p| p.is_match(&lower));

            if (has_pronoun && has_verb) || phrase_match {
                experience_sentences.push(sentence.trim().to_string());
            }
        }

        let score =
            experience_sentences.len().min(EXPERIENCE_TARGET) as f64 / EXPERIENCE_TARGET as f64
                * 100.0;
        Ok(ExperienceSignalsResult {
            score: round_to(score, 1),
            experience_sentences,
        })
    }

    /// Clickbait words (word-boundary, case-insensitive) and sentiment
    /// extremity (|polarity| > 0.8). Either trigger flags the title.
    pub fn check_title_hyperbole(&self, title: &str) -> Result<TitleHyperboleResult, AuditError> {
        let toolkit = self.require_toolkit()?;

        let trigger_word = CLICKBAIT_PATTERNS
            .iter()
            .find(|(_, re)| re.is_match(title))
            .map(|(word, _)| (*word).to_string());

        let polarity = toolkit.polarity(title);
        let sentiment_trigger = if polarity > POLARITY_CUTOFF {
            Some(SentimentTrigger::TooPositive)
        } else if polarity < -POLARITY_CUTOFF {
            Some(SentimentTrigger::TooNegative)
        } else {
            None
        };

        Ok(TitleHyperboleResult {
            is_clickbait: trigger_word.is_some() || sentiment_trigger.is_some(),
            trigger_word,
            sentiment_polarity: round_to(polarity, 3),
            sentiment_trigger,
        })
    }

    /// Count percentages, currency amounts, multipliers, magnitude phrases,
    /// and citation markers; density per 100 words. Raw occurrences: a span
    /// matching two patterns counts under each.
    pub fn check_data_density(&self, text: &str) -> DataDensityResult {
        if text.trim().is_empty() {
            return DataDensityResult {
                density_score: 0.0,
                data_point_count: 0,
                word_count: 0,
            };
        }

        let words = word_count(text);
        let mut points = 0usize;
        points += PERCENT_RE.find_iter(text).count();
        points += CURRENCY_RE.find_iter(text).count();
        points += MULTIPLIER_RE.find_iter(text).count();
        points += MAGNITUDE_RE.find_iter(text).count();
        for pattern in CITATION_RES.iter() {
            points += pattern.find_iter(text).count();
        }

        let density = if words > 0 {
            points as f64 / words as f64 * 100.0
        } else {
            0.0
        };
        DataDensityResult {
            density_score: round_to(density, 2),
            data_point_count: points,
            word_count: words,
        }
    }

    /// Sections under 50 words are `too_thin`, over 300 are `wall_of_text`.
    /// Thin sections are exempt inside an open FAQ block (an H2 matching the
    /// FAQ pattern opens it, the next H2 closes it) and under summary/table
    /// and step/how-to headings, where short bodies are by design.
    pub fn check_skimmability(&self, text: &str, html: Option<&str>) -> SkimmabilityResult {
        let sections = extract_sections(text, html);

        let mut in_faq = false;
        let mut problematic = Vec::new();
        for section in &sections {
            if section.level == HeadingLevel::H2 {
                in_faq = FAQ_HEADING_RE.is_match(section.label.trim().trim_end_matches('?'));
            }
            let wc = word_count(&section.body);
            if wc < SECTION_THIN_WORDS {
                let label = section.label.trim();
                if !in_faq
                    && !SUMMARY_HEADING_RE.is_match(label)
                    && !STEP_HEADING_RE.is_match(label)
                {
                    problematic.push(SectionFlag {
                        section_label: section.label.clone(),
                        word_count: wc,
                        issue: SectionIssue::TooThin,
                    });
                }
            } else if wc > SECTION_WALL_WORDS {
                problematic.push(SectionFlag {
                    section_label: section.label.clone(),
                    word_count: wc,
                    issue: SectionIssue::WallOfText,
                });
            }
        }

        SkimmabilityResult {
            pass_fail: if problematic.is_empty() {
                Verdict::Pass
            } else {
                Verdict::Fail
            },
            problematic_sections: problematic,
        }
    }

    // -----------------------------------------------------------------------
    // Integrity & architecture
    // -----------------------------------------------------------------------

    /// Flag body years more than two years older than the title's year.
    /// Years inside founding/fiscal phrases are legitimate history, and the
    /// two years before the title year are recent context, not staleness.
    pub fn check_temporal_consistency(
        &self,
        title: &str,
        text: &str,
    ) -> TemporalConsistencyResult {
        let title_year = YEAR_RE
            .find(title)
            .and_then(|m| m.as_str().parse::<i32>().ok());

        let mut stale_refs = Vec::new();
        if let Some(title_year) = title_year {
            let exempt: HashSet<i32> = YEAR_CONTEXT_RE
                .find_iter(text)
                .filter_map(|m| YEAR_RE.find(m.as_str()))
                .filter_map(|y| y.as_str().parse().ok())
                .collect();

            for m in YEAR_RE.find_iter(text) {
                if let Ok(year) = m.as_str().parse::<i32>() {
                    if year < title_year - STALE_YEAR_GRACE && !exempt.contains(&year) {
                        stale_refs.push(m.as_str().to_string());
                    }
                }
            }
        }

        TemporalConsistencyResult {
            consistency_score: if stale_refs.is_empty() {
                Verdict::Pass
            } else {
                Verdict::Fail
            },
            title_year,
            stale_year_references: stale_refs,
        }
    }

    /// For each H2/H3 starting with What/How/Who/Why/Where, the first
    /// sentence of the next paragraph must land within 30 words, else the
    /// answer is buried.
    pub fn check_answer_first(&self, html: &str) -> AnswerFirstResult {
        if html.trim().is_empty() {
            return AnswerFirstResult {
                direct_answer_ratio: 0.0,
                buried_answers: Vec::new(),
                total_questions: 0,
            };
        }

        let doc = Html::parse_document(html);
        let selector = Selector::parse("h2, h3, p").expect("static selector");
        // Flattened document order, so "next paragraph" can cross containers.
        let elements: Vec<(bool, String)> = doc
            .select(&selector)
            .map(|el| {
                let is_paragraph = el.value().name() == "p";
                let text = el
                    .text()
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .collect::<Vec<_>>()
                    .join(" ");
                (is_paragraph, text)
            })
            .collect();

        let mut total_questions = 0usize;
        let mut direct = 0usize;
        let mut buried = Vec::new();

        for (i, (is_paragraph, heading_text)) in elements.iter().enumerate() {
            if *is_paragraph || !QUESTION_START_RE.is_match(heading_text) {
                continue;
            }
            total_questions += 1;

            let next_paragraph = elements[i + 1..]
                .iter()
                .find(|(p, _)| *p)
                .map(|(_, text)| text.as_str());
            let Some(paragraph) = next_paragraph.filter(|t| !t.is_empty()) else {
                buried.push(BuriedAnswer {
                    heading_text: heading_text.clone(),
                    first_sentence: String::new(),
                    word_count: 0,
                });
                continue;
            };

            let mut first_sentence = paragraph
                .split('.')
                .next()
                .unwrap_or("")
                .trim()
                .to_string();
            if !first_sentence.is_empty() && !first_sentence.ends_with('.') {
                first_sentence.push('.');
            }
            let wc = word_count(&first_sentence);
            if wc <= DIRECT_ANSWER_MAX_WORDS {
                direct += 1;
            } else {
                buried.push(BuriedAnswer {
                    heading_text: heading_text.clone(),
                    first_sentence,
                    word_count: wc,
                });
            }
        }

        let ratio = if total_questions > 0 {
            direct as f64 / total_questions as f64 * 100.0
        } else {
            0.0
        };
        AnswerFirstResult {
            direct_answer_ratio: round_to(ratio, 1),
            buried_answers: buried,
            total_questions,
        }
    }

    /// Unique named entities (ORG/PRODUCT/GPE/PERSON/EVENT) per 100 tokens.
    /// Skipped with an explanation when no recognizer model is installed.
    pub fn check_entity_density(&self, text: &str) -> EntityDensityResult {
        let recognizer = match self.ner.as_deref() {
            Some(r) if r.is_available() => r,
            _ => {
                return EntityDensityResult {
                    density_percent: 0.0,
                    top_entities: Vec::new(),
                    unique_entity_count: 0,
                    skipped_reason: Some(
                        "no entity recognition model installed; check skipped".to_string(),
                    ),
                }
            }
        };
        if text.trim().is_empty() {
            return EntityDensityResult {
                density_percent: 0.0,
                top_entities: Vec::new(),
                unique_entity_count: 0,
                skipped_reason: None,
            };
        }

        let scanned = match text.char_indices().nth(NER_SCAN_LIMIT) {
            Some((byte_idx, _)) => &text[..byte_idx],
            None => text,
        };
        let tokens = word_count(scanned);

        let mut seen: HashSet<(String, EntityLabel)> = HashSet::new();
        let mut unique: Vec<(String, EntityLabel)> = Vec::new();
        for entity in recognizer.entities(scanned) {
            let trimmed = entity.text.trim();
            if trimmed.is_empty() {
                continue;
            }
            if seen.insert((trimmed.to_string(), entity.label)) {
                unique.push((trimmed.to_string(), entity.label));
            }
        }

        let density = if tokens > 0 {
            seen.len() as f64 / tokens as f64 * 100.0
        } else {
            0.0
        };
        EntityDensityResult {
            density_percent: round_to(density, 2),
            unique_entity_count: seen.len(),
            top_entities: unique.into_iter().take(5).collect(),
            skipped_reason: None,
        }
    }

    /// Sentences over 40 words cause fatigue; five consecutive sentences
    /// whose lengths fall within a span of two read as monotone. The first
    /// monotone window is enough.
    pub fn check_readability_variance(
        &self,
        text: &str,
    ) -> Result<ReadabilityVarianceResult, AuditError> {
        let toolkit = self.require_toolkit()?;
        if text.trim().is_empty() {
            return Ok(ReadabilityVarianceResult {
                variance_score: Verdict::Pass,
                fatigue_sentences: Vec::new(),
                monotony_detected: false,
            });
        }

        let sentences = toolkit.sentences(text);
        let lengths: Vec<usize> = sentences.iter().map(|s| word_count(s)).collect();

        let fatigue_sentences: Vec<String> = sentences
            .iter()
            .zip(&lengths)
            .filter(|(_, &len)| len > FATIGUE_SENTENCE_WORDS)
            .map(|(s, _)| s.clone())
            .collect();

        let monotony_detected = lengths.windows(MONOTONY_WINDOW).any(|window| {
            let max = window.iter().max().copied().unwrap_or(0);
            let min = window.iter().min().copied().unwrap_or(0);
            max - min <= MONOTONY_SPAN
        });

        Ok(ReadabilityVarianceResult {
            variance_score: if fatigue_sentences.is_empty() && !monotony_detected {
                Verdict::Pass
            } else {
                Verdict::Fail
            },
            fatigue_sentences,
            monotony_detected,
        })
    }
}

impl Default for QualityAuditor {
    fn default() -> Self {
        Self::new()
    }
}
