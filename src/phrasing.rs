//! Lazy-writing checks: robotic transitions, hollow hype, AI-tell words, and
//! repetitive sentence starts. Google penalizes low-value content, not AI
//! authorship, so these flag actionable phrasing rather than "AI detection".

use regex::Regex;

use crate::patterns::{
    AI_TELLS, EXEMPT_STARTS, HOLLOW_HYPE, LEAD_WORD_RE, ROBOTIC_TRANSITIONS, SENTENCE_END_RUN_RE,
};
use crate::report::{round_to, LazyPhrasingResult, SentenceStartResult};
use crate::sections::word_count;

// Multi-word phrases match anywhere; single AI-tell words need boundaries.
fn compile_substring(phrases: &[String]) -> Vec<Regex> {
    phrases
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", regex::escape(p))).expect("escaped phrase"))
        .collect()
}

fn compile_word(phrases: &[String]) -> Vec<Regex> {
    phrases
        .iter()
        .map(|p| Regex::new(&format!(r"(?i)\b{}\b", regex::escape(p))).expect("escaped phrase"))
        .collect()
}

fn owned(defaults: &[&str]) -> Vec<String> {
    defaults.iter().map(|s| (*s).to_string()).collect()
}

/// Runs the lazy-writing checks. The three phrase lists default to the
/// built-in tables and are independently overridable at construction.
pub struct PhrasingAuditor {
    robotic_transitions: Vec<Regex>,
    hollow_hype: Vec<Regex>,
    ai_tells: Vec<Regex>,
}

impl PhrasingAuditor {
    pub fn new() -> Self {
        Self {
            robotic_transitions: compile_substring(&owned(ROBOTIC_TRANSITIONS)),
            hollow_hype: compile_substring(&owned(HOLLOW_HYPE)),
            ai_tells: compile_word(&owned(AI_TELLS)),
        }
    }

    pub fn with_robotic_transitions(mut self, phrases: Vec<String>) -> Self {
        self.robotic_transitions = compile_substring(&phrases);
        self
    }

    pub fn with_hollow_hype(mut self, phrases: Vec<String>) -> Self {
        self.hollow_hype = compile_substring(&phrases);
        self
    }

    pub fn with_ai_tells(mut self, phrases: Vec<String>) -> Self {
        self.ai_tells = compile_word(&phrases);
        self
    }

    /// Fluff density: total matched phrases per 100 words, with each match
    /// attributed to its category list. Aim for a score under 1.0.
    pub fn check_lazy_phrasing(&self, text: &str) -> LazyPhrasingResult {
        if text.trim().is_empty() {
            return LazyPhrasingResult {
                score: 0.0,
                found_transitions: Vec::new(),
                found_hype: Vec::new(),
                found_tells: Vec::new(),
            };
        }

        let words = word_count(text);
        let collect = |patterns: &[Regex]| -> Vec<String> {
            patterns
                .iter()
                .flat_map(|p| p.find_iter(text))
                .map(|m| m.as_str().to_string())
                .collect()
        };
        let found_transitions = collect(&self.robotic_transitions);
        let found_hype = collect(&self.hollow_hype);
        let found_tells = collect(&self.ai_tells);

        let total = found_transitions.len() + found_hype.len() + found_tells.len();
        let score = if words > 0 {
            total as f64 / words as f64 * 100.0
        } else {
            0.0
        };

        LazyPhrasingResult {
            score: round_to(score, 2),
            found_transitions,
            found_hype,
            found_tells,
        }
    }

    /// Three consecutive sentences opening with the same word read as
    /// monotonous structure. Common articles/pronouns are exempt since they
    /// are unavoidable in analytical prose. First run wins.
    pub fn check_sentence_starts(&self, text: &str) -> SentenceStartResult {
        if text.trim().is_empty() {
            return SentenceStartResult {
                is_repetitive: false,
                repeating_word: None,
            };
        }

        let starts: Vec<String> = SENTENCE_END_RUN_RE
            .split(text)
            .filter_map(|segment| {
                let segment = segment.trim();
                if segment.is_empty() {
                    return None;
                }
                LEAD_WORD_RE
                    .captures(segment)
                    .map(|caps| caps[1].to_lowercase())
            })
            .collect();

        for window in starts.windows(3) {
            if window[0] == window[1]
                && window[1] == window[2]
                && !EXEMPT_STARTS.contains(window[0].as_str())
            {
                return SentenceStartResult {
                    is_repetitive: true,
                    repeating_word: Some(window[0].clone()),
                };
            }
        }

        SentenceStartResult {
            is_repetitive: false,
            repeating_word: None,
        }
    }
}

impl Default for PhrasingAuditor {
    fn default() -> Self {
        Self::new()
    }
}
