//! Process-wide constant tables: word sets, phrase lists, and compiled
//! patterns shared by the checks. Loaded once, never mutated.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

// ---------------------------------------------------------------------------
// Experience signals
// ---------------------------------------------------------------------------

pub static FIRST_PERSON_PRONOUNS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "we", "my", "our", "mine", "us", "i'm", "we're", "i've", "we've", "i'll", "we'll",
        "i'd", "we'd",
    ]
    .into_iter()
    .collect()
});

// Second-person pronouns count too: "you/anyone" style experience framing.
pub static EXPERIENCE_PRONOUNS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["you", "your", "you're", "you've", "you'll", "you'd"].into_iter().collect());

pub static ACTION_PROOF_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "tested", "tried", "used", "verified", "analyzed", "bought", "saw", "test", "try", "use",
        "verify", "analyze", "buy", "see", "testing", "trying", "using", "analyzing", "noticed",
        "notice", "experienced", "experience", "compared", "built", "build", "ran", "run",
        "switched", "switch", "implemented", "configured", "installed", "deployed",
    ]
    .into_iter()
    .collect()
});

// Phrase-level signals of firsthand experience. Matched against lowercased
// sentences; both contractions ("who's") and expanded forms ("who has") work.
pub static EXPERIENCE_PHRASE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\banyone who(?:'s| has| has ever)\b",
        r"\bif you(?:'ve|'ve ever| have| have ever)\b",
        r"\bwalk into any\b",
        r"\bafter (?:using|trying|testing|spending|running|working)\b",
        r"\bthe (?:moment|first time|difference becomes)\b.{0,30}\byou\b",
        r"\bfrom (?:my|our) experience\b",
        r"\bin (?:my|our) experience\b",
        r"\bhands-on\b",
        r"\bfirsthand\b",
        r"\bfirst-hand\b",
        r"\bask anyone who\b",
        r"\byou(?:'ll| will) (?:notice|see|find|recognize|know|understand)\b",
        r"\byou start to (?:notice|see|realize)\b",
        r"\byou(?:'ve| have) (?:probably |likely )?(?:seen|noticed|heard|experienced)\b",
        r"\bonce you (?:try|use|test|start|get|see)\b",
        r"\bspend .{0,20} (?:with|using|on|in)\b.{0,30}\byou(?:'ll| will)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// Lowercased word tokens of a sentence, apostrophes kept so contractions
// stay intact ("i've", "who's").
pub static WORD_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-z']+\b").unwrap());

// ---------------------------------------------------------------------------
// Title hyperbole
// ---------------------------------------------------------------------------

pub static CLICKBAIT_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    [
        "insane", "shocking", "miracle", "secret", "dead", "killer", "ultimate",
    ]
    .iter()
    .map(|w| {
        (
            *w,
            Regex::new(&format!(r"(?i)\b{}\b", regex::escape(w))).unwrap(),
        )
    })
    .collect()
});

// ---------------------------------------------------------------------------
// Data density
// ---------------------------------------------------------------------------

pub static PERCENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?\s*%").unwrap());

pub static CURRENCY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\s*\d+(?:,\d{3})*(?:\.\d+)?|\d+(?:,\d{3})*(?:\.\d+)?\s*\$").unwrap()
});

pub static MULTIPLIER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\d+(?:\.\d+)?\s*x\b").unwrap());

pub static MAGNITUDE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b\d+(?:\.\d+)?\s*(?:million|billion|percent|%)").unwrap());

pub static CITATION_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\baccording to\b",
        r"(?i)\bstudy showed\b",
        r"(?i)\bstudies show\b",
        r"(?i)\bresearch by\b",
        r"(?i)\bresearch shows\b",
        r"(?i)\bresearch from\b",
        r"(?i)\bdata from\b",
        r"(?i)\breport(?:ed|s)?\s+(?:by|from|that)\b",
        r"(?i)\bfindings\s+(?:from|show)\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

// ---------------------------------------------------------------------------
// Skimmability heading classes
// ---------------------------------------------------------------------------

// "Contains" match, so "Frequently Asked Questions about X" also counts.
pub static FAQ_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:frequently\s+asked\s+questions|(?:^|\b)faqs?(?:\b|$)|common\s+questions)")
        .unwrap()
});

// Summary / table / takeaway sections are concise by design.
pub static SUMMARY_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:key\s+takeaway|at\s+a\s+glance|summary|matrix|overview\s+table|quick\s+summary|tl\s*;?\s*dr|swot\s+(?:matrix|table))",
    )
    .unwrap()
});

// Step / process / how-to sections often carry a short intro before lists.
pub static STEP_HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:step(?:\s*[-:]?\s*\d+|\s+by\s+step|\s*[-\u{2013}]\s*)|identify\s+\w+|synthesize\s+\w+|analyze\s+\w+|evaluate\s+\w+|how\s+to\s+conduct|conduct\s+a\s+\w+)",
    )
    .unwrap()
});

// ---------------------------------------------------------------------------
// Temporal consistency
// ---------------------------------------------------------------------------

pub static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19\d{2}|20\d{2})\b").unwrap());

// Years inside these phrases are legitimate historical references.
pub static YEAR_CONTEXT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:founded|established|launched|started|introduced|since|fiscal\s+year|fy)\s+(?:in\s+)?\d{4}",
    )
    .unwrap()
});

// ---------------------------------------------------------------------------
// Answer-first structure
// ---------------------------------------------------------------------------

pub static QUESTION_START_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*(?:what|how|who|why|where)\b").unwrap());

// ---------------------------------------------------------------------------
// Markdown-style headings (section extraction without markup)
// ---------------------------------------------------------------------------

pub static MD_HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^(#{2,3})\s+(.+)$").unwrap());

// ---------------------------------------------------------------------------
// Lazy phrasing defaults
// ---------------------------------------------------------------------------

// AI models overuse these connectors; humans rarely write web prose this formally.
pub const ROBOTIC_TRANSITIONS: &[&str] = &[
    "In conclusion",
    "It is important to note",
    "Furthermore",
    "Moreover",
    "In summary",
    "In the rapidly evolving",
    "To summarize",
    "A testament to",
];

// Empty calories: take up space but add no specific meaning.
pub const HOLLOW_HYPE: &[&str] = &[
    "Game-changer",
    "Revolutionize",
    "Unleash",
    "Unlock",
    "Elevate",
    "Cutting-edge",
    "Seamless",
    "Supercharge",
    "Next-level",
];

// Statistically overrepresented in LLM output; generic rather than expert voice.
pub const AI_TELLS: &[&str] = &[
    "Delve", "Landscape", "Tapestry", "Realm", "Foster", "Nuanced", "Crucial", "Paramount",
];

// ---------------------------------------------------------------------------
// Sentence-start repetition
// ---------------------------------------------------------------------------

// Articles/pronouns that are unavoidable in analytical prose.
pub static EXEMPT_STARTS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["the", "it", "its", "this", "that", "these", "those", "a", "an"]
        .into_iter()
        .collect()
});

pub static SENTENCE_END_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

pub static LEAD_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^["\u{201C}\u{201D}\u{2018}\u{2019}'\[\(]*([A-Za-z]+)"#).unwrap()
});
