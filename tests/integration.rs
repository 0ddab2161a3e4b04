use content_audit::report::{SectionIssue, SentimentTrigger, Verdict};
use content_audit::{
    run_audit, AuditRequest, Entity, EntityLabel, EntityRecognizer, LanguageToolkit,
    PhrasingAuditor, QualityAuditor,
};

fn quality() -> QualityAuditor {
    QualityAuditor::new()
}

// ---------------------------------------------------------------------------
// Experience signals
// ---------------------------------------------------------------------------

#[test]
fn three_experience_signals_saturate_at_100() {
    let text = "I tested the blender for a week. \
                The motor is quiet. \
                We compared it against two rivals. \
                Cleanup takes minutes. \
                My team bought both models.";
    let result = quality().check_experience_signals(text).unwrap();
    assert_eq!(result.score, 100.0);
    assert_eq!(result.experience_sentences.len(), 3);
}

#[test]
fn one_experience_signal_scores_a_third() {
    let text = "I tested the blender for a week. The motor is quiet.";
    let result = quality().check_experience_signals(text).unwrap();
    assert_eq!(result.score, 33.3);
    assert_eq!(
        result.experience_sentences,
        vec!["I tested the blender for a week."]
    );
}

#[test]
fn experience_phrases_qualify_without_pronoun_verb_pairs() {
    let text = "Anyone who's spent a weekend in a commercial kitchen knows the difference. \
                The motor is quiet.";
    let result = quality().check_experience_signals(text).unwrap();
    assert_eq!(result.experience_sentences.len(), 1);
}

#[test]
fn empty_text_has_zero_experience_score() {
    let result = quality().check_experience_signals("   ").unwrap();
    assert_eq!(result.score, 0.0);
    assert!(result.experience_sentences.is_empty());
}

// ---------------------------------------------------------------------------
// Title hyperbole
// ---------------------------------------------------------------------------

#[test]
fn clickbait_words_flag_the_title() {
    let result = quality()
        .check_title_hyperbole("This Secret Trick Is Insane")
        .unwrap();
    assert!(result.is_clickbait);
    let word = result.trigger_word.as_deref().unwrap();
    assert!(
        word == "secret" || word == "insane",
        "unexpected trigger word {word}"
    );
}

struct ExtremeToolkit(f64);

impl LanguageToolkit for ExtremeToolkit {
    fn sentences(&self, _text: &str) -> Vec<String> {
        Vec::new()
    }
    fn polarity(&self, _text: &str) -> f64 {
        self.0
    }
}

#[test]
fn extreme_polarity_flags_without_trigger_word() {
    let auditor = QualityAuditor::new().with_toolkit(ExtremeToolkit(0.95));
    let result = auditor.check_title_hyperbole("A Quiet Tuesday").unwrap();
    assert!(result.is_clickbait);
    assert_eq!(result.trigger_word, None);
    assert_eq!(result.sentiment_trigger, Some(SentimentTrigger::TooPositive));
    assert_eq!(result.sentiment_polarity, 0.95);

    let auditor = QualityAuditor::new().with_toolkit(ExtremeToolkit(-0.9));
    let result = auditor.check_title_hyperbole("A Quiet Tuesday").unwrap();
    assert_eq!(result.sentiment_trigger, Some(SentimentTrigger::TooNegative));
}

#[test]
fn plain_title_is_not_clickbait() {
    let result = quality()
        .check_title_hyperbole("Quarterly Widget Market Review")
        .unwrap();
    assert!(!result.is_clickbait);
    assert_eq!(result.trigger_word, None);
}

// ---------------------------------------------------------------------------
// Data density
// ---------------------------------------------------------------------------

#[test]
fn data_density_counts_raw_occurrences() {
    let text = "Revenue grew 45% according to the report, reaching $3.5 million.";
    let result = quality().check_data_density(text);
    assert_eq!(result.word_count, 10);
    // 45% counts as a percentage and a magnitude phrase, $3.5 as currency,
    // "3.5 million" as magnitude, "according to" as a citation marker.
    assert_eq!(result.data_point_count, 5);
    assert_eq!(result.density_score, 50.0);
}

#[test]
fn multipliers_count_as_data_points() {
    let result = quality().check_data_density("Throughput improved 3.5x after the rewrite.");
    assert_eq!(result.data_point_count, 1);
}

#[test]
fn empty_text_has_zero_density() {
    let result = quality().check_data_density("");
    assert_eq!(result.density_score, 0.0);
    assert_eq!(result.word_count, 0);
}

// ---------------------------------------------------------------------------
// Skimmability
// ---------------------------------------------------------------------------

#[test]
fn faq_subsections_are_exempt_from_too_thin() {
    let text = "## Frequently Asked Questions\n\
                ### What is a widget?\n\
                A widget is a small tool used for testing purposes.\n\
                ## Details\n\
                A widget is a small tool used for testing purposes.\n";
    let result = quality().check_skimmability(text, None);
    assert_eq!(result.pass_fail, Verdict::Fail);
    assert_eq!(result.problematic_sections.len(), 1);
    let flagged = &result.problematic_sections[0];
    assert_eq!(flagged.section_label, "Details");
    assert_eq!(flagged.issue, SectionIssue::TooThin);
    assert_eq!(flagged.word_count, 10);
}

#[test]
fn faq_block_closes_at_next_h2() {
    let text = "## FAQ\n\
                ### What is a widget?\n\
                Short answer.\n\
                ## Pricing\n\
                ### What does it cost?\n\
                Short answer.\n";
    let result = quality().check_skimmability(text, None);
    // The question under Pricing sits outside the FAQ block, so its thin
    // body is flagged; the one inside the block is not.
    assert!(result
        .problematic_sections
        .iter()
        .any(|s| s.section_label == "What does it cost?"));
    assert!(!result
        .problematic_sections
        .iter()
        .any(|s| s.section_label == "What is a widget?"));
}

#[test]
fn summary_and_step_headings_are_exempt() {
    let text = "## Key Takeaways\n\
                Short by design.\n\
                ## Step 1: Prepare\n\
                Short intro before a list.\n";
    let result = quality().check_skimmability(text, None);
    assert_eq!(result.pass_fail, Verdict::Pass);
}

#[test]
fn long_sections_are_walls_of_text() {
    let body = "word ".repeat(301);
    let text = format!("## Everything\n{body}\n");
    let result = quality().check_skimmability(&text, None);
    assert_eq!(result.pass_fail, Verdict::Fail);
    assert_eq!(
        result.problematic_sections[0].issue,
        SectionIssue::WallOfText
    );
    assert_eq!(result.problematic_sections[0].word_count, 301);
}

#[test]
fn html_sections_are_audited_when_markup_is_given() {
    let html = "<h2>Details</h2><p>Too short to stand alone.</p>";
    let result = quality().check_skimmability("", Some(html));
    assert_eq!(result.pass_fail, Verdict::Fail);
    assert_eq!(result.problematic_sections[0].section_label, "Details");
}

// ---------------------------------------------------------------------------
// Temporal consistency
// ---------------------------------------------------------------------------

#[test]
fn stale_years_fail_the_check() {
    let result = quality().check_temporal_consistency(
        "2025 Guide to Widgets",
        "In 2010, the market was small. By 2024 it had matured.",
    );
    assert_eq!(result.consistency_score, Verdict::Fail);
    assert_eq!(result.title_year, Some(2025));
    assert_eq!(result.stale_year_references, vec!["2010"]);
}

#[test]
fn founding_years_are_exempt() {
    let result = quality().check_temporal_consistency(
        "2025 Guide to Widgets",
        "Founded in 2010, the company still leads the market.",
    );
    assert_eq!(result.consistency_score, Verdict::Pass);
    assert!(result.stale_year_references.is_empty());
}

#[test]
fn recent_years_are_acceptable_context() {
    let result =
        quality().check_temporal_consistency("2025 Guide to Widgets", "Demand spiked in 2023.");
    assert_eq!(result.consistency_score, Verdict::Pass);
}

#[test]
fn no_title_year_passes_trivially() {
    let result =
        quality().check_temporal_consistency("Guide to Widgets", "Back in 1999 nothing worked.");
    assert_eq!(result.consistency_score, Verdict::Pass);
    assert_eq!(result.title_year, None);
    assert!(result.stale_year_references.is_empty());
}

// ---------------------------------------------------------------------------
// Answer-first structure
// ---------------------------------------------------------------------------

#[test]
fn direct_and_buried_answers_are_split() {
    let html = "<h2>What is a widget?</h2>\
                <p>A widget is a small tool.</p>\
                <h2>How do widgets scale?</h2>\
                <p>Scaling widgets requires a long preamble about history culture economics \
                logistics governance supply chains manufacturing tolerances regional regulations \
                seasonal demand forecasting vendor relationships warehouse automation and several \
                other tangents before any answer emerges. The short version comes later.</p>\
                <h2>Pricing</h2>\
                <p>Not a question heading, so it is ignored.</p>";
    let result = quality().check_answer_first(html);
    assert_eq!(result.total_questions, 2);
    assert_eq!(result.direct_answer_ratio, 50.0);
    assert_eq!(result.buried_answers.len(), 1);
    let buried = &result.buried_answers[0];
    assert_eq!(buried.heading_text, "How do widgets scale?");
    assert!(buried.word_count > 30);
    assert!(buried.first_sentence.ends_with('.'));
}

#[test]
fn question_heading_without_paragraph_is_buried() {
    let html = "<h2>Why bother?</h2>";
    let result = quality().check_answer_first(html);
    assert_eq!(result.total_questions, 1);
    assert_eq!(result.direct_answer_ratio, 0.0);
    assert_eq!(result.buried_answers[0].first_sentence, "");
    assert_eq!(result.buried_answers[0].word_count, 0);
}

#[test]
fn no_questions_means_zero_ratio() {
    let result = quality().check_answer_first("<h2>Overview</h2><p>Fine.</p>");
    assert_eq!(result.total_questions, 0);
    assert_eq!(result.direct_answer_ratio, 0.0);
}

// ---------------------------------------------------------------------------
// Entity density
// ---------------------------------------------------------------------------

struct StubRecognizer(Vec<Entity>);

impl EntityRecognizer for StubRecognizer {
    fn is_available(&self) -> bool {
        true
    }
    fn entities(&self, _text: &str) -> Vec<Entity> {
        self.0.clone()
    }
}

#[test]
fn entity_check_is_skipped_without_a_model() {
    let result = quality().check_entity_density("Acme shipped widgets to Paris.");
    assert!(result.skipped_reason.is_some());
    assert_eq!(result.density_percent, 0.0);
    assert_eq!(result.unique_entity_count, 0);
}

#[test]
fn entities_are_deduplicated_by_text_and_label() {
    let entities = vec![
        Entity {
            text: "Acme".to_string(),
            label: EntityLabel::Org,
            offset: 0,
        },
        Entity {
            text: " Acme ".to_string(),
            label: EntityLabel::Org,
            offset: 120,
        },
        Entity {
            text: "Paris".to_string(),
            label: EntityLabel::Gpe,
            offset: 40,
        },
    ];
    let auditor = QualityAuditor::new().with_entity_recognizer(StubRecognizer(entities));
    let text = format!("{}Acme Paris", "w ".repeat(48));
    let result = auditor.check_entity_density(&text);
    assert_eq!(result.unique_entity_count, 2);
    assert_eq!(result.density_percent, 4.0);
    assert_eq!(
        result.top_entities,
        vec![
            ("Acme".to_string(), EntityLabel::Org),
            ("Paris".to_string(), EntityLabel::Gpe),
        ]
    );
    assert_eq!(result.skipped_reason, None);
}

// ---------------------------------------------------------------------------
// Readability variance
// ---------------------------------------------------------------------------

#[test]
fn five_uniform_sentences_are_monotonous() {
    let text = "One two three four five six seven eight. ".repeat(5);
    let result = quality().check_readability_variance(&text).unwrap();
    assert!(result.monotony_detected);
    assert_eq!(result.variance_score, Verdict::Fail);
    assert!(result.fatigue_sentences.is_empty());
}

#[test]
fn long_sentences_cause_fatigue() {
    let text = format!("{}omega.", "alpha ".repeat(44));
    let result = quality().check_readability_variance(&text).unwrap();
    assert_eq!(result.fatigue_sentences.len(), 1);
    assert!(!result.monotony_detected);
    assert_eq!(result.variance_score, Verdict::Fail);
}

#[test]
fn varied_sentences_pass() {
    let text = "Short one. A slightly longer second sentence follows here. Then a very much \
                longer third sentence that stretches out across the line with extra clauses. \
                Brief again. Another medium length sentence to close things out.";
    let result = quality().check_readability_variance(text).unwrap();
    assert_eq!(result.variance_score, Verdict::Pass);
}

// ---------------------------------------------------------------------------
// Lazy phrasing
// ---------------------------------------------------------------------------

#[test]
fn fluff_density_over_100_words_is_3_percent() {
    let text = format!("{}Furthermore Game-changer Delve", "stone ".repeat(97));
    assert_eq!(text.split_whitespace().count(), 100);
    let result = PhrasingAuditor::new().check_lazy_phrasing(&text);
    assert_eq!(result.score, 3.0);
    assert_eq!(result.found_transitions, vec!["Furthermore"]);
    assert_eq!(result.found_hype, vec!["Game-changer"]);
    assert_eq!(result.found_tells, vec!["Delve"]);
}

#[test]
fn empty_text_has_zero_fluff() {
    let result = PhrasingAuditor::new().check_lazy_phrasing("  \n ");
    assert_eq!(result.score, 0.0);
    assert!(result.found_transitions.is_empty());
}

// ---------------------------------------------------------------------------
// Sentence starts
// ---------------------------------------------------------------------------

#[test]
fn three_identical_starts_are_repetitive() {
    let result = PhrasingAuditor::new()
        .check_sentence_starts("Apple makes phones. Apple makes laptops. Apple makes watches.");
    assert!(result.is_repetitive);
    assert_eq!(result.repeating_word.as_deref(), Some("apple"));
}

#[test]
fn exempt_articles_do_not_count() {
    let result = PhrasingAuditor::new()
        .check_sentence_starts("The sky is blue. The grass is green. The sun is bright.");
    assert!(!result.is_repetitive);
    assert_eq!(result.repeating_word, None);
}

#[test]
fn two_in_a_row_is_fine() {
    let result = PhrasingAuditor::new()
        .check_sentence_starts("Widgets work. Widgets break. Repairs cost money.");
    assert!(!result.is_repetitive);
}

// ---------------------------------------------------------------------------
// Batch entry point
// ---------------------------------------------------------------------------

fn sample_request() -> AuditRequest {
    AuditRequest {
        title: "2025 Guide to Widgets".to_string(),
        content: "<h2>What is a widget?</h2><p>I tested dozens of widgets last year. \
                  Revenue grew 45% according to the report. Furthermore, the landscape \
                  shifted in 2010 for everyone involved.</p>"
            .to_string(),
        html: None,
    }
}

#[test]
fn report_has_a_slot_for_every_check() {
    let report = run_audit(&sample_request(), &quality(), &PhrasingAuditor::new());
    let json = serde_json::to_value(&report).unwrap();
    for key in [
        "experience_signals",
        "title_hyperbole",
        "data_density",
        "skimmability",
        "temporal_consistency",
        "answer_first_structure",
        "entity_density",
        "readability_variance",
        "lazy_phrasing",
        "sentence_starts",
    ] {
        assert!(json.get(key).is_some(), "missing slot {key}");
    }
}

#[test]
fn audits_are_idempotent() {
    let request = sample_request();
    let quality = quality();
    let phrasing = PhrasingAuditor::new();
    let first = serde_json::to_string(&run_audit(&request, &quality, &phrasing)).unwrap();
    let second = serde_json::to_string(&run_audit(&request, &quality, &phrasing)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_request_produces_zero_results_not_errors() {
    let report = run_audit(
        &AuditRequest::default(),
        &quality(),
        &PhrasingAuditor::new(),
    );
    let json = serde_json::to_value(&report).unwrap();
    for (name, slot) in json.as_object().unwrap() {
        assert!(
            slot.get("error").is_none(),
            "check {name} errored on empty input"
        );
    }
    assert_eq!(json["experience_signals"]["score"], 0.0);
    assert_eq!(json["data_density"]["word_count"], 0);
    assert_eq!(json["skimmability"]["pass_fail"], "pass");
    assert_eq!(json["sentence_starts"]["is_repetitive"], false);
}

#[test]
fn missing_toolkit_fails_only_dependent_checks() {
    let auditor = QualityAuditor::new().without_toolkit();
    let report = run_audit(&sample_request(), &auditor, &PhrasingAuditor::new());
    let json = serde_json::to_value(&report).unwrap();
    let error = json["experience_signals"]["error"].as_str().unwrap();
    assert!(error.contains("language toolkit"));
    assert!(json["readability_variance"].get("error").is_some());
    // Checks without a toolkit dependency still ran.
    assert!(json["data_density"].get("error").is_none());
    assert!(json["skimmability"].get("error").is_none());
}

#[test]
fn scores_stay_in_range_on_messy_input() {
    let request = AuditRequest {
        title: "Insane 2025 Widget Secrets!!!".to_string(),
        content: format!(
            "<h2>How do widgets fail?</h2><p>{} In 1999 everything broke. \
             Furthermore, delve into the seamless landscape. I tested it myself.</p>",
            "noise ".repeat(120)
        ),
        html: None,
    };
    let report = run_audit(&request, &quality(), &PhrasingAuditor::new());
    let json = serde_json::to_value(&report).unwrap();
    for (check, field) in [
        ("experience_signals", "score"),
        ("data_density", "density_score"),
        ("answer_first_structure", "direct_answer_ratio"),
        ("entity_density", "density_percent"),
        ("lazy_phrasing", "score"),
    ] {
        let value = json[check][field].as_f64().unwrap();
        assert!(
            (0.0..=100.0).contains(&value),
            "{check}/{field} out of range: {value}"
        );
    }
}
