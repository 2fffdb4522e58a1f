//! End-to-end properties of the verdict engine.

use claimlens::types::{EvidenceBundle, EvidenceItem, NarrativeContext};
use claimlens::verdict::{
    WEIGHT_CONTEXT_COMPLETENESS, WEIGHT_FACT_CHECK_EXISTS, WEIGHT_REPUTABLE_SOURCES,
    WEIGHT_SOURCE_AGREEMENT, classify,
};
use claimlens::{Verdict, compute_verdict};

fn item(url: &str) -> EvidenceItem {
    EvidenceItem {
        title: "A headline".to_string(),
        snippet: "A snippet".to_string(),
        url: url.to_string(),
        source: Default::default(),
        fact_check_site: false,
        fact_check_source: None,
    }
}

fn reputable() -> Vec<String> {
    vec!["reuters.com".to_string(), "bbc.com".to_string()]
}

#[test]
fn test_weights_sum_to_one() {
    let sum = WEIGHT_SOURCE_AGREEMENT
        + WEIGHT_REPUTABLE_SOURCES
        + WEIGHT_CONTEXT_COMPLETENESS
        + WEIGHT_FACT_CHECK_EXISTS;
    assert!((sum - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_empty_bundle_is_valid_and_likely_false() {
    let result = compute_verdict(
        "an unsupported claim",
        &EvidenceBundle::default(),
        &NarrativeContext::default(),
        &reputable(),
    );
    assert_eq!(result.evidence_count, 0);
    assert_eq!(result.scores.source_agreement, 0.0);
    assert_eq!(result.scores.reputable_sources, 0.0);
    assert_eq!(result.scores.fact_check_exists, 0.0);
    assert_eq!(result.scores.context_completeness, 0.5);
    // 0.20 * 0.5 = 0.1, below every band
    assert_eq!(result.verdict, Verdict::LikelyFalseOrMisleading);
}

#[test]
fn test_fact_check_override_high_confidence() {
    // One fact-check forces the override labels even where the general
    // bands would say NEEDS_MORE_CONTEXT.
    let bundle = EvidenceBundle {
        direct_evidence: vec![item("https://reuters.com/a"), item("https://bbc.com/b")],
        context_evidence: vec![item("https://reuters.com/c")],
        existing_fact_checks: vec![item("https://snopes.com/check")],
    };
    let context = NarrativeContext {
        missing_context_points: vec!["what preceded the quote".to_string()],
        full_picture_summary: "the statement was partial".to_string(),
        timeline: vec![],
    };
    let result = compute_verdict("claim", &bundle, &context, &reputable());
    // agreement 0.7, quality 3/4*1.2=0.9, completeness 0.9, coverage 0.7
    // -> confidence 0.35*0.7 + 0.30*0.9 + 0.20*0.9 + 0.15*0.7 = 0.80
    assert!(result.confidence > 0.6);
    assert_eq!(result.verdict, Verdict::VerifiedByFactCheckers);
}

#[test]
fn test_fact_check_override_low_confidence() {
    let bundle = EvidenceBundle {
        direct_evidence: vec![],
        context_evidence: vec![],
        existing_fact_checks: vec![item("https://politifact.com/check")],
    };
    let result = compute_verdict(
        "claim",
        &bundle,
        &NarrativeContext::default(),
        &reputable(),
    );
    // agreement 0.3, quality 0.0, completeness 0.5, coverage 0.7
    // -> confidence 0.105 + 0 + 0.10 + 0.105 = 0.31
    assert!(result.confidence < 0.6);
    assert_eq!(result.verdict, Verdict::FactCheckedNeedsContext);
}

#[test]
fn test_override_band_boundaries_are_strict() {
    let one_check = vec![item("https://snopes.com/check")];
    assert_eq!(classify(0.65, &one_check), Verdict::VerifiedByFactCheckers);
    assert_eq!(classify(0.6, &one_check), Verdict::FactCheckedNeedsContext);
    assert_eq!(classify(0.4, &one_check), Verdict::FactCheckedNeedsContext);
}

#[test]
fn test_band_boundary_point_seven() {
    assert_eq!(classify(0.7, &[]), Verdict::NeedsMoreContext);
}

#[test]
fn test_reuters_scenario() {
    let bundle = EvidenceBundle {
        direct_evidence: vec![item("https://reuters.com/a")],
        context_evidence: vec![],
        existing_fact_checks: vec![],
    };
    let context = NarrativeContext {
        missing_context_points: vec!["the original quote was longer".to_string()],
        full_picture_summary: "a broader pattern exists".to_string(),
        timeline: vec![],
    };
    let result = compute_verdict("claim", &bundle, &context, &reputable());

    assert_eq!(result.scores.source_agreement, 0.3);
    assert_eq!(result.scores.reputable_sources, 1.0); // 1/1 * 1.2 clamped
    assert_eq!(result.scores.context_completeness, 0.9); // 0.5 + 0.2 + 0.2
    assert_eq!(result.scores.fact_check_exists, 0.0);
    // 0.35*0.3 + 0.30*1.0 + 0.20*0.9 = 0.585
    assert!((result.confidence - 0.585).abs() < 0.01);
    assert_eq!(result.verdict, Verdict::NeedsMoreContext);
    assert_eq!(result.evidence_count, 1);
}

#[test]
fn test_evidence_count_spans_all_channels() {
    let bundle = EvidenceBundle {
        direct_evidence: vec![item("a"), item("b")],
        context_evidence: vec![item("c")],
        existing_fact_checks: vec![item("d")],
    };
    let result = compute_verdict(
        "claim",
        &bundle,
        &NarrativeContext::default(),
        &reputable(),
    );
    assert_eq!(result.evidence_count, 4);
}

#[test]
fn test_over_cap_bundles_still_score() {
    // Caps are the search collaborator's job; scoring tolerates violations.
    let bundle = EvidenceBundle {
        direct_evidence: (0..20).map(|_| item("https://reuters.com/a")).collect(),
        context_evidence: vec![],
        existing_fact_checks: vec![],
    };
    let result = compute_verdict(
        "claim",
        &bundle,
        &NarrativeContext::default(),
        &reputable(),
    );
    assert_eq!(result.scores.source_agreement, 0.7);
    assert_eq!(result.scores.reputable_sources, 1.0);
    assert_eq!(result.evidence_count, 20);
}

#[test]
fn test_verdict_wire_labels() {
    let json = serde_json::to_string(&Verdict::VerifiedByFactCheckers).unwrap();
    assert_eq!(json, "\"VERIFIED_BY_FACT_CHECKERS\"");
    let json = serde_json::to_string(&Verdict::LikelyFalseOrMisleading).unwrap();
    assert_eq!(json, "\"LIKELY_FALSE_OR_MISLEADING\"");
    assert_eq!(Verdict::NeedsMoreContext.as_str(), "NEEDS_MORE_CONTEXT");
}
