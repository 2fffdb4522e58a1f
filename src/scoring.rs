//! Signal scorers.
//!
//! Four independent pure functions, each mapping evidence or context state to
//! a score in [0, 1]. Empty inputs are valid, not errors.

use crate::types::{EvidenceItem, NarrativeContext};

/// Coarse corroboration proxy based purely on how many sources were found.
///
/// No semantic agreement or contradiction detection happens here; that is a
/// documented limitation of the engine, not something to patch inside
/// scoring.
pub fn source_agreement(evidence: &[EvidenceItem]) -> f64 {
    match evidence.len() {
        0 => 0.0,
        1 => 0.3,
        2 => 0.5,
        _ => 0.7,
    }
}

/// Fraction of items whose url contains a configured reputable domain,
/// boosted by 1.2 and clamped to 1.0.
///
/// Matching is case-insensitive substring; an item counts once even when
/// several domains match it.
pub fn source_quality(evidence: &[EvidenceItem], reputable_domains: &[String]) -> f64 {
    if evidence.is_empty() {
        return 0.0;
    }

    let reputable_count = evidence
        .iter()
        .filter(|item| {
            let url = item.url.to_lowercase();
            reputable_domains
                .iter()
                .any(|domain| url.contains(&domain.to_lowercase()))
        })
        .count();

    let score = reputable_count as f64 / evidence.len() as f64;
    (score * 1.2).min(1.0)
}

/// How complete the narrative context looks, structurally.
///
/// Base 0.5, +0.2 for identified missing-context points, +0.2 for a full
/// picture summary, +0.1 for a non-empty timeline. The sum tops out at 1.0
/// exactly; the clamp guards the invariant anyway.
pub fn context_completeness(context: &NarrativeContext) -> f64 {
    // Accumulate in tenths so the full house is exactly 1.0
    let mut tenths: u32 = 5;

    if !context.missing_context_points.is_empty() {
        tenths += 2;
    }
    if !context.full_picture_summary.is_empty() {
        tenths += 2;
    }
    if !context.timeline.is_empty() {
        tenths += 1;
    }

    f64::from(tenths.min(10)) / 10.0
}

/// Whether prior third-party fact-checks were found: none 0.0, one 0.7,
/// two or more 1.0.
pub fn fact_check_coverage(existing_fact_checks: &[EvidenceItem]) -> f64 {
    match existing_fact_checks.len() {
        0 => 0.0,
        1 => 0.7,
        _ => 1.0,
    }
}
