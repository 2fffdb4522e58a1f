//! Record types shared across the engine.
//!
//! These replace the loosely-shaped dicts the collaborators exchange with
//! explicit serde types, so missing fields fail at deserialization instead of
//! deep inside scoring math.

use serde::{Deserialize, Serialize};

/// Which collaborator channel produced an evidence item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceTag {
    WebSearch,
    FactCheckSite,
}

impl Default for SourceTag {
    fn default() -> Self {
        SourceTag::WebSearch
    }
}

/// One retrieved snippet about the claim. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub snippet: String,
    /// May be empty when the search collaborator had no link.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub source: SourceTag,
    /// Set by the search collaborator when the item came from a known
    /// fact-checking site.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fact_check_site: bool,
    /// Which fact-checking site, when `fact_check_site` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fact_check_source: Option<String>,
}

/// The three evidence channels the engine scores over.
///
/// The search collaborator caps these at 5/5/3 before they reach the core;
/// scoring stays correct if a caller violates the caps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EvidenceBundle {
    #[serde(default)]
    pub direct_evidence: Vec<EvidenceItem>,
    #[serde(default)]
    pub context_evidence: Vec<EvidenceItem>,
    #[serde(default)]
    pub existing_fact_checks: Vec<EvidenceItem>,
}

impl EvidenceBundle {
    /// Iterate all items in channel order: direct, context, fact-checks.
    pub fn iter_all(&self) -> impl Iterator<Item = &EvidenceItem> {
        self.direct_evidence
            .iter()
            .chain(self.context_evidence.iter())
            .chain(self.existing_fact_checks.iter())
    }

    /// Total item count across all three channels.
    pub fn total_len(&self) -> usize {
        self.direct_evidence.len() + self.context_evidence.len() + self.existing_fact_checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }

    /// Render the first `limit` items as prompt-ready text blocks for the
    /// narrative collaborator ("Source: {title}" followed by the snippet).
    pub fn digest(&self, limit: usize) -> String {
        self.iter_all()
            .take(limit)
            .map(|item| {
                let title = if item.title.is_empty() {
                    "Unknown"
                } else {
                    item.title.as_str()
                };
                format!("Source: {}\n{}", title, item.snippet)
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// What the narrative collaborator produced for the claim.
///
/// `timeline` is populated by [`crate::timeline::build_timeline`], not
/// supplied externally.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NarrativeContext {
    #[serde(default)]
    pub missing_context_points: Vec<String>,
    #[serde(default)]
    pub full_picture_summary: String,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

/// One normalized (date, event, source) triple derived from evidence text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// The date text as matched in the evidence.
    pub raw_date_text: String,
    /// ISO `YYYY-MM-DD`, or the raw text verbatim when normalization was
    /// unavailable. Doubles as the sort key.
    pub normalized_date: String,
    /// Item title truncated to 100 characters.
    pub event_text: String,
    pub source_url: String,
}

/// The four signal scores, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSet {
    pub source_agreement: f64,
    pub reputable_sources: f64,
    pub context_completeness: f64,
    pub fact_check_exists: f64,
}

/// Verdict labels. Wire names match the labels the downstream UI expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    VerifiedByFactCheckers,
    FactCheckedNeedsContext,
    LikelyTrue,
    NeedsMoreContext,
    Questionable,
    LikelyFalseOrMisleading,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::VerifiedByFactCheckers => "VERIFIED_BY_FACT_CHECKERS",
            Verdict::FactCheckedNeedsContext => "FACT_CHECKED_NEEDS_CONTEXT",
            Verdict::LikelyTrue => "LIKELY_TRUE",
            Verdict::NeedsMoreContext => "NEEDS_MORE_CONTEXT",
            Verdict::Questionable => "QUESTIONABLE",
            Verdict::LikelyFalseOrMisleading => "LIKELY_FALSE_OR_MISLEADING",
        }
    }
}

/// The engine's sole externally visible output. Stateless; no lifecycle
/// beyond the call that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerdictResult {
    pub verdict: Verdict,
    /// Weighted confidence in [0, 1], rounded to 2 decimals.
    pub confidence: f64,
    /// Per-signal scores, each rounded to 2 decimals.
    pub scores: ScoreSet,
    /// Total items across all three evidence channels.
    pub evidence_count: usize,
}
