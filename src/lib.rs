//! Evidence aggregation and verdict scoring for claim verification.
//!
//! The engine reduces partially-untrusted evidence snippets about a claim to
//! a dated timeline and a single verdict with an auditable confidence score.
//! Everything here is pure computation; fetching, OCR, and generative-text
//! calls live in external collaborators that feed this crate through the
//! types in [`types`].

pub mod config;
pub mod dates;
pub mod error;
pub mod scoring;
pub mod timeline;
pub mod types;
pub mod verdict;

pub use config::Config;
pub use error::{ClaimlensError, Result};
pub use timeline::build_timeline;
pub use types::{
    EvidenceBundle, EvidenceItem, NarrativeContext, ScoreSet, SourceTag, TimelineEntry, Verdict,
    VerdictResult,
};
pub use verdict::compute_verdict;

// Loads .env if present, silently ignores if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
