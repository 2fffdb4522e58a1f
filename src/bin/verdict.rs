//! CLI for scoring a claim from a JSON evidence file.
//!
//! Input shape: `{"claim": "...", "evidence": EvidenceBundle,
//! "context": NarrativeContext}` (context optional). The timeline is built
//! here from the pooled evidence before scoring, mirroring how the service
//! pipeline calls the engine.

use anyhow::{Context as _, Result};
use clap::{Arg, Command};
use claimlens::config::Config;
use claimlens::types::{EvidenceBundle, EvidenceItem, NarrativeContext};
use claimlens::{build_timeline, compute_verdict};
use serde::Deserialize;
use serde_json::json;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct VerdictRequest {
    claim: String,
    evidence: EvidenceBundle,
    #[serde(default)]
    context: NarrativeContext,
}

fn main() -> Result<()> {
    claimlens::load_env();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "claimlens=info".into()),
        )
        .init();

    let matches = Command::new("verdict")
        .about("Score a claim against an evidence bundle")
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .help("JSON request file ('-' for stdin)")
                .default_value("-"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Emit compact JSON instead of pretty-printed")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let config = Config::load()?;

    let input = matches.get_one::<String>("input").expect("has default");
    let raw = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read {}", input))?
    };

    let request: VerdictRequest =
        serde_json::from_str(&raw).context("malformed verdict request")?;

    let all_items: Vec<EvidenceItem> = request.evidence.iter_all().cloned().collect();
    let mut context = request.context;
    if context.timeline.is_empty() {
        context.timeline = build_timeline(&all_items);
    }

    let result = compute_verdict(
        &request.claim,
        &request.evidence,
        &context,
        &config.sources.reputable_domains,
    );

    let output = json!({
        "result": result,
        "timeline": context.timeline,
    });
    if matches.get_flag("compact") {
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&output)?);
    }

    Ok(())
}
