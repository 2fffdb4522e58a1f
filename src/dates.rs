//! Date extraction from free evidence text.
//!
//! Recognizes four date shapes (numeric, ISO, abbreviated month, full month)
//! anywhere in a string. Every pattern scans the whole text independently, so
//! overlapping matches from different patterns are all returned; callers
//! dedupe if they care. A match whose digits don't form a real calendar date
//! is silently dropped, never surfaced as an error.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// One date-like substring together with its parsed calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateMatch {
    /// The text exactly as matched.
    pub raw: String,
    pub date: NaiveDate,
}

impl DateMatch {
    /// ISO `YYYY-MM-DD` form used as the timeline sort key.
    pub fn normalized(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

// MM/DD/YYYY or DD-MM-YYYY; day/month order is ambiguous by design (the
// source locale was never specified) and is resolved month-first with a
// day-first fallback. Known limitation, not a bug.
static NUMERIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{1,2})[/-](\d{1,2})[/-](\d{2,4})\b").unwrap());

static ISO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})\b").unwrap());

static MONTH_ABBREV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+(\d{1,2}),?\s+(\d{4})\b",
    )
    .unwrap()
});

static MONTH_FULL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(January|February|March|April|May|June|July|August|September|October|November|December)\s+(\d{1,2}),?\s+(\d{4})\b",
    )
    .unwrap()
});

/// Extract all parseable dates from `text`.
///
/// Returns one [`DateMatch`] per successful (pattern match, parse) pair, in
/// pattern order then match order. Unparseable matches contribute nothing.
pub fn extract_dates(text: &str) -> Vec<DateMatch> {
    let mut out = Vec::new();

    for caps in NUMERIC.captures_iter(text) {
        let raw = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
        let (a, b, y) = (&caps[1], &caps[2], &caps[3]);
        if let Some(date) = parse_numeric(a, b, y) {
            out.push(DateMatch {
                raw: raw.to_string(),
                date,
            });
        }
    }

    for caps in ISO.captures_iter(text) {
        let raw = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
        if let Some(date) = ymd(&caps[1], &caps[2], &caps[3]) {
            out.push(DateMatch {
                raw: raw.to_string(),
                date,
            });
        }
    }

    for re in [&*MONTH_ABBREV, &*MONTH_FULL] {
        for caps in re.captures_iter(text) {
            let raw = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
            let month = month_number(&caps[1]);
            if let Some(date) = month.and_then(|m| {
                let day: u32 = caps[2].parse().ok()?;
                let year: i32 = caps[3].parse().ok()?;
                NaiveDate::from_ymd_opt(year, m, day)
            }) {
                out.push(DateMatch {
                    raw: raw.to_string(),
                    date,
                });
            }
        }
    }

    out
}

fn ymd(y: &str, m: &str, d: &str) -> Option<NaiveDate> {
    let year: i32 = y.parse().ok()?;
    let month: u32 = m.parse().ok()?;
    let day: u32 = d.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a numeric triple, month-first then day-first.
fn parse_numeric(a: &str, b: &str, y: &str) -> Option<NaiveDate> {
    let first: u32 = a.parse().ok()?;
    let second: u32 = b.parse().ok()?;
    let year = expand_year(y.parse().ok()?);
    NaiveDate::from_ymd_opt(year, first, second)
        .or_else(|| NaiveDate::from_ymd_opt(year, second, first))
}

// Two-digit years use the usual 1969 pivot: 00-68 -> 2000s, 69-99 -> 1900s.
fn expand_year(y: i32) -> i32 {
    if y >= 100 {
        y
    } else if y <= 68 {
        2000 + y
    } else {
        1900 + y
    }
}

/// Month name (or any prefix-extended abbreviation of it) to month number.
/// Callers guarantee at least three ASCII letters.
fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_ascii_lowercase();
    if lower.len() < 3 {
        return None;
    }
    let n = match &lower[..3] {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(n)
}
