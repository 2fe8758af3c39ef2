//! Live Feed Verification Module
//!
//! Probes the configured JMA endpoints to determine which are reachable
//! and returning usable entries. Run this before relying on the live
//! source; a failing feed silently degrades to mock data otherwise.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::ingest::jma::{
    fetch_feed, parse_flood_map, parse_sediment_map, parse_warning_map, JMA_FLOOD_URL,
    JMA_SEDIMENT_URL, JMA_WARNING_URL,
};
use crate::model::jst_now;

// ============================================================================
// Verification Results
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    pub timestamp: String,
    pub feeds: Vec<FeedVerification>,
    pub summary: VerificationSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub working: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedVerification {
    pub name: String,
    pub url: String,
    pub status: VerificationStatus,
    pub api_responsive: bool,
    pub parsed: bool,
    pub entry_count: usize,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum VerificationStatus {
    /// Reachable, parseable, with at least one usable entry
    Success,
    /// Reachable and parseable but nothing currently warned
    PartialSuccess,
    Failed,
}

// ============================================================================
// Feed Verification
// ============================================================================

/// Which parser checks a feed body.
#[derive(Debug, Clone, Copy)]
pub enum FeedKind {
    Flood,
    Sediment,
    Warning,
}

impl FeedKind {
    pub fn name(&self) -> &'static str {
        match self {
            FeedKind::Flood => "flood",
            FeedKind::Sediment => "sediment",
            FeedKind::Warning => "warning",
        }
    }

    pub fn url(&self) -> &'static str {
        match self {
            FeedKind::Flood => JMA_FLOOD_URL,
            FeedKind::Sediment => JMA_SEDIMENT_URL,
            FeedKind::Warning => JMA_WARNING_URL,
        }
    }

    /// Number of usable entries in a feed body.
    pub fn count_entries(&self, body: &str) -> Result<usize, ProviderError> {
        match self {
            FeedKind::Flood => parse_flood_map(body, jst_now()).map(|v| v.len()),
            FeedKind::Sediment => parse_sediment_map(body, jst_now()).map(|v| v.len()),
            FeedKind::Warning => parse_warning_map(body).map(|v| v.len()),
        }
    }
}

/// Grades a fetched (or failed) feed body.
pub fn assess_feed(kind: FeedKind, fetched: Result<String, ProviderError>) -> FeedVerification {
    let mut result = FeedVerification {
        name: kind.name().to_string(),
        url: kind.url().to_string(),
        status: VerificationStatus::Failed,
        api_responsive: false,
        parsed: false,
        entry_count: 0,
        error_message: None,
    };

    let body = match fetched {
        Ok(body) => body,
        Err(e) => {
            result.error_message = Some(e.to_string());
            return result;
        }
    };
    result.api_responsive = true;

    match kind.count_entries(&body) {
        Ok(count) => {
            result.parsed = true;
            result.entry_count = count;
            result.status = if count > 0 {
                VerificationStatus::Success
            } else {
                VerificationStatus::PartialSuccess
            };
        }
        Err(e) => result.error_message = Some(e.to_string()),
    }

    result
}

pub fn verify_feed(client: &reqwest::blocking::Client, kind: FeedKind) -> FeedVerification {
    assess_feed(kind, fetch_feed(client, kind.url()))
}

pub fn verify_all(client: &reqwest::blocking::Client) -> VerificationReport {
    let feeds: Vec<FeedVerification> = [FeedKind::Flood, FeedKind::Sediment, FeedKind::Warning]
        .into_iter()
        .map(|kind| verify_feed(client, kind))
        .collect();

    let working = feeds
        .iter()
        .filter(|f| f.status != VerificationStatus::Failed)
        .count();
    let summary = VerificationSummary {
        total: feeds.len(),
        working,
        failed: feeds.len() - working,
    };

    VerificationReport {
        timestamp: Utc::now().to_rfc3339(),
        feeds,
        summary,
    }
}

pub fn print_report(report: &VerificationReport) {
    println!("\n🔍 JMA Feed Verification ({})", report.timestamp);
    println!("═══════════════════════════════════════════════════════════");
    for feed in &report.feeds {
        println!("\n{} ({})", feed.name, feed.url);
        println!("  Status: {:?}", feed.status);
        println!("  Responsive: {}, Parsed: {}", feed.api_responsive, feed.parsed);
        println!("  Entries: {}", feed.entry_count);
        if let Some(error) = &feed.error_message {
            println!("  Error: {}", error);
        }
    }
    println!("\n═══════════════════════════════════════════════════════════");
    println!(
        "Summary: {}/{} working, {} failed",
        report.summary.working, report.summary.total, report.summary.failed
    );
}
