//! Text rendering of access events and run statistics.
//!
//! Everything here is a pure function of its arguments, apart from
//! [`write_report`] which saves an already rendered report to disk. The
//! output is deterministic: events are ordered by sequence number no matter
//! how they were collected.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::cache::{AccessEvent, AccessOutcome, CacheStats};
use crate::config::AccessTiming;
use crate::error::{Error, Result};

/// File name used when a host saves a report without choosing one.
pub const DEFAULT_REPORT_FILE: &str = "cache_logs.txt";

/// Text emitted in place of a summary that cannot be rendered.
pub const SUMMARY_ERROR: &str = "Error creating summary.";

/// Figures shown in the summary section of a report.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Summary {
    /// Number of accesses in the run.
    pub access_count: u64,
    /// Number of hits.
    pub hits: u64,
    /// Number of misses.
    pub misses: u64,
    /// Total access time in milliseconds.
    #[serde(default)]
    pub total_access_time: Option<f64>,
    /// Average access time in milliseconds.
    #[serde(default)]
    pub average_access_time: Option<f64>,
}

impl Summary {
    /// Summary without timing figures.
    pub fn from_stats(stats: &CacheStats) -> Self {
        Self {
            access_count: stats.accesses(),
            hits: stats.hits,
            misses: stats.misses,
            total_access_time: None,
            average_access_time: None,
        }
    }

    /// Summary with access times derived from `timing`.
    pub fn with_timing(stats: &CacheStats, timing: &AccessTiming) -> Self {
        let total = timing.total_time(stats.hits, stats.misses);
        let average = if stats.accesses() == 0 { 0.0 } else { total / stats.accesses() as f64 };
        Self { total_access_time: Some(total), average_access_time: Some(average), ..Self::from_stats(stats) }
    }

    /// Parse a summary handed over as JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Hit rate in percent, 0.0 when there were no accesses.
    pub fn hit_rate(&self) -> f64 {
        crate::cache::percent(self.hits, self.access_count)
    }

    /// Miss rate in percent, 0.0 when there were no accesses.
    pub fn miss_rate(&self) -> f64 {
        crate::cache::percent(self.misses, self.access_count)
    }

    /// Check that the counts agree and the timings are usable.
    pub fn validate(&self) -> Result<()> {
        if self.hits.checked_add(self.misses) != Some(self.access_count) {
            return Err(Error::invalid_summary(format!(
                "hits ({}) + misses ({}) != access count ({})",
                self.hits, self.misses, self.access_count
            )));
        }
        for (name, value) in [
            ("total access time", self.total_access_time),
            ("average access time", self.average_access_time),
        ] {
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(Error::invalid_summary(format!("{} is {}", name, v)));
                }
            }
        }
        Ok(())
    }
}

/// Layout switches for [`export_report`].
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Width of the `=` rules framing each section.
    /// Default: 70
    pub banner_width: usize,

    /// Include total/average access time lines when the summary has them.
    /// Default: true
    pub include_timing: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { banner_width: 70, include_timing: true }
    }
}

/// Number of decimal digits in `n` (1 for 0).
pub fn num_digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

/// Render one event as a log line.
///
/// `field_width` is the digit count of the total number of events; the
/// bracketed sequence number is padded to `field_width + 2` columns so lines
/// stay aligned.
pub fn format_event(event: &AccessEvent, field_width: usize) -> String {
    let counter = format!("[{}]", event.sequence);
    let action = match event.outcome {
        AccessOutcome::Hit { .. } => format!("Updating Age of MM Block {}", event.block),
        AccessOutcome::Miss { evicted: Some(evicted), .. } => {
            format!("Replacing MM Block {} with MM Block {}", evicted, event.block)
        }
        AccessOutcome::Miss { evicted: None, .. } => format!("Inserting MM Block {}", event.block),
    };

    format!(
        "{:<width$} {:<4} - Set {} Blk {} - {}",
        counter,
        event.status(),
        event.set,
        event.slot(),
        action,
        width = field_width + 2
    )
}

/// Render events one per line, ordered by sequence number.
pub fn format_log(events: &[AccessEvent]) -> String {
    let width = num_digits(events.len());
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| e.sequence);

    sorted.iter().map(|e| format_event(e, width)).collect::<Vec<_>>().join("\n")
}

/// Render the summary section, or [`SUMMARY_ERROR`] if it is inconsistent.
pub fn format_summary(summary: &Summary) -> String {
    render_summary(summary, true)
}

/// Like [`format_summary`] for a JSON summary; missing fields degrade to
/// [`SUMMARY_ERROR`].
pub fn format_summary_json(json: &str) -> String {
    match Summary::from_json(json) {
        Ok(summary) => format_summary(&summary),
        Err(e) => {
            log::warn!("Could not build summary: {}", e);
            SUMMARY_ERROR.to_string()
        }
    }
}

fn render_summary(summary: &Summary, include_timing: bool) -> String {
    if let Err(e) = summary.validate() {
        log::warn!("Could not build summary: {}", e);
        return SUMMARY_ERROR.to_string();
    }

    let mut lines = vec![
        format!(
            "Access Count: {}, Hits: {}, Misses: {}",
            summary.access_count, summary.hits, summary.misses
        ),
        format!("Hit Rate: {:.2}%, Miss Rate: {:.2}%", summary.hit_rate(), summary.miss_rate()),
    ];
    if include_timing {
        if let Some(total) = summary.total_access_time {
            lines.push(format!("Total Access Time: {:.2} ms", total));
        }
        if let Some(average) = summary.average_access_time {
            lines.push(format!("Average Access Time: {:.2} ms", average));
        }
    }
    lines.join("\n")
}

fn banner(title: &str, width: usize) -> String {
    format!("{:=^width$}", format!(" {} ", title), width = width)
}

/// Render the full report: summary section, event log, closing rule.
pub fn export_report(events: &[AccessEvent], summary: &Summary, options: &ReportOptions) -> String {
    [
        banner("Cache Memory Summary", options.banner_width),
        render_summary(summary, options.include_timing),
        banner("Cache Memory Logs", options.banner_width),
        format_log(events),
        "=".repeat(options.banner_width),
    ]
    .join("\n\n")
}

/// Save a rendered report to `path`.
pub fn write_report(path: impl AsRef<Path>, report: &str) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, report)?;
    log::info!("Wrote cache report to {:?} ({} bytes)", path, report.len());
    Ok(())
}
