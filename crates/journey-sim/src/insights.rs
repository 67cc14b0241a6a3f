//! Revealable insight blocks
//!
//! Three short explanations derived from a finished run: why the lead did
//! or did not convert, which hesitation phrases the client used, and how
//! tight the follow-up cadence should be.

use crate::summary::JourneySummary;
use crate::types::{Actor, SimEvent, SimulationResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Phrases that mark client friction, matched case-insensitively.
pub const HESITATION_KEYWORDS: &[&str] = &[
    "not sure",
    "think about",
    "later",
    "maybe",
    "too expensive",
    "price",
    "budget",
    "cost",
    "busy",
    "no time",
    "overwhelmed",
    "pause",
    "another direction",
];

/// Most hesitation bullets reported.
pub const MAX_HESITATIONS: usize = 5;

/// Silences longer than this are called out as cooling the lead.
pub const LONG_GAP_HOURS: f64 = 48.0;

/// Titled list of bullet points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightBlock {
    /// Heading
    pub title: String,
    /// One-line description under the heading
    pub subtitle: String,
    /// Body
    pub bullets: Vec<String>,
}

/// The three insight blocks for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyInsights {
    /// Conversion explanation
    pub why: InsightBlock,
    /// Detected hesitation phrases
    pub hesitations: InsightBlock,
    /// Recommended follow-up cadence
    pub timing: InsightBlock,
}

/// Average and longest silence between consecutive events, in hours.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GapStats {
    /// Mean gap, `None` with fewer than two events
    pub average_hours: Option<f64>,
    /// Longest gap, `None` with fewer than two events or no positive gap
    pub longest_hours: Option<f64>,
}

/// Gap statistics over `events`, which must be in emission order.
pub fn gap_stats(events: &[SimEvent]) -> GapStats {
    if events.len() < 2 {
        return GapStats::default();
    }

    let gaps: Vec<f64> = events
        .windows(2)
        .filter(|w| w[1].elapsed_minutes >= w[0].elapsed_minutes)
        .map(|w| f64::from(w[1].elapsed_minutes - w[0].elapsed_minutes) / 60.0)
        .collect();

    if gaps.is_empty() {
        return GapStats::default();
    }

    let average = gaps.iter().sum::<f64>() / gaps.len() as f64;
    let longest = gaps.iter().copied().fold(0.0_f64, f64::max);
    GapStats {
        average_hours: Some(average),
        longest_hours: (longest > 0.0).then_some(longest),
    }
}

/// Render a duration in hours as minutes, hours, or days.
pub fn format_hours(hours: Option<f64>) -> String {
    match hours {
        None => "n/a".to_string(),
        Some(h) if h < 1.0 => format!("{} min", (h * 60.0) as u32),
        Some(h) if h < 24.0 => format!("{h:.1} h"),
        Some(h) => format!("{:.1} days", h / 24.0),
    }
}

fn active_days(events: &[SimEvent]) -> usize {
    events.iter().map(|e| e.day_index).collect::<BTreeSet<_>>().len()
}

fn why_block(result: &SimulationResult, summary: &JourneySummary, gaps: GapStats) -> InsightBlock {
    let client = result.stats.client_messages;
    let assistant = result.stats.assistant_messages;
    let active = active_days(&result.events);
    let intensity = summary.engagement_intensity;

    if result.converted {
        let mut bullets = vec![
            format!("Strong engagement: {client} client messages over {active} active day(s)."),
            format!("Consistent follow-up: {assistant} assistant messages kept the conversation moving."),
            format!("Pipeline journey: {}.", summary.path_label()),
            format!(
                "Modelled conversion likelihood: {}% with a drop-off risk of {}%.",
                summary.conversion_likelihood, summary.dropoff_risk
            ),
        ];
        if intensity >= 70.0 {
            bullets.push("High engagement intensity: this lead behaved like a strong-fit buyer.".to_string());
        } else {
            bullets.push(
                "Moderate engagement intensity: conversion came from follow-up consistency more than volume."
                    .to_string(),
            );
        }
        InsightBlock {
            title: "Why this lead converted".to_string(),
            subtitle: "A quick explanation of what likely drove this outcome.".to_string(),
            bullets,
        }
    } else {
        let mut bullets = vec![
            format!("Engagement volume: {client} client messages across {active} active day(s)."),
            format!(
                "Stage progression stalled at {} before reaching a committed stage.",
                summary.pipeline_depth
            ),
        ];
        if gaps.longest_hours.is_some_and(|h| h > LONG_GAP_HOURS) {
            bullets.push("Long silent gaps between touchpoints likely cooled the opportunity.".to_string());
        }
        if intensity < 40.0 {
            bullets.push(
                "Low engagement intensity: this persona needs a tighter follow-up rhythm.".to_string(),
            );
        }
        bullets.push(
            "Consider a targeted re-engagement sequence focused on objections and next steps.".to_string(),
        );
        InsightBlock {
            title: "Why this lead did not convert (yet)".to_string(),
            subtitle: "A quick explanation of what likely held this outcome back.".to_string(),
            bullets,
        }
    }
}

/// First hesitation keyword contained in `text`, if any.
pub fn detect_hesitation(text: &str) -> Option<&'static str> {
    let lower = text.to_lowercase();
    HESITATION_KEYWORDS.iter().copied().find(|kw| lower.contains(kw))
}

fn hesitations_block(events: &[SimEvent]) -> InsightBlock {
    let mut bullets: Vec<String> = Vec::new();
    for event in events.iter().filter(|e| e.actor == Actor::Client) {
        if let Some(keyword) = detect_hesitation(&event.message) {
            let bullet = format!(
                "Day {}: client raised a '{keyword}'-style concern.",
                event.day_index
            );
            if !bullets.contains(&bullet) {
                bullets.push(bullet);
            }
        }
        if bullets.len() == MAX_HESITATIONS {
            break;
        }
    }

    if bullets.is_empty() {
        bullets = vec![
            "No strong objection phrases detected in this journey.".to_string(),
            "Most client language was either neutral or positively oriented.".to_string(),
        ];
    }

    InsightBlock {
        title: "Key hesitations detected".to_string(),
        subtitle: "Moments where the client showed friction or uncertainty.".to_string(),
        bullets,
    }
}

fn timing_block(summary: &JourneySummary, gaps: GapStats) -> InsightBlock {
    let mut bullets = Vec::new();
    if gaps.average_hours.is_some() {
        bullets.push(format!(
            "Typical gap between touchpoints in this simulation: {}.",
            format_hours(gaps.average_hours)
        ));
    }
    if gaps.longest_hours.is_some() {
        bullets.push(format!(
            "Longest silence in this journey: {}.",
            format_hours(gaps.longest_hours)
        ));
    }

    let cadence = if summary.engagement_intensity >= 70.0 {
        "This persona responds well to a tight cadence: follow up within 12 to 24 hours after each client message."
    } else if summary.engagement_intensity >= 40.0 {
        "A balanced cadence works here: following up within 24 to 48 hours keeps the lead warm without overwhelming them."
    } else {
        "Engagement is fragile: when the client does respond, make sure the follow-up lands within 24 hours."
    };
    bullets.push(cadence.to_string());

    InsightBlock {
        title: "Optimal follow-up timing window".to_string(),
        subtitle: "How tight follow-up should be to stay in the conversion zone.".to_string(),
        bullets,
    }
}

/// Build all three insight blocks for a run and its summary.
pub fn build_insights(result: &SimulationResult, summary: &JourneySummary) -> JourneyInsights {
    let gaps = gap_stats(&result.events);
    JourneyInsights {
        why: why_block(result, summary, gaps),
        hesitations: hesitations_block(&result.events),
        timing: timing_block(summary, gaps),
    }
}
