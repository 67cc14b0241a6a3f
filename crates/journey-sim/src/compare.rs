//! Side-by-side persona comparison

use crate::insights::{format_hours, gap_stats};
use crate::summary::summarize;
use crate::types::SimulationResult;
use serde::{Deserialize, Serialize};

/// Narrative contrast between two runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Heading
    pub title: String,
    /// One-line description under the heading
    pub subtitle: String,
    /// One bullet per compared dimension
    pub bullets: Vec<String>,
}

/// Contrast message volumes, intensity, likelihood, outcome, path and
/// longest silence of `a` against `b`.
pub fn compare(a: &SimulationResult, b: &SimulationResult) -> ComparisonReport {
    let (sa, sb) = (summarize(a), summarize(b));
    let (la, lb) = (a.persona_label.as_str(), b.persona_label.as_str());

    let bullets = vec![
        format!(
            "{la} saw {} client messages and {} assistant touches; {lb} saw {} client messages and {} assistant touches.",
            a.stats.client_messages,
            a.stats.assistant_messages,
            b.stats.client_messages,
            b.stats.assistant_messages
        ),
        format!(
            "Engagement intensity: {la} at {:.0} vs {lb} at {:.0} (0 to 100 scale).",
            sa.engagement_intensity, sb.engagement_intensity
        ),
        format!(
            "Modelled conversion likelihood: {la} at {}% vs {lb} at {}%.",
            sa.conversion_likelihood, sb.conversion_likelihood
        ),
        format!(
            "Pipeline outcome: {la} finished at {}, while {lb} finished at {}.",
            a.final_stage, b.final_stage
        ),
        format!(
            "{la} journey: {}. {lb} journey: {}.",
            sa.path_label(),
            sb.path_label()
        ),
        format!(
            "Longest silence window: {la} at {}, {lb} at {}.",
            format_hours(gap_stats(&a.events).longest_hours),
            format_hours(gap_stats(&b.events).longest_hours)
        ),
    ];

    ComparisonReport {
        title: "Why these personas behave differently".to_string(),
        subtitle: "A quick comparison of engagement, pipeline progression, and likelihood to convert."
            .to_string(),
        bullets,
    }
}
