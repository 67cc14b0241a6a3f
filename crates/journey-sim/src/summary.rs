//! Journey KPI summary
//!
//! Condenses a [`SimulationResult`] into the handful of numbers a dashboard
//! shows next to the timeline: how deep the lead got, how dense the
//! conversation was, and a heuristic read on where it is heading.

use crate::insights::{format_hours, gap_stats};
use crate::stage::Stage;
use crate::types::{Actor, SimEvent, SimulationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative bucket for the engagement intensity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntensityBand {
    /// 80 and above
    VeryHigh,
    /// 60 to 80
    High,
    /// 40 to 60
    Moderate,
    /// Below 40
    Low,
}

impl IntensityBand {
    /// Bucket a 0..=100 intensity score.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            IntensityBand::VeryHigh
        } else if score >= 60.0 {
            IntensityBand::High
        } else if score >= 40.0 {
            IntensityBand::Moderate
        } else {
            IntensityBand::Low
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            IntensityBand::VeryHigh => "Very high",
            IntensityBand::High => "High",
            IntensityBand::Moderate => "Moderate",
            IntensityBand::Low => "Low",
        }
    }
}

impl fmt::Display for IntensityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Where the journey ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Reached `Converted` at some point
    Converted,
    /// Ended in `Lost`
    Lost,
    /// Still somewhere in the funnel
    Open,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Converted => "converted",
            Outcome::Lost => "lost",
            Outcome::Open => "open",
        };
        f.write_str(s)
    }
}

/// Dashboard-level view of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JourneySummary {
    /// Persona that was simulated
    pub persona_key: String,
    /// Persona display name
    pub persona_label: String,
    /// Simulated days
    pub days: u32,
    /// Stage on day 1
    pub starting_stage: Stage,
    /// Final stage
    pub pipeline_depth: Stage,
    /// Client plus assistant messages per day, scaled to 0..=100
    pub engagement_intensity: f64,
    /// Bucketed intensity
    pub intensity_band: IntensityBand,
    /// Heuristic conversion likelihood in percent
    pub conversion_likelihood: u8,
    /// Heuristic drop-off risk in percent
    pub dropoff_risk: u8,
    /// Overall outcome
    pub outcome: Outcome,
    /// Stages visited, consecutive repeats collapsed
    pub path: Vec<Stage>,
}

impl JourneySummary {
    /// Path rendered as `A → B → C`.
    pub fn path_label(&self) -> String {
        self.path
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(" → ")
    }

    /// Prose summary for display under the charts.
    pub fn narrative(&self) -> String {
        let mut out = format!(
            "This simulated client followed the {} pattern over a {}-day journey.",
            self.persona_label, self.days
        );

        if self.path.len() > 1 {
            out.push_str(&format!(
                " The journey progressed through {}, starting from {} and ending in {}.",
                self.path_label(),
                self.starting_stage,
                self.pipeline_depth
            ));
        } else {
            out.push_str(&format!(
                " The lead stayed in {} for the whole journey.",
                self.pipeline_depth
            ));
        }

        out.push_str(&format!(
            " Engagement intensity was {:.1} ({}), reflecting the density of interactions.",
            self.engagement_intensity,
            self.intensity_band.label().to_lowercase()
        ));
        out.push_str(&format!(
            " The lead shows an approximate {}% likelihood of conversion with a {}% probability of drop-off.",
            self.conversion_likelihood, self.dropoff_risk
        ));
        out
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Engagement intensity: ten client or assistant messages per day scores 100.
pub fn engagement_intensity(result: &SimulationResult) -> f64 {
    let touches = f64::from(result.stats.client_messages + result.stats.assistant_messages);
    let days = f64::from(result.days.max(1));
    round1(touches / days * 10.0).min(100.0)
}

/// Heuristic `(conversion_likelihood, dropoff_risk)` in percent.
pub fn likelihoods(converted: bool, final_stage: Stage) -> (u8, u8) {
    if converted {
        return (95, 5);
    }
    match final_stage {
        Stage::Lost => (15, 70),
        Stage::Warm | Stage::Active => (55, 30),
        Stage::Hot | Stage::HighIntent | Stage::UnderContract => (75, 15),
        Stage::New | Stage::Inquiry | Stage::Engaged | Stage::Converted | Stage::Won => (40, 40),
    }
}

/// Stages visited in order, starting from the persona's starting stage.
pub fn journey_path(result: &SimulationResult) -> Vec<Stage> {
    let mut path = vec![result.starting_stage];
    for event in &result.events {
        if path.last() != Some(&event.stage_after) {
            path.push(event.stage_after);
        }
    }
    path
}

/// Build the KPI summary for `result`.
pub fn summarize(result: &SimulationResult) -> JourneySummary {
    let engagement_intensity = engagement_intensity(result);
    let (conversion_likelihood, dropoff_risk) = likelihoods(result.converted, result.final_stage);
    let outcome = if result.converted {
        Outcome::Converted
    } else if result.final_stage == Stage::Lost {
        Outcome::Lost
    } else {
        Outcome::Open
    };

    JourneySummary {
        persona_key: result.persona_key.clone(),
        persona_label: result.persona_label.clone(),
        days: result.days,
        starting_stage: result.starting_stage,
        pipeline_depth: result.final_stage,
        engagement_intensity,
        intensity_band: IntensityBand::from_score(engagement_intensity),
        conversion_likelihood,
        dropoff_risk,
        outcome,
        path: journey_path(result),
    }
}

/// Compact KPI strip shown above the conversation timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiStrip {
    /// Every event in the run, summaries included
    pub total_touchpoints: usize,
    /// Mean hours from a client message to the next assistant message
    pub avg_response_delay_hours: Option<f64>,
    /// Rendered average response delay
    pub avg_response_delay_label: String,
    /// Longest silence between consecutive events, in hours
    pub longest_gap_hours: Option<f64>,
    /// Rendered longest silence
    pub longest_gap_label: String,
    /// Engagement intensity from the summary
    pub intensity_score: f64,
    /// Band label for the intensity
    pub intensity_label: String,
}

/// Mean delay in hours between a client message and the assistant message
/// that follows it. Client messages without a later assistant reply are
/// ignored.
pub fn average_response_delay(events: &[SimEvent]) -> Option<f64> {
    let mut pending: Option<u32> = None;
    let mut delays = Vec::new();
    for event in events {
        match event.actor {
            Actor::Client => pending = Some(event.elapsed_minutes),
            Actor::Assistant => {
                if let Some(asked) = pending.take() {
                    if event.elapsed_minutes >= asked {
                        delays.push(f64::from(event.elapsed_minutes - asked) / 60.0);
                    }
                }
            }
            Actor::System => {}
        }
    }
    if delays.is_empty() {
        None
    } else {
        Some(delays.iter().sum::<f64>() / delays.len() as f64)
    }
}

/// Assemble the KPI strip for `result` and its `summary`.
pub fn kpi_strip(result: &SimulationResult, summary: &JourneySummary) -> KpiStrip {
    let avg_response_delay_hours = average_response_delay(&result.events).map(round1);
    let longest_gap_hours = gap_stats(&result.events).longest_hours.map(round1);
    KpiStrip {
        total_touchpoints: result.events.len(),
        avg_response_delay_hours,
        avg_response_delay_label: format_hours(avg_response_delay_hours),
        longest_gap_hours,
        longest_gap_label: format_hours(longest_gap_hours),
        intensity_score: summary.engagement_intensity,
        intensity_label: summary.intensity_band.label().to_string(),
    }
}
