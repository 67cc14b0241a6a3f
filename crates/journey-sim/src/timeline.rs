//! UI-facing timeline views over simulation output.

use crate::graph::ConversationGraphs;
use crate::types::{Actor, SimEvent};
use serde::{Deserialize, Serialize};

/// Category of a timeline entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineKind {
    /// Lead wrote something
    ClientMessage,
    /// Assistant followed up
    AssistantReply,
    /// Engine narration
    SystemUpdate,
}

impl TimelineKind {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            TimelineKind::ClientMessage => "Client message",
            TimelineKind::AssistantReply => "Assistant reply",
            TimelineKind::SystemUpdate => "System update",
        }
    }
}

impl From<Actor> for TimelineKind {
    fn from(actor: Actor) -> Self {
        match actor {
            Actor::Client => TimelineKind::ClientMessage,
            Actor::Assistant => TimelineKind::AssistantReply,
            Actor::System => TimelineKind::SystemUpdate,
        }
    }
}

/// One row of the conversation timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// 1-based day
    pub day: u32,
    /// Day rendered for display
    pub day_label: String,
    /// Entry category
    pub kind: TimelineKind,
    /// Category rendered for display
    pub kind_label: String,
    /// Message text
    pub headline: String,
    /// Time label of the event
    pub meta: String,
}

/// One timeline row per event, in event order.
pub fn timeline_entries(events: &[SimEvent]) -> Vec<TimelineEntry> {
    events
        .iter()
        .map(|event| {
            let kind = TimelineKind::from(event.actor);
            TimelineEntry {
                day: event.day_index,
                day_label: event.day_index.to_string(),
                kind,
                kind_label: kind.label().to_string(),
                headline: event.message.clone(),
                meta: event.time_label.clone(),
            }
        })
        .collect()
}

/// Chart point: day on x, stage axis position on y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JourneyPoint {
    /// Day
    pub x: u32,
    /// Stage index
    pub y: u32,
}

/// Stage timeline as chart points.
pub fn journey_points(graphs: &ConversationGraphs) -> Vec<JourneyPoint> {
    graphs
        .stage_timeline
        .iter()
        .map(|p| JourneyPoint {
            x: p.day,
            y: p.stage_index,
        })
        .collect()
}

/// Stage label for each day, aligned with [`journey_points`].
pub fn stage_labels(graphs: &ConversationGraphs) -> Vec<&'static str> {
    graphs.stage_timeline.iter().map(|p| p.stage.label()).collect()
}

/// One reasoning step per event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionStep {
    /// Day of the event
    pub day: u32,
    /// Plain-language account of the step
    pub explanation: String,
}

/// Explain each event as who acted and where the pipeline stands afterwards.
pub fn decision_trail(events: &[SimEvent]) -> Vec<DecisionStep> {
    events
        .iter()
        .map(|event| {
            let actor = match event.actor {
                Actor::Client => "Client activity detected.",
                Actor::Assistant => "Assistant responded in this step.",
                Actor::System => "Daily review recorded.",
            };
            let explanation = if event.changed_stage() {
                format!(
                    "{actor} Stage moved from {} to {}.",
                    event.stage_before, event.stage_after
                )
            } else {
                format!("{actor} Pipeline stage is now {}.", event.stage_after)
            };
            DecisionStep {
                day: event.day_index,
                explanation,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::build_conversation_graph;
    use crate::stage::Stage;

    fn event(day_index: u32, actor: Actor, before: Stage, after: Stage, message: &str) -> SimEvent {
        SimEvent {
            day_index,
            actor,
            stage_before: before,
            stage_after: after,
            message: message.to_string(),
            time_label: format!("Day {day_index}, 09:00 AM"),
            elapsed_minutes: (day_index - 1) * 1440,
        }
    }

    #[test]
    fn test_entries_follow_events() {
        let events = vec![
            event(1, Actor::Client, Stage::Warm, Stage::Active, "Sounds good"),
            event(1, Actor::Assistant, Stage::Active, Stage::Active, "Great"),
            event(1, Actor::System, Stage::Active, Stage::Active, "Day 1: ..."),
        ];
        let entries = timeline_entries(&events);
        let labels: Vec<&str> = entries.iter().map(|e| e.kind_label.as_str()).collect();
        assert_eq!(labels, vec!["Client message", "Assistant reply", "System update"]);
        assert_eq!(entries[0].headline, "Sounds good");
        assert_eq!(entries[0].meta, "Day 1, 09:00 AM");
        assert_eq!(entries[0].day_label, "1");
    }

    #[test]
    fn test_points_and_labels_align() {
        let events = vec![
            event(1, Actor::System, Stage::Warm, Stage::Warm, ""),
            event(2, Actor::Client, Stage::Warm, Stage::Hot, ""),
        ];
        let graphs = build_conversation_graph(&events, 3);
        let points = journey_points(&graphs);
        assert_eq!(
            points,
            vec![
                JourneyPoint { x: 1, y: 0 },
                JourneyPoint { x: 2, y: 1 },
                JourneyPoint { x: 3, y: 1 },
            ]
        );
        assert_eq!(stage_labels(&graphs), vec!["Warm", "Hot", "Hot"]);
    }

    #[test]
    fn test_decision_trail_describes_changes() {
        let events = vec![
            event(2, Actor::Client, Stage::HighIntent, Stage::UnderContract, ""),
            event(2, Actor::System, Stage::UnderContract, Stage::UnderContract, ""),
        ];
        let trail = decision_trail(&events);
        assert_eq!(trail.len(), 2);
        assert_eq!(trail[0].day, 2);
        assert_eq!(
            trail[0].explanation,
            "Client activity detected. Stage moved from High Intent to Under Contract."
        );
        assert!(trail[1].explanation.ends_with("Pipeline stage is now Under Contract."));
    }
}
