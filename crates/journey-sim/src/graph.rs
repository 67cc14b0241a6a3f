//! Conversation graph builder
//!
//! Turns the finished event list into two per-day series for charting:
//! the stage the lead was in at the end of each day, and how many messages
//! each actor produced that day.

use crate::stage::Stage;
use crate::types::{Actor, SimEvent};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Stage occupied at the end of one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTimelinePoint {
    /// 1-based day
    pub day: u32,
    /// Stage after the day's last event (carried forward on silent days)
    pub stage: Stage,
    /// Chart axis position, assigned in first-seen order
    pub stage_index: u32,
}

/// Per-actor message counts for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTimelinePoint {
    /// 1-based day
    pub day: u32,
    /// Client events that day
    pub client: u32,
    /// Assistant events that day
    pub assistant: u32,
    /// System events that day
    pub system: u32,
}

impl MessageTimelinePoint {
    fn record(&mut self, actor: Actor) {
        match actor {
            Actor::Client => self.client += 1,
            Actor::Assistant => self.assistant += 1,
            Actor::System => self.system += 1,
        }
    }

    /// Sum across actors.
    pub fn total(&self) -> u32 {
        self.client + self.assistant + self.system
    }
}

/// Both chart series for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationGraphs {
    /// One entry per day
    pub stage_timeline: Vec<StageTimelinePoint>,
    /// One entry per day
    pub message_timeline: Vec<MessageTimelinePoint>,
}

impl ConversationGraphs {
    /// Distinct stages in axis order (index `i` holds `stage_index == i`).
    pub fn stage_axis(&self) -> Vec<Stage> {
        let mut axis = Vec::new();
        for point in &self.stage_timeline {
            if !axis.contains(&point.stage) {
                axis.push(point.stage);
            }
        }
        axis
    }
}

/// Build both series over days `1..=days`.
///
/// The stage is sticky: a day without events repeats the previous day's
/// stage, starting from `New` before any event is seen. `stage_index`
/// follows discovery order, not canonical funnel order.
pub fn build_conversation_graph(events: &[SimEvent], days: u32) -> ConversationGraphs {
    let mut last_stage_by_day: HashMap<u32, Stage> = HashMap::new();
    let mut messages: Vec<MessageTimelinePoint> = (1..=days)
        .map(|day| MessageTimelinePoint {
            day,
            ..MessageTimelinePoint::default()
        })
        .collect();

    for event in events {
        if event.day_index == 0 || event.day_index > days {
            continue;
        }
        last_stage_by_day.insert(event.day_index, event.stage_after);
        messages[(event.day_index - 1) as usize].record(event.actor);
    }

    let mut stage_timeline = Vec::with_capacity(days as usize);
    let mut discovered: Vec<Stage> = Vec::new();
    let mut last_stage = Stage::New;

    for day in 1..=days {
        if let Some(stage) = last_stage_by_day.get(&day) {
            last_stage = *stage;
        }
        let stage_index = match discovered.iter().position(|s| *s == last_stage) {
            Some(idx) => idx,
            None => {
                discovered.push(last_stage);
                discovered.len() - 1
            }
        };
        stage_timeline.push(StageTimelinePoint {
            day,
            stage: last_stage,
            stage_index: stage_index as u32,
        });
    }

    ConversationGraphs {
        stage_timeline,
        message_timeline: messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(day_index: u32, actor: Actor, before: Stage, after: Stage) -> SimEvent {
        SimEvent {
            day_index,
            actor,
            stage_before: before,
            stage_after: after,
            message: String::new(),
            time_label: String::new(),
            elapsed_minutes: 0,
        }
    }

    #[test]
    fn test_silent_days_carry_stage_forward() {
        let events = vec![
            event(1, Actor::Client, Stage::Warm, Stage::Active),
            event(4, Actor::System, Stage::Hot, Stage::Hot),
        ];
        let graphs = build_conversation_graph(&events, 5);
        let stages: Vec<Stage> = graphs.stage_timeline.iter().map(|p| p.stage).collect();
        assert_eq!(
            stages,
            vec![Stage::Active, Stage::Active, Stage::Active, Stage::Hot, Stage::Hot]
        );
    }

    #[test]
    fn test_stage_index_follows_discovery_order() {
        // Hot is seen before Warm, so it gets the lower index
        let events = vec![
            event(1, Actor::System, Stage::Hot, Stage::Hot),
            event(2, Actor::Client, Stage::Hot, Stage::Lost),
            event(3, Actor::Client, Stage::Lost, Stage::Warm),
            event(4, Actor::Client, Stage::Warm, Stage::Hot),
        ];
        let graphs = build_conversation_graph(&events, 4);
        let indices: Vec<u32> = graphs.stage_timeline.iter().map(|p| p.stage_index).collect();
        assert_eq!(indices, vec![0, 1, 2, 0]);
        assert_eq!(graphs.stage_axis(), vec![Stage::Hot, Stage::Lost, Stage::Warm]);
    }

    #[test]
    fn test_empty_leading_days_default_to_new() {
        let events = vec![event(3, Actor::Client, Stage::Inquiry, Stage::Engaged)];
        let graphs = build_conversation_graph(&events, 3);
        assert_eq!(graphs.stage_timeline[0].stage, Stage::New);
        assert_eq!(graphs.stage_timeline[0].stage_index, 0);
        assert_eq!(graphs.stage_timeline[2].stage, Stage::Engaged);
        assert_eq!(graphs.stage_timeline[2].stage_index, 1);
    }

    #[test]
    fn test_message_counts_per_day() {
        let events = vec![
            event(1, Actor::Client, Stage::Warm, Stage::Warm),
            event(1, Actor::Assistant, Stage::Warm, Stage::Warm),
            event(1, Actor::System, Stage::Warm, Stage::Warm),
            event(3, Actor::System, Stage::Warm, Stage::Warm),
        ];
        let graphs = build_conversation_graph(&events, 3);
        assert_eq!(graphs.message_timeline.len(), 3);
        assert_eq!(
            graphs.message_timeline[0],
            MessageTimelinePoint {
                day: 1,
                client: 1,
                assistant: 1,
                system: 1
            }
        );
        assert_eq!(graphs.message_timeline[1].total(), 0);
        assert_eq!(graphs.message_timeline[2].system, 1);
    }

    #[test]
    fn test_last_event_of_day_wins() {
        let events = vec![
            event(1, Actor::Client, Stage::Warm, Stage::Active),
            event(1, Actor::Client, Stage::Active, Stage::Lost),
        ];
        let graphs = build_conversation_graph(&events, 1);
        assert_eq!(graphs.stage_timeline[0].stage, Stage::Lost);
    }
}
