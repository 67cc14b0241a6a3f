//! Simulation output types

use crate::graph::ConversationGraphs;
use crate::stage::Stage;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    /// The simulated lead
    Client,
    /// The sales assistant
    Assistant,
    /// Engine narration
    System,
}

impl Actor {
    /// Lowercase name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Actor::Client => "client",
            Actor::Assistant => "assistant",
            Actor::System => "system",
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One atomic occurrence within a simulated day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimEvent {
    /// 1-based day index
    pub day_index: u32,
    /// Who produced the event
    pub actor: Actor,
    /// Stage before the event
    pub stage_before: Stage,
    /// Stage after the event
    pub stage_after: Stage,
    /// Templated message text
    pub message: String,
    /// Human-readable day and time
    pub time_label: String,
    /// Minutes since the start of day 1
    pub elapsed_minutes: u32,
}

impl SimEvent {
    /// True if the event moved the lead to a different stage.
    pub fn changed_stage(&self) -> bool {
        self.stage_before != self.stage_after
    }
}

/// Per-actor message counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStats {
    /// Client events
    pub client_messages: u32,
    /// Assistant events
    pub assistant_messages: u32,
    /// System events
    pub system_messages: u32,
    /// Sum of the three counters
    pub total_messages: u32,
}

impl MessageStats {
    /// Count one event from `actor`.
    pub fn record(&mut self, actor: Actor) {
        match actor {
            Actor::Client => self.client_messages += 1,
            Actor::Assistant => self.assistant_messages += 1,
            Actor::System => self.system_messages += 1,
        }
        self.total_messages += 1;
    }

    /// Counter for a single actor.
    pub fn for_actor(&self, actor: Actor) -> u32 {
        match actor {
            Actor::Client => self.client_messages,
            Actor::Assistant => self.assistant_messages,
            Actor::System => self.system_messages,
        }
    }
}

/// Complete output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Key of the persona actually simulated (after fallback)
    pub persona_key: String,
    /// Persona display name
    pub persona_label: String,
    /// Persona description
    pub persona_description: String,
    /// Day count after clamping
    pub days: u32,
    /// Seed that drove the run
    pub seed: u64,
    /// Stage on day 1
    pub starting_stage: Stage,
    /// Stage after the last simulated day
    pub final_stage: Stage,
    /// True if any event reached `Converted`
    pub converted: bool,
    /// Events in day order
    pub events: Vec<SimEvent>,
    /// Chart-ready time series
    pub graphs: ConversationGraphs,
    /// Message counters
    pub stats: MessageStats,
}

impl SimulationResult {
    /// Events emitted on `day`.
    pub fn events_on(&self, day: u32) -> impl Iterator<Item = &SimEvent> {
        self.events.iter().filter(move |e| e.day_index == day)
    }

    /// Events emitted by `actor`.
    pub fn events_by(&self, actor: Actor) -> impl Iterator<Item = &SimEvent> {
        self.events.iter().filter(move |e| e.actor == actor)
    }

    /// True if the final stage is `Lost`.
    pub fn ended_lost(&self) -> bool {
        self.final_stage == Stage::Lost
    }
}
