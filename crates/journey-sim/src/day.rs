//! Per-day simulation step
//!
//! Each simulated day runs five checks in a fixed order:
//!
//! 1. client reply (advances the stage on a positive signal)
//! 2. drop-off (moves the lead to `Lost`)
//! 3. assistant proactive follow-up (sometimes advances the stage)
//! 4. revival (the only way out of `Lost`, re-entering at `Warm`)
//! 5. system summary (always emitted, never randomized)
//!
//! Steps 1–3 are skipped while the lead sits in `Converted` or `Lost`. The
//! checks are independent coin flips against the persona's probabilities;
//! a lead can reply and drop off on the same day.

use crate::clock::{DayClock, DaySlot};
use crate::persona::PersonaConfig;
use crate::stage::{advance, chance, Stage};
use crate::templates;
use crate::types::{Actor, MessageStats, SimEvent};
use rand::Rng;
use tracing::debug;

/// Probability that a proactive follow-up also nudges the stage forward.
pub const PROACTIVE_ADVANCE_CHANCE: f64 = 0.30;

/// Mutable state threaded through a run by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyState {
    /// Stage the lead currently occupies
    pub stage: Stage,
    /// Running message counters
    pub stats: MessageStats,
}

impl JourneyState {
    /// Fresh state starting at `stage` with zero counters.
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            stats: MessageStats::default(),
        }
    }
}

/// Generates the events of a single simulated day for one persona.
pub struct DayEventGenerator<'a> {
    persona: &'a PersonaConfig,
    clock: DayClock,
}

impl<'a> DayEventGenerator<'a> {
    /// Create a generator for `persona`, stamping events with `clock`.
    pub fn new(persona: &'a PersonaConfig, clock: DayClock) -> Self {
        Self { persona, clock }
    }

    /// Run all five checks for `day`, appending events to `events`.
    pub fn run_day<R: Rng + ?Sized>(
        &self,
        day: u32,
        state: &mut JourneyState,
        rng: &mut R,
        events: &mut Vec<SimEvent>,
    ) {
        let p = self.persona;
        let before = events.len();

        if !state.stage.halts_activity() && chance(rng, p.reply_chance) {
            let message = templates::client_message(state.stage, rng);
            let next = advance(state.stage, true, rng);
            self.emit(day, DaySlot::Client, Actor::Client, next, message, state, events);
        }

        if !state.stage.halts_activity() && chance(rng, p.drop_off_chance) {
            let message = templates::client_message(Stage::Lost, rng);
            self.emit(day, DaySlot::Client, Actor::Client, Stage::Lost, message, state, events);
        }

        if !state.stage.halts_activity() && chance(rng, p.proactive_chance) {
            let message = templates::assistant_message(state.stage, rng);
            let next = if chance(rng, PROACTIVE_ADVANCE_CHANCE) {
                advance(state.stage, true, rng)
            } else {
                state.stage
            };
            self.emit(day, DaySlot::Assistant, Actor::Assistant, next, message, state, events);
        }

        if state.stage == Stage::Lost && chance(rng, p.revive_chance) {
            self.emit(
                day,
                DaySlot::Revival,
                Actor::Client,
                Stage::Warm,
                templates::REVIVAL_MESSAGE,
                state,
                events,
            );
        }

        let summary = templates::system_summary(day, state.stage);
        let stage = state.stage;
        self.emit(day, DaySlot::Summary, Actor::System, stage, &summary, state, events);

        debug!(
            persona = %p.key,
            day,
            stage = %state.stage,
            emitted = events.len() - before,
            "simulated day"
        );
    }

    fn emit(
        &self,
        day: u32,
        slot: DaySlot,
        actor: Actor,
        stage_after: Stage,
        message: &str,
        state: &mut JourneyState,
        events: &mut Vec<SimEvent>,
    ) {
        events.push(SimEvent {
            day_index: day,
            actor,
            stage_before: state.stage,
            stage_after,
            message: message.to_string(),
            time_label: self.clock.label(day, slot),
            elapsed_minutes: self.clock.elapsed_minutes(day, slot),
        });
        state.stats.record(actor);
        state.stage = stage_after;
    }
}
