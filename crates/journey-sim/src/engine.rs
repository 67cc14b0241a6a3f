//! Simulation orchestrator
//!
//! Drives the day loop for one persona and assembles the final result.
//! Each run owns its RNG; the simulator itself holds only immutable data and
//! can be shared across threads.

use crate::compare::{compare, ComparisonReport};
use crate::config::EngineConfig;
use crate::day::{DayEventGenerator, JourneyState};
use crate::error::Result;
use crate::graph::build_conversation_graph;
use crate::persona::{PersonaCatalog, PersonaSummary};
use crate::stage::Stage;
use crate::types::SimulationResult;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Inputs of a single simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Persona to simulate; unknown keys fall back to the catalog default
    pub persona_key: String,
    /// Requested day count, clamped by the engine
    pub days: u32,
    /// Seed for reproducible runs; `None` derives one from the clock
    pub seed: Option<u64>,
}

impl SimulationRequest {
    /// Create a request without a seed.
    pub fn new(persona_key: impl Into<String>, days: u32) -> Self {
        Self {
            persona_key: persona_key.into(),
            days,
            seed: None,
        }
    }

    /// Pin the seed for a reproducible run.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Two personas simulated under the same day count and seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaComparison {
    /// First persona's run
    pub a: SimulationResult,
    /// Second persona's run
    pub b: SimulationResult,
    /// Narrative contrast of the two runs
    pub report: ComparisonReport,
}

/// Persona-driven journey simulator.
#[derive(Debug, Clone)]
pub struct JourneySimulator {
    catalog: Arc<PersonaCatalog>,
    config: EngineConfig,
}

impl JourneySimulator {
    /// Create a simulator over `catalog` with a validated `config`.
    pub fn new(catalog: Arc<PersonaCatalog>, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { catalog, config })
    }

    /// Simulator over the built-in personas with default settings.
    pub fn builtin() -> Self {
        Self {
            catalog: Arc::new(PersonaCatalog::builtin()),
            config: EngineConfig::default(),
        }
    }

    /// Persona catalog in use.
    pub fn catalog(&self) -> &PersonaCatalog {
        &self.catalog
    }

    /// Engine configuration in use.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Personas available for UI population.
    pub fn available_personas(&self) -> Vec<PersonaSummary> {
        self.catalog.available()
    }

    /// Run a simulation described by `request`.
    pub fn run_request(&self, request: &SimulationRequest) -> SimulationResult {
        self.run(&request.persona_key, request.days, request.seed)
    }

    /// Run a simulation for `persona_key` over `days` days.
    ///
    /// Identical `(persona_key, days, Some(seed))` always produce identical
    /// events. Without a seed, one is derived from the current time and
    /// reported in [`SimulationResult::seed`].
    pub fn run(&self, persona_key: &str, days: u32, seed: Option<u64>) -> SimulationResult {
        let seed = seed.unwrap_or_else(wall_clock_seed);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.run_with_rng(persona_key, days, seed, &mut rng)
    }

    /// Run a simulation drawing from a caller-supplied RNG.
    ///
    /// `seed` is only recorded in the result; all randomness comes from `rng`.
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        persona_key: &str,
        days: u32,
        seed: u64,
        rng: &mut R,
    ) -> SimulationResult {
        let clamped = self.config.clamp_days(days);
        if clamped != days {
            debug!(requested = days, clamped, "day count clamped");
        }

        let persona = self.catalog.resolve(persona_key);
        let generator = DayEventGenerator::new(persona, self.config.clock());
        let mut state = JourneyState::new(persona.starting_stage);
        let mut events = Vec::new();

        for day in 1..=clamped {
            generator.run_day(day, &mut state, rng, &mut events);
        }

        let converted = events.iter().any(|e| e.stage_after == Stage::Converted);
        let graphs = build_conversation_graph(&events, clamped);

        info!(
            persona = %persona.key,
            days = clamped,
            seed,
            final_stage = %state.stage,
            converted,
            events = events.len(),
            "simulation complete"
        );

        SimulationResult {
            persona_key: persona.key.clone(),
            persona_label: persona.label.clone(),
            persona_description: persona.description.clone(),
            days: clamped,
            seed,
            starting_stage: persona.starting_stage,
            final_stage: state.stage,
            converted,
            events,
            graphs,
            stats: state.stats,
        }
    }

    /// Run two personas with the same day count and seed and contrast them.
    pub fn compare(
        &self,
        persona_a: &str,
        persona_b: &str,
        days: u32,
        seed: Option<u64>,
    ) -> PersonaComparison {
        let seed = seed.unwrap_or_else(wall_clock_seed);
        let a = self.run(persona_a, days, Some(seed));
        let b = self.run(persona_b, days, Some(seed));
        let report = compare(&a, &b);
        PersonaComparison { a, b, report }
    }
}

impl Default for JourneySimulator {
    fn default() -> Self {
        Self::builtin()
    }
}

fn wall_clock_seed() -> u64 {
    chrono::Utc::now().timestamp().unsigned_abs()
}

/// Run a simulation against the built-in catalog and default settings.
pub fn run_client_simulation(persona_key: &str, days: u32, seed: Option<u64>) -> SimulationResult {
    JourneySimulator::builtin().run(persona_key, days, seed)
}
