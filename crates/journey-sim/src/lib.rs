//! Journey Sim - Client Journey Simulation Engine
//!
//! Simulates how a sales lead moves through a pipeline over a number of days
//! under a chosen behavioural persona. A run produces a chronological event
//! stream (client replies, assistant follow-ups, daily system summaries) plus
//! chart-ready time series.
//!
//! - Personas: `PersonaCatalog` with six built-in behaviour profiles
//! - Stages: `Stage` funnel and the `advance` transition rule
//! - Orchestration: `JourneySimulator::run(persona_key, days, seed)`
//! - Views: graphs, timeline rows, KPI summary, insights and comparisons
//!
//! Runs are deterministic: identical `(persona_key, days, seed)` against the
//! same catalog and configuration produce identical events. Each run owns its
//! own `ChaCha8Rng`; the simulator holds no mutable state and is safe to share.
//!
//! # Example
//!
//! ```
//! use journey_sim::{summarize, JourneySimulator};
//!
//! let sim = JourneySimulator::builtin();
//! let result = sim.run("hot_lead", 7, Some(42));
//! assert_eq!(result.days, 7);
//!
//! let summary = summarize(&result);
//! println!("{}", summary.narrative());
//! ```

pub mod clock;
pub mod compare;
pub mod config;
pub mod day;
pub mod engine;
pub mod error;
pub mod graph;
pub mod insights;
pub mod persona;
pub mod stage;
pub mod summary;
pub mod templates;
pub mod timeline;
pub mod types;

// Re-export primary types
pub use compare::{compare, ComparisonReport};
pub use config::{EngineConfig, EngineConfigBuilder, DEFAULT_DAYS, MAX_DAYS, MAX_SUPPORTED_DAYS, MIN_DAYS};
pub use engine::{run_client_simulation, JourneySimulator, PersonaComparison, SimulationRequest};
pub use error::{JourneyError, Result};
pub use graph::{build_conversation_graph, ConversationGraphs, MessageTimelinePoint, StageTimelinePoint};
pub use insights::{build_insights, InsightBlock, JourneyInsights};
pub use persona::{get_available_personas, PersonaCatalog, PersonaConfig, PersonaSummary};
pub use stage::{advance, Stage};
pub use summary::{kpi_strip, summarize, IntensityBand, JourneySummary, KpiStrip, Outcome};
pub use timeline::{decision_trail, journey_points, stage_labels, timeline_entries};
pub use types::{Actor, MessageStats, SimEvent, SimulationResult};
