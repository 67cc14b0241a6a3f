// Single-persona simulation

use crate::commands::output::print_json;
use journey_sim::{
    build_insights, kpi_strip, summarize, JourneyInsights, JourneySimulator, JourneySummary, KpiStrip,
    SimulationResult,
};
use serde::Serialize;

#[derive(Serialize)]
struct RunOutput {
    simulation: SimulationResult,
    summary: JourneySummary,
    kpi_strip: KpiStrip,
    narrative: String,
    insights: JourneyInsights,
}

/// Simulate `persona` and print the result with its summary and insights.
pub fn run(
    simulator: &JourneySimulator,
    persona: &str,
    days: u32,
    seed: Option<u64>,
    pretty: bool,
) -> anyhow::Result<()> {
    let simulation = simulator.run(persona, days, seed);
    let summary = summarize(&simulation);
    let insights = build_insights(&simulation, &summary);
    let strip = kpi_strip(&simulation, &summary);

    let output = RunOutput {
        kpi_strip: strip,
        narrative: summary.narrative(),
        simulation,
        summary,
        insights,
    };
    print_json(&output, pretty)
}
