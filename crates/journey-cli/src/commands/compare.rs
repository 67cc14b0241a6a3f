// Two-persona comparison

use crate::commands::output::print_json;
use journey_sim::{summarize, ComparisonReport, JourneySimulator, JourneySummary};
use serde::Serialize;

#[derive(Serialize)]
struct CompareOutput {
    seed: u64,
    days: u32,
    summary_a: JourneySummary,
    summary_b: JourneySummary,
    report: ComparisonReport,
}

/// Simulate both personas under one seed and print the comparison.
pub fn run(
    simulator: &JourneySimulator,
    persona_a: &str,
    persona_b: &str,
    days: u32,
    seed: Option<u64>,
    pretty: bool,
) -> anyhow::Result<()> {
    let comparison = simulator.compare(persona_a, persona_b, days, seed);
    let output = CompareOutput {
        seed: comparison.a.seed,
        days: comparison.a.days,
        summary_a: summarize(&comparison.a),
        summary_b: summarize(&comparison.b),
        report: comparison.report,
    };
    print_json(&output, pretty)
}
