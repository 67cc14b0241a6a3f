// Persona catalog listing

use crate::commands::output::print_json;
use journey_sim::JourneySimulator;

/// Print the persona summaries in catalog order.
pub fn list(simulator: &JourneySimulator, pretty: bool) -> anyhow::Result<()> {
    print_json(&simulator.available_personas(), pretty)
}
