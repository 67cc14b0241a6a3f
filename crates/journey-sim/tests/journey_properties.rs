//! Property tests for simulation invariants

use journey_sim::{Actor, JourneySimulator, SimulationResult, Stage};
use proptest::prelude::*;

fn persona_keys() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("hot_lead".to_string()),
        Just("ghosting_lead".to_string()),
        Just("slow_nurture".to_string()),
        Just("impatient_buyer".to_string()),
        Just("research_heavy".to_string()),
        Just("negative_cues".to_string()),
        "[a-z_]{1,12}",
    ]
}

fn simulate(persona: &str, days: u32, seed: u64) -> SimulationResult {
    JourneySimulator::builtin().run(persona, days, Some(seed))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Identical inputs produce identical runs
    #[test]
    fn runs_are_deterministic(persona in persona_keys(), days in 0u32..120, seed in any::<u64>()) {
        prop_assert_eq!(simulate(&persona, days, seed), simulate(&persona, days, seed));
    }

    /// Day counts always land in [7, 90] with one summary per day
    #[test]
    fn day_count_is_bounded(persona in persona_keys(), days in any::<u32>(), seed in any::<u64>()) {
        let result = simulate(&persona, days, seed);
        prop_assert!((7..=90).contains(&result.days));
        prop_assert_eq!(result.stats.system_messages, result.days);
        prop_assert_eq!(result.graphs.stage_timeline.len() as u32, result.days);
        prop_assert_eq!(result.graphs.message_timeline.len() as u32, result.days);
    }

    /// Event days never decrease and stages chain from one event to the next
    #[test]
    fn events_are_ordered_and_chained(persona in persona_keys(), days in 7u32..=90, seed in any::<u64>()) {
        let result = simulate(&persona, days, seed);
        for pair in result.events.windows(2) {
            prop_assert!(pair[0].day_index <= pair[1].day_index);
            prop_assert!(pair[0].elapsed_minutes <= pair[1].elapsed_minutes);
            prop_assert_eq!(pair[0].stage_after, pair[1].stage_before);
        }
        for event in &result.events {
            prop_assert!(event.day_index >= 1 && event.day_index <= result.days);
        }
    }

    /// Converted is never left, and Lost is only left through revival to Warm
    #[test]
    fn absorbing_stages_hold(persona in persona_keys(), seed in any::<u64>()) {
        let result = simulate(&persona, 90, seed);
        for event in &result.events {
            if event.stage_before == Stage::Converted {
                prop_assert_eq!(event.stage_after, Stage::Converted);
                prop_assert_eq!(event.actor, Actor::System);
            }
            if event.stage_before == Stage::Lost && event.stage_after != Stage::Lost {
                prop_assert_eq!(event.stage_after, Stage::Warm);
                prop_assert_eq!(event.actor, Actor::Client);
            }
        }
    }

    /// Counters agree with the event list and the message timeline
    #[test]
    fn message_counts_are_conserved(persona in persona_keys(), days in 7u32..=90, seed in any::<u64>()) {
        let result = simulate(&persona, days, seed);
        let stats = result.stats;
        prop_assert_eq!(
            stats.total_messages,
            stats.client_messages + stats.assistant_messages + stats.system_messages
        );
        prop_assert_eq!(stats.total_messages as usize, result.events.len());

        let timeline_total: u32 = result.graphs.message_timeline.iter().map(|p| p.total()).sum();
        prop_assert_eq!(timeline_total, stats.total_messages);
        let timeline_clients: u32 = result.graphs.message_timeline.iter().map(|p| p.client).sum();
        prop_assert_eq!(timeline_clients, stats.client_messages);
    }

    /// The stage timeline ends on the final stage and indexes stay dense
    #[test]
    fn stage_timeline_is_consistent(persona in persona_keys(), days in 7u32..=90, seed in any::<u64>()) {
        let result = simulate(&persona, days, seed);
        let timeline = &result.graphs.stage_timeline;
        prop_assert_eq!(timeline.last().map(|p| p.stage), Some(result.final_stage));

        let axis = result.graphs.stage_axis();
        for point in timeline {
            prop_assert_eq!(axis[point.stage_index as usize], point.stage);
        }
    }
}
