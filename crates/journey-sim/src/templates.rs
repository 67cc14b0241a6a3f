//! Message template bank
//!
//! Candidate utterances per stage and actor. Selection is a weighted random
//! choice over the stage's bank, so every stage must own a non-empty bank
//! with positive total weight. The daily system summary is not randomized.

use crate::stage::Stage;
use rand::seq::SliceRandom;
use rand::Rng;

/// A candidate message with its relative selection weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Utterance {
    /// Message text
    pub text: &'static str,
    /// Relative weight (higher is more likely)
    pub weight: u32,
}

/// Expands `(text, weight)` pairs into a promotable `&'static [Utterance]`.
macro_rules! bank {
    ($(($text:expr, $weight:expr)),+ $(,)?) => {
        &[$(Utterance { text: $text, weight: $weight }),+]
    };
}

/// Message emitted when a lost lead comes back.
pub const REVIVAL_MESSAGE: &str = "Replied after going quiet, revived.";

/// Client-side candidates for `stage`.
pub fn client_lines(stage: Stage) -> &'static [Utterance] {
    match stage {
        Stage::New => bank![
            ("Hi, I saw one of your listings and wanted more details.", 2),
            ("I'm early in the process and just exploring options.", 1),
        ],
        Stage::Inquiry => bank![
            ("I'm curious, can you help me compare some options?", 1),
            ("What would you recommend for my situation?", 1),
        ],
        Stage::Engaged => bank![
            ("Thanks, can we dig deeper on neighborhoods?", 1),
            ("This is useful. Could you refine options for my budget?", 1),
        ],
        Stage::Warm => bank![
            ("A couple of these look promising. What should I focus on?", 2),
            ("Can you break down the tradeoffs clearly?", 1),
            ("Not sure yet, let me think about it over the weekend.", 1),
        ],
        Stage::Active => bank![
            ("I'm close to deciding. What's realistic next?", 1),
            ("This week works, what's the next step?", 1),
        ],
        Stage::Hot => bank![
            ("I'm ready to move if the numbers work.", 2),
            ("This looks strong, what would you do in my position?", 1),
            ("The price is the last thing holding me back.", 1),
        ],
        Stage::HighIntent => bank![
            ("Let's move forward. Can we prep next steps?", 1),
            ("This aligns well. Let's discuss numbers plus timing.", 1),
        ],
        Stage::UnderContract => bank![
            ("Paperwork is signed on my side. What's left before closing?", 1),
            ("Can you confirm the remaining dates on the contract?", 1),
        ],
        Stage::Converted | Stage::Won => bank![
            ("Appreciate everything, this feels like the right move.", 1),
            ("Thanks for the guidance, I'm moving ahead.", 1),
        ],
        Stage::Lost => bank![
            ("Thanks, I'm going to pause for now.", 1),
            ("I've decided to go another direction.", 1),
        ],
    }
}

/// Assistant-side candidates for `stage`.
pub fn assistant_lines(stage: Stage) -> &'static [Utterance] {
    match stage {
        Stage::New => bank![
            ("Here's a quick overview of the process plus a few tailored options.", 1),
            ("I've prepared a shortlist based on what most buyers like you prefer.", 1),
        ],
        Stage::Inquiry => bank![
            ("Here are three clear paths that could fit your needs.", 1),
            ("I've mapped pros and cons so you can compare quickly.", 1),
        ],
        Stage::Engaged => bank![
            ("Based on your feedback, I refined the best-matching options.", 2),
            ("Here's a cleaner breakdown of the strongest fits.", 1),
        ],
        Stage::Warm => bank![
            ("Here's a focused shortlist to make decisions easier.", 1),
            ("I've summarized the best next actions.", 1),
        ],
        Stage::Active => bank![
            ("Here's a plan for the next 7 to 10 days.", 1),
            ("Timing-wise, this is the window where decisions work best.", 1),
        ],
        Stage::Hot => bank![
            ("Here's a numbers and timing breakdown.", 1),
            ("Based on your criteria, here's the move I'd prioritize.", 2),
        ],
        Stage::HighIntent => bank![
            ("Here's a precise breakdown of terms so you can commit comfortably.", 1),
            ("I've structured a path that balances risk, timing, and upside.", 1),
        ],
        Stage::UnderContract => bank![
            ("All contract milestones are tracked; I'll flag anything that needs you.", 1),
            ("Here's the checklist to get from signature to closing.", 1),
        ],
        Stage::Converted | Stage::Won => bank![
            ("I'll keep everything organized in the background.", 1),
            ("Here are the next important dates and milestones.", 1),
        ],
        Stage::Lost => bank![
            ("If timing changes, I can resume instantly from where we left off.", 1),
            ("I'll track new opportunities quietly in case things reopen.", 1),
        ],
    }
}

/// Weighted random choice over a template bank.
///
/// # Panics
///
/// Panics if `lines` is empty or its weights sum to zero. Every built-in bank
/// is non-empty with positive weights, so this indicates a broken bank.
#[allow(clippy::expect_used)] // An unusable static bank is a defect, not an input error
pub fn pick<R: Rng + ?Sized>(lines: &'static [Utterance], rng: &mut R) -> &'static str {
    lines
        .choose_weighted(rng, |u| u.weight)
        .map(|u| u.text)
        .expect("template bank must be non-empty with positive total weight")
}

/// Pick a client message appropriate for `stage`.
pub fn client_message<R: Rng + ?Sized>(stage: Stage, rng: &mut R) -> &'static str {
    pick(client_lines(stage), rng)
}

/// Pick an assistant message appropriate for `stage`.
pub fn assistant_message<R: Rng + ?Sized>(stage: Stage, rng: &mut R) -> &'static str {
    pick(assistant_lines(stage), rng)
}

/// Deterministic end-of-day narration for `stage`.
pub fn system_summary(day: u32, stage: Stage) -> String {
    match stage {
        Stage::Converted | Stage::Won => {
            format!("Day {day}: Lead converted; assistant will maintain structured follow-through.")
        }
        Stage::Lost => {
            format!("Day {day}: Lead is Lost; assistant remains on light-touch watch.")
        }
        Stage::Active | Stage::Hot | Stage::HighIntent | Stage::UnderContract => format!(
            "Day {day}: Lead is highly engaged; focused, time-sensitive communication recommended."
        ),
        Stage::Engaged | Stage::Warm => {
            format!("Day {day}: Lead warming steadily with consistent engagement.")
        }
        Stage::New | Stage::Inquiry => {
            format!("Day {day}: Early-stage nurture continuing; assistant keeps friction low.")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_every_bank_is_usable() {
        for stage in Stage::ALL {
            for bank in [client_lines(stage), assistant_lines(stage)] {
                assert!(!bank.is_empty(), "{stage} has an empty bank");
                assert!(bank.iter().map(|u| u.weight).sum::<u32>() > 0);
            }
        }
    }

    #[test]
    fn test_pick_stays_within_bank() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for stage in Stage::ALL {
            for _ in 0..20 {
                let text = client_message(stage, &mut rng);
                assert!(client_lines(stage).iter().any(|u| u.text == text));
                let text = assistant_message(stage, &mut rng);
                assert!(assistant_lines(stage).iter().any(|u| u.text == text));
            }
        }
    }

    #[test]
    fn test_weights_bias_selection() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let heavy = client_lines(Stage::New)[0].text;
        let hits = (0..3000)
            .filter(|_| client_message(Stage::New, &mut rng) == heavy)
            .count();
        // Weight 2 of 3 total
        assert!((1800..2200).contains(&hits), "hits = {hits}");
    }

    #[test]
    #[should_panic(expected = "template bank")]
    fn test_pick_panics_on_empty_bank() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        pick(&[], &mut rng);
    }

    #[test]
    fn test_system_summary_buckets() {
        assert!(system_summary(3, Stage::Converted).contains("converted"));
        assert!(system_summary(3, Stage::Lost).contains("Lost"));
        assert!(system_summary(3, Stage::UnderContract).contains("highly engaged"));
        assert!(system_summary(3, Stage::Warm).contains("warming"));
        assert!(system_summary(3, Stage::New).contains("Early-stage"));
        assert!(system_summary(12, Stage::Hot).starts_with("Day 12:"));
    }
}
