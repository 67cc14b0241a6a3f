//! Loading persona catalogs and engine configuration from TOML files

use journey_sim::{EngineConfig, JourneyError, JourneySimulator, PersonaCatalog, Stage};
use std::io::Write;
use std::sync::Arc;

const CATALOG: &str = r#"
default = "steady"

[[persona]]
key = "steady"
label = "Steady Lead"
description = "Replies most days without drama."
starting_stage = "Inquiry"
reply_chance = 0.6
proactive_chance = 0.5
drop_off_chance = 0.02
revive_chance = 0.2

[[persona]]
key = "silent"
label = "Silent Lead"
description = "Never answers."
starting_stage = "New"
reply_chance = 0.0
proactive_chance = 0.0
drop_off_chance = 0.0
revive_chance = 0.0
"#;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn custom_catalog_drives_simulation() {
    let file = write_temp(CATALOG);
    let catalog = PersonaCatalog::load_from_file(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.default_key(), "steady");

    let keys: Vec<String> = catalog.available().into_iter().map(|p| p.key).collect();
    assert_eq!(keys, vec!["steady", "silent"]);

    let sim = JourneySimulator::new(Arc::new(catalog), EngineConfig::default()).unwrap();
    let silent = sim.run("silent", 10, Some(3));
    assert_eq!(silent.events.len(), 10);
    assert_eq!(silent.final_stage, Stage::New);
    assert!(!silent.converted);

    let fallback = sim.run("hot_lead", 10, Some(3));
    assert_eq!(fallback.persona_key, "steady");
}

#[test]
fn config_file_changes_bounds_and_clock() {
    let file = write_temp("min_days = 3\nmax_days = 14\ndefault_days = 7\nday_start = \"08:30:00\"\n");
    let config = EngineConfig::load_from_file(file.path()).unwrap();
    let sim = JourneySimulator::new(Arc::new(PersonaCatalog::builtin()), config).unwrap();

    assert_eq!(sim.run("hot_lead", 1, Some(1)).days, 3);
    assert_eq!(sim.run("hot_lead", 30, Some(1)).days, 14);

    let result = sim.run("hot_lead", 3, Some(1));
    let summary = result.events_by(journey_sim::Actor::System).next().unwrap();
    assert_eq!(summary.time_label, "Day 1, 04:30 AM");
}

#[test]
fn invalid_catalogs_are_rejected() {
    let bad_probability = CATALOG.replace("reply_chance = 0.6", "reply_chance = 1.5");
    assert!(matches!(
        PersonaCatalog::from_toml_str(&bad_probability),
        Err(JourneyError::InvalidProbability { .. })
    ));

    let duplicate = CATALOG.replace("key = \"silent\"", "key = \"steady\"");
    assert!(matches!(
        PersonaCatalog::from_toml_str(&duplicate),
        Err(JourneyError::DuplicatePersona(_))
    ));

    let missing_default = CATALOG.replace("default = \"steady\"", "default = \"nobody\"");
    assert!(matches!(
        PersonaCatalog::from_toml_str(&missing_default),
        Err(JourneyError::MissingDefaultPersona(_))
    ));

    assert!(matches!(
        PersonaCatalog::from_toml_str("default = \"x\""),
        Err(JourneyError::EmptyCatalog)
    ));

    assert!(matches!(
        PersonaCatalog::load_from_file(std::path::Path::new("/nonexistent/catalog.toml")),
        Err(JourneyError::Io { .. })
    ));
}
