//! Persona catalog
//!
//! A persona is a named behavioral profile: where the lead starts in the
//! funnel and how likely it is, on any simulated day, to reply, to be
//! followed up proactively, to drop off, and to come back after dropping off.
//!
//! The catalog is an immutable registry built once and handed to the
//! simulator. Lookups by unknown key fall back to the designated default
//! persona with a warning instead of failing.

use crate::error::{JourneyError, Result};
use crate::stage::Stage;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Key of the built-in default persona.
pub const DEFAULT_PERSONA_KEY: &str = "hot_lead";

/// Behavioral profile of one simulated lead archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonaConfig {
    /// Stable identifier, unique within a catalog
    pub key: String,
    /// Display name
    pub label: String,
    /// One-sentence behavior description
    pub description: String,
    /// Stage the lead occupies on day 1
    pub starting_stage: Stage,
    /// Daily probability that the client replies
    pub reply_chance: f64,
    /// Daily probability that the assistant follows up unprompted
    pub proactive_chance: f64,
    /// Daily probability that the client drops off
    pub drop_off_chance: f64,
    /// Daily probability that a lost client comes back
    pub revive_chance: f64,
}

impl PersonaConfig {
    /// Check that every probability lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("reply_chance", self.reply_chance),
            ("proactive_chance", self.proactive_chance),
            ("drop_off_chance", self.drop_off_chance),
            ("revive_chance", self.revive_chance),
        ];
        for (field, value) in fields {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(JourneyError::invalid_probability(&self.key, field, value));
            }
        }
        Ok(())
    }

    /// Public-facing description of this persona.
    pub fn summary(&self) -> PersonaSummary {
        PersonaSummary {
            key: self.key.clone(),
            label: self.label.clone(),
            description: self.description.clone(),
        }
    }
}

/// Persona listing for UI population; probabilities are not exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaSummary {
    /// Persona key
    pub key: String,
    /// Display name
    pub label: String,
    /// Behavior description
    pub description: String,
}

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    default: String,
    #[serde(rename = "persona", default)]
    personas: Vec<PersonaConfig>,
}

/// Immutable registry of personas with a designated fallback entry.
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    personas: IndexMap<String, PersonaConfig>,
    default_key: String,
}

impl PersonaCatalog {
    /// Build a catalog, validating keys, probabilities and the default entry.
    pub fn new(personas: Vec<PersonaConfig>, default_key: impl Into<String>) -> Result<Self> {
        if personas.is_empty() {
            return Err(JourneyError::EmptyCatalog);
        }

        let mut by_key = IndexMap::with_capacity(personas.len());
        for persona in personas {
            persona.validate()?;
            if by_key.contains_key(&persona.key) {
                return Err(JourneyError::DuplicatePersona(persona.key));
            }
            by_key.insert(persona.key.clone(), persona);
        }

        let default_key = default_key.into();
        if !by_key.contains_key(&default_key) {
            return Err(JourneyError::MissingDefaultPersona(default_key));
        }

        Ok(Self {
            personas: by_key,
            default_key,
        })
    }

    /// The six built-in sales personas, defaulting to `hot_lead`.
    pub fn builtin() -> Self {
        let personas = builtin_personas();
        let personas = personas
            .into_iter()
            .map(|p| (p.key.clone(), p))
            .collect();
        Self {
            personas,
            default_key: DEFAULT_PERSONA_KEY.to_string(),
        }
    }

    /// Parse a catalog from TOML (`default = "..."` plus `[[persona]]` tables).
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(input)?;
        Self::new(file.personas, file.default)
    }

    /// Load a catalog from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| JourneyError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Personas for UI population, in catalog order.
    pub fn available(&self) -> Vec<PersonaSummary> {
        self.personas.values().map(PersonaConfig::summary).collect()
    }

    /// Exact lookup without fallback.
    pub fn get(&self, key: &str) -> Option<&PersonaConfig> {
        self.personas.get(key)
    }

    /// True if `key` names a persona in this catalog.
    pub fn contains(&self, key: &str) -> bool {
        self.personas.contains_key(key)
    }

    /// The designated fallback persona.
    pub fn default_persona(&self) -> &PersonaConfig {
        // `new` and `builtin` both guarantee the default key is present
        &self.personas[self.default_key.as_str()]
    }

    /// Key of the designated fallback persona.
    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// Look up a persona, falling back to the default for unknown keys.
    ///
    /// Callers must not assume the returned persona's key matches `key`.
    pub fn resolve(&self, key: &str) -> &PersonaConfig {
        match self.personas.get(key) {
            Some(persona) => persona,
            None => {
                warn!(
                    requested = key,
                    fallback = %self.default_key,
                    "unknown persona; using default"
                );
                self.default_persona()
            }
        }
    }

    /// Number of personas.
    pub fn len(&self) -> usize {
        self.personas.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    /// Iterate personas in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &PersonaConfig> {
        self.personas.values()
    }
}

impl Default for PersonaCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// List the personas of the built-in catalog.
pub fn get_available_personas() -> Vec<PersonaSummary> {
    PersonaCatalog::builtin().available()
}

fn persona(
    key: &str,
    label: &str,
    description: &str,
    starting_stage: Stage,
    [reply_chance, proactive_chance, drop_off_chance, revive_chance]: [f64; 4],
) -> PersonaConfig {
    PersonaConfig {
        key: key.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        starting_stage,
        reply_chance,
        proactive_chance,
        drop_off_chance,
        revive_chance,
    }
}

// Probabilities are [reply, proactive, drop-off, revive].
fn builtin_personas() -> Vec<PersonaConfig> {
    vec![
        persona(
            "hot_lead",
            "Hot Buyer",
            "Highly responsive lead with strong signals, quick replies, and rapid stage progression.",
            Stage::Engaged,
            [0.85, 0.60, 0.05, 0.15],
        ),
        persona(
            "ghosting_lead",
            "Ghosting Lead",
            "Engages early but goes silent for long stretches. Assistant must follow nurture cadences.",
            Stage::Warm,
            [0.25, 0.65, 0.12, 0.30],
        ),
        persona(
            "slow_nurture",
            "Slow Nurture Lead",
            "Replies every few days with smaller messages, moving slowly through the funnel.",
            Stage::New,
            [0.40, 0.50, 0.06, 0.25],
        ),
        persona(
            "impatient_buyer",
            "Impatient Buyer",
            "Demands fast answers, sends long and urgent messages, escalates quickly.",
            Stage::Engaged,
            [0.80, 0.70, 0.03, 0.12],
        ),
        persona(
            "research_heavy",
            "Research-Heavy Buyer",
            "Provides detailed replies, asks many questions, and takes time to evaluate options.",
            Stage::Inquiry,
            [0.55, 0.55, 0.05, 0.15],
        ),
        persona(
            "negative_cues",
            "Negative-Cues Lead",
            "Short replies, longer delays, subtle hints of disengagement or uncertainty.",
            Stage::Warm,
            [0.30, 0.45, 0.15, 0.10],
        ),
    ]
}
