//! Core data models used throughout arcanum.
//!
//! Row types mirror the tables created by [`crate::migrate`] and serialize
//! directly into API responses. The enumerations validate user-supplied
//! filter values before they reach SQL.

use serde::Serialize;
use sqlx::types::Json;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::LookupError;

// ============ Enumerations ============

/// The two card classes of a tarot deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Arcana {
    #[serde(rename = "Major Arcana")]
    Major,
    #[serde(rename = "Minor Arcana")]
    Minor,
}

impl Arcana {
    pub fn as_str(self) -> &'static str {
        match self {
            Arcana::Major => "Major Arcana",
            Arcana::Minor => "Minor Arcana",
        }
    }
}

impl FromStr for Arcana {
    type Err = LookupError;

    /// Accepts the stored label ("Major Arcana") or the bare class ("major").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "major arcana" | "major" => Ok(Arcana::Major),
            "minor arcana" | "minor" => Ok(Arcana::Minor),
            _ => Err(LookupError::validation(format!(
                "Invalid arcana '{}'. Valid values: Major Arcana, Minor Arcana",
                s
            ))),
        }
    }
}

/// Interpretive tradition providing a parallel set of card descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TarotSystem {
    Rws,
    Thoth,
    GoldenDawn,
    Marseille,
}

impl TarotSystem {
    pub const ALL: [TarotSystem; 4] = [
        TarotSystem::Rws,
        TarotSystem::Thoth,
        TarotSystem::GoldenDawn,
        TarotSystem::Marseille,
    ];

    /// Name stored in `system_descriptions.system_name`.
    pub fn as_str(self) -> &'static str {
        match self {
            TarotSystem::Rws => "RWS",
            TarotSystem::Thoth => "Thoth",
            TarotSystem::GoldenDawn => "Golden Dawn",
            TarotSystem::Marseille => "Marseille",
        }
    }

    pub fn full_name(self) -> &'static str {
        match self {
            TarotSystem::Rws => "Rider-Waite-Smith",
            TarotSystem::Thoth => "Thoth (Crowley-Harris)",
            TarotSystem::GoldenDawn => "Hermetic Order of the Golden Dawn",
            TarotSystem::Marseille => "Tarot de Marseille",
        }
    }

    fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Serialize for TarotSystem {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for TarotSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TarotSystem {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TarotSystem::ALL
            .into_iter()
            .find(|system| system.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                LookupError::validation(format!(
                    "Invalid system name. Valid systems: {}",
                    TarotSystem::valid_names()
                ))
            })
    }
}

/// Ritual difficulty, ordered from easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        }
    }

    pub fn rank(self) -> u8 {
        self as u8 + 1
    }
}

impl FromStr for Difficulty {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                LookupError::validation(format!(
                    "Invalid difficulty '{}'. Valid values: Beginner, Intermediate, Advanced, Expert",
                    s
                ))
            })
    }
}

/// Classical element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn as_str(self) -> &'static str {
        match self {
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Air => "Air",
            Element::Water => "Water",
        }
    }

    pub fn qualities(self) -> &'static str {
        match self {
            Element::Fire => "Hot, Dry - Active, energetic, passionate",
            Element::Earth => "Cold, Dry - Stable, practical, material",
            Element::Air => "Hot, Moist - Intellectual, communicative, social",
            Element::Water => "Cold, Moist - Emotional, intuitive, receptive",
        }
    }

    pub fn tarot_suit(self) -> Suit {
        match self {
            Element::Fire => Suit::Wands,
            Element::Water => Suit::Cups,
            Element::Air => Suit::Swords,
            Element::Earth => Suit::Pentacles,
        }
    }
}

impl FromStr for Element {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Element::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                LookupError::validation(format!(
                    "Invalid element '{}'. Valid values: Fire, Earth, Air, Water",
                    s
                ))
            })
    }
}

/// Astrological modality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];

    pub fn as_str(self) -> &'static str {
        match self {
            Modality::Cardinal => "Cardinal",
            Modality::Fixed => "Fixed",
            Modality::Mutable => "Mutable",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Modality::Cardinal => "Initiating, action-oriented, beginning new cycles",
            Modality::Fixed => "Sustaining, stable, maintaining and concentrating energy",
            Modality::Mutable => "Adapting, flexible, transitioning between cycles",
        }
    }
}

impl FromStr for Modality {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Modality::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                LookupError::validation(format!(
                    "Invalid modality '{}'. Valid values: Cardinal, Fixed, Mutable",
                    s
                ))
            })
    }
}

/// Minor Arcana suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    pub fn as_str(self) -> &'static str {
        match self {
            Suit::Wands => "Wands",
            Suit::Cups => "Cups",
            Suit::Swords => "Swords",
            Suit::Pentacles => "Pentacles",
        }
    }

    pub fn element(self) -> Element {
        match self {
            Suit::Wands => Element::Fire,
            Suit::Cups => Element::Water,
            Suit::Swords => Element::Air,
            Suit::Pentacles => Element::Earth,
        }
    }
}

impl FromStr for Suit {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Suit::ALL
            .into_iter()
            .find(|suit| suit.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                LookupError::validation(format!(
                    "Invalid suit '{}'. Valid values: Wands, Cups, Swords, Pentacles",
                    s
                ))
            })
    }
}

// ============ Tarot ============

/// A tarot card as stored, plus its keywords and (optionally) its
/// per-system descriptions.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Card {
    #[serde(skip)]
    pub id: i64,
    pub number: i64,
    pub name: String,
    pub arcana: String,
    pub suit: Option<String>,
    pub element: Option<String>,
    pub astrology: Option<String>,
    pub upright_meaning: String,
    pub reversed_meaning: String,
    pub description: String,
    pub hebrew_letter: Option<String>,
    pub tree_of_life_path: Option<String>,
    pub sephiroth: Option<String>,
    pub astrological_decan: Option<String>,
    pub musical_note: Option<String>,
    pub color_primary: Option<String>,
    pub color_secondary: Option<String>,
    pub gemstone: Option<String>,
    pub herb: Option<String>,
    pub key_symbols: Option<String>,
    #[sqlx(skip)]
    pub keywords: Vec<String>,
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_descriptions: Option<BTreeMap<String, SystemDescription>>,
}

impl Card {
    pub fn is_major(&self) -> bool {
        self.arcana == Arcana::Major.as_str()
    }
}

/// One tradition's reading of a card.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SystemDescription {
    pub description: Option<String>,
    pub upright_meaning: Option<String>,
    pub reversed_meaning: Option<String>,
    pub key_imagery: Option<String>,
    pub divinatory_meaning: Option<String>,
    pub esoteric_meaning: Option<String>,
}

// ============ Qabalah ============

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Sephirah {
    pub number: i64,
    pub name: String,
    pub name_hebrew: String,
    pub meaning: String,
    pub divine_name: String,
    pub archangel: String,
    pub angelic_order: String,
    pub planet: String,
    pub mundane_chakra: String,
    pub spiritual_experience: String,
    pub virtue: String,
    pub vice: Option<String>,
    pub color_atziluth: String,
    pub color_briah: String,
    pub color_yetzirah: String,
    pub color_assiah: String,
    pub tarot_association: String,
    pub description: String,
}

/// A Path joined with its card and the names of the Sephiroth it connects.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PathView {
    pub number: i64,
    pub name: String,
    pub hebrew_letter: String,
    pub hebrew_letter_meaning: String,
    pub connects_from: i64,
    pub connects_to: i64,
    pub element: Option<String>,
    pub planet: Option<String>,
    pub sign: Option<String>,
    pub color: String,
    pub description: String,
    pub card_number: Option<i64>,
    pub card_name: Option<String>,
    pub from_sephirah_name: Option<String>,
    pub to_sephirah_name: Option<String>,
}

// ============ Astrology ============

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Planet {
    #[serde(skip)]
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub day_of_week: String,
    pub metal: String,
    pub color: String,
    pub gemstone: String,
    pub sephiroth_number: Option<i64>,
    pub sephiroth_name: Option<String>,
    pub rules_signs: Json<Vec<String>>,
    pub exalted_in: Option<String>,
    pub detriment_in: Option<String>,
    pub fall_in: Option<String>,
    pub quality: String,
    pub tarot_association: String,
    pub magical_powers: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ZodiacSign {
    #[serde(skip)]
    pub id: i64,
    pub name: String,
    pub symbol: String,
    pub element: String,
    pub modality: String,
    pub ruling_planet: String,
    pub ruling_planet_symbol: Option<String>,
    pub ruling_day: Option<String>,
    pub exalted_planet: Option<String>,
    pub detriment_planet: Option<String>,
    pub fall_planet: Option<String>,
    pub polarity: String,
    pub house_number: i64,
    pub body_part: String,
    pub tarot_association: String,
    pub dates_start: String,
    pub dates_end: String,
    pub keywords: Json<Vec<String>>,
    pub description: String,
}

/// Compact sign reference used inside element listings and the resolver.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SignByElement {
    pub name: String,
    pub symbol: String,
    pub modality: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SignByModality {
    pub name: String,
    pub symbol: String,
    pub element: String,
}

// ============ Rituals ============

/// Every ritual column except the long-form practice text.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RitualOverview {
    pub id: i64,
    pub name: String,
    pub abbreviation: String,
    pub tradition: String,
    pub category: String,
    pub purpose: String,
    pub difficulty: String,
    pub duration_minutes: i64,
    pub elemental_focus: Option<String>,
    pub sephiroth_focus: Option<String>,
    pub planetary_focus: Option<String>,
    pub timing_notes: Option<String>,
    pub benefits: Option<String>,
    pub warnings: Option<String>,
    pub source: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Ritual {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub overview: RitualOverview,
    pub requires_tools: Json<Vec<String>>,
    pub instructions: String,
    pub visualization: Option<String>,
    pub words_of_power: Option<String>,
}

/// A ritual with or without its practice text, as chosen by the caller.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RitualEntry {
    Full(Ritual),
    Overview(RitualOverview),
}

impl RitualEntry {
    pub fn new(ritual: Ritual, include_instructions: bool) -> Self {
        if include_instructions {
            RitualEntry::Full(ritual)
        } else {
            RitualEntry::Overview(ritual.overview)
        }
    }
}

/// Row of the practice progression guide.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PracticeStep {
    pub id: i64,
    pub name: String,
    pub abbreviation: String,
    pub difficulty: String,
    pub duration_minutes: i64,
    pub purpose: String,
}

/// A distinct value (tradition, category, system) and how many rows carry it.
#[derive(Debug, Clone, Serialize)]
pub struct ValueCount {
    pub name: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_parse_is_case_insensitive() {
        assert_eq!("golden dawn".parse::<TarotSystem>().unwrap(), TarotSystem::GoldenDawn);
        assert_eq!("RWS".parse::<TarotSystem>().unwrap(), TarotSystem::Rws);
        let err = "InvalidSystem".parse::<TarotSystem>().unwrap_err();
        assert!(matches!(err, LookupError::Validation { .. }));
        assert!(err.to_string().contains("Golden Dawn"));
    }

    #[test]
    fn test_difficulty_rank_order() {
        assert!(Difficulty::Beginner < Difficulty::Expert);
        assert_eq!(Difficulty::Beginner.rank(), 1);
        assert_eq!(Difficulty::Expert.rank(), 4);
        assert_eq!("intermediate".parse::<Difficulty>().unwrap(), Difficulty::Intermediate);
    }

    #[test]
    fn test_arcana_accepts_short_form() {
        assert_eq!("major".parse::<Arcana>().unwrap(), Arcana::Major);
        assert_eq!("Minor Arcana".parse::<Arcana>().unwrap(), Arcana::Minor);
        assert!("court".parse::<Arcana>().is_err());
    }

    #[test]
    fn test_suit_element_roundtrip() {
        for suit in Suit::ALL {
            assert_eq!(suit.element().tarot_suit(), suit);
        }
    }

    #[test]
    fn test_ritual_entry_omits_practice_text() {
        let ritual = Ritual {
            overview: RitualOverview {
                id: 1,
                name: "Rose Cross Ritual".into(),
                abbreviation: "RC".into(),
                tradition: "Golden Dawn".into(),
                category: "Banishing".into(),
                purpose: "Protection".into(),
                difficulty: "Intermediate".into(),
                duration_minutes: 15,
                elemental_focus: None,
                sephiroth_focus: None,
                planetary_focus: None,
                timing_notes: None,
                benefits: None,
                warnings: None,
                source: None,
                description: "A gentle ritual".into(),
            },
            requires_tools: Json(vec![]),
            instructions: "Trace a cross".into(),
            visualization: None,
            words_of_power: Some("YEHESHUAH".into()),
        };

        let full = serde_json::to_value(RitualEntry::new(ritual.clone(), true)).unwrap();
        assert_eq!(full["instructions"], "Trace a cross");
        assert!(full["requires_tools"].is_array());

        let brief = serde_json::to_value(RitualEntry::new(ritual, false)).unwrap();
        assert_eq!(brief["abbreviation"], "RC");
        assert!(brief.get("instructions").is_none());
        assert!(brief.get("words_of_power").is_none());
        assert!(brief.get("requires_tools").is_none());
    }
}
