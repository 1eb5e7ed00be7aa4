//! Built-in reference dataset.
//!
//! Every table here is hand-authored and compiled into the binary. The
//! loader in [`crate::seed`] materializes a [`Dataset`] into SQLite; nothing
//! in this module touches the database.

pub mod astrology;
pub mod cards;
pub mod correspondences;
pub mod qabalah;
pub mod rituals;
pub mod systems;

use std::collections::{BTreeSet, HashSet};

use anyhow::{bail, ensure, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::models::Arcana;
use astrology::{PlanetSeed, SignSeed, PLANETS, ZODIAC_SIGNS};
use cards::CardSeed;
use correspondences::{
    CourtRank, MajorCorrespondence, PipRank, SuitCorrespondence, COURT_RANKS,
    MAJOR_CORRESPONDENCES, PIP_RANKS, SUIT_CORRESPONDENCES,
};
use qabalah::{PathSeed, SephirahSeed, PATHS, SEPHIROTH};
use rituals::{RitualSeed, RITUALS};
use systems::{SystemSeed, SYSTEM_DESCRIPTIONS};

pub const CARD_COUNT: usize = 78;

/// All source tables the loader combines, in one serializable bundle.
#[derive(Debug, Serialize)]
pub struct Dataset {
    pub cards: Vec<CardSeed>,
    pub majors: &'static [MajorCorrespondence],
    pub suits: &'static [SuitCorrespondence],
    pub courts: &'static [CourtRank],
    pub pips: &'static [PipRank],
    pub system_descriptions: &'static [SystemSeed],
    pub sephiroth: &'static [SephirahSeed],
    pub paths: &'static [PathSeed],
    pub planets: &'static [PlanetSeed],
    pub signs: &'static [SignSeed],
    pub rituals: &'static [RitualSeed],
}

impl Dataset {
    pub fn builtin() -> Self {
        Dataset {
            cards: cards::base_cards(),
            majors: MAJOR_CORRESPONDENCES,
            suits: SUIT_CORRESPONDENCES,
            courts: COURT_RANKS,
            pips: PIP_RANKS,
            system_descriptions: SYSTEM_DESCRIPTIONS,
            sephiroth: SEPHIROTH,
            paths: PATHS,
            planets: PLANETS,
            signs: ZODIAC_SIGNS,
            rituals: RITUALS,
        }
    }

    /// Check the referential invariants the schema relies on.
    ///
    /// Runs before any write so that a broken table never produces a
    /// partially loaded store.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.cards.len() == CARD_COUNT,
            "expected {} cards, found {}",
            CARD_COUNT,
            self.cards.len()
        );
        let numbers: BTreeSet<i64> = self.cards.iter().map(|c| c.number).collect();
        ensure!(
            numbers.len() == CARD_COUNT && numbers.iter().copied().eq(0..CARD_COUNT as i64),
            "card numbers must cover 0..=77 without gaps or duplicates"
        );
        let mut names = HashSet::new();
        for card in &self.cards {
            if !names.insert(card.name.to_lowercase()) {
                bail!("duplicate card name '{}'", card.name);
            }
        }

        let sephiroth: BTreeSet<i64> = self.sephiroth.iter().map(|s| s.number).collect();
        ensure!(
            sephiroth.len() == self.sephiroth.len() && sephiroth.iter().copied().eq(1..=10),
            "sephiroth must be numbered 1..=10 exactly once"
        );

        let path_numbers: BTreeSet<i64> = self.paths.iter().map(|p| p.number).collect();
        ensure!(
            path_numbers.len() == self.paths.len() && path_numbers.iter().copied().eq(11..=32),
            "paths must be numbered 11..=32 exactly once"
        );
        let mut linked_cards = HashSet::new();
        for path in self.paths {
            let card = self
                .cards
                .iter()
                .find(|c| c.number == path.tarot_card_number);
            match card {
                Some(card) if card.arcana == Arcana::Major => {}
                Some(card) => bail!(
                    "path {} links to '{}', which is not a Major Arcana card",
                    path.number,
                    card.name
                ),
                None => bail!(
                    "path {} links to unknown card {}",
                    path.number,
                    path.tarot_card_number
                ),
            }
            ensure!(
                linked_cards.insert(path.tarot_card_number),
                "card {} is linked by more than one path",
                path.tarot_card_number
            );
            ensure!(
                sephiroth.contains(&path.connects_from) && sephiroth.contains(&path.connects_to),
                "path {} connects a missing sephirah",
                path.number
            );
            ensure!(
                path.connects_from != path.connects_to,
                "path {} connects sephirah {} to itself",
                path.number,
                path.connects_from
            );
        }

        for planet in self.planets {
            ensure!(
                sephiroth.contains(&planet.sephiroth_number),
                "planet {} references missing sephirah {}",
                planet.name,
                planet.sephiroth_number
            );
        }

        let houses: BTreeSet<i64> = self.signs.iter().map(|s| s.house_number).collect();
        ensure!(
            self.signs.len() == 12 && houses.iter().copied().eq(1..=12),
            "zodiac house numbers must be a permutation of 1..=12"
        );

        // The loader joins descriptions to cards by exact name.
        let exact_names: HashSet<&str> = self.cards.iter().map(|c| c.name.as_str()).collect();
        let mut seen = BTreeSet::new();
        for entry in self.system_descriptions {
            ensure!(
                exact_names.contains(entry.card),
                "{} description references unknown card '{}'",
                entry.system,
                entry.card
            );
            ensure!(
                seen.insert((entry.system, entry.card)),
                "duplicate {} description for '{}'",
                entry.system,
                entry.card
            );
        }

        let mut abbreviations = HashSet::new();
        for ritual in self.rituals {
            ensure!(
                abbreviations.insert(ritual.abbreviation.to_lowercase()),
                "duplicate ritual abbreviation '{}'",
                ritual.abbreviation
            );
        }

        Ok(())
    }

    /// Hex SHA-256 of the serialized tables. Changes whenever any seed text
    /// or structure changes.
    pub fn fingerprint(&self) -> Result<String> {
        let bytes = serde_json::to_vec(self)?;
        Ok(hex::encode(Sha256::digest(&bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_dataset_is_valid() {
        Dataset::builtin().validate().unwrap();
    }

    #[test]
    fn test_validate_requires_exact_card_name_for_descriptions() {
        static MISNAMED: &[SystemSeed] = &[SystemSeed {
            system: crate::models::TarotSystem::Thoth,
            card: "the fool",
            description: "",
            upright_meaning: "",
            reversed_meaning: "",
            key_imagery: "",
            divinatory_meaning: "",
            esoteric_meaning: "",
        }];
        let mut dataset = Dataset::builtin();
        dataset.system_descriptions = MISNAMED;
        let err = dataset.validate().unwrap_err();
        assert!(err.to_string().contains("unknown card 'the fool'"));
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let a = Dataset::builtin().fingerprint().unwrap();
        let b = Dataset::builtin().fingerprint().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn test_validate_rejects_missing_card() {
        let mut dataset = Dataset::builtin();
        dataset.cards.retain(|c| c.number != 40);
        let err = dataset.validate().unwrap_err();
        assert!(err.to_string().contains("78"));
    }

    #[test]
    fn test_validate_rejects_duplicate_number() {
        let mut dataset = Dataset::builtin();
        dataset.cards[77].number = 76;
        assert!(dataset.validate().is_err());
    }

    #[test]
    fn test_paths_are_distinct_edges() {
        for path in PATHS {
            assert_ne!(path.connects_from, path.connects_to);
            assert!((1..=10).contains(&path.connects_from));
            assert!((1..=10).contains(&path.connects_to));
        }
        let first = PATHS.iter().find(|p| p.number == 11).unwrap();
        assert_eq!(first.hebrew_letter, "Aleph");
        assert_eq!(first.tarot_card_number, 0);
    }

    #[test]
    fn test_every_planet_rules_existing_signs() {
        for planet in PLANETS {
            for sign in planet.rules_signs {
                assert!(
                    ZODIAC_SIGNS.iter().any(|s| s.name == *sign),
                    "{} rules unknown sign {}",
                    planet.name,
                    sign
                );
            }
        }
    }
}
