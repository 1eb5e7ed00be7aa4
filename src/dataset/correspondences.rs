//! Esoteric correspondence tables and the rules that attach them to cards.
//!
//! Major Arcana are matched by exact name. Minor Arcana receive suit-level
//! colors and note, then rank-specific attributes once the name has been split
//! into rank and suit: pips get a Sephirah and (Two through Ten) a decan,
//! court cards get an elemental Sephirah label built from a template.

use serde::Serialize;

use super::cards::CardSeed;
use crate::models::{Arcana, Suit};

#[derive(Debug, Serialize)]
pub struct MajorCorrespondence {
    pub card: &'static str,
    pub hebrew_letter: &'static str,
    pub tree_of_life_path: &'static str,
    pub musical_note: &'static str,
    pub color_primary: &'static str,
    pub color_secondary: &'static str,
    pub gemstone: &'static str,
    pub herb: &'static str,
    pub key_symbols: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SuitCorrespondence {
    pub suit: Suit,
    pub color_primary: &'static str,
    pub color_secondary: &'static str,
    pub musical_note: &'static str,
    pub season: &'static str,
    pub qabalah_world: &'static str,
    pub direction: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CourtRank {
    pub rank: &'static str,
    /// `[Suit]` is replaced by the card's suit.
    pub element_template: &'static str,
    pub age: &'static str,
    pub represents: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PipRank {
    pub rank: &'static str,
    pub sephirah: &'static str,
    /// Decans in suit order Wands, Cups, Swords, Pentacles. Aces have none.
    pub decans: Option<[&'static str; 4]>,
}

pub const MAJOR_CORRESPONDENCES: &[MajorCorrespondence] = &[
    MajorCorrespondence {
        card: "The Fool",
        hebrew_letter: "Aleph",
        tree_of_life_path: "11 (Kether to Chokmah)",
        musical_note: "E",
        color_primary: "Bright pale yellow",
        color_secondary: "Sky blue",
        gemstone: "Topaz",
        herb: "Aspen, Ginseng",
        key_symbols: "Dog, white rose, cliff, sun, mountains, bundle",
    },
    MajorCorrespondence {
        card: "The Magician",
        hebrew_letter: "Beth",
        tree_of_life_path: "12 (Kether to Binah)",
        musical_note: "E (between D and E)",
        color_primary: "Yellow",
        color_secondary: "Purple",
        gemstone: "Opal, Agate",
        herb: "Vervain, Palm",
        key_symbols: "Infinity symbol, wand, cup, sword, pentacle, roses, lilies",
    },
    MajorCorrespondence {
        card: "The High Priestess",
        hebrew_letter: "Gimel",
        tree_of_life_path: "13 (Kether to Tiphareth)",
        musical_note: "G#",
        color_primary: "Blue",
        color_secondary: "Silver",
        gemstone: "Moonstone, Pearl",
        herb: "Pomegranate, Almond",
        key_symbols: "Pillars (B and J), veil, crescent moon, Torah scroll, water",
    },
    MajorCorrespondence {
        card: "The Empress",
        hebrew_letter: "Daleth",
        tree_of_life_path: "14 (Chokmah to Binah)",
        musical_note: "F#",
        color_primary: "Emerald Green",
        color_secondary: "Pink",
        gemstone: "Emerald, Turquoise",
        herb: "Myrtle, Rose",
        key_symbols: "Venus symbol, crown, wheat, waterfall, cushioned throne",
    },
    MajorCorrespondence {
        card: "The Emperor",
        hebrew_letter: "Heh (Tzaddi in Thoth)",
        tree_of_life_path: "15 (Chokmah to Tiphareth)",
        musical_note: "C",
        color_primary: "Scarlet Red",
        color_secondary: "Orange",
        gemstone: "Ruby, Diamond",
        herb: "Tiger Lily, Geranium",
        key_symbols: "Ram heads, ankh, orb, scepter, stone throne, mountains",
    },
    MajorCorrespondence {
        card: "The Hierophant",
        hebrew_letter: "Vau",
        tree_of_life_path: "16 (Chokmah to Chesed)",
        musical_note: "C#",
        color_primary: "Red-Orange",
        color_secondary: "Deep Indigo",
        gemstone: "Topaz, Diamond",
        herb: "Mallow, Clover",
        key_symbols: "Triple crown, crossed keys, two pillars, two acolytes, hand blessing",
    },
    MajorCorrespondence {
        card: "The Lovers",
        hebrew_letter: "Zain",
        tree_of_life_path: "17 (Binah to Tiphareth)",
        musical_note: "D",
        color_primary: "Orange",
        color_secondary: "Pale mauve",
        gemstone: "Alexandrite, Agate",
        herb: "Orchid, Mace",
        key_symbols: "Angel Raphael, man and woman, tree of knowledge, tree of life, serpent",
    },
    MajorCorrespondence {
        card: "The Chariot",
        hebrew_letter: "Cheth",
        tree_of_life_path: "18 (Binah to Geburah)",
        musical_note: "D#",
        color_primary: "Amber",
        color_secondary: "Maroon",
        gemstone: "Amber, Chalcedony",
        herb: "Lotus, Water Lily",
        key_symbols: "Sphinxes (black and white), starry canopy, crescent moons, water",
    },
    MajorCorrespondence {
        card: "Strength",
        hebrew_letter: "Teth",
        tree_of_life_path: "19 (Chesed to Geburah)",
        musical_note: "E",
        color_primary: "Yellow-Green",
        color_secondary: "Deep purple",
        gemstone: "Cat's Eye, Sardonyx",
        herb: "Sunflower, Marigold",
        key_symbols: "Lion, infinity symbol, woman, white robe, mountains, flowers",
    },
    MajorCorrespondence {
        card: "The Hermit",
        hebrew_letter: "Yod",
        tree_of_life_path: "20 (Chesed to Tiphareth)",
        musical_note: "F",
        color_primary: "Yellow-Green",
        color_secondary: "Slate grey",
        gemstone: "Peridot, Olivine",
        herb: "Snowdrop, Lily",
        key_symbols: "Lantern with six-pointed star, staff, mountain peak, grey robes",
    },
    MajorCorrespondence {
        card: "Wheel of Fortune",
        hebrew_letter: "Kaph",
        tree_of_life_path: "21 (Chesed to Netzach)",
        musical_note: "A#",
        color_primary: "Violet",
        color_secondary: "Blue",
        gemstone: "Sapphire, Amethyst",
        herb: "Hyssop, Oak",
        key_symbols: "Wheel, sphinx, serpent, Anubis, TARO/ROTA, Hebrew letters (YHVH)",
    },
    MajorCorrespondence {
        card: "Justice",
        hebrew_letter: "Lamed",
        tree_of_life_path: "22 (Geburah to Tiphareth)",
        musical_note: "F#",
        color_primary: "Emerald Green",
        color_secondary: "Blue-green",
        gemstone: "Emerald, Jade",
        herb: "Aloe, Eucalyptus",
        key_symbols: "Scales, sword, purple cloak, crown, pillars, veil",
    },
    MajorCorrespondence {
        card: "The Hanged Man",
        hebrew_letter: "Mem",
        tree_of_life_path: "23 (Geburah to Hod)",
        musical_note: "G#",
        color_primary: "Deep Blue",
        color_secondary: "Sea green",
        gemstone: "Aquamarine, Beryl",
        herb: "Myrrh, Dulse",
        key_symbols: "Inverted man, halo, T-cross, bound foot, calm expression",
    },
    MajorCorrespondence {
        card: "Death",
        hebrew_letter: "Nun",
        tree_of_life_path: "24 (Tiphareth to Netzach)",
        musical_note: "G",
        color_primary: "Blue-Green",
        color_secondary: "Dull brown",
        gemstone: "Snakestone, Obsidian",
        herb: "Cactus, Wormwood",
        key_symbols: "Skeleton, white horse, black flag with white rose, sun, people of all classes",
    },
    MajorCorrespondence {
        card: "Temperance",
        hebrew_letter: "Samekh",
        tree_of_life_path: "25 (Tiphareth to Yesod)",
        musical_note: "G#",
        color_primary: "Blue",
        color_secondary: "Yellow",
        gemstone: "Jacinth, Amethyst",
        herb: "Rush, Arrowroot",
        key_symbols: "Angel, triangle, cups, water flow, path, mountain, sun/crown",
    },
    MajorCorrespondence {
        card: "The Devil",
        hebrew_letter: "Ayin",
        tree_of_life_path: "26 (Tiphareth to Hod)",
        musical_note: "A",
        color_primary: "Indigo",
        color_secondary: "Black",
        gemstone: "Black Diamond, Jet",
        herb: "Orchid, Thistle",
        key_symbols: "Baphomet, inverted pentagram, chains, naked humans, torch, grapes",
    },
    MajorCorrespondence {
        card: "The Tower",
        hebrew_letter: "Peh",
        tree_of_life_path: "27 (Netzach to Hod)",
        musical_note: "C",
        color_primary: "Scarlet",
        color_secondary: "Red",
        gemstone: "Ruby, Garnet",
        herb: "Hibiscus, Nettle",
        key_symbols: "Lightning, falling crown, falling figures, flames, grey clouds",
    },
    MajorCorrespondence {
        card: "The Star",
        hebrew_letter: "Heh (Tzaddi in traditional)",
        tree_of_life_path: "28 (Netzach to Yesod)",
        musical_note: "A#",
        color_primary: "Violet",
        color_secondary: "Sky blue",
        gemstone: "Turquoise, Aquamarine",
        herb: "Olive, Coconut",
        key_symbols: "Large star, seven smaller stars, naked woman, two pools, ibis, water pouring",
    },
    MajorCorrespondence {
        card: "The Moon",
        hebrew_letter: "Qoph",
        tree_of_life_path: "29 (Netzach to Malkuth)",
        musical_note: "B",
        color_primary: "Crimson (ultra-violet)",
        color_secondary: "Buff flecked silver-white",
        gemstone: "Pearl, Crystal",
        herb: "Opium, Poppy",
        key_symbols: "Moon, dog, wolf, crayfish, path, towers, water",
    },
    MajorCorrespondence {
        card: "The Sun",
        hebrew_letter: "Resh",
        tree_of_life_path: "30 (Hod to Yesod)",
        musical_note: "D",
        color_primary: "Orange",
        color_secondary: "Gold-yellow",
        gemstone: "Sunstone, Diamond",
        herb: "Sunflower, Heliotrope",
        key_symbols: "Sun, child, white horse, sunflowers, wall, red banner",
    },
    MajorCorrespondence {
        card: "Judgement",
        hebrew_letter: "Shin",
        tree_of_life_path: "31 (Hod to Malkuth)",
        musical_note: "C",
        color_primary: "Glowing orange-scarlet",
        color_secondary: "Vermillion",
        gemstone: "Fire Opal, Garnet",
        herb: "Red Poppy, Hibiscus",
        key_symbols: "Angel Gabriel, trumpet, cross, rising people, coffins, mountains, water",
    },
    MajorCorrespondence {
        card: "The World",
        hebrew_letter: "Tau",
        tree_of_life_path: "32 (Yesod to Malkuth)",
        musical_note: "A",
        color_primary: "Indigo",
        color_secondary: "Black",
        gemstone: "Onyx, Salt",
        herb: "Oak, Ivy, Ash",
        key_symbols: "Dancer, wreath, four creatures (lion, bull, angel, eagle), wands",
    },
];

pub const SUIT_CORRESPONDENCES: &[SuitCorrespondence] = &[
    SuitCorrespondence {
        suit: Suit::Wands,
        color_primary: "Red",
        color_secondary: "Orange",
        musical_note: "C (base)",
        season: "Spring",
        qabalah_world: "Atziluth (Archetypal)",
        direction: "South",
    },
    SuitCorrespondence {
        suit: Suit::Cups,
        color_primary: "Blue",
        color_secondary: "Silver",
        musical_note: "G# (base)",
        season: "Summer",
        qabalah_world: "Briah (Creative)",
        direction: "West",
    },
    SuitCorrespondence {
        suit: Suit::Swords,
        color_primary: "Yellow",
        color_secondary: "Violet",
        musical_note: "E (base)",
        season: "Autumn",
        qabalah_world: "Yetzirah (Formative)",
        direction: "East",
    },
    SuitCorrespondence {
        suit: Suit::Pentacles,
        color_primary: "Green",
        color_secondary: "Brown",
        musical_note: "F (base)",
        season: "Winter",
        qabalah_world: "Assiah (Material)",
        direction: "North",
    },
];

pub const COURT_RANKS: &[CourtRank] = &[
    CourtRank {
        rank: "Page",
        element_template: "Earth of [Suit]",
        age: "Youth",
        represents: "Student, messenger, new energy",
    },
    CourtRank {
        rank: "Knight",
        element_template: "Air of [Suit] (Fire in some systems)",
        age: "Young adult",
        represents: "Action, movement, quest",
    },
    CourtRank {
        rank: "Queen",
        element_template: "Water of [Suit]",
        age: "Mature feminine",
        represents: "Mastery, nurturing, inner power",
    },
    CourtRank {
        rank: "King",
        element_template: "Fire of [Suit] (Air in some systems)",
        age: "Mature masculine",
        represents: "Authority, mastery, outer power",
    },
];

pub const PIP_RANKS: &[PipRank] = &[
    PipRank {
        rank: "Ace",
        sephirah: "Kether (Crown)",
        decans: None,
    },
    PipRank {
        rank: "Two",
        sephirah: "Chokmah (Wisdom)",
        decans: Some(["Mars in Aries", "Venus in Cancer", "Moon in Libra", "Jupiter in Capricorn"]),
    },
    PipRank {
        rank: "Three",
        sephirah: "Binah (Understanding)",
        decans: Some(["Sun in Aries", "Mercury in Cancer", "Saturn in Libra", "Mars in Capricorn"]),
    },
    PipRank {
        rank: "Four",
        sephirah: "Chesed (Mercy)",
        decans: Some(["Venus in Aries", "Moon in Cancer", "Jupiter in Libra", "Sun in Capricorn"]),
    },
    PipRank {
        rank: "Five",
        sephirah: "Geburah (Severity)",
        decans: Some(["Saturn in Leo", "Mars in Scorpio", "Venus in Aquarius", "Mercury in Taurus"]),
    },
    PipRank {
        rank: "Six",
        sephirah: "Tiphareth (Beauty)",
        decans: Some(["Jupiter in Leo", "Sun in Scorpio", "Mercury in Aquarius", "Moon in Taurus"]),
    },
    PipRank {
        rank: "Seven",
        sephirah: "Netzach (Victory)",
        decans: Some(["Mars in Leo", "Venus in Scorpio", "Moon in Aquarius", "Saturn in Taurus"]),
    },
    PipRank {
        rank: "Eight",
        sephirah: "Hod (Splendor)",
        decans: Some(["Mercury in Sagittarius", "Saturn in Pisces", "Jupiter in Gemini", "Sun in Virgo"]),
    },
    PipRank {
        rank: "Nine",
        sephirah: "Yesod (Foundation)",
        decans: Some(["Moon in Sagittarius", "Jupiter in Pisces", "Mars in Gemini", "Venus in Virgo"]),
    },
    PipRank {
        rank: "Ten",
        sephirah: "Malkuth (Kingdom)",
        decans: Some(["Saturn in Sagittarius", "Mars in Pisces", "Sun in Gemini", "Mercury in Virgo"]),
    },
];

/// Correspondence columns of a `cards` row. Every field is optional: a card
/// matching no table keeps them all null.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CardCorrespondence {
    pub hebrew_letter: Option<&'static str>,
    pub tree_of_life_path: Option<&'static str>,
    pub sephiroth: Option<String>,
    pub astrological_decan: Option<&'static str>,
    pub musical_note: Option<&'static str>,
    pub color_primary: Option<&'static str>,
    pub color_secondary: Option<&'static str>,
    pub gemstone: Option<&'static str>,
    pub herb: Option<&'static str>,
    pub key_symbols: Option<&'static str>,
}

/// Split a Minor Arcana name into `(rank, suit)`.
///
/// Returns `None` unless the name contains exactly one `" of "` separator.
pub fn split_minor_name(name: &str) -> Option<(&str, &str)> {
    let mut parts = name.split(" of ");
    match (parts.next(), parts.next(), parts.next()) {
        (Some(rank), Some(suit), None) => Some((rank, suit)),
        _ => None,
    }
}

fn suit_index(suit: Suit) -> usize {
    match suit {
        Suit::Wands => 0,
        Suit::Cups => 1,
        Suit::Swords => 2,
        Suit::Pentacles => 3,
    }
}

/// Compute the correspondence columns for one card of the base list.
pub fn correspond(card: &CardSeed) -> CardCorrespondence {
    if card.arcana == Arcana::Major {
        if let Some(major) = MAJOR_CORRESPONDENCES.iter().find(|m| m.card == card.name) {
            return CardCorrespondence {
                hebrew_letter: Some(major.hebrew_letter),
                tree_of_life_path: Some(major.tree_of_life_path),
                sephiroth: None,
                astrological_decan: None,
                musical_note: Some(major.musical_note),
                color_primary: Some(major.color_primary),
                color_secondary: Some(major.color_secondary),
                gemstone: Some(major.gemstone),
                herb: Some(major.herb),
                key_symbols: Some(major.key_symbols),
            };
        }
    }

    let mut out = CardCorrespondence::default();
    let Some(suit) = card.suit else {
        return out;
    };

    if let Some(sc) = SUIT_CORRESPONDENCES.iter().find(|s| s.suit == suit) {
        out.color_primary = Some(sc.color_primary);
        out.color_secondary = Some(sc.color_secondary);
        out.musical_note = Some(sc.musical_note);
    }

    // Names that don't decompose keep only the suit-level attributes.
    let Some((rank, _)) = split_minor_name(&card.name) else {
        return out;
    };

    if let Some(court) = COURT_RANKS.iter().find(|c| c.rank == rank) {
        out.sephiroth = Some(court.element_template.replace("[Suit]", suit.as_str()));
    } else if let Some(pip) = PIP_RANKS.iter().find(|p| p.rank == rank) {
        out.sephiroth = Some(pip.sephirah.to_string());
        out.astrological_decan = pip.decans.map(|d| d[suit_index(suit)]);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::cards::base_cards;

    fn card(name: &str) -> CardSeed {
        base_cards()
            .into_iter()
            .find(|c| c.name == name)
            .expect("card in deck")
    }

    #[test]
    fn test_split_minor_name() {
        assert_eq!(split_minor_name("Three of Cups"), Some(("Three", "Cups")));
        assert_eq!(split_minor_name("The Fool"), None);
        assert_eq!(split_minor_name("Ace of Wands of Fire"), None);
    }

    #[test]
    fn test_major_by_name() {
        let c = correspond(&card("The Fool"));
        assert_eq!(c.hebrew_letter, Some("Aleph"));
        assert_eq!(c.tree_of_life_path, Some("11 (Kether to Chokmah)"));
        assert_eq!(c.sephiroth, None);
        assert_eq!(c.astrological_decan, None);
    }

    #[test]
    fn test_wheel_is_not_decomposed() {
        let c = correspond(&card("Wheel of Fortune"));
        assert_eq!(c.hebrew_letter, Some("Kaph"));
        assert_eq!(c.sephiroth, None);
    }

    #[test]
    fn test_pip_gets_sephirah_and_decan() {
        let c = correspond(&card("Three of Cups"));
        assert_eq!(c.sephiroth.as_deref(), Some("Binah (Understanding)"));
        assert_eq!(c.astrological_decan, Some("Mercury in Cancer"));
        assert_eq!(c.color_primary, Some("Blue"));
        assert_eq!(c.musical_note, Some("G# (base)"));
        assert_eq!(c.hebrew_letter, None);
    }

    #[test]
    fn test_ace_has_no_decan() {
        let c = correspond(&card("Ace of Swords"));
        assert_eq!(c.sephiroth.as_deref(), Some("Kether (Crown)"));
        assert_eq!(c.astrological_decan, None);
    }

    #[test]
    fn test_court_label_substitutes_suit() {
        let c = correspond(&card("Queen of Cups"));
        assert_eq!(c.sephiroth.as_deref(), Some("Water of Cups"));
        assert_eq!(c.astrological_decan, None);

        let k = correspond(&card("Knight of Pentacles"));
        assert_eq!(
            k.sephiroth.as_deref(),
            Some("Air of Pentacles (Fire in some systems)")
        );
    }

    #[test]
    fn test_undecomposable_minor_keeps_suit_attributes() {
        let mut odd = card("Two of Wands");
        odd.name = "Dancer with Wands".to_string();
        let c = correspond(&odd);
        assert_eq!(c.color_primary, Some("Red"));
        assert_eq!(c.sephiroth, None);
        assert_eq!(c.astrological_decan, None);
    }

    #[test]
    fn test_every_major_has_correspondences() {
        for c in base_cards().iter().filter(|c| c.arcana == Arcana::Major) {
            assert!(correspond(c).hebrew_letter.is_some(), "{}", c.name);
        }
    }
}
