//! The seven classical planets and the twelve signs of the zodiac.

use serde::Serialize;

use crate::models::{Element, Modality};

#[derive(Debug, Serialize)]
pub struct PlanetSeed {
    pub name: &'static str,
    pub symbol: &'static str,
    pub day_of_week: &'static str,
    pub metal: &'static str,
    pub color: &'static str,
    pub gemstone: &'static str,
    pub sephiroth_number: i64,
    pub rules_signs: &'static [&'static str],
    pub exalted_in: Option<&'static str>,
    pub detriment_in: Option<&'static str>,
    pub fall_in: Option<&'static str>,
    pub quality: &'static str,
    pub tarot_association: &'static str,
    pub magical_powers: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SignSeed {
    pub name: &'static str,
    pub symbol: &'static str,
    pub element: Element,
    pub modality: Modality,
    pub ruling_planet: &'static str,
    pub exalted_planet: Option<&'static str>,
    pub detriment_planet: Option<&'static str>,
    pub fall_planet: Option<&'static str>,
    pub polarity: &'static str,
    pub house_number: i64,
    pub body_part: &'static str,
    pub tarot_association: &'static str,
    /// `MM-DD`
    pub dates_start: &'static str,
    pub dates_end: &'static str,
    pub keywords: &'static [&'static str],
    pub description: &'static str,
}

/// Luminaries first, then the five visible planets.
pub const PLANETS: &[PlanetSeed] = &[
    PlanetSeed {
        name: "Sun",
        symbol: "☉",
        day_of_week: "Sunday",
        metal: "Gold",
        color: "Gold, Yellow",
        gemstone: "Diamond, Ruby, Sunstone",
        sephiroth_number: 6,
        rules_signs: &["Leo"],
        exalted_in: Some("Aries"),
        detriment_in: Some("Aquarius"),
        fall_in: Some("Libra"),
        quality: "Hot, Dry",
        tarot_association: "The Sun (XIX)",
        magical_powers: "Success, vitality, leadership, illumination, healing, spiritual development",
        description: "The luminary of day, representing the conscious self, vitality, life force, and the divine spark within. Rules identity, ego, and creative expression.",
    },
    PlanetSeed {
        name: "Moon",
        symbol: "☽",
        day_of_week: "Monday",
        metal: "Silver",
        color: "Silver, White",
        gemstone: "Moonstone, Pearl, Selenite",
        sephiroth_number: 9,
        rules_signs: &["Cancer"],
        exalted_in: Some("Taurus"),
        detriment_in: Some("Capricorn"),
        fall_in: Some("Scorpio"),
        quality: "Cold, Moist",
        tarot_association: "The High Priestess (II), The Moon (XVIII)",
        magical_powers: "Psychic ability, intuition, dreams, emotions, tides, cycles, feminine mysteries",
        description: "The luminary of night, representing the subconscious mind, emotions, instincts, and the soul. Rules memory, habits, and the inner life.",
    },
    PlanetSeed {
        name: "Mercury",
        symbol: "☿",
        day_of_week: "Wednesday",
        metal: "Quicksilver (Mercury)",
        color: "Orange, Multi-colored",
        gemstone: "Agate, Citrine, Aventurine",
        sephiroth_number: 8,
        rules_signs: &["Gemini", "Virgo"],
        exalted_in: Some("Virgo"),
        detriment_in: Some("Sagittarius, Pisces"),
        fall_in: Some("Pisces"),
        quality: "Cold, Dry",
        tarot_association: "The Magician (I)",
        magical_powers: "Communication, intellect, magic, travel, commerce, writing, divination, cunning",
        description: "The messenger god, representing communication, intellect, reason, and the rational mind. Rules thought, speech, writing, and short journeys.",
    },
    PlanetSeed {
        name: "Venus",
        symbol: "♀",
        day_of_week: "Friday",
        metal: "Copper",
        color: "Green, Pink",
        gemstone: "Emerald, Rose Quartz, Jade",
        sephiroth_number: 7,
        rules_signs: &["Taurus", "Libra"],
        exalted_in: Some("Pisces"),
        detriment_in: Some("Aries, Scorpio"),
        fall_in: Some("Virgo"),
        quality: "Cold, Moist",
        tarot_association: "The Empress (III)",
        magical_powers: "Love, beauty, harmony, attraction, pleasure, art, relationships, fertility",
        description: "The goddess of love and beauty, representing affection, harmony, values, and aesthetic sense. Rules love, pleasure, and the arts.",
    },
    PlanetSeed {
        name: "Mars",
        symbol: "♂",
        day_of_week: "Tuesday",
        metal: "Iron",
        color: "Red, Scarlet",
        gemstone: "Ruby, Garnet, Bloodstone",
        sephiroth_number: 5,
        rules_signs: &["Aries", "Scorpio"],
        exalted_in: Some("Capricorn"),
        detriment_in: Some("Libra, Taurus"),
        fall_in: Some("Cancer"),
        quality: "Hot, Dry",
        tarot_association: "The Tower (XVI)",
        magical_powers: "Courage, strength, conflict, passion, aggression, war, energy, drive, protection",
        description: "The god of war, representing action, assertion, desire, and the will to conquer. Rules energy, passion, and physical strength.",
    },
    PlanetSeed {
        name: "Jupiter",
        symbol: "♃",
        day_of_week: "Thursday",
        metal: "Tin",
        color: "Blue, Purple",
        gemstone: "Sapphire, Amethyst, Lapis Lazuli",
        sephiroth_number: 4,
        rules_signs: &["Sagittarius", "Pisces"],
        exalted_in: Some("Cancer"),
        detriment_in: Some("Gemini, Virgo"),
        fall_in: Some("Capricorn"),
        quality: "Hot, Moist",
        tarot_association: "Wheel of Fortune (X)",
        magical_powers: "Expansion, abundance, wisdom, prosperity, good fortune, justice, growth, optimism",
        description: "The king of gods, representing expansion, abundance, wisdom, and beneficence. Rules growth, optimism, and higher learning.",
    },
    PlanetSeed {
        name: "Saturn",
        symbol: "♄",
        day_of_week: "Saturday",
        metal: "Lead",
        color: "Black, Indigo",
        gemstone: "Onyx, Obsidian, Jet",
        sephiroth_number: 3,
        rules_signs: &["Capricorn", "Aquarius"],
        exalted_in: Some("Libra"),
        detriment_in: Some("Cancer, Leo"),
        fall_in: Some("Aries"),
        quality: "Cold, Dry",
        tarot_association: "The World (XXI)",
        magical_powers: "Limitation, discipline, structure, time, karma, boundaries, endings, wisdom through suffering",
        description: "The lord of time and limitation, representing structure, discipline, and the lessons of experience. Rules responsibility, karma, and maturity.",
    },
];

pub const ZODIAC_SIGNS: &[SignSeed] = &[
    SignSeed {
        name: "Aries",
        symbol: "♈",
        element: Element::Fire,
        modality: Modality::Cardinal,
        ruling_planet: "Mars",
        exalted_planet: Some("Sun"),
        detriment_planet: Some("Venus"),
        fall_planet: Some("Saturn"),
        polarity: "Positive",
        house_number: 1,
        body_part: "Head, Face",
        tarot_association: "The Emperor (IV)",
        dates_start: "03-21",
        dates_end: "04-19",
        keywords: &["Initiative", "Courage", "Leadership", "Independence", "Impulsiveness", "Pioneering"],
        description: "The Ram. First sign of the zodiac, representing new beginnings, initiative, and the primal life force. Cardinal fire: the spark of creation.",
    },
    SignSeed {
        name: "Taurus",
        symbol: "♉",
        element: Element::Earth,
        modality: Modality::Fixed,
        ruling_planet: "Venus",
        exalted_planet: Some("Moon"),
        detriment_planet: Some("Mars"),
        fall_planet: None,
        polarity: "Negative",
        house_number: 2,
        body_part: "Neck, Throat",
        tarot_association: "The Hierophant (V)",
        dates_start: "04-20",
        dates_end: "05-20",
        keywords: &["Stability", "Patience", "Sensuality", "Determination", "Possessiveness", "Materialism"],
        description: "The Bull. Representing stability, material security, and the pleasures of the senses. Fixed earth: enduring substance.",
    },
    SignSeed {
        name: "Gemini",
        symbol: "♊",
        element: Element::Air,
        modality: Modality::Mutable,
        ruling_planet: "Mercury",
        exalted_planet: None,
        detriment_planet: Some("Jupiter"),
        fall_planet: None,
        polarity: "Positive",
        house_number: 3,
        body_part: "Arms, Hands, Lungs",
        tarot_association: "The Lovers (VI)",
        dates_start: "05-21",
        dates_end: "06-20",
        keywords: &["Communication", "Versatility", "Curiosity", "Duality", "Adaptability", "Restlessness"],
        description: "The Twins. Representing duality, communication, and mental agility. Mutable air: the changing winds of thought.",
    },
    SignSeed {
        name: "Cancer",
        symbol: "♋",
        element: Element::Water,
        modality: Modality::Cardinal,
        ruling_planet: "Moon",
        exalted_planet: Some("Jupiter"),
        detriment_planet: Some("Saturn"),
        fall_planet: Some("Mars"),
        polarity: "Negative",
        house_number: 4,
        body_part: "Chest, Breasts, Stomach",
        tarot_association: "The Chariot (VII)",
        dates_start: "06-21",
        dates_end: "07-22",
        keywords: &["Nurturing", "Emotion", "Protection", "Intuition", "Sensitivity", "Moodiness"],
        description: "The Crab. Representing emotion, nurturing, and the protective shell. Cardinal water: the source of emotional flow.",
    },
    SignSeed {
        name: "Leo",
        symbol: "♌",
        element: Element::Fire,
        modality: Modality::Fixed,
        ruling_planet: "Sun",
        exalted_planet: None,
        detriment_planet: Some("Saturn"),
        fall_planet: None,
        polarity: "Positive",
        house_number: 5,
        body_part: "Heart, Upper Back",
        tarot_association: "Strength (VIII) / Lust",
        dates_start: "07-23",
        dates_end: "08-22",
        keywords: &["Creativity", "Pride", "Generosity", "Leadership", "Drama", "Self-expression"],
        description: "The Lion. Representing creativity, self-expression, and royal dignity. Fixed fire: the sustained flame of the heart.",
    },
    SignSeed {
        name: "Virgo",
        symbol: "♍",
        element: Element::Earth,
        modality: Modality::Mutable,
        ruling_planet: "Mercury",
        exalted_planet: Some("Mercury"),
        detriment_planet: Some("Jupiter"),
        fall_planet: Some("Venus"),
        polarity: "Negative",
        house_number: 6,
        body_part: "Digestive System, Intestines",
        tarot_association: "The Hermit (IX)",
        dates_start: "08-23",
        dates_end: "09-22",
        keywords: &["Analysis", "Service", "Perfectionism", "Health", "Detail", "Criticism"],
        description: "The Virgin. Representing purity, discernment, and service. Mutable earth: the harvest and refinement.",
    },
    SignSeed {
        name: "Libra",
        symbol: "♎",
        element: Element::Air,
        modality: Modality::Cardinal,
        ruling_planet: "Venus",
        exalted_planet: Some("Saturn"),
        detriment_planet: Some("Mars"),
        fall_planet: Some("Sun"),
        polarity: "Positive",
        house_number: 7,
        body_part: "Kidneys, Lower Back",
        tarot_association: "Justice (XI) / Adjustment",
        dates_start: "09-23",
        dates_end: "10-22",
        keywords: &["Balance", "Harmony", "Justice", "Partnership", "Indecision", "Diplomacy"],
        description: "The Scales. Representing balance, justice, and relationship. Cardinal air: the breath of equilibrium.",
    },
    SignSeed {
        name: "Scorpio",
        symbol: "♏",
        element: Element::Water,
        modality: Modality::Fixed,
        ruling_planet: "Mars",
        exalted_planet: None,
        detriment_planet: Some("Venus"),
        fall_planet: Some("Moon"),
        polarity: "Negative",
        house_number: 8,
        body_part: "Reproductive Organs",
        tarot_association: "Death (XIII)",
        dates_start: "10-23",
        dates_end: "11-21",
        keywords: &["Transformation", "Intensity", "Power", "Depth", "Passion", "Mystery"],
        description: "The Scorpion (and Eagle, and Phoenix). Representing transformation, death, rebirth, and the mysteries. Fixed water: the depths of emotion.",
    },
    SignSeed {
        name: "Sagittarius",
        symbol: "♐",
        element: Element::Fire,
        modality: Modality::Mutable,
        ruling_planet: "Jupiter",
        exalted_planet: None,
        detriment_planet: Some("Mercury"),
        fall_planet: None,
        polarity: "Positive",
        house_number: 9,
        body_part: "Hips, Thighs",
        tarot_association: "Temperance (XIV) / Art",
        dates_start: "11-22",
        dates_end: "12-21",
        keywords: &["Philosophy", "Adventure", "Optimism", "Freedom", "Exploration", "Truth-seeking"],
        description: "The Archer. Representing quest for meaning, philosophy, and expansion. Mutable fire: the arrow of aspiration.",
    },
    SignSeed {
        name: "Capricorn",
        symbol: "♑",
        element: Element::Earth,
        modality: Modality::Cardinal,
        ruling_planet: "Saturn",
        exalted_planet: Some("Mars"),
        detriment_planet: Some("Moon"),
        fall_planet: Some("Jupiter"),
        polarity: "Negative",
        house_number: 10,
        body_part: "Knees, Bones, Skin",
        tarot_association: "The Devil (XV)",
        dates_start: "12-22",
        dates_end: "01-19",
        keywords: &["Ambition", "Discipline", "Authority", "Structure", "Responsibility", "Achievement"],
        description: "The Goat (Sea-Goat). Representing ambition, achievement, and mastery of the material world. Cardinal earth: the mountain peak.",
    },
    SignSeed {
        name: "Aquarius",
        symbol: "♒",
        element: Element::Air,
        modality: Modality::Fixed,
        ruling_planet: "Saturn",
        exalted_planet: None,
        detriment_planet: Some("Sun"),
        fall_planet: None,
        polarity: "Positive",
        house_number: 11,
        body_part: "Ankles, Circulatory System",
        tarot_association: "The Star (XVII)",
        dates_start: "01-20",
        dates_end: "02-18",
        keywords: &["Innovation", "Humanitarianism", "Independence", "Eccentricity", "Progress", "Detachment"],
        description: "The Water Bearer. Representing innovation, community, and higher consciousness. Fixed air: the sustained vision of the future.",
    },
    SignSeed {
        name: "Pisces",
        symbol: "♓",
        element: Element::Water,
        modality: Modality::Mutable,
        ruling_planet: "Jupiter",
        exalted_planet: Some("Venus"),
        detriment_planet: Some("Mercury"),
        fall_planet: Some("Mercury"),
        polarity: "Negative",
        house_number: 12,
        body_part: "Feet, Lymphatic System",
        tarot_association: "The Moon (XVIII)",
        dates_start: "02-19",
        dates_end: "03-20",
        keywords: &["Compassion", "Mysticism", "Imagination", "Spirituality", "Escapism", "Sensitivity"],
        description: "The Fishes. Representing dissolution, compassion, and union with the divine. Mutable water: the ocean of consciousness.",
    },
];
