//! The ten Sephiroth and the twenty-two Paths of the Tree of Life.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct SephirahSeed {
    pub number: i64,
    pub name: &'static str,
    pub name_hebrew: &'static str,
    pub meaning: &'static str,
    pub divine_name: &'static str,
    pub archangel: &'static str,
    pub angelic_order: &'static str,
    pub planet: &'static str,
    pub mundane_chakra: &'static str,
    pub spiritual_experience: &'static str,
    pub virtue: &'static str,
    pub vice: Option<&'static str>,
    pub color_atziluth: &'static str,
    pub color_briah: &'static str,
    pub color_yetzirah: &'static str,
    pub color_assiah: &'static str,
    pub tarot_association: &'static str,
    pub description: &'static str,
}

/// A Path links to its Major Arcana card by the card's number, never by
/// its own path number.
#[derive(Debug, Serialize)]
pub struct PathSeed {
    pub number: i64,
    pub name: &'static str,
    pub hebrew_letter: &'static str,
    pub hebrew_letter_meaning: &'static str,
    pub tarot_card_number: i64,
    pub connects_from: i64,
    pub connects_to: i64,
    pub element: Option<&'static str>,
    pub planet: Option<&'static str>,
    pub sign: Option<&'static str>,
    pub color: &'static str,
    pub description: &'static str,
}

pub const SEPHIROTH: &[SephirahSeed] = &[
    SephirahSeed {
        number: 1,
        name: "Kether",
        name_hebrew: "כֶּתֶר",
        meaning: "Crown",
        divine_name: "Eheieh (I Am)",
        archangel: "Metatron",
        angelic_order: "Chaioth ha-Qadesh (Holy Living Creatures)",
        planet: "Primum Mobile",
        mundane_chakra: "First Swirlings",
        spiritual_experience: "Union with God",
        virtue: "Attainment, Completion of the Great Work",
        vice: None,
        color_atziluth: "Brilliance",
        color_briah: "Pure white brilliance",
        color_yetzirah: "Pure white brilliance",
        color_assiah: "White, flecked gold",
        tarot_association: "Four Aces",
        description: "The Crown, the first emanation, the point of unity before manifestation. Pure divine will and the source of all creation.",
    },
    SephirahSeed {
        number: 2,
        name: "Chokmah",
        name_hebrew: "חָכְמָה",
        meaning: "Wisdom",
        divine_name: "Jehovah (Yah)",
        archangel: "Raziel",
        angelic_order: "Auphanim (Wheels)",
        planet: "Zodiac",
        mundane_chakra: "Sphere of the Zodiac",
        spiritual_experience: "Vision of God face to face",
        virtue: "Devotion",
        vice: None,
        color_atziluth: "Pure soft blue",
        color_briah: "Grey",
        color_yetzirah: "Pearl grey, iridescent",
        color_assiah: "White, flecked red, blue, yellow",
        tarot_association: "Four Twos, The Four Knights",
        description: "Wisdom, the first masculine principle. Dynamic, outpouring force and the first differentiation of unity.",
    },
    SephirahSeed {
        number: 3,
        name: "Binah",
        name_hebrew: "בִּינָה",
        meaning: "Understanding",
        divine_name: "Jehovah Elohim",
        archangel: "Tzaphkiel",
        angelic_order: "Aralim (Thrones)",
        planet: "Saturn",
        mundane_chakra: "Sphere of Saturn",
        spiritual_experience: "Vision of Sorrow",
        virtue: "Silence",
        vice: Some("Avarice"),
        color_atziluth: "Crimson",
        color_briah: "Black",
        color_yetzirah: "Dark brown",
        color_assiah: "Grey, flecked pink",
        tarot_association: "Four Threes, The Four Queens",
        description: "Understanding, the Great Mother, the womb of form. Receptive, limiting principle that gives structure to the outpouring of Chokmah.",
    },
    SephirahSeed {
        number: 4,
        name: "Chesed",
        name_hebrew: "חֶסֶד",
        meaning: "Mercy",
        divine_name: "El",
        archangel: "Tzadkiel",
        angelic_order: "Chasmalim (Brilliant Ones)",
        planet: "Jupiter",
        mundane_chakra: "Sphere of Jupiter",
        spiritual_experience: "Vision of Love",
        virtue: "Obedience",
        vice: Some("Bigotry, Hypocrisy, Gluttony, Tyranny"),
        color_atziluth: "Deep violet",
        color_briah: "Blue",
        color_yetzirah: "Deep purple",
        color_assiah: "Deep azure, flecked yellow",
        tarot_association: "Four Fours",
        description: "Mercy and loving-kindness. Benevolent, expansive force of grace and abundance. The builder and organizer.",
    },
    SephirahSeed {
        number: 5,
        name: "Geburah",
        name_hebrew: "גְּבוּרָה",
        meaning: "Severity",
        divine_name: "Elohim Gibor",
        archangel: "Samael",
        angelic_order: "Seraphim (Fiery Serpents)",
        planet: "Mars",
        mundane_chakra: "Sphere of Mars",
        spiritual_experience: "Vision of Power",
        virtue: "Energy, Courage",
        vice: Some("Cruelty, Destruction"),
        color_atziluth: "Orange",
        color_briah: "Scarlet red",
        color_yetzirah: "Bright scarlet",
        color_assiah: "Red, flecked black",
        tarot_association: "Four Fives",
        description: "Strength and severity. Destructive, limiting force that breaks down excess. Justice and necessary harshness.",
    },
    SephirahSeed {
        number: 6,
        name: "Tiphareth",
        name_hebrew: "תִּפְאֶרֶת",
        meaning: "Beauty",
        divine_name: "Jehovah Aloah va Daath",
        archangel: "Michael",
        angelic_order: "Malachim (Kings)",
        planet: "Sun",
        mundane_chakra: "Sphere of the Sun",
        spiritual_experience: "Vision of the Harmony of Things, Mysteries of the Crucifixion",
        virtue: "Devotion to the Great Work",
        vice: Some("Pride"),
        color_atziluth: "Clear pink rose",
        color_briah: "Yellow",
        color_yetzirah: "Rich salmon pink",
        color_assiah: "Golden amber",
        tarot_association: "Four Sixes, The Four Princes",
        description: "Beauty and harmony. The central balancing point of the Tree. The seat of the Higher Self and Solar consciousness.",
    },
    SephirahSeed {
        number: 7,
        name: "Netzach",
        name_hebrew: "נֶצַח",
        meaning: "Victory",
        divine_name: "Jehovah Tzabaoth",
        archangel: "Haniel",
        angelic_order: "Elohim (Gods)",
        planet: "Venus",
        mundane_chakra: "Sphere of Venus",
        spiritual_experience: "Vision of Beauty Triumphant",
        virtue: "Unselfishness",
        vice: Some("Impurity, Lust"),
        color_atziluth: "Amber",
        color_briah: "Emerald",
        color_yetzirah: "Bright yellow-green",
        color_assiah: "Olive, flecked gold",
        tarot_association: "Four Sevens",
        description: "Victory and endurance. The realm of emotion, desire, and creative inspiration. Nature, art, and the aesthetic sense.",
    },
    SephirahSeed {
        number: 8,
        name: "Hod",
        name_hebrew: "הוֹד",
        meaning: "Glory",
        divine_name: "Elohim Tzabaoth",
        archangel: "Raphael",
        angelic_order: "Beni Elohim (Sons of God)",
        planet: "Mercury",
        mundane_chakra: "Sphere of Mercury",
        spiritual_experience: "Vision of Splendor",
        virtue: "Truthfulness",
        vice: Some("Falsehood, Dishonesty"),
        color_atziluth: "Violet purple",
        color_briah: "Orange",
        color_yetzirah: "Russet red",
        color_assiah: "Yellowish black, flecked white",
        tarot_association: "Four Eights",
        description: "Splendor and intellect. The realm of thought, communication, and magic. Science, learning, and the rational mind.",
    },
    SephirahSeed {
        number: 9,
        name: "Yesod",
        name_hebrew: "יְסוֹד",
        meaning: "Foundation",
        divine_name: "Shaddai El Chai",
        archangel: "Gabriel",
        angelic_order: "Cherubim (The Strong)",
        planet: "Moon",
        mundane_chakra: "Sphere of the Moon",
        spiritual_experience: "Vision of the Machinery of the Universe",
        virtue: "Independence",
        vice: Some("Idleness"),
        color_atziluth: "Indigo",
        color_briah: "Violet",
        color_yetzirah: "Very dark purple",
        color_assiah: "Citrine, flecked azure",
        tarot_association: "Four Nines",
        description: "The Foundation, the astral realm. The subconscious mind, dreams, and the etheric template of physical reality.",
    },
    SephirahSeed {
        number: 10,
        name: "Malkuth",
        name_hebrew: "מַלְכוּת",
        meaning: "Kingdom",
        divine_name: "Adonai ha-Aretz",
        archangel: "Sandalphon",
        angelic_order: "Ashim (Souls of Fire)",
        planet: "Earth",
        mundane_chakra: "Sphere of the Elements",
        spiritual_experience: "Vision of the Holy Guardian Angel",
        virtue: "Discrimination",
        vice: Some("Avarice, Inertia"),
        color_atziluth: "Yellow",
        color_briah: "Citrine, olive, russet, black",
        color_yetzirah: "Citrine, olive, russet, black, flecked gold",
        color_assiah: "Black, rayed yellow",
        tarot_association: "Four Tens, The Four Princesses",
        description: "The Kingdom, the physical world. The material plane where all the other Sephiroth manifest in concrete form.",
    },
];

pub const PATHS: &[PathSeed] = &[
    PathSeed {
        number: 11,
        name: "The Path of Aleph",
        hebrew_letter: "Aleph",
        hebrew_letter_meaning: "Ox",
        tarot_card_number: 0,
        connects_from: 1,
        connects_to: 2,
        element: Some("Air"),
        planet: None,
        sign: None,
        color: "Bright pale yellow",
        description: "The Path of Air connecting Crown to Wisdom. The Fool's journey from unity into manifestation.",
    },
    PathSeed {
        number: 12,
        name: "The Path of Beth",
        hebrew_letter: "Beth",
        hebrew_letter_meaning: "House",
        tarot_card_number: 1,
        connects_from: 1,
        connects_to: 3,
        element: None,
        planet: Some("Mercury"),
        sign: None,
        color: "Yellow",
        description: "The Path of Mercury. The channel of divine will into form through communication and magic.",
    },
    PathSeed {
        number: 13,
        name: "The Path of Gimel",
        hebrew_letter: "Gimel",
        hebrew_letter_meaning: "Camel",
        tarot_card_number: 2,
        connects_from: 1,
        connects_to: 6,
        element: None,
        planet: Some("Moon"),
        sign: None,
        color: "Blue",
        description: "The Path of the Moon. The channel of divine light into beauty through intuition and the unconscious.",
    },
    PathSeed {
        number: 14,
        name: "The Path of Daleth",
        hebrew_letter: "Daleth",
        hebrew_letter_meaning: "Door",
        tarot_card_number: 3,
        connects_from: 2,
        connects_to: 3,
        element: None,
        planet: Some("Venus"),
        sign: None,
        color: "Emerald green",
        description: "The Path of Venus connecting Wisdom to Understanding. The union of opposites in love.",
    },
    PathSeed {
        number: 15,
        name: "The Path of Heh",
        hebrew_letter: "Heh",
        hebrew_letter_meaning: "Window",
        tarot_card_number: 4,
        connects_from: 2,
        connects_to: 6,
        element: None,
        planet: None,
        sign: Some("Aries"),
        color: "Scarlet",
        description: "The Path of Aries. The masculine force of will and authority descending to the heart center.",
    },
    PathSeed {
        number: 16,
        name: "The Path of Vav",
        hebrew_letter: "Vav",
        hebrew_letter_meaning: "Nail",
        tarot_card_number: 5,
        connects_from: 2,
        connects_to: 4,
        element: None,
        planet: None,
        sign: Some("Taurus"),
        color: "Red-orange",
        description: "The Path of Taurus. The channel of divine wisdom into mercy through spiritual teaching.",
    },
    PathSeed {
        number: 17,
        name: "The Path of Zain",
        hebrew_letter: "Zain",
        hebrew_letter_meaning: "Sword",
        tarot_card_number: 6,
        connects_from: 3,
        connects_to: 6,
        element: None,
        planet: None,
        sign: Some("Gemini"),
        color: "Orange",
        description: "The Path of Gemini. The descent from Understanding through the choices and dualities of life.",
    },
    PathSeed {
        number: 18,
        name: "The Path of Cheth",
        hebrew_letter: "Cheth",
        hebrew_letter_meaning: "Fence",
        tarot_card_number: 7,
        connects_from: 3,
        connects_to: 5,
        element: None,
        planet: None,
        sign: Some("Cancer"),
        color: "Amber",
        description: "The Path of Cancer. The channel of form-giving understanding into the severity of discipline.",
    },
    PathSeed {
        number: 19,
        name: "The Path of Teth",
        hebrew_letter: "Teth",
        hebrew_letter_meaning: "Serpent",
        tarot_card_number: 8,
        connects_from: 4,
        connects_to: 5,
        element: None,
        planet: None,
        sign: Some("Leo"),
        color: "Yellow-green",
        description: "The Path of Leo. The balance between mercy and severity through controlled passion.",
    },
    PathSeed {
        number: 20,
        name: "The Path of Yod",
        hebrew_letter: "Yod",
        hebrew_letter_meaning: "Hand",
        tarot_card_number: 9,
        connects_from: 4,
        connects_to: 6,
        element: None,
        planet: None,
        sign: Some("Virgo"),
        color: "Yellow-green",
        description: "The Path of Virgo. The descent of mercy into beauty through introspection and wisdom.",
    },
    PathSeed {
        number: 21,
        name: "The Path of Kaph",
        hebrew_letter: "Kaph",
        hebrew_letter_meaning: "Fist",
        tarot_card_number: 10,
        connects_from: 4,
        connects_to: 7,
        element: None,
        planet: Some("Jupiter"),
        sign: None,
        color: "Violet",
        description: "The Path of Jupiter. The expansive force of fortune descending from mercy to victory.",
    },
    PathSeed {
        number: 22,
        name: "The Path of Lamed",
        hebrew_letter: "Lamed",
        hebrew_letter_meaning: "Ox Goad",
        tarot_card_number: 11,
        connects_from: 5,
        connects_to: 6,
        element: None,
        planet: None,
        sign: Some("Libra"),
        color: "Emerald green",
        description: "The Path of Libra. The balancing of severity into the harmony of beauty.",
    },
    PathSeed {
        number: 23,
        name: "The Path of Mem",
        hebrew_letter: "Mem",
        hebrew_letter_meaning: "Water",
        tarot_card_number: 12,
        connects_from: 5,
        connects_to: 8,
        element: Some("Water"),
        planet: None,
        sign: None,
        color: "Deep blue",
        description: "The Path of Water. The descent of severity into the realm of intellect through sacrifice.",
    },
    PathSeed {
        number: 24,
        name: "The Path of Nun",
        hebrew_letter: "Nun",
        hebrew_letter_meaning: "Fish",
        tarot_card_number: 13,
        connects_from: 6,
        connects_to: 7,
        element: None,
        planet: None,
        sign: Some("Scorpio"),
        color: "Green-blue",
        description: "The Path of Scorpio. Transformation from the center of beauty into the realm of emotion.",
    },
    PathSeed {
        number: 25,
        name: "The Path of Samekh",
        hebrew_letter: "Samekh",
        hebrew_letter_meaning: "Prop",
        tarot_card_number: 14,
        connects_from: 6,
        connects_to: 9,
        element: None,
        planet: None,
        sign: Some("Sagittarius"),
        color: "Blue",
        description: "The Path of Sagittarius. The arrow from beauty to foundation, the path of spiritual alchemy.",
    },
    PathSeed {
        number: 26,
        name: "The Path of Ayin",
        hebrew_letter: "Ayin",
        hebrew_letter_meaning: "Eye",
        tarot_card_number: 15,
        connects_from: 6,
        connects_to: 8,
        element: None,
        planet: None,
        sign: Some("Capricorn"),
        color: "Indigo",
        description: "The Path of Capricorn. The binding of beauty to intellect through earthly manifestation.",
    },
    PathSeed {
        number: 27,
        name: "The Path of Peh",
        hebrew_letter: "Peh",
        hebrew_letter_meaning: "Mouth",
        tarot_card_number: 16,
        connects_from: 7,
        connects_to: 8,
        element: None,
        planet: Some("Mars"),
        sign: None,
        color: "Scarlet",
        description: "The Path of Mars. The destructive force breaking down between emotion and intellect.",
    },
    PathSeed {
        number: 28,
        name: "The Path of Tzaddi",
        hebrew_letter: "Tzaddi",
        hebrew_letter_meaning: "Fish Hook",
        tarot_card_number: 17,
        connects_from: 7,
        connects_to: 9,
        element: None,
        planet: None,
        sign: Some("Aquarius"),
        color: "Violet",
        description: "The Path of Aquarius. Hope and inspiration flowing from victory to foundation.",
    },
    PathSeed {
        number: 29,
        name: "The Path of Qoph",
        hebrew_letter: "Qoph",
        hebrew_letter_meaning: "Back of Head",
        tarot_card_number: 18,
        connects_from: 7,
        connects_to: 10,
        element: None,
        planet: None,
        sign: Some("Pisces"),
        color: "Crimson (ultra-violet)",
        description: "The Path of Pisces. The descent from emotion into the material realm through illusion.",
    },
    PathSeed {
        number: 30,
        name: "The Path of Resh",
        hebrew_letter: "Resh",
        hebrew_letter_meaning: "Head",
        tarot_card_number: 19,
        connects_from: 8,
        connects_to: 9,
        element: None,
        planet: Some("Sun"),
        sign: None,
        color: "Orange",
        description: "The Path of the Sun. The illumination connecting intellect to the astral foundation.",
    },
    PathSeed {
        number: 31,
        name: "The Path of Shin",
        hebrew_letter: "Shin",
        hebrew_letter_meaning: "Tooth",
        tarot_card_number: 20,
        connects_from: 8,
        connects_to: 10,
        element: Some("Fire"),
        planet: None,
        sign: None,
        color: "Glowing orange-scarlet",
        description: "The Path of Fire. The final judgment and awakening from mind into matter.",
    },
    PathSeed {
        number: 32,
        name: "The Path of Tau",
        hebrew_letter: "Tau",
        hebrew_letter_meaning: "Cross",
        tarot_card_number: 21,
        connects_from: 9,
        connects_to: 10,
        element: Some("Earth"),
        planet: Some("Saturn"),
        sign: None,
        color: "Indigo",
        description: "The Path of Earth and Saturn. The final descent from foundation into complete manifestation.",
    },
];
