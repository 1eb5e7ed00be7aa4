//! The base 78-card deck: names, numbering, meanings and keywords.
//!
//! Major Arcana use Rider-Waite-Smith numbering (Strength is VIII, Justice
//! is XI). Minor Arcana run 22..=77 in suit order Wands, Cups, Swords,
//! Pentacles, each suit Ace through Ten followed by Page, Knight, Queen, King.

use serde::Serialize;

use crate::models::{Arcana, Element, Suit};

/// One entry of the base card list, before correspondences are attached.
#[derive(Debug, Clone, Serialize)]
pub struct CardSeed {
    pub number: i64,
    pub name: String,
    pub arcana: Arcana,
    pub suit: Option<Suit>,
    pub element: Option<Element>,
    pub astrology: Option<&'static str>,
    pub upright_meaning: &'static str,
    pub reversed_meaning: &'static str,
    pub description: &'static str,
    pub keywords: &'static [&'static str],
}

struct Major {
    name: &'static str,
    element: Element,
    astrology: &'static str,
    upright: &'static str,
    reversed: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
}

struct Minor {
    upright: &'static str,
    reversed: &'static str,
    description: &'static str,
    keywords: &'static [&'static str],
}

pub const RANKS: [&str; 14] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Page",
    "Knight", "Queen", "King",
];

const MAJORS: [Major; 22] = [
    Major {
        name: "The Fool",
        element: Element::Air,
        astrology: "Uranus",
        upright: "New beginnings, innocence, spontaneity, a free spirit, faith in the journey",
        reversed: "Recklessness, naivety, foolish risk-taking, holding back",
        description: "A young traveler steps toward the edge of a cliff with a white rose and a small bundle, a dog at his heels, the sun bright behind him.",
        keywords: &["beginnings", "innocence", "spontaneity", "freedom"],
    },
    Major {
        name: "The Magician",
        element: Element::Air,
        astrology: "Mercury",
        upright: "Manifestation, willpower, skill, resourcefulness, concentrated action",
        reversed: "Manipulation, untapped talent, trickery, scattered intent",
        description: "A figure stands at a table holding the tools of all four suits, one hand raised to the heavens and the other pointing to the earth.",
        keywords: &["manifestation", "willpower", "skill", "resourcefulness"],
    },
    Major {
        name: "The High Priestess",
        element: Element::Water,
        astrology: "Moon",
        upright: "Intuition, hidden knowledge, the subconscious, sacred mystery",
        reversed: "Secrets, withdrawal, ignoring inner guidance, surface knowledge",
        description: "A veiled priestess sits between a dark and a light pillar, a scroll of law in her lap and a crescent moon at her feet.",
        keywords: &["intuition", "mystery", "subconscious", "wisdom"],
    },
    Major {
        name: "The Empress",
        element: Element::Earth,
        astrology: "Venus",
        upright: "Abundance, fertility, nurturing, sensuality, the beauty of nature",
        reversed: "Creative block, dependence, smothering, neglect of self",
        description: "A crowned woman rests on cushions in a ripening wheat field, a shield bearing the sign of Venus beside her.",
        keywords: &["abundance", "fertility", "nurturing", "nature"],
    },
    Major {
        name: "The Emperor",
        element: Element::Fire,
        astrology: "Aries",
        upright: "Authority, structure, stability, leadership, a father figure",
        reversed: "Tyranny, rigidity, domination, lack of discipline",
        description: "A stern ruler sits on a stone throne carved with rams, holding an ankh scepter and an orb before barren mountains.",
        keywords: &["authority", "structure", "control", "fatherhood"],
    },
    Major {
        name: "The Hierophant",
        element: Element::Earth,
        astrology: "Taurus",
        upright: "Tradition, spiritual teaching, conformity, institutions, shared belief",
        reversed: "Rebellion, unorthodoxy, personal belief, challenging convention",
        description: "A religious teacher in a triple crown blesses two acolytes kneeling before him, crossed keys at his feet.",
        keywords: &["tradition", "teaching", "belief", "institution"],
    },
    Major {
        name: "The Lovers",
        element: Element::Air,
        astrology: "Gemini",
        upright: "Love, union, harmony, meaningful choices, alignment of values",
        reversed: "Disharmony, imbalance, misaligned values, self-love neglected",
        description: "An angel spreads its wings above a man and a woman standing before the trees of knowledge and of life.",
        keywords: &["love", "union", "choice", "harmony"],
    },
    Major {
        name: "The Chariot",
        element: Element::Water,
        astrology: "Cancer",
        upright: "Willpower, determination, victory, control over opposing forces",
        reversed: "Lack of direction, aggression, scattered energy, defeat",
        description: "An armored charioteer rides beneath a starry canopy, drawn by two sphinxes, one black and one white.",
        keywords: &["determination", "victory", "control", "willpower"],
    },
    Major {
        name: "Strength",
        element: Element::Fire,
        astrology: "Leo",
        upright: "Courage, inner strength, compassion, patience, gentle influence",
        reversed: "Self-doubt, weakness, insecurity, raw emotion",
        description: "A woman crowned with flowers calmly closes the jaws of a lion, the sign of infinity above her head.",
        keywords: &["courage", "compassion", "patience", "strength"],
    },
    Major {
        name: "The Hermit",
        element: Element::Earth,
        astrology: "Virgo",
        upright: "Introspection, solitude, inner guidance, soul-searching",
        reversed: "Isolation, loneliness, withdrawal, refusing counsel",
        description: "A grey-robed elder stands alone on a mountain peak, holding a lantern that shelters a six-pointed star.",
        keywords: &["introspection", "solitude", "guidance", "wisdom"],
    },
    Major {
        name: "Wheel of Fortune",
        element: Element::Fire,
        astrology: "Jupiter",
        upright: "Cycles, fate, turning points, good fortune, destiny",
        reversed: "Bad luck, resistance to change, breaking cycles",
        description: "A great wheel inscribed with letters turns in the clouds, a sphinx above it and a serpent descending beside it.",
        keywords: &["cycles", "fate", "fortune", "change"],
    },
    Major {
        name: "Justice",
        element: Element::Air,
        astrology: "Libra",
        upright: "Fairness, truth, cause and effect, law, accountability",
        reversed: "Unfairness, dishonesty, avoidance of responsibility",
        description: "A crowned figure sits between two pillars holding upright scales in one hand and a raised sword in the other.",
        keywords: &["justice", "truth", "fairness", "law"],
    },
    Major {
        name: "The Hanged Man",
        element: Element::Water,
        astrology: "Neptune",
        upright: "Surrender, letting go, new perspectives, pause",
        reversed: "Stalling, indecision, needless sacrifice, resistance",
        description: "A man hangs upside down by one foot from a living tree, his face calm and his head ringed with light.",
        keywords: &["surrender", "perspective", "suspension", "sacrifice"],
    },
    Major {
        name: "Death",
        element: Element::Water,
        astrology: "Scorpio",
        upright: "Endings, transformation, transition, release of the old",
        reversed: "Resistance to change, stagnation, fear of endings",
        description: "A skeleton in black armor rides a white horse carrying a banner marked with a white rose, as figures of every station fall before it.",
        keywords: &["endings", "transformation", "transition", "release"],
    },
    Major {
        name: "Temperance",
        element: Element::Fire,
        astrology: "Sagittarius",
        upright: "Balance, moderation, patience, purpose, blending of opposites",
        reversed: "Imbalance, excess, impatience, lack of long-term vision",
        description: "A winged angel stands with one foot on land and one in water, pouring liquid between two cups.",
        keywords: &["balance", "moderation", "patience", "alchemy"],
    },
    Major {
        name: "The Devil",
        element: Element::Earth,
        astrology: "Capricorn",
        upright: "Bondage, materialism, addiction, shadow self, temptation",
        reversed: "Release, breaking free, reclaiming power, detachment",
        description: "A horned figure perches on a pedestal to which a naked man and woman are loosely chained.",
        keywords: &["bondage", "temptation", "materialism", "shadow"],
    },
    Major {
        name: "The Tower",
        element: Element::Fire,
        astrology: "Mars",
        upright: "Sudden upheaval, revelation, chaos, the collapse of false structures",
        reversed: "Averted disaster, fear of change, delaying the inevitable",
        description: "Lightning strikes a tall tower on a crag, throwing off its crown as two figures fall through flames.",
        keywords: &["upheaval", "revelation", "awakening", "chaos"],
    },
    Major {
        name: "The Star",
        element: Element::Air,
        astrology: "Aquarius",
        upright: "Hope, renewal, inspiration, serenity, faith",
        reversed: "Despair, discouragement, disconnection, lack of faith",
        description: "A kneeling woman pours water onto land and into a pool beneath one great star and seven smaller ones.",
        keywords: &["hope", "renewal", "inspiration", "serenity"],
    },
    Major {
        name: "The Moon",
        element: Element::Water,
        astrology: "Pisces",
        upright: "Illusion, intuition, dreams, the unconscious, uncertainty",
        reversed: "Release of fear, clarity emerging, repressed emotion",
        description: "A dog and a wolf howl at the moon between two towers while a crayfish climbs from a pool onto a winding path.",
        keywords: &["illusion", "dreams", "intuition", "uncertainty"],
    },
    Major {
        name: "The Sun",
        element: Element::Fire,
        astrology: "Sun",
        upright: "Joy, success, vitality, positivity, warmth",
        reversed: "Temporary sadness, blocked joy, overconfidence",
        description: "A child rides a white horse beneath a radiant sun, sunflowers rising over the wall behind him.",
        keywords: &["joy", "success", "vitality", "optimism"],
    },
    Major {
        name: "Judgement",
        element: Element::Fire,
        astrology: "Pluto",
        upright: "Rebirth, inner calling, absolution, reckoning",
        reversed: "Self-doubt, refusal of the call, harsh self-judgement",
        description: "An angel sounds a trumpet from the clouds as the dead rise from their coffins with arms outstretched.",
        keywords: &["rebirth", "calling", "absolution", "awakening"],
    },
    Major {
        name: "The World",
        element: Element::Earth,
        astrology: "Saturn",
        upright: "Completion, integration, accomplishment, wholeness, travel",
        reversed: "Incompletion, lack of closure, shortcuts, delay",
        description: "A dancer floats within a laurel wreath, the four fixed creatures of the zodiac watching from the corners.",
        keywords: &["completion", "integration", "accomplishment", "wholeness"],
    },
];

const WANDS: [Minor; 14] = [
    Minor {
        upright: "Inspiration, new venture, creative spark, potential",
        reversed: "Delays, lack of motivation, false start",
        description: "A hand emerges from a cloud grasping a sprouting wand above a distant castle.",
        keywords: &["inspiration", "creation", "potential"],
    },
    Minor {
        upright: "Planning, future vision, decisions, leaving comfort",
        reversed: "Fear of the unknown, poor planning, playing safe",
        description: "A man holds a globe and looks out from castle battlements, one wand fixed to the wall beside him.",
        keywords: &["planning", "vision", "decision"],
    },
    Minor {
        upright: "Expansion, foresight, progress, overseas opportunity",
        reversed: "Obstacles to expansion, frustrated plans, delays",
        description: "A figure stands on a cliff watching ships sail out, three wands planted in the ground.",
        keywords: &["expansion", "foresight", "progress"],
    },
    Minor {
        upright: "Celebration, homecoming, harmony, community",
        reversed: "Unstable home, transition, lack of support",
        description: "Four wands hung with garlands frame a celebration before a castle.",
        keywords: &["celebration", "home", "harmony"],
    },
    Minor {
        upright: "Competition, conflict, rivalry, differing opinions",
        reversed: "Avoiding conflict, inner tension, resolution",
        description: "Five youths brandish wands against one another in a chaotic mock battle.",
        keywords: &["competition", "conflict", "rivalry"],
    },
    Minor {
        upright: "Victory, public recognition, progress, self-confidence",
        reversed: "Fall from grace, egotism, private achievement",
        description: "A laurel-crowned rider parades on horseback through a cheering crowd.",
        keywords: &["victory", "recognition", "success"],
    },
    Minor {
        upright: "Defense, perseverance, standing your ground",
        reversed: "Overwhelm, giving up, exhaustion",
        description: "A man on high ground defends himself against six wands rising from below.",
        keywords: &["defense", "perseverance", "courage"],
    },
    Minor {
        upright: "Swift action, movement, news arriving, momentum",
        reversed: "Delays, frustration, waiting, haste",
        description: "Eight wands fly through open sky over a peaceful landscape.",
        keywords: &["speed", "movement", "news"],
    },
    Minor {
        upright: "Resilience, persistence, last stand, boundaries",
        reversed: "Paranoia, fatigue, defensiveness",
        description: "A bandaged man leans on a wand, guarding a row of eight more behind him.",
        keywords: &["resilience", "persistence", "boundaries"],
    },
    Minor {
        upright: "Burden, responsibility, hard work, strain",
        reversed: "Delegation, release, collapse under weight",
        description: "A man bends under a bundle of ten wands as he trudges toward a town.",
        keywords: &["burden", "responsibility", "effort"],
    },
    Minor {
        upright: "Enthusiasm, exploration, discovery, free spirit",
        reversed: "Scattered energy, setbacks, lack of direction",
        description: "A young page in a desert studies the wand he holds upright.",
        keywords: &["enthusiasm", "exploration", "discovery"],
    },
    Minor {
        upright: "Energy, passion, adventure, impulsiveness",
        reversed: "Haste, frustration, recklessness",
        description: "A knight on a rearing horse charges across a desert with a wand raised.",
        keywords: &["passion", "adventure", "impulsiveness"],
    },
    Minor {
        upright: "Confidence, determination, warmth, vibrancy",
        reversed: "Jealousy, insecurity, demanding nature",
        description: "A queen sits on a lion throne holding a wand and a sunflower, a black cat at her feet.",
        keywords: &["confidence", "warmth", "determination"],
    },
    Minor {
        upright: "Natural leadership, vision, entrepreneurship, honor",
        reversed: "Impulsiveness, overbearing manner, high expectations",
        description: "A king sits on a throne decorated with lions and salamanders, a flowering wand in hand.",
        keywords: &["leadership", "vision", "honor"],
    },
];

const CUPS: [Minor; 14] = [
    Minor {
        upright: "New feelings, compassion, love, emotional awakening",
        reversed: "Blocked emotions, emptiness, repressed feeling",
        description: "A hand from a cloud offers an overflowing cup as a dove descends with a wafer.",
        keywords: &["emotion", "compassion", "love"],
    },
    Minor {
        upright: "Partnership, mutual attraction, unity, connection",
        reversed: "Imbalance, broken communication, tension",
        description: "A couple exchange cups beneath a winged lion's head above a caduceus.",
        keywords: &["partnership", "attraction", "unity"],
    },
    Minor {
        upright: "Friendship, celebration, community, creativity",
        reversed: "Overindulgence, gossip, isolation",
        description: "Three women raise their cups in a joyful dance among the harvest.",
        keywords: &["friendship", "celebration", "community"],
    },
    Minor {
        upright: "Contemplation, apathy, reevaluation, missed offers",
        reversed: "Renewed awareness, acceptance, choosing happiness",
        description: "A young man sits beneath a tree, arms folded, ignoring a cup offered from a cloud.",
        keywords: &["contemplation", "apathy", "reevaluation"],
    },
    Minor {
        upright: "Loss, grief, regret, disappointment",
        reversed: "Acceptance, moving on, forgiveness",
        description: "A cloaked figure mourns three spilled cups while two still stand behind him.",
        keywords: &["loss", "grief", "regret"],
    },
    Minor {
        upright: "Nostalgia, childhood memories, innocence, kindness",
        reversed: "Living in the past, unrealistic memories",
        description: "A child offers a cup of flowers to a younger child in an old courtyard.",
        keywords: &["nostalgia", "memories", "kindness"],
    },
    Minor {
        upright: "Choices, illusion, fantasy, wishful thinking",
        reversed: "Clarity, alignment, sobering decisions",
        description: "A figure faces seven cups floating in clouds, each holding a different vision.",
        keywords: &["choices", "illusion", "fantasy"],
    },
    Minor {
        upright: "Walking away, disillusionment, seeking deeper meaning",
        reversed: "Fear of change, aimless drifting, stagnation",
        description: "A cloaked traveler leaves eight stacked cups behind under an eclipsed moon.",
        keywords: &["departure", "disillusionment", "search"],
    },
    Minor {
        upright: "Contentment, satisfaction, wishes fulfilled",
        reversed: "Smugness, dissatisfaction, inner emptiness",
        description: "A satisfied man sits before a curved row of nine cups, arms folded.",
        keywords: &["contentment", "satisfaction", "gratitude"],
    },
    Minor {
        upright: "Harmony, happy family, emotional fulfillment, alignment",
        reversed: "Disconnection, broken family, misaligned values",
        description: "A family rejoices beneath a rainbow of ten cups arching over their home.",
        keywords: &["harmony", "family", "fulfillment"],
    },
    Minor {
        upright: "Creative opportunity, curiosity, intuitive messages",
        reversed: "Emotional immaturity, creative block, insecurity",
        description: "A page studies a fish peeking out of the cup he holds by the sea.",
        keywords: &["curiosity", "creativity", "intuition"],
    },
    Minor {
        upright: "Romance, charm, imagination, following the heart",
        reversed: "Moodiness, unrealistic ideals, jealousy",
        description: "A knight on a calm white horse carries a cup forward like an offering.",
        keywords: &["romance", "charm", "imagination"],
    },
    Minor {
        upright: "Compassion, emotional security, intuition, care",
        reversed: "Codependency, martyrdom, emotional insecurity",
        description: "A queen sits at the water's edge gazing into an ornate covered cup.",
        keywords: &["compassion", "care", "intuition"],
    },
    Minor {
        upright: "Emotional balance, diplomacy, calm control, generosity",
        reversed: "Coldness, manipulation, volatility",
        description: "A king sits on a throne floating on a rough sea, holding a cup and scepter.",
        keywords: &["balance", "diplomacy", "generosity"],
    },
];

const SWORDS: [Minor; 14] = [
    Minor {
        upright: "Breakthrough, clarity, truth, sharp mind",
        reversed: "Confusion, misused power, clouded judgement",
        description: "A hand from a cloud grips an upright sword crowned with a wreath.",
        keywords: &["clarity", "truth", "breakthrough"],
    },
    Minor {
        upright: "Difficult decisions, stalemate, avoidance",
        reversed: "Information overload, indecision revealed, confusion",
        description: "A blindfolded woman sits by the sea with two swords crossed over her chest.",
        keywords: &["stalemate", "decision", "avoidance"],
    },
    Minor {
        upright: "Heartbreak, sorrow, grief, painful truth",
        reversed: "Recovery, forgiveness, releasing pain",
        description: "Three swords pierce a red heart against a grey, rainy sky.",
        keywords: &["heartbreak", "sorrow", "grief"],
    },
    Minor {
        upright: "Rest, recuperation, contemplation, retreat",
        reversed: "Restlessness, burnout, stagnation",
        description: "A knight lies in repose on a tomb beneath a stained glass window, three swords above him.",
        keywords: &["rest", "recovery", "contemplation"],
    },
    Minor {
        upright: "Conflict, defeat, winning at all costs, tension",
        reversed: "Reconciliation, making amends, past resentment",
        description: "A smirking man gathers swords as two defeated figures walk away.",
        keywords: &["conflict", "defeat", "tension"],
    },
    Minor {
        upright: "Transition, moving on, leaving behind, rite of passage",
        reversed: "Unfinished business, resistance to transition",
        description: "A ferryman carries a woman and child across calm water, six swords in the boat.",
        keywords: &["transition", "passage", "moving on"],
    },
    Minor {
        upright: "Deception, strategy, stealth, getting away with it",
        reversed: "Confession, conscience, coming clean",
        description: "A man sneaks away from a camp carrying five swords and glancing back.",
        keywords: &["deception", "strategy", "stealth"],
    },
    Minor {
        upright: "Restriction, self-imposed limits, feeling trapped",
        reversed: "Release, new perspective, self-acceptance",
        description: "A bound and blindfolded woman stands surrounded by eight swords in the mud.",
        keywords: &["restriction", "entrapment", "limitation"],
    },
    Minor {
        upright: "Anxiety, worry, nightmares, despair",
        reversed: "Hope, reaching out, releasing worry",
        description: "A woman sits up in bed, head in her hands, nine swords on the wall behind her.",
        keywords: &["anxiety", "worry", "nightmares"],
    },
    Minor {
        upright: "Painful ending, rock bottom, betrayal, finality",
        reversed: "Recovery, regeneration, surviving the worst",
        description: "A man lies face down pierced by ten swords as dawn breaks over the water.",
        keywords: &["ending", "betrayal", "finality"],
    },
    Minor {
        upright: "Curiosity, new ideas, vigilance, mental energy",
        reversed: "Deception, hasty speech, scattered thought",
        description: "A page stands on windy high ground holding a sword ready.",
        keywords: &["curiosity", "ideas", "vigilance"],
    },
    Minor {
        upright: "Ambition, drive, fast thinking, decisive action",
        reversed: "Restlessness, impulsiveness, burnout",
        description: "A knight charges into the wind on a galloping horse, sword raised.",
        keywords: &["ambition", "drive", "action"],
    },
    Minor {
        upright: "Independence, clear boundaries, direct communication",
        reversed: "Bitterness, coldness, cruelty",
        description: "A queen sits in profile with sword upright, one hand extended in welcome.",
        keywords: &["independence", "clarity", "boundaries"],
    },
    Minor {
        upright: "Intellectual power, authority, truth, ethics",
        reversed: "Manipulation, tyranny, abuse of power",
        description: "A king sits facing forward on his throne, sword held upright and slightly tilted.",
        keywords: &["authority", "intellect", "truth"],
    },
];

const PENTACLES: [Minor; 14] = [
    Minor {
        upright: "New financial opportunity, prosperity, manifestation",
        reversed: "Lost opportunity, poor planning, scarcity",
        description: "A hand from a cloud holds a golden pentacle above a flowering garden path.",
        keywords: &["opportunity", "prosperity", "manifestation"],
    },
    Minor {
        upright: "Balancing priorities, adaptability, time management",
        reversed: "Overcommitment, disorganization, imbalance",
        description: "A young man juggles two pentacles bound by an infinity loop as ships ride high waves.",
        keywords: &["balance", "adaptability", "priorities"],
    },
    Minor {
        upright: "Teamwork, collaboration, skilled craft, learning",
        reversed: "Disharmony, poor teamwork, mediocre work",
        description: "A stonemason works in a cathedral while a monk and an architect consult plans.",
        keywords: &["teamwork", "craft", "collaboration"],
    },
    Minor {
        upright: "Security, conservation, control, saving",
        reversed: "Greed, materialism, overspending",
        description: "A crowned man clutches a pentacle to his chest, others under his feet and on his head.",
        keywords: &["security", "control", "conservation"],
    },
    Minor {
        upright: "Hardship, poverty, isolation, worry",
        reversed: "Recovery from loss, spiritual poverty ending, help arriving",
        description: "Two ragged figures pass through snow beneath a lit church window.",
        keywords: &["hardship", "poverty", "isolation"],
    },
    Minor {
        upright: "Generosity, charity, sharing wealth, fairness",
        reversed: "Strings attached, debt, one-sided charity",
        description: "A merchant weighs coins on scales and gives them to kneeling beggars.",
        keywords: &["generosity", "charity", "sharing"],
    },
    Minor {
        upright: "Patience, long-term view, sustainable results, investment",
        reversed: "Impatience, limited reward, lack of growth",
        description: "A farmer leans on his hoe and studies the pentacles growing on a vine.",
        keywords: &["patience", "investment", "growth"],
    },
    Minor {
        upright: "Diligence, apprenticeship, skill development, mastery",
        reversed: "Perfectionism, lack of focus, uninspired work",
        description: "A craftsman carefully engraves pentacles at his bench, finished ones hung beside him.",
        keywords: &["diligence", "skill", "mastery"],
    },
    Minor {
        upright: "Abundance, luxury, self-sufficiency, refinement",
        reversed: "Overwork, superficiality, financial setbacks",
        description: "An elegant woman stands in a vineyard with a hooded falcon on her gloved hand.",
        keywords: &["abundance", "luxury", "independence"],
    },
    Minor {
        upright: "Wealth, legacy, family, long-term success",
        reversed: "Family disputes, financial failure, loss of legacy",
        description: "An old man sits with dogs at the gate of an estate, his family gathered within.",
        keywords: &["wealth", "legacy", "family"],
    },
    Minor {
        upright: "Manifestation, new study, ambition, diligence",
        reversed: "Lack of progress, procrastination, missed lessons",
        description: "A page in a green field gazes intently at the pentacle he holds aloft.",
        keywords: &["study", "ambition", "manifestation"],
    },
    Minor {
        upright: "Hard work, routine, reliability, methodical progress",
        reversed: "Boredom, stagnation, laziness",
        description: "A knight sits still on a heavy horse, holding a pentacle over ploughed fields.",
        keywords: &["reliability", "routine", "hard work"],
    },
    Minor {
        upright: "Practicality, nurturing, financial security, comfort",
        reversed: "Self-neglect, work-home imbalance, smothering",
        description: "A queen sits in a flowering bower cradling a pentacle in her lap, a rabbit nearby.",
        keywords: &["practicality", "nurturing", "security"],
    },
    Minor {
        upright: "Wealth, business acumen, discipline, abundance",
        reversed: "Greed, stubbornness, financially inept",
        description: "A king in a robe of grapevines sits on a bull-carved throne with a pentacle and scepter.",
        keywords: &["wealth", "discipline", "abundance"],
    },
];

/// Build the full 78-card list in number order.
pub fn base_cards() -> Vec<CardSeed> {
    let mut cards = Vec::with_capacity(78);

    for (number, major) in MAJORS.iter().enumerate() {
        cards.push(CardSeed {
            number: number as i64,
            name: major.name.to_string(),
            arcana: Arcana::Major,
            suit: None,
            element: Some(major.element),
            astrology: Some(major.astrology),
            upright_meaning: major.upright,
            reversed_meaning: major.reversed,
            description: major.description,
            keywords: major.keywords,
        });
    }

    let suits: [(Suit, &[Minor; 14]); 4] = [
        (Suit::Wands, &WANDS),
        (Suit::Cups, &CUPS),
        (Suit::Swords, &SWORDS),
        (Suit::Pentacles, &PENTACLES),
    ];

    for (suit, minors) in suits {
        for (rank, minor) in RANKS.iter().zip(minors.iter()) {
            cards.push(CardSeed {
                number: cards.len() as i64,
                name: format!("{} of {}", rank, suit.as_str()),
                arcana: Arcana::Minor,
                suit: Some(suit),
                element: Some(suit.element()),
                astrology: None,
                upright_meaning: minor.upright,
                reversed_meaning: minor.reversed,
                description: minor.description,
                keywords: minor.keywords,
            });
        }
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_is_contiguous() {
        let cards = base_cards();
        assert_eq!(cards.len(), 78);
        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.number, i as i64);
        }
        assert_eq!(cards.iter().filter(|c| c.arcana == Arcana::Major).count(), 22);
    }

    #[test]
    fn test_minor_numbering() {
        let cards = base_cards();
        assert_eq!(cards[22].name, "Ace of Wands");
        assert_eq!(cards[36].name, "Ace of Cups");
        assert_eq!(cards[63].name, "King of Swords");
        assert_eq!(cards[77].name, "King of Pentacles");
        assert_eq!(cards[77].element, Some(Element::Earth));
    }

    #[test]
    fn test_names_unique() {
        let cards = base_cards();
        let mut names: Vec<_> = cards.iter().map(|c| c.name.to_lowercase()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 78);
    }
}
