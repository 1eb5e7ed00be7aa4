//! Ceremonial practices of the Golden Dawn current.

use serde::Serialize;

use crate::models::Difficulty;

#[derive(Debug, Serialize)]
pub struct RitualSeed {
    pub name: &'static str,
    pub abbreviation: &'static str,
    pub tradition: &'static str,
    pub category: &'static str,
    pub purpose: &'static str,
    pub difficulty: Difficulty,
    pub duration_minutes: i64,
    pub requires_tools: &'static [&'static str],
    pub elemental_focus: Option<&'static str>,
    pub sephiroth_focus: Option<&'static str>,
    pub planetary_focus: Option<&'static str>,
    pub timing_notes: Option<&'static str>,
    pub instructions: &'static str,
    pub visualization: Option<&'static str>,
    pub words_of_power: Option<&'static str>,
    pub benefits: Option<&'static str>,
    pub warnings: Option<&'static str>,
    pub source: Option<&'static str>,
    pub description: &'static str,
}

pub const RITUALS: &[RitualSeed] = &[
    RitualSeed {
        name: "Lesser Banishing Ritual of the Pentagram",
        abbreviation: "LBRP",
        tradition: "Golden Dawn",
        category: "Banishing",
        purpose: "To banish unwanted energies and establish sacred space for magical work",
        difficulty: Difficulty::Beginner,
        duration_minutes: 10,
        requires_tools: &["Ritual dagger or wand (optional)"],
        elemental_focus: None,
        sephiroth_focus: None,
        planetary_focus: None,
        timing_notes: Some("Can be performed any time, traditionally morning and evening"),
        instructions: r#"1. Face East. Perform the Qabalistic Cross:
   - Touch forehead: "Atah" (Thou art)
   - Touch chest: "Malkuth" (the Kingdom)
   - Touch right shoulder: "ve-Geburah" (and the Power)
   - Touch left shoulder: "ve-Gedulah" (and the Glory)
   - Clasp hands at chest: "le-Olam, Amen" (forever, Amen)

2. Face East, trace large pentagram, vibrate "YHVH" (yod-heh-vav-heh)
3. Face South, trace pentagram, vibrate "ADONAI"
4. Face West, trace pentagram, vibrate "EHEIEH"
5. Face North, trace pentagram, vibrate "AGLA"

6. Return to East, extend arms in cross:
   "Before me, RAPHAEL
    Behind me, GABRIEL
    On my right hand, MICHAEL
    On my left hand, AURIEL
    For about me flames the Pentagram
    And in the column shines the Six-Rayed Star"

7. Repeat the Qabalistic Cross to close"#,
        visualization: Some("Blue-white pentagrams blazing at the quarters, archangels as towering figures in their elemental colors"),
        words_of_power: Some("YHVH, ADONAI, EHEIEH, AGLA, Raphael, Gabriel, Michael, Auriel"),
        benefits: Some("Daily practice establishes psychic boundaries, clears space, balances energies, and strengthens the aura"),
        warnings: Some("None - this is a safe foundational practice suitable for all"),
        source: Some("Hermetic Order of the Golden Dawn"),
        description: "The cornerstone ritual of Western ceremonial magic, establishing sacred space and invoking divine protection through the four quarters and archangels.",
    },
    RitualSeed {
        name: "Lesser Invoking Ritual of the Pentagram",
        abbreviation: "LIRP",
        tradition: "Golden Dawn",
        category: "Invoking",
        purpose: "To invoke and concentrate elemental energies for magical work",
        difficulty: Difficulty::Beginner,
        duration_minutes: 10,
        requires_tools: &["Ritual dagger or wand (optional)"],
        elemental_focus: None,
        sephiroth_focus: None,
        planetary_focus: None,
        timing_notes: Some("After LBRP, before specific magical workings"),
        instructions: r#"Identical to LBRP except:
- Pentagrams are traced starting from opposite point (invoking form)
- Used to draw energies in rather than banish them out
- Typically followed by specific elemental or planetary work

Structure same as LBRP with Qabalistic Cross opening and closing."#,
        visualization: Some("Golden pentagrams drawing energy inward, spiraling toward the center"),
        words_of_power: Some("Same divine names as LBRP"),
        benefits: Some("Concentrates energies for magical operations, charges talismans, enhances manifestation work"),
        warnings: Some("Should only be used when you want to invoke energies. Always banish afterward to avoid residual buildup."),
        source: Some("Hermetic Order of the Golden Dawn"),
        description: "The invoking counterpart to the LBRP, used to draw in and concentrate energies for active magical work.",
    },
    RitualSeed {
        name: "Middle Pillar Ritual",
        abbreviation: "MPR",
        tradition: "Golden Dawn",
        category: "Middle Pillar",
        purpose: "To awaken and balance the Middle Pillar of the Tree of Life within the body",
        difficulty: Difficulty::Intermediate,
        duration_minutes: 20,
        requires_tools: &[],
        elemental_focus: None,
        sephiroth_focus: Some("Kether, Daath, Tiphareth, Yesod, Malkuth"),
        planetary_focus: None,
        timing_notes: Some("After LBRP, daily practice recommended"),
        instructions: r#"1. Perform LBRP first

2. Stand facing East, visualize and vibrate:
   - Crown (Kether): White brilliance, vibrate "EHEIEH" (eh-heh-yeh)
   - Throat (Daath): Lavender-grey light, vibrate "YHVH ELOHIM"
   - Heart (Tiphareth): Golden-yellow sun, vibrate "YHVH ELOAH VE-DAATH"
   - Groin (Yesod): Purple or violet, vibrate "SHADDAI EL CHAI"
   - Feet (Malkuth): Earthy colors, vibrate "ADONAI HA-ARETZ"

3. Circulate the light:
   - Draw light down left side of body, up right side, forming circuit
   - Circulate several times
   - Draw down front, up back
   - Expand aura in all directions as sphere of light

4. Stand in balanced state, close with gratitude"#,
        visualization: Some("Spheres of colored light at each center, connecting as pillars of light. Energy circulating through the body."),
        words_of_power: Some("EHEIEH, YHVH ELOHIM, YHVH ELOAH VE-DAATH, SHADDAI EL CHAI, ADONAI HA-ARETZ"),
        benefits: Some("Balances subtle energies, enhances vitality, aligns with Tree of Life, develops psychic centers, healing"),
        warnings: Some("Take time to ground afterward. Some may feel lightheaded initially - reduce duration if needed."),
        source: Some("Israel Regardie / Golden Dawn"),
        description: "A powerful energy work ritual that establishes the Middle Pillar of the Tree of Life within the practitioner's subtle body, balancing and energizing the major psychic centers.",
    },
    RitualSeed {
        name: "Banishing Ritual of the Hexagram",
        abbreviation: "BRH",
        tradition: "Golden Dawn",
        category: "Banishing",
        purpose: "To banish planetary and zodiacal influences, working at a higher level than the pentagram",
        difficulty: Difficulty::Intermediate,
        duration_minutes: 15,
        requires_tools: &["Ritual dagger or wand"],
        elemental_focus: None,
        sephiroth_focus: None,
        planetary_focus: None,
        timing_notes: Some("When planetary influences need to be banished, or for deeper cleansing than LBRP"),
        instructions: r#"1. Perform LBRP and Qabalistic Cross

2. Face East, trace banishing hexagram of Fire (two interlaced triangles):
   - Trace from upper point of Fire triangle
   - Vibrate "ARARITA" (Notariqon: One is His Beginning, One is His Individuality, His Permutation is One)

3. Repeat in South, West, North with appropriate hexagrams

4. Analysis of Keyword:
   - Stand in form of cross, say: "I.N.R.I."
   - "Yod Nun Resh Yod"
   - "Virgo, Isis, Mighty Mother"
   - "Scorpio, Apophis, Destroyer"
   - "Sol, Osiris, Slain and Risen"
   - "Isis, Apophis, Osiris: IAO"

5. Signs of L.V.X.:
   - Raise arms in V: "The Sign of Osiris Slain" (L)
   - Arms crossed on chest: "The Sign of Mourning Isis" (V)
   - Arms raised, head back: "The Sign of Apophis and Typhon" (X)
   - Make L sign again: "L.V.X., the Light of the Cross"

6. Repeat Qabalistic Cross"#,
        visualization: Some("Golden hexagrams blazing with solar light at each quarter"),
        words_of_power: Some("ARARITA, I.N.R.I., IAO, L.V.X."),
        benefits: Some("Banishes deeper, more persistent influences than LBRP. Invokes solar energies. Powerful purification."),
        warnings: Some("Requires solid foundation in LBRP first. The Analysis of the Keyword is a profound formula - study its symbolism."),
        source: Some("Hermetic Order of the Golden Dawn"),
        description: "An advanced banishing ritual using hexagrams (six-pointed stars) instead of pentagrams, operating on the planetary and zodiacal levels of consciousness.",
    },
    RitualSeed {
        name: "Invoking Ritual of the Hexagram",
        abbreviation: "IRH",
        tradition: "Golden Dawn",
        category: "Invoking",
        purpose: "To invoke specific planetary forces for magical operations",
        difficulty: Difficulty::Advanced,
        duration_minutes: 20,
        requires_tools: &["Ritual dagger or wand", "Appropriate planetary symbols/colors"],
        elemental_focus: None,
        sephiroth_focus: None,
        planetary_focus: Some("Variable - depends on intended working"),
        timing_notes: Some("During appropriate planetary day/hour for the force being invoked"),
        instructions: r#"Similar to BRH but:
1. Use invoking forms of hexagrams specific to the planet
2. Each planet has unique hexagram and divine name
3. Trace planetary symbol in center of hexagram
4. Vibrate appropriate divine name for that planet

Example for Sun:
- Draw invoking hexagram of Sun
- Trace Sun symbol (⊙) in center
- Vibrate "YHVH ELOAH VE-DAATH"

Planets and their divine names:
- Sun: YHVH ELOAH VE-DAATH
- Moon: SHADDAI EL CHAI
- Mercury: ELOHIM TZABAOTH
- Venus: YHVH TZABAOTH
- Mars: ELOHIM GIBOR
- Jupiter: EL
- Saturn: YHVH ELOHIM"#,
        visualization: Some("Planet-colored hexagrams with planetary symbols glowing within them"),
        words_of_power: Some("Planetary divine names from Qabalah"),
        benefits: Some("Invokes specific planetary energies for talismanic work, timing rituals, or developing specific qualities"),
        warnings: Some("Advanced practice. Must understand planetary forces. Always banish with BRH after completion. Requires study of planetary correspondences."),
        source: Some("Hermetic Order of the Golden Dawn"),
        description: "The advanced invoking ritual for working with specific planetary forces through hexagram geometry and divine names.",
    },
    RitualSeed {
        name: "Rose Cross Ritual",
        abbreviation: "RC",
        tradition: "Golden Dawn",
        category: "Banishing",
        purpose: "To create a gentle but powerful protective barrier, more subtle than LBRP",
        difficulty: Difficulty::Intermediate,
        duration_minutes: 15,
        requires_tools: &[],
        elemental_focus: None,
        sephiroth_focus: None,
        planetary_focus: None,
        timing_notes: Some("Before meditation, sleep, or when gentle protection is needed"),
        instructions: r#"1. Face East, extend right hand, trace a large cross:
   - From East to West (horizontal line)
   - From zenith to nadir (vertical line)
   - Creates a cross of light in each of six directions

2. Trace cross in East, South, West, North, Above, Below

3. In each direction, add a circle to create Rose Cross symbol

4. Draw connecting line linking all six crosses into a continuous sphere

5. Visualize yourself sealed within a golden sphere of rose crosses

6. Vibrate: "YEHESHUAH" (the divine name of salvation)

7. Close with statement of intent"#,
        visualization: Some("Golden crosses blooming into roses, forming a complete sphere of soft golden light"),
        words_of_power: Some("YEHESHUAH"),
        benefits: Some("Gentle protection, good for sleep, meditation, or when aggressive banishing is inappropriate. Seals aura."),
        warnings: Some("Very passive - not for clearing existing negativity, but for maintaining a protected space"),
        source: Some("Hermetic Order of the Golden Dawn"),
        description: "A gentle, protective ritual using the symbol of the Rose Cross to create a sphere of soft protective light, ideal for meditation and sleep.",
    },
    RitualSeed {
        name: "Opening by Watchtower",
        abbreviation: "OWT",
        tradition: "Golden Dawn",
        category: "Invoking",
        purpose: "Supreme invoking ritual of the elements and quarters for major magical operations",
        difficulty: Difficulty::Expert,
        duration_minutes: 45,
        requires_tools: &["Full temple setup", "Elemental weapons", "Enochian tablets"],
        elemental_focus: Some("All four elements"),
        sephiroth_focus: None,
        planetary_focus: None,
        timing_notes: Some("For major rituals, initiations, or significant magical operations"),
        instructions: r#"Complex ritual involving:
1. LBRP and BRH
2. Invocation of elements in all four quarters using Supreme Invoking Pentagrams
3. Use of Enochian divine names and calls
4. Full invocations of each quarter with its sub-elements
5. Drawing together of elemental forces into the center

Each quarter includes:
- Supreme invoking pentagram
- Enochian divine names
- Full invocation of ruling powers
- Visualization of elemental forces

(Full text requires extensive study of Golden Dawn material)"#,
        visualization: Some("Full temple with elemental watchtowers, kerubic forms, vivid elemental landscapes at each quarter"),
        words_of_power: Some("Enochian divine names, elemental god-names, archangelic names"),
        benefits: Some("Creates powerful consecrated space for major workings. Full elemental balance and invocation."),
        warnings: Some("EXPERT LEVEL ONLY. Requires extensive study, experience, and proper training. Always close properly afterward."),
        source: Some("Hermetic Order of the Golden Dawn - Adeptus Minor material"),
        description: "The supreme elemental ritual of the Golden Dawn system, creating a fully consecrated magical temple by invoking the four quarters with their complete hierarchies.",
    },
];
