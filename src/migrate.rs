//! Database schema (idempotent).
//!
//! Every statement uses `IF NOT EXISTS`, so running the migrations against an
//! already-initialized database is a no-op.

use anyhow::Result;
use sqlx::SqlitePool;

const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS cards (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        number INTEGER NOT NULL UNIQUE CHECK (number BETWEEN 0 AND 77),
        name TEXT NOT NULL UNIQUE,
        arcana TEXT NOT NULL CHECK (arcana IN ('Major Arcana', 'Minor Arcana')),
        suit TEXT,
        element TEXT,
        astrology TEXT,
        upright_meaning TEXT NOT NULL,
        reversed_meaning TEXT NOT NULL,
        description TEXT NOT NULL,
        hebrew_letter TEXT,
        tree_of_life_path TEXT,
        sephiroth TEXT,
        astrological_decan TEXT,
        musical_note TEXT,
        color_primary TEXT,
        color_secondary TEXT,
        gemstone TEXT,
        herb TEXT,
        key_symbols TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS keywords (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        card_id INTEGER NOT NULL,
        keyword TEXT NOT NULL,
        FOREIGN KEY (card_id) REFERENCES cards(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS system_descriptions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        card_id INTEGER NOT NULL,
        system_name TEXT NOT NULL
            CHECK (system_name IN ('RWS', 'Thoth', 'Golden Dawn', 'Marseille')),
        description TEXT,
        upright_meaning TEXT,
        reversed_meaning TEXT,
        key_imagery TEXT,
        divinatory_meaning TEXT,
        esoteric_meaning TEXT,
        UNIQUE(card_id, system_name),
        FOREIGN KEY (card_id) REFERENCES cards(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS sephiroth (
        number INTEGER PRIMARY KEY CHECK (number BETWEEN 1 AND 10),
        name TEXT NOT NULL UNIQUE,
        name_hebrew TEXT NOT NULL,
        meaning TEXT NOT NULL,
        divine_name TEXT NOT NULL,
        archangel TEXT NOT NULL,
        angelic_order TEXT NOT NULL,
        planet TEXT NOT NULL,
        mundane_chakra TEXT NOT NULL,
        spiritual_experience TEXT NOT NULL,
        virtue TEXT NOT NULL,
        vice TEXT,
        color_atziluth TEXT NOT NULL,
        color_briah TEXT NOT NULL,
        color_yetzirah TEXT NOT NULL,
        color_assiah TEXT NOT NULL,
        tarot_association TEXT NOT NULL,
        description TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS paths (
        number INTEGER PRIMARY KEY CHECK (number BETWEEN 11 AND 32),
        name TEXT NOT NULL,
        hebrew_letter TEXT NOT NULL,
        hebrew_letter_meaning TEXT NOT NULL,
        tarot_card_id INTEGER NOT NULL UNIQUE,
        connects_from INTEGER NOT NULL,
        connects_to INTEGER NOT NULL,
        element TEXT,
        planet TEXT,
        sign TEXT,
        color TEXT NOT NULL,
        description TEXT NOT NULL,
        CHECK (connects_from <> connects_to),
        FOREIGN KEY (tarot_card_id) REFERENCES cards(id),
        FOREIGN KEY (connects_from) REFERENCES sephiroth(number),
        FOREIGN KEY (connects_to) REFERENCES sephiroth(number)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS planets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        symbol TEXT NOT NULL,
        day_of_week TEXT NOT NULL,
        metal TEXT NOT NULL,
        color TEXT NOT NULL,
        gemstone TEXT NOT NULL,
        sephiroth_number INTEGER,
        rules_signs TEXT NOT NULL DEFAULT '[]',
        exalted_in TEXT,
        detriment_in TEXT,
        fall_in TEXT,
        quality TEXT NOT NULL,
        tarot_association TEXT NOT NULL,
        magical_powers TEXT NOT NULL,
        description TEXT NOT NULL,
        FOREIGN KEY (sephiroth_number) REFERENCES sephiroth(number)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS zodiac_signs (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        symbol TEXT NOT NULL,
        element TEXT NOT NULL CHECK (element IN ('Fire', 'Earth', 'Air', 'Water')),
        modality TEXT NOT NULL CHECK (modality IN ('Cardinal', 'Fixed', 'Mutable')),
        ruling_planet TEXT NOT NULL,
        exalted_planet TEXT,
        detriment_planet TEXT,
        fall_planet TEXT,
        polarity TEXT NOT NULL,
        house_number INTEGER NOT NULL UNIQUE CHECK (house_number BETWEEN 1 AND 12),
        body_part TEXT NOT NULL,
        tarot_association TEXT NOT NULL,
        dates_start TEXT NOT NULL,
        dates_end TEXT NOT NULL,
        keywords TEXT NOT NULL DEFAULT '[]',
        description TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS rituals (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        abbreviation TEXT NOT NULL UNIQUE,
        tradition TEXT NOT NULL,
        category TEXT NOT NULL,
        purpose TEXT NOT NULL,
        difficulty TEXT NOT NULL
            CHECK (difficulty IN ('Beginner', 'Intermediate', 'Advanced', 'Expert')),
        duration_minutes INTEGER NOT NULL,
        requires_tools TEXT NOT NULL DEFAULT '[]',
        elemental_focus TEXT,
        sephiroth_focus TEXT,
        planetary_focus TEXT,
        timing_notes TEXT,
        instructions TEXT NOT NULL,
        visualization TEXT,
        words_of_power TEXT,
        benefits TEXT,
        warnings TEXT,
        source TEXT,
        description TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS dataset_meta (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_keywords_card_id ON keywords(card_id)",
    "CREATE INDEX IF NOT EXISTS idx_system_descriptions_card_id ON system_descriptions(card_id)",
    "CREATE INDEX IF NOT EXISTS idx_paths_tarot_card_id ON paths(tarot_card_id)",
    "CREATE INDEX IF NOT EXISTS idx_zodiac_signs_element ON zodiac_signs(element)",
];

/// Tables in dependency order (children after parents).
pub const TABLES: &[&str] = &[
    "cards",
    "keywords",
    "system_descriptions",
    "sephiroth",
    "paths",
    "planets",
    "zodiac_signs",
    "rituals",
    "dataset_meta",
];

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    for statement in SCHEMA {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
