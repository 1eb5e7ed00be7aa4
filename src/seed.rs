//! Dataset loader.
//!
//! Materializes the built-in [`Dataset`] into the relational store. The load
//! is all-or-nothing: the dataset is validated up front, then every table is
//! cleared and refilled inside one transaction. A store whose recorded
//! fingerprint matches the built-in dataset is left untouched.

use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::dataset::correspondences::correspond;
use crate::dataset::Dataset;
use crate::migrate::{run_migrations, TABLES};

const FINGERPRINT_KEY: &str = "fingerprint";

/// Row counts per entity, as loaded or as currently stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DatasetCounts {
    pub cards: i64,
    pub keywords: i64,
    pub system_descriptions: i64,
    pub sephiroth: i64,
    pub paths: i64,
    pub planets: i64,
    pub zodiac_signs: i64,
    pub rituals: i64,
}

impl DatasetCounts {
    /// Counts a complete load of `dataset` must produce.
    pub fn expected(dataset: &Dataset) -> Self {
        DatasetCounts {
            cards: dataset.cards.len() as i64,
            keywords: dataset.cards.iter().map(|c| c.keywords.len() as i64).sum(),
            system_descriptions: dataset.system_descriptions.len() as i64,
            sephiroth: dataset.sephiroth.len() as i64,
            paths: dataset.paths.len() as i64,
            planets: dataset.planets.len() as i64,
            zodiac_signs: dataset.signs.len() as i64,
            rituals: dataset.rituals.len() as i64,
        }
    }
}

/// Result of [`init`].
#[derive(Debug, Clone, Serialize)]
pub struct InitOutcome {
    pub fingerprint: String,
    pub reloaded: bool,
    pub counts: DatasetCounts,
}

/// Count the rows of every entity table.
pub async fn counts(pool: &SqlitePool) -> Result<DatasetCounts> {
    async fn count(pool: &SqlitePool, table: &str) -> Result<i64> {
        let n: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(pool)
            .await?;
        Ok(n)
    }

    Ok(DatasetCounts {
        cards: count(pool, "cards").await?,
        keywords: count(pool, "keywords").await?,
        system_descriptions: count(pool, "system_descriptions").await?,
        sephiroth: count(pool, "sephiroth").await?,
        paths: count(pool, "paths").await?,
        planets: count(pool, "planets").await?,
        zodiac_signs: count(pool, "zodiac_signs").await?,
        rituals: count(pool, "rituals").await?,
    })
}

/// Fingerprint recorded by the last successful load, if any.
pub async fn stored_fingerprint(pool: &SqlitePool) -> Result<Option<String>> {
    let value: Option<String> = sqlx::query_scalar("SELECT value FROM dataset_meta WHERE key = ?")
        .bind(FINGERPRINT_KEY)
        .fetch_optional(pool)
        .await?;
    Ok(value)
}

/// Create the schema if needed and load the built-in dataset unless the
/// store already holds an identical, complete copy.
pub async fn init(pool: &SqlitePool) -> Result<InitOutcome> {
    run_migrations(pool).await?;

    let dataset = Dataset::builtin();
    let fingerprint = dataset.fingerprint()?;
    let expected = DatasetCounts::expected(&dataset);

    let current = counts(pool).await?;
    if stored_fingerprint(pool).await?.as_deref() == Some(fingerprint.as_str())
        && current == expected
    {
        tracing::debug!(%fingerprint, "dataset already current");
        return Ok(InitOutcome {
            fingerprint,
            reloaded: false,
            counts: current,
        });
    }

    let counts = load_dataset(pool, &dataset).await?;
    Ok(InitOutcome {
        fingerprint,
        reloaded: true,
        counts,
    })
}

/// Startup check: make sure the store is populated before serving.
///
/// With `auto_seed` the dataset is (re)loaded as needed. Without it an empty
/// store is a fatal error.
pub async fn ensure_seeded(pool: &SqlitePool, auto_seed: bool) -> Result<InitOutcome> {
    if auto_seed {
        return init(pool).await;
    }

    run_migrations(pool).await?;
    let current = counts(pool).await?;
    if current.cards == 0 {
        bail!("database is empty and auto_seed is disabled; run `arcanum init` first");
    }
    let fingerprint = stored_fingerprint(pool).await?.unwrap_or_default();
    Ok(InitOutcome {
        fingerprint,
        reloaded: false,
        counts: current,
    })
}

/// Validate `dataset` and replace the store's contents with it.
pub async fn load_dataset(pool: &SqlitePool, dataset: &Dataset) -> Result<DatasetCounts> {
    dataset.validate().context("built-in dataset failed validation")?;
    let fingerprint = dataset.fingerprint()?;

    let mut tx = pool.begin().await?;

    for table in TABLES.iter().rev() {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut *tx)
            .await?;
    }
    // Restart AUTOINCREMENT ids so a reload reproduces the same ids.
    sqlx::query("DELETE FROM sqlite_sequence")
        .execute(&mut *tx)
        .await?;

    let card_ids = insert_cards(&mut tx, dataset).await?;
    insert_system_descriptions(&mut tx, dataset, &card_ids).await?;
    insert_qabalah(&mut tx, dataset, &card_ids).await?;
    insert_astrology(&mut tx, dataset).await?;
    insert_rituals(&mut tx, dataset).await?;

    sqlx::query("INSERT INTO dataset_meta (key, value) VALUES (?, ?)")
        .bind(FINGERPRINT_KEY)
        .bind(&fingerprint)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    let loaded = counts(pool).await?;
    tracing::info!(%fingerprint, "dataset loaded");
    Ok(loaded)
}

async fn insert_cards(
    tx: &mut Transaction<'_, Sqlite>,
    dataset: &Dataset,
) -> Result<HashMap<i64, i64>> {
    let mut ids = HashMap::with_capacity(dataset.cards.len());
    let mut keyword_count = 0usize;

    for card in &dataset.cards {
        let c = correspond(card);
        let id = sqlx::query(
            r#"
            INSERT INTO cards (
                number, name, arcana, suit, element, astrology,
                upright_meaning, reversed_meaning, description,
                hebrew_letter, tree_of_life_path, sephiroth, astrological_decan,
                musical_note, color_primary, color_secondary, gemstone, herb, key_symbols
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(card.number)
        .bind(&card.name)
        .bind(card.arcana.as_str())
        .bind(card.suit.map(|s| s.as_str()))
        .bind(card.element.map(|e| e.as_str()))
        .bind(card.astrology)
        .bind(card.upright_meaning)
        .bind(card.reversed_meaning)
        .bind(card.description)
        .bind(c.hebrew_letter)
        .bind(c.tree_of_life_path)
        .bind(c.sephiroth.as_deref())
        .bind(c.astrological_decan)
        .bind(c.musical_note)
        .bind(c.color_primary)
        .bind(c.color_secondary)
        .bind(c.gemstone)
        .bind(c.herb)
        .bind(c.key_symbols)
        .execute(&mut **tx)
        .await
        .with_context(|| format!("inserting card '{}'", card.name))?
        .last_insert_rowid();

        for keyword in card.keywords {
            sqlx::query("INSERT INTO keywords (card_id, keyword) VALUES (?, ?)")
                .bind(id)
                .bind(*keyword)
                .execute(&mut **tx)
                .await?;
        }
        keyword_count += card.keywords.len();
        ids.insert(card.number, id);
    }

    tracing::info!(cards = ids.len(), keywords = keyword_count, "loaded tarot cards");
    Ok(ids)
}

async fn insert_system_descriptions(
    tx: &mut Transaction<'_, Sqlite>,
    dataset: &Dataset,
    card_ids: &HashMap<i64, i64>,
) -> Result<()> {
    let by_name: HashMap<&str, i64> = dataset
        .cards
        .iter()
        .filter_map(|c| card_ids.get(&c.number).map(|id| (c.name.as_str(), *id)))
        .collect();

    for entry in dataset.system_descriptions {
        let Some(card_id) = by_name.get(entry.card) else {
            bail!("{} description references unknown card '{}'", entry.system, entry.card);
        };
        sqlx::query(
            r#"
            INSERT INTO system_descriptions (
                card_id, system_name, description, upright_meaning, reversed_meaning,
                key_imagery, divinatory_meaning, esoteric_meaning
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(*card_id)
        .bind(entry.system.as_str())
        .bind(entry.description)
        .bind(entry.upright_meaning)
        .bind(entry.reversed_meaning)
        .bind(entry.key_imagery)
        .bind(entry.divinatory_meaning)
        .bind(entry.esoteric_meaning)
        .execute(&mut **tx)
        .await?;
    }

    tracing::info!(
        descriptions = dataset.system_descriptions.len(),
        "loaded system descriptions"
    );
    Ok(())
}

async fn insert_qabalah(
    tx: &mut Transaction<'_, Sqlite>,
    dataset: &Dataset,
    card_ids: &HashMap<i64, i64>,
) -> Result<()> {
    for s in dataset.sephiroth {
        sqlx::query(
            r#"
            INSERT INTO sephiroth (
                number, name, name_hebrew, meaning, divine_name, archangel, angelic_order,
                planet, mundane_chakra, spiritual_experience, virtue, vice,
                color_atziluth, color_briah, color_yetzirah, color_assiah,
                tarot_association, description
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(s.number)
        .bind(s.name)
        .bind(s.name_hebrew)
        .bind(s.meaning)
        .bind(s.divine_name)
        .bind(s.archangel)
        .bind(s.angelic_order)
        .bind(s.planet)
        .bind(s.mundane_chakra)
        .bind(s.spiritual_experience)
        .bind(s.virtue)
        .bind(s.vice)
        .bind(s.color_atziluth)
        .bind(s.color_briah)
        .bind(s.color_yetzirah)
        .bind(s.color_assiah)
        .bind(s.tarot_association)
        .bind(s.description)
        .execute(&mut **tx)
        .await?;
    }
    tracing::info!(sephiroth = dataset.sephiroth.len(), "loaded sephiroth");

    for p in dataset.paths {
        // Paths reference the card row, looked up by the card's own number.
        let Some(card_id) = card_ids.get(&p.tarot_card_number) else {
            bail!("path {} links to unknown card {}", p.number, p.tarot_card_number);
        };
        sqlx::query(
            r#"
            INSERT INTO paths (
                number, name, hebrew_letter, hebrew_letter_meaning, tarot_card_id,
                connects_from, connects_to, element, planet, sign, color, description
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(p.number)
        .bind(p.name)
        .bind(p.hebrew_letter)
        .bind(p.hebrew_letter_meaning)
        .bind(*card_id)
        .bind(p.connects_from)
        .bind(p.connects_to)
        .bind(p.element)
        .bind(p.planet)
        .bind(p.sign)
        .bind(p.color)
        .bind(p.description)
        .execute(&mut **tx)
        .await?;
    }
    tracing::info!(paths = dataset.paths.len(), "loaded paths");
    Ok(())
}

async fn insert_astrology(tx: &mut Transaction<'_, Sqlite>, dataset: &Dataset) -> Result<()> {
    for p in dataset.planets {
        sqlx::query(
            r#"
            INSERT INTO planets (
                name, symbol, day_of_week, metal, color, gemstone, sephiroth_number,
                rules_signs, exalted_in, detriment_in, fall_in, quality,
                tarot_association, magical_powers, description
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(p.name)
        .bind(p.symbol)
        .bind(p.day_of_week)
        .bind(p.metal)
        .bind(p.color)
        .bind(p.gemstone)
        .bind(p.sephiroth_number)
        .bind(serde_json::to_string(p.rules_signs)?)
        .bind(p.exalted_in)
        .bind(p.detriment_in)
        .bind(p.fall_in)
        .bind(p.quality)
        .bind(p.tarot_association)
        .bind(p.magical_powers)
        .bind(p.description)
        .execute(&mut **tx)
        .await?;
    }
    tracing::info!(planets = dataset.planets.len(), "loaded planets");

    for s in dataset.signs {
        sqlx::query(
            r#"
            INSERT INTO zodiac_signs (
                name, symbol, element, modality, ruling_planet, exalted_planet,
                detriment_planet, fall_planet, polarity, house_number, body_part,
                tarot_association, dates_start, dates_end, keywords, description
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(s.name)
        .bind(s.symbol)
        .bind(s.element.as_str())
        .bind(s.modality.as_str())
        .bind(s.ruling_planet)
        .bind(s.exalted_planet)
        .bind(s.detriment_planet)
        .bind(s.fall_planet)
        .bind(s.polarity)
        .bind(s.house_number)
        .bind(s.body_part)
        .bind(s.tarot_association)
        .bind(s.dates_start)
        .bind(s.dates_end)
        .bind(serde_json::to_string(s.keywords)?)
        .bind(s.description)
        .execute(&mut **tx)
        .await?;
    }
    tracing::info!(signs = dataset.signs.len(), "loaded zodiac signs");
    Ok(())
}

async fn insert_rituals(tx: &mut Transaction<'_, Sqlite>, dataset: &Dataset) -> Result<()> {
    for r in dataset.rituals {
        sqlx::query(
            r#"
            INSERT INTO rituals (
                name, abbreviation, tradition, category, purpose, difficulty,
                duration_minutes, requires_tools, elemental_focus, sephiroth_focus,
                planetary_focus, timing_notes, instructions, visualization,
                words_of_power, benefits, warnings, source, description
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(r.name)
        .bind(r.abbreviation)
        .bind(r.tradition)
        .bind(r.category)
        .bind(r.purpose)
        .bind(r.difficulty.as_str())
        .bind(r.duration_minutes)
        .bind(serde_json::to_string(r.requires_tools)?)
        .bind(r.elemental_focus)
        .bind(r.sephiroth_focus)
        .bind(r.planetary_focus)
        .bind(r.timing_notes)
        .bind(r.instructions)
        .bind(r.visualization)
        .bind(r.words_of_power)
        .bind(r.benefits)
        .bind(r.warnings)
        .bind(r.source)
        .bind(r.description)
        .execute(&mut **tx)
        .await?;
    }
    tracing::info!(rituals = dataset.rituals.len(), "loaded rituals");
    Ok(())
}
