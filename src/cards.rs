//! Tarot card queries: filtered listing, lookups, search and the per-system
//! description view.
//!
//! Every function borrows one connection from the caller so that a request
//! runs all of its statements on the same pooled handle.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::Serialize;
use sqlx::SqliteConnection;

use crate::error::{LookupError, LookupResult};
use crate::models::{Arcana, Card, Element, Suit, SystemDescription, TarotSystem, ValueCount};

pub const MAX_CARD_NUMBER: i64 = 77;

/// Reported for numbers outside `0..=MAX_CARD_NUMBER`. Kept apart from the
/// per-number "not found" text so callers can tell the two cases apart.
pub const CARD_OUT_OF_RANGE: &str = "Card number must be between 0 and 77";

/// Optional equality filters for [`list_cards`].
#[derive(Debug, Default, Clone)]
pub struct CardFilter {
    pub arcana: Option<Arcana>,
    pub suit: Option<Suit>,
    pub element: Option<Element>,
}

/// One tradition's reading of a card, or a marker that none is authored yet.
#[derive(Debug, Clone, Serialize)]
pub struct CardSystemView {
    pub number: i64,
    pub name: String,
    pub system: TarotSystem,
    #[serde(flatten)]
    pub description: Option<SystemDescription>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DailyCard {
    pub date: String,
    pub card: Card,
    pub message: String,
}

#[derive(sqlx::FromRow)]
struct SystemRow {
    card_id: i64,
    system_name: String,
    #[sqlx(flatten)]
    text: SystemDescription,
}

#[derive(sqlx::FromRow)]
struct KeywordRow {
    card_id: i64,
    keyword: String,
}

pub async fn list_cards(
    conn: &mut SqliteConnection,
    filter: &CardFilter,
    with_systems: bool,
) -> LookupResult<Vec<Card>> {
    let mut sql = String::from("SELECT * FROM cards WHERE 1=1");
    if filter.arcana.is_some() {
        sql.push_str(" AND arcana = ?");
    }
    if filter.suit.is_some() {
        sql.push_str(" AND LOWER(suit) = LOWER(?)");
    }
    if filter.element.is_some() {
        sql.push_str(" AND LOWER(element) = LOWER(?)");
    }
    sql.push_str(" ORDER BY number");

    let mut query = sqlx::query_as::<_, Card>(&sql);
    if let Some(arcana) = filter.arcana {
        query = query.bind(arcana.as_str());
    }
    if let Some(suit) = filter.suit {
        query = query.bind(suit.as_str());
    }
    if let Some(element) = filter.element {
        query = query.bind(element.as_str());
    }

    let mut cards = query.fetch_all(&mut *conn).await?;
    attach_details(conn, &mut cards, with_systems).await?;
    Ok(cards)
}

/// Fetch a card by its number. Numbers outside `0..=77` are reported the
/// same way as a missing card.
pub async fn get_card(
    conn: &mut SqliteConnection,
    number: i64,
    with_systems: bool,
) -> LookupResult<Card> {
    if !(0..=MAX_CARD_NUMBER).contains(&number) {
        return Err(LookupError::not_found(CARD_OUT_OF_RANGE));
    }
    find_card(conn, number, with_systems)
        .await?
        .ok_or_else(|| LookupError::not_found(format!("Card number {} not found", number)))
}

/// Case-insensitive exact name lookup.
pub async fn get_card_by_name(
    conn: &mut SqliteConnection,
    name: &str,
    with_systems: bool,
) -> LookupResult<Card> {
    let card: Option<Card> = sqlx::query_as("SELECT * FROM cards WHERE LOWER(name) = LOWER(?)")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;
    let Some(card) = card else {
        return Err(LookupError::not_found_with(
            format!("Card \"{}\" not found", name),
            "Try using the exact card name or use /cards/search?q=<query> to search",
        ));
    };
    let mut cards = vec![card];
    attach_details(conn, &mut cards, with_systems).await?;
    Ok(cards.remove(0))
}

pub async fn random_card(conn: &mut SqliteConnection, with_systems: bool) -> LookupResult<Card> {
    let number = rand::thread_rng().gen_range(0..=MAX_CARD_NUMBER);
    get_card(conn, number, with_systems).await
}

/// Card of the day: a Major Arcana card chosen by day of year.
pub async fn daily_card(conn: &mut SqliteConnection, date: NaiveDate) -> LookupResult<DailyCard> {
    let number = i64::from(date.ordinal() % 22);
    let card = get_card(conn, number, false).await?;
    let message = format!(
        "Your card for {} is {}. Reflect on: {}",
        date.format("%B %-d"),
        card.name,
        card.upright_meaning
    );
    Ok(DailyCard {
        date: date.to_string(),
        card,
        message,
    })
}

/// Case-insensitive substring search over card text and keywords.
pub async fn search_cards(
    conn: &mut SqliteConnection,
    query: &str,
    with_systems: bool,
) -> LookupResult<Vec<Card>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(LookupError::validation(
            "Please provide a search query using ?q=<query>",
        ));
    }

    let mut cards: Vec<Card> = sqlx::query_as(
        r#"
        SELECT DISTINCT c.*
        FROM cards c
        LEFT JOIN keywords k ON k.card_id = c.id
        WHERE instr(LOWER(c.name), ?) > 0
           OR instr(LOWER(c.upright_meaning), ?) > 0
           OR instr(LOWER(c.reversed_meaning), ?) > 0
           OR instr(LOWER(c.description), ?) > 0
           OR instr(LOWER(k.keyword), ?) > 0
           OR instr(LOWER(c.element), ?) > 0
           OR instr(LOWER(c.hebrew_letter), ?) > 0
           OR instr(LOWER(c.color_primary), ?) > 0
           OR instr(LOWER(c.gemstone), ?) > 0
        ORDER BY c.number
        "#,
    )
    .bind(&needle)
    .bind(&needle)
    .bind(&needle)
    .bind(&needle)
    .bind(&needle)
    .bind(&needle)
    .bind(&needle)
    .bind(&needle)
    .bind(&needle)
    .fetch_all(&mut *conn)
    .await?;

    attach_details(conn, &mut cards, with_systems).await?;
    Ok(cards)
}

/// One system's description of a card. A card without authored text for
/// that system yields a "not yet available" message instead of an error.
pub async fn system_description(
    conn: &mut SqliteConnection,
    number: i64,
    system: TarotSystem,
) -> LookupResult<CardSystemView> {
    let card: Option<(i64, String)> = sqlx::query_as("SELECT id, name FROM cards WHERE number = ?")
        .bind(number)
        .fetch_optional(&mut *conn)
        .await?;
    let Some((card_id, name)) = card else {
        return Err(LookupError::not_found(format!(
            "Card number {} not found",
            number
        )));
    };

    let description: Option<SystemDescription> = sqlx::query_as(
        r#"
        SELECT description, upright_meaning, reversed_meaning,
               key_imagery, divinatory_meaning, esoteric_meaning
        FROM system_descriptions
        WHERE card_id = ? AND system_name = ?
        "#,
    )
    .bind(card_id)
    .bind(system.as_str())
    .fetch_optional(&mut *conn)
    .await?;

    let message = match description {
        Some(_) => None,
        None => Some(format!(
            "No {} description available for this card yet",
            system
        )),
    };
    Ok(CardSystemView {
        number,
        name,
        system,
        description,
        message,
    })
}

/// Systems with at least one authored description, by name.
pub async fn list_systems(conn: &mut SqliteConnection) -> LookupResult<Vec<ValueCount>> {
    let rows: Vec<(String, i64)> = sqlx::query_as(
        r#"
        SELECT system_name, COUNT(*) AS card_count
        FROM system_descriptions
        GROUP BY system_name
        ORDER BY system_name
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows
        .into_iter()
        .map(|(name, count)| ValueCount { name, count })
        .collect())
}

/// Fill in keywords (sorted) and, when asked, the per-system descriptions.
async fn attach_details(
    conn: &mut SqliteConnection,
    cards: &mut [Card],
    with_systems: bool,
) -> LookupResult<()> {
    if cards.is_empty() {
        return Ok(());
    }
    // A single card filters by id; listings read the small tables whole.
    let single = (cards.len() == 1).then(|| cards[0].id);

    let keywords: Vec<KeywordRow> = match single {
        Some(id) => {
            sqlx::query_as("SELECT card_id, keyword FROM keywords WHERE card_id = ? ORDER BY keyword")
                .bind(id)
                .fetch_all(&mut *conn)
                .await?
        }
        None => {
            sqlx::query_as("SELECT card_id, keyword FROM keywords ORDER BY keyword")
                .fetch_all(&mut *conn)
                .await?
        }
    };
    let mut by_card: HashMap<i64, Vec<String>> = HashMap::new();
    for row in keywords {
        by_card.entry(row.card_id).or_default().push(row.keyword);
    }

    let mut systems: HashMap<i64, BTreeMap<String, SystemDescription>> = HashMap::new();
    if with_systems {
        let sql = r#"
            SELECT card_id, system_name, description, upright_meaning, reversed_meaning,
                   key_imagery, divinatory_meaning, esoteric_meaning
            FROM system_descriptions
        "#;
        let rows: Vec<SystemRow> = match single {
            Some(id) => {
                sqlx::query_as(&format!("{} WHERE card_id = ?", sql))
                    .bind(id)
                    .fetch_all(&mut *conn)
                    .await?
            }
            None => sqlx::query_as(sql).fetch_all(&mut *conn).await?,
        };
        for row in rows {
            systems
                .entry(row.card_id)
                .or_default()
                .insert(row.system_name, row.text);
        }
    }

    for card in cards.iter_mut() {
        card.keywords = by_card.remove(&card.id).unwrap_or_default();
        if with_systems {
            card.system_descriptions = Some(systems.remove(&card.id).unwrap_or_default());
        }
    }
    Ok(())
}

async fn find_card(
    conn: &mut SqliteConnection,
    number: i64,
    with_systems: bool,
) -> LookupResult<Option<Card>> {
    let card: Option<Card> = sqlx::query_as("SELECT * FROM cards WHERE number = ?")
        .bind(number)
        .fetch_optional(&mut *conn)
        .await?;
    match card {
        Some(card) => {
            let mut cards = vec![card];
            attach_details(conn, &mut cards, with_systems).await?;
            Ok(cards.pop())
        }
        None => Ok(None),
    }
}
