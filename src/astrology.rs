//! Planet and zodiac sign queries, plus the element, modality and planetary
//! hour summaries.

use serde::Serialize;
use sqlx::SqliteConnection;

use crate::error::{LookupError, LookupResult};
use crate::models::{Element, Modality, Planet, SignByElement, SignByModality, Suit, ZodiacSign};

const PLANET_NAMES: &str = "Valid planets: Sun, Moon, Mercury, Venus, Mars, Jupiter, Saturn";
const SIGN_NAMES: &str = "Valid signs: Aries, Taurus, Gemini, Cancer, Leo, Virgo, Libra, Scorpio, Sagittarius, Capricorn, Aquarius, Pisces";

const PLANET_SELECT: &str = r#"
    SELECT p.*, s.name AS sephiroth_name
    FROM planets p
    LEFT JOIN sephiroth s ON p.sephiroth_number = s.number
"#;

const SIGN_SELECT: &str = r#"
    SELECT z.*, p.symbol AS ruling_planet_symbol, p.day_of_week AS ruling_day
    FROM zodiac_signs z
    LEFT JOIN planets p ON z.ruling_planet = p.name
"#;

#[derive(Debug, Clone, Default)]
pub struct SignFilter {
    pub element: Option<Element>,
    pub modality: Option<Modality>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SignRef {
    pub name: String,
    pub symbol: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CardRef {
    pub number: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanetDetail {
    #[serde(flatten)]
    pub planet: Planet,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules_zodiac_signs: Vec<ZodiacSign>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exalted_in_signs: Vec<SignRef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignDetail {
    #[serde(flatten)]
    pub sign: ZodiacSign,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ruling_planet_details: Option<Planet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tarot_card: Option<CardRef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ElementInfo {
    pub element: Element,
    pub zodiac_signs: Vec<SignByElement>,
    pub qualities: &'static str,
    pub tarot_suit: Suit,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModalityInfo {
    pub modality: Modality,
    pub description: &'static str,
    pub zodiac_signs: Vec<SignByModality>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PlanetaryHour {
    pub name: String,
    pub symbol: String,
    pub day_of_week: String,
    pub metal: String,
    pub color: String,
    pub magical_powers: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanetaryHours {
    pub description: &'static str,
    pub note: &'static str,
    pub planets: Vec<PlanetaryHour>,
    pub usage: &'static str,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PlanetSummary {
    pub name: String,
    pub symbol: String,
    pub day_of_week: String,
    pub sephiroth: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct SignSummary {
    pub name: String,
    pub symbol: String,
    pub element: String,
    pub modality: String,
    pub ruling_planet: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Counted<T> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> From<Vec<T>> for Counted<T> {
    fn from(data: Vec<T>) -> Self {
        Counted {
            count: data.len(),
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Structure {
    pub planets: u8,
    pub signs: u8,
    pub elements: u8,
    pub modalities: u8,
    pub houses: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct AstrologySummary {
    pub planets: Counted<PlanetSummary>,
    pub zodiac_signs: Counted<SignSummary>,
    pub elements: [Element; 4],
    pub modalities: [Modality; 3],
    pub structure: Structure,
}

// ============ Planets ============

pub async fn list_planets(conn: &mut SqliteConnection) -> LookupResult<Vec<Planet>> {
    let rows = sqlx::query_as(&format!("{} ORDER BY p.id", PLANET_SELECT))
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

/// Case-insensitive exact match, `None` when absent.
pub async fn find_planet(conn: &mut SqliteConnection, name: &str) -> LookupResult<Option<Planet>> {
    let row = sqlx::query_as(&format!("{} WHERE LOWER(p.name) = LOWER(?)", PLANET_SELECT))
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

pub async fn get_planet(conn: &mut SqliteConnection, name: &str) -> LookupResult<PlanetDetail> {
    let Some(planet) = find_planet(conn, name).await? else {
        return Err(LookupError::not_found_with(
            format!("Planet \"{}\" not found", name),
            PLANET_NAMES,
        ));
    };

    let rules_zodiac_signs = sqlx::query_as(&format!(
        "{} WHERE LOWER(z.ruling_planet) = LOWER(?) ORDER BY z.house_number",
        SIGN_SELECT
    ))
    .bind(&planet.name)
    .fetch_all(&mut *conn)
    .await?;

    let exalted_in_signs = sqlx::query_as(
        "SELECT name, symbol FROM zodiac_signs WHERE LOWER(exalted_planet) = LOWER(?) ORDER BY house_number",
    )
    .bind(&planet.name)
    .fetch_all(&mut *conn)
    .await?;

    Ok(PlanetDetail {
        planet,
        rules_zodiac_signs,
        exalted_in_signs,
    })
}

// ============ Signs ============

pub async fn list_signs(
    conn: &mut SqliteConnection,
    filter: &SignFilter,
) -> LookupResult<Vec<ZodiacSign>> {
    let mut sql = format!("{} WHERE 1=1", SIGN_SELECT);
    if filter.element.is_some() {
        sql.push_str(" AND LOWER(z.element) = LOWER(?)");
    }
    if filter.modality.is_some() {
        sql.push_str(" AND LOWER(z.modality) = LOWER(?)");
    }
    sql.push_str(" ORDER BY z.house_number");

    let mut query = sqlx::query_as::<_, ZodiacSign>(&sql);
    if let Some(element) = filter.element {
        query = query.bind(element.as_str());
    }
    if let Some(modality) = filter.modality {
        query = query.bind(modality.as_str());
    }
    Ok(query.fetch_all(&mut *conn).await?)
}

/// Case-insensitive exact match, `None` when absent.
pub async fn find_sign(conn: &mut SqliteConnection, name: &str) -> LookupResult<Option<ZodiacSign>> {
    let row = sqlx::query_as(&format!("{} WHERE LOWER(z.name) = LOWER(?)", SIGN_SELECT))
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

pub async fn get_sign(conn: &mut SqliteConnection, name: &str) -> LookupResult<SignDetail> {
    let Some(sign) = find_sign(conn, name).await? else {
        return Err(LookupError::not_found_with(
            format!("Zodiac sign \"{}\" not found", name),
            SIGN_NAMES,
        ));
    };

    let ruling_planet_details = find_planet(conn, &sign.ruling_planet).await?;

    let tarot_card = match tarot_card_name(&sign.tarot_association) {
        Some(card_name) => {
            sqlx::query_as("SELECT number, name FROM cards WHERE LOWER(name) = LOWER(?)")
                .bind(card_name)
                .fetch_optional(&mut *conn)
                .await?
        }
        None => None,
    };

    Ok(SignDetail {
        sign,
        ruling_planet_details,
        tarot_card,
    })
}

/// Card name at the head of a tarot association such as
/// `"Strength (VIII) / Lust"`.
fn tarot_card_name(association: &str) -> Option<&str> {
    let head = association.split(" (").next()?.trim();
    (!head.is_empty()).then_some(head)
}

/// Compact rows of the signs sharing `element` (case-insensitive), by house.
pub async fn signs_by_element(
    conn: &mut SqliteConnection,
    element: &str,
) -> LookupResult<Vec<SignByElement>> {
    let rows = sqlx::query_as(
        "SELECT name, symbol, modality FROM zodiac_signs WHERE LOWER(element) = LOWER(?) ORDER BY house_number",
    )
    .bind(element)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

// ============ Summaries ============

pub async fn elements(conn: &mut SqliteConnection) -> LookupResult<Vec<ElementInfo>> {
    let mut out = Vec::with_capacity(Element::ALL.len());
    for element in Element::ALL {
        out.push(ElementInfo {
            element,
            zodiac_signs: signs_by_element(conn, element.as_str()).await?,
            qualities: element.qualities(),
            tarot_suit: element.tarot_suit(),
        });
    }
    Ok(out)
}

pub async fn modalities(conn: &mut SqliteConnection) -> LookupResult<Vec<ModalityInfo>> {
    let mut out = Vec::with_capacity(Modality::ALL.len());
    for modality in Modality::ALL {
        let zodiac_signs = sqlx::query_as(
            "SELECT name, symbol, element FROM zodiac_signs WHERE modality = ? ORDER BY house_number",
        )
        .bind(modality.as_str())
        .fetch_all(&mut *conn)
        .await?;
        out.push(ModalityInfo {
            modality,
            description: modality.description(),
            zodiac_signs,
        });
    }
    Ok(out)
}

/// Day rulers in Chaldean weekday order, Sunday first.
pub async fn planetary_hours(conn: &mut SqliteConnection) -> LookupResult<PlanetaryHours> {
    let planets = sqlx::query_as(
        r#"
        SELECT name, symbol, day_of_week, metal, color, magical_powers
        FROM planets
        ORDER BY CASE name
            WHEN 'Sun' THEN 1
            WHEN 'Moon' THEN 2
            WHEN 'Mars' THEN 3
            WHEN 'Mercury' THEN 4
            WHEN 'Jupiter' THEN 5
            WHEN 'Venus' THEN 6
            WHEN 'Saturn' THEN 7
            ELSE 8
        END
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(PlanetaryHours {
        description: "Each day is ruled by a planet, and each hour of the day/night cycles through the planetary rulers",
        note: "Planetary hours begin at sunrise and sunset, with day and night divided into 12 hours each",
        planets,
        usage: "Use planetary hours for timing magical operations according to the planet's nature",
    })
}

pub async fn summary(conn: &mut SqliteConnection) -> LookupResult<AstrologySummary> {
    let planets: Vec<PlanetSummary> = sqlx::query_as(
        r#"
        SELECT p.name, p.symbol, p.day_of_week, s.name AS sephiroth
        FROM planets p
        LEFT JOIN sephiroth s ON p.sephiroth_number = s.number
        ORDER BY p.id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    let signs: Vec<SignSummary> = sqlx::query_as(
        "SELECT name, symbol, element, modality, ruling_planet FROM zodiac_signs ORDER BY house_number",
    )
    .fetch_all(&mut *conn)
    .await?;

    Ok(AstrologySummary {
        planets: planets.into(),
        zodiac_signs: signs.into(),
        elements: Element::ALL,
        modalities: Modality::ALL,
        structure: Structure {
            planets: 7,
            signs: 12,
            elements: 4,
            modalities: 3,
            houses: 12,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tarot_card_name() {
        assert_eq!(tarot_card_name("The Emperor (IV)"), Some("The Emperor"));
        assert_eq!(tarot_card_name("Strength (VIII) / Lust"), Some("Strength"));
        assert_eq!(tarot_card_name("Justice (XI) / Adjustment"), Some("Justice"));
        assert_eq!(tarot_card_name(""), None);
    }
}
