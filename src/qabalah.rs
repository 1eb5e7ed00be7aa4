//! Tree of Life queries: Sephiroth, Paths and the full graph.

use serde::Serialize;
use sqlx::SqliteConnection;

use crate::cards;
use crate::error::{LookupError, LookupResult};
use crate::models::{Card, PathView, Sephirah};

const SEPHIRAH_NAMES: &str =
    "Valid names: Kether, Chokmah, Binah, Chesed, Geburah, Tiphareth, Netzach, Hod, Yesod, Malkuth";

/// Path rows joined with their card and both endpoint names.
const PATH_SELECT: &str = r#"
    SELECT p.number, p.name, p.hebrew_letter, p.hebrew_letter_meaning,
           p.connects_from, p.connects_to, p.element, p.planet, p.sign,
           p.color, p.description,
           c.number AS card_number, c.name AS card_name,
           s1.name AS from_sephirah_name, s2.name AS to_sephirah_name
    FROM paths p
    LEFT JOIN cards c ON p.tarot_card_id = c.id
    LEFT JOIN sephiroth s1 ON p.connects_from = s1.number
    LEFT JOIN sephiroth s2 ON p.connects_to = s2.number
"#;

/// A Sephirah together with the Paths leaving and entering it.
#[derive(Debug, Clone, Serialize)]
pub struct SephirahDetail {
    #[serde(flatten)]
    pub sephirah: Sephirah,
    pub paths_emanating: Vec<PathView>,
    pub paths_receiving: Vec<PathView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathWithCard {
    #[serde(flatten)]
    pub path: PathView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tarot_card: Option<Card>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Spheres {
    pub count: usize,
    pub spheres: Vec<Sephirah>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Connections {
    pub count: usize,
    pub connections: Vec<PathView>,
}

/// The whole graph: ten nodes, twenty-two edges.
#[derive(Debug, Clone, Serialize)]
pub struct TreeOfLife {
    pub name: &'static str,
    pub description: &'static str,
    pub sephiroth: Spheres,
    pub paths: Connections,
}

pub async fn list_sephiroth(conn: &mut SqliteConnection) -> LookupResult<Vec<Sephirah>> {
    let rows = sqlx::query_as("SELECT * FROM sephiroth ORDER BY number")
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

/// Plain Sephirah row, `None` when absent. Used by the resolver.
pub async fn find_sephirah(
    conn: &mut SqliteConnection,
    number: i64,
) -> LookupResult<Option<Sephirah>> {
    let row = sqlx::query_as("SELECT * FROM sephiroth WHERE number = ?")
        .bind(number)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

pub async fn get_sephirah(conn: &mut SqliteConnection, number: i64) -> LookupResult<SephirahDetail> {
    if !(1..=10).contains(&number) {
        return Err(LookupError::validation(
            "Sephirah number must be between 1 and 10",
        ));
    }
    let sephirah = find_sephirah(conn, number)
        .await?
        .ok_or_else(|| LookupError::not_found(format!("Sephirah {} not found", number)))?;
    with_paths(conn, sephirah).await
}

pub async fn get_sephirah_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> LookupResult<SephirahDetail> {
    let sephirah: Option<Sephirah> =
        sqlx::query_as("SELECT * FROM sephiroth WHERE LOWER(name) = LOWER(?)")
            .bind(name)
            .fetch_optional(&mut *conn)
            .await?;
    let Some(sephirah) = sephirah else {
        return Err(LookupError::not_found_with(
            format!("Sephirah \"{}\" not found", name),
            SEPHIRAH_NAMES,
        ));
    };
    with_paths(conn, sephirah).await
}

async fn with_paths(conn: &mut SqliteConnection, sephirah: Sephirah) -> LookupResult<SephirahDetail> {
    let paths_emanating = sqlx::query_as(&format!(
        "{} WHERE p.connects_from = ? ORDER BY p.number",
        PATH_SELECT
    ))
    .bind(sephirah.number)
    .fetch_all(&mut *conn)
    .await?;
    let paths_receiving = sqlx::query_as(&format!(
        "{} WHERE p.connects_to = ? ORDER BY p.number",
        PATH_SELECT
    ))
    .bind(sephirah.number)
    .fetch_all(&mut *conn)
    .await?;
    Ok(SephirahDetail {
        sephirah,
        paths_emanating,
        paths_receiving,
    })
}

pub async fn list_paths(conn: &mut SqliteConnection) -> LookupResult<Vec<PathView>> {
    let rows = sqlx::query_as(&format!("{} ORDER BY p.number", PATH_SELECT))
        .fetch_all(&mut *conn)
        .await?;
    Ok(rows)
}

fn check_path_number(number: i64) -> LookupResult<()> {
    if (11..=32).contains(&number) {
        Ok(())
    } else {
        Err(LookupError::validation(
            "Path number must be between 11 and 32",
        ))
    }
}

pub async fn get_path(conn: &mut SqliteConnection, number: i64) -> LookupResult<PathView> {
    check_path_number(number)?;
    let row: Option<PathView> = sqlx::query_as(&format!("{} WHERE p.number = ?", PATH_SELECT))
        .bind(number)
        .fetch_optional(&mut *conn)
        .await?;
    row.ok_or_else(|| LookupError::not_found(format!("Path {} not found", number)))
}

/// The Path and its full card, keywords included.
pub async fn get_path_with_card(
    conn: &mut SqliteConnection,
    number: i64,
) -> LookupResult<PathWithCard> {
    let path = get_path(conn, number).await?;
    let tarot_card = match path.card_number {
        Some(n) => Some(cards::get_card(conn, n, false).await?),
        None => None,
    };
    Ok(PathWithCard { path, tarot_card })
}

/// The Path whose linked card row is `card_id`. Matches on the card
/// reference, never on the path's own number.
pub async fn path_for_card(
    conn: &mut SqliteConnection,
    card_id: i64,
) -> LookupResult<Option<PathView>> {
    let row = sqlx::query_as(&format!("{} WHERE p.tarot_card_id = ?", PATH_SELECT))
        .bind(card_id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

pub async fn tree(conn: &mut SqliteConnection) -> LookupResult<TreeOfLife> {
    let spheres = list_sephiroth(conn).await?;
    let connections = list_paths(conn).await?;
    Ok(TreeOfLife {
        name: "Tree of Life",
        description: "The Qabalistic Tree of Life: 10 Sephiroth connected by 22 Paths corresponding to the Major Arcana",
        sephiroth: Spheres {
            count: spheres.len(),
            spheres,
        },
        paths: Connections {
            count: connections.len(),
            connections,
        },
    })
}
