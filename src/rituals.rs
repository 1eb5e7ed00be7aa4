//! Ritual queries.

use serde::Serialize;
use sqlx::SqliteConnection;

use crate::error::{LookupError, LookupResult};
use crate::models::{Difficulty, PracticeStep, Ritual};

/// `ORDER BY` key ranking Beginner first and Expert last.
const DIFFICULTY_RANK: &str = r#"
    CASE difficulty
        WHEN 'Beginner' THEN 1
        WHEN 'Intermediate' THEN 2
        WHEN 'Advanced' THEN 3
        WHEN 'Expert' THEN 4
        ELSE 5
    END
"#;

const STEP_COLUMNS: &str = "id, name, abbreviation, difficulty, duration_minutes, purpose";

/// Filters for [`list_rituals`]. Tradition and category are free text
/// compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct RitualFilter {
    pub tradition: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct TraditionCount {
    pub tradition: String,
    pub ritual_count: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct CategoryCount {
    pub category: String,
    pub ritual_count: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PracticeStage {
    pub description: &'static str,
    pub duration: &'static str,
    pub rituals: Vec<PracticeStep>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PracticeStages {
    pub foundation: PracticeStage,
    pub intermediate: PracticeStage,
    pub advanced: PracticeStage,
}

#[derive(Debug, Clone, Serialize)]
pub struct PracticeGuide {
    pub title: &'static str,
    pub stages: PracticeStages,
    pub notes: [&'static str; 4],
}

/// Rituals matching `filter`. With a difficulty filter the result runs from
/// shortest to longest; otherwise by difficulty rank, then name.
pub async fn list_rituals(
    conn: &mut SqliteConnection,
    filter: &RitualFilter,
) -> LookupResult<Vec<Ritual>> {
    let mut sql = String::from("SELECT * FROM rituals WHERE 1=1");
    if filter.tradition.is_some() {
        sql.push_str(" AND LOWER(tradition) = LOWER(?)");
    }
    if filter.category.is_some() {
        sql.push_str(" AND LOWER(category) = LOWER(?)");
    }
    if filter.difficulty.is_some() {
        sql.push_str(" AND difficulty = ? ORDER BY duration_minutes, name");
    } else {
        sql.push_str(&format!(" ORDER BY {}, name", DIFFICULTY_RANK));
    }

    let mut query = sqlx::query_as::<_, Ritual>(&sql);
    if let Some(tradition) = &filter.tradition {
        query = query.bind(tradition);
    }
    if let Some(category) = &filter.category {
        query = query.bind(category);
    }
    if let Some(difficulty) = filter.difficulty {
        query = query.bind(difficulty.as_str());
    }
    Ok(query.fetch_all(&mut *conn).await?)
}

pub async fn get_ritual(conn: &mut SqliteConnection, id: i64) -> LookupResult<Ritual> {
    let row: Option<Ritual> = sqlx::query_as("SELECT * FROM rituals WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    row.ok_or_else(|| LookupError::not_found(format!("Ritual {} not found", id)))
}

/// Case-insensitive exact match on the full name or the abbreviation.
pub async fn get_ritual_by_name(conn: &mut SqliteConnection, name: &str) -> LookupResult<Ritual> {
    let row: Option<Ritual> = sqlx::query_as(
        "SELECT * FROM rituals WHERE LOWER(name) = LOWER(?) OR LOWER(abbreviation) = LOWER(?)",
    )
    .bind(name)
    .bind(name)
    .fetch_optional(&mut *conn)
    .await?;
    row.ok_or_else(|| {
        LookupError::not_found_with(
            format!("Ritual \"{}\" not found", name),
            "Try searching by abbreviation (e.g., LBRP, MPR, BRH) or use /api/rituals to see all available rituals",
        )
    })
}

pub async fn traditions(conn: &mut SqliteConnection) -> LookupResult<Vec<TraditionCount>> {
    let rows = sqlx::query_as(
        "SELECT tradition, COUNT(*) AS ritual_count FROM rituals GROUP BY tradition ORDER BY tradition",
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

pub async fn categories(conn: &mut SqliteConnection) -> LookupResult<Vec<CategoryCount>> {
    let rows = sqlx::query_as(
        "SELECT category, COUNT(*) AS ritual_count FROM rituals GROUP BY category ORDER BY category",
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

pub async fn beginner_rituals(conn: &mut SqliteConnection) -> LookupResult<Vec<Ritual>> {
    let rows = sqlx::query_as(
        "SELECT * FROM rituals WHERE difficulty = 'Beginner' ORDER BY duration_minutes, name",
    )
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

/// Beginner and Intermediate rituals that fit in 25 minutes.
pub async fn daily_rituals(conn: &mut SqliteConnection) -> LookupResult<Vec<Ritual>> {
    let rows = sqlx::query_as(&format!(
        r#"
        SELECT * FROM rituals
        WHERE difficulty IN ('Beginner', 'Intermediate') AND duration_minutes <= 25
        ORDER BY {}, duration_minutes, name
        "#,
        DIFFICULTY_RANK
    ))
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

pub async fn search_rituals(conn: &mut SqliteConnection, query: &str) -> LookupResult<Vec<Ritual>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(LookupError::validation(
            "Please provide a search query using ?q=<query>",
        ));
    }
    let rows = sqlx::query_as(&format!(
        r#"
        SELECT * FROM rituals
        WHERE instr(LOWER(name), ?) > 0
           OR instr(LOWER(abbreviation), ?) > 0
           OR instr(LOWER(purpose), ?) > 0
           OR instr(LOWER(description), ?) > 0
           OR instr(LOWER(category), ?) > 0
           OR instr(LOWER(benefits), ?) > 0
        ORDER BY {}, name
        "#,
        DIFFICULTY_RANK
    ))
    .bind(&needle)
    .bind(&needle)
    .bind(&needle)
    .bind(&needle)
    .bind(&needle)
    .bind(&needle)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

/// Rituals whose planetary focus mentions `planet`.
pub async fn rituals_by_planet(conn: &mut SqliteConnection, planet: &str) -> LookupResult<Vec<Ritual>> {
    let rows = sqlx::query_as(&format!(
        "SELECT * FROM rituals WHERE instr(LOWER(planetary_focus), LOWER(?)) > 0 ORDER BY {}, name",
        DIFFICULTY_RANK
    ))
    .bind(planet)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

/// Rituals whose elemental focus equals `element`, ignoring case.
pub async fn rituals_by_element(
    conn: &mut SqliteConnection,
    element: &str,
) -> LookupResult<Vec<Ritual>> {
    let rows = sqlx::query_as(&format!(
        "SELECT * FROM rituals WHERE LOWER(elemental_focus) = LOWER(?) ORDER BY {}, name",
        DIFFICULTY_RANK
    ))
    .bind(element)
    .fetch_all(&mut *conn)
    .await?;
    Ok(rows)
}

pub async fn practice_guide(conn: &mut SqliteConnection) -> LookupResult<PracticeGuide> {
    let foundation = sqlx::query_as(&format!(
        "SELECT {} FROM rituals WHERE abbreviation IN ('LBRP', 'LIRP') ORDER BY name",
        STEP_COLUMNS
    ))
    .fetch_all(&mut *conn)
    .await?;

    let intermediate = sqlx::query_as(&format!(
        "SELECT {} FROM rituals WHERE difficulty = 'Intermediate' ORDER BY name",
        STEP_COLUMNS
    ))
    .fetch_all(&mut *conn)
    .await?;

    let advanced = sqlx::query_as(&format!(
        "SELECT {} FROM rituals WHERE difficulty IN ('Advanced', 'Expert') ORDER BY {}, name",
        STEP_COLUMNS, DIFFICULTY_RANK
    ))
    .fetch_all(&mut *conn)
    .await?;

    Ok(PracticeGuide {
        title: "Suggested Practice Progression",
        stages: PracticeStages {
            foundation: PracticeStage {
                description: "Master these first - the cornerstone practices",
                duration: "1-3 months of daily practice",
                rituals: foundation,
            },
            intermediate: PracticeStage {
                description: "Build on the foundation with these practices",
                duration: "3-12 months of regular practice",
                rituals: intermediate,
            },
            advanced: PracticeStage {
                description: "Advanced practices requiring extensive preparation",
                duration: "After solid foundation in earlier practices",
                rituals: advanced,
            },
        },
        notes: [
            "Daily LBRP practice is recommended for all levels",
            "Always learn from a qualified teacher for advanced practices",
            "Keep a magical diary to track your progress",
            "Consistency is more important than complexity",
        ],
    })
}
