//! Knowledge store statistics.
//!
//! Provides a quick summary of what's loaded: entity counts, system
//! description coverage, rituals per tradition, and whether the stored
//! dataset is the one compiled into this binary. Used by `arcanum stats`.

use anyhow::Result;
use sqlx::Row;

use crate::config::Config;
use crate::dataset::Dataset;
use crate::db;
use crate::seed;

/// Run the stats command: query the database and print a summary.
pub async fn run_stats(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;

    let counts = seed::counts(&pool).await?;
    let stored = seed::stored_fingerprint(&pool).await?;
    let builtin = Dataset::builtin().fingerprint()?;

    let db_size = std::fs::metadata(&config.db.path)
        .map(|m| m.len())
        .unwrap_or(0);

    println!("Arcanum · Knowledge Store Stats");
    println!("===============================");
    println!();
    println!("  Database:     {}", config.db.path.display());
    println!("  Size:         {}", format_bytes(db_size));
    println!(
        "  Dataset:      {}",
        match stored.as_deref() {
            Some(fp) if fp == builtin => format!("{} (current)", short(fp)),
            Some(fp) => format!("{} (stale, built-in is {})", short(fp), short(&builtin)),
            None => "not loaded".to_string(),
        }
    );
    println!();
    println!("  Cards:        {}", counts.cards);
    println!("  Keywords:     {}", counts.keywords);
    println!("  Descriptions: {}", counts.system_descriptions);
    println!("  Sephiroth:    {}", counts.sephiroth);
    println!("  Paths:        {}", counts.paths);
    println!("  Planets:      {}", counts.planets);
    println!("  Signs:        {}", counts.zodiac_signs);
    println!("  Rituals:      {}", counts.rituals);

    let system_rows = sqlx::query(
        r#"
        SELECT system_name, COUNT(DISTINCT card_id) AS card_count
        FROM system_descriptions
        GROUP BY system_name
        ORDER BY system_name
        "#,
    )
    .fetch_all(&pool)
    .await?;

    if !system_rows.is_empty() {
        println!();
        println!("  By system:");
        println!("  {:<24} {:>6}", "SYSTEM", "CARDS");
        println!("  {}", "-".repeat(31));
        for row in &system_rows {
            let system: String = row.get("system_name");
            let card_count: i64 = row.get("card_count");
            println!("  {:<24} {:>6}", system, card_count);
        }
    }

    let tradition_rows = sqlx::query(
        r#"
        SELECT tradition, COUNT(*) AS ritual_count
        FROM rituals
        GROUP BY tradition
        ORDER BY ritual_count DESC, tradition
        "#,
    )
    .fetch_all(&pool)
    .await?;

    if !tradition_rows.is_empty() {
        println!();
        println!("  By tradition:");
        println!("  {:<24} {:>8}", "TRADITION", "RITUALS");
        println!("  {}", "-".repeat(33));
        for row in &tradition_rows {
            let tradition: String = row.get("tradition");
            let ritual_count: i64 = row.get("ritual_count");
            println!("  {:<24} {:>8}", tradition, ritual_count);
        }
    }

    println!();

    pool.close().await;
    Ok(())
}

fn short(fingerprint: &str) -> &str {
    fingerprint.get(..12).unwrap_or(fingerprint)
}

/// Format a byte count as a human-readable string.
fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else if bytes < 1024 * 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.0 KB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.0 MB");
    }

    #[test]
    fn test_short_fingerprint() {
        assert_eq!(short("0123456789abcdef"), "0123456789ab");
        assert_eq!(short("abc"), "abc");
    }
}
