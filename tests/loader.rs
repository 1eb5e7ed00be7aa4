use arcanum::cards::{self, CardFilter};
use arcanum::config::Config;
use arcanum::correspond;
use arcanum::dataset::Dataset;
use arcanum::db;
use arcanum::error::LookupError;
use arcanum::models::{Arcana, Element, Suit, TarotSystem};
use arcanum::qabalah;
use arcanum::rituals::{self, RitualFilter};
use arcanum::seed::{self, DatasetCounts};
use sqlx::SqlitePool;
use tempfile::TempDir;

async fn seeded_pool() -> (TempDir, SqlitePool) {
    let tmp = TempDir::new().unwrap();
    let config = Config::for_database(tmp.path().join("data").join("arcanum.sqlite"));
    let pool = db::connect(&config).await.unwrap();
    seed::init(&pool).await.unwrap();
    (tmp, pool)
}

#[tokio::test]
async fn test_init_loads_full_dataset() {
    let (_tmp, pool) = seeded_pool().await;

    let counts = seed::counts(&pool).await.unwrap();
    assert_eq!(counts.cards, 78);
    assert_eq!(counts.sephiroth, 10);
    assert_eq!(counts.paths, 22);
    assert_eq!(counts.planets, 7);
    assert_eq!(counts.zodiac_signs, 12);
    assert_eq!(counts.rituals, 7);
    assert_eq!(counts.system_descriptions, 20);
    assert_eq!(counts, DatasetCounts::expected(&Dataset::builtin()));
}

#[tokio::test]
async fn test_init_is_idempotent() {
    let (_tmp, pool) = seeded_pool().await;
    let before = seed::counts(&pool).await.unwrap();

    let second = seed::init(&pool).await.unwrap();
    assert!(!second.reloaded, "unchanged dataset should not be reloaded");
    assert_eq!(second.counts, before);
    assert_eq!(
        seed::stored_fingerprint(&pool).await.unwrap().as_deref(),
        Some(Dataset::builtin().fingerprint().unwrap().as_str())
    );
}

#[tokio::test]
async fn test_init_reloads_stale_store() {
    let (_tmp, pool) = seeded_pool().await;
    sqlx::query("UPDATE dataset_meta SET value = 'stale'")
        .execute(&pool)
        .await
        .unwrap();

    let outcome = seed::init(&pool).await.unwrap();
    assert!(outcome.reloaded);
    assert_eq!(outcome.counts.cards, 78);

    // Ids are reissued from 1 after a reload.
    let min_id: i64 = sqlx::query_scalar("SELECT MIN(id) FROM cards")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(min_id, 1);
}

#[tokio::test]
async fn test_ensure_seeded_without_auto_seed_rejects_empty_store() {
    let tmp = TempDir::new().unwrap();
    let config = Config::for_database(tmp.path().join("empty.sqlite"));
    let pool = db::connect(&config).await.unwrap();

    let err = seed::ensure_seeded(&pool, false).await.unwrap_err();
    assert!(err.to_string().contains("arcanum init"));
}

#[tokio::test]
async fn test_card_filters() {
    let (_tmp, pool) = seeded_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let majors = cards::list_cards(
        &mut conn,
        &CardFilter {
            arcana: Some(Arcana::Major),
            ..Default::default()
        },
        false,
    )
    .await
    .unwrap();
    assert_eq!(majors.len(), 22);
    assert!(majors.iter().all(|c| c.number <= 21));

    let cups = cards::list_cards(
        &mut conn,
        &CardFilter {
            suit: Some(Suit::Cups),
            ..Default::default()
        },
        false,
    )
    .await
    .unwrap();
    assert_eq!(cups.len(), 14);
    assert!(cups.iter().all(|c| c.element.as_deref() == Some("Water")));

    let fire = cards::list_cards(
        &mut conn,
        &CardFilter {
            element: Some(Element::Fire),
            ..Default::default()
        },
        false,
    )
    .await
    .unwrap();
    assert!(fire.iter().any(|c| c.name == "Ace of Wands"));
}

#[tokio::test]
async fn test_card_lookup_by_name_ignores_case() {
    let (_tmp, pool) = seeded_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let card = cards::get_card_by_name(&mut conn, "the fool", true).await.unwrap();
    assert_eq!(card.number, 0);
    assert!(card.keywords.contains(&"beginnings".to_string()));
    let systems = card.system_descriptions.expect("systems requested");
    assert!(systems.contains_key("Thoth"));

    let err = cards::get_card_by_name(&mut conn, "The Jester", false)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        LookupError::NotFound {
            suggestion: Some(_),
            ..
        }
    ));
}

#[tokio::test]
async fn test_card_number_out_of_range() {
    let (_tmp, pool) = seeded_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let err = cards::get_card(&mut conn, 78, false).await.unwrap_err();
    assert!(matches!(err, LookupError::NotFound { .. }));
    assert_eq!(err.to_string(), cards::CARD_OUT_OF_RANGE);
    let err = cards::get_card(&mut conn, -1, false).await.unwrap_err();
    assert_eq!(err.to_string(), cards::CARD_OUT_OF_RANGE);
}

#[tokio::test]
async fn test_missing_card_in_range_differs_from_out_of_range() {
    let (_tmp, pool) = seeded_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    sqlx::query("DELETE FROM keywords WHERE card_id = (SELECT id FROM cards WHERE number = 50)")
        .execute(&mut *conn)
        .await
        .unwrap();
    sqlx::query("DELETE FROM cards WHERE number = 50")
        .execute(&mut *conn)
        .await
        .unwrap();

    let err = cards::get_card(&mut conn, 50, false).await.unwrap_err();
    assert!(matches!(err, LookupError::NotFound { .. }));
    assert_eq!(err.to_string(), "Card number 50 not found");
    assert_ne!(err.to_string(), cards::CARD_OUT_OF_RANGE);
}

#[tokio::test]
async fn test_failed_reload_leaves_store_untouched() {
    let (_tmp, pool) = seeded_pool().await;
    let before = seed::counts(&pool).await.unwrap();
    let fingerprint = seed::stored_fingerprint(&pool).await.unwrap();

    // Rituals are written last, so every earlier table has already been
    // replaced inside the transaction when this fires.
    sqlx::query(
        "CREATE TRIGGER reject_rituals BEFORE INSERT ON rituals \
         BEGIN SELECT RAISE(ABORT, 'ritual insert rejected'); END",
    )
    .execute(&pool)
    .await
    .unwrap();

    let err = seed::load_dataset(&pool, &Dataset::builtin())
        .await
        .unwrap_err();
    assert!(format!("{:#}", err).contains("ritual insert rejected"));

    assert_eq!(seed::counts(&pool).await.unwrap(), before);
    assert_eq!(seed::stored_fingerprint(&pool).await.unwrap(), fingerprint);

    let mut conn = pool.acquire().await.unwrap();
    let fool = cards::get_card(&mut conn, 0, false).await.unwrap();
    assert_eq!(fool.name, "The Fool");
    assert!(!fool.keywords.is_empty());
}

#[tokio::test]
async fn test_search_matches_keywords_and_text() {
    let (_tmp, pool) = seeded_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let results = cards::search_cards(&mut conn, "LOVE", false).await.unwrap();
    let numbers: Vec<i64> = results.iter().map(|c| c.number).collect();
    assert!(numbers.contains(&6), "The Lovers should match");

    let mut sorted = numbers.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(numbers, sorted, "results are distinct and ordered by number");

    let lower: Vec<i64> = cards::search_cards(&mut conn, "love", false)
        .await
        .unwrap()
        .iter()
        .map(|c| c.number)
        .collect();
    assert_eq!(lower, numbers);

    for card in &results {
        let fields = [
            Some(card.name.as_str()),
            Some(card.upright_meaning.as_str()),
            Some(card.reversed_meaning.as_str()),
            Some(card.description.as_str()),
            card.element.as_deref(),
            card.hebrew_letter.as_deref(),
            card.color_primary.as_deref(),
            card.gemstone.as_deref(),
        ];
        let hit = fields
            .into_iter()
            .flatten()
            .chain(card.keywords.iter().map(String::as_str))
            .any(|text| text.to_lowercase().contains("love"));
        assert!(hit, "{} matched without containing the query", card.name);
    }

    let err = cards::search_cards(&mut conn, "   ", false).await.unwrap_err();
    assert!(matches!(err, LookupError::Validation { .. }));
}

#[tokio::test]
async fn test_system_description_not_yet_available() {
    let (_tmp, pool) = seeded_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let view = cards::system_description(&mut conn, 0, TarotSystem::GoldenDawn)
        .await
        .unwrap();
    assert!(view.description.is_some());
    assert!(view.message.is_none());

    let view = cards::system_description(&mut conn, 6, TarotSystem::Marseille)
        .await
        .unwrap();
    assert!(view.description.is_none());
    assert_eq!(
        view.message.as_deref(),
        Some("No Marseille description available for this card yet")
    );
}

#[tokio::test]
async fn test_fool_correspondences() {
    let (_tmp, pool) = seeded_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let view = correspond::resolve(&mut conn, 0).await.unwrap();
    let path = view.qabalah_path.expect("The Fool sits on a path");
    assert_eq!(path.number, 11);
    assert_eq!(path.hebrew_letter, "Aleph");

    let sephiroth = view.connected_sephiroth.expect("path endpoints");
    assert_eq!(sephiroth.from.name, "Kether");
    assert_eq!(sephiroth.to.name, "Chokmah");

    // Uranus is not one of the seven classical planets.
    assert!(view.astrology.is_none());

    let air: Vec<String> = view
        .elemental_zodiac
        .expect("Air signs")
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(air.len(), 3);
    assert!(air.contains(&"Aquarius".to_string()));
}

#[tokio::test]
async fn test_lovers_resolve_sign_and_ruler() {
    let (_tmp, pool) = seeded_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let view = correspond::resolve(&mut conn, 6).await.unwrap();
    let links = view.astrology.expect("Gemini is a sign");
    assert_eq!(links.zodiac_sign.map(|s| s.name).as_deref(), Some("Gemini"));
    assert_eq!(links.ruling_planet.map(|p| p.name).as_deref(), Some("Mercury"));
    assert!(links.planet.is_none());
}

#[tokio::test]
async fn test_minor_card_has_no_path() {
    let (_tmp, pool) = seeded_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let view = correspond::resolve(&mut conn, 22).await.unwrap();
    assert_eq!(view.card.name, "Ace of Wands");
    assert!(view.qabalah_path.is_none());
    assert!(view.connected_sephiroth.is_none());
}

#[tokio::test]
async fn test_path_ranges_and_card_link() {
    let (_tmp, pool) = seeded_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let err = qabalah::get_path(&mut conn, 5).await.unwrap_err();
    assert!(matches!(err, LookupError::Validation { .. }));
    let err = qabalah::get_sephirah(&mut conn, 11).await.unwrap_err();
    assert!(matches!(err, LookupError::Validation { .. }));

    let path = qabalah::get_path_with_card(&mut conn, 32).await.unwrap();
    let card = path.tarot_card.expect("every path has a card");
    assert_eq!(card.name, "The World");
    assert!(!card.keywords.is_empty());

    let tree = qabalah::tree(&mut conn).await.unwrap();
    assert_eq!(tree.sephiroth.count, 10);
    assert_eq!(tree.paths.count, 22);
}

#[tokio::test]
async fn test_ritual_lookup_and_ordering() {
    let (_tmp, pool) = seeded_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    let lbrp = rituals::get_ritual_by_name(&mut conn, "lbrp").await.unwrap();
    assert_eq!(
        lbrp.overview.name,
        "Lesser Banishing Ritual of the Pentagram"
    );
    let upper = rituals::get_ritual_by_name(&mut conn, "LBRP").await.unwrap();
    assert_eq!(upper.overview.id, lbrp.overview.id);
    assert_eq!(upper.overview.name, lbrp.overview.name);
    let by_name =
        rituals::get_ritual_by_name(&mut conn, "lesser banishing ritual of the pentagram")
            .await
            .unwrap();
    assert_eq!(by_name.overview.id, lbrp.overview.id);

    let beginners = rituals::list_rituals(
        &mut conn,
        &RitualFilter {
            difficulty: Some(arcanum::models::Difficulty::Beginner),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let names: Vec<&str> = beginners.iter().map(|r| r.overview.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Lesser Banishing Ritual of the Pentagram",
            "Lesser Invoking Ritual of the Pentagram",
        ]
    );

    let daily = rituals::daily_rituals(&mut conn).await.unwrap();
    assert!(daily.iter().all(|r| r.overview.duration_minutes <= 25));
    assert!(!daily.iter().any(|r| r.overview.abbreviation == "OWT"));
}

#[tokio::test]
async fn test_every_card_number_resolves() {
    let (_tmp, pool) = seeded_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    for number in 0..=77 {
        let card = cards::get_card(&mut conn, number, false).await.unwrap();
        assert_eq!(card.number, number);
    }
}

#[tokio::test]
async fn test_major_arcana_path_endpoints() {
    let (_tmp, pool) = seeded_pool().await;
    let mut conn = pool.acquire().await.unwrap();

    for number in 0..=21 {
        let view = correspond::resolve(&mut conn, number).await.unwrap();
        let path = view
            .qabalah_path
            .unwrap_or_else(|| panic!("card {} has no path", number));
        assert_eq!(path.card_number, Some(number));
        let sephiroth = view.connected_sephiroth.expect("both endpoints exist");
        assert_eq!(sephiroth.from.number, path.connects_from);
        assert_eq!(sephiroth.to.number, path.connects_to);
    }
}
