use std::net::SocketAddr;

use arcanum::config::Config;
use arcanum::db;
use arcanum::seed;
use arcanum::server::{create_router, AppState};
use serde_json::Value;
use tempfile::TempDir;

struct TestServer {
    addr: SocketAddr,
    client: reqwest::Client,
    _tmp: TempDir,
}

impl TestServer {
    async fn start() -> Self {
        let tmp = TempDir::new().unwrap();
        let config = Config::for_database(tmp.path().join("arcanum.sqlite"));
        let pool = db::connect(&config).await.unwrap();
        seed::init(&pool).await.unwrap();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = create_router(AppState::new(pool, config));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer {
            addr,
            client: reqwest::Client::new(),
            _tmp: tmp,
        }
    }

    async fn get(&self, path: &str) -> (u16, Value) {
        let resp = self
            .client
            .get(format!("http://{}{}", self.addr, path))
            .send()
            .await
            .unwrap();
        let status = resp.status().as_u16();
        let body: Value = resp.json().await.unwrap();
        (status, body)
    }
}

#[tokio::test]
async fn test_index_and_health() {
    let server = TestServer::start().await;

    let (status, body) = server.get("/health").await;
    assert_eq!(status, 200);
    assert_eq!(body["status"], "ok");

    let (status, body) = server.get("/").await;
    assert_eq!(status, 200);
    assert!(body["endpoints"]["tarot"].is_object());
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let server = TestServer::start().await;

    let (status, body) = server.get("/nowhere").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Endpoint not found");
    assert_eq!(body["message"], "Visit / for API documentation");
}

#[tokio::test]
async fn test_cards_listing_and_filters() {
    let server = TestServer::start().await;

    let (status, body) = server.get("/cards?systems=false").await;
    assert_eq!(status, 200);
    assert_eq!(body["count"], 78);
    assert!(body["cards"][0].get("system_descriptions").is_none());

    let (_, body) = server.get("/cards?arcana=Major%20Arcana").await;
    assert_eq!(body["count"], 22);

    let (status, body) = server.get("/cards?suit=Chalices").await;
    assert_eq!(status, 400);
    assert!(body["error"].is_string());

    // Blank filters are ignored.
    let (_, body) = server.get("/cards?suit=&systems=false").await;
    assert_eq!(body["count"], 78);
}

#[tokio::test]
async fn test_card_by_number() {
    let server = TestServer::start().await;

    let (status, body) = server.get("/cards/0").await;
    assert_eq!(status, 200);
    assert_eq!(body["name"], "The Fool");
    assert!(body.get("id").is_none());
    assert!(body["system_descriptions"]["RWS"].is_object());

    let (status, body) = server.get("/cards/99").await;
    assert_eq!(status, 404);
    assert_eq!(body["error"], "Card number must be between 0 and 77");

    let (status, _) = server.get("/cards/abc").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn test_card_by_name_and_search() {
    let server = TestServer::start().await;

    let (status, body) = server.get("/cards/name/the%20magician").await;
    assert_eq!(status, 200);
    assert_eq!(body["number"], 1);

    let (status, body) = server.get("/cards/name/Nobody").await;
    assert_eq!(status, 404);
    assert!(body["suggestion"].is_string());

    let (status, body) = server.get("/cards/search?q=Love").await;
    assert_eq!(status, 200);
    assert_eq!(body["query"], "love");
    let results = body["results"].as_array().unwrap();
    assert!(results.iter().any(|c| c["name"] == "The Lovers"));

    let (status, body) = server.get("/cards/search").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Please provide a search query using ?q=<query>");
}

#[tokio::test]
async fn test_random_and_daily_cards() {
    let server = TestServer::start().await;

    let (status, body) = server.get("/cards/random").await;
    assert_eq!(status, 200);
    let n = body["number"].as_i64().unwrap();
    assert!((0..=77).contains(&n));

    let (status, body) = server.get("/cards/daily").await;
    assert_eq!(status, 200);
    let n = body["card"]["number"].as_i64().unwrap();
    assert!((0..=21).contains(&n));
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_card_system_descriptions() {
    let server = TestServer::start().await;

    let (status, body) = server.get("/cards/0/system/thoth").await;
    assert_eq!(status, 200);
    assert_eq!(body["system"], "Thoth");
    assert!(body["description"].is_string());

    let (status, body) = server.get("/cards/6/system/Marseille").await;
    assert_eq!(status, 200);
    assert_eq!(
        body["message"],
        "No Marseille description available for this card yet"
    );

    let (status, body) = server.get("/cards/0/system/InvalidSystem").await;
    assert_eq!(status, 400);
    assert!(body["error"].as_str().unwrap().contains("Golden Dawn"));

    let (status, _) = server.get("/systems").await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_card_correspondences() {
    let server = TestServer::start().await;

    let (status, body) = server.get("/cards/0/correspondences").await;
    assert_eq!(status, 200);
    assert_eq!(body["qabalah_path"]["hebrew_letter"], "Aleph");
    assert_eq!(body["connected_sephiroth"]["from"]["name"], "Kether");
    assert_eq!(body["connected_sephiroth"]["to"]["name"], "Chokmah");
    assert!(body.get("astrology").is_none());

    let (_, body) = server.get("/cards/1/correspondences").await;
    assert_eq!(body["astrology"]["planet"]["name"], "Mercury");

    let (status, _) = server.get("/cards/78/correspondences").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn test_qabalah_endpoints() {
    let server = TestServer::start().await;

    let (_, body) = server.get("/api/qabalah/sephiroth").await;
    assert_eq!(body["count"], 10);

    let (status, body) = server.get("/api/qabalah/sephiroth/name/tiphareth").await;
    assert_eq!(status, 200);
    assert_eq!(body["number"], 6);
    assert!(!body["paths_emanating"].as_array().unwrap().is_empty());

    let (status, _) = server.get("/api/qabalah/sephiroth/0").await;
    assert_eq!(status, 400);

    let (status, body) = server.get("/api/qabalah/paths/5").await;
    assert_eq!(status, 400);
    assert_eq!(body["error"], "Path number must be between 11 and 32");

    let (status, body) = server.get("/api/qabalah/paths/11/card").await;
    assert_eq!(status, 200);
    assert_eq!(body["tarot_card"]["name"], "The Fool");

    let (_, body) = server.get("/api/qabalah/tree").await;
    assert_eq!(body["sephiroth"]["count"], 10);
    assert_eq!(body["paths"]["count"], 22);
}

#[tokio::test]
async fn test_astrology_endpoints() {
    let server = TestServer::start().await;

    let (_, body) = server.get("/api/astrology/planets").await;
    assert_eq!(body["count"], 7);

    let (status, body) = server.get("/api/astrology/signs/Leo").await;
    assert_eq!(status, 200);
    assert_eq!(body["ruling_planet"], "Sun");
    assert_eq!(body["ruling_planet_details"]["name"], "Sun");
    assert_eq!(body["tarot_card"]["name"], "Strength");
    assert_eq!(body["element"], "Fire");
    assert_eq!(body["modality"], "Fixed");
    assert!(body.get("id").is_none(), "row ids stay internal");

    let (status, body) = server.get("/api/astrology/planets/Venus").await;
    assert_eq!(status, 200);
    assert_eq!(body["name"], "Venus");
    assert!(body.get("id").is_none(), "row ids stay internal");

    let (_, body) = server.get("/api/astrology/signs?element=fire").await;
    assert_eq!(body["count"], 3);

    let (_, body) = server
        .get("/api/astrology/signs?element=Water&modality=Fixed")
        .await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["signs"][0]["name"], "Scorpio");

    let (status, _) = server.get("/api/astrology/signs?modality=Wobbly").await;
    assert_eq!(status, 400);

    let (status, body) = server.get("/api/astrology/planets/Pluto").await;
    assert_eq!(status, 404);
    assert!(body["suggestion"].is_string());

    let (_, body) = server.get("/api/astrology/elements").await;
    assert_eq!(body["count"], 4);
    let (_, body) = server.get("/api/astrology/modalities").await;
    assert_eq!(body["count"], 3);
    let (status, _) = server.get("/api/astrology/planetary-hours").await;
    assert_eq!(status, 200);
    let (status, _) = server.get("/api/astrology/correspondences").await;
    assert_eq!(status, 200);
}

#[tokio::test]
async fn test_ritual_endpoints() {
    let server = TestServer::start().await;

    let (_, body) = server.get("/api/rituals").await;
    assert_eq!(body["count"], 7);
    assert!(body["rituals"][0]["instructions"].is_string());

    let (_, body) = server.get("/api/rituals?instructions=false").await;
    assert!(body["rituals"][0].get("instructions").is_none());

    let (_, body) = server.get("/api/rituals?difficulty=Beginner").await;
    assert_eq!(body["count"], 2);
    assert_eq!(body["rituals"][0]["abbreviation"], "LBRP");
    assert_eq!(body["rituals"][1]["abbreviation"], "LIRP");

    let (status, _) = server.get("/api/rituals?difficulty=Easy").await;
    assert_eq!(status, 400);

    let (status, body) = server.get("/api/rituals/name/lbrp").await;
    assert_eq!(status, 200);
    assert_eq!(body["name"], "Lesser Banishing Ritual of the Pentagram");

    let (status, _) = server.get("/api/rituals/999").await;
    assert_eq!(status, 404);

    let (_, body) = server.get("/api/rituals/daily").await;
    assert!(body["rituals"]
        .as_array()
        .unwrap()
        .iter()
        .all(|r| r["duration_minutes"].as_i64().unwrap() <= 25));

    let (status, body) = server.get("/api/rituals/by-planet/Neptune").await;
    assert_eq!(status, 200);
    assert_eq!(body["count"], 0);
    assert_eq!(body["message"], "No rituals specifically focused on Neptune");

    let (status, _) = server.get("/api/rituals/search?q=").await;
    assert_eq!(status, 400);

    let (status, body) = server.get("/api/rituals/practice-guide").await;
    assert_eq!(status, 200);
    assert!(body["stages"]["foundation"]["rituals"].is_array());
}
