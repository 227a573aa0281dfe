// End-to-end conversation scenarios without Telegram: commands go through
// `respond`, the log store is a temp SQLite file, and the film provider is
// either a canned lookup or the real client against a mock server.

use std::path::PathBuf;

use async_trait::async_trait;
use cinemabot_core::config::KinopoiskConfig;
use cinemabot_history::HistoryStore;
use cinemabot_kinopoisk::{FilmLookup, FilmSummary, KinopoiskClient, LookupError};
use cinemabot_telegram::reply::{
    ACHIEVEMENT, CLEARED, HELP_TEXT, NOTHING_FOUND, NO_HISTORY, NO_STATS, SERVICE_UNAVAILABLE,
};
use cinemabot_telegram::{respond, BotContext, Command, Reply};
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SITE: &str = "https://www.ggpoisk.ru";
const USER: i64 = 1001;

struct TestContext {
    films: Box<dyn FilmLookup>,
    history: HistoryStore,
    db_path: PathBuf,
    _dir: TempDir,
}

impl TestContext {
    fn new(films: Box<dyn FilmLookup>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("cinema_bot.db");
        let history = HistoryStore::open(&db_path).unwrap();
        Self {
            films,
            history,
            db_path,
            _dir: dir,
        }
    }

    fn with_server(server: &MockServer) -> Self {
        let config = KinopoiskConfig {
            api_key: "test-key".to_string(),
            base_url: server.uri(),
            ..KinopoiskConfig::default()
        };
        Self::new(Box::new(KinopoiskClient::new(reqwest::Client::new(), &config)))
    }

    async fn say(&self, text: &str) -> Vec<Reply> {
        let command = Command::parse(text).expect("non-blank text");
        respond(self, USER, command).await.unwrap()
    }
}

impl BotContext for TestContext {
    fn films(&self) -> &dyn FilmLookup {
        self.films.as_ref()
    }

    fn history(&self) -> &HistoryStore {
        &self.history
    }

    fn viewing_site(&self) -> &str {
        SITE
    }
}

/// Finds every query; the film id is the query length.
struct AlwaysFound;

#[async_trait]
impl FilmLookup for AlwaysFound {
    async fn search_film(&self, query: &str) -> Result<FilmSummary, LookupError> {
        Ok(FilmSummary {
            film_id: query.len() as i64,
            title: query.to_string(),
            year: "2000".to_string(),
            rating: "7.0".to_string(),
            description: "-".to_string(),
            duration: "—".to_string(),
            countries: "—".to_string(),
            poster_url: None,
        })
    }
}

fn texts(replies: &[Reply]) -> Vec<&str> {
    replies.iter().map(Reply::body).collect()
}

#[tokio::test]
async fn start_and_help_show_usage() {
    let ctx = TestContext::new(Box::new(AlwaysFound));
    assert_eq!(ctx.say("/start").await, vec![Reply::text(HELP_TEXT)]);
    assert_eq!(ctx.say("/help").await, vec![Reply::text(HELP_TEXT)]);
}

#[tokio::test]
async fn fresh_user_has_no_history_or_stats() {
    let ctx = TestContext::new(Box::new(AlwaysFound));
    assert_eq!(texts(&ctx.say("/history").await), vec![NO_HISTORY]);
    assert_eq!(texts(&ctx.say("/stats").await), vec![NO_STATS]);
}

#[tokio::test]
async fn inception_card_from_provider() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2.1/films/search-by-keyword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "films": [{
                "filmId": 12345,
                "nameRu": "Начало",
                "rating": "8.7",
                "countries": []
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2.1/films/12345"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let ctx = TestContext::with_server(&server);
    let replies = ctx.say("Inception").await;

    assert_eq!(replies.len(), 1);
    let Reply::Text(caption) = &replies[0] else {
        panic!("no poster, expected a text card: {replies:?}");
    };
    assert!(caption.contains("Начало"));
    assert!(caption.contains("8.7"));
    assert!(caption.contains(", —)"));
    assert!(caption.contains("/film/12345/\""));

    let recent = ctx.history.recent_searches(USER, 10).unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].query, "Inception");
}

#[tokio::test]
async fn poster_turns_card_into_photo() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2.1/films/search-by-keyword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "films": [{
                "filmId": 77,
                "nameEn": "Heat",
                "posterUrlPreview": "https://kinopoiskapiunofficial.tech/images/posters/kp_small/77.jpg"
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v2.1/films/77"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ratingKinopoisk": 8.2 })))
        .mount(&server)
        .await;

    let ctx = TestContext::with_server(&server);
    let replies = ctx.say("Heat").await;

    match &replies[..] {
        [Reply::Photo { url, caption }] => {
            assert!(url.ends_with("/77.jpg"));
            assert!(caption.contains("Heat"));
            assert!(caption.contains("8.2"));
        }
        other => panic!("expected one photo reply, got {other:?}"),
    }
}

#[tokio::test]
async fn provider_error_reports_unavailable_and_logs_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2.1/films/search-by-keyword"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let ctx = TestContext::with_server(&server);
    assert_eq!(ctx.say("Inception").await, vec![Reply::text(SERVICE_UNAVAILABLE)]);
    assert!(ctx.history.recent_searches(USER, 10).unwrap().is_empty());
    assert!(ctx.history.top_stats(USER, 5).unwrap().is_empty());
}

#[tokio::test]
async fn empty_result_reports_nothing_found_and_logs_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v2.1/films/search-by-keyword"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "films": [] })))
        .mount(&server)
        .await;

    let ctx = TestContext::with_server(&server);
    assert_eq!(ctx.say("qwertyuiop").await, vec![Reply::text(NOTHING_FOUND)]);
    assert!(ctx.history.recent_searches(USER, 10).unwrap().is_empty());
}

#[tokio::test]
async fn fifth_search_unlocks_achievement_once() {
    let ctx = TestContext::new(Box::new(AlwaysFound));

    for (i, query) in ["Alien", "Heat", "Ronin", "Fargo"].iter().enumerate() {
        let replies = ctx.say(query).await;
        assert_eq!(replies.len(), 1, "search #{} must not unlock anything", i + 1);
    }

    let fifth = ctx.say("Drive").await;
    assert_eq!(fifth.len(), 2);
    assert_eq!(fifth[1], Reply::text(ACHIEVEMENT));

    let sixth = ctx.say("Memento").await;
    assert_eq!(sixth.len(), 1);
}

#[tokio::test]
async fn history_stats_and_clear() {
    let ctx = TestContext::new(Box::new(AlwaysFound));
    for query in ["Alien", "Heat", "Alien", "Tom & Jerry"] {
        ctx.say(query).await;
    }

    let history = ctx.say("/history").await;
    let body = history[0].body();
    assert!(body.starts_with("<b>Your recent searches:</b>\n"));
    let lines: Vec<&str> = body.lines().skip(1).collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].ends_with("— <i>Tom &amp; Jerry</i>"));
    assert!(lines[3].ends_with("— <i>Alien</i>"));

    let stats = ctx.say("/stats").await;
    assert_eq!(
        stats[0].body(),
        "<b>Your top 5 searches:</b>\n\
         <i>Alien</i>: 2 times\n\
         <i>Heat</i>: 1 times\n\
         <i>Tom &amp; Jerry</i>: 1 times"
    );

    assert_eq!(ctx.say("/clear").await, vec![Reply::text(CLEARED)]);
    assert_eq!(texts(&ctx.say("/history").await), vec![NO_HISTORY]);
    assert_eq!(texts(&ctx.say("/stats").await), vec![NO_STATS]);
}

#[tokio::test]
async fn history_shows_at_most_ten() {
    let ctx = TestContext::new(Box::new(AlwaysFound));
    for i in 0..13 {
        ctx.say(&format!("film {i}")).await;
    }
    let history = ctx.say("/history").await;
    let lines: Vec<&str> = history[0].body().lines().skip(1).collect();
    assert_eq!(lines.len(), 10);
    assert!(lines[0].ends_with("<i>film 12</i>"));
}

#[tokio::test]
async fn failed_history_write_still_sends_card() {
    let ctx = TestContext::new(Box::new(AlwaysFound));
    rusqlite::Connection::open(&ctx.db_path)
        .unwrap()
        .execute_batch("DROP TABLE searches;")
        .unwrap();

    // five searches, none recorded: every one gets its card and nothing else
    for query in ["Alien", "Heat", "Ronin", "Fargo", "Drive"] {
        let replies = ctx.say(query).await;
        assert_eq!(replies.len(), 1, "{query}: {replies:?}");
        assert!(matches!(&replies[0], Reply::Text(card) if card.contains(query)));
    }
    assert!(ctx.history.top_stats(USER, 5).unwrap().is_empty());
}
