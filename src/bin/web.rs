//! Single binary web server: JSON API over the match engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use dart_match_scorer::{
    record_score, split_turn_total, start_match, turn_totals, undo_last_score, MatchConfig,
    MatchId, MatchState, ScoreOutcome, TurnTotal, UndoOutcome,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Per-match entry: match state + last activity time (for auto-cleanup).
struct MatchEntry {
    state: MatchState,
    last_activity: Instant,
}

/// In-memory state: many matches by ID. Entries are removed after long inactivity.
type AppState = Data<RwLock<HashMap<MatchId, MatchEntry>>>;

/// Inactivity threshold: matches not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct ScoreBody {
    value: i32,
}

#[derive(Deserialize)]
struct TurnBody {
    total: i32,
}

/// Response for a single score submission: what happened plus the resulting state.
#[derive(Serialize)]
struct ScoreResponse {
    outcome: ScoreOutcome,
    #[serde(rename = "match")]
    state: MatchState,
}

/// Response for a batch ("all darts") submission: one outcome per split dart.
#[derive(Serialize)]
struct TurnResponse {
    outcomes: Vec<ScoreOutcome>,
    #[serde(rename = "match")]
    state: MatchState,
}

#[derive(Serialize)]
struct UndoResponse {
    outcome: UndoOutcome,
    #[serde(rename = "match")]
    state: MatchState,
}

#[derive(Serialize)]
struct SummaryResponse {
    turns: Vec<TurnTotal>,
}

/// Path segment: match id (e.g. /api/matches/{id})
#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No match" }))
}

fn lock_error() -> HttpResponse {
    HttpResponse::InternalServerError().body("lock error")
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "dart-match-scorer",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Start a new match (returns it with id; client stores id for subsequent requests).
#[post("/api/matches")]
async fn api_create_match(state: AppState, body: Option<Json<MatchConfig>>) -> HttpResponse {
    let config = body.map(|b| b.into_inner()).unwrap_or_default();
    let new_match = match start_match(config) {
        Ok(m) => m,
        Err(e) => {
            return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
        }
    };
    let id = new_match.id;
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let response = HttpResponse::Ok().json(&new_match);
    g.insert(
        id,
        MatchEntry {
            state: new_match,
            last_activity: Instant::now(),
        },
    );
    response
}

/// Get a match by id (404 if not found). Touching it refreshes last_activity.
#[get("/api/matches/{id}")]
async fn api_get_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.state)
        }
        None => not_found(),
    }
}

/// Turn-by-turn totals for the current leg (read-only projection).
#[get("/api/matches/{id}/turns")]
async fn api_turn_summary(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(SummaryResponse {
                turns: turn_totals(&entry.state),
            })
        }
        None => not_found(),
    }
}

/// Submit one dart value. Rejections (bust, invalid finish, out of range, match over)
/// are normal play events: still HTTP 200, with the outcome saying what happened.
#[post("/api/matches/{id}/score")]
async fn api_score(state: AppState, path: Path<MatchPath>, body: Json<ScoreBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    let (next, outcome) = record_score(&entry.state, body.value);
    entry.state = next;
    HttpResponse::Ok().json(ScoreResponse {
        outcome,
        state: entry.state.clone(),
    })
}

/// Submit a whole turn total (batch mode). The total is split as evenly as possible
/// across the darts remaining in the current turn and applied dart by dart.
#[post("/api/matches/{id}/turn")]
async fn api_score_turn(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<TurnBody>,
) -> HttpResponse {
    if !(0..=180).contains(&body.total) {
        return HttpResponse::BadRequest()
            .json(serde_json::json!({ "error": "Turn total must be between 0 and 180" }));
    }
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    let parts = split_turn_total(body.total as u16, entry.state.current_dart);
    let mut outcomes = Vec::with_capacity(parts.len());
    for part in parts {
        let (next, outcome) = record_score(&entry.state, i32::from(part));
        entry.state = next;
        outcomes.push(outcome);
    }
    HttpResponse::Ok().json(TurnResponse {
        outcomes,
        state: entry.state.clone(),
    })
}

/// Reverse the most recent accepted dart.
#[post("/api/matches/{id}/undo")]
async fn api_undo(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return not_found(),
    };
    entry.last_activity = Instant::now();
    let (next, outcome) = undo_last_score(&entry.state);
    entry.state = next;
    HttpResponse::Ok().json(UndoResponse {
        outcome,
        state: entry.state.clone(),
    })
}

/// Reset: discard the match entirely. The id is no longer valid afterwards.
#[delete("/api/matches/{id}")]
async fn api_reset_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return lock_error(),
    };
    match g.remove(&path.id) {
        Some(_) => HttpResponse::Ok().json(serde_json::json!({ "ok": true })),
        None => not_found(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<MatchId, MatchEntry>::new()));

    // Background task: every 30 minutes, remove matches inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive match(es) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(favicon)
            .service(api_create_match)
            .service(api_get_match)
            .service(api_turn_summary)
            .service(api_score)
            .service(api_score_turn)
            .service(api_undo)
            .service(api_reset_match)
    })
    .bind(bind)?
    .run()
    .await
}
