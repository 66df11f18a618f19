//! Single binary web server: JSON API over the tournament ledger.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), SWISS_DB
//! (SQLite database path, default swiss.db).

use actix_web::{
    delete, get, post,
    web::{Data, Json},
    App, HttpResponse, HttpServer, Responder,
};
use serde::Deserialize;
use std::sync::Mutex;
use swiss_tournament_web::{PlayerId, SqliteLedger, Tournament, TournamentError};

/// Shared state: one tournament over the SQLite ledger. The underlying
/// connection is Send but not Sync, so access is serialized with a Mutex.
type AppState = Data<Mutex<Tournament>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct RegisterPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct ReportMatchBody {
    winner: PlayerId,
    loser: PlayerId,
}

#[derive(serde::Serialize)]
struct CountResponse {
    players: u64,
}

#[derive(serde::Serialize)]
struct ImportResponse {
    imported: usize,
}

/// Map a tournament error to a response: storage failures are 500, every
/// validation error is 400.
fn error_response(e: &TournamentError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        TournamentError::Storage(_) => HttpResponse::InternalServerError().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament-web",
    })
}

/// Register a single player (name need not be unique).
#[post("/api/players")]
async fn api_register_player(state: AppState, body: Json<RegisterPlayerBody>) -> HttpResponse {
    let mut t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match t.register_player(&body.name) {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => error_response(&e),
    }
}

/// Bulk roster import: CSV body without headers, player name in the first
/// column. Blank names are skipped; the first invalid record aborts.
#[post("/api/players/import")]
async fn api_import_roster(state: AppState, body: String) -> HttpResponse {
    let mut t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());

    let mut imported = 0usize;
    for record in reader.records() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                return HttpResponse::BadRequest()
                    .json(serde_json::json!({ "error": format!("Bad CSV record: {}", e) }))
            }
        };
        let name = match record.get(0) {
            Some(n) if !n.is_empty() => n,
            _ => continue,
        };
        match t.register_player(name) {
            Ok(_) => imported += 1,
            Err(e) => return error_response(&e),
        }
    }
    log::info!("Imported {} player(s) from CSV roster", imported);
    HttpResponse::Ok().json(ImportResponse { imported })
}

/// Number of registered players.
#[get("/api/players/count")]
async fn api_count_players(state: AppState) -> HttpResponse {
    let t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match t.count_players() {
        Ok(players) => HttpResponse::Ok().json(CountResponse { players }),
        Err(e) => error_response(&e),
    }
}

/// Record the outcome of one match.
#[post("/api/matches")]
async fn api_report_match(state: AppState, body: Json<ReportMatchBody>) -> HttpResponse {
    let mut t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match t.report_match(body.winner, body.loser) {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => error_response(&e),
    }
}

/// Current standings, best record first.
#[get("/api/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    let t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match t.standings() {
        Ok(standings) => HttpResponse::Ok().json(standings),
        Err(e) => error_response(&e),
    }
}

/// Draw the next round's pairings from the current standings.
#[get("/api/pairings")]
async fn api_pairings(state: AppState) -> HttpResponse {
    let t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match t.swiss_pairings() {
        Ok(round) => HttpResponse::Ok().json(round),
        Err(e) => error_response(&e),
    }
}

/// Remove all recorded matches.
#[delete("/api/matches")]
async fn api_clear_matches(state: AppState) -> HttpResponse {
    let mut t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match t.clear_matches() {
        Ok(()) => {
            log::info!("Cleared all match records");
            HttpResponse::Ok().json(serde_json::json!({ "cleared": "matches" }))
        }
        Err(e) => error_response(&e),
    }
}

/// Remove all players (matches must be cleared first).
#[delete("/api/players")]
async fn api_clear_players(state: AppState) -> HttpResponse {
    let mut t = match state.lock() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match t.clear_players() {
        Ok(()) => {
            log::info!("Cleared all player records");
            HttpResponse::Ok().json(serde_json::json!({ "cleared": "players" }))
        }
        Err(e) => error_response(&e),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_db_path() -> String {
    "swiss.db".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let db_path = std::env::var("SWISS_DB").unwrap_or_else(|_| default_db_path());

    let ledger = SqliteLedger::open(&db_path)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;
    let state = Data::new(Mutex::new(Tournament::new(Box::new(ledger))));

    let bind = (host.as_str(), port);
    log::info!(
        "Starting server at http://{}:{} (ledger: {})",
        bind.0,
        bind.1,
        db_path
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_register_player)
            .service(api_import_roster)
            .service(api_count_players)
            .service(api_report_match)
            .service(api_standings)
            .service(api_pairings)
            .service(api_clear_matches)
            .service(api_clear_players)
    })
    .bind(bind)?
    .run()
    .await
}
