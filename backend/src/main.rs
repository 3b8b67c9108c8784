use std::env;
use std::sync::Arc;

use aq_core::{estimate_aqi_from_text, Dashboard, READING_SEED};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Router};
use serde::Deserialize;
use tower_http::services::ServeDir;

mod page;

// Lets deployments move the dashboard off the default development port.
const BIND_ADDR_ENV: &str = "DASHBOARD_ADDR";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
// Prerendered chart images live here; the app only knows their filenames.
const STATIC_DIR: &str = "static";

#[derive(Clone)]
struct ServerState {
    dashboard: Arc<Dashboard>,
}

#[derive(Debug, Deserialize)]
struct AqiForm {
    temperature: String,
    humidity: String,
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(show_dashboard).post(estimate))
        .nest_service("/static", ServeDir::new(STATIC_DIR))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let state = ServerState {
        dashboard: Arc::new(Dashboard::generate(READING_SEED)),
    };

    let addr = env::var(BIND_ADDR_ENV).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("bind dashboard address");
    println!("Dashboard listening on http://{addr}");
    axum::serve(listener, router(state))
        .await
        .expect("server failed");
}

async fn show_dashboard(State(state): State<ServerState>) -> Html<String> {
    Html(page::render(state.dashboard.readings(), None))
}

async fn estimate(State(state): State<ServerState>, Form(input): Form<AqiForm>) -> Response {
    match estimate_aqi_from_text(&input.temperature, &input.humidity) {
        Ok(aqi) => Html(page::render(state.dashboard.readings(), Some(aqi))).into_response(),
        Err(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()).into_response(),
    }
}
