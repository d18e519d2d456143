pub mod auth;
pub mod error;
pub mod handlers;
pub mod models;
pub mod notifications;
pub mod openapi;
pub mod registry;
pub mod settings;
pub mod validation;

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    Router,
    routing::{delete, get, post},
};
use handlers::{
    check_in_member, check_out_member, enroll_in_class, get_member, healthz_live, healthz_ready,
    list_classes, register_member, root, withdraw_from_class,
};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::notifications::{LogChannel, NotificationChannel, NotificationDispatcher};
use crate::openapi::ApiDoc;
use crate::registry::Registry;
use crate::settings::Settings;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub registry: Arc<Mutex<Registry>>,
    pub notifier: Arc<NotificationDispatcher>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self::with_channel(settings, Arc::new(LogChannel))
    }

    pub fn with_channel(settings: Settings, channel: Arc<dyn NotificationChannel>) -> Self {
        let registry = seed_registry(&settings);
        Self {
            settings,
            registry: Arc::new(Mutex::new(registry)),
            notifier: Arc::new(NotificationDispatcher::new(channel)),
        }
    }
}

/// The fixed class catalogue, created once at startup with the configured
/// default capacity.
fn seed_registry(settings: &Settings) -> Registry {
    let mut registry = Registry::new();
    registry.add_class(
        "Yoga",
        "Alice Johnson",
        "10:00 AM",
        settings.default_class_capacity,
    );
    registry.add_class(
        "Spinning",
        "John Doe",
        "12:00 PM",
        settings.default_class_capacity,
    );
    registry
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let state = AppState::new(settings);
    let app = build_router(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], state.settings.port));
    info!(
        "Starting {} Check-In API on {addr}",
        state.settings.gym_title
    );
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    let mut router = Router::new()
        .route("/", get(root))
        .route("/healthz/live", get(healthz_live))
        .route("/healthz/ready", get(healthz_ready))
        .route("/members", post(register_member))
        .route("/members/{member_id}", get(get_member))
        .route("/members/{member_id}/check-in", post(check_in_member))
        .route("/members/{member_id}/check-out", post(check_out_member))
        .route("/classes", get(list_classes))
        .route("/classes/{class_name}/enrollments", post(enroll_in_class))
        .route(
            "/classes/{class_name}/enrollments/{member_id}",
            delete(withdraw_from_class),
        )
        .with_state(state.clone());

    if state.settings.enable_swagger {
        let openapi = ApiDoc::openapi();
        let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
        router = router.merge(swagger);
    }

    router.layer(trace_layer)
}
