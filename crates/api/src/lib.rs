//! # LessonBook API
//!
//! The HTTP shell around the college timetable. It exposes the reference lists
//! used to fill in a lesson form, the "add schedule" action that runs the booking
//! check, and the "save" action that writes staged lessons to storage.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate requests into calls on the booking session
//! - **Middleware**: Error mapping shared by every handler
//! - **Config**: Environment-driven server settings
//!
//! One [`BookingSession`] is shared by all requests behind a mutex, so each
//! admission check and the staging that follows it run as a single step.
//! Reference data never changes after startup and is read without the lock.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error handling shared by the handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use eyre::Result;
use lessonbook_core::{
    models::reference::ReferenceData,
    repository::{DynScheduleRepository, ScheduleRepository},
    session::BookingSession,
};
use lessonbook_db::{
    DbPool, repositories::reference::load_reference_data, store::PgScheduleRepository,
};
use tokio::{net::TcpListener, sync::Mutex};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// The editing session every request works against
    pub session: Mutex<BookingSession<DynScheduleRepository>>,
    /// The same catalog the session checks against, readable without the lock
    pub references: Arc<ReferenceData>,
}

impl ApiState {
    pub fn new(repository: impl ScheduleRepository + 'static, references: ReferenceData) -> Self {
        let repository: DynScheduleRepository = Box::new(repository);
        let references = Arc::new(references);
        Self {
            session: Mutex::new(BookingSession::new(repository, Arc::clone(&references))),
            references,
        }
    }

    /// Loads reference data and the saved schedule from PostgreSQL.
    pub async fn from_database(pool: DbPool) -> Result<Self> {
        let references = load_reference_data(&pool).await?;
        let repository = PgScheduleRepository::open(pool).await?;
        Ok(Self::new(repository, references))
    }
}

/// Installs the global `tracing` subscriber.
pub fn init_tracing(level: Level) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Builds the router with every route attached to `state`.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Dropdown data for the lesson form
        .merge(routes::reference::routes())
        // Add schedule and save
        .merge(routes::lesson::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and state
pub async fn start_server(config: config::ApiConfig, state: ApiState) -> Result<()> {
    let app = app(Arc::new(state));

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(origins)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
