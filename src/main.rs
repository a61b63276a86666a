use color_eyre::eyre::Result;
use dotenv::dotenv;
use lessonbook_api::{ApiState, config::ApiConfig, init_tracing};
use lessonbook_db::{create_pool, schema::initialize_database};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Initialize logging
    init_tracing(config.log_level)?;
    info!("Starting LessonBook");

    // Create database connection pool
    let db_pool = create_pool(&config.database_url).await?;

    // Initialize database schema
    initialize_database(&db_pool).await?;

    // Load reference data and the saved schedule into the session
    let state = ApiState::from_database(db_pool).await?;

    // Start API server
    lessonbook_api::start_server(config, state).await?;

    Ok(())
}
