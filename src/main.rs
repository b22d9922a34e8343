use std::sync::Arc;

use color_eyre::eyre::{eyre, Result};
use member_registry::{
    app_state::AppState,
    get_postgres_pool,
    services::{data_stores::PostgresMemberStore, MemberService},
    utils::{
        constants::{APP_ADDRESS, DATABASE_URL},
        tracing::init_tracing,
    },
    Application,
};
use sqlx::PgPool;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let pg_pool = configure_postgresql().await?;
    let member_store = Arc::new(PostgresMemberStore::new(pg_pool));
    let member_service = Arc::new(MemberService::new(member_store));
    let app_state = AppState::new(member_service);

    let app = Application::build(app_state, &APP_ADDRESS)
        .await
        .map_err(|e| eyre!("Failed to build app: {e}"))?;

    app.run().await?;
    Ok(())
}

async fn configure_postgresql() -> Result<PgPool> {
    let pg_pool = get_postgres_pool(&DATABASE_URL).await?;

    sqlx::migrate!().run(&pg_pool).await?;
    tracing::info!("Database migrations applied");

    Ok(pg_pool)
}
