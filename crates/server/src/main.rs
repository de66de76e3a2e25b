use database::{db::create_connection, session_store::SeaOrmSessionStore};
use log::info;
use server::{
    config::Config,
    router::build_router,
    state::AppState,
    utils::{session_cleanup::delete_expired_sessions, shutdown::shutdown_signal},
};
use std::{error::Error, time::Duration};

const SESSION_CLEANUP_PERIOD: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = Config::from_env()?;
    let bind_address = config.bind_address;

    let db = create_connection(&config.database_url).await?;
    let store = SeaOrmSessionStore::new(db.clone());
    tokio::task::spawn(delete_expired_sessions(store.clone(), SESSION_CLEANUP_PERIOD));

    let app = build_router(AppState::new(db, config)?, store);

    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!("Running axum on http://{bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
