use std::{env, sync::Arc};

use anyhow::Result;
use axum::Router;
use log::info;
use simplem3u::{AppState, AppStateRef, load_config_from_env, routes};
use tokio::net::TcpListener;

fn build_app(app_state: &AppStateRef) -> Router {
    Router::new().merge(routes::get_routes(app_state))
}

async fn app_entry() -> Result<()> {
    let config = load_config_from_env(
        env::var("SIMPLEM3U_CONFIG_PATH").unwrap_or_else(|_| "config.yml".into()),
    )?;
    let app_state = Arc::new(AppState::new(config)?);

    let tcp_listener = TcpListener::bind(&app_state.config.listen_addr).await?;
    info!(
        "SimpleM3U running on http://{}",
        tcp_listener.local_addr()?
    );
    axum::serve(tcp_listener, build_app(&app_state)).await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();
    if let Err(e) = app_entry().await {
        panic!("Fatal error: {}", e);
    }
}
