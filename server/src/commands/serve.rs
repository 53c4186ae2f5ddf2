use tracing::info;

use crate::{http_server, AppState, Result};

pub(crate) async fn serve() -> Result<()> {
    let app_state = AppState::from_env()?;

    info!("Starting http server");
    http_server::run_axum(app_state).await
}
