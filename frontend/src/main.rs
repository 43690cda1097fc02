use std::sync::Arc;

use anyhow::Context;
use billed_frontend::domain::BillsContainer;
use billed_frontend::services::api::ApiStore;
use billed_frontend::services::logging::init_logging;
use billed_frontend::services::navigation::Router;
use billed_frontend::storage::{FileSession, SessionStore};
use billed_frontend::ui::BillsPage;
use billed_frontend::AppConfig;
use shared::RoutePath;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    init_logging(&config.log_level);
    info!(api = %config.api_base_url, "starting billed client");

    let file_session = FileSession::open(&config.session_file)
        .with_context(|| format!("failed to open session file {}", config.session_file.display()))?;
    match file_session.current_user() {
        Ok(user) => info!(
            path = %file_session.path().display(),
            email = %user.email,
            user_type = %user.user_type,
            "session loaded"
        ),
        Err(e) => info!(path = %file_session.path().display(), error = %e, "no logged-in user in session"),
    }
    let session: Arc<dyn SessionStore> = Arc::new(file_session);

    let store = Arc::new(ApiStore::new(&config, session.clone())?);
    let router = Arc::new(Router::new(RoutePath::Bills));
    let container = BillsContainer::new(router).with_store(store);

    let result = container.get_bills().await;
    if let Err(e) = &result {
        error!(error = %e, "could not load bills");
    }

    let page = BillsPage::from_result(result);
    println!("{}", page.render_text());

    Ok(())
}
