use dioxus::prelude::*;

use ui::AuthProvider;
use views::{AppLayout, Auth, Home};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/auth")]
        Auth {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        init_tracing();

        let result = tokio::runtime::Runtime::new()
            .map_err(LaunchError::from)
            .and_then(|runtime| runtime.block_on(launch_server()));
        if let Err(e) = result {
            tracing::error!("Server failed: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
#[derive(Debug, thiserror::Error)]
enum LaunchError {
    #[error(transparent)]
    Config(#[from] api::config::ConfigError),
    #[error(transparent)]
    Database(#[from] api::db::DbError),
    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
    #[error("session store: {0}")]
    SessionStore(#[from] sqlx::Error),
    #[error("session ttl of {0} days is out of range")]
    SessionTtl(u64),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// `RUST_LOG` wins; otherwise info for the app and warnings from sqlx.
#[cfg(feature = "server")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Session inactivity expiry from a day count.
#[cfg(feature = "server")]
fn session_ttl(days: u64) -> Result<tower_sessions::cookie::time::Duration, LaunchError> {
    std::time::Duration::from_secs(days.saturating_mul(60 * 60 * 24))
        .try_into()
        .map_err(|_| LaunchError::SessionTtl(days))
}

#[cfg(feature = "server")]
async fn launch_server() -> Result<(), LaunchError> {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, SessionManagerLayer};
    use tower_sessions_sqlx_store::PostgresStore;

    let config = api::config::server_config()?;

    let pool = api::db::get_pool().await?;
    sqlx::migrate!("../api/migrations").run(pool).await?;

    let session_store = PostgresStore::new(pool.clone());
    session_store.migrate().await?;

    let ttl = session_ttl(config.session_ttl_days)?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(config.session_secure)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(ttl));

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}
