#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::{Router, routing::get};
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use pdf_remediation_server::{
        app::App,
        auth::{self, AppState, OidcClient},
        config::ServerConfig,
    };
    use sqlx::postgres::PgPoolOptions;
    use std::sync::Arc;
    use tower_http::{services::ServeDir, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env().expect("failed to load configuration");
    tracing::info!(
        issuer = config.oidc.issuer_url(),
        session_minutes = config.session.duration_minutes,
        "Loaded configuration"
    );

    let db_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("failed to run migrations");

    purge_expired_sessions(&db_pool, "startup").await;

    let cleanup_pool = db_pool.clone();
    let cleanup_interval_secs = config.session.cleanup_interval_seconds;
    tokio::spawn(async move {
        let mut interval =
            tokio::time::interval(std::time::Duration::from_secs(cleanup_interval_secs));
        // The first tick completes immediately and startup already purged.
        interval.tick().await;
        loop {
            interval.tick().await;
            purge_expired_sessions(&cleanup_pool, "periodic").await;
        }
    });

    tracing::info!("Discovering OIDC provider...");
    let oidc_client = OidcClient::discover(config.oidc)
        .await
        .expect("failed to discover OIDC provider");

    let app_state = Arc::new(AppState::new(db_pool, oidc_client, config.session));

    let conf = get_configuration(None).expect("failed to get leptos configuration");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(App);

    let combined_state = CombinedState {
        leptos_options: leptos_options.clone(),
        app_state: app_state.clone(),
    };

    let db_pool_for_context = app_state.db_pool.clone();

    let app = Router::new()
        .route("/auth/login", get(auth::login))
        .route("/auth/callback", get(auth::callback))
        .route("/auth/logout", get(auth::logout))
        .leptos_routes(&combined_state, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler::<CombinedState, _>(
            shell,
        ))
        .nest_service("/pkg", ServeDir::new("target/site/pkg"))
        // Server functions read the pool from request extensions.
        .layer(axum::Extension(db_pool_for_context))
        .layer(TraceLayer::new_for_http())
        .with_state(combined_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}

/// Deletes expired sessions, logging the outcome.
#[cfg(feature = "ssr")]
async fn purge_expired_sessions(pool: &sqlx::PgPool, trigger: &'static str) {
    use pdf_remediation_server::auth::db::SessionRepository;

    match SessionRepository::new(pool.clone()).delete_expired().await {
        Ok(0) => {}
        Ok(count) => {
            tracing::info!(deleted_sessions = count, trigger, "Cleaned up expired sessions");
        }
        Err(e) => {
            tracing::warn!(error = %e, trigger, "Failed to clean up expired sessions");
        }
    }
}

#[cfg(feature = "ssr")]
#[derive(Clone)]
struct CombinedState {
    leptos_options: leptos::prelude::LeptosOptions,
    app_state: std::sync::Arc<pdf_remediation_server::auth::AppState>,
}

#[cfg(feature = "ssr")]
impl axum::extract::FromRef<CombinedState> for leptos::prelude::LeptosOptions {
    fn from_ref(state: &CombinedState) -> Self {
        state.leptos_options.clone()
    }
}

#[cfg(feature = "ssr")]
impl axum::extract::FromRef<CombinedState>
    for std::sync::Arc<pdf_remediation_server::auth::AppState>
{
    fn from_ref(state: &CombinedState) -> Self {
        state.app_state.clone()
    }
}

#[cfg(feature = "ssr")]
fn shell(options: leptos::prelude::LeptosOptions) -> impl leptos::prelude::IntoView {
    use leptos::prelude::*;
    use leptos_meta::*;
    use pdf_remediation_server::app::App;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="stylesheet" href="/pkg/pdf-remediation.css"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // The WASM build hydrates through lib.rs.
}
