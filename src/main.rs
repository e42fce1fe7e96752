use axum::Router;
use spendwatch::config::Config;
use spendwatch::db::{create_pool, migrations};
use spendwatch::handlers;
use spendwatch::state::AppState;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spendwatch=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!("Starting Spendwatch on {}", config.address());

    let db = create_pool(&config.database_path).expect("Failed to create database pool");

    {
        let mut conn = db.get().expect("Failed to get database connection");
        migrations::run_migrations(&mut conn, &config.migrations_path)
            .expect("Failed to run migrations");
    }

    let state = AppState::new(db, config.clone());

    let app = Router::new()
        .merge(handlers::routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = TcpListener::bind(config.address())
        .await
        .expect("Failed to bind address");

    tracing::info!("Listening on http://{}", config.address());

    axum::serve(listener, app).await.expect("Server error");
}
