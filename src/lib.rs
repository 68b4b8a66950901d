//! # newsdesk: a news and discussion board REST API
//!
//! `newsdesk` exposes read/write access to a relational dataset of topics,
//! articles, comments, and users over predictable REST routes. The server
//! validates input, queries PostgreSQL, and returns JSON with conventional
//! HTTP status codes.
//!
//! ## Architecture
//!
//! The application is built on [Axum](https://github.com/tokio-rs/axum) for
//! the HTTP layer and uses PostgreSQL (via SQLx) for persistence.
//!
//! The **API layer** ([`api`]) contains one handler module per resource plus
//! the request/response models. Handlers orchestrate repository calls —
//! including the "parent article must exist before its comments are read or
//! written" sequencing — and shape entity-keyed JSON envelopes.
//!
//! The **database layer** ([`db`]) uses the repository pattern: each entity
//! has a repository translating domain operations into parameterized queries.
//! Store-level failures are classified by stable error codes in
//! [`db::errors::DbError`] and mapped to HTTP responses by
//! [`errors::Error`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use clap::Parser;
//! use newsdesk::{Application, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let args = newsdesk::config::Args::parse();
//!     let config = Config::load(&args)?;
//!
//!     let app = Application::new(config).await?;
//!     app.serve(async {
//!         tokio::signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
//!     })
//!     .await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod errors;
mod types;

#[cfg(test)]
mod test_utils;

use axum::{
    Router,
    routing::{delete, get},
};
pub use config::Config;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, info, instrument};
pub use types::{ArticleId, CommentId};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
}

/// Get the newsdesk database migrator
pub fn migrator() -> sqlx::migrate::Migrator {
    sqlx::migrate!("./migrations")
}

/// Build the application router with all endpoints and middleware.
#[instrument(skip_all)]
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/", get(api::handlers::meta::get_api))
        .route("/topics", get(api::handlers::topics::list_topics))
        .route("/users", get(api::handlers::users::list_users))
        .route("/articles", get(api::handlers::articles::list_articles))
        .route(
            "/articles/{article_id}",
            get(api::handlers::articles::get_article)
                .patch(api::handlers::articles::patch_article_votes),
        )
        .route(
            "/articles/{article_id}/comments",
            get(api::handlers::comments::list_article_comments)
                .post(api::handlers::comments::create_comment),
        )
        .route("/comments/{comment_id}", delete(api::handlers::comments::delete_comment));

    Router::new()
        .nest("/api", api_routes)
        .fallback(api::handlers::meta::path_not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

/// Main application struct that owns all resources and lifecycle.
///
/// [`Application::new`] connects the pool and runs migrations;
/// [`Application::serve`] binds a TCP listener and handles requests until the
/// shutdown future resolves, then drains the pool.
pub struct Application {
    router: Router,
    config: Config,
    pool: PgPool,
}

impl Application {
    /// Create a new application instance with all resources initialized
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let pool = PgPool::connect(&config.database_url).await?;
        migrator().run(&pool).await?;

        let state = AppState {
            db: pool.clone(),
            config: config.clone(),
        };
        let router = build_router(state);

        Ok(Self { router, config, pool })
    }

    /// Start serving the application
    pub async fn serve<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let bind_addr = self.config.bind_address();
        let listener = TcpListener::bind(&bind_addr).await?;
        info!("newsdesk listening on http://{}", bind_addr);

        axum::serve(listener, self.router).with_graceful_shutdown(shutdown).await?;

        info!("Closing database connections...");
        self.pool.close().await;

        Ok(())
    }
}
