//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use shop_types::ShopRepository;

use super::handlers::{self, AppState, categories, payments, products, transaction_items,
    transactions, users};
use crate::openapi::ApiDoc;

/// HTTP Server for the shop API.
pub struct HttpServer<R: ShopRepository> {
    state: Arc<AppState<R>>,
}

impl<R: ShopRepository> HttpServer<R> {
    /// Creates a new HTTP server around the given repository adapter.
    pub fn new(repo: R) -> Self {
        Self {
            state: Arc::new(AppState::new(Arc::new(repo))),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route(
                "/api/users",
                post(users::create_user::<R>).get(users::list_users::<R>),
            )
            .route(
                "/api/users/{id}",
                get(users::get_user::<R>)
                    .put(users::update_user::<R>)
                    .delete(users::delete_user::<R>),
            )
            .route(
                "/api/payments",
                post(payments::fill_balance::<R>).get(payments::list_payments::<R>),
            )
            .route(
                "/api/payments/user/{user_id}",
                get(payments::payment_history::<R>),
            )
            .route(
                "/api/payments/{id}",
                get(payments::get_payment::<R>).delete(payments::delete_payment::<R>),
            )
            .route(
                "/api/categories",
                post(categories::create_category::<R>).get(categories::list_categories::<R>),
            )
            .route(
                "/api/categories/{id}",
                get(categories::get_category::<R>)
                    .put(categories::update_category::<R>)
                    .delete(categories::delete_category::<R>),
            )
            .route(
                "/api/products",
                post(products::create_product::<R>).get(products::list_products::<R>),
            )
            .route(
                "/api/products/{id}",
                get(products::get_product::<R>)
                    .put(products::update_product::<R>)
                    .delete(products::delete_product::<R>),
            )
            .route(
                "/api/transactions",
                post(transactions::create_transaction::<R>)
                    .get(transactions::list_transactions::<R>),
            )
            .route(
                "/api/transactions/user/{user_id}/products",
                get(transactions::user_purchases::<R>),
            )
            .route(
                "/api/transactions/{id}",
                get(transactions::get_transaction::<R>)
                    .delete(transactions::delete_transaction::<R>),
            )
            .route(
                "/api/transactions/{id}/products",
                get(transactions::transaction_purchases::<R>),
            )
            .route(
                "/api/transaction-items",
                get(transaction_items::list_transaction_items::<R>),
            )
            .route(
                "/api/transaction-items/{id}",
                get(transaction_items::get_transaction_item::<R>)
                    .delete(transaction_items::delete_transaction_item::<R>),
            )
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
