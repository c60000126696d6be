//! HTTP server for the template-response generators.
//!
//! Exposes:
//! - `POST /api/ai-chat`
//! - `POST /api/ai-recipe`
//! - `POST /api/ai-workout`
//! - `GET /health`
//!
//! Request bodies are decoded by hand so every failure, including a missing
//! or wrong content type, answers with the same 500 body.

mod handlers;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use crate::error::{FitError, FitResult, SystemError};

pub const CHAT_PATH: &str = "/api/ai-chat";
pub const RECIPE_PATH: &str = "/api/ai-recipe";
pub const WORKOUT_PATH: &str = "/api/ai-workout";
pub const HEALTH_PATH: &str = "/health";

/// Shared state for the generator handlers.
#[derive(Clone)]
pub struct GeneratorState {
    rng: Arc<Mutex<StdRng>>,
}

impl GeneratorState {
    /// Seeded state for reproducible picks; entropy when `seed` is `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng: Arc::new(Mutex::new(rng)),
        }
    }

    /// Run `f` with exclusive access to the RNG.
    pub(crate) fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // Poisoning leaves the RNG in a valid state.
        let mut guard = match self.rng.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }
}

/// Build the generator router.
pub fn router(state: GeneratorState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(CHAT_PATH, post(handlers::chat_handler))
        .route(RECIPE_PATH, post(handlers::recipe_handler))
        .route(WORKOUT_PATH, post(handlers::workout_handler))
        .route(HEALTH_PATH, get(handlers::health_handler))
        .layer(cors)
        .with_state(state)
}

async fn bind(addr: SocketAddr) -> FitResult<tokio::net::TcpListener> {
    tokio::net::TcpListener::bind(addr).await.map_err(|source| {
        FitError::from(SystemError::Bind {
            addr: addr.to_string(),
            source,
        })
    })
}

/// Start the generator server on a specific address.
///
/// Binding to port 0 picks a free port; the actual address is returned
/// alongside the server task.
pub async fn start_server_on(
    addr: SocketAddr,
    seed: Option<u64>,
) -> FitResult<(JoinHandle<()>, SocketAddr)> {
    let listener = bind(addr).await?;
    let actual_addr = listener.local_addr()?;
    let app = router(GeneratorState::new(seed));

    tracing::info!("Generator server listening on http://{}", actual_addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("Generator server error: {}", e);
        }
    });

    Ok((handle, actual_addr))
}

/// Resolve once `signal` fires.
///
/// If the signal handler could not be installed the error is logged and the
/// future never resolves, so the server keeps running.
pub async fn shutdown_on<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::warn!("Could not listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

/// Serve in the foreground until `shutdown` resolves.
pub async fn serve_until<F>(addr: SocketAddr, seed: Option<u64>, shutdown: F) -> FitResult<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = bind(addr).await?;
    let actual_addr = listener.local_addr()?;
    tracing::info!("Generator server listening on http://{}", actual_addr);

    axum::serve(listener, router(GeneratorState::new(seed)))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Generator server stopped");
    Ok(())
}
