use axum::{
    body::Body,
    extract::{Request, State},
    http::{Method, Uri},
    response::Response,
};
use tracing::debug;

use crate::classify::{classify, Classification};
use crate::error::SpaServerError;
use crate::AppState;

/// Serve a request from the document root with SPA fallback routing.
///
/// GET requests are classified first: asset paths pass through untouched,
/// anything else is rewritten to the application shell. Other methods skip
/// classification and get ServeDir's native method handling. The actual
/// file read, status code, and content type are ServeDir's job.
pub async fn serve(
    State(state): State<AppState>,
    mut req: Request,
) -> Result<Response, SpaServerError> {
    if req.method() == Method::GET {
        let path = req.uri().path().to_owned();
        if let Classification::Fallback(shell) = classify(&state.config, &path) {
            debug!("Rewriting {} to {}", path, shell);
            *req.uri_mut() = Uri::from_static(shell);
        }
    }

    let mut serve_dir = state.serve_dir.clone();
    let response = serve_dir.try_call(req).await?;
    Ok(response.map(Body::new))
}
