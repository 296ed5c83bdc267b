//! Request handlers for the idea endpoints.
//!
//! Every handler resolves an identifier (from the path, or via random
//! selection), formats the line, and renders it in one representation. The
//! selection strategy follows the format mode: marker-stripping mode draws
//! weighted by priority marker, template mode draws uniformly.

use anyhow::anyhow;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::Response;
use rand::Rng;

use crate::errors::AppError;
use crate::ideas::format::{format_line, FormatMode};
use crate::ideas::render::{plain_text, render_idea, Representation};
use crate::ideas::selector::{uniform_identifier, weighted_identifier};
use crate::state::AppState;

/// GET /
pub async fn handle_random_html(State(state): State<AppState>) -> Result<Response, AppError> {
    respond(&state, None, Representation::Html, &HeaderMap::new())
}

/// GET /index.json
pub async fn handle_random_json(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    respond(&state, None, Representation::Json, &headers)
}

/// GET /index.txt
pub async fn handle_random_text(State(state): State<AppState>) -> Result<Response, AppError> {
    respond(&state, None, Representation::PlainText, &HeaderMap::new())
}

/// GET /:slug — serves `/{identifier}` as HTML and `/{identifier}.json` as
/// JSON. Both share one path segment, so the `.json` suffix is dispatched
/// here instead of in the route table.
pub async fn handle_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    match slug.strip_suffix(".json") {
        Some(hash) => respond(&state, Some(hash), Representation::Json, &headers),
        None => respond(&state, Some(&slug), Representation::Html, &headers),
    }
}

/// GET /:hash/index.txt
pub async fn handle_text_by_hash(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<Response, AppError> {
    respond(&state, Some(&hash), Representation::PlainText, &HeaderMap::new())
}

/// GET /humans.txt
pub async fn handle_humans(State(state): State<AppState>) -> Response {
    plain_text(state.humans.as_ref().clone())
}

fn respond(
    state: &AppState,
    hash: Option<&str>,
    representation: Representation,
    headers: &HeaderMap,
) -> Result<Response, AppError> {
    let mut rng = rand::thread_rng();
    let idea = resolve(state, hash, &mut rng)?;
    let formatted = format_line(state.mode, &idea.raw_text, &mut rng);
    Ok(render_idea(
        representation,
        &state.page,
        &formatted,
        &idea.identifier,
        &base_url(headers),
    ))
}

/// Resolves the idea to serve: direct lookup when the path names an
/// identifier (no weighting applied), otherwise a random draw per the
/// configured format mode.
fn resolve<'a, R: Rng + ?Sized>(
    state: &'a AppState,
    hash: Option<&str>,
    rng: &mut R,
) -> Result<&'a crate::ideas::corpus::Idea, AppError> {
    let identifier = match hash {
        Some(h) => {
            return state
                .corpus
                .get(h)
                .ok_or_else(|| AppError::NotFound(format!("No idea with hash {h}")));
        }
        None => match state.mode {
            FormatMode::StripMarkers => weighted_identifier(&state.corpus, rng),
            FormatMode::Templates => uniform_identifier(&state.corpus, rng),
        },
    };
    let identifier = identifier.ok_or_else(|| AppError::Internal(anyhow!("Corpus is empty")))?;
    state
        .corpus
        .get(identifier)
        .ok_or_else(|| AppError::Internal(anyhow!("Selected identifier vanished from corpus")))
}

/// Reconstructs the external base URL for permalinks. Scheme comes from
/// x-forwarded-proto when a proxy sets it, host from the Host header.
fn base_url(headers: &HeaderMap) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let host = headers
        .get(axum::http::header::HOST)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("localhost");
    format!("{scheme}://{host}")
}
