//! JSON API.
//!
//! - `POST /api/v1/recommendations`  risk profile in, recommended product cards out
//! - `GET  /api/v1/catalog`          every catalog product as a card
//! - `POST /api/v1/contact`          contact form submission
//! - `POST /api/v1/auth`             login or signup submission
//! - `POST /api/v1/newsletter`       newsletter signup

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use lumilab_core::catalog::Catalog;
use lumilab_core::display::{product_cards, ProductCard};
use lumilab_core::domain::risk::RiskProfile;
use lumilab_core::errors::ApplicationError;
use lumilab_core::forms::{AuthForm, ContactForm, NewsletterForm};
use lumilab_core::recommend::{Recommender, EMPTY_RECOMMENDATIONS_MESSAGE};
use lumilab_core::submissions::{
    submit_auth, submit_contact, submit_newsletter, SubmissionKind, SubmissionReceipt,
    SubmissionSink,
};
use serde::Serialize;
use tracing::info;

use crate::errors::{api_failure, correlation_id, malformed_body, ApiFailure};

#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<Catalog>,
    pub recommender: Arc<dyn Recommender>,
    pub sink: Arc<dyn SubmissionSink>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub products: Vec<ProductCard>,
    pub empty_message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub products: Vec<ProductCard>,
}

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub status: &'static str,
    pub receipt_id: String,
    pub kind: SubmissionKind,
    pub received_at: DateTime<Utc>,
}

impl From<SubmissionReceipt> for SubmissionResponse {
    fn from(receipt: SubmissionReceipt) -> Self {
        Self {
            status: "received",
            receipt_id: receipt.id,
            kind: receipt.kind,
            received_at: receipt.received_at,
        }
    }
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/api/v1/recommendations", post(recommendations))
        .route("/api/v1/catalog", get(catalog))
        .route("/api/v1/contact", post(contact))
        .route("/api/v1/auth", post(auth))
        .route("/api/v1/newsletter", post(newsletter))
        .with_state(state)
}

async fn recommendations(
    State(state): State<ApiState>,
    payload: Result<Json<RiskProfile>, JsonRejection>,
) -> Result<Json<RecommendationsResponse>, ApiFailure> {
    let route = "/api/v1/recommendations";
    let correlation_id = correlation_id();
    let Json(profile) =
        payload.map_err(|rejection| malformed_body(&rejection, route, &correlation_id))?;
    let profile = profile
        .ensure_finite()
        .map_err(|error| api_failure(ApplicationError::from(error), route, &correlation_id))?;

    let products = state.recommender.recommend(&profile);
    info!(
        event_name = "site.api.recommendations",
        correlation_id = %correlation_id,
        wrinkle = profile.wrinkle,
        irritation = profile.irritation,
        hyperpigmentation = profile.hyperpigmentation,
        product_count = products.len(),
        "recommendations computed"
    );

    let empty_message = products.is_empty().then(|| EMPTY_RECOMMENDATIONS_MESSAGE.to_string());
    Ok(Json(RecommendationsResponse { products: product_cards(&products), empty_message }))
}

async fn catalog(State(state): State<ApiState>) -> Json<CatalogResponse> {
    Json(CatalogResponse { products: product_cards(state.catalog.products()) })
}

async fn contact(
    State(state): State<ApiState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, ApiFailure> {
    let route = "/api/v1/contact";
    let correlation_id = correlation_id();
    let Json(form) =
        payload.map_err(|rejection| malformed_body(&rejection, route, &correlation_id))?;
    submit_contact(state.sink.as_ref(), form)
        .await
        .map(|receipt| Json(receipt.into()))
        .map_err(|error| api_failure(error, route, &correlation_id))
}

async fn auth(
    State(state): State<ApiState>,
    payload: Result<Json<AuthForm>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, ApiFailure> {
    let route = "/api/v1/auth";
    let correlation_id = correlation_id();
    let Json(form) =
        payload.map_err(|rejection| malformed_body(&rejection, route, &correlation_id))?;
    submit_auth(state.sink.as_ref(), form)
        .await
        .map(|receipt| Json(receipt.into()))
        .map_err(|error| api_failure(error, route, &correlation_id))
}

async fn newsletter(
    State(state): State<ApiState>,
    payload: Result<Json<NewsletterForm>, JsonRejection>,
) -> Result<Json<SubmissionResponse>, ApiFailure> {
    let route = "/api/v1/newsletter";
    let correlation_id = correlation_id();
    let Json(form) =
        payload.map_err(|rejection| malformed_body(&rejection, route, &correlation_id))?;
    submit_newsletter(state.sink.as_ref(), form)
        .await
        .map(|receipt| Json(receipt.into()))
        .map_err(|error| api_failure(error, route, &correlation_id))
}
