use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::Utc;
use lumilab_core::catalog::Catalog;
use serde::Serialize;
use tera::Tera;

use crate::templates::{self, TemplateSource};

#[derive(Clone)]
pub struct HealthState {
    pub templates: Arc<Tera>,
    pub template_source: TemplateSource,
    pub catalog: Arc<Catalog>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub templates: HealthCheck,
    pub catalog: HealthCheck,
    pub checked_at: String,
}

pub fn router(state: HealthState) -> Router {
    Router::new().route("/health", get(health)).with_state(state)
}

pub async fn health(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let templates = template_check(&state.templates, state.template_source);
    let catalog = catalog_check(&state.catalog);
    let ready = templates.status == "ready" && catalog.status == "ready";

    let payload = HealthResponse {
        status: if ready { "ready" } else { "degraded" },
        service: HealthCheck {
            status: "ready",
            detail: "lumilab-server runtime initialized".to_string(),
        },
        templates,
        catalog,
        checked_at: Utc::now().to_rfc3339(),
    };

    let status_code = if ready { StatusCode::OK } else { StatusCode::SERVICE_UNAVAILABLE };
    (status_code, Json(payload))
}

fn template_check(tera: &Tera, source: TemplateSource) -> HealthCheck {
    let missing = templates::missing_required(tera);
    if missing.is_empty() {
        HealthCheck {
            status: "ready",
            detail: format!(
                "{} templates loaded ({})",
                tera.get_template_names().count(),
                source.as_str()
            ),
        }
    } else {
        HealthCheck {
            status: "degraded",
            detail: format!("missing templates: {}", missing.join(", ")),
        }
    }
}

fn catalog_check(catalog: &Catalog) -> HealthCheck {
    if catalog.is_empty() {
        HealthCheck { status: "degraded", detail: "catalog has no products".to_string() }
    } else {
        HealthCheck { status: "ready", detail: format!("{} products available", catalog.len()) }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Arc;

    use axum::{extract::State, http::StatusCode, Json};
    use lumilab_core::catalog::Catalog;
    use tera::Tera;

    use crate::health::{health, HealthState};
    use crate::templates::{self, TemplateSource};

    #[tokio::test]
    async fn health_returns_ready_with_templates_and_catalog() {
        let loaded = templates::load(Path::new("does/not/exist")).expect("embedded templates");
        let state = HealthState {
            templates: loaded.tera,
            template_source: loaded.source,
            catalog: Arc::new(Catalog::builtin().clone()),
        };

        let (status, Json(payload)) = health(State(state)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ready");
        assert_eq!(payload.catalog.detail, "3 products available");
        assert!(payload.templates.detail.contains("embedded"));
    }

    #[tokio::test]
    async fn health_is_degraded_when_templates_or_catalog_are_missing() {
        let state = HealthState {
            templates: Arc::new(Tera::default()),
            template_source: TemplateSource::Filesystem,
            catalog: Arc::new(Catalog::default()),
        };

        let (status, Json(payload)) = health(State(state)).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload.status, "degraded");
        assert_eq!(payload.templates.status, "degraded");
        assert!(payload.templates.detail.contains("index.html"));
        assert_eq!(payload.catalog.status, "degraded");
        assert_eq!(payload.service.status, "ready");
    }
}
