use std::sync::Arc;

use axum::Router;
use lumilab_core::catalog::Catalog;
use lumilab_core::config::{AppConfig, ConfigError, LoadOptions};
use lumilab_core::recommend::{Recommender, ThresholdRecommender};
use lumilab_core::submissions::SubmissionSink;
use tera::Tera;
use thiserror::Error;
use tower_http::services::ServeDir;
use tracing::info;

use crate::templates::{self, TemplateSource};
use crate::{api, health, sink::LoggingSink, site};

pub struct Application {
    pub config: AppConfig,
    pub templates: Arc<Tera>,
    pub template_source: TemplateSource,
    pub catalog: Arc<Catalog>,
    pub recommender: Arc<dyn Recommender>,
    pub sink: Arc<dyn SubmissionSink>,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("site templates failed to load: {0}")]
    Templates(#[source] tera::Error),
}

pub fn bootstrap(options: LoadOptions) -> Result<Application, BootstrapError> {
    let config = AppConfig::load(options)?;
    bootstrap_with_config(config)
}

pub fn bootstrap_with_config(config: AppConfig) -> Result<Application, BootstrapError> {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        display_mode = if config.site.mode.is_demo() { "demo" } else { "personal" },
        "starting application bootstrap"
    );

    let loaded = templates::load(&config.site.templates_dir).map_err(BootstrapError::Templates)?;

    let recommender = ThresholdRecommender::default();
    let catalog = Arc::new(recommender.catalog().clone());
    info!(
        event_name = "system.bootstrap.catalog_ready",
        correlation_id = "bootstrap",
        product_count = catalog.len(),
        rule_count = recommender.rules().len(),
        "product catalog and recommendation rules ready"
    );

    Ok(Application {
        config,
        templates: loaded.tera,
        template_source: loaded.source,
        catalog,
        recommender: Arc::new(recommender),
        sink: Arc::new(LoggingSink),
    })
}

impl Application {
    /// Site pages, JSON API, health and static assets on one router.
    pub fn router(&self) -> Router {
        let site = site::router(site::SiteState {
            templates: self.templates.clone(),
            catalog: self.catalog.clone(),
            recommender: self.recommender.clone(),
            sink: self.sink.clone(),
            brand_name: self.config.site.brand_name.clone(),
            mode: self.config.site.mode,
            kit_price_usd: self.config.site.kit_price_usd,
        });
        let api = api::router(api::ApiState {
            catalog: self.catalog.clone(),
            recommender: self.recommender.clone(),
            sink: self.sink.clone(),
        });
        let health = health::router(health::HealthState {
            templates: self.templates.clone(),
            template_source: self.template_source,
            catalog: self.catalog.clone(),
        });

        site.merge(api)
            .merge(health)
            .nest_service("/assets", ServeDir::new(&self.config.site.assets_dir))
    }
}
