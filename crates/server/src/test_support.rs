use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use lumilab_core::config::AppConfig;
use lumilab_core::errors::ApplicationError;
use lumilab_core::forms::{AuthRequest, ContactSubmission};
use lumilab_core::recommend::ThresholdRecommender;
use lumilab_core::submissions::{SubmissionKind, SubmissionReceipt, SubmissionSink};
use lumilab_core::view::DisplayMode;
use tower::ServiceExt;

use crate::bootstrap::Application;
use crate::templates;

/// Sink that remembers what reached it so tests can assert on dispatch.
#[derive(Default)]
pub struct RecordingSink {
    pub submissions: Mutex<Vec<(SubmissionKind, String)>>,
}

impl RecordingSink {
    fn record(
        &self,
        kind: SubmissionKind,
        email: &str,
    ) -> Result<SubmissionReceipt, ApplicationError> {
        self.submissions
            .lock()
            .map_err(|_| ApplicationError::Integration("recording sink poisoned".to_string()))?
            .push((kind, email.to_string()));
        Ok(SubmissionReceipt::issue(kind))
    }

    pub fn recorded(&self) -> Vec<(SubmissionKind, String)> {
        self.submissions.lock().expect("recording sink lock").clone()
    }
}

#[async_trait]
impl SubmissionSink for RecordingSink {
    async fn contact(
        &self,
        submission: ContactSubmission,
    ) -> Result<SubmissionReceipt, ApplicationError> {
        self.record(SubmissionKind::Contact, &submission.email)
    }

    async fn auth(&self, request: AuthRequest) -> Result<SubmissionReceipt, ApplicationError> {
        self.record(request.mode.into(), &request.email)
    }

    async fn newsletter(&self, email: String) -> Result<SubmissionReceipt, ApplicationError> {
        self.record(SubmissionKind::Newsletter, &email)
    }
}

/// Application wired with embedded templates and a recording sink.
pub fn application(mode: DisplayMode) -> (Application, Arc<RecordingSink>) {
    let mut config = AppConfig::default();
    config.site.mode = mode;
    config.site.templates_dir = PathBuf::from("no/such/templates");

    let loaded = templates::load(Path::new("no/such/templates")).expect("embedded templates");
    let recommender = ThresholdRecommender::default();
    let sink = Arc::new(RecordingSink::default());
    let app = Application {
        config,
        templates: loaded.tera,
        template_source: loaded.source,
        catalog: Arc::new(recommender.catalog().clone()),
        recommender: Arc::new(recommender),
        sink: sink.clone(),
    };
    (app, sink)
}

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body bytes");
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request")
}
