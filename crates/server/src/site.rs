//! Server-rendered site pages.
//!
//! HTML Endpoints:
//! - `GET  /`                 landing page; modal, auth form, explainer step and
//!                            open FAQ items come from the query string
//! - `GET  /products`         the full catalog as recommendation cards
//! - `GET  /recommendations`  products recommended for a queried risk profile
//! - `POST /contact`          contact form
//! - `POST /auth`             login or signup form
//! - `POST /newsletter`       newsletter signup

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Form, Router,
};
use lumilab_core::catalog::Catalog;
use lumilab_core::content::{
    self, format_kit_price, ModeCopy, Section, Step, ABOUT, FAQ_ENTRIES, FOOTER, HERO, KIT_OFFER,
    STEPS,
};
use lumilab_core::display::{match_percentage, product_cards, risk_cards, ProductCard};
use lumilab_core::domain::risk::{RiskCategory, RiskProfile, RiskReport};
use lumilab_core::errors::{ApplicationError, DomainError};
use lumilab_core::forms::{AuthForm, ContactForm, NewsletterForm};
use lumilab_core::recommend::{Recommender, EMPTY_RECOMMENDATIONS_MESSAGE};
use lumilab_core::submissions::{
    submit_auth, submit_contact, submit_newsletter, SubmissionKind, SubmissionReceipt,
    SubmissionSink,
};
use lumilab_core::view::{AuthMode, DisplayMode, FaqState, Modal, StepNavigator};
use serde::{Deserialize, Deserializer, Serialize};
use tera::{Context, Tera};
use tracing::{info, warn};

use crate::errors::{correlation_id, public_message, report, status_code};

#[derive(Clone)]
pub struct SiteState {
    pub templates: Arc<Tera>,
    pub catalog: Arc<Catalog>,
    pub recommender: Arc<dyn Recommender>,
    pub sink: Arc<dyn SubmissionSink>,
    pub brand_name: String,
    pub mode: DisplayMode,
    pub kit_price_usd: u32,
}

type PageError = (StatusCode, Html<String>);
type PageResult = Result<Html<String>, PageError>;

#[derive(Debug, Default, Deserialize)]
pub struct LandingQuery {
    pub modal: Option<String>,
    pub auth_mode: Option<String>,
    pub step: Option<String>,
    pub faq: Option<String>,
}

/// Scores missing from the query, or left blank, fall back to the demo profile.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileQuery {
    #[serde(default, deserialize_with = "blank_as_missing")]
    pub wrinkle: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_missing")]
    pub irritation: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_missing")]
    pub hyperpigmentation: Option<f64>,
}

fn blank_as_missing<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<f64>().map(Some).map_err(|_| {
            serde::de::Error::custom(format!("score `{value}` is not a number"))
        }),
    }
}

impl ProfileQuery {
    fn resolve(&self) -> Result<RiskProfile, DomainError> {
        let demo = RiskReport::demo().profile();
        RiskProfile::validated(
            self.wrinkle.unwrap_or(demo.wrinkle),
            self.irritation.unwrap_or(demo.irritation),
            self.hyperpigmentation.unwrap_or(demo.hyperpigmentation),
        )
    }
}

#[derive(Debug, Serialize)]
struct FaqItem {
    index: usize,
    question: &'static str,
    answer: &'static str,
    open: bool,
    toggle_href: String,
}

#[derive(Debug, Serialize)]
struct AuthView {
    mode: &'static str,
    is_signup: bool,
    heading: &'static str,
    subheading: &'static str,
    submit_label: &'static str,
    switch_prompt: &'static str,
    switch_label: &'static str,
    switch_href: String,
}

impl AuthView {
    fn new(mode: AuthMode) -> Self {
        let (name, submit_label, switch_prompt, switch_label) = match mode {
            AuthMode::Login => ("login", "Sign In", "Don't have an account?", "Sign up"),
            AuthMode::Signup => ("signup", "Create Account", "Already have an account?", "Sign in"),
        };
        let switch_to = match mode.toggled() {
            AuthMode::Login => "login",
            AuthMode::Signup => "signup",
        };
        Self {
            mode: name,
            is_signup: mode == AuthMode::Signup,
            heading: mode.heading(),
            subheading: mode.subheading(),
            submit_label,
            switch_prompt,
            switch_label,
            switch_href: landing_href(
                &[("modal", "auth".to_string()), ("auth_mode", switch_to.to_string())],
                None,
            ),
        }
    }
}

#[derive(Debug, Serialize)]
struct StepDot {
    number: usize,
    href: String,
    active: bool,
}

#[derive(Debug, Serialize)]
struct StepsView {
    step: Step,
    progress_label: String,
    previous_href: Option<String>,
    next_href: Option<String>,
    dots: Vec<StepDot>,
}

impl StepsView {
    fn new(navigator: StepNavigator) -> Self {
        let step = STEPS[navigator.current()];
        let href_for = |navigator: StepNavigator| {
            landing_href(
                &[("modal", "steps".to_string()), ("step", (navigator.current() + 1).to_string())],
                None,
            )
        };
        let dots = (0..navigator.total())
            .map(|index| StepDot {
                number: index + 1,
                href: href_for(navigator.go_to(index)),
                active: index == navigator.current(),
            })
            .collect();
        Self {
            step,
            progress_label: navigator.progress_label(),
            previous_href: navigator.has_previous().then(|| href_for(navigator.previous())),
            next_href: navigator.has_next().then(|| href_for(navigator.next())),
            dots,
        }
    }
}

#[derive(Debug, Serialize)]
struct ProfileLine {
    title: &'static str,
    percentage: i64,
}

fn profile_lines(profile: &RiskProfile) -> Vec<ProfileLine> {
    RiskCategory::ALL
        .iter()
        .map(|category| ProfileLine {
            title: category.title(),
            percentage: match_percentage(profile.score(*category)),
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct RecommendationsView {
    products: Vec<ProductCard>,
    empty_message: Option<&'static str>,
}

impl RecommendationsView {
    fn new(cards: Vec<ProductCard>) -> Self {
        let empty_message = cards.is_empty().then_some(EMPTY_RECOMMENDATIONS_MESSAGE);
        Self { products: cards, empty_message }
    }
}

pub fn router(state: SiteState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/products", get(products_page))
        .route("/recommendations", get(recommendations_page))
        .route("/contact", post(contact_form))
        .route("/auth", post(auth_form))
        .route("/newsletter", post(newsletter_form))
        .with_state(state)
}

async fn landing_page(
    State(state): State<SiteState>,
    Query(query): Query<LandingQuery>,
) -> PageResult {
    let correlation_id = correlation_id();
    let report = RiskReport::demo();
    let faq = FaqState::from_query(query.faq.as_deref(), FAQ_ENTRIES.len());
    let modal = Modal::parse(query.modal.as_deref());

    let mut context = state.page_context(Some(Section::Home));
    context.insert("hero", &HERO);
    context.insert("about", &ABOUT);
    context.insert("step_one", &STEPS[0]);
    context.insert("risk_cards", &risk_cards(&report));
    context.insert("copy", &ModeCopy::for_mode(state.mode));
    context.insert("kit", &KIT_OFFER);
    context.insert("kit_price", &format_kit_price(state.kit_price_usd));
    context.insert("faq_items", &faq_items(&faq));
    context.insert("steps_href", &landing_href(&[("modal", "steps".to_string())], None));
    context.insert("auth_href", &landing_href(&[("modal", "auth".to_string())], None));
    context.insert(
        "recommendations_href",
        &landing_href(&[("modal", "recommendations".to_string())], None),
    );

    let modal_name = match modal {
        Some(Modal::Auth) => {
            context.insert("auth", &AuthView::new(AuthMode::parse(query.auth_mode.as_deref())));
            "auth"
        }
        Some(Modal::Steps) => {
            let navigator = StepNavigator::from_query(query.step.as_deref(), STEPS.len());
            context.insert("steps_view", &StepsView::new(navigator));
            "steps"
        }
        Some(Modal::Recommendations) => {
            let products = state.recommender.recommend(&report.profile());
            context.insert("recommendations", &RecommendationsView::new(product_cards(&products)));
            "recommendations"
        }
        None => "",
    };
    context.insert("modal", modal_name);

    render(&state.templates, "index.html", &context, &correlation_id)
}

async fn products_page(State(state): State<SiteState>) -> PageResult {
    let correlation_id = correlation_id();
    let mut context = state.page_context(Some(Section::Products));
    context.insert("copy", &ModeCopy::for_mode(DisplayMode::Demo));
    context.insert("products", &product_cards(state.catalog.products()));

    render(&state.templates, "products.html", &context, &correlation_id)
}

async fn recommendations_page(
    State(state): State<SiteState>,
    query: Result<Query<ProfileQuery>, QueryRejection>,
) -> PageResult {
    let correlation_id = correlation_id();
    let Query(query) = query.map_err(|rejection| {
        state.malformed_request(rejection.body_text(), "/recommendations", "/", &correlation_id)
    })?;
    let profile = match query.resolve() {
        Ok(profile) => profile,
        Err(error) => {
            let mapped = report(ApplicationError::from(error), "/recommendations", &correlation_id);
            let message = public_message(&mapped);
            return Err(state.error_page(status_code(&mapped), &message, "/", &correlation_id));
        }
    };

    let products = state.recommender.recommend(&profile);
    info!(
        event_name = "site.recommendations.rendered",
        correlation_id = %correlation_id,
        wrinkle = profile.wrinkle,
        irritation = profile.irritation,
        hyperpigmentation = profile.hyperpigmentation,
        product_count = products.len(),
        "recommendations computed"
    );

    let mut context = state.page_context(Some(Section::Products));
    context.insert("copy", &ModeCopy::for_mode(state.mode));
    context.insert("profile_lines", &profile_lines(&profile));
    context.insert("recommendations", &RecommendationsView::new(product_cards(&products)));

    render(&state.templates, "recommendations.html", &context, &correlation_id)
}

async fn contact_form(
    State(state): State<SiteState>,
    form: Result<Form<ContactForm>, FormRejection>,
) -> PageResult {
    let Form(form) = state.accept_form(form, "/contact", back_href(SubmissionKind::Contact))?;
    let outcome = submit_contact(state.sink.as_ref(), form).await;
    state.submission_page(SubmissionKind::Contact, outcome, "/contact")
}

async fn auth_form(
    State(state): State<SiteState>,
    form: Result<Form<AuthForm>, FormRejection>,
) -> PageResult {
    let Form(form) = state.accept_form(form, "/auth", "/")?;
    let kind = SubmissionKind::from(form.mode);
    let outcome = submit_auth(state.sink.as_ref(), form).await;
    state.submission_page(kind, outcome, "/auth")
}

async fn newsletter_form(
    State(state): State<SiteState>,
    form: Result<Form<NewsletterForm>, FormRejection>,
) -> PageResult {
    let Form(form) =
        state.accept_form(form, "/newsletter", back_href(SubmissionKind::Newsletter))?;
    let outcome = submit_newsletter(state.sink.as_ref(), form).await;
    state.submission_page(SubmissionKind::Newsletter, outcome, "/newsletter")
}

impl SiteState {
    fn page_context(&self, active: Option<Section>) -> Context {
        let mut context = Context::new();
        context.insert("brand_name", &self.brand_name);
        context.insert("navigation", &content::navigation());
        context.insert("active_anchor", active.map(Section::anchor).unwrap_or_default());
        context.insert("footer", &FOOTER);
        context
    }

    fn submission_page(
        &self,
        kind: SubmissionKind,
        outcome: Result<SubmissionReceipt, ApplicationError>,
        route: &'static str,
    ) -> PageResult {
        let correlation_id = correlation_id();
        let back_href = back_href(kind);

        let receipt = match outcome {
            Ok(receipt) => receipt,
            Err(error) => {
                let mapped = report(error, route, &correlation_id);
                return Err(self.error_page(
                    status_code(&mapped),
                    &public_message(&mapped),
                    back_href,
                    &correlation_id,
                ));
            }
        };

        let (title, message) = confirmation_copy(kind);
        let mut context = self.page_context(None);
        context.insert("succeeded", &true);
        context.insert("title", title);
        context.insert("message", message);
        context.insert("receipt_id", &receipt.id);
        context.insert("back_href", back_href);

        render(&self.templates, "submission.html", &context, &correlation_id)
    }

    fn accept_form<T>(
        &self,
        form: Result<Form<T>, FormRejection>,
        route: &'static str,
        back_href: &str,
    ) -> Result<Form<T>, PageError> {
        form.map_err(|rejection| {
            self.malformed_request(rejection.body_text(), route, back_href, &correlation_id())
        })
    }

    fn malformed_request(
        &self,
        detail: String,
        route: &'static str,
        back_href: &str,
        correlation_id: &str,
    ) -> PageError {
        warn!(
            event_name = "site.request.malformed",
            correlation_id = %correlation_id,
            route,
            error = %detail,
            "request rejected before validation"
        );
        let message = format!("The submitted values could not be read: {detail}");
        self.error_page(StatusCode::BAD_REQUEST, &message, back_href, correlation_id)
    }

    fn error_page(
        &self,
        status: StatusCode,
        message: &str,
        back_href: &str,
        correlation_id: &str,
    ) -> PageError {
        let mut context = self.page_context(None);
        context.insert("succeeded", &false);
        context.insert("title", "Something needs another look");
        context.insert("message", message);
        context.insert("back_href", back_href);

        match render(&self.templates, "submission.html", &context, correlation_id) {
            Ok(html) => (status, html),
            Err(failure) => failure,
        }
    }
}

fn back_href(kind: SubmissionKind) -> &'static str {
    match kind {
        SubmissionKind::Contact => "/#contact",
        SubmissionKind::Login | SubmissionKind::Signup | SubmissionKind::Newsletter => "/",
    }
}

fn confirmation_copy(kind: SubmissionKind) -> (&'static str, &'static str) {
    match kind {
        SubmissionKind::Contact => {
            ("Message sent", "Thanks for reaching out. Our team will get back to you soon.")
        }
        SubmissionKind::Login => ("Welcome back", "Your sign-in request was received."),
        SubmissionKind::Signup => (
            "Welcome to LumiLab",
            "Your sign-up request was received. Watch your inbox for next steps.",
        ),
        SubmissionKind::Newsletter => {
            ("You're subscribed", "Watch your inbox for skincare tips and product updates.")
        }
    }
}

fn faq_items(state: &FaqState) -> Vec<FaqItem> {
    FAQ_ENTRIES
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let toggled = state.toggled(index).to_query();
            let params = if toggled.is_empty() { Vec::new() } else { vec![("faq", toggled)] };
            FaqItem {
                index,
                question: entry.question,
                answer: entry.answer,
                open: state.is_open(index),
                toggle_href: landing_href(&params, Some(Section::Faq.anchor())),
            }
        })
        .collect()
}

/// Link back to `/` carrying display state. Values are plain tokens, digits
/// and commas, so no percent-encoding is needed.
fn landing_href(params: &[(&str, String)], anchor: Option<&str>) -> String {
    let mut href = String::from("/");
    for (position, (key, value)) in params.iter().enumerate() {
        href.push(if position == 0 { '?' } else { '&' });
        href.push_str(key);
        href.push('=');
        href.push_str(value);
    }
    if let Some(anchor) = anchor {
        href.push('#');
        href.push_str(anchor);
    }
    href
}

fn render(templates: &Tera, name: &str, context: &Context, correlation_id: &str) -> PageResult {
    templates.render(name, context).map(Html).map_err(|error| {
        let mapped = report(
            ApplicationError::Rendering(format!("template `{name}`: {error}")),
            "render",
            correlation_id,
        );
        (
            status_code(&mapped),
            Html(format!("<h1>Something went wrong</h1><p>{}</p>", mapped.user_message())),
        )
    })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use lumilab_core::submissions::SubmissionKind;
    use lumilab_core::view::{AuthMode, DisplayMode, StepNavigator};

    use super::{faq_items, landing_href, AuthView, FaqState, ProfileQuery, StepsView};
    use crate::test_support::{application, get, post_form, send};

    #[test]
    fn landing_href_joins_params_and_anchor() {
        assert_eq!(landing_href(&[], None), "/");
        assert_eq!(landing_href(&[], Some("faq")), "/#faq");
        assert_eq!(
            landing_href(&[("modal", "steps".to_string()), ("step", "2".to_string())], None),
            "/?modal=steps&step=2"
        );
    }

    #[test]
    fn faq_links_toggle_each_item() {
        let items = faq_items(&FaqState::from_query(Some("1"), 6));
        assert_eq!(items[0].toggle_href, "/?faq=0,1#faq");
        assert!(items[1].open);
        assert_eq!(items[1].toggle_href, "/#faq");
    }

    #[test]
    fn steps_view_links_neighbours_only_inside_bounds() {
        let first = StepsView::new(StepNavigator::from_query(Some("1"), 4));
        assert_eq!(first.previous_href, None);
        assert_eq!(first.next_href.as_deref(), Some("/?modal=steps&step=2"));
        assert_eq!(first.dots.len(), 4);

        let last = StepsView::new(StepNavigator::from_query(Some("4"), 4));
        assert_eq!(last.next_href, None);
        assert_eq!(last.progress_label, "4 of 4");
    }

    #[test]
    fn auth_view_links_to_the_other_mode() {
        let view = AuthView::new(AuthMode::Login);
        assert_eq!(view.switch_href, "/?modal=auth&auth_mode=signup");
        assert!(!view.is_signup);
    }

    #[test]
    fn profile_query_fills_gaps_from_demo_profile_and_rejects_non_finite() {
        let partial = ProfileQuery { wrinkle: Some(0.1), ..ProfileQuery::default() };
        let profile = partial.resolve().expect("finite profile");
        assert_eq!(profile.wrinkle, 0.1);
        assert_eq!(profile.irritation, 0.82);

        let broken = ProfileQuery { irritation: Some(f64::NAN), ..ProfileQuery::default() };
        assert!(broken.resolve().is_err());
    }

    #[tokio::test]
    async fn blank_query_scores_use_the_demo_profile() {
        let (app, _) = application(DisplayMode::Demo);
        let (status, body) =
            send(app.router(), get("/recommendations?wrinkle=&irritation=0.1")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("data-product=\"ponds-dry-skin-cream\""));
        assert!(!body.contains("data-product=\"estee-lauder-re-nutriv\""));
        assert!(body.contains("data-product=\"clinique-turnaround\""));
    }

    #[tokio::test]
    async fn unreadable_query_renders_the_error_page() {
        let (app, _) = application(DisplayMode::Demo);
        let (status, body) = send(app.router(), get("/recommendations?wrinkle=lots")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Something needs another look"));
        assert!(body.contains("could not be read"));
    }

    #[tokio::test]
    async fn unknown_auth_mode_renders_the_error_page_before_the_sink() {
        let (app, sink) = application(DisplayMode::Demo);
        let (status, body) = send(
            app.router(),
            post_form("/auth", "mode=Admin&email=mai%40example.com&password=a"),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Something needs another look"));
        assert!(sink.recorded().is_empty());
    }

    #[tokio::test]
    async fn landing_page_renders_every_section_in_demo_mode() {
        let (app, _) = application(DisplayMode::Demo);
        let (status, body) = send(app.router(), get("/")).await;

        assert_eq!(status, StatusCode::OK);
        for anchor in ["home", "about", "how-it-works", "risk-profile", "shop", "faq", "contact"] {
            assert!(body.contains(&format!("id=\"{anchor}\"")), "missing section {anchor}");
        }
        assert!(body.contains("href=\"/products\""));
        assert!(body.contains("Demo data"));
        assert!(body.contains("56%"));
        assert!(body.contains("82%"));
        assert!(body.contains("24%"));
        assert!(body.contains("$199"));
        assert!(!body.contains("data-modal"));
    }

    #[tokio::test]
    async fn personal_mode_drops_demo_badges() {
        let (app, _) = application(DisplayMode::Personal);
        let (status, body) = send(app.router(), get("/")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(!body.contains("Demo data"));
        assert!(body.contains("Last updated"));
        assert!(!body.contains("See Recommended Products"));
    }

    #[tokio::test]
    async fn steps_modal_follows_the_step_query() {
        let (app, _) = application(DisplayMode::Demo);
        let (status, body) = send(app.router(), get("/?modal=steps&step=2")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("data-modal=\"steps\""));
        assert!(body.contains("2 of 4"));
        assert!(body.contains("/?modal=steps&step=1"));
        assert!(body.contains("/?modal=steps&step=3"));
    }

    #[tokio::test]
    async fn auth_modal_renders_login_without_confirmation() {
        let (app, _) = application(DisplayMode::Demo);
        let (_, login) = send(app.router(), get("/?modal=auth&auth_mode=login")).await;
        assert!(login.contains("Welcome back"));
        assert!(login.contains("value=\"login\""));
        assert!(!login.contains("confirmPassword"));

        let (_, signup) = send(app.router(), get("/?modal=auth")).await;
        assert!(signup.contains("Join LumiLab"));
        assert!(signup.contains("confirmPassword"));
    }

    #[tokio::test]
    async fn recommendations_modal_lists_demo_matches_in_rule_order() {
        let (app, _) = application(DisplayMode::Demo);
        let (_, body) = send(app.router(), get("/?modal=recommendations")).await;

        let positions: Vec<usize> =
            ["ponds-dry-skin-cream", "estee-lauder-re-nutriv", "clinique-turnaround"]
                .iter()
                .map(|id| body.find(&format!("data-product=\"{id}\"")).expect("product card"))
                .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn open_faq_items_show_their_answers() {
        let (app, _) = application(DisplayMode::Demo);
        let (_, closed) = send(app.router(), get("/")).await;
        let (_, open) = send(app.router(), get("/?faq=0")).await;

        assert!(!closed.contains("<dd>"));
        assert!(open.contains("<dd>"));
        assert!(open.contains("advanced microbiome analysis"));
    }

    #[tokio::test]
    async fn products_page_lists_the_whole_catalog() {
        let (app, _) = application(DisplayMode::Personal);
        let (status, body) = send(app.router(), get("/products")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Demo recommendations"));
        assert_eq!(body.matches("class=\"product-card\"").count(), 3);
        assert!(body.contains("96%"));
        assert!(body.contains(">$$$<"));
    }

    #[tokio::test]
    async fn recommendations_page_shows_fallback_at_thresholds() {
        let (app, _) = application(DisplayMode::Demo);
        let (status, body) = send(
            app.router(),
            get("/recommendations?wrinkle=0.5&irritation=0.7&hyperpigmentation=0.2"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No specific recommendations at this time."));
        assert!(!body.contains("class=\"product-card\""));
    }

    #[tokio::test]
    async fn recommendations_page_rejects_non_finite_scores() {
        let (app, _) = application(DisplayMode::Demo);
        let (status, body) = send(app.router(), get("/recommendations?wrinkle=NaN")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("wrinkle"));
    }

    #[tokio::test]
    async fn contact_form_post_reaches_the_sink() {
        let (app, sink) = application(DisplayMode::Demo);
        let (status, body) = send(
            app.router(),
            post_form("/contact", "name=Mai&email=mai%40example.com&phone=&message=Hello"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Message sent"));
        assert_eq!(sink.recorded(), vec![(SubmissionKind::Contact, "mai@example.com".to_string())]);
    }

    #[tokio::test]
    async fn mismatched_signup_is_rejected_before_the_sink() {
        let (app, sink) = application(DisplayMode::Demo);
        let (status, body) = send(
            app.router(),
            post_form(
                "/auth",
                "mode=signup&name=Mai&email=mai%40example.com&password=a&confirmPassword=b",
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("password confirmation does not match"));
        assert!(sink.recorded().is_empty());
    }
}
