pub mod catalog;
pub mod config;
pub mod content;
pub mod display;
pub mod domain;
pub mod errors;
pub mod forms;
pub mod recommend;
pub mod submissions;
pub mod view;

pub use catalog::Catalog;
pub use display::{match_percentage, price_tier_symbol, ProductCard, RiskCard};
pub use domain::product::{PriceTier, ProductId, ProductRecord};
pub use domain::risk::{RiskCategory, RiskProfile, RiskReport};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use forms::{AuthForm, ContactForm, FormError, NewsletterForm};
pub use recommend::{recommend, Recommender, ThresholdRecommender};
pub use submissions::{
    submit_auth, submit_contact, submit_newsletter, SubmissionKind, SubmissionReceipt,
    SubmissionSink,
};
pub use view::{AuthMode, DisplayMode, FaqState, Modal, StepNavigator};
