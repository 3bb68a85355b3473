//! Page display state: which modal is open, the auth form mode, the active
//! step in the how-it-works explainer and the expanded FAQ items.
//!
//! State travels in the request, so every value here parses leniently from
//! query strings and falls back to its default on anything unrecognized.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    #[default]
    Demo,
    Personal,
}

impl DisplayMode {
    pub fn is_demo(self) -> bool {
        matches!(self, Self::Demo)
    }
}

impl std::str::FromStr for DisplayMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "demo" => Ok(Self::Demo),
            "personal" => Ok(Self::Personal),
            other => Err(ConfigError::Validation(format!(
                "unsupported display mode `{other}` (expected demo|personal)"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Modal {
    Auth,
    Steps,
    Recommendations,
}

impl Modal {
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
            Some("auth") => Some(Self::Auth),
            Some("steps") => Some(Self::Steps),
            Some("recommendations") => Some(Self::Recommendations),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    Login,
    #[default]
    Signup,
}

impl AuthMode {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().to_ascii_lowercase()).as_deref() {
            Some("login") => Self::Login,
            _ => Self::Signup,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            Self::Login => "Welcome back",
            Self::Signup => "Join LumiLab",
        }
    }

    pub fn subheading(self) -> &'static str {
        match self {
            Self::Login => "Sign in to access your personalized skin profile",
            Self::Signup => "Create your account to get started with personalized skincare",
        }
    }
}

/// Position in the how-it-works explainer. Zero-based internally, one-based
/// on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StepNavigator {
    current: usize,
    total: usize,
}

impl StepNavigator {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total: total.max(1) }
    }

    /// Builds a navigator from a one-based `step` query value, clamped to the
    /// available steps.
    pub fn from_query(raw: Option<&str>, total: usize) -> Self {
        let navigator = Self::new(total);
        let requested = raw.and_then(|value| value.trim().parse::<usize>().ok()).unwrap_or(1);
        navigator.go_to(requested.saturating_sub(1))
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn go_to(self, index: usize) -> Self {
        Self { current: index.min(self.total - 1), ..self }
    }

    pub fn next(self) -> Self {
        self.go_to(self.current + 1)
    }

    pub fn previous(self) -> Self {
        self.go_to(self.current.saturating_sub(1))
    }

    pub fn has_previous(&self) -> bool {
        self.current > 0
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.total
    }

    /// Label such as `2 of 4`.
    pub fn progress_label(&self) -> String {
        format!("{} of {}", self.current + 1, self.total)
    }
}

/// Set of expanded FAQ item indices.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FaqState {
    open: BTreeSet<usize>,
}

impl FaqState {
    /// Parses a comma-separated index list, ignoring entries that are not
    /// indices below `total`.
    pub fn from_query(raw: Option<&str>, total: usize) -> Self {
        let open = raw
            .unwrap_or_default()
            .split(',')
            .filter_map(|part| part.trim().parse::<usize>().ok())
            .filter(|index| *index < total)
            .collect();
        Self { open }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    pub fn toggled(&self, index: usize) -> Self {
        let mut open = self.open.clone();
        if !open.remove(&index) {
            open.insert(index);
        }
        Self { open }
    }

    pub fn to_query(&self) -> String {
        self.open.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
    }
}
