//! Site template loading.
//!
//! Templates are read from the configured directory when it exists. Any
//! template the directory does not provide falls back to the copy compiled
//! into the binary, so a bare deployment still renders every page.

use std::path::Path;
use std::sync::Arc;

use tera::Tera;
use tracing::{info, warn};

const EMBEDDED: [(&str, &str); 6] = [
    ("base.html", include_str!("../../../templates/site/base.html")),
    (
        "partials/product_card.html",
        include_str!("../../../templates/site/partials/product_card.html"),
    ),
    ("index.html", include_str!("../../../templates/site/index.html")),
    ("products.html", include_str!("../../../templates/site/products.html")),
    ("recommendations.html", include_str!("../../../templates/site/recommendations.html")),
    ("submission.html", include_str!("../../../templates/site/submission.html")),
];

/// Page templates every route expects to find.
pub const REQUIRED: [&str; 4] =
    ["index.html", "products.html", "recommendations.html", "submission.html"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateSource {
    Filesystem,
    Embedded,
}

impl TemplateSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Filesystem => "filesystem",
            Self::Embedded => "embedded",
        }
    }
}

pub struct LoadedTemplates {
    pub tera: Arc<Tera>,
    pub source: TemplateSource,
}

pub fn load(dir: &Path) -> Result<LoadedTemplates, tera::Error> {
    let (mut tera, source) = if dir.is_dir() {
        let glob = format!("{}/**/*.html", dir.display());
        (Tera::new(&glob)?, TemplateSource::Filesystem)
    } else {
        warn!(
            event_name = "system.templates.directory_missing",
            correlation_id = "bootstrap",
            templates_dir = %dir.display(),
            "site templates directory not found, using embedded templates"
        );
        (Tera::default(), TemplateSource::Embedded)
    };

    let missing: Vec<(&str, &str)> = {
        let loaded: Vec<&str> = tera.get_template_names().collect();
        EMBEDDED.iter().copied().filter(|(name, _)| !loaded.contains(name)).collect()
    };
    if !missing.is_empty() {
        tera.add_raw_templates(missing)?;
    }

    info!(
        event_name = "system.templates.loaded",
        correlation_id = "bootstrap",
        source = source.as_str(),
        template_count = tera.get_template_names().count(),
        "site templates loaded"
    );

    Ok(LoadedTemplates { tera: Arc::new(tera), source })
}

/// Names from [`REQUIRED`] that `tera` cannot render.
pub fn missing_required(tera: &Tera) -> Vec<&'static str> {
    let loaded: Vec<&str> = tera.get_template_names().collect();
    REQUIRED.iter().copied().filter(|name| !loaded.contains(name)).collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{load, missing_required, TemplateSource};

    #[test]
    fn missing_directory_falls_back_to_embedded_templates() {
        let dir = TempDir::new().expect("temp dir");
        let loaded = load(&dir.path().join("absent")).expect("embedded templates parse");

        assert_eq!(loaded.source, TemplateSource::Embedded);
        assert!(missing_required(&loaded.tera).is_empty());
    }

    #[test]
    fn filesystem_templates_override_embedded_ones() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("products.html"), "custom products page").expect("write");

        let loaded = load(dir.path()).expect("templates load");
        let rendered = loaded
            .tera
            .render("products.html", &tera::Context::new())
            .expect("override renders");

        assert_eq!(loaded.source, TemplateSource::Filesystem);
        assert_eq!(rendered, "custom products page");
        assert!(missing_required(&loaded.tera).is_empty());
    }

    #[test]
    fn broken_filesystem_template_is_an_error() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("index.html"), "{% if %}").expect("write");

        assert!(load(dir.path()).is_err());
    }
}
