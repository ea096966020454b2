//! Index page listing the known brands

use std::collections::HashMap;
use std::path::Path;

use crate::domain::DomainError;

use super::template::{PageTemplate, TemplateError};

const DEFAULT_TEMPLATE: &str = include_str!("../../../templates/index.html");

/// Pre-rendered form page. Rendering happens once, since brands and
/// settings are fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct IndexPage {
    html: String,
}

/// Values rendered into the page
#[derive(Debug, Clone)]
pub struct IndexPageContext<'a> {
    pub title: &'a str,
    pub predict_url: &'a str,
    pub brands: &'a [String],
}

impl IndexPage {
    /// Render the built-in template
    pub fn render_default(context: &IndexPageContext<'_>) -> Result<Self, DomainError> {
        Self::render(&PageTemplate::parse(DEFAULT_TEMPLATE), context)
    }

    /// Render a template read from disk
    pub async fn render_file(
        path: &Path,
        context: &IndexPageContext<'_>,
    ) -> Result<Self, DomainError> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            DomainError::configuration(format!(
                "Failed to read page template '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::render(&PageTemplate::parse(content), context)
    }

    fn render(template: &PageTemplate, context: &IndexPageContext<'_>) -> Result<Self, DomainError> {
        let values = HashMap::from([
            ("title", escape_html(context.title)),
            ("predict-url", escape_html(context.predict_url)),
            ("brand-options", brand_options(context.brands)),
        ]);

        let html = template
            .render(&values)
            .map_err(|e: TemplateError| DomainError::configuration(e.to_string()))?;

        Ok(Self { html })
    }

    pub fn html(&self) -> &str {
        &self.html
    }
}

fn brand_options(brands: &[String]) -> String {
    brands
        .iter()
        .map(|brand| {
            let escaped = escape_html(brand);
            format!("<option value=\"{}\">{}</option>", escaped, escaped)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escape text for HTML element content and quoted attributes
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brands() -> Vec<String> {
        vec!["Honda".to_string(), "Land <Rover>".to_string()]
    }

    #[test]
    fn test_default_page_lists_brands() {
        let brands = brands();
        let page = IndexPage::render_default(&IndexPageContext {
            title: "Car Price Predictor",
            predict_url: "/predict",
            brands: &brands,
        })
        .unwrap();

        assert!(page.html().contains("<option value=\"Honda\">Honda</option>"));
        assert!(page.html().contains("Land &lt;Rover&gt;"));
        assert!(page.html().contains("/predict"));
        assert!(page.html().contains("Car Price Predictor"));
        assert!(!page.html().contains("${var:"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a & \"b\" <c>"), "a &amp; &quot;b&quot; &lt;c&gt;");
        assert_eq!(escape_html("O'Brien"), "O&#39;Brien");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[tokio::test]
    async fn test_render_missing_template_file() {
        let brands = brands();
        let result = IndexPage::render_file(
            Path::new("does/not/exist.html"),
            &IndexPageContext {
                title: "t",
                predict_url: "/predict",
                brands: &brands,
            },
        )
        .await;

        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }

    #[test]
    fn test_custom_template_requires_known_variables() {
        let template = PageTemplate::parse("${var:brand-options}${var:footer}");
        let brands = brands();

        let result = IndexPage::render(
            &template,
            &IndexPageContext {
                title: "t",
                predict_url: "/predict",
                brands: &brands,
            },
        );

        assert!(matches!(result, Err(DomainError::Configuration { .. })));
    }
}
