//! Page template parsing and rendering
//!
//! Placeholders use `${var:name}` (required) or `${var:name:default}`.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use thiserror::Error;

static VARIABLE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{var:([a-zA-Z0-9][-a-zA-Z0-9]*)(?::([^}]*))?\}").unwrap()
});

/// Template processing errors
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TemplateError {
    #[error("Missing required variable: {name}")]
    MissingVariable { name: String },
}

/// A placeholder found in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVariable {
    pub name: String,
    pub default: Option<String>,
}

impl TemplateVariable {
    pub fn is_required(&self) -> bool {
        self.default.is_none()
    }
}

/// A parsed page template
#[derive(Debug, Clone)]
pub struct PageTemplate {
    content: String,
    variables: Vec<TemplateVariable>,
}

impl PageTemplate {
    pub fn parse(content: impl Into<String>) -> Self {
        let content = content.into();
        let mut variables = Vec::new();
        let mut seen = HashSet::new();

        for cap in VARIABLE_PATTERN.captures_iter(&content) {
            let name = cap[1].to_string();

            if !seen.insert(name.clone()) {
                continue;
            }

            variables.push(TemplateVariable {
                name,
                default: cap.get(2).map(|m| m.as_str().to_string()),
            });
        }

        Self { content, variables }
    }

    /// Render in a single pass, so substituted values are never re-expanded
    pub fn render(&self, values: &HashMap<&str, String>) -> Result<String, TemplateError> {
        if let Some(missing) = self
            .variables
            .iter()
            .find(|v| v.is_required() && !values.contains_key(v.name.as_str()))
        {
            return Err(TemplateError::MissingVariable {
                name: missing.name.clone(),
            });
        }

        let rendered = VARIABLE_PATTERN.replace_all(&self.content, |cap: &Captures| {
            values
                .get(&cap[1])
                .cloned()
                .or_else(|| cap.get(2).map(|m| m.as_str().to_string()))
                .unwrap_or_default()
        });

        Ok(rendered.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variables() {
        let template = PageTemplate::parse("<h1>${var:title:Cars}</h1>${var:options}${var:title}");

        assert_eq!(template.variables.len(), 2);
        assert_eq!(
            template.variables[0],
            TemplateVariable {
                name: "title".to_string(),
                default: Some("Cars".to_string()),
            }
        );
        assert!(template.variables[1].is_required());
    }

    #[test]
    fn test_render_with_defaults() {
        let template = PageTemplate::parse("<title>${var:title:Cars}</title>");

        let result = template.render(&HashMap::new()).unwrap();
        assert_eq!(result, "<title>Cars</title>");
    }

    #[test]
    fn test_render_overrides_default() {
        let template = PageTemplate::parse("<title>${var:title:Cars}</title>");
        let values = HashMap::from([("title", "Prices".to_string())]);

        assert_eq!(template.render(&values).unwrap(), "<title>Prices</title>");
    }

    #[test]
    fn test_render_missing_required() {
        let template = PageTemplate::parse("<form action=\"${var:predict-url}\">");

        assert_eq!(
            template.render(&HashMap::new()),
            Err(TemplateError::MissingVariable {
                name: "predict-url".to_string()
            })
        );
    }

    #[test]
    fn test_substituted_values_not_expanded() {
        let template = PageTemplate::parse("${var:a}|${var:b:x}");
        let values = HashMap::from([("a", "${var:b}".to_string())]);

        assert_eq!(template.render(&values).unwrap(), "${var:b}|x");
    }
}
