//! HTML page rendering for the form UI

mod index;
mod template;

pub use index::{escape_html, IndexPage, IndexPageContext};
pub use template::{PageTemplate, TemplateError};
