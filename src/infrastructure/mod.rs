//! Infrastructure layer - Artifact loading, logging, metrics and page rendering

pub mod artifact;
pub mod logging;
pub mod observability;
pub mod page;
