//! Model artifact loading

mod loader;

pub use loader::{parse_artifacts, FileArtifactLoader};
