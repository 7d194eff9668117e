mod classifier;
mod content;
mod directive;
mod log;
mod render;
mod store;

pub use classifier::{Classifier, ReferenceMarkers, Rule, RuleClassifier};
pub use content::Content;
pub use directive::Directive;
pub use store::{CodeStore, Config, DEFAULT_INDENTATION, DEFAULT_SEPARATOR_WIDTH};

/// Errors reported by the code store.
#[derive(Debug, thiserror::Error)]
pub enum CodeStoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("The code store contains no lines")]
    EmptyState,
    #[error("Invalid indentation rule: {0}")]
    InvalidRule(String),
}

pub type Result<T> = std::result::Result<T, CodeStoreError>;
