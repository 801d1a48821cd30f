//! Model registry — validated per-model endpoint and feature
//! configuration, loaded once from a YAML document.
//!
//! # Usage
//! ```no_run
//! use lingua_core::config::ModelRegistry;
//!
//! let registry = ModelRegistry::load("models.yaml")?;
//! let endpoint = registry.resolve("deepseek", Some("deep_think"))?;
//! println!("{:?} -> {}", endpoint.base_url, endpoint.model);
//! # Ok::<(), lingua_core::config::RegistryError>(())
//! ```

mod registry;
mod schema;

pub use registry::ModelRegistry;
pub use schema::{
    Dependence, Endpoint, FeatureConfig, ModelConfig, RegistryConfig, REQUIRED_FEATURES,
};

use thiserror::Error;

/// Errors from registry construction and resolution.
///
/// Construction errors carry the document path of the offending entry;
/// resolution errors name the model and feature involved.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read registry file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse registry document: {0}")]
    Yaml(#[from] serde_saphyr::Error),

    #[error("{path}: {message}")]
    Invalid { path: String, message: String },

    #[error("duplicate model id {id}")]
    DuplicateId { id: i64 },

    #[error("duplicate model code {code:?}")]
    DuplicateCode { code: String },

    #[error("inconsistent feature keys across models: {details}")]
    InconsistentFeatures { details: String },

    #[error("unknown model code {code:?}")]
    UnknownCode { code: String },

    #[error("unknown model id {id}")]
    UnknownId { id: i64 },

    #[error("unknown feature {feature:?} for model {code:?}")]
    UnknownFeature { feature: String, code: String },

    #[error("feature {feature:?} not supported for model {code:?}")]
    FeatureNotSupported { feature: String, code: String },

    #[error("feature {feature:?} is supported for model {code:?} but has no model configured")]
    FeatureModelMissing { feature: String, code: String },
}
