//! Registry schema — the declarative shape of the model document plus the
//! semantic validator.
//!
//! serde carries the type discipline: an int field rejects a bool, a
//! string field rejects a number, `dependence` is a closed enum. The
//! validator carries what serde cannot express: non-empty strings, the
//! required feature set, and the `url_requirements`/`base_url` cross-field
//! rule. Validation failures name the offending document path
//! (`models[3].features`).

use std::collections::HashMap;

use serde::Deserialize;

use super::RegistryError;

/// Feature keys every model must declare, supported or not.
pub const REQUIRED_FEATURES: [&str; 4] =
    ["mini_version", "deep_think", "json_output", "tool_calls"];

// ─────────────────────────────────────────────
// Document shape
// ─────────────────────────────────────────────

/// Upstream API family a model speaks. Closed set; anything else is a
/// parse failure.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
pub enum Dependence {
    #[serde(rename = "OpenAI")]
    OpenAi,
}

/// Whether a named capability is available for a model and, if so, which
/// underlying model identifier and endpoint back it.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FeatureConfig {
    pub supported: bool,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// One model entry in the registry document.
#[derive(Clone, Debug, Deserialize)]
pub struct ModelConfig {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub dependence: Dependence,
    pub url_requirements: bool,
    /// `None` means "use the SDK default endpoint".
    #[serde(default)]
    pub base_url: Option<String>,
    pub base_model: String,
    pub charge_url: String,
    pub docs_url: String,
    pub features: HashMap<String, FeatureConfig>,
}

/// Root of the registry document.
#[derive(Clone, Debug, Deserialize)]
pub struct RegistryConfig {
    pub version: i64,
    pub models: Vec<ModelConfig>,
}

// ─────────────────────────────────────────────
// Resolution
// ─────────────────────────────────────────────

/// An (endpoint, model identifier) pair produced by resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Endpoint<'a> {
    /// `None` means "use the SDK/caller default".
    pub base_url: Option<&'a str>,
    pub model: &'a str,
}

impl ModelConfig {
    /// Semantic checks on one entry. `path` is its document location,
    /// e.g. `models[3]`.
    pub(crate) fn validate(&self, path: &str) -> Result<(), RegistryError> {
        let required_strings = [
            ("name", &self.name),
            ("code", &self.code),
            ("base_model", &self.base_model),
            ("charge_url", &self.charge_url),
            ("docs_url", &self.docs_url),
        ];
        for (field, value) in required_strings {
            if value.is_empty() {
                return Err(RegistryError::Invalid {
                    path: format!("{path}.{field}"),
                    message: "must be a non-empty string".to_string(),
                });
            }
        }

        let mut missing: Vec<&str> = REQUIRED_FEATURES
            .iter()
            .copied()
            .filter(|key| !self.features.contains_key(*key))
            .collect();
        if !missing.is_empty() {
            missing.sort_unstable();
            return Err(RegistryError::Invalid {
                path: format!("{path}.features"),
                message: format!("missing keys: {missing:?}"),
            });
        }

        if self.url_requirements && self.base_url.as_deref().unwrap_or("").is_empty() {
            return Err(RegistryError::Invalid {
                path: path.to_string(),
                message: "url_requirements is true but base_url is null/empty".to_string(),
            });
        }

        Ok(())
    }

    /// Sorted feature-key set, compared across models at registry
    /// construction.
    pub(crate) fn feature_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.features.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Resolve the endpoint and model identifier for this entry.
    ///
    /// With no feature, returns the base pair as stored. With a feature,
    /// the feature must exist, be supported, and carry a model
    /// identifier; its `url` overrides the base endpoint only when set.
    pub fn resolve_endpoint(&self, feature: Option<&str>) -> Result<Endpoint<'_>, RegistryError> {
        let Some(name) = feature else {
            return Ok(Endpoint {
                base_url: self.base_url.as_deref(),
                model: &self.base_model,
            });
        };

        let feat = self
            .features
            .get(name)
            .ok_or_else(|| RegistryError::UnknownFeature {
                feature: name.to_string(),
                code: self.code.clone(),
            })?;
        if !feat.supported {
            return Err(RegistryError::FeatureNotSupported {
                feature: name.to_string(),
                code: self.code.clone(),
            });
        }
        let model = feat
            .model
            .as_deref()
            .filter(|m| !m.is_empty())
            .ok_or_else(|| RegistryError::FeatureModelMissing {
                feature: name.to_string(),
                code: self.code.clone(),
            })?;

        let base_url = feat
            .url
            .as_deref()
            .filter(|u| !u.is_empty())
            .or(self.base_url.as_deref());

        Ok(Endpoint { base_url, model })
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
