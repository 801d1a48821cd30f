//! The registry proper — owns the validated configs and the id/code
//! indices, and answers resolution queries.

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use super::schema::{Endpoint, ModelConfig, RegistryConfig};
use super::RegistryError;

/// Immutable collection of model configurations plus id/code indices.
///
/// Built once from a YAML document; read-only afterwards, so shared
/// references are safe across threads without locking. Construction is
/// all-or-nothing: any invalid entry, duplicate key, or feature-set
/// disagreement fails the whole load.
#[derive(Debug)]
pub struct ModelRegistry {
    cfg: RegistryConfig,
    by_id: HashMap<i64, usize>,
    by_code: HashMap<String, usize>,
}

impl ModelRegistry {
    /// Build a registry from an already-parsed document.
    pub fn new(cfg: RegistryConfig) -> Result<Self, RegistryError> {
        for (i, model) in cfg.models.iter().enumerate() {
            model.validate(&format!("models[{i}]"))?;
        }

        let mut by_id = HashMap::with_capacity(cfg.models.len());
        let mut by_code = HashMap::with_capacity(cfg.models.len());
        for (i, model) in cfg.models.iter().enumerate() {
            if by_id.insert(model.id, i).is_some() {
                return Err(RegistryError::DuplicateId { id: model.id });
            }
            if by_code.insert(model.code.clone(), i).is_some() {
                return Err(RegistryError::DuplicateCode {
                    code: model.code.clone(),
                });
            }
        }

        // Every model must expose the identical feature-key set, so that
        // callers can query any feature name against any model.
        if let Some(first) = cfg.models.first() {
            let expected = first.feature_keys();
            if cfg.models.iter().any(|m| m.feature_keys() != expected) {
                let details = cfg
                    .models
                    .iter()
                    .map(|m| format!("{}: {:?}", m.code, m.feature_keys()))
                    .collect::<Vec<_>>()
                    .join("; ");
                return Err(RegistryError::InconsistentFeatures { details });
            }
        }

        Ok(ModelRegistry { cfg, by_id, by_code })
    }

    /// Parse and validate a YAML registry document.
    pub fn from_yaml(yaml: &str) -> Result<Self, RegistryError> {
        let cfg: RegistryConfig = serde_saphyr::from_str(yaml)?;
        Self::new(cfg)
    }

    /// Load a registry from a YAML file. A missing or unreadable file is
    /// an error; there is no default registry to fall back to.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let registry = Self::from_yaml(&contents)?;
        info!(
            path = %path.display(),
            version = registry.version(),
            models = registry.cfg.models.len(),
            "Model registry loaded"
        );
        Ok(registry)
    }

    /// Document version.
    pub fn version(&self) -> i64 {
        self.cfg.version
    }

    /// All models, in document order.
    pub fn list_models(&self) -> &[ModelConfig] {
        &self.cfg.models
    }

    /// Exact lookup by code.
    pub fn get_by_code(&self, code: &str) -> Result<&ModelConfig, RegistryError> {
        self.by_code
            .get(code)
            .map(|&i| &self.cfg.models[i])
            .ok_or_else(|| RegistryError::UnknownCode {
                code: code.to_string(),
            })
    }

    /// Exact lookup by id.
    pub fn get_by_id(&self, id: i64) -> Result<&ModelConfig, RegistryError> {
        self.by_id
            .get(&id)
            .map(|&i| &self.cfg.models[i])
            .ok_or(RegistryError::UnknownId { id })
    }

    /// Shortcut: resolve (base_url, model_name) for a code plus optional
    /// feature.
    pub fn resolve(&self, code: &str, feature: Option<&str>) -> Result<Endpoint<'_>, RegistryError> {
        let endpoint = self.get_by_code(code)?.resolve_endpoint(feature)?;
        debug!(
            code,
            feature = feature.unwrap_or("base"),
            model = endpoint.model,
            base_url = endpoint.base_url.unwrap_or("default"),
            "Resolved endpoint"
        );
        Ok(endpoint)
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const VALID_DOC: &str = r#"
version: 1
models:
  - id: 1
    name: DeepSeek
    code: deepseek
    dependence: OpenAI
    url_requirements: true
    base_url: https://api.deepseek.com
    base_model: deepseek-chat
    charge_url: https://platform.deepseek.com/top_up
    docs_url: https://api-docs.deepseek.com
    features:
      mini_version: { supported: false }
      deep_think: { supported: true, model: deepseek-reasoner, url: null }
      json_output: { supported: true, model: deepseek-chat }
      tool_calls: { supported: true, model: deepseek-chat }
  - id: 2
    name: ChatGPT
    code: chatgpt
    dependence: OpenAI
    url_requirements: false
    base_url: null
    base_model: gpt-4o
    charge_url: https://platform.openai.com/settings/organization/billing
    docs_url: https://platform.openai.com/docs
    features:
      mini_version: { supported: true, model: gpt-4o-mini }
      deep_think: { supported: false }
      json_output: { supported: true, model: gpt-4o }
      tool_calls: { supported: true, model: gpt-4o }
"#;

    #[test]
    fn test_load_valid_document() {
        let registry = ModelRegistry::from_yaml(VALID_DOC).unwrap();
        assert_eq!(registry.version(), 1);
        assert_eq!(registry.list_models().len(), 2);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(VALID_DOC.as_bytes()).unwrap();
        file.flush().unwrap();

        let registry = ModelRegistry::load(file.path()).unwrap();
        assert_eq!(registry.get_by_code("deepseek").unwrap().id, 1);
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let err = ModelRegistry::load("/nonexistent/models.yaml").unwrap_err();
        assert!(matches!(err, RegistryError::Io(_)));
    }

    #[test]
    fn test_get_by_code_and_id() {
        let registry = ModelRegistry::from_yaml(VALID_DOC).unwrap();
        assert_eq!(registry.get_by_code("chatgpt").unwrap().id, 2);
        assert_eq!(registry.get_by_id(1).unwrap().code, "deepseek");
    }

    #[test]
    fn test_lookup_miss_is_descriptive() {
        let registry = ModelRegistry::from_yaml(VALID_DOC).unwrap();

        let err = registry.get_by_code("claude").unwrap_err();
        assert!(err.to_string().contains("claude"));

        let err = registry.get_by_id(99).unwrap_err();
        assert!(err.to_string().contains("99"));
    }

    #[test]
    fn test_resolve_base() {
        let registry = ModelRegistry::from_yaml(VALID_DOC).unwrap();
        let endpoint = registry.resolve("deepseek", None).unwrap();
        assert_eq!(endpoint.base_url, Some("https://api.deepseek.com"));
        assert_eq!(endpoint.model, "deepseek-chat");
    }

    #[test]
    fn test_resolve_deep_think_inherits_base_url() {
        let registry = ModelRegistry::from_yaml(VALID_DOC).unwrap();
        let endpoint = registry.resolve("deepseek", Some("deep_think")).unwrap();
        assert_eq!(endpoint.base_url, Some("https://api.deepseek.com"));
        assert_eq!(endpoint.model, "deepseek-reasoner");
    }

    #[test]
    fn test_resolve_mini_version_with_default_endpoint() {
        let registry = ModelRegistry::from_yaml(VALID_DOC).unwrap();
        let endpoint = registry.resolve("chatgpt", Some("mini_version")).unwrap();
        assert_eq!(endpoint.base_url, None);
        assert_eq!(endpoint.model, "gpt-4o-mini");
    }

    #[test]
    fn test_resolve_unknown_code() {
        let registry = ModelRegistry::from_yaml(VALID_DOC).unwrap();
        let err = registry.resolve("claude", None).unwrap_err();
        assert!(matches!(err, RegistryError::UnknownCode { .. }));
    }

    #[test]
    fn test_resolve_unsupported_feature() {
        let registry = ModelRegistry::from_yaml(VALID_DOC).unwrap();
        let err = registry.resolve("chatgpt", Some("deep_think")).unwrap_err();
        assert!(matches!(err, RegistryError::FeatureNotSupported { .. }));
    }

    #[test]
    fn test_duplicate_id_fails() {
        let doc = VALID_DOC.replace("id: 2", "id: 1");
        let err = ModelRegistry::from_yaml(&doc).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateId { id: 1 }));
    }

    #[test]
    fn test_duplicate_code_fails() {
        let doc = VALID_DOC.replace("code: chatgpt", "code: deepseek");
        let err = ModelRegistry::from_yaml(&doc).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateCode { .. }));
    }

    #[test]
    fn test_missing_required_feature_fails_with_path() {
        let doc = VALID_DOC.replace("      deep_think: { supported: false }\n", "");
        let err = ModelRegistry::from_yaml(&doc).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("models[1].features"));
        assert!(msg.contains("deep_think"));
    }

    #[test]
    fn test_url_requirements_without_base_url_fails() {
        let doc = VALID_DOC.replace("base_url: https://api.deepseek.com", "base_url: null");
        let err = ModelRegistry::from_yaml(&doc).unwrap_err();
        assert!(err.to_string().contains("models[0]"));
    }

    #[test]
    fn test_inconsistent_feature_keys_fail() {
        // Give only one model an extra key; key sets now disagree.
        let doc = VALID_DOC.replace(
            "      tool_calls: { supported: true, model: deepseek-chat }",
            "      tool_calls: { supported: true, model: deepseek-chat }\n      vision: { supported: false }",
        );
        let err = ModelRegistry::from_yaml(&doc).unwrap_err();
        assert!(matches!(err, RegistryError::InconsistentFeatures { .. }));
        assert!(err.to_string().contains("vision"));
    }

    #[test]
    fn test_consistent_extra_feature_keys_are_preserved() {
        let doc = VALID_DOC.replace(
            "      tool_calls: { supported: true, model: deepseek-chat }",
            "      tool_calls: { supported: true, model: deepseek-chat }\n      vision: { supported: false }",
        );
        let doc = doc.replace(
            "      tool_calls: { supported: true, model: gpt-4o }",
            "      tool_calls: { supported: true, model: gpt-4o }\n      vision: { supported: true, model: gpt-4o }",
        );

        let registry = ModelRegistry::from_yaml(&doc).unwrap();
        let endpoint = registry.resolve("chatgpt", Some("vision")).unwrap();
        assert_eq!(endpoint.model, "gpt-4o");

        let err = registry.resolve("deepseek", Some("vision")).unwrap_err();
        assert!(matches!(err, RegistryError::FeatureNotSupported { .. }));
    }

    #[test]
    fn test_version_must_be_an_int() {
        let doc = VALID_DOC.replace("version: 1", "version: one");
        assert!(matches!(
            ModelRegistry::from_yaml(&doc).unwrap_err(),
            RegistryError::Yaml(_)
        ));
    }

    #[test]
    fn test_id_rejects_bool() {
        let doc = VALID_DOC.replace("id: 1", "id: true");
        assert!(matches!(
            ModelRegistry::from_yaml(&doc).unwrap_err(),
            RegistryError::Yaml(_)
        ));
    }

    #[test]
    fn test_unknown_dependence_fails() {
        let doc = VALID_DOC.replace("dependence: OpenAI\n    url_requirements: true", "dependence: Anthropic\n    url_requirements: true");
        assert!(matches!(
            ModelRegistry::from_yaml(&doc).unwrap_err(),
            RegistryError::Yaml(_)
        ));
    }

    #[test]
    fn test_missing_models_key_fails() {
        assert!(ModelRegistry::from_yaml("version: 1\n").is_err());
    }

    #[test]
    fn test_empty_model_list_is_a_valid_registry() {
        let registry = ModelRegistry::from_yaml("version: 3\nmodels: []\n").unwrap();
        assert_eq!(registry.version(), 3);
        assert!(registry.list_models().is_empty());
    }
}
