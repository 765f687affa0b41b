//! Property binding for the demo's configuration bundles.
//!
//! Properties come from an optional TOML file whose nested tables are
//! flattened to dotted keys (`story.generation.model`). Each bundle binds
//! explicitly: read each known key under its prefix, coerce, and fall back
//! to the bundle's documented default when the key is absent. A present
//! value that cannot be coerced is a fatal config error, never a default.

use crate::error::{Error, Result};
use crate::llm::Provider;
use std::collections::BTreeMap;
use std::path::Path;

/// Flat key-value property source with dotted keys.
#[derive(Debug, Clone, Default)]
pub struct Properties {
    values: BTreeMap<String, toml::Value>,
}

impl Properties {
    /// Load from a TOML file. A missing file yields an empty source, so
    /// every bundle binds to its defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("Failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table = content
            .parse()
            .map_err(|e| Error::config(format!("Failed to parse properties: {e}")))?;
        let mut values = BTreeMap::new();
        flatten(&mut values, "", &table);
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<&toml::Value> {
        self.values.get(key)
    }

    /// String value for `key`, or `None` if absent.
    fn get_string(&self, key: &str) -> Result<Option<String>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(toml::Value::String(s)) => Ok(Some(s.clone())),
            Some(other) => Err(coercion_error(key, "string", other)),
        }
    }

    /// Float value for `key`. Integers widen; string numerals parse.
    fn get_f64(&self, key: &str) -> Result<Option<f64>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(toml::Value::Float(f)) => Ok(Some(*f)),
            Some(toml::Value::Integer(i)) => Ok(Some(*i as f64)),
            Some(toml::Value::String(s)) => match s.trim().parse::<f64>() {
                Ok(f) => Ok(Some(f)),
                Err(_) => Err(coercion_error(key, "float", &toml::Value::String(s.clone()))),
            },
            Some(other) => Err(coercion_error(key, "float", other)),
        }
    }

    /// Unsigned integer value for `key`. String numerals parse.
    fn get_u32(&self, key: &str) -> Result<Option<u32>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(toml::Value::Integer(i)) => u32::try_from(*i)
                .map(Some)
                .map_err(|_| Error::config(format!("Property '{key}': {i} out of range"))),
            Some(toml::Value::String(s)) => match s.trim().parse::<u32>() {
                Ok(i) => Ok(Some(i)),
                Err(_) => Err(coercion_error(
                    key,
                    "integer",
                    &toml::Value::String(s.clone()),
                )),
            },
            Some(other) => Err(coercion_error(key, "integer", other)),
        }
    }
}

fn flatten(out: &mut BTreeMap<String, toml::Value>, prefix: &str, table: &toml::Table) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::Table(inner) => flatten(out, &path, inner),
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}

fn coercion_error(key: &str, expected: &str, got: &toml::Value) -> Error {
    Error::config(format!(
        "Property '{key}': expected {expected}, got {got}"
    ))
}

/// Tunables for the story-writing step.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryGenerationConfig {
    pub model: String,
    pub temperature: f64,
    pub word_count: u32,
}

impl Default for StoryGenerationConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".into(),
            temperature: 0.7,
            word_count: 100,
        }
    }
}

impl StoryGenerationConfig {
    pub const PREFIX: &'static str = "story.generation";

    pub fn bind(props: &Properties) -> Result<Self> {
        let defaults = Self::default();
        let (model, temperature, word_count) = bind_bundle(
            props,
            Self::PREFIX,
            &defaults.model,
            defaults.temperature,
            defaults.word_count,
        )?;
        Ok(Self {
            model,
            temperature,
            word_count,
        })
    }
}

/// Tunables for the story-review step. Lower default temperature than
/// generation: reviews should be consistent, not creative.
#[derive(Debug, Clone, PartialEq)]
pub struct StoryReviewConfig {
    pub model: String,
    pub temperature: f64,
    pub word_count: u32,
}

impl Default for StoryReviewConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".into(),
            temperature: 0.2,
            word_count: 100,
        }
    }
}

impl StoryReviewConfig {
    pub const PREFIX: &'static str = "story.review";

    pub fn bind(props: &Properties) -> Result<Self> {
        let defaults = Self::default();
        let (model, temperature, word_count) = bind_bundle(
            props,
            Self::PREFIX,
            &defaults.model,
            defaults.temperature,
            defaults.word_count,
        )?;
        Ok(Self {
            model,
            temperature,
            word_count,
        })
    }
}

fn bind_bundle(
    props: &Properties,
    prefix: &str,
    default_model: &str,
    default_temperature: f64,
    default_word_count: u32,
) -> Result<(String, f64, u32)> {
    let model = props
        .get_string(&format!("{prefix}.model"))?
        .unwrap_or_else(|| default_model.into());
    let temperature = props
        .get_f64(&format!("{prefix}.temperature"))?
        .unwrap_or(default_temperature);
    let word_count = props
        .get_u32(&format!("{prefix}.word-count"))?
        .unwrap_or(default_word_count);
    Ok((model, temperature, word_count))
}

/// LLM transport settings, bound under the `llm` prefix.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub provider: Provider,
    pub max_tokens: u32,
    pub api_key_env: Option<String>,
    pub base_url: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            max_tokens: default_max_tokens(),
            api_key_env: None,
            base_url: None,
        }
    }
}

fn default_max_tokens() -> u32 {
    4096
}

impl LlmConfig {
    pub fn bind(props: &Properties) -> Result<Self> {
        let provider = match props.get_string("llm.provider")? {
            Some(name) => name.parse::<Provider>()?,
            None => Provider::default(),
        };
        let max_tokens = props
            .get_u32("llm.max-tokens")?
            .unwrap_or_else(default_max_tokens);
        let api_key_env = props.get_string("llm.api-key-env")?;
        let base_url = props.get_string("llm.base-url")?;
        Ok(Self {
            provider,
            max_tokens,
            api_key_env,
            base_url,
        })
    }
}
