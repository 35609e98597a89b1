//! Defines `CompilerConfig`, the deserializable settings for a `Compiler`.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Settings used to build a `Compiler` with `Compiler::from_config`.
///
/// Every field is optional, so an empty document yields the built-in behaviour.
///
/// ```rust
/// # use waypoint::config::CompilerConfig;
/// # use waypoint::compiler::Compiler;
/// let config: CompilerConfig = serde_json::from_str(r#"{
///     "prefix": "shop.views",
///     "name_prefix": "shop",
///     "default_matcher": "int",
///     "matchers": { "sku": "[A-Z]{3}-\\d{4}" }
/// }"#).unwrap();
///
/// let compiler = Compiler::from_config(config).unwrap();
/// assert_eq!(compiler.registry().resolve(Some("sku")), r"[A-Z]{3}-\d{4}");
/// assert_eq!(compiler.registry().resolve(Some("unknown")), r"\d+");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    /// Prepended, with a `.`, to every handler reference.
    pub prefix: Option<String>,

    /// Prepended, with a `_`, to every derived route name.
    pub name_prefix: Option<String>,

    /// The matcher type used for unknown or absent parameter types.
    pub default_matcher: Option<String>,

    /// Additional matcher types, mapping type name to regex fragment.
    pub matchers: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_tests() {
        let config: CompilerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CompilerConfig::default());
    }

    #[test]
    fn unknown_field_tests() {
        let result: Result<CompilerConfig, _> = serde_json::from_str(r#"{"prefx": "app"}"#);
        assert!(result.is_err());
    }
}
