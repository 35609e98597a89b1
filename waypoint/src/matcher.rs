//! Defines `MatcherRegistry`, which maps parameter types to regex fragments.

use std::collections::HashMap;

use log::{debug, trace};

use crate::error::{Error, Result};

/// Fragment registered for the built-in `int` type.
pub const INT_FRAGMENT: &str = r"\d+";

/// Fragment registered for the built-in `slug` type.
pub const SLUG_FRAGMENT: &str = r"[\w-]+";

/// The type used when a parameter's type is unknown, unless configured otherwise.
pub const DEFAULT_MATCHER: &str = "slug";

/// Maps the type named in a template parameter (`<id:int>`) to the regex fragment that the
/// parameter captures.
///
/// Lookups never fail. A type that is not registered resolves to the fragment of the default
/// type, so templates may name types before anything is registered for them.
///
/// # Examples
///
/// ```rust
/// # use waypoint::matcher::MatcherRegistry;
/// let mut registry = MatcherRegistry::new();
/// registry.register("year", r"\d{4}");
///
/// assert_eq!(registry.resolve(Some("int")), r"\d+");
/// assert_eq!(registry.resolve(Some("year")), r"\d{4}");
///
/// // Unknown types fall back to `slug`.
/// assert_eq!(registry.resolve(Some("uuid")), r"[\w-]+");
/// assert_eq!(registry.resolve(None), r"[\w-]+");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatcherRegistry {
    matchers: HashMap<String, String>,
    default_matcher: String,
}

impl MatcherRegistry {
    /// Creates a registry holding the built-in `int` and `slug` types, with `slug` as the default.
    pub fn new() -> Self {
        let mut matchers = HashMap::new();
        matchers.insert("int".to_owned(), INT_FRAGMENT.to_owned());
        matchers.insert("slug".to_owned(), SLUG_FRAGMENT.to_owned());

        MatcherRegistry {
            matchers,
            default_matcher: DEFAULT_MATCHER.to_owned(),
        }
    }

    /// Registers `fragment` for `type_name`, replacing any existing registration.
    pub fn register<N, F>(&mut self, type_name: N, fragment: F) -> &mut Self
    where
        N: Into<String>,
        F: Into<String>,
    {
        let type_name = type_name.into();
        let fragment = fragment.into();
        debug!(" registering matcher {} => {}", type_name, fragment);

        self.matchers.insert(type_name, fragment);
        self
    }

    /// Selects the type used for unknown or absent parameter types.
    ///
    /// The type must already be registered.
    pub fn set_default_matcher(&mut self, type_name: &str) -> Result<&mut Self> {
        if !self.matchers.contains_key(type_name) {
            return Err(Error::UnknownMatcher {
                name: type_name.to_owned(),
            });
        }

        debug!(" default matcher is now {}", type_name);
        self.default_matcher = type_name.to_owned();
        Ok(self)
    }

    /// The type used for unknown or absent parameter types.
    pub fn default_matcher(&self) -> &str {
        &self.default_matcher
    }

    /// True if a fragment is registered for `type_name`.
    pub fn contains(&self, type_name: &str) -> bool {
        self.matchers.contains_key(type_name)
    }

    /// Returns the fragment for `type_name`, or the default type's fragment when `type_name` is
    /// absent or unknown.
    pub fn resolve(&self, type_name: Option<&str>) -> &str {
        if let Some(fragment) = type_name.and_then(|t| self.matchers.get(t)) {
            return fragment;
        }

        trace!(
            " matcher type {:?} not registered, using default {}",
            type_name,
            self.default_matcher
        );

        self.matchers
            .get(&self.default_matcher)
            .map(String::as_str)
            .unwrap_or(SLUG_FRAGMENT)
    }
}

impl Default for MatcherRegistry {
    fn default() -> Self {
        MatcherRegistry::new()
    }
}
