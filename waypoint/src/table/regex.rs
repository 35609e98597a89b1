//! Defines the wrapping type for a compiled route regex.

use regex::Regex;

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// A compiled route pattern. `PartialEq`, `Eq`, `PartialOrd` and `Ord` compare the underlying
/// pattern text.
#[derive(Clone, Debug)]
pub struct RouteRegex {
    regex: Regex,
}

impl RouteRegex {
    /// Compiles an anchored route pattern, as found in a `CompiledRoute`.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;

        Ok(RouteRegex { regex })
    }

    /// Returns the pattern backing this regex as a `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// True if the regex matches `path`.
    #[inline]
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Matches `path`, returning named captures in pattern order followed by the unnamed
    /// captures.
    pub(crate) fn captures(&self, path: &str) -> Option<(Vec<(String, String)>, Vec<String>)> {
        let caps = self.regex.captures(path)?;

        let mut kwargs = Vec::new();
        let mut args = Vec::new();

        for (i, name) in self.regex.capture_names().enumerate().skip(1) {
            let value = match caps.get(i) {
                Some(m) => m.as_str().to_owned(),
                None => continue,
            };

            match name {
                Some(name) => kwargs.push((name.to_owned(), value)),
                None => args.push(value),
            }
        }

        Some((kwargs, args))
    }
}

impl PartialEq for RouteRegex {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for RouteRegex {}

impl PartialOrd for RouteRegex {
    fn partial_cmp(&self, other: &RouteRegex) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RouteRegex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_tests() {
        let regex = RouteRegex::new(r"^blog/(?P<year>\d+)/([\w-]+)/$").unwrap();

        let (kwargs, args) = regex.captures("blog/2024/hello-world/").unwrap();
        assert_eq!(kwargs, vec![("year".to_owned(), "2024".to_owned())]);
        assert_eq!(args, vec!["hello-world".to_owned()]);

        assert!(regex.captures("blog/2024/hello-world").is_none());
        assert!(!regex.is_match("blog/abc/x/"));
    }

    #[test]
    fn invalid_pattern_tests() {
        match RouteRegex::new(r"^(?P<id>\d+)/(?P<id>\d+)/$") {
            Err(Error::InvalidPattern { pattern, .. }) => {
                assert_eq!(pattern, r"^(?P<id>\d+)/(?P<id>\d+)/$")
            }
            _ => panic!("expected an invalid pattern error"),
        }
    }

    #[test]
    fn ordering_uses_pattern_text_tests() {
        let a = RouteRegex::new("^a/$").unwrap();
        let b = RouteRegex::new("^b/$").unwrap();
        assert!(a < b);
        assert_eq!(a, RouteRegex::new("^a/$").unwrap());
    }
}
