//! Error types produced while compiling a route tree.
//!
//! Every failure is deterministic input validation. A compile call stops at the first error met
//! in traversal order and no partial `RouteTable` is returned.
use thiserror::Error;

/// A specialised `Result` for route compilation.
pub type Result<T> = ::std::result::Result<T, Error>;

/// The ways in which compiling a route tree can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// A path template could not be parsed.
    #[error("malformed route template `{template}`: {reason}")]
    MalformedTemplate {
        /// The template text as supplied by the caller.
        template: String,
        /// What was wrong with it.
        reason: MalformedReason,
    },

    /// A value in the route tree is neither a handler reference nor a nested tree.
    #[error("invalid route target at `{path}`: expected a handler reference or a nested route map, found {found}")]
    InvalidRouteTarget {
        /// The `/` joined fragments leading to the offending value.
        path: String,
        /// Description of the value that was found.
        found: String,
    },

    /// A matcher type was selected as the default without being registered.
    #[error("no matcher is registered for type `{name}`")]
    UnknownMatcher {
        /// The requested type name.
        name: String,
    },

    /// A compiled route pattern was rejected by the regex engine.
    #[error("route pattern `{pattern}` is not a valid regular expression")]
    InvalidPattern {
        /// The anchored route pattern.
        pattern: String,
        /// The underlying regex error.
        #[source]
        source: regex::Error,
    },
}

/// The specific reason a template was rejected by the segment parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// A `<` was found while already inside a parameter.
    #[error("unterminated parameter start")]
    UnterminatedParameterStart,

    /// A `>` was found outside of a parameter.
    #[error("unmatched parameter end")]
    UnmatchedParameterEnd,

    /// The template ended inside a parameter.
    #[error("unterminated parameter")]
    UnterminatedParameter,

    /// A parameter specification contained more than one `:`.
    #[error("at most one colon allowed")]
    TooManyColons,

    /// A parameter name contained whitespace.
    #[error("name must not contain spaces")]
    SpaceInName,

    /// A parameter type contained whitespace.
    #[error("type must not contain spaces")]
    SpaceInType,

    /// A parameter had neither a name nor a type.
    #[error("parameter requires a name or a type")]
    EmptyParameter,
}

impl Error {
    pub(crate) fn malformed(template: &str, reason: MalformedReason) -> Self {
        Error::MalformedTemplate {
            template: template.to_owned(),
            reason,
        }
    }

    /// The `MalformedReason` carried by a `MalformedTemplate` error, if this is one.
    pub fn malformed_reason(&self) -> Option<MalformedReason> {
        match self {
            Error::MalformedTemplate { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_template_display_tests() {
        let e = Error::malformed("<a:b:c>", MalformedReason::TooManyColons);
        assert_eq!(
            e.to_string(),
            "malformed route template `<a:b:c>`: at most one colon allowed"
        );
        assert_eq!(e.malformed_reason(), Some(MalformedReason::TooManyColons));
    }

    #[test]
    fn invalid_route_target_display_tests() {
        let e = Error::InvalidRouteTarget {
            path: "blog/<slug>".to_owned(),
            found: "an integer".to_owned(),
        };
        assert_eq!(
            e.to_string(),
            "invalid route target at `blog/<slug>`: expected a handler reference or a nested route map, found an integer"
        );
        assert_eq!(e.malformed_reason(), None);
    }
}
