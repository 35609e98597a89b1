//! Defines the `Token` values a path template is parsed into.

/// A single piece of a parsed path template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Fixed text which must appear verbatim in a request path.
    Literal(String),

    /// A capture point, written as `<name>`, `<name:type>` or `<:type>` in a template.
    Parameter(Parameter),
}

impl Token {
    /// The text of a `Literal` token, or `None` for a `Parameter`.
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Token::Literal(text) => Some(text),
            Token::Parameter(_) => None,
        }
    }

    /// The `Parameter` held by this token, or `None` for a `Literal`.
    pub fn as_parameter(&self) -> Option<&Parameter> {
        match self {
            Token::Literal(_) => None,
            Token::Parameter(p) => Some(p),
        }
    }
}

/// A named and/or typed capture point.
///
/// At least one of `name` and `type_name` is always present; `Parameter::new` refuses to build a
/// value with neither.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parameter {
    name: Option<String>,
    type_name: Option<String>,
}

impl Parameter {
    /// Creates a `Parameter`, treating empty strings as absent.
    ///
    /// Returns `None` when both the name and the type are absent.
    pub fn new(name: Option<&str>, type_name: Option<&str>) -> Option<Self> {
        let name = name.filter(|s| !s.is_empty()).map(str::to_owned);
        let type_name = type_name.filter(|s| !s.is_empty()).map(str::to_owned);

        if name.is_none() && type_name.is_none() {
            return None;
        }

        Some(Parameter { name, type_name })
    }

    /// The capture name, if one was given.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The declared matcher type, if one was given.
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    /// The type used for matcher lookup: the declared type, falling back to the name.
    pub fn effective_type(&self) -> Option<&str> {
        self.type_name().or_else(|| self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_requires_name_or_type_tests() {
        assert!(Parameter::new(None, None).is_none());
        assert!(Parameter::new(Some(""), Some("")).is_none());
        assert!(Parameter::new(Some("id"), None).is_some());
        assert!(Parameter::new(None, Some("int")).is_some());
    }

    #[test]
    fn effective_type_tests() {
        let p = Parameter::new(Some("id"), Some("int")).unwrap();
        assert_eq!(p.effective_type(), Some("int"));

        let p = Parameter::new(Some("id"), Some("")).unwrap();
        assert_eq!(p.type_name(), None);
        assert_eq!(p.effective_type(), Some("id"));

        let p = Parameter::new(None, Some("slug")).unwrap();
        assert_eq!(p.name(), None);
        assert_eq!(p.effective_type(), Some("slug"));
    }

    #[test]
    fn token_accessor_tests() {
        let literal = Token::Literal("posts".to_owned());
        assert_eq!(literal.as_literal(), Some("posts"));
        assert!(literal.as_parameter().is_none());

        let param = Token::Parameter(Parameter::new(Some("id"), None).unwrap());
        assert!(param.as_literal().is_none());
        assert_eq!(param.as_parameter().and_then(Parameter::name), Some("id"));
    }
}
