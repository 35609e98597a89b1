//! Defines `RouteDocument`, an untyped route tree read from any serde data format.

use std::convert::TryFrom;
use std::fmt;

use linked_hash_map::LinkedHashMap;
use log::trace;
use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};

use crate::error::{Error, Result};
use crate::template::parse_segment;
use crate::tree::{RouteNode, RouteTree, Target};

/// A route tree as written in a configuration document, before validation.
///
/// Strings are handler references and maps are nested trees, with entry order preserved. Any
/// other value is kept as `Unsupported` so that converting the document into a `RouteTree` can
/// report where it was found.
///
/// ```rust
/// # use waypoint::tree::{RouteDocument, RouteTree};
/// let document: RouteDocument = serde_json::from_str(r#"{
///     "": "pages.views.home",
///     "blog": {
///         "": "blog.views.index",
///         "<slug>": "blog.views.post"
///     }
/// }"#).unwrap();
///
/// let tree: RouteTree<()> = RouteTree::from_document(document).unwrap();
/// assert_eq!(tree.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteDocument {
    /// A dotted handler reference.
    Reference(String),

    /// A nested route map.
    Nested(LinkedHashMap<String, RouteDocument>),

    /// A value of any other kind, described for error reporting.
    Unsupported(String),
}

impl<'de> Deserialize<'de> for RouteDocument {
    fn deserialize<D>(de: D) -> ::std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        de.deserialize_any(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl DocumentVisitor {
    fn unsupported<E>(found: &str) -> ::std::result::Result<RouteDocument, E> {
        Ok(RouteDocument::Unsupported(found.to_owned()))
    }
}

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = RouteDocument;

    fn expecting(&self, out: &mut fmt::Formatter) -> fmt::Result {
        out.write_str("a handler reference or a map of route fragments")
    }

    fn visit_str<E>(self, v: &str) -> ::std::result::Result<RouteDocument, E>
    where
        E: serde::de::Error,
    {
        Ok(RouteDocument::Reference(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> ::std::result::Result<RouteDocument, E>
    where
        E: serde::de::Error,
    {
        Ok(RouteDocument::Reference(v))
    }

    fn visit_map<A>(self, mut map: A) -> ::std::result::Result<RouteDocument, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = LinkedHashMap::new();

        while let Some((fragment, value)) = map.next_entry::<String, RouteDocument>()? {
            match entries.get_mut(&fragment) {
                Some(existing) => *existing = value,
                None => {
                    entries.insert(fragment, value);
                }
            }
        }

        Ok(RouteDocument::Nested(entries))
    }

    fn visit_seq<A>(self, mut seq: A) -> ::std::result::Result<RouteDocument, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Self::unsupported("a sequence")
    }

    fn visit_bool<E>(self, _v: bool) -> ::std::result::Result<RouteDocument, E>
    where
        E: serde::de::Error,
    {
        Self::unsupported("a boolean")
    }

    fn visit_i64<E>(self, _v: i64) -> ::std::result::Result<RouteDocument, E>
    where
        E: serde::de::Error,
    {
        Self::unsupported("an integer")
    }

    fn visit_u64<E>(self, _v: u64) -> ::std::result::Result<RouteDocument, E>
    where
        E: serde::de::Error,
    {
        Self::unsupported("an integer")
    }

    fn visit_f64<E>(self, _v: f64) -> ::std::result::Result<RouteDocument, E>
    where
        E: serde::de::Error,
    {
        Self::unsupported("a floating point number")
    }

    fn visit_bytes<E>(self, _v: &[u8]) -> ::std::result::Result<RouteDocument, E>
    where
        E: serde::de::Error,
    {
        Self::unsupported("a byte string")
    }

    fn visit_unit<E>(self) -> ::std::result::Result<RouteDocument, E>
    where
        E: serde::de::Error,
    {
        Self::unsupported("null")
    }

    fn visit_none<E>(self) -> ::std::result::Result<RouteDocument, E>
    where
        E: serde::de::Error,
    {
        Self::unsupported("null")
    }

    fn visit_some<D>(self, de: D) -> ::std::result::Result<RouteDocument, D::Error>
    where
        D: Deserializer<'de>,
    {
        de.deserialize_any(DocumentVisitor)
    }
}

impl<H> RouteTree<H> {
    /// Validates a `RouteDocument` and converts it into a `RouteTree`.
    ///
    /// The document root must be a route map. Entries are checked depth first in document order;
    /// the first fragment that fails to parse yields `Error::MalformedTemplate` and the first
    /// unsupported value yields `Error::InvalidRouteTarget`.
    pub fn from_document(document: RouteDocument) -> Result<Self> {
        match document {
            RouteDocument::Nested(entries) => convert(entries, ""),
            RouteDocument::Reference(_) => Err(Error::InvalidRouteTarget {
                path: String::new(),
                found: "a bare handler reference in place of the root route map".to_owned(),
            }),
            RouteDocument::Unsupported(found) => Err(Error::InvalidRouteTarget {
                path: String::new(),
                found,
            }),
        }
    }
}

impl<H> TryFrom<RouteDocument> for RouteTree<H> {
    type Error = Error;

    fn try_from(document: RouteDocument) -> Result<Self> {
        RouteTree::from_document(document)
    }
}

fn convert<H>(entries: LinkedHashMap<String, RouteDocument>, path: &str) -> Result<RouteTree<H>> {
    let mut tree = RouteTree::new();

    for (fragment, value) in entries {
        let here = if path.is_empty() {
            fragment.clone()
        } else {
            format!("{}/{}", path, fragment)
        };

        parse_segment(&fragment)?;

        let node = match value {
            RouteDocument::Reference(reference) => RouteNode::Leaf(Target::Reference(reference)),
            RouteDocument::Nested(children) => {
                trace!("[converting nested document at: {}]", here);
                RouteNode::Branch(convert(children, &here)?)
            }
            RouteDocument::Unsupported(found) => {
                return Err(Error::InvalidRouteTarget { path: here, found });
            }
        };

        tree.insert(fragment, node);
    }

    Ok(tree)
}
