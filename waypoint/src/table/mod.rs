//! Defines `RouteTable`, the ordered output of a compile pass.

mod regex;
mod resolver;

use std::collections::BTreeMap;
use std::ops::Deref;

use crate::tree::Target;

pub use self::regex::RouteRegex;
pub use self::resolver::{ResolvedRoute, Resolver};

/// Per-route metadata. Compiled routes currently always carry an empty mapping.
pub type RouteOptions = BTreeMap<String, String>;

/// A single compiled route, ready to be handed to a dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledRoute<H> {
    pattern: String,
    target: Target<H>,
    options: RouteOptions,
    name: Option<String>,
}

impl<H> CompiledRoute<H> {
    pub(crate) fn new(pattern: String, target: Target<H>, name: Option<String>) -> Self {
        CompiledRoute {
            pattern,
            target,
            options: RouteOptions::new(),
            name,
        }
    }

    /// The anchored regex pattern this route matches.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The target requests matching this route are dispatched to.
    pub fn target(&self) -> &Target<H> {
        &self.target
    }

    /// Extra options for the route.
    pub fn options(&self) -> &RouteOptions {
        &self.options
    }

    /// The derived route name, if one could be derived.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Splits the route into `(pattern, target, options, name)`.
    pub fn into_parts(self) -> (String, Target<H>, RouteOptions, Option<String>) {
        (self.pattern, self.target, self.options, self.name)
    }
}

/// The ordered routes produced by compiling a `RouteTree`.
///
/// Order follows a depth-first walk of the tree and decides precedence when more than one
/// pattern matches a path. The table is immutable once built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable<H> {
    routes: Vec<CompiledRoute<H>>,
}

impl<H> RouteTable<H> {
    pub(crate) fn new(routes: Vec<CompiledRoute<H>>) -> Self {
        RouteTable { routes }
    }

    /// Returns the first route carrying `name`.
    ///
    /// Names are not required to be unique; later routes with the same name are shadowed here.
    pub fn find(&self, name: &str) -> Option<&CompiledRoute<H>> {
        self.routes.iter().find(|r| r.name() == Some(name))
    }

    /// Compiles every pattern into a `Resolver` that can match request paths.
    pub fn into_resolver(self) -> crate::error::Result<Resolver<H>> {
        Resolver::new(self)
    }

    /// Consumes the table, returning the routes in order.
    pub fn into_routes(self) -> Vec<CompiledRoute<H>> {
        self.routes
    }
}

impl<H> Deref for RouteTable<H> {
    type Target = [CompiledRoute<H>];

    fn deref(&self) -> &[CompiledRoute<H>] {
        &self.routes
    }
}

impl<H> IntoIterator for RouteTable<H> {
    type Item = CompiledRoute<H>;
    type IntoIter = ::std::vec::IntoIter<CompiledRoute<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.into_iter()
    }
}

impl<'a, H> IntoIterator for &'a RouteTable<H> {
    type Item = &'a CompiledRoute<H>;
    type IntoIter = ::std::slice::Iter<'a, CompiledRoute<H>>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}
