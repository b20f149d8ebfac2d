// Copyright (c) 2025 Ala Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Route Trie for tokenized paths.
//!
//! A trie indexing delimiter-separated paths for exact, parameterized and
//! wildcard matching. Routes are registered with a payload; concrete paths
//! are matched by a depth-first walk that backtracks across the three kinds
//! of children in a fixed precedence: literal, then parameter, then wildcard.
//!
//! # Route syntax
//!
//! With the default [`RouteTrieConfig`]:
//!
//! - `users` matches the segment `users` exactly.
//! - `:id` matches any non-empty segment and captures it as `id`.
//! - `:id:[0-9]+` only matches segments accepted by the constraint.
//! - `*` (last segment only) matches the remaining one or more segments.
//!
//! # Example
//!
//! ```
//! use ala_router_lib::data_structures::route_trie::RouteTrie;
//!
//! let mut trie = RouteTrie::new();
//! trie.insert_route("/user/:id:[0-9]+", "user").unwrap();
//! trie.insert_route("/files/*", "files").unwrap();
//!
//! assert!(trie.matches("/user/42"));
//! assert_eq!(trie.hit_data(), Some(&"user"));
//! assert_eq!(trie.hit_parameters().get("id").map(String::as_str), Some("42"));
//!
//! assert!(trie.matches("/files/a/b/c"));
//! assert_eq!(trie.hit_asterisk_match(), Some("a/b/c"));
//!
//! assert!(!trie.matches("/user/abc"));
//! assert_eq!(trie.hit_data(), None);
//! ```
//!
//! # Last match
//!
//! [`RouteTrie::matches`] records the outcome so the `hit_*` accessors can
//! read it afterwards. The pair is not atomic; [`RouteTrie::lookup`] returns
//! the same information as a value without touching any state, and
//! [`SyncRouteTrie`] serializes access for multi-threaded callers.

mod config;
mod error;
mod matcher;
mod node;
mod pattern;
mod sync;
mod syntax;

use std::fmt;

use hashbrown::HashMap;

pub use config::RouteTrieConfig;
pub use error::{RouteTrieError, RouteTrieResult};
pub use matcher::{OwnedRouteMatch, Parameters, RouteMatch};
pub use node::DestroyFn;
pub use pattern::{regex_compiler, BoxedPattern, PatternCompiler, RegexPattern, SegmentPattern};
pub use sync::SyncRouteTrie;

use matcher::Hit;
use node::{NodeKind, ParameterSpec, RouteData, TrieNode};
use syntax::{parse_route, render_segment, tokenize, SegmentSpec};

/// Trie of routes carrying payloads of type `T`.
pub struct RouteTrie<T> {
    /// Root node; carries data only for the empty route
    root: TrieNode<T>,

    /// Syntax and limits
    config: RouteTrieConfig,

    /// Compiles parameter constraints
    compiler: PatternCompiler,

    /// Outcome of the most recent successful `matches` call
    last_match: Option<Hit>,
}

impl<T> RouteTrie<T> {
    /// Creates an empty trie with the default configuration.
    pub fn new() -> Self {
        Self::build(RouteTrieConfig::default())
    }

    /// Creates an empty trie splitting paths on `delimiter`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteTrieError::InvalidConfig`] if `delimiter` clashes with a marker.
    pub fn with_delimiter(delimiter: char) -> RouteTrieResult<Self> {
        Self::with_config(RouteTrieConfig::default().with_delimiter(delimiter))
    }

    /// Creates an empty trie with the specified configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RouteTrieError::InvalidConfig`] if the configuration is invalid.
    pub fn with_config(config: RouteTrieConfig) -> RouteTrieResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: RouteTrieConfig) -> Self {
        Self {
            root: TrieNode::new(NodeKind::Literal(String::new())),
            config,
            compiler: regex_compiler(),
            last_match: None,
        }
    }

    /// Replaces the constraint compiler used by later insertions.
    pub fn with_pattern_compiler(mut self, compiler: PatternCompiler) -> Self {
        self.compiler = compiler;
        self
    }

    /// The trie's configuration.
    pub fn config(&self) -> &RouteTrieConfig {
        &self.config
    }

    /// Inserts a route whose payload is dropped normally when released.
    ///
    /// # Errors
    ///
    /// See [`RouteTrie::insert_route_with_destructor`].
    pub fn insert_route(&mut self, path: &str, data: T) -> RouteTrieResult<()> {
        self.insert(path, data, None)
    }

    /// Inserts a route and registers `destructor` to receive the payload when
    /// the route is removed or the trie is dropped.
    ///
    /// On error nothing is attached and `destructor` is never called.
    ///
    /// A parameter segment at a position that already has a parameter child
    /// reuses that child: the first route's name and constraint stay in force.
    ///
    /// # Errors
    ///
    /// * [`RouteTrieError::RouteAlreadyExists`] if the route already carries data.
    /// * [`RouteTrieError::MalformedPath`] for a wildcard before the last segment
    ///   or a parameter without a name.
    /// * [`RouteTrieError::InvalidPattern`] if a constraint does not compile.
    /// * [`RouteTrieError::PathTooDeep`] if the route has too many segments.
    pub fn insert_route_with_destructor<F>(
        &mut self,
        path: &str,
        data: T,
        destructor: F,
    ) -> RouteTrieResult<()>
    where
        F: FnOnce(T) + Send + 'static,
    {
        self.insert(path, data, Some(Box::new(destructor)))
    }

    fn insert(&mut self, path: &str, data: T, destructor: Option<DestroyFn<T>>) -> RouteTrieResult<()> {
        let specs = parse_route(path, &self.config).map_err(|e| {
            tracing::warn!(route = path, error = %e, "rejected route");
            e
        })?;

        // Everything fallible happens before the tree is touched.
        if self.find_exact(&specs).is_some_and(TrieNode::is_terminal) {
            tracing::debug!(route = path, "route already exists");
            return Err(RouteTrieError::RouteAlreadyExists(path.to_string()));
        }
        let mut patterns = Vec::with_capacity(specs.len());
        for spec in &specs {
            patterns.push(match spec {
                SegmentSpec::Parameter {
                    pattern: Some(text),
                    ..
                } => Some((self.compiler)(*text).map_err(|e| {
                    tracing::warn!(route = path, error = %e, "rejected route");
                    e
                })?),
                _ => None,
            });
        }

        let mut node = &mut self.root;
        for (spec, pattern) in specs.iter().zip(patterns) {
            node = match *spec {
                SegmentSpec::Literal(text) => node
                    .literals
                    .entry(text.to_string())
                    .or_insert_with(|| TrieNode::new(NodeKind::Literal(text.to_string()))),
                // An existing parameter child keeps its own name and constraint.
                SegmentSpec::Parameter { name, .. } => &mut **node.parameter.get_or_insert_with(|| {
                    Box::new(TrieNode::new(NodeKind::Parameter(ParameterSpec {
                        name: name.to_string(),
                        pattern,
                    })))
                }),
                SegmentSpec::Asterisk => &mut **node
                    .asterisk
                    .get_or_insert_with(|| Box::new(TrieNode::new(NodeKind::Asterisk))),
            };
        }

        node.data = Some(RouteData::new(data, destructor));
        tracing::debug!(route = path, "inserted route");
        Ok(())
    }

    fn render_parameter(&self, spec: &ParameterSpec) -> String {
        let source = spec.pattern_source();
        render_segment(
            &SegmentSpec::Parameter {
                name: &spec.name,
                pattern: source.as_deref(),
            },
            &self.config,
        )
    }

    /// Walks a route's token sequence by segment kind, without backtracking.
    ///
    /// Parameter segments follow the node's parameter child whatever their
    /// name or constraint.
    fn find_exact(&self, specs: &[SegmentSpec<'_>]) -> Option<&TrieNode<T>> {
        specs.iter().try_fold(&self.root, |node, spec| match *spec {
            SegmentSpec::Literal(text) => node.literals.get(text),
            SegmentSpec::Parameter { .. } => node.parameter.as_deref(),
            SegmentSpec::Asterisk => node.asterisk.as_deref(),
        })
    }

    fn find_exact_mut(&mut self, specs: &[SegmentSpec<'_>]) -> Option<&mut TrieNode<T>> {
        let mut node = &mut self.root;
        for spec in specs {
            node = match *spec {
                SegmentSpec::Literal(text) => node.literals.get_mut(text)?,
                SegmentSpec::Parameter { .. } => node.parameter.as_deref_mut()?,
                SegmentSpec::Asterisk => node.asterisk.as_deref_mut()?,
            };
        }
        Some(node)
    }

    /// Removes a route, handing its payload to the registered destructor.
    ///
    /// Nodes stay in place as internal structure; they remain walkable but
    /// no longer report a match.
    ///
    /// # Errors
    ///
    /// Returns [`RouteTrieError::RouteNotFound`] if the route is not registered.
    pub fn remove_route(&mut self, path: &str) -> RouteTrieResult<()> {
        let not_found = || RouteTrieError::RouteNotFound(path.to_string());
        let specs = parse_route(path, &self.config).map_err(|_| not_found())?;
        let node = self.find_exact_mut(&specs).ok_or_else(not_found)?;
        let data = node.data.take().ok_or_else(not_found)?;
        drop(data);
        tracing::debug!(route = path, "removed route");
        Ok(())
    }

    /// Whether `path` is a registered route pattern.
    ///
    /// This is a structural check on route syntax, not a match: `/user/:id`
    /// is contained after inserting it, `/user/42` is not. Parameters are
    /// compared by position, so `/user/:name` is contained as well.
    pub fn contains_route(&self, path: &str) -> bool {
        parse_route(path, &self.config)
            .ok()
            .and_then(|specs| self.find_exact(&specs))
            .is_some_and(TrieNode::is_terminal)
    }

    /// Matches `path` without recording anything.
    ///
    /// Returns `None` if no registered route consumes every segment.
    pub fn lookup(&self, path: &str) -> Option<RouteMatch<'_, T>> {
        let tokens = tokenize(path, self.config.delimiter);
        if tokens.len() > self.config.max_depth {
            return None;
        }
        matcher::find(&self.root, &tokens)?.into_route_match()
    }

    /// Returns `true` if `path` matches a route, and records the match for
    /// the `hit_*` accessors. A failed match clears the previous one.
    pub fn matches(&mut self, path: &str) -> bool {
        let tokens = tokenize(path, self.config.delimiter);
        let hit = if tokens.len() > self.config.max_depth {
            None
        } else {
            matcher::find(&self.root, &tokens).map(matcher::Found::into_hit)
        };

        let matched = hit.is_some();
        tracing::debug!(path, matched, "matched path");
        self.last_match = hit;
        matched
    }

    /// Payload of the last matched route, or `None` after a failed match.
    pub fn hit_data(&self) -> Option<&T> {
        self.last_match.as_ref()?.resolve(&self.root)?.value()
    }

    /// Number of parameters captured by the last match.
    pub fn hit_parameter_count(&self) -> usize {
        self.last_match
            .as_ref()
            .map_or(0, |hit| hit.parameters.len())
    }

    /// Fresh copy of the parameters captured by the last match.
    pub fn hit_parameters(&self) -> HashMap<String, String> {
        self.last_match
            .as_ref()
            .map(|hit| hit.parameters.to_map())
            .unwrap_or_default()
    }

    /// Path suffix captured by a wildcard in the last match.
    pub fn hit_asterisk_match(&self) -> Option<&str> {
        self.last_match.as_ref()?.asterisk.as_deref()
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.root.count_routes()
    }

    /// Whether no route is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered route patterns in traversal order.
    pub fn routes(&self) -> Vec<String> {
        let mut routes = Vec::new();
        let mut prefix = Vec::new();
        self.collect_routes(&self.root, &mut prefix, &mut routes);
        routes
    }

    fn collect_routes(&self, node: &TrieNode<T>, prefix: &mut Vec<String>, routes: &mut Vec<String>) {
        if node.is_terminal() {
            let delimiter = self.config.delimiter.to_string();
            routes.push(format!("{delimiter}{}", prefix.join(delimiter.as_str())));
        }
        for (token, child) in node.sorted_literals() {
            prefix.push(token.clone());
            self.collect_routes(child, prefix, routes);
            prefix.pop();
        }
        if let Some(child) = node.parameter.as_deref() {
            if let Some(spec) = child.parameter_spec() {
                prefix.push(self.render_parameter(spec));
                self.collect_routes(child, prefix, routes);
                prefix.pop();
            }
        }
        if let Some(child) = node.asterisk.as_deref() {
            prefix.push(self.config.wildcard_marker.to_string());
            self.collect_routes(child, prefix, routes);
            prefix.pop();
        }
    }

    /// Drops every route, running destructors, and forgets the last match.
    pub fn clear(&mut self) {
        self.last_match = None;
        self.root = TrieNode::new(NodeKind::Literal(String::new()));
    }

    /// Prints the tree to stdout.
    pub fn print(&self) {
        print!("{self}");
    }

    fn render(&self, node: &TrieNode<T>, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match &node.kind {
            NodeKind::Literal(token) => write!(f, "{indent}literal \"{token}\"")?,
            NodeKind::Parameter(spec) => {
                write!(f, "{indent}parameter \"{}\"", spec.name)?;
                if let Some(pattern) = spec.pattern_source() {
                    write!(f, " pattern={pattern}")?;
                }
            }
            NodeKind::Asterisk => write!(f, "{indent}asterisk \"{}\"", self.config.wildcard_marker)?,
        }
        if node.is_terminal() {
            write!(f, " (terminal)")?;
        }
        writeln!(f)?;
        self.render_children(node, depth + 1, f)
    }

    fn render_children(&self, node: &TrieNode<T>, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, child) in node.sorted_literals() {
            self.render(child, depth, f)?;
        }
        if let Some(child) = node.parameter.as_deref() {
            self.render(child, depth, f)?;
        }
        if let Some(child) = node.asterisk.as_deref() {
            self.render(child, depth, f)?;
        }
        Ok(())
    }
}

impl<T> Default for RouteTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for RouteTrie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.root.is_terminal() {
            writeln!(f, "root (terminal)")?;
        } else {
            writeln!(f, "root")?;
        }
        self.render_children(&self.root, 1, f)
    }
}

impl<T> fmt::Debug for RouteTrie<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteTrie")
            .field("config", &self.config)
            .field("routes", &self.len())
            .field("last_match", &self.last_match)
            .finish()
    }
}
