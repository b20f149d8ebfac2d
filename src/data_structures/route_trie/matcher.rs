// Copyright (c) 2025 Ala Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Backtracking matcher and match results.
//!
//! The walk consumes one segment per level. At every node the literal child
//! equal to the segment is tried first, then the parameter child, then the
//! wildcard child. Captures recorded on a branch are popped again when the
//! branch fails, so only the winning path's captures survive.

use hashbrown::HashMap;

use super::node::{ChildKey, TrieNode};
use super::syntax::Tokens;

/// Parameter captures of a match, in path order.
///
/// Inserting a name that is already present overwrites its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    entries: Vec<(String, String)>,
}

impl Parameters {
    /// Creates an empty capture set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` under `name`.
    pub fn insert<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Value captured under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, value)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Copies the captures into a map.
    pub fn to_map(&self) -> HashMap<String, String> {
        self.entries.iter().cloned().collect()
    }
}

/// Result of a successful match, borrowing the payload from the trie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a, T> {
    data: &'a T,
    parameters: Parameters,
    asterisk: Option<String>,
}

impl<'a, T> RouteMatch<'a, T> {
    /// Payload of the matched route.
    pub fn data(&self) -> &'a T {
        self.data
    }

    /// Named parameters captured along the matched route.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Path suffix consumed by a wildcard, if the route ended in one.
    pub fn asterisk(&self) -> Option<&str> {
        self.asterisk.as_deref()
    }

    /// Detaches the match from the trie by cloning the payload.
    pub fn into_owned(self) -> OwnedRouteMatch<T>
    where
        T: Clone,
    {
        OwnedRouteMatch {
            data: self.data.clone(),
            parameters: self.parameters,
            asterisk: self.asterisk,
        }
    }
}

/// A match result that owns a copy of the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedRouteMatch<T> {
    /// Payload of the matched route
    pub data: T,
    /// Named parameters captured along the matched route
    pub parameters: Parameters,
    /// Path suffix consumed by a wildcard
    pub asterisk: Option<String>,
}

/// Owned record of the winning walk, kept as the trie's last match.
#[derive(Debug, Clone)]
pub(crate) struct Hit {
    pub route: Vec<ChildKey>,
    pub parameters: Parameters,
    pub asterisk: Option<String>,
}

impl Hit {
    /// Follows the recorded route from `root` back to the hit node.
    pub fn resolve<'t, T>(&self, root: &'t TrieNode<T>) -> Option<&'t TrieNode<T>> {
        self.route
            .iter()
            .try_fold(root, |node, key| node.child(key))
    }
}

#[derive(Debug, Clone, Copy)]
enum Step<'t> {
    Literal(&'t str),
    Parameter,
    Asterisk,
}

/// Accumulator shared by the whole walk; branches push and pop.
#[derive(Debug, Default)]
struct WalkState<'t, 'p> {
    route: Vec<Step<'t>>,
    captures: Vec<(&'t str, &'p str)>,
    asterisk: Option<&'p str>,
}

/// A successful walk, still borrowing from the trie and the path.
#[derive(Debug)]
pub(crate) struct Found<'t, 'p, T> {
    node: &'t TrieNode<T>,
    state: WalkState<'t, 'p>,
}

impl<'t, 'p, T> Found<'t, 'p, T> {
    fn parameters(&self) -> Parameters {
        let mut parameters = Parameters::new();
        for (name, value) in &self.state.captures {
            parameters.insert(*name, *value);
        }
        parameters
    }

    pub fn into_hit(self) -> Hit {
        let parameters = self.parameters();
        let route = self
            .state
            .route
            .iter()
            .map(|step| match step {
                Step::Literal(text) => ChildKey::Literal((*text).to_string()),
                Step::Parameter => ChildKey::Parameter,
                Step::Asterisk => ChildKey::Asterisk,
            })
            .collect();
        Hit {
            route,
            parameters,
            asterisk: self.state.asterisk.map(str::to_string),
        }
    }

    pub fn into_route_match(self) -> Option<RouteMatch<'t, T>> {
        let parameters = self.parameters();
        Some(RouteMatch {
            data: self.node.value()?,
            parameters,
            asterisk: self.state.asterisk.map(str::to_string),
        })
    }
}

/// Finds the highest-precedence route matching `tokens`.
pub(crate) fn find<'t, 'p, T>(
    root: &'t TrieNode<T>,
    tokens: &Tokens<'p>,
) -> Option<Found<'t, 'p, T>> {
    let mut state = WalkState::default();
    let node = walk(root, tokens, 0, &mut state)?;
    Some(Found { node, state })
}

fn walk<'t, 'p, T>(
    node: &'t TrieNode<T>,
    tokens: &Tokens<'p>,
    index: usize,
    state: &mut WalkState<'t, 'p>,
) -> Option<&'t TrieNode<T>> {
    let Some(segment) = tokens.get(index) else {
        return node.is_terminal().then_some(node);
    };

    if let Some((key, child)) = node.literals.get_key_value(segment.text) {
        state.route.push(Step::Literal(key.as_str()));
        if let Some(hit) = walk(child, tokens, index + 1, state) {
            return Some(hit);
        }
        state.route.pop();
        tracing::trace!(segment = segment.text, depth = index, "backtracking off literal branch");
    }

    if let Some(child) = node.parameter.as_deref() {
        if let Some(spec) = child.parameter_spec() {
            if spec.accepts(segment.text) {
                state.route.push(Step::Parameter);
                state.captures.push((spec.name.as_str(), segment.text));
                if let Some(hit) = walk(child, tokens, index + 1, state) {
                    return Some(hit);
                }
                state.captures.pop();
                state.route.pop();
                tracing::trace!(
                    segment = segment.text,
                    parameter = spec.name.as_str(),
                    depth = index,
                    "backtracking off parameter branch"
                );
            }
        }
    }

    // A wildcard never captures an empty tail.
    if let Some(child) = node.asterisk.as_deref() {
        let rest = tokens.remainder(index);
        if child.is_terminal() && !rest.is_empty() {
            state.route.push(Step::Asterisk);
            state.asterisk = Some(rest);
            return Some(child);
        }
    }

    None
}
