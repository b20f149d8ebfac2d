// Copyright (c) 2025 Ala Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the route trie.
//!
//! Each node stands for one segment position. Literal children are keyed by
//! their text; a node has at most one parameter child and at most one
//! wildcard child. Terminal nodes carry the route's payload.

use std::fmt;

use fnv::FnvBuildHasher;
use hashbrown::HashMap;

use super::pattern::BoxedPattern;

/// Callback taking ownership of a payload when its route is released.
pub type DestroyFn<T> = Box<dyn FnOnce(T) + Send>;

/// Payload slot of a terminal node.
///
/// Dropping the slot hands the payload to its destructor, if one was
/// registered, exactly once.
pub(crate) struct RouteData<T> {
    value: Option<T>,
    destructor: Option<DestroyFn<T>>,
}

impl<T> RouteData<T> {
    pub fn new(value: T, destructor: Option<DestroyFn<T>>) -> Self {
        Self {
            value: Some(value),
            destructor,
        }
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T> Drop for RouteData<T> {
    fn drop(&mut self) {
        if let (Some(value), Some(destroy)) = (self.value.take(), self.destructor.take()) {
            destroy(value);
        }
    }
}

/// Name and optional constraint of a parameter node.
pub(crate) struct ParameterSpec {
    pub name: String,
    pub pattern: Option<BoxedPattern>,
}

impl ParameterSpec {
    /// No constraint accepts any non-empty segment.
    pub fn accepts(&self, segment: &str) -> bool {
        match &self.pattern {
            Some(pattern) => pattern.is_match(segment),
            None => !segment.is_empty(),
        }
    }

    /// Constraint text for display.
    pub fn pattern_source(&self) -> Option<String> {
        self.pattern.as_ref().map(|pattern| pattern.source())
    }
}

impl fmt::Debug for ParameterSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterSpec")
            .field("name", &self.name)
            .field("pattern", &self.pattern_source())
            .finish()
    }
}

/// What a node matches.
#[derive(Debug)]
pub(crate) enum NodeKind {
    Literal(String),
    Parameter(ParameterSpec),
    Asterisk,
}

/// Owned step from a node to one of its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ChildKey {
    Literal(String),
    Parameter,
    Asterisk,
}

/// A node in the route trie.
///
/// Children are declared before `data` so teardown releases descendants
/// before the node's own payload.
pub(crate) struct TrieNode<T> {
    pub kind: NodeKind,
    pub literals: HashMap<String, TrieNode<T>, FnvBuildHasher>,
    pub parameter: Option<Box<TrieNode<T>>>,
    pub asterisk: Option<Box<TrieNode<T>>>,
    pub data: Option<RouteData<T>>,
}

impl<T> TrieNode<T> {
    /// Creates a node with no children and no payload.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            literals: HashMap::default(),
            parameter: None,
            asterisk: None,
            data: None,
        }
    }

    /// Whether a registered route ends here.
    pub fn is_terminal(&self) -> bool {
        self.data.is_some()
    }

    pub fn value(&self) -> Option<&T> {
        self.data.as_ref().and_then(RouteData::value)
    }

    pub fn child(&self, key: &ChildKey) -> Option<&TrieNode<T>> {
        match key {
            ChildKey::Literal(text) => self.literals.get(text.as_str()),
            ChildKey::Parameter => self.parameter.as_deref(),
            ChildKey::Asterisk => self.asterisk.as_deref(),
        }
    }

    pub fn parameter_spec(&self) -> Option<&ParameterSpec> {
        match &self.kind {
            NodeKind::Parameter(spec) => Some(spec),
            _ => None,
        }
    }

    /// Literal children sorted by token, for deterministic traversal.
    pub fn sorted_literals(&self) -> Vec<(&String, &TrieNode<T>)> {
        let mut literals: Vec<_> = self.literals.iter().collect();
        literals.sort_by(|a, b| a.0.cmp(b.0));
        literals
    }

    /// Number of terminal nodes in this subtree.
    pub fn count_routes(&self) -> usize {
        let mut count = usize::from(self.is_terminal());
        count += self.literals.values().map(TrieNode::count_routes).sum::<usize>();
        if let Some(child) = &self.parameter {
            count += child.count_routes();
        }
        if let Some(child) = &self.asterisk {
            count += child.count_routes();
        }
        count
    }
}

impl<T> fmt::Debug for TrieNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("kind", &self.kind)
            .field("terminal", &self.is_terminal())
            .field("literals", &self.literals.len())
            .field("parameter", &self.parameter.is_some())
            .field("asterisk", &self.asterisk.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::pattern::RegexPattern;
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_route_data_destructor_runs_once_on_drop() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let slot = RouteData::new(
            7_u32,
            Some(Box::new(move |value: u32| {
                assert_eq!(value, 7);
                seen.fetch_add(1, Ordering::SeqCst);
            })),
        );
        assert_eq!(slot.value(), Some(&7));
        drop(slot);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_parameter_spec_accepts() {
        let spec = ParameterSpec {
            name: "id".to_string(),
            pattern: None,
        };
        assert!(spec.accepts("42"));
        assert!(!spec.accepts(""));
        assert_eq!(spec.pattern_source(), None);

        let constrained = ParameterSpec {
            name: "id".to_string(),
            pattern: Some(Box::new(RegexPattern::new("[0-9]+").unwrap())),
        };
        assert!(constrained.accepts("42"));
        assert!(!constrained.accepts("abc"));
        assert_eq!(constrained.pattern_source().as_deref(), Some("[0-9]+"));
    }

    #[test]
    fn test_count_routes_and_child_lookup() {
        let mut root: TrieNode<&str> = TrieNode::new(NodeKind::Literal(String::new()));
        assert_eq!(root.count_routes(), 0);

        let mut leaf = TrieNode::new(NodeKind::Literal("a".to_string()));
        leaf.data = Some(RouteData::new("a", None));
        root.literals.insert("a".to_string(), leaf);

        let mut star = TrieNode::new(NodeKind::Asterisk);
        star.data = Some(RouteData::new("star", None));
        root.asterisk = Some(Box::new(star));

        assert_eq!(root.count_routes(), 2);
        assert_eq!(
            root.child(&ChildKey::Literal("a".to_string())).and_then(TrieNode::value),
            Some(&"a")
        );
        assert_eq!(root.child(&ChildKey::Asterisk).and_then(TrieNode::value), Some(&"star"));
        assert!(root.child(&ChildKey::Parameter).is_none());
    }
}
