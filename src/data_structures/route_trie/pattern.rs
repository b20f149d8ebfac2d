// Copyright (c) 2025 Ala Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Parameter constraint patterns.
//!
//! The trie does not interpret constraint text itself. A [`PatternCompiler`]
//! turns the text after the second parameter marker into a
//! [`SegmentPattern`], which is then asked whether a segment satisfies it.
//! The default compiler builds anchored regular expressions.

use regex::Regex;

use super::error::{RouteTrieError, RouteTrieResult};

/// A compiled constraint evaluated against one path segment.
#[cfg_attr(test, mockall::automock)]
pub trait SegmentPattern {
    /// Returns `true` if `segment` satisfies the constraint.
    fn is_match(&self, segment: &str) -> bool;

    /// The constraint text as written in the route, for display.
    fn source(&self) -> String;
}

/// Owned, sendable pattern as stored in a trie node.
pub type BoxedPattern = Box<dyn SegmentPattern + Send>;

/// Turns constraint text into a [`SegmentPattern`].
pub type PatternCompiler = Box<dyn Fn(&str) -> RouteTrieResult<BoxedPattern> + Send>;

/// Regular-expression constraint that must match the whole segment.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    source: String,
    regex: Regex,
}

impl RegexPattern {
    /// Compiles `pattern` anchored at both ends.
    ///
    /// # Errors
    ///
    /// Returns [`RouteTrieError::InvalidPattern`] if the regex does not compile.
    pub fn new(pattern: &str) -> RouteTrieResult<Self> {
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|e| {
            RouteTrieError::InvalidPattern {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }
}

impl SegmentPattern for RegexPattern {
    fn is_match(&self, segment: &str) -> bool {
        self.regex.is_match(segment)
    }

    fn source(&self) -> String {
        self.source.clone()
    }
}

/// The compiler used when none is configured.
pub fn regex_compiler() -> PatternCompiler {
    Box::new(|pattern: &str| -> RouteTrieResult<BoxedPattern> {
        Ok(Box::new(RegexPattern::new(pattern)?))
    })
}
