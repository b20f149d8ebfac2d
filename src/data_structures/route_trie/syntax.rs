// Copyright (c) 2025 Ala Router Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Path tokenization and route segment classification.

use super::config::RouteTrieConfig;
use super::error::{RouteTrieError, RouteTrieResult};

/// One delimiter-separated unit of a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment<'a> {
    /// Segment text without delimiters
    pub text: &'a str,
    /// Byte offset of the segment inside the stripped path
    pub start: usize,
}

/// A path split into segments, keeping the stripped body for wildcard captures.
#[derive(Debug)]
pub(crate) struct Tokens<'a> {
    body: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> Tokens<'a> {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn get(&self, index: usize) -> Option<Segment<'a>> {
        self.segments.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Segment<'a>> + '_ {
        self.segments.iter().copied()
    }

    /// The raw text from segment `index` to the end of the path.
    pub fn remainder(&self, index: usize) -> &'a str {
        match self.segments.get(index) {
            Some(segment) => &self.body[segment.start..],
            None => "",
        }
    }
}

/// Splits `path` on `delimiter`.
///
/// One leading and one trailing delimiter are discarded; an empty remainder
/// has no segments. Interior empty segments are kept.
pub(crate) fn tokenize(path: &str, delimiter: char) -> Tokens<'_> {
    let body = path.strip_prefix(delimiter).unwrap_or(path);
    let body = body.strip_suffix(delimiter).unwrap_or(body);

    let mut segments = Vec::new();
    if !body.is_empty() {
        let mut start = 0;
        for text in body.split(delimiter) {
            segments.push(Segment { text, start });
            start += text.len() + delimiter.len_utf8();
        }
    }

    Tokens { body, segments }
}

/// How a route segment participates in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SegmentSpec<'a> {
    /// Exact text
    Literal(&'a str),
    /// Named capture with an optional constraint
    Parameter {
        name: &'a str,
        pattern: Option<&'a str>,
    },
    /// Rest of the path
    Asterisk,
}

/// Classifies a single route segment.
fn classify<'a>(text: &'a str, config: &RouteTrieConfig) -> Result<SegmentSpec<'a>, String> {
    let mut chars = text.chars();
    if chars.next() == Some(config.wildcard_marker) && chars.next().is_none() {
        return Ok(SegmentSpec::Asterisk);
    }

    let Some(rest) = text.strip_prefix(config.parameter_marker) else {
        return Ok(SegmentSpec::Literal(text));
    };

    let (name, pattern) = match rest.split_once(config.parameter_marker) {
        Some((name, pattern)) => (name, Some(pattern)),
        None => (rest, None),
    };

    if name.is_empty() {
        return Err(format!("parameter segment '{text}' has no name"));
    }
    if pattern == Some("") {
        return Err(format!("parameter '{name}' has an empty pattern"));
    }

    Ok(SegmentSpec::Parameter { name, pattern })
}

/// Parses a route into classified segments.
///
/// A wildcard followed by further segments and routes deeper than
/// `max_depth` are rejected.
pub(crate) fn parse_route<'a>(
    path: &'a str,
    config: &RouteTrieConfig,
) -> RouteTrieResult<Vec<SegmentSpec<'a>>> {
    let tokens = tokenize(path, config.delimiter);
    if tokens.len() > config.max_depth {
        return Err(RouteTrieError::PathTooDeep {
            path: path.to_string(),
            max_depth: config.max_depth,
        });
    }

    let mut specs = Vec::with_capacity(tokens.len());
    for segment in tokens.iter() {
        if specs.last() == Some(&SegmentSpec::Asterisk) {
            return Err(RouteTrieError::MalformedPath {
                path: path.to_string(),
                reason: "wildcard must be the last segment".to_string(),
            });
        }
        let spec = classify(segment.text, config).map_err(|reason| RouteTrieError::MalformedPath {
            path: path.to_string(),
            reason,
        })?;
        specs.push(spec);
    }

    Ok(specs)
}

/// Renders a segment back into route syntax.
pub(crate) fn render_segment(spec: &SegmentSpec<'_>, config: &RouteTrieConfig) -> String {
    match spec {
        SegmentSpec::Literal(text) => (*text).to_string(),
        SegmentSpec::Parameter { name, pattern: None } => {
            format!("{}{}", config.parameter_marker, name)
        }
        SegmentSpec::Parameter {
            name,
            pattern: Some(pattern),
        } => format!(
            "{}{}{}{}",
            config.parameter_marker, name, config.parameter_marker, pattern
        ),
        SegmentSpec::Asterisk => config.wildcard_marker.to_string(),
    }
}
