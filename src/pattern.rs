//! Template compilation.
//!
//! A template is literal text with parameters wrapped in parentheses:
//! `api.example.com/users/(username)/repos`. Compiling splits it into
//! segments, decides whether the parameters are key paths (inbound) or
//! operation keywords ending in `:` (outbound), and builds the anchored
//! regex the matcher runs.

use regex::{Regex, RegexBuilder};
use std::str::FromStr;
use strobj_keypath::{KeyPath, ResolutionError};
use thiserror::Error;

/// Trailing marker that turns a parameter into an operation keyword.
pub const ARGUMENT_MARKER: char = ':';

/// Compiled-size budget per template byte, on top of the regex default.
const REGEX_BYTES_PER_TEMPLATE_BYTE: usize = 256;
const REGEX_BASE_SIZE_LIMIT: usize = 10 * (1 << 20);

#[derive(Error, Debug)]
pub enum CompileError {
    #[error("template mixes operation keywords ('{keyword}') with key paths ('{plain}')")]
    MixedParameters { keyword: String, plain: String },
    #[error("unclosed '(' at offset {offset}")]
    Unclosed { offset: usize },
    #[error("unexpected ')' at offset {offset}")]
    UnexpectedClose { offset: usize },
    #[error("nested '(' at offset {offset}")]
    NestedOpen { offset: usize },
    #[error("empty parameter at offset {offset}")]
    EmptyParameter { offset: usize },
    #[error("invalid key path '{key_path}': {source}")]
    KeyPath {
        key_path: String,
        #[source]
        source: ResolutionError,
    },
    #[error("failed to build pattern regex: {0}")]
    RegexBuild(#[from] regex::Error),
}

/// A piece of a compiled template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Parameter(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Parameters are key paths read from an object when rendering.
    Inbound,
    /// Parameters are keywords of an operation invoked with extracted values.
    Outbound,
}

/// A compiled template. Immutable once built; share it freely.
#[derive(Debug, Clone)]
pub struct Pattern {
    template: String,
    segments: Vec<Segment>,
    mode: Mode,
    operation: Option<String>,
    key_paths: Vec<KeyPath>,
    regex: Regex,
}

impl Pattern {
    #[tracing::instrument(level = "debug", skip_all, fields(template = %template))]
    pub fn new(template: &str) -> Result<Self, CompileError> {
        let segments = tokenize(template)?;
        let (mode, operation) = classify(&segments)?;
        let key_paths = match mode {
            Mode::Inbound => parse_key_paths(&segments)?,
            Mode::Outbound => Vec::new(),
        };
        let regex = build_regex(template.len(), &segments)?;

        let pattern = Self {
            template: template.to_string(),
            segments,
            mode,
            operation,
            key_paths,
            regex,
        };
        tracing::debug!(?mode, arity = pattern.arity(), "compiled pattern");
        Ok(pattern)
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Parameter tokens in order of appearance.
    pub fn parameters(&self) -> impl Iterator<Item = &str> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Parameter(token) => Some(token.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Number of parameters, which is also the argument count of an
    /// outbound operation.
    pub fn arity(&self) -> usize {
        self.parameters().count()
    }

    /// Key paths of an inbound pattern; empty for outbound patterns.
    pub fn key_paths(&self) -> Vec<&str> {
        self.key_paths.iter().map(KeyPath::as_str).collect()
    }

    /// Parsed key paths, one per parameter of an inbound pattern.
    pub(crate) fn parsed_key_paths(&self) -> &[KeyPath] {
        &self.key_paths
    }

    /// The composite operation name of an outbound pattern, e.g.
    /// `initWithUsername:repoName:`.
    pub fn operation_name(&self) -> Option<&str> {
        self.operation.as_deref()
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}

impl FromStr for Pattern {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::new(s)
    }
}

/// Compiles `template` into a reusable [`Pattern`].
pub fn compile(template: &str) -> Result<Pattern, CompileError> {
    Pattern::new(template)
}

fn is_delimiter(c: char) -> bool {
    c == '(' || c == ')'
}

fn tokenize(template: &str) -> Result<Vec<Segment>, CompileError> {
    let mut result = Vec::new();
    let mut remaining = template;
    let mut offset = 0;

    while !remaining.is_empty() {
        let Some(open) = remaining.find(is_delimiter) else {
            result.push(Segment::Literal(remaining.to_string()));
            break;
        };
        if remaining[open..].starts_with(')') {
            return Err(CompileError::UnexpectedClose {
                offset: offset + open,
            });
        }
        if open > 0 {
            result.push(Segment::Literal(remaining[..open].to_string()));
        }

        let body = &remaining[open + 1..];
        let Some(close) = body.find(is_delimiter) else {
            return Err(CompileError::Unclosed {
                offset: offset + open,
            });
        };
        if body[close..].starts_with('(') {
            return Err(CompileError::NestedOpen {
                offset: offset + open + 1 + close,
            });
        }
        if close == 0 {
            return Err(CompileError::EmptyParameter {
                offset: offset + open,
            });
        }
        result.push(Segment::Parameter(body[..close].to_string()));

        let consumed = open + close + 2;
        remaining = &remaining[consumed..];
        offset += consumed;
    }

    Ok(result)
}

fn classify(segments: &[Segment]) -> Result<(Mode, Option<String>), CompileError> {
    let mut keyword: Option<&str> = None;
    let mut plain: Option<&str> = None;
    let mut operation = String::new();

    for segment in segments {
        if let Segment::Parameter(token) = segment {
            if token.ends_with(ARGUMENT_MARKER) {
                keyword.get_or_insert(token);
                operation.push_str(token);
            } else {
                plain.get_or_insert(token);
            }
        }
    }

    match (keyword, plain) {
        (Some(keyword), Some(plain)) => Err(CompileError::MixedParameters {
            keyword: keyword.to_string(),
            plain: plain.to_string(),
        }),
        (Some(_), None) => Ok((Mode::Outbound, Some(operation))),
        // No parameters at all renders to the literal, so it counts as inbound.
        (None, _) => Ok((Mode::Inbound, None)),
    }
}

fn parse_key_paths(segments: &[Segment]) -> Result<Vec<KeyPath>, CompileError> {
    segments
        .iter()
        .filter_map(|segment| match segment {
            Segment::Parameter(token) => Some(token),
            Segment::Literal(_) => None,
        })
        .map(|token| {
            KeyPath::parse(token).map_err(|source| CompileError::KeyPath {
                key_path: token.clone(),
                source,
            })
        })
        .collect()
}

fn build_regex(template_len: usize, segments: &[Segment]) -> Result<Regex, regex::Error> {
    let mut regex_str = String::new();

    for segment in segments {
        match segment {
            Segment::Literal(text) => regex_str.push_str(&regex::escape(text)),
            // Lazy, so each parameter stops at the first place the rest of
            // the template can still match.
            Segment::Parameter(_) => regex_str.push_str("(.*?)"),
        }
    }

    // The default size limit rejects long literal templates.
    let size_limit = template_len
        .saturating_mul(REGEX_BYTES_PER_TEMPLATE_BYTE)
        .saturating_add(REGEX_BASE_SIZE_LIMIT);
    RegexBuilder::new(&format!("(?s)^{}$", regex_str))
        .size_limit(size_limit)
        .build()
}
