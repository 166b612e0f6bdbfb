//! Line-level term matching over diff text.

use crate::config::TermMode;
use crate::error::{Result, ScoutError};
use regex::Regex;

/// Compiled set of terms.
///
/// A line matches when it contains at least one term. Matching is case
/// sensitive. In [`TermMode::Regex`] the terms are spliced into the
/// alternation as written, so metacharacters keep their regex meaning.
#[derive(Debug, Clone)]
pub struct TermScanner {
    pattern: Option<Regex>,
}

impl TermScanner {
    pub fn new<S: AsRef<str>>(terms: &[S], mode: TermMode) -> Result<Self> {
        if terms.is_empty() {
            return Ok(Self { pattern: None });
        }

        let alternatives: Vec<String> = terms
            .iter()
            .map(|t| match mode {
                TermMode::Literal => regex::escape(t.as_ref()),
                TermMode::Regex => t.as_ref().to_string(),
            })
            .collect();
        let source = format!("(?:{})", alternatives.join("|"));

        let pattern = Regex::new(&source).map_err(|e| ScoutError::InvalidTerm {
            pattern: source.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// Pattern the lines are tested against, if any terms were given.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(|p| p.as_str())
    }

    /// Lines of `text` (split on `\n`) that contain a term, in order.
    pub fn scan<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match &self.pattern {
            Some(pattern) => text.split('\n').filter(|line| pattern.is_match(line)).collect(),
            None => Vec::new(),
        }
    }
}
