//! Condition expressions attached to conditional questions and crisis
//! triggers.
//!
//! Content files encode conditions as short strings such as `">=2"` or
//! `"yes"`. They are parsed once, when a module is deserialized, into a
//! [`Condition`]. Parsing never fails: a string that cannot be understood
//! becomes [`Condition::Invalid`], which evaluates to `false` everywhere.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Numeric comparison operator of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Comparator {
    Gte,
    Gt,
    Lte,
    Lt,
    Eq,
}

impl Comparator {
    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            ">=" => Some(Self::Gte),
            ">" => Some(Self::Gt),
            "<=" => Some(Self::Lte),
            "<" => Some(Self::Lt),
            "==" => Some(Self::Eq),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Gte => ">=",
            Self::Gt => ">",
            Self::Lte => "<=",
            Self::Lt => "<",
            Self::Eq => "==",
        }
    }

    /// Apply the operator as `lhs <op> rhs`.
    pub fn apply(self, lhs: f64, rhs: f64) -> bool {
        match self {
            Self::Gte => lhs >= rhs,
            Self::Gt => lhs > rhs,
            Self::Lte => lhs <= rhs,
            Self::Lt => lhs < rhs,
            Self::Eq => lhs == rhs,
        }
    }
}

/// A parsed condition expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Condition {
    /// Compare a response's intensity against a threshold.
    Compare { op: Comparator, threshold: i64 },
    /// Compare a response's raw label for equality.
    Exact(String),
    /// Unparsable expression. Never satisfied.
    Invalid(String),
}

impl Condition {
    pub fn parse(raw: &str) -> Self {
        let prefix_len = raw
            .char_indices()
            .find(|(_, c)| !matches!(c, '>' | '<' | '='))
            .map(|(i, _)| i)
            .unwrap_or(raw.len());

        if prefix_len == 0 {
            return Self::Exact(raw.to_string());
        }

        let (prefix, rest) = raw.split_at(prefix_len);
        match (Comparator::from_prefix(prefix), parse_leading_int(rest)) {
            (Some(op), Some(threshold)) => Self::Compare { op, threshold },
            _ => Self::Invalid(raw.to_string()),
        }
    }

    /// Evaluate a comparison against an intensity. Exact and invalid
    /// conditions are not numeric and yield `false`.
    pub fn matches_intensity(&self, intensity: f64) -> bool {
        match self {
            Self::Compare { op, threshold } => op.apply(intensity, *threshold as f64),
            Self::Exact(_) | Self::Invalid(_) => false,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }
}

/// Leading integer of `s`, skipping leading whitespace and ignoring any
/// trailing garbage (`"2 weeks"` reads as 2).
fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['-', '+']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    s[..sign_len + digits].parse().ok()
}

impl From<String> for Condition {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<&str> for Condition {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl From<Condition> for String {
    fn from(condition: Condition) -> Self {
        condition.to_string()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare { op, threshold } => write!(f, "{}{threshold}", op.symbol()),
            Self::Exact(label) => f.write_str(label),
            Self::Invalid(raw) => f.write_str(raw),
        }
    }
}
