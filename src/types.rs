use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The three matchers. Closed set, known at compile time. Adding one means
/// adding an arm here and the compiler tells you everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Kmp,
    BoyerMoore,
    RabinKarp,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Self::Kmp, Self::BoyerMoore, Self::RabinKarp];

    /// Stable identifier used on the command line and in JSON output.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Kmp => "kmp",
            Self::BoyerMoore => "boyer-moore",
            Self::RabinKarp => "rabin-karp",
        }
    }

    /// Human-readable label for reports.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Kmp => "Knuth-Morris-Pratt",
            Self::BoyerMoore => "Boyer-Moore",
            Self::RabinKarp => "Rabin-Karp",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kmp" | "knuth-morris-pratt" => Ok(Self::Kmp),
            "boyer-moore" | "bm" => Ok(Self::BoyerMoore),
            "rabin-karp" | "rk" => Ok(Self::RabinKarp),
            other => Err(format!(
                "unknown algorithm '{other}' (expected kmp, boyer-moore or rabin-karp)"
            )),
        }
    }
}

/// What a matcher compares: Unicode scalar values or raw UTF-8 bytes.
/// Offsets in results are counted in the same unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Char,
    Byte,
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Char => write!(f, "char"),
            Self::Byte => write!(f, "byte"),
        }
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "char" | "chars" => Ok(Self::Char),
            "byte" | "bytes" => Ok(Self::Byte),
            other => Err(format!("unknown unit '{other}' (expected char or byte)")),
        }
    }
}

/// Benchmark pattern class. Absent patterns are expected to miss every document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternClass {
    Short,
    Long,
    Absent,
}

impl PatternClass {
    pub const ALL: [PatternClass; 3] = [Self::Short, Self::Long, Self::Absent];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Short => "short existing pattern",
            Self::Long => "long existing pattern",
            Self::Absent => "absent pattern",
        }
    }
}

impl std::fmt::Display for PatternClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Short => write!(f, "short"),
            Self::Long => write!(f, "long"),
            Self::Absent => write!(f, "absent"),
        }
    }
}
