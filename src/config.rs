use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::SeekError;
use crate::search::rolling::HashParams;
use crate::types::{PatternClass, Unit};

pub const DEFAULT_CONFIG_FILE: &str = "seekbench.toml";
pub const DEFAULT_REPETITIONS: u32 = 500;
pub const DEFAULT_CORPUS_DIR: &str = "assets";
pub const DEFAULT_GLOB: &str = "*";

/// Benchmark configuration as read from TOML. Every key is optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub repetitions: u32,
    pub unit: Unit,
    pub corpus: CorpusConfig,
    pub hash: HashParams,
    pub patterns: Vec<PatternSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorpusConfig {
    pub dir: PathBuf,
    pub glob: String,
}

/// One benchmark pattern. `documents` restricts it to the named files;
/// empty means every document.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PatternSpec {
    pub class: PatternClass,
    pub text: String,
    #[serde(default)]
    pub documents: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repetitions: DEFAULT_REPETITIONS,
            unit: Unit::default(),
            corpus: CorpusConfig::default(),
            hash: HashParams::DEFAULT,
            patterns: Vec::new(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_CORPUS_DIR),
            glob: DEFAULT_GLOB.to_string(),
        }
    }
}

impl PatternSpec {
    #[must_use]
    pub fn new(class: PatternClass, text: impl Into<String>) -> Self {
        Self {
            class,
            text: text.into(),
            documents: Vec::new(),
        }
    }

    #[must_use]
    pub fn applies_to(&self, document: &str) -> bool {
        self.documents.is_empty() || self.documents.iter().any(|d| d == document)
    }
}

impl Config {
    /// Parse a config file. Relative corpus paths resolve against the
    /// config file's directory.
    pub fn load(path: &Path) -> Result<Self, SeekError> {
        let content = fs::read_to_string(path).map_err(|e| SeekError::from_io(path, e))?;
        let mut config = Self::parse(&content).map_err(|reason| SeekError::ParseError {
            path: path.to_path_buf(),
            reason,
        })?;
        if config.corpus.dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.corpus.dir = parent.join(&config.corpus.dir);
            }
        }
        debug!(path = %path.display(), patterns = config.patterns.len(), "config loaded");
        Ok(config)
    }

    /// Explicit path if given, else `seekbench.toml` in `cwd` if present,
    /// else defaults.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self, SeekError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let candidate = cwd.join(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string().trim_end().to_string())
    }

    /// Reject configurations that cannot produce a meaningful run.
    pub fn validate(&self) -> Result<(), SeekError> {
        if self.repetitions == 0 {
            return Err(SeekError::InvalidConfig {
                reason: "repetitions must be at least 1".into(),
            });
        }
        if self.patterns.is_empty() {
            return Err(SeekError::InvalidConfig {
                reason: "no patterns configured (use --short, --long, --absent or [[patterns]])"
                    .into(),
            });
        }
        if let Some(p) = self.patterns.iter().find(|p| p.text.is_empty()) {
            return Err(SeekError::InvalidConfig {
                reason: format!("{} pattern has empty text", p.class),
            });
        }
        Ok(())
    }

    /// Every pattern of `class` that applies to `document`, in file order.
    pub fn patterns_for<'a>(
        &'a self,
        class: PatternClass,
        document: &'a str,
    ) -> impl Iterator<Item = &'a PatternSpec> + 'a {
        self.patterns
            .iter()
            .filter(move |p| p.class == class && p.applies_to(document))
    }
}
