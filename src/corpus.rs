use std::fs;
use std::path::Path;

use globset::Glob;
use ignore::WalkBuilder;
use tracing::debug;

use crate::error::SeekError;
use crate::types::Unit;

/// One document, decoded once so timing loops only measure searching.
#[derive(Debug)]
pub struct Document {
    pub name: String,
    pub text: String,
    pub chars: Vec<char>,
}

/// A document's text in the unit being searched.
#[derive(Debug, Clone, Copy)]
pub enum Units<'a> {
    Bytes(&'a [u8]),
    Chars(&'a [char]),
}

impl Units<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bytes(b) => b.len(),
            Self::Chars(c) => c.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Document {
    #[must_use]
    pub fn new(name: impl Into<String>, text: String) -> Self {
        let chars = text.chars().collect();
        Self {
            name: name.into(),
            text,
            chars,
        }
    }

    #[must_use]
    pub fn units(&self, unit: Unit) -> Units<'_> {
        match unit {
            Unit::Byte => Units::Bytes(self.text.as_bytes()),
            Unit::Char => Units::Chars(&self.chars),
        }
    }
}

/// Documents to benchmark against, sorted by file name.
#[derive(Debug, Default)]
pub struct Corpus {
    pub documents: Vec<Document>,
}

impl Corpus {
    /// Load every regular file directly inside `dir` whose file name matches
    /// `glob`. Hidden files are skipped. Files must be valid UTF-8.
    pub fn load(dir: &Path, glob: &str) -> Result<Self, SeekError> {
        let matcher = Glob::new(glob)
            .map_err(|e| SeekError::InvalidQuery {
                query: glob.to_string(),
                reason: e.to_string(),
            })?
            .compile_matcher();

        let meta = fs::metadata(dir).map_err(|e| SeekError::from_io(dir, e))?;
        if !meta.is_dir() {
            return Err(SeekError::InvalidQuery {
                query: dir.display().to_string(),
                reason: "corpus path is not a directory".into(),
            });
        }

        let walker = WalkBuilder::new(dir)
            .max_depth(Some(1))
            .hidden(true)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .ignore(false)
            .parents(false)
            .build();

        let mut documents = Vec::new();
        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !matcher.is_match(name) {
                continue;
            }
            documents.push(read_document(path, name)?);
        }

        if documents.is_empty() {
            return Err(SeekError::EmptyCorpus {
                path: dir.to_path_buf(),
                glob: glob.to_string(),
            });
        }

        documents.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(dir = %dir.display(), documents = documents.len(), "corpus loaded");

        Ok(Self { documents })
    }

    /// Wrap in-memory documents, e.g. for `find` on a single file.
    #[must_use]
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Self { documents }
    }
}

/// Read one file as UTF-8 text.
pub fn read_document(path: &Path, name: &str) -> Result<Document, SeekError> {
    let bytes = fs::read(path).map_err(|e| SeekError::from_io(path, e))?;
    let text = String::from_utf8(bytes).map_err(|e| SeekError::ParseError {
        path: path.to_path_buf(),
        reason: format!("not valid UTF-8 ({})", e.utf8_error()),
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read document");

    Ok(Document::new(name, text))
}
