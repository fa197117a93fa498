//! Slide deck loading.
//!
//! A deck is an ordered, fixed collection of slides read once at startup
//! from a TOML file (or the built-in sample). There is no API for adding
//! or removing slides afterwards.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// One unit of content within the carousel's fixed ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// An immutable, ordered collection of slides.
#[derive(Debug, Clone, Deserialize)]
pub struct Deck {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default, rename = "slide")]
    slides: Vec<Slide>,
}

fn default_title() -> String {
    "Featured Projects".to_string()
}

impl Deck {
    /// Load a deck from a TOML file.
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let content = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let deck: Deck = toml::from_str(&content).map_err(|source| DeckError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(deck)
    }

    /// The built-in sample deck, used when no deck file is given.
    pub fn sample() -> Self {
        toml::from_str(SAMPLE_DECK).expect("sample deck is valid")
    }

    /// Build a deck from bare titles. Mostly useful in tests.
    pub fn with_titles<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: default_title(),
            slides: titles
                .into_iter()
                .map(|t| Slide {
                    title: t.into(),
                    summary: String::new(),
                    link: None,
                    tags: Vec::new(),
                })
                .collect(),
        }
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }
}

/// Errors that can occur while loading a deck file.
#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("failed to read deck file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse deck file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

const SAMPLE_DECK: &str = r#"
title = "Featured Projects"

[[slide]]
title = "Atelier Nord"
summary = "Brand identity and a warm, editorial web presence for a Scandinavian furniture studio."
link = "https://example.com/atelier-nord"
tags = ["branding", "web"]

[[slide]]
title = "Harbor Analytics"
summary = "Dashboard redesign focused on readable data density and calm color."
link = "https://example.com/harbor"
tags = ["product", "dashboards"]

[[slide]]
title = "Field Notes"
summary = "A photo-first travel journal with an accessible, keyboard-friendly gallery."
link = "https://example.com/field-notes"
tags = ["editorial", "accessibility"]
"#;
