//! Deck markup.
//!
//! A deck is plain text with slides separated by `---` lines. Each non-blank
//! line of a slide becomes one element, in document order.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("failed to read deck {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("deck contains no slides")]
    Empty,

    #[error("line {line}: market needs three circles separated by '|', got {found}")]
    Market { line: usize, found: usize },
}

/// Entrance group an element is revealed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Heading,
    Card,
    ListItem,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CardStyle {
    Data,
    Metric,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Heading { level: u8, text: String },
    Paragraph(String),
    ListItem(String),
    Card { style: CardStyle, title: String, value: String },
    Market { labels: [String; 3] },
    Image { alt: String, path: PathBuf },
}

impl Element {
    pub fn group(&self) -> Option<Group> {
        match self {
            Element::Heading { .. } => Some(Group::Heading),
            Element::Card { .. } => Some(Group::Card),
            Element::ListItem(_) => Some(Group::ListItem),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Slide {
    pub elements: Vec<Element>,
}

impl Slide {
    pub fn count(&self, group: Group) -> usize {
        self.elements.iter().filter(|e| e.group() == Some(group)).count()
    }

    pub fn images(&self) -> impl Iterator<Item = &Path> {
        self.elements.iter().filter_map(|e| match e {
            Element::Image { path, .. } => Some(path.as_path()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn load(path: &Path) -> Result<Self, DeckError> {
        let source = fs::read_to_string(path).map_err(|source| DeckError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        Self::parse(&source, base)
    }

    /// Parses deck markup. Image paths are resolved against `base`.
    pub fn parse(source: &str, base: &Path) -> Result<Self, DeckError> {
        let mut slides = Vec::new();
        let mut slide = Slide::default();

        for (number, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line == "---" {
                slides.push(std::mem::take(&mut slide));
                continue;
            }
            if line.is_empty() {
                continue;
            }
            slide.elements.push(parse_element(line, number + 1, base)?);
        }

        // A trailing separator does not open an extra slide
        if !slide.elements.is_empty() {
            slides.push(slide);
        }

        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { slides })
    }
}

fn parse_element(line: &str, number: usize, base: &Path) -> Result<Element, DeckError> {
    if let Some(level) = heading_level(line) {
        let text = line[level as usize..].trim().to_string();
        return Ok(Element::Heading { level, text });
    }

    if let Some(item) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Ok(Element::ListItem(item.trim().to_string()));
    }

    if let Some(rest) = line.strip_prefix("[card]") {
        return Ok(card(CardStyle::Data, rest));
    }
    if let Some(rest) = line.strip_prefix("[metric]") {
        return Ok(card(CardStyle::Metric, rest));
    }

    if let Some(rest) = line.strip_prefix("[market]") {
        let labels: Vec<String> = rest.split('|').map(|s| s.trim().to_string()).collect();
        return match <[String; 3]>::try_from(labels) {
            Ok(labels) => Ok(Element::Market { labels }),
            Err(labels) => Err(DeckError::Market {
                line: number,
                found: labels.len(),
            }),
        };
    }

    if let Some((alt, path)) = image(line) {
        return Ok(Element::Image {
            alt: alt.to_string(),
            path: base.join(path),
        });
    }

    Ok(Element::Paragraph(line.to_string()))
}

fn heading_level(line: &str) -> Option<u8> {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    let followed_by_space = line[hashes..].starts_with(' ');
    match hashes {
        1..=3 if followed_by_space => Some(hashes as u8),
        _ => None,
    }
}

fn card(style: CardStyle, rest: &str) -> Element {
    let (title, value) = rest.split_once('|').unwrap_or((rest, ""));
    Element::Card {
        style,
        title: title.trim().to_string(),
        value: value.trim().to_string(),
    }
}

fn image(line: &str) -> Option<(&str, &str)> {
    let inner = line.strip_prefix("![")?.strip_suffix(')')?;
    let (alt, path) = inner.split_once("](")?;
    Some((alt, path.trim()))
}
