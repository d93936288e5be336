//! Section model for statements of purpose and resumes.
//!
//! Document structure is defined by `SectionKey::ALL`. Every renderer walks
//! that list, never the map's own iteration order, so missing or unknown
//! keys cannot change the layout of a document.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identifies one section of a document. Variant order is the canonical
/// document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    Hook,
    Segue,
    Academic,
    Extracurricular,
    Publications,
    Problems,
    WhySchool,
    Goal,
}

impl SectionKey {
    /// Canonical order. Never sort this by name.
    pub const ALL: [SectionKey; 8] = [
        SectionKey::Hook,
        SectionKey::Segue,
        SectionKey::Academic,
        SectionKey::Extracurricular,
        SectionKey::Publications,
        SectionKey::Problems,
        SectionKey::WhySchool,
        SectionKey::Goal,
    ];

    /// Wire name used as the key in a `SectionsMap`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::Hook => "hook",
            SectionKey::Segue => "segue",
            SectionKey::Academic => "academic",
            SectionKey::Extracurricular => "extracurricular",
            SectionKey::Publications => "publications",
            SectionKey::Problems => "problems",
            SectionKey::WhySchool => "whySchool",
            SectionKey::Goal => "goal",
        }
    }

    pub fn default_title(&self) -> &'static str {
        match self {
            SectionKey::Hook => "Hook",
            SectionKey::Segue => "Segue",
            SectionKey::Academic => "Academic Achievements",
            SectionKey::Extracurricular => "Extracurricular Activities",
            SectionKey::Publications => "Publications",
            SectionKey::Problems => "Problems Solved",
            SectionKey::WhySchool => "Why This School",
            SectionKey::Goal => "Future Goals",
        }
    }
}

/// Title/content pair as typed by the student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Partial mapping from section wire name to section.
///
/// Keys that are not a `SectionKey` are kept on deserialization but are
/// never rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionsMap(HashMap<String, Section>);

impl SectionsMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: SectionKey, section: Section) {
        self.0.insert(key.as_str().to_string(), section);
    }

    pub fn get(&self, key: SectionKey) -> Option<&Section> {
        self.0.get(key.as_str())
    }

    /// The section for `key`, or the default title with empty content.
    pub fn resolve(&self, key: SectionKey) -> Section {
        self.get(key)
            .cloned()
            .unwrap_or_else(|| Section::new(key.default_title(), ""))
    }
}

impl FromIterator<(SectionKey, Section)> for SectionsMap {
    fn from_iter<I: IntoIterator<Item = (SectionKey, Section)>>(iter: I) -> Self {
        let mut map = SectionsMap::new();
        for (key, section) in iter {
            map.insert(key, section);
        }
        map
    }
}

/// A section resolved against its defaults, tagged with its key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredSection {
    pub key: SectionKey,
    pub title: String,
    pub content: String,
}

/// Resolves every canonical section, in canonical order.
pub fn to_structured_sections(sections: &SectionsMap) -> Vec<StructuredSection> {
    SectionKey::ALL
        .iter()
        .map(|&key| {
            let Section { title, content } = sections.resolve(key);
            StructuredSection {
                key,
                title,
                content,
            }
        })
        .collect()
}
