use std::fmt;
use std::str::FromStr;

use folio_core::{FolioError, Result};
use folio_ui::LayoutTree;
use serde::{Deserialize, Serialize};

/// The page's sections, in registration order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    #[default]
    Home,
    About,
    Experiences,
    Projects,
    Skills,
    Contact,
}

impl SectionKey {
    pub const ALL: [SectionKey; 6] = [
        SectionKey::Home,
        SectionKey::About,
        SectionKey::Experiences,
        SectionKey::Projects,
        SectionKey::Skills,
        SectionKey::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::Home => "home",
            SectionKey::About => "about",
            SectionKey::Experiences => "experiences",
            SectionKey::Projects => "projects",
            SectionKey::Skills => "skills",
            SectionKey::Contact => "contact",
        }
    }

    pub fn anchor(self) -> String {
        format!("#{}", self.as_str())
    }

    pub fn nav_label_key(self) -> String {
        format!("navigation.{}", self.as_str())
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.strip_prefix('#').unwrap_or(s);
        SectionKey::ALL
            .into_iter()
            .find(|k| k.as_str() == key)
            .ok_or_else(|| FolioError::UnknownSection(s.to_string()))
    }
}

/// Largest overlap between measured neighbours still treated as touching.
const SNAP_PX: f32 = 1.0;

/// A section's vertical extent in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub key: SectionKey,
    pub offset_top: f32,
    pub height: f32,
}

impl Section {
    pub fn new(key: SectionKey, offset_top: f32, height: f32) -> Self {
        Self {
            key,
            offset_top,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.offset_top + self.height
    }

    /// Half-open: the bottom edge belongs to the next section.
    pub fn contains(&self, y: f32) -> bool {
        y >= self.offset_top && y < self.bottom()
    }
}

/// Ordered, non-overlapping list of measured sections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<Section>) -> Result<Self> {
        for (i, s) in sections.iter().enumerate() {
            if s.height.is_nan() || s.height <= 0.0 {
                return Err(FolioError::EmptySection(s.key.to_string()));
            }
            if sections[..i].iter().any(|p| p.key == s.key) {
                return Err(FolioError::DuplicateSection(s.key.to_string()));
            }
        }
        for pair in sections.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.offset_top < prev.offset_top {
                return Err(FolioError::UnorderedSections {
                    earlier: prev.key.to_string(),
                    later: next.key.to_string(),
                });
            }
            if prev.bottom() > next.offset_top {
                return Err(FolioError::OverlappingSections {
                    first: prev.key.to_string(),
                    second: next.key.to_string(),
                });
            }
        }
        Ok(Self { sections })
    }

    /// Builds the registry from a layout pass. Sections appear in document
    /// order, which must match registration order.
    pub fn measure(tree: &LayoutTree) -> Result<Self> {
        let mut sections = Vec::with_capacity(tree.sections().len());
        for (key, rect) in tree.sections() {
            sections.push(Section::new(key.parse()?, rect.y, rect.h));
        }
        Self::from_extents(sections)
    }

    /// Like `new`, for extents that come out of a layout pass: a sub-pixel
    /// overlap between neighbours is float noise, so the earlier section is
    /// cut back to where the next one starts.
    pub fn from_extents(mut sections: Vec<Section>) -> Result<Self> {
        for i in 1..sections.len() {
            let (prev, next) = (sections[i - 1], sections[i]);
            if next.key < prev.key {
                return Err(FolioError::UnorderedSections {
                    earlier: prev.key.to_string(),
                    later: next.key.to_string(),
                });
            }
            let overlap = prev.bottom() - next.offset_top;
            if overlap > 0.0 && overlap < SNAP_PX {
                sections[i - 1].height = next.offset_top - prev.offset_top;
            }
        }
        Self::new(sections)
    }

    pub fn get(&self, key: SectionKey) -> Option<&Section> {
        self.sections.iter().find(|s| s.key == key)
    }

    /// First section, in registration order, containing `y`.
    pub fn section_at(&self, y: f32) -> Option<SectionKey> {
        self.sections.iter().find(|s| s.contains(y)).map(|s| s.key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
