use std::fmt;
use std::str::FromStr;

use folio_core::{FolioError, Result, Signal, signal};
use serde::{Deserialize, Serialize};

use crate::content::{Project, ProjectGroup};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    #[default]
    All,
    Internship,
    Academic,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 3] = [
        ProjectCategory::All,
        ProjectCategory::Internship,
        ProjectCategory::Academic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProjectCategory::All => "all",
            ProjectCategory::Internship => "internship",
            ProjectCategory::Academic => "academic",
        }
    }

    pub fn label_key(self) -> String {
        format!("projects.categories.{}", self.as_str())
    }

    pub fn icon(self) -> &'static str {
        match self {
            ProjectCategory::All => "★",
            ProjectCategory::Internship => "🏢",
            ProjectCategory::Academic => "🎓",
        }
    }

    /// The single group this category selects; `None` for all of them.
    pub fn group(self) -> Option<ProjectGroup> {
        match self {
            ProjectCategory::All => None,
            ProjectCategory::Internship => Some(ProjectGroup::Internship),
            ProjectCategory::Academic => Some(ProjectGroup::Academic),
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        ProjectCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FolioError::Config(format!("unknown project category `{s}`")))
    }
}

/// Projects to show for `category`. `All` concatenates the groups in the
/// order given; a specific category keeps its group's order.
pub fn filter<'a>(
    groups: &[(ProjectGroup, &'a [Project])],
    category: ProjectCategory,
) -> Vec<&'a Project> {
    let wanted = category.group();
    groups
        .iter()
        .filter(|(g, _)| wanted.is_none_or(|w| w == *g))
        .flat_map(|(_, projects)| projects.iter())
        .collect()
}

/// Selected filter tab. Defaults to `All` on every mount.
#[derive(Clone, Debug)]
pub struct CategoryFilterState {
    selected: Signal<ProjectCategory>,
}

impl Default for CategoryFilterState {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryFilterState {
    pub fn new() -> Self {
        Self {
            selected: signal(ProjectCategory::All),
        }
    }

    pub fn selected(&self) -> ProjectCategory {
        self.selected.get()
    }

    pub fn select(&self, category: ProjectCategory) {
        if self.selected.set_if_changed(category) {
            log::debug!("project filter -> {category}");
        }
    }

    pub fn signal(&self) -> Signal<ProjectCategory> {
        self.selected.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::project_groups;

    fn ids(category: ProjectCategory) -> Vec<u32> {
        filter(&project_groups(), category)
            .iter()
            .map(|p| p.id)
            .collect()
    }

    #[test]
    fn all_is_concatenation_in_group_order() {
        assert_eq!(ids(ProjectCategory::All), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn single_group_keeps_order() {
        assert_eq!(ids(ProjectCategory::Internship), vec![1, 2, 3]);
        assert_eq!(ids(ProjectCategory::Academic), vec![4, 5, 6, 7, 8]);
    }

    #[test]
    fn empty_group_yields_nothing() {
        let groups: [(ProjectGroup, &[Project]); 1] = [(ProjectGroup::Academic, &[])];
        assert!(filter(&groups, ProjectCategory::Academic).is_empty());
        assert!(filter(&groups, ProjectCategory::Internship).is_empty());
    }

    #[test]
    fn state_defaults_to_all() {
        let s = CategoryFilterState::new();
        assert_eq!(s.selected(), ProjectCategory::All);
        s.select("academic".parse().unwrap());
        assert_eq!(s.selected(), ProjectCategory::Academic);
        assert_eq!(ProjectCategory::Internship.label_key(), "projects.categories.internship");
    }
}
