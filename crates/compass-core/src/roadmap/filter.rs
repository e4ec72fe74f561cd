use super::{Category, Difficulty, Roadmap, Timeframe};

/// Option name that disables filtering on an axis
pub const ALL: &str = "all";

/// One independent dimension used to narrow the visible roadmaps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterAxis {
    Difficulty,
    Duration,
    Category,
}

impl FilterAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterAxis::Difficulty => "difficulty",
            FilterAxis::Duration => "duration",
            FilterAxis::Category => "category",
        }
    }

    pub fn all() -> Vec<FilterAxis> {
        vec![FilterAxis::Difficulty, FilterAxis::Duration, FilterAxis::Category]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FilterAxis::Difficulty => "Difficulty",
            FilterAxis::Duration => "Duration",
            FilterAxis::Category => "Category",
        }
    }

    /// Every option offered for this axis, "all" first
    pub fn options(&self) -> Vec<&'static str> {
        let values: Vec<&'static str> = match self {
            FilterAxis::Difficulty => Difficulty::all().iter().map(|d| d.as_str()).collect(),
            FilterAxis::Duration => Timeframe::all().iter().map(|d| d.as_str()).collect(),
            FilterAxis::Category => Category::all().iter().map(|c| c.as_str()).collect(),
        };
        std::iter::once(ALL).chain(values).collect()
    }
}

/// Current selection per axis; `None` means "all"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterState {
    pub difficulty: Option<Difficulty>,
    pub duration: Option<Timeframe>,
    pub category: Option<Category>,
}

impl FilterState {
    /// Select `value` on `axis`. Returns false, leaving the state alone, when
    /// the value is not an option of that axis.
    pub fn set(&mut self, axis: FilterAxis, value: &str) -> bool {
        let is_all = value.eq_ignore_ascii_case(ALL);
        match axis {
            FilterAxis::Difficulty => match (is_all, Difficulty::from_str(value)) {
                (true, _) => self.difficulty = None,
                (false, Some(d)) => self.difficulty = Some(d),
                (false, None) => return false,
            },
            FilterAxis::Duration => match (is_all, Timeframe::from_str(value)) {
                (true, _) => self.duration = None,
                (false, Some(d)) => self.duration = Some(d),
                (false, None) => return false,
            },
            FilterAxis::Category => match (is_all, Category::from_str(value)) {
                (true, _) => self.category = None,
                (false, Some(c)) => self.category = Some(c),
                (false, None) => return false,
            },
        }
        true
    }

    /// The active option on `axis`
    pub fn value(&self, axis: FilterAxis) -> &'static str {
        match axis {
            FilterAxis::Difficulty => self.difficulty.map(|d| d.as_str()).unwrap_or(ALL),
            FilterAxis::Duration => self.duration.map(|d| d.as_str()).unwrap_or(ALL),
            FilterAxis::Category => self.category.map(|c| c.as_str()).unwrap_or(ALL),
        }
    }

    /// Index of the active option within `axis.options()`
    pub fn active_index(&self, axis: FilterAxis) -> usize {
        let active = self.value(axis);
        axis.options().iter().position(|o| *o == active).unwrap_or(0)
    }

    /// A roadmap passes when every axis is "all" or equals its tag
    pub fn matches(&self, roadmap: &Roadmap) -> bool {
        self.difficulty.map_or(true, |d| d == roadmap.difficulty)
            && self.duration.map_or(true, |d| d == roadmap.duration)
            && self.category.map_or(true, |c| c == roadmap.category)
    }
}
