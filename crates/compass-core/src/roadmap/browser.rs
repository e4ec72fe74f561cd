use super::{Catalog, FilterAxis, FilterState, Module, Roadmap};

/// Destination page the "start" action links to
pub const DEFAULT_START_BASE: &str = "careers.html";

/// Preview dialog state. At most one roadmap is shown at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Open(String),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        matches!(self, Modal::Open(_))
    }

    pub fn roadmap_id(&self) -> Option<&str> {
        match self {
            Modal::Open(id) => Some(id.as_str()),
            Modal::Closed => None,
        }
    }
}

/// Everything the preview dialog displays for one roadmap
#[derive(Debug, Clone)]
pub struct Preview<'a> {
    pub title: String,
    pub start_target: String,
    pub roadmap: &'a Roadmap,
}

impl<'a> Preview<'a> {
    /// Modules with their 1-based position, in catalog order
    pub fn modules(&self) -> impl Iterator<Item = (usize, &'a Module)> + 'a {
        let roadmap = self.roadmap;
        roadmap.modules.iter().enumerate().map(|(i, m)| (i + 1, m))
    }
}

pub struct RoadmapBrowser {
    catalog: Catalog,
    filters: FilterState,
    modal: Modal,
    start_base: String,
}

impl RoadmapBrowser {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_start_base(catalog, DEFAULT_START_BASE)
    }

    pub fn with_start_base(catalog: Catalog, start_base: impl Into<String>) -> Self {
        Self {
            catalog,
            filters: FilterState::default(),
            modal: Modal::Closed,
            start_base: start_base.into(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    /// Update one filter axis. Unknown values are ignored.
    pub fn set_filter(&mut self, axis: FilterAxis, value: &str) -> bool {
        let changed = self.filters.set(axis, value);
        if changed {
            tracing::debug!(
                axis = axis.as_str(),
                value,
                visible = self.visible().len(),
                "roadmap filter applied"
            );
        }
        changed
    }

    /// Move the active option on `axis` by `step`, wrapping around
    pub fn cycle_filter(&mut self, axis: FilterAxis, step: isize) -> bool {
        let options = axis.options();
        let len = options.len() as isize;
        let current = self.filters.active_index(axis) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        self.set_filter(axis, options[next])
    }

    pub fn is_visible(&self, roadmap: &Roadmap) -> bool {
        self.filters.matches(roadmap)
    }

    /// Cards that pass the current filters, in catalog order
    pub fn visible(&self) -> Vec<&Roadmap> {
        self.catalog
            .roadmaps()
            .iter()
            .filter(|r| self.filters.matches(r))
            .collect()
    }

    /// Open the preview for `roadmap_id`. Unknown ids leave the dialog as it was.
    pub fn show_preview(&mut self, roadmap_id: &str) -> bool {
        if self.catalog.get(roadmap_id).is_none() {
            return false;
        }
        tracing::debug!(roadmap = roadmap_id, "opening roadmap preview");
        self.modal = Modal::Open(roadmap_id.to_string());
        true
    }

    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Background scrolling is suspended while the dialog is open
    pub fn is_scroll_locked(&self) -> bool {
        self.modal.is_open()
    }

    pub fn start_target(&self, roadmap_id: &str) -> String {
        format!("{}?path={}", self.start_base, roadmap_id)
    }

    /// Content of the open dialog, if any
    pub fn preview(&self) -> Option<Preview<'_>> {
        let roadmap = self.catalog.get(self.modal.roadmap_id()?)?;
        Some(Preview {
            title: format!("{} - Preview", roadmap.title),
            start_target: self.start_target(&roadmap.id),
            roadmap,
        })
    }
}
