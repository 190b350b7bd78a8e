//! Panel State - everything the error frequency panel renders comes from here
//!
//! The fetched list is read-only once loaded. The only mutations are fetch
//! completion, row selection, popup dismissal and navigation.

use chrono::{DateTime, Local};
use errboard_common::{rank_by_count, ErrorGroup, FetchError};
use tracing::{debug, info, warn};

/// Where the row area is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// Fetch in flight
    Loading,
    /// Ranked copy of the fetched groups (may be empty)
    Loaded(Vec<ErrorGroup>),
    /// Fetch or decode failed; the reason is shown inline
    Failed(String),
}

/// How the detail popup was dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    CloseAction,
    OutsideClick,
}

#[derive(Debug, Clone)]
pub struct PanelState {
    load: LoadState,

    /// Group shown in the detail popup; the popup is open iff this is set
    selected: Option<ErrorGroup>,

    /// Highlighted row in the ranked list
    pub cursor: usize,

    /// First ranked row visible in the table viewport
    pub table_offset: usize,

    /// Line offset inside the detail popup
    pub popup_scroll: u16,

    /// Whether help overlay is shown
    pub show_help: bool,

    /// Base URL shown in the header
    pub api_url: String,

    /// When the current data arrived
    pub fetched_at: Option<DateTime<Local>>,

    generation: u64,
    mounted: bool,
}

impl PanelState {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            load: LoadState::Loading,
            selected: None,
            cursor: 0,
            table_offset: 0,
            popup_scroll: 0,
            show_help: false,
            api_url: api_url.into(),
            fetched_at: None,
            generation: 0,
            mounted: false,
        }
    }

    /// Start a new mount: back to loading, nothing selected.
    ///
    /// Returns the generation the mount's fetch result must carry.
    pub fn begin_mount(&mut self) -> u64 {
        self.generation += 1;
        self.mounted = true;
        self.load = LoadState::Loading;
        self.selected = None;
        self.cursor = 0;
        self.table_offset = 0;
        self.popup_scroll = 0;
        self.fetched_at = None;
        self.generation
    }

    /// Mark the panel gone; later fetch results are discarded
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }

    /// Apply the completed fetch of mount `generation`.
    ///
    /// Returns false when the result was discarded (stale mount, unmounted
    /// panel, or cancelled fetch).
    pub fn apply_fetch(
        &mut self,
        generation: u64,
        result: Result<Vec<ErrorGroup>, FetchError>,
    ) -> bool {
        if !self.mounted || generation != self.generation {
            debug!(
                "Discarding fetch result for generation {} (current {}, mounted {})",
                generation, self.generation, self.mounted
            );
            return false;
        }

        match result {
            Ok(groups) => {
                info!("Loaded {} error groups", groups.len());
                self.load = LoadState::Loaded(rank_by_count(&groups));
                self.fetched_at = Some(Local::now());
            }
            Err(FetchError::Cancelled) => return false,
            Err(e) => {
                warn!("Could not load error groups: {}", e);
                self.load = LoadState::Failed(e.to_string());
            }
        }

        self.cursor = 0;
        self.table_offset = 0;
        true
    }

    /// Ranked groups to render; empty unless loaded
    pub fn rows(&self) -> &[ErrorGroup] {
        match &self.load {
            LoadState::Loaded(groups) => groups,
            _ => &[],
        }
    }

    pub fn selected(&self) -> Option<&ErrorGroup> {
        self.selected.as_ref()
    }

    pub fn popup_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Show `group` in the detail popup. Reselecting the same group is a no-op.
    pub fn select(&mut self, group: ErrorGroup) {
        if self.selected.as_ref() == Some(&group) {
            return;
        }
        debug!("Selected error group {}", group.id);
        self.selected = Some(group);
        self.popup_scroll = 0;
    }

    /// Select the ranked row at `index`; out of range is a no-op
    pub fn select_row(&mut self, index: usize) {
        if let Some(group) = self.rows().get(index).cloned() {
            self.cursor = index;
            self.select(group);
        }
    }

    pub fn select_highlighted(&mut self) {
        self.select_row(self.cursor);
    }

    /// Close the popup and forget the selection, whatever was selected
    pub fn dismiss_popup(&mut self, reason: DismissReason) {
        if let Some(group) = self.selected.take() {
            debug!("Dismissed error group {} ({:?})", group.id, reason);
        }
        self.popup_scroll = 0;
    }

    /// Move the highlight by `delta` rows, clamped to the list
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.rows().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = self.cursor as isize + delta;
        self.cursor = target.clamp(0, len as isize - 1) as usize;
    }

    pub fn cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_to_end(&mut self) {
        self.cursor = self.rows().len().saturating_sub(1);
    }

    pub fn scroll_popup(&mut self, delta: i32) {
        self.popup_scroll = if delta < 0 {
            self.popup_scroll.saturating_sub(delta.unsigned_abs() as u16)
        } else {
            self.popup_scroll.saturating_add(delta as u16)
        };
    }

    /// Adjust the table offset so the cursor stays within `visible_rows`
    pub fn sync_viewport(&mut self, visible_rows: usize) {
        let len = self.rows().len();
        let visible = visible_rows.max(1);
        self.cursor = self.cursor.min(len.saturating_sub(1));

        if self.cursor < self.table_offset {
            self.table_offset = self.cursor;
        } else if self.cursor >= self.table_offset + visible {
            self.table_offset = self.cursor + 1 - visible;
        }
        self.table_offset = self.table_offset.min(len.saturating_sub(visible));
    }
}
