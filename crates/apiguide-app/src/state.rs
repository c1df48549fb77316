//! Application state (Model in TEA pattern)

use apiguide_core::{Catalog, Section};

use crate::config::Settings;
use crate::labs::{EndpointLab, JsonExplainerState, LabKind, RestSimulator, StatusLab};

/// Lifecycle phase of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Section content with lab key bindings
    #[default]
    Normal,
    /// Section menu popup is open and captures navigation keys
    Menu,
}

/// Which section is shown, how far it is scrolled, and the menu cursor.
///
/// `content_height` and `viewport_height` are written back by the renderer
/// after each frame, the same way a stateful widget tracks its scroll.
#[derive(Debug, Clone, Default)]
pub struct NavState {
    current: Section,
    scroll: u16,
    content_height: u16,
    viewport_height: u16,
    menu_cursor: usize,
}

impl NavState {
    pub fn new(start: Section) -> Self {
        Self {
            current: start,
            ..Self::default()
        }
    }

    pub fn current(&self) -> Section {
        self.current
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    /// Switch sections, returning the one that was left. Scroll resets.
    pub fn go_to(&mut self, section: Section) -> Section {
        let previous = self.current;
        self.current = section;
        self.scroll = 0;
        previous
    }

    pub fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport_height)
    }

    /// Record the rendered geometry and clamp the scroll offset to it
    pub fn set_viewport(&mut self, content_height: u16, viewport_height: u16) {
        self.content_height = content_height;
        self.viewport_height = viewport_height;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.scroll = u16::try_from(next).unwrap_or(0);
    }

    pub fn page_down(&mut self) {
        self.scroll_by(i32::from(self.viewport_height.max(1)));
    }

    pub fn page_up(&mut self) {
        self.scroll_by(-i32::from(self.viewport_height.max(1)));
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    /// Reading progress through the whole guide, 0.0 at the top of the first
    /// section and 1.0 at the bottom of the last
    pub fn progress(&self) -> f64 {
        let count = Section::ALL.len() as f64;
        let within = match self.max_scroll() {
            0 => {
                if self.current.index() + 1 == Section::ALL.len() {
                    1.0
                } else {
                    0.0
                }
            }
            max => f64::from(self.scroll) / f64::from(max),
        };
        ((self.current.index() as f64 + within) / count).clamp(0.0, 1.0)
    }

    /// Place the menu cursor on the current section (or the last entry when
    /// the current page is not in the menu)
    pub fn open_menu(&mut self) {
        self.menu_cursor = Section::NAV
            .iter()
            .position(|s| *s == self.current)
            .unwrap_or(Section::NAV.len() - 1);
    }

    pub fn menu_up(&mut self) {
        self.menu_cursor = self.menu_cursor.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        if self.menu_cursor + 1 < Section::NAV.len() {
            self.menu_cursor += 1;
        }
    }

    pub fn menu_selection(&self) -> Section {
        Section::NAV
            .get(self.menu_cursor)
            .copied()
            .unwrap_or_default()
    }
}

/// Complete application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub catalog: Catalog,
    pub settings: Settings,
    pub nav: NavState,
    pub rest: RestSimulator,
    pub endpoint: EndpointLab,
    pub status: StatusLab,
    pub json: JsonExplainerState,
    /// Spinner frame counter, advanced on every tick
    pub animation_frame: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Built-in catalog with default settings
    pub fn new() -> Self {
        Self::with_config(Catalog::builtin(), Settings::default())
    }

    pub fn with_config(catalog: Catalog, settings: Settings) -> Self {
        let rest = RestSimulator::new(&catalog);
        let nav = NavState::new(settings.behavior.start_section);
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            catalog,
            settings,
            nav,
            rest,
            endpoint: EndpointLab::new(),
            status: StatusLab::new(),
            json: JsonExplainerState::default(),
            animation_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn current_section(&self) -> Section {
        self.nav.current()
    }

    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// Cancel a lab's pending reveal. Returns whether one was in flight.
    pub fn cancel_lab(&mut self, lab: LabKind) -> bool {
        match lab {
            LabKind::Rest => self.rest.cancel(),
            LabKind::Status => self.status.cancel(),
        }
    }
}

/// The lab a section hosts, if it hosts a timed one
pub fn lab_for_section(section: Section) -> Option<LabKind> {
    match section {
        Section::Rest => Some(LabKind::Rest),
        Section::Status => Some(LabKind::Status),
        _ => None,
    }
}
