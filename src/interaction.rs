use std::{fmt, str::FromStr};

use crate::{content::Project, error::SiteError};

/// Which project, if any, the detail overlay is showing.
///
/// The overlay is open exactly when a project is selected, so both facts live in one value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailState {
    #[default]
    Closed,
    Open(&'static Project),
}

impl DetailState {
    /// Selects `project` and opens the overlay. Retargets if already open.
    pub fn open(&mut self, project: &'static Project) {
        log::debug!("opening project detail: {}", project.id);
        *self = DetailState::Open(project);
    }

    /// Closes the overlay and clears the selection.
    ///
    /// Returns whether anything changed, so callers can skip notifying on a repeated close.
    pub fn close(&mut self) -> bool {
        match self {
            DetailState::Closed => false,
            DetailState::Open(project) => {
                log::debug!("closing project detail: {}", project.id);
                *self = DetailState::Closed;
                true
            }
        }
    }

    pub fn selected_project(&self) -> Option<&'static Project> {
        match self {
            DetailState::Closed => None,
            DetailState::Open(project) => Some(*project),
        }
    }

    pub fn modal_open(&self) -> bool {
        matches!(self, DetailState::Open(_))
    }
}

/// Keys the open detail overlay handles itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKey {
    Close,
    /// Tab and Shift+Tab. The close button is the only stop inside the panel.
    HoldFocus,
}

impl DialogKey {
    /// Maps a `KeyboardEvent.key` value.
    pub fn of(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(DialogKey::Close),
            "Tab" => Some(DialogKey::HoldFocus),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Navigation order.
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Hero => "Hero",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Section {
    type Err = SiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| SiteError::UnknownSection(s.to_string()))
    }
}

/// Something that can scroll named anchors into view.
pub trait Viewport {
    type Anchor;

    fn anchor(&self, id: &str) -> Option<Self::Anchor>;

    /// Starts an animated scroll to `anchor`. Returns without waiting for it to finish.
    fn smooth_scroll(&self, anchor: &Self::Anchor);
}

/// Scrolls the element with id `section_id` into view, or does nothing if there is none.
pub fn navigate_to<V: Viewport>(viewport: &V, section_id: &str) {
    match viewport.anchor(section_id) {
        Some(anchor) => viewport.smooth_scroll(&anchor),
        None => log::debug!("no anchor to scroll to: {}", section_id),
    }
}

/// Latest pointer coordinates, in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorPosition {
    pub x: i32,
    pub y: i32,
}

impl CursorPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Inline style exposing the position as `--mouse-x` / `--mouse-y`.
    pub fn css_vars(&self) -> String {
        format!("--mouse-x: {}px; --mouse-y: {}px;", self.x, self.y)
    }
}

type Release = Box<dyn FnOnce() + Send + Sync>;

/// Holds the pointer subscription between an explicit attach and detach.
#[derive(Default)]
pub struct PointerTracker {
    release: Option<Release>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a live subscription. Any previous one is released first.
    pub fn attach(&mut self, release: impl FnOnce() + Send + Sync + 'static) {
        self.detach();
        self.release = Some(Box::new(release));
    }

    /// Releases the current subscription, if any.
    pub fn detach(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }

    pub fn is_attached(&self) -> bool {
        self.release.is_some()
    }
}

impl fmt::Debug for PointerTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerTracker")
            .field("attached", &self.is_attached())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;
    use std::{
        cell::RefCell,
        collections::HashSet,
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
    };

    struct FakeViewport {
        anchors: HashSet<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakeViewport {
        fn with_sections() -> Self {
            Self {
                anchors: Section::ALL.iter().map(|s| s.id()).collect(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl Viewport for FakeViewport {
        type Anchor = String;

        fn anchor(&self, id: &str) -> Option<Self::Anchor> {
            self.anchors.get(id).map(|a| a.to_string())
        }

        fn smooth_scroll(&self, anchor: &Self::Anchor) {
            self.scrolled.borrow_mut().push(anchor.clone());
        }
    }

    fn counting_release(counter: &Arc<AtomicUsize>) -> impl FnOnce() + Send + Sync + 'static {
        let counter = Arc::clone(counter);
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_initial_state_closed() {
        let state = DetailState::default();
        assert!(!state.modal_open());
        assert!(state.selected_project().is_none());
    }

    #[test]
    fn test_open_selects_every_project() {
        for project in PROJECTS {
            let mut state = DetailState::default();
            state.open(project);
            assert!(state.modal_open());
            assert!(std::ptr::eq(state.selected_project().unwrap(), project));
        }
    }

    #[test]
    fn test_open_while_open_retargets() {
        let mut state = DetailState::default();
        state.open(&PROJECTS[0]);
        state.open(&PROJECTS[3]);
        assert!(state.modal_open());
        assert_eq!(state.selected_project().map(|p| p.id), Some("godeye-ai"));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut state = DetailState::default();
        assert!(!state.close());
        assert_eq!(state, DetailState::Closed);

        state.open(&PROJECTS[1]);
        assert!(state.close());
        assert!(!state.close());
        assert_eq!(state, DetailState::Closed);
    }

    #[test]
    fn test_dialog_keys() {
        assert_eq!(DialogKey::of("Escape"), Some(DialogKey::Close));
        assert_eq!(DialogKey::of("Esc"), Some(DialogKey::Close));
        assert_eq!(DialogKey::of("Tab"), Some(DialogKey::HoldFocus));
        assert_eq!(DialogKey::of("Enter"), None);
        assert_eq!(DialogKey::of(" "), None);
        assert_eq!(DialogKey::of("escape"), None);
    }

    #[test]
    fn test_open_close_sequence() {
        // (open project index, or None for close)
        let script = [
            Some(0),
            None,
            None,
            Some(4),
            Some(7),
            None,
            Some(2),
            Some(2),
            None,
            Some(5),
        ];
        let mut state = DetailState::default();
        for last_open in script {
            match last_open {
                Some(i) => state.open(&PROJECTS[i]),
                None => {
                    state.close();
                }
            }
            assert_eq!(state.modal_open(), last_open.is_some());
            assert_eq!(state.selected_project().is_none(), !state.modal_open());
            assert_eq!(
                state.selected_project().map(|p| p.id),
                last_open.map(|i| PROJECTS[i].id)
            );
        }
    }

    #[test]
    fn test_navigate_to_known_section() {
        let viewport = FakeViewport::with_sections();
        navigate_to(&viewport, "projects");
        assert_eq!(*viewport.scrolled.borrow(), vec!["projects".to_string()]);
    }

    #[test]
    fn test_navigate_to_missing_anchor_is_noop() {
        let viewport = FakeViewport::with_sections();
        navigate_to(&viewport, "nonexistent");
        assert!(viewport.scrolled.borrow().is_empty());

        let empty = FakeViewport {
            anchors: HashSet::new(),
            scrolled: RefCell::new(Vec::new()),
        };
        navigate_to(&empty, "projects");
        assert!(empty.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_navigate_requests_do_not_coalesce() {
        let viewport = FakeViewport::with_sections();
        navigate_to(&viewport, "about");
        navigate_to(&viewport, "contact");
        assert_eq!(
            *viewport.scrolled.borrow(),
            vec!["about".to_string(), "contact".to_string()]
        );
    }

    #[test]
    fn test_section_ids_and_labels() {
        let ids = Section::ALL.map(|s| s.id());
        assert_eq!(ids, ["hero", "about", "skills", "projects", "contact"]);
        assert_eq!(Section::Hero.label(), "Hero");
        assert_eq!(Section::Projects.href(), "#projects");
        assert_eq!(Section::Skills.to_string(), "skills");
    }

    #[test]
    fn test_section_from_str() {
        assert_eq!("contact".parse::<Section>().unwrap(), Section::Contact);
        let err = "footer".parse::<Section>().unwrap_err();
        assert!(matches!(err, SiteError::UnknownSection(ref s) if s == "footer"));
        assert_eq!(err.to_string(), "unknown section: footer");
    }

    #[test]
    fn test_cursor_css_vars() {
        assert_eq!(
            CursorPosition::default().css_vars(),
            "--mouse-x: 0px; --mouse-y: 0px;"
        );
        assert_eq!(
            CursorPosition::new(120, -4).css_vars(),
            "--mouse-x: 120px; --mouse-y: -4px;"
        );
    }

    #[test]
    fn test_tracker_detach_releases_once() {
        let released = Arc::new(AtomicUsize::new(0));
        let mut tracker = PointerTracker::new();
        assert!(!tracker.is_attached());

        tracker.attach(counting_release(&released));
        assert!(tracker.is_attached());

        tracker.detach();
        tracker.detach();
        assert!(!tracker.is_attached());
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_tracker_reattach_releases_previous() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut tracker = PointerTracker::new();

        tracker.attach(counting_release(&first));
        tracker.attach(counting_release(&second));
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 0);

        tracker.detach();
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }
}
