use leptos::{ev, prelude::*};
use leptos_use::{use_document, use_event_listener};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::{
    content::Project,
    interaction::{self, CursorPosition, DetailState, PointerTracker, Viewport},
};

/// Page-wide interaction state, shared through context.
#[derive(Debug, Clone, Copy)]
pub struct Interaction {
    detail: RwSignal<DetailState>,
}

impl Interaction {
    pub fn new() -> Self {
        Self {
            detail: RwSignal::new(DetailState::default()),
        }
    }

    pub fn open_detail(&self, project: &'static Project) {
        self.detail.update(|detail| detail.open(project));
    }

    pub fn close_detail(&self) {
        self.detail.maybe_update(|detail| detail.close());
    }

    pub fn selected_project(&self) -> Option<&'static Project> {
        self.detail.with(|detail| detail.selected_project())
    }

    pub fn modal_open(&self) -> bool {
        self.detail.with(|detail| detail.modal_open())
    }

    pub fn navigate_to(&self, section_id: &str) {
        interaction::navigate_to(&DocumentViewport, section_id);
    }
}

impl Default for Interaction {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_interaction() -> Interaction {
    expect_context::<Interaction>()
}

/// The live document. Only usable in the browser.
struct DocumentViewport;

impl Viewport for DocumentViewport {
    type Anchor = web_sys::Element;

    fn anchor(&self, id: &str) -> Option<Self::Anchor> {
        document().get_element_by_id(id)
    }

    fn smooth_scroll(&self, anchor: &Self::Anchor) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        anchor.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Follows the pointer for the lifetime of the calling component.
///
/// The `mousemove` listener is attached here and detached when the owner is cleaned up.
pub fn use_cursor_tracking() -> ReadSignal<CursorPosition> {
    let (cursor, set_cursor) = signal(CursorPosition::default());
    let mut tracker = PointerTracker::new();

    let release = use_event_listener(use_document(), ev::mousemove, move |ev| {
        set_cursor.set(CursorPosition::new(ev.client_x(), ev.client_y()));
    });
    tracker.attach(release);

    on_cleanup(move || {
        let mut tracker = tracker;
        tracker.detach();
    });

    cursor
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn test_interaction_open_close() {
        let owner = Owner::new();
        owner.with(|| {
            let interaction = Interaction::new();
            assert!(!interaction.modal_open());

            interaction.open_detail(&PROJECTS[5]);
            assert!(interaction.modal_open());
            assert_eq!(interaction.selected_project().map(|p| p.id), Some("069-book"));

            interaction.open_detail(&PROJECTS[6]);
            assert_eq!(interaction.selected_project().map(|p| p.id), Some("neuro-nav"));

            interaction.close_detail();
            interaction.close_detail();
            assert!(!interaction.modal_open());
            assert!(interaction.selected_project().is_none());
        });
    }
}
