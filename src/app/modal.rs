use leptos::{ev, html, prelude::*};
use leptos_use::{use_document, use_event_listener, use_timeout_fn, UseTimeoutFnReturn};
use wasm_bindgen::JsCast;

use crate::{
    content::{Glyph, Project},
    interaction::DialogKey,
    motion::{Presence, EXIT_MS},
};

use super::{
    icon::{GlyphView, IconView},
    use_interaction,
};

/// Detail overlay for the selected project. Renders nothing while closed.
///
/// A closed project stays mounted for [`EXIT_MS`] so the overlay can animate out.
#[component]
pub fn ProjectModal() -> impl IntoView {
    let interaction = use_interaction();
    let close_button = NodeRef::<html::Button>::new();
    let presence = RwSignal::new(Presence::<&'static Project>::Absent);

    let UseTimeoutFnReturn {
        start: start_exit,
        stop: stop_exit,
        ..
    } = use_timeout_fn(
        move |_: ()| presence.update(|phase| *phase = phase.settle()),
        f64::from(EXIT_MS),
    );

    Effect::new(move |_| {
        let current = interaction.selected_project();
        presence.maybe_update(|phase| {
            let next = phase.follow(current);
            let changed = next != *phase;
            *phase = next;
            changed
        });
        if presence.with_untracked(|phase| phase.leaving().is_some()) {
            start_exit(());
        } else {
            stop_exit();
        }
    });

    let _ = use_event_listener(use_document(), ev::keydown, move |ev| {
        if !interaction.modal_open() {
            return;
        }
        match DialogKey::of(&ev.key()) {
            Some(DialogKey::Close) => interaction.close_detail(),
            Some(DialogKey::HoldFocus) => {
                ev.prevent_default();
                if let Some(button) = close_button.get_untracked() {
                    focus(&button);
                }
            }
            None => {}
        }
    });

    let displayed = Memo::new(move |_| {
        interaction
            .selected_project()
            .or_else(|| presence.with(|phase| phase.leaving()))
    });
    let leaving = Signal::derive(move || !interaction.modal_open());

    move || {
        displayed
            .get()
            .map(|project| view! { <ProjectDetail project leaving close_button /> })
    }
}

fn focus(element: &web_sys::HtmlElement) {
    if element.focus().is_err() {
        log::debug!("couldn't move focus");
    }
}

fn focused_element() -> Option<web_sys::HtmlElement> {
    document()
        .active_element()
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
}

#[component]
fn ProjectDetail(
    project: &'static Project,
    leaving: Signal<bool>,
    close_button: NodeRef<html::Button>,
) -> impl IntoView {
    let interaction = use_interaction();
    let close = move |_: ev::MouseEvent| interaction.close_detail();

    // focus returns to whatever opened the overlay, usually the project card
    let return_focus = StoredValue::new_local(None::<web_sys::HtmlElement>);
    let restore_focus = move || {
        if let Some(element) = return_focus.try_update_value(Option::take).flatten() {
            focus(&element);
        }
    };

    Effect::new(move |_| {
        let button = close_button.get();
        if leaving.get() {
            restore_focus();
        } else if let Some(button) = button {
            if return_focus.with_value(Option::is_none) {
                return_focus.set_value(focused_element());
            }
            focus(&button);
        }
    });
    on_cleanup(restore_focus);

    let phase = move |entering: &'static str, exiting: &'static str| {
        if leaving.get() {
            exiting
        } else {
            entering
        }
    };

    view! {
        <div class="relative z-[100]" role="dialog" aria-modal="true" aria-labelledby="project-modal-title">
            <div
                class=move || {
                    format!(
                        "fixed inset-0 bg-black/80 backdrop-blur-md {}",
                        phase("animate-fade-in", "animate-fade-out"),
                    )
                }
                aria-hidden="true"
            ></div>
            <div
                class=move || {
                    format!(
                        "fixed inset-0 flex items-center justify-center p-4 {}",
                        phase("", "pointer-events-none"),
                    )
                }
                on:click=close
            >
                <div
                    class=move || {
                        format!(
                            "w-full max-w-3xl max-h-[90vh] overflow-y-auto rounded-xl bg-zinc-900 border border-zinc-700 text-gray-200 shadow-2xl p-6 md:p-8 relative scrollbar-thin scrollbar-thumb-zinc-700 scrollbar-track-zinc-800 {}",
                            phase("animate-pop-in", "animate-pop-out"),
                        )
                    }
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        type="button"
                        node_ref=close_button
                        on:click=close
                        aria-label="Close"
                        class="absolute top-4 right-4 text-gray-400 hover:text-white transition-colors p-2 rounded-full hover:bg-zinc-700 z-10"
                    >
                        <GlyphView glyph=Glyph::X size="text-2xl" />
                    </button>
                    <h2
                        id="project-modal-title"
                        class="text-2xl md:text-3xl font-bold text-transparent bg-clip-text bg-gradient-to-r from-teal-400 to-blue-500 mb-4 flex items-center pr-10"
                    >
                        <span class="mr-3 flex-shrink-0">
                            <IconView icon=project.icon size="text-3xl" />
                        </span>
                        <span class="leading-tight">{project.title}</span>
                    </h2>
                    <p class="text-md md:text-lg text-gray-400 mb-6 border-b border-zinc-700 pb-4">
                        {project.subtitle}
                    </p>
                    <div class="space-y-6 text-sm md:text-base">
                        <DetailBlock
                            glyph=Glyph::MessageSquareText
                            heading="The Incantation (Challenge)"
                            color="text-teal-300"
                            body=project.challenge
                        />
                        <DetailBlock
                            glyph=Glyph::Layers
                            heading="The Ritual (Solution)"
                            color="text-indigo-300"
                            body=project.solution
                        />
                        <DetailBlock
                            glyph=Glyph::Sparkles
                            heading="The Manifestation (Outcome/Vision)"
                            color="text-purple-300"
                            body=project.outcome
                        />
                        {(!project.source_docs.is_empty())
                            .then(|| {
                                view! {
                                    <div class="text-xs md:text-sm text-gray-500 pt-4 border-t border-zinc-800">
                                        <h5 class="font-semibold text-gray-400 mb-1">
                                            "Source Documents:"
                                        </h5>
                                        <ul class="list-disc list-inside space-y-1">
                                            {project
                                                .source_docs
                                                .iter()
                                                .map(|doc| view! { <li>{*doc}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DetailBlock(
    glyph: Glyph,
    heading: &'static str,
    color: &'static str,
    body: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <h4 class=format!(
                "text-lg md:text-xl font-semibold {color} mb-2 flex items-center",
            )>
                <GlyphView glyph class="mr-2 flex-shrink-0" />
                {heading}
            </h4>
            <p class="text-gray-300 leading-relaxed">{body}</p>
        </div>
    }
}
