use leptos::prelude::*;

use crate::interaction::Section;

use super::use_interaction;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-gradient-to-b from-black/80 to-transparent p-4 flex justify-center text-sm">
            <ul class="flex space-x-6">
                {Section::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <li>
                                <SectionLink
                                    section
                                    class="text-gray-400 hover:text-teal-400 transition-colors duration-300 relative group"
                                >
                                    {section.label()}
                                    <span class="absolute left-0 bottom-0 w-full h-0.5 bg-teal-400 scale-x-0 group-hover:scale-x-100 transition-transform duration-300 origin-left"></span>
                                </SectionLink>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// An in-page link that smooth-scrolls to `section` instead of jumping.
#[component]
pub fn SectionLink(section: Section, class: &'static str, children: Children) -> impl IntoView {
    let interaction = use_interaction();
    view! {
        <a
            href=section.href()
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                interaction.navigate_to(section.id());
            }
        >
            {children()}
        </a>
    }
}
