use leptos::{either::Either, prelude::*};

use crate::{
    config::{copyright_year, SITE},
    content::Glyph,
    interaction::Section,
    motion::{Entrance, Motion},
};

use super::{about::SectionHeading, icon::GlyphView, nav::SectionLink, reveal::Reveal};

const DIALOGUE_BUTTON_CLASS: &str = "relative inline-block px-8 py-3 text-lg font-semibold rounded-full overflow-hidden bg-gradient-to-br from-teal-500 to-blue-600 text-white shadow-lg transform transition-all duration-300 hover:scale-105";

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section
            id=Section::Contact.id()
            class="py-20 md:py-32 px-4 md:px-8 max-w-4xl mx-auto text-center"
        >
            <SectionHeading gradient="from-sky-400 to-indigo-500">
                "Open a Quantum Channel: Let's Forge the Future"
            </SectionHeading>
            <Reveal motion=Motion::new(Entrance::FadeUp).delay(200)>
                <p class="text-lg md:text-xl text-gray-300 mb-12">
                    "I'm not seeking a job. I'm seeking minds ready to co-evolve with AGI. If your vision aligns with architecting new realities, connect."
                </p>
            </Reveal>
            <div class="flex justify-center space-x-4 md:space-x-6 mb-12">
                <SocialLink
                    href=SITE.linkedin_url.to_string()
                    label="LinkedIn Profile"
                    glyph=Glyph::Linkedin
                    tint="text-blue-400"
                    glow="bg-blue-500"
                    delay_ms=300
                />
                <SocialLink
                    href=SITE.github_url.to_string()
                    label="GitHub Profile"
                    glyph=Glyph::Github
                    tint="text-gray-300"
                    glow="bg-gray-500"
                    delay_ms=400
                />
                <SocialLink
                    href=SITE.mailto()
                    label="Email Contact"
                    glyph=Glyph::Mail
                    tint="text-purple-400"
                    glow="bg-purple-500"
                    delay_ms=500
                />
            </div>
            <Reveal motion=Motion::new(Entrance::FadeUp).delay(600)>
                <InitiateDialogue />
            </Reveal>
        </section>
    }
}

#[component]
fn SocialLink(
    href: String,
    label: &'static str,
    glyph: Glyph,
    tint: &'static str,
    glow: &'static str,
    delay_ms: u32,
) -> impl IntoView {
    // mailto links stay in the current tab
    let external = href.starts_with("http");
    view! {
        <Reveal motion=Motion::new(Entrance::Scale).duration(500).delay(delay_ms)>
            <a
                href=href
                target=external.then_some("_blank")
                rel=external.then_some("noopener noreferrer")
                aria-label=label
                class="block p-3 md:p-4 rounded-full bg-zinc-800 border border-zinc-700 hover:bg-zinc-700 transition-colors duration-300 group relative overflow-hidden"
            >
                <GlyphView
                    glyph
                    size="text-3xl"
                    class=format!("{tint} group-hover:scale-110 transition-transform duration-300")
                />
                <div class=format!(
                    "absolute inset-0 {glow} opacity-0 group-hover:opacity-20 transition-opacity duration-300",
                )></div>
            </a>
        </Reveal>
    }
}

/// Opens the configured booking page, or explains that there isn't one yet.
#[component]
fn InitiateDialogue() -> impl IntoView {
    let label = view! {
        <span class="relative z-10">"Initiate Dialogue"</span>
        <div class="absolute inset-0 bg-gradient-to-br from-teal-400 to-blue-500 opacity-0 hover:opacity-100 transition-opacity duration-300"></div>
    };
    match SITE.booking_url {
        Some(url) => Either::Left(view! {
            <a href=url target="_blank" rel="noopener noreferrer" class=DIALOGUE_BUTTON_CLASS>
                {label}
            </a>
        }),
        None => Either::Right(view! {
            <button
                class=DIALOGUE_BUTTON_CLASS
                on:click=|_| {
                    if window()
                        .alert_with_message(
                            "Initiate Dialogue functionality would link to a calendar or specific form.",
                        )
                        .is_err()
                    {
                        log::warn!("couldn't show booking alert");
                    }
                }
            >
                {label}
            </button>
        }),
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let link_class = "hover:text-teal-400 transition-colors";
    view! {
        <footer class="py-8 px-4 text-center text-gray-500 text-sm border-t border-zinc-800">
            <p>
                {format!(
                    "© {} {}. Architecting the Post-Human Future.",
                    copyright_year(),
                    SITE.owner,
                )}
            </p>
            <div class="flex justify-center space-x-4 mt-2">
                <SectionLink section=Section::Hero class=link_class>
                    "Home"
                </SectionLink>
                <SectionLink section=Section::About class=link_class>
                    "About"
                </SectionLink>
                <SectionLink section=Section::Projects class=link_class>
                    "Projects"
                </SectionLink>
            </div>
        </footer>
    }
}
