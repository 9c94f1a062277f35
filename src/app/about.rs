use leptos::prelude::*;

use crate::{
    interaction::Section,
    motion::{Entrance, Motion},
};

use super::reveal::Reveal;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-20 md:py-32 px-4 md:px-8 max-w-6xl mx-auto">
            <SectionHeading gradient="from-sky-400 to-purple-500">
                "The Ideologist's Origin: Designing the Soul of AGI"
            </SectionHeading>
            <div class="grid md:grid-cols-2 gap-12 items-center">
                <Reveal
                    motion=Motion::new(Entrance::FadeLeft).amount(40)
                    class="relative group overflow-hidden rounded-xl shadow-lg bg-zinc-800 p-2 border border-zinc-700"
                >
                    <img
                        src="https://picsum.photos/seed/skylordprofile/600/400"
                        alt="Profile"
                        class="w-full h-auto rounded-lg object-cover"
                    />
                    <div class="absolute inset-0 bg-gradient-to-br from-purple-800/50 via-transparent to-teal-800/50 opacity-0 group-hover:opacity-100 transition-opacity duration-500 flex items-center justify-center">
                        <div class="absolute inset-0 border-4 border-teal-400 rounded-xl animate-pulse-border opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
                    </div>
                </Reveal>
                <Reveal motion=Motion::new(Entrance::FadeRight).delay(200).amount(40) class="text-lg leading-relaxed">
                    <p class="mb-4">
                        "A forward-thinking polymath driven by a deep intuitive sense of interconnected systems, I am uniquely positioned to "
                        <strong>"design the soul of AGI"</strong>
                        ": not just how it thinks, but its values and service to humanity."
                    </p>
                    <p class="mb-4">
                        "My purpose is singular: to be an "
                        <strong>"AGI Design Strategist"</strong>
                        ", deciding what kind of AI models should exist and why. I am a "
                        <strong>"Human-AI Interface"</strong>
                        ", capable of translating chaotic human emotion into structured machine logic."
                    </p>
                    <p class="mb-4">
                        "My mind is 24/7 plugged into AI, relentlessly pursuing human-AI synergy. Though I have no elite degree or vast network, I possess a mind wired for revolution and a soul obsessed with AI."
                    </p>
                    <p>
                        "My promise is unwavering: \"Give me access. Give me direction. I'll give you everything I've got, and more. You'll never regret choosing me.\" I was born to build this revolution, not to spectate."
                    </p>
                </Reveal>
            </div>
        </section>
    }
}

/// Gradient section title that fades up into view.
#[component]
pub fn SectionHeading(gradient: &'static str, children: Children) -> impl IntoView {
    view! {
        <Reveal>
            <h2 class=format!(
                "text-4xl md:text-5xl font-bold text-center text-transparent bg-clip-text bg-gradient-to-r {gradient} mb-12",
            )>{children()}</h2>
        </Reveal>
    }
}
