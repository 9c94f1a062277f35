use leptos::prelude::*;

use crate::{
    config::SITE,
    interaction::Section,
    motion::{Entrance, Motion},
};

use super::{reveal::Reveal, use_interaction};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section
            id=Section::Hero.id()
            class="relative h-screen flex flex-col items-center justify-center text-center overflow-hidden px-4"
        >
            <Reveal motion=Motion::new(Entrance::FadeUp).duration(1000).delay(500) class="z-10 max-w-4xl">
                <h1 class="text-5xl md:text-7xl font-extrabold text-white leading-tight mb-4 tracking-tight">
                    <Reveal motion=Motion::new(Entrance::Scale).duration(1000).delay(700)>
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-teal-400 via-sky-500 to-indigo-600">
                            "I Don't Want a Job."
                        </span>
                    </Reveal>
                    <Reveal motion=Motion::new(Entrance::Scale).duration(1000).delay(900)>
                        "I Want to Evolve with AI."
                    </Reveal>
                </h1>
                <Reveal motion=Motion::new(Entrance::FadeUp).duration(1000).delay(1200)>
                    <p class="text-lg md:text-2xl text-gray-300 mb-8">
                        {format!("{}: {}", SITE.owner, SITE.tagline)}
                    </p>
                </Reveal>
                <div class="flex flex-col sm:flex-row justify-center space-y-4 sm:space-y-0 sm:space-x-6">
                    <Reveal motion=Motion::new(Entrance::Scale).duration(500).delay(1500)>
                        <HeroButton
                            target=Section::About
                            gradient="from-teal-500 to-blue-600"
                            hover="from-teal-400 to-blue-500"
                        >
                            "Unveil the Blueprint"
                        </HeroButton>
                    </Reveal>
                    <Reveal motion=Motion::new(Entrance::Scale).duration(500).delay(1600)>
                        <HeroButton
                            target=Section::Contact
                            gradient="from-purple-600 to-indigo-700"
                            hover="from-purple-500 to-indigo-600"
                        >
                            "Forge a Connection"
                        </HeroButton>
                    </Reveal>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn HeroButton(
    target: Section,
    gradient: &'static str,
    hover: &'static str,
    children: Children,
) -> impl IntoView {
    let interaction = use_interaction();
    view! {
        <button
            class=format!(
                "relative px-8 py-3 text-lg font-semibold rounded-full overflow-hidden bg-gradient-to-br {gradient} text-white shadow-lg transform transition-all duration-300 hover:scale-105",
            )
            on:click=move |_| interaction.navigate_to(target.id())
        >
            <span class="relative z-10">{children()}</span>
            <div class=format!(
                "absolute inset-0 bg-gradient-to-br {hover} opacity-0 hover:opacity-100 transition-opacity duration-300",
            )></div>
        </button>
    }
}
