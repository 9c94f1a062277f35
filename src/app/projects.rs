use leptos::prelude::*;

use crate::{
    content::{Glyph, Project, PROJECTS},
    interaction::Section,
    motion::{Entrance, Motion, CARD_AMOUNT_PCT, CARD_DURATION_MS},
};

use super::{
    about::SectionHeading,
    icon::{GlyphView, IconView},
    reveal::Reveal,
    use_interaction,
};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-20 md:py-32 px-4 md:px-8 max-w-6xl mx-auto">
            <SectionHeading gradient="from-purple-400 to-sky-500">
                "Universes Manifested: Blueprints for Tomorrow"
            </SectionHeading>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard project index /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let interaction = use_interaction();
    let motion = Motion::new(Entrance::Scale)
        .duration(CARD_DURATION_MS)
        .amount(CARD_AMOUNT_PCT)
        .staggered(index);

    view! {
        <Reveal motion>
            <div
                class="h-full relative group overflow-hidden rounded-xl shadow-lg bg-zinc-800 border border-zinc-700 cursor-pointer"
                role="button"
                tabindex="0"
                aria-haspopup="dialog"
                on:click=move |_| interaction.open_detail(project)
                on:keydown=move |ev| {
                    if ev.key() == "Enter" || ev.key() == " " {
                        ev.prevent_default();
                        interaction.open_detail(project);
                    }
                }
            >
                <div class="w-full h-48 bg-gray-900 flex items-center justify-center relative overflow-hidden">
                    <img
                        src=project.cover_url()
                        alt=project.cover_alt()
                        loading="lazy"
                        class="w-full h-full object-cover group-hover:scale-110 transition-transform duration-500"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/80 to-transparent flex items-end p-4">
                        <h3 class="text-xl font-bold text-white leading-tight">{project.title}</h3>
                    </div>
                    <div class="absolute inset-0 bg-gradient-to-br from-teal-500/30 to-purple-500/30 opacity-0 group-hover:opacity-100 transition-opacity duration-500 flex items-center justify-center">
                        <div class="p-4 rounded-full bg-white/20 backdrop-blur-sm">
                            <IconView icon=project.icon size="text-3xl" />
                        </div>
                    </div>
                </div>
                <div class="p-6">
                    <p class="text-gray-400 text-sm mb-4 h-16 overflow-hidden text-ellipsis">
                        {project.subtitle}
                    </p>
                    <span class="flex items-center text-teal-400 group-hover:text-teal-300 transition-colors duration-300 font-semibold">
                        "Explore Blueprint"
                        <GlyphView glyph=Glyph::ArrowOutUpRight size="text-base" class="ml-2" />
                    </span>
                </div>
            </div>
        </Reveal>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::app::Interaction;

    fn render() -> String {
        Owner::new().with(|| {
            provide_context(Interaction::new());
            view! { <ProjectsSection /> }.to_html()
        })
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render(), render());
    }

    #[test]
    fn test_one_card_per_project() {
        let html = render();
        assert_eq!(html.matches("aria-haspopup=\"dialog\"").count(), PROJECTS.len());
        assert_eq!(html.matches("Explore Blueprint").count(), PROJECTS.len());
        for project in PROJECTS {
            assert!(html.contains(&project.cover_url().replace('&', "&amp;")));
        }
    }

    #[test]
    fn test_projects_render_in_order() {
        let html = render();
        let positions = PROJECTS
            .iter()
            .map(|p| {
                html.find(&p.title.replace('&', "&amp;"))
                    .expect("project title should be rendered")
            })
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_cards_start_hidden_and_staggered() {
        let html = render();
        assert!(html.contains("opacity-0 scale-90"));
        assert!(html.contains("transition-delay: 0ms;"));
        assert!(html.contains("transition-delay: 700ms;"));
    }
}
