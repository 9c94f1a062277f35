use leptos::prelude::*;

use crate::{
    content::{Glyph, Skill, SKILLS},
    interaction::Section,
    motion::{Entrance, Motion, CARD_AMOUNT_PCT, CARD_DURATION_MS},
};

use super::{
    about::SectionHeading,
    icon::{GlyphView, IconView},
    reveal::Reveal,
};

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="py-20 md:py-32 px-4 md:px-8 max-w-6xl mx-auto">
            <SectionHeading gradient="from-teal-400 to-indigo-500">
                "The Cognitive Arsenal: Architecting Intelligence"
            </SectionHeading>
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-8">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(index, skill)| view! { <SkillCard skill index /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn SkillCard(skill: &'static Skill, index: usize) -> impl IntoView {
    let treatment = skill.treatment();
    let motion = Motion::new(Entrance::Scale)
        .duration(CARD_DURATION_MS)
        .amount(CARD_AMOUNT_PCT)
        .staggered(index);

    view! {
        <Reveal motion>
            <div class=format!(
                "h-full p-6 rounded-xl shadow-lg border {} hover:shadow-2xl transition-all duration-300 group",
                treatment.card_class(),
            )>
                <div class="flex items-center mb-4">
                    <div class=format!(
                        "p-3 rounded-full {} mr-4 group-hover:scale-110 transition-transform duration-300",
                        treatment.chip_class(),
                    )>
                        <IconView icon=skill.icon />
                    </div>
                    <h3 class="text-2xl font-semibold text-white group-hover:text-teal-300 transition-colors duration-300">
                        {skill.name}
                    </h3>
                </div>
                <p class="text-gray-400 text-base">{skill.description}</p>
                {treatment
                    .has_badge()
                    .then(|| {
                        view! {
                            <div class="mt-4 text-sm font-bold text-yellow-400 flex items-center">
                                <GlyphView
                                    glyph=Glyph::Sparkles
                                    size="text-base"
                                    class="mr-2 animate-pulse text-yellow-400"
                                />
                                "GOD-TIER"
                            </div>
                        }
                    })}
            </div>
        </Reveal>
    }
}
