use leptos::prelude::*;

use super::{controller::use_navigation, SectionHeading};
use crate::{
    content::{Skill, SKILLS},
    nav::Section,
};

#[component]
pub fn SkillsSection() -> impl IntoView {
    let nav = use_navigation();

    view! {
        <section
            id=Section::Skills.id()
            node_ref=nav.node_ref(Section::Skills)
            class="py-24"
        >
            <div class="mx-auto max-w-5xl px-4 sm:px-6 lg:px-8 section-content">
                <SectionHeading text="Skills" />
                <div class="grid grid-cols-1 md:grid-cols-2 gap-x-12 gap-y-8">
                    {SKILLS.iter().map(|skill| view! { <SkillBar skill /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    view! {
        <div>
            <div class="flex justify-between mb-2">
                <h3 class="font-medium">{skill.name}</h3>
                <span class="text-sm text-muted">{skill.level_label()}</span>
            </div>
            <div class="h-2.5 w-full rounded-full bg-muted/20 overflow-hidden">
                // fill animates from 0 to the inline width, see `.skill-fill`
                <div
                    class=format!("skill-fill h-full rounded-full {}", skill.accent.bg_class())
                    style=skill.bar_style()
                ></div>
            </div>
        </div>
    }
}
