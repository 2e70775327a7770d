use leptos::prelude::*;

use super::{controller::use_navigation, SectionHeading};
use crate::{
    content::{Role, EDUCATION, EXPERIENCE},
    nav::Section,
};

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let nav = use_navigation();

    view! {
        <section
            id=Section::Experience.id()
            node_ref=nav.node_ref(Section::Experience)
            class="py-24"
        >
            <div class="mx-auto max-w-5xl px-4 sm:px-6 lg:px-8 section-content">
                <SectionHeading text="Experience" />
                <div class="relative">
                    <div class="timeline-line absolute left-6 md:left-1/2 top-0 bottom-0 w-0.5 bg-muted/30"></div>
                    <div class="space-y-12">
                        {EXPERIENCE.iter().map(|role| view! { <TimelineItem role /> }).collect_view()}
                    </div>
                </div>
                <Education />
            </div>
        </section>
    }
}

#[component]
fn TimelineItem(role: &'static Role) -> impl IntoView {
    view! {
        <div class="relative grid grid-cols-[3rem_1fr] md:grid-cols-[1fr_3rem_1fr] gap-4 items-start">
            <div class="hidden md:block text-right pr-4">
                <RoleHeading role />
            </div>
            <div class=format!(
                "z-10 flex items-center justify-center w-12 h-12 rounded-full glow-effect {}",
                role.marker.class(),
            )>{role.marker.icon()}</div>
            <div class="experience-card glass-effect p-6 rounded-lg border border-muted/30">
                <div class="md:hidden mb-4">
                    <RoleHeading role />
                </div>
                <ul class="list-disc list-inside space-y-2 text-sm">
                    {role.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
fn RoleHeading(role: &'static Role) -> impl IntoView {
    view! {
        <h3 class="text-lg font-bold">{role.title}</h3>
        <p class="text-cyan">{role.company}</p>
        <p class="text-sm text-muted">{role.duration}</p>
    }
}

#[component]
fn Education() -> impl IntoView {
    view! {
        <div class="mt-16 text-center">
            <h3 class="text-2xl font-bold mb-6">"Education"</h3>
            <div class="inline-block glass-effect px-8 py-6 rounded-lg border border-muted/30">
                <p class="text-lg font-bold">{EDUCATION.degree}</p>
                <p class="text-cyan">{EDUCATION.years}</p>
                <p class="text-sm text-muted">{EDUCATION.status}</p>
            </div>
        </div>
    }
}
