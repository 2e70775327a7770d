use leptos::prelude::*;

use super::{controller::use_navigation, SectionHeading};
use crate::{
    content::{Project, PROJECTS},
    nav::Section,
};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let nav = use_navigation();

    view! {
        <section
            id=Section::Projects.id()
            node_ref=nav.node_ref(Section::Projects)
            class="py-24"
        >
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 section-content">
                <SectionHeading text="Projects" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="glass-effect hover-lift rounded-lg border border-muted/30 overflow-hidden flex flex-col">
            <div class=format!("h-1.5 {}", project.accent.bg_class())></div>
            <div class="p-6 flex flex-col flex-grow">
                <h3 class="text-xl font-bold mb-2">{project.title}</h3>
                <p class="text-sm text-muted mb-4 flex-grow">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-6">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="text-xs px-2 py-1 rounded-md bg-muted/20 border border-muted/30">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center justify-between">
                    // no detail pages yet
                    <button class="text-cyan hover:text-brightCyan font-medium">
                        "View Details"
                    </button>
                    <span class=project.accent.text_class()>"📁"</span>
                </div>
            </div>
        </div>
    }
}
