use leptos::prelude::*;

use super::controller::use_navigation;
use crate::{content::PROFILE, nav::Section};

#[component]
pub fn HomeSection() -> impl IntoView {
    let nav = use_navigation();

    view! {
        <section
            id=Section::Home.id()
            node_ref=nav.node_ref(Section::Home)
            class="min-h-screen flex items-center pt-24"
        >
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 w-full">
                <div class="flex flex-col-reverse lg:flex-row items-center justify-between gap-12">
                    <div class="max-w-2xl section-content">
                        <h1 class="text-4xl lg:text-6xl font-bold mb-4">
                            "Hi, I'm " <span class="gradient-text">{PROFILE.name}</span>
                        </h1>
                        <h2 class="text-2xl lg:text-3xl text-cyan mb-6">{PROFILE.role}</h2>
                        <p class="text-lg text-muted mb-8 leading-relaxed">{PROFILE.tagline}</p>
                        <div class="flex flex-wrap gap-4">
                            <button
                                class="btn-3d bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium border border-cyan/30 transition-all duration-200"
                                on:click=move |_| nav.navigate_to(Section::Contact)
                            >
                                "Get in Touch"
                            </button>
                            <button
                                class="btn-3d hover:bg-muted/20 px-6 py-3 rounded-md font-medium border border-muted/40 transition-all duration-200"
                                on:click=move |_| nav.navigate_to(Section::Projects)
                            >
                                "View Projects"
                            </button>
                        </div>
                    </div>
                    <div class="flex-shrink-0 section-content glow-effect rounded-full">
                        <div class="p-1 rounded-full bg-gradient-to-tr from-cyan to-purple">
                            <img
                                src=PROFILE.photo_src
                                alt=PROFILE.name
                                class="w-56 h-56 lg:w-72 lg:h-72 rounded-full object-cover"
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
