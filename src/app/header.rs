use leptos::prelude::*;

use super::controller::use_navigation;
use crate::{content::PROFILE, nav::Section};

#[component]
pub fn NavBar() -> impl IntoView {
    let nav = use_navigation();

    view! {
        <nav class="fixed top-0 inset-x-0 z-50 shadow-lg bg-background/70 backdrop-blur border-b border-muted/20">
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 py-3 flex items-center justify-between">
                <div class="nav-logo">
                    <img src=PROFILE.logo_src alt="Logo" width="140" />
                </div>
                <div class="hidden md:flex gap-2">
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! { <NavLink section mobile=false /> })
                        .collect_view()}
                </div>
                <button
                    class="md:hidden p-2 rounded-md border border-muted/30 hover:bg-muted/20 transition-colors duration-200"
                    aria-label="Toggle navigation"
                    aria-expanded=move || nav.menu_open().to_string()
                    on:click=move |_| nav.toggle_menu()
                >
                    {move || if nav.menu_open() { "▲" } else { "▼" }}
                </button>
            </div>
            <Show when=move || nav.menu_open()>
                <div class="md:hidden mobile-menu border-t border-muted/20">
                    <div class="mx-auto max-w-6xl px-4 py-2 flex flex-col">
                        {Section::ALL
                            .into_iter()
                            .map(|section| view! { <NavLink section mobile=true /> })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}

#[component]
fn NavLink(section: Section, mobile: bool) -> impl IntoView {
    let nav = use_navigation();
    let base = if mobile {
        "mobile-nav-link capitalize text-left px-3 py-2 rounded-md"
    } else {
        "nav-link capitalize px-4 py-2 rounded-md glass-effect"
    };

    view! {
        <button
            class=base
            class:active=move || nav.is_active(section)
            on:click=move |_| nav.navigate_to(section)
        >
            {section.id()}
        </button>
    }
}
