use leptos::prelude::*;

use super::{controller::use_navigation, SectionHeading};
use crate::{
    content::{FEATURES, SUMMARY},
    nav::Section,
};

#[component]
pub fn AboutSection() -> impl IntoView {
    let nav = use_navigation();

    view! {
        <section
            id=Section::About.id()
            node_ref=nav.node_ref(Section::About)
            class="py-24"
        >
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 section-content">
                <SectionHeading text="About Me" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div class="glass-effect p-6 rounded-lg border border-muted/30">
                        <div class="flex items-center gap-3 mb-4">
                            <span class="text-2xl text-blue-400">"👤"</span>
                            <h3 class="text-xl font-bold">"Professional Summary"</h3>
                        </div>
                        {SUMMARY
                            .into_iter()
                            .map(|p| view! { <p class="text-base mb-4 leading-relaxed">{p}</p> })
                            .collect_view()}
                    </div>
                    <div>
                        <h3 class="text-xl font-bold mb-6">"Why Work With Me?"</h3>
                        <ul class="space-y-6">
                            {FEATURES
                                .iter()
                                .map(|feature| {
                                    view! {
                                        <li class="flex items-start gap-4">
                                            <span class=format!(
                                                "text-xl p-2 rounded-full bg-muted/20 {}",
                                                feature.accent.text_class(),
                                            )>{feature.icon}</span>
                                            <div>
                                                <h4 class="font-bold mb-1">{feature.title}</h4>
                                                <p class="text-sm text-muted">{feature.text}</p>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}
