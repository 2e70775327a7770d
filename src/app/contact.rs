use leptos::prelude::*;

use super::{controller::use_navigation, SectionHeading};
use crate::{
    content::{ContactLink, CONTACT_LINKS},
    nav::Section,
};

#[component]
pub fn ContactSection() -> impl IntoView {
    let nav = use_navigation();

    view! {
        <section
            id=Section::Contact.id()
            node_ref=nav.node_ref(Section::Contact)
            class="py-24 wavy-bg"
        >
            <div class="mx-auto max-w-6xl px-4 sm:px-6 lg:px-8 section-content">
                <SectionHeading text="Get In Touch" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12">
                    <div>
                        <h3 class="text-xl font-bold mb-6">"Contact Information"</h3>
                        <div class="space-y-6">
                            {CONTACT_LINKS.iter().map(|link| view! { <ContactItem link /> }).collect_view()}
                        </div>
                    </div>
                    <ContactForm />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactItem(link: &'static ContactLink) -> impl IntoView {
    let new_context = link.opens_new_context();
    view! {
        <div class="flex items-center gap-4">
            <span class="text-2xl text-cyan">{link.kind.icon()}</span>
            <div>
                <p class="text-sm text-muted">{link.kind.label()}</p>
                <a
                    href=link.href
                    target=new_context.then_some("_blank")
                    rel=new_context.then_some("noopener noreferrer")
                    class="text-foreground hover:text-cyan transition-colors duration-200"
                >
                    {link.display}
                </a>
            </div>
        </div>
    }
}

/// Inert until a delivery backend exists: submitting only stops the reload.
#[component]
fn ContactForm() -> impl IntoView {
    let input_class = "w-full px-4 py-2 rounded-md border border-muted focus:outline-none focus:ring-2 focus:ring-cyan focus:border-cyan bg-background text-foreground placeholder-muted transition-all duration-200";

    view! {
        <div class="glass-effect p-6 rounded-lg border border-muted/30">
            <form
                class="space-y-4"
                on:submit=move |ev| {
                    ev.prevent_default();
                    log::debug!("contact form submitted; no delivery backend configured");
                }
            >
                <div>
                    <label for="name" class="block mb-1 font-medium">
                        "Name"
                    </label>
                    <input id="name" type="text" class=input_class placeholder="Your name" />
                </div>
                <div>
                    <label for="email" class="block mb-1 font-medium">
                        "Email"
                    </label>
                    <input id="email" type="email" class=input_class placeholder="Your email" />
                </div>
                <div>
                    <label for="message" class="block mb-1 font-medium">
                        "Message"
                    </label>
                    <textarea
                        id="message"
                        rows="4"
                        class=input_class
                        placeholder="Your message"
                    ></textarea>
                </div>
                <button
                    type="submit"
                    class="w-full bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium border border-cyan/30 transition-all duration-200"
                >
                    "Send Message"
                </button>
            </form>
        </div>
    }
}
