mod about;
mod contact;
pub mod controller;
mod experience;
mod header;
mod homepage;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::{copyright_line, PROFILE};
use about::AboutSection;
use contact::ContactSection;
use controller::provide_navigation;
use experience::ExperienceSection;
use header::NavBar;
use homepage::HomeSection;
use projects::ProjectsSection;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="description" content=PROFILE.tagline />
                <link rel="shortcut icon" type="image/png" href=PROFILE.logo_src />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    provide_navigation();

    view! {
        <Title text="Portfolio" />
        <div class="relative min-h-screen overflow-x-hidden">
            <div class="animated-bg" aria-hidden="true">
                <div class="animated-bg-shape"></div>
                <div class="animated-bg-shape"></div>
                <div class="animated-bg-shape"></div>
            </div>
            <NavBar />
            <main>
                <HomeSection />
                <AboutSection />
                <ExperienceSection />
                <SkillsSection />
                <ProjectsSection />
                <ContactSection />
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn SectionHeading(text: &'static str) -> impl IntoView {
    view! {
        <h2 class="text-3xl font-bold text-center mb-12">
            <span class="heading-underline">{text}</span>
        </h2>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-8 border-t border-muted/20 wavy-bg">
            <div class="mx-auto max-w-6xl px-4 text-center">
                <p class="text-sm text-muted">{copyright_line(env!("BUILD_YEAR"))}</p>
            </div>
        </footer>
    }
}
