use leptos::{ev, html, prelude::*};
use leptos_router::hooks::use_location;
use leptos_use::{use_event_listener, use_window};

use crate::nav::{NavState, Section, SectionBounds, SectionGeometry};

/// One `<section>` ref per page section, indexed by document order.
#[derive(Clone, Copy)]
struct SectionRefs([NodeRef<html::Section>; Section::ALL.len()]);

impl SectionRefs {
    fn new() -> Self {
        Self(std::array::from_fn(|_| NodeRef::new()))
    }

    fn get(&self, section: Section) -> NodeRef<html::Section> {
        self.0[section.index()]
    }
}

impl SectionGeometry for SectionRefs {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        self.get(section).get_untracked().map(|el| {
            SectionBounds::new(f64::from(el.offset_top()), f64::from(el.offset_height()))
        })
    }
}

/// Sole owner of the active section and the mobile menu state.
#[derive(Clone, Copy)]
pub struct NavigationController {
    state: RwSignal<NavState>,
    refs: SectionRefs,
}

impl NavigationController {
    pub fn is_active(&self, section: Section) -> bool {
        self.state.with(|s| s.is_active(section))
    }

    pub fn menu_open(&self) -> bool {
        self.state.with(|s| s.menu_open())
    }

    pub fn node_ref(&self, section: Section) -> NodeRef<html::Section> {
        self.refs.get(section)
    }

    pub fn navigate_to(&self, section: Section) {
        log::debug!("navigating to #{section}");
        // smooth via `scroll-behavior` on the root element
        if let Some(el) = self.refs.get(section).get_untracked() {
            el.scroll_into_view();
        }
        self.state.update(|s| s.navigate_to(section));
    }

    pub fn toggle_menu(&self) {
        self.state.update(NavState::toggle_menu);
    }

    fn sync_to_scroll(&self, scroll_y: f64) {
        let mut next = self.state.get_untracked();
        if next.on_scroll(scroll_y, &self.refs) {
            self.state.set(next);
        }
    }
}

/// Creates the controller for the current page and puts it in context.
/// The scroll listener lives as long as the calling component's owner.
pub fn provide_navigation() -> NavigationController {
    let controller = NavigationController {
        state: RwSignal::new(NavState::default()),
        refs: SectionRefs::new(),
    };
    provide_context(controller);

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        let scroll_y = window().scroll_y().unwrap_or_default();
        controller.sync_to_scroll(scroll_y);
    });

    // deep links like `/#skills`; anything else is left alone
    let location = use_location();
    Effect::new(move |_| {
        let hash = location.hash.get();
        if let Ok(section) = hash.trim_start_matches('#').parse::<Section>() {
            controller.navigate_to(section);
        }
    });

    controller
}

pub fn use_navigation() -> NavigationController {
    expect_context::<NavigationController>()
}
