use std::{fmt, str::FromStr};

use thiserror::Error;

/// Added to the raw scroll offset so a section activates slightly before
/// it reaches the top of the viewport.
pub const SCROLL_LOOKAHEAD: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Document order. Scroll scans and nav menus both walk this.
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// DOM anchor id, also used as the nav label.
    pub const fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
}

impl FromStr for Section {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| NavError::UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a mounted section: `[offset_top, offset_top + height)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(offset_top: f64, height: f64) -> Self {
        Self { offset_top, height }
    }

    pub fn contains(&self, position: f64) -> bool {
        position >= self.offset_top && position < self.offset_top + self.height
    }
}

/// Source of section geometry. In the browser this reads the mounted
/// `<section>` elements; `None` means the anchor isn't in the document yet.
pub trait SectionGeometry {
    fn bounds(&self, section: Section) -> Option<SectionBounds>;
}

pub fn effective_position(scroll_y: f64) -> f64 {
    scroll_y + SCROLL_LOOKAHEAD
}

/// First section in document order whose bounds contain `position`.
pub fn section_at<G: SectionGeometry + ?Sized>(position: f64, geometry: &G) -> Option<Section> {
    Section::ALL.into_iter().find(|section| {
        geometry
            .bounds(*section)
            .is_some_and(|bounds| bounds.contains(position))
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    active: Section,
    menu_open: bool,
}

impl NavState {
    pub fn active(&self) -> Section {
        self.active
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    /// Re-derives the active section from a raw scroll offset. Leaves it
    /// untouched when no section contains the effective position.
    /// Returns whether the active section changed.
    pub fn on_scroll<G: SectionGeometry + ?Sized>(&mut self, scroll_y: f64, geometry: &G) -> bool {
        match section_at(effective_position(scroll_y), geometry) {
            Some(section) if section != self.active => {
                self.active = section;
                true
            }
            _ => false,
        }
    }

    /// Optimistic: the section is active before any scroll animation ends.
    pub fn navigate_to(&mut self, section: Section) {
        self.active = section;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLayout(Vec<(Section, SectionBounds)>);

    impl FixedLayout {
        fn new(sections: &[(Section, f64, f64)]) -> Self {
            Self(
                sections
                    .iter()
                    .map(|(s, top, height)| (*s, SectionBounds::new(*top, *height)))
                    .collect(),
            )
        }

        // home[0,500) about[500,900) experience[900,1600)
        fn three_sections() -> Self {
            Self::new(&[
                (Section::Home, 0.0, 500.0),
                (Section::About, 500.0, 400.0),
                (Section::Experience, 900.0, 700.0),
            ])
        }

        fn full_page() -> Self {
            Self::new(&[
                (Section::Home, 0.0, 800.0),
                (Section::About, 800.0, 600.0),
                (Section::Experience, 1400.0, 1000.0),
                (Section::Skills, 2400.0, 500.0),
                (Section::Projects, 2900.0, 700.0),
                (Section::Contact, 3600.0, 600.0),
            ])
        }
    }

    impl SectionGeometry for FixedLayout {
        fn bounds(&self, section: Section) -> Option<SectionBounds> {
            self.0
                .iter()
                .find(|(s, _)| *s == section)
                .map(|(_, bounds)| *bounds)
        }
    }

    #[test]
    fn test_defaults_to_home() {
        let state = NavState::default();
        assert_eq!(state.active(), Section::Home);
        assert!(!state.menu_open());
    }

    #[test]
    fn test_navigate_to_every_section() {
        for section in Section::ALL {
            let mut state = NavState::default();
            state.navigate_to(section);
            assert_eq!(state.active(), section);
            assert!(state.is_active(section));
        }
    }

    #[test]
    fn test_navigate_closes_menu() {
        let mut state = NavState::default();
        state.toggle_menu();
        assert!(state.menu_open());
        state.navigate_to(Section::Projects);
        assert!(!state.menu_open());

        // already closed stays closed
        state.navigate_to(Section::Contact);
        assert!(!state.menu_open());
    }

    #[test]
    fn test_toggle_menu_twice_restores() {
        let mut state = NavState::default();
        let initial = state.menu_open();
        state.toggle_menu();
        assert_ne!(state.menu_open(), initial);
        state.toggle_menu();
        assert_eq!(state.menu_open(), initial);
    }

    #[test]
    fn test_scroll_scenario() {
        let layout = FixedLayout::three_sections();
        let mut state = NavState::default();

        // 450 + 100 = 550 -> about
        assert!(state.on_scroll(450.0, &layout));
        assert_eq!(state.active(), Section::About);

        // 0 + 100 = 100 -> home
        assert!(state.on_scroll(0.0, &layout));
        assert_eq!(state.active(), Section::Home);
    }

    #[test]
    fn test_scroll_within_range_stays() {
        let layout = FixedLayout::full_page();
        let mut state = NavState::default();
        for section in Section::ALL {
            let bounds = layout.bounds(section).unwrap();
            let mut y = bounds.offset_top - SCROLL_LOOKAHEAD;
            while y + SCROLL_LOOKAHEAD < bounds.offset_top + bounds.height {
                state.on_scroll(y, &layout);
                assert_eq!(state.active(), section, "scroll_y = {}", y);
                y += 25.0;
            }
        }
    }

    #[test]
    fn test_lower_bound_inclusive() {
        let layout = FixedLayout::three_sections();
        assert_eq!(section_at(500.0, &layout), Some(Section::About));
        assert_eq!(section_at(900.0, &layout), Some(Section::Experience));
        assert_eq!(section_at(0.0, &layout), Some(Section::Home));
    }

    #[test]
    fn test_shared_boundary_resolves_to_later() {
        let layout = FixedLayout::three_sections();
        let mut state = NavState::default();
        // effective 500 is the end of home and the start of about
        state.on_scroll(400.0, &layout);
        assert_eq!(state.active(), Section::About);
        assert_eq!(section_at(499.999, &layout), Some(Section::Home));
    }

    #[test]
    fn test_no_match_leaves_active() {
        let layout = FixedLayout::three_sections();
        let mut state = NavState::default();
        state.on_scroll(1000.0, &layout);
        assert_eq!(state.active(), Section::Experience);

        // effective 1700 is past the last section
        assert!(!state.on_scroll(1600.0, &layout));
        assert_eq!(state.active(), Section::Experience);
    }

    #[test]
    fn test_unmounted_sections_skipped() {
        let layout = FixedLayout::new(&[
            (Section::Home, 0.0, 500.0),
            (Section::Skills, 500.0, 500.0),
        ]);
        let mut state = NavState::default();
        assert!(state.on_scroll(600.0, &layout));
        assert_eq!(state.active(), Section::Skills);

        let empty = FixedLayout::new(&[]);
        assert!(!state.on_scroll(0.0, &empty));
        assert_eq!(state.active(), Section::Skills);
    }

    #[test]
    fn test_overlap_first_in_document_order_wins() {
        let layout = FixedLayout::new(&[
            (Section::Projects, 0.0, 1000.0),
            (Section::About, 0.0, 1000.0),
        ]);
        assert_eq!(section_at(300.0, &layout), Some(Section::About));
    }

    #[test]
    fn test_on_scroll_reports_change() {
        let layout = FixedLayout::three_sections();
        let mut state = NavState::default();
        assert!(!state.on_scroll(0.0, &layout));
        assert!(state.on_scroll(850.0, &layout));
        assert!(!state.on_scroll(860.0, &layout));
    }

    #[test]
    fn test_section_ids() {
        for (i, section) in Section::ALL.into_iter().enumerate() {
            assert_eq!(section.index(), i);
            assert_eq!(section.id().parse::<Section>(), Ok(section));
            assert_eq!(section.to_string(), section.id());
        }
        assert_eq!(
            "footer".parse::<Section>(),
            Err(NavError::UnknownSection("footer".to_string()))
        );
        assert!("About".parse::<Section>().is_err());
    }
}
