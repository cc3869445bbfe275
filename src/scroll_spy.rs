use std::fmt;

use thiserror::Error;

/// Pixels added to the scroll offset before testing section ranges.
pub const DEFAULT_SCROLL_LEAD: f64 = 100.0;

/// The named sections of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// Element id of the section, also used as the anchor target.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Experience => "Experience",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Vertical extent of a rendered section, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open test: `top <= point < top + height`.
    pub fn contains(&self, point: f64) -> bool {
        self.top <= point && point < self.top + self.height
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScrollSpyError {
    #[error("scroll spy needs at least one section")]
    NoSections,
    #[error("initial section {0} is not one of the tracked sections")]
    UnknownInitial(String),
}

/// Tracks which section sits under the viewport's reference point.
///
/// The active section is recomputed from live layout on every scroll event. Every
/// section is tested in declared order and a later match overwrites an earlier one, so
/// with overlapping ranges the last declared section wins. When nothing matches the
/// previous value is kept.
#[derive(Debug, Clone)]
pub struct ScrollSpy<S = Section> {
    sections: Vec<S>,
    lead: f64,
    active: S,
}

impl<S> ScrollSpy<S>
where
    S: Copy + PartialEq + fmt::Debug,
{
    pub fn new(sections: Vec<S>, initial: S, lead: f64) -> Result<Self, ScrollSpyError> {
        if sections.is_empty() {
            return Err(ScrollSpyError::NoSections);
        }
        if !sections.contains(&initial) {
            return Err(ScrollSpyError::UnknownInitial(format!("{initial:?}")));
        }
        Ok(Self {
            sections,
            lead,
            active: initial,
        })
    }

    pub fn active(&self) -> S {
        self.active
    }

    pub fn sections(&self) -> &[S] {
        &self.sections
    }

    pub fn reference_point(&self, scroll_y: f64) -> f64 {
        scroll_y + self.lead
    }

    /// Recompute the active section for a scroll offset.
    ///
    /// `measure` is asked for the current bounds of each section; sections it cannot
    /// measure are skipped. Returns true when the active section changed.
    pub fn on_scroll<F>(&mut self, scroll_y: f64, mut measure: F) -> bool
    where
        F: FnMut(S) -> Option<SectionBounds>,
    {
        let point = self.reference_point(scroll_y);
        let mut next = self.active;
        for &section in &self.sections {
            if let Some(bounds) = measure(section) {
                if bounds.contains(point) {
                    next = section;
                }
            }
        }
        if next == self.active {
            return false;
        }
        log::debug!("active section {:?} -> {:?}", self.active, next);
        self.active = next;
        true
    }
}

impl Default for ScrollSpy<Section> {
    fn default() -> Self {
        Self {
            sections: Section::ALL.to_vec(),
            lead: DEFAULT_SCROLL_LEAD,
            active: Section::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn layout(bounds: &[(Section, f64, f64)]) -> impl Fn(Section) -> Option<SectionBounds> + '_ {
        move |s| {
            bounds
                .iter()
                .find(|(id, _, _)| *id == s)
                .map(|(_, top, height)| SectionBounds::new(*top, *height))
        }
    }

    #[test]
    fn test_home_about_scenario() {
        let page = [(Section::Home, 0.0, 800.0), (Section::About, 800.0, 600.0)];
        let mut spy =
            ScrollSpy::new(vec![Section::Home, Section::About], Section::Home, 100.0).unwrap();

        assert!(spy.on_scroll(750.0, layout(&page)));
        assert_eq!(spy.active(), Section::About);

        assert!(spy.on_scroll(0.0, layout(&page)));
        assert_eq!(spy.active(), Section::Home);
    }

    #[test]
    fn test_no_match_keeps_previous() {
        let page = [(Section::Home, 0.0, 800.0), (Section::About, 800.0, 600.0)];
        let mut spy = ScrollSpy::default();
        spy.on_scroll(900.0, layout(&page));
        assert_eq!(spy.active(), Section::About);

        // reference point 2100 is past the end of the last section
        assert!(!spy.on_scroll(2000.0, layout(&page)));
        assert_eq!(spy.active(), Section::About);
    }

    #[test]
    fn test_range_is_half_open() {
        let page = [(Section::Home, 0.0, 800.0), (Section::About, 800.0, 600.0)];
        let mut spy = ScrollSpy::default();
        // reference point exactly at the boundary belongs to the lower section
        spy.on_scroll(700.0, layout(&page));
        assert_eq!(spy.active(), Section::About);
        spy.on_scroll(699.0, layout(&page));
        assert_eq!(spy.active(), Section::Home);
    }

    #[test]
    fn test_overlap_last_declared_wins() {
        let page = [(Section::Home, 0.0, 1000.0), (Section::About, 500.0, 1000.0)];
        let mut spy = ScrollSpy::default();
        spy.on_scroll(600.0, layout(&page));
        assert_eq!(spy.active(), Section::About);
    }

    #[test]
    fn test_missing_sections_are_skipped() {
        let page = [(Section::Contact, 3000.0, 500.0)];
        let mut spy = ScrollSpy::default();
        assert!(!spy.on_scroll(100.0, layout(&page)));
        assert_eq!(spy.active(), Section::Home);
        assert!(spy.on_scroll(3000.0, layout(&page)));
        assert_eq!(spy.active(), Section::Contact);
    }

    #[test]
    fn test_constructor_rejects_bad_input() {
        assert_eq!(
            ScrollSpy::<Section>::new(vec![], Section::Home, 100.0).unwrap_err(),
            ScrollSpyError::NoSections
        );
        assert!(matches!(
            ScrollSpy::new(vec![Section::About], Section::Home, 100.0),
            Err(ScrollSpyError::UnknownInitial(_))
        ));
    }

    #[test]
    fn test_section_ids() {
        let ids = Section::ALL.iter().map(|s| s.id()).collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec!["home", "about", "skills", "projects", "experience", "contact"]
        );
        assert_eq!(Section::Projects.href(), "#projects");
        assert_eq!(Section::Experience.label(), "Experience");
    }

    fn arb_layout() -> impl Strategy<Value = Vec<(f64, f64)>> {
        prop::collection::vec((0u32..5000, 0u32..1500), 6)
            .prop_map(|v| v.into_iter().map(|(t, h)| (t as f64, h as f64)).collect())
    }

    proptest! {
        #[test]
        fn prop_last_containing_section_wins(
            bounds in arb_layout(),
            scrolls in prop::collection::vec(0u32..6000, 1..20),
        ) {
            let page = Section::ALL
                .iter()
                .zip(bounds.iter())
                .map(|(s, (t, h))| (*s, *t, *h))
                .collect::<Vec<_>>();
            let mut spy = ScrollSpy::default();
            for y in scrolls {
                let before = spy.active();
                let point = y as f64 + DEFAULT_SCROLL_LEAD;
                let expected = page
                    .iter()
                    .rev()
                    .find(|(_, t, h)| SectionBounds::new(*t, *h).contains(point))
                    .map(|(s, _, _)| *s)
                    .unwrap_or(before);
                spy.on_scroll(y as f64, layout(&page));
                prop_assert_eq!(spy.active(), expected);
            }
        }
    }
}
