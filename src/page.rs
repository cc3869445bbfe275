//! Page-wide UI state: theme, mobile menu, project modal and pointer glow.
//!
//! These are plain values; the app layer keeps each one in a signal and hands it to
//! components through context.

use crate::content::ProjectRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreference {
    is_dark: bool,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self { is_dark: true }
    }
}

impl ThemePreference {
    /// Class flag mirrored onto the document root while dark mode is on.
    pub const ROOT_CLASS: &'static str = "dark";

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Flip the theme, returning the new dark flag.
    pub fn toggle(&mut self) -> bool {
        self.is_dark = !self.is_dark;
        self.is_dark
    }

    /// Choose between the dark and light variant of a class list.
    pub fn pick(&self, dark: &'static str, light: &'static str) -> &'static str {
        if self.is_dark {
            dark
        } else {
            light
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Where a click on the open modal landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalClick {
    Backdrop,
    Surface,
    CloseButton,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectModal {
    selected: Option<&'static ProjectRecord>,
}

impl ProjectModal {
    pub fn select(&mut self, project: &'static ProjectRecord) {
        log::debug!("opening project {}", project.title);
        self.selected = Some(project);
    }

    pub fn selected(&self) -> Option<&'static ProjectRecord> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn close(&mut self) {
        self.selected = None;
    }

    pub fn handle_click(&mut self, click: ModalClick) {
        match click {
            ModalClick::Backdrop | ModalClick::CloseButton => self.close(),
            ModalClick::Surface => {}
        }
    }

    /// Returns true when the key closed the modal.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close();
            return true;
        }
        false
    }
}

/// Last pointer position in viewport coordinates, driving the background glow.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerGlow {
    pub x: f64,
    pub y: f64,
}

impl PointerGlow {
    pub const RADIUS: f64 = 250.0;

    pub fn track(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }

    /// Top-left corner of the glow so that it is centred on the pointer.
    pub fn origin(&self) -> (f64, f64) {
        (self.x - Self::RADIUS, self.y - Self::RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{IconToken, ProjectRecord};
    use std::sync::LazyLock;

    static PROJECT: LazyLock<ProjectRecord> = LazyLock::new(|| ProjectRecord {
        title: "Parcel Tracker".to_string(),
        description: "Tracks parcels".to_string(),
        tags: vec!["Rust".to_string()],
        color: "from-slate-600 to-slate-800".to_string(),
        icon: IconToken::Layout,
        links: None,
    });

    #[test]
    fn test_modal_select_and_dismiss() {
        let mut modal = ProjectModal::default();
        assert!(!modal.is_open());

        modal.select(&PROJECT);
        assert_eq!(
            modal.selected().map(|p| p.title.as_str()),
            Some("Parcel Tracker")
        );

        modal.handle_click(ModalClick::Surface);
        assert!(modal.is_open());

        modal.handle_click(ModalClick::Backdrop);
        assert!(modal.selected().is_none());

        modal.select(&PROJECT);
        modal.handle_click(ModalClick::CloseButton);
        assert!(!modal.is_open());
    }

    #[test]
    fn test_modal_escape() {
        let mut modal = ProjectModal::default();
        assert!(!modal.handle_key("Escape"));

        modal.select(&PROJECT);
        assert!(!modal.handle_key("Enter"));
        assert!(modal.is_open());
        assert!(modal.handle_key("Escape"));
        assert!(!modal.is_open());
    }

    #[test]
    fn test_theme_toggle() {
        let mut theme = ThemePreference::default();
        assert!(theme.is_dark());
        assert_eq!(theme.pick("bg-slate-950", "bg-gray-50"), "bg-slate-950");

        assert!(!theme.toggle());
        assert_eq!(theme.pick("bg-slate-950", "bg-gray-50"), "bg-gray-50");
        assert!(theme.toggle());
    }

    #[test]
    fn test_menu() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_glow_is_centred_on_pointer() {
        let mut glow = PointerGlow::default();
        assert_eq!(glow.origin(), (-250.0, -250.0));
        glow.track(400.0, 300.0);
        assert_eq!(glow.origin(), (150.0, 50.0));
    }
}
