use std::time::Duration;

use crate::contact::{ContactMachine, DEFAULT_RELAY_ENDPOINT, SUCCESS_RESET_DELAY};
use crate::reveal::DEFAULT_REVEAL_THRESHOLD;
use crate::scroll_spy::{ScrollSpy, ScrollSpyError, Section, DEFAULT_SCROLL_LEAD};

/// Tunables of the page, provided to components through context.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub relay_endpoint: String,
    pub scroll_lead: f64,
    pub reveal_threshold: f64,
    pub success_reset: Duration,
    pub initial_section: Section,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            relay_endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            scroll_lead: DEFAULT_SCROLL_LEAD,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            success_reset: SUCCESS_RESET_DELAY,
            initial_section: Section::Home,
        }
    }
}

impl SiteConfig {
    pub fn scroll_spy(&self) -> Result<ScrollSpy, ScrollSpyError> {
        ScrollSpy::new(Section::ALL.to_vec(), self.initial_section, self.scroll_lead)
    }

    pub fn contact_machine(&self) -> ContactMachine {
        ContactMachine::new(self.success_reset)
    }

    pub fn success_reset_ms(&self) -> f64 {
        self.success_reset.as_millis() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.scroll_lead, 100.0);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.success_reset_ms(), 5000.0);
        assert!(config.relay_endpoint.starts_with("https://"));

        let spy = config.scroll_spy().unwrap();
        assert_eq!(spy.active(), Section::Home);
        assert_eq!(spy.sections().len(), 6);
        assert_eq!(spy.reference_point(750.0), 850.0);
    }
}
