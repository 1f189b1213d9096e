/// Pages reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavRoute {
    Home,
    Features,
    HowItWorks,
    Demo,
    Docs,
}

impl NavRoute {
    /// Navbar order.
    pub const ALL: [NavRoute; 5] = [
        NavRoute::Home,
        NavRoute::Features,
        NavRoute::HowItWorks,
        NavRoute::Demo,
        NavRoute::Docs,
    ];

    pub fn path(self) -> &'static str {
        match self {
            NavRoute::Home => "/",
            NavRoute::Features => "/features",
            NavRoute::HowItWorks => "/how-it-works",
            NavRoute::Demo => "/demo",
            NavRoute::Docs => "/docs",
        }
    }

    /// Fluent message ID of the navbar label.
    pub fn label_key(self) -> &'static str {
        match self {
            NavRoute::Home => "nav-home",
            NavRoute::Features => "nav-features",
            NavRoute::HowItWorks => "nav-how-it-works",
            NavRoute::Demo => "nav-demo",
            NavRoute::Docs => "nav-docs",
        }
    }

    /// Exact match only; unknown paths map to nothing.
    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = match path.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Self::ALL.into_iter().find(|route| route.path() == trimmed)
    }

    pub fn is_active(self, current_path: &str) -> bool {
        Self::from_path(current_path) == Some(self)
    }
}

pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Whether the page is scrolled far enough for the compact navbar style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    threshold_px: f64,
    scrolled: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD_PX)
    }
}

impl ScrollState {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px,
            scrolled: false,
        }
    }

    /// Feed the current vertical offset. Returns `true` when the style flips.
    pub fn observe(&mut self, offset_y: f64) -> bool {
        let next = offset_y > self.threshold_px;
        let changed = next != self.scrolled;
        self.scrolled = next;
        changed
    }

    pub fn scrolled(&self) -> bool {
        self.scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_round_trips_through_its_path() {
        for route in NavRoute::ALL {
            assert_eq!(NavRoute::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn only_matching_route_is_active() {
        let active: Vec<_> = NavRoute::ALL
            .into_iter()
            .filter(|r| r.is_active("/how-it-works"))
            .collect();
        assert_eq!(active, vec![NavRoute::HowItWorks]);
        assert!(NavRoute::Home.is_active("/"));
        assert!(NavRoute::Docs.is_active("/docs/"));
    }

    #[test]
    fn unknown_path_activates_nothing() {
        assert_eq!(NavRoute::from_path("/pricing"), None);
        assert!(NavRoute::ALL.iter().all(|r| !r.is_active("/pricing")));
    }

    #[test]
    fn scroll_threshold_is_exclusive() {
        let mut state = ScrollState::default();
        assert!(!state.observe(50.0));
        assert!(!state.scrolled());
        assert!(state.observe(50.5));
        assert!(state.scrolled());
        assert!(!state.observe(400.0));
        assert!(state.observe(0.0));
        assert!(!state.scrolled());
    }
}
