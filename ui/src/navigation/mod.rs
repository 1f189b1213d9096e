//! Navigation state: routes, navbar scroll tracking, docs tabs and FAQ accordion.

mod routes;
mod tabs;

pub use routes::{NavRoute, ScrollState, DEFAULT_SCROLL_THRESHOLD_PX};
pub use tabs::{DocsTab, FaqAccordion};
