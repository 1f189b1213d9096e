//! Static marketing copy rendered by the page views.
//!
//! Everything here is compile-time data; views only iterate over it.

mod docs;
mod features;
mod footer;
mod home;
mod pipeline;

pub use docs::{
    DocsSection, FaqEntry, DOCS_SECTIONS, FAQ, API_ENDPOINTS, NLP_OPTIONS, VERIFY_SNIPPET,
};
pub use features::{
    Feature, TechSpec, UseCase, FEATURES, FEATURE_PIPELINE, HERO_EXAMPLES, TECH_SPECS, USE_CASES,
};
pub use footer::{FooterLink, LinkGroup, FOOTER_GROUPS, FOOTER_NLP_FEATURES};
pub use home::{Highlight, Stat, HOME_HIGHLIGHTS, HOME_PREVIEW_SQL, HOME_STATS, HOME_STEPS};
pub use pipeline::{
    PipelineStep, StackColumn, PERFORMANCE_METRICS, PIPELINE_STEPS, SPEED_BREAKDOWN, TECH_STACK,
};

/// Example questions offered on the Demo page; Home animates the first five.
pub const SAMPLE_QUERIES: [&str; 8] = [
    "Show me all customers who made purchases last month",
    "Find the top 10 products by revenue",
    "Which users haven't logged in for 30 days?",
    "Calculate average order value by region",
    "List all pending orders from premium customers",
    "Show me sales performance this quarter vs last quarter",
    "Find customers with the highest lifetime value",
    "Which products are out of stock in our main warehouse?",
];

/// How many of [`SAMPLE_QUERIES`] the home typewriter cycles through.
pub const HOME_QUERY_COUNT: usize = 5;

/// How many sample buttons the Demo page shows.
pub const DEMO_SAMPLE_BUTTONS: usize = 4;

pub fn home_queries() -> &'static [&'static str] {
    &SAMPLE_QUERIES[..HOME_QUERY_COUNT]
}

pub fn demo_sample_buttons() -> &'static [&'static str] {
    &SAMPLE_QUERIES[..DEMO_SAMPLE_BUTTONS]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_queries_are_distinct() {
        let mut sorted = SAMPLE_QUERIES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), SAMPLE_QUERIES.len());
    }

    #[test]
    fn home_and_demo_share_the_leading_queries() {
        assert_eq!(&home_queries()[..DEMO_SAMPLE_BUTTONS], demo_sample_buttons());
        assert_eq!(home_queries().len(), 5);
    }

    #[test]
    fn pipeline_has_five_numbered_steps() {
        let numbers: Vec<_> = PIPELINE_STEPS.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn every_docs_tab_has_a_section() {
        use crate::navigation::DocsTab;
        for tab in DocsTab::ALL {
            assert!(
                DOCS_SECTIONS.iter().any(|s| s.tab == tab),
                "missing docs section for {tab:?}"
            );
        }
        assert_eq!(DOCS_SECTIONS.len(), DocsTab::ALL.len());
    }
}
