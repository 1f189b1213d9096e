/// Sections of the documentation page. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DocsTab {
    #[default]
    Installation,
    BasicUsage,
    AdvancedNlp,
    ApiReference,
    SchemaSetup,
    Configuration,
}

impl DocsTab {
    pub const ALL: [DocsTab; 6] = [
        DocsTab::Installation,
        DocsTab::BasicUsage,
        DocsTab::AdvancedNlp,
        DocsTab::ApiReference,
        DocsTab::SchemaSetup,
        DocsTab::Configuration,
    ];

    pub fn key(self) -> &'static str {
        match self {
            DocsTab::Installation => "installation",
            DocsTab::BasicUsage => "basicUsage",
            DocsTab::AdvancedNlp => "advancedNLP",
            DocsTab::ApiReference => "apiExample",
            DocsTab::SchemaSetup => "schemaSetup",
            DocsTab::Configuration => "configuration",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.key() == key)
    }
}

/// FAQ accordion: at most one answer expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    /// Opens `index`, or collapses it if it is already open.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn installation_is_the_default_tab() {
        assert_eq!(DocsTab::default(), DocsTab::Installation);
    }

    #[test]
    fn keys_are_unique_and_reversible() {
        for tab in DocsTab::ALL {
            assert_eq!(DocsTab::from_key(tab.key()), Some(tab));
        }
        assert_eq!(DocsTab::from_key("changelog"), None);
    }

    #[test]
    fn accordion_keeps_one_item_open() {
        let mut faq = FaqAccordion::default();
        assert_eq!(faq.open_index(), None);

        faq.toggle(2);
        assert!(faq.is_open(2));

        faq.toggle(4);
        assert!(faq.is_open(4));
        assert!(!faq.is_open(2));

        faq.toggle(4);
        assert_eq!(faq.open_index(), None);
    }
}
