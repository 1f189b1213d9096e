use crate::navigation::NavRoute;

/// Footer entries either route inside the site or point elsewhere.
pub enum FooterLink {
    Internal {
        label: &'static str,
        route: NavRoute,
    },
    External {
        label: &'static str,
        href: &'static str,
    },
}

pub struct LinkGroup {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

pub const FOOTER_GROUPS: &[LinkGroup] = &[
    LinkGroup {
        title: "Product",
        links: &[
            FooterLink::Internal { label: "Features", route: NavRoute::Features },
            FooterLink::Internal { label: "How It Works", route: NavRoute::HowItWorks },
            FooterLink::Internal { label: "Demo", route: NavRoute::Demo },
            FooterLink::Internal { label: "API Docs", route: NavRoute::Docs },
        ],
    },
    LinkGroup {
        title: "Resources",
        links: &[FooterLink::Internal { label: "Documentation", route: NavRoute::Docs }],
    },
    LinkGroup {
        title: "Company",
        links: &[
            FooterLink::External { label: "About", href: "#about" },
            FooterLink::External { label: "Contact", href: "mailto:contact@nl2sql.com" },
        ],
    },
];

/// (icon, label)
pub const FOOTER_NLP_FEATURES: &[(&str, &str)] = &[
    ("🧠", "Intent Recognition"),
    ("🔍", "Entity Extraction"),
    ("💡", "Query Understanding"),
    ("🌐", "Context Awareness"),
];
