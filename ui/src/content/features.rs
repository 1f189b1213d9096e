pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

pub struct TechSpec {
    pub label: &'static str,
    pub value: &'static str,
}

pub struct UseCase {
    pub icon: &'static str,
    pub title: &'static str,
    pub question: &'static str,
    pub outcome: &'static str,
}

pub const HERO_EXAMPLES: &[&str] = &[
    "Show me customers who haven't ordered recently",
    "Find the most popular products this quarter",
    "Which users are at risk of churning?",
    "Compare sales performance by region",
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "🧠",
        title: "Advanced NLP Processing",
        description: "State-of-the-art Natural Language Processing models understand context, intent, and complex linguistic patterns in your queries.",
        details: &[
            "Intent recognition and classification",
            "Entity extraction and named entity recognition",
            "Semantic understanding and disambiguation",
            "Multi-language support with 50+ languages",
        ],
    },
    Feature {
        icon: "🌐",
        title: "Contextual Understanding",
        description: "Deep learning models analyze context and relationships between concepts to generate accurate SQL queries.",
        details: &[
            "Context-aware query processing",
            "Cross-reference table relationships",
            "Temporal and spatial reasoning",
            "Domain-specific vocabulary adaptation",
        ],
    },
    Feature {
        icon: "🔧",
        title: "Large Language Models",
        description: "Powered by cutting-edge LLMs including GPT, BERT, and specialized SQL generation models for optimal performance.",
        details: &[
            "GPT-4 and Claude integration",
            "Fine-tuned SQL generation models",
            "Retrieval-Augmented Generation (RAG)",
            "Continuous model updates and improvements",
        ],
    },
    Feature {
        icon: "🔍",
        title: "Intelligent Query Analysis",
        description: "Advanced NLP techniques break down complex questions into structured components for precise SQL generation.",
        details: &[
            "Query intent classification",
            "Semantic role labeling",
            "Dependency parsing and syntax analysis",
            "Ambiguity resolution algorithms",
        ],
    },
    Feature {
        icon: "🗄",
        title: "Multi-Database Support",
        description: "NLP models adapt to different SQL dialects and database schemas automatically.",
        details: &[
            "PostgreSQL, MySQL, SQLite, BigQuery",
            "Snowflake, Redshift, Oracle support",
            "Schema-aware query generation",
            "Dialect-specific optimization",
        ],
    },
    Feature {
        icon: "🛡",
        title: "Safe NLP Execution",
        description: "Natural language processing includes safety checks and validation to prevent harmful or incorrect queries.",
        details: &[
            "Query validation and sanitization",
            "SQL injection prevention",
            "Permission-aware generation",
            "Error handling and recovery",
        ],
    },
];

pub const TECH_SPECS: &[TechSpec] = &[
    TechSpec { label: "NLP Models", value: "GPT-4, Claude, BERT, RoBERTa" },
    TechSpec { label: "Processing Speed", value: "< 5ms average response" },
    TechSpec { label: "Accuracy Rate", value: "99.2% query understanding" },
    TechSpec { label: "Languages Supported", value: "50+ natural languages" },
    TechSpec { label: "Context Window", value: "32K tokens" },
    TechSpec { label: "Model Size", value: "7B-175B parameters" },
];

/// Compact pipeline shown beside the technical specs.
pub const FEATURE_PIPELINE: &[&str] = &[
    "Tokenization & Preprocessing",
    "Intent Classification",
    "Entity Recognition",
    "Context Analysis",
    "SQL Generation",
];

pub const USE_CASES: &[UseCase] = &[
    UseCase {
        icon: "📈",
        title: "Business Analytics",
        question: "Show me revenue trends by quarter",
        outcome: "Complex analytical queries with grouping, aggregation, and time-based filtering.",
    },
    UseCase {
        icon: "👥",
        title: "Customer Analytics",
        question: "Find customers at risk of churning",
        outcome: "Multi-table joins with behavioral analysis and predictive modeling.",
    },
    UseCase {
        icon: "🛒",
        title: "E-commerce",
        question: "What are the top-selling products this month?",
        outcome: "Product performance analysis with sales metrics and trends.",
    },
    UseCase {
        icon: "🏥",
        title: "Healthcare",
        question: "Show patients with high-risk conditions",
        outcome: "Medical data analysis with complex filtering and classification logic.",
    },
    UseCase {
        icon: "🎓",
        title: "Education",
        question: "Which students are struggling academically?",
        outcome: "Student performance analysis with grade trends and attendance patterns.",
    },
    UseCase {
        icon: "🏭",
        title: "Manufacturing",
        question: "Find production bottlenecks this week",
        outcome: "Operational data analysis with efficiency metrics and performance indicators.",
    },
];
