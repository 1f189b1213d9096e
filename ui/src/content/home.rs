pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const HOME_STATS: &[Stat] = &[
    Stat { value: "99.2%", label: "NLP Accuracy" },
    Stat { value: "5ms", label: "Query Processing" },
    Stat { value: "50+", label: "Languages Supported" },
];

pub const HOME_PREVIEW_SQL: &str = "SELECT c.*, p.amount
FROM customers c
JOIN purchases p ON c.id = p.customer_id
WHERE p.created_at > '2024-01-01'";

pub const HOME_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "🧠",
        title: "Intent Recognition",
        body: "Advanced NLP models understand the intent behind your questions, whether you want to filter, aggregate, or join data across tables.",
    },
    Highlight {
        icon: "🔍",
        title: "Entity Extraction",
        body: "Automatically identifies entities like dates, numbers, table names, and column references from natural language using NLP techniques.",
    },
    Highlight {
        icon: "🌐",
        title: "Context Awareness",
        body: "Understands context and relationships between concepts, enabling complex multi-table queries from simple English descriptions.",
    },
];

/// The four-step preview on the home page (title, body).
pub const HOME_STEPS: &[(&str, &str)] = &[
    (
        "NLP Processing",
        "Advanced language models parse your natural language query, identifying intent, entities, and context.",
    ),
    (
        "Schema Retrieval",
        "RAG system retrieves relevant database schema and examples to inform the SQL generation process.",
    ),
    (
        "SQL Generation",
        "LLM generates optimized SQL queries based on the processed natural language and retrieved context.",
    ),
    (
        "Execution & Results",
        "SQL is validated, executed safely, and results are returned with intelligent visualizations.",
    ),
];
