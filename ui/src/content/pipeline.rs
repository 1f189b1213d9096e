pub struct PipelineStep {
    pub number: u8,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub example_input: &'static str,
    pub example_output: &'static str,
}

pub struct StackColumn {
    pub icon: &'static str,
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const PIPELINE_STEPS: &[PipelineStep] = &[
    PipelineStep {
        number: 1,
        icon: "💬",
        title: "Natural Language Input",
        description: "User submits a question in natural language",
        details: &[
            "Advanced NLP preprocessing",
            "Tokenization and normalization",
            "Language detection and classification",
            "Context extraction and analysis",
        ],
        example_input: "Show me all customers who made purchases last month",
        example_output: "Processed tokens: [show, me, all, customers, who, made, purchases, last, month]",
    },
    PipelineStep {
        number: 2,
        icon: "🧠",
        title: "Intent Recognition & Entity Extraction",
        description: "NLP models analyze intent and extract entities",
        details: &[
            "Intent classification (SELECT, JOIN, FILTER, etc.)",
            "Named Entity Recognition (NER)",
            "Temporal entity extraction",
            "Semantic role labeling",
        ],
        example_input: "Intent: DATA_RETRIEVAL | Entities: [customers, purchases, last_month]",
        example_output: "Intent: SELECT | Tables: [customers, orders] | Time: [last_month]",
    },
    PipelineStep {
        number: 3,
        icon: "🗄",
        title: "Schema Retrieval & Context Building",
        description: "RAG system retrieves relevant database schema",
        details: &[
            "Vector similarity search",
            "Schema matching and mapping",
            "Example query retrieval",
            "Context window construction",
        ],
        example_input: "Retrieved schema: customers(id, name, email), orders(id, customer_id, amount, date)",
        example_output: "Context: Table relationships and column mappings identified",
    },
    PipelineStep {
        number: 4,
        icon: "🔧",
        title: "LLM SQL Generation",
        description: "Large Language Model generates SQL query",
        details: &[
            "Context-aware prompt engineering",
            "SQL syntax generation",
            "Query optimization",
            "Safety validation",
        ],
        example_input: "Generated SQL with context and examples",
        example_output: "SELECT c.* FROM customers c JOIN orders o ON c.id = o.customer_id WHERE o.date >= '2024-01-01'",
    },
    PipelineStep {
        number: 5,
        icon: "🛡",
        title: "Validation & Execution",
        description: "SQL validation and safe execution",
        details: &[
            "Syntax validation",
            "Permission checking",
            "SQL injection prevention",
            "Result formatting",
        ],
        example_input: "Validated SQL query",
        example_output: "Executed safely with results returned as structured data",
    },
];

pub const TECH_STACK: &[StackColumn] = &[
    StackColumn {
        icon: "🤖",
        title: "Large Language Models",
        items: &["GPT-4 & GPT-3.5", "Claude 3", "BERT & RoBERTa", "Fine-tuned SQL models"],
    },
    StackColumn {
        icon: "🔍",
        title: "NLP Libraries",
        items: &["spaCy & NLTK", "Transformers", "Hugging Face", "OpenAI API"],
    },
    StackColumn {
        icon: "🗄",
        title: "Vector Databases",
        items: &["Pinecone", "Weaviate", "Chroma", "FAISS"],
    },
    StackColumn {
        icon: "⚙",
        title: "Processing",
        items: &["TensorFlow", "PyTorch", "ONNX Runtime", "CUDA acceleration"],
    },
];

/// Headline numbers (value, label).
pub const PERFORMANCE_METRICS: &[(&str, &str)] = &[
    ("99.2%", "Query Understanding Accuracy"),
    ("< 5ms", "Average Processing Time"),
    ("50+", "Supported Languages"),
    ("32K", "Context Window Tokens"),
];

/// Per-stage latency badges (stage, time).
pub const SPEED_BREAKDOWN: &[(&str, &str)] = &[
    ("Tokenization", "0.1ms"),
    ("Intent Classification", "1.2ms"),
    ("Entity Extraction", "2.1ms"),
    ("Context Building", "0.8ms"),
    ("SQL Generation", "0.8ms"),
];
