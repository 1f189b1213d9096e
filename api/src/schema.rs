//! Illustrative schema and health payloads shown in the docs.
//!
//! These mirror what the NL2SQL backend advertises on `/v1/schema` and
//! `/v1/health`. Nothing here talks to a database.

use serde::Serialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnInfo {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub sql_type: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableInfo {
    pub name: &'static str,
    pub columns: &'static [ColumnInfo],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SchemaCatalog {
    pub tables: &'static [TableInfo],
}

const fn col(
    name: &'static str,
    sql_type: &'static str,
    description: &'static str,
) -> ColumnInfo {
    ColumnInfo {
        name,
        sql_type,
        description,
    }
}

const CUSTOMERS: &[ColumnInfo] = &[
    col("id", "INTEGER", "Primary key"),
    col("name", "VARCHAR(100)", "Customer name"),
    col("email", "VARCHAR(100)", "Customer email"),
    col("created_at", "TIMESTAMP", "Registration date"),
    col("status", "VARCHAR(20)", "Customer status"),
];

const ORDERS: &[ColumnInfo] = &[
    col("id", "INTEGER", "Primary key"),
    col("customer_id", "INTEGER", "Foreign key to customers"),
    col("amount", "DECIMAL(10,2)", "Order amount"),
    col("status", "VARCHAR(20)", "Order status"),
    col("created_at", "TIMESTAMP", "Order date"),
];

const PRODUCTS: &[ColumnInfo] = &[
    col("id", "INTEGER", "Primary key"),
    col("name", "VARCHAR(200)", "Product name"),
    col("price", "DECIMAL(10,2)", "Product price"),
    col("category", "VARCHAR(50)", "Product category"),
    col("stock_quantity", "INTEGER", "Available stock"),
];

const SAMPLE_TABLES: &[TableInfo] = &[
    TableInfo {
        name: "customers",
        columns: CUSTOMERS,
    },
    TableInfo {
        name: "orders",
        columns: ORDERS,
    },
    TableInfo {
        name: "products",
        columns: PRODUCTS,
    },
];

impl SchemaCatalog {
    pub const fn sample() -> Self {
        Self {
            tables: SAMPLE_TABLES,
        }
    }

    pub fn table(&self, name: &str) -> Option<&'static TableInfo> {
        self.tables.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn column_count(&self) -> usize {
        self.tables.iter().map(|t| t.columns.len()).sum()
    }
}

/// Example `/v1/health` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub nlp_models: &'static str,
    pub timestamp: String,
}

impl HealthReport {
    pub fn simulated(now: OffsetDateTime) -> Self {
        Self {
            status: "healthy",
            nlp_models: "active",
            timestamp: now.format(&Rfc3339).unwrap_or_default(),
        }
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
