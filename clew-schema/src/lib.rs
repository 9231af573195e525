//! Index and constraint DDL statements over the same `Statement` contract
//! the builder produces. These are plain text emitters; nothing here goes
//! through the clause chain.

use clew_cypher::Statement;

/// `CREATE INDEX ON :\`Label\`(prop, ...)`.
///
/// Panics when `properties` is empty; an index over nothing is a usage
/// mistake, not a runtime condition.
pub fn create_index(label: &str, properties: &[&str]) -> Statement {
    Statement::raw(format!(
        "CREATE INDEX ON :`{label}`({})",
        join_properties(properties)
    ))
}

/// `DROP INDEX ON :\`Label\`(prop, ...)`.
pub fn drop_index(label: &str, properties: &[&str]) -> Statement {
    Statement::raw(format!(
        "DROP INDEX ON :`{label}`({})",
        join_properties(properties)
    ))
}

/// `CREATE CONSTRAINT ON (n:\`Label\`) ASSERT n.prop IS UNIQUE`.
pub fn create_unique_constraint(label: &str, property: &str) -> Statement {
    Statement::raw(format!(
        "CREATE CONSTRAINT ON (n:`{label}`) ASSERT n.{property} IS UNIQUE"
    ))
}

/// `DROP CONSTRAINT ON (n:\`Label\`) ASSERT n.prop IS UNIQUE`.
pub fn drop_unique_constraint(label: &str, property: &str) -> Statement {
    Statement::raw(format!(
        "DROP CONSTRAINT ON (n:`{label}`) ASSERT n.{property} IS UNIQUE"
    ))
}

fn join_properties(properties: &[&str]) -> String {
    assert!(
        !properties.is_empty(),
        "index statements require at least one property"
    );
    properties.join(", ")
}
