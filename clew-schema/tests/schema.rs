use clew_schema::{create_index, create_unique_constraint, drop_index, drop_unique_constraint};

#[test]
fn renders_index_statements() {
    let statement = create_index("Person", &["name"]);
    assert_eq!(statement.text(), "CREATE INDEX ON :`Person`(name)");
    assert!(statement.parameters().is_empty());

    let composite = create_index("Person", &["name", "born"]);
    assert_eq!(composite.text(), "CREATE INDEX ON :`Person`(name, born)");

    let dropped = drop_index("Person", &["name"]);
    assert_eq!(dropped.text(), "DROP INDEX ON :`Person`(name)");
}

#[test]
fn renders_constraint_statements() {
    let statement = create_unique_constraint("Movie", "title");
    assert_eq!(
        statement.text(),
        "CREATE CONSTRAINT ON (n:`Movie`) ASSERT n.title IS UNIQUE"
    );

    let dropped = drop_unique_constraint("Movie", "title");
    assert_eq!(
        dropped.text(),
        "DROP CONSTRAINT ON (n:`Movie`) ASSERT n.title IS UNIQUE"
    );
}

#[test]
#[should_panic(expected = "at least one property")]
fn index_without_properties_panics() {
    create_index("Person", &[]);
}
