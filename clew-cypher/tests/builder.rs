use clew_cypher::{
    create, list_of, literal, match_, merge, node, optional_match, parameter, unwind, variable,
    BuilderError, Clause, Expr,
};

#[test]
fn empty_returning_is_a_stored_error_surfaced_by_build() {
    let person = node("Person").named("p");
    let broken = match_(&person).returning(Vec::new());
    assert_eq!(broken.error(), Some(&BuilderError::EmptyReturn));
    assert_eq!(
        broken.error().unwrap().to_string(),
        "return clause must have at least one expression"
    );
    let err = broken.build().unwrap_err();
    assert_eq!(err, BuilderError::EmptyReturn);
}

#[test]
fn errors_propagate_through_downstream_steps() {
    let person = node("Person").named("p");
    let broken = match_(&person).returning(Vec::new());
    // Every step derived from the broken one keeps reporting the earliest
    // error, never a fresh success.
    let downstream = broken.limit(10).order_by(variable("x")).distinct();
    assert_eq!(downstream.error(), Some(&BuilderError::EmptyReturn));
    assert_eq!(downstream.build().unwrap_err(), BuilderError::EmptyReturn);
}

#[test]
fn earliest_error_wins() {
    let broken = match_(Vec::new()).returning(Vec::new());
    assert_eq!(
        broken.error(),
        Some(&BuilderError::EmptyPattern { keyword: "MATCH" })
    );
}

#[test]
fn empty_pattern_lists_are_rejected() {
    assert_eq!(
        create(Vec::new()).build().unwrap_err(),
        BuilderError::EmptyPattern { keyword: "CREATE" }
    );
    assert_eq!(
        merge(Vec::new()).build().unwrap_err(),
        BuilderError::EmptyPattern { keyword: "MERGE" }
    );
}

#[test]
fn where_must_follow_match_or_with() {
    let person = node("Person").named("p");
    let broken = create(&person).where_(person.property("name").is_null());
    assert_eq!(broken.error(), Some(&BuilderError::MisplacedWhere));
}

#[test]
fn refinements_require_return_or_with() {
    let person = node("Person").named("p");
    let broken = match_(&person).limit(5);
    assert_eq!(
        broken.error(),
        Some(&BuilderError::MisplacedRefinement {
            refinement: "LIMIT"
        })
    );
}

#[test]
fn no_clause_may_follow_return() {
    let person = node("Person").named("p");
    let broken = match_(&person).returning(&person).with(&person);
    assert_eq!(
        broken.error(),
        Some(&BuilderError::AfterTerminal { keyword: "RETURN" })
    );
}

#[test]
fn no_clause_may_follow_delete() {
    let person = node("Person").named("p");
    let broken = match_(&person)
        .detach_delete(&person)
        .returning(&person);
    assert_eq!(
        broken.error(),
        Some(&BuilderError::AfterTerminal {
            keyword: "DETACH DELETE"
        })
    );
}

#[test]
fn clause_keywords_appear_in_construction_order() {
    let person = node("Person").named("p");
    let friend = node("Person").named("f");
    let statement = match_(&person)
        .optional_match(person.clone().relationship_to(friend.clone(), "KNOWS"))
        .with(vec![Expr::from(&person), Expr::from(&friend)])
        .returning(&friend)
        .build()
        .unwrap();
    let text = statement.text();
    let match_at = text.find("MATCH").unwrap();
    let optional_at = text.find("OPTIONAL MATCH").unwrap();
    let with_at = text.find("WITH").unwrap();
    let return_at = text.find("RETURN").unwrap();
    assert!(match_at < optional_at && optional_at < with_at && with_at < return_at);
    assert_eq!(text.matches("OPTIONAL MATCH").count(), 1);
    assert_eq!(text.matches("RETURN").count(), 1);
}

#[test]
fn create_and_merge_render_full_patterns() {
    let person = node("Person").named("p").prop("name", literal("Alice"));
    let statement = merge(&person).build().unwrap();
    assert_eq!(statement.text(), "MERGE (p:`Person` {name: 'Alice'})");

    let anonymous = create(node("Person").prop("name", literal("Bob")))
        .build()
        .unwrap();
    assert_eq!(anonymous.text(), "CREATE (:`Person` {name: 'Bob'})");
}

#[test]
fn consecutive_set_calls_extend_one_clause() {
    let person = node("Person").named("p");
    let statement = match_(&person)
        .set(person.property("age"), literal(40))
        .set(person.property("name"), parameter("name", "Carol"))
        .build()
        .unwrap();
    assert_eq!(
        statement.text(),
        "MATCH (p:`Person`) SET p.age = 40, p.name = $name"
    );
}

#[test]
fn whole_node_set_uses_the_alias() {
    let person = node("Person").named("p");
    let statement = match_(&person)
        .set(Expr::from(&person), parameter("props", serde_json::json!({"a": 1})))
        .build()
        .unwrap();
    assert_eq!(statement.text(), "MATCH (p:`Person`) SET p = $props");
}

#[test]
fn remove_renders_items() {
    let person = node("Person").named("p");
    let statement = match_(&person)
        .remove(person.property("nickname"))
        .build()
        .unwrap();
    assert_eq!(statement.text(), "MATCH (p:`Person`) REMOVE p.nickname");
}

#[test]
fn unwind_renders_expression_and_variable() {
    let statement = unwind(list_of(vec![literal(1), literal(2)]), "x")
        .returning(variable("x"))
        .build()
        .unwrap();
    assert_eq!(statement.text(), "UNWIND [1, 2] AS x RETURN x");
}

#[test]
fn unwind_rejects_empty_variable() {
    let broken = unwind(list_of(vec![literal(1)]), "");
    assert_eq!(broken.error(), Some(&BuilderError::EmptyUnwindVariable));
}

#[test]
fn delete_requires_items() {
    let person = node("Person").named("p");
    let broken = match_(&person).delete(Vec::new());
    assert_eq!(broken.error(), Some(&BuilderError::EmptyDelete));
}

#[test]
fn repeated_where_on_one_clause_and_combines() {
    let person = node("Person").named("p");
    let statement = match_(&person)
        .where_(person.property("age").gt(literal(30)))
        .where_(person.property("age").lt(literal(60)))
        .returning(&person)
        .build()
        .unwrap();
    assert_eq!(
        statement.text(),
        "MATCH (p:`Person`) WHERE (p.age > 30 AND p.age < 60) RETURN p"
    );
}

#[test]
fn cloned_builders_branch_independently() {
    let person = node("Person").named("p");
    let base = match_(&person);

    let reader = base
        .clone()
        .returning(&person)
        .build()
        .unwrap();
    let writer = base.detach_delete(&person).build().unwrap();

    assert_eq!(reader.text(), "MATCH (p:`Person`) RETURN p");
    assert_eq!(writer.text(), "MATCH (p:`Person`) DETACH DELETE p");
}

#[test]
fn optional_match_keyword() {
    let person = node("Person").named("p");
    let statement = optional_match(&person).returning(&person).build().unwrap();
    assert_eq!(statement.text(), "OPTIONAL MATCH (p:`Person`) RETURN p");
}

#[test]
fn distinct_applies_to_the_owning_projection() {
    let person = node("Person").named("p");
    let statement = match_(&person)
        .returning(&person)
        .distinct()
        .build()
        .unwrap();
    assert_eq!(statement.text(), "MATCH (p:`Person`) RETURN DISTINCT p");
}

#[test]
fn build_on_valid_chain_exposes_clauses() {
    let person = node("Person").named("p");
    let statement = match_(&person).returning(&person).build().unwrap();
    assert_eq!(statement.clauses().len(), 2);
    match &statement.clauses()[0] {
        Clause::Match(m) => assert!(!m.optional),
        other => panic!("unexpected clause: {other:?}"),
    }
}
