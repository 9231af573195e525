use clew_cypher::{
    any_node, function, list_of, literal, map_of, match_, node, null, parameter, unwind, variable,
};

#[test]
fn renders_relationship_pattern() {
    let person = node("Person").named("p");
    let movie = node("Movie").named("m");
    let statement = match_(person.clone().relationship_to(movie, "ACTED_IN"))
        .returning(&person)
        .build()
        .unwrap();
    assert_eq!(
        statement.text(),
        "MATCH (p:`Person`)-[:`ACTED_IN`]->(m:`Movie`) RETURN p"
    );
}

#[test]
fn renders_match_where_return_with_inline_literal() {
    let person = node("Person").named("p");
    let statement = match_(&person)
        .where_(person.property("name").eq(literal("Tom Hanks")))
        .returning(&person)
        .build()
        .unwrap();
    assert_eq!(
        statement.text(),
        "MATCH (p:`Person`) WHERE p.name = 'Tom Hanks' RETURN p"
    );
    assert!(statement.parameters().is_empty());
}

#[test]
fn renders_parameter_placeholder() {
    let person = node("Person").named("p");
    let statement = match_(&person)
        .where_(person.property("name").eq(parameter("name", "Tom Hanks")))
        .returning(&person)
        .build()
        .unwrap();
    assert_eq!(
        statement.text(),
        "MATCH (p:`Person`) WHERE p.name = $name RETURN p"
    );
    assert_eq!(
        statement.parameters().get("name"),
        Some(&serde_json::json!("Tom Hanks"))
    );
}

#[test]
fn renders_anonymous_multi_label_node_with_properties() {
    let statement = match_(node("Actor").label("Director").prop("active", true))
        .returning(literal(1))
        .build()
        .unwrap();
    assert_eq!(
        statement.text(),
        "MATCH (:`Actor`:`Director` {active: true}) RETURN 1"
    );
}

#[test]
fn renders_relationship_detail_in_full() {
    let a = node("City").named("a");
    let b = node("City").named("b");
    let rel = a
        .clone()
        .relationship_to(b, "ROAD")
        .typed("FERRY")
        .named("r")
        .min_hops(1)
        .max_hops(3)
        .prop("toll", literal(false));
    let statement = match_(rel).returning(&a).build().unwrap();
    assert_eq!(
        statement.text(),
        "MATCH (a:`City`)-[r:`ROAD`|`FERRY`*1..3 {toll: false}]->(b:`City`) RETURN a"
    );
}

#[test]
fn renders_hop_range_variants() {
    let a = node("N").named("a");
    let b = node("N").named("b");

    let min_only = match_(a.clone().relationship_to(b.clone(), "T").min_hops(2))
        .returning(&a)
        .build()
        .unwrap();
    assert!(min_only.text().contains("[:`T`*2..]"));

    let max_only = match_(a.clone().relationship_to(b.clone(), "T").max_hops(4))
        .returning(&a)
        .build()
        .unwrap();
    assert!(max_only.text().contains("[:`T`*..4]"));

    let unbounded = match_(a.clone().relationship_to(b, "T").unbounded_hops())
        .returning(&a)
        .build()
        .unwrap();
    assert!(unbounded.text().contains("[:`T`*]"));
}

#[test]
fn renders_direction_glyphs() {
    let a = node("N").named("a");
    let b = node("N").named("b");

    let incoming = match_(a.clone().relationship_from(b.clone(), "T"))
        .returning(&a)
        .build()
        .unwrap();
    assert!(incoming.text().contains("(a:`N`)<-[:`T`]-(b:`N`)"));

    let undirected = match_(a.clone().relationship_between(b, "T"))
        .returning(&a)
        .build()
        .unwrap();
    assert!(undirected.text().contains("(a:`N`)-[:`T`]-(b:`N`)"));
}

#[test]
fn renders_path_variable_and_alias_substitution() {
    let a = node("Person").named("a");
    let b = node("Person").named("b");
    let path = a
        .clone()
        .relationship_to(b, "KNOWS")
        .relationship_to(node("Person").named("c"), "KNOWS")
        .named("trail");
    let statement = match_(path.clone())
        .returning(path)
        .build()
        .unwrap();
    assert_eq!(
        statement.text(),
        "MATCH trail = (a:`Person`)-[:`KNOWS`]->(b:`Person`)-[:`KNOWS`]->(c:`Person`) RETURN trail"
    );
}

#[test]
fn logical_operators_parenthesize_but_comparisons_do_not() {
    let p = node("Person").named("p");
    let condition = p
        .property("age")
        .gt(literal(30))
        .and(p.property("name").starts_with(literal("T")).or(p.property("name").is_null()));
    let statement = match_(&p).where_(condition).returning(&p).build().unwrap();
    assert_eq!(
        statement.text(),
        "MATCH (p:`Person`) WHERE (p.age > 30 AND (p.name STARTS WITH 'T' OR p.name IS NULL)) RETURN p"
    );
}

#[test]
fn renders_negation_with_parentheses() {
    let p = node("Person").named("p");
    let statement = match_(&p)
        .where_(p.property("retired").eq(literal(true)).not())
        .returning(&p)
        .build()
        .unwrap();
    assert!(statement.text().contains("WHERE NOT (p.retired = true)"));
}

#[test]
fn renders_in_list_and_functions() {
    let p = node("Person").named("p");
    let statement = match_(&p)
        .where_(
            p.property("name")
                .in_list(list_of(vec![literal("Tom"), literal("Meg")])),
        )
        .returning(function("count", vec![(&p).into()]).alias("total"))
        .build()
        .unwrap();
    assert_eq!(
        statement.text(),
        "MATCH (p:`Person`) WHERE p.name IN ['Tom', 'Meg'] RETURN count(p) AS total"
    );
}

#[test]
fn renders_literals() {
    let statement = unwind(
        list_of(vec![
            literal(1),
            literal(2.5),
            literal(false),
            null(),
            literal("it's"),
        ]),
        "x",
    )
    .returning(variable("x"))
    .build()
    .unwrap();
    assert_eq!(
        statement.text(),
        "UNWIND [1, 2.5, false, NULL, 'it\\'s'] AS x RETURN x"
    );
}

#[test]
fn renders_map_expression() {
    let statement = unwind(map_of(vec![("a", literal(1)), ("b", literal("x"))]), "row")
        .returning(variable("row"))
        .build()
        .unwrap();
    assert_eq!(statement.text(), "UNWIND {a: 1, b: 'x'} AS row RETURN row");
}

#[test]
fn quotes_projection_alias_only_when_needed() {
    let p = node("Movie").named("m");
    let statement = match_(&p)
        .returning(vec![
            p.property("title").alias("title"),
            p.property("released").alias("release year"),
        ])
        .build()
        .unwrap();
    assert_eq!(
        statement.text(),
        "MATCH (m:`Movie`) RETURN m.title AS title, m.released AS `release year`"
    );
}

#[test]
fn renders_unlabeled_node() {
    let statement = match_(any_node().named("n"))
        .returning(variable("n"))
        .build()
        .unwrap();
    assert_eq!(statement.text(), "MATCH (n) RETURN n");
}

#[test]
fn renders_remaining_comparison_operators() {
    let p = node("Person").named("p");
    let statement = match_(&p)
        .where_(
            p.property("a")
                .ne(literal(1))
                .xor(p.property("b").lte(literal(2)))
                .or(p.property("c").gte(literal(3))),
        )
        .returning(&p)
        .build()
        .unwrap();
    assert!(statement
        .text()
        .contains("WHERE ((p.a <> 1 XOR p.b <= 2) OR p.c >= 3)"));
}

#[test]
fn renders_string_suffix_and_regex_operators() {
    let p = node("Person").named("p");
    let statement = match_(&p)
        .where_(
            p.property("name")
                .ends_with(literal("son"))
                .and(p.property("bio").matches(literal("actor.*"))),
        )
        .returning(&p)
        .build()
        .unwrap();
    assert!(statement
        .text()
        .contains("WHERE (p.name ENDS WITH 'son' AND p.bio =~ 'actor.*')"));
}

#[test]
fn renders_is_not_null() {
    let p = node("Person").named("p");
    let statement = match_(&p)
        .where_(p.property("died").is_not_null())
        .returning(&p)
        .build()
        .unwrap();
    assert!(statement.text().contains("WHERE p.died IS NOT NULL"));
}

#[test]
fn rendering_is_idempotent() {
    let p = node("Person").named("p");
    let statement = match_(&p)
        .where_(p.property("name").eq(parameter("name", "Tom Hanks")))
        .returning(&p)
        .build()
        .unwrap();
    let first = statement.text().to_string();
    assert_eq!(statement.text(), first);
    let params_first = statement.parameters().clone();
    assert_eq!(statement.parameters(), &params_first);
}

#[test]
fn pretty_style_puts_clauses_on_their_own_lines() {
    let p = node("Person").named("p");
    let statement = match_(&p)
        .where_(p.property("age").gt(literal(30)))
        .returning(&p)
        .order_by(p.property("name"))
        .limit(10)
        .build()
        .unwrap();
    assert_eq!(
        statement.pretty(),
        "MATCH (p:`Person`)\n  WHERE p.age > 30\nRETURN p\n  ORDER BY p.name\n  LIMIT 10"
    );
    // The compact contract output is unchanged by pretty rendering.
    assert_eq!(
        statement.text(),
        "MATCH (p:`Person`) WHERE p.age > 30 RETURN p ORDER BY p.name LIMIT 10"
    );
}

#[test]
fn with_clause_renders_paging_before_where() {
    let p = node("Person").named("p");
    let statement = match_(&p)
        .with(&p)
        .order_by_desc(p.property("age"))
        .skip(5)
        .limit(10)
        .where_(p.property("age").gt(literal(21)))
        .returning(&p)
        .build()
        .unwrap();
    assert_eq!(
        statement.text(),
        "MATCH (p:`Person`) WITH p ORDER BY p.age DESC SKIP 5 LIMIT 10 WHERE p.age > 21 RETURN p"
    );
}
