use std::collections::HashMap;

use serde_json::Value;

use crate::ast::Expr;
use crate::clause::Clause;
use crate::pattern::{NodePattern, Pattern, PathPattern, RelationshipDetail};

// Independent of the renderer on purpose: both passes match the full node
// set exhaustively, so a new variant is a compile error in each until it is
// handled. Collection spans every clause kind; duplicate names overwrite,
// last visited wins.
pub fn collect(clauses: &[Clause]) -> HashMap<String, Value> {
    let mut table = HashMap::new();
    for clause in clauses {
        collect_clause(clause, &mut table);
    }
    table
}

fn collect_clause(clause: &Clause, table: &mut HashMap<String, Value>) {
    match clause {
        Clause::Match(m) => {
            collect_patterns(&m.patterns, table);
            if let Some(condition) = &m.where_clause {
                collect_expr(condition, table);
            }
        }
        Clause::Create(c) => collect_patterns(&c.patterns, table),
        Clause::Merge(m) => collect_patterns(&m.patterns, table),
        Clause::Unwind(u) => collect_expr(&u.expression, table),
        Clause::With(w) => {
            collect_exprs(&w.items, table);
            for item in &w.order {
                collect_expr(&item.expr, table);
            }
            collect_optional(w.skip.as_ref(), table);
            collect_optional(w.limit.as_ref(), table);
            collect_optional(w.where_clause.as_ref(), table);
        }
        Clause::Return(r) => {
            collect_exprs(&r.items, table);
            for item in &r.order {
                collect_expr(&item.expr, table);
            }
            collect_optional(r.skip.as_ref(), table);
            collect_optional(r.limit.as_ref(), table);
        }
        Clause::Delete(d) => collect_exprs(&d.items, table),
        Clause::Set(s) => {
            for (target, value) in &s.assignments {
                collect_expr(target, table);
                collect_expr(value, table);
            }
        }
        Clause::Remove(r) => collect_exprs(&r.items, table),
    }
}

fn collect_optional(expr: Option<&Expr>, table: &mut HashMap<String, Value>) {
    if let Some(expr) = expr {
        collect_expr(expr, table);
    }
}

fn collect_exprs(items: &[Expr], table: &mut HashMap<String, Value>) {
    for item in items {
        collect_expr(item, table);
    }
}

fn collect_expr(expr: &Expr, table: &mut HashMap<String, Value>) {
    match expr {
        Expr::Literal(_) | Expr::Variable(_) => {}
        Expr::Parameter(parameter) => {
            // Unbound placeholders render but contribute nothing.
            if let Some(value) = &parameter.value {
                table.insert(parameter.name.clone(), value.clone());
            }
        }
        Expr::Property { subject, .. } => collect_expr(subject, table),
        Expr::Comparison { left, right, .. }
        | Expr::StringOp { left, right, .. }
        | Expr::Logical { left, right, .. } => {
            collect_expr(left, table);
            collect_expr(right, table);
        }
        Expr::Not(inner) => collect_expr(inner, table),
        Expr::IsNull { subject, .. } => collect_expr(subject, table),
        Expr::In { subject, list } => {
            collect_expr(subject, table);
            collect_expr(list, table);
        }
        Expr::FunctionCall { args, .. } => collect_exprs(args, table),
        Expr::List(items) => collect_exprs(items, table),
        Expr::Map(entries) => {
            for (_, value) in entries {
                collect_expr(value, table);
            }
        }
        Expr::Aliased { inner, .. } => collect_expr(inner, table),
        Expr::Node(node) => collect_node(node, table),
        Expr::Relationship(rel) => {
            collect_node(&rel.left, table);
            collect_detail(&rel.detail, table);
            collect_node(&rel.right, table);
        }
        Expr::Path(path) => collect_path(path, table),
    }
}

fn collect_patterns(patterns: &[Pattern], table: &mut HashMap<String, Value>) {
    for pattern in patterns {
        match pattern {
            Pattern::Node(node) => collect_node(node, table),
            Pattern::Relationship(rel) => {
                collect_node(&rel.left, table);
                collect_detail(&rel.detail, table);
                collect_node(&rel.right, table);
            }
            Pattern::Path(path) => collect_path(path, table),
        }
    }
}

fn collect_path(path: &PathPattern, table: &mut HashMap<String, Value>) {
    collect_node(&path.start, table);
    for segment in &path.segments {
        collect_detail(&segment.detail, table);
        collect_node(&segment.node, table);
    }
}

fn collect_node(node: &NodePattern, table: &mut HashMap<String, Value>) {
    for (_, value) in &node.properties {
        collect_expr(value, table);
    }
}

fn collect_detail(detail: &RelationshipDetail, table: &mut HashMap<String, Value>) {
    for (_, value) in &detail.properties {
        collect_expr(value, table);
    }
}
