use crate::ast::{Expr, Literal};
use crate::clause::{Clause, OrderItem, SortDirection};
use crate::pattern::{NodePattern, Pattern, PathPattern, RelationshipDetail, RelationshipDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// Clauses joined by single spaces on one line.
    Compact,
    /// One top-level clause per line, attached sub-clauses indented.
    Pretty,
}

pub fn render_statement(clauses: &[Clause], style: RenderStyle) -> String {
    let mut out = String::new();
    for clause in clauses {
        for line in clause_lines(clause) {
            if !out.is_empty() {
                match style {
                    RenderStyle::Compact => out.push(' '),
                    RenderStyle::Pretty => out.push('\n'),
                }
            }
            if style == RenderStyle::Pretty && line.attached {
                out.push_str("  ");
            }
            out.push_str(&line.text);
        }
    }
    out
}

// One keyword-led fragment of a clause: the clause head, or an attached
// sub-clause (WHERE, ORDER BY, SKIP, LIMIT) owned by it.
struct Line {
    text: String,
    attached: bool,
}

impl Line {
    fn head(text: String) -> Self {
        Line {
            text,
            attached: false,
        }
    }

    fn sub(text: String) -> Self {
        Line {
            text,
            attached: true,
        }
    }
}

fn clause_lines(clause: &Clause) -> Vec<Line> {
    let keyword = clause.keyword();
    match clause {
        Clause::Match(m) => {
            let mut lines = vec![Line::head(format!(
                "{keyword} {}",
                render_patterns(&m.patterns)
            ))];
            if let Some(condition) = &m.where_clause {
                lines.push(Line::sub(format!("WHERE {}", render_expr(condition))));
            }
            lines
        }
        Clause::Create(c) => vec![Line::head(format!(
            "{keyword} {}",
            render_patterns(&c.patterns)
        ))],
        Clause::Merge(m) => vec![Line::head(format!(
            "{keyword} {}",
            render_patterns(&m.patterns)
        ))],
        Clause::Unwind(u) => vec![Line::head(format!(
            "{keyword} {} AS {}",
            render_expr(&u.expression),
            u.variable
        ))],
        Clause::With(w) => {
            let mut lines = vec![Line::head(projection_head(keyword, w.distinct, &w.items))];
            push_ordering_lines(&mut lines, &w.order, w.skip.as_ref(), w.limit.as_ref());
            // In a WITH clause the filter comes after the paging slots.
            if let Some(condition) = &w.where_clause {
                lines.push(Line::sub(format!("WHERE {}", render_expr(condition))));
            }
            lines
        }
        Clause::Return(r) => {
            let mut lines = vec![Line::head(projection_head(keyword, r.distinct, &r.items))];
            push_ordering_lines(&mut lines, &r.order, r.skip.as_ref(), r.limit.as_ref());
            lines
        }
        Clause::Delete(d) => vec![Line::head(format!(
            "{keyword} {}",
            render_expr_list(&d.items)
        ))],
        Clause::Set(s) => {
            let assignments = s
                .assignments
                .iter()
                .map(|(target, value)| format!("{} = {}", render_expr(target), render_expr(value)))
                .collect::<Vec<_>>()
                .join(", ");
            vec![Line::head(format!("{keyword} {assignments}"))]
        }
        Clause::Remove(r) => vec![Line::head(format!(
            "{keyword} {}",
            render_expr_list(&r.items)
        ))],
    }
}

fn projection_head(keyword: &str, distinct: bool, items: &[Expr]) -> String {
    if distinct {
        format!("{keyword} DISTINCT {}", render_expr_list(items))
    } else {
        format!("{keyword} {}", render_expr_list(items))
    }
}

fn push_ordering_lines(
    lines: &mut Vec<Line>,
    order: &[OrderItem],
    skip: Option<&Expr>,
    limit: Option<&Expr>,
) {
    if !order.is_empty() {
        let items = order
            .iter()
            .map(|item| match item.direction {
                SortDirection::Asc => render_expr(&item.expr),
                SortDirection::Desc => format!("{} DESC", render_expr(&item.expr)),
            })
            .collect::<Vec<_>>()
            .join(", ");
        lines.push(Line::sub(format!("ORDER BY {items}")));
    }
    if let Some(skip) = skip {
        lines.push(Line::sub(format!("SKIP {}", render_expr(skip))));
    }
    if let Some(limit) = limit {
        lines.push(Line::sub(format!("LIMIT {}", render_expr(limit))));
    }
}

fn render_patterns(patterns: &[Pattern]) -> String {
    patterns
        .iter()
        .map(render_pattern)
        .collect::<Vec<_>>()
        .join(", ")
}

// Subject position: the full pattern shape is always emitted, alias or not.
pub(crate) fn render_pattern(pattern: &Pattern) -> String {
    let mut out = String::new();
    match pattern {
        Pattern::Node(node) => render_node(node, &mut out),
        Pattern::Relationship(rel) => {
            render_node(&rel.left, &mut out);
            render_detail(&rel.detail, &mut out);
            render_node(&rel.right, &mut out);
        }
        Pattern::Path(path) => render_path(path, &mut out),
    }
    out
}

fn render_path(path: &PathPattern, out: &mut String) {
    if let Some(alias) = &path.alias {
        out.push_str(alias);
        out.push_str(" = ");
    }
    render_node(&path.start, out);
    for segment in &path.segments {
        render_detail(&segment.detail, out);
        render_node(&segment.node, out);
    }
}

fn render_node(node: &NodePattern, out: &mut String) {
    out.push('(');
    if let Some(alias) = &node.alias {
        out.push_str(alias);
    }
    for label in &node.labels {
        out.push(':');
        push_backticked(label, out);
    }
    render_property_map(&node.properties, out);
    out.push(')');
}

fn render_detail(detail: &RelationshipDetail, out: &mut String) {
    match detail.direction {
        RelationshipDirection::Outgoing | RelationshipDirection::Bidirectional => {
            out.push_str("-[");
        }
        RelationshipDirection::Incoming => out.push_str("<-["),
    }
    if let Some(alias) = &detail.alias {
        out.push_str(alias);
    }
    for (position, rel_type) in detail.types.iter().enumerate() {
        out.push(if position == 0 { ':' } else { '|' });
        push_backticked(rel_type, out);
    }
    if let Some(hops) = &detail.hops {
        out.push('*');
        if let Some(min) = hops.min {
            out.push_str(&min.to_string());
        }
        if hops.min.is_some() || hops.max.is_some() {
            out.push_str("..");
        }
        if let Some(max) = hops.max {
            out.push_str(&max.to_string());
        }
    }
    render_property_map(&detail.properties, out);
    match detail.direction {
        RelationshipDirection::Outgoing => out.push_str("]->"),
        RelationshipDirection::Incoming | RelationshipDirection::Bidirectional => {
            out.push_str("]-");
        }
    }
}

fn render_property_map(properties: &[(String, Expr)], out: &mut String) {
    if properties.is_empty() {
        return;
    }
    out.push_str(" {");
    for (position, (key, value)) in properties.iter().enumerate() {
        if position > 0 {
            out.push_str(", ");
        }
        out.push_str(key);
        out.push_str(": ");
        out.push_str(&render_expr(value));
    }
    out.push('}');
}

fn render_expr_list(items: &[Expr]) -> String {
    items.iter().map(render_expr).collect::<Vec<_>>().join(", ")
}

pub(crate) fn render_expr(expr: &Expr) -> String {
    match expr {
        Expr::Literal(literal) => render_literal(literal),
        Expr::Parameter(parameter) => format!("${}", parameter.name),
        Expr::Variable(name) => name.clone(),
        Expr::Property { subject, key } => format!("{}.{key}", render_expr(subject)),
        Expr::Comparison { left, op, right } => {
            format!("{} {op} {}", render_expr(left), render_expr(right))
        }
        Expr::StringOp { left, op, right } => {
            format!("{} {op} {}", render_expr(left), render_expr(right))
        }
        Expr::Logical { left, op, right } => {
            format!("({} {op} {})", render_expr(left), render_expr(right))
        }
        Expr::Not(inner) => format!("NOT ({})", render_expr(inner)),
        Expr::IsNull { subject, negated } => {
            if *negated {
                format!("{} IS NOT NULL", render_expr(subject))
            } else {
                format!("{} IS NULL", render_expr(subject))
            }
        }
        Expr::In { subject, list } => {
            format!("{} IN {}", render_expr(subject), render_expr(list))
        }
        Expr::FunctionCall { name, args } => format!("{name}({})", render_expr_list(args)),
        Expr::List(items) => format!("[{}]", render_expr_list(items)),
        Expr::Map(entries) => {
            let body = entries
                .iter()
                .map(|(key, value)| format!("{key}: {}", render_expr(value)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{{body}}}")
        }
        Expr::Aliased { inner, alias } => {
            let mut out = render_expr(inner);
            out.push_str(" AS ");
            if needs_quoting(alias) {
                push_backticked(alias, &mut out);
            } else {
                out.push_str(alias);
            }
            out
        }
        // Value position: a named pattern collapses to its alias, an
        // anonymous one is spelled out in full.
        Expr::Node(node) => match &node.alias {
            Some(alias) => alias.clone(),
            None => {
                let mut out = String::new();
                render_node(node, &mut out);
                out
            }
        },
        Expr::Relationship(rel) => match &rel.detail.alias {
            Some(alias) => alias.clone(),
            None => {
                let mut out = String::new();
                render_node(&rel.left, &mut out);
                render_detail(&rel.detail, &mut out);
                render_node(&rel.right, &mut out);
                out
            }
        },
        Expr::Path(path) => match &path.alias {
            Some(alias) => alias.clone(),
            None => {
                let mut out = String::new();
                render_path(path, &mut out);
                out
            }
        },
    }
}

fn render_literal(literal: &Literal) -> String {
    match literal {
        Literal::String(value) => {
            let mut out = String::with_capacity(value.len() + 2);
            out.push('\'');
            for ch in value.chars() {
                if ch == '\'' || ch == '\\' {
                    out.push('\\');
                }
                out.push(ch);
            }
            out.push('\'');
            out
        }
        Literal::Integer(value) => value.to_string(),
        Literal::Float(value) => value.to_string(),
        Literal::Boolean(value) => value.to_string(),
        Literal::Null => "NULL".to_string(),
    }
}

fn push_backticked(identifier: &str, out: &mut String) {
    out.push('`');
    out.push_str(identifier);
    out.push('`');
}

fn needs_quoting(identifier: &str) -> bool {
    let mut chars = identifier.chars();
    match chars.next() {
        None => true,
        Some(first) if first.is_ascii_digit() => true,
        Some(first) if !first.is_ascii_alphabetic() && first != '_' => true,
        Some(_) => identifier
            .chars()
            .any(|ch| !ch.is_ascii_alphanumeric() && ch != '_'),
    }
}
