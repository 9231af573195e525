use std::collections::HashMap;
use std::sync::OnceLock;

use serde_json::Value;
use thiserror::Error;

use crate::ast::Expr;
use crate::clause::{
    Clause, CreateClause, DeleteClause, MatchClause, MergeClause, OrderItem, RemoveClause,
    ReturnClause, SetClause, SortDirection, UnwindClause, WithClause,
};
use crate::pattern::{NodePattern, Pattern, PathPattern, RelationshipPattern};
use crate::render::{render_statement, RenderStyle};
use crate::params;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuilderError {
    #[error("return clause must have at least one expression")]
    EmptyReturn,
    #[error("with clause must have at least one expression")]
    EmptyWith,
    #[error("{keyword} clause must have at least one pattern")]
    EmptyPattern { keyword: &'static str },
    #[error("delete clause must have at least one expression")]
    EmptyDelete,
    #[error("remove clause must have at least one item")]
    EmptyRemove,
    #[error("unwind variable must not be empty")]
    EmptyUnwindVariable,
    #[error("WHERE must directly follow MATCH or WITH")]
    MisplacedWhere,
    #[error("{refinement} requires the chain to end in RETURN or WITH")]
    MisplacedRefinement { refinement: &'static str },
    #[error("no clause may follow {keyword}")]
    AfterTerminal { keyword: &'static str },
    #[error("statement has no clauses")]
    Empty,
}

/// Starts a chain with a MATCH clause.
pub fn match_(patterns: impl IntoPatterns) -> StatementBuilder {
    StatementBuilder::empty().match_(patterns)
}

/// Starts a chain with an OPTIONAL MATCH clause.
pub fn optional_match(patterns: impl IntoPatterns) -> StatementBuilder {
    StatementBuilder::empty().optional_match(patterns)
}

/// Starts a chain with a CREATE clause.
pub fn create(patterns: impl IntoPatterns) -> StatementBuilder {
    StatementBuilder::empty().create(patterns)
}

/// Starts a chain with a MERGE clause.
pub fn merge(patterns: impl IntoPatterns) -> StatementBuilder {
    StatementBuilder::empty().merge(patterns)
}

/// Starts a chain with an UNWIND clause.
pub fn unwind(expression: impl Into<Expr>, variable: impl Into<String>) -> StatementBuilder {
    StatementBuilder::empty().unwind(expression, variable)
}

fn attach_where(slot: &mut Option<Expr>, condition: Expr) {
    *slot = Some(match slot.take() {
        Some(existing) => existing.and(condition),
        None => condition,
    });
}

/// An append-only clause sequence under construction. Every fluent call
/// consumes the builder and returns a new one; branching a chain requires
/// an explicit `clone`, after which the branches are fully independent.
///
/// Contract violations are not surfaced where they happen: the first one is
/// recorded, every later call becomes a no-op that carries it forward, and
/// [`StatementBuilder::build`] returns it instead of a [`Statement`].
#[derive(Debug, Clone)]
pub struct StatementBuilder {
    clauses: Vec<Clause>,
    error: Option<BuilderError>,
}

impl StatementBuilder {
    fn empty() -> Self {
        StatementBuilder {
            clauses: Vec::new(),
            error: None,
        }
    }

    /// The earliest recorded construction error, if any.
    pub fn error(&self) -> Option<&BuilderError> {
        self.error.as_ref()
    }

    fn fail(mut self, error: BuilderError) -> Self {
        if self.error.is_none() {
            self.error = Some(error);
        }
        self
    }

    fn append(mut self, clause: Clause) -> Self {
        if self.error.is_some() {
            return self;
        }
        if let Some(last) = self.clauses.last() {
            if last.is_terminal() {
                let keyword = last.keyword();
                return self.fail(BuilderError::AfterTerminal { keyword });
            }
        }
        self.clauses.push(clause);
        self
    }

    fn append_patterns(
        self,
        patterns: impl IntoPatterns,
        keyword: &'static str,
        build: impl FnOnce(Vec<Pattern>) -> Clause,
    ) -> Self {
        if self.error.is_some() {
            return self;
        }
        let patterns = patterns.into_patterns();
        if patterns.is_empty() {
            return self.fail(BuilderError::EmptyPattern { keyword });
        }
        self.append(build(patterns))
    }

    pub fn match_(self, patterns: impl IntoPatterns) -> Self {
        self.append_patterns(patterns, "MATCH", |patterns| {
            Clause::Match(MatchClause {
                optional: false,
                patterns,
                where_clause: None,
            })
        })
    }

    pub fn optional_match(self, patterns: impl IntoPatterns) -> Self {
        self.append_patterns(patterns, "OPTIONAL MATCH", |patterns| {
            Clause::Match(MatchClause {
                optional: true,
                patterns,
                where_clause: None,
            })
        })
    }

    pub fn create(self, patterns: impl IntoPatterns) -> Self {
        self.append_patterns(patterns, "CREATE", |patterns| {
            Clause::Create(CreateClause { patterns })
        })
    }

    pub fn merge(self, patterns: impl IntoPatterns) -> Self {
        self.append_patterns(patterns, "MERGE", |patterns| {
            Clause::Merge(MergeClause { patterns })
        })
    }

    pub fn unwind(self, expression: impl Into<Expr>, variable: impl Into<String>) -> Self {
        if self.error.is_some() {
            return self;
        }
        let variable = variable.into();
        if variable.is_empty() {
            return self.fail(BuilderError::EmptyUnwindVariable);
        }
        self.append(Clause::Unwind(UnwindClause {
            expression: expression.into(),
            variable,
        }))
    }

    /// Attaches a filter to the chain's last clause. Valid only directly
    /// after MATCH or WITH; a second call on the same clause AND-combines
    /// with the existing condition.
    pub fn where_(mut self, condition: impl Into<Expr>) -> Self {
        if self.error.is_some() {
            return self;
        }
        let condition = condition.into();
        let attached = match self.clauses.last_mut() {
            Some(Clause::Match(m)) => {
                attach_where(&mut m.where_clause, condition);
                true
            }
            Some(Clause::With(w)) => {
                attach_where(&mut w.where_clause, condition);
                true
            }
            _ => false,
        };
        if !attached {
            return self.fail(BuilderError::MisplacedWhere);
        }
        self
    }

    pub fn with(self, items: impl IntoExprs) -> Self {
        if self.error.is_some() {
            return self;
        }
        let items = items.into_exprs();
        if items.is_empty() {
            return self.fail(BuilderError::EmptyWith);
        }
        self.append(Clause::With(WithClause {
            distinct: false,
            items,
            order: Vec::new(),
            skip: None,
            limit: None,
            where_clause: None,
        }))
    }

    pub fn returning(self, items: impl IntoExprs) -> Self {
        if self.error.is_some() {
            return self;
        }
        let items = items.into_exprs();
        if items.is_empty() {
            return self.fail(BuilderError::EmptyReturn);
        }
        self.append(Clause::Return(ReturnClause {
            distinct: false,
            items,
            order: Vec::new(),
            skip: None,
            limit: None,
        }))
    }

    pub fn delete(self, items: impl IntoExprs) -> Self {
        self.delete_inner(items, false)
    }

    pub fn detach_delete(self, items: impl IntoExprs) -> Self {
        self.delete_inner(items, true)
    }

    fn delete_inner(self, items: impl IntoExprs, detach: bool) -> Self {
        if self.error.is_some() {
            return self;
        }
        let items = items.into_exprs();
        if items.is_empty() {
            return self.fail(BuilderError::EmptyDelete);
        }
        self.append(Clause::Delete(DeleteClause { detach, items }))
    }

    /// Adds one assignment. Consecutive calls extend the same SET clause
    /// and render comma-joined.
    pub fn set(mut self, target: impl Into<Expr>, value: impl Into<Expr>) -> Self {
        if self.error.is_some() {
            return self;
        }
        let assignment = (target.into(), value.into());
        if let Some(Clause::Set(set)) = self.clauses.last_mut() {
            set.assignments.push(assignment);
            return self;
        }
        self.append(Clause::Set(SetClause {
            assignments: vec![assignment],
        }))
    }

    pub fn remove(mut self, items: impl IntoExprs) -> Self {
        if self.error.is_some() {
            return self;
        }
        let items = items.into_exprs();
        if items.is_empty() {
            return self.fail(BuilderError::EmptyRemove);
        }
        if let Some(Clause::Remove(remove)) = self.clauses.last_mut() {
            remove.items.extend(items);
            return self;
        }
        self.append(Clause::Remove(RemoveClause { items }))
    }

    pub fn distinct(self) -> Self {
        self.refine("DISTINCT", |clause| match clause {
            Clause::With(w) => {
                w.distinct = true;
                true
            }
            Clause::Return(r) => {
                r.distinct = true;
                true
            }
            _ => false,
        })
    }

    pub fn order_by(self, expr: impl Into<Expr>) -> Self {
        self.order_by_inner(expr.into(), SortDirection::Asc)
    }

    pub fn order_by_desc(self, expr: impl Into<Expr>) -> Self {
        self.order_by_inner(expr.into(), SortDirection::Desc)
    }

    fn order_by_inner(self, expr: Expr, direction: SortDirection) -> Self {
        self.refine("ORDER BY", move |clause| {
            let order = match clause {
                Clause::With(w) => &mut w.order,
                Clause::Return(r) => &mut r.order,
                _ => return false,
            };
            order.push(OrderItem { expr, direction });
            true
        })
    }

    pub fn skip(self, count: impl Into<Expr>) -> Self {
        let count = count.into();
        self.refine("SKIP", move |clause| {
            let slot = match clause {
                Clause::With(w) => &mut w.skip,
                Clause::Return(r) => &mut r.skip,
                _ => return false,
            };
            *slot = Some(count);
            true
        })
    }

    pub fn limit(self, count: impl Into<Expr>) -> Self {
        let count = count.into();
        self.refine("LIMIT", move |clause| {
            let slot = match clause {
                Clause::With(w) => &mut w.limit,
                Clause::Return(r) => &mut r.limit,
                _ => return false,
            };
            *slot = Some(count);
            true
        })
    }

    // Refinements mutate the owning RETURN/WITH clause in place and leave
    // the chain state untouched.
    fn refine(mut self, refinement: &'static str, apply: impl FnOnce(&mut Clause) -> bool) -> Self {
        if self.error.is_some() {
            return self;
        }
        let applied = match self.clauses.last_mut() {
            Some(clause) => apply(clause),
            None => false,
        };
        if !applied {
            return self.fail(BuilderError::MisplacedRefinement { refinement });
        }
        self
    }

    /// Freezes the chain. No rendering happens here; this is the single
    /// point where a recorded construction error surfaces.
    pub fn build(self) -> Result<Statement, BuilderError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if self.clauses.is_empty() {
            return Err(BuilderError::Empty);
        }
        Ok(Statement::new(self.clauses))
    }
}

/// The frozen artifact: rendered text and the parameter binding table are
/// computed on first access and cached. Both are pure functions of the
/// clause sequence, so racing initializations is harmless.
#[derive(Debug)]
pub struct Statement {
    clauses: Vec<Clause>,
    text: OnceLock<String>,
    parameters: OnceLock<HashMap<String, Value>>,
}

impl Statement {
    fn new(clauses: Vec<Clause>) -> Self {
        Statement {
            clauses,
            text: OnceLock::new(),
            parameters: OnceLock::new(),
        }
    }

    /// Wraps already-rendered query text, bypassing the builder. Used by
    /// the DDL helpers; carries no parameters.
    pub fn raw(text: impl Into<String>) -> Self {
        let statement = Statement::new(Vec::new());
        let _ = statement.text.set(text.into());
        statement
    }

    pub fn text(&self) -> &str {
        self.text
            .get_or_init(|| render_statement(&self.clauses, RenderStyle::Compact))
    }

    /// Multiline rendering: one top-level clause per line, attached
    /// sub-clauses indented. Not cached.
    pub fn pretty(&self) -> String {
        if self.clauses.is_empty() {
            return self.text().to_string();
        }
        render_statement(&self.clauses, RenderStyle::Pretty)
    }

    pub fn parameters(&self) -> &HashMap<String, Value> {
        self.parameters.get_or_init(|| params::collect(&self.clauses))
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
}

/// Pattern list argument for MATCH/CREATE/MERGE steps. Implemented for the
/// individual pattern shapes and for `Vec<Pattern>`; an empty vector is how
/// the empty-pattern-list contract violation is expressed.
pub trait IntoPatterns {
    fn into_patterns(self) -> Vec<Pattern>;
}

impl IntoPatterns for Pattern {
    fn into_patterns(self) -> Vec<Pattern> {
        vec![self]
    }
}

impl IntoPatterns for Vec<Pattern> {
    fn into_patterns(self) -> Vec<Pattern> {
        self
    }
}

impl IntoPatterns for NodePattern {
    fn into_patterns(self) -> Vec<Pattern> {
        vec![Pattern::Node(self)]
    }
}

impl IntoPatterns for &NodePattern {
    fn into_patterns(self) -> Vec<Pattern> {
        vec![Pattern::Node(self.clone())]
    }
}

impl IntoPatterns for RelationshipPattern {
    fn into_patterns(self) -> Vec<Pattern> {
        vec![Pattern::Relationship(self)]
    }
}

impl IntoPatterns for &RelationshipPattern {
    fn into_patterns(self) -> Vec<Pattern> {
        vec![Pattern::Relationship(self.clone())]
    }
}

impl IntoPatterns for PathPattern {
    fn into_patterns(self) -> Vec<Pattern> {
        vec![Pattern::Path(self)]
    }
}

impl IntoPatterns for &PathPattern {
    fn into_patterns(self) -> Vec<Pattern> {
        vec![Pattern::Path(self.clone())]
    }
}

/// Projection/item list argument for RETURN/WITH/DELETE/REMOVE steps.
pub trait IntoExprs {
    fn into_exprs(self) -> Vec<Expr>;
}

impl IntoExprs for Expr {
    fn into_exprs(self) -> Vec<Expr> {
        vec![self]
    }
}

impl IntoExprs for Vec<Expr> {
    fn into_exprs(self) -> Vec<Expr> {
        self
    }
}

impl IntoExprs for NodePattern {
    fn into_exprs(self) -> Vec<Expr> {
        vec![Expr::Node(self)]
    }
}

impl IntoExprs for &NodePattern {
    fn into_exprs(self) -> Vec<Expr> {
        vec![Expr::Node(self.clone())]
    }
}

impl IntoExprs for RelationshipPattern {
    fn into_exprs(self) -> Vec<Expr> {
        vec![Expr::Relationship(self)]
    }
}

impl IntoExprs for &RelationshipPattern {
    fn into_exprs(self) -> Vec<Expr> {
        vec![Expr::Relationship(self.clone())]
    }
}

impl IntoExprs for PathPattern {
    fn into_exprs(self) -> Vec<Expr> {
        vec![Expr::Path(self)]
    }
}

impl IntoExprs for &PathPattern {
    fn into_exprs(self) -> Vec<Expr> {
        vec![Expr::Path(self.clone())]
    }
}
