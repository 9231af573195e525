use serde_json::Value;
use strum_macros::Display;

use crate::pattern::{NodePattern, PathPattern, RelationshipPattern};

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Parameter(Parameter),
    Variable(String),
    Property {
        subject: Box<Expr>,
        key: String,
    },
    Comparison {
        left: Box<Expr>,
        op: ComparisonOperator,
        right: Box<Expr>,
    },
    StringOp {
        left: Box<Expr>,
        op: StringOperator,
        right: Box<Expr>,
    },
    Logical {
        left: Box<Expr>,
        op: LogicalOperator,
        right: Box<Expr>,
    },
    Not(Box<Expr>),
    IsNull {
        subject: Box<Expr>,
        negated: bool,
    },
    In {
        subject: Box<Expr>,
        list: Box<Expr>,
    },
    FunctionCall {
        name: String,
        args: Vec<Expr>,
    },
    List(Vec<Expr>),
    Map(Vec<(String, Expr)>),
    Aliased {
        inner: Box<Expr>,
        alias: String,
    },
    Node(NodePattern),
    Relationship(RelationshipPattern),
    Path(PathPattern),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Null,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ComparisonOperator {
    #[strum(serialize = "=")]
    Eq,
    #[strum(serialize = "<>")]
    Ne,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = "<=")]
    Lte,
    #[strum(serialize = ">")]
    Gt,
    #[strum(serialize = ">=")]
    Gte,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StringOperator {
    #[strum(serialize = "STARTS WITH")]
    StartsWith,
    #[strum(serialize = "ENDS WITH")]
    EndsWith,
    #[strum(serialize = "CONTAINS")]
    Contains,
    #[strum(serialize = "=~")]
    Regex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LogicalOperator {
    #[strum(serialize = "AND")]
    And,
    #[strum(serialize = "OR")]
    Or,
    #[strum(serialize = "XOR")]
    Xor,
}

pub fn literal(value: impl Into<Literal>) -> Expr {
    Expr::Literal(value.into())
}

pub fn null() -> Expr {
    Expr::Literal(Literal::Null)
}

/// A named placeholder bound to a value; the value travels in the binding
/// table instead of being inlined into the rendered text.
pub fn parameter(name: impl Into<String>, value: impl Into<Value>) -> Expr {
    Expr::Parameter(Parameter {
        name: name.into(),
        value: Some(value.into()),
    })
}

/// A placeholder with no bound value; renders as `$name` but never enters
/// the binding table.
pub fn parameter_unbound(name: impl Into<String>) -> Expr {
    Expr::Parameter(Parameter {
        name: name.into(),
        value: None,
    })
}

pub fn variable(name: impl Into<String>) -> Expr {
    Expr::Variable(name.into())
}

pub fn function(name: impl Into<String>, args: Vec<Expr>) -> Expr {
    Expr::FunctionCall {
        name: name.into(),
        args,
    }
}

pub fn list_of(items: Vec<Expr>) -> Expr {
    Expr::List(items)
}

pub fn map_of<K: Into<String>>(entries: Vec<(K, Expr)>) -> Expr {
    Expr::Map(
        entries
            .into_iter()
            .map(|(key, value)| (key.into(), value))
            .collect(),
    )
}

// Combinators return new composite nodes; operands are consumed, never
// mutated in place.
#[allow(clippy::should_implement_trait)]
impl Expr {
    fn comparison(self, op: ComparisonOperator, right: impl Into<Expr>) -> Expr {
        Expr::Comparison {
            left: Box::new(self),
            op,
            right: Box::new(right.into()),
        }
    }

    fn string_op(self, op: StringOperator, right: impl Into<Expr>) -> Expr {
        Expr::StringOp {
            left: Box::new(self),
            op,
            right: Box::new(right.into()),
        }
    }

    fn logical(self, op: LogicalOperator, right: impl Into<Expr>) -> Expr {
        Expr::Logical {
            left: Box::new(self),
            op,
            right: Box::new(right.into()),
        }
    }

    pub fn eq(self, other: impl Into<Expr>) -> Expr {
        self.comparison(ComparisonOperator::Eq, other)
    }

    pub fn ne(self, other: impl Into<Expr>) -> Expr {
        self.comparison(ComparisonOperator::Ne, other)
    }

    pub fn lt(self, other: impl Into<Expr>) -> Expr {
        self.comparison(ComparisonOperator::Lt, other)
    }

    pub fn lte(self, other: impl Into<Expr>) -> Expr {
        self.comparison(ComparisonOperator::Lte, other)
    }

    pub fn gt(self, other: impl Into<Expr>) -> Expr {
        self.comparison(ComparisonOperator::Gt, other)
    }

    pub fn gte(self, other: impl Into<Expr>) -> Expr {
        self.comparison(ComparisonOperator::Gte, other)
    }

    pub fn starts_with(self, other: impl Into<Expr>) -> Expr {
        self.string_op(StringOperator::StartsWith, other)
    }

    pub fn ends_with(self, other: impl Into<Expr>) -> Expr {
        self.string_op(StringOperator::EndsWith, other)
    }

    pub fn contains(self, other: impl Into<Expr>) -> Expr {
        self.string_op(StringOperator::Contains, other)
    }

    pub fn matches(self, pattern: impl Into<Expr>) -> Expr {
        self.string_op(StringOperator::Regex, pattern)
    }

    pub fn and(self, other: impl Into<Expr>) -> Expr {
        self.logical(LogicalOperator::And, other)
    }

    pub fn or(self, other: impl Into<Expr>) -> Expr {
        self.logical(LogicalOperator::Or, other)
    }

    pub fn xor(self, other: impl Into<Expr>) -> Expr {
        self.logical(LogicalOperator::Xor, other)
    }

    pub fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }

    pub fn is_null(self) -> Expr {
        Expr::IsNull {
            subject: Box::new(self),
            negated: false,
        }
    }

    pub fn is_not_null(self) -> Expr {
        Expr::IsNull {
            subject: Box::new(self),
            negated: true,
        }
    }

    pub fn in_list(self, list: impl Into<Expr>) -> Expr {
        Expr::In {
            subject: Box::new(self),
            list: Box::new(list.into()),
        }
    }

    pub fn property(self, key: impl Into<String>) -> Expr {
        Expr::Property {
            subject: Box::new(self),
            key: key.into(),
        }
    }

    pub fn alias(self, alias: impl Into<String>) -> Expr {
        Expr::Aliased {
            inner: Box::new(self),
            alias: alias.into(),
        }
    }
}

impl From<Literal> for Expr {
    fn from(value: Literal) -> Self {
        Expr::Literal(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Literal::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Literal::String(value)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Integer(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Integer(value as i64)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Boolean(value)
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::Literal(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Expr::Literal(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Literal(value.into())
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Literal(value.into())
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Literal(value.into())
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::Literal(value.into())
    }
}
