use crate::ast::Expr;

#[allow(clippy::large_enum_variant)]
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    Node(NodePattern),
    Relationship(RelationshipPattern),
    Path(PathPattern),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodePattern {
    pub alias: Option<String>,
    pub labels: Vec<String>,
    pub properties: Vec<(String, Expr)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RelationshipPattern {
    pub left: NodePattern,
    pub detail: RelationshipDetail,
    pub right: NodePattern,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RelationshipDetail {
    pub alias: Option<String>,
    pub types: Vec<String>,
    pub direction: RelationshipDirection,
    pub hops: Option<HopRange>,
    pub properties: Vec<(String, Expr)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelationshipDirection {
    #[default]
    Outgoing,
    Incoming,
    Bidirectional,
}

/// Variable-length hop bounds; either side may be open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HopRange {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathPattern {
    pub alias: Option<String>,
    pub start: NodePattern,
    pub segments: Vec<PathSegment>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PathSegment {
    pub detail: RelationshipDetail,
    pub node: NodePattern,
}

/// A node pattern with a single label and no alias.
pub fn node(label: impl Into<String>) -> NodePattern {
    NodePattern {
        alias: None,
        labels: vec![label.into()],
        properties: Vec::new(),
    }
}

/// A node pattern with no labels, matching any node.
pub fn any_node() -> NodePattern {
    NodePattern::default()
}

impl NodePattern {
    pub fn named(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Appends a label, preserving insertion order; a label already present
    /// is not added twice.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        if !self.labels.contains(&label) {
            self.labels.push(label);
        }
        self
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.properties.push((key.into(), value.into()));
        self
    }

    /// Property access through the node's alias. The returned expression is
    /// the usual starting point for comparisons (`.eq`, `.contains`, ...).
    ///
    /// Panics when the node is anonymous; there is no symbol to reference.
    pub fn property(&self, key: impl Into<String>) -> Expr {
        let alias = self
            .alias
            .as_ref()
            .expect("property access requires a named node pattern");
        Expr::Property {
            subject: Box::new(Expr::Variable(alias.clone())),
            key: key.into(),
        }
    }

    pub fn relationship_to(self, end: NodePattern, rel_type: impl Into<String>) -> RelationshipPattern {
        RelationshipPattern {
            left: self,
            detail: RelationshipDetail {
                types: vec![rel_type.into()],
                direction: RelationshipDirection::Outgoing,
                ..RelationshipDetail::default()
            },
            right: end,
        }
    }

    pub fn relationship_from(self, start: NodePattern, rel_type: impl Into<String>) -> RelationshipPattern {
        RelationshipPattern {
            left: self,
            detail: RelationshipDetail {
                types: vec![rel_type.into()],
                direction: RelationshipDirection::Incoming,
                ..RelationshipDetail::default()
            },
            right: start,
        }
    }

    pub fn relationship_between(self, other: NodePattern, rel_type: impl Into<String>) -> RelationshipPattern {
        RelationshipPattern {
            left: self,
            detail: RelationshipDetail {
                types: vec![rel_type.into()],
                direction: RelationshipDirection::Bidirectional,
                ..RelationshipDetail::default()
            },
            right: other,
        }
    }
}

impl RelationshipPattern {
    pub fn named(mut self, alias: impl Into<String>) -> Self {
        self.detail.alias = Some(alias.into());
        self
    }

    /// Appends an additional relationship type; multiple types render
    /// pipe-joined.
    pub fn typed(mut self, rel_type: impl Into<String>) -> Self {
        let rel_type = rel_type.into();
        if !self.detail.types.contains(&rel_type) {
            self.detail.types.push(rel_type);
        }
        self
    }

    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.detail.properties.push((key.into(), value.into()));
        self
    }

    pub fn min_hops(mut self, min: u64) -> Self {
        self.detail.hops.get_or_insert_with(HopRange::default).min = Some(min);
        self
    }

    pub fn max_hops(mut self, max: u64) -> Self {
        self.detail.hops.get_or_insert_with(HopRange::default).max = Some(max);
        self
    }

    /// Variable length with no bounds; renders as a bare `*`.
    pub fn unbounded_hops(mut self) -> Self {
        self.detail.hops = Some(HopRange::default());
        self
    }

    /// Property access through the relationship's alias.
    ///
    /// Panics when the relationship is anonymous.
    pub fn property(&self, key: impl Into<String>) -> Expr {
        let alias = self
            .detail
            .alias
            .as_ref()
            .expect("property access requires a named relationship pattern");
        Expr::Property {
            subject: Box::new(Expr::Variable(alias.clone())),
            key: key.into(),
        }
    }

    /// Extends the relationship into a path by hopping to a further node.
    pub fn relationship_to(self, next: NodePattern, rel_type: impl Into<String>) -> PathPattern {
        self.into_path(next, rel_type, RelationshipDirection::Outgoing)
    }

    /// Like [`RelationshipPattern::relationship_to`] with the new hop
    /// pointing at the path.
    pub fn relationship_from(self, next: NodePattern, rel_type: impl Into<String>) -> PathPattern {
        self.into_path(next, rel_type, RelationshipDirection::Incoming)
    }

    fn into_path(
        self,
        next: NodePattern,
        rel_type: impl Into<String>,
        direction: RelationshipDirection,
    ) -> PathPattern {
        PathPattern {
            alias: None,
            start: self.left,
            segments: vec![
                PathSegment {
                    detail: self.detail,
                    node: self.right,
                },
                PathSegment {
                    detail: RelationshipDetail {
                        types: vec![rel_type.into()],
                        direction,
                        ..RelationshipDetail::default()
                    },
                    node: next,
                },
            ],
        }
    }
}

impl PathPattern {
    pub fn named(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn relationship_to(mut self, next: NodePattern, rel_type: impl Into<String>) -> Self {
        self.segments.push(PathSegment {
            detail: RelationshipDetail {
                types: vec![rel_type.into()],
                direction: RelationshipDirection::Outgoing,
                ..RelationshipDetail::default()
            },
            node: next,
        });
        self
    }

    pub fn relationship_from(mut self, next: NodePattern, rel_type: impl Into<String>) -> Self {
        self.segments.push(PathSegment {
            detail: RelationshipDetail {
                types: vec![rel_type.into()],
                direction: RelationshipDirection::Incoming,
                ..RelationshipDetail::default()
            },
            node: next,
        });
        self
    }
}

impl From<NodePattern> for Pattern {
    fn from(value: NodePattern) -> Self {
        Pattern::Node(value)
    }
}

impl From<RelationshipPattern> for Pattern {
    fn from(value: RelationshipPattern) -> Self {
        Pattern::Relationship(value)
    }
}

impl From<PathPattern> for Pattern {
    fn from(value: PathPattern) -> Self {
        Pattern::Path(value)
    }
}

impl From<NodePattern> for Expr {
    fn from(value: NodePattern) -> Self {
        Expr::Node(value)
    }
}

impl From<&NodePattern> for Expr {
    fn from(value: &NodePattern) -> Self {
        Expr::Node(value.clone())
    }
}

impl From<RelationshipPattern> for Expr {
    fn from(value: RelationshipPattern) -> Self {
        Expr::Relationship(value)
    }
}

impl From<&RelationshipPattern> for Expr {
    fn from(value: &RelationshipPattern) -> Self {
        Expr::Relationship(value.clone())
    }
}

impl From<PathPattern> for Expr {
    fn from(value: PathPattern) -> Self {
        Expr::Path(value)
    }
}

impl From<&PathPattern> for Expr {
    fn from(value: &PathPattern) -> Self {
        Expr::Path(value.clone())
    }
}
