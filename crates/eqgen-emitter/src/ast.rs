//! C# syntax nodes for synthesized members.
//!
//! The tree covers exactly the constructs an `Equals` body is built from.
//! Nodes carry display names rather than `TypeId`s, so a tree can be printed
//! without the database that produced it.

/// A C# expression or statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsNode {
    // =========================================================================
    // Literals
    // =========================================================================
    /// `true`, `false`
    BooleanLiteral(bool),

    /// `null`
    NullLiteral,

    // =========================================================================
    // Names
    // =========================================================================
    /// Local, parameter or simple name: `obj`, `point`
    Identifier(String),

    /// `this`
    This,

    /// `base`
    Base,

    /// Constructed generic type: `EqualityComparer<Address>`
    GenericName { name: String, arguments: Vec<String> },

    // =========================================================================
    // Expressions
    // =========================================================================
    /// `receiver.name`
    MemberAccess { receiver: Box<Self>, name: String },

    /// `callee(arguments)`
    Invocation {
        callee: Box<Self>,
        arguments: Vec<Self>,
    },

    /// `!operand`
    LogicalNot(Box<Self>),

    /// `left && right`
    LogicalAnd { left: Box<Self>, right: Box<Self> },

    /// `left == right`, `left != right`
    Binary {
        left: Box<Self>,
        operator: &'static str,
        right: Box<Self>,
    },

    /// `expr is T`
    IsType { expr: Box<Self>, ty: String },

    /// `(T)expr`
    Cast { ty: String, expr: Box<Self> },

    /// `expr as T`
    As { expr: Box<Self>, ty: String },

    // =========================================================================
    // Statements
    // =========================================================================
    /// `var name = initializer;`
    LocalDeclaration { name: String, initializer: Box<Self> },

    /// `if (condition) { ... }`
    If {
        condition: Box<Self>,
        then_branch: Vec<Self>,
    },

    /// `return expr;`
    Return(Box<Self>),
}

impl CsNode {
    pub fn id(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    pub fn generic(name: impl Into<String>, arguments: Vec<String>) -> Self {
        Self::GenericName {
            name: name.into(),
            arguments,
        }
    }

    pub fn prop(receiver: Self, name: impl Into<String>) -> Self {
        Self::MemberAccess {
            receiver: Box::new(receiver),
            name: name.into(),
        }
    }

    pub fn call(callee: Self, arguments: Vec<Self>) -> Self {
        Self::Invocation {
            callee: Box::new(callee),
            arguments,
        }
    }

    pub fn not(operand: Self) -> Self {
        Self::LogicalNot(Box::new(operand))
    }

    pub fn and(left: Self, right: Self) -> Self {
        Self::LogicalAnd {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// `left == right`
    pub fn eq(left: Self, right: Self) -> Self {
        Self::Binary {
            left: Box::new(left),
            operator: "==",
            right: Box::new(right),
        }
    }

    /// `left != right`
    pub fn ne(left: Self, right: Self) -> Self {
        Self::Binary {
            left: Box::new(left),
            operator: "!=",
            right: Box::new(right),
        }
    }

    pub fn is_type(expr: Self, ty: impl Into<String>) -> Self {
        Self::IsType {
            expr: Box::new(expr),
            ty: ty.into(),
        }
    }

    pub fn cast(ty: impl Into<String>, expr: Self) -> Self {
        Self::Cast {
            ty: ty.into(),
            expr: Box::new(expr),
        }
    }

    pub fn as_type(expr: Self, ty: impl Into<String>) -> Self {
        Self::As {
            expr: Box::new(expr),
            ty: ty.into(),
        }
    }

    pub fn var_decl(name: impl Into<String>, initializer: Self) -> Self {
        Self::LocalDeclaration {
            name: name.into(),
            initializer: Box::new(initializer),
        }
    }

    pub fn if_stmt(condition: Self, then_branch: Vec<Self>) -> Self {
        Self::If {
            condition: Box::new(condition),
            then_branch,
        }
    }

    pub fn ret(expr: Self) -> Self {
        Self::Return(Box::new(expr))
    }

    /// Whether the node binds tighter than any unary or binary operator,
    /// so it never needs parentheses as an operand.
    pub const fn is_primary(&self) -> bool {
        matches!(
            self,
            Self::BooleanLiteral(_)
                | Self::NullLiteral
                | Self::Identifier(_)
                | Self::This
                | Self::Base
                | Self::GenericName { .. }
                | Self::MemberAccess { .. }
                | Self::Invocation { .. }
        )
    }

    pub const fn is_statement(&self) -> bool {
        matches!(
            self,
            Self::LocalDeclaration { .. } | Self::If { .. } | Self::Return(_)
        )
    }

    /// Operands of a `&&` chain, left to right, regardless of nesting.
    pub fn conjuncts(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        collect_conjuncts(self, &mut out);
        out
    }
}

fn collect_conjuncts<'a>(node: &'a CsNode, out: &mut Vec<&'a CsNode>) {
    match node {
        CsNode::LogicalAnd { left, right } => {
            collect_conjuncts(left, out);
            collect_conjuncts(right, out);
        }
        other => out.push(other),
    }
}
