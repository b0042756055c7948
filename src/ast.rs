use std::fmt;

/// A location in the source text.
///
/// Both coordinates are 1-based. Columns count characters, not bytes, so a
/// position can be shown to a user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number, starting at 1.
    pub line:   usize,
    /// Column number, starting at 1.
    pub column: usize,
}

impl Position {
    /// Creates a position from a line and a column.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A numeric literal as it appears in the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal such as `42`.
    Int(i64),
    /// A 64-bit floating-point literal such as `2.5`.
    Float(f64),
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node owns its children, so a tree can never share subtrees or form
/// cycles. Each variant records the position of the token that introduced it;
/// for binary operations that is the operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal.
    IntLiteral {
        /// The literal value.
        value:    i64,
        /// Where the literal starts.
        position: Position,
    },
    /// A floating-point literal.
    FloatLiteral {
        /// The literal value.
        value:    f64,
        /// Where the literal starts.
        position: Position,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name:     String,
        /// Where the name starts.
        position: Position,
    },
    /// A prefix operation, currently only negation.
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
        /// Position of the operator.
        position: Position,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Position of the operator.
        position: Position,
    },
}

impl Expr {
    /// Returns the source position recorded on this node.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::IntLiteral { position, .. }
            | Self::FloatLiteral { position, .. }
            | Self::Identifier { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. } => *position,
        }
    }
}

/// Renders the expression fully parenthesized, so grouping decided by the
/// parser is visible: `1 - 2 - 3` displays as `((1 - 2) - 3)`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntLiteral { value, .. } => write!(f, "{value}"),
            Self::FloatLiteral { value, .. } => write!(f, "{value:?}"),
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::UnaryOp { op, operand, .. } => write!(f, "({op}{operand})"),
            Self::BinaryOp { left, op, right, .. } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// A single statement of a program.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Binds the value of an expression to a name, e.g. `x = 1 + 2`.
    Assignment {
        /// The variable being declared or re-declared.
        target:   String,
        /// The assigned expression.
        value:    Expr,
        /// Position of the target name.
        position: Position,
    },
    /// An expression evaluated for its value.
    Expression(Expr),
}

impl Statement {
    /// Returns the expression held by this statement.
    #[must_use]
    pub const fn expr(&self) -> &Expr {
        match self {
            Self::Assignment { value, .. } => value,
            Self::Expression(expr) => expr,
        }
    }
}

/// An ordered sequence of statements, as produced by
/// [`parse_program`](crate::interpreter::parser::parse_program).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// The statements in source order.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
