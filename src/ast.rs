use std::{fmt, rc::Rc};

/// The root node produced by the parser.
///
/// A program is an ordered sequence of statements. Rendering a program
/// concatenates the rendering of every statement, which is the textual form
/// the parser tests compare against.
///
/// ## Example
/// ```
/// use monkey::ast::{Expression, Program, Statement};
///
/// let program = Program { statements: vec![Statement::Expression {
///                             expression: Expression::IntegerLiteral(5),
///                         }], };
///
/// assert_eq!(program.to_string(), "5");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A single statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// The bound name.
        name:  Identifier,
        /// The expression whose value is bound.
        value: Expression,
    },
    /// `return <value>;`
    Return {
        /// The returned expression.
        value: Expression,
    },
    /// An expression evaluated for its value.
    Expression {
        /// The wrapped expression.
        expression: Expression,
    },
    /// A braced sequence of statements.
    Block(BlockStatement),
}

/// A braced sequence of statements, used as the body of conditionals and
/// functions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockStatement {
    /// Statements inside the braces.
    pub statements: Vec<Statement>,
}

/// A name, either bound by `let`, declared as a parameter, or referenced in an
/// expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The identifier text.
    pub name: String,
}

impl Identifier {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An abstract syntax tree node representing an expression.
///
/// Every variant renders to a deterministic textual form. Prefix, infix and
/// index expressions are fully parenthesized so operator binding is visible in
/// the output.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// A 64-bit signed integer literal.
    IntegerLiteral(i64),
    /// A string literal, without the surrounding quotes.
    StringLiteral(String),
    /// `true` or `false`.
    BoolLiteral(bool),
    /// A prefix operation such as `-x` or `!ok`.
    Prefix {
        /// The operator.
        operator: UnaryOperator,
        /// The operand.
        right:    Box<Self>,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        operator: BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
    },
    /// Conditional expression.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated if the condition is truthy.
        consequence: BlockStatement,
        /// Optional block evaluated otherwise.
        alternative: Option<BlockStatement>,
    },
    /// `fn(<parameters>) { <body> }`
    ///
    /// Parameters and body are reference counted so that every closure
    /// created from this literal shares them instead of copying the tree.
    FunctionLiteral {
        /// Declared parameter names.
        parameters: Rc<[Identifier]>,
        /// The function body.
        body:       Rc<BlockStatement>,
    },
    /// `<function>(<arguments>)`
    Call {
        /// The expression producing the callee.
        function:  Box<Self>,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
    },
    /// `[<elements>]`
    ArrayLiteral(Vec<Self>),
    /// `<left>[<index>]`
    Index {
        /// The indexed expression.
        left:  Box<Self>,
        /// The index expression.
        index: Box<Self>,
    },
    /// `{<key>: <value>, ...}` with pairs kept in source order.
    HashLiteral(Vec<(Self, Self)>),
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (`-x`).
    Negate,
    /// Logical NOT (`!x`).
    Not,
}

/// Represents an infix operator.
///
/// Binary operators include arithmetic and comparisons.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition or string concatenation (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expression } => write!(f, "{expression}"),
            Self::Block(block) => write!(f, "{block}"),
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Writes `items` separated by `", "`.
pub(crate) fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>,
                                            items: impl IntoIterator<Item = T>)
                                            -> fmt::Result {
    for (index, item) in items.into_iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::IntegerLiteral(value) => write!(f, "{value}"),
            Self::StringLiteral(value) => write!(f, "{value}"),
            Self::BoolLiteral(value) => write!(f, "{value}"),
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { left,
                          operator,
                          right, } => write!(f, "({left} {operator} {right})"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if{condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, "else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn(")?;
                write_joined(f, parameters.iter())?;
                write!(f, ") {body}")
            },
            Self::Call { function, arguments } => {
                write!(f, "{function}(")?;
                write_joined(f, arguments)?;
                write!(f, ")")
            },
            Self::ArrayLiteral(elements) => {
                write!(f, "[")?;
                write_joined(f, elements)?;
                write!(f, "]")
            },
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::HashLiteral(pairs) => {
                write!(f, "{{")?;
                write_joined(f, pairs.iter().map(|(key, value)| format!("{key}:{value}")))?;
                write!(f, "}}")
            },
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Negate => "-",
            Self::Not => "!",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Less => "<",
            Greater => ">",
            Equal => "==",
            NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}
