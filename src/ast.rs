use std::fmt;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Trees are built bottom-up by the parser, owned exclusively by the parse
/// result and never mutated afterwards. Each child is owned by exactly one
/// parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Constant {
        /// The literal value.
        value: f64,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// Function call expression (e.g. `sin(x)`).
    Call {
        /// Name of the function being called.
        name:      String,
        /// Arguments to the function, in source order.
        arguments: Vec<Self>,
    },
    /// Reference to a named constant. The parser only produces `pi`.
    NameRef {
        /// Name of the constant.
        name: String,
    },
}

/// Binary operators of the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

/// Unary operators of the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Prefix `-`.
    Negate,
}

/// How chained operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` is `a ^ (b ^ c)`.
    Right,
}

/// The only name a bare identifier may refer to.
pub const PI_NAME: &str = "pi";

/// Binding strength of atoms: constants, names, calls and groups.
pub const ATOM_PRECEDENCE: u8 = u8::MAX;

impl BinaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }

    /// Returns the binding strength; higher binds tighter.
    ///
    /// Unary negation sits between `*`/`/` and `^`, see
    /// [`UnaryOperator::precedence`].
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 4,
        }
    }

    /// Returns how chains of this operator group.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Applies the operator to two evaluated operands.
    ///
    /// Division follows IEEE-754, so dividing by zero yields an infinity or
    /// NaN. Exponentiation uses [`f64::powf`], which yields NaN for a negative
    /// base raised to a non-integer power.
    ///
    /// # Example
    /// ```
    /// use reckon::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Pow.apply(2.0, 10.0), 1024.0);
    /// assert_eq!(BinaryOperator::Div.apply(1.0, 0.0), f64::INFINITY);
    /// assert!(BinaryOperator::Div.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        }
    }
}

impl UnaryOperator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
        }
    }

    /// Returns the binding strength; `-2^2` is `-(2^2)` but `-2*3` is
    /// `(-2)*3`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Negate => 3,
        }
    }

    /// Applies the operator to an evaluated operand.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Negate => -value,
        }
    }
}

impl Expr {
    /// Builds a constant node.
    #[must_use]
    pub const fn constant(value: f64) -> Self {
        Self::Constant { value }
    }

    /// Builds a binary node that takes ownership of both operands.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Builds a negation node.
    #[must_use]
    pub fn negate(expr: Self) -> Self {
        Self::UnaryOp { op:   UnaryOperator::Negate,
                        expr: Box::new(expr), }
    }

    /// Returns how tightly this node binds when printed as an operand.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::BinaryOp { op, .. } => op.precedence(),
            Self::UnaryOp { op, .. } => op.precedence(),
            Self::Constant { .. } | Self::Call { .. } | Self::NameRef { .. } => ATOM_PRECEDENCE,
        }
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    ///
    /// # Example
    /// ```
    /// use reckon::parse;
    ///
    /// assert_eq!(parse("1").unwrap().depth(), 1);
    /// assert_eq!(parse("-(1 + 2)").unwrap().depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Constant { .. } | Self::NameRef { .. } => 1,
            Self::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
            Self::UnaryOp { expr, .. } => 1 + expr.depth(),
            Self::Call { arguments, .. } => {
                1 + arguments.iter().map(Self::depth).max().unwrap_or(0)
            },
        }
    }
}

/// Writes `expr`, wrapped in parentheses when it binds looser than `min`.
fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, min: u8) -> fmt::Result {
    if expr.precedence() < min {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

/// Returns the shorter of the plain and exponent spellings of a finite
/// number. Both lex back to the same value.
fn literal(value: f64) -> String {
    let plain = value.to_string();
    let exponent = format!("{value:e}");
    if exponent.len() < plain.len() { exponent } else { plain }
}

/// Renders the canonical source form of the tree.
///
/// The output carries no whitespace, uses the shortest spelling of each
/// literal and keeps parentheses only where the grammar needs them. It is
/// therefore never longer and never nests deeper than the source it was
/// parsed from, and parsing it under the same [`Limits`](crate::config::Limits)
/// yields an equal tree.
///
/// Chains of left-associative operators are written in a loop, so long
/// `1+1+...+1` chains do not deepen the call stack.
///
/// # Example
/// ```
/// use reckon::parse;
///
/// assert_eq!(parse("(2 + 3) * 4").unwrap().to_string(), "(2+3)*4");
/// assert_eq!(parse("2^(3^2)").unwrap().to_string(), "2^3^2");
/// assert_eq!(parse("(-2)^2").unwrap().to_string(), "(-2)^2");
/// assert_eq!(parse("sqrt( 16 ) * 1000000").unwrap().to_string(), "sqrt(16)*1e6");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Only an overflowing literal lexes to infinity.
            Self::Constant { value } if value.is_infinite() && value.is_sign_positive() => {
                write!(f, "1e999")
            },
            Self::Constant { value } if value.is_sign_negative() => {
                write!(f, "(-{})", Self::constant(-value))
            },
            Self::Constant { value } => write!(f, "{}", literal(*value)),
            Self::NameRef { name } => write!(f, "{name}"),
            Self::Call { name, arguments } => {
                write!(f, "{name}(")?;
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{argument}")?;
                }
                write!(f, ")")
            },
            Self::UnaryOp { op, expr } => {
                write!(f, "{}", op.symbol())?;
                write_operand(f, expr, op.precedence())
            },
            Self::BinaryOp { op, left, right } if op.associativity() == Associativity::Right => {
                // The exponent is parsed at the unary level.
                write_operand(f, left, op.precedence() + 1)?;
                write!(f, "{}", op.symbol())?;
                write_operand(f, right, UnaryOperator::Negate.precedence())
            },
            Self::BinaryOp { op, left, right } => {
                let precedence = op.precedence();
                let mut links = vec![(*op, &**right)];
                let mut head = &**left;
                while let Self::BinaryOp { op, left, right } = head
                      && op.precedence() == precedence
                      && op.associativity() == Associativity::Left
                {
                    links.push((*op, &**right));
                    head = &**left;
                }

                write_operand(f, head, precedence)?;
                for (op, right) in links.iter().rev() {
                    write!(f, "{}", op.symbol())?;
                    write_operand(f, right, precedence + 1)?;
                }
                Ok(())
            },
        }
    }
}
