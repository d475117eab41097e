/// The four binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Precedence classes, strongest binding first.
    ///
    /// Grouping collapses every operator of the first class before looking at
    /// the second one.
    pub const PRIORITY: [&'static [Self]; 2] = [&[Self::Mul, Self::Div], &[Self::Add, Self::Sub]];

    /// Maps an operator character to its operator.
    ///
    /// # Example
    /// ```
    /// use calctree::ast::Operator;
    ///
    /// assert_eq!(Operator::from_symbol('*'), Some(Operator::Mul));
    /// assert_eq!(Operator::from_symbol('%'), None);
    /// ```
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An element of the expression tree.
///
/// A finished tree is made of groups whose children are numbers, operator
/// markers and nested groups. A group holds either a single child, meaning
/// "the same as that child", or exactly three children shaped
/// `[left, operator, right]`. Malformed input can leave other counts behind;
/// the evaluator rejects them instead of repairing them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An integer literal.
    Number(i64),
    /// An operator marker, only meaningful as the middle child of a group.
    Op(Operator),
    /// An ordered sequence of children.
    Group(Vec<Self>),
}

impl Node {
    /// A short, single-line description used in error messages.
    ///
    /// # Example
    /// ```
    /// use calctree::ast::{Node, Operator};
    ///
    /// assert_eq!(Node::Op(Operator::Sub).describe(), "operator '-'");
    /// assert_eq!(Node::Group(vec![]).describe(), "group of 0 elements");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Number(n) => format!("number {n}"),
            Self::Op(op) => format!("operator '{op}'"),
            Self::Group(children) => format!("group of {} elements", children.len()),
        }
    }
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<Operator> for Node {
    fn from(op: Operator) -> Self {
        Self::Op(op)
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::interpreter::printer::render(self))
    }
}
