/// Result type used by every stage of the pipeline.
pub type CompileResult<T> = Result<T, CompilationError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while compiling or evaluating an
/// expression.
pub enum CompilationError {
    /// A character is not whitespace, a digit, a bracket or an operator.
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position:  usize,
    },
    /// A digit run does not fit into a 64 bit signed integer.
    LiteralTooLarge {
        /// The digits as written.
        literal:  String,
        /// Byte offset of the first digit.
        position: usize,
    },
    /// A `)` appeared with no open bracket to close.
    UnmatchedClosingBracket {
        /// Byte offset of the `)`.
        position: usize,
    },
    /// The input ended while a `(` was still open.
    UnclosedBracket {
        /// Byte offset of the innermost unclosed `(`.
        position: usize,
    },
    /// An operator has no left or no right neighbour inside its group.
    MissingOperand {
        /// The operator symbol.
        operator: char,
    },
    /// A group reached evaluation with a child count other than 1 or 3.
    InvalidArity {
        /// Number of children found.
        found: usize,
    },
    /// An operand slot held an operator, or the operator slot held an operand.
    UnexpectedToken {
        /// Rendering of the misplaced element.
        token: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Integer arithmetic overflowed.
    Overflow {
        /// The operator whose result overflowed.
        operator: char,
    },
    /// An integer was too large to take part in real arithmetic exactly.
    PrecisionLoss {
        /// The integer that could not be converted.
        value: i64,
    },
}

impl std::fmt::Display for CompilationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character, position } => {
                write!(f, "Unknown character \"{character}\" at position {position}.")
            },
            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Number {literal} at position {position} is too large.")
            },
            Self::UnmatchedClosingBracket { position } => {
                write!(f, "Wrong closing bracket at position {position}.")
            },
            Self::UnclosedBracket { position } => write!(f,
                                                         "Not enough closing brackets, the bracket at position {position} is never closed."),
            Self::MissingOperand { operator } => {
                write!(f, "No argument for operation '{operator}'.")
            },
            Self::InvalidArity { found } => write!(f,
                                                   "Not enough operations: a group must hold 1 or 3 elements, found {found}."),
            Self::UnexpectedToken { token } => write!(f, "Unexpected token: {token}."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Overflow { operator } => write!(f,
                                                  "Integer overflow while computing '{operator}'."),
            Self::PrecisionLoss { value } => write!(f,
                                                    "Integer {value} is too large to be converted to a real number exactly."),
        }
    }
}

impl std::error::Error for CompilationError {}
