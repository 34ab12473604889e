//! Exit statuses reported by the compiler under test.
//!
//! The harness itself treats exit codes as opaque integers: a fixture passes
//! when the actual code equals the expected one. These names exist so the
//! registry can state expectations readably and so failure notices can show
//! what a code means.

use std::fmt;

/// Every exit status the compiler under test is known to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompilerStatus {
    /// The program was accepted.
    Ok,
    /// Lexical analysis failed.
    Lexical,
    /// Syntax analysis failed.
    Syntax,
    /// Undefined function or variable.
    Undefined,
    /// Wrong number or type of parameters, or a discarded return value.
    Params,
    /// Redefinition, or assignment to a non-modifiable variable.
    Redefinition,
    /// Missing or excess expression in a return statement.
    Return,
    /// Type compatibility error in an expression.
    TypeCompat,
    /// Type could not be derived.
    TypeDerivation,
    /// Variable unused within its scope.
    UnusedVariable,
    /// Any other semantic error.
    OtherSemantic,
    /// Internal compiler error, independent of the input program.
    Internal,
}

impl CompilerStatus {
    pub const ALL: [CompilerStatus; 12] = [
        CompilerStatus::Ok,
        CompilerStatus::Lexical,
        CompilerStatus::Syntax,
        CompilerStatus::Undefined,
        CompilerStatus::Params,
        CompilerStatus::Redefinition,
        CompilerStatus::Return,
        CompilerStatus::TypeCompat,
        CompilerStatus::TypeDerivation,
        CompilerStatus::UnusedVariable,
        CompilerStatus::OtherSemantic,
        CompilerStatus::Internal,
    ];

    /// The numeric process exit code.
    pub const fn code(self) -> i32 {
        match self {
            CompilerStatus::Ok => 0,
            CompilerStatus::Lexical => 1,
            CompilerStatus::Syntax => 2,
            CompilerStatus::Undefined => 3,
            CompilerStatus::Params => 4,
            CompilerStatus::Redefinition => 5,
            CompilerStatus::Return => 6,
            CompilerStatus::TypeCompat => 7,
            CompilerStatus::TypeDerivation => 8,
            CompilerStatus::UnusedVariable => 9,
            CompilerStatus::OtherSemantic => 10,
            CompilerStatus::Internal => 99,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            CompilerStatus::Ok => "success",
            CompilerStatus::Lexical => "lexical error",
            CompilerStatus::Syntax => "syntax error",
            CompilerStatus::Undefined => "undefined function or variable",
            CompilerStatus::Params => "wrong parameters or return-value misuse",
            CompilerStatus::Redefinition => "redefinition or assignment to constant",
            CompilerStatus::Return => "missing or excess return expression",
            CompilerStatus::TypeCompat => "type compatibility error",
            CompilerStatus::TypeDerivation => "type derivation error",
            CompilerStatus::UnusedVariable => "unused variable",
            CompilerStatus::OtherSemantic => "other semantic error",
            CompilerStatus::Internal => "internal compiler error",
        }
    }
}

impl fmt::Display for CompilerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code(), self.label())
    }
}

/// Renders an exit code for humans: `3 (undefined function or variable)`,
/// or just the number when it is not a known status.
pub fn describe_code(code: i32) -> String {
    match CompilerStatus::from_code(code) {
        Some(status) => status.to_string(),
        None => code.to_string(),
    }
}
