use std::fmt::Display;

use crate::errors::errors::{Error, ErrorImpl};

/// Operator Kinds
///
/// Shared by binary and unary nodes. The discriminant is the operator code
/// shown by the tree printer, so the order here is part of the output format.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum OpKind {
    Add = 0,
    Sub,
    Mul,
    Div,
    Mod,

    Eq,
    NotEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,

    And,
    Or,

    Not,
    Neg,
}

const ALL_OPERATORS: [OpKind; 15] = [
    OpKind::Add,
    OpKind::Sub,
    OpKind::Mul,
    OpKind::Div,
    OpKind::Mod,
    OpKind::Eq,
    OpKind::NotEq,
    OpKind::Less,
    OpKind::LessEq,
    OpKind::Greater,
    OpKind::GreaterEq,
    OpKind::And,
    OpKind::Or,
    OpKind::Not,
    OpKind::Neg,
];

impl OpKind {
    /// Returns the numeric operator code.
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Returns the operator as it is spelled in source.
    pub fn symbol(&self) -> &'static str {
        match self {
            OpKind::Add => "+",
            OpKind::Sub | OpKind::Neg => "-",
            OpKind::Mul => "*",
            OpKind::Div => "/",
            OpKind::Mod => "%",
            OpKind::Eq => "==",
            OpKind::NotEq => "!=",
            OpKind::Less => "<",
            OpKind::LessEq => "<=",
            OpKind::Greater => ">",
            OpKind::GreaterEq => ">=",
            OpKind::And => "&&",
            OpKind::Or => "||",
            OpKind::Not => "!",
        }
    }
}

impl TryFrom<i32> for OpKind {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        usize::try_from(code)
            .ok()
            .and_then(|index| ALL_OPERATORS.get(index).copied())
            .ok_or_else(|| Error::new(ErrorImpl::UnknownOperatorCode { code }))
    }
}

impl Display for OpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
