#![allow(clippy::cast_precision_loss)]
use std::fmt::Display;
use std::ops::{Add, Mul, Sub};

/// The single numeric domain shared by literals and evaluation results.
///
/// Integers stay integers as long as the result is exact and fits; anything
/// else is promoted to a float rather than wrapped or truncated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    #[must_use]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(x) => x as f64,
            Self::Float(x) => x,
        }
    }

    /// `true` for `0`, `0.0` and `-0.0`.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(x) => x == 0,
            Self::Float(x) => x == 0.0,
        }
    }

    /// True division. `None` when `rhs` is zero.
    #[must_use]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.is_zero() {
            return None;
        }
        let quotient = match (self, rhs) {
            (Self::Int(lhs), Self::Int(rhs)) if lhs.checked_rem(rhs) == Some(0) => {
                lhs.checked_div(rhs).map(Self::Int)
            }
            _ => None,
        };
        Some(quotient.unwrap_or_else(|| Self::Float(self.as_f64() / rhs.as_f64())))
    }
}

macro_rules! infix_impl {
    ($trayt:ident::$op:ident, $checked:ident) => {
        impl $trayt for Number {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self::Output {
                match (self, rhs) {
                    (Self::Int(lhs), Self::Int(rhs)) => lhs.$checked(rhs).map_or_else(
                        || Self::Float($trayt::$op(lhs as f64, rhs as f64)),
                        Self::Int,
                    ),
                    (lhs, rhs) => Self::Float($trayt::$op(lhs.as_f64(), rhs.as_f64())),
                }
            }
        }
    };
}

infix_impl!(Add::add, checked_add);
infix_impl!(Sub::sub, checked_sub);
infix_impl!(Mul::mul, checked_mul);

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(x) => write!(f, "{x}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}
