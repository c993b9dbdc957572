//!
//! FlowRateLike trait for generics of capacity and flow amount
//!
//! i32, i64 and f64 implements FlowRateLike.
//! The type must be signed because the flow matrix stores the antisymmetric
//! partner `flow[v][u] = -flow[u][v]`.
//!

use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

///
/// generic FlowRate
///
pub trait FlowRateLike:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + Sum
    + Default
    + std::fmt::Debug
    + std::fmt::Display
{
    /// zero value = 0
    fn zero() -> Self;
    /// cast to f64
    fn to_f64(self) -> f64;
    /// difference allowed to be regarded as a same value
    fn eps() -> Self;
    /// similary equal
    fn sim_eq(self, rhs: Self) -> bool {
        let diff = if self > rhs { self - rhs } else { rhs - self };
        diff <= Self::eps()
    }
    /// strictly larger than the tolerance, i.e. a usable residual
    fn is_positive(self) -> bool {
        self > Self::eps()
    }
    /// smaller of two amounts
    fn min_rate(self, rhs: Self) -> Self {
        if rhs < self {
            rhs
        } else {
            self
        }
    }
    /// positive part, `max(self, 0)`
    fn positive_part(self) -> Self {
        if self > Self::zero() {
            self
        } else {
            Self::zero()
        }
    }
}

macro_rules! impl_integer_flow_rate {
    ($($t:ty),*) => {
        $(
            impl FlowRateLike for $t {
                fn zero() -> $t {
                    0
                }
                fn to_f64(self) -> f64 {
                    self as f64
                }
                fn eps() -> $t {
                    // integer type does not need to consider the floating error
                    0
                }
            }
        )*
    };
}

impl_integer_flow_rate!(i32, i64);

impl FlowRateLike for f64 {
    fn zero() -> Self {
        0.0
    }
    fn to_f64(self) -> f64 {
        self
    }
    fn eps() -> Self {
        0.000000001
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_rate() {
        assert!(FlowRateLike::is_positive(3i64));
        assert!(!FlowRateLike::is_positive(0i64));
        assert_eq!(FlowRateLike::min_rate(3i64, 5), 3);
        assert_eq!((-4i32).positive_part(), 0);
        assert!(!FlowRateLike::sim_eq(1i64, 2));
    }

    #[test]
    fn float_rate() {
        assert!(!FlowRateLike::is_positive(1e-12f64));
        assert!(FlowRateLike::is_positive(0.5f64));
        assert!(FlowRateLike::sim_eq(0.1f64 + 0.2, 0.3));
        assert_eq!(FlowRateLike::min_rate(2.5f64, 1.5), 1.5);
    }
}
