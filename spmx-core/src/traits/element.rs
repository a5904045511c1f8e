//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as matrix elements. Only signed primitive integers qualify.

use alloc::vec::Vec;
use core::fmt::{Debug, Display};
use core::str::FromStr;

/// Trait for types that can be stored as matrix elements
///
/// All arithmetic goes through the `checked_*` methods so that an
/// overflowing operation surfaces as an error instead of wrapping.
pub trait MatrixElement: Copy + Ord + Debug + Display + FromStr + Sized {
    /// Additive identity; never stored
    const ZERO: Self;

    /// Multiplicative identity, used for identity matrices
    const ONE: Self;

    /// Whether this value is the additive identity
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    fn checked_add(self, rhs: Self) -> Option<Self>;

    fn checked_sub(self, rhs: Self) -> Option<Self>;

    fn checked_mul(self, rhs: Self) -> Option<Self>;

    fn checked_neg(self) -> Option<Self>;
}

macro_rules! impl_matrix_element {
    ($($t:ty),*) => {
        $(
            impl MatrixElement for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }

                fn checked_neg(self) -> Option<Self> {
                    <$t>::checked_neg(self)
                }
            }
        )*
    };
}

impl_matrix_element!(i8, i16, i32, i64, i128);

/// Sum `terms`, failing only if the total does not fit `T`
///
/// Negative terms are added while the running sum is non-negative and
/// positive terms while it is negative. Once one sign runs out the
/// remaining terms move the sum monotonically towards the total, so no
/// partial sum leaves the range of `T` unless the total does.
pub fn checked_sum<T: MatrixElement>(terms: impl IntoIterator<Item = T>) -> Option<T> {
    let (mut positive, mut negative): (Vec<T>, Vec<T>) =
        terms.into_iter().partition(|&term| term > T::ZERO);

    let mut sum = T::ZERO;
    loop {
        let next = if sum >= T::ZERO {
            negative.pop().or_else(|| positive.pop())
        } else {
            positive.pop().or_else(|| negative.pop())
        };
        match next {
            Some(term) => sum = sum.checked_add(term)?,
            None => return Some(sum),
        }
    }
}
