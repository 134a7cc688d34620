//! Scalar element type constraints for dynmat containers
//!
//! This module defines the trait that constrains what types can be
//! stored as scalar elements of a sequence or grid.

use core::ops::{Add, AddAssign, Mul, Sub};

/// Trait for types that can be stored as scalar container elements
///
/// All element types must be:
/// - Clone: Can be deep-copied into another container
/// - Default: Default value is the additive identity used for accumulation
/// - PartialEq: Can be compared for equality
/// - Add, Sub, Mul, AddAssign: The arithmetic the containers invoke
pub trait Element:
    Clone + Default + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + AddAssign
{
    /// Additive identity
    fn zero() -> Self {
        Self::default()
    }

    /// Multiplicative identity, used to build identity grids
    fn one() -> Self;
}

macro_rules! impl_element {
    ($one:expr => $($t:ty),+) => {
        $(
            impl Element for $t {
                fn one() -> Self {
                    $one
                }
            }
        )+
    };
}

impl_element!(1 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_element!(1.0 => f32, f64);
