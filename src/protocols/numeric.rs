//! Numeric-conversion capabilities: integer, float and complex.
//!
//! These mirror the standard `SupportsInt` / `SupportsFloat` /
//! `SupportsComplex` capability set. Rust ships no such traits, so they are
//! declared here with the same shape: a zero-argument conversion to the
//! target representation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Values convertible to an integer.
///
/// Integers convert the way `as i64` does. Floats truncate toward zero and
/// saturate at the `i64` bounds; NaN converts to 0.
pub trait IntConvertible {
    /// Convert to an integer.
    fn to_int(&self) -> i64;
}

/// Values convertible to a float.
pub trait FloatConvertible {
    /// Convert to a float.
    fn to_float(&self) -> f64;
}

/// Values convertible to a complex number.
pub trait ComplexConvertible {
    /// Convert to a complex number.
    fn to_complex(&self) -> Complex;
}

/// A complex number with `f64` parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    /// Real part.
    pub re: f64,
    /// Imaginary part.
    pub im: f64,
}

impl Complex {
    /// Create a complex number from its parts.
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Magnitude (absolute value).
    pub fn norm(&self) -> f64 {
        self.re.hypot(self.im)
    }

    /// Complex conjugate.
    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::new(re, 0.0)
    }
}

fn component(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        value.to_string()
    }
}

/// Formats as `(re+imj)`, or `imj` when the real part is a positive zero.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.re == 0.0 && self.re.is_sign_positive() {
            return write!(f, "{}j", component(self.im));
        }
        let sign = if self.im.is_sign_negative() { '-' } else { '+' };
        write!(
            f,
            "({}{}{}j)",
            component(self.re),
            sign,
            component(self.im.abs())
        )
    }
}

macro_rules! impl_integer_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntConvertible for $ty {
                fn to_int(&self) -> i64 {
                    *self as i64
                }
            }

            impl FloatConvertible for $ty {
                fn to_float(&self) -> f64 {
                    *self as f64
                }
            }

            impl ComplexConvertible for $ty {
                fn to_complex(&self) -> Complex {
                    Complex::new(*self as f64, 0.0)
                }
            }
        )*
    };
}

impl_integer_conversions!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float_conversions {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntConvertible for $ty {
                fn to_int(&self) -> i64 {
                    self.trunc() as i64
                }
            }

            impl FloatConvertible for $ty {
                fn to_float(&self) -> f64 {
                    f64::from(*self)
                }
            }

            impl ComplexConvertible for $ty {
                fn to_complex(&self) -> Complex {
                    Complex::new(f64::from(*self), 0.0)
                }
            }
        )*
    };
}

impl_float_conversions!(f32, f64);

impl IntConvertible for bool {
    fn to_int(&self) -> i64 {
        i64::from(*self)
    }
}

impl FloatConvertible for bool {
    fn to_float(&self) -> f64 {
        f64::from(u8::from(*self))
    }
}

impl ComplexConvertible for bool {
    fn to_complex(&self) -> Complex {
        Complex::new(self.to_float(), 0.0)
    }
}

impl ComplexConvertible for Complex {
    fn to_complex(&self) -> Complex {
        *self
    }
}

impl ComplexConvertible for (f64, f64) {
    fn to_complex(&self) -> Complex {
        Complex::new(self.0, self.1)
    }
}

impl<T: IntConvertible + ?Sized> IntConvertible for &T {
    fn to_int(&self) -> i64 {
        (**self).to_int()
    }
}

impl<T: FloatConvertible + ?Sized> FloatConvertible for &T {
    fn to_float(&self) -> f64 {
        (**self).to_float()
    }
}

impl<T: ComplexConvertible + ?Sized> ComplexConvertible for &T {
    fn to_complex(&self) -> Complex {
        (**self).to_complex()
    }
}
