//! Lowercase-producing capability.

use std::borrow::Cow;

/// Values that can produce a lowercased form of themselves.
///
/// The lowered form is left open through [`LowercaseConvertible::Lowered`]:
/// text lowers to an owned `String`, an ASCII byte lowers to a byte, a byte
/// buffer lowers to a new buffer.
///
/// ```
/// use capability_protocols::LowercaseConvertible;
///
/// fn normalize<T: LowercaseConvertible + ?Sized>(value: &T) -> T::Lowered {
///     value.lower()
/// }
///
/// assert_eq!(normalize("HeLLo"), "hello");
/// assert_eq!(normalize(&'Ä'), "ä");
/// assert_eq!(normalize(&b'Q'), b'q');
/// ```
pub trait LowercaseConvertible {
    /// The lowercased representation.
    type Lowered;

    /// Produce the lowercased form.
    fn lower(&self) -> Self::Lowered;
}

impl LowercaseConvertible for str {
    type Lowered = String;

    fn lower(&self) -> String {
        self.to_lowercase()
    }
}

impl LowercaseConvertible for String {
    type Lowered = String;

    fn lower(&self) -> String {
        str::to_lowercase(self)
    }
}

impl LowercaseConvertible for Box<str> {
    type Lowered = String;

    fn lower(&self) -> String {
        str::to_lowercase(self)
    }
}

impl LowercaseConvertible for Cow<'_, str> {
    type Lowered = String;

    fn lower(&self) -> String {
        str::to_lowercase(self)
    }
}

// Some characters lowercase to more than one char (e.g. 'İ').
impl LowercaseConvertible for char {
    type Lowered = String;

    fn lower(&self) -> String {
        self.to_lowercase().collect()
    }
}

impl LowercaseConvertible for u8 {
    type Lowered = u8;

    fn lower(&self) -> u8 {
        self.to_ascii_lowercase()
    }
}

impl LowercaseConvertible for [u8] {
    type Lowered = Vec<u8>;

    fn lower(&self) -> Vec<u8> {
        self.to_ascii_lowercase()
    }
}

impl LowercaseConvertible for Vec<u8> {
    type Lowered = Vec<u8>;

    fn lower(&self) -> Vec<u8> {
        self.as_slice().to_ascii_lowercase()
    }
}

impl<T: LowercaseConvertible + ?Sized> LowercaseConvertible for &T {
    type Lowered = T::Lowered;

    fn lower(&self) -> T::Lowered {
        (**self).lower()
    }
}
