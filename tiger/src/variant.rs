//! Output-size variants of the Tiger family.
//!
//! Every variant runs the same 192-bit engine; the narrower ones keep the
//! trailing bytes of the raw digest.

use core::fmt;

use digest::generic_array::ArrayLength;
use digest::generic_array::typenum::{U16, U20, U24};

/// Size of the untruncated digest in bytes.
pub const RAW_SIZE: usize = 24;

/// Runtime description of a Tiger variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariantSpec {
    Tiger128,
    Tiger160,
    Tiger192,
}

impl VariantSpec {
    /// Looks up a variant by its digest width in bits.
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            128 => Some(VariantSpec::Tiger128),
            160 => Some(VariantSpec::Tiger160),
            192 => Some(VariantSpec::Tiger192),
            _ => None,
        }
    }

    pub fn bits(self) -> u32 {
        self.output_size() as u32 * 8
    }

    /// Digest length in bytes.
    pub fn output_size(self) -> usize {
        match self {
            VariantSpec::Tiger128 => 16,
            VariantSpec::Tiger160 => 20,
            VariantSpec::Tiger192 => RAW_SIZE,
        }
    }

    /// Returns the trailing `output_size()` bytes of a raw digest.
    pub fn truncate(self, raw: &[u8; RAW_SIZE]) -> &[u8] {
        &raw[RAW_SIZE - self.output_size()..]
    }
}

impl fmt::Display for VariantSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tiger/{}", self.bits())
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for super::Bits128 {}
    impl Sealed for super::Bits160 {}
    impl Sealed for super::Bits192 {}
}

/// Compile-time selection of a Tiger variant.
///
/// Implemented only by [`Bits128`], [`Bits160`] and [`Bits192`].
pub trait Variant: private::Sealed + Clone {
    type OutputSize: ArrayLength<u8>;

    const SPEC: VariantSpec;
}

/// Tiger/128: the last 16 bytes of the raw digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bits128;

/// Tiger/160: the last 20 bytes of the raw digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bits160;

/// Tiger/192: the full raw digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bits192;

impl Variant for Bits128 {
    type OutputSize = U16;
    const SPEC: VariantSpec = VariantSpec::Tiger128;
}

impl Variant for Bits160 {
    type OutputSize = U20;
    const SPEC: VariantSpec = VariantSpec::Tiger160;
}

impl Variant for Bits192 {
    type OutputSize = U24;
    const SPEC: VariantSpec = VariantSpec::Tiger192;
}

#[cfg(test)]
mod tests {
    use super::*;
    use digest::generic_array::typenum::Unsigned;

    #[test]
    fn sizes_agree_with_typenum() {
        assert_eq!(Bits128::SPEC.output_size(), <<Bits128 as Variant>::OutputSize as Unsigned>::to_usize());
        assert_eq!(Bits160::SPEC.output_size(), <<Bits160 as Variant>::OutputSize as Unsigned>::to_usize());
        assert_eq!(Bits192::SPEC.output_size(), <<Bits192 as Variant>::OutputSize as Unsigned>::to_usize());
    }

    #[test]
    fn from_bits() {
        for &spec in &[VariantSpec::Tiger128, VariantSpec::Tiger160, VariantSpec::Tiger192] {
            assert_eq!(VariantSpec::from_bits(spec.bits()), Some(spec));
        }
        assert_eq!(VariantSpec::from_bits(0), None);
        assert_eq!(VariantSpec::from_bits(256), None);
    }

    #[test]
    fn truncate_keeps_the_tail() {
        let mut raw = [0u8; RAW_SIZE];
        for (i, b) in raw.iter_mut().enumerate() {
            *b = i as u8;
        }
        assert_eq!(VariantSpec::Tiger192.truncate(&raw), &raw[..]);
        assert_eq!(VariantSpec::Tiger160.truncate(&raw), &raw[4..]);
        assert_eq!(VariantSpec::Tiger128.truncate(&raw)[0], 8);
    }
}
