use core::fmt;

use digest::generic_array::{ArrayLength, GenericArray};

#[cfg(feature = "std")]
use std::error;

/// A pass count below the minimum of three.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidPasses {
    pub passes: u32,
}

impl fmt::Display for InvalidPasses {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid pass count {}: Tiger needs at least {} passes",
               self.passes, ::DEFAULT_PASSES)
    }
}

#[cfg(feature = "std")]
impl error::Error for InvalidPasses {}

/// A known-answer check produced an unexpected digest.
#[derive(Clone, PartialEq, Eq)]
pub struct SelfTestFailure<N: ArrayLength<u8>> {
    pub computed: GenericArray<u8, N>,
}

impl<N: ArrayLength<u8>> fmt::Display for SelfTestFailure<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("self-test failed, computed ")?;
        for b in self.computed.iter() {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl<N: ArrayLength<u8>> fmt::Debug for SelfTestFailure<N> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("SelfTestFailure")
            .field("computed", &self.computed.as_slice())
            .finish()
    }
}

#[cfg(feature = "std")]
impl<N: ArrayLength<u8>> error::Error for SelfTestFailure<N> {}
