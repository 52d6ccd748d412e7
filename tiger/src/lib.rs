//! The [Tiger][1] hash function family.
//!
//! [`Tiger192`] produces the full 192-bit digest; [`Tiger160`] and
//! [`Tiger128`] keep the trailing 20 and 16 bytes of it. All three share one
//! engine and accept an optional number of compression passes above the
//! standard three.
//!
//! ```
//! use tiger::{Digest, Tiger192};
//!
//! let mut hasher = Tiger192::new();
//! hasher.input(b"ab");
//! hasher.input(b"c");
//! let digest = hasher.result();
//! assert_eq!(digest[..4], [0x2a, 0xab, 0x14, 0x84]);
//! ```
//!
//! Extra passes are selected at construction:
//!
//! ```
//! use tiger::Tiger160;
//!
//! let mut hasher = Tiger160::with_passes(4).unwrap();
//! let digest = hasher.one_shot(b"abc");
//! assert_eq!(digest.len(), 20);
//! assert!(Tiger160::with_passes(2).is_err());
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/Tiger_(hash_function)

#![no_std]
#[cfg(feature = "std")]
extern crate std;
#[macro_use] extern crate opaque_debug;
#[macro_use] extern crate digest;
#[macro_use] extern crate log;
extern crate block_buffer;
extern crate byte_tools;

use core::marker::PhantomData;
use core::num::Wrapping;

pub use digest::{Digest, InvalidOutputSize};
use digest::{Input, BlockInput, FixedOutput, Reset};
use digest::generic_array::GenericArray;
use digest::generic_array::typenum::{U20, U64, Unsigned};

use byte_tools::{read_u64v_le, write_u64_le, write_u64v_le};

use block_buffer::BlockBuffer;

#[macro_use]
mod macros;
mod consts;
mod errors;
mod variant;

use consts::*;

pub use errors::{InvalidPasses, SelfTestFailure};
pub use variant::{Bits128, Bits160, Bits192, Variant, VariantSpec, RAW_SIZE};

/// Number of passes of the published algorithm, and the minimum accepted.
pub const DEFAULT_PASSES: u32 = 3;

const BLOCK_LEN: u64 = 64;

type BlockSize = U64;
type Block = GenericArray<u8, BlockSize>;

/// Digest produced by a Tiger variant.
pub type Output<V> = GenericArray<u8, <V as Variant>::OutputSize>;

const SELF_TEST_INPUT: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

const SELF_TEST_DIGEST: [u8; RAW_SIZE] = [
    0x0f, 0x7b, 0xf9, 0xa1, 0x9b, 0x9c, 0x58, 0xf2,
    0xb7, 0x61, 0x0d, 0xf7, 0xe8, 0x4f, 0x0a, 0xc3,
    0xa7, 0x1c, 0x63, 0x1e, 0x7b, 0x53, 0xf7, 0x8e,
];

const EXTRA_PASS_INPUT: &[u8] =
    b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq12345678";

const EXTRA_PASS_DIGEST: [u8; 20] = [
    0xc5, 0xad, 0x43, 0xa0, 0x90, 0x69, 0x95, 0xe9, 0xaa, 0xbf,
    0xb2, 0x4f, 0x25, 0x5d, 0x20, 0x17, 0xf3, 0x7d, 0x39, 0xea,
];

/// Streaming Tiger hasher for the variant `V`.
#[derive(Clone)]
pub struct Tiger<V: Variant> {
    buffer: BlockBuffer<BlockSize>,
    len: u64,
    passes: u32,
    state: TigerState,
    variant: PhantomData<V>,
}

/// Tiger/192.
pub type Tiger192 = Tiger<Bits192>;
/// Tiger/160.
pub type Tiger160 = Tiger<Bits160>;
/// Tiger/128.
pub type Tiger128 = Tiger<Bits128>;

#[derive(Clone)]
struct TigerState((u64, u64, u64));

impl TigerState {
    fn new() -> Self {
        TigerState((A, B, C))
    }

    fn process_block(&mut self, block: &Block, passes: u32) {
        let (a, b, c) = self.0;
        let (mut a, mut b, mut c) = (Wrapping(a), Wrapping(b), Wrapping(c));

        let mut data: [u64; 8] = [0; 8];
        read_u64v_le(&mut data, block);

        let mut x = [Wrapping(0u64); 8];
        for (w, &d) in x.iter_mut().zip(data.iter()) {
            *w = Wrapping(d);
        }

        compress!(x, a, b, c, passes);

        self.0 = (a.0, b.0, c.0);
    }

    fn raw(&self) -> [u8; RAW_SIZE] {
        let (a, b, c) = self.0;
        let mut raw = [0u8; RAW_SIZE];
        write_u64v_le(&mut raw, &[a, b, c]);
        raw
    }
}

impl<V: Variant> Tiger<V> {
    /// Creates a hasher running the standard three passes.
    pub fn new() -> Self {
        Tiger {
            buffer: BlockBuffer::default(),
            len: 0,
            passes: DEFAULT_PASSES,
            state: TigerState::new(),
            variant: PhantomData,
        }
    }

    /// Creates a hasher running `passes` passes per block.
    ///
    /// Fewer than [`DEFAULT_PASSES`] is rejected. Every pass past the third
    /// is a multiplier-9 pass over the final key schedule, which is not part
    /// of the published algorithm.
    pub fn with_passes(passes: u32) -> Result<Self, InvalidPasses> {
        if passes < DEFAULT_PASSES {
            debug!("rejecting {} with {} passes", V::SPEC, passes);
            return Err(InvalidPasses { passes });
        }
        let mut hasher = Self::new();
        hasher.passes = passes;
        Ok(hasher)
    }

    pub fn passes(&self) -> u32 {
        self.passes
    }

    pub fn variant(&self) -> VariantSpec {
        V::SPEC
    }

    /// Resets the hasher, hashes `data` and returns its digest, leaving the
    /// hasher reset. The pass count is kept.
    pub fn one_shot(&mut self, data: &[u8]) -> Output<V> {
        Reset::reset(self);
        self.absorb(data);
        let digest = self.finalize_output();
        Reset::reset(self);
        digest
    }

    /// Writes the digest into the front of `out` and resets the hasher.
    ///
    /// Returns the number of bytes written. If `out` is too short, neither
    /// `out` nor the hasher is modified.
    pub fn try_finish(&mut self, out: &mut [u8]) -> Result<usize, InvalidOutputSize> {
        let n = <V::OutputSize as Unsigned>::to_usize();
        if out.len() < n {
            return Err(InvalidOutputSize);
        }
        let digest = self.finalize_output();
        out[..n].copy_from_slice(&digest);
        Reset::reset(self);
        Ok(n)
    }

    /// Hashes the published known-answer string with three passes.
    ///
    /// Returns the digest when it matches the published value.
    pub fn self_test() -> Result<Output<V>, SelfTestFailure<V::OutputSize>> {
        let computed = Self::new().one_shot(SELF_TEST_INPUT);
        if computed.as_slice() == V::SPEC.truncate(&SELF_TEST_DIGEST) {
            Ok(computed)
        } else {
            warn!("{} self-test failed", V::SPEC);
            Err(SelfTestFailure { computed })
        }
    }

    /// Same check as [`self_test`](Self::self_test), finished through
    /// [`try_finish`](Self::try_finish) into a stack buffer.
    ///
    /// Fails unless the call succeeds and writes exactly the digest size.
    pub fn self_test_try() -> Result<Output<V>, SelfTestFailure<V::OutputSize>> {
        let size = <V::OutputSize as Unsigned>::to_usize();
        let mut hasher = Self::new();
        hasher.absorb(SELF_TEST_INPUT);

        let mut buf = [0u8; RAW_SIZE];
        let written = hasher.try_finish(&mut buf);
        let computed = GenericArray::clone_from_slice(&buf[..size]);
        match written {
            Ok(n) if n == size && computed.as_slice() == V::SPEC.truncate(&SELF_TEST_DIGEST) => Ok(computed),
            _ => {
                warn!("{} self-test through try_finish failed", V::SPEC);
                Err(SelfTestFailure { computed })
            }
        }
    }

    fn absorb(&mut self, input: &[u8]) {
        let self_state = &mut self.state;
        let passes = self.passes;
        self.buffer.input(input, |blk| self_state.process_block(blk, passes));
        self.len = self.len.wrapping_add(input.len() as u64);
    }

    /// Pads with `0x01`, zeros up to byte 56 of the last block and the
    /// little-endian bit length, then returns the 24-byte chaining value.
    ///
    /// A second block is started whenever the terminator leaves the cursor
    /// at 56 or beyond, which includes inputs of length 55 mod 64.
    ///
    /// The bit length is taken modulo 2^64, so inputs of 2^61 bytes or more
    /// lose the high bits of their length.
    fn finalize_raw(&mut self) -> [u8; RAW_SIZE] {
        let pos = (self.len % BLOCK_LEN) as usize;
        let zeros = if pos < 55 { 55 - pos } else { 119 - pos };
        let end = 1 + zeros + 8;

        let mut padding = [0u8; 2 * BLOCK_LEN as usize];
        padding[0] = 0x01;
        write_u64_le(&mut padding[end - 8..end], self.len << 3);

        let self_state = &mut self.state;
        let passes = self.passes;
        self.buffer.input(&padding[..end], |blk| self_state.process_block(blk, passes));

        self.state.raw()
    }

    fn finalize_output(&mut self) -> Output<V> {
        let raw = self.finalize_raw();
        GenericArray::clone_from_slice(V::SPEC.truncate(&raw))
    }
}

impl Tiger<Bits160> {
    /// Checks the four-pass extension against its known-answer digest.
    ///
    /// The known answer was produced from an all-zero chaining value rather
    /// than the standard one, so this check seeds the state with zeros.
    /// Ordinary hashing never does.
    pub fn extra_pass_self_test() -> Result<Output<Bits160>, SelfTestFailure<U20>> {
        let mut hasher = Self::new();
        hasher.passes = DEFAULT_PASSES + 1;
        hasher.state = TigerState((0, 0, 0));
        hasher.absorb(EXTRA_PASS_INPUT);
        let computed = hasher.finalize_output();
        if computed.as_slice() == &EXTRA_PASS_DIGEST[..] {
            Ok(computed)
        } else {
            warn!("{} extra-pass self-test failed", Bits160::SPEC);
            Err(SelfTestFailure { computed })
        }
    }
}

impl<V: Variant> Default for Tiger<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> BlockInput for Tiger<V> {
    type BlockSize = BlockSize;
}

impl<V: Variant> Input for Tiger<V> {
    fn input<B: AsRef<[u8]>>(&mut self, input: B) {
        self.absorb(input.as_ref());
    }
}

impl<V: Variant> FixedOutput for Tiger<V> {
    type OutputSize = V::OutputSize;

    fn fixed_result(mut self) -> Output<V> {
        self.finalize_output()
    }
}

impl<V: Variant> Reset for Tiger<V> {
    fn reset(&mut self) {
        self.state = TigerState::new();
        self.buffer.reset();
        self.len = 0;
    }
}

impl_opaque_debug!(Tiger192);
impl_opaque_debug!(Tiger160);
impl_opaque_debug!(Tiger128);
impl_write!(Tiger192);
impl_write!(Tiger160);
impl_write!(Tiger128);

#[cfg(test)]
mod tests {
    use super::*;

    use consts::{A, B, C};
    use core::num::ParseIntError;

    fn hex_to_bytes(hex: &str) -> Result<[u8; RAW_SIZE], ParseIntError> {
        let mut bytes = [0; RAW_SIZE];
        for i in 0..hex.len()/2 {
            bytes[i] = u8::from_str_radix(&hex[2*i..2*i+2], 16)?;
        }
        Ok(bytes)
    }

    fn tiger_hash(input: &[u8]) -> Output<Bits192> {
        let mut hasher = Tiger192::new();
        Input::input(&mut hasher, input);
        hasher.fixed_result()
    }

    #[test]
    fn basic_test() {
        let test_cases: &'static [(&'static [u8], &'static str)] = &[
            (b"",                                                                                 "3293AC630C13F0245F92BBB1766E16167A4E58492DDE73F3"),
            (b"a",                                                                                "77BEFBEF2E7EF8AB2EC8F93BF587A7FC613E247F5F247809"),
            (b"abc",                                                                              "2AAB1484E8C158F2BFB8C5FF41B57A525129131C957B5F93"),
            (b"message digest",                                                                   "D981F8CB78201A950DCF3048751E441C517FCA1AA55A29F6"),
            (b"abcdefghijklmnopqrstuvwxyz",                                                       "1714A472EEE57D30040412BFCC55032A0B11602FF37BEEE9"),
            (b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",                         "0F7BF9A19B9C58F2B7610DF7E84F0AC3A71C631E7B53F78E"),
            (b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",                   "8DCEA680A17583EE502BA38A3C368651890FFBCCDC49A8CC"),
            (b"12345678901234567890123456789012345678901234567890123456789012345678901234567890", "1C14795529FD9F207A958F84C52F11E887FA0CABDFD91BFD"),
        ];

        for (i, &(input, expected_hex)) in test_cases.iter().enumerate() {
            let expected = hex_to_bytes(expected_hex).unwrap();
            let reached = tiger_hash(input);

            assert_eq!((i, &expected[..]), (i, reached.as_slice()));
        }
    }

    #[test]
    fn padding_boundaries() {
        // Inputs are the bytes 0, 1, 2, ... of the given length.
        let test_cases: &'static [(usize, &'static str)] = &[
            (54,  "6C6C88B8E18DF5CB22EDB61A2D3ED74741A708BC46576FB7"),
            (55,  "090A9FE3D42755F384096AC0415CD3FCE6239741F248E23C"),
            (56,  "0D17702DDCA078ED1CC51B95DF29EA1053CE97F69395C613"),
            (57,  "9D8C2AD327DE43D5782D5F20881F4A8C433BA19AFC8C15AD"),
            (63,  "D401F9B13D39C24477C0AE6971C705C63C067F29508C29C9"),
            (64,  "212DF89C57155270344ACCB19027B0B26B104FA0FBBE0FE4"),
            (65,  "3BEDE767AA4A7507DBEFF83D1BC33F67EBA9C64945066227"),
            (118, "74580BFA88EEA03C0EAE722F81997E400D9CC25FA0311DFA"),
            (119, "F0B67AA913BF87D688EBA9F4C82BDE144B953EF2299933A8"),
            (120, "C20AD90DB0B8BEE0335D069259991060969EEC9F939E4CA7"),
            (128, "34FA7C74EE67C1F92C0BE1CFD4B2F46A14FFB999604925F6"),
        ];

        let mut input = [0u8; 128];
        for (i, b) in input.iter_mut().enumerate() {
            *b = i as u8;
        }

        for &(len, expected_hex) in test_cases {
            let expected = hex_to_bytes(expected_hex).unwrap();
            assert_eq!((len, &expected[..]), (len, tiger_hash(&input[..len]).as_slice()));

            let mut hasher = Tiger192::new();
            for chunk in input[..len].chunks(7) {
                Input::input(&mut hasher, chunk);
            }
            assert_eq!((len, &expected[..]), (len, hasher.fixed_result().as_slice()));
        }
    }

    #[test]
    fn compression_is_pure() {
        let block = Block::default();
        let mut first = TigerState::new();
        let mut second = TigerState::new();
        first.process_block(&block, DEFAULT_PASSES);
        second.process_block(&block, DEFAULT_PASSES);
        assert_eq!(first.0, second.0);
        assert!(first.0 != (A, B, C));

        let mut extra = TigerState::new();
        extra.process_block(&block, DEFAULT_PASSES + 1);
        assert!(extra.0 != first.0);
    }

    #[test]
    fn passes_below_three_are_rejected() {
        for passes in 0..DEFAULT_PASSES {
            assert_eq!(Tiger192::with_passes(passes).err(), Some(InvalidPasses { passes }));
        }
        let hasher = Tiger128::with_passes(7).unwrap();
        assert_eq!(hasher.passes(), 7);
        assert_eq!(hasher.variant(), VariantSpec::Tiger128);
    }

    #[test]
    fn three_passes_is_the_default() {
        let mut configured = Tiger192::with_passes(DEFAULT_PASSES).unwrap();
        assert_eq!(configured.one_shot(b"abc"), tiger_hash(b"abc"));
        assert_eq!(Tiger192::default().passes(), DEFAULT_PASSES);
    }

    #[test]
    fn self_tests_pass() {
        assert_eq!(Tiger192::self_test().unwrap().as_slice(), &SELF_TEST_DIGEST[..]);
        assert_eq!(Tiger160::self_test().unwrap().as_slice(), &SELF_TEST_DIGEST[4..]);
        assert_eq!(Tiger128::self_test().unwrap().as_slice(), &SELF_TEST_DIGEST[8..]);
        assert_eq!(Tiger160::extra_pass_self_test().unwrap().as_slice(), &EXTRA_PASS_DIGEST[..]);
    }

    #[test]
    fn self_tests_through_try_finish() {
        assert_eq!(Tiger192::self_test_try().unwrap(), Tiger192::self_test().unwrap());
        assert_eq!(Tiger160::self_test_try().unwrap(), Tiger160::self_test().unwrap());
        assert_eq!(Tiger128::self_test_try().unwrap().as_slice(), &SELF_TEST_DIGEST[8..]);
    }

    #[test]
    fn extra_pass_check_starts_from_zero_state() {
        let mut standard = Tiger160::with_passes(DEFAULT_PASSES + 1).unwrap();
        let from_iv = standard.one_shot(EXTRA_PASS_INPUT);
        let expected = hex_to_bytes("5A82A2FEC3C034D61236E4045D4F337117FC4040").unwrap();
        assert_eq!(from_iv.as_slice(), &expected[..20]);
        assert!(from_iv.as_slice() != &EXTRA_PASS_DIGEST[..]);

        let mut hasher = Tiger160::with_passes(DEFAULT_PASSES + 1).unwrap();
        hasher.state = TigerState((0, 0, 0));
        Input::input(&mut hasher, EXTRA_PASS_INPUT);
        assert_eq!(hasher.fixed_result().as_slice(), &EXTRA_PASS_DIGEST[..]);
    }
}
