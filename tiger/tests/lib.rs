#![no_std]
extern crate digest;
#[macro_use]
extern crate hex_literal;
extern crate tiger;
extern crate std;
use std::vec::Vec;

use digest::dev::{digest_test, one_million_a};
use tiger::{Digest, Tiger128, Tiger160, Tiger192, VariantSpec, DEFAULT_PASSES};

const NOPQ: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
const NOPQ_DIGITS: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq12345678";

fn tiger192_vectors() -> [(&'static [u8], [u8; 24]); 9] {
    [
        (b"", hex!("3293ac630c13f0245f92bbb1766e16167a4e58492dde73f3")),
        (b"a", hex!("77befbef2e7ef8ab2ec8f93bf587a7fc613e247f5f247809")),
        (b"abc", hex!("2aab1484e8c158f2bfb8c5ff41b57a525129131c957b5f93")),
        (b"message digest", hex!("d981f8cb78201a950dcf3048751e441c517fca1aa55a29f6")),
        (b"abcdefghijklmnopqrstuvwxyz", hex!("1714a472eee57d30040412bfcc55032a0b11602ff37beee9")),
        (NOPQ, hex!("0f7bf9a19b9c58f2b7610df7e84f0ac3a71c631e7b53f78e")),
        (b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
         hex!("8dcea680a17583ee502ba38a3c368651890ffbccdc49a8cc")),
        (b"12345678901234567890123456789012345678901234567890123456789012345678901234567890",
         hex!("1c14795529fd9f207a958f84c52f11e887fa0cabdfd91bfd")),
        (NOPQ_DIGITS, hex!("b04367656b33637d9192256cd3f971bdd63057df78793f62")),
    ]
}

#[test]
fn tiger192_main() {
    for (i, &(input, ref output)) in tiger192_vectors().iter().enumerate() {
        assert_eq!((i, None), (i, digest_test::<Tiger192>(input, output)));
    }
}

#[test]
fn tiger160_main() {
    for (i, &(input, ref output)) in tiger192_vectors().iter().enumerate() {
        assert_eq!((i, None), (i, digest_test::<Tiger160>(input, &output[4..])));
    }
}

#[test]
fn tiger128_main() {
    let expected = hex!("b7610df7e84f0ac3a71c631e7b53f78e");
    assert_eq!(None, digest_test::<Tiger128>(NOPQ, &expected));

    for (i, &(input, ref output)) in tiger192_vectors().iter().enumerate() {
        assert_eq!((i, None), (i, digest_test::<Tiger128>(input, &output[8..])));
    }
}

#[test]
fn tiger_1million_a() {
    let output = include_bytes!("data/one_million_a.bin");
    one_million_a::<Tiger192>(output);
}

#[test]
fn truncation_holds_with_extra_passes() {
    for &(input, _) in tiger192_vectors().iter() {
        let full = Tiger192::with_passes(5).unwrap().one_shot(input);
        let mid = Tiger160::with_passes(5).unwrap().one_shot(input);
        let short = Tiger128::with_passes(5).unwrap().one_shot(input);
        assert_eq!(&full[4..], mid.as_slice());
        assert_eq!(&full[8..], short.as_slice());
    }
}

// Four passes from the standard initial state.
#[test]
fn four_passes() {
    let nopq = hex!("fceeffd83ceea2c7d4ba99d7c19f928a8d702144f307641e");
    let digits = hex!("70857d165a82a2fec3c034d61236e4045d4f337117fc4040");

    let mut hasher = Tiger192::with_passes(DEFAULT_PASSES + 1).unwrap();
    assert_eq!(hasher.one_shot(NOPQ).as_slice(), &nopq[..]);

    for chunk in NOPQ_DIGITS.chunks(1) {
        hasher.input(chunk);
    }
    assert_eq!(hasher.result_reset().as_slice(), &digits[..]);

    let mut hasher = Tiger160::with_passes(DEFAULT_PASSES + 1).unwrap();
    hasher.input(&NOPQ_DIGITS[..13]);
    hasher.input(&NOPQ_DIGITS[13..]);
    assert_eq!(hasher.result().as_slice(), &digits[4..]);
}

#[test]
fn self_tests() {
    let nopq = hex!("0f7bf9a19b9c58f2b7610df7e84f0ac3a71c631e7b53f78e");
    assert_eq!(Tiger192::self_test().unwrap().as_slice(), &nopq[..]);
    assert_eq!(Tiger160::self_test().unwrap().as_slice(), &nopq[4..]);
    assert_eq!(Tiger128::self_test().unwrap().as_slice(), &nopq[8..]);

    assert_eq!(Tiger192::self_test_try().unwrap().as_slice(), &nopq[..]);
    assert_eq!(Tiger160::self_test_try().unwrap().as_slice(), &nopq[4..]);
    assert_eq!(Tiger128::self_test_try().unwrap().as_slice(), &nopq[8..]);

    let digits = hex!("c5ad43a0906995e9aabfb24f255d2017f37d39ea");
    assert_eq!(Tiger160::extra_pass_self_test().unwrap().as_slice(), &digits[..]);
}

#[test]
fn terminator_at_byte_55_takes_a_second_block() {
    let input: Vec<u8> = (0..119u8).collect();
    let short = hex!("090a9fe3d42755f384096ac0415cd3fce6239741f248e23c");
    let long = hex!("f0b67aa913bf87d688eba9f4c82bde144b953ef2299933a8");

    let mut hasher = Tiger192::new();
    assert_eq!(hasher.one_shot(&input[..55]).as_slice(), &short[..]);
    assert_eq!(hasher.one_shot(&input).as_slice(), &long[..]);

    let mut hasher = Tiger128::new();
    hasher.input(&input[..64]);
    hasher.input(&input[64..]);
    assert_eq!(hasher.result().as_slice(), &long[8..]);
}

#[test]
fn reset_does_not_leak_state() {
    let empty = hex!("3293ac630c13f0245f92bbb1766e16167a4e58492dde73f3");
    let big = [0xa5u8; 10_000];

    let mut hasher = Tiger192::new();
    hasher.input(&big[..]);
    hasher.input(b"partial block");
    hasher.reset();
    assert_eq!(hasher.result_reset().as_slice(), &empty[..]);

    assert_ne!(hasher.one_shot(&big).as_slice(), &empty[..]);
    assert_eq!(hasher.one_shot(b"").as_slice(), &empty[..]);
    assert_eq!(Tiger192::digest(b"").as_slice(), &empty[..]);
}

#[test]
fn try_finish_too_small() {
    let mut hasher = Tiger160::new();
    hasher.input(NOPQ);

    let mut out = [0x5au8; 19];
    assert!(hasher.try_finish(&mut out).is_err());
    assert_eq!(out, [0x5au8; 19]);

    // A failed attempt leaves the hasher usable.
    let mut out = [0u8; 20];
    assert_eq!(hasher.try_finish(&mut out).ok(), Some(20));
    assert_eq!(&out[..], &Tiger160::self_test().unwrap()[..]);
}

#[test]
fn try_finish_exact_and_larger() {
    let nopq = hex!("0f7bf9a19b9c58f2b7610df7e84f0ac3a71c631e7b53f78e");

    let mut hasher = Tiger128::new();
    hasher.input(NOPQ);
    let mut out = [0u8; 16];
    assert_eq!(hasher.try_finish(&mut out).ok(), Some(16));
    assert_eq!(&out[..], &nopq[8..]);

    let mut hasher = Tiger192::new();
    hasher.input(NOPQ);
    let mut out = [0xffu8; 32];
    assert_eq!(hasher.try_finish(&mut out).ok(), Some(24));
    assert_eq!(&out[..24], &nopq[..]);
    assert_eq!(&out[24..], &[0xffu8; 8][..]);

    // try_finish resets, so the next digest starts from scratch.
    hasher.input(NOPQ);
    assert_eq!(hasher.try_finish(&mut out).ok(), Some(24));
    assert_eq!(&out[..24], &nopq[..]);
}

#[test]
fn variant_metadata() {
    assert_eq!(Tiger192::new().variant(), VariantSpec::Tiger192);
    assert_eq!(Tiger160::new().variant(), VariantSpec::Tiger160);
    assert_eq!(Tiger128::new().variant(), VariantSpec::Tiger128);
    assert_eq!(Tiger128::output_size(), 16);
    assert_eq!(Tiger160::output_size(), 20);
    assert_eq!(Tiger192::output_size(), 24);
}
