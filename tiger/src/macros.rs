// All state words are `Wrapping<u64>`, so every operator below wraps
// modulo 2^64.

macro_rules! sbox {
    ($table:ident, $word:expr, $byte:expr) => {
        $table[($word.0 >> (8 * $byte)) as u8 as usize]
    };
}

macro_rules! round {
    ($a:ident, $b:ident, $c:ident, $x:expr, $mul:expr) => {
        $c ^= $x;
        $a -= Wrapping(
            sbox!(T1, $c, 0) ^ sbox!(T2, $c, 2) ^ sbox!(T3, $c, 4) ^ sbox!(T4, $c, 6),
        );
        $b += Wrapping(
            sbox!(T4, $c, 1) ^ sbox!(T3, $c, 3) ^ sbox!(T2, $c, 5) ^ sbox!(T1, $c, 7),
        );
        $b *= Wrapping($mul);
    };
}

macro_rules! pass {
    ($a:ident, $b:ident, $c:ident, $x:ident, $mul:expr) => {
        round!($a, $b, $c, $x[0], $mul);
        round!($b, $c, $a, $x[1], $mul);
        round!($c, $a, $b, $x[2], $mul);
        round!($a, $b, $c, $x[3], $mul);
        round!($b, $c, $a, $x[4], $mul);
        round!($c, $a, $b, $x[5], $mul);
        round!($a, $b, $c, $x[6], $mul);
        round!($b, $c, $a, $x[7], $mul);
    };
}

macro_rules! key_schedule {
    ($x:ident) => {
        $x[0] -= $x[7] ^ Wrapping(KS_HEAD);
        $x[1] ^= $x[0];
        $x[2] += $x[1];
        $x[3] -= $x[2] ^ (!$x[1] << 19);
        $x[4] ^= $x[3];
        $x[5] += $x[4];
        $x[6] -= $x[5] ^ ((!$x[4] >> 23) & Wrapping(KS_MASK));
        $x[7] ^= $x[6];
        $x[0] += $x[7];
        $x[1] -= $x[0] ^ (!$x[7] << 19);
        $x[2] ^= $x[1];
        $x[3] += $x[2];
        $x[4] -= $x[3] ^ ((!$x[2] >> 23) & Wrapping(KS_MASK));
        $x[5] ^= $x[4];
        $x[6] += $x[5];
        $x[7] -= $x[6] ^ Wrapping(KS_TAIL);
    };
}

macro_rules! compress {
    ($x:ident, $a:ident, $b:ident, $c:ident, $passes:expr) => {
        let (aa, bb, cc) = ($a, $b, $c);

        pass!($a, $b, $c, $x, 5);
        key_schedule!($x);
        pass!($c, $a, $b, $x, 7);
        key_schedule!($x);
        pass!($b, $c, $a, $x, 9);

        // Extra passes reuse the last schedule and shift the words left.
        for _ in DEFAULT_PASSES..$passes {
            pass!($a, $b, $c, $x, 9);
            let t = $a;
            $a = $b;
            $b = $c;
            $c = t;
        }

        $a ^= aa;
        $b -= bb;
        $c += cc;
    };
}
