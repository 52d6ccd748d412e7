use std::fs::File;
use std::hint::black_box;
use std::io::{self, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, error, info};
use rand::RngCore;
use tiger::{Bits128, Bits160, Bits192, Digest, Tiger, Tiger128, Tiger160, Tiger192, Variant, VariantSpec};

#[derive(Parser, Debug)]
#[command(name = "tigersum", version)]
#[command(about = "Print Tiger digests of files")]
struct Args {
    /// Files to hash; `-` or no file reads standard input
    files: Vec<PathBuf>,

    /// Digest width in bits: 128, 160 or 192
    #[arg(short, long, default_value = "192", value_parser = parse_bits)]
    bits: VariantSpec,

    /// Compression passes per block, at least 3
    #[arg(short, long, default_value_t = tiger::DEFAULT_PASSES)]
    passes: u32,

    /// Print the time spent hashing each input
    #[arg(long)]
    time: bool,

    /// Run the built-in known-answer tests and exit
    #[arg(long)]
    self_test: bool,

    /// Hash a random buffer of this many bytes repeatedly and report throughput
    #[arg(long, value_name = "BYTES")]
    bench: Option<usize>,

    /// Number of digests computed by --bench
    #[arg(long, default_value_t = 100)]
    iterations: u32,
}

fn parse_bits(s: &str) -> Result<VariantSpec, String> {
    s.parse::<u32>()
        .ok()
        .and_then(VariantSpec::from_bits)
        .ok_or_else(|| format!("`{s}` is not one of 128, 160, 192"))
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    debug!("{args:?}");

    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err:#}");
            eprintln!("tigersum: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns `Ok(false)` when a self-test fails.
fn run(args: &Args) -> Result<bool> {
    let mut out = io::stdout().lock();

    if args.self_test {
        return Ok(self_test(&mut out)?);
    }

    match args.bits {
        VariantSpec::Tiger128 => run_variant::<Bits128, _>(args, &mut out)?,
        VariantSpec::Tiger160 => run_variant::<Bits160, _>(args, &mut out)?,
        VariantSpec::Tiger192 => run_variant::<Bits192, _>(args, &mut out)?,
    }
    Ok(true)
}

fn run_variant<V: Variant, W: Write>(args: &Args, out: &mut W) -> Result<()>
where
    Tiger<V>: Write,
{
    let mut hasher = Tiger::<V>::with_passes(args.passes)?;

    if let Some(size) = args.bench {
        return bench(&mut hasher, size, args.iterations, out);
    }

    let stdin = [PathBuf::from("-")];
    let files = if args.files.is_empty() { &stdin[..] } else { &args.files[..] };

    for path in files {
        let start = Instant::now();
        let digest = hash_path(&mut hasher, path)?;
        let elapsed = start.elapsed();

        let mut line = sum_line(&digest, &path.to_string_lossy());
        if args.time {
            line.push_str(&format!("  ({})", format_elapsed(elapsed)));
        }
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn hash_path<V: Variant>(hasher: &mut Tiger<V>, path: &Path) -> Result<Vec<u8>>
where
    Tiger<V>: Write,
{
    if path == Path::new("-") {
        return hash_reader(hasher, &mut io::stdin().lock()).context("failed to read standard input");
    }

    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    info!("hashing {} with {} passes", path.display(), hasher.passes());
    hash_reader(hasher, &mut BufReader::new(file))
        .with_context(|| format!("failed to read {}", path.display()))
}

/// Streams `reader` through the hasher and returns the digest, leaving the
/// hasher reset for the next input.
fn hash_reader<V: Variant, R: Read>(hasher: &mut Tiger<V>, reader: &mut R) -> io::Result<Vec<u8>>
where
    Tiger<V>: Write,
{
    io::copy(reader, hasher)?;
    Ok(hasher.result_reset().to_vec())
}

fn sum_line(digest: &[u8], name: &str) -> String {
    format!("{}  {}", hex::encode(digest), name)
}

fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.6}s", elapsed.as_secs_f64())
}

fn bench<V: Variant>(hasher: &mut Tiger<V>, size: usize, iterations: u32, out: &mut impl Write) -> Result<()> {
    let mut data = vec![0u8; size];
    rand::thread_rng().fill_bytes(&mut data);

    let start = Instant::now();
    for _ in 0..iterations {
        black_box(hasher.one_shot(black_box(&data[..])));
    }
    let elapsed = start.elapsed();

    let bytes = size as f64 * f64::from(iterations);
    let secs = elapsed.as_secs_f64();
    let rate = if secs > 0.0 { bytes / secs / (1024.0 * 1024.0) } else { f64::INFINITY };
    writeln!(
        out,
        "{} ({} passes): {iterations} x {size} bytes in {}, {rate:.1} MiB/s",
        V::SPEC,
        hasher.passes(),
        format_elapsed(elapsed),
    )?;
    Ok(())
}

fn self_test(out: &mut impl Write) -> io::Result<bool> {
    let checks = [
        ("Tiger/192".to_string(), Tiger192::self_test().map(|d| d.to_vec()).map_err(|e| e.to_string())),
        ("Tiger/160".to_string(), Tiger160::self_test().map(|d| d.to_vec()).map_err(|e| e.to_string())),
        ("Tiger/128".to_string(), Tiger128::self_test().map(|d| d.to_vec()).map_err(|e| e.to_string())),
        ("Tiger/192 (try)".to_string(), Tiger192::self_test_try().map(|d| d.to_vec()).map_err(|e| e.to_string())),
        ("Tiger/160 (try)".to_string(), Tiger160::self_test_try().map(|d| d.to_vec()).map_err(|e| e.to_string())),
        ("Tiger/128 (try)".to_string(), Tiger128::self_test_try().map(|d| d.to_vec()).map_err(|e| e.to_string())),
        (
            "Tiger/160 (4 passes)".to_string(),
            Tiger160::extra_pass_self_test().map(|d| d.to_vec()).map_err(|e| e.to_string()),
        ),
    ];

    let mut passed = true;
    for (label, result) in checks {
        match result {
            Ok(digest) => {
                writeln!(out, "{}", hex::encode_upper(&digest))?;
                writeln!(out, "{label} good")?;
            }
            Err(err) => {
                error!("{label}: {err}");
                writeln!(out, "{label} bad")?;
                passed = false;
            }
        }
    }
    Ok(passed)
}
