//! Command-line harness for naive AES-ECB encryption.

#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rijndael_core::{encrypt_block, expand_key, CipherKey};
use rijndael_modes::EcbCipher;

/// FIPS-197 sample key, the harness's historical default.
const DEMO_KEY: [u8; 16] = [
    0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf, 0x4f, 0x3c,
];

// SP 800-38A single-block vector under DEMO_KEY, used as a self-check
// before timing anything.
const DEMO_PLAIN_BLOCK: [u8; 16] = [
    0x6b, 0xc1, 0xbe, 0xe2, 0x2e, 0x40, 0x9f, 0x96, 0xe9, 0x3d, 0x7e, 0x11, 0x73, 0x93, 0x17, 0x2a,
];
const DEMO_CIPHER_BLOCK: [u8; 16] = [
    0x3a, 0xd7, 0x7b, 0xb4, 0x0d, 0x7a, 0x36, 0x60, 0xa8, 0x9e, 0xca, 0xf3, 0x24, 0x66, 0xef, 0x97,
];

/// Naive AES CLI.
#[derive(Parser)]
#[command(
    name = "rijndael",
    version,
    author,
    about = "Naive AES-ECB encryption harness"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file under AES-ECB.
    Enc {
        /// Key as 32 or 64 hex characters (AES-128 or AES-256).
        #[arg(long, value_name = "HEX")]
        key_hex: String,
        /// Input plaintext path; length must be a positive multiple of 16.
        #[arg(long, value_name = "FILE")]
        input: PathBuf,
        /// Output ciphertext path.
        #[arg(long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Generate a random plaintext buffer for benchmarking.
    Rand {
        /// Buffer size in bytes; must be a positive multiple of 16.
        #[arg(long)]
        size: usize,
        /// Output path.
        #[arg(long, value_name = "FILE")]
        out: PathBuf,
        /// Optional RNG seed for reproducible buffers.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Self-check against a known vector, then time a bulk encryption.
    Demo {
        /// Buffer size in bytes; must be a positive multiple of 16.
        #[arg(long, default_value_t = 512)]
        size: usize,
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Enc {
            key_hex,
            input,
            output,
        } => cmd_enc(&key_hex, &input, &output),
        Commands::Rand { size, out, seed } => cmd_rand(size, &out, seed),
        Commands::Demo { size, seed } => cmd_demo(size, seed),
    }
}

fn cmd_enc(key_hex: &str, input: &PathBuf, output: &PathBuf) -> Result<()> {
    let key = hex::decode(key_hex.trim()).context("decode key hex")?;
    let cipher = EcbCipher::new(&key)?;
    let plaintext =
        fs::read(input).with_context(|| format!("read {}", input.display()))?;
    let ciphertext = cipher.encrypt(&plaintext)?;
    fs::write(output, ciphertext).with_context(|| format!("write {}", output.display()))?;
    Ok(())
}

fn cmd_rand(size: usize, out: &PathBuf, seed: Option<u64>) -> Result<()> {
    if size == 0 || size % 16 != 0 {
        bail!("buffer size must be a positive multiple of 16 bytes");
    }
    let mut rng = seeded_rng(seed);
    let mut buffer = vec![0u8; size];
    rng.fill_bytes(&mut buffer);
    fs::write(out, buffer).with_context(|| format!("write {}", out.display()))?;
    Ok(())
}

fn cmd_demo(size: usize, seed: Option<u64>) -> Result<()> {
    // Known-answer check first; a silent miscompiled cipher would otherwise
    // just time garbage.
    let round_keys = expand_key(&CipherKey::from(DEMO_KEY));
    if encrypt_block(&DEMO_PLAIN_BLOCK, &round_keys) != DEMO_CIPHER_BLOCK {
        bail!("known-answer self-check failed");
    }

    if size == 0 || size % 16 != 0 {
        bail!("buffer size must be a positive multiple of 16 bytes");
    }
    let mut rng = seeded_rng(seed);
    let mut plaintext = vec![0u8; size];
    rng.fill_bytes(&mut plaintext);

    let cipher = EcbCipher::new(&DEMO_KEY)?;
    let start = Instant::now();
    let ciphertext = cipher.encrypt(&plaintext)?;
    let elapsed = start.elapsed();

    println!("key: {}", hex::encode(DEMO_KEY));
    println!("plaintext[..16]: {}", hex::encode(&plaintext[..16]));
    println!("ciphertext[..16]: {}", hex::encode(&ciphertext[..16]));
    println!("encrypted {size} bytes in {elapsed:?}");
    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> ChaCha20Rng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
