//! polysub - keyed-alphabet substitution cipher
//!
//! Reads `plain.txt`, `key.txt` and `alphakey.txt` from the working
//! directory, prints the tabula recta and the ciphertext to stdout, and
//! writes the ciphertext to `encrypted.txt`.

use anyhow::{Context, Result};
use polysub::{encrypt, sanitize, KeyedAlphabet};
use std::fs;
use std::path::Path;
use tracing::info;

const PLAIN_FILE: &str = "plain.txt";
const KEY_FILE: &str = "key.txt";
const ALPHAKEY_FILE: &str = "alphakey.txt";
const OUTPUT_FILE: &str = "encrypted.txt";

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries the table and ciphertext.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    run()
}

fn run() -> Result<()> {
    let plain = read_sanitized(PLAIN_FILE)?;
    let key = read_sanitized(KEY_FILE)?;
    let alphakey = read_sanitized(ALPHAKEY_FILE)?;
    info!(
        plain_len = plain.len(),
        key_len = key.len(),
        "inputs read and sanitized"
    );

    let alphabet = KeyedAlphabet::from_key(&alphakey)
        .with_context(|| format!("building keyed alphabet from '{}'", ALPHAKEY_FILE))?;

    for row in alphabet.rows() {
        println!("{}", row);
    }
    println!();

    let ciphertext = encrypt(&plain, &key, &alphabet).context("encrypting plaintext")?;
    println!("{}", ciphertext);

    write_ciphertext(Path::new(OUTPUT_FILE), &ciphertext)?;
    info!(output = OUTPUT_FILE, len = ciphertext.len(), "ciphertext written");

    Ok(())
}

/// Read a file in full and sanitize its content.
fn read_sanitized(path: &str) -> Result<String> {
    let raw =
        fs::read_to_string(path).with_context(|| format!("Failed to read input file '{}'", path))?;
    Ok(sanitize(&raw))
}

/// Write the ciphertext, overwriting any existing file, with mode 0644 on
/// Unix.
fn write_ciphertext(path: &Path, ciphertext: &str) -> Result<()> {
    fs::write(path, ciphertext)
        .with_context(|| format!("Failed to write output file {:?}", path))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644))
            .with_context(|| format!("Failed to set permissions on {:?}", path))?;
    }

    Ok(())
}
