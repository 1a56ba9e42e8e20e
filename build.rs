//! Build script for the spotplay server.
//!
//! Copies the `.env.example` template next to the `.env` file that
//! `config::load_env` reads, so a fresh install shows which variables the
//! server expects:
//! - Linux: `~/.local/share/spotplay/.env.example`
//! - macOS: `~/Library/Application Support/spotplay/.env.example`
//! - Windows: `%LOCALAPPDATA%/spotplay/.env.example`
//!
//! A missing template only produces a cargo warning.
use std::{env, fs, path::PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("spotplay");

    if !env_example_path.is_file() {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
        return Ok(());
    }

    // Read-only build sandboxes must not fail the build.
    if let Err(e) = fs::create_dir_all(&out_dir)
        .and_then(|_| fs::copy(&env_example_path, out_dir.join(".env.example")))
    {
        println!(
            "cargo:warning=could not copy .env.example to {}: {}",
            out_dir.display(),
            e
        );
    }

    Ok(())
}
