//! Build script for shelfview.
//!
//! Copies the `.env.example` configuration template from the crate root into
//! the platform-specific local data directory (`<data_local_dir>/shelfview/`),
//! next to where the binary looks for its `.env` file at runtime.

use std::{env, fs, path::PathBuf};

/// Copies `.env.example` into the local data directory.
///
/// A missing template only produces a cargo warning; failing to create the
/// target directory or write the file aborts the build.
///
/// # Destination
///
/// - Linux: `~/.local/share/shelfview/.env.example`
/// - macOS: `~/Library/Application Support/shelfview/.env.example`
/// - Windows: `%LOCALAPPDATA%/shelfview/.env.example`
fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=.env.example");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let env_example_path = manifest_dir.join(".env.example");

    let mut out_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    out_dir.push("shelfview");
    fs::create_dir_all(&out_dir)?;

    if env_example_path.is_file() {
        let contents = fs::read_to_string(&env_example_path)?;
        fs::write(out_dir.join(".env.example"), contents)?;
    } else {
        println!(
            "cargo:warning=.env.example not found at {}",
            env_example_path.display()
        );
    }

    Ok(())
}
