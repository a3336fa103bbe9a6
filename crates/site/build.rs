//! Build script for the site crate.
//!
//! Content-hashes the stylesheet so templates can link an immutable,
//! cache-safe URL (`/static/css/derived/main.<hash>.css`).

use std::env;
use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

const SHORT_HASH_LEN: usize = 8;

fn main() {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR must be set by Cargo");
    let css_dir = Path::new(&manifest_dir).join("static/css");
    let source = css_dir.join("main.css");

    println!("cargo:rerun-if-changed={}", source.display());

    let Ok(content) = fs::read(&source) else {
        // A checkout without assets still has to compile
        println!("cargo:warning=static/css/main.css missing, CSS_HASH left empty");
        println!("cargo:rustc-env=CSS_HASH=");
        return;
    };

    let digest = format!("{:x}", Sha256::digest(&content));
    let short = digest.get(..SHORT_HASH_LEN).unwrap_or(&digest);
    println!("cargo:rustc-env=CSS_HASH={short}");

    let derived = css_dir.join("derived");
    fs::create_dir_all(&derived).expect("Failed to create derived CSS directory");
    fs::copy(&source, derived.join(format!("main.{short}.css")))
        .expect("Failed to copy hashed stylesheet");
}
