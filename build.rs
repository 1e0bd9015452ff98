use std::env;
use std::fs;
use std::path::Path;

/// Keys forwarded from `.env` into `option_env!` lookups in `src/config.rs`
const FORWARDED_KEYS: &[&str] = &[
    "CATALOG_API_BASE",
    "CATALOG_API_PATH",
    "CATALOG_TOKEN_COOKIE",
    "CATALOG_LOG_LEVEL",
    "CATALOG_MAX_IMAGE_SLOTS",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env");
    for key in FORWARDED_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    let env_file = Path::new(".env");
    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=No .env file found, using built-in catalog API defaults (see .env.example).");
        return;
    };

    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"').trim_matches('\'');

        if !FORWARDED_KEYS.contains(&key) {
            println!("cargo:warning=Ignoring unknown key in .env: {}", key);
            continue;
        }

        // The real environment wins over .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
