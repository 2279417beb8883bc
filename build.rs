use std::env;
use std::fs;
use std::path::Path;

// Keys read through option_env! in src/config.rs
const CONFIG_KEYS: [&str; 5] = [
    "GRAPHQL_URL",
    "BOOKS_API_URL",
    "ENVIRONMENT",
    "ENABLE_LOGGING",
    "DESCRIPTION_PREVIEW_CHARS",
];

fn check_value(key: &str, value: &str) {
    let valid = match key {
        "ENABLE_LOGGING" => value.parse::<bool>().is_ok(),
        "DESCRIPTION_PREVIEW_CHARS" => value.parse::<usize>().is_ok(),
        "ENVIRONMENT" => matches!(value, "development" | "production"),
        "GRAPHQL_URL" | "BOOKS_API_URL" => !value.is_empty(),
        _ => true,
    };
    if !valid {
        println!("cargo:warning={}={:?} is not usable, the default applies", key, value);
    }
}

fn main() {
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
        if let Ok(value) = env::var(key) {
            check_value(key, &value);
        }
    }

    let env_file = Path::new(".env");
    if !env_file.exists() {
        println!("cargo:warning=No .env file; Google Books and /graphql defaults apply. See .env.example.");
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        return;
    };

    for line in contents.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim().trim_matches('"');

        if !CONFIG_KEYS.contains(&key) {
            println!("cargo:warning=.env key {} is not used by the app", key);
            continue;
        }
        // Real environment wins over .env
        if env::var(key).is_err() {
            check_value(key, value);
            println!("cargo:rustc-env={}={}", key, value);
        }
    }
}
