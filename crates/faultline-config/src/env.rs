use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// Expansion happens on the raw text before deserialization, so config
/// structs hold plain values. Every referenced variable must be set;
/// the first unset one is reported by name.
pub fn expand_env(input: &str) -> Result<String, String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"\{\{\s*env\.([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("must be valid regex")
    });

    let mut missing: Option<String> = None;
    let expanded = re.replace_all(input, |captures: &regex::Captures<'_>| {
        let name = &captures[1];
        std::env::var(name).unwrap_or_else(|_| {
            missing.get_or_insert_with(|| name.to_owned());
            String::new()
        })
    });

    match missing {
        Some(name) => Err(format!("environment variable not found: `{name}`")),
        None => Ok(expanded.into_owned()),
    }
}
