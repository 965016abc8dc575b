//! Output file naming.

use configgen_core::defaults::{MAX_FILENAME_LENGTH, SCRIPT_EXTENSION};
use configgen_core::ResolvedConfig;
use configgen_ports::{ConfigGenError, Result};

/// Turn a user-supplied configuration name into a script file name
///
/// Runs of path-hostile characters and whitespace collapse to `_`; a trailing
/// `.py` is accepted; anything else outside `[A-Za-z0-9_-]` is rejected.
pub fn sanitize_filename(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.chars().count() > MAX_FILENAME_LENGTH {
        return Err(ConfigGenError::Filename(format!(
            "'{trimmed}' is longer than {MAX_FILENAME_LENGTH} characters"
        )));
    }

    let stem = trimmed.strip_suffix(SCRIPT_EXTENSION).unwrap_or(trimmed);

    let mut cleaned = String::with_capacity(stem.len());
    let mut in_run = false;
    for c in stem.chars() {
        if is_replaced(c) {
            if !in_run {
                cleaned.push('_');
            }
            in_run = true;
        } else {
            cleaned.push(c);
            in_run = false;
        }
    }

    if cleaned.is_empty() {
        return Err(ConfigGenError::Filename(
            "configuration name is empty".to_string(),
        ));
    }
    if let Some(bad) = cleaned
        .chars()
        .find(|c| !(c.is_alphanumeric() || *c == '_' || *c == '-'))
    {
        return Err(ConfigGenError::Filename(format!(
            "'{trimmed}' contains invalid character {bad:?}; use letters, numbers, '_' or '-'"
        )));
    }

    Ok(format!("{cleaned}{SCRIPT_EXTENSION}"))
}

fn is_replaced(c: char) -> bool {
    c.is_whitespace() || matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*')
}

/// Name used when the caller gives none, e.g.
/// `abides_rmsc03_5127agents_20250115_100000`
pub fn default_config_name(config: &ResolvedConfig) -> String {
    let stamp = config.generated_at().format("%Y%m%d_%H%M%S");
    let total = config.total_agents();
    match config.template() {
        Some(template) => format!("abides_{template}_{total}agents_{stamp}"),
        None => format!("abides_config_{total}agents_{stamp}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use configgen_core::{AgentCounts, MarketParams, ModeFlags};

    fn config(template: Option<&str>) -> ResolvedConfig {
        ResolvedConfig::from_parts(
            template.map(str::to_string),
            MarketParams::default(),
            AgentCounts::from_fn(|_| 2),
            1.0,
            None,
            ModeFlags::default(),
            Utc.with_ymd_and_hms(2025, 1, 15, 10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_plain_name_gets_extension() {
        assert_eq!(sanitize_filename("my_config").unwrap(), "my_config.py");
        assert_eq!(sanitize_filename("  run-01  ").unwrap(), "run-01.py");
    }

    #[test]
    fn test_existing_extension_is_kept_once() {
        assert_eq!(sanitize_filename("foo.py").unwrap(), "foo.py");
    }

    #[test]
    fn test_hostile_runs_collapse() {
        assert_eq!(sanitize_filename("a b").unwrap(), "a_b.py");
        assert_eq!(sanitize_filename("a<>:b").unwrap(), "a_b.py");
        assert_eq!(sanitize_filename("dir/sub\\name").unwrap(), "dir_sub_name.py");
        assert_eq!(sanitize_filename("x \t|? y").unwrap(), "x_y.py");
    }

    #[test]
    fn test_rejections() {
        for bad in ["", "   ", ".py", "a.b", "semi;colon", "dollar$"] {
            assert!(
                matches!(sanitize_filename(bad), Err(ConfigGenError::Filename(_))),
                "{bad:?} should be rejected"
            );
        }
        let long = "a".repeat(MAX_FILENAME_LENGTH + 1);
        assert!(sanitize_filename(&long).is_err());
        assert!(sanitize_filename(&"a".repeat(MAX_FILENAME_LENGTH)).is_ok());
    }

    #[test]
    fn test_default_names() {
        assert_eq!(
            default_config_name(&config(Some("rmsc03"))),
            "abides_rmsc03_12agents_20250115_100000"
        );
        assert_eq!(
            default_config_name(&config(None)),
            "abides_config_12agents_20250115_100000"
        );
    }

    #[test]
    fn test_default_name_is_a_valid_filename() {
        let name = default_config_name(&config(Some("minimal")));
        assert_eq!(sanitize_filename(&name).unwrap(), format!("{name}.py"));
    }
}
