//! Demo configuration parameters.

/// Configuration for the demonstration driver.
///
/// Read once at startup; all values are immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    ///
    /// Default: `dynarray_demo=info`.
    pub log_filter: String,

    /// Append `(len N, capacity M)` to every printed state.
    ///
    /// Default: `false`, which reproduces the plain `[1, 2, 3]` output.
    pub show_capacity: bool,
}

impl DemoConfig {
    /// Default log filter directive.
    pub const DEFAULT_LOG_FILTER: &'static str = "dynarray_demo=info";

    /// Environment variable overriding [`log_filter`](Self::log_filter).
    pub const LOG_FILTER_VAR: &'static str = "DYNARRAY_DEMO_LOG";

    /// Environment variable enabling [`show_capacity`](Self::show_capacity).
    pub const SHOW_CAPACITY_VAR: &'static str = "DYNARRAY_DEMO_SHOW_CAPACITY";

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
            show_capacity: false,
        }
    }

    /// Build a config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing or blank values
    /// keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::new();
        if let Some(filter) = lookup(Self::LOG_FILTER_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter.trim().to_string();
        }
        if let Some(flag) = lookup(Self::SHOW_CAPACITY_VAR) {
            config.show_capacity = parse_flag(&flag);
        }
        config
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_environment_is_empty() {
        let config = DemoConfig::from_lookup(|_| None);
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.log_filter, "dynarray_demo=info");
        assert!(!config.show_capacity);
    }

    #[test]
    fn log_filter_override_is_trimmed() {
        let config = DemoConfig::from_lookup(lookup_from(&[(
            DemoConfig::LOG_FILTER_VAR,
            "  dynarray=trace,dynarray_demo=debug ",
        )]));
        assert_eq!(config.log_filter, "dynarray=trace,dynarray_demo=debug");
    }

    #[test]
    fn blank_log_filter_keeps_default() {
        let config = DemoConfig::from_lookup(lookup_from(&[(DemoConfig::LOG_FILTER_VAR, "   ")]));
        assert_eq!(config.log_filter, DemoConfig::DEFAULT_LOG_FILTER);
    }

    #[test]
    fn show_capacity_accepts_common_truthy_spellings() {
        for value in ["1", "true", "TRUE", "yes", " on "] {
            let config =
                DemoConfig::from_lookup(lookup_from(&[(DemoConfig::SHOW_CAPACITY_VAR, value)]));
            assert!(config.show_capacity, "{value:?} should enable show_capacity");
        }
        for value in ["0", "false", "", "maybe"] {
            let config =
                DemoConfig::from_lookup(lookup_from(&[(DemoConfig::SHOW_CAPACITY_VAR, value)]));
            assert!(!config.show_capacity, "{value:?} should not enable show_capacity");
        }
    }
}
