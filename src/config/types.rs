// Configuration type definitions

use serde::Deserialize;

use crate::tooltip::DEFAULT_GAP;

pub const DEFAULT_TOOLTIP_TEXT: &str =
    "Passwords need at least 12 characters. Press Esc to dismiss this hint.";
pub const DEFAULT_MAX_WIDTH: u16 = 40;
pub const DEFAULT_TRIGGER_LABEL: &str = "Password";

/// Tooltip configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TooltipConfig {
    /// Cells between the trigger's right edge and the tooltip
    #[serde(default = "default_gap")]
    pub gap: u16,
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_max_width")]
    pub max_width: u16,
}

fn default_gap() -> u16 {
    DEFAULT_GAP
}

fn default_text() -> String {
    DEFAULT_TOOLTIP_TEXT.to_string()
}

fn default_max_width() -> u16 {
    DEFAULT_MAX_WIDTH
}

impl Default for TooltipConfig {
    fn default() -> Self {
        TooltipConfig {
            gap: default_gap(),
            text: default_text(),
            max_width: default_max_width(),
        }
    }
}

/// Trigger configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TriggerConfig {
    #[serde(default = "default_label")]
    pub label: String,
}

fn default_label() -> String {
    DEFAULT_TRIGGER_LABEL.to_string()
}

impl Default for TriggerConfig {
    fn default() -> Self {
        TriggerConfig {
            label: default_label(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tooltip: TooltipConfig,
    #[serde(default)]
    pub trigger: TriggerConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.tooltip.gap, 0);
        assert_eq!(config.trigger.label, "Password");
    }

    #[test]
    fn test_full_config_parses() {
        let config: Config = toml::from_str(
            r#"
[tooltip]
gap = 2
text = "Hint"
max_width = 20

[trigger]
label = "Email"
"#,
        )
        .unwrap();

        assert_eq!(config.tooltip.gap, 2);
        assert_eq!(config.tooltip.text, "Hint");
        assert_eq!(config.tooltip.max_width, 20);
        assert_eq!(config.trigger.label, "Email");
    }

    #[test]
    fn test_negative_gap_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[tooltip]\ngap = -1\n");
        assert!(result.is_err());
    }

    // Any subset of the tooltip section fields parses, and missing fields keep their defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            gap in prop::option::of(0u16..50),
            max_width in prop::option::of(1u16..200),
            include_text in prop::bool::ANY,
        ) {
            let mut toml_content = String::from("[tooltip]\n");
            if let Some(gap) = gap {
                toml_content.push_str(&format!("gap = {}\n", gap));
            }
            if let Some(max_width) = max_width {
                toml_content.push_str(&format!("max_width = {}\n", max_width));
            }
            if include_text {
                toml_content.push_str("text = \"custom\"\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse: {}", toml_content);
            let config = config.unwrap();

            prop_assert_eq!(config.tooltip.gap, gap.unwrap_or(DEFAULT_GAP));
            prop_assert_eq!(config.tooltip.max_width, max_width.unwrap_or(DEFAULT_MAX_WIDTH));
            let expected_text = if include_text { "custom" } else { DEFAULT_TOOLTIP_TEXT };
            prop_assert_eq!(config.tooltip.text.as_str(), expected_text);
            prop_assert_eq!(config.trigger, TriggerConfig::default());
        }
    }
}
