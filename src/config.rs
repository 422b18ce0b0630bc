use log::Level;

pub const DEFAULT_CONTACT_URL: &str = "https://t.me/traffagent";

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console while developing locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

pub fn get_bot_api_url() -> &'static str {
    "https://api.telegram.org"
}

/// Where the summary screen sends the visitor by hand.
pub fn get_contact_url() -> &'static str {
    non_empty(option_env!("TRAFFAGENT_CONTACT_URL")).unwrap_or(DEFAULT_CONTACT_URL)
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Optional lead delivery credentials, baked in at build time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadConfig {
    pub webhook_url: Option<String>,
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
}

impl LeadConfig {
    pub fn from_env() -> Self {
        Self {
            webhook_url: non_empty(option_env!("TRAFFAGENT_WEBHOOK_URL")).map(String::from),
            bot_token: non_empty(option_env!("TRAFFAGENT_BOT_TOKEN")).map(String::from),
            chat_id: non_empty(option_env!("TRAFFAGENT_CHAT_ID")).map(String::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_count_as_unset() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("")), None);
        assert_eq!(non_empty(Some("   ")), None);
        assert_eq!(non_empty(Some(" https://hook ")), Some("https://hook"));
    }

    #[test]
    fn test_default_config_is_unset() {
        let config = LeadConfig::default();
        assert!(config.webhook_url.is_none());
        assert!(config.bot_token.is_none());
        assert!(config.chat_id.is_none());
    }
}
