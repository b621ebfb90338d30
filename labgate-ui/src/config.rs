//! Loads [`LoginConfig`] from the host page.
//!
//! The page may embed
//! `<script type="application/json" id="labgate-config">{ ... }</script>`;
//! anything it leaves out keeps the built-in default.

use labgate_common::LoginConfig;

/// Element holding the embedded JSON document
pub const CONFIG_ELEMENT_ID: &str = "labgate-config";

/// Read the embedded document, falling back to defaults on any problem
pub fn load() -> LoginConfig {
    resolve(embedded_config().as_deref())
}

/// Resolve the effective config from the embedded document, if any
pub fn resolve(embedded: Option<&str>) -> LoginConfig {
    let Some(json) = embedded.map(str::trim).filter(|json| !json.is_empty()) else {
        tracing::debug!("no embedded configuration, using defaults");
        return LoginConfig::default();
    };

    match LoginConfig::from_json(json) {
        Ok(config) => {
            tracing::info!(reset_delay_ms = config.reset_delay_ms, "loaded page configuration");
            config
        }
        Err(e) => {
            tracing::warn!("Rejected page configuration, using defaults: {}", e);
            LoginConfig::default()
        }
    }
}

fn embedded_config() -> Option<String> {
    let document = web_sys::window()?.document()?;
    document.get_element_by_id(CONFIG_ELEMENT_ID)?.text_content()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_without_document() {
        assert_eq!(resolve(None), LoginConfig::default());
        assert_eq!(resolve(Some("  \n ")), LoginConfig::default());
    }

    #[test]
    fn test_resolve_embedded_document() {
        let config = resolve(Some(r#"{ "footer": "Chemistry Lab", "reset_delay_ms": 2000 }"#));
        assert_eq!(config.footer, "Chemistry Lab");
        assert_eq!(config.reset_delay_ms, 2000);
        assert_eq!(config.heading, "Sign In");
    }

    #[test]
    fn test_resolve_falls_back_on_invalid_document() {
        assert_eq!(resolve(Some("not json")), LoginConfig::default());
        assert_eq!(resolve(Some(r#"{ "reset_delay_ms": 0 }"#)), LoginConfig::default());
    }
}
