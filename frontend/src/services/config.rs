use anyhow::{Context, Result};
use shared::DashboardConfig;

use super::logging::Logger;

/// Id of the optional `<script type="application/json">` block holding page settings
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Load the dashboard config from the host page.
///
/// A missing block means defaults. A malformed block is logged and also falls
/// back to defaults, the page never fails to render because of it.
pub fn load_dashboard_config() -> DashboardConfig {
    let loaded = read_config_block().and_then(|block| parse_config_block(block.as_deref()));
    match loaded {
        Ok(config) => {
            Logger::debug_with_component(
                "config",
                &format!("Using config for {}", config.user_name),
            );
            config
        }
        Err(e) => {
            Logger::warn_with_component(
                "config",
                &format!("Ignoring dashboard config: {:#}", e),
            );
            DashboardConfig::default()
        }
    }
}

/// Parse the text of the config block, if there is one
pub fn parse_config_block(block: Option<&str>) -> Result<DashboardConfig> {
    match block.map(str::trim).filter(|text| !text.is_empty()) {
        Some(json) => DashboardConfig::from_json(json)
            .with_context(|| format!("#{} is not a valid dashboard config", CONFIG_ELEMENT_ID)),
        None => Ok(DashboardConfig::default()),
    }
}

fn read_config_block() -> Result<Option<String>> {
    let window = web_sys::window().context("no global window")?;
    let document = window.document().context("window has no document")?;
    Ok(document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content()))
}
