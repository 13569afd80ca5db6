use gloo::console;

/// Component-tagged logging to the browser console.
///
/// Messages read `[component] message` so output from the hooks and the two
/// canvas charts can be told apart in devtools.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        console::debug!(Self::line(component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        console::info!(Self::line(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(Self::line(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(Self::line(component, message));
    }

    fn line(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_line_is_tagged_with_component() {
        assert_eq!(
            Logger::line("balance-trend", "chart drawn"),
            "[balance-trend] chart drawn"
        );
    }
}
