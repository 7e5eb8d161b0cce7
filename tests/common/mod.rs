use std::collections::HashMap;

use claynova::config::Settings;

#[allow(dead_code)]
pub const ALL_VARS: [&str; 3] = ["PROJECT_NAME", "API_V1_STR", "BACKEND_CORS_ORIGINS"];

/// Build settings from a fixed set of variables without touching the process
/// environment.
#[allow(dead_code)]
pub fn settings_with(vars: &[(&str, &str)]) -> Settings {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_vars(|name| vars.get(name).cloned())
}
