pub mod io;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DETAIL_PAGE: &str = "patient-details.html";

#[derive(Resource, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AppSettings {
    /// Page that receives `?patientId=<id>`.
    pub detail_page: String,
    /// URL prefix or directory the detail page lives under.
    pub site_root: Option<String>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            detail_page: DEFAULT_DETAIL_PAGE.to_string(),
            site_root: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, AppSettings::default());

        let settings: AppSettings =
            serde_json::from_str(r#"{"site_root":"http://localhost:8000"}"#).unwrap();
        assert_eq!(settings.detail_page, DEFAULT_DETAIL_PAGE);
        assert_eq!(settings.site_root.as_deref(), Some("http://localhost:8000"));
    }
}
