// src/predictions/navigation.rs
//! Detail page targets and the navigators that open them.

use bevy::prelude::*;
use std::fmt;
use std::path::{Path, PathBuf};

use super::errors::PredictionError;
use crate::settings::AppSettings;

/// Query parameter the detail page reads the identifier from.
pub const PATIENT_ID_PARAM: &str = "patientId";

/// Where a click on an identifier cell leads: `<page>?patientId=<id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPageTarget {
    page: String,
    patient_id: String,
}

impl DetailPageTarget {
    /// Builds a target from raw cell text. The text is trimmed; an empty
    /// result means there is nothing to navigate to.
    pub fn for_patient(page: &str, raw_cell_text: &str) -> Result<Self, PredictionError> {
        let patient_id = raw_cell_text.trim();
        if patient_id.is_empty() {
            return Err(PredictionError::EmptyPatientId);
        }
        Ok(Self {
            page: page.to_string(),
            patient_id: patient_id.to_string(),
        })
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    pub fn query(&self) -> String {
        format!("{}={}", PATIENT_ID_PARAM, self.patient_id)
    }

    /// Relative link, e.g. `patient-details.html?patientId=42`.
    pub fn href(&self) -> String {
        format!("{}?{}", self.page, self.query())
    }
}

impl fmt::Display for DetailPageTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// Opens a detail page target somewhere the user can see it.
pub trait DetailNavigator: Send + Sync + 'static {
    fn navigate(&self, target: &DetailPageTarget) -> Result<(), PredictionError>;
}

/// The navigator used by the open-details handler.
#[derive(Resource)]
pub struct DetailNavigatorHandle(Box<dyn DetailNavigator>);

impl DetailNavigatorHandle {
    pub fn new(navigator: impl DetailNavigator) -> Self {
        Self(Box::new(navigator))
    }

    pub fn navigate(&self, target: &DetailPageTarget) -> Result<(), PredictionError> {
        self.0.navigate(target)
    }
}

/// Opens targets with the OS default handler (usually the web browser).
#[derive(Debug, Clone, Default)]
pub struct SystemBrowserNavigator {
    site_root: Option<String>,
}

impl SystemBrowserNavigator {
    pub fn new(site_root: Option<String>) -> Self {
        Self { site_root }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.site_root.clone())
    }

    /// Resolves a target to an absolute location.
    ///
    /// A `site_root` containing `://` is a URL prefix. Anything else names a
    /// directory holding the page, falling back to the working directory.
    pub fn resolve(&self, target: &DetailPageTarget) -> String {
        match self.site_root.as_deref() {
            Some(root) if root.contains("://") => {
                format!("{}/{}", root.trim_end_matches('/'), target.href())
            }
            Some(dir) if Path::new(dir).is_absolute() => file_location(Path::new(dir), target),
            Some(dir) => file_location(&working_dir().join(dir), target),
            None => file_location(&working_dir(), target),
        }
    }
}

fn working_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn file_location(dir: &Path, target: &DetailPageTarget) -> String {
    let page_path = dir.join(target.page());
    let path_text = page_path.to_string_lossy().replace('\\', "/");
    format!(
        "file:///{}?{}",
        path_text.trim_start_matches('/'),
        target.query()
    )
}

impl DetailNavigator for SystemBrowserNavigator {
    fn navigate(&self, target: &DetailPageTarget) -> Result<(), PredictionError> {
        let location = self.resolve(target);
        info!("Opening patient details at '{}'", location);
        open::that(&location).map_err(|e| PredictionError::LaunchFailed {
            location: location.clone(),
            reason: e.to_string(),
        })
    }
}
