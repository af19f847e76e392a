// src/cli/mod.rs
// Command line parsing and headless helpers

use clap::{Parser, Subcommand};

use crate::predictions::navigation::{DetailPageTarget, SystemBrowserNavigator};
use crate::settings::{io as settings_io, AppSettings};

#[derive(Parser, Debug)]
#[command(name = "patient_predictions")]
#[command(about = "Patient prediction table editor", long_about = None)]
pub struct Cli {
    /// Detail page that receives `?patientId=<id>` (overrides saved settings)
    #[arg(long)]
    pub detail_page: Option<String>,

    /// URL prefix or directory the detail page lives under
    #[arg(long)]
    pub site_root: Option<String>,

    /// Persist the effective settings to the config file
    #[arg(long)]
    pub save_settings: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the detail page location for a patient id and exit
    DetailLink {
        /// Patient identifier; surrounding whitespace is ignored
        patient_id: String,
    },
}

impl Cli {
    /// Applies command line overrides on top of `base`.
    pub fn apply_overrides(&self, mut base: AppSettings) -> AppSettings {
        if let Some(page) = &self.detail_page {
            base.detail_page = page.clone();
        }
        if let Some(root) = &self.site_root {
            base.site_root = Some(root.clone());
        }
        base
    }
}

/// Saved settings with command line overrides applied.
pub fn resolve_settings(cli: &Cli) -> AppSettings {
    let saved = match settings_io::load_settings_from_file::<AppSettings>() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Could not load saved settings ({}); using defaults.", e);
            AppSettings::default()
        }
    };
    let settings = cli.apply_overrides(saved);
    if cli.save_settings {
        match settings_io::save_settings_to_file(&settings) {
            Ok(()) => println!("Settings saved."),
            Err(e) => eprintln!("Failed to save settings: {}", e),
        }
    }
    settings
}

/// Runs a headless subcommand and returns the process exit code.
pub fn run_command(command: &Commands, settings: &AppSettings) -> i32 {
    match command {
        Commands::DetailLink { patient_id } => {
            match detail_link(patient_id, settings) {
                Ok(location) => {
                    println!("{}", location);
                    0
                }
                Err(e) => {
                    eprintln!("{}", e);
                    2
                }
            }
        }
    }
}

fn detail_link(
    patient_id: &str,
    settings: &AppSettings,
) -> Result<String, crate::predictions::PredictionError> {
    let target = DetailPageTarget::for_patient(&settings.detail_page, patient_id)?;
    Ok(SystemBrowserNavigator::from_settings(settings).resolve(&target))
}
