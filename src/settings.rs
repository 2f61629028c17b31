use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub questions: Questions,
    pub report: Report,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Questions {
    pub bank_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub show_tallies: bool,
    pub show_summaries: bool,
    pub pretty_json: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            questions: Questions {
                bank_path: "questions.default.ron".to_string(),
            },
            report: Report {
                show_tallies: true,
                show_summaries: true,
                pretty_json: true,
            },
        }
    }
}

impl Settings {
    pub fn load() -> &'static Settings {
        SETTINGS.get_or_init(Self::load_from_files)
    }

    fn load_from_files() -> Settings {
        let default_path = Path::new("settings.default.ron");
        let override_path = Path::new("settings.ron");

        let mut settings = if default_path.exists() {
            fs::read_to_string(default_path)
                .ok()
                .and_then(|content| ron::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Settings::default()
        };

        if override_path.exists() {
            if let Ok(content) = fs::read_to_string(override_path) {
                if let Ok(overrides) = ron::from_str::<Settings>(&content) {
                    settings = overrides;
                }
            }
        }

        settings
    }

    pub fn bank_path(&self) -> String {
        std::env::var("QUESTION_BANK").unwrap_or_else(|_| self.questions.bank_path.clone())
    }
}

pub fn settings() -> &'static Settings {
    Settings::load()
}
