use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub coaching: CoachingSettings,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    #[serde(default)]
    pub validation: ValidationSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CoachingSettings {
    #[serde(default = "default_true")]
    pub include_coaching: bool,
    #[serde(default = "default_true")]
    pub include_mini_plan: bool,
}

impl Default for CoachingSettings {
    fn default() -> Self {
        Self {
            include_coaching: true,
            include_mini_plan: true,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Run the analysis collaborator even when `--ai` is not passed.
    #[serde(default)]
    pub ai_mode: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationSettings {
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: f64,
}

impl Default for ValidationSettings {
    fn default() -> Self {
        Self {
            pass_threshold: default_pass_threshold(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Emit log events as JSON lines on stderr.
    #[serde(default)]
    pub json: bool,
}

fn default_true() -> bool {
    true
}

fn default_pass_threshold() -> f64 {
    7.0
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::OpenOptions;
            use std::io::Write;
            use std::os::unix::fs::OpenOptionsExt;

            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true).mode(0o600);
            let mut file = options.open(&path)?;
            file.write_all(contents.as_bytes())?;
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    /// Apply a `section.key` assignment from the command line.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "coaching.include_coaching" => self.coaching.include_coaching = value.parse()?,
            "coaching.include_mini_plan" => self.coaching.include_mini_plan = value.parse()?,
            "analysis.ai_mode" => self.analysis.ai_mode = value.parse()?,
            "validation.pass_threshold" => {
                let threshold: f64 = value.parse()?;
                if !(0.0..=10.0).contains(&threshold) {
                    anyhow::bail!("validation.pass_threshold must be between 0 and 10");
                }
                self.validation.pass_threshold = threshold;
            }
            "logging.json" => self.logging.json = value.parse()?,
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir() -> PathBuf {
        if let Ok(home) = std::env::var("TDEECALC_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(".tdeecalc")
    }

    pub fn path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }
}
