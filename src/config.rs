use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub enable_tracing: bool,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeneratorConfig {
    /// Directory the .data files are written into.
    pub output_dir: String,
    /// Cases generated per operation file.
    pub cases_per_op: usize,
    /// Fixed RNG seed. None draws from OS entropy (fresh fixtures per run).
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
            cases_per_op: 1000,
            seed: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            log_file: "fixgen.log".to_string(),
            use_json: false,
            rotation: "never".to_string(),
            enable_tracing: true,
            generator: GeneratorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load config/<env>.yaml.
    ///
    /// A missing file falls back to defaults so a bare invocation needs no
    /// configuration at all; a malformed file fails the run.
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        if !Path::new(&config_path).exists() {
            return Self::default();
        }
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_bare_invocation_surface() {
        let config = AppConfig::default();
        assert_eq!(config.generator.output_dir, ".");
        assert_eq!(config.generator.cases_per_op, 1000);
        assert_eq!(config.generator.seed, None);
    }

    #[test]
    fn test_generator_section_is_optional() {
        let yaml = r#"
log_level: debug
log_dir: logs
log_file: fixgen.log
use_json: false
rotation: never
enable_tracing: true
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.generator.cases_per_op, 1000);
    }

    #[test]
    fn test_full_config_parses() {
        let yaml = r#"
log_level: info
log_dir: logs
log_file: fixgen.log
use_json: true
rotation: daily
enable_tracing: false
generator:
  output_dir: fixtures
  cases_per_op: 50
  seed: 12345
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.generator.output_dir, "fixtures");
        assert_eq!(config.generator.cases_per_op, 50);
        assert_eq!(config.generator.seed, Some(12345));
    }
}
