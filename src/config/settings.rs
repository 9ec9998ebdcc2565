use crate::config::provider::SectionProvider;
use crate::error::{HayrackError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Settings file contents, as section -> option -> raw string.
///
/// The file is TOML: every top-level table is a section and every scalar key
/// inside it is an option. Non-string scalars are kept in their textual form.
/// An option repeated within a section is a parse error, so a file never
/// reports the same option twice.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsFile {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl SettingsFile {
    /// Read settings from `path`. A missing file yields no sections.
    pub fn read(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!("No settings file at {}", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        Self::parse(&content, path)
    }

    /// Parse settings text; `origin` names the source in error messages
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        let parse_err = |message: String| HayrackError::Parse {
            path: origin.to_path_buf(),
            message,
        };

        let table: toml::Table = content
            .parse()
            .map_err(|e: toml::de::Error| parse_err(e.message().to_string()))?;

        let mut sections = BTreeMap::new();
        for (section_name, section_value) in table {
            let toml::Value::Table(options) = section_value else {
                return Err(parse_err(format!(
                    "option '{section_name}' outside of a section"
                )));
            };

            let mut parsed = BTreeMap::new();
            for (option, value) in options {
                let text = match value {
                    toml::Value::String(s) => s,
                    toml::Value::Integer(i) => i.to_string(),
                    toml::Value::Float(f) => f.to_string(),
                    toml::Value::Boolean(b) => b.to_string(),
                    toml::Value::Datetime(d) => d.to_string(),
                    toml::Value::Array(_) | toml::Value::Table(_) => {
                        return Err(parse_err(format!(
                            "unsupported value for '{option}' in [{section_name}]"
                        )));
                    }
                };
                parsed.insert(option, text);
            }
            sections.insert(section_name, parsed);
        }

        Ok(Self { sections })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl SectionProvider for SettingsFile {
    fn sections(&self) -> Vec<String> {
        self.sections.keys().cloned().collect()
    }

    fn options(&self, section: &str) -> Vec<String> {
        self.sections
            .get(section)
            .map(|options| options.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn get(&self, section: &str, option: &str) -> Result<String> {
        self.sections
            .get(section)
            .and_then(|options| options.get(option))
            .cloned()
            .ok_or_else(|| HayrackError::Config(format!("No option '{option}' in [{section}]")))
    }
}
