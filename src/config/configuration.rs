use crate::config::defaults::{DefaultTable, DEFAULTS};
use crate::config::provider::SectionProvider;
use crate::config::section::Section;
use crate::config::value::Value;
use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// All configuration sections, keyed by section name.
///
/// Overrides replace whole sections: a section named by an override source
/// holds exactly the options that source lists for it, and any default option
/// it does not repeat is gone.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct Configuration {
    sections: BTreeMap<String, Section>,
}

impl Configuration {
    /// Build a configuration holding exactly the sections of `table`
    #[must_use]
    pub fn from_defaults(table: &DefaultTable) -> Self {
        let mut config = Self {
            sections: BTreeMap::new(),
        };
        config.load_defaults(table);
        config
    }

    /// Bind a freshly built section for every entry in `table`
    pub fn load_defaults(&mut self, table: &DefaultTable) {
        for (section_name, options) in table {
            let mut section = Section::new();
            for (option, value) in *options {
                section.add_option(*option, value.clone());
            }
            self.sections.insert((*section_name).to_string(), section);
        }
    }

    /// Replace every section the provider names with a section built only
    /// from the provider's options.
    ///
    /// Sections the provider does not name are left alone. On error, sections
    /// already replaced stay replaced.
    pub fn load_overrides<P: SectionProvider + ?Sized>(&mut self, provider: &P) -> Result<()> {
        for section_name in provider.sections() {
            let mut section = Section::new();
            for option in provider.options(&section_name) {
                let value = provider.get(&section_name, &option)?;
                section.add_option(option, value);
            }

            tracing::debug!(
                section = %section_name,
                options = section.len(),
                "Replacing section from overrides"
            );
            self.sections.insert(section_name, section);
        }

        Ok(())
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Look up a single option value
    #[must_use]
    pub fn get(&self, section: &str, option: &str) -> Option<&Value> {
        self.section(section).and_then(|s| s.get(option))
    }

    #[must_use]
    pub fn contains_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::from_defaults(DEFAULTS)
    }
}
