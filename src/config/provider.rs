use crate::error::Result;

/// Source of override values, read section by section.
///
/// Values are handed over as strings; the configuration stores them without
/// interpreting them.
pub trait SectionProvider {
    /// Names of the sections present in the source
    fn sections(&self) -> Vec<String>;

    /// Names of the options present in `section`
    fn options(&self, section: &str) -> Vec<String>;

    /// Value of `option` in `section`
    fn get(&self, section: &str, option: &str) -> Result<String>;
}
