use crate::shared::Result;
use std::path::Path;

/// TemplateReader port for loading the report template document
pub trait TemplateReader {
    /// Reads the template text
    ///
    /// # Arguments
    /// * `path` - Location of the template file
    ///
    /// # Errors
    /// Returns an error if the file is missing, unsafe to read or too large
    fn read_template(&self, path: &Path) -> Result<String>;
}
