use crate::{context::TestContext, error::TestError};

/// File name the database looks for in the static directory.
const BUILD_SCRIPT: &str = "build.sql";

/// Builder for creating test contexts with customizable data directories.
///
/// Provides a fluent interface for configuring test environments backed by
/// temporary directories. Add static files, then call `build()` to create
/// the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_build_script("CREATE TABLE example (id INTEGER PRIMARY KEY);")
///     .build()?;
/// ```
pub struct TestBuilder {
    /// Files to write into the static directory, as `(name, contents)`.
    ///
    /// Written in the order they were added during `build()`.
    static_files: Vec<(String, String)>,
}

impl TestBuilder {
    /// Creates a new test builder with no static files configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with an empty static directory
    pub fn new() -> Self {
        Self {
            static_files: Vec::new(),
        }
    }

    /// Adds a database build script to the static directory.
    ///
    /// The database runs this script every time it connects.
    ///
    /// # Arguments
    /// - `sql` - SQL statements to run on connect
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_build_script(self, sql: &str) -> Self {
        self.with_static_file(BUILD_SCRIPT, sql)
    }

    /// Adds an arbitrary file to the static directory.
    ///
    /// # Arguments
    /// - `name` - File name relative to the static directory
    /// - `contents` - File contents
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_static_file(mut self, name: &str, contents: &str) -> Self {
        self.static_files
            .push((name.to_string(), contents.to_string()));
        self
    }

    /// Builds the test context and writes the configured static files.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with its static directory populated
    /// - `Err(TestError::Io)` - Failed to create directories or write files
    pub fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new()?;

        for (name, contents) in &self.static_files {
            context.write_static(name, contents)?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_build_script_into_static_dir() {
        let test = TestBuilder::new()
            .with_build_script("SELECT 1;")
            .build()
            .unwrap();

        let script = std::fs::read_to_string(test.static_dir().join(BUILD_SCRIPT)).unwrap();

        assert_eq!(script, "SELECT 1;");
        assert!(!test.dynamic_dir().exists());
    }

    #[test]
    fn dynamic_and_static_are_siblings() {
        let test = TestBuilder::new().build().unwrap();

        assert_eq!(test.dynamic_dir().parent(), test.static_dir().parent());
        assert_eq!(test.static_dir().parent(), Some(test.data_dir().as_path()));
    }
}
