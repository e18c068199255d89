use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::TestError;

/// Test context owning a temporary data root.
///
/// The root contains a `dynamic` and a `static` directory laid out the way
/// the bot expects. Everything is deleted when the context is dropped, so
/// keep it alive for the duration of the test.
pub struct TestContext {
    /// Temporary directory holding `dynamic/` and `static/`.
    root: TempDir,
}

impl TestContext {
    /// Creates a new test context with an empty static directory.
    ///
    /// The dynamic directory is not created; the code under test is
    /// expected to create it.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with a fresh temporary root
    /// - `Err(TestError::Io)` - Failed to create the temporary directories
    pub fn new() -> Result<Self, TestError> {
        let root = tempfile::tempdir()?;
        std::fs::create_dir_all(root.path().join("static"))?;

        Ok(Self { root })
    }

    /// Root of the temporary data directory.
    pub fn data_dir(&self) -> PathBuf {
        self.root.path().to_path_buf()
    }

    /// Directory for data written at runtime.
    pub fn dynamic_dir(&self) -> PathBuf {
        self.root.path().join("dynamic")
    }

    /// Directory for files shipped with the bot.
    pub fn static_dir(&self) -> PathBuf {
        self.root.path().join("static")
    }

    /// Writes a file into the static directory.
    ///
    /// # Arguments
    /// - `name` - File name relative to the static directory
    /// - `contents` - File contents
    ///
    /// # Returns
    /// - `Ok(())` - File written
    /// - `Err(TestError::Io)` - Failed to write the file
    pub fn write_static(&self, name: &str, contents: &str) -> Result<(), TestError> {
        std::fs::write(self.static_dir().join(name), contents)?;

        Ok(())
    }
}
