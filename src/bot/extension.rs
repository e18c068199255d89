//! Extension loading.
//!
//! Extensions are loaded once, before the client is built. Load order is the
//! extensions' names sorted ascending, so it does not depend on how the list
//! was assembled. The first failure aborts loading and no partial cog set is
//! ever returned.

use std::collections::BTreeSet;

use crate::cog::CogSet;
use crate::error::{extension::ExtensionError, AppError};

/// A unit of plugin code that registers cogs.
pub trait Extension: Send + Sync {
    fn name(&self) -> &'static str;

    /// Registers this extension's cogs.
    fn setup(&self, cogs: &mut CogSet) -> Result<(), ExtensionError>;
}

pub struct ExtensionRegistry {
    extensions: Vec<Box<dyn Extension>>,
}

impl ExtensionRegistry {
    pub fn new(extensions: Vec<Box<dyn Extension>>) -> Self {
        Self { extensions }
    }

    /// Loads every extension in name order.
    ///
    /// # Returns
    /// - `Ok(CogSet)` - All extensions loaded
    /// - `Err(AppError::ExtensionErr)` - Duplicate extension name, duplicate
    ///   cog, or an extension's setup failed
    pub fn load(mut self) -> Result<CogSet, AppError> {
        self.extensions.sort_by_key(|extension| extension.name());

        let mut loaded = BTreeSet::new();
        let mut cogs = CogSet::default();

        for extension in &self.extensions {
            let name = extension.name();

            if !loaded.insert(name) {
                return Err(ExtensionError::Duplicate(name.to_string()).into());
            }

            extension.setup(&mut cogs)?;

            tracing::debug!("Loaded extension {}", name);
        }

        tracing::info!(
            "Loaded {} extension(s) providing {} cog(s)",
            loaded.len(),
            cogs.len()
        );

        Ok(cogs)
    }
}
