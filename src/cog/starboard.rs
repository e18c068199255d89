//! Handles the starboard.

use std::sync::Arc;

use crate::bot::extension::Extension;
use crate::cog::{Cog, CogSet};
use crate::error::extension::ExtensionError;

pub struct Starboard;

impl Cog for Starboard {
    fn name(&self) -> &'static str {
        "starboard"
    }
}

pub struct StarboardExtension;

impl Extension for StarboardExtension {
    fn name(&self) -> &'static str {
        "starboard"
    }

    fn setup(&self, cogs: &mut CogSet) -> Result<(), ExtensionError> {
        cogs.add(Arc::new(Starboard))
    }
}
