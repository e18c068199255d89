//! Role based operations.
//!
//! Reaction roles and opt-in commands are not enabled; the cog currently
//! only takes part in readiness reporting.

use std::sync::Arc;

use crate::bot::extension::Extension;
use crate::cog::{Cog, CogSet};
use crate::error::extension::ExtensionError;

pub struct Role;

impl Cog for Role {
    fn name(&self) -> &'static str {
        "role"
    }
}

pub struct RoleExtension;

impl Extension for RoleExtension {
    fn name(&self) -> &'static str {
        "role"
    }

    fn setup(&self, cogs: &mut CogSet) -> Result<(), ExtensionError> {
        cogs.add(Arc::new(Role))
    }
}
