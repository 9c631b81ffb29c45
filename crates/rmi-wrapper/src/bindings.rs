//! Wrapping lookup results in bulk
//!
//! The naming service collaborator resolves every bound name to a
//! [`RemoteObject`]. This module turns those pairs into wrappers, skipping
//! (or, with `fail_fast`, aborting on) entries that cannot be wrapped, and
//! optionally groups duplicates.

use tracing::{debug, warn};

use crate::duplicates;
use crate::error::{Result, WrapperError};
use crate::object::RemoteObject;
use crate::wrapper::UnicastWrapper;

/// Configuration for [`wrap_bindings`]
#[derive(Clone, Debug)]
pub struct BindingConfig {
    /// Group wrappers of the same implementation type
    pub group_duplicates: bool,
    /// Abort on the first binding that cannot be wrapped
    pub fail_fast: bool,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            group_duplicates: true,
            fail_fast: false,
        }
    }
}

/// Binding that could not be wrapped
#[derive(Clone, Debug)]
pub struct SkippedBinding {
    pub bound_name: String,
    pub error: WrapperError,
}

/// Outcome of wrapping a set of bindings
#[derive(Clone, Debug, Default)]
pub struct BindingReport {
    /// Wrapped bindings, grouped if configured
    pub wrappers: Vec<UnicastWrapper>,
    /// Bindings that failed, in input order
    pub skipped: Vec<SkippedBinding>,
}

impl BindingReport {
    /// Bound names of the top-level wrappers
    pub fn bound_names(&self) -> Vec<Option<&str>> {
        self.wrappers.iter().map(UnicastWrapper::bound_name).collect()
    }

    /// Whether any top-level wrapper has duplicates
    pub fn has_duplicates(&self) -> bool {
        duplicates::has_duplicates(&self.wrappers)
    }
}

/// Wrap every `(bound name, remote object)` pair
pub fn wrap_bindings<I, S>(bindings: I, config: &BindingConfig) -> Result<BindingReport>
where
    I: IntoIterator<Item = (S, RemoteObject)>,
    S: Into<String>,
{
    let mut report = BindingReport::default();

    for (name, object) in bindings {
        let name = name.into();
        match UnicastWrapper::new(object, Some(name.clone())) {
            Ok(wrapper) => {
                debug!(
                    "Wrapped binding {} -> {} ({}, {})",
                    name,
                    wrapper.target(),
                    wrapper.obj_id(),
                    wrapper.type_name()
                );
                report.wrappers.push(wrapper);
            }
            Err(e) if config.fail_fast => return Err(e),
            Err(e) => {
                warn!("Skipping binding {}: {}", name, e);
                report.skipped.push(SkippedBinding {
                    bound_name: name,
                    error: e,
                });
            }
        }
    }

    if config.group_duplicates {
        report.wrappers = duplicates::classify(report.wrappers);
    }

    Ok(report)
}
