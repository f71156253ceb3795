//! Binding of group parameters to a routine set.

use std::sync::Arc;

use digest::Digest;

use crate::params::SrpParameters;
use crate::routines::{DefaultRoutines, SrpRoutines};

/// Shared immutable configuration for a deployment: the agreed parameters
/// plus the routine set every session computes with.
///
/// Build one instance and clone it into each session; cloning only bumps a
/// reference count.
pub struct SrpConfig<D: Digest + 'static> {
    routines: Arc<dyn SrpRoutines<D>>,
}

impl<D: Digest + 'static> SrpConfig<D> {
    /// Configuration computing with [`DefaultRoutines`].
    pub fn new(parameters: SrpParameters<D>) -> Self {
        Self::with_routines(parameters, DefaultRoutines::new)
    }

    /// Configuration computing with a caller-supplied routine set.
    ///
    /// The factory maps the parameters to any [`SrpRoutines`] implementor.
    /// Interoperability tests use this seam to pin the normally-random
    /// ephemeral values; production code has no reason to.
    pub fn with_routines<R, F>(parameters: SrpParameters<D>, factory: F) -> Self
    where
        R: SrpRoutines<D> + 'static,
        F: FnOnce(SrpParameters<D>) -> R,
    {
        Self {
            routines: Arc::new(factory(parameters)),
        }
    }

    /// The parameters the routine set is bound to.
    pub fn parameters(&self) -> &SrpParameters<D> {
        self.routines.parameters()
    }

    /// The routine set.
    pub fn routines(&self) -> &dyn SrpRoutines<D> {
        self.routines.as_ref()
    }
}

impl<D: Digest + 'static> Clone for SrpConfig<D> {
    fn clone(&self) -> Self {
        Self {
            routines: Arc::clone(&self.routines),
        }
    }
}
