//! Conversion registry: stores conversions and finds paths between codifications.

use std::borrow::Cow;
use std::sync::{Arc, LazyLock};

use super::conversions::default_conversions;
use super::traits::{ColourConversion, ComposedConversion, IdentityConversion};
use crate::codification::{Codification, CodificationKind, ColourCode};
use crate::error::{ColourError, Result};

static SHARED_DEFAULT: LazyLock<Arc<ConversionRegistry>> =
    LazyLock::new(|| Arc::new(ConversionRegistry::new()));

/// Codifications already used as a source on the current search path.
#[derive(Debug, Clone, Copy, Default)]
struct KindSet(u8);

impl KindSet {
    fn bit(kind: CodificationKind) -> u8 {
        1 << (kind as u8)
    }

    fn contains(self, kind: CodificationKind) -> bool {
        self.0 & Self::bit(kind) != 0
    }

    fn with(self, kind: CodificationKind) -> Self {
        Self(self.0 | Self::bit(kind))
    }
}

/// Ordered collection of conversions.
///
/// Lookups scan the conversions in registration order, so when several paths
/// exist the one built from the earliest registered conversions wins. The
/// list is never modified after construction, so a registry can be shared
/// freely between threads.
pub struct ConversionRegistry {
    conversions: Vec<Arc<dyn ColourConversion>>,
}

impl ConversionRegistry {
    /// Create a registry holding the built-in conversions: Hex, CMYK, HSL and
    /// HSV, each to and from RGB.
    pub fn new() -> Self {
        Self {
            conversions: default_conversions(),
        }
    }

    /// Create a registry from caller-supplied conversions, kept in the given
    /// order.
    ///
    /// The registry owns its own list; later changes to the caller's
    /// collection do not affect it. Fails with
    /// [`ColourError::EmptyConversions`] if no conversion is given.
    pub fn from_conversions<I>(conversions: I) -> Result<Self>
    where
        I: IntoIterator<Item = Arc<dyn ColourConversion>>,
    {
        let conversions: Vec<_> = conversions.into_iter().collect();
        if conversions.is_empty() {
            return Err(ColourError::EmptyConversions);
        }

        log::debug!("Built conversion registry with {} conversions", conversions.len());
        Ok(Self { conversions })
    }

    /// Process-wide registry with the built-in conversions.
    pub fn shared_default() -> Arc<Self> {
        Arc::clone(&SHARED_DEFAULT)
    }

    /// Registered conversions, in registration order.
    pub fn available_conversions(&self) -> impl Iterator<Item = &Arc<dyn ColourConversion>> {
        self.conversions.iter()
    }

    /// Number of registered conversions.
    pub fn len(&self) -> usize {
        self.conversions.len()
    }

    /// Always false: a registry holds at least one conversion.
    pub fn is_empty(&self) -> bool {
        self.conversions.is_empty()
    }

    /// Convert `code` to the `target` codification.
    ///
    /// A code already written in `target` is returned as is, borrowed,
    /// without consulting the registered conversions.
    pub fn convert<'a>(
        &self,
        code: &'a ColourCode,
        target: CodificationKind,
    ) -> Result<Cow<'a, ColourCode>> {
        if code.kind() == target {
            return Ok(Cow::Borrowed(code));
        }

        let conversion = self.resolve(code.kind(), target)?;
        let converted = conversion.convert(code)?;
        if converted.kind() != target {
            return Err(ColourError::UnexpectedOutput {
                conversion: conversion.id().to_string(),
                expected: target,
                found: converted.kind(),
            });
        }

        Ok(Cow::Owned(converted))
    }

    /// Convert `code` to the codification `T`.
    pub fn convert_to<T: Codification>(&self, code: &ColourCode) -> Result<T> {
        let converted = self.convert(code, T::KIND)?.into_owned();
        let found = converted.kind();
        T::from_code(converted).ok_or(ColourError::UnexpectedOutput {
            conversion: "registry".to_string(),
            expected: T::KIND,
            found,
        })
    }

    /// Convert an optional code to an optional target.
    ///
    /// No code converts to no code; a code without a target fails with
    /// [`ColourError::MissingTarget`].
    pub fn convert_optional<'a>(
        &self,
        code: Option<&'a ColourCode>,
        target: Option<CodificationKind>,
    ) -> Result<Option<Cow<'a, ColourCode>>> {
        let Some(code) = code else {
            return Ok(None);
        };
        let target = target.ok_or(ColourError::MissingTarget)?;

        self.convert(code, target).map(Some)
    }

    /// Find the conversion from `from` to `to` without applying it.
    ///
    /// A registered conversion linking both kinds directly is preferred.
    /// Otherwise the registered conversions are chained, depth first in
    /// registration order, and the first chain reaching `to` is returned.
    /// Asking for `from == to` yields an [`IdentityConversion`].
    pub fn resolve(
        &self,
        from: CodificationKind,
        to: CodificationKind,
    ) -> Result<Arc<dyn ColourConversion>> {
        if from == to {
            return Ok(Arc::new(IdentityConversion::new(from)));
        }

        if let Some(direct) = self.search_direct(from, to) {
            log::trace!("Direct conversion {} -> {}: {}", from, to, direct.id());
            return Ok(Arc::clone(direct));
        }

        match self.search_deep(from, to, KindSet::default())? {
            Some(composed) => {
                log::debug!("Composed conversion {} -> {}: {}", from, to, composed.id());
                Ok(composed)
            }
            None => {
                log::debug!("No conversion path from {} to {}", from, to);
                Err(ColourError::Unreachable { from, to })
            }
        }
    }

    fn search_direct(
        &self,
        from: CodificationKind,
        to: CodificationKind,
    ) -> Option<&Arc<dyn ColourConversion>> {
        self.conversions
            .iter()
            .find(|c| c.input() == from && c.output() == to)
    }

    fn search_deep(
        &self,
        from: CodificationKind,
        to: CodificationKind,
        visited: KindSet,
    ) -> Result<Option<Arc<dyn ColourConversion>>> {
        for conversion in &self.conversions {
            if visited.contains(conversion.output()) || conversion.input() != from {
                continue;
            }

            if conversion.output() == to {
                return Ok(Some(Arc::clone(conversion)));
            }

            let rest = self.search_deep(conversion.output(), to, visited.with(from))?;
            if let Some(rest) = rest {
                let chain = ComposedConversion::new(Arc::clone(conversion), rest)?;
                return Ok(Some(Arc::new(chain)));
            }
        }

        Ok(None)
    }
}

impl Default for ConversionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConversionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.conversions.iter()).finish()
    }
}
