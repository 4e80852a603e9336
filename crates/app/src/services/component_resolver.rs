//! Component resolver — loads each domain's component at most once.
//!
//! The outcome of the first load attempt for a domain is cached for the
//! lifetime of the resolver, including failures: a domain without a
//! component is remembered as [`ComponentHandle::Absent`] and never loaded
//! again.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::ports::{Component, ComponentLoader};

/// Cached outcome of resolving a domain.
#[derive(Clone)]
pub enum ComponentHandle {
    Loaded(Arc<dyn Component>),
    /// The domain has no component.
    Absent,
}

impl ComponentHandle {
    #[must_use]
    pub fn component(&self) -> Option<&Arc<dyn Component>> {
        match self {
            Self::Loaded(component) => Some(component),
            Self::Absent => None,
        }
    }

    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl std::fmt::Debug for ComponentHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loaded(component) => f.debug_tuple("Loaded").field(&component.domain()).finish(),
            Self::Absent => f.write_str("Absent"),
        }
    }
}

type Slot = Arc<OnceLock<ComponentHandle>>;

/// Write-once cache from domain to [`ComponentHandle`] in front of a
/// [`ComponentLoader`].
///
/// Reads of an already resolved domain only take the shared lock. Each
/// domain has its own once-cell, so concurrent callers resolving the same
/// new domain wait for a single load while other domains proceed.
pub struct ComponentResolver<L> {
    loader: L,
    slots: RwLock<HashMap<String, Slot>>,
}

impl<L: ComponentLoader> ComponentResolver<L> {
    /// Create an empty resolver backed by `loader`.
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Return the handle for `domain`, loading it on first use.
    pub fn resolve(&self, domain: &str) -> ComponentHandle {
        let cached = self
            .slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(domain)
            .cloned();
        let slot = cached.unwrap_or_else(|| {
            let mut slots = self.slots.write().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(domain.to_string()).or_default())
        });
        slot.get_or_init(|| self.load(domain)).clone()
    }

    /// Whether a load attempt for `domain` has completed.
    #[must_use]
    pub fn is_resolved(&self, domain: &str) -> bool {
        self.slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(domain)
            .is_some_and(|slot| slot.get().is_some())
    }

    /// Domains with a completed load attempt, sorted.
    #[must_use]
    pub fn resolved_domains(&self) -> Vec<String> {
        let mut domains: Vec<String> = self
            .slots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(_, slot)| slot.get().is_some())
            .map(|(domain, _)| domain.clone())
            .collect();
        domains.sort();
        domains
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    fn load(&self, domain: &str) -> ComponentHandle {
        match self.loader.load(domain) {
            Ok(component) => {
                tracing::info!(domain, "component loaded");
                ComponentHandle::Loaded(component)
            }
            Err(err) => {
                tracing::debug!(domain, error = %err, "no component for domain");
                ComponentHandle::Absent
            }
        }
    }
}
