//! Registry of named component factories — the default [`ComponentLoader`].
//!
//! Known domains are linked in statically: each adapter contributes a
//! factory per domain it implements, and the resolver asks the registry to
//! build a domain's component the first time it is needed.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::ports::{Component, ComponentLoadError, ComponentLoader};

type Factory = Box<dyn Fn() -> Result<Arc<dyn Component>, ComponentLoadError> + Send + Sync>;

/// [`ComponentLoader`] that builds components from registered factories.
#[derive(Default)]
pub struct ComponentRegistry {
    factories: BTreeMap<String, Factory>,
}

impl ComponentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory for `domain`, replacing any previous one.
    #[must_use]
    pub fn with_factory<F>(mut self, domain: impl Into<String>, factory: F) -> Self
    where
        F: Fn() -> Result<Arc<dyn Component>, ComponentLoadError> + Send + Sync + 'static,
    {
        self.factories.insert(domain.into(), Box::new(factory));
        self
    }

    /// Register an already-built component under its own domain.
    #[must_use]
    pub fn with_component(self, component: Arc<dyn Component>) -> Self {
        let domain = component.domain().to_string();
        self.with_factory(domain, move || Ok(Arc::clone(&component)))
    }

    /// Domains that have a factory, in lexical order.
    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, domain: &str) -> bool {
        self.factories.contains_key(domain)
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("domains", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ComponentLoader for ComponentRegistry {
    fn load(&self, domain: &str) -> Result<Arc<dyn Component>, ComponentLoadError> {
        let factory = self
            .factories
            .get(domain)
            .ok_or_else(|| ComponentLoadError::Unknown(domain.to_string()))?;
        factory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Component for Named {
        fn domain(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn should_build_component_from_factory() {
        let registry =
            ComponentRegistry::new().with_factory("light", || Ok(Arc::new(Named("light")) as _));

        let component = registry.load("light").unwrap();
        assert_eq!(component.domain(), "light");
    }

    #[test]
    fn should_report_unknown_domain() {
        let registry = ComponentRegistry::new();
        let result = registry.load("garage");
        assert!(matches!(result, Err(ComponentLoadError::Unknown(domain)) if domain == "garage"));
    }

    #[test]
    fn should_forward_factory_failure() {
        let registry = ComponentRegistry::new().with_factory("broken", || {
            Err(ComponentLoadError::Failed {
                domain: "broken".to_string(),
                source: "driver missing".into(),
            })
        });

        assert!(matches!(
            registry.load("broken"),
            Err(ComponentLoadError::Failed { .. })
        ));
    }

    #[test]
    fn should_register_prebuilt_component_under_its_domain() {
        let registry = ComponentRegistry::new().with_component(Arc::new(Named("switch")));

        assert!(registry.contains("switch"));
        assert_eq!(registry.domains().collect::<Vec<_>>(), vec!["switch"]);
        assert_eq!(registry.load("switch").unwrap().domain(), "switch");
    }
}
