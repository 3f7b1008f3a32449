//! Intent -> transformation lookup

use super::intent::Intent;
use super::transformation::{Revision, Transformation};
use super::transforms::{
    AddScriptureTransformation, GenericRevisionTransformation, LengthenTransformation,
    ShortenTransformation, SimplifyTransformation,
};
use crate::document::Document;
use std::collections::HashMap;
use std::sync::Arc;

/// Maps each [`Intent`] to the [`Transformation`] that carries it out.
///
/// The default registry covers every intent. Entries can be replaced with
/// [`TransformationRegistry::register`]; an intent left without an entry
/// falls back to the generic revision, so lookups never fail.
#[derive(Clone)]
pub struct TransformationRegistry {
    transformations: HashMap<Intent, Arc<dyn Transformation>>,
    fallback: Arc<dyn Transformation>,
}

impl Default for TransformationRegistry {
    fn default() -> Self {
        Self::empty()
            .register(Intent::ShortenRequest, ShortenTransformation)
            .register(Intent::LengthenRequest, LengthenTransformation)
            .register(Intent::AddScriptureRequest, AddScriptureTransformation)
            .register(Intent::SimplifyLanguageRequest, SimplifyTransformation::new())
            .register(Intent::GenericRevisionRequest, GenericRevisionTransformation)
    }
}

impl std::fmt::Debug for TransformationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut intents: Vec<_> = self.transformations.keys().map(Intent::as_str).collect();
        intents.sort_unstable();
        f.debug_struct("TransformationRegistry")
            .field("intents", &intents)
            .finish()
    }
}

impl TransformationRegistry {
    /// A registry with no entries (everything uses the generic fallback)
    pub fn empty() -> Self {
        Self {
            transformations: HashMap::new(),
            fallback: Arc::new(GenericRevisionTransformation),
        }
    }

    /// Register (or replace) the transformation for an intent
    pub fn register(mut self, intent: Intent, transformation: impl Transformation + 'static) -> Self {
        self.transformations.insert(intent, Arc::new(transformation));
        self
    }

    pub fn contains(&self, intent: Intent) -> bool {
        self.transformations.contains_key(&intent)
    }

    /// The transformation for `intent`, or the generic fallback
    pub fn get(&self, intent: Intent) -> &dyn Transformation {
        match self.transformations.get(&intent) {
            Some(transformation) => transformation.as_ref(),
            None => self.fallback.as_ref(),
        }
    }

    pub fn apply(&self, intent: Intent, document: &Document, instruction: &str) -> Revision {
        self.get(intent).apply(document, instruction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::compose;
    use crate::preferences::entities::PreferenceSet;

    struct Marker;

    impl Transformation for Marker {
        fn apply(&self, document: &Document, _instruction: &str) -> Revision {
            Revision::unchanged(document, "marker")
        }
    }

    #[test]
    fn test_default_covers_every_intent() {
        let registry = TransformationRegistry::default();
        for intent in Intent::ALL {
            assert!(registry.contains(intent), "missing {}", intent);
        }
    }

    #[test]
    fn test_register_replaces_entry() {
        let doc = compose(&PreferenceSet::new("Faith")).unwrap();
        let registry = TransformationRegistry::default().register(Intent::ShortenRequest, Marker);
        let revision = registry.apply(Intent::ShortenRequest, &doc, "shorter");
        assert_eq!(revision.response, "marker");
    }

    #[test]
    fn test_missing_entry_uses_generic_fallback() {
        let doc = compose(&PreferenceSet::new("Faith")).unwrap();
        let registry = TransformationRegistry::empty();
        assert!(!registry.contains(Intent::LengthenRequest));
        let revision = registry.apply(Intent::LengthenRequest, &doc, "longer");
        assert!(revision.response.contains("\"longer\""));
    }

    #[test]
    fn test_debug_lists_intents() {
        let debug = format!("{:?}", TransformationRegistry::default());
        assert!(debug.contains("add_scripture"));
        assert!(debug.contains("shorten"));
    }
}
