//! Pipeline driver, ordering policy and extension registry

use std::collections::BTreeSet;
use std::sync::Arc;

use super::mergers::{
    AnimationsMerger, CustomParamsMerger, LightsMerger, MaterialsMerger, MeshesMerger, NodesMerger,
    PhysicsMerger, RelationsMerger, SkeletonsMerger,
};
use super::{MergeError, Merger, ResolutionContext};
use crate::assets::AssetStore;
use crate::core::config::MergeConfig;
use crate::document::Document;
use crate::scene::Scene;

/// Names of the optional document sections a pipeline understands
///
/// Configured once when the pipeline is built. A document listing a section
/// in `requires` that is not registered is rejected before any merger runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionRegistry {
    names: BTreeSet<String>,
}

impl ExtensionRegistry {
    /// Custom parameter lists
    pub const CUSTOM_PARAMS: &'static str = "custom_params";
    /// Keyframed animations
    pub const ANIMATIONS_KF: &'static str = "animations_kf";

    /// Registry with the built-in sections
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(Self::CUSTOM_PARAMS);
        registry.register(Self::ANIMATIONS_KF);
        registry
    }

    /// Registry without any section
    pub fn empty() -> Self {
        Self { names: BTreeSet::new() }
    }

    /// Register a section, returns false if it already was
    pub fn register(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Whether a section is registered
    pub fn is_registered(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Registered section names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Fail on the first required section that is not registered
    pub fn check(&self, doc: &Document) -> Result<(), MergeError> {
        match doc.requires.iter().find(|name| !self.is_registered(name)) {
            Some(name) => Err(MergeError::UnregisteredExtension(name.clone())),
            None => Ok(()),
        }
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordering policy of the merger list
///
/// The built-in category mergers come first, then any extra mergers in
/// insertion order. The relations merger is held apart and always appended
/// last: it only links objects every other stage has registered.
pub struct MergerOrder {
    materials: Box<dyn Merger>,
    extra: Vec<Box<dyn Merger>>,
    relations: Box<dyn Merger>,
}

impl MergerOrder {
    /// Create the policy around the materials and relations stages
    pub fn new(materials: Box<dyn Merger>, relations: Box<dyn Merger>) -> Self {
        Self { materials, extra: Vec::new(), relations }
    }

    /// Add a merger that runs after the built-in ones and before relations
    pub fn push(&mut self, merger: Box<dyn Merger>) {
        self.extra.push(merger);
    }

    /// The final ordered list
    pub fn into_sequence(self) -> Vec<Box<dyn Merger>> {
        let mut sequence: Vec<Box<dyn Merger>> = vec![
            Box::new(NodesMerger),
            Box::new(MeshesMerger),
            self.materials,
            Box::new(LightsMerger),
            Box::new(SkeletonsMerger),
            Box::new(AnimationsMerger),
            Box::new(CustomParamsMerger),
            Box::new(PhysicsMerger),
        ];
        sequence.extend(self.extra);
        sequence.push(self.relations);
        sequence
    }
}

/// Builder for a [`Pipeline`]
pub struct PipelineBuilder {
    store: Arc<dyn AssetStore>,
    config: MergeConfig,
    materials: Option<MaterialsMerger>,
    extra: Vec<Box<dyn Merger>>,
    extensions: ExtensionRegistry,
}

impl PipelineBuilder {
    /// Start from the default stages
    pub fn new(store: Arc<dyn AssetStore>, config: &MergeConfig) -> Self {
        Self {
            store,
            config: config.clone(),
            materials: None,
            extra: Vec::new(),
            extensions: ExtensionRegistry::new(),
        }
    }

    /// Replace the materials stage (for instance one built with custom defaults)
    pub fn materials(mut self, materials: MaterialsMerger) -> Self {
        self.materials = Some(materials);
        self
    }

    /// Add a stage; it runs after the built-in ones and before relations
    pub fn merger(mut self, merger: impl Merger + 'static) -> Self {
        self.extra.push(Box::new(merger));
        self
    }

    /// Register an extra document section
    pub fn extension(mut self, name: impl Into<String>) -> Self {
        self.extensions.register(name);
        self
    }

    /// Build the pipeline
    pub fn build(self) -> Pipeline {
        let materials = match self.materials {
            Some(materials) => materials,
            None => MaterialsMerger::new(Arc::clone(&self.store), &self.config),
        };
        let relations = RelationsMerger::new(materials.defaults());

        let mut order = MergerOrder::new(Box::new(materials), Box::new(relations));
        for merger in self.extra {
            order.push(merger);
        }

        Pipeline {
            mergers: order.into_sequence(),
            extensions: self.extensions,
        }
    }
}

/// Ordered set of mergers applied to a document
///
/// Holds only immutable configuration and shared read-only defaults, so one
/// pipeline can convert any number of documents, each with its own scene and
/// context.
pub struct Pipeline {
    mergers: Vec<Box<dyn Merger>>,
    extensions: ExtensionRegistry,
}

impl Pipeline {
    /// Pipeline with the default stages
    pub fn new(store: Arc<dyn AssetStore>, config: &MergeConfig) -> Self {
        Self::builder(store, config).build()
    }

    /// Start building a customised pipeline
    pub fn builder(store: Arc<dyn AssetStore>, config: &MergeConfig) -> PipelineBuilder {
        PipelineBuilder::new(store, config)
    }

    /// Stage names in execution order
    pub fn merger_names(&self) -> Vec<&'static str> {
        self.mergers.iter().map(|m| m.name()).collect()
    }

    /// Registered document sections
    pub fn extensions(&self) -> &ExtensionRegistry {
        &self.extensions
    }

    /// Apply every stage in order
    ///
    /// The first failing stage aborts the pass. Changes already made to the
    /// scene and the context are kept.
    pub fn merge(&self, doc: &Document, scene: &mut Scene, ctx: &mut ResolutionContext) -> Result<(), MergeError> {
        self.extensions.check(doc)?;

        for merger in &self.mergers {
            log::debug!("Applying {} merger", merger.name());
            merger.apply(doc, scene, ctx)?;
        }

        log::info!(
            "Merged {} entities and {} relations into '{}'",
            doc.entity_count(),
            doc.relations.len(),
            scene.root_name()
        );
        Ok(())
    }

    /// Apply every stage with a new context and return it
    pub fn merge_fresh(&self, doc: &Document, scene: &mut Scene) -> Result<ResolutionContext, MergeError> {
        let mut ctx = ResolutionContext::new();
        self.merge(doc, scene, &mut ctx)?;
        Ok(ctx)
    }
}
