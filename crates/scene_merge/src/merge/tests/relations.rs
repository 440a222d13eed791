use std::sync::Arc;

use super::{config, shared, store};
use crate::document::{
    Document, LightKind, LightRecord, MatProperty, MaterialRecord, MeshRecord, NodeRecord, Relation,
};
use crate::merge::{ContextValue, MergeError, Merger, Pipeline, ResolutionContext};
use crate::scene::{RenderBucket, Scene, UserValue};

fn mesh(id: &str) -> MeshRecord {
    MeshRecord {
        id: id.into(),
        positions: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
        ..Default::default()
    }
}

fn light(id: &str) -> LightRecord {
    LightRecord {
        id: id.into(),
        name: None,
        kind: LightKind::Point,
        color: [1.0; 4],
        intensity: 1.0,
        radius: 5.0,
        spot_angle: None,
        cast_shadow: false,
    }
}

fn scene_doc() -> Document {
    Document {
        nodes: vec![NodeRecord::new("n1"), NodeRecord::new("n2")],
        meshes: vec![mesh("me1"), mesh("me2")],
        materials: vec![
            MaterialRecord::new("m1", "MatDefs/Lit.ron")
                .with_property(MatProperty::scalar("Shininess", 1.0))
                .with_property(MatProperty::scalar("RenderBucket", 1.0)),
        ],
        lights: vec![light("l1")],
        relations: vec![
            Relation::new("n1", "n2"),
            // geometry link listed before the material binding
            Relation::new("me1", "n1"),
            Relation::new("m1", "me1"),
            Relation::new("n2", "me2"),
            Relation::new("l1", "n2"),
            Relation::new("m1", "l1"),
            Relation::new("ghost", "n1"),
        ],
        ..Default::default()
    }
}

fn merged() -> (Scene, ResolutionContext) {
    let pipeline = Pipeline::new(shared(store()), &config());
    let mut scene = Scene::new("scenes/level1/root");
    let ctx = pipeline.merge_fresh(&scene_doc(), &mut scene).unwrap();
    (scene, ctx)
}

#[test]
fn test_node_hierarchy() {
    let (scene, ctx) = merged();
    let n1 = ctx.node("n1").unwrap();
    let n2 = ctx.node("n2").unwrap();

    assert_eq!(scene.node(n2).unwrap().parent(), Some(n1));
    assert_eq!(scene.node(scene.root()).unwrap().children(), &[n1]);
}

#[test]
fn test_bound_material_and_bucket() {
    let (scene, ctx) = merged();
    let node = scene.node(ctx.node("n1").unwrap()).unwrap();

    assert_eq!(node.geometries.len(), 1);
    let geometry = &node.geometries[0];
    assert_eq!(geometry.name, "me1");
    assert!(Arc::ptr_eq(&geometry.material, &ctx.material("m1").unwrap()));
    assert!(Arc::ptr_eq(&geometry.mesh, &ctx.mesh("me1").unwrap()));
    assert_eq!(geometry.bucket, RenderBucket::Transparent);
}

#[test]
fn test_unbound_mesh_gets_default_material() {
    let (scene, ctx) = merged();
    let node = scene.node(ctx.node("n2").unwrap()).unwrap();

    assert_eq!(node.geometries.len(), 1);
    assert_eq!(node.geometries[0].material.name(), "DEFAULT");
    assert_eq!(node.geometries[0].bucket, RenderBucket::Inherit);
    assert_eq!(node.lights.len(), 1);
    assert!(Arc::ptr_eq(&node.lights[0], &ctx.light("l1").unwrap()));
}

#[test]
fn test_bucket_directive_without_value_is_opaque() {
    let mut doc = scene_doc();
    doc.materials = vec![MaterialRecord::new("m1", "MatDefs/Lit.ron")
        .with_property(MatProperty { id: "RenderBucket".into(), ..Default::default() })];

    let pipeline = Pipeline::new(shared(store()), &config());
    let mut scene = Scene::new("scenes/level1/root");
    let ctx = pipeline.merge_fresh(&doc, &mut scene).unwrap();

    let node = scene.node(ctx.node("n1").unwrap()).unwrap();
    assert_eq!(node.geometries[0].name, "me1");
    assert_eq!(node.geometries[0].bucket, RenderBucket::Opaque);
}

#[test]
fn test_attachments_and_unknown_pairs() {
    let doc = Document {
        nodes: vec![NodeRecord::new("n1")],
        relations: vec![Relation::new("n1", "c1"), Relation::new("n1", "s1"), Relation::new("n1", "n1")],
        ..Default::default()
    };
    let mut scene = Scene::new("root");
    let n1 = scene.add_node(crate::scene::Node::new("n1"));
    let mut ctx = ResolutionContext::new();
    ctx.put("n1", ContextValue::Node(n1));
    ctx.put("c1", ContextValue::CustomParams(Arc::new(vec![("hp".into(), UserValue::Int(3))])));
    ctx.put("s1", ContextValue::Scalar(2.0));

    let relations = crate::merge::RelationsMerger::new(
        crate::merge::MaterialsMerger::new(shared(store()), &config()).defaults(),
    );
    relations.apply(&doc, &mut scene, &mut ctx).unwrap();

    let node = scene.node(n1).unwrap();
    assert_eq!(node.user_data.get("hp"), Some(&UserValue::Int(3)));
    assert_eq!(node.parent(), Some(scene.root()));
}

#[test]
fn test_full_document_from_ron() {
    let doc = Document::from_ron_str(
        r#"(
            requires: ["custom_params"],
            nodes: [
                (id: "player", name: Some("Player"), transform: (translation: (0.0, 1.0, 0.0))),
            ],
            meshes: [(id: "body", positions: [(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (0.0, 1.0, 0.0)])],
            materials: [(id: "skin", mat_id: "MatDefs/Lit.ron", properties: [
                (id: "Tint", color: Some((0.0, 1.0, 0.0, 1.0))),
            ])],
            skeletons: [(id: "rig", bones: [(id: "hip"), (id: "spine")], bones_graph: [(parent: "hip", child: "spine")])],
            animations: [(id: "idle", duration_ms: 1000, clips: [(target_id: "hip", sample_times_ms: [0, 1000])])],
            custom_params: [(id: "stats", params: [(name: "hp", value: Int(100))])],
            physics: [(id: "body_rb", kind: dynamic, mass: 80.0, shape: Capsule(radius: 0.4, height: 1.2))],
            relations: [
                (ref1: "player", ref2: "body"),
                (ref1: "skin", ref2: "body"),
                (ref1: "rig", ref2: "player"),
                (ref1: "idle", ref2: "player"),
                (ref1: "stats", ref2: "player"),
                (ref1: "body_rb", ref2: "player"),
            ],
        )"#,
    )
    .unwrap();

    let pipeline = Pipeline::new(shared(store()), &config());
    let mut scene = Scene::new("scenes/demo/root");
    let ctx = pipeline.merge_fresh(&doc, &mut scene).unwrap();

    let player = scene.node(scene.find_by_name("Player").unwrap()).unwrap();
    assert_eq!(player.geometries[0].material.name(), "skin");
    assert_eq!(player.skeleton.as_ref().unwrap().bones.len(), 2);
    assert_eq!(player.animations.len(), 1);
    assert_eq!(player.user_data.get("hp"), Some(&UserValue::Int(100)));
    assert!(Arc::ptr_eq(player.rigid_body.as_ref().unwrap(), &ctx.physics_body("body_rb").unwrap()));
}

#[test]
fn test_merge_without_relations_stage_loses_links() {
    // a pipeline only ever ends with relations; running it early sees nothing
    let doc = scene_doc();
    let mut scene = Scene::new("root");
    let mut ctx = ResolutionContext::new();
    let relations = crate::merge::RelationsMerger::new(
        crate::merge::MaterialsMerger::new(shared(store()), &config()).defaults(),
    );

    relations.apply(&doc, &mut scene, &mut ctx).unwrap();
    assert!(scene.is_empty());
}

#[test]
fn test_failed_pass_keeps_earlier_stages() {
    let mut doc = scene_doc();
    doc.materials.push(MaterialRecord::new("bad", "MatDefs/Missing.ron"));

    let pipeline = Pipeline::new(shared(store()), &config());
    let mut scene = Scene::new("root");
    let mut ctx = ResolutionContext::new();

    let err = pipeline.merge(&doc, &mut scene, &mut ctx).unwrap_err();
    assert!(matches!(err, MergeError::MaterialDefinition { .. }));
    // nodes were merged before the failing stage and stay in the scene
    assert_eq!(scene.len(), 3);
    assert!(ctx.contains("m1"));
}
