//! Text rendering of a scene tree

use std::fmt::Write;

use scene_merge::scene::Scene;

/// One line per node, indented by depth, followed by its attachments
pub fn render(scene: &Scene) -> String {
    let mut out = String::new();
    for (key, depth) in scene.depth_first() {
        let Some(node) = scene.node(key) else { continue };
        let indent = "  ".repeat(depth);
        let _ = writeln!(out, "{indent}{}", node.name);

        for geometry in &node.geometries {
            let _ = writeln!(
                out,
                "{indent}  - geometry {} [{} vertices] material={} bucket={:?}",
                geometry.name,
                geometry.mesh.vertex_count(),
                geometry.material.name(),
                geometry.bucket
            );
        }
        for light in &node.lights {
            let _ = writeln!(out, "{indent}  - light {} ({:?})", light.name, light.light_type);
        }
        if let Some(skeleton) = &node.skeleton {
            let _ = writeln!(out, "{indent}  - skeleton {} ({} bones)", skeleton.name, skeleton.bones.len());
        }
        for animation in &node.animations {
            let _ = writeln!(out, "{indent}  - animation {} ({:.2}s)", animation.name, animation.duration);
        }
        if let Some(body) = &node.rigid_body {
            let _ = writeln!(out, "{indent}  - rigid body {} ({:?}, {} kg)", body.name, body.body_type, body.mass);
        }
        for (name, value) in &node.user_data {
            let _ = writeln!(out, "{indent}  - {name} = {value:?}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use scene_merge::scene::Node;

    #[test]
    fn test_render_indents_children() {
        let mut scene = Scene::new("scenes/root");
        let a = scene.add_node(Node::new("a"));
        let b = scene.add_node(Node::new("b"));
        scene.attach_child(a, b).unwrap();

        assert_eq!(render(&scene), "scenes/root\n  a\n    b\n");
    }
}
