//! Scene graph: an ordered arena of positioned primitives.
//!
//! Nodes are appended in construction order and never removed; the whole
//! graph is dropped on unmount. Parents must be inserted before their
//! children, so a parent's [`NodeId`] is always smaller than its child's.
//! Projection walks nodes in insertion order.

#[cfg(test)]
#[path = "graph_test.rs"]
mod graph_test;

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Index of a node in its [`SceneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u32);

impl Rgb {
    /// CSS hex form, e.g. `#ff7f00`.
    #[must_use]
    pub fn css(self) -> String {
        format!("#{:06x}", self.0 & 0x00ff_ffff)
    }
}

/// Surface appearance of a cuboid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Material {
    pub color: Rgb,
    pub wireframe: bool,
}

impl Material {
    #[must_use]
    pub fn solid(color: u32) -> Self {
        Self { color: Rgb(color), wireframe: false }
    }

    #[must_use]
    pub fn wireframe(color: u32) -> Self {
        Self { color: Rgb(color), wireframe: true }
    }
}

/// Local transform: scale, then Euler XYZ rotation, then translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self { position: Vec3::ZERO, rotation: Vec3::ZERO, scale: Vec3::ONE }
    }
}

impl Transform {
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self { position, ..Self::default() }
    }

    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z);
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

/// What a node draws.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Draws nothing; positions its children.
    Group,
    /// Square grid on the XZ plane, centered on the origin.
    Grid { size: f32, divisions: u32, center: Rgb, line: Rgb },
    /// X (red), Y (green) and Z (blue) axis markers from the origin.
    Axes { size: f32 },
    /// Unit cube centered on the origin.
    Cuboid { material: Material },
    /// Open polyline through `points`.
    LineStrip { points: Vec<Vec3>, color: Rgb },
}

/// One entry in the scene graph.
#[derive(Debug, Clone)]
pub struct Node {
    pub parent: Option<NodeId>,
    pub transform: Transform,
    pub primitive: Primitive,
    /// Bumped whenever the primitive's vertex data changes.
    pub revision: u64,
}

/// The set of positioned drawable primitives composing one frame.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    nodes: Vec<Node>,
}

impl SceneGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a top-level node.
    pub fn add(&mut self, transform: Transform, primitive: Primitive) -> NodeId {
        self.push(None, transform, primitive)
    }

    /// Append a node under `parent`.
    ///
    /// A `parent` from another graph that is out of range is treated as no parent.
    pub fn add_child(&mut self, parent: NodeId, transform: Transform, primitive: Primitive) -> NodeId {
        let parent = (parent.0 < self.nodes.len()).then_some(parent);
        self.push(parent, transform, primitive)
    }

    fn push(&mut self, parent: Option<NodeId>, transform: Transform, primitive: Primitive) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { parent, transform, primitive, revision: 0 });
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    /// Nodes in insertion order with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// Children of `parent`, in insertion order.
    pub fn children(&self, parent: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.iter()
            .filter(move |(_, node)| node.parent == Some(parent))
            .map(|(id, _)| id)
    }

    /// Compose local transforms from the root down to `id`.
    #[must_use]
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let mut matrix = Mat4::IDENTITY;
        let mut cursor = self.get(id);
        while let Some(node) = cursor {
            matrix = node.transform.matrix() * matrix;
            cursor = node.parent.and_then(|parent| self.get(parent));
        }
        matrix
    }

    /// World matrices for every node, indexed by [`NodeId::index`].
    ///
    /// Relies on parents preceding children.
    #[must_use]
    pub fn world_matrices(&self) -> Vec<Mat4> {
        let mut out: Vec<Mat4> = Vec::with_capacity(self.nodes.len());
        for node in &self.nodes {
            let local = node.transform.matrix();
            let world = match node.parent.and_then(|parent| out.get(parent.0)) {
                Some(parent_world) => *parent_world * local,
                None => local,
            };
            out.push(world);
        }
        out
    }
}
