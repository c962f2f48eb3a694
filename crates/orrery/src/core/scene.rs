use crate::api::types::BodyId;
use crate::components::body::CelestialBody;
use crate::renderer::traits::Canvas;

/// Body registry in scene order.
///
/// Scene order is update and draw order. A body's `BodyId` is its index, so
/// parent links stay valid for the life of the scene. Bodies are never
/// removed individually; `clear` drops them all.
#[derive(Debug)]
pub struct Scene {
    bodies: Vec<CelestialBody>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(16),
        }
    }

    /// Create a scene with a specific body capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
        }
    }

    /// Add a body at the end of scene order and return its id.
    ///
    /// A parent id that names no body yet is kept as-is. It resolves if a
    /// body is spawned at that index later, and reads as "no parent" until
    /// then.
    pub fn spawn(&mut self, body: CelestialBody) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        if let Some(parent) = body.parent {
            if parent == id {
                log::warn!("body {:?} ({}) names itself as parent", id, body.tag);
            } else if parent.index() >= self.bodies.len() {
                log::debug!("body {:?} ({}) spawned before its parent {:?}", id, body.tag, parent);
            }
        }
        log::debug!(
            "spawn {:?} '{}' kind={:?} r={} d={} speed={}",
            id, body.tag, body.kind, body.radius, body.distance, body.speed
        );
        self.bodies.push(body);
        id
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.index())
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut CelestialBody> {
        self.bodies.get_mut(id.index())
    }

    /// The body `id` orbits, if it has one and it exists.
    pub fn parent_of(&self, id: BodyId) -> Option<&CelestialBody> {
        self.get(id)
            .and_then(|body| body.parent)
            .filter(|parent| *parent != id)
            .and_then(|parent| self.get(parent))
    }

    /// Iterate over all bodies in scene order.
    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    /// Iterate over all bodies mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut CelestialBody> {
        self.bodies.iter_mut()
    }

    /// Iterate over `(id, body)` pairs in scene order.
    pub fn iter_with_ids(&self) -> impl Iterator<Item = (BodyId, &CelestialBody)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, body)| (BodyId(i as u32), body))
    }

    /// Find the first body with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<BodyId> {
        self.bodies
            .iter()
            .position(|b| b.tag == tag)
            .map(|i| BodyId(i as u32))
    }

    /// Ids of every body that orbits `parent`.
    pub fn children_of(&self, parent: BodyId) -> Vec<BodyId> {
        self.iter_with_ids()
            .filter(|(id, body)| body.parent == Some(parent) && *id != parent)
            .map(|(id, _)| id)
            .collect()
    }

    /// Advance every body by `elapsed`.
    pub fn update(&mut self, elapsed: f32) {
        for body in &mut self.bodies {
            body.update(elapsed);
        }
    }

    /// Draw every body in scene order. Each body sees its parent's state as
    /// left by the most recent `update`.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for (id, body) in self.iter_with_ids() {
            body.draw(self.parent_of(id), canvas);
        }
    }

    /// Number of bodies in the scene.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Remove all bodies.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
