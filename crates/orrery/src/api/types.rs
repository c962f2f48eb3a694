use serde::{Deserialize, Serialize};

/// Handle to a body in the scene.
///
/// Ids are handed out in spawn order and double as the body's index in the
/// scene, so a parent always has a smaller id than its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u32);

impl BodyId {
    /// Index into the scene's body list.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
