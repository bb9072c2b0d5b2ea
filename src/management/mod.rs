mod rotation;

pub use rotation::{Filing, PlaylistRotation, RotationPolicy};
