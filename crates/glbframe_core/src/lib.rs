//! Framing parser for binary glTF (GLB) containers.

/// Header validation, chunk enumeration, chunk lookup, and scene document hand-off.
pub mod glb;
