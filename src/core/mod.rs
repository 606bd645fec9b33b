//! Core processing building blocks: pixel scaling modes, resize/padding,
//! layout transforms, processing pipelines, and save helpers. These are
//! internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
