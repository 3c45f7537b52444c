//! Per-character skill state: layout codec, process-wide cache, and the
//! client packet encoder.

pub mod cache;
pub mod codec;
pub mod encoder;
