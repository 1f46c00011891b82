//! Cross-module behaviour of traces driven through an emitter

mod trace_properties;
