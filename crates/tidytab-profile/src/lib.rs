//! Data-quality profiling.

pub mod profiler;

pub use profiler::profile;
