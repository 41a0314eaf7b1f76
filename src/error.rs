//! Errors reported by the polygon filler.

use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FillError {
    /// More active vertices were requested than the polygon can hold.
    #[error("vertex count {requested} exceeds polygon capacity {capacity}")]
    VertexCapacity { requested: usize, capacity: usize },

    /// The edge pool could not be grown for a polygon.
    #[error("failed to grow edge storage to {requested} edges")]
    EdgeStorage {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    /// The mask buffer or edge table could not be allocated for a target.
    #[error("failed to allocate working buffers for a {width}x{height} target")]
    WorkingBuffers {
        width: u32,
        height: u32,
        #[source]
        source: TryReserveError,
    },
}
