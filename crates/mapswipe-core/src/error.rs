use thiserror::Error;

/// Errors surfaced by the swipe tool.
///
/// None of these are fatal to the host: `NoLayerSelected` aborts the
/// operation and leaves all state untouched, `SnapshotUnavailable` degrades
/// a frame to rendering without the base image and the capture is retried
/// on the next view change.
#[derive(Error, Debug)]
pub enum SwipeError {
    #[error("no layer selected")]
    NoLayerSelected,

    #[error("canvas snapshot unavailable: {0}")]
    SnapshotUnavailable(String),
}
