use thiserror::Error;

/// Fatal startup failures.
///
/// Everything past initialization is total: canvas operations no-op on
/// empty stacks instead of failing, so the only error the caller can see is
/// the drawing surface not coming up at all.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("failed to initialize the drawing surface: {0}")]
    Surface(#[from] eframe::Error),
}
