//! Error types untuk cursor encode/decode.

use thiserror::Error as ThisError;

/// Unified eipwire result type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Request melewati batas view: input terpotong atau output buffer kekecilan.
    ///
    /// Cursor tidak bergerak saat error ini dikembalikan.
    #[error(
        "buffer too small: requested {requested} bytes at offset {position}, {remaining} remaining"
    )]
    Length {
        requested: usize,
        remaining: usize,
        position: usize,
    },
}

impl Error {
    /// Bangun length error dan catat ke tracing.
    #[inline]
    pub(crate) fn length(requested: usize, remaining: usize, position: usize) -> Self {
        tracing::debug!(requested, remaining, position, "cursor bounds violation");
        Error::Length {
            requested,
            remaining,
            position,
        }
    }
}
