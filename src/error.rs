use thiserror::Error;

/// Why a reservation could not be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReserveError {
  /// The word-aligned size does not fit in a `usize`.
  #[error("requested size {0} overflows when aligned to the machine word")]
  SizeOverflow(usize),
  /// No memory left for the block record itself.
  #[error("not enough space for block creation ({size} bytes requested)")]
  RecordExhausted { size: usize },
  /// The record was allocated but its data region was not.
  #[error("not enough space for memory allocation ({size} bytes requested)")]
  DataExhausted { size: usize },
}
