use core::mem;

/// Size of a machine word: every block size is a multiple of this.
pub const WORD_SIZE: usize = mem::size_of::<usize>();

/// Rounds `$value` up to the next multiple of the machine word size.
///
/// The addition is unchecked, use [`checked_align`] when `$value` may come
/// close to `usize::MAX`.
///
/// # Examples
///
/// ```rust
/// use blockheap::align;
///
/// match std::mem::size_of::<usize>() {
///     8 => assert_eq!(align!(13), 16), // 64 bit machine.
///     4 => assert_eq!(align!(11), 12), // 32 bit machine.
///     _ => {},
/// };
/// ```
#[macro_export]
macro_rules! align {
  ($value:expr) => {
    ($value + $crate::align::WORD_SIZE - 1) & !($crate::align::WORD_SIZE - 1)
  };
}

/// Word-aligns `size`, or returns `None` if the result does not fit in a `usize`.
pub const fn checked_align(size: usize) -> Option<usize> {
  match size.checked_add(WORD_SIZE - 1) {
    Some(padded) => Some(padded & !(WORD_SIZE - 1)),
    None => None,
  }
}
