use core::{alloc::Layout, ffi::c_void};

use libc::{free, malloc};

/// The system allocator a [`MemoryManager`](crate::MemoryManager) takes
/// block records and data regions from.
///
/// # Safety
///
/// A non-null pointer returned by `allocate` must be valid for reads and
/// writes of `layout.size()` bytes, aligned to `layout.align()`, and stay
/// valid until it is passed back to `deallocate`.
pub unsafe trait BackingAllocator {
  /// Returns null when the request cannot be satisfied.
  fn allocate(
    &mut self,
    layout: Layout,
  ) -> *mut u8;

  /// # Safety
  ///
  /// `address` must come from `allocate` on this allocator with the same `layout`.
  unsafe fn deallocate(
    &mut self,
    address: *mut u8,
    layout: Layout,
  );
}

/// Backing allocator built on the C library's `malloc`/`free`.
///
/// `malloc` aligns for any fundamental type, which covers every layout the
/// registry asks for (block records and word-aligned data).
#[derive(Debug, Default, Clone, Copy)]
pub struct LibcAllocator;

unsafe impl BackingAllocator for LibcAllocator {
  fn allocate(
    &mut self,
    layout: Layout,
  ) -> *mut u8 {
    debug_assert!(layout.align() <= 2 * core::mem::size_of::<usize>());
    unsafe { malloc(layout.size()) as *mut u8 }
  }

  unsafe fn deallocate(
    &mut self,
    address: *mut u8,
    _layout: Layout,
  ) {
    unsafe { free(address as *mut c_void) };
  }
}
