use core::{marker::PhantomData, ptr};

/// Metadata record for one reservation.
///
/// The record owns the `size` bytes at `address`. `next` only links the
/// chain together; ownership of the following record belongs to the
/// registry.
pub struct Block {
  pub size: usize,
  pub is_free: bool,
  pub address: *mut u8,
  pub next: *mut Block,
}

impl Block {
  /// A freshly created block is free until handed out.
  pub fn new(
    size: usize,
    address: *mut u8,
  ) -> Self {
    Self {
      size,
      is_free: true,
      address,
      next: ptr::null_mut(),
    }
  }

  /// Zeroes the whole region and marks the block reusable.
  ///
  /// # Safety
  ///
  /// `address` must be valid for writes of `size` bytes.
  pub unsafe fn reset(&mut self) {
    unsafe { ptr::write_bytes(self.address, 0, self.size) };
    self.is_free = true;
  }
}

/// Walks a chain of blocks starting at `current`.
pub struct Chain<'a> {
  current: *const Block,
  _chain: PhantomData<&'a Block>,
}

impl<'a> Chain<'a> {
  /// # Safety
  ///
  /// Every record reachable from `first` must stay alive and unmodified for `'a`.
  pub unsafe fn new(first: *const Block) -> Self {
    Self {
      current: first,
      _chain: PhantomData,
    }
  }
}

impl<'a> Iterator for Chain<'a> {
  type Item = &'a Block;

  fn next(&mut self) -> Option<Self::Item> {
    let block = unsafe { self.current.as_ref() }?;
    self.current = block.next;
    Some(block)
  }
}
