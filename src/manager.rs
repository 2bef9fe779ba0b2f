use std::{alloc::Layout, collections::HashMap, ptr, ptr::NonNull};

use log::{debug, error, trace};

use crate::{
  align::{WORD_SIZE, checked_align},
  backing::{BackingAllocator, LibcAllocator},
  block::{Block, Chain},
  error::ReserveError,
  extensions::Extensions,
  status::{BlockStatus, MemoryStatus},
};

/// Block-tracking allocator over a [`BackingAllocator`].
///
/// Blocks live in an append-only chain in creation order. A reservation
/// takes the smallest free block that fits, or appends a new one; a release
/// zeroes the block and puts it back up for reuse. Nothing goes back to the
/// backing allocator until [`flush_memory`](Self::flush_memory) or drop.
///
/// The registry holds raw pointers, so it is neither `Send` nor `Sync`.
pub struct MemoryManager<A: BackingAllocator = LibcAllocator> {
  first: *mut Block,
  last: *mut Block,
  index: HashMap<*mut u8, *mut Block>,
  backing: A,
}

impl MemoryManager {
  pub fn new() -> Self {
    Self::with_backing(LibcAllocator)
  }
}

impl Default for MemoryManager {
  fn default() -> Self {
    Self::new()
  }
}

impl<A: BackingAllocator> MemoryManager<A> {
  pub fn with_backing(backing: A) -> Self {
    Self {
      first: ptr::null_mut(),
      last: ptr::null_mut(),
      index: HashMap::new(),
      backing,
    }
  }

  /// Reserves at least `size` bytes, word aligned.
  ///
  /// Returns `None` for a zero size or when the backing allocator is
  /// exhausted. The block handed out may be larger than asked for.
  pub fn reserve(
    &mut self,
    size: usize,
  ) -> Option<NonNull<u8>> {
    self.try_reserve(size).ok().flatten()
  }

  /// Like [`reserve`](Self::reserve), but reports why a non-zero request failed.
  pub fn try_reserve(
    &mut self,
    size: usize,
  ) -> Result<Option<NonNull<u8>>, ReserveError> {
    if size == 0 {
      return Ok(None);
    }

    let size = checked_align(size).ok_or(ReserveError::SizeOverflow(size))?;

    let block = match self.find_free_block(size) {
      Some(block) => block,
      None => self.push_block(size)?,
    };

    unsafe {
      (*block).is_free = false;
      trace!("reserved {} bytes at {:p}", (*block).size, (*block).address);
      Ok(NonNull::new((*block).address))
    }
  }

  /// Zeroes the block at `address` and makes it available again.
  ///
  /// Unknown addresses are ignored, and releasing twice is the same as
  /// releasing once.
  pub fn release(
    &mut self,
    address: Option<NonNull<u8>>,
  ) {
    let Some(block) = self.find_block(address) else {
      return;
    };

    unsafe {
      (*block).reset();
      trace!("released {} bytes at {:p}", (*block).size, (*block).address);
    }
  }

  /// Size of the block at `address`, or 0 if the address is not tracked.
  pub fn size_of(
    &self,
    address: Option<NonNull<u8>>,
  ) -> usize {
    self
      .find_block(address)
      .map_or(0, |block| unsafe { (*block).size })
  }

  /// Returns every block to the backing allocator and empties the registry.
  ///
  /// Every address handed out before this call is dangling afterwards.
  pub fn flush_memory(&mut self) {
    if self.first.is_null() {
      return;
    }

    debug!("clearing out memory...\n{}", self.status());

    let mut current = self.first;
    while !current.is_null() {
      unsafe {
        let next = (*current).next;
        let data = Self::data_layout((*current).size);
        self.backing.deallocate((*current).address, data);
        self.backing.deallocate(current as *mut u8, Self::record_layout());
        current = next;
      }
    }

    self.first = ptr::null_mut();
    self.last = ptr::null_mut();
    self.index.clear();
  }

  /// Snapshot of the chain, first block first.
  pub fn status(&self) -> MemoryStatus {
    MemoryStatus::new(
      self
        .blocks()
        .map(|block| BlockStatus {
          address: block.address,
          size: block.size,
          is_free: block.is_free,
        })
        .collect(),
    )
  }

  /// Writes the status of every block and a usage summary to stdout.
  pub fn print_memory_status(&self) {
    println!("\n{}", self.status());
  }

  fn blocks(&self) -> Chain<'_> {
    unsafe { Chain::new(self.first) }
  }

  /// Smallest free block of at least `size` bytes; the first one wins a tie.
  fn find_free_block(
    &self,
    size: usize,
  ) -> Option<*mut Block> {
    let mut best: *mut Block = ptr::null_mut();
    let mut current = self.first;

    unsafe {
      while !current.is_null() {
        if (*current).is_free
          && (*current).size >= size
          && (best.is_null() || (*current).size < (*best).size)
        {
          best = current;
        }
        current = (*current).next;
      }
    }

    (!best.is_null()).then_some(best)
  }

  fn find_block(
    &self,
    address: Option<NonNull<u8>>,
  ) -> Option<*mut Block> {
    self.index.get(&address?.as_ptr()).copied()
  }

  /// Creates a block of `size` bytes and links it at the tail.
  fn push_block(
    &mut self,
    size: usize,
  ) -> Result<*mut Block, ReserveError> {
    let data = Layout::from_size_align(size, WORD_SIZE)
      .map_err(|_| ReserveError::SizeOverflow(size))?;

    let block = self.backing.allocate(Self::record_layout()) as *mut Block;
    if block.is_null() {
      let err = ReserveError::RecordExhausted { size };
      error!("{err}");
      return Err(err);
    }

    let address = self.backing.allocate(data);
    if address.is_null() {
      unsafe { self.backing.deallocate(block as *mut u8, Self::record_layout()) };
      let err = ReserveError::DataExhausted { size };
      error!("{err}");
      return Err(err);
    }

    unsafe {
      block.write(Block::new(size, address));

      if self.first.is_null() {
        self.first = block;
      } else {
        (*self.last).next = block;
      }
    }
    self.last = block;
    self.index.insert(address, block);

    debug!("created block of {size} bytes at {address:p}");
    Ok(block)
  }

  fn record_layout() -> Layout {
    Layout::new::<Block>()
  }

  /// Layout the data region of a `size` byte block was allocated with.
  fn data_layout(size: usize) -> Layout {
    debug_assert!(size % WORD_SIZE == 0);
    unsafe { Layout::from_size_align_unchecked(size, WORD_SIZE) }
  }
}

impl<A: BackingAllocator> Drop for MemoryManager<A> {
  fn drop(&mut self) {
    self.flush_memory();
  }
}

impl<A: BackingAllocator> Extensions for MemoryManager<A> {}
