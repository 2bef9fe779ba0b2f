//! Free-function entry points backed by one [`MemoryManager`] per thread.
//!
//! Each thread reserves from and releases to its own registry: an address
//! reserved on one thread is unknown to every other thread. The registry of
//! a thread is torn down when the thread exits.

use std::{cell::RefCell, ptr::NonNull};

use crate::{Extensions, MemoryManager};

thread_local! {
  static MANAGER: RefCell<MemoryManager> = RefCell::new(MemoryManager::new());
}

/// See [`MemoryManager::reserve`].
pub fn reserve(size: usize) -> Option<NonNull<u8>> {
  MANAGER.with_borrow_mut(|manager| manager.reserve(size))
}

/// See [`MemoryManager::release`].
pub fn release(address: Option<NonNull<u8>>) {
  MANAGER.with_borrow_mut(|manager| manager.release(address));
}

/// See [`MemoryManager::size_of`].
pub fn size_of(address: Option<NonNull<u8>>) -> usize {
  MANAGER.with_borrow(|manager| manager.size_of(address))
}

/// See [`MemoryManager::flush_memory`].
pub fn flush_memory() {
  MANAGER.with_borrow_mut(MemoryManager::flush_memory);
}

/// See [`MemoryManager::print_memory_status`].
pub fn print_memory_status() {
  MANAGER.with_borrow(MemoryManager::print_memory_status);
}

pub fn load_from_config() {
  MANAGER.with_borrow_mut(|manager| manager.load_from_config());
}

pub fn load_memory_cache() {
  MANAGER.with_borrow_mut(|manager| manager.load_memory_cache());
}

pub fn save_memory_cache() {
  MANAGER.with_borrow_mut(|manager| manager.save_memory_cache());
}
