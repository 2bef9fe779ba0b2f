//! # blockheap - A Block-Tracking Heap Allocator
//!
//! This crate provides a **best-fit block allocator** that sits on top of the
//! system allocator and keeps a record of every block it ever handed out, so
//! the caller can see which blocks are free and which are in use.
//!
//! ## Overview
//!
//! Every reservation is backed by a block record. Records form a singly
//! linked chain in creation order that only grows, until a full teardown:
//!
//! ```text
//!   Block Chain:
//!
//!   first                                                       last
//!     │                                                           │
//!     ▼                                                           ▼
//!   ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//!   │ size: 24     │     │ size: 8      │     │ size: 64     │
//!   │ is_free: no  │────►│ is_free: yes │────►│ is_free: no  │────► null
//!   │ address ─┐   │     │ address ─┐   │     │ address ─┐   │
//!   └──────────┼───┘     └──────────┼───┘     └──────────┼───┘
//!              ▼                    ▼                    ▼
//!        ┌──────────┐          ┌────────┐     ┌────────────────────┐
//!        │ 24 bytes │          │ zeroed │     │      64 bytes      │
//!        └──────────┘          └────────┘     └────────────────────┘
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   blockheap
//!   ├── align       - Word alignment (align!, checked_align)
//!   ├── backing     - BackingAllocator trait and the libc implementation
//!   ├── block       - Block record and chain iteration (internal)
//!   ├── error       - ReserveError
//!   ├── extensions  - Config and cache hooks (not yet supported)
//!   ├── global      - Per-thread free-function entry points
//!   ├── manager     - MemoryManager implementation
//!   └── status      - MemoryStatus diagnostics
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use blockheap::MemoryManager;
//!
//! let mut manager = MemoryManager::new();
//!
//! let address = manager.reserve(20).unwrap();
//! unsafe { address.cast::<u32>().write(42) };
//!
//! // Sizes are rounded up to the machine word.
//! assert_eq!(manager.size_of(Some(address)) % std::mem::size_of::<usize>(), 0);
//!
//! // Released blocks are zeroed and reused by later reservations.
//! manager.release(Some(address));
//! assert_eq!(manager.reserve(20), Some(address));
//!
//! manager.print_memory_status();
//! ```
//!
//! ## How It Works
//!
//! A reservation walks the whole chain and takes the **smallest** free block
//! that is big enough; on a tie the block found first wins:
//!
//! ```text
//!   reserve(10) -> aligned to 16
//!
//!   ┌────────┐   ┌─────────┐   ┌─────────┐
//!   │ 8 free │──►│ 16 free │──►│ 32 free │
//!   └────────┘   └─────────┘   └─────────┘
//!    too small     chosen       too big
//! ```
//!
//! The chosen block is handed out whole: blocks are never split or merged.
//! When no free block fits, a new one is created at the tail. Releasing a
//! block zeroes its bytes and marks it free; its memory stays owned by the
//! registry until [`MemoryManager::flush_memory`] or the manager is dropped.
//!
//! ## Limitations
//!
//! - **Single-threaded only**: a `MemoryManager` is neither `Send` nor `Sync`
//! - **No coalescing or splitting**: fragmentation is never undone
//! - **Linear search**: every reservation scans the whole chain
//!
//! ## Logging
//!
//! Block creation, teardown and allocation failures are reported through the
//! [`log`] facade. The crate does not install a logger.

pub mod align;
mod backing;
mod block;
mod error;
mod extensions;
pub mod global;
mod manager;
mod status;

pub use backing::{BackingAllocator, LibcAllocator};
pub use error::ReserveError;
pub use extensions::Extensions;
pub use manager::MemoryManager;
pub use status::{BlockStatus, MemoryStatus};
