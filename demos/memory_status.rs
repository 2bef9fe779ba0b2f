use std::{io::Read, ptr};

use blockheap::{MemoryManager, align};

/// Waits until the user presses ENTER when running with `--step`.
/// Useful when you want to inspect the process with tools like `pmap` or `gdb`
/// between steps.
fn pause(step: bool) {
  if step {
    println!("\n>>> Press ENTER to continue...");
    let _ = std::io::stdin().bytes().next();
  }
}

fn main() {
  // RUST_LOG=debug shows block creation and teardown.
  env_logger::init();

  let step = std::env::args().any(|arg| arg == "--step");
  let mut manager = MemoryManager::new();

  // --------------------------------------------------------------------
  // 1) Reserve 20 bytes. The block is rounded up to the machine word.
  // --------------------------------------------------------------------
  let first = manager.reserve(20);
  println!(
    "[1] reserve(20) -> {:?}, size_of = {} (align!(20) = {})",
    first,
    manager.size_of(first),
    align!(20)
  );

  if let Some(address) = first {
    unsafe { ptr::write_bytes(address.as_ptr(), 0xAB, manager.size_of(first)) };
    println!("[1] Filled first block with 0xAB");
  }
  manager.print_memory_status();
  pause(step);

  // --------------------------------------------------------------------
  // 2) Reserve three more blocks of different sizes.
  // --------------------------------------------------------------------
  let small = manager.reserve(8);
  let medium = manager.reserve(16);
  let large = manager.reserve(32);
  println!("\n[2] reserve(8), reserve(16), reserve(32)");
  manager.print_memory_status();
  pause(step);

  // --------------------------------------------------------------------
  // 3) Release the first block. Its bytes are zeroed, the block stays in
  //    the chain as a free block.
  // --------------------------------------------------------------------
  manager.release(first);
  if let Some(address) = first {
    let size = manager.size_of(first);
    let bytes = unsafe { std::slice::from_raw_parts(address.as_ptr(), size) };
    println!(
      "\n[3] Released first block, zeroed = {}",
      bytes.iter().all(|&byte| byte == 0)
    );
  }
  pause(step);

  // --------------------------------------------------------------------
  // 4) Release the three others and reserve 10 bytes: the 16 byte block is
  //    the best fit, neither the 8 nor the 32 byte block is picked.
  // --------------------------------------------------------------------
  manager.release(small);
  manager.release(medium);
  manager.release(large);

  let reused = manager.reserve(10);
  println!(
    "\n[4] reserve(10) reused the 16 byte block? {}",
    if reused == medium { "Yes" } else { "No" }
  );
  manager.print_memory_status();
  pause(step);

  // --------------------------------------------------------------------
  // 5) Tear everything down. All addresses above are now dangling.
  // --------------------------------------------------------------------
  manager.flush_memory();
  println!("\n[5] Flushed memory");
  manager.print_memory_status();
}
