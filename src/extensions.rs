use log::trace;

/// Hooks for loading settings and persisting usage across runs.
///
/// None of these are supported yet: every method succeeds and does nothing.
/// The allocator never calls them itself, they exist for applications that
/// already wire them into their startup and shutdown paths.
pub trait Extensions {
  fn load_from_config(&mut self) {
    trace!("load_from_config: not yet supported");
  }

  fn load_memory_cache(&mut self) {
    trace!("load_memory_cache: not yet supported");
  }

  fn save_memory_cache(&mut self) {
    trace!("save_memory_cache: not yet supported");
  }
}
