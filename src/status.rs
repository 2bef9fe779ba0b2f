use core::fmt;

/// One block as seen by a [`MemoryStatus`] snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockStatus {
  pub address: *const u8,
  pub size: usize,
  pub is_free: bool,
}

/// Snapshot of every block in a registry, in chain order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStatus {
  blocks: Vec<BlockStatus>,
}

impl MemoryStatus {
  pub(crate) fn new(blocks: Vec<BlockStatus>) -> Self {
    Self { blocks }
  }

  pub fn blocks(&self) -> &[BlockStatus] {
    &self.blocks
  }

  /// Number of blocks currently handed out.
  pub fn in_use(&self) -> usize {
    self.blocks.iter().filter(|block| !block.is_free).count()
  }

  /// Number of blocks ever created since the last teardown.
  pub fn total(&self) -> usize {
    self.blocks.len()
  }
}

impl fmt::Display for MemoryStatus {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>,
  ) -> fmt::Result {
    for block in &self.blocks {
      writeln!(
        f,
        "[Block] Address: {:p} - Size: {} - State: {}",
        block.address,
        block.size,
        if block.is_free { "Free" } else { "In use" }
      )?;
    }

    writeln!(f)?;
    writeln!(f, "Memory blocks currently in use: {}", self.in_use())?;
    write!(f, "Total allocated blocks: {}", self.total())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_counts_and_rendering() {
    let status = MemoryStatus::new(vec![
      BlockStatus {
        address: 0x1000 as *const u8,
        size: 24,
        is_free: false,
      },
      BlockStatus {
        address: 0x2000 as *const u8,
        size: 8,
        is_free: true,
      },
    ]);

    assert_eq!(status.in_use(), 1);
    assert_eq!(status.total(), 2);

    let text = status.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "[Block] Address: 0x1000 - Size: 24 - State: In use");
    assert_eq!(lines[1], "[Block] Address: 0x2000 - Size: 8 - State: Free");
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "Memory blocks currently in use: 1");
    assert_eq!(lines[4], "Total allocated blocks: 2");
  }

  #[test]
  fn test_empty_status() {
    let status = MemoryStatus::default();

    assert_eq!(status.in_use(), 0);
    assert_eq!(status.total(), 0);
    assert!(status.to_string().ends_with("Total allocated blocks: 0"));
  }
}
