//! Block seeds
//!
//! Spawn randomness is keyed off the block an entity was scheduled for. A seed only exists for
//! a bounded trailing window of blocks; outside it the oracle answers `None` and the engine
//! treats the spawn as expired.

use core::marker::PhantomData;
use frame::deps::sp_runtime::traits::{One, Saturating, Zero};
use frame::prelude::*;

/// Current block and per-block seeds, the latter available for a trailing window only.
pub trait BlockSeedOracle<BlockNumber, Hash> {
  /// Monotonic number of the block being executed.
  fn current_block() -> BlockNumber;

  /// Seed identifying `block`, `None` if it lies in the future or outside the window.
  fn block_seed(block: BlockNumber) -> Option<Hash>;
}

/// Seeds from `frame_system`'s block hash history.
///
/// The seed of block `n` is the hash of block `n - 1`, i.e. the parent hash already known
/// while `n` is being built. History reaches back `BlockHashCount` blocks; pruned or never
/// recorded hashes read as zero and are reported as unavailable.
pub struct SystemBlockSeeds<T>(PhantomData<T>);

impl<T: frame_system::Config> BlockSeedOracle<BlockNumberFor<T>, T::Hash> for SystemBlockSeeds<T> {
  fn current_block() -> BlockNumberFor<T> {
    frame_system::Pallet::<T>::block_number()
  }

  fn block_seed(block: BlockNumberFor<T>) -> Option<T::Hash> {
    let now = Self::current_block();
    if block.is_zero() || block > now {
      return None;
    }
    if now.saturating_sub(block) >= T::BlockHashCount::get() {
      return None;
    }
    let hash = frame_system::BlockHash::<T>::get(block.saturating_sub(One::one()));
    (hash != T::Hash::default()).then_some(hash)
  }
}
