//! Ecosystem Constants for the entity registry
//!
//! This module centralizes the pallet identifiers and the design parameters shared by the
//! ownership ledger and the lifecycle engine.
//!
//! Runtimes wire these values into the pallets' `Config` constants, so a change here is the
//! single place where the registry's timing and economics are tuned.

/// Balance type alias for consistency across the registry
pub type Balance = u128;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// Used with `PalletId::into_account_truncating()` to derive the account that collects
/// creation fees and pays spawn rewards.
pub mod pallet_ids {
  /// Entity lifecycle pallet ID (fee escrow and reward payer)
  pub const ENTITY_LIFECYCLE_PALLET_ID: &[u8; 8] = b"entlife0";
}

/// Registry parameters defining the spawn timeline and the fee schedule.
pub mod params {
  use super::Balance;

  /// Blocks between creation and spawn eligibility (the ready window).
  ///
  /// The record's randomness is keyed to this future block, so the creator cannot know the
  /// seed when the creation parameters are fixed.
  pub const READY_DELAY: u32 = 12;

  /// Blocks after the scheduled block during which its seed stays retrievable.
  ///
  /// Past this window the block-hash history no longer covers the scheduled block and the
  /// record is spawned without genes.
  pub const EXPIRY_WINDOW: u32 = 255;

  /// Maximum length in bytes of an entity name; longer names are truncated.
  pub const MAX_NAME_LEN: u32 = 32;

  /// Fee charged on entity creation (0.01 in base units of 10^12).
  pub const CREATION_FEE: Balance = 10_000_000_000;

  /// Reward paid to whoever spawns the queue head (half of the creation fee).
  pub const SPAWN_REWARD: Balance = CREATION_FEE / 2;

  /// Upper bound for the opaque payload forwarded by a safe transfer.
  pub const MAX_TRANSFER_DATA_LEN: u32 = 1024;
}
