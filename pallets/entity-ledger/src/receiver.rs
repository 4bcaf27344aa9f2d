//! Recipient acceptance check for safe transfers
//!
//! The runtime decides which accounts carry executable code and how they answer; the ledger
//! only compares the answer with [`RECEIVER_ACCEPTANCE`](primitives::interfaces::RECEIVER_ACCEPTANCE).

use primitives::{EntityId, interfaces::InterfaceId};

/// Acceptance hook queried after a safe transfer has moved the entity.
///
/// Returns `None` when `to` has no executable code (a plain account always accepts), or the
/// signature the recipient's code returned. The entity is already owned by `to` while the
/// hook runs; a wrong signature rolls the whole transfer back.
pub trait EntityReceiver<AccountId> {
  fn on_entity_received(
    operator: &AccountId,
    from: &AccountId,
    to: &AccountId,
    id: EntityId,
    data: &[u8],
  ) -> Option<InterfaceId>;
}

/// No account has code: every recipient accepts.
impl<AccountId> EntityReceiver<AccountId> for () {
  fn on_entity_received(
    _: &AccountId,
    _: &AccountId,
    _: &AccountId,
    _: EntityId,
    _: &[u8],
  ) -> Option<InterfaceId> {
    None
  }
}
