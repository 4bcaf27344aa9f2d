//! Capability signatures
//!
//! Four-byte identifiers answered by the ledger's capability introspection, and the value a
//! recipient returns to accept a safe transfer. Values follow the ERC-165 / ERC-721 selectors
//! so off-chain tooling can reuse them unchanged.

/// A four-byte capability signature.
pub type InterfaceId = [u8; 4];

/// Basic capability introspection (`supportsInterface(bytes4)`).
pub const INTROSPECTION_INTERFACE: InterfaceId = [0x01, 0xff, 0xc9, 0xa7];

/// Ownership-ledger operations (balance, owner, transfers, approvals).
pub const OWNERSHIP_LEDGER_INTERFACE: InterfaceId = [0x80, 0xac, 0x58, 0xcd];

/// Signature that is never a valid capability.
pub const INVALID_INTERFACE: InterfaceId = [0xff, 0xff, 0xff, 0xff];

/// Return value by which a safe-transfer recipient accepts an entity.
pub const RECEIVER_ACCEPTANCE: InterfaceId = [0x15, 0x0b, 0x7a, 0x02];

/// Capabilities the ledger reports as supported. Fixed at compile time.
pub const SUPPORTED_INTERFACES: [InterfaceId; 2] =
  [INTROSPECTION_INTERFACE, OWNERSHIP_LEDGER_INTERFACE];
