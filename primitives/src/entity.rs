use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::params::MAX_NAME_LEN;

/// Sequential identifier of a minted entity. Zero is never assigned and doubles as the
/// "no parent" sentinel on the external interface.
pub type EntityId = u64;

/// Number of byte-valued genes carried by every entity.
pub const GENE_COUNT: usize = 32;

/// The 32 gene bytes of an entity.
pub type Genes = [u8; GENE_COUNT];

/// Genes of a record that has not been spawned, or whose seed expired.
pub const UNSPAWNED_GENES: Genes = [0u8; GENE_COUNT];

/// Parentage of an entity, fixed at creation.
///
/// Lineage is either fully absent or names two distinct parents; a half-present pair is not
/// representable.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum Lineage {
  /// No parents; genes come from the rarity distribution
  #[default]
  Genesis,
  /// Two distinct parents; genes are bounded by theirs
  Bred {
    parent_a: EntityId,
    parent_b: EntityId,
  },
}

/// Reasons a parent pair cannot form a lineage.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineageError {
  /// Exactly one of the two parents is zero
  HalfLineage,
  /// Both parents name the same entity
  SameParent,
}

impl Lineage {
  /// Build a lineage from the external `(parent_a, parent_b)` pair where `(0, 0)` means none.
  pub fn from_parents(parent_a: EntityId, parent_b: EntityId) -> Result<Self, LineageError> {
    match (parent_a, parent_b) {
      (0, 0) => Ok(Lineage::Genesis),
      (0, _) | (_, 0) => Err(LineageError::HalfLineage),
      (a, b) if a == b => Err(LineageError::SameParent),
      (parent_a, parent_b) => Ok(Lineage::Bred { parent_a, parent_b }),
    }
  }

  /// The external pair view, `(0, 0)` for genesis entities.
  pub fn parents(&self) -> (EntityId, EntityId) {
    match *self {
      Lineage::Genesis => (0, 0),
      Lineage::Bred { parent_a, parent_b } => (parent_a, parent_b),
    }
  }

  pub fn is_genesis(&self) -> bool {
    matches!(self, Lineage::Genesis)
  }
}

/// Birth state of an entity.
///
/// Before spawning the record waits for a scheduled block; spawning replaces that with the
/// wall-clock time of the spawn. The transition happens exactly once.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum BirthMarker<BlockNumber> {
  /// Spawn becomes possible at this block
  Scheduled(BlockNumber),
  /// Spawned at this unix time, in seconds
  SpawnedAt(u64),
}

impl<BlockNumber: Copy> BirthMarker<BlockNumber> {
  pub fn scheduled_block(&self) -> Option<BlockNumber> {
    match *self {
      BirthMarker::Scheduled(block) => Some(block),
      BirthMarker::SpawnedAt(_) => None,
    }
  }

  pub fn spawned_at(&self) -> Option<u64> {
    match *self {
      BirthMarker::Scheduled(_) => None,
      BirthMarker::SpawnedAt(moment) => Some(moment),
    }
  }

  pub fn is_spawned(&self) -> bool {
    matches!(self, BirthMarker::SpawnedAt(_))
  }
}

/// Aggregate view of one entity as returned by the lifecycle engine's `get_entity`.
#[derive(Clone, Debug, Decode, Encode, Eq, PartialEq, TypeInfo)]
pub struct EntityInfo<AccountId, BlockNumber, Name> {
  pub owner: AccountId,
  pub birth: BirthMarker<BlockNumber>,
  pub parent_a: EntityId,
  pub parent_b: EntityId,
  pub name: Name,
  pub genes: Genes,
}

/// Coarse classification of every registry failure.
///
/// Each pallet error maps onto one of these so callers can react to the class of failure
/// without matching on pallet-specific variants.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum ErrorKind {
  /// Malformed or disallowed parameters
  Validation,
  /// Caller lacks owner, approval or operator rights
  Authorization,
  /// The registry is not in a state that allows the operation yet
  State,
  /// A safe-transfer recipient did not accept the entity
  ReceiverRejected,
}

/// Cut a raw name down to the stored maximum. Truncation is silent.
pub fn truncate_name(raw: &[u8]) -> &[u8] {
  let len = raw.len().min(MAX_NAME_LEN as usize);
  &raw[..len]
}
