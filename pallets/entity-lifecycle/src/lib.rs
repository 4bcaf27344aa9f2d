//! Entity Lifecycle Pallet
//!
//! Two-phase creation of entities on top of the entity ledger.
//!
//! `create_entity` charges the creation fee, mints an id through the ledger, records lineage
//! and name, and schedules the entity `ReadyDelay` blocks ahead by appending it to a FIFO spawn
//! queue. Nothing about the entity's genes is decided at that point.
//!
//! `spawn_entity` is open to anyone: once the head of the queue is ready it derives the genes
//! from the seed of the scheduled block, stamps the spawn time and pays the caller a reward.
//! Entities spawned after `ExpiryWindow` blocks (or whose block seed is no longer available)
//! keep all-zero genes for good.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod oracle;
pub use oracle::{BlockSeedOracle, SystemBlockSeeds};

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

use frame::prelude::*;

use alloc::vec::Vec;
use frame::deps::{
  frame_support::{
    PalletId,
    storage::with_storage_layer,
    traits::{
      UnixTime,
      fungible::{Inspect, Mutate},
      tokens::Preservation,
    },
  },
  sp_runtime::traits::{AccountIdConversion, Saturating, Zero},
};
use pallet_entity_ledger::EntityLedger;
use primitives::{
  BirthMarker, EntityId, EntityInfo, ErrorKind, Genes, Lineage, LineageError, UNSPAWNED_GENES,
  genetics::{combine_genes, rarity_genes},
  params::MAX_NAME_LEN,
  truncate_name,
};

pub const LOG_TARGET: &str = "runtime::entity-lifecycle";

#[frame::pallet]
pub mod pallet {
  use super::WeightInfo;
  use super::*;

  pub type BalanceOf<T> =
    <<T as Config>::Currency as Inspect<<T as frame_system::Config>::AccountId>>::Balance;

  /// Stored entity name, at most `MAX_NAME_LEN` bytes
  pub type EntityName = BoundedVec<u8, ConstU32<MAX_NAME_LEN>>;

  pub type EntityRecordOf<T> = EntityRecord<BlockNumberFor<T>>;

  pub type EntityInfoOf<T> =
    EntityInfo<<T as frame_system::Config>::AccountId, BlockNumberFor<T>, EntityName>;

  /// Lifecycle data of one entity. Ownership lives in the ledger.
  #[derive(Clone, Debug, Decode, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo)]
  pub struct EntityRecord<BlockNumber> {
    pub lineage: Lineage,
    pub birth: BirthMarker<BlockNumber>,
    pub genes: Genes,
  }

  #[pallet::config]
  pub trait Config: frame_system::Config {
    /// Native currency used for the creation fee and the spawn reward
    type Currency: Mutate<Self::AccountId>;

    /// Ownership ledger entities are minted into
    type Ledger: EntityLedger<Self::AccountId>;

    /// Current block and per-block seeds
    type BlockSeeds: BlockSeedOracle<BlockNumberFor<Self>, Self::Hash>;

    /// Wall clock for spawn timestamps
    type UnixTime: UnixTime;

    /// Price of creating an entity
    #[pallet::constant]
    type CreationFee: Get<BalanceOf<Self>>;

    /// Paid from the pallet account to whoever spawns an entity
    #[pallet::constant]
    type SpawnReward: Get<BalanceOf<Self>>;

    /// Blocks between creation and the earliest spawn
    #[pallet::constant]
    type ReadyDelay: Get<BlockNumberFor<Self>>;

    /// Blocks after the scheduled block during which a seed is still derived
    #[pallet::constant]
    type ExpiryWindow: Get<BlockNumberFor<Self>>;

    /// Holds collected fees and pays rewards
    #[pallet::constant]
    type PalletId: Get<PalletId>;

    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  #[pallet::storage_version(STORAGE_VERSION)]
  pub struct Pallet<T>(_);

  const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

  #[pallet::storage]
  pub type Entities<T: Config> =
    StorageMap<_, Blake2_128Concat, EntityId, EntityRecordOf<T>, OptionQuery>;

  #[pallet::storage]
  pub type Names<T> = StorageMap<_, Blake2_128Concat, EntityId, EntityName, ValueQuery>;

  /// Queue slot -> entity id. Slots in `QueueHead..QueueTail` are occupied.
  #[pallet::storage]
  pub type SpawnQueue<T> = StorageMap<_, Twox64Concat, u64, EntityId, OptionQuery>;

  /// Slot of the next entity to spawn
  #[pallet::storage]
  #[pallet::getter(fn queue_head)]
  pub type QueueHead<T> = StorageValue<_, u64, ValueQuery>;

  /// Slot the next created entity is queued at
  #[pallet::storage]
  #[pallet::getter(fn queue_tail)]
  pub type QueueTail<T> = StorageValue<_, u64, ValueQuery>;

  #[pallet::hooks]
  impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
    #[cfg(feature = "try-runtime")]
    fn try_state(_n: BlockNumberFor<T>) -> Result<(), polkadot_sdk::sp_runtime::TryRuntimeError> {
      Self::do_try_state()
    }
  }

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// Entity created and queued; it can be spawned from `ready_at` on.
    EntityCreated {
      owner: T::AccountId,
      id: EntityId,
      parent_a: EntityId,
      parent_b: EntityId,
      ready_at: BlockNumberFor<T>,
    },
    /// Head of the queue spawned; `spawner` collected the reward.
    Spawned {
      owner: T::AccountId,
      spawner: T::AccountId,
      id: EntityId,
    },
    /// Name set by the owner. Reported on every rename, even an unchanged one.
    NameChanged {
      owner: T::AccountId,
      id: EntityId,
      name: EntityName,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Payment is below the creation fee
    InsufficientPayment,
    /// Only one of the two parents is set
    HalfLineage,
    /// Both parents are the same entity
    DuplicateParent,
    /// A parent is not owned by the caller
    ParentNotOwned,
    /// No entity with this id exists
    UnknownEntity,
    /// Caller does not own the entity
    NotOwner,
    /// Nothing is waiting to be spawned
    QueueEmpty,
    /// The entity at the head of the queue is not ready yet
    NotReady,
    /// The queued entity has already been spawned
    AlreadySpawned,
    /// Queue slots are exhausted
    QueueOverflow,
  }

  impl<T> Error<T> {
    pub fn kind(&self) -> ErrorKind {
      match self {
        Error::NotOwner => ErrorKind::Authorization,
        Error::QueueEmpty | Error::NotReady | Error::AlreadySpawned | Error::QueueOverflow => {
          ErrorKind::State
        }
        _ => ErrorKind::Validation,
      }
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Create an entity and schedule its spawn.
    ///
    /// `payment` is the most the caller agrees to pay. It must cover `CreationFee`, and only
    /// the fee is ever debited, so a larger `payment` costs the same and needs no refund.
    ///
    /// Parents are either both zero or two distinct entities owned by the caller. Names
    /// longer than `MAX_NAME_LEN` bytes are truncated.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::create_entity())]
    pub fn create_entity(
      origin: OriginFor<T>,
      name: Vec<u8>,
      parent_a: EntityId,
      parent_b: EntityId,
      payment: BalanceOf<T>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_create(&who, &name, parent_a, parent_b, payment)?;
      Ok(())
    }

    /// Spawn the entity at the head of the queue and collect the reward.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::spawn_entity())]
    pub fn spawn_entity(origin: OriginFor<T>) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_spawn(&who)?;
      Ok(())
    }

    /// Rename an entity. Owner only.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::name_entity())]
    pub fn name_entity(origin: OriginFor<T>, id: EntityId, name: Vec<u8>) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Self::do_rename(&who, id, &name)
    }
  }

  impl<T: Config> Pallet<T> {
    /// Account holding collected fees and paying spawn rewards
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    pub fn name_of(id: EntityId) -> EntityName {
      Names::<T>::get(id)
    }

    /// Seconds since the entity spawned, 0 while it is still scheduled
    pub fn age_of(id: EntityId) -> u64 {
      Entities::<T>::get(id)
        .and_then(|record| record.birth.spawned_at())
        .map(|spawned| T::UnixTime::now().as_secs().saturating_sub(spawned))
        .unwrap_or_default()
    }

    /// `(0, 0)` for entities without lineage and for unknown ids
    pub fn parents_of(id: EntityId) -> (EntityId, EntityId) {
      Entities::<T>::get(id)
        .map(|record| record.lineage.parents())
        .unwrap_or_default()
    }

    pub fn genes_of(id: EntityId) -> Genes {
      Entities::<T>::get(id)
        .map(|record| record.genes)
        .unwrap_or(UNSPAWNED_GENES)
    }

    pub fn get_entity(id: EntityId) -> Option<EntityInfoOf<T>> {
      let record = Entities::<T>::get(id)?;
      let owner = T::Ledger::owner_of(id)?;
      let (parent_a, parent_b) = record.lineage.parents();
      Some(EntityInfo {
        owner,
        birth: record.birth,
        parent_a,
        parent_b,
        name: Names::<T>::get(id),
        genes: record.genes,
      })
    }

    /// Entities at the front of the queue that can be spawned in the current block
    pub fn spawn_count() -> u64 {
      let now = T::BlockSeeds::current_block();
      let mut count = 0u64;
      for slot in QueueHead::<T>::get()..QueueTail::<T>::get() {
        let ready = SpawnQueue::<T>::get(slot)
          .and_then(|id| Entities::<T>::get(id))
          .and_then(|record| record.birth.scheduled_block())
          .is_some_and(|ready_at| ready_at <= now);
        if !ready {
          break;
        }
        count = count.saturating_add(1);
      }
      count
    }

    /// Entities waiting to be spawned, ready or not
    pub fn pending_spawns() -> u64 {
      QueueTail::<T>::get().saturating_sub(QueueHead::<T>::get())
    }

    /// Entity the next `spawn_entity` call resolves
    pub fn next_to_spawn() -> Option<EntityId> {
      SpawnQueue::<T>::get(QueueHead::<T>::get())
    }

    pub fn do_create(
      who: &T::AccountId,
      raw_name: &[u8],
      parent_a: EntityId,
      parent_b: EntityId,
      payment: BalanceOf<T>,
    ) -> Result<EntityId, DispatchError> {
      let fee = T::CreationFee::get();
      ensure!(payment >= fee, Error::<T>::InsufficientPayment);
      let lineage = Lineage::from_parents(parent_a, parent_b).map_err(|e| match e {
        LineageError::HalfLineage => Error::<T>::HalfLineage,
        LineageError::SameParent => Error::<T>::DuplicateParent,
      })?;
      if let Lineage::Bred { parent_a, parent_b } = lineage {
        ensure!(
          Self::owned_by(parent_a, who) && Self::owned_by(parent_b, who),
          Error::<T>::ParentNotOwned
        );
      }

      with_storage_layer(|| {
        if !fee.is_zero() {
          T::Currency::transfer(who, &Self::account_id(), fee, Preservation::Expendable)?;
        }
        let id = T::Ledger::mint(who)?;
        let ready_at = T::BlockSeeds::current_block().saturating_add(T::ReadyDelay::get());
        Entities::<T>::insert(
          id,
          EntityRecord {
            lineage,
            birth: BirthMarker::Scheduled(ready_at),
            genes: UNSPAWNED_GENES,
          },
        );
        Names::<T>::insert(id, Self::stored_name(raw_name));
        Self::enqueue(id)?;

        Self::deposit_event(Event::EntityCreated {
          owner: who.clone(),
          id,
          parent_a,
          parent_b,
          ready_at,
        });
        Ok(id)
      })
    }

    /// Spawn the head of the queue.
    ///
    /// Every check and the reward payment happen before the first write, so a failure leaves
    /// the queue and the record untouched.
    pub fn do_spawn(spawner: &T::AccountId) -> Result<EntityId, DispatchError> {
      let head = QueueHead::<T>::get();
      ensure!(head < QueueTail::<T>::get(), Error::<T>::QueueEmpty);
      let id = SpawnQueue::<T>::get(head).ok_or(Error::<T>::QueueEmpty)?;
      let mut record = Entities::<T>::get(id).ok_or(Error::<T>::UnknownEntity)?;
      let scheduled = record
        .birth
        .scheduled_block()
        .ok_or(Error::<T>::AlreadySpawned)?;
      let now = T::BlockSeeds::current_block();
      ensure!(now >= scheduled, Error::<T>::NotReady);
      let owner = T::Ledger::owner_of(id).ok_or(Error::<T>::UnknownEntity)?;

      let genes = Self::derive_genes(id, spawner, &record.lineage, scheduled, now);

      let reward = T::SpawnReward::get();
      if !reward.is_zero() {
        T::Currency::transfer(
          &Self::account_id(),
          spawner,
          reward,
          Preservation::Expendable,
        )?;
      }

      SpawnQueue::<T>::remove(head);
      QueueHead::<T>::put(head.saturating_add(1));
      if let Some(genes) = genes {
        record.genes = genes;
      }
      record.birth = BirthMarker::SpawnedAt(T::UnixTime::now().as_secs());
      Entities::<T>::insert(id, record);

      log::debug!(target: LOG_TARGET, "spawned entity {}", id);
      Self::deposit_event(Event::Spawned {
        owner,
        spawner: spawner.clone(),
        id,
      });
      Ok(id)
    }

    pub fn do_rename(who: &T::AccountId, id: EntityId, raw_name: &[u8]) -> DispatchResult {
      let owner = T::Ledger::owner_of(id).ok_or(Error::<T>::UnknownEntity)?;
      ensure!(owner == *who, Error::<T>::NotOwner);
      let name = Self::stored_name(raw_name);
      Names::<T>::insert(id, &name);
      Self::deposit_event(Event::NameChanged { owner, id, name });
      Ok(())
    }

    /// Genes for a spawn in block `now`, `None` once the scheduled block's seed has expired.
    fn derive_genes(
      id: EntityId,
      spawner: &T::AccountId,
      lineage: &Lineage,
      scheduled: BlockNumberFor<T>,
      now: BlockNumberFor<T>,
    ) -> Option<Genes> {
      if now > scheduled.saturating_add(T::ExpiryWindow::get()) {
        log::warn!(target: LOG_TARGET, "entity {} spawned past its expiry window", id);
        return None;
      }
      let Some(block_seed) = T::BlockSeeds::block_seed(scheduled) else {
        log::warn!(target: LOG_TARGET, "no seed for the scheduled block of entity {}", id);
        return None;
      };
      let seed = frame::hashing::blake2_256(&(id, spawner, block_seed).encode());
      Some(match *lineage {
        Lineage::Genesis => rarity_genes(&seed),
        Lineage::Bred { parent_a, parent_b } => {
          combine_genes(&Self::genes_of(parent_a), &Self::genes_of(parent_b), &seed)
        }
      })
    }

    fn enqueue(id: EntityId) -> DispatchResult {
      let tail = QueueTail::<T>::get();
      let next = tail.checked_add(1).ok_or(Error::<T>::QueueOverflow)?;
      SpawnQueue::<T>::insert(tail, id);
      QueueTail::<T>::put(next);
      Ok(())
    }

    fn owned_by(id: EntityId, who: &T::AccountId) -> bool {
      T::Ledger::owner_of(id).as_ref() == Some(who)
    }

    fn stored_name(raw: &[u8]) -> EntityName {
      EntityName::truncate_from(truncate_name(raw).to_vec())
    }

    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), polkadot_sdk::sp_runtime::TryRuntimeError> {
      let head = QueueHead::<T>::get();
      let tail = QueueTail::<T>::get();
      ensure!(head <= tail, "queue head past its tail");
      let mut queued = 0u64;
      for (slot, id) in SpawnQueue::<T>::iter() {
        ensure!(slot >= head && slot < tail, "queue slot outside head..tail");
        let record = Entities::<T>::get(id).ok_or("queued entity without a record")?;
        ensure!(!record.birth.is_spawned(), "queued entity already spawned");
        queued = queued.saturating_add(1);
      }
      ensure!(queued == tail - head, "queue has empty slots");
      Ok(())
    }
  }

  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    #[serde(skip)]
    pub _marker: core::marker::PhantomData<T>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      // Fees accumulate here; the account must survive paying out its last reward
      frame_system::Pallet::<T>::inc_providers(&Pallet::<T>::account_id());
    }
  }
}
