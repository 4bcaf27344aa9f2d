//! Entity Ledger Pallet
//!
//! Unique-owner registry for entities. Tracks the owner of every minted id, per-account
//! balances, single-entity approvals and blanket operator approvals, and answers capability
//! introspection queries.
//!
//! Other pallets mint through [`EntityLedger`]; accounts move entities with `transfer`,
//! `safe_transfer` and delegate rights with `approve` / `set_approval_for_all`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod receiver;
pub use receiver::EntityReceiver;

pub mod weights;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

use primitives::EntityId;

pub const LOG_TARGET: &str = "runtime::entity-ledger";

/// Ledger operations consumed by other pallets
pub trait EntityLedger<AccountId> {
  /// Mint the next sequential id to `owner`
  fn mint(owner: &AccountId) -> Result<EntityId, frame::deps::sp_runtime::DispatchError>;

  /// Current owner, `None` for ids that were never minted
  fn owner_of(id: EntityId) -> Option<AccountId>;
}

#[frame::pallet]
pub mod pallet {
  use super::{EntityLedger, EntityReceiver, LOG_TARGET, WeightInfo};
  use frame::deps::{frame_support::storage::with_storage_layer, sp_runtime::traits::TrailingZeroInput};
  use frame::prelude::*;
  use primitives::{
    EntityId, ErrorKind,
    interfaces::{InterfaceId, RECEIVER_ACCEPTANCE, SUPPORTED_INTERFACES},
  };

  #[pallet::config]
  pub trait Config: frame_system::Config {
    /// Acceptance hook for safe-transfer recipients
    type Receiver: EntityReceiver<Self::AccountId>;

    /// Maximum length of the payload forwarded by `safe_transfer_with_data`
    #[pallet::constant]
    type MaxDataLen: Get<u32>;

    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  #[pallet::storage_version(STORAGE_VERSION)]
  pub struct Pallet<T>(_);

  const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

  /// Number of entities minted so far; also the id of the latest one.
  #[pallet::storage]
  #[pallet::getter(fn total_minted)]
  pub type TotalMinted<T> = StorageValue<_, EntityId, ValueQuery>;

  #[pallet::storage]
  pub type Owners<T: Config> =
    StorageMap<_, Blake2_128Concat, EntityId, T::AccountId, OptionQuery>;

  /// Entities held per account. Always equals the number of `Owners` entries naming it.
  #[pallet::storage]
  pub type OwnedCount<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u64, ValueQuery>;

  /// Single-entity approvals, cleared on every transfer.
  #[pallet::storage]
  pub type Approvals<T: Config> =
    StorageMap<_, Blake2_128Concat, EntityId, T::AccountId, OptionQuery>;

  /// `(owner, operator) -> approved`
  #[pallet::storage]
  pub type Operators<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    T::AccountId,
    Blake2_128Concat,
    T::AccountId,
    bool,
    ValueQuery,
  >;

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
    /// Ownership moved. Mints are reported from the null account.
    Transfer {
      from: T::AccountId,
      to: T::AccountId,
      id: EntityId,
    },
    /// `approved` may now transfer `id` on behalf of `owner`.
    Approval {
      owner: T::AccountId,
      approved: T::AccountId,
      id: EntityId,
    },
    /// Operator rights over all of `owner`'s entities changed.
    ApprovalForAll {
      owner: T::AccountId,
      operator: T::AccountId,
      approved: bool,
    },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// The target account is the null account.
    NullAccount,
    /// Sender and recipient are the same account.
    SelfTransfer,
    /// The owner cannot be approved for its own entity.
    ApproveToOwner,
    /// An account cannot be its own operator.
    SelfOperator,
    /// No entity with this id has been minted.
    UnknownEntity,
    /// The entity is not owned by the given account.
    NotOwner,
    /// The caller is neither owner, approved account nor operator.
    NotAuthorized,
    /// The recipient did not return the acceptance signature.
    ReceiverRejected,
    /// The entity id space is exhausted.
    IdOverflow,
  }

  impl<T> Error<T> {
    pub fn kind(&self) -> ErrorKind {
      match self {
        Error::NotOwner | Error::NotAuthorized => ErrorKind::Authorization,
        Error::ReceiverRejected => ErrorKind::ReceiverRejected,
        Error::IdOverflow => ErrorKind::State,
        _ => ErrorKind::Validation,
      }
    }
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Move `id` from `from` to `to`.
    ///
    /// The caller must be `from`, hold the entity's approval, or be an operator of `from`.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::transfer())]
    pub fn transfer(
      origin: OriginFor<T>,
      from: T::AccountId,
      to: T::AccountId,
      id: EntityId,
    ) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::do_transfer(&caller, &from, &to, id)
    }

    /// `transfer`, then require the recipient to accept the entity.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::safe_transfer(0))]
    pub fn safe_transfer(
      origin: OriginFor<T>,
      from: T::AccountId,
      to: T::AccountId,
      id: EntityId,
    ) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::do_safe_transfer(&caller, &from, &to, id, &[])
    }

    /// `safe_transfer` forwarding an opaque payload to the recipient.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::safe_transfer(data.len() as u32))]
    pub fn safe_transfer_with_data(
      origin: OriginFor<T>,
      from: T::AccountId,
      to: T::AccountId,
      id: EntityId,
      data: BoundedVec<u8, T::MaxDataLen>,
    ) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::do_safe_transfer(&caller, &from, &to, id, &data)
    }

    /// Let `to` transfer `id`. Callable by the owner or one of its operators.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::approve())]
    pub fn approve(origin: OriginFor<T>, to: T::AccountId, id: EntityId) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::do_approve(&caller, &to, id)
    }

    /// Grant or revoke `operator`'s rights over all of the caller's entities.
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::set_approval_for_all())]
    pub fn set_approval_for_all(
      origin: OriginFor<T>,
      operator: T::AccountId,
      approved: bool,
    ) -> DispatchResult {
      let caller = ensure_signed(origin)?;
      Self::do_set_operator(&caller, &operator, approved)
    }
  }

  impl<T: Config> Pallet<T> {
    /// The account whose encoding is all zero bytes.
    pub fn null_account() -> T::AccountId {
      T::AccountId::decode(&mut TrailingZeroInput::zeroes())
        .expect("infinite length input; no invalid inputs for type; qed")
    }

    pub fn is_null(who: &T::AccountId) -> bool {
      who.using_encoded(|bytes| bytes.iter().all(|b| *b == 0))
    }

    pub fn owner_of(id: EntityId) -> Option<T::AccountId> {
      Owners::<T>::get(id)
    }

    /// Entities held by `who`. For the null account this is the total minted count.
    pub fn balance_of(who: &T::AccountId) -> u64 {
      if Self::is_null(who) {
        return TotalMinted::<T>::get();
      }
      OwnedCount::<T>::get(who)
    }

    pub fn get_approved(id: EntityId) -> Option<T::AccountId> {
      Approvals::<T>::get(id)
    }

    pub fn is_approved_for_all(owner: &T::AccountId, operator: &T::AccountId) -> bool {
      Operators::<T>::get(owner, operator)
    }

    /// Capability introspection over a fixed table; needs no storage.
    pub fn supports_interface(interface: InterfaceId) -> bool {
      SUPPORTED_INTERFACES.contains(&interface)
    }

    pub fn do_mint(owner: &T::AccountId) -> Result<EntityId, DispatchError> {
      ensure!(!Self::is_null(owner), Error::<T>::NullAccount);
      let id = TotalMinted::<T>::get()
        .checked_add(1)
        .ok_or(Error::<T>::IdOverflow)?;
      TotalMinted::<T>::put(id);
      Owners::<T>::insert(id, owner);
      OwnedCount::<T>::mutate(owner, |count| *count = count.saturating_add(1));
      log::debug!(target: LOG_TARGET, "minted entity {}", id);
      Self::deposit_event(Event::Transfer {
        from: Self::null_account(),
        to: owner.clone(),
        id,
      });
      Ok(id)
    }

    pub fn do_transfer(
      caller: &T::AccountId,
      from: &T::AccountId,
      to: &T::AccountId,
      id: EntityId,
    ) -> DispatchResult {
      let owner = Owners::<T>::get(id).ok_or(Error::<T>::UnknownEntity)?;
      ensure!(owner == *from, Error::<T>::NotOwner);
      ensure!(to != from, Error::<T>::SelfTransfer);
      ensure!(!Self::is_null(to), Error::<T>::NullAccount);
      ensure!(
        Self::is_authorized(caller, from, id),
        Error::<T>::NotAuthorized
      );
      Approvals::<T>::remove(id);
      OwnedCount::<T>::mutate(from, |count| *count = count.saturating_sub(1));
      OwnedCount::<T>::mutate(to, |count| *count = count.saturating_add(1));
      Owners::<T>::insert(id, to);
      Self::deposit_event(Event::Transfer {
        from: from.clone(),
        to: to.clone(),
        id,
      });
      Ok(())
    }

    /// Transfer and acceptance check as one unit: a rejection undoes the transfer.
    pub fn do_safe_transfer(
      caller: &T::AccountId,
      from: &T::AccountId,
      to: &T::AccountId,
      id: EntityId,
      data: &[u8],
    ) -> DispatchResult {
      with_storage_layer(|| {
        Self::do_transfer(caller, from, to, id)?;
        match T::Receiver::on_entity_received(caller, from, to, id, data) {
          None => Ok(()),
          Some(signature) if signature == RECEIVER_ACCEPTANCE => Ok(()),
          Some(signature) => {
            log::warn!(
              target: LOG_TARGET,
              "recipient rejected entity {} with signature {:?}",
              id,
              signature
            );
            Err(Error::<T>::ReceiverRejected.into())
          }
        }
      })
    }

    pub fn do_approve(caller: &T::AccountId, to: &T::AccountId, id: EntityId) -> DispatchResult {
      let owner = Owners::<T>::get(id).ok_or(Error::<T>::UnknownEntity)?;
      ensure!(!Self::is_null(to), Error::<T>::NullAccount);
      ensure!(*to != owner, Error::<T>::ApproveToOwner);
      ensure!(
        *caller == owner || Operators::<T>::get(&owner, caller),
        Error::<T>::NotAuthorized
      );
      Approvals::<T>::insert(id, to);
      Self::deposit_event(Event::Approval {
        owner,
        approved: to.clone(),
        id,
      });
      Ok(())
    }

    /// Unchanged values are accepted silently, without an event.
    pub fn do_set_operator(
      owner: &T::AccountId,
      operator: &T::AccountId,
      approved: bool,
    ) -> DispatchResult {
      ensure!(!Self::is_null(operator), Error::<T>::NullAccount);
      ensure!(operator != owner, Error::<T>::SelfOperator);
      if Operators::<T>::get(owner, operator) == approved {
        return Ok(());
      }
      if approved {
        Operators::<T>::insert(owner, operator, true);
      } else {
        Operators::<T>::remove(owner, operator);
      }
      Self::deposit_event(Event::ApprovalForAll {
        owner: owner.clone(),
        operator: operator.clone(),
        approved,
      });
      Ok(())
    }

    fn is_authorized(caller: &T::AccountId, owner: &T::AccountId, id: EntityId) -> bool {
      caller == owner
        || Approvals::<T>::get(id).as_ref() == Some(caller)
        || Operators::<T>::get(owner, caller)
    }

    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), polkadot_sdk::sp_runtime::TryRuntimeError> {
      let minted = TotalMinted::<T>::get();
      let held = OwnedCount::<T>::iter_values().fold(0u64, |acc, n| acc.saturating_add(n));
      ensure!(held == minted, "balances do not sum to the minted count");
      let mut owners = 0u64;
      for (_, owner) in Owners::<T>::iter() {
        ensure!(!Self::is_null(&owner), "entity owned by the null account");
        owners = owners.saturating_add(1);
      }
      ensure!(owners == minted, "minted id without an owner");
      Ok(())
    }
  }

  impl<T: Config> EntityLedger<T::AccountId> for Pallet<T> {
    fn mint(owner: &T::AccountId) -> Result<EntityId, DispatchError> {
      Self::do_mint(owner)
    }

    fn owner_of(id: EntityId) -> Option<T::AccountId> {
      Owners::<T>::get(id)
    }
  }
}
