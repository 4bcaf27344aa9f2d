use crate::*;
use alloc::vec;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_system::{self, RawOrigin};
use polkadot_sdk::sp_runtime::traits::{Hash, One};

fn funded<T: Config>(name: &'static str, index: u32) -> T::AccountId {
  let who: T::AccountId = account(name, index, 0);
  let amount = T::CreationFee::get()
    .saturating_mul(10u32.into())
    .saturating_add(T::Currency::minimum_balance());
  let _ = T::Currency::mint_into(&who, amount);
  who
}

fn created<T: Config>(owner: &T::AccountId, parent_a: EntityId, parent_b: EntityId) -> EntityId {
  Pallet::<T>::do_create(owner, b"bench", parent_a, parent_b, T::CreationFee::get())
    .expect("funded owner can create")
}

/// Jump to the entity's scheduled block with its seed recorded
fn advance_to_ready<T: Config>(id: EntityId) {
  let ready_at = Entities::<T>::get(id)
    .and_then(|record| record.birth.scheduled_block())
    .expect("entity is scheduled");
  let parent = ready_at.saturating_sub(One::one());
  frame_system::BlockHash::<T>::insert(parent, T::Hashing::hash_of(&parent));
  frame_system::Pallet::<T>::set_block_number(ready_at);
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn create_entity() {
    let caller = funded::<T>("caller", 0);
    let parent_a = created::<T>(&caller, 0, 0);
    let parent_b = created::<T>(&caller, 0, 0);
    let name = vec![b'n'; MAX_NAME_LEN as usize];

    // Bred entities additionally look up both parents
    #[extrinsic_call]
    create_entity(
      RawOrigin::Signed(caller.clone()),
      name,
      parent_a,
      parent_b,
      T::CreationFee::get(),
    );

    assert_eq!(Pallet::<T>::pending_spawns(), 3);
  }

  #[benchmark]
  fn spawn_entity() {
    let owner = funded::<T>("owner", 0);
    let parent_a = created::<T>(&owner, 0, 0);
    let parent_b = created::<T>(&owner, 0, 0);
    advance_to_ready::<T>(parent_b);
    Pallet::<T>::do_spawn(&owner).expect("first parent spawns");
    Pallet::<T>::do_spawn(&owner).expect("second parent spawns");

    let child = created::<T>(&owner, parent_a, parent_b);
    advance_to_ready::<T>(child);
    let spawner: T::AccountId = whitelisted_caller();

    #[extrinsic_call]
    spawn_entity(RawOrigin::Signed(spawner));

    assert_eq!(Pallet::<T>::pending_spawns(), 0);
    assert!(
      Entities::<T>::get(child)
        .is_some_and(|record| record.birth.is_spawned())
    );
  }

  #[benchmark]
  fn name_entity() {
    let owner = funded::<T>("owner", 0);
    let id = created::<T>(&owner, 0, 0);
    let name = vec![b'r'; MAX_NAME_LEN as usize];

    #[extrinsic_call]
    name_entity(RawOrigin::Signed(owner), id, name.clone());

    assert_eq!(Pallet::<T>::name_of(id).into_inner(), name);
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
