use crate::*;
use alloc::vec;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::{BoundedVec, traits::Get};
use polkadot_sdk::frame_system::RawOrigin;

fn minted_to<T: Config>(owner: &T::AccountId) -> EntityId {
  Pallet::<T>::do_mint(owner).expect("mint to a funded account succeeds")
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn transfer() {
    let owner: T::AccountId = account("owner", 0, 0);
    let operator: T::AccountId = whitelisted_caller();
    let recipient: T::AccountId = account("recipient", 0, 0);
    let id = minted_to::<T>(&owner);
    // Worst case: caller is authorized only through the operator table
    Pallet::<T>::do_set_operator(&owner, &operator, true).expect("operator setup failed");

    #[extrinsic_call]
    transfer(RawOrigin::Signed(operator), owner, recipient.clone(), id);

    assert_eq!(Pallet::<T>::owner_of(id), Some(recipient));
  }

  #[benchmark]
  fn safe_transfer(d: Linear<0, { T::MaxDataLen::get() }>) {
    let owner: T::AccountId = whitelisted_caller();
    let recipient: T::AccountId = account("recipient", 0, 0);
    let id = minted_to::<T>(&owner);
    let data: BoundedVec<u8, T::MaxDataLen> =
      BoundedVec::try_from(vec![7u8; d as usize]).expect("length within bound");

    #[extrinsic_call]
    safe_transfer_with_data(
      RawOrigin::Signed(owner.clone()),
      owner,
      recipient.clone(),
      id,
      data,
    );

    assert_eq!(Pallet::<T>::owner_of(id), Some(recipient));
  }

  #[benchmark]
  fn approve() {
    let owner: T::AccountId = whitelisted_caller();
    let spender: T::AccountId = account("spender", 0, 0);
    let id = minted_to::<T>(&owner);

    #[extrinsic_call]
    approve(RawOrigin::Signed(owner), spender.clone(), id);

    assert_eq!(Pallet::<T>::get_approved(id), Some(spender));
  }

  #[benchmark]
  fn set_approval_for_all() {
    let owner: T::AccountId = whitelisted_caller();
    let operator: T::AccountId = account("operator", 0, 0);

    #[extrinsic_call]
    set_approval_for_all(RawOrigin::Signed(owner.clone()), operator.clone(), true);

    assert!(Pallet::<T>::is_approved_for_all(&owner, &operator));
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
