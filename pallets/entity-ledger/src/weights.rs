#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn transfer() -> Weight;
	fn safe_transfer(d: u32, ) -> Weight;
	fn approve() -> Weight;
	fn set_approval_for_all() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: `EntityLedger::Owners` (r:1 w:1)
	/// Storage: `EntityLedger::Approvals` (r:1 w:1)
	/// Storage: `EntityLedger::Operators` (r:1 w:0)
	/// Storage: `EntityLedger::OwnedCount` (r:2 w:2)
	fn transfer() -> Weight {
		Weight::from_parts(25_000_000, 3600)
			.saturating_add(T::DbWeight::get().reads(5))
			.saturating_add(T::DbWeight::get().writes(4))
	}
	/// The range of component `d` is `[0, 1024]`.
	fn safe_transfer(d: u32, ) -> Weight {
		Weight::from_parts(32_000_000, 3600)
			.saturating_add(Weight::from_parts(1_200, 0).saturating_mul(d.into()))
			.saturating_add(T::DbWeight::get().reads(5))
			.saturating_add(T::DbWeight::get().writes(4))
	}
	/// Storage: `EntityLedger::Owners` (r:1 w:0)
	/// Storage: `EntityLedger::Operators` (r:1 w:0)
	/// Storage: `EntityLedger::Approvals` (r:0 w:1)
	fn approve() -> Weight {
		Weight::from_parts(18_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	/// Storage: `EntityLedger::Operators` (r:1 w:1)
	fn set_approval_for_all() -> Weight {
		Weight::from_parts(14_000_000, 3500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn transfer() -> Weight {
		Weight::from_parts(25_000_000, 3600)
			.saturating_add(RocksDbWeight::get().reads(5))
			.saturating_add(RocksDbWeight::get().writes(4))
	}
	fn safe_transfer(d: u32, ) -> Weight {
		Weight::from_parts(32_000_000, 3600)
			.saturating_add(Weight::from_parts(1_200, 0).saturating_mul(d.into()))
			.saturating_add(RocksDbWeight::get().reads(5))
			.saturating_add(RocksDbWeight::get().writes(4))
	}
	fn approve() -> Weight {
		Weight::from_parts(18_000_000, 3500)
			.saturating_add(RocksDbWeight::get().reads(2))
			.saturating_add(RocksDbWeight::get().writes(1))
	}
	fn set_approval_for_all() -> Weight {
		Weight::from_parts(14_000_000, 3500)
			.saturating_add(RocksDbWeight::get().reads(1))
			.saturating_add(RocksDbWeight::get().writes(1))
	}
}
