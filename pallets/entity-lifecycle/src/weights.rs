#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn create_entity() -> Weight;
	fn spawn_entity() -> Weight;
	fn name_entity() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	/// Storage: `EntityLedger::Owners` (r:2 w:1)
	/// Storage: `System::Account` (r:2 w:2)
	/// Storage: `EntityLedger::TotalMinted` (r:1 w:1)
	/// Storage: `EntityLedger::OwnedCount` (r:1 w:1)
	/// Storage: `EntityLifecycle::QueueTail` (r:1 w:1)
	/// Storage: `EntityLifecycle::Entities` (r:0 w:1)
	/// Storage: `EntityLifecycle::Names` (r:0 w:1)
	/// Storage: `EntityLifecycle::SpawnQueue` (r:0 w:1)
	fn create_entity() -> Weight {
		Weight::from_parts(68_000_000, 6196)
			.saturating_add(T::DbWeight::get().reads(7))
			.saturating_add(T::DbWeight::get().writes(9))
	}
	/// Storage: `EntityLifecycle::QueueHead` (r:1 w:1)
	/// Storage: `EntityLifecycle::QueueTail` (r:1 w:0)
	/// Storage: `EntityLifecycle::SpawnQueue` (r:1 w:1)
	/// Storage: `EntityLifecycle::Entities` (r:3 w:1)
	/// Storage: `EntityLedger::Owners` (r:1 w:0)
	/// Storage: `System::BlockHash` (r:1 w:0)
	/// Storage: `System::Account` (r:2 w:2)
	/// Storage: `Timestamp::Now` (r:1 w:0)
	fn spawn_entity() -> Weight {
		Weight::from_parts(74_000_000, 6196)
			.saturating_add(T::DbWeight::get().reads(11))
			.saturating_add(T::DbWeight::get().writes(5))
	}
	/// Storage: `EntityLedger::Owners` (r:1 w:0)
	/// Storage: `EntityLifecycle::Names` (r:0 w:1)
	fn name_entity() -> Weight {
		Weight::from_parts(16_000_000, 3520)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn create_entity() -> Weight {
		Weight::from_parts(68_000_000, 6196)
			.saturating_add(RocksDbWeight::get().reads(7))
			.saturating_add(RocksDbWeight::get().writes(9))
	}
	fn spawn_entity() -> Weight {
		Weight::from_parts(74_000_000, 6196)
			.saturating_add(RocksDbWeight::get().reads(11))
			.saturating_add(RocksDbWeight::get().writes(5))
	}
	fn name_entity() -> Weight {
		Weight::from_parts(16_000_000, 3520)
			.saturating_add(RocksDbWeight::get().reads(1))
			.saturating_add(RocksDbWeight::get().writes(1))
	}
}
