use crate as pallet_entity_lifecycle;
use crate::SystemBlockSeeds;
use polkadot_sdk::{
  frame_support::{
    PalletId, construct_runtime, parameter_types,
    traits::{ConstU32, ConstU64, ConstU128},
  },
  sp_core::H256,
  sp_runtime::{
    BuildStorage,
    traits::{BlakeTwo256, Hash, IdentityLookup},
  },
};
use primitives::{
  pallet_ids::ENTITY_LIFECYCLE_PALLET_ID,
  params::{self, EXPIRY_WINDOW, MAX_TRANSFER_DATA_LEN, READY_DELAY},
};

type Block = polkadot_sdk::frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;
pub type Balance = primitives::Balance;

pub const ALICE: AccountId = 1;
pub const BOB: AccountId = 2;
pub const CHARLIE: AccountId = 3;
pub const DAVE: AccountId = 4;

pub const CREATION_FEE: Balance = params::CREATION_FEE;
pub const SPAWN_REWARD: Balance = params::SPAWN_REWARD;
pub const INITIAL_BALANCE: Balance = 1_000 * CREATION_FEE;
pub const BLOCK_HASH_COUNT: u64 = 256;

/// Unix time of block 0, in milliseconds
pub const GENESIS_MOMENT: u64 = 1_700_000_000_000;
pub const BLOCK_TIME: u64 = 6_000;

construct_runtime!(
  pub enum Test {
    System: polkadot_sdk::frame_system,
    Balances: polkadot_sdk::pallet_balances,
    Timestamp: polkadot_sdk::pallet_timestamp,
    EntityLedger: pallet_entity_ledger,
    EntityLifecycle: pallet_entity_lifecycle,
  }
);

impl polkadot_sdk::frame_system::Config for Test {
  type BaseCallFilter = polkadot_sdk::frame_support::traits::Everything;
  type BlockWeights = ();
  type BlockLength = ();
  type DbWeight = ();
  type RuntimeOrigin = RuntimeOrigin;
  type RuntimeCall = RuntimeCall;
  type Nonce = u64;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Block = Block;
  type RuntimeEvent = RuntimeEvent;
  type BlockHashCount = ConstU64<BLOCK_HASH_COUNT>;
  type Version = ();
  type PalletInfo = PalletInfo;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<Balance>;
  type OnNewAccount = ();
  type OnKilledAccount = ();
  type SystemWeightInfo = ();
  type SS58Prefix = ();
  type OnSetCode = ();
  type MaxConsumers = ConstU32<16>;
  type RuntimeTask = ();
  type ExtensionsWeightInfo = ();
  type SingleBlockMigrations = ();
  type MultiBlockMigrator = ();
  type PreInherents = ();
  type PostInherents = ();
  type PostTransactions = ();
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ConstU32<50>;
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = Balance;
  type RuntimeEvent = RuntimeEvent;
  type DustRemoval = ();
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = RuntimeHoldReason;
  type RuntimeFreezeReason = RuntimeFreezeReason;
  type DoneSlashHandler = ();
}

impl polkadot_sdk::pallet_timestamp::Config for Test {
  type Moment = u64;
  type OnTimestampSet = ();
  type MinimumPeriod = ConstU64<1>;
  type WeightInfo = ();
}

impl pallet_entity_ledger::Config for Test {
  type Receiver = ();
  type MaxDataLen = ConstU32<MAX_TRANSFER_DATA_LEN>;
  type WeightInfo = ();
}

parameter_types! {
  pub const LifecyclePalletId: PalletId = PalletId(*ENTITY_LIFECYCLE_PALLET_ID);
  pub const ReadyDelay: u64 = READY_DELAY as u64;
  pub const ExpiryWindow: u64 = EXPIRY_WINDOW as u64;
}

impl pallet_entity_lifecycle::Config for Test {
  type Currency = Balances;
  type Ledger = EntityLedger;
  type BlockSeeds = SystemBlockSeeds<Test>;
  type UnixTime = Timestamp;
  type CreationFee = ConstU128<CREATION_FEE>;
  type SpawnReward = ConstU128<SPAWN_REWARD>;
  type ReadyDelay = ReadyDelay;
  type ExpiryWindow = ExpiryWindow;
  type PalletId = LifecyclePalletId;
  type WeightInfo = ();
}

/// Deterministic stand-in for the hash of block `n`
pub fn block_hash(n: u64) -> H256 {
  BlakeTwo256::hash_of(&n)
}

/// Advance to block `n` the way block import would: record the parent hash of every entered
/// block, prune history older than `BLOCK_HASH_COUNT` and move the clock.
pub fn run_to_block(n: u64) {
  let mut now = System::block_number();
  while now < n {
    polkadot_sdk::frame_system::BlockHash::<Test>::insert(now, block_hash(now));
    now += 1;
    System::set_block_number(now);
    if now > BLOCK_HASH_COUNT {
      polkadot_sdk::frame_system::BlockHash::<Test>::remove(now - BLOCK_HASH_COUNT - 1);
    }
    Timestamp::set_timestamp(GENESIS_MOMENT + now * BLOCK_TIME);
  }
}

pub fn balance(who: AccountId) -> Balance {
  polkadot_sdk::pallet_balances::Pallet::<Test>::free_balance(who)
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = polkadot_sdk::frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  polkadot_sdk::pallet_balances::GenesisConfig::<Test> {
    balances: vec![
      (ALICE, INITIAL_BALANCE),
      (BOB, INITIAL_BALANCE),
      (CHARLIE, INITIAL_BALANCE),
      (DAVE, INITIAL_BALANCE),
    ],
    dev_accounts: None,
  }
  .assimilate_storage(&mut t)
  .unwrap();

  pallet_entity_lifecycle::GenesisConfig::<Test>::default()
    .assimilate_storage(&mut t)
    .unwrap();

  let mut ext = polkadot_sdk::sp_io::TestExternalities::new(t);
  ext.execute_with(|| {
    System::set_block_number(1);
    Timestamp::set_timestamp(GENESIS_MOMENT + BLOCK_TIME);
  });
  ext
}
