use crate as pallet_entity_ledger;
use crate::EntityReceiver;
use polkadot_sdk::frame_support::{construct_runtime, derive_impl, traits::ConstU32};
use polkadot_sdk::frame_system;
use polkadot_sdk::sp_runtime::{
  BuildStorage,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{EntityId, interfaces::InterfaceId, params::MAX_TRANSFER_DATA_LEN};
use std::cell::RefCell;
use std::collections::BTreeMap;

pub type AccountId = u64;

pub const NULL: AccountId = 0;
pub const ALICE: AccountId = 1;
pub const BOB: AccountId = 2;
pub const CHARLIE: AccountId = 3;
pub const DAVE: AccountId = 4;

/// A single call into a recipient's acceptance hook
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Receipt {
  pub operator: AccountId,
  pub from: AccountId,
  pub to: AccountId,
  pub id: EntityId,
  pub data: Vec<u8>,
  pub owner_during_hook: Option<AccountId>,
}

thread_local! {
    // Accounts carrying code: account -> signature its hook answers with
    static RECEIVER_CODE: RefCell<BTreeMap<AccountId, InterfaceId>> = const { RefCell::new(BTreeMap::new()) };

    static RECEIPTS: RefCell<Vec<Receipt>> = const { RefCell::new(Vec::new()) };
}

/// Give `who` code whose acceptance hook answers `signature`
pub fn install_receiver(who: AccountId, signature: InterfaceId) {
  RECEIVER_CODE.with(|code| code.borrow_mut().insert(who, signature));
}

pub fn receipts() -> Vec<Receipt> {
  RECEIPTS.with(|r| r.borrow().clone())
}

pub struct MockReceiver;
impl EntityReceiver<AccountId> for MockReceiver {
  fn on_entity_received(
    operator: &AccountId,
    from: &AccountId,
    to: &AccountId,
    id: EntityId,
    data: &[u8],
  ) -> Option<InterfaceId> {
    let signature = RECEIVER_CODE.with(|code| code.borrow().get(to).copied())?;
    RECEIPTS.with(|r| {
      r.borrow_mut().push(Receipt {
        operator: *operator,
        from: *from,
        to: *to,
        id,
        data: data.to_vec(),
        owner_during_hook: crate::Owners::<Test>::get(id),
      })
    });
    Some(signature)
  }
}

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    EntityLedger: pallet_entity_ledger,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
}

impl pallet_entity_ledger::Config for Test {
  type Receiver = MockReceiver;
  type MaxDataLen = ConstU32<MAX_TRANSFER_DATA_LEN>;
  type WeightInfo = ();
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  RECEIVER_CODE.with(|code| code.borrow_mut().clear());
  RECEIPTS.with(|r| r.borrow_mut().clear());

  let mut ext = polkadot_sdk::sp_io::TestExternalities::new(t);
  // Events are only recorded from block 1 on
  ext.execute_with(|| System::set_block_number(1));
  ext
}
