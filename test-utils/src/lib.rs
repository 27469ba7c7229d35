// Copyright (c) 2024 Custos Association
// This file is part of Custos
//
// Custos is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// Custos is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Custos.  If not, see <http://www.gnu.org/licenses/>.

//! Boilerplate shared by the mock runtimes of the custos pallets.

use frame_support::{ord_parameter_types, parameter_types, traits::EitherOfDiverse};
use frame_system::{EnsureRoot, EnsureSignedBy};
use sp_core::crypto::AccountId32;
use sp_runtime::{traits::IdentifyAccount, MultiSignature};

// convenience reexport such that the tests do not need to put sp-keyring in the Cargo.toml.
pub use sp_keyring::Sr25519Keyring;

// reexports for macro resolution
pub use custos_primitives;
pub use frame_support::{self, derive_impl};
pub use frame_system;
pub use pallet_balances;
pub use pallet_timestamp;
pub use sp_runtime;

pub use sp_core::H256;
pub use sp_runtime::traits::{BlakeTwo256, Verify};

pub use custos_primitives::common::{ONE_DAY, ONE_HOUR};

pub mod helpers;

pub const GENESIS_TIME: u64 = 1_585_058_843_000;
pub const BLOCKTIME: u64 = 6_000; // 6s per block

/// The signature type used by accounts/transactions.
pub type Signature = MultiSignature;
/// An identifier for an account on this system.
pub type AccountId = <<Signature as Verify>::Signer as IdentifyAccount>::AccountId;
/// The public key type a [`Signature`] verifies against.
pub type Public = <Signature as Verify>::Signer;

pub type Balance = custos_primitives::common::Balance;
pub type Moment = u64;

parameter_types! {
	pub const MinimumPeriod: Moment = BLOCKTIME / 2;
}

ord_parameter_types! {
	pub const Alice: AccountId32 = AccountId32::new([212, 53, 147, 199, 21, 253, 211, 28, 97, 20, 26, 189, 4, 169, 159, 214, 130, 44, 133, 88, 133, 76, 205, 227, 154, 86, 132, 231, 165, 109, 162, 125]);
}

/// Test origin for the pallets' privileged `EnsureOrigin` associated types.
pub type EnsureAlice = EitherOfDiverse<EnsureSignedBy<Alice, AccountId32>, EnsureRoot<AccountId32>>;

#[macro_export]
macro_rules! impl_frame_system {
	($t:ident) => {
		#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
		impl frame_system::Config for $t {
			type Block = frame_system::mocking::MockBlock<$t>;
			type AccountId = AccountId;
			type Lookup = sp_runtime::traits::IdentityLookup<Self::AccountId>;
			type AccountData = pallet_balances::AccountData<Balance>;
		}
	};
}

#[macro_export]
macro_rules! impl_timestamp {
	($t:ident) => {
		impl pallet_timestamp::Config for $t {
			type Moment = Moment;
			type OnTimestampSet = ();
			type MinimumPeriod = MinimumPeriod;
			type WeightInfo = ();
		}
	};
}

#[macro_export]
macro_rules! impl_balances {
	($t:ident, $system:ident) => {
		#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
		impl pallet_balances::Config for $t {
			type Balance = Balance;
			type ExistentialDeposit = frame_support::traits::ConstU128<1>;
			type AccountStore = $system;
		}
	};
}

#[macro_export]
macro_rules! impl_custos_tokens {
	($t:ident) => {
		impl pallet_custos_tokens::Config for $t {
			type RuntimeEvent = RuntimeEvent;
			type IssuerOrigin = frame_system::EnsureRoot<AccountId>;
			type WeightInfo = ();
		}
	};
}

parameter_types! {
	pub const RecoveryDelay: Moment = 7 * ONE_DAY;
	pub const MaxSessionDuration: Moment = 30 * ONE_DAY;
	pub const SpendingPeriod: Moment = ONE_DAY;
}

#[macro_export]
macro_rules! impl_custos_smart_accounts {
	($t:ident) => {
		impl pallet_custos_smart_accounts::Config for $t {
			type RuntimeEvent = RuntimeEvent;
			type Currency = Balances;
			type AdminOrigin = EnsureAlice;
			type MaxGuardians = frame_support::traits::ConstU32<10>;
			type MaxSessionKeys = frame_support::traits::ConstU32<8>;
			type MaxSpendingLimits = frame_support::traits::ConstU32<8>;
			type RecoveryDelay = RecoveryDelay;
			type MaxSessionDuration = MaxSessionDuration;
			type SpendingPeriod = SpendingPeriod;
			type WeightInfo = ();
		}
	};
}
