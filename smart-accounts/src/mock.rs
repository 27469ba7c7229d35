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

//! Mock runtime for the custos smart accounts module

use crate as dut;
use sp_runtime::BuildStorage;
use test_utils::*;

frame_support::construct_runtime!(
	pub enum TestRuntime
	{
		System: frame_system,
		Timestamp: pallet_timestamp,
		Balances: pallet_balances,
		CustosTokens: pallet_custos_tokens,
		SmartAccounts: dut,
	}
);

impl dut::Config for TestRuntime {
	type RuntimeEvent = RuntimeEvent;
	type Currency = Balances;
	type AdminOrigin = EnsureAlice;
	type MaxGuardians = frame_support::traits::ConstU32<10>;
	type MaxSessionKeys = frame_support::traits::ConstU32<3>;
	type MaxSpendingLimits = frame_support::traits::ConstU32<2>;
	type RecoveryDelay = RecoveryDelay;
	type MaxSessionDuration = MaxSessionDuration;
	type SpendingPeriod = SpendingPeriod;
	type WeightInfo = ();
}

// boilerplate
impl_frame_system!(TestRuntime);
impl_timestamp!(TestRuntime);
impl_balances!(TestRuntime, System);
impl_custos_tokens!(TestRuntime);

// genesis values
pub fn new_test_ext() -> sp_io::TestExternalities {
	let t = frame_system::GenesisConfig::<TestRuntime>::default().build_storage().unwrap();
	let mut ext: sp_io::TestExternalities = t.into();
	ext.execute_with(|| {
		System::set_block_number(1);
		Timestamp::set_timestamp(GENESIS_TIME);
	});
	ext
}
