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


//! Mock runtime for the custos relay module

use crate as dut;
use frame_support::{parameter_types, traits::ConstU32};
use sp_runtime::BuildStorage;
use test_utils::*;

frame_support::construct_runtime!(
	pub enum TestRuntime
	{
		System: frame_system,
		Timestamp: pallet_timestamp,
		Balances: pallet_balances,
		CustosTokens: pallet_custos_tokens,
		SmartAccounts: pallet_custos_smart_accounts,
		Relay: dut,
	}
);

parameter_types! {
	pub const MaxOperationValidity: Moment = ONE_HOUR;
	pub const BaseGas: u64 = 21_000;
	pub const TransferGas: u64 = 30_000;
	pub const AdminCallGas: u64 = 50_000;
	pub static ChargeFailedBatchCalls: bool = true;
}

impl dut::Config for TestRuntime {
	type RuntimeEvent = RuntimeEvent;
	type Public = Public;
	type Signature = Signature;
	type AdminOrigin = EnsureAlice;
	type MaxOperationValidity = MaxOperationValidity;
	type MaxBatchSize = ConstU32<5>;
	type BaseGas = BaseGas;
	type TransferGas = TransferGas;
	type AdminCallGas = AdminCallGas;
	type ChargeFailedBatchCalls = ChargeFailedBatchCalls;
	type WeightInfo = ();
}

// boilerplate
impl_frame_system!(TestRuntime);
impl_timestamp!(TestRuntime);
impl_balances!(TestRuntime, System);
impl_custos_tokens!(TestRuntime);
impl_custos_smart_accounts!(TestRuntime);

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
