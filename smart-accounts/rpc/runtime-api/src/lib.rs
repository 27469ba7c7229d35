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

//! Runtime API definition required by Smart Accounts RPC extensions.

#![cfg_attr(not(feature = "std"), no_std)]

use custos_primitives::{
	accounts::{AccountInfo, RecoveryId, RecoveryInfo},
	common::{Asset, Balance},
};
use parity_scale_codec::Codec;
use sp_std::vec::Vec;

sp_api::decl_runtime_apis! {
	pub trait SmartAccountsApi<AccountId, Moment>
	where
		AccountId: Codec,
		Moment: Codec,
	{
		fn account_info(account: &AccountId) -> Option<AccountInfo<AccountId>>;
		/// zero for unknown accounts
		fn nonce(account: &AccountId) -> u64;
		fn recovery_request(id: RecoveryId) -> Option<RecoveryInfo<AccountId, Moment>>;
		/// session key and expiry, expired keys included
		fn session_keys(account: &AccountId) -> Vec<(AccountId, Moment)>;
		fn remaining_allowance(account: &AccountId, asset: Asset) -> Option<Balance>;
		fn derive_account_id(owner: &AccountId, guardians: Vec<AccountId>, salt: u32) -> AccountId;
	}
}
