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

//! Runtime API definition required by Relay RPC extensions.

#![cfg_attr(not(feature = "std"), no_std)]

use custos_primitives::{
	accounts::AccountCall,
	relay::{RelayerInfo, SponsorInfo, SponsoredUser},
};
use parity_scale_codec::Codec;
use sp_core::H256;
use sp_std::vec::Vec;

sp_api::decl_runtime_apis! {
	pub trait RelayApi<AccountId, Moment>
	where
		AccountId: Codec,
		Moment: Codec,
	{
		fn relayer_info(relayer: &AccountId) -> Option<RelayerInfo>;
		fn sponsor_info(sponsor: &AccountId) -> Option<SponsorInfo>;
		fn sponsored_user(sponsor: &AccountId, user: &AccountId) -> Option<SponsoredUser>;
		fn is_operation_executed(hash: H256) -> bool;
		/// Gas a relayer would charge for executing `calls` as one operation or batch.
		fn estimate_gas(calls: Vec<AccountCall<AccountId, Moment>>) -> u64;
	}
}
