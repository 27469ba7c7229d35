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

//! Runtime API definition required by ZK Proofs RPC extensions.

#![cfg_attr(not(feature = "std"), no_std)]

use custos_primitives::zk::{merkle::Node, ComplianceInfo, IdentityInfo};
use parity_scale_codec::Codec;
use sp_runtime::DispatchError;
use sp_std::vec::Vec;

sp_api::decl_runtime_apis! {
	pub trait ZkProofsApi<AccountId, Moment>
	where
		AccountId: Codec,
		Moment: Codec,
	{
		fn verify_membership_proof(
			path: Vec<Node>,
			leaf_index: u64,
			leaf: Node,
			root: Node,
		) -> Result<bool, DispatchError>;
		fn latest_merkle_root() -> Option<Node>;
		fn merkle_root_count() -> u64;
		fn is_nullifier_used(nullifier: Node) -> bool;
		fn is_commitment_known(commitment: Node) -> bool;
		fn identity_info(who: &AccountId) -> Option<IdentityInfo<Moment>>;
		fn compliance_info(who: &AccountId) -> Option<ComplianceInfo<Moment>>;
	}
}
