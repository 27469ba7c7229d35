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

//! Meta-transaction primitives: signed user operations, execution results and the
//! relayer / sponsor bookkeeping records.

use crate::{
	accounts::AccountCall,
	common::{Asset, Balance},
};
use alloc::vec::Vec;
use parity_scale_codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_core::{RuntimeDebug, H256};
use sp_io::hashing::blake2_256;
use sp_runtime::DispatchError;

#[cfg(feature = "serde_derive")]
use serde::{Deserialize, Serialize};

/// Domain separator for single user operations
pub const USER_OPERATION_DOMAIN: &[u8] = b"custos/user-operation";
/// Domain separator for batch operations
pub const BATCH_OPERATION_DOMAIN: &[u8] = b"custos/batch-operation";

/// Who signed a user operation.
#[derive(Encode, Decode, DecodeWithMemTracking, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo)]
pub enum OperationSignature<AccountId, Signature> {
	/// signed by the account owner
	Owner(Signature),
	/// signed by a delegated session key of the account
	SessionKey { key: AccountId, signature: Signature },
}

impl<AccountId, Signature> OperationSignature<AccountId, Signature> {
	pub fn signature(&self) -> &Signature {
		match self {
			OperationSignature::Owner(signature) => signature,
			OperationSignature::SessionKey { signature, .. } => signature,
		}
	}
}

/// Fee and validity parameters shared by single and batch operations.
#[derive(Encode, Decode, DecodeWithMemTracking, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo)]
pub struct OperationParams<Moment> {
	/// upper bound on the gas the operation may consume
	pub gas_limit: u64,
	/// fee per unit of gas, denominated in `fee_asset`
	pub gas_price: Balance,
	pub fee_asset: Asset,
	/// the most the sender agrees to pay, whatever the gas used
	pub max_fee: Balance,
	/// the operation is rejected once this moment has passed
	pub deadline: Moment,
}

impl<Moment> OperationParams<Moment> {
	/// Fee owed for `gas_used`, capped by `max_fee`.
	pub fn fee_for(&self, gas_used: u64) -> Balance {
		Balance::from(gas_used).saturating_mul(self.gas_price).min(self.max_fee)
	}
}

/// A single call signed off-chain by the account owner or one of its session keys.
#[derive(Encode, Decode, DecodeWithMemTracking, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo)]
pub struct UserOperation<AccountId, Moment, Signature> {
	/// the smart account executing the call
	pub sender: AccountId,
	/// must equal the account's nonce at validation time
	pub nonce: u64,
	pub call: AccountCall<AccountId, Moment>,
	pub params: OperationParams<Moment>,
	pub signature: OperationSignature<AccountId, Signature>,
}

impl<AccountId: Encode, Moment: Encode, Signature> UserOperation<AccountId, Moment, Signature> {
	/// Hash of everything but the signature. This is what gets signed, and what the
	/// executed-operations set remembers.
	pub fn hash(&self) -> H256 {
		operation_hash(USER_OPERATION_DOMAIN, &self.sender, self.nonce, &self.call, &self.params)
	}
}

/// Several calls authorized by a single signature and consuming a single nonce.
#[derive(Encode, Decode, DecodeWithMemTracking, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo)]
pub struct BatchOperation<AccountId, Moment, Signature> {
	pub sender: AccountId,
	pub nonce: u64,
	pub calls: Vec<AccountCall<AccountId, Moment>>,
	pub params: OperationParams<Moment>,
	pub signature: OperationSignature<AccountId, Signature>,
}

impl<AccountId: Encode, Moment: Encode, Signature> BatchOperation<AccountId, Moment, Signature> {
	pub fn hash(&self) -> H256 {
		operation_hash(BATCH_OPERATION_DOMAIN, &self.sender, self.nonce, &self.calls, &self.params)
	}
}

fn operation_hash<AccountId: Encode, Calls: Encode, Moment: Encode>(
	domain: &[u8],
	sender: &AccountId,
	nonce: u64,
	calls: &Calls,
	params: &OperationParams<Moment>,
) -> H256 {
	H256::from(blake2_256(&(domain, sender, nonce, calls, params).encode()))
}

#[derive(Encode, Decode, RuntimeDebug, Clone, Copy, PartialEq, Eq, TypeInfo)]
#[cfg_attr(feature = "serde_derive", derive(Serialize, Deserialize))]
pub enum ExecutionStatus {
	Executed,
	Rejected,
}

/// Outcome of an operation that passed the nonce check.
#[derive(Encode, Decode, RuntimeDebug, Clone, PartialEq, Eq, TypeInfo)]
pub struct ExecutionResult<AccountId> {
	pub status: ExecutionStatus,
	pub reason: Option<DispatchError>,
	pub gas_used: u64,
	pub fee_charged: Balance,
	/// set if a sponsor paid the fee instead of the account
	pub sponsored_by: Option<AccountId>,
}

impl<AccountId> ExecutionResult<AccountId> {
	pub fn rejected(reason: DispatchError) -> Self {
		Self {
			status: ExecutionStatus::Rejected,
			reason: Some(reason),
			gas_used: 0,
			fee_charged: 0,
			sponsored_by: None,
		}
	}

	pub fn is_executed(&self) -> bool {
		self.status == ExecutionStatus::Executed
	}
}

#[derive(Encode, Decode, RuntimeDebug, Clone, PartialEq, Eq, TypeInfo)]
pub struct BatchResult<AccountId> {
	pub status: ExecutionStatus,
	pub reason: Option<DispatchError>,
	pub success_count: u32,
	pub total_calls: u32,
	pub total_gas_used: u64,
	pub fee_charged: Balance,
	pub sponsored_by: Option<AccountId>,
}

impl<AccountId> BatchResult<AccountId> {
	pub fn rejected(reason: DispatchError, total_calls: u32) -> Self {
		Self {
			status: ExecutionStatus::Rejected,
			reason: Some(reason),
			success_count: 0,
			total_calls,
			total_gas_used: 0,
			fee_charged: 0,
			sponsored_by: None,
		}
	}
}

/// Bookkeeping for a registered relayer.
#[derive(
	Encode, Decode, Default, RuntimeDebug, Clone, Copy, PartialEq, Eq, TypeInfo, MaxEncodedLen,
)]
#[cfg_attr(feature = "serde_derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_derive", serde(rename_all = "camelCase"))]
pub struct RelayerInfo {
	pub active: bool,
	/// operations submitted that passed the nonce check
	pub tx_count: u64,
	pub success_count: u64,
	pub gas_used: u64,
	pub fees_earned: Balance,
}

/// Fee sponsor budget.
#[derive(
	Encode, Decode, Default, RuntimeDebug, Clone, Copy, PartialEq, Eq, TypeInfo, MaxEncodedLen,
)]
#[cfg_attr(feature = "serde_derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_derive", serde(rename_all = "camelCase"))]
pub struct SponsorInfo {
	pub active: bool,
	pub budget: Balance,
	pub used: Balance,
}

impl SponsorInfo {
	pub fn remaining(&self) -> Balance {
		self.budget.saturating_sub(self.used)
	}

	pub fn can_cover(&self, fee: Balance) -> bool {
		self.active && self.remaining() >= fee
	}
}

/// Allow-list entry of a sponsor for one user.
#[derive(
	Encode, Decode, Default, RuntimeDebug, Clone, Copy, PartialEq, Eq, TypeInfo, MaxEncodedLen,
)]
#[cfg_attr(feature = "serde_derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_derive", serde(rename_all = "camelCase"))]
pub struct SponsoredUser {
	/// per-user cap, `None` for no cap
	pub cap: Option<Balance>,
	pub used: Balance,
}

impl SponsoredUser {
	pub fn can_cover(&self, fee: Balance) -> bool {
		match self.cap {
			Some(cap) => cap.saturating_sub(self.used) >= fee,
			None => true,
		}
	}
}
