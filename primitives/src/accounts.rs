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

//! Smart account primitives: spending windows, account commands and query views.

use crate::common::{Asset, Balance};
use alloc::vec::Vec;
use parity_scale_codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_core::{RuntimeDebug, H256};
use sp_io::hashing::blake2_256;
use sp_runtime::traits::Saturating;

#[cfg(feature = "serde_derive")]
use serde::{Deserialize, Serialize};

/// Domain separator for smart account id derivation
pub const ACCOUNT_ID_DOMAIN: &[u8] = b"custos/smart-account";

/// Sequential identifier of a recovery request.
pub type RecoveryId = u64;

/// Derive the seed a smart account id is decoded from.
///
/// The id depends on the owner, the guardian set and a caller chosen salt. Creating the
/// same account twice therefore collides instead of silently replacing state.
pub fn smart_account_seed<AccountId: Encode>(
	owner: &AccountId,
	guardians: &[AccountId],
	salt: u32,
) -> [u8; 32] {
	blake2_256(&(ACCOUNT_ID_DOMAIN, owner, guardians, salt).encode())
}

/// True for the all-zero account id, which we treat as "no owner".
pub fn is_zero_account<AccountId: Encode>(who: &AccountId) -> bool {
	who.using_encoded(|bytes| bytes.iter().all(|b| *b == 0))
}

/// Rolling daily spending window for one asset of a smart account.
#[derive(
	Encode, Decode, Default, RuntimeDebug, Clone, Copy, PartialEq, Eq, TypeInfo, MaxEncodedLen,
)]
#[cfg_attr(feature = "serde_derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_derive", serde(rename_all = "camelCase"))]
pub struct SpendingLimit<Moment> {
	/// maximum amount per window. Zero means unlimited.
	pub daily_cap: Balance,
	/// amount spent in the current window
	pub spent: Balance,
	/// start of the current window
	pub last_reset: Moment,
}

#[derive(RuntimeDebug, Clone, Copy, PartialEq, Eq)]
pub enum SpendingError {
	DailyLimitExceeded,
}

impl<Moment: Copy + PartialOrd + Saturating> SpendingLimit<Moment> {
	pub fn new(daily_cap: Balance, now: Moment) -> Self {
		Self { daily_cap, spent: 0, last_reset: now }
	}

	pub fn is_unlimited(&self) -> bool {
		self.daily_cap == 0
	}

	/// Start a fresh window if `period` has elapsed since the last reset.
	/// Returns whether the window was rolled.
	pub fn roll_window(&mut self, now: Moment, period: Moment) -> bool {
		if now >= self.last_reset.saturating_add(period) {
			self.spent = 0;
			self.last_reset = now;
			true
		} else {
			false
		}
	}

	/// Account for `amount` in the current window.
	///
	/// The window is rolled first. Nothing is recorded if the cap would be exceeded.
	pub fn try_spend(
		&mut self,
		amount: Balance,
		now: Moment,
		period: Moment,
	) -> Result<(), SpendingError> {
		self.roll_window(now, period);
		let total = self.spent.saturating_add(amount);
		if !self.is_unlimited() && total > self.daily_cap {
			return Err(SpendingError::DailyLimitExceeded)
		}
		self.spent = total;
		Ok(())
	}

	/// Amount still spendable in the current window, `None` if unlimited.
	pub fn remaining(&self) -> Option<Balance> {
		if self.is_unlimited() {
			None
		} else {
			Some(self.daily_cap.saturating_sub(self.spent))
		}
	}
}

/// The closed set of commands a smart account can execute through a signed user operation.
#[derive(Encode, Decode, DecodeWithMemTracking, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo)]
pub enum AccountCall<AccountId, Moment> {
	/// move value out of the smart account. Subject to the spending policy.
	Transfer { asset: Asset, to: AccountId, amount: Balance },
	SetSpendingLimit { asset: Asset, daily_cap: Balance },
	CreateSessionKey { key: AccountId, duration: Moment },
	RevokeSessionKey { key: AccountId },
	AddGuardian { guardian: AccountId },
	RemoveGuardian { guardian: AccountId },
	/// designate (or clear) the sponsor asked to pay relayer fees
	SetSponsor { sponsor: Option<AccountId> },
	Lock,
}

impl<AccountId, Moment> AccountCall<AccountId, Moment> {
	/// The value this call moves out of the account, if any.
	pub fn transfer_amount(&self) -> Option<(Asset, Balance)> {
		match self {
			AccountCall::Transfer { asset, amount, .. } => Some((*asset, *amount)),
			_ => None,
		}
	}

	/// Session keys may move funds and lock the account, never reconfigure it.
	pub fn session_key_permitted(&self) -> bool {
		matches!(self, AccountCall::Transfer { .. } | AccountCall::Lock)
	}
}

/// Read-only view of a smart account.
#[derive(Encode, Decode, RuntimeDebug, Clone, PartialEq, Eq, TypeInfo)]
#[cfg_attr(feature = "serde_derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_derive", serde(rename_all = "camelCase"))]
pub struct AccountInfo<AccountId> {
	pub owner: AccountId,
	pub guardians: Vec<AccountId>,
	pub quorum: u32,
	pub nonce: u64,
	pub locked: bool,
	pub biometric_enabled: bool,
	pub biometric_hash: Option<H256>,
	pub sponsor: Option<AccountId>,
}

/// Read-only view of a recovery request.
#[derive(Encode, Decode, RuntimeDebug, Clone, PartialEq, Eq, TypeInfo)]
#[cfg_attr(feature = "serde_derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_derive", serde(rename_all = "camelCase"))]
pub struct RecoveryInfo<AccountId, Moment> {
	pub account: AccountId,
	pub new_owner: AccountId,
	pub approvals: Vec<AccountId>,
	pub created_at: Moment,
	pub execute_after: Moment,
	pub executed: bool,
	pub canceled: bool,
}
