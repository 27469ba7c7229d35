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

use parity_scale_codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_core::RuntimeDebug;

#[cfg(feature = "serde_derive")]
use serde::{Deserialize, Serialize};

/// Amounts of native currency and of tokens share one representation.
pub type Balance = u128;

/// Identifies a token held in the tokens pallet.
pub type TokenId = u32;

/// Milliseconds, matching `pallet_timestamp` moments.
pub const ONE_HOUR: u64 = 3_600_000;
pub const ONE_DAY: u64 = 24 * ONE_HOUR;

/// An asset that can be moved by a smart account or used to pay relayer fees.
#[derive(
	Encode,
	Decode,
	DecodeWithMemTracking,
	Copy,
	Clone,
	Default,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	RuntimeDebug,
	TypeInfo,
	MaxEncodedLen,
)]
#[cfg_attr(feature = "serde_derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_derive", serde(rename_all = "camelCase"))]
pub enum Asset {
	/// the chain's native currency
	#[default]
	Native,
	/// a token of the tokens pallet
	Token(TokenId),
}
