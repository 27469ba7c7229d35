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

//! # Tokens Pallet
//!
//! A minimal multi-token ledger. Smart accounts move tokens with `Transfer` calls and
//! relayers may be paid in tokens. The native currency is not handled here.

#![cfg_attr(not(feature = "std"), no_std)]

use core::marker::PhantomData;
use custos_primitives::common::{Balance as BalanceType, TokenId};
use frame_support::{dispatch::DispatchResult, ensure};
use frame_system::ensure_signed;
use log::{debug, info};

// Logger target
const LOG: &str = "custos::tokens";

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;
#[cfg(test)]
mod mock;
#[cfg(test)]
mod tests;
pub mod weights;

#[frame_support::pallet]
pub mod pallet {
	use super::*;
	use frame_support::pallet_prelude::*;
	use frame_system::pallet_prelude::*;

	#[pallet::pallet]
	pub struct Pallet<T>(PhantomData<T>);

	#[pallet::config]
	pub trait Config: frame_system::Config {
		#[allow(deprecated)]
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

		/// Who may mint and burn tokens.
		type IssuerOrigin: EnsureOrigin<Self::RuntimeOrigin>;

		type WeightInfo: WeightInfo;
	}

	#[pallet::storage]
	pub type TotalIssuance<T: Config> =
		StorageMap<_, Blake2_128Concat, TokenId, BalanceType, ValueQuery>;

	#[pallet::storage]
	pub type Balance<T: Config> = StorageDoubleMap<
		_,
		Blake2_128Concat,
		TokenId,
		Blake2_128Concat,
		T::AccountId,
		BalanceType,
		ValueQuery,
	>;

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		/// Token transfer success
		Transferred { token: TokenId, from: T::AccountId, to: T::AccountId, amount: BalanceType },
		/// Tokens created out of thin air
		Issued { token: TokenId, who: T::AccountId, amount: BalanceType },
		/// Tokens destroyed
		Burned { token: TokenId, who: T::AccountId, amount: BalanceType },
	}

	#[pallet::error]
	pub enum Error<T> {
		/// the balance is too low to perform this action
		BalanceTooLow,
		/// the total issuance would overflow
		TotalIssuanceOverflow,
		/// the recipient's balance would overflow
		BalanceOverflow,
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Transfer some balance of `token` to another account.
		#[pallet::call_index(0)]
		#[pallet::weight(<T as Config>::WeightInfo::transfer())]
		pub fn transfer(
			origin: OriginFor<T>,
			dest: T::AccountId,
			token: TokenId,
			amount: BalanceType,
		) -> DispatchResult {
			let from = ensure_signed(origin)?;
			Self::do_transfer(token, &from, &dest, amount)
		}

		#[pallet::call_index(1)]
		#[pallet::weight(<T as Config>::WeightInfo::issue())]
		pub fn issue(
			origin: OriginFor<T>,
			token: TokenId,
			who: T::AccountId,
			amount: BalanceType,
		) -> DispatchResult {
			T::IssuerOrigin::ensure_origin(origin)?;
			Self::do_issue(token, &who, amount)
		}

		#[pallet::call_index(2)]
		#[pallet::weight(<T as Config>::WeightInfo::burn())]
		pub fn burn(
			origin: OriginFor<T>,
			token: TokenId,
			who: T::AccountId,
			amount: BalanceType,
		) -> DispatchResult {
			T::IssuerOrigin::ensure_origin(origin)?;
			Self::do_burn(token, &who, amount)
		}
	}
}

impl<T: Config> Pallet<T> {
	pub fn balance(token: TokenId, who: &T::AccountId) -> BalanceType {
		Balance::<T>::get(token, who)
	}

	pub fn total_issuance(token: TokenId) -> BalanceType {
		TotalIssuance::<T>::get(token)
	}

	/// Move `amount` of `token` between accounts. A transfer to self only checks the balance.
	pub fn do_transfer(
		token: TokenId,
		from: &T::AccountId,
		to: &T::AccountId,
		amount: BalanceType,
	) -> DispatchResult {
		let balance_from = Self::balance(token, from);
		let new_from = balance_from.checked_sub(amount).ok_or(Error::<T>::BalanceTooLow)?;
		if from != to {
			let new_to =
				Self::balance(token, to).checked_add(amount).ok_or(Error::<T>::BalanceOverflow)?;
			Balance::<T>::insert(token, from, new_from);
			Balance::<T>::insert(token, to, new_to);
		}
		debug!(target: LOG, "transfer {:?} of token {} from {:?} to {:?}", amount, token, from, to);
		Self::deposit_event(Event::Transferred {
			token,
			from: from.clone(),
			to: to.clone(),
			amount,
		});
		Ok(())
	}

	pub fn do_issue(token: TokenId, who: &T::AccountId, amount: BalanceType) -> DispatchResult {
		let total = Self::total_issuance(token)
			.checked_add(amount)
			.ok_or(Error::<T>::TotalIssuanceOverflow)?;
		// bounded by total issuance
		let balance = Self::balance(token, who).saturating_add(amount);
		TotalIssuance::<T>::insert(token, total);
		Balance::<T>::insert(token, who, balance);
		info!(target: LOG, "issue {:?} of token {} for {:?}", amount, token, who);
		Self::deposit_event(Event::Issued { token, who: who.clone(), amount });
		Ok(())
	}

	pub fn do_burn(token: TokenId, who: &T::AccountId, amount: BalanceType) -> DispatchResult {
		let balance = Self::balance(token, who);
		ensure!(balance >= amount, Error::<T>::BalanceTooLow);
		Balance::<T>::insert(token, who, balance - amount);
		TotalIssuance::<T>::mutate(token, |total| *total = total.saturating_sub(amount));
		info!(target: LOG, "burn {:?} of token {} for {:?}", amount, token, who);
		Self::deposit_event(Event::Burned { token, who: who.clone(), amount });
		Ok(())
	}
}
