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

//! # Smart Accounts Pallet
//!
//! Programmable accounts controlled by an owner key and protected by a set of guardians.
//!
//! ## Overview
//!
//! A smart account is created with an owner, up to `MaxGuardians` guardians and a recovery
//! quorum. Its id is derived deterministically from owner, guardians and a salt, so the same
//! account cannot be created twice. The owner configures the account directly through the
//! extrinsics of this pallet. The relay pallet executes signed user operations through the
//! `do_*` hooks after it authenticated the signer.
//!
//! ## Recovery
//!
//! Any guardian may propose a new owner. Once `required_quorum` current guardians approved and
//! `RecoveryDelay` has passed since the request was created, anyone may execute it. Until then,
//! the current owner can cancel the request.
//!
//! ## Spending policy
//!
//! Each asset can carry a daily cap. The window is rolled lazily on the next spend once
//! `SpendingPeriod` has elapsed since the last reset. A cap of zero is unlimited but still
//! tracks the amount spent. Assets without a configured limit are neither limited nor tracked.

#![cfg_attr(not(feature = "std"), no_std)]

use core::marker::PhantomData;
use custos_primitives::{
	accounts::{
		is_zero_account, smart_account_seed, AccountCall, AccountInfo, RecoveryId, RecoveryInfo,
		SpendingLimit,
	},
	common::{Asset, Balance},
};
use frame_support::{
	dispatch::DispatchResult,
	ensure,
	traits::{fungible, tokens::Preservation, Get},
	BoundedBTreeMap, BoundedVec, CloneNoBound, EqNoBound, PartialEqNoBound,
	RuntimeDebugNoBound,
};
use frame_system::ensure_signed;
use log::{debug, info};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_core::H256;
use sp_runtime::{
	traits::{Saturating, TrailingZeroInput, Zero},
	DispatchError,
};
use sp_std::vec::Vec;

// Logger target
const LOG: &str = "custos::smart-accounts";

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;
#[cfg(test)]
mod mock;
#[cfg(test)]
mod tests;
pub mod weights;

pub type MomentOf<T> = <T as pallet_timestamp::Config>::Moment;
pub type AccountCallOf<T> = AccountCall<<T as frame_system::Config>::AccountId, MomentOf<T>>;

#[derive(
	Encode,
	Decode,
	CloneNoBound,
	PartialEqNoBound,
	EqNoBound,
	RuntimeDebugNoBound,
	TypeInfo,
	MaxEncodedLen,
)]
#[scale_info(skip_type_params(T))]
#[codec(mel_bound(T: Config))]
pub struct SmartAccount<T: Config> {
	pub owner: T::AccountId,
	pub guardians: BoundedVec<T::AccountId, T::MaxGuardians>,
	/// guardian approvals needed to recover the account
	pub required_quorum: u32,
	/// session key -> expiry
	pub session_keys: BoundedBTreeMap<T::AccountId, MomentOf<T>, T::MaxSessionKeys>,
	pub spending: BoundedBTreeMap<Asset, SpendingLimit<MomentOf<T>>, T::MaxSpendingLimits>,
	/// advances by exactly one per executed user operation and per recovery
	pub nonce: u64,
	pub locked: bool,
	pub locked_at: Option<MomentOf<T>>,
	pub biometric_hash: Option<H256>,
	/// designated payer of relayer fees
	pub sponsor: Option<T::AccountId>,
	pub created_at: MomentOf<T>,
}

impl<T: Config> SmartAccount<T> {
	pub fn is_guardian(&self, who: &T::AccountId) -> bool {
		self.guardians.contains(who)
	}

	pub fn info(&self) -> AccountInfo<T::AccountId> {
		AccountInfo {
			owner: self.owner.clone(),
			guardians: self.guardians.to_vec(),
			quorum: self.required_quorum,
			nonce: self.nonce,
			locked: self.locked,
			biometric_enabled: self.biometric_hash.is_some(),
			biometric_hash: self.biometric_hash,
			sponsor: self.sponsor.clone(),
		}
	}
}

#[derive(
	Encode,
	Decode,
	CloneNoBound,
	PartialEqNoBound,
	EqNoBound,
	RuntimeDebugNoBound,
	TypeInfo,
	MaxEncodedLen,
)]
#[scale_info(skip_type_params(T))]
#[codec(mel_bound(T: Config))]
pub struct RecoveryRequest<T: Config> {
	pub account: T::AccountId,
	/// guardian that opened the request
	pub initiator: T::AccountId,
	pub new_owner: T::AccountId,
	pub approvals: BoundedVec<T::AccountId, T::MaxGuardians>,
	pub created_at: MomentOf<T>,
	pub execute_after: MomentOf<T>,
	pub executed: bool,
	pub canceled: bool,
}

impl<T: Config> RecoveryRequest<T> {
	/// Executed and canceled requests are terminal.
	pub fn is_active(&self) -> bool {
		!self.executed && !self.canceled
	}

	pub fn info(&self) -> RecoveryInfo<T::AccountId, MomentOf<T>> {
		RecoveryInfo {
			account: self.account.clone(),
			new_owner: self.new_owner.clone(),
			approvals: self.approvals.to_vec(),
			created_at: self.created_at,
			execute_after: self.execute_after,
			executed: self.executed,
			canceled: self.canceled,
		}
	}
}

#[frame_support::pallet]
pub mod pallet {
	use super::*;
	use frame_support::pallet_prelude::*;
	use frame_system::pallet_prelude::*;

	#[pallet::pallet]
	pub struct Pallet<T>(PhantomData<T>);

	#[pallet::config]
	pub trait Config:
		frame_system::Config + pallet_timestamp::Config + pallet_custos_tokens::Config
	{
		#[allow(deprecated)]
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

		/// The native currency held by smart accounts.
		type Currency: fungible::Mutate<Self::AccountId, Balance = Balance>;

		/// May lock any account, e.g. on suspected compromise.
		type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

		#[pallet::constant]
		type MaxGuardians: Get<u32>;

		#[pallet::constant]
		type MaxSessionKeys: Get<u32>;

		#[pallet::constant]
		type MaxSpendingLimits: Get<u32>;

		/// Time between initiating and executing a recovery.
		#[pallet::constant]
		type RecoveryDelay: Get<Self::Moment>;

		#[pallet::constant]
		type MaxSessionDuration: Get<Self::Moment>;

		/// Length of a spending window.
		#[pallet::constant]
		type SpendingPeriod: Get<Self::Moment>;

		type WeightInfo: WeightInfo;
	}

	#[pallet::storage]
	pub type Accounts<T: Config> =
		StorageMap<_, Blake2_128Concat, T::AccountId, SmartAccount<T>, OptionQuery>;

	#[pallet::storage]
	pub type RecoveryRequests<T: Config> =
		StorageMap<_, Blake2_128Concat, RecoveryId, RecoveryRequest<T>, OptionQuery>;

	#[pallet::storage]
	pub type NextRecoveryId<T: Config> = StorageValue<_, RecoveryId, ValueQuery>;

	/// Requests of an account that were neither executed nor canceled.
	#[pallet::storage]
	pub type PendingRecoveries<T: Config> = StorageMap<
		_,
		Blake2_128Concat,
		T::AccountId,
		BoundedVec<RecoveryId, T::MaxGuardians>,
		ValueQuery,
	>;

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		AccountCreated { account: T::AccountId, owner: T::AccountId, required_quorum: u32 },
		GuardianAdded { account: T::AccountId, guardian: T::AccountId },
		GuardianRemoved { account: T::AccountId, guardian: T::AccountId },
		AccountLocked { account: T::AccountId },
		AccountUnlocked { account: T::AccountId },
		SessionKeyCreated { account: T::AccountId, key: T::AccountId, expires_at: T::Moment },
		SessionKeyRevoked { account: T::AccountId, key: T::AccountId },
		SpendingLimitSet { account: T::AccountId, asset: Asset, daily_cap: Balance },
		SponsorSet { account: T::AccountId, sponsor: Option<T::AccountId> },
		/// value left the smart account
		Transferred { account: T::AccountId, asset: Asset, to: T::AccountId, amount: Balance },
		RecoveryInitiated {
			id: RecoveryId,
			account: T::AccountId,
			new_owner: T::AccountId,
			execute_after: T::Moment,
		},
		RecoveryApproved { id: RecoveryId, guardian: T::AccountId, approvals: u32 },
		RecoveryExecuted { id: RecoveryId, account: T::AccountId, new_owner: T::AccountId },
		RecoveryCanceled { id: RecoveryId, account: T::AccountId },
	}

	#[pallet::error]
	pub enum Error<T> {
		/// owner is the empty account, or recovery would not change the owner
		InvalidOwner,
		TooManyGuardians,
		/// the owner cannot guard its own account
		GuardianIsOwner,
		DuplicateGuardian,
		/// quorum must be between 1 and the number of guardians
		InvalidQuorum,
		/// an account with the derived id exists already
		DuplicateAccount,
		AccountNotFound,
		NotOwner,
		AccountLocked,
		/// caller may not lock this account
		NotAuthorized,
		AlreadyGuardian,
		GuardianLimitReached,
		NotAGuardian,
		DurationTooLong,
		ZeroDuration,
		TooManySessionKeys,
		SessionKeyNotFound,
		TooManySpendingLimits,
		RecoveryNotFound,
		/// the recovery request was executed or canceled already
		RequestNotActive,
		AlreadyApproved,
		QuorumNotMet,
		DelayNotElapsed,
		/// the guardian has a pending recovery request for this account already
		RecoveryAlreadyInitiated,
		/// the account has too many pending recovery requests
		TooManyRecoveries,
		DailyLimitExceeded,
		InvalidNonce,
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Create a smart account. The caller pays for it but does not control it.
		#[pallet::call_index(0)]
		#[pallet::weight(<T as Config>::WeightInfo::create_account())]
		pub fn create_account(
			origin: OriginFor<T>,
			owner: T::AccountId,
			guardians: Vec<T::AccountId>,
			quorum: u32,
			biometric_hash: Option<H256>,
			salt: u32,
		) -> DispatchResult {
			ensure_signed(origin)?;
			Self::do_create_account(owner, guardians, quorum, biometric_hash, salt).map(|_| ())
		}

		#[pallet::call_index(1)]
		#[pallet::weight(<T as Config>::WeightInfo::add_guardian())]
		pub fn add_guardian(
			origin: OriginFor<T>,
			account: T::AccountId,
			guardian: T::AccountId,
		) -> DispatchResult {
			let sender = ensure_signed(origin)?;
			Self::ensure_owner(&account, &sender)?;
			Self::do_add_guardian(&account, guardian)
		}

		#[pallet::call_index(2)]
		#[pallet::weight(<T as Config>::WeightInfo::remove_guardian())]
		pub fn remove_guardian(
			origin: OriginFor<T>,
			account: T::AccountId,
			guardian: T::AccountId,
		) -> DispatchResult {
			let sender = ensure_signed(origin)?;
			Self::ensure_owner(&account, &sender)?;
			Self::do_remove_guardian(&account, &guardian)
		}

		/// Lock an account. Callable by the owner, any guardian or `AdminOrigin`. Locking a
		/// locked account is a no-op.
		#[pallet::call_index(3)]
		#[pallet::weight(<T as Config>::WeightInfo::lock_account())]
		pub fn lock_account(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
			let smart_account = Self::account_of(&account)?;
			let authorized = match ensure_signed(origin.clone()) {
				Ok(who) => who == smart_account.owner || smart_account.is_guardian(&who),
				Err(_) => false,
			} || T::AdminOrigin::ensure_origin(origin).is_ok();
			ensure!(authorized, Error::<T>::NotAuthorized);
			Self::do_lock(&account)
		}

		#[pallet::call_index(4)]
		#[pallet::weight(<T as Config>::WeightInfo::unlock_account())]
		pub fn unlock_account(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
			let sender = ensure_signed(origin)?;
			let mut smart_account = Self::account_of(&account)?;
			ensure!(smart_account.owner == sender, Error::<T>::NotOwner);
			if smart_account.locked {
				smart_account.locked = false;
				smart_account.locked_at = None;
				Accounts::<T>::insert(&account, smart_account);
				info!(target: LOG, "unlocked {:?}", account);
				Self::deposit_event(Event::AccountUnlocked { account });
			}
			Ok(())
		}

		/// Delegate limited control to `key` for `duration`.
		#[pallet::call_index(5)]
		#[pallet::weight(<T as Config>::WeightInfo::create_session_key())]
		pub fn create_session_key(
			origin: OriginFor<T>,
			account: T::AccountId,
			key: T::AccountId,
			duration: T::Moment,
		) -> DispatchResult {
			let sender = ensure_signed(origin)?;
			Self::ensure_owner(&account, &sender)?;
			Self::do_create_session_key(&account, key, duration)
		}

		#[pallet::call_index(6)]
		#[pallet::weight(<T as Config>::WeightInfo::revoke_session_key())]
		pub fn revoke_session_key(
			origin: OriginFor<T>,
			account: T::AccountId,
			key: T::AccountId,
		) -> DispatchResult {
			let sender = ensure_signed(origin)?;
			Self::ensure_owner(&account, &sender)?;
			Self::do_revoke_session_key(&account, &key)
		}

		#[pallet::call_index(7)]
		#[pallet::weight(<T as Config>::WeightInfo::set_spending_limit())]
		pub fn set_spending_limit(
			origin: OriginFor<T>,
			account: T::AccountId,
			asset: Asset,
			daily_cap: Balance,
		) -> DispatchResult {
			let sender = ensure_signed(origin)?;
			Self::ensure_owner(&account, &sender)?;
			Self::do_set_spending_limit(&account, asset, daily_cap)
		}

		#[pallet::call_index(8)]
		#[pallet::weight(<T as Config>::WeightInfo::set_sponsor())]
		pub fn set_sponsor(
			origin: OriginFor<T>,
			account: T::AccountId,
			sponsor: Option<T::AccountId>,
		) -> DispatchResult {
			let sender = ensure_signed(origin)?;
			Self::ensure_owner(&account, &sender)?;
			Self::do_set_sponsor(&account, sponsor)
		}

		/// Propose `new_owner` for `account`. Counts as the initiating guardian's approval.
		#[pallet::call_index(9)]
		#[pallet::weight(<T as Config>::WeightInfo::initiate_recovery())]
		pub fn initiate_recovery(
			origin: OriginFor<T>,
			account: T::AccountId,
			new_owner: T::AccountId,
		) -> DispatchResult {
			let guardian = ensure_signed(origin)?;
			let smart_account = Self::account_of(&account)?;
			ensure!(smart_account.is_guardian(&guardian), Error::<T>::NotAGuardian);
			ensure!(
				!is_zero_account(&new_owner) && new_owner != smart_account.owner,
				Error::<T>::InvalidOwner
			);
			ensure!(!smart_account.is_guardian(&new_owner), Error::<T>::GuardianIsOwner);

			let mut pending = PendingRecoveries::<T>::get(&account);
			ensure!(
				!pending.iter().any(|id| {
					RecoveryRequests::<T>::get(id).is_some_and(|r| r.initiator == guardian)
				}),
				Error::<T>::RecoveryAlreadyInitiated
			);
			let id = NextRecoveryId::<T>::get();
			pending.try_push(id).map_err(|_| Error::<T>::TooManyRecoveries)?;

			let now = Self::now();
			let execute_after = now.saturating_add(T::RecoveryDelay::get());
			let mut approvals = BoundedVec::<T::AccountId, T::MaxGuardians>::default();
			approvals.try_push(guardian.clone()).map_err(|_| Error::<T>::GuardianLimitReached)?;

			NextRecoveryId::<T>::put(id.saturating_add(1));
			PendingRecoveries::<T>::insert(&account, pending);
			RecoveryRequests::<T>::insert(
				id,
				RecoveryRequest {
					account: account.clone(),
					initiator: guardian,
					new_owner: new_owner.clone(),
					approvals,
					created_at: now,
					execute_after,
					executed: false,
					canceled: false,
				},
			);
			info!(target: LOG, "recovery {} initiated for {:?} to {:?}", id, account, new_owner);
			Self::deposit_event(Event::RecoveryInitiated { id, account, new_owner, execute_after });
			Ok(())
		}

		#[pallet::call_index(10)]
		#[pallet::weight(<T as Config>::WeightInfo::approve_recovery())]
		pub fn approve_recovery(origin: OriginFor<T>, id: RecoveryId) -> DispatchResult {
			let guardian = ensure_signed(origin)?;
			let mut request = RecoveryRequests::<T>::get(id).ok_or(Error::<T>::RecoveryNotFound)?;
			let smart_account = Self::account_of(&request.account)?;
			ensure!(smart_account.is_guardian(&guardian), Error::<T>::NotAGuardian);
			ensure!(request.is_active(), Error::<T>::RequestNotActive);
			ensure!(!request.approvals.contains(&guardian), Error::<T>::AlreadyApproved);

			// approvals of former guardians no longer count and would block the bound
			request.approvals.retain(|approver| smart_account.is_guardian(approver));
			request
				.approvals
				.try_push(guardian.clone())
				.map_err(|_| Error::<T>::GuardianLimitReached)?;
			let approvals = request.approvals.len() as u32;
			RecoveryRequests::<T>::insert(id, request);
			debug!(target: LOG, "recovery {} approved by {:?}", id, guardian);
			Self::deposit_event(Event::RecoveryApproved { id, guardian, approvals });
			Ok(())
		}

		/// Hand the account over to the proposed owner. Anyone may trigger this once quorum
		/// and delay are satisfied. All other pending requests of the account are canceled,
		/// a competing request has to be initiated again under the new owner.
		#[pallet::call_index(11)]
		#[pallet::weight(<T as Config>::WeightInfo::execute_recovery())]
		pub fn execute_recovery(origin: OriginFor<T>, id: RecoveryId) -> DispatchResult {
			ensure_signed(origin)?;
			let mut request = RecoveryRequests::<T>::get(id).ok_or(Error::<T>::RecoveryNotFound)?;
			ensure!(request.is_active(), Error::<T>::RequestNotActive);
			let mut smart_account = Self::account_of(&request.account)?;

			let valid_approvals = request
				.approvals
				.iter()
				.filter(|approver| smart_account.is_guardian(approver))
				.count() as u32;
			ensure!(valid_approvals >= smart_account.required_quorum, Error::<T>::QuorumNotMet);
			ensure!(Self::now() >= request.execute_after, Error::<T>::DelayNotElapsed);
			// the new owner may have become a guardian after the request was made
			ensure!(!smart_account.is_guardian(&request.new_owner), Error::<T>::GuardianIsOwner);

			smart_account.owner = request.new_owner.clone();
			smart_account.locked = false;
			smart_account.locked_at = None;
			smart_account.nonce = smart_account.nonce.saturating_add(1);
			// delegated by the previous owner
			smart_account.session_keys = Default::default();
			request.executed = true;

			Accounts::<T>::insert(&request.account, smart_account);
			RecoveryRequests::<T>::insert(id, request.clone());
			for other in PendingRecoveries::<T>::take(&request.account) {
				if other != id {
					Self::do_cancel_recovery(other);
				}
			}
			info!(
				target: LOG,
				"recovery {} executed: {:?} now owned by {:?}",
				id,
				request.account,
				request.new_owner
			);
			Self::deposit_event(Event::RecoveryExecuted {
				id,
				account: request.account,
				new_owner: request.new_owner,
			});
			Ok(())
		}

		/// Abort a pending recovery. Only the current owner can do this, also while locked.
		#[pallet::call_index(12)]
		#[pallet::weight(<T as Config>::WeightInfo::cancel_recovery())]
		pub fn cancel_recovery(origin: OriginFor<T>, id: RecoveryId) -> DispatchResult {
			let sender = ensure_signed(origin)?;
			let request = RecoveryRequests::<T>::get(id).ok_or(Error::<T>::RecoveryNotFound)?;
			let smart_account = Self::account_of(&request.account)?;
			ensure!(smart_account.owner == sender, Error::<T>::NotOwner);
			ensure!(request.is_active(), Error::<T>::RequestNotActive);

			PendingRecoveries::<T>::mutate(&request.account, |pending| {
				pending.retain(|pending_id| *pending_id != id)
			});
			Self::do_cancel_recovery(id);
			Ok(())
		}

		/// Execute an account call as the owner, without going through a relayer.
		#[pallet::call_index(13)]
		#[pallet::weight(<T as Config>::WeightInfo::execute())]
		pub fn execute(
			origin: OriginFor<T>,
			account: T::AccountId,
			call: AccountCallOf<T>,
		) -> DispatchResult {
			let sender = ensure_signed(origin)?;
			Self::ensure_owner(&account, &sender)?;
			Self::do_execute(&account, call)
		}
	}
}

impl<T: Config> Pallet<T> {
	fn now() -> T::Moment {
		pallet_timestamp::Pallet::<T>::get()
	}

	/// The id a smart account with these parameters gets.
	pub fn derive_account_id(
		owner: &T::AccountId,
		guardians: &[T::AccountId],
		salt: u32,
	) -> T::AccountId {
		let seed = smart_account_seed(owner, guardians, salt);
		T::AccountId::decode(&mut TrailingZeroInput::new(&seed))
			.expect("infinite length input; no invalid inputs for type; qed")
	}

	pub fn do_create_account(
		owner: T::AccountId,
		guardians: Vec<T::AccountId>,
		quorum: u32,
		biometric_hash: Option<H256>,
		salt: u32,
	) -> Result<T::AccountId, DispatchError> {
		ensure!(!is_zero_account(&owner), Error::<T>::InvalidOwner);
		ensure!(guardians.len() <= T::MaxGuardians::get() as usize, Error::<T>::TooManyGuardians);
		ensure!(!guardians.contains(&owner), Error::<T>::GuardianIsOwner);
		for (i, guardian) in guardians.iter().enumerate() {
			ensure!(!guardians[..i].contains(guardian), Error::<T>::DuplicateGuardian);
		}
		ensure!(quorum >= 1 && quorum as usize <= guardians.len(), Error::<T>::InvalidQuorum);

		let account = Self::derive_account_id(&owner, &guardians, salt);
		ensure!(!Accounts::<T>::contains_key(&account), Error::<T>::DuplicateAccount);

		let guardians: BoundedVec<T::AccountId, T::MaxGuardians> =
			guardians.try_into().map_err(|_| Error::<T>::TooManyGuardians)?;
		Accounts::<T>::insert(
			&account,
			SmartAccount {
				owner: owner.clone(),
				guardians,
				required_quorum: quorum,
				session_keys: Default::default(),
				spending: Default::default(),
				nonce: 0,
				locked: false,
				locked_at: None,
				biometric_hash,
				sponsor: None,
				created_at: Self::now(),
			},
		);
		info!(target: LOG, "created smart account {:?} owned by {:?}", account, owner);
		Self::deposit_event(Event::AccountCreated {
			account: account.clone(),
			owner,
			required_quorum: quorum,
		});
		Ok(account)
	}

	pub fn account(account: &T::AccountId) -> Option<SmartAccount<T>> {
		Accounts::<T>::get(account)
	}

	pub fn account_info(account: &T::AccountId) -> Option<AccountInfo<T::AccountId>> {
		Accounts::<T>::get(account).map(|a| a.info())
	}

	/// Current nonce, zero for unknown accounts.
	pub fn nonce(account: &T::AccountId) -> u64 {
		Accounts::<T>::get(account).map(|a| a.nonce).unwrap_or_default()
	}

	pub fn recovery_request(id: RecoveryId) -> Option<RecoveryInfo<T::AccountId, T::Moment>> {
		RecoveryRequests::<T>::get(id).map(|r| r.info())
	}

	/// Ids of the recovery requests of `account` that may still execute.
	pub fn pending_recoveries(account: &T::AccountId) -> Vec<RecoveryId> {
		PendingRecoveries::<T>::get(account).into_inner()
	}

	/// Mark a request canceled. Does not touch the pending index.
	fn do_cancel_recovery(id: RecoveryId) {
		let Some(mut request) = RecoveryRequests::<T>::get(id) else { return };
		if !request.is_active() {
			return
		}
		request.canceled = true;
		let account = request.account.clone();
		RecoveryRequests::<T>::insert(id, request);
		info!(target: LOG, "recovery {} of {:?} canceled", id, account);
		Self::deposit_event(Event::RecoveryCanceled { id, account });
	}

	/// Session keys that have not expired yet, with their expiry.
	pub fn session_keys(account: &T::AccountId) -> Vec<(T::AccountId, T::Moment)> {
		let now = Self::now();
		Accounts::<T>::get(account)
			.map(|a| a.session_keys.into_iter().filter(|(_, expiry)| now < *expiry).collect())
			.unwrap_or_default()
	}

	/// Amount of `asset` still spendable in the current window. `None` means unlimited.
	pub fn remaining_allowance(account: &T::AccountId, asset: Asset) -> Option<Balance> {
		let smart_account = Accounts::<T>::get(account)?;
		let mut limit = *smart_account.spending.get(&asset)?;
		limit.roll_window(Self::now(), T::SpendingPeriod::get());
		limit.remaining()
	}

	pub fn is_valid_session_key(account: &T::AccountId, key: &T::AccountId) -> bool {
		Accounts::<T>::get(account)
			.and_then(|a| a.session_keys.get(key).copied())
			.is_some_and(|expiry| Self::now() < expiry)
	}

	pub fn account_of(account: &T::AccountId) -> Result<SmartAccount<T>, DispatchError> {
		Accounts::<T>::get(account).ok_or_else(|| Error::<T>::AccountNotFound.into())
	}

	pub fn ensure_owner(account: &T::AccountId, who: &T::AccountId) -> DispatchResult {
		ensure!(Self::account_of(account)?.owner == *who, Error::<T>::NotOwner);
		Ok(())
	}

	pub fn ensure_unlocked(account: &T::AccountId) -> Result<SmartAccount<T>, DispatchError> {
		let smart_account = Self::account_of(account)?;
		ensure!(!smart_account.locked, Error::<T>::AccountLocked);
		Ok(smart_account)
	}

	/// Advance the nonce if it equals `expected`.
	pub fn consume_nonce(account: &T::AccountId, expected: u64) -> DispatchResult {
		Accounts::<T>::try_mutate(account, |maybe| -> DispatchResult {
			let smart_account = maybe.as_mut().ok_or(Error::<T>::AccountNotFound)?;
			ensure!(smart_account.nonce == expected, Error::<T>::InvalidNonce);
			smart_account.nonce = smart_account.nonce.saturating_add(1);
			Ok(())
		})
	}

	fn mutate_unlocked<R>(
		account: &T::AccountId,
		f: impl FnOnce(&mut SmartAccount<T>) -> Result<R, DispatchError>,
	) -> Result<R, DispatchError> {
		Accounts::<T>::try_mutate(account, |maybe| -> Result<R, DispatchError> {
			let smart_account = maybe.as_mut().ok_or(Error::<T>::AccountNotFound)?;
			ensure!(!smart_account.locked, Error::<T>::AccountLocked);
			f(smart_account)
		})
	}

	pub fn do_add_guardian(account: &T::AccountId, guardian: T::AccountId) -> DispatchResult {
		Self::mutate_unlocked(account, |smart_account| {
			ensure!(!smart_account.is_guardian(&guardian), Error::<T>::AlreadyGuardian);
			ensure!(smart_account.owner != guardian, Error::<T>::GuardianIsOwner);
			smart_account
				.guardians
				.try_push(guardian.clone())
				.map_err(|_| Error::<T>::GuardianLimitReached)?;
			Ok(())
		})?;
		info!(target: LOG, "guardian {:?} added to {:?}", guardian, account);
		Self::deposit_event(Event::GuardianAdded { account: account.clone(), guardian });
		Ok(())
	}

	pub fn do_remove_guardian(account: &T::AccountId, guardian: &T::AccountId) -> DispatchResult {
		Self::mutate_unlocked(account, |smart_account| {
			let index = smart_account
				.guardians
				.iter()
				.position(|g| g == guardian)
				.ok_or(Error::<T>::NotAGuardian)?;
			ensure!(
				smart_account.guardians.len() as u32 > smart_account.required_quorum,
				Error::<T>::InvalidQuorum
			);
			smart_account.guardians.remove(index);
			Ok(())
		})?;
		info!(target: LOG, "guardian {:?} removed from {:?}", guardian, account);
		Self::deposit_event(Event::GuardianRemoved {
			account: account.clone(),
			guardian: guardian.clone(),
		});
		Ok(())
	}

	/// Lock an account. Idempotent.
	pub fn do_lock(account: &T::AccountId) -> DispatchResult {
		let now = Self::now();
		let newly_locked =
			Accounts::<T>::try_mutate(account, |maybe| -> Result<bool, DispatchError> {
				let smart_account = maybe.as_mut().ok_or(Error::<T>::AccountNotFound)?;
				if smart_account.locked {
					return Ok(false)
				}
				smart_account.locked = true;
				smart_account.locked_at = Some(now);
				Ok(true)
			})?;
		if newly_locked {
			info!(target: LOG, "locked {:?}", account);
			Self::deposit_event(Event::AccountLocked { account: account.clone() });
		}
		Ok(())
	}

	pub fn do_create_session_key(
		account: &T::AccountId,
		key: T::AccountId,
		duration: T::Moment,
	) -> DispatchResult {
		ensure!(!duration.is_zero(), Error::<T>::ZeroDuration);
		ensure!(duration <= T::MaxSessionDuration::get(), Error::<T>::DurationTooLong);
		let now = Self::now();
		let expires_at = now.saturating_add(duration);
		Self::mutate_unlocked(account, |smart_account| {
			smart_account.session_keys.retain(|_, expiry| now < *expiry);
			smart_account
				.session_keys
				.try_insert(key.clone(), expires_at)
				.map_err(|_| Error::<T>::TooManySessionKeys)?;
			Ok(())
		})?;
		info!(target: LOG, "session key {:?} for {:?} until {:?}", key, account, expires_at);
		Self::deposit_event(Event::SessionKeyCreated { account: account.clone(), key, expires_at });
		Ok(())
	}

	pub fn do_revoke_session_key(account: &T::AccountId, key: &T::AccountId) -> DispatchResult {
		Self::mutate_unlocked(account, |smart_account| {
			smart_account.session_keys.remove(key).ok_or(Error::<T>::SessionKeyNotFound)?;
			Ok(())
		})?;
		info!(target: LOG, "session key {:?} of {:?} revoked", key, account);
		Self::deposit_event(Event::SessionKeyRevoked {
			account: account.clone(),
			key: key.clone(),
		});
		Ok(())
	}

	/// Set the daily cap of `asset`. The amount spent in the current window is kept.
	pub fn do_set_spending_limit(
		account: &T::AccountId,
		asset: Asset,
		daily_cap: Balance,
	) -> DispatchResult {
		let now = Self::now();
		Self::mutate_unlocked(account, |smart_account| {
			if let Some(limit) = smart_account.spending.get_mut(&asset) {
				limit.daily_cap = daily_cap;
				Ok(())
			} else {
				smart_account
					.spending
					.try_insert(asset, SpendingLimit::new(daily_cap, now))
					.map(|_| ())
					.map_err(|_| Error::<T>::TooManySpendingLimits.into())
			}
		})?;
		info!(
			target: LOG,
			"spending limit of {:?} for {:?} set to {:?}", asset, account, daily_cap
		);
		Self::deposit_event(Event::SpendingLimitSet { account: account.clone(), asset, daily_cap });
		Ok(())
	}

	pub fn do_set_sponsor(account: &T::AccountId, sponsor: Option<T::AccountId>) -> DispatchResult {
		Self::mutate_unlocked(account, |smart_account| {
			smart_account.sponsor = sponsor.clone();
			Ok(())
		})?;
		Self::deposit_event(Event::SponsorSet { account: account.clone(), sponsor });
		Ok(())
	}

	/// Account for `amount` of `asset` leaving the account in the current spending window.
	pub fn do_record_spend(
		account: &T::AccountId,
		asset: Asset,
		amount: Balance,
	) -> DispatchResult {
		let now = Self::now();
		Accounts::<T>::try_mutate(account, |maybe| -> DispatchResult {
			let smart_account = maybe.as_mut().ok_or(Error::<T>::AccountNotFound)?;
			if let Some(limit) = smart_account.spending.get_mut(&asset) {
				limit
					.try_spend(amount, now, T::SpendingPeriod::get())
					.map_err(|_| Error::<T>::DailyLimitExceeded)?;
			}
			Ok(())
		})
	}

	/// Move `amount` of `asset` from `from` to `to` without any policy check.
	pub fn transfer_asset(
		asset: Asset,
		from: &T::AccountId,
		to: &T::AccountId,
		amount: Balance,
	) -> DispatchResult {
		match asset {
			Asset::Native => {
				<T::Currency as fungible::Mutate<T::AccountId>>::transfer(
					from,
					to,
					amount,
					Preservation::Expendable,
				)?;
			},
			Asset::Token(token) =>
				pallet_custos_tokens::Pallet::<T>::do_transfer(token, from, to, amount)?,
		}
		Ok(())
	}

	/// Execute an account call on behalf of an authenticated signer.
	///
	/// Callers are responsible for authentication. Transfers are subject to the spending
	/// policy. Any error leaves the account untouched if the caller runs this
	/// transactionally.
	pub fn do_execute(account: &T::AccountId, call: AccountCallOf<T>) -> DispatchResult {
		match call {
			AccountCall::Transfer { asset, to, amount } => {
				Self::ensure_unlocked(account)?;
				Self::do_record_spend(account, asset, amount)?;
				Self::transfer_asset(asset, account, &to, amount)?;
				debug!(
					target: LOG,
					"{:?} transferred {:?} of {:?} to {:?}", account, amount, asset, to
				);
				Self::deposit_event(Event::Transferred {
					account: account.clone(),
					asset,
					to,
					amount,
				});
				Ok(())
			},
			AccountCall::SetSpendingLimit { asset, daily_cap } =>
				Self::do_set_spending_limit(account, asset, daily_cap),
			AccountCall::CreateSessionKey { key, duration } =>
				Self::do_create_session_key(account, key, duration),
			AccountCall::RevokeSessionKey { key } => Self::do_revoke_session_key(account, &key),
			AccountCall::AddGuardian { guardian } => Self::do_add_guardian(account, guardian),
			AccountCall::RemoveGuardian { guardian } =>
				Self::do_remove_guardian(account, &guardian),
			AccountCall::SetSponsor { sponsor } => Self::do_set_sponsor(account, sponsor),
			AccountCall::Lock => Self::do_lock(account),
		}
	}
}
