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

//! # Relay Pallet
//!
//! Registered relayers submit user operations signed off-chain by the owner of a smart
//! account, or by one of its session keys, and get paid a fee for doing so.
//!
//! An operation is validated in this order: relayer, deadline, replay, lock, nonce. Once the
//! nonce check passed, the nonce is consumed and the operation hash is remembered, whatever
//! happens next. Later failures (signature, gas limit, spending policy, the call itself, fee
//! settlement) are reported as a rejected [`ExecutionResult`] and an `OperationRejected` event
//! while the extrinsic itself succeeds. Wallets must therefore re-sign with the next nonce
//! instead of resubmitting a rejected operation.
//!
//! Fees are paid by the account's designated sponsor if the sponsor allow-listed the account
//! and both the per-user cap and the sponsor budget cover the fee. Otherwise the account pays.

#![cfg_attr(not(feature = "std"), no_std)]

use core::marker::PhantomData;
use custos_primitives::{
	accounts::AccountCall,
	common::{Asset, Balance},
	relay::{
		BatchOperation, BatchResult, ExecutionResult, ExecutionStatus, OperationParams,
		OperationSignature, RelayerInfo, SponsorInfo, SponsoredUser, UserOperation,
	},
};
use frame_support::{dispatch::DispatchResult, ensure, storage::with_storage_layer, traits::Get};
use frame_system::ensure_signed;
use log::{debug, info, warn};
use pallet_custos_smart_accounts::{AccountCallOf, Pallet as SmartAccounts, SmartAccount};
use sp_core::H256;
use sp_runtime::{
	traits::{IdentifyAccount, Saturating, Verify, Zero},
	DispatchError,
};

// Logger target
const LOG: &str = "custos::relay";

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;
#[cfg(test)]
mod mock;
pub mod weights;

pub type UserOperationOf<T> = UserOperation<
	<T as frame_system::Config>::AccountId,
	<T as pallet_timestamp::Config>::Moment,
	<T as Config>::Signature,
>;
pub type BatchOperationOf<T> = BatchOperation<
	<T as frame_system::Config>::AccountId,
	<T as pallet_timestamp::Config>::Moment,
	<T as Config>::Signature,
>;
pub type OperationSignatureOf<T> =
	OperationSignature<<T as frame_system::Config>::AccountId, <T as Config>::Signature>;

#[frame_support::pallet]
pub mod pallet {
	use super::*;
	use frame_support::pallet_prelude::*;
	use frame_system::pallet_prelude::*;

	#[pallet::pallet]
	pub struct Pallet<T>(PhantomData<T>);

	#[pallet::config]
	pub trait Config: frame_system::Config + pallet_custos_smart_accounts::Config {
		#[allow(deprecated)]
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

		type Public: IdentifyAccount<AccountId = Self::AccountId>;
		type Signature: Verify<Signer = Self::Public> + Parameter;

		/// Manages the relayer registry.
		type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

		/// How far in the future an operation deadline may lie.
		#[pallet::constant]
		type MaxOperationValidity: Get<Self::Moment>;

		#[pallet::constant]
		type MaxBatchSize: Get<u32>;

		/// Gas charged for every operation on top of its calls.
		#[pallet::constant]
		type BaseGas: Get<u64>;

		#[pallet::constant]
		type TransferGas: Get<u64>;

		/// Gas of any account call other than a transfer.
		#[pallet::constant]
		type AdminCallGas: Get<u64>;

		/// Whether failed calls of a batch count towards its fee.
		#[pallet::constant]
		type ChargeFailedBatchCalls: Get<bool>;

		type WeightInfo: WeightInfo;
	}

	#[pallet::storage]
	pub type Relayers<T: Config> =
		StorageMap<_, Blake2_128Concat, T::AccountId, RelayerInfo, OptionQuery>;

	#[pallet::storage]
	pub type Sponsors<T: Config> =
		StorageMap<_, Blake2_128Concat, T::AccountId, SponsorInfo, OptionQuery>;

	/// sponsor -> user -> allowance
	#[pallet::storage]
	pub type SponsoredUsers<T: Config> = StorageDoubleMap<
		_,
		Blake2_128Concat,
		T::AccountId,
		Blake2_128Concat,
		T::AccountId,
		SponsoredUser,
		OptionQuery,
	>;

	/// Hashes of all operations that passed the nonce check, with the moment they did.
	#[pallet::storage]
	pub type ExecutedOperations<T: Config> =
		StorageMap<_, Identity, H256, T::Moment, OptionQuery>;

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		RelayerRegistered { relayer: T::AccountId },
		RelayerDeactivated { relayer: T::AccountId },
		OperationExecuted {
			hash: H256,
			sender: T::AccountId,
			relayer: T::AccountId,
			gas_used: u64,
			fee_charged: Balance,
			sponsored_by: Option<T::AccountId>,
		},
		/// the operation consumed its nonce but had no effect
		OperationRejected {
			hash: H256,
			sender: T::AccountId,
			relayer: T::AccountId,
			reason: DispatchError,
		},
		BatchExecuted {
			hash: H256,
			sender: T::AccountId,
			relayer: T::AccountId,
			success_count: u32,
			total_calls: u32,
			gas_used: u64,
			fee_charged: Balance,
			sponsored_by: Option<T::AccountId>,
		},
		/// one call of a batch failed and was reverted, the others were not affected
		BatchCallFailed { hash: H256, index: u32, error: DispatchError },
		SponsorRegistered { sponsor: T::AccountId, budget: Balance },
		SponsorDeactivated { sponsor: T::AccountId },
		SponsoredUserAdded { sponsor: T::AccountId, user: T::AccountId, cap: Option<Balance> },
		SponsoredUserRemoved { sponsor: T::AccountId, user: T::AccountId },
	}

	#[pallet::error]
	pub enum Error<T> {
		RelayerAlreadyActive,
		RelayerNotFound,
		/// submitter is not an active relayer
		RelayerNotActive,
		/// the deadline of the operation has passed
		OperationExpired,
		/// the deadline lies further in the future than allowed
		DeadlineTooFar,
		/// an operation with this hash passed validation before
		ReplayDetected,
		/// signed neither by the owner nor by a valid session key
		InvalidSignature,
		/// session keys may only transfer and lock
		SessionKeyNotPermitted,
		GasLimitExceeded,
		EmptyBatch,
		BatchTooLarge,
		SponsorNotFound,
		UserNotSponsored,
		/// the sponsor is inactive or its budget does not cover the fee
		SponsorBudgetExceeded,
		/// the per-user cap of the sponsor does not cover the fee
		SponsorCapExceeded,
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Register a relayer, or re-activate a deactivated one keeping its statistics.
		#[pallet::call_index(0)]
		#[pallet::weight(<T as Config>::WeightInfo::register_relayer())]
		pub fn register_relayer(origin: OriginFor<T>, relayer: T::AccountId) -> DispatchResult {
			<T as Config>::AdminOrigin::ensure_origin(origin)?;
			Relayers::<T>::try_mutate(&relayer, |maybe| -> DispatchResult {
				let info = maybe.get_or_insert_with(Default::default);
				ensure!(!info.active, Error::<T>::RelayerAlreadyActive);
				info.active = true;
				Ok(())
			})?;
			info!(target: LOG, "registered relayer {:?}", relayer);
			Self::deposit_event(Event::RelayerRegistered { relayer });
			Ok(())
		}

		#[pallet::call_index(1)]
		#[pallet::weight(<T as Config>::WeightInfo::deactivate_relayer())]
		pub fn deactivate_relayer(origin: OriginFor<T>, relayer: T::AccountId) -> DispatchResult {
			<T as Config>::AdminOrigin::ensure_origin(origin)?;
			Relayers::<T>::try_mutate(&relayer, |maybe| -> DispatchResult {
				let info = maybe.as_mut().ok_or(Error::<T>::RelayerNotFound)?;
				info.active = false;
				Ok(())
			})?;
			info!(target: LOG, "deactivated relayer {:?}", relayer);
			Self::deposit_event(Event::RelayerDeactivated { relayer });
			Ok(())
		}

		/// Submit a signed user operation. Succeeds as soon as the nonce was consumed; the
		/// outcome is reported by `OperationExecuted` or `OperationRejected`.
		#[pallet::call_index(2)]
		#[pallet::weight(<T as Config>::WeightInfo::submit_operation())]
		pub fn submit_operation(origin: OriginFor<T>, op: UserOperationOf<T>) -> DispatchResult {
			let relayer = ensure_signed(origin)?;
			Self::do_submit_operation(&relayer, op).map(|_| ())
		}

		#[pallet::call_index(3)]
		#[pallet::weight(<T as Config>::WeightInfo::submit_batch(batch.calls.len() as u32))]
		pub fn submit_batch(origin: OriginFor<T>, batch: BatchOperationOf<T>) -> DispatchResult {
			let relayer = ensure_signed(origin)?;
			Self::do_submit_batch(&relayer, batch).map(|_| ())
		}

		/// Register as sponsor with `budget`. Registering again re-activates the sponsor and
		/// tops up its budget.
		#[pallet::call_index(4)]
		#[pallet::weight(<T as Config>::WeightInfo::register_sponsor())]
		pub fn register_sponsor(origin: OriginFor<T>, budget: Balance) -> DispatchResult {
			let sponsor = ensure_signed(origin)?;
			let total = Sponsors::<T>::mutate(&sponsor, |maybe| {
				let info = maybe.get_or_insert_with(Default::default);
				info.active = true;
				info.budget = info.budget.saturating_add(budget);
				info.budget
			});
			info!(target: LOG, "sponsor {:?} registered with budget {:?}", sponsor, total);
			Self::deposit_event(Event::SponsorRegistered { sponsor, budget: total });
			Ok(())
		}

		#[pallet::call_index(5)]
		#[pallet::weight(<T as Config>::WeightInfo::deactivate_sponsor())]
		pub fn deactivate_sponsor(origin: OriginFor<T>) -> DispatchResult {
			let sponsor = ensure_signed(origin)?;
			Sponsors::<T>::try_mutate(&sponsor, |maybe| -> DispatchResult {
				maybe.as_mut().ok_or(Error::<T>::SponsorNotFound)?.active = false;
				Ok(())
			})?;
			info!(target: LOG, "sponsor {:?} deactivated", sponsor);
			Self::deposit_event(Event::SponsorDeactivated { sponsor });
			Ok(())
		}

		/// Allow-list `user` with an optional cap on the fees paid for it. Updating an entry
		/// keeps the fees paid so far.
		#[pallet::call_index(6)]
		#[pallet::weight(<T as Config>::WeightInfo::add_sponsored_user())]
		pub fn add_sponsored_user(
			origin: OriginFor<T>,
			user: T::AccountId,
			cap: Option<Balance>,
		) -> DispatchResult {
			let sponsor = ensure_signed(origin)?;
			ensure!(Sponsors::<T>::contains_key(&sponsor), Error::<T>::SponsorNotFound);
			SponsoredUsers::<T>::mutate(&sponsor, &user, |entry| {
				let used = entry.map(|e| e.used).unwrap_or_default();
				*entry = Some(SponsoredUser { cap, used });
			});
			debug!(target: LOG, "sponsor {:?} covers {:?} up to {:?}", sponsor, user, cap);
			Self::deposit_event(Event::SponsoredUserAdded { sponsor, user, cap });
			Ok(())
		}

		#[pallet::call_index(7)]
		#[pallet::weight(<T as Config>::WeightInfo::remove_sponsored_user())]
		pub fn remove_sponsored_user(origin: OriginFor<T>, user: T::AccountId) -> DispatchResult {
			let sponsor = ensure_signed(origin)?;
			ensure!(
				SponsoredUsers::<T>::contains_key(&sponsor, &user),
				Error::<T>::UserNotSponsored
			);
			SponsoredUsers::<T>::remove(&sponsor, &user);
			debug!(target: LOG, "sponsor {:?} dropped {:?}", sponsor, user);
			Self::deposit_event(Event::SponsoredUserRemoved { sponsor, user });
			Ok(())
		}
	}
}

impl<T: Config> Pallet<T> {
	fn now() -> T::Moment {
		pallet_timestamp::Pallet::<T>::get()
	}

	pub fn relayer_info(relayer: &T::AccountId) -> Option<RelayerInfo> {
		Relayers::<T>::get(relayer)
	}

	pub fn sponsor_info(sponsor: &T::AccountId) -> Option<SponsorInfo> {
		Sponsors::<T>::get(sponsor)
	}

	pub fn sponsored_user(sponsor: &T::AccountId, user: &T::AccountId) -> Option<SponsoredUser> {
		SponsoredUsers::<T>::get(sponsor, user)
	}

	pub fn is_user_sponsored(sponsor: &T::AccountId, user: &T::AccountId) -> bool {
		SponsoredUsers::<T>::contains_key(sponsor, user)
	}

	pub fn is_operation_executed(hash: &H256) -> bool {
		ExecutedOperations::<T>::contains_key(hash)
	}

	pub fn call_gas(call: &AccountCallOf<T>) -> u64 {
		match call {
			AccountCall::Transfer { .. } => T::TransferGas::get(),
			_ => T::AdminCallGas::get(),
		}
	}

	/// Gas consumed by an operation executing all of `calls`.
	pub fn estimate_gas(calls: &[AccountCallOf<T>]) -> u64 {
		calls
			.iter()
			.fold(T::BaseGas::get(), |gas, call| gas.saturating_add(Self::call_gas(call)))
	}

	/// Validate, commit and execute a single user operation.
	///
	/// `Err` means the operation did not pass the nonce check and left no trace. Otherwise
	/// the nonce is consumed and the returned result tells whether the call was executed.
	pub fn do_submit_operation(
		relayer: &T::AccountId,
		op: UserOperationOf<T>,
	) -> Result<ExecutionResult<T::AccountId>, DispatchError> {
		let hash = op.hash();
		let sender = op.sender.clone();
		let smart_account =
			Self::validate_and_commit(relayer, &sender, op.nonce, op.params.deadline, hash)?;

		let result = Self::execute_operation(relayer, &smart_account, hash, op)
			.unwrap_or_else(ExecutionResult::rejected);
		match result.reason {
			None => {
				Self::record_execution(relayer, result.gas_used, result.fee_charged);
				info!(
					target: LOG,
					"operation {:?} of {:?} executed, fee {:?}", hash, sender, result.fee_charged
				);
				Self::deposit_event(Event::OperationExecuted {
					hash,
					sender,
					relayer: relayer.clone(),
					gas_used: result.gas_used,
					fee_charged: result.fee_charged,
					sponsored_by: result.sponsored_by.clone(),
				});
			},
			Some(reason) => {
				warn!(target: LOG, "operation {:?} of {:?} rejected: {:?}", hash, sender, reason);
				Self::deposit_event(Event::OperationRejected {
					hash,
					sender,
					relayer: relayer.clone(),
					reason,
				});
			},
		}
		Ok(result)
	}

	/// Validate and commit a batch once, then execute its calls one by one.
	///
	/// A failing call is reverted on its own and does not affect the others. Whether it
	/// counts towards the fee is decided by `ChargeFailedBatchCalls`.
	pub fn do_submit_batch(
		relayer: &T::AccountId,
		batch: BatchOperationOf<T>,
	) -> Result<BatchResult<T::AccountId>, DispatchError> {
		ensure!(!batch.calls.is_empty(), Error::<T>::EmptyBatch);
		ensure!(batch.calls.len() as u32 <= T::MaxBatchSize::get(), Error::<T>::BatchTooLarge);
		let hash = batch.hash();
		let sender = batch.sender.clone();
		let total_calls = batch.calls.len() as u32;
		let smart_account =
			Self::validate_and_commit(relayer, &sender, batch.nonce, batch.params.deadline, hash)?;

		let result = Self::execute_batch(relayer, &smart_account, hash, batch)
			.unwrap_or_else(|reason| BatchResult::rejected(reason, total_calls));
		match result.reason {
			None => {
				Self::record_execution(relayer, result.total_gas_used, result.fee_charged);
				info!(
					target: LOG,
					"batch {:?} of {:?} executed, {}/{} calls succeeded",
					hash,
					sender,
					result.success_count,
					total_calls
				);
				Self::deposit_event(Event::BatchExecuted {
					hash,
					sender,
					relayer: relayer.clone(),
					success_count: result.success_count,
					total_calls,
					gas_used: result.total_gas_used,
					fee_charged: result.fee_charged,
					sponsored_by: result.sponsored_by.clone(),
				});
			},
			Some(reason) => {
				warn!(target: LOG, "batch {:?} of {:?} rejected: {:?}", hash, sender, reason);
				Self::deposit_event(Event::OperationRejected {
					hash,
					sender,
					relayer: relayer.clone(),
					reason,
				});
			},
		}
		Ok(result)
	}

	/// Checks up to and including the nonce. On success the nonce is consumed and the hash
	/// recorded as executed.
	fn validate_and_commit(
		relayer: &T::AccountId,
		sender: &T::AccountId,
		nonce: u64,
		deadline: T::Moment,
		hash: H256,
	) -> Result<SmartAccount<T>, DispatchError> {
		ensure!(
			Relayers::<T>::get(relayer).is_some_and(|info| info.active),
			Error::<T>::RelayerNotActive
		);
		let now = Self::now();
		ensure!(now <= deadline, Error::<T>::OperationExpired);
		ensure!(
			deadline <= now.saturating_add(T::MaxOperationValidity::get()),
			Error::<T>::DeadlineTooFar
		);
		ensure!(!ExecutedOperations::<T>::contains_key(hash), Error::<T>::ReplayDetected);
		let smart_account = SmartAccounts::<T>::ensure_unlocked(sender)?;
		SmartAccounts::<T>::consume_nonce(sender, nonce)?;

		ExecutedOperations::<T>::insert(hash, now);
		Relayers::<T>::mutate(relayer, |maybe| {
			if let Some(info) = maybe {
				info.tx_count = info.tx_count.saturating_add(1);
			}
		});
		debug!(target: LOG, "operation {:?} of {:?} consumed nonce {}", hash, sender, nonce);
		Ok(smart_account)
	}

	fn execute_operation(
		relayer: &T::AccountId,
		smart_account: &SmartAccount<T>,
		hash: H256,
		op: UserOperationOf<T>,
	) -> Result<ExecutionResult<T::AccountId>, DispatchError> {
		let UserOperation { sender, call, params, signature, .. } = op;
		let calls = [call];
		Self::authenticate(smart_account, &sender, hash, &signature, &calls)?;
		let gas_used = Self::ensure_gas(&params, &calls)?;
		let [call] = calls;
		with_storage_layer(|| {
			SmartAccounts::<T>::do_execute(&sender, call)?;
			let fee_charged = params.fee_for(gas_used);
			let sponsored_by = Self::settle_fee(relayer, &sender, params.fee_asset, fee_charged)?;
			Ok(ExecutionResult {
				status: ExecutionStatus::Executed,
				reason: None,
				gas_used,
				fee_charged,
				sponsored_by,
			})
		})
	}

	fn execute_batch(
		relayer: &T::AccountId,
		smart_account: &SmartAccount<T>,
		hash: H256,
		batch: BatchOperationOf<T>,
	) -> Result<BatchResult<T::AccountId>, DispatchError> {
		let BatchOperation { sender, calls, params, signature, .. } = batch;
		Self::authenticate(smart_account, &sender, hash, &signature, &calls)?;
		Self::ensure_gas(&params, &calls)?;
		let total_calls = calls.len() as u32;
		let charge_failed = T::ChargeFailedBatchCalls::get();

		with_storage_layer(|| {
			let mut success_count = 0u32;
			let mut gas_used = T::BaseGas::get();
			for (index, call) in calls.into_iter().enumerate() {
				let gas = Self::call_gas(&call);
				match with_storage_layer(|| SmartAccounts::<T>::do_execute(&sender, call)) {
					Ok(()) => {
						success_count.saturating_inc();
						gas_used = gas_used.saturating_add(gas);
					},
					Err(error) => {
						debug!(
							target: LOG,
							"call {} of batch {:?} failed: {:?}", index, hash, error
						);
						Self::deposit_event(Event::BatchCallFailed {
							hash,
							index: index as u32,
							error,
						});
						if charge_failed {
							gas_used = gas_used.saturating_add(gas);
						}
					},
				}
			}
			let fee_charged = params.fee_for(gas_used);
			let sponsored_by = Self::settle_fee(relayer, &sender, params.fee_asset, fee_charged)?;
			Ok(BatchResult {
				status: ExecutionStatus::Executed,
				reason: None,
				success_count,
				total_calls,
				total_gas_used: gas_used,
				fee_charged,
				sponsored_by,
			})
		})
	}

	/// The operation must be signed by the owner, or by an unexpired session key of the
	/// account restricted to the calls session keys may issue.
	fn authenticate(
		smart_account: &SmartAccount<T>,
		sender: &T::AccountId,
		hash: H256,
		signature: &OperationSignatureOf<T>,
		calls: &[AccountCallOf<T>],
	) -> DispatchResult {
		let signer = match signature {
			OperationSignature::Owner(_) => &smart_account.owner,
			OperationSignature::SessionKey { key, .. } => {
				ensure!(
					SmartAccounts::<T>::is_valid_session_key(sender, key),
					Error::<T>::InvalidSignature
				);
				key
			},
		};
		ensure!(
			signature.signature().verify(hash.as_bytes(), signer),
			Error::<T>::InvalidSignature
		);
		if matches!(signature, OperationSignature::SessionKey { .. }) {
			ensure!(
				calls.iter().all(|call| call.session_key_permitted()),
				Error::<T>::SessionKeyNotPermitted
			);
		}
		Ok(())
	}

	fn ensure_gas(
		params: &OperationParams<T::Moment>,
		calls: &[AccountCallOf<T>],
	) -> Result<u64, DispatchError> {
		let gas = Self::estimate_gas(calls);
		ensure!(gas <= params.gas_limit, Error::<T>::GasLimitExceeded);
		Ok(gas)
	}

	/// Pay `fee` to the relayer. The sponsor designated by `sender` pays if it can, `sender`
	/// pays otherwise. Returns the sponsor that paid.
	fn settle_fee(
		relayer: &T::AccountId,
		sender: &T::AccountId,
		asset: Asset,
		fee: Balance,
	) -> Result<Option<T::AccountId>, DispatchError> {
		if fee.is_zero() {
			return Ok(None)
		}
		// read after execution, the operation may have changed it
		let sponsor = SmartAccounts::<T>::account(sender).and_then(|a| a.sponsor);
		if let Some(sponsor) = sponsor {
			match with_storage_layer(|| Self::charge_sponsor(&sponsor, sender, relayer, asset, fee))
			{
				Ok(()) => return Ok(Some(sponsor)),
				Err(e) => debug!(
					target: LOG,
					"{:?} pays its own fee, sponsor {:?} declined: {:?}", sender, sponsor, e
				),
			}
		}
		SmartAccounts::<T>::transfer_asset(asset, sender, relayer, fee)?;
		Ok(None)
	}

	fn charge_sponsor(
		sponsor: &T::AccountId,
		user: &T::AccountId,
		relayer: &T::AccountId,
		asset: Asset,
		fee: Balance,
	) -> DispatchResult {
		let mut info = Sponsors::<T>::get(sponsor).ok_or(Error::<T>::SponsorNotFound)?;
		ensure!(info.can_cover(fee), Error::<T>::SponsorBudgetExceeded);
		let mut entry =
			SponsoredUsers::<T>::get(sponsor, user).ok_or(Error::<T>::UserNotSponsored)?;
		ensure!(entry.can_cover(fee), Error::<T>::SponsorCapExceeded);

		SmartAccounts::<T>::transfer_asset(asset, sponsor, relayer, fee)?;
		info.used = info.used.saturating_add(fee);
		entry.used = entry.used.saturating_add(fee);
		Sponsors::<T>::insert(sponsor, info);
		SponsoredUsers::<T>::insert(sponsor, user, entry);
		Ok(())
	}

	fn record_execution(relayer: &T::AccountId, gas_used: u64, fee: Balance) {
		Relayers::<T>::mutate(relayer, |maybe| {
			if let Some(info) = maybe {
				info.success_count = info.success_count.saturating_add(1);
				info.gas_used = info.gas_used.saturating_add(gas_used);
				info.fees_earned = info.fees_earned.saturating_add(fee);
			}
		});
	}
}
