use super::*;
use crate::Pallet as SmartAccounts;
use frame_benchmarking::{account, benchmarks, impl_benchmark_test_suite};
use frame_support::traits::fungible::Mutate;
use frame_system::RawOrigin;
use sp_std::vec::Vec;

fn owner<T: Config>() -> T::AccountId {
	account("owner", 1, 1)
}

fn guardians<T: Config>(n: u32) -> Vec<T::AccountId> {
	(0..n).map(|i| account("guardian", i, i)).collect()
}

/// Account with the maximum number of guardians and a quorum of two.
fn new_account<T: Config>() -> T::AccountId {
	SmartAccounts::<T>::do_create_account(
		owner::<T>(),
		guardians::<T>(T::MaxGuardians::get()),
		2,
		Some(H256::repeat_byte(7)),
		0,
	)
	.unwrap()
}

fn initiate<T: Config>(smart_account: &T::AccountId) -> RecoveryId {
	let id = NextRecoveryId::<T>::get();
	let guardian = guardians::<T>(1)[0].clone();
	SmartAccounts::<T>::initiate_recovery(
		RawOrigin::Signed(guardian).into(),
		smart_account.clone(),
		account("new_owner", 1, 1),
	)
	.unwrap();
	id
}

/// A competing recovery request opened by `guardian`.
fn open_recovery<T: Config>(smart_account: &T::AccountId, guardian: T::AccountId) {
	SmartAccounts::<T>::initiate_recovery(
		RawOrigin::Signed(guardian).into(),
		smart_account.clone(),
		account("new_owner", 2, 2),
	)
	.unwrap();
}

benchmarks! {
	create_account {
		let caller: T::AccountId = account("caller", 1, 1);
		let guardians = guardians::<T>(T::MaxGuardians::get());
	}: _(RawOrigin::Signed(caller), owner::<T>(), guardians, 2, None, 0)
	verify {
		assert_eq!(Accounts::<T>::iter().count(), 1);
	}

	add_guardian {
		let smart_account = SmartAccounts::<T>::do_create_account(
			owner::<T>(),
			guardians::<T>(T::MaxGuardians::get() - 1),
			1,
			None,
			0,
		)
		.unwrap();
		let guardian: T::AccountId = account("late_guardian", 1, 1);
	}: _(RawOrigin::Signed(owner::<T>()), smart_account.clone(), guardian.clone())
	verify {
		assert!(SmartAccounts::<T>::account(&smart_account).unwrap().is_guardian(&guardian));
	}

	remove_guardian {
		let smart_account = new_account::<T>();
		let guardian = guardians::<T>(T::MaxGuardians::get()).pop().unwrap();
	}: _(RawOrigin::Signed(owner::<T>()), smart_account.clone(), guardian.clone())
	verify {
		assert!(!SmartAccounts::<T>::account(&smart_account).unwrap().is_guardian(&guardian));
	}

	lock_account {
		let smart_account = new_account::<T>();
		// guardians are the slowest authorization path
		let guardian = guardians::<T>(T::MaxGuardians::get()).pop().unwrap();
	}: _(RawOrigin::Signed(guardian), smart_account.clone())
	verify {
		assert!(SmartAccounts::<T>::account(&smart_account).unwrap().locked);
	}

	unlock_account {
		let smart_account = new_account::<T>();
		SmartAccounts::<T>::do_lock(&smart_account).unwrap();
	}: _(RawOrigin::Signed(owner::<T>()), smart_account.clone())
	verify {
		assert!(!SmartAccounts::<T>::account(&smart_account).unwrap().locked);
	}

	create_session_key {
		let smart_account = new_account::<T>();
		for i in 1..T::MaxSessionKeys::get() {
			SmartAccounts::<T>::do_create_session_key(
				&smart_account,
				account("session", i, i),
				T::MaxSessionDuration::get(),
			)
			.unwrap();
		}
		let key: T::AccountId = account("session", 0, 0);
		let duration = T::MaxSessionDuration::get();
	}: _(RawOrigin::Signed(owner::<T>()), smart_account.clone(), key.clone(), duration)
	verify {
		assert!(SmartAccounts::<T>::is_valid_session_key(&smart_account, &key));
	}

	revoke_session_key {
		let smart_account = new_account::<T>();
		let key: T::AccountId = account("session", 0, 0);
		let duration = T::MaxSessionDuration::get();
		SmartAccounts::<T>::do_create_session_key(&smart_account, key.clone(), duration).unwrap();
	}: _(RawOrigin::Signed(owner::<T>()), smart_account.clone(), key.clone())
	verify {
		assert!(!SmartAccounts::<T>::is_valid_session_key(&smart_account, &key));
	}

	set_spending_limit {
		let smart_account = new_account::<T>();
	}: _(RawOrigin::Signed(owner::<T>()), smart_account.clone(), Asset::Native, 1_000)
	verify {
		let remaining = SmartAccounts::<T>::remaining_allowance(&smart_account, Asset::Native);
		assert_eq!(remaining, Some(1_000));
	}

	set_sponsor {
		let smart_account = new_account::<T>();
		let sponsor: T::AccountId = account("sponsor", 1, 1);
	}: _(RawOrigin::Signed(owner::<T>()), smart_account.clone(), Some(sponsor.clone()))
	verify {
		assert_eq!(SmartAccounts::<T>::account(&smart_account).unwrap().sponsor, Some(sponsor));
	}

	initiate_recovery {
		let smart_account = new_account::<T>();
		let mut guardians = guardians::<T>(T::MaxGuardians::get());
		let guardian = guardians.pop().unwrap();
		// every other guardian has a pending request to scan
		for other in guardians {
			open_recovery::<T>(&smart_account, other);
		}
		let new_owner: T::AccountId = account("new_owner", 1, 1);
	}: _(RawOrigin::Signed(guardian), smart_account.clone(), new_owner)
	verify {
		assert_eq!(
			SmartAccounts::<T>::pending_recoveries(&smart_account).len() as u32,
			T::MaxGuardians::get()
		);
	}

	approve_recovery {
		let smart_account = new_account::<T>();
		let id = initiate::<T>(&smart_account);
		let guardian = guardians::<T>(T::MaxGuardians::get()).pop().unwrap();
	}: _(RawOrigin::Signed(guardian), id)
	verify {
		assert_eq!(SmartAccounts::<T>::recovery_request(id).unwrap().approvals.len(), 2);
	}

	execute_recovery {
		let smart_account = new_account::<T>();
		let id = initiate::<T>(&smart_account);
		for guardian in guardians::<T>(T::MaxGuardians::get()).into_iter().skip(1) {
			SmartAccounts::<T>::approve_recovery(RawOrigin::Signed(guardian.clone()).into(), id)
				.unwrap();
			open_recovery::<T>(&smart_account, guardian);
		}
		let later = pallet_timestamp::Pallet::<T>::get()
			.saturating_add(T::RecoveryDelay::get())
			.saturating_add(T::RecoveryDelay::get());
		pallet_timestamp::Pallet::<T>::set_timestamp(later);
		let caller: T::AccountId = account("caller", 1, 1);
	}: _(RawOrigin::Signed(caller), id)
	verify {
		assert!(SmartAccounts::<T>::recovery_request(id).unwrap().executed);
		assert!(SmartAccounts::<T>::recovery_request(id + 1).unwrap().canceled);
		assert!(SmartAccounts::<T>::pending_recoveries(&smart_account).is_empty());
	}

	cancel_recovery {
		let smart_account = new_account::<T>();
		let id = initiate::<T>(&smart_account);
	}: _(RawOrigin::Signed(owner::<T>()), id)
	verify {
		assert!(SmartAccounts::<T>::recovery_request(id).unwrap().canceled);
	}

	execute {
		let smart_account = new_account::<T>();
		<T as Config>::Currency::set_balance(&smart_account, 1_000_000_000);
		SmartAccounts::<T>::do_set_spending_limit(&smart_account, Asset::Native, 1_000_000)
			.unwrap();
		let to: T::AccountId = account("recipient", 1, 1);
		let call = AccountCall::Transfer { asset: Asset::Native, to, amount: 1_000 };
	}: _(RawOrigin::Signed(owner::<T>()), smart_account.clone(), call)
	verify {
		assert_eq!(
			SmartAccounts::<T>::remaining_allowance(&smart_account, Asset::Native),
			Some(1_000_000 - 1_000)
		);
	}
}

impl_benchmark_test_suite!(SmartAccounts, crate::mock::new_test_ext(), crate::mock::TestRuntime);
