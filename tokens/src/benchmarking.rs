use crate::*;
use frame_benchmarking::{account, benchmarks, impl_benchmark_test_suite};
use frame_support::traits::EnsureOrigin;
use frame_system::RawOrigin;

const TOKEN: TokenId = 7;

benchmarks! {
	transfer {
		let alice: T::AccountId = account("alice", 1, 1);
		let bob: T::AccountId = account("bob", 2, 2);
		Pallet::<T>::do_issue(TOKEN, &alice, 1_000).unwrap();
	}: _(RawOrigin::Signed(alice.clone()), bob.clone(), TOKEN, 400)
	verify {
		assert_eq!(Pallet::<T>::balance(TOKEN, &bob), 400);
	}

	issue {
		let origin = T::IssuerOrigin::try_successful_origin().unwrap();
		let alice: T::AccountId = account("alice", 1, 1);
	}: _<T::RuntimeOrigin>(origin, TOKEN, alice.clone(), 1_000)
	verify {
		assert_eq!(Pallet::<T>::total_issuance(TOKEN), 1_000);
	}

	burn {
		let origin = T::IssuerOrigin::try_successful_origin().unwrap();
		let alice: T::AccountId = account("alice", 1, 1);
		Pallet::<T>::do_issue(TOKEN, &alice, 1_000).unwrap();
	}: _<T::RuntimeOrigin>(origin, TOKEN, alice.clone(), 600)
	verify {
		assert_eq!(Pallet::<T>::balance(TOKEN, &alice), 400);
	}
}

impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::TestRuntime);
