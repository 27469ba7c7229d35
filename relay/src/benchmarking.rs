use super::*;
use crate::Pallet as Relay;
use frame_benchmarking::{account, benchmarks, impl_benchmark_test_suite};
use frame_support::{
	assert_ok,
	traits::{fungible::Mutate, EnsureOrigin},
};
use frame_system::RawOrigin;
use sp_application_crypto::KeyTypeId;
use sp_core::{crypto::ByteArray, sr25519};
use sp_runtime::RuntimeAppPublic;
use sp_std::{vec, vec::Vec};

pub const TEST_KEY_TYPE_ID: KeyTypeId = KeyTypeId(*b"test");

mod app_sr25519 {
	use super::TEST_KEY_TYPE_ID;
	use sp_application_crypto::{app_crypto, sr25519};
	app_crypto!(sr25519, TEST_KEY_TYPE_ID);
}

type TestPublic = app_sr25519::Public;

const FUNDS: Balance = 1_000_000_000_000;

/// Generates a pair in the test externalities' `KeystoreExt`.
fn generate_pair() -> TestPublic {
	TestPublic::generate_pair(None)
}

fn account_id<T: Config>(public: &TestPublic) -> T::AccountId
where
	<T as frame_system::Config>::AccountId: ByteArray,
{
	T::AccountId::from_slice(public.as_slice()).unwrap()
}

fn sign<T: Config>(signer: &TestPublic, hash: H256) -> T::Signature
where
	<T as Config>::Signature: From<sr25519::Signature>,
{
	let signature: sr25519::Signature = signer.sign(&hash).unwrap().into();
	T::Signature::from(signature)
}

fn fund<T: Config>(who: &T::AccountId) {
	<T as pallet_custos_smart_accounts::Config>::Currency::set_balance(who, FUNDS);
}

fn active_relayer<T: Config>() -> T::AccountId {
	let relayer: T::AccountId = account("relayer", 1, 1);
	Relayers::<T>::insert(&relayer, RelayerInfo { active: true, ..Default::default() });
	fund::<T>(&relayer);
	relayer
}

/// Funded smart account whose fees are paid by a sponsor, with a spending limit on the
/// native asset and an active session key.
fn sponsored_account<T: Config>(session: &TestPublic) -> T::AccountId
where
	<T as frame_system::Config>::AccountId: ByteArray,
{
	let owner = account_id::<T>(&generate_pair());
	let guardian: T::AccountId = account("guardian", 1, 1);
	let smart_account =
		SmartAccounts::<T>::do_create_account(owner, vec![guardian], 1, None, 0).unwrap();
	fund::<T>(&smart_account);
	assert_ok!(SmartAccounts::<T>::do_set_spending_limit(&smart_account, Asset::Native, FUNDS));
	assert_ok!(SmartAccounts::<T>::do_create_session_key(
		&smart_account,
		account_id::<T>(session),
		<T as pallet_custos_smart_accounts::Config>::MaxSessionDuration::get(),
	));

	let sponsor: T::AccountId = account("sponsor", 1, 1);
	fund::<T>(&sponsor);
	assert_ok!(Relay::<T>::register_sponsor(RawOrigin::Signed(sponsor.clone()).into(), FUNDS));
	assert_ok!(Relay::<T>::add_sponsored_user(
		RawOrigin::Signed(sponsor.clone()).into(),
		smart_account.clone(),
		Some(FUNDS),
	));
	assert_ok!(SmartAccounts::<T>::do_set_sponsor(&smart_account, Some(sponsor)));
	smart_account
}

fn params<T: Config>() -> OperationParams<T::Moment> {
	OperationParams {
		gas_limit: u64::MAX,
		gas_price: 1,
		fee_asset: Asset::Native,
		max_fee: FUNDS,
		deadline: pallet_timestamp::Pallet::<T>::get()
			.saturating_add(T::MaxOperationValidity::get()),
	}
}

fn transfer<T: Config>() -> AccountCallOf<T> {
	AccountCall::Transfer { asset: Asset::Native, to: account("recipient", 1, 1), amount: 1_000 }
}

fn session_signature<T: Config>(session: &TestPublic, hash: H256) -> OperationSignatureOf<T>
where
	<T as frame_system::Config>::AccountId: ByteArray,
	<T as Config>::Signature: From<sr25519::Signature>,
{
	let signature = sign::<T>(session, hash);
	OperationSignature::SessionKey { key: account_id::<T>(session), signature }
}

benchmarks! {
	where_clause {
		where
		<T as frame_system::Config>::AccountId: ByteArray,
		<T as Config>::Signature: From<sr25519::Signature>,
	}

	register_relayer {
		let origin = <T as Config>::AdminOrigin::try_successful_origin().unwrap();
		let relayer: T::AccountId = account("relayer", 1, 1);
	}: _<T::RuntimeOrigin>(origin, relayer.clone())
	verify {
		assert!(Relay::<T>::relayer_info(&relayer).unwrap().active);
	}

	deactivate_relayer {
		let origin = <T as Config>::AdminOrigin::try_successful_origin().unwrap();
		let relayer = active_relayer::<T>();
	}: _<T::RuntimeOrigin>(origin, relayer.clone())
	verify {
		assert!(!Relay::<T>::relayer_info(&relayer).unwrap().active);
	}

	// session key signature with a sponsored fee is the slowest path
	submit_operation {
		let relayer = active_relayer::<T>();
		let session = generate_pair();
		let smart_account = sponsored_account::<T>(&session);
		let mut op = UserOperation {
			sender: smart_account.clone(),
			nonce: 0,
			call: transfer::<T>(),
			params: params::<T>(),
			signature: session_signature::<T>(&session, H256::zero()),
		};
		let hash = op.hash();
		op.signature = session_signature::<T>(&session, hash);
	}: _(RawOrigin::Signed(relayer.clone()), op)
	verify {
		assert!(Relay::<T>::is_operation_executed(&hash));
		assert_eq!(Relay::<T>::relayer_info(&relayer).unwrap().success_count, 1);
	}

	submit_batch {
		let n in 1 .. T::MaxBatchSize::get();
		let relayer = active_relayer::<T>();
		let session = generate_pair();
		let smart_account = sponsored_account::<T>(&session);
		let calls: Vec<AccountCallOf<T>> = (0..n).map(|_| transfer::<T>()).collect();
		let mut batch = BatchOperation {
			sender: smart_account.clone(),
			nonce: 0,
			calls,
			params: params::<T>(),
			signature: session_signature::<T>(&session, H256::zero()),
		};
		let hash = batch.hash();
		batch.signature = session_signature::<T>(&session, hash);
	}: _(RawOrigin::Signed(relayer.clone()), batch)
	verify {
		assert!(Relay::<T>::is_operation_executed(&hash));
		assert_eq!(Relay::<T>::relayer_info(&relayer).unwrap().success_count, 1);
	}

	register_sponsor {
		let sponsor: T::AccountId = account("sponsor", 1, 1);
		Relay::<T>::register_sponsor(RawOrigin::Signed(sponsor.clone()).into(), 1_000).unwrap();
	}: _(RawOrigin::Signed(sponsor.clone()), 1_000)
	verify {
		assert_eq!(Relay::<T>::sponsor_info(&sponsor).unwrap().budget, 2_000);
	}

	deactivate_sponsor {
		let sponsor: T::AccountId = account("sponsor", 1, 1);
		Relay::<T>::register_sponsor(RawOrigin::Signed(sponsor.clone()).into(), 1_000).unwrap();
	}: _(RawOrigin::Signed(sponsor.clone()))
	verify {
		assert!(!Relay::<T>::sponsor_info(&sponsor).unwrap().active);
	}

	add_sponsored_user {
		let sponsor: T::AccountId = account("sponsor", 1, 1);
		let user: T::AccountId = account("user", 1, 1);
		Relay::<T>::register_sponsor(RawOrigin::Signed(sponsor.clone()).into(), 1_000).unwrap();
	}: _(RawOrigin::Signed(sponsor.clone()), user.clone(), Some(100))
	verify {
		assert!(Relay::<T>::is_user_sponsored(&sponsor, &user));
	}

	remove_sponsored_user {
		let sponsor: T::AccountId = account("sponsor", 1, 1);
		let user: T::AccountId = account("user", 1, 1);
		Relay::<T>::register_sponsor(RawOrigin::Signed(sponsor.clone()).into(), 1_000).unwrap();
		Relay::<T>::add_sponsored_user(
			RawOrigin::Signed(sponsor.clone()).into(),
			user.clone(),
			None,
		)
		.unwrap();
	}: _(RawOrigin::Signed(sponsor.clone()), user.clone())
	verify {
		assert!(!Relay::<T>::is_user_sponsored(&sponsor, &user));
	}
}

impl_benchmark_test_suite!(Relay, crate::benchmarking::new_test_ext(), crate::mock::TestRuntime);

#[cfg(test)]
fn new_test_ext() -> sp_io::TestExternalities {
	use sp_keystore::{testing::MemoryKeystore, KeystoreExt};

	let mut ext = crate::mock::new_test_ext();
	ext.register_extension(KeystoreExt::new(MemoryKeystore::new()));
	ext
}
