use super::*;
use crate::Pallet as ZkProofs;
use frame_benchmarking::{account, benchmarks, impl_benchmark_test_suite};
use frame_support::traits::EnsureOrigin;
use frame_system::RawOrigin;
use sp_std::vec;

fn bounded<S: Get<u32>>(bytes: sp_std::vec::Vec<u8>) -> BoundedVec<u8, S> {
	BoundedVec::truncate_from(bytes)
}

/// Registers the helper's key for `proof_type` and returns a proof for `inputs`.
fn prepare<T: Config>(proof_type: ProofType, inputs: &[PublicInput]) -> ProofOf<T> {
	let (key, proof) = T::BenchmarkHelper::valid_proof(inputs);
	VerificationKeys::<T>::insert(proof_type, bounded::<T::MaxVerificationKeySize>(key));
	bounded(proof)
}

benchmarks! {
	set_verification_key {
		let origin = T::VerifierOrigin::try_successful_origin().unwrap();
		let key = vec![7u8; T::MaxVerificationKeySize::get() as usize];
	}: _<T::RuntimeOrigin>(origin, ProofType::Identity, bounded(key))
	verify {
		assert!(ZkProofs::<T>::has_verification_key(ProofType::Identity));
	}

	remove_verification_key {
		let origin = T::VerifierOrigin::try_successful_origin().unwrap();
		let key = bounded::<T::MaxVerificationKeySize>(vec![7u8; 64]);
		VerificationKeys::<T>::insert(ProofType::Identity, key);
	}: _<T::RuntimeOrigin>(origin, ProofType::Identity)
	verify {
		assert!(!ZkProofs::<T>::has_verification_key(ProofType::Identity));
	}

	verify_proof {
		let caller: T::AccountId = account("caller", 1, 1);
		let inputs: PublicInputsOf<T> = BoundedVec::truncate_from(
			(0..T::MaxPublicInputs::get()).map(|i| [i as u8; 32]).collect(),
		);
		let proof = prepare::<T>(ProofType::Membership, &inputs);
		let hash = proof_hash(ProofType::Membership, &proof, &inputs);
	}: _(RawOrigin::Signed(caller), ProofType::Membership, proof, inputs)
	verify {
		assert!(ZkProofs::<T>::proof_record(&hash).unwrap().verified);
	}

	add_merkle_root {
		let origin = T::VerifierOrigin::try_successful_origin().unwrap();
		ZkProofs::<T>::do_add_merkle_root([1u8; 32]).unwrap();
	}: _<T::RuntimeOrigin>(origin, [2u8; 32])
	verify {
		assert_eq!(ZkProofs::<T>::latest_merkle_root(), Some([2u8; 32]));
	}

	process_private_transfer {
		let caller: T::AccountId = account("caller", 1, 1);
		let recipient: T::AccountId = account("recipient", 2, 2);
		let nullifier = [1u8; 32];
		let commitment = [2u8; 32];
		let encrypted_amount: EncryptedAmountOf<T> =
			bounded(vec![3u8; T::MaxEncryptedAmountSize::get() as usize]);
		let inputs = ZkProofs::<T>::private_transfer_inputs(
			&nullifier,
			&commitment,
			&recipient,
			&encrypted_amount,
		);
		let proof = prepare::<T>(ProofType::PrivateTransfer, &inputs);
	}: _(RawOrigin::Signed(caller), nullifier, commitment, encrypted_amount, recipient, proof)
	verify {
		assert!(ZkProofs::<T>::is_nullifier_used(&nullifier));
	}

	submit_identity_proof {
		let caller: T::AccountId = account("caller", 1, 1);
		let commitment = [1u8; 32];
		let credential_hash = [2u8; 32];
		let valid_until = pallet_timestamp::Pallet::<T>::get()
			.saturating_add(T::ComplianceValidity::get());
		let inputs =
			ZkProofs::<T>::identity_inputs(&caller, &commitment, &credential_hash, valid_until);
		let proof = prepare::<T>(ProofType::Identity, &inputs);
	}: _(RawOrigin::Signed(caller.clone()), commitment, credential_hash, valid_until, proof)
	verify {
		assert!(ZkProofs::<T>::is_identity_valid(&caller));
	}

	submit_compliance_proof {
		let caller: T::AccountId = account("caller", 1, 1);
		let inputs = ZkProofs::<T>::compliance_inputs(&caller, 5, true, true);
		let proof = prepare::<T>(ProofType::Compliance, &inputs);
	}: _(RawOrigin::Signed(caller.clone()), 5, true, true, proof)
	verify {
		assert!(ZkProofs::<T>::is_compliance_valid(&caller));
	}

	revoke_identity {
		let origin = T::ComplianceOrigin::try_successful_origin().unwrap();
		let who: T::AccountId = account("who", 1, 1);
		let now = pallet_timestamp::Pallet::<T>::get();
		Identities::<T>::insert(&who, IdentityRecord {
			commitment: [1u8; 32],
			credential_hash: [2u8; 32],
			verified_at: now,
			valid_until: now.saturating_add(T::ComplianceValidity::get()),
			revoked: false,
		});
	}: _<T::RuntimeOrigin>(origin, who.clone())
	verify {
		assert!(ZkProofs::<T>::identity_info(&who).unwrap().revoked);
	}
}

impl_benchmark_test_suite!(ZkProofs, crate::mock::new_test_ext(), crate::mock::TestRuntime);
