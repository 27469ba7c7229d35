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

//! # ZK Proofs Pallet
//!
//! Bookkeeping around zero-knowledge proofs. The pairing math is done by `T::ProofVerifier`,
//! see [`verifier::Groth16Verifier`] for the BN254 implementation.
//!
//! ## Registries
//!
//! - verification keys, one per [`ProofType`], managed by `VerifierOrigin`
//! - an append-only history of Merkle roots. Membership proofs verify against any root in
//!   the history, so a proof built before later insertions stays valid.
//! - nullifiers and commitments of private transfers. Both are permanent: a nullifier spends a
//!   note exactly once and a commitment can never be created twice.
//!
//! ## Attestations
//!
//! Identity and compliance proofs are checked against the key of their proof type and kept per
//! account until they expire. Identities can be revoked by `ComplianceOrigin`.
//!
//! Public inputs are bound to their context: the submitter's account is hashed into the first
//! slot, so a proof cannot be replayed by another account.

#![cfg_attr(not(feature = "std"), no_std)]

use core::marker::PhantomData;
use custos_primitives::zk::{
	hash_to_public_input,
	merkle::{self, Node},
	proof_hash, to_public_input, ComplianceInfo, IdentityInfo, ProofType, PublicInput,
	VerifyProof, MAX_RISK_SCORE,
};
use frame_support::{
	dispatch::DispatchResult, ensure, traits::Get, BoundedVec, CloneNoBound, EqNoBound,
	PartialEqNoBound, RuntimeDebugNoBound,
};
use frame_system::ensure_signed;
use log::{debug, info};
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_core::RuntimeDebug;
use sp_runtime::{traits::Saturating, DispatchError};

// Logger target
const LOG: &str = "custos::zk-proofs";

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;
#[cfg(test)]
mod mock;
pub mod verifier;
pub mod weights;

pub type MomentOf<T> = <T as pallet_timestamp::Config>::Moment;
pub type ProofOf<T> = BoundedVec<u8, <T as Config>::MaxProofSize>;
pub type PublicInputsOf<T> = BoundedVec<PublicInput, <T as Config>::MaxPublicInputs>;
pub type VerificationKeyOf<T> = BoundedVec<u8, <T as Config>::MaxVerificationKeySize>;
pub type EncryptedAmountOf<T> = BoundedVec<u8, <T as Config>::MaxEncryptedAmountSize>;

/// Audit record of a [`Pallet::verify_proof`] submission, kept whatever the outcome.
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
pub struct ZkProofRecord<T: Config> {
	pub proof_type: ProofType,
	pub proof: ProofOf<T>,
	pub public_inputs: PublicInputsOf<T>,
	pub submitter: T::AccountId,
	pub submitted_at: MomentOf<T>,
	pub verified: bool,
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
pub struct PrivateTransferRecord<T: Config> {
	pub commitment: [u8; 32],
	pub encrypted_amount: EncryptedAmountOf<T>,
	pub recipient: T::AccountId,
	pub submitter: T::AccountId,
	pub submitted_at: MomentOf<T>,
}

#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct IdentityRecord<Moment> {
	pub commitment: [u8; 32],
	pub credential_hash: [u8; 32],
	pub verified_at: Moment,
	pub valid_until: Moment,
	pub revoked: bool,
}

impl<Moment: Copy + PartialOrd> IdentityRecord<Moment> {
	pub fn is_valid(&self, now: Moment) -> bool {
		!self.revoked && now < self.valid_until
	}

	pub fn info(&self, now: Moment) -> IdentityInfo<Moment> {
		IdentityInfo {
			commitment: self.commitment,
			credential_hash: self.credential_hash,
			verified_at: self.verified_at,
			valid_until: self.valid_until,
			revoked: self.revoked,
			valid: self.is_valid(now),
		}
	}
}

#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct ComplianceRecord<Moment> {
	/// 0 (no risk) to 100
	pub risk_score: u8,
	pub aml_passed: bool,
	pub kyc_passed: bool,
	pub verified_at: Moment,
	pub valid_until: Moment,
}

impl<Moment: Copy + PartialOrd> ComplianceRecord<Moment> {
	pub fn is_valid(&self, now: Moment) -> bool {
		self.aml_passed && self.kyc_passed && now < self.valid_until
	}

	pub fn info(&self, now: Moment) -> ComplianceInfo<Moment> {
		ComplianceInfo {
			risk_score: self.risk_score,
			aml_passed: self.aml_passed,
			kyc_passed: self.kyc_passed,
			verified_at: self.verified_at,
			valid_until: self.valid_until,
			valid: self.is_valid(now),
		}
	}
}

/// Produces proofs the runtime's `ProofVerifier` accepts, so that the calls which require a
/// valid proof can be benchmarked.
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper {
	/// Returns a verification key and a proof it accepts for `public_inputs`.
	fn valid_proof(public_inputs: &[PublicInput]) -> (sp_std::vec::Vec<u8>, sp_std::vec::Vec<u8>);
}

#[frame_support::pallet]
pub mod pallet {
	use super::*;
	use frame_support::pallet_prelude::*;
	use frame_system::pallet_prelude::*;

	#[pallet::pallet]
	pub struct Pallet<T>(PhantomData<T>);

	#[pallet::config]
	pub trait Config: frame_system::Config + pallet_timestamp::Config {
		#[allow(deprecated)]
		type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

		/// Manages verification keys and publishes Merkle roots.
		type VerifierOrigin: EnsureOrigin<Self::RuntimeOrigin>;

		/// May revoke identities.
		type ComplianceOrigin: EnsureOrigin<Self::RuntimeOrigin>;

		type ProofVerifier: VerifyProof;

		#[pallet::constant]
		type MaxProofSize: Get<u32>;

		#[pallet::constant]
		type MaxVerificationKeySize: Get<u32>;

		#[pallet::constant]
		type MaxPublicInputs: Get<u32>;

		/// Longest accepted Merkle authentication path.
		#[pallet::constant]
		type MaxMerkleDepth: Get<u32>;

		#[pallet::constant]
		type MaxEncryptedAmountSize: Get<u32>;

		/// How long a compliance attestation stays valid.
		#[pallet::constant]
		type ComplianceValidity: Get<Self::Moment>;

		type WeightInfo: WeightInfo;

		#[cfg(feature = "runtime-benchmarks")]
		type BenchmarkHelper: BenchmarkHelper;
	}

	#[pallet::storage]
	pub type VerificationKeys<T: Config> =
		StorageMap<_, Blake2_128Concat, ProofType, VerificationKeyOf<T>, OptionQuery>;

	/// proof hash -> audit record
	#[pallet::storage]
	pub type ProofRecords<T: Config> =
		StorageMap<_, Identity, [u8; 32], ZkProofRecord<T>, OptionQuery>;

	#[pallet::storage]
	pub type Nullifiers<T: Config> = StorageMap<_, Blake2_128Concat, [u8; 32], (), OptionQuery>;

	#[pallet::storage]
	pub type Commitments<T: Config> = StorageMap<_, Blake2_128Concat, [u8; 32], (), OptionQuery>;

	/// Root history in insertion order.
	#[pallet::storage]
	pub type MerkleRoots<T: Config> = StorageMap<_, Twox64Concat, u64, Node, OptionQuery>;

	#[pallet::storage]
	pub type MerkleRootIndex<T: Config> =
		StorageMap<_, Blake2_128Concat, Node, u64, OptionQuery>;

	#[pallet::storage]
	pub type MerkleRootCount<T: Config> = StorageValue<_, u64, ValueQuery>;

	/// nullifier -> transfer
	#[pallet::storage]
	pub type PrivateTransfers<T: Config> =
		StorageMap<_, Blake2_128Concat, [u8; 32], PrivateTransferRecord<T>, OptionQuery>;

	#[pallet::storage]
	pub type Identities<T: Config> =
		StorageMap<_, Blake2_128Concat, T::AccountId, IdentityRecord<T::Moment>, OptionQuery>;

	#[pallet::storage]
	pub type Compliance<T: Config> =
		StorageMap<_, Blake2_128Concat, T::AccountId, ComplianceRecord<T::Moment>, OptionQuery>;

	#[pallet::event]
	#[pallet::generate_deposit(pub(super) fn deposit_event)]
	pub enum Event<T: Config> {
		VerificationKeySet { proof_type: ProofType },
		VerificationKeyRemoved { proof_type: ProofType },
		/// a proof was checked and recorded, `verified` tells the outcome
		ProofVerified {
			proof_hash: [u8; 32],
			proof_type: ProofType,
			submitter: T::AccountId,
			verified: bool,
		},
		MerkleRootAdded { root: Node, index: u64 },
		PrivateTransferProcessed {
			nullifier: [u8; 32],
			commitment: [u8; 32],
			recipient: T::AccountId,
		},
		IdentityVerified { who: T::AccountId, valid_until: T::Moment },
		ComplianceVerified { who: T::AccountId, risk_score: u8, valid_until: T::Moment },
		IdentityRevoked { who: T::AccountId },
	}

	#[pallet::error]
	pub enum Error<T> {
		/// no verification key is registered for the proof type
		UnsupportedProofType,
		InvalidProof,
		/// a verified record for the same proof exists already
		ProofAlreadyVerified,
		NullifierAlreadyUsed,
		CommitmentAlreadyExists,
		DuplicateRoot,
		UnknownRoot,
		PathTooLong,
		/// the attestation would be expired on arrival
		ValidityInPast,
		/// risk scores range from 0 to 100
		InvalidRiskScore,
		IdentityNotFound,
		/// a revoked identity cannot be replaced
		RevokedIdentity,
	}

	#[pallet::call]
	impl<T: Config> Pallet<T> {
		/// Register or replace the verification key for `proof_type`.
		#[pallet::call_index(0)]
		#[pallet::weight(<T as Config>::WeightInfo::set_verification_key())]
		pub fn set_verification_key(
			origin: OriginFor<T>,
			proof_type: ProofType,
			verification_key: VerificationKeyOf<T>,
		) -> DispatchResult {
			T::VerifierOrigin::ensure_origin(origin)?;
			VerificationKeys::<T>::insert(proof_type, verification_key);
			info!(target: LOG, "verification key set for {:?}", proof_type);
			Self::deposit_event(Event::VerificationKeySet { proof_type });
			Ok(())
		}

		#[pallet::call_index(1)]
		#[pallet::weight(<T as Config>::WeightInfo::remove_verification_key())]
		pub fn remove_verification_key(
			origin: OriginFor<T>,
			proof_type: ProofType,
		) -> DispatchResult {
			T::VerifierOrigin::ensure_origin(origin)?;
			ensure!(
				VerificationKeys::<T>::contains_key(proof_type),
				Error::<T>::UnsupportedProofType
			);
			VerificationKeys::<T>::remove(proof_type);
			info!(target: LOG, "verification key removed for {:?}", proof_type);
			Self::deposit_event(Event::VerificationKeyRemoved { proof_type });
			Ok(())
		}

		/// Check a proof and record the outcome. A failed check is not an error: the record
		/// is kept for audit and can be resubmitted, e.g. after a key rotation.
		#[pallet::call_index(2)]
		#[pallet::weight(<T as Config>::WeightInfo::verify_proof())]
		pub fn verify_proof(
			origin: OriginFor<T>,
			proof_type: ProofType,
			proof: ProofOf<T>,
			public_inputs: PublicInputsOf<T>,
		) -> DispatchResult {
			let submitter = ensure_signed(origin)?;
			Self::do_verify_proof(submitter, proof_type, proof, public_inputs).map(|_| ())
		}

		/// Publish a new Merkle root. Roots are never removed.
		#[pallet::call_index(3)]
		#[pallet::weight(<T as Config>::WeightInfo::add_merkle_root())]
		pub fn add_merkle_root(origin: OriginFor<T>, root: Node) -> DispatchResult {
			T::VerifierOrigin::ensure_origin(origin)?;
			Self::do_add_merkle_root(root).map(|_| ())
		}

		/// Spend the note behind `nullifier` and create the note behind `commitment`.
		#[pallet::call_index(4)]
		#[pallet::weight(<T as Config>::WeightInfo::process_private_transfer())]
		pub fn process_private_transfer(
			origin: OriginFor<T>,
			nullifier: [u8; 32],
			commitment: [u8; 32],
			encrypted_amount: EncryptedAmountOf<T>,
			recipient: T::AccountId,
			proof: ProofOf<T>,
		) -> DispatchResult {
			let submitter = ensure_signed(origin)?;
			ensure!(!Self::is_nullifier_used(&nullifier), Error::<T>::NullifierAlreadyUsed);
			ensure!(!Self::is_commitment_known(&commitment), Error::<T>::CommitmentAlreadyExists);

			let inputs = Self::private_transfer_inputs(
				&nullifier,
				&commitment,
				&recipient,
				&encrypted_amount,
			);
			Self::ensure_valid_proof(ProofType::PrivateTransfer, &proof, &inputs)?;

			Nullifiers::<T>::insert(nullifier, ());
			Commitments::<T>::insert(commitment, ());
			PrivateTransfers::<T>::insert(
				nullifier,
				PrivateTransferRecord {
					commitment,
					encrypted_amount,
					recipient: recipient.clone(),
					submitter: submitter.clone(),
					submitted_at: pallet_timestamp::Pallet::<T>::get(),
				},
			);
			info!(target: LOG, "private transfer by {:?} spends {:?}", submitter, nullifier);
			Self::deposit_event(Event::PrivateTransferProcessed {
				nullifier,
				commitment,
				recipient,
			});
			Ok(())
		}

		/// Attest the caller's identity until `valid_until`.
		#[pallet::call_index(5)]
		#[pallet::weight(<T as Config>::WeightInfo::submit_identity_proof())]
		pub fn submit_identity_proof(
			origin: OriginFor<T>,
			commitment: [u8; 32],
			credential_hash: [u8; 32],
			valid_until: T::Moment,
			proof: ProofOf<T>,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			let now = pallet_timestamp::Pallet::<T>::get();
			ensure!(valid_until > now, Error::<T>::ValidityInPast);
			ensure!(
				!Identities::<T>::get(&who).is_some_and(|identity| identity.revoked),
				Error::<T>::RevokedIdentity
			);

			let inputs = Self::identity_inputs(&who, &commitment, &credential_hash, valid_until);
			Self::ensure_valid_proof(ProofType::Identity, &proof, &inputs)?;

			Identities::<T>::insert(
				&who,
				IdentityRecord {
					commitment,
					credential_hash,
					verified_at: now,
					valid_until,
					revoked: false,
				},
			);
			info!(target: LOG, "identity of {:?} verified until {:?}", who, valid_until);
			Self::deposit_event(Event::IdentityVerified { who, valid_until });
			Ok(())
		}

		/// Attest the caller's compliance status for `ComplianceValidity`.
		#[pallet::call_index(6)]
		#[pallet::weight(<T as Config>::WeightInfo::submit_compliance_proof())]
		pub fn submit_compliance_proof(
			origin: OriginFor<T>,
			risk_score: u8,
			aml_passed: bool,
			kyc_passed: bool,
			proof: ProofOf<T>,
		) -> DispatchResult {
			let who = ensure_signed(origin)?;
			ensure!(risk_score <= MAX_RISK_SCORE, Error::<T>::InvalidRiskScore);
			let now = pallet_timestamp::Pallet::<T>::get();
			let valid_until = now.saturating_add(T::ComplianceValidity::get());
			ensure!(valid_until > now, Error::<T>::ValidityInPast);

			let inputs = Self::compliance_inputs(&who, risk_score, aml_passed, kyc_passed);
			Self::ensure_valid_proof(ProofType::Compliance, &proof, &inputs)?;

			let record = ComplianceRecord {
				risk_score,
				aml_passed,
				kyc_passed,
				verified_at: now,
				valid_until,
			};
			Compliance::<T>::insert(&who, record);
			info!(
				target: LOG,
				"compliance of {:?} verified: risk {}, aml {}, kyc {}",
				who,
				risk_score,
				aml_passed,
				kyc_passed
			);
			Self::deposit_event(Event::ComplianceVerified { who, risk_score, valid_until });
			Ok(())
		}

		#[pallet::call_index(7)]
		#[pallet::weight(<T as Config>::WeightInfo::revoke_identity())]
		pub fn revoke_identity(origin: OriginFor<T>, who: T::AccountId) -> DispatchResult {
			T::ComplianceOrigin::ensure_origin(origin)?;
			Identities::<T>::try_mutate(&who, |maybe_identity| -> DispatchResult {
				let identity = maybe_identity.as_mut().ok_or(Error::<T>::IdentityNotFound)?;
				identity.revoked = true;
				Ok(())
			})?;
			info!(target: LOG, "identity of {:?} revoked", who);
			Self::deposit_event(Event::IdentityRevoked { who });
			Ok(())
		}
	}
}

impl<T: Config> Pallet<T> {
	/// Verify and record a proof. Returns the proof hash and the outcome.
	pub fn do_verify_proof(
		submitter: T::AccountId,
		proof_type: ProofType,
		proof: ProofOf<T>,
		public_inputs: PublicInputsOf<T>,
	) -> Result<([u8; 32], bool), DispatchError> {
		let hash = proof_hash(proof_type, &proof, &public_inputs);
		ensure!(
			!ProofRecords::<T>::get(hash).is_some_and(|record| record.verified),
			Error::<T>::ProofAlreadyVerified
		);
		let verified = Self::check_proof(proof_type, &proof, &public_inputs)?;
		debug!(target: LOG, "proof {:?} of type {:?} verified: {}", hash, proof_type, verified);

		ProofRecords::<T>::insert(
			hash,
			ZkProofRecord {
				proof_type,
				proof,
				public_inputs,
				submitter: submitter.clone(),
				submitted_at: pallet_timestamp::Pallet::<T>::get(),
				verified,
			},
		);
		Self::deposit_event(Event::ProofVerified {
			proof_hash: hash,
			proof_type,
			submitter,
			verified,
		});
		Ok((hash, verified))
	}

	/// Append `root` to the history and return its index.
	pub fn do_add_merkle_root(root: Node) -> Result<u64, DispatchError> {
		ensure!(!MerkleRootIndex::<T>::contains_key(root), Error::<T>::DuplicateRoot);
		let index = MerkleRootCount::<T>::get();
		MerkleRoots::<T>::insert(index, root);
		MerkleRootIndex::<T>::insert(root, index);
		MerkleRootCount::<T>::put(index.saturating_add(1));
		info!(target: LOG, "merkle root {:?} added at index {}", root, index);
		Self::deposit_event(Event::MerkleRootAdded { root, index });
		Ok(index)
	}

	/// Whether `leaf` sits at `leaf_index` of the tree with the published `root`.
	pub fn verify_membership_proof(
		path: &[Node],
		leaf_index: u64,
		leaf: Node,
		root: Node,
	) -> Result<bool, DispatchError> {
		ensure!(MerkleRootIndex::<T>::contains_key(root), Error::<T>::UnknownRoot);
		ensure!(path.len() <= T::MaxMerkleDepth::get() as usize, Error::<T>::PathTooLong);
		// the index must address a leaf of a tree of this depth
		if path.len() < 64 && leaf_index >> path.len() != 0 {
			return Ok(false);
		}
		Ok(merkle::compute_root(leaf, leaf_index, path) == root)
	}

	/// Run the configured verifier against the key registered for `proof_type`.
	pub fn check_proof(
		proof_type: ProofType,
		proof: &[u8],
		public_inputs: &[PublicInput],
	) -> Result<bool, DispatchError> {
		let key = VerificationKeys::<T>::get(proof_type).ok_or(Error::<T>::UnsupportedProofType)?;
		Ok(T::ProofVerifier::verify(proof_type, &key, proof, public_inputs))
	}

	fn ensure_valid_proof(
		proof_type: ProofType,
		proof: &[u8],
		public_inputs: &[PublicInput],
	) -> DispatchResult {
		ensure!(Self::check_proof(proof_type, proof, public_inputs)?, Error::<T>::InvalidProof);
		Ok(())
	}

	pub fn private_transfer_inputs(
		nullifier: &[u8; 32],
		commitment: &[u8; 32],
		recipient: &T::AccountId,
		encrypted_amount: &[u8],
	) -> [PublicInput; 4] {
		[
			*nullifier,
			*commitment,
			hash_to_public_input(&recipient.encode()),
			hash_to_public_input(encrypted_amount),
		]
	}

	pub fn identity_inputs(
		who: &T::AccountId,
		commitment: &[u8; 32],
		credential_hash: &[u8; 32],
		valid_until: T::Moment,
	) -> [PublicInput; 4] {
		[
			hash_to_public_input(&who.encode()),
			*commitment,
			*credential_hash,
			to_public_input(&valid_until),
		]
	}

	pub fn compliance_inputs(
		who: &T::AccountId,
		risk_score: u8,
		aml_passed: bool,
		kyc_passed: bool,
	) -> [PublicInput; 4] {
		[
			hash_to_public_input(&who.encode()),
			to_public_input(&risk_score),
			to_public_input(&aml_passed),
			to_public_input(&kyc_passed),
		]
	}

	pub fn is_nullifier_used(nullifier: &[u8; 32]) -> bool {
		Nullifiers::<T>::contains_key(nullifier)
	}

	pub fn is_commitment_known(commitment: &[u8; 32]) -> bool {
		Commitments::<T>::contains_key(commitment)
	}

	pub fn private_transfer(nullifier: &[u8; 32]) -> Option<PrivateTransferRecord<T>> {
		PrivateTransfers::<T>::get(nullifier)
	}

	pub fn proof_record(proof_hash: &[u8; 32]) -> Option<ZkProofRecord<T>> {
		ProofRecords::<T>::get(proof_hash)
	}

	pub fn has_verification_key(proof_type: ProofType) -> bool {
		VerificationKeys::<T>::contains_key(proof_type)
	}

	pub fn merkle_root(index: u64) -> Option<Node> {
		MerkleRoots::<T>::get(index)
	}

	pub fn merkle_root_count() -> u64 {
		MerkleRootCount::<T>::get()
	}

	pub fn latest_merkle_root() -> Option<Node> {
		Self::merkle_root_count().checked_sub(1).and_then(Self::merkle_root)
	}

	pub fn is_known_root(root: &Node) -> bool {
		MerkleRootIndex::<T>::contains_key(root)
	}

	pub fn is_identity_valid(who: &T::AccountId) -> bool {
		let now = pallet_timestamp::Pallet::<T>::get();
		Identities::<T>::get(who).is_some_and(|identity| identity.is_valid(now))
	}

	pub fn identity_info(who: &T::AccountId) -> Option<IdentityInfo<T::Moment>> {
		let now = pallet_timestamp::Pallet::<T>::get();
		Identities::<T>::get(who).map(|identity| identity.info(now))
	}

	pub fn is_compliance_valid(who: &T::AccountId) -> bool {
		let now = pallet_timestamp::Pallet::<T>::get();
		Compliance::<T>::get(who).is_some_and(|compliance| compliance.is_valid(now))
	}

	pub fn compliance_info(who: &T::AccountId) -> Option<ComplianceInfo<T::Moment>> {
		let now = pallet_timestamp::Pallet::<T>::get();
		Compliance::<T>::get(who).map(|compliance| compliance.info(now))
	}
}
