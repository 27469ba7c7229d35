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


//! Mock runtime for the custos zk-proofs module

use crate as dut;
use custos_primitives::zk::{ProofType, PublicInput, VerifyProof};
use frame_support::{parameter_types, traits::ConstU32};
use parity_scale_codec::Encode;
use sp_io::hashing::blake2_256;
use sp_runtime::BuildStorage;
use test_utils::*;

frame_support::construct_runtime!(
	pub enum TestRuntime
	{
		System: frame_system,
		Timestamp: pallet_timestamp,
		ZkProofs: dut,
	}
);

/// Accepts exactly the proofs produced by [`prove`].
pub struct MockVerifier;

/// The only proof [`MockVerifier`] accepts for `public_inputs` under `verification_key`.
pub fn prove(verification_key: &[u8], public_inputs: &[PublicInput]) -> Vec<u8> {
	blake2_256(&(verification_key, public_inputs).encode()).to_vec()
}

impl VerifyProof for MockVerifier {
	fn verify(
		_proof_type: ProofType,
		verification_key: &[u8],
		proof: &[u8],
		public_inputs: &[PublicInput],
	) -> bool {
		proof == prove(verification_key, public_inputs).as_slice()
	}
}

#[cfg(feature = "runtime-benchmarks")]
impl dut::BenchmarkHelper for MockVerifier {
	fn valid_proof(public_inputs: &[PublicInput]) -> (Vec<u8>, Vec<u8>) {
		let verification_key = vec![7u8; 64];
		let proof = prove(&verification_key, public_inputs);
		(verification_key, proof)
	}
}

parameter_types! {
	pub const ComplianceValidity: Moment = ONE_DAY;
}

impl dut::Config for TestRuntime {
	type RuntimeEvent = RuntimeEvent;
	type VerifierOrigin = EnsureAlice;
	type ComplianceOrigin = EnsureAlice;
	type ProofVerifier = MockVerifier;
	type MaxProofSize = ConstU32<256>;
	type MaxVerificationKeySize = ConstU32<2048>;
	type MaxPublicInputs = ConstU32<8>;
	type MaxMerkleDepth = ConstU32<20>;
	type MaxEncryptedAmountSize = ConstU32<128>;
	type ComplianceValidity = ComplianceValidity;
	type WeightInfo = ();
	#[cfg(feature = "runtime-benchmarks")]
	type BenchmarkHelper = MockVerifier;
}

// boilerplate
impl_frame_system!(TestRuntime);
impl_timestamp!(TestRuntime);

// genesis values
pub fn new_test_ext() -> sp_io::TestExternalities {
	let t = frame_system::GenesisConfig::<TestRuntime>::default().build_storage().unwrap();
	let mut ext: sp_io::TestExternalities = t.into();
	ext.execute_with(|| {
		System::set_block_number(1);
		Timestamp::set_timestamp(GENESIS_TIME);
	});
	ext
}
