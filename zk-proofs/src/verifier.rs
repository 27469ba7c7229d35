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

//! Groth16 proof verification on the BN254 curve.
//!
//! Keys and proofs are the arkworks compressed serializations. Every public input slot is
//! read as a little-endian field element, reduced modulo the scalar field order.

use ark_bn254::{Bn254, Fr};
use ark_ff::PrimeField;
use ark_groth16::{Groth16, PreparedVerifyingKey, Proof, VerifyingKey};
use ark_serialize::CanonicalDeserialize;
use ark_std::vec::Vec;
use custos_primitives::zk::{ProofType, PublicInput, VerifyProof};

/// Size of a compressed Groth16 proof (2 G1 + 1 G2 on BN254)
pub const PROOF_SIZE: usize = 128;

pub fn input_to_field(input: &PublicInput) -> Fr {
	Fr::from_le_bytes_mod_order(input)
}

/// [`VerifyProof`] backed by arkworks. The proof type only selects the key, so it is not
/// consulted here.
pub struct Groth16Verifier;

impl VerifyProof for Groth16Verifier {
	fn verify(
		_proof_type: ProofType,
		verification_key: &[u8],
		proof: &[u8],
		public_inputs: &[PublicInput],
	) -> bool {
		let Ok(vk) = VerifyingKey::<Bn254>::deserialize_compressed(verification_key) else {
			return false;
		};
		let Ok(proof) = Proof::<Bn254>::deserialize_compressed(proof) else {
			return false;
		};
		// one extra base point for the constant term
		if vk.gamma_abc_g1.len() != public_inputs.len() + 1 {
			return false;
		}
		let inputs: Vec<Fr> = public_inputs.iter().map(input_to_field).collect();
		let pvk: PreparedVerifyingKey<Bn254> = vk.into();
		Groth16::<Bn254>::verify_proof(&pvk, &proof, &inputs).unwrap_or(false)
	}
}
