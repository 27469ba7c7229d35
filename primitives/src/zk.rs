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

//! Zero-knowledge proof bookkeeping primitives.
//!
//! Proof verification itself is delegated to an implementation of [`VerifyProof`]. Public
//! inputs are passed as 32-byte little-endian field element slots, the representation
//! Groth16 verifiers over BN254 consume.

use parity_scale_codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_core::RuntimeDebug;
use sp_io::hashing::blake2_256;

#[cfg(feature = "serde_derive")]
use serde::{Deserialize, Serialize};

/// One public input of a proof.
pub type PublicInput = [u8; 32];

/// Risk scores are percentages.
pub const MAX_RISK_SCORE: u8 = 100;

#[derive(
	Encode,
	Decode,
	DecodeWithMemTracking,
	Copy,
	Clone,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	RuntimeDebug,
	TypeInfo,
	MaxEncodedLen,
)]
#[cfg_attr(feature = "serde_derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_derive", serde(rename_all = "camelCase"))]
pub enum ProofType {
	PrivateTransfer,
	Membership,
	Identity,
	Compliance,
}

/// Identity attestation as returned to clients.
#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo)]
#[cfg_attr(feature = "serde_derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_derive", serde(rename_all = "camelCase"))]
pub struct IdentityInfo<Moment> {
	pub commitment: [u8; 32],
	pub credential_hash: [u8; 32],
	pub verified_at: Moment,
	pub valid_until: Moment,
	pub revoked: bool,
	/// verified, not revoked and not expired at query time
	pub valid: bool,
}

/// Compliance attestation as returned to clients.
#[derive(Encode, Decode, Clone, PartialEq, Eq, RuntimeDebug, TypeInfo)]
#[cfg_attr(feature = "serde_derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde_derive", serde(rename_all = "camelCase"))]
pub struct ComplianceInfo<Moment> {
	pub risk_score: u8,
	pub aml_passed: bool,
	pub kyc_passed: bool,
	pub verified_at: Moment,
	pub valid_until: Moment,
	/// both checks passed and not expired at query time
	pub valid: bool,
}

/// The opaque proof verification primitive.
pub trait VerifyProof {
	/// Check `proof` against `public_inputs` with the verification key registered for
	/// `proof_type`. Malformed keys or proofs verify as `false`.
	fn verify(
		proof_type: ProofType,
		verification_key: &[u8],
		proof: &[u8],
		public_inputs: &[PublicInput],
	) -> bool;
}

/// Place the SCALE encoding of `value` into a public input slot.
///
/// Values up to 32 bytes are copied verbatim (little-endian for integers). Longer
/// encodings are hashed.
pub fn to_public_input<V: Encode>(value: &V) -> PublicInput {
	value.using_encoded(|bytes| {
		if bytes.len() <= 32 {
			let mut input = [0u8; 32];
			input[..bytes.len()].copy_from_slice(bytes);
			input
		} else {
			blake2_256(bytes)
		}
	})
}

/// Bind arbitrary data to a public input slot by hashing it.
pub fn hash_to_public_input(data: &[u8]) -> PublicInput {
	blake2_256(data)
}

/// Content address of a proof submission.
pub fn proof_hash(proof_type: ProofType, proof: &[u8], public_inputs: &[PublicInput]) -> [u8; 32] {
	blake2_256(&(proof_type, proof, public_inputs).encode())
}

pub mod merkle {
	use super::blake2_256;
	use alloc::vec::Vec;

	pub type Node = [u8; 32];

	pub fn hash_pair(left: &Node, right: &Node) -> Node {
		let mut input = [0u8; 64];
		input[..32].copy_from_slice(left);
		input[32..].copy_from_slice(right);
		blake2_256(&input)
	}

	/// Fold `leaf` up the authentication `path`.
	///
	/// Bit `i` of `leaf_index` tells whether the node at level `i` is a right child.
	pub fn compute_root(leaf: Node, leaf_index: u64, path: &[Node]) -> Node {
		let mut node = leaf;
		let mut index = leaf_index;
		for sibling in path {
			node = if index & 1 == 0 {
				hash_pair(&node, sibling)
			} else {
				hash_pair(sibling, &node)
			};
			index >>= 1;
		}
		node
	}

	/// Root of a complete tree over `leaves`. `None` unless the number of leaves is a
	/// power of two.
	pub fn root_of(leaves: &[Node]) -> Option<Node> {
		if !leaves.len().is_power_of_two() {
			return None
		}
		let mut level = leaves.to_vec();
		while level.len() > 1 {
			level = parent_level(&level);
		}
		level.first().copied()
	}

	/// Authentication path of leaf `index` in a complete tree over `leaves`.
	pub fn path_of(leaves: &[Node], index: usize) -> Option<Vec<Node>> {
		if !leaves.len().is_power_of_two() || index >= leaves.len() {
			return None
		}
		let mut path = Vec::new();
		let mut level = leaves.to_vec();
		let mut index = index;
		while level.len() > 1 {
			path.push(*level.get(index ^ 1)?);
			level = parent_level(&level);
			index >>= 1;
		}
		Some(path)
	}

	fn parent_level(level: &[Node]) -> Vec<Node> {
		level.chunks_exact(2).map(|pair| hash_pair(&pair[0], &pair[1])).collect()
	}
}

#[cfg(test)]
mod tests {
	use super::{merkle::*, *};

	fn leaves() -> Vec<Node> {
		(0u8..8).map(|i| [i; 32]).collect()
	}

	#[test]
	fn every_leaf_folds_to_root() {
		let leaves = leaves();
		let root = root_of(&leaves).unwrap();
		for (i, leaf) in leaves.iter().enumerate() {
			assert_eq!(compute_root(*leaf, i as u64, &path_of(&leaves, i).unwrap()), root);
		}
	}

	#[test]
	fn incomplete_trees_have_no_root() {
		let leaves = leaves();
		assert_eq!(root_of(&[]), None);
		assert_eq!(root_of(&leaves[..3]), None);
		assert_eq!(path_of(&leaves[..6], 0), None);
		assert_eq!(path_of(&leaves, 8), None);
		assert_eq!(root_of(&leaves[..1]), Some(leaves[0]));
		assert_eq!(path_of(&leaves[..1], 0), Some(vec![]));
	}

	#[test]
	fn wrong_index_does_not_fold_to_root() {
		let leaves = leaves();
		let root = root_of(&leaves).unwrap();
		assert_ne!(compute_root(leaves[2], 3, &path_of(&leaves, 2).unwrap()), root);
	}

	#[test]
	fn small_values_are_copied_little_endian() {
		let input = to_public_input(&258u64);
		assert_eq!(input[0], 2);
		assert_eq!(input[1], 1);
		assert!(input[8..].iter().all(|b| *b == 0));
		assert_eq!(to_public_input(&true)[0], 1);
	}

	#[test]
	fn long_values_are_hashed() {
		let long = [5u8; 40];
		assert_eq!(to_public_input(&long), blake2_256(&long.encode()));
	}

	#[test]
	fn proof_hash_separates_types() {
		let inputs = [[1u8; 32]];
		assert_ne!(
			proof_hash(ProofType::Identity, b"proof", &inputs),
			proof_hash(ProofType::Compliance, b"proof", &inputs)
		);
	}

	#[test]
	fn compliance_view_serializes_camel_case() {
		let info = ComplianceInfo {
			risk_score: 5,
			aml_passed: true,
			kyc_passed: false,
			verified_at: 1u64,
			valid_until: 2u64,
			valid: false,
		};
		let json = serde_json::to_string(&info).unwrap();
		assert!(json.contains("\"riskScore\":5"));
		assert!(json.contains("\"amlPassed\":true"));
		assert!(json.contains("\"validUntil\":2"));
	}
}
