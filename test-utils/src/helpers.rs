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

use parity_scale_codec::Encode;
use sp_core::H256;
use sp_keyring::Sr25519Keyring;
use sp_runtime::MultiSignature;

/// Sign a 32-byte payload hash the way wallets sign user operations.
pub fn sign_hash(signer: Sr25519Keyring, hash: &H256) -> MultiSignature {
	MultiSignature::from(signer.sign(hash.as_bytes()))
}

/// Deterministic 32-byte value for fixtures.
pub fn bytes32<E: Encode>(seed: E) -> [u8; 32] {
	sp_core::blake2_256(&seed.encode())
}

/// All events deposited so far, oldest first.
pub fn events<T: frame_system::Config>() -> Vec<T::RuntimeEvent> {
	frame_system::Pallet::<T>::events().into_iter().map(|record| record.event).collect()
}
