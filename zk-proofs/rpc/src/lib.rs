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

use custos_primitives::zk::{ComplianceInfo, IdentityInfo};
use custos_rpc::Error;
use jsonrpsee::{core::RpcResult, proc_macros::rpc};
use pallet_custos_zk_proofs_rpc_runtime_api::ZkProofsApi as ZkProofsRuntimeApi;
use parity_scale_codec::Codec;
use serde::{de::DeserializeOwned, Serialize};
use sp_api::ProvideRuntimeApi;
use sp_blockchain::HeaderBackend;
use sp_core::H256;
use sp_runtime::traits::Block as BlockT;
use std::sync::Arc;

#[rpc(client, server)]
pub trait ZkProofsApi<AccountId, Moment>
where
	AccountId: 'static + Codec + Serialize + DeserializeOwned + Send + Sync,
	Moment: 'static + Codec + Serialize + DeserializeOwned + Send + Sync,
{
	/// Whether `leaf` sits at `leaf_index` of the tree with the published `root`.
	#[method(name = "custos_verifyMembershipProof")]
	fn verify_membership_proof(
		&self,
		path: Vec<H256>,
		leaf_index: u64,
		leaf: H256,
		root: H256,
	) -> RpcResult<bool>;

	#[method(name = "custos_getLatestMerkleRoot")]
	fn get_latest_merkle_root(&self) -> RpcResult<Option<H256>>;

	#[method(name = "custos_getMerkleRootCount")]
	fn get_merkle_root_count(&self) -> RpcResult<u64>;

	#[method(name = "custos_isNullifierUsed")]
	fn is_nullifier_used(&self, nullifier: H256) -> RpcResult<bool>;

	#[method(name = "custos_isCommitmentKnown")]
	fn is_commitment_known(&self, commitment: H256) -> RpcResult<bool>;

	#[method(name = "custos_getIdentityInfo")]
	fn get_identity_info(&self, who: AccountId) -> RpcResult<Option<IdentityInfo<Moment>>>;

	#[method(name = "custos_getComplianceInfo")]
	fn get_compliance_info(&self, who: AccountId) -> RpcResult<Option<ComplianceInfo<Moment>>>;
}

pub struct ZkProofsRpc<Client, Block, AccountId, Moment> {
	client: Arc<Client>,
	_marker: std::marker::PhantomData<(Block, AccountId, Moment)>,
}

impl<Client, Block, AccountId, Moment> ZkProofsRpc<Client, Block, AccountId, Moment> {
	pub fn new(client: Arc<Client>) -> Self {
		ZkProofsRpc { client, _marker: Default::default() }
	}
}

impl<Client, Block, AccountId, Moment> ZkProofsApiServer<AccountId, Moment>
	for ZkProofsRpc<Client, Block, AccountId, Moment>
where
	AccountId: 'static + Codec + Serialize + DeserializeOwned + Send + Sync,
	Moment: 'static + Codec + Serialize + DeserializeOwned + Send + Sync,
	Block: BlockT,
	Client: Send + Sync + 'static + ProvideRuntimeApi<Block> + HeaderBackend<Block>,
	Client::Api: ZkProofsRuntimeApi<Block, AccountId, Moment>,
{
	fn verify_membership_proof(
		&self,
		path: Vec<H256>,
		leaf_index: u64,
		leaf: H256,
		root: H256,
	) -> RpcResult<bool> {
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		let path = path.into_iter().map(|node| node.0).collect();
		let verified = api
			.verify_membership_proof(at, path, leaf_index, leaf.0, root.0)
			.map_err(|e| Error::Runtime(e.into()))?;
		Ok(verified.map_err(|e| Error::Dispatch(format!("{:?}", e)))?)
	}

	fn get_latest_merkle_root(&self) -> RpcResult<Option<H256>> {
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		let root = api.latest_merkle_root(at).map_err(|e| Error::Runtime(e.into()))?;
		Ok(root.map(H256::from))
	}

	fn get_merkle_root_count(&self) -> RpcResult<u64> {
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		Ok(api.merkle_root_count(at).map_err(|e| Error::Runtime(e.into()))?)
	}

	fn is_nullifier_used(&self, nullifier: H256) -> RpcResult<bool> {
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		Ok(api.is_nullifier_used(at, nullifier.0).map_err(|e| Error::Runtime(e.into()))?)
	}

	fn is_commitment_known(&self, commitment: H256) -> RpcResult<bool> {
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		Ok(api.is_commitment_known(at, commitment.0).map_err(|e| Error::Runtime(e.into()))?)
	}

	fn get_identity_info(&self, who: AccountId) -> RpcResult<Option<IdentityInfo<Moment>>> {
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		Ok(api.identity_info(at, &who).map_err(|e| Error::Runtime(e.into()))?)
	}

	fn get_compliance_info(&self, who: AccountId) -> RpcResult<Option<ComplianceInfo<Moment>>> {
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		Ok(api.compliance_info(at, &who).map_err(|e| Error::Runtime(e.into()))?)
	}
}
