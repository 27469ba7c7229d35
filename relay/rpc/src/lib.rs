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

use custos_primitives::{
	accounts::AccountCall,
	relay::{RelayerInfo, SponsorInfo, SponsoredUser},
};
use custos_rpc::Error;
use jsonrpsee::{core::RpcResult, proc_macros::rpc};
use pallet_custos_relay_rpc_runtime_api::RelayApi as RelayRuntimeApi;
use parity_scale_codec::{Codec, Decode};
use serde::{de::DeserializeOwned, Serialize};
use sp_api::ProvideRuntimeApi;
use sp_blockchain::HeaderBackend;
use sp_core::{Bytes, H256};
use sp_runtime::traits::Block as BlockT;
use std::sync::Arc;

#[rpc(client, server)]
pub trait RelayApi<AccountId>
where
	AccountId: 'static + Codec + Serialize + DeserializeOwned + Send + Sync,
{
	#[method(name = "custos_getRelayerInfo")]
	fn get_relayer_info(&self, relayer: AccountId) -> RpcResult<Option<RelayerInfo>>;

	#[method(name = "custos_getSponsorInfo")]
	fn get_sponsor_info(&self, sponsor: AccountId) -> RpcResult<Option<SponsorInfo>>;

	#[method(name = "custos_getSponsoredUser")]
	fn get_sponsored_user(
		&self,
		sponsor: AccountId,
		user: AccountId,
	) -> RpcResult<Option<SponsoredUser>>;

	#[method(name = "custos_isOperationExecuted")]
	fn is_operation_executed(&self, hash: H256) -> RpcResult<bool>;

	/// `calls` is the SCALE encoded `Vec<AccountCall>` of an operation or batch.
	#[method(name = "custos_estimateGas")]
	fn estimate_gas(&self, calls: Bytes) -> RpcResult<u64>;
}

pub struct RelayRpc<Client, Block, AccountId, Moment> {
	client: Arc<Client>,
	_marker: std::marker::PhantomData<(Block, AccountId, Moment)>,
}

impl<Client, Block, AccountId, Moment> RelayRpc<Client, Block, AccountId, Moment> {
	pub fn new(client: Arc<Client>) -> Self {
		RelayRpc { client, _marker: Default::default() }
	}
}

impl<Client, Block, AccountId, Moment> RelayApiServer<AccountId>
	for RelayRpc<Client, Block, AccountId, Moment>
where
	AccountId: 'static + Codec + Serialize + DeserializeOwned + Send + Sync,
	Moment: 'static + Codec + Send + Sync,
	Block: BlockT,
	Client: Send + Sync + 'static + ProvideRuntimeApi<Block> + HeaderBackend<Block>,
	Client::Api: RelayRuntimeApi<Block, AccountId, Moment>,
{
	fn get_relayer_info(&self, relayer: AccountId) -> RpcResult<Option<RelayerInfo>> {
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		Ok(api.relayer_info(at, &relayer).map_err(|e| Error::Runtime(e.into()))?)
	}

	fn get_sponsor_info(&self, sponsor: AccountId) -> RpcResult<Option<SponsorInfo>> {
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		Ok(api.sponsor_info(at, &sponsor).map_err(|e| Error::Runtime(e.into()))?)
	}

	fn get_sponsored_user(
		&self,
		sponsor: AccountId,
		user: AccountId,
	) -> RpcResult<Option<SponsoredUser>> {
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		Ok(api.sponsored_user(at, &sponsor, &user).map_err(|e| Error::Runtime(e.into()))?)
	}

	fn is_operation_executed(&self, hash: H256) -> RpcResult<bool> {
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		Ok(api.is_operation_executed(at, hash).map_err(|e| Error::Runtime(e.into()))?)
	}

	fn estimate_gas(&self, calls: Bytes) -> RpcResult<u64> {
		let calls = Vec::<AccountCall<AccountId, Moment>>::decode(&mut &calls[..])
			.map_err(|e| Error::Decode(e.to_string()))?;
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		Ok(api.estimate_gas(at, calls).map_err(|e| Error::Runtime(e.into()))?)
	}
}
