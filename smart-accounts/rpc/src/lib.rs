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
	accounts::{AccountInfo, RecoveryId, RecoveryInfo},
	common::{Asset, Balance},
};
use custos_rpc::Error;
use jsonrpsee::{core::RpcResult, proc_macros::rpc};
use pallet_custos_smart_accounts_rpc_runtime_api::SmartAccountsApi as SmartAccountsRuntimeApi;
use parity_scale_codec::Codec;
use serde::{de::DeserializeOwned, Serialize};
use sp_api::ProvideRuntimeApi;
use sp_blockchain::HeaderBackend;
use sp_runtime::traits::Block as BlockT;
use std::sync::Arc;

#[rpc(client, server)]
pub trait SmartAccountsApi<AccountId, Moment>
where
	AccountId: 'static + Codec + Serialize + DeserializeOwned + Send + Sync,
	Moment: 'static + Codec + Serialize + DeserializeOwned + Send + Sync,
{
	#[method(name = "custos_getAccountInfo")]
	fn get_account_info(&self, account: AccountId) -> RpcResult<Option<AccountInfo<AccountId>>>;

	#[method(name = "custos_getNonce")]
	fn get_nonce(&self, account: AccountId) -> RpcResult<u64>;

	#[method(name = "custos_getRecoveryRequest")]
	fn get_recovery_request(
		&self,
		id: RecoveryId,
	) -> RpcResult<Option<RecoveryInfo<AccountId, Moment>>>;

	#[method(name = "custos_getSessionKeys")]
	fn get_session_keys(&self, account: AccountId) -> RpcResult<Vec<(AccountId, Moment)>>;

	#[method(name = "custos_getRemainingAllowance")]
	fn get_remaining_allowance(&self, account: AccountId, asset: Asset)
		-> RpcResult<Option<Balance>>;

	#[method(name = "custos_deriveAccountId")]
	fn derive_account_id(
		&self,
		owner: AccountId,
		guardians: Vec<AccountId>,
		salt: u32,
	) -> RpcResult<AccountId>;
}

pub struct SmartAccountsRpc<Client, Block, AccountId, Moment> {
	client: Arc<Client>,
	_marker: std::marker::PhantomData<(Block, AccountId, Moment)>,
}

impl<Client, Block, AccountId, Moment> SmartAccountsRpc<Client, Block, AccountId, Moment> {
	pub fn new(client: Arc<Client>) -> Self {
		SmartAccountsRpc { client, _marker: Default::default() }
	}
}

impl<Client, Block, AccountId, Moment> SmartAccountsApiServer<AccountId, Moment>
	for SmartAccountsRpc<Client, Block, AccountId, Moment>
where
	AccountId: 'static + Codec + Serialize + DeserializeOwned + Send + Sync,
	Moment: 'static + Codec + Serialize + DeserializeOwned + Send + Sync,
	Block: BlockT,
	Client: Send + Sync + 'static + ProvideRuntimeApi<Block> + HeaderBackend<Block>,
	Client::Api: SmartAccountsRuntimeApi<Block, AccountId, Moment>,
{
	fn get_account_info(&self, account: AccountId) -> RpcResult<Option<AccountInfo<AccountId>>> {
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		Ok(api.account_info(at, &account).map_err(|e| Error::Runtime(e.into()))?)
	}

	fn get_nonce(&self, account: AccountId) -> RpcResult<u64> {
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		Ok(api.nonce(at, &account).map_err(|e| Error::Runtime(e.into()))?)
	}

	fn get_recovery_request(
		&self,
		id: RecoveryId,
	) -> RpcResult<Option<RecoveryInfo<AccountId, Moment>>> {
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		Ok(api.recovery_request(at, id).map_err(|e| Error::Runtime(e.into()))?)
	}

	fn get_session_keys(&self, account: AccountId) -> RpcResult<Vec<(AccountId, Moment)>> {
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		Ok(api.session_keys(at, &account).map_err(|e| Error::Runtime(e.into()))?)
	}

	fn get_remaining_allowance(
		&self,
		account: AccountId,
		asset: Asset,
	) -> RpcResult<Option<Balance>> {
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		Ok(api.remaining_allowance(at, &account, asset).map_err(|e| Error::Runtime(e.into()))?)
	}

	fn derive_account_id(
		&self,
		owner: AccountId,
		guardians: Vec<AccountId>,
		salt: u32,
	) -> RpcResult<AccountId> {
		let api = self.client.runtime_api();
		let at = self.client.info().best_hash;
		Ok(api
			.derive_account_id(at, &owner, guardians, salt)
			.map_err(|e| Error::Runtime(e.into()))?)
	}
}
