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

//! Error type shared by the custos RPC extensions.

use jsonrpsee::types::{error::ErrorObject, ErrorObjectOwned};

mod error_codes {
	pub const RUNTIME_ERROR: i32 = 1; // Arbitrary number, but substrate uses the same
	pub const DECODE_ERROR: i32 = 2;
	pub const DISPATCH_ERROR: i32 = 3;
	pub const UNKNOWN_ERROR: i32 = 100;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Error while calling into the runtime: {0}")]
	Runtime(Box<dyn std::error::Error + Send + Sync>),
	#[error("Could not decode the parameters: {0}")]
	Decode(String),
	/// The runtime answered with a module error, e.g. an unknown Merkle root.
	#[error("Query rejected by the runtime: {0}")]
	Dispatch(String),
	#[error("Other error: {0}")]
	Other(Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
	pub fn code(&self) -> i32 {
		use Error::*;
		match self {
			Runtime(_) => error_codes::RUNTIME_ERROR,
			Decode(_) => error_codes::DECODE_ERROR,
			Dispatch(_) => error_codes::DISPATCH_ERROR,
			Other(_) => error_codes::UNKNOWN_ERROR,
		}
	}
}

impl From<Error> for ErrorObjectOwned {
	fn from(err: Error) -> Self {
		ErrorObject::owned(err.code(), err.to_string(), None::<()>)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn errors_map_to_stable_codes() {
		let err: ErrorObjectOwned = Error::Dispatch("UnknownRoot".into()).into();
		assert_eq!(err.code(), 3);
		assert_eq!(err.message(), "Query rejected by the runtime: UnknownRoot");

		let err: ErrorObjectOwned = Error::Runtime("boom".into()).into();
		assert_eq!(err.code(), 1);
	}
}
