// crates/mint-store/src/state.rs
//
// Typed access to the mint module's persisted records.
//
// Key layout:
//   0x00 -> Minter              (protobuf)
//   0x01 -> Params              (protobuf)
//   0x02 -> LastReductionEpoch  (protobuf varint of the value as u64)
//
// `set_params` validates before writing; a rejected record leaves the store
// untouched.

use prost::Message;

use mint_core::error::MintError;
use mint_core::minter::Minter;
use mint_core::params::Params;
use mint_core::proto;
use mint_core::traits::KvStore;

pub const MINTER_KEY: &[u8] = &[0x00];
pub const PARAMS_KEY: &[u8] = &[0x01];
pub const LAST_REDUCTION_EPOCH_KEY: &[u8] = &[0x02];

/// Parameter store and minter state over a `KvStore`.
pub struct MintState<S: KvStore> {
    kv: S,
}

impl<S: KvStore> MintState<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    pub fn kv_mut(&mut self) -> &mut S {
        &mut self.kv
    }

    pub fn into_inner(self) -> S {
        self.kv
    }

    /// Whether genesis has written the params record.
    pub fn is_initialized(&self) -> Result<bool, MintError> {
        self.kv.has(PARAMS_KEY)
    }

    /// Read the stored params. Missing params after genesis is a fatal
    /// invariant violation.
    pub fn get_params(&self) -> Result<Params, MintError> {
        let bytes = self
            .kv
            .get(PARAMS_KEY)?
            .ok_or_else(|| MintError::NotFound("mint params".to_string()))?;
        proto::Params::decode(bytes.as_slice())?.try_into()
    }

    /// Validate and overwrite the stored params.
    pub fn set_params(&mut self, params: &Params) -> Result<(), MintError> {
        params.validate()?;
        let bytes = proto::Params::from(params).encode_to_vec();
        self.kv.set(PARAMS_KEY, &bytes)
    }

    pub fn get_minter(&self) -> Result<Minter, MintError> {
        let bytes = self
            .kv
            .get(MINTER_KEY)?
            .ok_or_else(|| MintError::NotFound("mint minter".to_string()))?;
        proto::Minter::decode(bytes.as_slice())?.try_into()
    }

    pub fn set_minter(&mut self, minter: &Minter) -> Result<(), MintError> {
        let bytes = proto::Minter::from(minter).encode_to_vec();
        self.kv.set(MINTER_KEY, &bytes)
    }

    /// Epoch of the last provision reduction; zero before the first one.
    pub fn get_last_reduction_epoch(&self) -> Result<i64, MintError> {
        match self.kv.get(LAST_REDUCTION_EPOCH_KEY)? {
            Some(bytes) => {
                let raw = prost::encoding::decode_varint(&mut bytes.as_slice())?;
                Ok(raw as i64)
            }
            None => Ok(0),
        }
    }

    pub fn set_last_reduction_epoch(&mut self, epoch: i64) -> Result<(), MintError> {
        let mut bytes = Vec::with_capacity(prost::encoding::encoded_len_varint(epoch as u64));
        prost::encoding::encode_varint(epoch as u64, &mut bytes);
        self.kv.set(LAST_REDUCTION_EPOCH_KEY, &bytes)
    }
}
