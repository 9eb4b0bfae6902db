// crates/mint-economics/src/query.rs
//
// Read-only query handlers. Decimal responses carry the LegacyDec wire
// form (the backing integer's digits) as bytes.

use mint_core::error::MintError;
use mint_core::proto::{
    self, QueryAnnualProvisionsRequest, QueryAnnualProvisionsResponse, QueryEpochProvisionsRequest,
    QueryEpochProvisionsResponse, QueryInflationRequest, QueryInflationResponse,
    QueryParamsRequest, QueryParamsResponse,
};

use crate::keeper::MintKeeper;

pub struct QueryServer<'a> {
    keeper: &'a MintKeeper,
}

impl<'a> QueryServer<'a> {
    pub fn new(keeper: &'a MintKeeper) -> Self {
        Self { keeper }
    }

    pub fn params(&self, _req: QueryParamsRequest) -> Result<QueryParamsResponse, MintError> {
        let params = self.keeper.params()?;
        Ok(QueryParamsResponse {
            params: Some(proto::Params::from(&params)),
        })
    }

    pub fn inflation(&self, _req: QueryInflationRequest) -> Result<QueryInflationResponse, MintError> {
        Ok(QueryInflationResponse {
            inflation: self.keeper.inflation()?.to_wire().into_bytes(),
        })
    }

    pub fn annual_provisions(
        &self,
        _req: QueryAnnualProvisionsRequest,
    ) -> Result<QueryAnnualProvisionsResponse, MintError> {
        Ok(QueryAnnualProvisionsResponse {
            annual_provisions: self.keeper.annual_provisions()?.to_wire().into_bytes(),
        })
    }

    pub fn epoch_provisions(
        &self,
        _req: QueryEpochProvisionsRequest,
    ) -> Result<QueryEpochProvisionsResponse, MintError> {
        Ok(QueryEpochProvisionsResponse {
            epoch_provisions: self.keeper.epoch_provisions()?.to_wire().into_bytes(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keeper::MintAdapters;
    use crate::memory::{InMemoryAccounts, InMemoryBank, RecordingEventSink, StaticStaking};
    use mint_core::genesis::GenesisState;
    use mint_core::minter::Minter;
    use mint_core::params::Params;
    use mint_core::proto::dec_from_wire_bytes;
    use mint_core::{Dec, Int};
    use mint_store::MemKvStore;

    fn keeper(genesis: &GenesisState) -> MintKeeper {
        let adapters = MintAdapters {
            staking: Box::new(StaticStaking::new(Dec::zero(), Int::zero())),
            bank: Box::new(InMemoryBank::new()),
            accounts: Box::new(InMemoryAccounts::new()),
            events: Box::new(RecordingEventSink::new()),
        };
        let mut keeper = MintKeeper::new(Box::new(MemKvStore::new()), adapters, "gov");
        keeper.init_genesis(genesis).unwrap();
        keeper
    }

    #[test]
    fn test_params_query() {
        let k = keeper(&GenesisState::default());
        let resp = QueryServer::new(&k).params(QueryParamsRequest {}).unwrap();
        let params = Params::try_from(resp.params.unwrap()).unwrap();
        assert_eq!(params, Params::default());
    }

    #[test]
    fn test_decimal_queries_use_wire_form() {
        let minter = Minter::new(Dec::new_with_prec(13, 2), Dec::from_u64(42))
            .with_epoch_provisions(Dec::new_with_prec(15, 1));
        let k = keeper(&GenesisState::new(minter, Params::default()));
        let q = QueryServer::new(&k);

        let inflation = q.inflation(QueryInflationRequest {}).unwrap().inflation;
        assert_eq!(inflation, b"130000000000000000".to_vec());

        let annual = q
            .annual_provisions(QueryAnnualProvisionsRequest {})
            .unwrap()
            .annual_provisions;
        assert_eq!(dec_from_wire_bytes("annual_provisions", &annual).unwrap(), Dec::from_u64(42));

        let epoch = q
            .epoch_provisions(QueryEpochProvisionsRequest {})
            .unwrap()
            .epoch_provisions;
        assert_eq!(epoch, b"1500000000000000000".to_vec());
    }
}
