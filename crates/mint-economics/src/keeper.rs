// crates/mint-economics/src/keeper.rs
//
// MintKeeper: the mint cycle driver.
//
// Owns the module's KV namespace and one instance of each adapter. Every
// cycle stages its writes in a `CacheKv` over the module store and commits
// only after every fallible step (controller math, bank mint and transfer)
// has succeeded. The audit event is emitted after the commit; a sink
// failure is logged and does not undo the mint.
//
// Block regime:  `begin_block` runs once per block.
// Epoch regime:  `after_epoch_end` (also reachable through `EpochHooks`)
//                runs when the epoch subsystem closes an epoch.

use serde::{Deserialize, Serialize};

use mint_core::coin::Coin;
use mint_core::error::MintError;
use mint_core::event::Event;
use mint_core::genesis::GenesisState;
use mint_core::minter::Minter;
use mint_core::params::Params;
use mint_core::traits::{
    AccountKeeper, BankKeeper, EpochHooks, EventSink, KvStore, StakingKeeper,
};
use mint_core::{Dec, Int, FEE_COLLECTOR_NAME, MINTER_PERMISSION, MODULE_NAME};
use mint_store::{CacheKv, MintState};

use crate::controller::{block_provision, next_annual_provisions, BondedRatioController, InflationCalculator};
use crate::epoch::{epoch_provision, next_epoch_provisions};

/// Which supply figure the block regime multiplies by the inflation rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisionSupply {
    /// Total bank supply of `mint_denom`.
    #[default]
    MintDenom,
    /// Total supply of the staking token as reported by staking.
    StakingToken,
}

/// The collaborators handed to the keeper at construction.
pub struct MintAdapters {
    pub staking: Box<dyn StakingKeeper>,
    pub bank: Box<dyn BankKeeper>,
    pub accounts: Box<dyn AccountKeeper>,
    pub events: Box<dyn EventSink>,
}

/// Summary of one mint cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintOutcome {
    /// Coins created and sent to the fee collector (possibly zero).
    pub minted: Coin,
    /// Minter state as committed by the cycle.
    pub minter: Minter,
    /// The audit event for the cycle.
    pub event: Event,
}

pub struct MintKeeper {
    state: MintState<Box<dyn KvStore>>,
    adapters: MintAdapters,
    calculator: Box<dyn InflationCalculator>,
    authority: String,
    fee_collector: String,
    provision_supply: ProvisionSupply,
}

impl MintKeeper {
    /// Build a keeper over `store` with the default bonded-ratio controller.
    ///
    /// `authority` is the only address allowed to replace parameters.
    pub fn new(store: Box<dyn KvStore>, adapters: MintAdapters, authority: impl Into<String>) -> Self {
        Self {
            state: MintState::new(store),
            adapters,
            calculator: Box::new(BondedRatioController),
            authority: authority.into(),
            fee_collector: FEE_COLLECTOR_NAME.to_string(),
            provision_supply: ProvisionSupply::default(),
        }
    }

    pub fn with_inflation_calculator(mut self, calculator: impl InflationCalculator + 'static) -> Self {
        self.calculator = Box::new(calculator);
        self
    }

    pub fn with_fee_collector(mut self, fee_collector: impl Into<String>) -> Self {
        self.fee_collector = fee_collector.into();
        self
    }

    pub fn with_provision_supply(mut self, provision_supply: ProvisionSupply) -> Self {
        self.provision_supply = provision_supply;
        self
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn fee_collector(&self) -> &str {
        &self.fee_collector
    }

    // -- Genesis ------------------------------------------------------------

    /// Whether genesis has been written to the module store.
    pub fn is_initialized(&self) -> Result<bool, MintError> {
        self.state.is_initialized()
    }

    /// Validate and write the genesis records. Also makes sure the mint
    /// module account exists with the minter permission.
    pub fn init_genesis(&mut self, genesis: &GenesisState) -> Result<(), MintError> {
        genesis.validate()?;

        let account = self.adapters.accounts.get_module_account(MODULE_NAME)?;
        if !account.permissions.iter().any(|p| p == MINTER_PERMISSION) {
            return Err(MintError::Account(format!(
                "module account {} lacks {} permission",
                account.name, MINTER_PERMISSION
            )));
        }

        let mut staged = MintState::new(CacheKv::new(&mut **self.state.kv_mut()));
        staged.set_minter(&genesis.minter)?;
        staged.set_params(&genesis.params)?;
        staged.set_last_reduction_epoch(genesis.last_reduction_epoch)?;
        staged.into_inner().commit()?;

        tracing::info!(
            "Mint genesis initialized: denom={}, inflation={}, module_account={}",
            genesis.params.mint_denom,
            genesis.minter.inflation,
            account.address
        );
        Ok(())
    }

    pub fn export_genesis(&self) -> Result<GenesisState, MintError> {
        Ok(GenesisState {
            minter: self.state.get_minter()?,
            params: self.state.get_params()?,
            last_reduction_epoch: self.state.get_last_reduction_epoch()?,
        })
    }

    // -- Queries ------------------------------------------------------------

    pub fn params(&self) -> Result<Params, MintError> {
        self.state.get_params()
    }

    pub fn minter(&self) -> Result<Minter, MintError> {
        self.state.get_minter()
    }

    pub fn inflation(&self) -> Result<Dec, MintError> {
        Ok(self.state.get_minter()?.inflation)
    }

    pub fn annual_provisions(&self) -> Result<Dec, MintError> {
        Ok(self.state.get_minter()?.annual_provisions)
    }

    pub fn epoch_provisions(&self) -> Result<Dec, MintError> {
        Ok(self.state.get_minter()?.epoch_provisions)
    }

    pub fn last_reduction_epoch(&self) -> Result<i64, MintError> {
        self.state.get_last_reduction_epoch()
    }

    /// Validate and store new params. Authority is checked by the message
    /// server, not here.
    pub fn set_params(&mut self, params: &Params) -> Result<(), MintError> {
        self.state.set_params(params)
    }

    // -- Block regime -------------------------------------------------------

    /// Run one block-regime mint cycle.
    pub fn begin_block(&mut self, height: u64) -> Result<MintOutcome, MintError> {
        let params = self.state.get_params()?;
        let mut minter = self.state.get_minter()?;

        let total_supply = self.adapters.bank.get_supply(&params.mint_denom)?;
        let bonded_ratio = self.adapters.staking.bonded_ratio()?;
        let provision_base = match self.provision_supply {
            ProvisionSupply::MintDenom => total_supply,
            ProvisionSupply::StakingToken => self.adapters.staking.staking_token_supply()?,
        };

        minter.inflation = self
            .calculator
            .next_inflation_rate(&params, &minter, &bonded_ratio)?;
        minter.annual_provisions = next_annual_provisions(&params, &minter, &provision_base)?;

        let mut staged = MintState::new(CacheKv::new(&mut **self.state.kv_mut()));
        staged.set_minter(&minter)?;

        let mut minted = block_provision(&params, &minter)?;
        if params.has_max_supply() {
            let remaining = params.max_supply.checked_sub(&total_supply)?;
            if remaining.is_positive() {
                minted.amount = minted.amount.min(remaining);
            } else {
                tracing::warn!(
                    "Max supply reached at height {}: supply={} max={}",
                    height,
                    total_supply,
                    params.max_supply
                );
                minted.amount = Int::zero();
            }
        }

        if minted.is_positive() {
            let coins = [minted.clone()];
            self.adapters.bank.mint_coins(MODULE_NAME, &coins)?;
            self.adapters
                .bank
                .send_coins_from_module_to_module(MODULE_NAME, &self.fee_collector, &coins)?;
        }

        staged.into_inner().commit()?;

        tracing::debug!(
            "Block {} minted {} (inflation={}, bonded_ratio={}, annual_provisions={})",
            height,
            minted,
            minter.inflation,
            bonded_ratio,
            minter.annual_provisions
        );

        let event = Event::block_mint(
            &bonded_ratio,
            &minter.inflation,
            &minter.annual_provisions,
            &minted.amount,
        );
        self.emit(&event);

        Ok(MintOutcome {
            minted,
            minter,
            event,
        })
    }

    // -- Epoch regime -------------------------------------------------------

    /// Run the epoch-regime mint for a closed epoch.
    ///
    /// Returns `None` when the epoch is not the configured one, the regime is
    /// disabled, or distribution has not started yet.
    pub fn after_epoch_end(
        &mut self,
        epoch_identifier: &str,
        epoch_number: i64,
    ) -> Result<Option<MintOutcome>, MintError> {
        let params = self.state.get_params()?;
        if !params.epoch_minting_enabled() || epoch_identifier != params.epoch_identifier {
            return Ok(None);
        }
        let start_epoch = params.minting_rewards_distribution_start_epoch;
        if epoch_number < start_epoch {
            return Ok(None);
        }

        let mut staged = MintState::new(CacheKv::new(&mut **self.state.kv_mut()));
        if epoch_number == start_epoch {
            staged.set_last_reduction_epoch(epoch_number)?;
        }

        let mut minter = staged.get_minter()?;
        let last_reduction_epoch = staged.get_last_reduction_epoch()?;
        let next_reduction = params
            .reduction_period_in_epochs
            .saturating_add(last_reduction_epoch);
        if epoch_number >= next_reduction {
            let previous = minter.epoch_provisions;
            minter.epoch_provisions = next_epoch_provisions(&minter, &params)?;
            staged.set_minter(&minter)?;
            staged.set_last_reduction_epoch(epoch_number)?;
            tracing::info!(
                "Epoch provisions reduced at epoch {}: {} -> {}",
                epoch_number,
                previous,
                minter.epoch_provisions
            );
        }

        let minted = epoch_provision(&minter, &params)?;
        let coins = [minted.clone()];
        self.adapters.bank.mint_coins(MODULE_NAME, &coins)?;
        self.adapters
            .bank
            .send_coins_from_module_to_module(MODULE_NAME, &self.fee_collector, &coins)?;

        staged.into_inner().commit()?;

        tracing::debug!(
            "Epoch {} ({}) minted {}",
            epoch_number,
            epoch_identifier,
            minted
        );

        let event = Event::epoch_mint(epoch_number, &minter.epoch_provisions, &minted.amount);
        self.emit(&event);

        Ok(Some(MintOutcome {
            minted,
            minter,
            event,
        }))
    }

    fn emit(&self, event: &Event) {
        if let Err(e) = self.adapters.events.emit(event) {
            tracing::warn!("Failed to emit {} event: {}", event.kind, e);
        }
    }
}

impl EpochHooks for MintKeeper {
    fn before_epoch_start(&mut self, _epoch_identifier: &str, _epoch_number: i64) -> Result<(), MintError> {
        Ok(())
    }

    fn after_epoch_end(&mut self, epoch_identifier: &str, epoch_number: i64) -> Result<(), MintError> {
        MintKeeper::after_epoch_end(self, epoch_identifier, epoch_number).map(|_| ())
    }
}
