// crates/mint-economics/src/memory.rs
//
// In-memory adapters for local runs and tests.
//
// Each adapter is a cheap-to-clone handle over shared state, so a caller
// can hand one clone to the keeper and keep another to inspect balances,
// move the bonded ratio, or read back emitted events.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use mint_core::coin::Coin;
use mint_core::error::MintError;
use mint_core::event::Event;
use mint_core::traits::{AccountKeeper, BankKeeper, EventSink, ModuleAccount, StakingKeeper};
use mint_core::{Dec, Int, MINTER_PERMISSION, MODULE_NAME};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

// ---------------------------------------------------------------------------
// Bank
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct BankLedger {
    supply: BTreeMap<String, Int>,
    /// (module, denom) -> balance
    balances: BTreeMap<(String, String), Int>,
    fail_mint: bool,
    fail_send: bool,
}

/// Supply and module balances held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryBank {
    ledger: Arc<Mutex<BankLedger>>,
}

impl InMemoryBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the total supply of `denom` (held outside any module account).
    pub fn with_supply(self, denom: &str, amount: Int) -> Self {
        lock(&self.ledger).supply.insert(denom.to_string(), amount);
        self
    }

    pub fn supply_of(&self, denom: &str) -> Int {
        lock(&self.ledger)
            .supply
            .get(denom)
            .copied()
            .unwrap_or_default()
    }

    pub fn balance(&self, module: &str, denom: &str) -> Int {
        lock(&self.ledger)
            .balances
            .get(&(module.to_string(), denom.to_string()))
            .copied()
            .unwrap_or_default()
    }

    /// Make every subsequent `mint_coins` fail.
    pub fn set_fail_mint(&self, fail: bool) {
        lock(&self.ledger).fail_mint = fail;
    }

    /// Make every subsequent module-to-module transfer fail.
    pub fn set_fail_send(&self, fail: bool) {
        lock(&self.ledger).fail_send = fail;
    }
}

impl BankKeeper for InMemoryBank {
    fn get_supply(&self, denom: &str) -> Result<Int, MintError> {
        Ok(self.supply_of(denom))
    }

    fn mint_coins(&self, module: &str, coins: &[Coin]) -> Result<(), MintError> {
        let mut ledger = lock(&self.ledger);
        if ledger.fail_mint {
            return Err(MintError::Bank(format!("minting to {} disabled", module)));
        }
        for coin in coins {
            coin.validate().map_err(|e| MintError::Bank(e.to_string()))?;
        }
        for coin in coins {
            let supply = ledger.supply.entry(coin.denom.clone()).or_default();
            *supply = supply.checked_add(&coin.amount)?;
            let balance = ledger
                .balances
                .entry((module.to_string(), coin.denom.clone()))
                .or_default();
            *balance = balance.checked_add(&coin.amount)?;
        }
        Ok(())
    }

    fn send_coins_from_module_to_module(
        &self,
        sender: &str,
        recipient: &str,
        coins: &[Coin],
    ) -> Result<(), MintError> {
        let mut ledger = lock(&self.ledger);
        if ledger.fail_send {
            return Err(MintError::Bank(format!(
                "transfer from {} to {} disabled",
                sender, recipient
            )));
        }
        for coin in coins {
            let key = (sender.to_string(), coin.denom.clone());
            let held = ledger.balances.get(&key).copied().unwrap_or_default();
            if held < coin.amount {
                return Err(MintError::Bank(format!(
                    "insufficient funds: {} has {}{}, needs {}",
                    sender, held, coin.denom, coin
                )));
            }
        }
        for coin in coins {
            let from = ledger
                .balances
                .entry((sender.to_string(), coin.denom.clone()))
                .or_default();
            *from = from.checked_sub(&coin.amount)?;
            let to = ledger
                .balances
                .entry((recipient.to_string(), coin.denom.clone()))
                .or_default();
            *to = to.checked_add(&coin.amount)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Staking
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct StakingView {
    bonded_ratio: Dec,
    staking_token_supply: Int,
}

/// Staking view with an externally controlled bonded ratio.
#[derive(Debug, Clone)]
pub struct StaticStaking {
    view: Arc<Mutex<StakingView>>,
}

impl StaticStaking {
    pub fn new(bonded_ratio: Dec, staking_token_supply: Int) -> Self {
        Self {
            view: Arc::new(Mutex::new(StakingView {
                bonded_ratio,
                staking_token_supply,
            })),
        }
    }

    pub fn set_bonded_ratio(&self, ratio: Dec) {
        lock(&self.view).bonded_ratio = ratio;
    }

    pub fn set_staking_token_supply(&self, supply: Int) {
        lock(&self.view).staking_token_supply = supply;
    }
}

impl StakingKeeper for StaticStaking {
    fn bonded_ratio(&self) -> Result<Dec, MintError> {
        let ratio = lock(&self.view).bonded_ratio;
        if ratio.is_negative() || ratio > Dec::one() {
            return Err(MintError::Staking(format!(
                "bonded ratio out of range: {}",
                ratio
            )));
        }
        Ok(ratio)
    }

    fn staking_token_supply(&self) -> Result<Int, MintError> {
        Ok(lock(&self.view).staking_token_supply)
    }
}

// ---------------------------------------------------------------------------
// Accounts
// ---------------------------------------------------------------------------

/// Module account registry keyed by module name.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccounts {
    accounts: Arc<Mutex<BTreeMap<String, ModuleAccount>>>,
}

impl InMemoryAccounts {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AccountKeeper for InMemoryAccounts {
    fn get_module_address(&self, name: &str) -> String {
        format!("modaccount:{}", name)
    }

    fn get_module_account(&self, name: &str) -> Result<ModuleAccount, MintError> {
        if name.is_empty() {
            return Err(MintError::Account("module name cannot be empty".to_string()));
        }
        let address = self.get_module_address(name);
        let mut accounts = lock(&self.accounts);
        let account = accounts
            .entry(name.to_string())
            .or_insert_with(|| ModuleAccount {
                name: name.to_string(),
                address,
                permissions: if name == MODULE_NAME {
                    vec![MINTER_PERMISSION.to_string()]
                } else {
                    Vec::new()
                },
            });
        Ok(account.clone())
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct EventLog {
    events: Vec<Event>,
    fail: bool,
}

/// Event sink that keeps every event in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingEventSink {
    log: Arc<Mutex<EventLog>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        lock(&self.log).events.clone()
    }

    pub fn last(&self) -> Option<Event> {
        lock(&self.log).events.last().cloned()
    }

    /// Refuse every subsequent event.
    pub fn set_fail(&self, fail: bool) {
        lock(&self.log).fail = fail;
    }
}

impl EventSink for RecordingEventSink {
    fn emit(&self, event: &Event) -> Result<(), MintError> {
        let mut log = lock(&self.log);
        if log.fail {
            return Err(MintError::EventSink("sink closed".to_string()));
        }
        log.events.push(event.clone());
        Ok(())
    }
}
