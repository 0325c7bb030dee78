use std::{collections::BTreeMap, path::Path};

use casper_marketplace::{
    ConfigError, Marketplace, MarketplaceConfig, MarketplaceEvent, Product, ProductId, Store,
    StoreId,
};
use casper_types::{
    account::AccountHash, bytesrepr::FromBytes, CLTyped, CLValue, RuntimeArgs, U512,
};
use tracing::debug;

use crate::{
    execution_result::{ExecError, ExecutionResult},
    CallRequest, GenesisAccount, Result, DEFAULT_ACCOUNTS, LOCAL_CONFIG_PATH,
};

/// Committed state: the marketplace plus the balances of all known accounts.
#[derive(Clone, Debug)]
struct GlobalState {
    marketplace: Marketplace,
    accounts: BTreeMap<AccountHash, U512>,
}

/// Builder for marketplace tests.
///
/// Each [`exec`](MarketplaceTestBuilder::exec) runs against a scratch copy of the committed state;
/// [`commit`](MarketplaceTestBuilder::commit) promotes the scratch copy of the last successful
/// exec.  A failed exec never produces effects.
#[derive(Debug)]
pub struct MarketplaceTestBuilder {
    config: MarketplaceConfig,
    genesis_accounts: Vec<GenesisAccount>,
    /// Committed state, `None` until the marketplace is deployed.
    state: Option<GlobalState>,
    /// Post state of the last exec call, if it succeeded and was not yet committed.
    scratch: Option<GlobalState>,
    exec_results: Vec<ExecutionResult>,
}

impl Default for MarketplaceTestBuilder {
    fn default() -> Self {
        Self::new(MarketplaceConfig::default())
    }
}

impl MarketplaceTestBuilder {
    /// Returns a [`MarketplaceTestBuilder`] using `config` and the default accounts.
    pub fn new(config: MarketplaceConfig) -> Self {
        MarketplaceTestBuilder {
            config,
            genesis_accounts: DEFAULT_ACCOUNTS.clone(),
            state: None,
            scratch: None,
            exec_results: Vec::new(),
        }
    }

    /// Returns a [`MarketplaceTestBuilder`] configured from the config file at `path`.
    pub fn new_with_config<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
        let config = MarketplaceConfig::from_path(path)?;
        Ok(Self::new(config))
    }

    /// Returns a [`MarketplaceTestBuilder`] configured from the local `marketplace.toml`.
    pub fn new_with_local_config() -> std::result::Result<Self, ConfigError> {
        Self::new_with_config(&*LOCAL_CONFIG_PATH)
    }

    /// Replaces the accounts funded when the marketplace is deployed.
    pub fn with_genesis_accounts(mut self, genesis_accounts: Vec<GenesisAccount>) -> Self {
        self.genesis_accounts = genesis_accounts;
        self
    }

    /// Deploys a fresh marketplace owned by `owner` and funds the genesis accounts.
    pub fn deploy(&mut self, owner: AccountHash) -> &mut Self {
        let accounts = self
            .genesis_accounts
            .iter()
            .map(|account| (account.account_hash(), account.balance()))
            .collect();
        self.state = Some(GlobalState {
            marketplace: Marketplace::new(owner, self.config.clone()),
            accounts,
        });
        self.scratch = None;
        self.exec_results.clear();
        debug!(?owner, "marketplace deployed");
        self
    }

    /// Runs a [`CallRequest`] against a scratch copy of the committed state.
    pub fn exec(&mut self, request: CallRequest) -> &mut Self {
        let mut scratch = self
            .state
            .clone()
            .expect("marketplace should be deployed before exec");

        let result = match Self::run(&mut scratch, &request) {
            Ok((ret, events)) => {
                self.scratch = Some(scratch);
                ExecutionResult::Success { ret, events }
            }
            Err(error) => {
                self.scratch = None;
                ExecutionResult::Failure { error }
            }
        };
        self.exec_results.push(result);
        self
    }

    fn run(
        state: &mut GlobalState,
        request: &CallRequest,
    ) -> std::result::Result<(Option<CLValue>, Vec<MarketplaceEvent>), ExecError> {
        let available = *state
            .accounts
            .get(&request.sender)
            .ok_or(ExecError::UnknownAccount(request.sender))?;
        if available < request.attached_value {
            return Err(ExecError::InsufficientFunds {
                account: request.sender,
                required: request.attached_value,
                available,
            });
        }

        let held_before = state.marketplace.total_held();
        let events_before = state.marketplace.events().len();
        let ret = state
            .marketplace
            .call(&request.context(), &request.entry_point, &request.args)?;

        // Value only leaves the marketplace through withdrawals by the sender.
        let withdrawn = held_before
            .saturating_add(request.attached_value)
            .saturating_sub(state.marketplace.total_held());
        let balance = state.accounts.entry(request.sender).or_default();
        *balance = balance
            .saturating_sub(request.attached_value)
            .saturating_add(withdrawn);

        let events = state.marketplace.events()[events_before..].to_vec();
        Ok((ret, events))
    }

    /// Commits the effects of the previous exec call.
    pub fn commit(&mut self) -> &mut Self {
        if let Some(scratch) = self.scratch.take() {
            self.state = Some(scratch);
        }
        self
    }

    /// Expects a successful run
    pub fn expect_success(&mut self) -> &mut Self {
        let exec_result = self
            .get_last_exec_result()
            .expect("Expected to be called after exec()");

        if exec_result.is_failure() {
            panic!(
                "Expected successful execution result, but instead got: {:#?}",
                exec_result,
            );
        }
        self
    }

    /// Expects a failed run
    pub fn expect_failure(&mut self) -> &mut Self {
        let exec_result = self
            .get_last_exec_result()
            .expect("Expected to be called after exec()");

        if exec_result.is_success() {
            panic!(
                "Expected failed execution result, but instead got: {:?}",
                exec_result,
            );
        }
        self
    }

    /// Returns `true` if the last exec had an error, otherwise returns false.
    pub fn is_error(&self) -> bool {
        self.get_last_exec_result()
            .expect("Expected to be called after exec()")
            .is_failure()
    }

    /// Returns an `Option<ExecError>` if the last exec had an error.
    pub fn get_error(&self) -> Option<ExecError> {
        self.get_last_exec_result()
            .expect("Expected to be called after exec()")
            .as_error()
            .cloned()
    }

    /// Returns the marketplace error the last exec reverted with, if any.
    pub fn get_revert(&self) -> Option<casper_marketplace::Error> {
        self.get_error().and_then(|error| error.as_revert())
    }

    /// Returns the result of the last exec.
    pub fn get_last_exec_result(&self) -> Option<&ExecutionResult> {
        self.exec_results.last()
    }

    /// Returns the results of all exec calls since deployment.
    pub fn get_exec_results(&self) -> &[ExecutionResult] {
        &self.exec_results
    }

    /// Returns the value returned by the last exec, converted to `T`.
    pub fn get_last_return_value<T: CLTyped + FromBytes>(&self) -> Result<T> {
        let cl_value = self
            .get_last_exec_result()
            .and_then(ExecutionResult::ret)
            .cloned()
            .ok_or_else(|| "last exec returned no value".to_string())?;
        Ok(cl_value.into_t()?)
    }

    /// Returns the events emitted by the last exec.
    pub fn get_last_events(&self) -> &[MarketplaceEvent] {
        self.get_last_exec_result()
            .map(ExecutionResult::events)
            .unwrap_or_default()
    }

    /// Queries a read-only entry point against the committed state.
    pub fn query<T: CLTyped + FromBytes>(&self, entry_point: &str, args: RuntimeArgs) -> Result<T> {
        let cl_value = self.get_marketplace().query(entry_point, &args)?;
        Ok(cl_value.into_t()?)
    }

    /// Returns the committed marketplace.
    pub fn get_marketplace(&self) -> &Marketplace {
        &self
            .state
            .as_ref()
            .expect("marketplace should be deployed")
            .marketplace
    }

    /// Returns the committed balance of `account`, or `None` for unknown accounts.
    pub fn get_account_balance(&self, account: AccountHash) -> Option<U512> {
        self.state
            .as_ref()
            .and_then(|state| state.accounts.get(&account).copied())
    }

    /// Returns the committed product with the given id.
    pub fn get_product(&self, product_id: ProductId) -> Option<Product> {
        self.get_marketplace().product(&product_id).cloned()
    }

    /// Returns the committed store with the given id.
    pub fn get_store(&self, store_id: StoreId) -> Option<Store> {
        self.get_marketplace().store(&store_id).cloned()
    }
}
