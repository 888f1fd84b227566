//! ExampleERC20Decimals contract bindings
//!
//! A burnable test ERC20 whose decimals are fixed at deployment. Anyone may
//! mint up to [`MAX_MINT_AMOUNT`] per call, which makes it a convenient fee
//! or collateral token on test networks.

use alloy_network::Ethereum;
use alloy_primitives::{Address, TxHash, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::{sol, SolConstructor, SolInterface};
use tracing::{debug, info, warn};

use crate::contracts::submit;
use crate::deploy::{self, Deployment};
use crate::error::{IcttError, Result};
use crate::events::{event_bindings, EventFilterer};
use crate::metadata::{ContractArtifact, EXAMPLE_ERC20_DECIMALS_METADATA};
use crate::options::{CallOpts, TransactOpts};
use crate::providers::AlloyLogSource;
use crate::traits::LogSource;

pub use ExampleERC20Decimals::{
    Approval, ExampleERC20DecimalsErrors, ExampleERC20DecimalsEvents,
    ExampleERC20DecimalsInstance, Transfer,
};

/// Largest amount a single `mint` call accepts (`1e19` base units)
pub const MAX_MINT_AMOUNT: U256 = U256::from_limbs([10_000_000_000_000_000_000, 0, 0, 0]);

/// Read-only bindings for `ExampleERC20Decimals`.
pub struct ExampleERC20DecimalsCaller<P: Provider<Ethereum>> {
    instance: ExampleERC20DecimalsInstance<P>,
    opts: CallOpts,
}

impl<P: Provider<Ethereum>> ExampleERC20DecimalsCaller<P> {
    pub fn new(address: Address, provider: P) -> Self {
        Self {
            instance: ExampleERC20DecimalsInstance::new(address, provider),
            opts: CallOpts::default(),
        }
    }

    pub fn with_call_opts(mut self, opts: CallOpts) -> Self {
        self.opts = opts;
        self
    }

    pub fn call_opts(&self) -> &CallOpts {
        &self.opts
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    pub async fn allowance(&self, owner: Address, spender: Address) -> Result<U256> {
        Ok(self
            .opts
            .apply(self.instance.allowance(owner, spender))
            .call()
            .await?)
    }

    pub async fn balance_of(&self, account: Address) -> Result<U256> {
        let balance = self
            .opts
            .apply(self.instance.balanceOf(account))
            .call()
            .await?;

        debug!(
            account = %account,
            balance = %balance,
            contract_address = %self.instance.address(),
            event = "balance_retrieved"
        );

        Ok(balance)
    }

    pub async fn decimals(&self) -> Result<u8> {
        Ok(self.opts.apply(self.instance.decimals()).call().await?)
    }

    pub async fn name(&self) -> Result<String> {
        Ok(self.opts.apply(self.instance.name()).call().await?)
    }

    pub async fn symbol(&self) -> Result<String> {
        Ok(self.opts.apply(self.instance.symbol()).call().await?)
    }

    pub async fn total_supply(&self) -> Result<U256> {
        Ok(self.opts.apply(self.instance.totalSupply()).call().await?)
    }
}

/// State-mutating bindings for `ExampleERC20Decimals`.
///
/// As with the other transactors, `*_transaction` builds an unsigned request
/// and the plain form submits it.
pub struct ExampleERC20DecimalsTransactor<P: Provider<Ethereum>> {
    instance: ExampleERC20DecimalsInstance<P>,
}

impl<P: Provider<Ethereum>> ExampleERC20DecimalsTransactor<P> {
    pub fn new(address: Address, provider: P) -> Self {
        Self {
            instance: ExampleERC20DecimalsInstance::new(address, provider),
        }
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    pub async fn submit(&self, tx: TransactionRequest) -> Result<TxHash> {
        submit(self.instance.provider(), self.address(), tx).await
    }

    pub fn approve_transaction(
        &self,
        opts: &TransactOpts,
        spender: Address,
        value: U256,
    ) -> TransactionRequest {
        info!(
            from = %opts.from,
            spender = %spender,
            value = %value,
            contract_address = %self.instance.address(),
            event = "approve_transaction_created"
        );

        opts.apply(self.instance.approve(spender, value))
            .into_transaction_request()
    }

    pub async fn approve(
        &self,
        opts: &TransactOpts,
        spender: Address,
        value: U256,
    ) -> Result<TxHash> {
        self.submit(self.approve_transaction(opts, spender, value)).await
    }

    pub fn burn_transaction(&self, opts: &TransactOpts, value: U256) -> TransactionRequest {
        opts.apply(self.instance.burn(value)).into_transaction_request()
    }

    pub async fn burn(&self, opts: &TransactOpts, value: U256) -> Result<TxHash> {
        self.submit(self.burn_transaction(opts, value)).await
    }

    pub fn burn_from_transaction(
        &self,
        opts: &TransactOpts,
        account: Address,
        value: U256,
    ) -> TransactionRequest {
        opts.apply(self.instance.burnFrom(account, value))
            .into_transaction_request()
    }

    pub async fn burn_from(
        &self,
        opts: &TransactOpts,
        account: Address,
        value: U256,
    ) -> Result<TxHash> {
        self.submit(self.burn_from_transaction(opts, account, value)).await
    }

    /// Mints `amount` to the sender.
    ///
    /// # Errors
    ///
    /// Returns [`IcttError::MintLimitExceeded`] if `amount` is above
    /// [`MAX_MINT_AMOUNT`]; the contract would revert such a call.
    pub fn mint_transaction(
        &self,
        opts: &TransactOpts,
        amount: U256,
    ) -> Result<TransactionRequest> {
        if amount > MAX_MINT_AMOUNT {
            warn!(
                amount = %amount,
                max = %MAX_MINT_AMOUNT,
                event = "mint_limit_exceeded"
            );
            return Err(IcttError::MintLimitExceeded {
                requested: amount,
                max: MAX_MINT_AMOUNT,
            });
        }

        info!(
            from = %opts.from,
            amount = %amount,
            contract_address = %self.instance.address(),
            event = "mint_transaction_created"
        );

        Ok(opts.apply(self.instance.mint(amount)).into_transaction_request())
    }

    pub async fn mint(&self, opts: &TransactOpts, amount: U256) -> Result<TxHash> {
        let tx = self.mint_transaction(opts, amount)?;
        self.submit(tx).await
    }

    pub fn transfer_transaction(
        &self,
        opts: &TransactOpts,
        to: Address,
        value: U256,
    ) -> TransactionRequest {
        opts.apply(self.instance.transfer(to, value))
            .into_transaction_request()
    }

    pub async fn transfer(&self, opts: &TransactOpts, to: Address, value: U256) -> Result<TxHash> {
        self.submit(self.transfer_transaction(opts, to, value)).await
    }

    pub fn transfer_from_transaction(
        &self,
        opts: &TransactOpts,
        from: Address,
        to: Address,
        value: U256,
    ) -> TransactionRequest {
        opts.apply(self.instance.transferFrom(from, to, value))
            .into_transaction_request()
    }

    pub async fn transfer_from(
        &self,
        opts: &TransactOpts,
        from: Address,
        to: Address,
        value: U256,
    ) -> Result<TxHash> {
        self.submit(self.transfer_from_transaction(opts, from, to, value)).await
    }
}

/// Event bindings for `ExampleERC20Decimals`.
#[derive(Debug, Clone)]
pub struct ExampleERC20DecimalsFilterer<L> {
    events: EventFilterer<L>,
}

impl<L: LogSource> ExampleERC20DecimalsFilterer<L> {
    pub fn new(address: Address, source: L) -> Self {
        Self {
            events: EventFilterer::new(address, source),
        }
    }

    pub fn address(&self) -> Address {
        self.events.address()
    }

    event_bindings! {
        /// `Approval(address indexed owner, address indexed spender, uint256 value)`
        Approval => filter_approval, watch_approval, parse_approval;
        owner: Address; spender: Address
    }

    event_bindings! {
        /// `Transfer(address indexed from, address indexed to, uint256 value)`
        Transfer => filter_transfer, watch_transfer, parse_transfer;
        from: Address; to: Address
    }
}

/// Caller, transactor and filterer bound to one deployed `ExampleERC20Decimals`.
pub struct ExampleERC20DecimalsContract<P: Provider<Ethereum> + Clone> {
    caller: ExampleERC20DecimalsCaller<P>,
    transactor: ExampleERC20DecimalsTransactor<P>,
    filterer: ExampleERC20DecimalsFilterer<AlloyLogSource<P>>,
}

impl<P: Provider<Ethereum> + Clone> ExampleERC20DecimalsContract<P> {
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "example_erc20_decimals_contract_initialized"
        );
        Self {
            caller: ExampleERC20DecimalsCaller::new(address, provider.clone()),
            transactor: ExampleERC20DecimalsTransactor::new(address, provider.clone()),
            filterer: ExampleERC20DecimalsFilterer::new(address, AlloyLogSource::new(provider)),
        }
    }

    /// Deploys a new token with `token_decimals` decimals from a compiled artifact.
    pub async fn deploy(
        provider: P,
        artifact: &ContractArtifact,
        opts: &TransactOpts,
        token_decimals: u8,
    ) -> Result<(Self, Deployment)> {
        let deployment = deploy::deploy(
            &provider,
            &EXAMPLE_ERC20_DECIMALS_METADATA,
            artifact,
            &constructor_args(token_decimals),
            opts,
        )
        .await?;

        Ok((Self::new(deployment.address, provider), deployment))
    }

    pub fn deploy_transaction(
        artifact: &ContractArtifact,
        opts: &TransactOpts,
        token_decimals: u8,
    ) -> TransactionRequest {
        deploy::deploy_transaction(opts, artifact, &constructor_args(token_decimals))
    }

    pub fn address(&self) -> Address {
        self.caller.address()
    }

    pub fn caller(&self) -> &ExampleERC20DecimalsCaller<P> {
        &self.caller
    }

    pub fn transactor(&self) -> &ExampleERC20DecimalsTransactor<P> {
        &self.transactor
    }

    pub fn filterer(&self) -> &ExampleERC20DecimalsFilterer<AlloyLogSource<P>> {
        &self.filterer
    }

    pub fn with_call_opts(mut self, opts: CallOpts) -> Self {
        self.caller = self.caller.with_call_opts(opts);
        self
    }
}

fn constructor_args(token_decimals: u8) -> Vec<u8> {
    ExampleERC20Decimals::constructorCall {
        tokenDecimals: token_decimals,
    }
    .abi_encode()
}

/// Decodes revert data returned by `ExampleERC20Decimals` into its typed error.
pub fn decode_revert(data: &[u8]) -> Result<ExampleERC20DecimalsErrors> {
    Ok(ExampleERC20DecimalsErrors::abi_decode(data)?)
}

sol!(
    #[allow(clippy::too_many_arguments)]
    #[allow(missing_docs)]
    #[sol(rpc, all_derives)]
    ExampleERC20Decimals,
    "abis/example_erc20_decimals.json"
);
