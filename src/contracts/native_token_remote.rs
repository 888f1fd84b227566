// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! NativeTokenRemote contract bindings
//!
//! `NativeTokenRemote` is the remote half of an Avalanche interchain token
//! transfer for a chain's native gas token. It mints native tokens through the
//! native minter precompile for collateral locked on the home chain, burns
//! them to send tokens back, and exposes a wrapped ERC20 form of the token.
//!
//! The bindings are split the usual way:
//!
//! - [`NativeTokenRemoteCaller`] for view and pure functions
//! - [`NativeTokenRemoteTransactor`] for state-mutating functions
//! - [`NativeTokenRemoteFilterer`] for events
//!
//! [`NativeTokenRemoteContract`] owns all three for one deployed contract.

use alloy_network::{Ethereum, TransactionBuilder};
use alloy_primitives::{Address, Bytes, TxHash, B256, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::{sol, SolConstructor, SolInterface};
use bon::Builder;
use tracing::{debug, info};

use crate::contracts::submit;
use crate::deploy::{self, Deployment};
use crate::error::{IcttError, Result};
use crate::events::{event_bindings, EventFilterer};
use crate::metadata::{ContractArtifact, NATIVE_TOKEN_REMOTE_METADATA};
use crate::options::{CallOpts, TransactOpts};
use crate::providers::AlloyLogSource;
use crate::traits::LogSource;

pub use NativeTokenRemote::{
    Approval, CallFailed, CallSucceeded, Deposit, MinTeleporterVersionUpdated,
    NativeTokenRemoteErrors, NativeTokenRemoteEvents, NativeTokenRemoteInstance,
    OwnershipTransferred, ReportBurnedTxFees, SendAndCallInput, SendTokensInput,
    TeleporterAddressPaused, TeleporterAddressUnpaused, TeleporterFeeInfo, TokenRemoteSettings,
    TokensAndCallSent, TokensSent, TokensWithdrawn, Transfer, Withdrawal,
};

// ============================================================================
// Caller
// ============================================================================

/// Read-only bindings for `NativeTokenRemote`.
///
/// Every call runs with the [`CallOpts`] held by the caller.
pub struct NativeTokenRemoteCaller<P: Provider<Ethereum>> {
    instance: NativeTokenRemoteInstance<P>,
    opts: CallOpts,
}

impl<P: Provider<Ethereum>> NativeTokenRemoteCaller<P> {
    pub fn new(address: Address, provider: P) -> Self {
        Self {
            instance: NativeTokenRemoteInstance::new(address, provider),
            opts: CallOpts::default(),
        }
    }

    /// Returns a caller that runs every call with `opts`.
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

    pub async fn burned_for_transfer_address(&self) -> Result<Address> {
        Ok(self
            .opts
            .apply(self.instance.BURNED_FOR_TRANSFER_ADDRESS())
            .call()
            .await?)
    }

    pub async fn burned_tx_fees_address(&self) -> Result<Address> {
        Ok(self
            .opts
            .apply(self.instance.BURNED_TX_FEES_ADDRESS())
            .call()
            .await?)
    }

    pub async fn home_chain_burn_address(&self) -> Result<Address> {
        Ok(self
            .opts
            .apply(self.instance.HOME_CHAIN_BURN_ADDRESS())
            .call()
            .await?)
    }

    pub async fn multi_hop_call_gas_per_word(&self) -> Result<U256> {
        Ok(self
            .opts
            .apply(self.instance.MULTI_HOP_CALL_GAS_PER_WORD())
            .call()
            .await?)
    }

    pub async fn multi_hop_call_required_gas(&self) -> Result<U256> {
        Ok(self
            .opts
            .apply(self.instance.MULTI_HOP_CALL_REQUIRED_GAS())
            .call()
            .await?)
    }

    pub async fn multi_hop_send_required_gas(&self) -> Result<U256> {
        Ok(self
            .opts
            .apply(self.instance.MULTI_HOP_SEND_REQUIRED_GAS())
            .call()
            .await?)
    }

    /// Address of the native minter precompile the contract mints through
    pub async fn native_minter(&self) -> Result<Address> {
        Ok(self.opts.apply(self.instance.NATIVE_MINTER()).call().await?)
    }

    pub async fn register_remote_required_gas(&self) -> Result<U256> {
        Ok(self
            .opts
            .apply(self.instance.REGISTER_REMOTE_REQUIRED_GAS())
            .call()
            .await?)
    }

    /// Wrapped-token allowance of `spender` over `owner`'s balance
    pub async fn allowance(&self, owner: Address, spender: Address) -> Result<U256> {
        let allowance = self
            .opts
            .apply(self.instance.allowance(owner, spender))
            .call()
            .await?;

        debug!(
            owner = %owner,
            spender = %spender,
            allowance = %allowance,
            contract_address = %self.instance.address(),
            event = "allowance_retrieved"
        );

        Ok(allowance)
    }

    /// Wrapped-token balance of `account`
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

    pub async fn burned_fees_reporting_reward_percentage(&self) -> Result<U256> {
        Ok(self
            .opts
            .apply(self.instance.burnedFeesReportingRewardPercentage())
            .call()
            .await?)
    }

    /// Number of 32-byte words needed for a payload of `payload_size` bytes
    pub async fn calculate_num_words(&self, payload_size: U256) -> Result<U256> {
        Ok(self
            .opts
            .apply(self.instance.calculateNumWords(payload_size))
            .call()
            .await?)
    }

    pub async fn decimals(&self) -> Result<u8> {
        Ok(self.opts.apply(self.instance.decimals()).call().await?)
    }

    /// Blockchain ID of the chain the contract is deployed on
    pub async fn get_blockchain_id(&self) -> Result<B256> {
        Ok(self.opts.apply(self.instance.getBlockchainID()).call().await?)
    }

    pub async fn get_initial_reserve_imbalance(&self) -> Result<U256> {
        Ok(self
            .opts
            .apply(self.instance.getInitialReserveImbalance())
            .call()
            .await?)
    }

    /// Whether the initial reserve imbalance has been covered by the home chain
    pub async fn get_is_collateralized(&self) -> Result<bool> {
        let collateralized = self
            .opts
            .apply(self.instance.getIsCollateralized())
            .call()
            .await?;

        debug!(
            collateralized = collateralized,
            contract_address = %self.instance.address(),
            event = "collateralization_retrieved"
        );

        Ok(collateralized)
    }

    pub async fn get_min_teleporter_version(&self) -> Result<U256> {
        Ok(self
            .opts
            .apply(self.instance.getMinTeleporterVersion())
            .call()
            .await?)
    }

    pub async fn get_multiply_on_remote(&self) -> Result<bool> {
        Ok(self
            .opts
            .apply(self.instance.getMultiplyOnRemote())
            .call()
            .await?)
    }

    pub async fn get_token_home_address(&self) -> Result<Address> {
        Ok(self
            .opts
            .apply(self.instance.getTokenHomeAddress())
            .call()
            .await?)
    }

    pub async fn get_token_home_blockchain_id(&self) -> Result<B256> {
        Ok(self
            .opts
            .apply(self.instance.getTokenHomeBlockchainID())
            .call()
            .await?)
    }

    pub async fn get_token_multiplier(&self) -> Result<U256> {
        Ok(self
            .opts
            .apply(self.instance.getTokenMultiplier())
            .call()
            .await?)
    }

    pub async fn get_total_minted(&self) -> Result<U256> {
        Ok(self.opts.apply(self.instance.getTotalMinted()).call().await?)
    }

    pub async fn is_teleporter_address_paused(&self, teleporter_address: Address) -> Result<bool> {
        Ok(self
            .opts
            .apply(self.instance.isTeleporterAddressPaused(teleporter_address))
            .call()
            .await?)
    }

    pub async fn name(&self) -> Result<String> {
        Ok(self.opts.apply(self.instance.name()).call().await?)
    }

    pub async fn owner(&self) -> Result<Address> {
        Ok(self.opts.apply(self.instance.owner()).call().await?)
    }

    pub async fn symbol(&self) -> Result<String> {
        Ok(self.opts.apply(self.instance.symbol()).call().await?)
    }

    pub async fn teleporter_registry(&self) -> Result<Address> {
        Ok(self
            .opts
            .apply(self.instance.teleporterRegistry())
            .call()
            .await?)
    }

    /// Native supply net of burns, including tokens burned for transfers
    pub async fn total_native_asset_supply(&self) -> Result<U256> {
        Ok(self
            .opts
            .apply(self.instance.totalNativeAssetSupply())
            .call()
            .await?)
    }

    /// Supply of the wrapped ERC20 form
    pub async fn total_supply(&self) -> Result<U256> {
        Ok(self.opts.apply(self.instance.totalSupply()).call().await?)
    }
}

// ============================================================================
// Transactor
// ============================================================================

/// State-mutating bindings for `NativeTokenRemote`.
///
/// Each function has two forms. `*_transaction` builds an unsigned
/// [`TransactionRequest`] for the caller to sign and send; the plain form
/// sends it through the provider's wallet and returns the transaction hash.
///
/// # Example
///
/// ```rust,no_run
/// use ictt_rs::{NativeTokenRemoteTransactor, SendTokensParams, TransactOpts};
/// use ictt_rs::FUJI_C_CHAIN_BLOCKCHAIN_ID;
/// use alloy_primitives::{address, U256};
/// use alloy_provider::ProviderBuilder;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = ProviderBuilder::new().connect("http://localhost:9650/ext/bc/C/rpc").await?;
/// let remote = address!("1234567890123456789012345678901234567890");
/// let sender = address!("8db97C7cEcE249c2b98bDC0226Cc4C2A57BF52FC");
///
/// let transactor = NativeTokenRemoteTransactor::new(remote, provider);
/// let opts = TransactOpts::builder()
///     .from(sender)
///     .value(U256::from(1_000_000_000_000_000_000u128))
///     .build();
///
/// let params = SendTokensParams::builder()
///     .destination_blockchain_id(FUJI_C_CHAIN_BLOCKCHAIN_ID)
///     .destination_token_transferrer_address(address!("0987654321098765432109876543210987654321"))
///     .recipient(sender)
///     .required_gas_limit(250_000u64)
///     .build();
///
/// let tx = transactor.send_tokens_transaction(&opts, params);
/// // Sign and send `tx`, or let the provider's wallet do it:
/// // let tx_hash = transactor.submit(tx).await?;
/// # Ok(())
/// # }
/// ```
pub struct NativeTokenRemoteTransactor<P: Provider<Ethereum>> {
    instance: NativeTokenRemoteInstance<P>,
}

impl<P: Provider<Ethereum>> NativeTokenRemoteTransactor<P> {
    pub fn new(address: Address, provider: P) -> Self {
        Self {
            instance: NativeTokenRemoteInstance::new(address, provider),
        }
    }

    pub fn address(&self) -> Address {
        *self.instance.address()
    }

    /// Sends a prepared transaction and returns its hash.
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

    /// Wraps the attached native value into the ERC20 form
    pub fn deposit_transaction(&self, opts: &TransactOpts) -> TransactionRequest {
        info!(
            from = %opts.from,
            value = ?opts.value,
            contract_address = %self.instance.address(),
            event = "deposit_transaction_created"
        );

        opts.apply(self.instance.deposit()).into_transaction_request()
    }

    pub async fn deposit(&self, opts: &TransactOpts) -> Result<TxHash> {
        self.submit(self.deposit_transaction(opts)).await
    }

    pub fn pause_teleporter_address_transaction(
        &self,
        opts: &TransactOpts,
        teleporter_address: Address,
    ) -> TransactionRequest {
        opts.apply(self.instance.pauseTeleporterAddress(teleporter_address))
            .into_transaction_request()
    }

    pub async fn pause_teleporter_address(
        &self,
        opts: &TransactOpts,
        teleporter_address: Address,
    ) -> Result<TxHash> {
        self.submit(self.pause_teleporter_address_transaction(opts, teleporter_address)).await
    }

    /// Delivery entry point called by the Teleporter messenger
    pub fn receive_teleporter_message_transaction(
        &self,
        opts: &TransactOpts,
        source_blockchain_id: B256,
        origin_sender_address: Address,
        message: Bytes,
    ) -> TransactionRequest {
        opts.apply(self.instance.receiveTeleporterMessage(
            source_blockchain_id,
            origin_sender_address,
            message,
        ))
        .into_transaction_request()
    }

    pub async fn receive_teleporter_message(
        &self,
        opts: &TransactOpts,
        source_blockchain_id: B256,
        origin_sender_address: Address,
        message: Bytes,
    ) -> Result<TxHash> {
        self.submit(self.receive_teleporter_message_transaction(
            opts,
            source_blockchain_id,
            origin_sender_address,
            message,
        ))
        .await
    }

    /// Registers this remote with its token home, paying `fee_info` to the relayer
    pub fn register_with_home_transaction(
        &self,
        opts: &TransactOpts,
        fee_info: TeleporterFeeInfo,
    ) -> TransactionRequest {
        info!(
            from = %opts.from,
            fee_token = %fee_info.feeTokenAddress,
            fee_amount = %fee_info.amount,
            contract_address = %self.instance.address(),
            event = "register_with_home_transaction_created"
        );

        opts.apply(self.instance.registerWithHome(fee_info))
            .into_transaction_request()
    }

    pub async fn register_with_home(
        &self,
        opts: &TransactOpts,
        fee_info: TeleporterFeeInfo,
    ) -> Result<TxHash> {
        self.submit(self.register_with_home_transaction(opts, fee_info)).await
    }

    pub fn renounce_ownership_transaction(&self, opts: &TransactOpts) -> TransactionRequest {
        opts.apply(self.instance.renounceOwnership())
            .into_transaction_request()
    }

    pub async fn renounce_ownership(&self, opts: &TransactOpts) -> Result<TxHash> {
        self.submit(self.renounce_ownership_transaction(opts)).await
    }

    /// Reports the fees burned on this chain to the home chain
    pub fn report_burned_tx_fees_transaction(
        &self,
        opts: &TransactOpts,
        required_gas_limit: U256,
    ) -> TransactionRequest {
        opts.apply(self.instance.reportBurnedTxFees(required_gas_limit))
            .into_transaction_request()
    }

    pub async fn report_burned_tx_fees(
        &self,
        opts: &TransactOpts,
        required_gas_limit: U256,
    ) -> Result<TxHash> {
        self.submit(self.report_burned_tx_fees_transaction(opts, required_gas_limit)).await
    }

    /// Burns the attached native value and sends it to another chain (`send`)
    pub fn send_tokens_transaction(
        &self,
        opts: &TransactOpts,
        input: impl Into<SendTokensInput>,
    ) -> TransactionRequest {
        let input = input.into();

        info!(
            from = %opts.from,
            amount = ?opts.value,
            destination_blockchain_id = %input.destinationBlockchainID,
            recipient = %input.recipient,
            contract_address = %self.instance.address(),
            event = "send_tokens_transaction_created"
        );

        opts.apply(self.instance.send(input))
            .into_transaction_request()
    }

    pub async fn send_tokens(
        &self,
        opts: &TransactOpts,
        input: impl Into<SendTokensInput>,
    ) -> Result<TxHash> {
        self.submit(self.send_tokens_transaction(opts, input)).await
    }

    /// Burns the attached native value and sends it to a contract on
    /// another chain along with a payload (`sendAndCall`)
    pub fn send_and_call_transaction(
        &self,
        opts: &TransactOpts,
        input: impl Into<SendAndCallInput>,
    ) -> TransactionRequest {
        let input = input.into();

        info!(
            from = %opts.from,
            amount = ?opts.value,
            destination_blockchain_id = %input.destinationBlockchainID,
            recipient_contract = %input.recipientContract,
            payload_len = input.recipientPayload.len(),
            contract_address = %self.instance.address(),
            event = "send_and_call_transaction_created"
        );

        opts.apply(self.instance.sendAndCall(input))
            .into_transaction_request()
    }

    pub async fn send_and_call(
        &self,
        opts: &TransactOpts,
        input: impl Into<SendAndCallInput>,
    ) -> Result<TxHash> {
        self.submit(self.send_and_call_transaction(opts, input)).await
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

    pub fn transfer_ownership_transaction(
        &self,
        opts: &TransactOpts,
        new_owner: Address,
    ) -> TransactionRequest {
        opts.apply(self.instance.transferOwnership(new_owner))
            .into_transaction_request()
    }

    pub async fn transfer_ownership(
        &self,
        opts: &TransactOpts,
        new_owner: Address,
    ) -> Result<TxHash> {
        self.submit(self.transfer_ownership_transaction(opts, new_owner)).await
    }

    pub fn unpause_teleporter_address_transaction(
        &self,
        opts: &TransactOpts,
        teleporter_address: Address,
    ) -> TransactionRequest {
        opts.apply(self.instance.unpauseTeleporterAddress(teleporter_address))
            .into_transaction_request()
    }

    pub async fn unpause_teleporter_address(
        &self,
        opts: &TransactOpts,
        teleporter_address: Address,
    ) -> Result<TxHash> {
        self.submit(self.unpause_teleporter_address_transaction(opts, teleporter_address)).await
    }

    pub fn update_min_teleporter_version_transaction(
        &self,
        opts: &TransactOpts,
        version: U256,
    ) -> TransactionRequest {
        opts.apply(self.instance.updateMinTeleporterVersion(version))
            .into_transaction_request()
    }

    pub async fn update_min_teleporter_version(
        &self,
        opts: &TransactOpts,
        version: U256,
    ) -> Result<TxHash> {
        self.submit(self.update_min_teleporter_version_transaction(opts, version)).await
    }

    /// Unwraps `amount` of the ERC20 form back into native tokens
    pub fn withdraw_transaction(&self, opts: &TransactOpts, amount: U256) -> TransactionRequest {
        info!(
            from = %opts.from,
            amount = %amount,
            contract_address = %self.instance.address(),
            event = "withdraw_transaction_created"
        );

        opts.apply(self.instance.withdraw(amount))
            .into_transaction_request()
    }

    pub async fn withdraw(&self, opts: &TransactOpts, amount: U256) -> Result<TxHash> {
        self.submit(self.withdraw_transaction(opts, amount)).await
    }

    /// Plain value transfer hitting the `receive` function, which deposits
    /// the attached value
    pub fn receive_transaction(&self, opts: &TransactOpts) -> TransactionRequest {
        opts.apply_to_request(TransactionRequest::default().with_to(self.address()))
    }

    pub async fn receive(&self, opts: &TransactOpts) -> Result<TxHash> {
        self.submit(self.receive_transaction(opts)).await
    }

    /// Value transfer with arbitrary calldata hitting the `fallback` function
    pub fn fallback_transaction(&self, opts: &TransactOpts, calldata: Bytes) -> TransactionRequest {
        opts.apply_to_request(
            TransactionRequest::default()
                .with_to(self.address())
                .with_input(calldata),
        )
    }

    pub async fn fallback(&self, opts: &TransactOpts, calldata: Bytes) -> Result<TxHash> {
        self.submit(self.fallback_transaction(opts, calldata)).await
    }
}

// ============================================================================
// Filterer
// ============================================================================

/// Event bindings for `NativeTokenRemote`.
///
/// Indexed arguments are passed as slices of accepted values; an empty slice
/// matches any value.
#[derive(Debug, Clone)]
pub struct NativeTokenRemoteFilterer<L> {
    events: EventFilterer<L>,
}

impl<L: LogSource> NativeTokenRemoteFilterer<L> {
    pub fn new(address: Address, source: L) -> Self {
        debug!(
            contract_address = %address,
            event = "native_token_remote_filterer_initialized"
        );
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
        /// `CallFailed(address indexed recipientContract, uint256 amount)`
        CallFailed => filter_call_failed, watch_call_failed, parse_call_failed;
        recipient_contract: Address
    }

    event_bindings! {
        /// `CallSucceeded(address indexed recipientContract, uint256 amount)`
        CallSucceeded => filter_call_succeeded, watch_call_succeeded, parse_call_succeeded;
        recipient_contract: Address
    }

    event_bindings! {
        /// `Deposit(address indexed sender, uint256 amount)`
        Deposit => filter_deposit, watch_deposit, parse_deposit;
        sender: Address
    }

    event_bindings! {
        /// `MinTeleporterVersionUpdated(uint256 indexed oldMinTeleporterVersion, uint256 indexed newMinTeleporterVersion)`
        MinTeleporterVersionUpdated => filter_min_teleporter_version_updated,
            watch_min_teleporter_version_updated, parse_min_teleporter_version_updated;
        old_min_teleporter_version: U256; new_min_teleporter_version: U256
    }

    event_bindings! {
        /// `OwnershipTransferred(address indexed previousOwner, address indexed newOwner)`
        OwnershipTransferred => filter_ownership_transferred, watch_ownership_transferred,
            parse_ownership_transferred;
        previous_owner: Address; new_owner: Address
    }

    event_bindings! {
        /// `ReportBurnedTxFees(bytes32 indexed teleporterMessageID, uint256 feesBurned)`
        ReportBurnedTxFees => filter_report_burned_tx_fees, watch_report_burned_tx_fees,
            parse_report_burned_tx_fees;
        teleporter_message_id: B256
    }

    event_bindings! {
        /// `TeleporterAddressPaused(address indexed teleporterAddress)`
        TeleporterAddressPaused => filter_teleporter_address_paused,
            watch_teleporter_address_paused, parse_teleporter_address_paused;
        teleporter_address: Address
    }

    event_bindings! {
        /// `TeleporterAddressUnpaused(address indexed teleporterAddress)`
        TeleporterAddressUnpaused => filter_teleporter_address_unpaused,
            watch_teleporter_address_unpaused, parse_teleporter_address_unpaused;
        teleporter_address: Address
    }

    event_bindings! {
        /// `TokensAndCallSent(bytes32 indexed teleporterMessageID, address indexed sender, SendAndCallInput input, uint256 amount)`
        TokensAndCallSent => filter_tokens_and_call_sent, watch_tokens_and_call_sent,
            parse_tokens_and_call_sent;
        teleporter_message_id: B256; sender: Address
    }

    event_bindings! {
        /// `TokensSent(bytes32 indexed teleporterMessageID, address indexed sender, SendTokensInput input, uint256 amount)`
        TokensSent => filter_tokens_sent, watch_tokens_sent, parse_tokens_sent;
        teleporter_message_id: B256; sender: Address
    }

    event_bindings! {
        /// `TokensWithdrawn(address indexed recipient, uint256 amount)`
        TokensWithdrawn => filter_tokens_withdrawn, watch_tokens_withdrawn,
            parse_tokens_withdrawn;
        recipient: Address
    }

    event_bindings! {
        /// `Transfer(address indexed from, address indexed to, uint256 value)`
        Transfer => filter_transfer, watch_transfer, parse_transfer;
        from: Address; to: Address
    }

    event_bindings! {
        /// `Withdrawal(address indexed sender, uint256 amount)`
        Withdrawal => filter_withdrawal, watch_withdrawal, parse_withdrawal;
        sender: Address
    }
}

// ============================================================================
// Combined contract
// ============================================================================

/// Constructor arguments of `NativeTokenRemote`.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct NativeTokenRemoteDeployArgs {
    pub settings: TokenRemoteSettings,
    /// Symbol of the native asset, e.g. `"AVAX"`
    #[builder(into)]
    pub native_asset_symbol: String,
    /// Native tokens minted at genesis that the home chain must collateralize
    pub initial_reserve_imbalance: U256,
    /// Share of reported burned fees paid to the reporter, in percent
    pub burned_fees_reporting_reward_percentage: U256,
}

impl NativeTokenRemoteDeployArgs {
    /// ABI-encoded constructor arguments
    pub fn abi_encode(&self) -> Vec<u8> {
        NativeTokenRemote::constructorCall {
            settings: self.settings.clone(),
            nativeAssetSymbol: self.native_asset_symbol.clone(),
            initialReserveImbalance: self.initial_reserve_imbalance,
            burnedFeesReportingRewardPercentage: self.burned_fees_reporting_reward_percentage,
        }
        .abi_encode()
    }
}

/// Caller, transactor and filterer bound to one deployed `NativeTokenRemote`.
///
/// # Example
///
/// ```rust,no_run
/// use ictt_rs::{CallOpts, NativeTokenRemoteContract};
/// use alloy_primitives::address;
/// use alloy_provider::ProviderBuilder;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let provider = ProviderBuilder::new().connect("http://localhost:9650/ext/bc/C/rpc").await?;
/// let remote = NativeTokenRemoteContract::new(
///     address!("1234567890123456789012345678901234567890"),
///     provider,
/// );
///
/// let home = remote.caller().get_token_home_address().await?;
/// let collateralized = remote.caller().get_is_collateralized().await?;
/// println!("home {home}, collateralized: {collateralized}");
/// # Ok(())
/// # }
/// ```
pub struct NativeTokenRemoteContract<P: Provider<Ethereum> + Clone> {
    caller: NativeTokenRemoteCaller<P>,
    transactor: NativeTokenRemoteTransactor<P>,
    filterer: NativeTokenRemoteFilterer<AlloyLogSource<P>>,
}

impl<P: Provider<Ethereum> + Clone> NativeTokenRemoteContract<P> {
    /// Create a new NativeTokenRemote contract wrapper
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "native_token_remote_contract_initialized"
        );
        Self {
            caller: NativeTokenRemoteCaller::new(address, provider.clone()),
            transactor: NativeTokenRemoteTransactor::new(address, provider.clone()),
            filterer: NativeTokenRemoteFilterer::new(address, AlloyLogSource::new(provider)),
        }
    }

    /// Deploys a new `NativeTokenRemote` from a compiled artifact.
    ///
    /// The artifact's ABI must match the embedded one.
    pub async fn deploy(
        provider: P,
        artifact: &ContractArtifact,
        opts: &TransactOpts,
        args: &NativeTokenRemoteDeployArgs,
    ) -> Result<(Self, Deployment)> {
        let deployment = deploy::deploy(
            &provider,
            &NATIVE_TOKEN_REMOTE_METADATA,
            artifact,
            &args.abi_encode(),
            opts,
        )
        .await?;

        Ok((Self::new(deployment.address, provider), deployment))
    }

    /// Unsigned contract-creation transaction, for callers that sign elsewhere.
    pub fn deploy_transaction(
        artifact: &ContractArtifact,
        opts: &TransactOpts,
        args: &NativeTokenRemoteDeployArgs,
    ) -> TransactionRequest {
        deploy::deploy_transaction(opts, artifact, &args.abi_encode())
    }

    pub fn address(&self) -> Address {
        self.caller.address()
    }

    pub fn caller(&self) -> &NativeTokenRemoteCaller<P> {
        &self.caller
    }

    pub fn transactor(&self) -> &NativeTokenRemoteTransactor<P> {
        &self.transactor
    }

    pub fn filterer(&self) -> &NativeTokenRemoteFilterer<AlloyLogSource<P>> {
        &self.filterer
    }

    /// Replaces the options used by [`caller`](Self::caller).
    pub fn with_call_opts(mut self, opts: CallOpts) -> Self {
        self.caller = self.caller.with_call_opts(opts);
        self
    }
}

/// Decodes revert data returned by `NativeTokenRemote` into its typed error.
pub fn decode_revert(data: &[u8]) -> Result<NativeTokenRemoteErrors> {
    Ok(NativeTokenRemoteErrors::abi_decode(data)?)
}

/// Typed contract error carried by a failed call, if it is one of
/// `NativeTokenRemote`'s custom errors.
pub fn revert_error(err: &IcttError) -> Option<NativeTokenRemoteErrors> {
    err.revert_data()
        .and_then(|data| NativeTokenRemoteErrors::abi_decode(&data).ok())
}

sol!(
    #[allow(clippy::too_many_arguments)]
    #[allow(missing_docs)]
    #[sol(rpc, all_derives)]
    NativeTokenRemote,
    "abis/native_token_remote.json"
);
