// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Builders for the `send` / `sendAndCall` inputs.
//!
//! The raw ABI structs have eight and eleven positional fields, most of which
//! are zero for an ordinary transfer paid without relayer fees. These
//! builders default the fee and multi-hop fields and convert into the ABI
//! structs.
//!
//! # Example
//!
//! ```rust
//! use ictt_rs::{SendTokensInput, SendTokensParams, FUJI_C_CHAIN_BLOCKCHAIN_ID};
//! use alloy_primitives::address;
//!
//! let input: SendTokensInput = SendTokensParams::builder()
//!     .destination_blockchain_id(FUJI_C_CHAIN_BLOCKCHAIN_ID)
//!     .destination_token_transferrer_address(address!("1111111111111111111111111111111111111111"))
//!     .recipient(address!("2222222222222222222222222222222222222222"))
//!     .required_gas_limit(250_000u64)
//!     .build()
//!     .into();
//!
//! assert!(input.primaryFee.is_zero());
//! ```

use alloy_primitives::{Address, Bytes, B256, U256};
use bon::Builder;

use crate::contracts::native_token_remote::{SendAndCallInput, SendTokensInput};

/// Parameters of a plain token transfer to another chain.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct SendTokensParams {
    /// Blockchain ID of the destination chain
    pub destination_blockchain_id: B256,
    /// Token transferrer contract on the destination chain
    pub destination_token_transferrer_address: Address,
    /// Account credited on the destination chain
    pub recipient: Address,
    /// ERC20 used to pay the relayer fee for the first hop
    #[builder(default)]
    pub primary_fee_token_address: Address,
    #[builder(default)]
    pub primary_fee: U256,
    /// Fee for the second hop of a multi-hop transfer
    #[builder(default)]
    pub secondary_fee: U256,
    /// Gas limit for delivering the message on the destination
    #[builder(with = |limit: u64| U256::from(limit))]
    pub required_gas_limit: U256,
    /// Recipient on the home chain if a multi-hop transfer fails
    #[builder(default)]
    pub multi_hop_fallback: Address,
}

impl From<SendTokensParams> for SendTokensInput {
    fn from(params: SendTokensParams) -> Self {
        Self {
            destinationBlockchainID: params.destination_blockchain_id,
            destinationTokenTransferrerAddress: params.destination_token_transferrer_address,
            recipient: params.recipient,
            primaryFeeTokenAddress: params.primary_fee_token_address,
            primaryFee: params.primary_fee,
            secondaryFee: params.secondary_fee,
            requiredGasLimit: params.required_gas_limit,
            multiHopFallback: params.multi_hop_fallback,
        }
    }
}

/// Parameters of a transfer that calls a contract on the destination chain.
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct SendAndCallParams {
    pub destination_blockchain_id: B256,
    pub destination_token_transferrer_address: Address,
    /// Contract receiving the tokens and the payload
    pub recipient_contract: Address,
    /// Calldata passed to the recipient contract
    #[builder(default, into)]
    pub recipient_payload: Bytes,
    #[builder(with = |limit: u64| U256::from(limit))]
    pub required_gas_limit: U256,
    /// Gas forwarded to the recipient contract call
    #[builder(with = |limit: u64| U256::from(limit))]
    pub recipient_gas_limit: U256,
    #[builder(default)]
    pub multi_hop_fallback: Address,
    /// Account receiving the tokens if the recipient call fails
    pub fallback_recipient: Address,
    #[builder(default)]
    pub primary_fee_token_address: Address,
    #[builder(default)]
    pub primary_fee: U256,
    #[builder(default)]
    pub secondary_fee: U256,
}

impl From<SendAndCallParams> for SendAndCallInput {
    fn from(params: SendAndCallParams) -> Self {
        Self {
            destinationBlockchainID: params.destination_blockchain_id,
            destinationTokenTransferrerAddress: params.destination_token_transferrer_address,
            recipientContract: params.recipient_contract,
            recipientPayload: params.recipient_payload,
            requiredGasLimit: params.required_gas_limit,
            recipientGasLimit: params.recipient_gas_limit,
            multiHopFallback: params.multi_hop_fallback,
            fallbackRecipient: params.fallback_recipient,
            primaryFeeTokenAddress: params.primary_fee_token_address,
            primaryFee: params.primary_fee,
            secondaryFee: params.secondary_fee,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};

    #[test]
    fn test_send_tokens_defaults() {
        let input: SendTokensInput = SendTokensParams::builder()
            .destination_blockchain_id(b256!(
                "0000000000000000000000000000000000000000000000000000000000000001"
            ))
            .destination_token_transferrer_address(address!(
                "1111111111111111111111111111111111111111"
            ))
            .recipient(address!("2222222222222222222222222222222222222222"))
            .required_gas_limit(250_000u64)
            .build()
            .into();

        assert_eq!(input.primaryFeeTokenAddress, Address::ZERO);
        assert_eq!(input.primaryFee, U256::ZERO);
        assert_eq!(input.secondaryFee, U256::ZERO);
        assert_eq!(input.multiHopFallback, Address::ZERO);
        assert_eq!(input.requiredGasLimit, U256::from(250_000));
    }

    #[test]
    fn test_send_and_call_keeps_field_order() {
        let fallback = address!("3333333333333333333333333333333333333333");
        let input: SendAndCallInput = SendAndCallParams::builder()
            .destination_blockchain_id(B256::ZERO)
            .destination_token_transferrer_address(Address::ZERO)
            .recipient_contract(address!("4444444444444444444444444444444444444444"))
            .recipient_payload(vec![0xca, 0xfe])
            .required_gas_limit(300_000u64)
            .recipient_gas_limit(200_000u64)
            .fallback_recipient(fallback)
            .primary_fee(U256::from(5))
            .secondary_fee(U256::MAX)
            .build()
            .into();

        assert_eq!(input.recipientPayload.as_ref(), &[0xca, 0xfe]);
        assert_eq!(input.recipientGasLimit, U256::from(200_000));
        assert_eq!(input.fallbackRecipient, fallback);
        assert_eq!(input.primaryFee, U256::from(5));
        assert_eq!(input.secondaryFee, U256::MAX);
    }
}
