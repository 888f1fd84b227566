// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Well-known addresses and blockchain IDs for Avalanche interchain transfers
//!
//! Precompile addresses are identical on every Avalanche L1 that enables
//! them. Blockchain IDs are the 32-byte form of the CB58 IDs shown by the
//! Avalanche explorers.

use alloy_primitives::{address, b256, Address, B256};

// Precompiles and reserved addresses

/// Native minter precompile, called by `NativeTokenRemote` to mint the native token
/// <https://build.avax.network/docs/avalanche-l1s/upgrade/customize-avalanche-l1#minting-native-coins>
pub const NATIVE_MINTER_PRECOMPILE_ADDRESS: Address =
    address!("0200000000000000000000000000000000000001");

/// Address collecting burned transaction fees on an L1 whose fees are burned
pub const BURNED_TX_FEES_ADDRESS: Address = address!("0100000000000000000000000000000000000000");

/// `TeleporterMessenger` deployed at the same address on every chain
/// <https://github.com/ava-labs/icm-contracts/tree/main/contracts/teleporter>
pub const TELEPORTER_MESSENGER_ADDRESS: Address =
    address!("253b2784c75e510dD0fF1da844684a1aC0aa5fcf");

// Blockchain IDs

/// Avalanche C-Chain (`2q9e4r6Mu3U68nU1fYjgbR6JvwrRx36CohpAX5UQxse55x1Q5`)
pub const AVALANCHE_C_CHAIN_BLOCKCHAIN_ID: B256 =
    b256!("0427d4b22a2a78bcddd456742caf91b56badbff985ee19aef14573e7343fd652");

/// Fuji C-Chain (`yH8D7ThNJkxmtkuv2jgBa4P1Rn3Qpr4pPr7QYNfcdoS6k6HWp`)
pub const FUJI_C_CHAIN_BLOCKCHAIN_ID: B256 =
    b256!("7fc93d85c6d62c5b2ac0b519c87010ea5294012d1e407030d6acd0021cac10d5");
