//! Chain configuration for interchain token transfers
//!
//! Maps [`NamedChain`] values to the Avalanche blockchain IDs used as
//! `destinationBlockchainID` / `tokenHomeBlockchainID` in ICTT messages.

mod addresses;

pub use addresses::*;

use alloy_chains::NamedChain;
use alloy_primitives::B256;

use crate::error::{IcttError, Result};

/// Trait for chains that can take part in an interchain token transfer
pub trait IcttChain {
    /// The 32-byte blockchain ID of the chain
    fn blockchain_id(&self) -> Result<B256>;

    /// Whether the chain is a known Avalanche primary network C-Chain
    fn is_avalanche_c_chain(&self) -> bool;

    /// Whether the chain is a testnet
    fn is_testnet(&self) -> bool;
}

impl IcttChain for NamedChain {
    fn blockchain_id(&self) -> Result<B256> {
        match self {
            NamedChain::Avalanche => Ok(AVALANCHE_C_CHAIN_BLOCKCHAIN_ID),
            NamedChain::AvalancheFuji => Ok(FUJI_C_CHAIN_BLOCKCHAIN_ID),
            _ => Err(IcttError::UnsupportedChain(*self)),
        }
    }

    fn is_avalanche_c_chain(&self) -> bool {
        matches!(self, NamedChain::Avalanche | NamedChain::AvalancheFuji)
    }

    fn is_testnet(&self) -> bool {
        matches!(self, NamedChain::AvalancheFuji)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(NamedChain::Avalanche, AVALANCHE_C_CHAIN_BLOCKCHAIN_ID)]
    #[case(NamedChain::AvalancheFuji, FUJI_C_CHAIN_BLOCKCHAIN_ID)]
    fn test_blockchain_id(#[case] chain: NamedChain, #[case] expected: B256) {
        assert_eq!(chain.blockchain_id().unwrap(), expected);
        assert!(chain.is_avalanche_c_chain());
    }

    #[test]
    fn test_unsupported_chain() {
        let err = NamedChain::Mainnet.blockchain_id().unwrap_err();
        assert!(matches!(err, IcttError::UnsupportedChain(NamedChain::Mainnet)));
        assert!(!NamedChain::Mainnet.is_avalanche_c_chain());
    }

    #[test]
    fn test_testnet_detection() {
        assert!(NamedChain::AvalancheFuji.is_testnet());
        assert!(!NamedChain::Avalanche.is_testnet());
    }
}
