//! Contract metadata and compiled artifacts
//!
//! Each contract ships its ABI JSON embedded in the crate. Creation bytecode
//! is a build output rather than source, so it is loaded at runtime from a
//! compiled artifact (Foundry `out/*.json` or Hardhat `artifacts/*.json`)
//! and checked against the embedded ABI before it is deployed.
//!
//! This departs from the usual abigen-style `(ABI, bytecode)` pair: both
//! metadata constants carry `bin: None`, so [`ContractArtifact::embedded`]
//! fails for them and every deployment goes through
//! [`ContractArtifact::from_file`] or [`ContractArtifact::from_json`].

use std::path::Path;

use alloy_dyn_abi::{DynSolValue, JsonAbiExt};
use alloy_json_abi::JsonAbi;
use alloy_primitives::{hex, Bytes};
use serde_json::Value;
use tracing::debug;

use crate::error::{IcttError, Result};

/// ABI JSON and optional creation bytecode of one contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractMetadata {
    /// Contract name as it appears in compiler output
    pub name: &'static str,
    /// ABI JSON, verbatim from the compiler
    pub abi: &'static str,
    /// Hex-encoded creation bytecode, when it is compiled into the crate
    pub bin: Option<&'static str>,
}

/// Metadata for `NativeTokenRemote`.
pub const NATIVE_TOKEN_REMOTE_METADATA: ContractMetadata = ContractMetadata {
    name: "NativeTokenRemote",
    abi: include_str!("../abis/native_token_remote.json"),
    bin: None,
};

/// Metadata for `ExampleERC20Decimals`.
pub const EXAMPLE_ERC20_DECIMALS_METADATA: ContractMetadata = ContractMetadata {
    name: "ExampleERC20Decimals",
    abi: include_str!("../abis/example_erc20_decimals.json"),
    bin: None,
};

impl ContractMetadata {
    /// Parses the embedded ABI.
    pub fn json_abi(&self) -> Result<JsonAbi> {
        Ok(serde_json::from_str(self.abi)?)
    }

    /// Decodes calldata for one of this contract's functions.
    ///
    /// Returns the function name and its decoded arguments.
    pub fn decode_calldata(&self, calldata: &[u8]) -> Result<(String, Vec<DynSolValue>)> {
        if calldata.len() < 4 {
            return Err(IcttError::UnknownSelector {
                selector: hex::encode_prefixed(calldata),
            });
        }

        let (selector, args) = calldata.split_at(4);
        let abi = self.json_abi()?;
        let function = abi
            .functions()
            .find(|function| function.selector().as_slice() == selector)
            .ok_or_else(|| IcttError::UnknownSelector {
                selector: hex::encode_prefixed(selector),
            })?;

        let values = function.abi_decode_input(args)?;
        Ok((function.name.clone(), values))
    }
}

/// A compiled contract: ABI plus creation bytecode.
#[derive(Debug, Clone, PartialEq)]
pub struct ContractArtifact {
    abi: JsonAbi,
    bytecode: Bytes,
}

impl ContractArtifact {
    pub fn new(abi: JsonAbi, bytecode: Bytes) -> Result<Self> {
        if bytecode.is_empty() {
            return Err(IcttError::InvalidArtifact {
                reason: "empty bytecode".to_string(),
            });
        }
        Ok(Self { abi, bytecode })
    }

    /// Builds an artifact from bytecode compiled into the crate.
    pub fn embedded(metadata: &ContractMetadata) -> Result<Self> {
        let bin = metadata.bin.ok_or_else(|| IcttError::InvalidArtifact {
            reason: format!("no bytecode embedded for {}", metadata.name),
        })?;
        Self::new(metadata.json_abi()?, decode_bytecode(bin)?)
    }

    /// Parses a Foundry or Hardhat artifact.
    ///
    /// `bytecode` may be a hex string or an object with an `object` field.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;

        let abi_value = value.get("abi").ok_or_else(|| IcttError::InvalidArtifact {
            reason: "missing `abi` field".to_string(),
        })?;
        let abi: JsonAbi = serde_json::from_value(abi_value.clone())?;

        let bytecode = match value.get("bytecode") {
            Some(Value::String(hex)) => hex.as_str(),
            Some(Value::Object(object)) => object
                .get("object")
                .and_then(Value::as_str)
                .ok_or_else(|| IcttError::InvalidArtifact {
                    reason: "`bytecode.object` is not a string".to_string(),
                })?,
            _ => {
                return Err(IcttError::InvalidArtifact {
                    reason: "missing `bytecode` field".to_string(),
                })
            }
        };

        Self::new(abi, decode_bytecode(bytecode)?)
    }

    /// Reads and parses an artifact file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), event = "loading_contract_artifact");
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn abi(&self) -> &JsonAbi {
        &self.abi
    }

    /// Creation bytecode, without constructor arguments
    pub fn bytecode(&self) -> &Bytes {
        &self.bytecode
    }

    /// Checks that the artifact exposes exactly the functions and events of
    /// `metadata`'s ABI.
    pub fn verify(&self, metadata: &ContractMetadata) -> Result<()> {
        let expected = metadata.json_abi()?;

        let mut problems = Vec::new();
        problems.extend(
            signature_diff(
                expected.functions().map(|f| f.signature()),
                self.abi.functions().map(|f| f.signature()),
            )
            .map(|(kind, sig)| format!("{kind} function {sig}")),
        );
        problems.extend(
            signature_diff(
                expected.events().map(|e| e.signature()),
                self.abi.events().map(|e| e.signature()),
            )
            .map(|(kind, sig)| format!("{kind} event {sig}")),
        );

        if problems.is_empty() {
            Ok(())
        } else {
            Err(IcttError::ArtifactMismatch {
                contract: metadata.name,
                reason: problems.join(", "),
            })
        }
    }
}

fn decode_bytecode(bin: &str) -> Result<Bytes> {
    if bin.contains("__") {
        return Err(IcttError::InvalidArtifact {
            reason: "bytecode contains unlinked library placeholders".to_string(),
        });
    }
    hex::decode(bin.trim())
        .map(Bytes::from)
        .map_err(|err| IcttError::InvalidArtifact {
            reason: format!("bytecode is not valid hex: {err}"),
        })
}

fn signature_diff(
    expected: impl Iterator<Item = String>,
    actual: impl Iterator<Item = String>,
) -> impl Iterator<Item = (&'static str, String)> {
    let expected: std::collections::BTreeSet<String> = expected.collect();
    let actual: std::collections::BTreeSet<String> = actual.collect();

    let missing: Vec<_> = expected.difference(&actual).cloned().collect();
    let unexpected: Vec<_> = actual.difference(&expected).cloned().collect();

    missing
        .into_iter()
        .map(|sig| ("missing", sig))
        .chain(unexpected.into_iter().map(|sig| ("unexpected", sig)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, U256};
    use alloy_sol_types::{sol, SolCall};

    sol! {
        function approve(address spender, uint256 value) external returns (bool);
    }

    fn artifact_json(bytecode: &str) -> String {
        format!(
            r#"{{"abi": {}, "bytecode": {bytecode}}}"#,
            EXAMPLE_ERC20_DECIMALS_METADATA.abi
        )
    }

    #[test]
    fn test_embedded_abis_parse() {
        let remote = NATIVE_TOKEN_REMOTE_METADATA.json_abi().unwrap();
        let erc20 = EXAMPLE_ERC20_DECIMALS_METADATA.json_abi().unwrap();

        assert!(remote.constructor.is_some());
        assert!(remote.receive.is_some());
        assert!(remote.fallback.is_some());
        assert_eq!(erc20.events.len(), 2);
    }

    #[test]
    fn test_decode_calldata() {
        let spender = address!("1111111111111111111111111111111111111111");
        let calldata = approveCall {
            spender,
            value: U256::from(42),
        }
        .abi_encode();

        let (name, values) = EXAMPLE_ERC20_DECIMALS_METADATA
            .decode_calldata(&calldata)
            .unwrap();

        assert_eq!(name, "approve");
        assert_eq!(values[0], DynSolValue::Address(spender));
        assert_eq!(values[1], DynSolValue::Uint(U256::from(42), 256));
    }

    #[test]
    fn test_decode_calldata_unknown_selector() {
        let err = EXAMPLE_ERC20_DECIMALS_METADATA
            .decode_calldata(&[0xde, 0xad, 0xbe, 0xef])
            .unwrap_err();
        insta::assert_snapshot!(err, @"Unknown function selector: 0xdeadbeef");
    }

    #[test]
    fn test_artifact_from_foundry_json() {
        let artifact =
            ContractArtifact::from_json(&artifact_json(r#"{"object": "0x6080604052"}"#)).unwrap();

        assert_eq!(artifact.bytecode().as_ref(), &[0x60, 0x80, 0x60, 0x40, 0x52]);
        artifact.verify(&EXAMPLE_ERC20_DECIMALS_METADATA).unwrap();
    }

    #[test]
    fn test_artifact_from_hardhat_json() {
        let artifact = ContractArtifact::from_json(&artifact_json(r#""0x6080""#)).unwrap();
        assert_eq!(artifact.bytecode().len(), 2);
    }

    #[test]
    fn test_artifact_rejects_empty_and_unlinked_bytecode() {
        assert!(matches!(
            ContractArtifact::from_json(&artifact_json(r#""0x""#)),
            Err(IcttError::InvalidArtifact { .. })
        ));
        assert!(matches!(
            ContractArtifact::from_json(&artifact_json(r#""0x60__$abc$__""#)),
            Err(IcttError::InvalidArtifact { .. })
        ));
    }

    #[test]
    fn test_verify_reports_mismatch() {
        let artifact =
            ContractArtifact::from_json(&artifact_json(r#""0x6080""#)).unwrap();

        let err = artifact.verify(&NATIVE_TOKEN_REMOTE_METADATA).unwrap_err();
        match err {
            IcttError::ArtifactMismatch { contract, reason } => {
                assert_eq!(contract, "NativeTokenRemote");
                assert!(reason.contains("missing function deposit()"));
                assert!(reason.contains("unexpected function mint(uint256)"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_embedded_without_bytecode() {
        assert!(matches!(
            ContractArtifact::embedded(&EXAMPLE_ERC20_DECIMALS_METADATA),
            Err(IcttError::InvalidArtifact { .. })
        ));
    }

    #[test]
    fn test_metadata_constants_carry_no_bytecode() {
        for metadata in [NATIVE_TOKEN_REMOTE_METADATA, EXAMPLE_ERC20_DECIMALS_METADATA] {
            assert_eq!(metadata.bin, None);
            let err = ContractArtifact::embedded(&metadata).unwrap_err();
            assert!(err.to_string().contains(metadata.name));
        }
    }
}
