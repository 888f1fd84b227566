//! Contract deployment
//!
//! Deployment concatenates an artifact's creation bytecode with the
//! ABI-encoded constructor arguments, sends it as a contract-creation
//! transaction and waits for the receipt.

use alloy_network::{Ethereum, ReceiptResponse, TransactionBuilder};
use alloy_primitives::{Address, Bytes, TxHash};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use tracing::{error, info, Instrument};

use crate::error::{IcttError, Result};
use crate::metadata::{ContractArtifact, ContractMetadata};
use crate::options::TransactOpts;
use crate::spans;

/// Outcome of a successful deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deployment {
    /// Address of the new contract
    pub address: Address,
    /// Hash of the creation transaction
    pub tx_hash: TxHash,
}

/// Creation bytecode followed by the encoded constructor arguments.
pub fn init_code(artifact: &ContractArtifact, constructor_args: &[u8]) -> Bytes {
    let mut code = Vec::with_capacity(artifact.bytecode().len() + constructor_args.len());
    code.extend_from_slice(artifact.bytecode());
    code.extend_from_slice(constructor_args);
    code.into()
}

/// Unsigned contract-creation transaction for `artifact`.
pub fn deploy_transaction(
    opts: &TransactOpts,
    artifact: &ContractArtifact,
    constructor_args: &[u8],
) -> TransactionRequest {
    opts.apply_to_request(
        TransactionRequest::default().with_deploy_code(init_code(artifact, constructor_args)),
    )
}

/// Deploys `artifact` after checking it against `metadata`.
pub(crate) async fn deploy<P: Provider<Ethereum>>(
    provider: &P,
    metadata: &ContractMetadata,
    artifact: &ContractArtifact,
    constructor_args: &[u8],
    opts: &TransactOpts,
) -> Result<Deployment> {
    artifact.verify(metadata)?;

    let request = deploy_transaction(opts, artifact, constructor_args);
    let span = spans::deploy_contract(
        metadata.name,
        &opts.from,
        artifact.bytecode().len() + constructor_args.len(),
    );

    let outcome = send_deployment(provider, metadata.name, request)
        .instrument(span.clone())
        .await;

    match &outcome {
        Ok(deployment) => {
            span.record("contract_address", tracing::field::display(deployment.address));
            spans::record_tx_hash(&span, &deployment.tx_hash);
            info!(
                contract = metadata.name,
                contract_address = %deployment.address,
                tx_hash = %deployment.tx_hash,
                event = "contract_deployed"
            );
        }
        Err(err) => {
            spans::record_error(&span, err);
            error!(
                contract = metadata.name,
                error = %err,
                event = "contract_deployment_failed"
            );
        }
    }

    outcome
}

async fn send_deployment<P: Provider<Ethereum>>(
    provider: &P,
    contract: &'static str,
    request: TransactionRequest,
) -> Result<Deployment> {
    let pending = provider.send_transaction(request).await?;
    let tx_hash = *pending.tx_hash();
    let receipt = pending.get_receipt().await?;

    if !receipt.status() {
        return Err(IcttError::DeploymentFailed {
            contract,
            reason: format!("creation transaction {tx_hash} reverted"),
        });
    }

    let address = receipt
        .contract_address()
        .ok_or_else(|| IcttError::DeploymentFailed {
            contract,
            reason: format!("receipt for {tx_hash} has no contract address"),
        })?;

    Ok(Deployment { address, tx_hash })
}
