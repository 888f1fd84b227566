pub mod example_erc20_decimals;
pub mod native_token_remote;

use alloy_network::Ethereum;
use alloy_primitives::{Address, TxHash};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use tracing::{error, info, Instrument};

use crate::error::{IcttError, Result};
use crate::spans;

/// Sends a prepared transaction and returns its hash without waiting for a
/// receipt.
pub(crate) async fn submit<P: Provider<Ethereum>>(
    provider: &P,
    contract_address: Address,
    tx: TransactionRequest,
) -> Result<TxHash> {
    let span = spans::submit_transaction(&contract_address, tx.from.as_ref());

    let sent = provider
        .send_transaction(tx)
        .instrument(span.clone())
        .await
        .map_err(IcttError::from);

    match sent {
        Ok(pending) => {
            let tx_hash = *pending.tx_hash();
            spans::record_tx_hash(&span, &tx_hash);
            info!(
                contract_address = %contract_address,
                tx_hash = %tx_hash,
                event = "transaction_submitted"
            );
            Ok(tx_hash)
        }
        Err(err) => {
            spans::record_error(&span, &err);
            error!(
                contract_address = %contract_address,
                error = %err,
                event = "transaction_submission_failed"
            );
            Err(err)
        }
    }
}
