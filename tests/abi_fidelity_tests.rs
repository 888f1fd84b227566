//! The generated bindings must agree with the embedded ABI JSON.
//!
//! Selectors and topics are recomputed from the JSON with `alloy-json-abi` and
//! compared against the `sol!` constants, and values encoded by one codec are
//! decoded by the other.

use std::collections::BTreeSet;

use alloy_dyn_abi::{DynSolValue, EventExt, JsonAbiExt};
use alloy_primitives::{address, b256, hex, Bytes, B256, U256};
use alloy_sol_types::{SolCall, SolEvent};
use ictt_rs::contracts::example_erc20_decimals::ExampleERC20Decimals;
use ictt_rs::contracts::native_token_remote::NativeTokenRemote;
use ictt_rs::{
    ContractMetadata, SendAndCallInput, SendTokensInput, EXAMPLE_ERC20_DECIMALS_METADATA,
    NATIVE_TOKEN_REMOTE_METADATA,
};
use rstest::rstest;

fn function_selectors(metadata: &ContractMetadata) -> BTreeSet<[u8; 4]> {
    metadata
        .json_abi()
        .unwrap()
        .functions()
        .map(|function| function.selector().0)
        .collect()
}

fn event_topics(metadata: &ContractMetadata) -> BTreeSet<B256> {
    metadata
        .json_abi()
        .unwrap()
        .events()
        .map(|event| event.selector())
        .collect()
}

fn error_selectors(metadata: &ContractMetadata) -> BTreeSet<[u8; 4]> {
    metadata
        .json_abi()
        .unwrap()
        .errors()
        .map(|error| error.selector().0)
        .collect()
}

fn send_and_call_input() -> SendAndCallInput {
    SendAndCallInput {
        destinationBlockchainID: b256!(
            "0427d4b22a2a78bcddd456742caf91b56badbff985ee19aef14573e7343fd652"
        ),
        destinationTokenTransferrerAddress: address!("1111111111111111111111111111111111111111"),
        recipientContract: address!("2222222222222222222222222222222222222222"),
        recipientPayload: Bytes::from_static(&[0xde, 0xad, 0xbe, 0xef, 0x00, 0x01]),
        requiredGasLimit: U256::from(300_000),
        recipientGasLimit: U256::from(200_000),
        multiHopFallback: address!("3333333333333333333333333333333333333333"),
        fallbackRecipient: address!("4444444444444444444444444444444444444444"),
        primaryFeeTokenAddress: address!("5555555555555555555555555555555555555555"),
        primaryFee: U256::from(7),
        secondaryFee: U256::MAX,
    }
}

#[test]
fn native_token_remote_selectors_match_json() {
    let generated: BTreeSet<[u8; 4]> = NativeTokenRemote::NativeTokenRemoteCalls::SELECTORS
        .iter()
        .copied()
        .collect();
    assert_eq!(generated, function_selectors(&NATIVE_TOKEN_REMOTE_METADATA));

    let generated: BTreeSet<B256> = NativeTokenRemote::NativeTokenRemoteEvents::SELECTORS
        .iter()
        .map(|topic| B256::from(*topic))
        .collect();
    assert_eq!(generated, event_topics(&NATIVE_TOKEN_REMOTE_METADATA));

    let generated: BTreeSet<[u8; 4]> = NativeTokenRemote::NativeTokenRemoteErrors::SELECTORS
        .iter()
        .copied()
        .collect();
    assert_eq!(generated, error_selectors(&NATIVE_TOKEN_REMOTE_METADATA));
}

#[test]
fn example_erc20_selectors_match_json() {
    let generated: BTreeSet<[u8; 4]> = ExampleERC20Decimals::ExampleERC20DecimalsCalls::SELECTORS
        .iter()
        .copied()
        .collect();
    assert_eq!(generated, function_selectors(&EXAMPLE_ERC20_DECIMALS_METADATA));

    let generated: BTreeSet<B256> = ExampleERC20Decimals::ExampleERC20DecimalsEvents::SELECTORS
        .iter()
        .map(|topic| B256::from(*topic))
        .collect();
    assert_eq!(generated, event_topics(&EXAMPLE_ERC20_DECIMALS_METADATA));

    let generated: BTreeSet<[u8; 4]> = ExampleERC20Decimals::ExampleERC20DecimalsErrors::SELECTORS
        .iter()
        .copied()
        .collect();
    assert_eq!(generated, error_selectors(&EXAMPLE_ERC20_DECIMALS_METADATA));
}

#[rstest]
#[case::transfer(NativeTokenRemote::transferCall::SELECTOR, "a9059cbb")]
#[case::approve(NativeTokenRemote::approveCall::SELECTOR, "095ea7b3")]
#[case::balance_of(NativeTokenRemote::balanceOfCall::SELECTOR, "70a08231")]
#[case::transfer_from(NativeTokenRemote::transferFromCall::SELECTOR, "23b872dd")]
#[case::allowance(NativeTokenRemote::allowanceCall::SELECTOR, "dd62ed3e")]
#[case::total_supply(NativeTokenRemote::totalSupplyCall::SELECTOR, "18160ddd")]
#[case::decimals(NativeTokenRemote::decimalsCall::SELECTOR, "313ce567")]
#[case::owner(NativeTokenRemote::ownerCall::SELECTOR, "8da5cb5b")]
#[case::transfer_ownership(NativeTokenRemote::transferOwnershipCall::SELECTOR, "f2fde38b")]
#[case::deposit(NativeTokenRemote::depositCall::SELECTOR, "d0e30db0")]
#[case::withdraw(NativeTokenRemote::withdrawCall::SELECTOR, "2e1a7d4d")]
#[case::mint(ExampleERC20Decimals::mintCall::SELECTOR, "a0712d68")]
#[case::burn(ExampleERC20Decimals::burnCall::SELECTOR, "42966c68")]
#[case::burn_from(ExampleERC20Decimals::burnFromCall::SELECTOR, "79cc6790")]
fn well_known_selectors(#[case] selector: [u8; 4], #[case] expected: &str) {
    assert_eq!(hex::encode(selector), expected);
}

#[rstest]
#[case::transfer(
    NativeTokenRemote::Transfer::SIGNATURE_HASH,
    "ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
)]
#[case::approval(
    ExampleERC20Decimals::Approval::SIGNATURE_HASH,
    "8c5be1e5ebec7d5bd14f71427d1e84f3dd0314c0f7b2291e5b200ac8c7c3b925"
)]
#[case::ownership_transferred(
    NativeTokenRemote::OwnershipTransferred::SIGNATURE_HASH,
    "8be0079c531659141344cd1fd0a4f28419497f9722a3daafe3b4186f6b6457e0"
)]
fn well_known_topics(#[case] topic: B256, #[case] expected: &str) {
    assert_eq!(hex::encode(topic), expected);
}

#[test]
fn shared_erc20_surface_is_identical() {
    assert_eq!(
        NativeTokenRemote::Transfer::SIGNATURE_HASH,
        ExampleERC20Decimals::Transfer::SIGNATURE_HASH
    );
    assert_eq!(
        NativeTokenRemote::approveCall::SELECTOR,
        ExampleERC20Decimals::approveCall::SELECTOR
    );
}

#[test]
fn example_erc20_signatures() {
    let abi = EXAMPLE_ERC20_DECIMALS_METADATA.json_abi().unwrap();
    let signatures: Vec<String> = abi.functions().map(|function| function.signature()).collect();

    insta::assert_snapshot!(signatures.join("\n"), @r"
    allowance(address,address)
    approve(address,uint256)
    balanceOf(address)
    burn(uint256)
    burnFrom(address,uint256)
    decimals()
    mint(uint256)
    name()
    symbol()
    totalSupply()
    transfer(address,uint256)
    transferFrom(address,address,uint256)
    ");
}

#[test]
fn send_and_call_struct_survives_both_codecs() {
    let abi = NATIVE_TOKEN_REMOTE_METADATA.json_abi().unwrap();
    let function = abi.function("sendAndCall").unwrap().first().unwrap();

    // Static encode, dynamic decode
    let calldata = NativeTokenRemote::sendAndCallCall {
        input: send_and_call_input(),
    }
    .abi_encode();
    assert_eq!(&calldata[..4], function.selector().as_slice());

    let values = function.abi_decode_input(&calldata[4..]).unwrap();
    let fields = values[0].as_tuple().expect("struct argument decodes as a tuple");
    assert_eq!(fields.len(), 11);
    assert_eq!(
        fields[3],
        DynSolValue::Bytes(vec![0xde, 0xad, 0xbe, 0xef, 0x00, 0x01])
    );
    assert_eq!(fields[10], DynSolValue::Uint(U256::MAX, 256));

    // Dynamic encode, static decode
    let reencoded = function.abi_encode_input(&values).unwrap();
    assert_eq!(reencoded, calldata);

    let decoded = NativeTokenRemote::sendAndCallCall::abi_decode(&reencoded).unwrap();
    assert_eq!(decoded.input, send_and_call_input());
}

#[test]
fn tokens_sent_log_decodes_with_dynamic_codec() {
    let abi = NATIVE_TOKEN_REMOTE_METADATA.json_abi().unwrap();
    let event = abi.event("TokensSent").unwrap().first().unwrap();

    let message_id = b256!("00000000000000000000000000000000000000000000000000000000000000aa");
    let sender = address!("8db97C7cEcE249c2b98bDC0226Cc4C2A57BF52FC");
    let input = SendTokensInput {
        destinationBlockchainID: B256::repeat_byte(0x11),
        destinationTokenTransferrerAddress: address!("1111111111111111111111111111111111111111"),
        recipient: sender,
        primaryFeeTokenAddress: address!("2222222222222222222222222222222222222222"),
        primaryFee: U256::from(1),
        secondaryFee: U256::ZERO,
        requiredGasLimit: U256::from(250_000),
        multiHopFallback: address!("3333333333333333333333333333333333333333"),
    };

    let log = NativeTokenRemote::TokensSent {
        teleporterMessageID: message_id,
        sender,
        input,
        amount: U256::from(1_000),
    }
    .encode_log_data();

    assert_eq!(log.topics()[0], event.selector());

    let decoded = event.decode_log(&log).unwrap();
    assert_eq!(decoded.indexed[0], DynSolValue::FixedBytes(message_id, 32));
    assert_eq!(decoded.indexed[1], DynSolValue::Address(sender));
    assert_eq!(decoded.body[1], DynSolValue::Uint(U256::from(1_000), 256));
}

#[test]
fn constructor_inputs_match_json() {
    let abi = NATIVE_TOKEN_REMOTE_METADATA.json_abi().unwrap();
    let constructor = abi.constructor.as_ref().unwrap();
    let types: Vec<String> = constructor
        .inputs
        .iter()
        .map(|param| param.selector_type().into_owned())
        .collect();

    insta::assert_snapshot!(
        types.join(" | "),
        @"(address,address,bytes32,address,uint8) | string | uint256 | uint256"
    );
}
