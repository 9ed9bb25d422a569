// LayerZero OFT adapter ABI and send-parameter construction

use alloy::primitives::{Address, B256, Bytes, U256};
use alloy::sol;
use alloy::sol_types::SolCall;

use crate::chains;
use crate::error::ChainPairError;

sol! {
    #[derive(Debug, PartialEq, Eq)]
    struct SendParam {
        uint32 dstEid;
        bytes32 to;
        uint256 amountLD;
        uint256 minAmountLD;
        bytes extraOptions;
        bytes composeMsg;
        bytes oftCmd;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct MessagingFee {
        uint256 nativeFee;
        uint256 lzTokenFee;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct MessagingReceipt {
        bytes32 guid;
        uint64 nonce;
        MessagingFee fee;
    }

    #[derive(Debug, PartialEq, Eq)]
    struct OFTReceipt {
        uint256 amountSentLD;
        uint256 amountReceivedLD;
    }

    #[sol(rpc)]
    interface IOFT {
        function quoteSend(SendParam calldata _sendParam, bool _payInLzToken) external view returns (MessagingFee memory msgFee);
        function send(SendParam calldata _sendParam, MessagingFee calldata _fee, address _refundAddress) external payable returns (MessagingReceipt memory msgReceipt, OFTReceipt memory oftReceipt);
    }
}

/// Left-pads a 20-byte address into the 32-byte recipient slot.
pub fn address_to_bytes32(address: Address) -> B256 {
    address.into_word()
}

pub fn build_send_param(amount: U256, dst_eid: u32, to: Address) -> SendParam {
    SendParam {
        dstEid: dst_eid,
        to: address_to_bytes32(to),
        amountLD: amount,
        // No slippage tolerance.
        minAmountLD: amount,
        extraOptions: Bytes::new(),
        composeMsg: Bytes::new(),
        oftCmd: Bytes::new(),
    }
}

// Resolves the destination of `source_chain_id` and builds the matching send parameters.
pub fn send_param_for(source_chain_id: u64, amount: U256, to: Address) -> Result<SendParam, ChainPairError> {
    let destination = chains::target_chain_id(source_chain_id)?;
    let dst_eid = chains::endpoint_id(destination)?;
    Ok(build_send_param(amount, dst_eid, to))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeSendParams {
    pub amount: U256,
    pub destination_chain_id: u64,
    pub messaging_fee: MessagingFee,
    pub refund_address: Address,
    pub to_address: Address,
}

/// ABI-encodes a `send` call, e.g. for batching with other calls. No I/O.
pub fn encode_send(params: EncodeSendParams) -> Result<Bytes, ChainPairError> {
    let dst_eid = chains::endpoint_id(params.destination_chain_id)?;
    let call = IOFT::sendCall {
        _sendParam: build_send_param(params.amount, dst_eid, params.to_address),
        _fee: params.messaging_fee,
        _refundAddress: params.refund_address,
    };
    Ok(Bytes::from(call.abi_encode()))
}
