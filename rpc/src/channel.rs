//! `channel_verify`: check a payment-channel claim signature.

use serde::{Deserialize, Serialize};
use xrpl_types::{Hash256, PublicKey, Signature, XrpCurrencyAmount};

/// The claim a channel's source signs off-ledger: "the destination may redeem up to
/// `amount` from `channel`".
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UnsignedClaim {
    pub channel: Hash256,
    pub amount: XrpCurrencyAmount,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelVerifyRequestParams {
    pub amount: XrpCurrencyAmount,
    pub channel_id: Hash256,
    pub public_key: PublicKey,
    pub signature: Signature,
}

impl ChannelVerifyRequestParams {
    pub fn of(claim: &UnsignedClaim, public_key: PublicKey, signature: Signature) -> Self {
        Self {
            amount: claim.amount,
            channel_id: claim.channel,
            public_key,
            signature,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelVerifyResult {
    pub signature_verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
