//! JSON bodies exchanged with the receipt generation service.

use serde::{Deserialize, Deserializer, Serialize};

use crate::{Quota, ReceiptRequest, UserId};

/// POST body: the receipt fields plus the recipient chat.
///
/// `chat_id` equals `user_id`: receipts are delivered to the private chat of
/// the user who filled the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub user_id: UserId,
    pub chat_id: UserId,
    #[serde(flatten)]
    pub receipt: ReceiptRequest,
}

impl GenerateRequest {
    pub fn new(user_id: UserId, receipt: ReceiptRequest) -> Self {
        Self {
            chat_id: user_id.clone(),
            user_id,
            receipt,
        }
    }
}

/// Response body; anything that does not deserialize into this shape is a
/// transport fault
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(
        default,
        deserialize_with = "deserialize_quota",
        skip_serializing_if = "Option::is_none"
    )]
    pub quota: Option<Quota>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuota {
    Integer(i64),
    Float(f64),
}

/// Accepts any JSON number. Integral floats (`5.0`) count as integers; a
/// fractional or out-of-range quota is dropped rather than failing the reply.
fn deserialize_quota<'de, D>(deserializer: D) -> Result<Option<Quota>, D::Error>
where
    D: Deserializer<'de>,
{
    let quota = match Option::<RawQuota>::deserialize(deserializer)? {
        None => None,
        Some(RawQuota::Integer(value)) => Some(value),
        Some(RawQuota::Float(value)) => {
            let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
            (value.fract() == 0.0 && in_range).then_some(value as i64)
        }
    };
    Ok(quota)
}
