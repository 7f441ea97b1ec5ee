use serde::{Deserialize, Serialize};

/// A record of an email sent from the account.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailLog {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bcc_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_sent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sent: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_type: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ref_id: Option<String>,
}
