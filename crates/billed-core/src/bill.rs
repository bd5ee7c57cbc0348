use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    pub const ALL: &[BillStatus] = &[
        BillStatus::Pending,
        BillStatus::Accepted,
        BillStatus::Refused,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BillStatus::Pending => "Pending",
            BillStatus::Accepted => "Accepted",
            BillStatus::Refused => "Refused",
        }
    }

    /// Case-insensitive: the store is not trusted to be consistent about
    /// status casing.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(BillStatus::Pending),
            "accepted" => Some(BillStatus::Accepted),
            "refused" => Some(BillStatus::Refused),
            _ => None,
        }
    }
}

impl Default for BillStatus {
    fn default() -> Self {
        BillStatus::Pending
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A bill record exactly as the remote store returns it.
///
/// Every field is optional and leniently typed: a field of the wrong
/// JSON type degrades to `None` instead of failing the whole batch. Only
/// the formatter decides whether a record is usable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawBill {
    #[serde(deserialize_with = "de::lenient_string")]
    pub id: Option<String>,
    #[serde(rename = "type", deserialize_with = "de::lenient_string")]
    pub expense_type: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub name: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub date: Option<String>,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub amount: Option<f64>,
    #[serde(deserialize_with = "de::lenient_f64")]
    pub vat: Option<f64>,
    #[serde(deserialize_with = "de::lenient_i64")]
    pub pct: Option<i64>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub commentary: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub file_url: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub file_name: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub status: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub comment_admin: Option<String>,
    #[serde(deserialize_with = "de::lenient_string")]
    pub email: Option<String>,
}

/// A display-ready bill: date normalized to zero-padded `YYYY-MM-DD`,
/// status resolved to a canonical value. Every other field passes
/// through from the raw record untouched, absent stays absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub expense_type: Option<String>,
    pub name: Option<String>,
    pub date: String,
    pub amount: Option<f64>,
    pub vat: Option<f64>,
    pub pct: Option<i64>,
    pub commentary: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
    pub comment_admin: Option<String>,
    pub email: Option<String>,
}

/// Submission payload: a `Bill` minus the identifier, which the store
/// assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBill {
    #[serde(rename = "type")]
    pub expense_type: Option<String>,
    pub name: Option<String>,
    pub date: Option<String>,
    pub amount: Option<f64>,
    pub vat: Option<f64>,
    pub pct: Option<i64>,
    pub commentary: Option<String>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
    pub email: String,
}

impl From<&Bill> for RawBill {
    /// How a stored bill reads back as a raw row.
    fn from(bill: &Bill) -> Self {
        RawBill {
            id: bill.id.clone(),
            expense_type: bill.expense_type.clone(),
            name: bill.name.clone(),
            date: Some(bill.date.clone()),
            amount: bill.amount,
            vat: bill.vat,
            pct: bill.pct,
            commentary: bill.commentary.clone(),
            file_url: bill.file_url.clone(),
            file_name: bill.file_name.clone(),
            status: Some(bill.status.as_str().to_string()),
            comment_admin: bill.comment_admin.clone(),
            email: bill.email.clone(),
        }
    }
}

mod de {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    /// String, or a number rendered as one. Anything else is `None`.
    pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::String(s)) => Some(s),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        })
    }

    /// Number, or a numeric string. Anything else is `None`.
    pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }

    /// Integer, or an integral string. Anything else is `None`.
    pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(Value::Number(n)) => n.as_i64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }
}
