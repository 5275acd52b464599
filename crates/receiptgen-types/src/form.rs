use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Receipt layout requested from the generation service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateType {
    /// Outgoing payment ("Bayar")
    #[default]
    Payment,
    /// Incoming transfer ("Terima")
    Receive,
}

impl TemplateType {
    pub const ALL: [TemplateType; 2] = [TemplateType::Payment, TemplateType::Receive];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Payment => "payment",
            TemplateType::Receive => "receive",
        }
    }

    /// Human label shown in the template selector
    pub fn label(&self) -> &'static str {
        match self {
            TemplateType::Payment => "Pembayaran (Bayar)",
            TemplateType::Receive => "Penerimaan (Terima)",
        }
    }

    pub fn next(self) -> Self {
        match self {
            TemplateType::Payment => TemplateType::Receive,
            TemplateType::Receive => TemplateType::Payment,
        }
    }

    pub fn previous(self) -> Self {
        // Two variants: previous and next coincide
        self.next()
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template type '{0}' (expected 'payment' or 'receive')")]
pub struct UnknownTemplate(pub String);

impl FromStr for TemplateType {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "payment" => Ok(TemplateType::Payment),
            "receive" => Ok(TemplateType::Receive),
            other => Err(UnknownTemplate(other.to_string())),
        }
    }
}

/// Editable fields of the receipt form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    TemplateType,
    MerchantName,
    ReceiverId,
    Amount,
    Date,
    Time,
}

impl FormField {
    /// Fields in on-screen order
    pub const ALL: [FormField; 6] = [
        FormField::TemplateType,
        FormField::MerchantName,
        FormField::ReceiverId,
        FormField::Amount,
        FormField::Date,
        FormField::Time,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::TemplateType => "Tipe Template",
            FormField::MerchantName => "Nama Penerima/Pengirim",
            FormField::ReceiverId => "Nomor Penerima",
            FormField::Amount => "Nominal (Rp)",
            FormField::Date => "Tanggal",
            FormField::Time => "Waktu",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::TemplateType => "",
            FormField::MerchantName => "Contoh: DEFT BARBER",
            FormField::ReceiverId => "Contoh: 0857•••5875",
            FormField::Amount => "40000",
            FormField::Date => "01 Jan 2026",
            FormField::Time => "15:55",
        }
    }

    /// Fields that must be non-empty before a submission leaves the client
    pub fn is_required(&self) -> bool {
        matches!(self, FormField::MerchantName | FormField::Amount)
    }
}

/// Field values of one receipt request.
///
/// The user identifier is not part of the form: it is attached from the
/// resolved host identity when the request is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptRequest {
    pub template_type: TemplateType,
    pub merchant_name: String,
    pub receiver_id: String,
    /// Numeric string, kept verbatim
    pub amount: String,
    pub date: String,
    pub time: String,
}

impl ReceiptRequest {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::TemplateType => self.template_type.as_str(),
            FormField::MerchantName => &self.merchant_name,
            FormField::ReceiverId => &self.receiver_id,
            FormField::Amount => &self.amount,
            FormField::Date => &self.date,
            FormField::Time => &self.time,
        }
    }

    /// Returns the first required field that is empty, if any
    pub fn missing_required(&self) -> Option<FormField> {
        FormField::ALL
            .into_iter()
            .filter(FormField::is_required)
            .find(|field| self.value(*field).is_empty())
    }
}
