use chrono::{DateTime, Datelike, Local, TimeZone};
use receiptgen_types::{FormField, ReceiptRequest, TemplateType};

const DEFAULT_MERCHANT_NAME: &str = "DEFT BARBER";
const DEFAULT_RECEIVER_ID: &str = "0857•••5875";
const DEFAULT_AMOUNT: &str = "40000";

/// Indonesian short month names, as printed on receipts
const MONTHS_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// `16 Okt 2026`
pub fn format_display_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String {
    format!(
        "{:02} {} {}",
        at.day(),
        MONTHS_ID[at.month0() as usize],
        at.year()
    )
}

/// `15:55`, 24-hour
pub fn format_display_time<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%H:%M").to_string()
}

/// Seed values for a fresh form, with date and time taken from `now`
pub fn seed_request<Tz: TimeZone>(now: &DateTime<Tz>) -> ReceiptRequest
where
    Tz::Offset: std::fmt::Display,
{
    ReceiptRequest {
        template_type: TemplateType::default(),
        merchant_name: DEFAULT_MERCHANT_NAME.to_string(),
        receiver_id: DEFAULT_RECEIVER_ID.to_string(),
        amount: DEFAULT_AMOUNT.to_string(),
        date: format_display_date(now),
        time: format_display_time(now),
    }
}

/// Applies one field edit, leaving every other field untouched.
///
/// An unrecognised template value leaves the state as it was.
pub fn reduce(state: &ReceiptRequest, field: FormField, value: &str) -> ReceiptRequest {
    let mut next = state.clone();
    match field {
        FormField::TemplateType => {
            if let Ok(template) = value.parse::<TemplateType>() {
                next.template_type = template;
            }
        }
        FormField::MerchantName => next.merchant_name = value.to_string(),
        FormField::ReceiverId => next.receiver_id = value.to_string(),
        FormField::Amount => next.amount = value.to_string(),
        FormField::Date => next.date = value.to_string(),
        FormField::Time => next.time = value.to_string(),
    }
    next
}

/// Current receipt form state; edits go through [`reduce`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormStateStore {
    state: ReceiptRequest,
}

impl FormStateStore {
    /// Seeds the form with defaults and the current local date and time.
    /// The date and time are not refreshed afterwards.
    pub fn new() -> Self {
        Self::seeded_at(&Local::now())
    }

    pub fn seeded_at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            state: seed_request(now),
        }
    }

    pub fn from_request(state: ReceiptRequest) -> Self {
        Self { state }
    }

    pub fn update(&mut self, field: FormField, value: &str) {
        self.state = reduce(&self.state, field, value);
    }

    pub fn current(&self) -> &ReceiptRequest {
        &self.state
    }

    /// Immutable copy taken at submission time
    pub fn snapshot(&self) -> ReceiptRequest {
        self.state.clone()
    }
}

impl Default for FormStateStore {
    fn default() -> Self {
        Self::new()
    }
}
