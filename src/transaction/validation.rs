//! Checks untrusted transaction input before it is added to the store.

use serde_json::Value;
use unicode_segmentation::UnicodeSegmentation;

/// The maximum number of characters allowed in a transaction description.
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// Transaction input exactly as the client sent it.
///
/// Both fields accept any JSON value so that [validate] can decide what to
/// do with input of the wrong type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTransaction {
    /// The amount, expected to be a number or a numeric string.
    pub amount: Option<Value>,
    /// The description, expected to be a string.
    pub description: Option<Value>,
}

impl From<Value> for RawTransaction {
    /// Read the fields from a JSON object. Any other JSON value has no fields.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut fields) => Self {
                amount: fields.remove("amount"),
                description: fields.remove("description"),
            },
            _ => Self::default(),
        }
    }
}

/// Transaction input that has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// A finite amount greater than zero.
    pub amount: f64,
    /// A non-empty, trimmed description of at most [MAX_DESCRIPTION_LENGTH] characters.
    pub description: String,
}

/// The reasons why transaction input can be rejected.
///
/// The display text is shown directly to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The amount was missing, not a number, not finite, or not positive.
    #[error("Amount must be a number greater than 0.")]
    InvalidAmount,

    /// The description was missing, not a string, or only whitespace.
    #[error("Description is required.")]
    MissingDescription,

    /// The trimmed description was longer than [MAX_DESCRIPTION_LENGTH] characters.
    #[error("Description must be at most 200 characters.")]
    DescriptionTooLong,
}

/// Check `raw` and normalize it into a [NewTransaction].
///
/// The amount is checked first, then the description, and the first failure
/// is returned.
///
/// # Errors
/// Returns a:
/// - [ValidationError::InvalidAmount] if the amount cannot be read as a finite number greater than zero,
/// - [ValidationError::MissingDescription] if the trimmed description is empty,
/// - or [ValidationError::DescriptionTooLong] if the trimmed description is too long.
pub fn validate(raw: &RawTransaction) -> Result<NewTransaction, ValidationError> {
    let amount = raw
        .amount
        .as_ref()
        .and_then(coerce_number)
        .filter(|amount| amount.is_finite() && *amount > 0.0)
        .ok_or(ValidationError::InvalidAmount)?;

    let description = match &raw.description {
        Some(Value::String(description)) => description.trim(),
        _ => "",
    };

    if description.is_empty() {
        return Err(ValidationError::MissingDescription);
    }

    if description.graphemes(true).count() > MAX_DESCRIPTION_LENGTH {
        return Err(ValidationError::DescriptionTooLong);
    }

    Ok(NewTransaction {
        amount,
        description: description.to_owned(),
    })
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let text = text.trim();

            if text.is_empty() {
                None
            } else {
                text.parse().ok()
            }
        }
        _ => None,
    }
}
