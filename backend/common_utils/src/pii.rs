//! Personal Identifiable Information protection.

use std::fmt;

use crate::masking::{Secret, Strategy, WithType};

/// Strategy for masking a primary account number, keeps the last four digits.
#[derive(Copy, Clone)]
pub enum CardNumberStrategy {}

impl<T> Strategy<T> for CardNumberStrategy
where
    T: AsRef<str>,
{
    fn fmt(val: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let val_str: &str = val.as_ref();
        let digits = val_str.chars().count();
        if digits <= 4 || !val_str.chars().all(|c| c.is_ascii_digit()) {
            return <WithType as Strategy<T>>::fmt(val, f);
        }
        let (_, last_four) = val_str.split_at(val_str.len() - 4);
        write!(f, "{}{}", "*".repeat(digits - 4), last_four)
    }
}

/// Card number with a masked `Debug` representation
pub type CardNumber = Secret<String, CardNumberStrategy>;
