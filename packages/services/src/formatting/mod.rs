pub mod currency;
pub mod date;
pub mod number;

pub use currency::{format_currency, CurrencyOptions};
pub use date::{format_date, DateParts};
pub use number::format_number;
