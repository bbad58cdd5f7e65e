pub mod errors;
pub mod formats;
pub mod phone_number;
pub mod phoneutil;

mod phone_regexps;
mod resolver;
