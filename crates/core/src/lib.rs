pub mod application;
pub mod domain;
pub mod error;
pub mod frequency;
pub mod ports;
pub mod selection;
pub mod utils;

pub use application::MostActiveCookieService;
pub use domain::{CookieRecord, FrequencyMap, RawRow};
pub use error::CookieLogError;
