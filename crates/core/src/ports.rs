use crate::domain::RawRow;
use crate::error::CookieLogError;

pub type Result<T> = std::result::Result<T, CookieLogError>;

/// Boxed stream of rows handed out by a `LogSource`
pub type RowIter<'a> = Box<dyn Iterator<Item = Result<RawRow>> + 'a>;

/// Port for anything that can hand out the rows of a cookie log, header first.
///
/// The returned iterator owns whatever handle backs it, so dropping it
/// (after an early stop or an error) releases the handle.
pub trait LogSource {
    fn rows(&self) -> Result<RowIter<'_>>;
}

/// Port through which the core hands its result to the presentation layer
pub trait CookieReporter: Send + Sync {
    fn report(&self, cookies: &[String]) -> Result<()>;
}
