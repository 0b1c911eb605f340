use chrono::NaiveDate;

use crate::frequency::extract;
use crate::ports::{CookieReporter, LogSource, Result};
use crate::selection::select_max;

/// Application service answering "which cookies were most active on this day"
pub struct MostActiveCookieService {
    log_source: Box<dyn LogSource>,
    reporter: Box<dyn CookieReporter>,
}

impl MostActiveCookieService {
    /// Creates a new MostActiveCookieService with the given dependencies
    pub fn new(log_source: Box<dyn LogSource>, reporter: Box<dyn CookieReporter>) -> Self {
        Self {
            log_source,
            reporter,
        }
    }

    /// Scans the log and returns the cookies tied for the highest count on `target_date`
    pub fn find_most_active(&self, target_date: NaiveDate) -> Result<Vec<String>> {
        // The row iterator, and the handle behind it, is dropped as soon as extract returns
        let freqs = extract(self.log_source.rows()?, target_date)?;
        Ok(select_max(&freqs))
    }

    /// Finds the most active cookies and hands them to the reporter
    pub fn execute(&self, target_date: NaiveDate) -> Result<Vec<String>> {
        let cookies = self.find_most_active(target_date)?;
        self.reporter.report(&cookies)?;
        Ok(cookies)
    }
}
