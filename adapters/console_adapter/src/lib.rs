use cookie_core::error::CookieLogError;
use cookie_core::ports::{CookieReporter, Result};
use log::info;
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

/// Prints the winning cookies one per line
pub struct ConsoleReporter<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Hands back the underlying writer
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> CookieReporter for ConsoleReporter<W> {
    fn report(&self, cookies: &[String]) -> Result<()> {
        if cookies.is_empty() {
            info!("No cookies were found");
            return Ok(());
        }

        let mut out = self.out.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        for cookie in cookies {
            writeln!(out, "{cookie}").map_err(write_error)?;
        }
        out.flush().map_err(write_error)?;

        Ok(())
    }
}

fn write_error(source: io::Error) -> CookieLogError {
    CookieLogError::Io {
        context: "writing results".to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn output(cookies: &[&str]) -> String {
        let reporter = ConsoleReporter::new(Vec::new());
        let cookies: Vec<String> = cookies.iter().map(|c| c.to_string()).collect();
        reporter.report(&cookies).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_report_one_per_line() {
        assert_eq!(
            output(&["SAZuXPGUrfbcn5UA", "4sMM2LxV07bPJzwf", "fbcn5UAVanZf6UtG"]),
            "SAZuXPGUrfbcn5UA\n4sMM2LxV07bPJzwf\nfbcn5UAVanZf6UtG\n"
        );
    }

    #[test]
    fn test_report_single() {
        assert_eq!(output(&["AtY0laUfhglK3lC7"]), "AtY0laUfhglK3lC7\n");
    }

    #[test]
    fn test_report_empty_writes_nothing() {
        assert_eq!(output(&[]), "");
    }

    #[test]
    fn test_report_write_failure() {
        let reporter = ConsoleReporter::new(BrokenPipe);

        let err = reporter.report(&["AtY0laUfhglK3lC7".to_string()]).unwrap_err();

        assert!(matches!(err, CookieLogError::Io { .. }));
    }
}
