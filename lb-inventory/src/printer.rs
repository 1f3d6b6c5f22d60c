//! Human-readable report lines.

use std::fmt::Display;
use std::io::{self, Write};

use lb_inventory_provider::LoadBalancer;

/// Writes the report to an output stream (standard output in the binary).
pub struct Printer<W: Write> {
    out: W,
}

impl Printer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Printer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Plain line.
    pub fn line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Progress line, `[*] ...`.
    pub fn info(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "[*] {text}")
    }

    /// Completed step, `[+] ...`.
    pub fn success(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "[+] {text}")
    }

    /// Error line, `[-] ERROR - ...`.
    pub fn error(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "[-] ERROR - {text}")
    }

    /// Error line followed by the underlying error's text.
    pub fn failure(&mut self, text: &str, cause: &dyn Display) -> io::Result<()> {
        self.error(text)?;
        writeln!(self.out, "{cause}")
    }

    /// One line per load balancer, in the given order.
    pub fn load_balancers(&mut self, load_balancers: &[LoadBalancer]) -> io::Result<()> {
        for lb in load_balancers {
            write!(
                self.out,
                "\tLoad Balancer ID: {} || Name: {} // Enabled: {}\r\n",
                lb.id, lb.name, lb.enabled
            )?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
