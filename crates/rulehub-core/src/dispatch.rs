//! Demo dispatch and pacing.
//!
//! Routes one invocation against the catalog: no selector runs every
//! group in catalog order with an acknowledgment checkpoint between
//! consecutive groups; a selector runs exactly one group. Execution is
//! fully sequential on the calling thread.

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::catalog::{Catalog, DemoGroup};
use crate::error::{DemoError, DemoResult};

/// Prompt printed at each pacing checkpoint.
const PACING_PROMPT: &str = "Press Enter to continue to the next demo group...";

/// Trailer printed after a full catalog run.
const CLOSING_BANNER: &str = "All demo groups completed.";

/// Something that can block until the operator acknowledges.
///
/// The "run all" path pauses on this capability between groups. The
/// production implementation reads a line from stdin; tests substitute
/// an immediately-returning fake.
pub trait AckSource {
    /// Block until an acknowledgment arrives.
    fn wait(&mut self) -> io::Result<()>;
}

/// Acknowledgment via a line read from standard input.
///
/// Line content is discarded; an empty line suffices. End of input is
/// surfaced as [`io::ErrorKind::UnexpectedEof`] since no further
/// acknowledgment can ever arrive.
#[derive(Debug, Default)]
pub struct StdinAck;

impl AckSource for StdinAck {
    fn wait(&mut self) -> io::Result<()> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for acknowledgment",
            ));
        }
        Ok(())
    }
}

/// Routes invocations to demo groups and paces full catalog runs.
///
/// Borrows the catalog read-only; one dispatch per process invocation.
pub struct Dispatcher<'a> {
    catalog: &'a Catalog,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher over a catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Route one invocation: a selector runs that group only, no
    /// selector runs the full catalog with pacing.
    pub fn dispatch(&self, selector: Option<&str>, ack: &mut dyn AckSource) -> DemoResult<()> {
        match selector {
            Some(name) => self.run_group(name),
            None => self.run_all(ack),
        }
    }

    /// Run every group in catalog order with a pacing checkpoint strictly
    /// between consecutive groups, then print the closing banner.
    pub fn run_all(&self, ack: &mut dyn AckSource) -> DemoResult<()> {
        info!(groups = self.catalog.len(), "running full demo catalog");
        for (index, group) in self.catalog.iter().enumerate() {
            if index > 0 {
                self.pace(ack)?;
            }
            self.run(group);
        }
        println!();
        println!("✓ {CLOSING_BANNER}");
        Ok(())
    }

    /// Run exactly one group by name, with no pacing. An unknown name
    /// runs nothing and reports every valid name.
    pub fn run_group(&self, name: &str) -> DemoResult<()> {
        let group = self
            .catalog
            .get(name)
            .ok_or_else(|| DemoError::unknown_group(name, &self.catalog.names()))?;
        self.run(group);
        Ok(())
    }

    fn run(&self, group: &DemoGroup) {
        debug!(group = %group.name(), hooks = group.hooks().len(), "running demo group");
        group.run();
    }

    fn pace(&self, ack: &mut dyn AckSource) -> DemoResult<()> {
        print!("\n{PACING_PROMPT} ");
        io::stdout().flush().map_err(DemoError::from)?;
        ack.wait()?;
        Ok(())
    }
}
