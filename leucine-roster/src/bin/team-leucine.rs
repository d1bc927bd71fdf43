use std::io::{self, BufWriter, Write};

use anyhow::Context;
use leucine_roster::logging::init_tracing;
use leucine_roster::{roster, write_report, ReportConfig};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(roster(), &ReportConfig::default(), &mut out)
        .context("failed to write report")?;
    out.flush().context("failed to flush report")?;
    Ok(())
}
