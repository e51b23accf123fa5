use std::io;

use anyhow::Context;

use bankledger_cli::Session;
use bankledger_observability::LoggingConfig;

fn main() -> anyhow::Result<()> {
    let config = LoggingConfig::from_env().context("invalid logging configuration")?;
    bankledger_observability::init_with(&config);

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    Session::new(stdin, stdout)
        .run()
        .context("console session failed")?;

    Ok(())
}
