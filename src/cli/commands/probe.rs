use super::{emit, probe_session, ConnectionArgs};
use crate::analysis::ReportFormatter;
use crate::errors::AppResult;
use clap::Args;

#[derive(Args)]
pub struct ProbeCommand {
    #[command(flatten)]
    connection: ConnectionArgs,
}

impl ProbeCommand {
    pub async fn run(&self) -> AppResult<()> {
        let (config, format) = self.connection.resolve()?;

        let result = probe_session(config).await?;

        let output = ReportFormatter::format_probe(&result, &format)?;
        emit(&output, self.connection.output.as_ref())
    }
}
