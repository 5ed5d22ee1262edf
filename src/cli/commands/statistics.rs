use super::{emit, probe_session, ConnectionArgs};
use crate::analysis::{ReportFormatter, StatisticsAnalyser};
use crate::errors::AppResult;
use clap::Args;

#[derive(Args)]
pub struct StatisticsCommand {
    #[command(flatten)]
    connection: ConnectionArgs,
}

impl StatisticsCommand {
    pub async fn run(&self) -> AppResult<()> {
        let (config, format) = self.connection.resolve()?;

        let result = probe_session(config).await?;
        let summary = StatisticsAnalyser::analyse_probe(&result);

        let output = ReportFormatter::format_statistics(&result, &summary, &format)?;
        emit(&output, self.connection.output.as_ref())
    }
}
