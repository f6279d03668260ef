use super::Host;
use super::common::{Common, CommonArgs};
use crate::Result;
use crate::ranking::Grouping;
use clap::Args;

#[derive(Args, Debug, Clone)]
pub struct RankArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Rank files by the total check time of the symbols they declare.
pub async fn rank_files<H: Host>(host: &mut H, args: &RankArgs) -> Result<()> {
    Common::new(host, &args.common)?.report(Grouping::File).await
}

/// Rank symbols by check time, split between project sources and dependencies.
pub async fn rank_symbols<H: Host>(host: &mut H, args: &RankArgs) -> Result<()> {
    Common::new(host, &args.common)?.report(Grouping::Origin).await
}
