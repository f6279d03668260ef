use super::Summary;
use crate::Result;
use crate::ranking::Ranking;
use core::fmt::Write;
use serde::Serialize;

#[derive(Serialize)]
struct Document<'a> {
    summary: &'a Summary,
    ranking: &'a Ranking,
}

/// Write the summary and the ranking as a pretty-printed JSON document.
pub fn generate<W: Write>(summary: &Summary, ranking: &Ranking, writer: &mut W) -> Result<()> {
    let document = Document { summary, ranking };
    write!(writer, "{}", serde_json::to_string_pretty(&document)?)?;
    Ok(())
}
