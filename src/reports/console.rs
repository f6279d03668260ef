use super::{Summary, common};
use crate::Result;
use crate::ranking::{Grouping, RankedGroup, RankedItem, Ranking};
use camino::Utf8Path;
use core::fmt::Write;
use owo_colors::OwoColorize;
use terminal_size::{Width, terminal_size};

const DURATION_WIDTH: usize = 10;
const MIN_NAME_WIDTH: usize = 20;
const MAX_NAME_WIDTH: usize = 60;

/// Columns taken by everything on an item line except the symbol name
const ITEM_OVERHEAD: usize = 50;

/// Write the ranking as a terminal report.
///
/// File groups are printed from the lightest retained file to the heaviest, so the most
/// expensive file ends up right above the footer.
pub fn generate<W: Write>(summary: &Summary, ranking: &Ranking, root: &Utf8Path, use_colors: bool, writer: &mut W) -> Result<()> {
    let name_width = name_width(get_terminal_width());
    let style = Style { use_colors, name_width };

    let title = match ranking.grouping {
        Grouping::File => ":: Files ranked by type check duration:",
        Grouping::Origin => ":: Symbols ranked by type check duration, by origin:",
    };
    writeln!(writer, "{}", style.bold(title))?;
    writeln!(writer)?;
    write_inputs(writer, &style, summary, ranking.grouping, root)?;

    for warning in &summary.warnings {
        writeln!(writer, "  {} {warning}", style.warning("warning:"))?;
    }
    if !summary.warnings.is_empty() {
        writeln!(writer)?;
    }

    if ranking.metric_count == 0 {
        writeln!(writer, "  No metrics matched.")?;
        writeln!(writer)?;
    }

    match ranking.grouping {
        Grouping::File => {
            for group in ranking.groups.iter().rev() {
                write_group(writer, &style, group, &format!("# {}", group.rank), false, root)?;
            }
        }
        Grouping::Origin => {
            for group in &ranking.groups {
                write_group(writer, &style, group, &common::bucket_title(&group.key), true, root)?;
            }
        }
    }

    write_footer(writer, &style, summary, ranking)
}

struct Style {
    use_colors: bool,
    name_width: usize,
}

impl Style {
    fn bold(&self, text: &str) -> String {
        if self.use_colors { text.bold().to_string() } else { text.to_string() }
    }

    fn warning(&self, text: &str) -> String {
        if self.use_colors {
            text.yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn label(&self, text: &str) -> String {
        if self.use_colors { text.cyan().bold().to_string() } else { text.to_string() }
    }

    fn total(&self, text: &str) -> String {
        if self.use_colors { text.red().bold().to_string() } else { text.to_string() }
    }

    fn percentage(&self, text: &str) -> String {
        if self.use_colors {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn duration(&self, text: &str) -> String {
        if self.use_colors {
            text.yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn name(&self, text: &str) -> String {
        if self.use_colors {
            text.bright_blue().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn location(&self, text: &str) -> String {
        if self.use_colors { text.bright_black().to_string() } else { text.to_string() }
    }
}

fn write_inputs<W: Write>(writer: &mut W, style: &Style, summary: &Summary, grouping: Grouping, root: &Utf8Path) -> Result<()> {
    let limits = match grouping {
        Grouping::File => format!("{} files, {} symbols per file", summary.file_limit, summary.symbol_limit),
        Grouping::Origin => format!("{} symbols per origin", summary.symbol_limit),
    };

    writeln!(writer, "  {} {}", style.label("trace: "), common::display_path(summary.trace_file.as_str(), root))?;
    writeln!(writer, "  {} {}", style.label("types: "), common::display_path(summary.types_file.as_str(), root))?;
    writeln!(writer, "  {} {limits}", style.label("limits:"))?;
    writeln!(writer)?;
    Ok(())
}

fn write_group<W: Write>(
    writer: &mut W,
    style: &Style,
    group: &RankedGroup,
    label: &str,
    numbered: bool,
    root: &Utf8Path,
) -> Result<()> {
    let label = format!("{label:<8}");
    let total = format!("{} ms", common::format_ms(group.total_ms));
    let percentage = format!("{} %", group.percentage);

    writeln!(
        writer,
        "  {} {} ({} of total metrics) ({} metrics)",
        style.label(&label),
        style.total(&total),
        style.percentage(&percentage),
        group.count
    )?;
    writeln!(writer)?;

    for (index, item) in group.items.iter().enumerate() {
        if numbered {
            writeln!(writer, "    {:>3}. {}", index + 1, format_item(style, item, root))?;
        } else {
            writeln!(writer, "    {}", format_item(style, item, root))?;
        }
    }

    if !group.items.is_empty() {
        writeln!(writer)?;
    }

    Ok(())
}

fn format_item(style: &Style, item: &RankedItem, root: &Utf8Path) -> String {
    let duration = format!("{:>width$} ms", common::format_ms(item.duration_ms), width = DURATION_WIDTH);
    let name = common::fit(&item.name, style.name_width);
    let path = common::display_path(&item.path, root);
    let position = format!(":{}:{}", item.line, item.column);

    format!("{} {} {path}{}", style.duration(&duration), style.name(&name), style.location(&position))
}

fn write_footer<W: Write>(writer: &mut W, style: &Style, summary: &Summary, ranking: &Ranking) -> Result<()> {
    let kinds: Vec<String> = summary.check_kinds.iter().map(|kind| style.label(kind.name())).collect();

    writeln!(
        writer,
        ":: {} total traces, {} total types",
        summary.trace_count, summary.catalog_count
    )?;
    writeln!(
        writer,
        ":: Measured {} check metrics of kind: [{}]",
        summary.measured_count,
        kinds.join(",")
    )?;
    writeln!(writer, ":: {} metrics match '{}'", ranking.metric_count, summary.pattern)?;
    writeln!(writer, ":: {} ms total measured duration", common::format_ms(ranking.total_ms))?;
    writeln!(writer, ":: Completed in {:.2}s", summary.elapsed.as_secs_f64())?;
    Ok(())
}

/// Width of the symbol name column for a terminal of `term_width` columns.
fn name_width(term_width: usize) -> usize {
    term_width.saturating_sub(ITEM_OVERHEAD).clamp(MIN_NAME_WIDTH, MAX_NAME_WIDTH)
}

/// Get the terminal width, defaulting to 80 if not detectable
fn get_terminal_width() -> usize {
    terminal_size().map_or(80, |(Width(w), _)| w as usize)
}
