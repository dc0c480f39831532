use super::link_registry::LinkRegistry;
use super::markdown_table::MarkdownTable;
use crate::application::read_models::{
    ColumnView, ReportSection, SupportReportModel, TargetRowView, UnsupportedRowView,
};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::support_matrix::domain::{SupportTier, VersionWithEol};

const OS_COLUMN_WIDTH: usize = 32;
const RELEASE_COLUMN_WIDTH: usize = 32;
const EOL_COLUMN_WIDTH: usize = 24;
const UNSUPPORTED_WIDTHS: [usize; 3] = [24, 16, 24];

const NOT_SUPPORTED: &str = "(x)";
const SUPPORTED: &str = "(/)";
const NO_LIFECYCLE: &str = "No lifecycle";
const NO_UNSUPPORTED: &str = "None currently.";
const UNKNOWN_DATE: &str = "-";

const NARRATIVE_DATE_FORMAT: &str = "%-m/%-d/%Y";
const TABLE_DATE_FORMAT: &str = "%Y-%m-%d";

/// SupportReportFormatter adapter rendering the markdown support report
///
/// Template lines pass through verbatim. Each placeholder line is replaced
/// by its section; unknown placeholders are dropped. Reference link
/// anchors follow the body, separated by a blank line.
pub struct SupportReportFormatter;

impl SupportReportFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SupportReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for SupportReportFormatter {
    fn format(&self, model: &SupportReportModel, template: &str) -> Result<String> {
        let mut links = LinkRegistry::new();
        let mut output = String::with_capacity(template.len());

        for line in template.lines() {
            if !ReportSection::is_placeholder_line(line) {
                output.push_str(line);
                output.push('\n');
                continue;
            }

            match ReportSection::from_placeholder(line) {
                Some(ReportSection::Targets(tier)) => {
                    output.push_str(&Self::render_targets(model, tier, &mut links))
                }
                Some(ReportSection::Unsupported) => {
                    output.push_str(&Self::render_unsupported(&model.unsupported, &mut links))
                }
                None => {}
            }
        }

        if !links.is_empty() {
            output.push('\n');
            for anchor in links.anchors() {
                output.push_str(&anchor);
                output.push('\n');
            }
        }

        Ok(output)
    }
}

/// Helper methods for rendering sections
impl SupportReportFormatter {
    fn render_targets(
        model: &SupportReportModel,
        tier: SupportTier,
        links: &mut LinkRegistry,
    ) -> String {
        let mut widths = vec![OS_COLUMN_WIDTH];
        widths.extend(std::iter::repeat(RELEASE_COLUMN_WIDTH).take(model.columns.len()));
        widths.push(EOL_COLUMN_WIDTH);

        let mut labels = vec!["**<u>Operating System</u>**".to_string()];
        labels.extend(
            model
                .columns
                .iter()
                .map(|column| format!("**[{}]({})**", column.title, column.link)),
        );
        labels.push("**Upcoming EoL**".to_string());

        let mut table = MarkdownTable::new(widths);
        table.write_header(&labels);

        for row in model.rows(tier) {
            table.write_column(&Self::name_cell(row, links));
            for (_, column) in &row.columns {
                table.write_column(&Self::column_cell(column));
            }
            table.write_column(&Self::lifecycle_cell(
                row.lifecycle_link.as_deref(),
                &row.narrative,
                links,
            ));
            table.end_row();
        }

        table.finish()
    }

    fn name_cell(row: &TargetRowView, links: &mut LinkRegistry) -> String {
        let name = MarkdownTable::escape_cell(&row.name);
        let name = match &row.link {
            Some(link) => links.make(&name, link),
            None => name,
        };
        format!("**{}**", name)
    }

    fn column_cell(column: &ColumnView) -> String {
        match column {
            ColumnView::NotSupported => NOT_SUPPORTED.to_string(),
            ColumnView::Supported {
                versions,
                architectures,
            } => format!(
                "{}<br/>Versions: {}<br/>Architectures: {}",
                SUPPORTED,
                MarkdownTable::escape_cell(&versions.join(", ")),
                MarkdownTable::escape_cell(&architectures.join(", "))
            ),
        }
    }

    /// Lifecycle link, then each narrated version with its EOL date
    fn lifecycle_cell(
        lifecycle_link: Option<&str>,
        narrative: &[VersionWithEol],
        links: &mut LinkRegistry,
    ) -> String {
        let mut cell = match lifecycle_link {
            Some(link) => links.make("Lifecycle", link),
            None => NO_LIFECYCLE.to_string(),
        };

        for entry in narrative {
            let Some(date) = entry.eol.known() else {
                continue;
            };
            let version = MarkdownTable::escape_cell(&entry.version);
            let label = match &entry.link {
                Some(link) => links.make(&version, link),
                None => version,
            };
            cell.push_str(&format!(
                "<br/>{} ({})",
                label,
                date.format(NARRATIVE_DATE_FORMAT)
            ));
        }

        cell
    }

    fn render_unsupported(rows: &[UnsupportedRowView], links: &mut LinkRegistry) -> String {
        if rows.is_empty() {
            return format!("{}\n", NO_UNSUPPORTED);
        }

        let mut table = MarkdownTable::new(UNSUPPORTED_WIDTHS.to_vec());
        table.write_header(&[
            "**OS**".to_string(),
            "**Version**".to_string(),
            "**End of Life**".to_string(),
        ]);

        for row in rows {
            let eol = match (row.eol.known(), &row.link) {
                (Some(date), Some(link)) => {
                    links.make(&date.format(TABLE_DATE_FORMAT).to_string(), link)
                }
                (Some(date), None) => date.format(TABLE_DATE_FORMAT).to_string(),
                (None, _) => UNKNOWN_DATE.to_string(),
            };

            table.write_column(&format!("**{}**", MarkdownTable::escape_cell(&row.name)));
            table.write_column(&MarkdownTable::escape_cell(&row.version));
            table.write_column(&eol);
            table.end_row();
        }

        table.finish()
    }
}
