//! Plain text rendering for the CLI

use super::CliConfig;
use crate::application::use_cases::{CheckReport, TicketLoadSummary};
use crate::domain::entities::DrawResult;
use std::fmt::Write;
use std::path::Path;

/// Renders a finished check as a verdict line plus a winnings table
pub fn report_text(
    report: &CheckReport,
    draw: &DrawResult,
    summary: &TicketLoadSummary,
    source: &Path,
) -> String {
    let mut out = String::new();

    // fmt::Write into a String cannot fail
    let _ = writeln!(
        out,
        "{} rows read from \"{}\", {} rejected",
        summary.total_rows(),
        source.display(),
        summary.rejected_count()
    );
    let _ = writeln!(
        out,
        "Drawing: {} | Powerball {}",
        draw.white_balls()
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        draw.powerball()
    );
    let _ = writeln!(out, "{}", report.verdict().message());

    if !report.outcomes.is_empty() {
        let width = report
            .outcomes
            .iter()
            .map(|o| o.ticket.ticket_number.len())
            .max()
            .unwrap_or(0)
            .max("Ticket".len());

        let _ = writeln!(out, "{:<width$} | Winnings", "Ticket", width = width);
        let _ = writeln!(out, "{:-<width$} | ---------", "", width = width);
        for outcome in &report.outcomes {
            let _ = writeln!(
                out,
                "{:<width$} | {}",
                outcome.ticket.ticket_number,
                outcome.tier,
                width = width
            );
        }
    }

    let _ = write!(
        out,
        "{} of {} tickets won",
        report.outcomes.len(),
        report.tickets_checked
    );
    out
}

/// Dry-run configuration dump
pub fn config_summary(config: &CliConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "========================================");
    let _ = writeln!(out, "  Powerball Checker v{}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(out, "========================================");
    let _ = writeln!(out, "Ticket file:    {}", config.tickets.display());
    let _ = writeln!(out, "Header row:     {}", if config.no_header { "no" } else { "yes" });
    let _ = writeln!(out, "White balls:    {}", config.white.join(" "));
    let _ = writeln!(out, "Powerball:      {}", config.powerball);
    let _ = writeln!(out, "White max:      {}", config.white_max);
    let _ = writeln!(out, "Powerball max:  {}", config.powerball_max);
    let _ = writeln!(out, "Format:         {:?}", config.format);
    let _ = writeln!(out, "Log level:      {}", config.log_level);
    let _ = write!(out, "========================================");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::CheckRunner;
    use crate::domain::entities::TicketRecord;
    use clap::Parser;
    use std::sync::Arc;

    #[test]
    fn test_report_text_table() {
        let tickets = vec![
            Arc::new(TicketRecord::new("12345-6789", [1, 2, 3, 4, 5], 9)),
            Arc::new(TicketRecord::new("loser", [30, 31, 32, 33, 34], 9)),
        ];
        let draw = DrawResult::new([5, 4, 3, 2, 1], 6);
        let report = CheckRunner::new().run(&tickets, &draw);
        let summary = TicketLoadSummary {
            tickets: tickets.clone(),
            rejected: Vec::new(),
        };

        let text = report_text(&report, &draw, &summary, Path::new("t.csv"));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "2 rows read from \"t.csv\", 0 rejected");
        assert_eq!(lines[1], "Drawing: 1 2 3 4 5 | Powerball 6");
        assert_eq!(lines[2], "Some winning tickets found...");
        assert_eq!(lines[3], "Ticket     | Winnings");
        assert_eq!(lines[4], "---------- | ---------");
        assert_eq!(lines[5], "12345-6789 | $1,000,000");
        assert_eq!(lines[6], "1 of 2 tickets won");
    }

    #[test]
    fn test_report_text_no_winners() {
        let tickets = vec![Arc::new(TicketRecord::new("A", [30, 31, 32, 33, 34], 9))];
        let draw = DrawResult::new([1, 2, 3, 4, 5], 6);
        let report = CheckRunner::new().run(&tickets, &draw);
        let summary = TicketLoadSummary::default();

        let text = report_text(&report, &draw, &summary, Path::new("t.csv"));
        assert!(text.contains("Sorry to announce... no tickets have won"));
        assert!(!text.contains("Winnings"));
    }

    #[test]
    fn test_config_summary() {
        let config = CliConfig::parse_from([
            "powerball-checker", "-t", "t.csv", "-w", "1,2,3,4,5", "-p", "6", "--dry-run",
        ]);
        let text = config_summary(&config);
        assert!(text.contains("White balls:    1 2 3 4 5"));
        assert!(text.contains("Powerball:      6"));
    }
}
