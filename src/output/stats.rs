//! Statistics reporting.

use console::style;

use crate::download::RunReport;

/// Print the end-of-run summary.
pub fn print_run_stats(report: &RunReport) {
    let stats = &report.stats;

    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run Statistics:").bold());
    println!("  Pages scanned:  {}", stats.pages_fetched);
    if stats.pages_failed > 0 {
        println!("  Pages failed:   {}", style(stats.pages_failed).red());
    }
    println!("  Links found:    {}", stats.links_found);
    println!("  Downloads:      {} attempted", stats.attempted());
    println!("  Organized:      {}", style(stats.files_organized).green());
    println!("  Skipped:        {} (in history)", stats.skipped_in_history);
    if stats.fetch_failed > 0 {
        println!("  Fetch failed:   {}", style(stats.fetch_failed).red());
    }
    if stats.organize_failed > 0 {
        println!("  Not organized:  {}", style(stats.organize_failed).red());
    }
    if report.history_added > 0 {
        println!("  History:        +{} new entries", report.history_added);
    } else {
        println!("  History:        no new entries");
    }
    println!("{}", style("═".repeat(50)).dim());
}
