//! Terminal output formatting.

use colored::Colorize;
use std::path::Path;

use schools_db::queries::tables::TableCount;
use schools_sync::ImportReport;

/// Print the per-entity outcome of an import run.
pub fn print_import_report(report: &ImportReport) {
    let heading = if report.dry_run {
        "Dry run complete (nothing written):".yellow().bold()
    } else {
        "Import complete:".green().bold()
    };
    println!("\n{}", heading);

    println!(
        "  {:<8} {:>9} {:>9} {:>9} {:>9}",
        "Entity", "Fetched", "Inserted", "Updated", "Dropped"
    );
    println!("  {}", "─".repeat(48));

    for entity in &report.entities {
        let dropped = if entity.dropped > 0 {
            entity.dropped.to_string().yellow()
        } else {
            entity.dropped.to_string().dimmed()
        };

        println!(
            "  {:<8} {:>9} {:>9} {:>9} {:>9}",
            entity.entity.as_str().cyan(),
            entity.fetched,
            entity.inserted,
            entity.updated,
            dropped
        );
    }

    println!(
        "\n  Inserted: {}  Updated: {}  Dropped: {}",
        report.inserted().to_string().bold(),
        report.updated().to_string().bold(),
        report.dropped().to_string().bold()
    );
}

/// Print row counts of the importer tables.
pub fn print_table_counts(database: &Path, counts: &[TableCount]) {
    println!("{}", "Database Status".bold());
    println!("{}", "─".repeat(40));
    println!("  Database: {}", database.display().to_string().cyan());

    for count in counts {
        let rows = if count.rows == 0 {
            "empty".yellow()
        } else {
            count.rows.to_string().cyan()
        };
        println!("  {:<14} {}", format!("{}:", count.table), rows);
    }

    println!("{}", "─".repeat(40));
}
