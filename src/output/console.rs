//! Console output utilities.

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     File Harvester                                    ║
║     Download and organize files linked from the web   ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(
    targets: &[String],
    extensions: &[String],
    rule: &str,
    download_dir: &str,
    force: bool,
) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Pages:      {}", targets.len());
    println!("  Extensions: {}", extensions.join(", "));
    println!("  Rule:       {}", rule);
    println!("  Directory:  {}", download_dir);
    if force {
        println!("  Mode:       {}", style("force download").yellow());
    } else {
        println!("  Mode:       normal (skip files in history)");
    }
    println!();
}
