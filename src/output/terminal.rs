// Colored terminal output for `badwords check`.

use colored::Colorize;

use crate::detect::DetectorVerdicts;

/// Display the verdict for one text, with the per-detector breakdown.
pub fn display_check_result(text: &str, verdicts: &DetectorVerdicts, censored: Option<&str>) {
    println!("\n{}", "=== Profanity Check ===".bold());
    println!("  Text: \"{}\"", super::truncate_chars(text, 120).dimmed());

    let verdict = if verdicts.any() {
        "contains profanity".red().bold()
    } else {
        "clean".green().bold()
    };
    println!("  Verdict: {verdict}");
    println!(
        "    boundary: {}  |  token: {}",
        colorize_hit(verdicts.boundary),
        colorize_hit(verdicts.token)
    );

    if let Some(censored) = censored {
        println!("  Censored: \"{}\"", super::truncate_chars(censored, 120));
    }
    println!();
}

fn colorize_hit(hit: bool) -> colored::ColoredString {
    if hit {
        "hit".red()
    } else {
        "miss".green()
    }
}
