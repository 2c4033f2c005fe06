//! Check rendering prerequisites.

use tomocard_card_render::fonts;
use tomocard_common::config::AppConfig;

pub fn run() -> anyhow::Result<()> {
    println!("Tomocard System Check");
    println!("{}", "=".repeat(50));

    // Fonts: rendering degrades to text-free cards without one.
    match fonts::regular() {
        Some(_) => println!("[OK] Regular text font found"),
        None => println!("[WARN] No regular font found; cards will render without text"),
    }
    match fonts::bold() {
        Some(_) => println!("[OK] Bold text font found"),
        None => println!("[WARN] No bold font found"),
    }
    if std::env::var("TOMOCARD_FONT").is_ok() {
        println!("     TOMOCARD_FONT override is set");
    }

    // Configuration.
    let config = AppConfig::load();
    println!("[OK] Default output directory: {}", config.output_dir.display());
    println!("[OK] Default base URL: {}", config.export.base_url);
    println!(
        "[OK] Pacing: settle {}ms, side {}ms, employee {}ms",
        config.export.settle_delay_ms,
        config.export.side_delay_ms,
        config.export.employee_delay_ms
    );

    // Output directory must be writable for exports to land.
    let probe = config.output_dir.join(".tomocard-write-probe");
    match std::fs::write(&probe, b"") {
        Ok(()) => {
            let _ = std::fs::remove_file(&probe);
            println!("[OK] Output directory is writable");
        }
        Err(e) => println!("[WARN] Output directory is not writable: {e}"),
    }

    Ok(())
}
