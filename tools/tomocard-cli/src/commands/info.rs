//! Show roster information.

use std::path::PathBuf;

use tomocard_roster_model::{PhotoSource, Roster};

pub fn run(roster_path: PathBuf) -> anyhow::Result<()> {
    let roster = Roster::load(&roster_path)
        .map_err(|e| anyhow::anyhow!("Failed to load roster: {e}"))?;

    println!("Roster: {}", roster_path.display());
    println!("{}", "=".repeat(50));
    println!("Organization: {}", roster.organization);
    println!("Schema version: {}", roster.version);
    println!("Employees: {}", roster.employees.len());
    println!();

    for e in &roster.employees {
        let photo = match e.photo_source() {
            Some(PhotoSource::Local(path)) => format!("photo: {}", path.display()),
            Some(PhotoSource::Remote(url)) => format!("photo (remote): {url}"),
            None => format!("initials: {}", e.initials()),
        };
        println!(
            "  {} [{}] {} - {} ({})",
            e.employee_id, e.id, e.name, e.role, e.location
        );
        println!("      {photo}");
        if let Some(joined) = e.join_date_parsed() {
            println!("      joined: {joined}");
        }
    }

    Ok(())
}
