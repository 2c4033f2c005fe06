//! Render one employee's card faces to PNG.
//!
//! Renders onto the stage and captures from there, which is the same
//! path the single-card download takes: surfaces are addressed by
//! (card id, side), and an unstaged side is skipped without error.

use std::path::PathBuf;

use tomocard_capture_engine::{CaptureOptions, Stage, Surface, SurfaceContent};
use tomocard_card_render::{render_card, RenderContext};
use tomocard_common::config::AppConfig;
use tomocard_export_engine::export_staged_png;
use tomocard_roster_model::{CardSide, Roster};

#[allow(clippy::too_many_arguments)]
pub fn run(
    roster_path: PathBuf,
    key: String,
    side: String,
    output: PathBuf,
    template: String,
    base_url: Option<String>,
    scale: Option<u32>,
    photo_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    let config = AppConfig::load();

    let roster = Roster::load(&roster_path)
        .map_err(|e| anyhow::anyhow!("Failed to load roster: {e}"))?;
    let employee = roster
        .find(&key)
        .ok_or_else(|| anyhow::anyhow!("No employee matching '{key}' in roster"))?;

    let sides: &[CardSide] = match side.as_str() {
        "front" => &[CardSide::Front],
        "back" => &[CardSide::Back],
        "both" => &CardSide::BOTH,
        _ => {
            return Err(anyhow::anyhow!(
                "Unknown side: {side}. Use: front, back, both"
            ));
        }
    };

    let ctx = RenderContext {
        template: super::parse_template(&template)?,
        organization: roster.organization.clone(),
        base_url: base_url.unwrap_or_else(|| config.export.base_url.clone()),
        photo_root: photo_dir,
    };
    let options = CaptureOptions {
        scale: scale.unwrap_or(config.export.scale_factor),
        ..Default::default()
    };

    std::fs::create_dir_all(&output)?;

    let mut stage = Stage::new();
    for &side in sides {
        let rendered = render_card(&ctx, employee, side)?;
        stage.mount(Surface::new(
            &employee.id,
            side,
            SurfaceContent {
                image: rendered.image,
                remote_content: rendered.remote_content,
            },
        ));
    }

    println!("Rendering {} ({})", employee.name, employee.employee_id);
    for &side in sides {
        match export_staged_png(&stage, employee, side, &options, &output)? {
            Some(path) => println!("  {}", path.display()),
            None => println!("  {side}: not staged, skipped"),
        }
    }

    Ok(())
}
