//! Batch-export a roster.

use std::path::PathBuf;

use tomocard_capture_engine::{CaptureOptions, CrossOriginPolicy};
use tomocard_common::config::AppConfig;
use tomocard_export_engine::{
    run_export_job, ExportJob, ExportMode, JobNotice, JobState, NoticeCallback, PacingConfig,
};
use tomocard_roster_model::Roster;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    roster_path: PathBuf,
    mode: String,
    output: Option<PathBuf>,
    template: String,
    base_url: Option<String>,
    scale: Option<u32>,
    settle_ms: Option<u64>,
    side_delay_ms: Option<u64>,
    employee_delay_ms: Option<u64>,
    photo_dir: Option<PathBuf>,
    same_origin: bool,
) -> anyhow::Result<()> {
    let config = AppConfig::load();

    let roster = Roster::load(&roster_path)
        .map_err(|e| anyhow::anyhow!("Failed to load roster: {e}"))?;

    let mode: ExportMode = mode.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let template = super::parse_template(&template)?;
    let output_dir = output.unwrap_or_else(|| config.output_dir.clone());

    let mut pacing = PacingConfig::from(&config.export);
    if let Some(ms) = settle_ms {
        pacing.settle_ms = ms;
    }
    if let Some(ms) = side_delay_ms {
        pacing.side_delay_ms = ms;
    }
    if let Some(ms) = employee_delay_ms {
        pacing.employee_delay_ms = ms;
    }

    let capture = CaptureOptions {
        scale: scale.unwrap_or(config.export.scale_factor),
        cross_origin: if same_origin {
            CrossOriginPolicy::SameOrigin
        } else {
            CrossOriginPolicy::Permissive
        },
        ..Default::default()
    };

    println!("Exporting roster: {}", roster_path.display());
    println!("  Organization: {}", roster.organization);
    println!("  Mode: {}", mode.as_str());
    println!("  Output: {}", output_dir.display());

    let job = ExportJob {
        roster,
        mode,
        output_dir,
        template,
        base_url: base_url.unwrap_or_else(|| config.export.base_url.clone()),
        photo_root: photo_dir,
        pacing,
        capture,
    };

    let notice: NoticeCallback = Box::new(|n: &JobNotice| println!("{n}"));
    let summary = run_export_job(job, Some(notice)).await?;

    for artifact in &summary.artifacts {
        println!("  {}", artifact.display());
    }

    if summary.state == JobState::Failed {
        let message = summary
            .failure
            .unwrap_or_else(|| "export failed".to_string());
        return Err(anyhow::anyhow!(message));
    }

    Ok(())
}
