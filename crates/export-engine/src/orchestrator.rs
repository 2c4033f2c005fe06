//! The batch orchestrator: `Idle -> Running -> {Completed, Failed}`.
//!
//! Employees are processed strictly in input order, front then back,
//! never in parallel: concurrent rasterization of multiple off-screen
//! mounts risks visual corruption from shared layout state, so the
//! serialization is deliberate. Any per-employee failure fails the
//! whole job; artifacts already written stay on disk.

use std::path::{Path, PathBuf};
use std::time::Duration;

use image::RgbaImage;

use tomocard_capture_engine::{
    capture, capture_staged, render_offscreen, CaptureOptions, Stage, SurfaceContent,
};
use tomocard_card_render::{render_card, RenderContext};
use tomocard_common::{TomocardError, TomocardResult};
use tomocard_roster_model::{
    combined_pdf_file_name, pdf_file_name, png_file_name, CardSide, Employee,
};

use crate::job::{ExportJob, ExportMode, JobNotice, JobState, JobSummary, NoticeCallback};
use crate::pdf::PdfAssembler;

/// Run an export job to completion or first failure.
///
/// An empty roster refuses to start: the job never leaves `Idle`, no
/// notices are emitted, and the call returns `EmptyRoster`. A job that
/// entered `Running` always yields a summary; a mid-run failure is
/// reported as `JobState::Failed` carrying the aggregate message and
/// the artifacts written before the abort.
pub async fn run_export_job(
    job: ExportJob,
    notice: Option<NoticeCallback>,
) -> TomocardResult<JobSummary> {
    if job.roster.employees.is_empty() {
        tracing::warn!(state = ?JobState::Idle, "Roster contains no employees; refusing to start");
        return Err(TomocardError::EmptyRoster);
    }

    std::fs::create_dir_all(&job.output_dir)?;

    let employees = job.roster.employees.len();
    tracing::info!(
        state = ?JobState::Running,
        employees,
        mode = job.mode.as_str(),
        template = ?job.template,
        output = %job.output_dir.display(),
        "Starting export job"
    );
    notify(&notice, &JobNotice::Started { employees });

    let mut artifacts = Vec::new();
    match execute(&job, &notice, &mut artifacts).await {
        Ok(()) => {
            tracing::info!(
                state = ?JobState::Completed,
                artifacts = artifacts.len(),
                "Export job completed"
            );
            notify(
                &notice,
                &JobNotice::Success {
                    artifacts: artifacts.len(),
                },
            );
            Ok(JobSummary {
                state: JobState::Completed,
                artifacts,
                employees,
                failure: None,
            })
        }
        Err(e) => {
            let message = e.to_string();
            tracing::error!(
                state = ?JobState::Failed,
                error = %message,
                kept = artifacts.len(),
                "Export job failed"
            );
            notify(
                &notice,
                &JobNotice::Failure {
                    message: message.clone(),
                },
            );
            Ok(JobSummary {
                state: JobState::Failed,
                artifacts,
                employees,
                failure: Some(message),
            })
        }
    }
}

async fn execute(
    job: &ExportJob,
    notice: &Option<NoticeCallback>,
    artifacts: &mut Vec<PathBuf>,
) -> TomocardResult<()> {
    let stage = Stage::new();
    let ctx = RenderContext {
        template: job.template,
        organization: job.roster.organization.clone(),
        base_url: job.base_url.clone(),
        photo_root: job.photo_root.clone(),
    };
    let settle = Duration::from_millis(job.pacing.settle_ms);
    let total = job.roster.employees.len();

    let mut combined = match job.mode {
        ExportMode::CombinedPdf => Some(PdfAssembler::new(&format!(
            "{} ID Cards",
            job.roster.organization
        ))),
        _ => None,
    };

    for (index, employee) in job.roster.employees.iter().enumerate() {
        let front =
            capture_card_face(&stage, &ctx, employee, CardSide::Front, settle, &job.capture)
                .await?;
        place_face(job, employee, CardSide::Front, &front, &mut combined, artifacts)?;

        sleep_ms(job.pacing.side_delay_ms).await;

        let back =
            capture_card_face(&stage, &ctx, employee, CardSide::Back, settle, &job.capture)
                .await?;
        place_face(job, employee, CardSide::Back, &back, &mut combined, artifacts)?;

        if job.mode == ExportMode::IndividualPdf {
            let mut doc = PdfAssembler::new(&format!("{} ID Card", employee.name));
            doc.push_page(&front)?;
            doc.push_page(&back)?;
            let path = job.output_dir.join(pdf_file_name(employee));
            doc.save(&path)?;
            artifacts.push(path);
        }

        notify(
            notice,
            &JobNotice::EmployeeExported {
                index,
                total,
                name: employee.name.clone(),
            },
        );

        if index + 1 < total {
            sleep_ms(job.pacing.employee_delay_ms).await;
        }
    }

    if let Some(assembler) = combined {
        let path = job
            .output_dir
            .join(combined_pdf_file_name(&job.roster.organization));
        assembler.save(&path)?;
        tracing::info!(path = %path.display(), "Saved combined PDF");
        artifacts.push(path);
    }

    Ok(())
}

/// Render one card face off-screen and capture it. The canonical
/// export strategy: never depends on a surface being staged.
async fn capture_card_face(
    stage: &Stage,
    ctx: &RenderContext,
    employee: &Employee,
    side: CardSide,
    settle: Duration,
    options: &CaptureOptions,
) -> TomocardResult<RgbaImage> {
    let (width, height) = ctx.template.logical_size();
    let surface = render_offscreen(stage, &employee.id, side, width, height, settle, || {
        let rendered = render_card(ctx, employee, side)?;
        Ok(SurfaceContent {
            image: rendered.image,
            remote_content: rendered.remote_content,
        })
    })
    .await?;
    capture(&surface, options)
}

/// Route a captured face to its artifact target for the job mode.
/// Individual PDFs are handled by the caller, which needs both faces.
fn place_face(
    job: &ExportJob,
    employee: &Employee,
    side: CardSide,
    bitmap: &RgbaImage,
    combined: &mut Option<PdfAssembler>,
    artifacts: &mut Vec<PathBuf>,
) -> TomocardResult<()> {
    match job.mode {
        ExportMode::PngSet => {
            let path = job.output_dir.join(png_file_name(employee, side));
            bitmap.save(&path)?;
            tracing::debug!(path = %path.display(), "Saved PNG");
            artifacts.push(path);
        }
        ExportMode::CombinedPdf => {
            if let Some(assembler) = combined {
                assembler.push_page(bitmap)?;
            }
        }
        ExportMode::IndividualPdf => {}
    }
    Ok(())
}

/// Capture an already-staged card and save it as a PNG. Used by the
/// single-card download path; a missing (card id, side) pair is a
/// silent skip.
pub fn export_staged_png(
    stage: &Stage,
    employee: &Employee,
    side: CardSide,
    options: &CaptureOptions,
    output_dir: &Path,
) -> TomocardResult<Option<PathBuf>> {
    let Some(bitmap) = capture_staged(stage, &employee.id, side, options)? else {
        return Ok(None);
    };
    let path = output_dir.join(png_file_name(employee, side));
    bitmap.save(&path)?;
    tracing::info!(path = %path.display(), "Saved staged card capture");
    Ok(Some(path))
}

fn notify(notice: &Option<NoticeCallback>, event: &JobNotice) {
    if let Some(cb) = notice {
        cb(event);
    }
}

async fn sleep_ms(ms: u64) {
    if ms > 0 {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
