//! Export job configuration and lifecycle types.

use std::path::PathBuf;

use tomocard_capture_engine::CaptureOptions;
use tomocard_common::ExportDefaults;
use tomocard_roster_model::{CardTemplate, Roster};

/// Target output of an export job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportMode {
    /// One PNG file per card face (2 per employee).
    PngSet,
    /// A single PDF covering the whole roster, front/back interleaved.
    CombinedPdf,
    /// One two-page PDF per employee.
    IndividualPdf,
}

impl ExportMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportMode::PngSet => "png",
            ExportMode::CombinedPdf => "pdf",
            ExportMode::IndividualPdf => "pdf-each",
        }
    }
}

impl std::str::FromStr for ExportMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "png" => Ok(ExportMode::PngSet),
            "pdf" => Ok(ExportMode::CombinedPdf),
            "pdf-each" => Ok(ExportMode::IndividualPdf),
            other => Err(format!("Unknown mode: {other}. Use: png, pdf, pdf-each")),
        }
    }
}

/// Pacing delays between sequential pipeline steps. These are a
/// deliberate anti-overload throttle for single-threaded rendering,
/// configurable rather than hardcoded.
#[derive(Debug, Clone, Copy)]
pub struct PacingConfig {
    /// Settle delay after an off-screen mount, before capture (ms).
    pub settle_ms: u64,

    /// Delay between the front and back capture of one card (ms).
    pub side_delay_ms: u64,

    /// Delay between employees (ms).
    pub employee_delay_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            settle_ms: 100,
            side_delay_ms: 100,
            employee_delay_ms: 250,
        }
    }
}

impl PacingConfig {
    /// No pacing at all; for tests and dry runs.
    pub fn none() -> Self {
        Self {
            settle_ms: 0,
            side_delay_ms: 0,
            employee_delay_ms: 0,
        }
    }
}

impl From<&ExportDefaults> for PacingConfig {
    fn from(defaults: &ExportDefaults) -> Self {
        Self {
            settle_ms: defaults.settle_delay_ms,
            side_delay_ms: defaults.side_delay_ms,
            employee_delay_ms: defaults.employee_delay_ms,
        }
    }
}

/// One user-initiated export operation.
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// Employees in export order, plus organization metadata.
    pub roster: Roster,

    /// Output mode.
    pub mode: ExportMode,

    /// Directory artifacts are written into.
    pub output_dir: PathBuf,

    /// Card template for every face in the job.
    pub template: CardTemplate,

    /// Base URL for QR-encoded profile links.
    pub base_url: String,

    /// Photo directory (local paths and the remote-photo cache).
    pub photo_root: Option<PathBuf>,

    /// Pacing delays.
    pub pacing: PacingConfig,

    /// Capture parameters.
    pub capture: CaptureOptions,
}

/// Lifecycle state of an export job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Idle,
    Running,
    Completed,
    Failed,
}

/// Final report of a job that entered `Running`. A failed job still
/// yields a summary: the artifacts written before the abort are kept
/// on disk and listed here.
#[derive(Debug, Clone)]
pub struct JobSummary {
    pub state: JobState,

    /// Artifacts written, in download order.
    pub artifacts: Vec<PathBuf>,

    /// Employees in the roster.
    pub employees: usize,

    /// The aggregate failure message when `state` is `Failed`.
    pub failure: Option<String>,
}

/// User-facing progress notices (the toast analog). One `Started`,
/// then per-employee progress, then exactly one terminal notice.
#[derive(Debug, Clone)]
pub enum JobNotice {
    Started { employees: usize },
    EmployeeExported { index: usize, total: usize, name: String },
    Success { artifacts: usize },
    Failure { message: String },
}

impl std::fmt::Display for JobNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobNotice::Started { employees } => {
                write!(f, "Exporting ID cards for {employees} employee(s)...")
            }
            JobNotice::EmployeeExported { index, total, name } => {
                write!(f, "  [{}/{}] {}", index + 1, total, name)
            }
            JobNotice::Success { artifacts } => {
                write!(f, "Export complete: {artifacts} file(s)")
            }
            JobNotice::Failure { message } => write!(f, "Export failed: {message}"),
        }
    }
}

/// Callback through which the orchestrator surfaces notices.
pub type NoticeCallback = Box<dyn Fn(&JobNotice) + Send>;
