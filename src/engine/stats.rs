use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use colored::*;
use serde::{Serialize, Serializer};

use crate::config::Destination;
use crate::errors::{SkipReason, UploaderError};

/// Final outcome for each scanned entry
#[derive(Debug)]
pub enum FileOutcome {
    /// File transferred (or planned, in dry-run mode)
    Uploaded(FileReport),

    /// File was skipped with a reason
    Skipped {
        path: PathBuf,
        reason: SkipReason,
        size: u64,
    },

    /// File failed due to an error
    Err(FileErrorReport),
}

#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub object_name: String,
    pub destination: Destination,
    pub action: UploadAction,
    pub size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadAction {
    Uploaded,
    DryRun,
}

#[derive(Debug)]
pub struct FileErrorReport {
    pub path: PathBuf,
    pub stage: Stage,
    pub error: UploaderError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Scan,
    Upload,
}

#[derive(Debug, Default, Serialize)]
pub struct Summary {
    pub discovered: usize,
    pub uploaded: usize,
    pub planned: usize,
    pub errors: usize,
    pub bytes_uploaded: u64,
    pub bytes_skipped: u64,

    pub skip_counts: [usize; SkipReason::VARIANTS.len()],
    pub skip_bytes: [u64; SkipReason::VARIANTS.len()],

    #[serde(serialize_with = "serialize_duration")]
    pub duration: Duration,
}

impl Summary {
    pub fn from_outcomes(outcomes: &[FileOutcome], start: Instant) -> Self {
        let mut summary = Summary {
            discovered: outcomes.len(),
            ..Default::default()
        };

        for outcome in outcomes {
            match outcome {
                FileOutcome::Uploaded(report) => match report.action {
                    UploadAction::Uploaded => {
                        summary.uploaded += 1;
                        summary.bytes_uploaded += report.size;
                    }
                    UploadAction::DryRun => {
                        summary.planned += 1;
                    }
                },
                FileOutcome::Skipped { reason, size, .. } => {
                    let idx = reason.as_index();
                    summary.skip_counts[idx] += 1;
                    summary.skip_bytes[idx] += *size;
                    summary.bytes_skipped += *size;
                }
                FileOutcome::Err(_) => {
                    summary.errors += 1;
                }
            }
        }

        summary.duration = start.elapsed();
        summary
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for FileOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileOutcome::Uploaded(report) => {
                let verb = match report.action {
                    UploadAction::Uploaded => "✔ Uploaded".green().bold(),
                    UploadAction::DryRun => "∙ Planned".cyan().bold(),
                };
                write!(
                    f,
                    "{} {} → {}:{}",
                    verb,
                    report.path.display(),
                    report.destination,
                    report.object_name
                )
            }
            FileOutcome::Skipped { path, reason, .. } => write!(
                f,
                "{} {} ({})",
                "⚠ Skipped".yellow().bold(),
                path.display(),
                reason
            ),
            FileOutcome::Err(err) => write!(
                f,
                "{} at {:?} stage for {}: {}",
                "✖ Error".red().bold(),
                err.stage,
                err.path.display(),
                err.error
            ),
        }
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", "Summary".bold().blue())?;

        writeln!(f, "  Discovered:  {} entries", self.discovered.to_string().yellow())?;
        writeln!(
            f,
            "  Uploaded:    {} files, {}",
            self.uploaded.to_string().green(),
            format_size(self.bytes_uploaded)
        )?;
        if self.planned > 0 {
            writeln!(f, "  Planned:     {} files (dry run)", self.planned.to_string().cyan())?;
        }
        writeln!(f, "  Errors:      {} files", self.errors.to_string().red())?;

        if self.skip_counts.iter().any(|&c| c > 0) {
            writeln!(f, "\n{}", "Skips:".bold().blue())?;
            for (i, &count) in self.skip_counts.iter().enumerate() {
                if count > 0 {
                    let reason = SkipReason::VARIANTS[i];
                    writeln!(
                        f,
                        "  - {:<22} {:<4} files ({})",
                        format!("{:?}", reason),
                        count.to_string().yellow(),
                        format_size(self.skip_bytes[i])
                    )?;
                }
            }
        }

        writeln!(f, "\n  Took {}", format_duration(self.duration))?;
        Ok(())
    }
}

// --- Helpers ---
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 1.0 {
        format!("{:.2} ms", secs * 1000.0)
    } else {
        format!("{:.2} s", secs)
    }
}

fn serialize_duration<S>(d: &Duration, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_f64(d.as_secs_f64())
}
