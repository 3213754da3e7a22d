use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::classifier::FileTask;
use crate::config::{Destination, RoutingTable};
use crate::errors::{Result, SkipReason, UploaderError};
use crate::scanner::{ScanConfig, Scanner};
use crate::stats::{FileErrorReport, FileOutcome, FileReport, Stage, UploadAction};
use crate::storage::ObjectStorage;

/// Walks a source tree and ships every routable file to its backend.
///
/// Routing is resolved once at construction: each label maps straight to a
/// backend handle, so per-file work is classify → lookup → upload. Files are
/// processed one at a time; a per-file failure is recorded and the walk
/// carries on.
pub struct Uploader {
    targets: HashMap<String, Arc<dyn ObjectStorage>>,
    scan: ScanConfig,
    dry_run: bool,
}

impl Uploader {
    pub fn new(
        routes: &RoutingTable,
        backends: &HashMap<Destination, Arc<dyn ObjectStorage>>,
    ) -> Result<Self> {
        let mut targets = HashMap::new();
        for (label, destination) in routes.iter() {
            let backend = backends.get(&destination).ok_or_else(|| {
                UploaderError::Config(format!(
                    "route '{label}' targets '{destination}' but that backend was not constructed"
                ))
            })?;
            targets.insert(label.to_string(), Arc::clone(backend));
        }

        Ok(Self {
            targets,
            scan: ScanConfig::default(),
            dry_run: false,
        })
    }

    pub fn with_scan_config(mut self, scan: ScanConfig) -> Self {
        self.scan = scan;
        self
    }

    pub fn dry_run(mut self, yes: bool) -> Self {
        self.dry_run = yes;
        self
    }

    /// Process every regular file under `source_dir` and return the per-file
    /// outcomes. The only hard failure is a source directory that cannot be
    /// enumerated at all.
    pub async fn upload_files(&self, source_dir: &Path) -> Result<Vec<FileOutcome>> {
        let meta = tokio::fs::metadata(source_dir)
            .await
            .map_err(|_| UploaderError::InvalidPath(source_dir.to_path_buf()))?;
        if !meta.is_dir() {
            return Err(UploaderError::InvalidPath(source_dir.to_path_buf()));
        }

        info!(source = %source_dir.display(), dry_run = self.dry_run, "starting upload run");

        let mut outcomes = Vec::new();
        for entry in Scanner::new(source_dir, self.scan.clone()) {
            match entry {
                Ok(raw) => {
                    if !raw.is_file {
                        debug!(path = %raw.path.display(), "not a regular file, ignoring");
                        continue;
                    }
                    outcomes.push(self.process_file(&raw.path, raw.size).await);
                }
                Err(UploaderError::Skipped { path, reason }) => {
                    outcomes.push(FileOutcome::Skipped {
                        path,
                        reason,
                        size: 0,
                    });
                }
                Err(err) => {
                    let path = match &err {
                        UploaderError::Walk { path, .. } => path.clone(),
                        _ => source_dir.to_path_buf(),
                    };
                    outcomes.push(FileOutcome::Err(FileErrorReport {
                        path,
                        stage: Stage::Scan,
                        error: err,
                    }));
                }
            }
        }

        Ok(outcomes)
    }

    async fn process_file(&self, path: &Path, size: u64) -> FileOutcome {
        let Some(task) = FileTask::from_path(path) else {
            debug!(path = %path.display(), "unclassifiable, skipping");
            return FileOutcome::Skipped {
                path: path.to_path_buf(),
                reason: SkipReason::Unclassified,
                size,
            };
        };

        let Some(backend) = self.targets.get(task.label.as_str()) else {
            debug!(path = %path.display(), label = %task.label, "no route for label, skipping");
            return FileOutcome::Skipped {
                path: path.to_path_buf(),
                reason: SkipReason::Unrouted,
                size,
            };
        };

        if self.dry_run {
            return FileOutcome::Uploaded(FileReport {
                path: task.path,
                object_name: task.object_name,
                destination: backend.destination(),
                action: UploadAction::DryRun,
                size,
            });
        }

        match backend.upload(&task.path, &task.object_name).await {
            Ok(()) => FileOutcome::Uploaded(FileReport {
                path: task.path,
                object_name: task.object_name,
                destination: backend.destination(),
                action: UploadAction::Uploaded,
                size,
            }),
            Err(err) => FileOutcome::Err(FileErrorReport {
                path: task.path,
                stage: Stage::Upload,
                error: err.into(),
            }),
        }
    }
}
