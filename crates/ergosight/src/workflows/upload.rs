//! Simulated `.stp` upload queue. Files are never read; progress is random
//! jitter until the extraction "completes".

use chrono::{DateTime, TimeZone, Utc};
use rand::Rng;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, info};

pub const KPIS_PER_MODEL: u32 = 24;
/// Interval between progress ticks while files are processing.
pub const PROGRESS_TICK: Duration = Duration::from_millis(500);
const ACCEPTED_EXTENSIONS: [&str; 2] = [".stp", ".step"];
const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Processing,
    Completed,
    Failed,
}

impl UploadStatus {
    pub const fn label(self) -> &'static str {
        match self {
            UploadStatus::Processing => "processing",
            UploadStatus::Completed => "completed",
            UploadStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CadUpload {
    pub id: u64,
    pub name: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
    pub status: UploadStatus,
    pub progress: f64,
    pub vehicle: Option<String>,
    pub kpis_extracted: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("upload file name must not be empty")]
    EmptyName,
    #[error("'{name}' is not a STEP file (expected .stp or .step)")]
    UnsupportedFormat { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UploadStats {
    pub total: usize,
    pub completed: usize,
    pub processing: usize,
    pub total_bytes: u64,
}

#[derive(Debug, Clone)]
pub struct UploadTracker {
    uploads: Vec<CadUpload>,
    next_id: u64,
}

impl UploadTracker {
    pub fn empty() -> Self {
        Self {
            uploads: Vec::new(),
            next_id: 1,
        }
    }

    /// Tracker pre-populated with the three sample models shown on first load.
    pub fn seeded() -> Self {
        let sample = |id: u64, name: &str, size_bytes: u64, at: DateTime<Utc>, vehicle: &str| CadUpload {
            id,
            name: name.to_string(),
            size_bytes,
            uploaded_at: at,
            status: UploadStatus::Completed,
            progress: 100.0,
            vehicle: Some(vehicle.to_string()),
            kpis_extracted: Some(KPIS_PER_MODEL),
        };

        let mut thar = sample(
            3,
            "Thar_Complete_Model.stp",
            18_900_000,
            sample_time(2025, 11, 18, 16, 45),
            "Thar",
        );
        thar.status = UploadStatus::Processing;
        thar.progress = 67.0;
        thar.kpis_extracted = None;

        Self {
            uploads: vec![
                sample(
                    1,
                    "XUV700_Front_Driver.stp",
                    24_580_000,
                    sample_time(2025, 11, 20, 14, 30),
                    "XUV700",
                ),
                sample(
                    2,
                    "Scorpio_N_Assembly.stp",
                    31_200_000,
                    sample_time(2025, 11, 19, 9, 15),
                    "Scorpio-N",
                ),
                thar,
            ],
            next_id: 4,
        }
    }

    pub fn uploads(&self) -> &[CadUpload] {
        &self.uploads
    }

    pub fn get(&self, id: u64) -> Option<&CadUpload> {
        self.uploads.iter().find(|upload| upload.id == id)
    }

    /// Queues a new file at the front of the list with zero progress.
    pub fn register(
        &mut self,
        name: &str,
        size_bytes: u64,
        at: DateTime<Utc>,
    ) -> Result<&CadUpload, UploadError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(UploadError::EmptyName);
        }
        let lowered = name.to_ascii_lowercase();
        if !ACCEPTED_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext)) {
            return Err(UploadError::UnsupportedFormat {
                name: name.to_string(),
            });
        }

        let id = self.next_id;
        self.next_id += 1;
        self.uploads.insert(
            0,
            CadUpload {
                id,
                name: name.to_string(),
                size_bytes,
                uploaded_at: at,
                status: UploadStatus::Processing,
                progress: 0.0,
                vehicle: None,
                kpis_extracted: None,
            },
        );
        debug!(id, name, size_bytes, "registered CAD upload");
        Ok(&self.uploads[0])
    }

    /// One progress tick: every processing upload gains a random 0-15 %.
    /// Returns how many uploads completed on this tick.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let mut completed = 0;
        for upload in self
            .uploads
            .iter_mut()
            .filter(|upload| upload.status == UploadStatus::Processing)
        {
            upload.progress += rng.random::<f64>() * 15.0;
            if upload.progress >= 100.0 {
                upload.progress = 100.0;
                upload.status = UploadStatus::Completed;
                upload.kpis_extracted = Some(KPIS_PER_MODEL);
                completed += 1;
                info!(id = upload.id, name = %upload.name, "CAD upload processed");
            }
        }
        completed
    }

    pub fn is_settled(&self) -> bool {
        self.uploads
            .iter()
            .all(|upload| upload.status != UploadStatus::Processing)
    }

    pub fn remove(&mut self, id: u64) -> Option<CadUpload> {
        let index = self.uploads.iter().position(|upload| upload.id == id)?;
        Some(self.uploads.remove(index))
    }

    pub fn stats(&self) -> UploadStats {
        let count = |status| {
            self.uploads
                .iter()
                .filter(|upload| upload.status == status)
                .count()
        };
        UploadStats {
            total: self.uploads.len(),
            completed: count(UploadStatus::Completed),
            processing: count(UploadStatus::Processing),
            total_bytes: self.uploads.iter().map(|upload| upload.size_bytes).sum(),
        }
    }
}

/// Fixed instant for the sample uploads. UTC has no gaps or folds, so the
/// lookup is always a single valid time.
fn sample_time(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .expect("sample upload timestamps are valid UTC instants")
}

impl Default for UploadTracker {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Human-readable size in base-1024 units, at most two decimals ("23.44 MB").
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut unit = 0;
    let mut scaled = bytes as f64;
    while scaled >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{rounded} {}", SIZE_UNITS[unit])
}
