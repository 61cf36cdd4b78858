use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::models::{Report, ReportId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub count: usize,
    pub path: Option<PathBuf>,
    pub message: String,
}

/// Hand-off point for reports leaving the dashboard. Callers guarantee
/// `reports` is non-empty.
pub trait Downloader {
    fn deliver(&self, reports: &[&Report]) -> Result<DownloadOutcome>;

    /// A single report saved under its own file name.
    fn deliver_one(&self, report: &Report) -> Result<DownloadOutcome> {
        self.deliver(&[report])
    }
}

/// Acknowledges the request without producing an artifact.
pub struct StubDownloader;

impl Downloader for StubDownloader {
    fn deliver(&self, reports: &[&Report]) -> Result<DownloadOutcome> {
        let count = reports.len();
        Ok(DownloadOutcome {
            count,
            path: None,
            message: format!("Initiating download for {count} selected reports."),
        })
    }

    fn deliver_one(&self, report: &Report) -> Result<DownloadOutcome> {
        Ok(DownloadOutcome {
            count: 1,
            path: None,
            message: format!("Initiating download of {}.", report.file_name()),
        })
    }
}

#[derive(Serialize)]
struct ManifestRow<'a> {
    id: ReportId,
    name: &'a str,
    date: &'a str,
    status: &'a str,
    url: &'a str,
    file_name: String,
}

/// Writes a CSV manifest of report URLs for an external packaging service
/// to pick up. Existing manifests are never overwritten.
pub struct ManifestDownloader {
    dir: PathBuf,
}

impl ManifestDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create `reports-<stamp>.csv`, or `reports-<stamp>-<n>.csv` when that
    /// name is already taken.
    fn create_manifest(&self) -> Result<(PathBuf, File)> {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let mut n = 0u32;
        loop {
            let name = if n == 0 {
                format!("reports-{stamp}.csv")
            } else {
                format!("reports-{stamp}-{n}.csv")
            };
            let path = self.dir.join(name);
            match create_new(&path) {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => n += 1,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

fn create_new(path: &Path) -> io::Result<File> {
    OpenOptions::new().write(true).create_new(true).open(path)
}

impl Downloader for ManifestDownloader {
    fn deliver(&self, reports: &[&Report]) -> Result<DownloadOutcome> {
        std::fs::create_dir_all(&self.dir)?;
        let (path, file) = self.create_manifest()?;
        let mut wtr = csv::Writer::from_writer(file);
        for r in reports {
            wtr.serialize(ManifestRow {
                id: r.id(),
                name: r.name(),
                date: r.date(),
                status: r.status().as_str(),
                url: r.url(),
                file_name: r.file_name(),
            })?;
        }
        wtr.flush()?;
        let count = reports.len();
        Ok(DownloadOutcome {
            count,
            message: format!("Wrote {count} reports to {}", path.display()),
            path: Some(path),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::generate_reports;

    #[test]
    fn test_stub_reports_count() {
        let reports = generate_reports(3, 2024);
        let refs: Vec<&Report> = reports.iter().collect();
        let out = StubDownloader.deliver(&refs).unwrap();
        assert_eq!(out.count, 3);
        assert!(out.path.is_none());
        assert_eq!(out.message, "Initiating download for 3 selected reports.");
    }

    #[test]
    fn test_stub_single_report_names_file() {
        let reports = generate_reports(3, 2024);
        let out = StubDownloader.deliver_one(&reports[1]).unwrap();
        assert_eq!(out.message, "Initiating download of Report-2.pdf.");
    }

    #[test]
    fn test_manifest_written_with_urls() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out");
        let reports = generate_reports(4, 2024);
        let refs: Vec<&Report> = reports.iter().filter(|r| r.id() % 2 == 0).collect();

        let out = ManifestDownloader::new(&target).deliver(&refs).unwrap();
        assert_eq!(out.count, 2);
        let path = out.path.unwrap();
        assert!(path.starts_with(&target));

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "id,name,date,status,url,file_name");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("2,Operations Report 2,"));
        assert!(lines[2].ends_with("/reports/report4.pdf,Report-4.pdf"));
    }

    #[test]
    fn test_back_to_back_manifests_do_not_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let downloader = ManifestDownloader::new(dir.path());
        let reports = generate_reports(4, 2024);

        let first = downloader.deliver(&[&reports[0], &reports[1]]).unwrap();
        let second = downloader.deliver(&[&reports[2], &reports[3]]).unwrap();
        let third = downloader.deliver_one(&reports[0]).unwrap();

        let first = first.path.unwrap();
        let second = second.path.unwrap();
        assert_ne!(first, second);
        assert_ne!(second, third.path.unwrap());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 3);

        let content = std::fs::read_to_string(first).unwrap();
        assert!(content.contains("/reports/report1.pdf"));
        assert!(!content.contains("/reports/report3.pdf"));
    }
}
