use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use crate::errors::BoardError;
use crate::models::job::Job;

/// Reads the job collection from a JSON file. Order in the file is the order
/// of the board.
pub async fn load_jobs(path: &Path) -> Result<Vec<Job>, BoardError> {
    info!("Loading job data from {}", path.display());

    let raw = tokio::fs::read(path)
        .await
        .map_err(|source| BoardError::DataRead {
            path: path.to_path_buf(),
            source,
        })?;

    let jobs = parse_jobs(&raw).map_err(|e| match e {
        ParseFailure::Json(source) => BoardError::DataParse {
            path: path.to_path_buf(),
            source,
        },
        ParseFailure::DuplicateId(id) => BoardError::DuplicateJobId(id),
    })?;

    info!("Loaded {} jobs", jobs.len());
    Ok(jobs)
}

enum ParseFailure {
    Json(serde_json::Error),
    DuplicateId(u32),
}

fn parse_jobs(raw: &[u8]) -> Result<Vec<Job>, ParseFailure> {
    let jobs: Vec<Job> = serde_json::from_slice(raw).map_err(ParseFailure::Json)?;

    let mut seen = HashSet::with_capacity(jobs.len());
    for job in &jobs {
        if !seen.insert(job.id) {
            return Err(ParseFailure::DuplicateId(job.id));
        }
    }

    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TWO_JOBS: &str = r#"[
        {"id": 1, "company": "Photosnap", "logo": "./images/photosnap.svg", "new": true,
         "featured": true, "position": "Senior Frontend Developer", "role": "Frontend",
         "level": "Senior", "postedAt": "1d ago", "contract": "Full Time",
         "location": "USA Only", "languages": ["HTML", "CSS", "JavaScript"], "tools": []},
        {"id": 2, "company": "Manage", "logo": "./images/manage.svg", "new": true,
         "featured": true, "position": "Fullstack Developer", "role": "Fullstack",
         "level": "Midweight", "postedAt": "1d ago", "contract": "Part Time",
         "location": "Remote", "languages": ["Python"], "tools": ["React"]}
    ]"#;

    fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_loads_jobs_in_file_order() {
        let file = write_fixture(TWO_JOBS);
        let jobs = load_jobs(file.path()).await.unwrap();
        assert_eq!(jobs.iter().map(|j| j.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(jobs[1].tools, vec!["React"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_jobs(&dir.path().join("nope.json")).await.unwrap_err();
        assert!(matches!(err, BoardError::DataRead { .. }));
    }

    #[tokio::test]
    async fn test_missing_field_is_parse_error() {
        let file = write_fixture(r#"[{"id": 1, "company": "Photosnap"}]"#);
        let err = load_jobs(file.path()).await.unwrap_err();
        assert!(matches!(err, BoardError::DataParse { .. }));
    }

    #[tokio::test]
    async fn test_duplicate_ids_rejected() {
        let duplicated = TWO_JOBS.replace("\"id\": 2", "\"id\": 1");
        let file = write_fixture(&duplicated);
        let err = load_jobs(file.path()).await.unwrap_err();
        assert!(matches!(err, BoardError::DuplicateJobId(1)));
    }

    #[test]
    fn test_empty_collection_is_valid() {
        assert!(matches!(parse_jobs(b"[]"), Ok(jobs) if jobs.is_empty()));
    }
}
