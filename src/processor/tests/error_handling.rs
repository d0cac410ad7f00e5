//! Error handling integration tests

use crate::config::WindsConfig;
use crate::error::WindsError;
use crate::processor::BulletinProcessor;
use std::fs;
use tempfile::TempDir;

#[tokio::test]
async fn test_nonexistent_input_path() {
    let temp_dir = TempDir::new().unwrap();
    let nonexistent_path = temp_dir.path().join("nonexistent");

    let result = BulletinProcessor::new(nonexistent_path.clone());

    match result.unwrap_err() {
        WindsError::InputNotFound { path } => {
            assert_eq!(path, nonexistent_path);
        }
        other => panic!("Expected InputNotFound error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_input_path_is_a_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("bulletin.txt");
    fs::write(&file_path, "METAR EGLL 0900Z 24015KT=").unwrap();

    let result = BulletinProcessor::new(file_path);
    assert!(matches!(result, Err(WindsError::InputNotFound { .. })));
}

#[tokio::test]
async fn test_invalid_station_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config = WindsConfig::default().with_station("eg ll");

    let result = BulletinProcessor::with_config(temp_dir.path().to_path_buf(), config);
    assert!(matches!(result, Err(WindsError::Configuration { .. })));
}

#[tokio::test]
async fn test_malformed_bulletins_are_skipped_silently() {
    let temp_dir = TempDir::new().unwrap();
    let garbage = "\
this is not a bulletin
METAR EGLL 010850Z 24015G30KT 9999=
METAR EGLL 010920Z 9999 24015KT=
METAR EGLL 010950Z 24015KT
";
    fs::write(temp_dir.path().join("garbage.txt"), garbage).unwrap();

    let config = WindsConfig {
        show_progress: false,
        ..Default::default()
    };
    let processor = BulletinProcessor::with_config(temp_dir.path().to_path_buf(), config).unwrap();
    let report = processor.process().await.unwrap();

    assert_eq!(report.counts.total(), 0);
    assert_eq!(report.stats.files_processed, 1);
    assert_eq!(report.stats.reports_found, 2);
    assert_eq!(report.stats.wind_tokens, 0);
}

#[cfg(unix)]
#[tokio::test]
async fn test_dangling_symlink_is_skipped() {
    use std::os::unix::fs::symlink;

    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("ok.txt"), "METAR EGLL 0900Z 24015KT=").unwrap();
    symlink(
        temp_dir.path().join("missing-target"),
        temp_dir.path().join("broken.txt"),
    )
    .unwrap();

    for recursive in [false, true] {
        let config = WindsConfig {
            show_progress: false,
            recursive,
            ..Default::default()
        };
        let processor =
            BulletinProcessor::with_config(temp_dir.path().to_path_buf(), config).unwrap();
        let report = processor.process().await.unwrap();

        assert_eq!(report.stats.files_processed, 1);
        assert_eq!(report.counts.total(), 1);
    }
}
