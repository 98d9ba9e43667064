//! Integration tests for loading labels from files and driving a session
//! over them.

use std::fs;
use tempfile::TempDir;

use ahp_engine::adapters::FileLabelSource;
use ahp_engine::domain::ahp::{AhpSession, DerivationMethod, MatrixTarget};
use ahp_engine::ports::{LabelSource, LabelSourceError};

fn source(dir: &TempDir, alternatives: &str, criteria: &str) -> FileLabelSource {
    let alternatives_path = dir.path().join("alternatives.txt");
    let criteria_path = dir.path().join("criteria.txt");
    fs::write(&alternatives_path, alternatives).unwrap();
    fs::write(&criteria_path, criteria).unwrap();
    FileLabelSource::new(alternatives_path, criteria_path)
}

#[test]
fn loaded_labels_drive_a_full_session() {
    let temp_dir = TempDir::new().unwrap();
    let hierarchy = source(
        &temp_dir,
        "PS5\nXbox\nSwitch\n",
        "Price\nGames\n  Exclusives\n  Backlog\n",
    )
    .load()
    .unwrap();

    let mut session = AhpSession::start(hierarchy);
    assert_eq!(
        session.pending_targets(),
        vec![
            MatrixTarget::alternatives("Price"),
            MatrixTarget::alternatives("Exclusives"),
            MatrixTarget::alternatives("Backlog"),
            MatrixTarget::Criteria,
            MatrixTarget::sub_criteria("Games"),
        ]
    );

    // Switch is cheapest, PS5 has the exclusives, Xbox the backlog.
    let judgments = [
        ("Switch", "PS5", 5),
        ("Switch", "Xbox", 4),
        ("Xbox", "PS5", 2),
        ("PS5", "Xbox", 5),
        ("PS5", "Switch", 3),
        ("Switch", "Xbox", 2),
        ("Xbox", "PS5", 3),
        ("Xbox", "Switch", 5),
        ("PS5", "Switch", 2),
        ("Games", "Price", 3),
        ("Exclusives", "Backlog", 2),
    ];
    for (first, second, value) in judgments {
        session.judge(first, second, value).unwrap();
    }

    assert!(session.is_complete());
    let report = session.report(DerivationMethod::GeometricMean, 1.0 / 3.0).unwrap();
    let total: f64 = report.ranking.iter().map(|r| r.score).sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert_eq!(report.criterion_weights.len(), 3);
    assert_eq!(
        report.criterion_weights[1].parent.as_deref(),
        Some("Games")
    );
}

#[test]
fn orphan_sub_criterion_reports_its_line() {
    let temp_dir = TempDir::new().unwrap();
    let err = source(&temp_dir, "A\nB\n", "\n    Durability\nPrice\n")
        .load()
        .unwrap_err();

    assert!(matches!(err, LabelSourceError::OrphanSubCriterion { line: 2 }));
}

#[test]
fn sub_criterion_colliding_with_criterion_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let err = source(&temp_dir, "A\nB\n", "Price\nQuality\n  Price\n")
        .load()
        .unwrap_err();

    assert!(matches!(err, LabelSourceError::Hierarchy(_)));
}
