use corrdiff::core::io::acf::write_correlations_to_path;
use corrdiff::core::io::colvars::{ColvarsFile, ColvarsOptions};
use corrdiff::core::io::traits::SeriesFile;
use corrdiff::engine::config::AnalysisConfigBuilder;
use corrdiff::engine::progress::ProgressReporter;
use corrdiff::workflows::analyze;
use std::fmt::Write as _;
use std::fs;
use tempfile::TempDir;

fn f64_approx_equal(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() < tolerance
}

/// Writes a colvars trajectory whose second column carries `values` and whose first
/// column is a decoy.
fn write_trajectory(dir: &TempDir, values: &[f64]) -> std::path::PathBuf {
    let mut text = String::from("#       step        decoy                  distance\n");
    for (step, value) in values.iter().enumerate() {
        writeln!(
            text,
            "{:>15}{:>22.14e}{:>23.14e} {:>23.14e}",
            step,
            -1.0,
            value,
            0.0
        )
        .unwrap();
    }
    let path = dir.path().join("colvars.traj");
    fs::write(&path, text).unwrap();
    path
}

fn restrained_coordinate(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            12.0 + 0.8 * (0.07 * t).sin() + 0.3 * (0.013 * t + 0.4).cos()
                + 0.1 * (-0.001 * t).exp()
        })
        .collect()
}

#[test]
fn trajectory_file_runs_through_the_whole_pipeline() {
    let dir = TempDir::new().unwrap();
    let values = restrained_coordinate(3000);
    let path = write_trajectory(&dir, &values);

    let (series, metadata) =
        ColvarsFile::read_from_path(&path, &ColvarsOptions { field: 2 }).unwrap();
    assert_eq!(series.len(), values.len());
    assert_eq!(metadata.comment_lines, 1);
    assert_eq!(metadata.truncated_at, None);
    for (read, written) in series.iter().zip(&values) {
        assert!(f64_approx_equal(*read, *written, 1e-12));
    }

    let config = AnalysisConfigBuilder::new()
        .timestep(2.0)
        .max_lag(400)
        .build()
        .unwrap();
    let report = analyze::run(&series, &config, &ProgressReporter::new()).unwrap();

    assert_eq!(report.preprocessed.len(), 2998);
    assert!(f64_approx_equal(report.correlations.acf[0], report.correlations.var, 1e-9));
    assert!(report.direct.integral != 0.0);
    assert!(f64_approx_equal(
        report.direct.diffusion_cm2_per_s(),
        report.direct.diffusion * 0.1,
        1e-15
    ));
    assert!(report.minimum.s_min >= config.search.s_lower);
    assert!(report.minimum.s_min <= config.search.s_upper);
    assert_eq!(report.sweep.s_values.len(), 100);
    assert!(f64_approx_equal(
        *report.sweep.s_values.last().unwrap(),
        5.0 * report.minimum.s_min,
        1e-12
    ));

    let acf_path = dir.path().join("acf.dat");
    write_correlations_to_path(&acf_path, &report.correlations.acf, &report.correlations.vacf)
        .unwrap();
    let written = fs::read_to_string(&acf_path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines.len(), 400);
    assert!(lines[0].starts_with("0 "));
    assert_eq!(lines[399].split(' ').count(), 3);

    // The input trajectory is left untouched.
    assert_eq!(
        ColvarsFile::read_from_path(&path, &ColvarsOptions { field: 2 })
            .unwrap()
            .0
            .len(),
        3000
    );
}

#[test]
fn golden_oscillation_gives_hand_computed_correlations() {
    let series: Vec<f64> = [0.0, 1.0, 2.0, 1.0, 0.0, -1.0, -2.0, -1.0]
        .iter()
        .cycle()
        .take(18)
        .copied()
        .collect();
    let preprocessed = analyze::preprocess(&series, 1.0).unwrap();
    // Two full periods remain once the last two samples are dropped.
    assert_eq!(preprocessed.len(), 16);

    let correlations = analyze::correlate(&preprocessed, 5).unwrap();
    let shift = preprocessed.mean;
    let positions: Vec<f64> = series[..16].iter().map(|y| y - shift).collect();
    assert_eq!(preprocessed.positions, positions);
    assert!(f64_approx_equal(
        correlations.acf[0],
        positions.iter().map(|y| y * y).sum::<f64>() / 16.0,
        1e-12
    ));

    let direct = analyze::direct_estimate(&correlations, 1.0, None).unwrap();
    let acf = &correlations.acf;
    let expected = 0.5 * (acf[0] + acf[4]) + acf[1] + acf[2] + acf[3];
    assert!(f64_approx_equal(direct.integral, expected, 1e-12));
}

#[test]
fn malformed_line_truncates_the_series() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("raw.dat");
    fs::write(&path, "# raw\n1.0\n2.0\n\n3.0\nnot-a-number\n4.0\n").unwrap();

    let (series, metadata) =
        corrdiff::core::io::raw::RawFile::read_from_path(&path, &()).unwrap();
    assert_eq!(series, vec![1.0, 2.0, 3.0]);
    assert_eq!(metadata.truncated_at, Some(6));
}
