use plotdesk::{CsvExportSource, PlotDeskConfig};
use pretty_assertions::assert_eq;

#[test]
fn defaults_give_an_800x600_window() {
    let cfg = PlotDeskConfig::default();
    assert_eq!(cfg.title, "Графическое приложение");
    assert_eq!(cfg.window_size, [800.0, 600.0]);
    assert_eq!(cfg.csv_export_source, CsvExportSource::Generated);
    assert!(cfg.show_grid);
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let cfg = PlotDeskConfig {
        figure_size: [1024, 768],
        csv_export_source: CsvExportSource::Displayed,
        ..Default::default()
    };
    cfg.save(&path).unwrap();
    assert_eq!(PlotDeskConfig::load(&path).unwrap(), cfg);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "show_grid: false\ncsv_export_source: displayed\n").unwrap();
    let cfg = PlotDeskConfig::load(&path).unwrap();
    assert!(!cfg.show_grid);
    assert_eq!(cfg.csv_export_source, CsvExportSource::Displayed);
    assert_eq!(cfg.figure_size, [640, 480]);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(PlotDeskConfig::resolve(Some(&dir.path().join("absent.yaml"))).is_err());
}

#[test]
fn malformed_yaml_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    std::fs::write(&path, "figure_size: [1, two]\n").unwrap();
    let err = PlotDeskConfig::load(&path).unwrap_err();
    assert!(matches!(err, plotdesk::PlotError::Config(_)));
}
