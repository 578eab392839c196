use ::hgmatch::config::Settings;
use ::hgmatch::{Matrix, MatrixDisplay, AsMatrixRef};
use ::pretty_assertions::assert_eq;
use ::std::io::Write;

#[test]
fn load_and_print_with_settings() {
    let _ = ::env_logger::try_init();
    let dir = ::tempdir::TempDir::new("hgmatch").unwrap();
    let path = dir.path().join("settings.yaml");
    {
        let mut file = ::std::fs::File::create(&path).unwrap();
        writeln!(file, "symmetry-eps: 0.01").unwrap();
        writeln!(file, "print:").unwrap();
        writeln!(file, "  precision: 1").unwrap();
    }

    let settings = Settings::load(&path).unwrap();
    assert_eq!(settings.symmetry_eps, 0.01);

    let m = Matrix::from([[1.0, 2.004], [2.0, 1.0]]);
    assert_eq!(::hgmatch::is_symmetric_eps(&m, settings.symmetry_eps), Ok(true));

    let display = MatrixDisplay::new(m.as_matrix_ref(), settings.print_settings());
    assert_eq!(display.to_string(), "1.0 2.0 \n2.0 1.0 \n\n");
}

#[test]
fn missing_file_is_an_error() {
    let dir = ::tempdir::TempDir::new("hgmatch").unwrap();
    let err = Settings::load(dir.path().join("nope.yaml")).unwrap_err();
    assert!(err.to_string().contains("could not open settings file"));
}

#[test]
fn invalid_eps_is_an_error() {
    let dir = ::tempdir::TempDir::new("hgmatch").unwrap();
    let path = dir.path().join("settings.yaml");
    ::std::fs::write(&path, "symmetry-eps: -1.0\n").unwrap();
    assert!(Settings::load(&path).is_err());
}
