use plotdesk::{custom_plot_request, load_image, Figure, PlotKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn has_reddish_pixel(img: &plotdesk::LoadedImage) -> bool {
    img.rgba
        .chunks_exact(4)
        .any(|p| p[0] > 200 && p[1] < 80 && p[2] < 80)
}

#[test]
fn png_round_trips_with_requested_size() {
    let req = PlotKind::Linear.generate(&mut StdRng::seed_from_u64(0));
    let dir = tempfile::tempdir().unwrap();
    let path = Figure::new(&req, 320, 240).save(dir.path().join("linear.png")).unwrap();
    let img = load_image(&path).unwrap();
    assert_eq!((img.width, img.height), (320, 240));
    assert_eq!(img.rgba.len(), 320 * 240 * 4);
    // Red line on white background.
    assert!(has_reddish_pixel(&img));
    assert_eq!(&img.rgba[..4], &[255, 255, 255, 255]);
}

#[test]
fn jpeg_is_written_for_jpg_extension() {
    let req = PlotKind::Sine.generate(&mut StdRng::seed_from_u64(0));
    let dir = tempfile::tempdir().unwrap();
    let path = Figure::new(&req, 200, 150).save(dir.path().join("sine.jpg")).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    let img = load_image(&path).unwrap();
    assert_eq!((img.width, img.height), (200, 150));
}

#[test]
fn missing_extension_saves_png() {
    let req = PlotKind::Scatter.generate(&mut StdRng::seed_from_u64(0));
    let dir = tempfile::tempdir().unwrap();
    let path = Figure::new(&req, 120, 90).save(dir.path().join("scatter")).unwrap();
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
    assert!(path.exists());
}

#[test]
fn svg_contains_title_and_data_path() {
    let req = custom_plot_request("0,1,2", "2,1,0").unwrap();
    let svg = Figure::new(&req, 400, 300).to_svg();
    assert!(svg.contains("Ваш график"));
    assert!(svg.contains("<path d=\"M"));
    assert!(svg.contains("#0000ff"));
}

#[test]
fn zero_size_figure_is_a_render_error() {
    let req = PlotKind::Linear.generate(&mut StdRng::seed_from_u64(0));
    let err = Figure::new(&req, 0, 10).render().unwrap_err();
    assert_eq!(err.kind(), plotdesk::ErrorKind::IoFailure);
}

#[test]
fn loading_a_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_image(dir.path().join("nope.png")).unwrap_err();
    assert_eq!(err.kind(), plotdesk::ErrorKind::IoFailure);
}

fn has_bluish_pixel(img: &plotdesk::LoadedImage) -> bool {
    img.rgba
        .chunks_exact(4)
        .any(|p| p[2] > 200 && p[0] < 80 && p[1] < 80)
}

#[test]
fn near_max_magnitudes_still_draw_the_line() {
    let req = custom_plot_request("-1e308,1e308", "0,1").unwrap();
    let fig = Figure::new(&req, 320, 240);
    let svg = fig.to_svg();
    assert!(!svg.contains("NaN"));
    assert!(!svg.contains("inf"));
    let dir = tempfile::tempdir().unwrap();
    let path = fig.save(dir.path().join("huge.png")).unwrap();
    assert!(has_bluish_pixel(&load_image(&path).unwrap()));
}

#[test]
fn oversized_image_is_scaled_to_texture_limit() {
    let req = PlotKind::Linear.generate(&mut StdRng::seed_from_u64(0));
    let dir = tempfile::tempdir().unwrap();
    let path = Figure::new(&req, 400, 100).save(dir.path().join("wide.png")).unwrap();
    let img = load_image(&path).unwrap();

    let ([w, h], rgba) = img.fit_within(200);
    assert_eq!((w, h), (200, 50));
    assert_eq!(rgba.len(), 200 * 50 * 4);

    let ([w, h], rgba) = img.fit_within(2048);
    assert_eq!((w, h), (400, 100));
    assert_eq!(rgba, img.rgba);
}
