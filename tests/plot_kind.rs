use std::f64::consts::PI;

use plotdesk::data::plot_kind::{linspace, SAMPLES};
use plotdesk::{custom_plot_request, PlotColor, PlotKind, PlotStyle};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn linear_is_one_to_five() {
    let req = PlotKind::Linear.generate(&mut rng());
    assert_eq!(req.series.x(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(req.series.y(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(req.title, "Линейный график");
    assert_eq!(req.color, PlotColor::Red);
    assert_eq!(req.style, PlotStyle::Line);
}

#[test]
fn sine_spans_two_periods_each_side() {
    let req = PlotKind::Sine.generate(&mut rng());
    let x = req.series.x();
    assert_eq!(x.len(), 100);
    assert_eq!(x[0], -2.0 * PI);
    assert_eq!(x[99], 2.0 * PI);
    let step = x[1] - x[0];
    for w in x.windows(2) {
        assert!(((w[1] - w[0]) - step).abs() < 1e-12);
    }
    for (x, y) in req.series.iter() {
        assert_eq!(y, x.sin());
    }
    assert_eq!(req.title, "График синуса");
    assert_eq!(req.color, PlotColor::Green);
}

#[test]
fn formula_kinds_match_their_domains() {
    let cases = [
        (PlotKind::Cosine, -2.0 * PI, 2.0 * PI, PlotColor::Blue),
        (PlotKind::Quadratic, -10.0, 10.0, PlotColor::Magenta),
        (PlotKind::Exponential, 0.0, 10.0, PlotColor::Cyan),
        (PlotKind::Logarithmic, 0.1, 10.0, PlotColor::Yellow),
    ];
    for (kind, lo, hi, color) in cases {
        let req = kind.generate(&mut rng());
        assert_eq!(req.series.len(), SAMPLES, "{kind:?}");
        assert_eq!(req.series.x()[0], lo, "{kind:?}");
        assert_eq!(req.series.x()[SAMPLES - 1], hi, "{kind:?}");
        assert_eq!(req.color, color, "{kind:?}");
        assert_eq!(req.title, kind.title());
    }
    let q = PlotKind::Quadratic.generate(&mut rng());
    assert_eq!(q.series.y()[0], 100.0);
    let l = PlotKind::Logarithmic.generate(&mut rng());
    assert_eq!(l.series.y()[SAMPLES - 1], 10f64.ln());
}

#[test]
fn scatter_is_unit_square_markers() {
    let req = PlotKind::Scatter.generate(&mut rng());
    assert_eq!(req.style, PlotStyle::Scatter);
    assert_eq!(req.color, PlotColor::Black);
    assert_eq!(req.series.len(), 100);
    assert!(req.series.iter().all(|(x, y)| (0.0..1.0).contains(&x) && (0.0..1.0).contains(&y)));
}

#[test]
fn random_uses_fixed_x_and_seeded_y() {
    let a = PlotKind::Random.generate(&mut rng());
    let b = PlotKind::Random.generate(&mut rng());
    assert_eq!(a, b);
    assert_eq!(a.series.x(), &linspace(0.0, 10.0, 100)[..]);
    assert_eq!(a.color, PlotColor::Orange);
    let c = PlotKind::Random.generate(&mut StdRng::seed_from_u64(8));
    assert_ne!(a.series.y(), c.series.y());
}

#[test]
fn every_kind_has_equal_lengths() {
    for kind in PlotKind::ALL {
        let req = kind.generate(&mut rng());
        assert_eq!(req.series.x().len(), req.series.y().len(), "{kind:?}");
        assert!(!req.series.is_empty());
    }
}

#[test]
fn ready_made_menu_excludes_random() {
    let ready: Vec<PlotKind> = PlotKind::ALL.into_iter().filter(|k| k.is_ready_made()).collect();
    assert_eq!(ready.len(), 7);
    assert!(!ready.contains(&PlotKind::Random));
}

#[test]
fn kinds_parse_from_cli_names() {
    assert_eq!("sine".parse::<PlotKind>(), Ok(PlotKind::Sine));
    assert_eq!("LOG".parse::<PlotKind>(), Ok(PlotKind::Logarithmic));
    assert!("spiral".parse::<PlotKind>().is_err());
}

#[test]
fn custom_request_is_blue_line() {
    let req = custom_plot_request("1,2,3", "4,5,6").unwrap();
    assert_eq!(req.title, "Ваш график");
    assert_eq!(req.color, PlotColor::Blue);
    assert_eq!(req.style, PlotStyle::Line);
    assert_eq!(req.series.points(), vec![[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]);
}
