//! The pole-zero map renderer.

use itertools::{Itertools, MinMaxResult};
use num::complex::Complex64;
use plotly::{
    color::Color,
    common::{Font, Marker, MarkerSymbol, Mode, Title},
    layout::{Axis, ItemSizing, Layout, Legend},
    Plot, Scatter,
};

use crate::{
    util::complex::{clean_for_display, legend_label, round_to},
    Error, ToZpk,
};

/// Samples along the unit circle.
const CIRCLE_SAMPLES: usize = 100;

/// Fraction of the data span added on each side when deriving axis limits.
const AUTOSCALE_MARGIN: f64 = 0.05;

/// Marker colors for the pole and zero series.
///
/// A single color is applied to both series; a pair assigns one color to the
/// poles and another to the zeros. Call sites usually rely on the `From`
/// conversions and pass a bare color or a `(poles, zeros)` tuple.
#[derive(Clone, Debug)]
pub enum ColorSpec<C: Color + Clone> {
    Single(C),
    Pair { poles: C, zeros: C },
}

impl<C: Color + Clone> ColorSpec<C> {
    /// `(pole color, zero color)`
    fn resolve(self) -> (C, C) {
        match self {
            Self::Single(c) => (c.clone(), c),
            Self::Pair { poles, zeros } => (poles, zeros),
        }
    }
}

impl<C: Color + Clone> From<C> for ColorSpec<C> {
    fn from(color: C) -> Self {
        Self::Single(color)
    }
}

impl<C: Color + Clone> From<(C, C)> for ColorSpec<C> {
    fn from((poles, zeros): (C, C)) -> Self {
        Self::Pair { poles, zeros }
    }
}

/// Plot the poles and zeros of a transfer function on the complex plane,
/// together with the unit circle.
///
/// Poles are drawn as `x` markers and zeros as open circles, at their
/// (real, imaginary) coordinates. Roots are rounded to 5 decimal places for
/// display and numerically-real roots are collapsed onto the real axis.
///
/// With `show_list` unset the view is fixed to the square
/// `[-1.1, 1.1] x [-1.1, 1.1]` around the unit circle. With it set, the
/// horizontal range is widened to the right to make room for a legend that
/// lists the exact coordinates of every root in the upper half-plane, one
/// entry per complex-conjugate pair.
///
/// All drawing happens on the `plot` handle passed in; nothing else is
/// touched. Showing, embedding or saving the figure is the caller's business.
///
/// # Errors
/// Propagates [`Error::Conversion`] from the transfer function's [`ToZpk`]
/// implementation unchanged. Malformed style values do not fail here; they
/// surface when plotly renders the figure.
pub fn plot_pz<H, C>(
    plot: &mut Plot,
    h: &H,
    color: impl Into<ColorSpec<C>>,
    marker_size: usize,
    show_list: bool,
) -> Result<(), Error>
where
    H: ToZpk + ?Sized,
    C: Color + Clone,
{
    let (zeros, poles, _gain) = h.to_zpk()?.into_parts();
    let poles = clean_for_display(&poles);
    let zeros = clean_for_display(&zeros);
    log::debug!("plotting {} poles and {} zeros", poles.len(), zeros.len());

    let (pole_color, zero_color) = color.into().resolve();
    let circle = unit_circle();

    if show_list {
        add_listed_series(plot, &poles, MarkerSymbol::X, &pole_color, marker_size);
        if !zeros.is_empty() {
            add_listed_series(
                plot,
                &zeros,
                MarkerSymbol::CircleOpen,
                &zero_color,
                marker_size,
            );
        }
    } else {
        add_series(plot, &poles, MarkerSymbol::X, pole_color, marker_size);
        if !zeros.is_empty() {
            add_series(
                plot,
                &zeros,
                MarkerSymbol::CircleOpen,
                zero_color,
                marker_size,
            );
        }
    }

    let (circle_re, circle_im) = split_re_im(&circle);
    plot.add_trace(
        Scatter::new(circle_re, circle_im)
            .mode(Mode::Lines)
            .name("unit circle")
            .show_legend(false),
    );

    // ranges are always set explicitly, so nothing rescales the data view
    // after the fact
    let ((x1, x2), (y1, y2)) = if show_list {
        let ((x1, x2), y) = autoscale_bounds(&[&poles, &zeros, &circle]);
        ((x1, widen_for_legend(x1, x2)), y)
    } else {
        ((-1.1, 1.1), (-1.1, 1.1))
    };

    let mut layout = Layout::new()
        .x_axis(axis("Real", x1, x2))
        // scaleanchor alone gives equal aspect; plotly defaults the ratio to 1
        .y_axis(axis("Imag", y1, y2).scale_anchor("x"))
        .show_legend(show_list);
    if show_list {
        layout = layout.legend(
            Legend::new()
                .title(Title::with_text("Poles (x) and zeros (o)"))
                .font(Font::new().size(10))
                .item_sizing(ItemSizing::Constant),
        );
    }
    plot.set_layout(layout);
    Ok(())
}

fn marker<C: Color + Clone>(symbol: MarkerSymbol, color: &C, size: usize) -> Marker {
    Marker::new().symbol(symbol).size(size).color(color.clone())
}

/// One marker series for all roots, kept out of the legend.
fn add_series<C: Color + Clone>(
    plot: &mut Plot,
    roots: &[Complex64],
    symbol: MarkerSymbol,
    color: C,
    size: usize,
) {
    let (re, im) = split_re_im(roots);
    plot.add_trace(
        Scatter::new(re, im)
            .mode(Mode::Markers)
            .marker(marker(symbol, &color, size))
            .show_legend(false),
    );
}

/// One named single-point trace per root in the upper half-plane, so each
/// complex-conjugate pair gets exactly one legend entry. Lower half-plane
/// roots stay plotted but unlisted; a root with strictly negative imaginary
/// part and no conjugate counterpart is silently absent from the legend.
fn add_listed_series<C: Color + Clone>(
    plot: &mut Plot,
    roots: &[Complex64],
    symbol: MarkerSymbol,
    color: &C,
    size: usize,
) {
    for &z in roots.iter().filter(|z| z.im >= 0.0) {
        plot.add_trace(
            Scatter::new(vec![z.re], vec![z.im])
                .mode(Mode::Markers)
                .marker(marker(symbol.clone(), color, size))
                .name(&legend_label(z))
                .show_legend(true),
        );
    }

    let rest = roots.iter().copied().filter(|z| z.im < 0.0).collect_vec();
    if !rest.is_empty() {
        let (re, im) = split_re_im(&rest);
        plot.add_trace(
            Scatter::new(re, im)
                .mode(Mode::Markers)
                .marker(marker(symbol, color, size))
                .show_legend(false),
        );
    }
}

fn axis(label: &str, lo: f64, hi: f64) -> Axis {
    Axis::new()
        .title(Title::with_text(label))
        .range(vec![lo, hi])
        .show_grid(true)
        .zero_line(false)
}

/// `exp(i 2πt)` for `t` evenly spaced over `[0, 1]`, endpoints included.
fn unit_circle() -> Vec<Complex64> {
    (0..CIRCLE_SAMPLES)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / (CIRCLE_SAMPLES - 1) as f64;
            Complex64::from_polar(1.0, std::f64::consts::TAU * t)
        })
        .collect()
}

fn split_re_im(zs: &[Complex64]) -> (Vec<f64>, Vec<f64>) {
    zs.iter().map(|z| (z.re, z.im)).unzip()
}

/// Axis limits covering every plotted point, padded by [`AUTOSCALE_MARGIN`]
/// of the span on each side.
fn autoscale_bounds(series: &[&[Complex64]]) -> ((f64, f64), (f64, f64)) {
    let points = || series.iter().flat_map(|s| s.iter().copied());
    (
        padded_extent(points().map(|z| z.re)),
        padded_extent(points().map(|z| z.im)),
    )
}

fn padded_extent(vs: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = match vs.minmax_by(|a, b| a.total_cmp(b)) {
        // unreachable as long as the unit circle is part of the plot, but
        // a degenerate extent is a safer fallback than a panic
        MinMaxResult::NoElements => (-1.0, 1.0),
        MinMaxResult::OneElement(v) => (v, v),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    };
    let pad = (hi - lo) * AUTOSCALE_MARGIN;
    (lo - pad, hi + pad)
}

/// Widen the right edge so the side legend does not overlap the data: the
/// new width is 1.48x the old one, anchored at the left edge and rounded to
/// one decimal place.
fn widen_for_legend(x1: f64, x2: f64) -> f64 {
    round_to((x2 - x1) * 1.48 + x1, 1)
}
