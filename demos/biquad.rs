//! Renders the pole-zero map of a small resonator biquad, once in the compact
//! square view and once with the coordinate legend, and writes both figures
//! to interactive HTML files under `temp/`.

use num::complex::Complex64;
use plotly::{color::NamedColor, Plot};
use pzmap::{plot_pz, Zpk};

fn main() {
    simple_logger::init_with_level(log::Level::Debug).unwrap();
    std::fs::create_dir_all("temp").unwrap();

    // a zero at each band edge, a resonant conjugate pole pair inside the
    // unit circle
    let h = Zpk::new(
        vec![Complex64::new(1.0, 0.0), Complex64::new(-1.0, 0.0)],
        vec![Complex64::new(0.5, 0.3), Complex64::new(0.5, -0.3)],
        1.0,
    );

    let mut compact = Plot::new();
    plot_pz(&mut compact, &h, NamedColor::Blue, 5, false).unwrap();
    compact.write_html("temp/biquad_pz.html");

    let mut listed = Plot::new();
    plot_pz(&mut listed, &h, (NamedColor::Red, NamedColor::Blue), 5, true).unwrap();
    listed.write_html("temp/biquad_pz_listed.html");
}
