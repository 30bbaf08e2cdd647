//! ANSI terminal rendering of nets.

use flatcube_draw::{Net, Palette};
use owo_colors::OwoColorize;

/// Prints `net` as two-character color blocks on a truecolor terminal.
pub fn print_net(net: &Net, palette: &Palette) {
    for row in 0..net.rows() {
        let mut line = String::new();
        for col in 0..net.cols() {
            let cell = net.get(row, col).unwrap_or_default();
            let [r, g, b] = palette.color(cell).rgb;
            line.push_str(&"  ".on_truecolor(r, g, b).to_string());
        }
        println!("{line}");
    }
}
