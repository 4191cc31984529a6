use std::env;
use std::fs;

use cover::{builtin, Options};

fn main() {
    // Pass a path to scan a LICENSE file; the bundled sample runs otherwise.
    let input = match env::args().nth(1) {
        Some(path) => fs::read(&path).expect("file path invalid"),
        None => b"This project is dual-licensed. See \
                  https://opensource.org/licenses/MIT and \
                  https://www.gnu.org/licenses/gpl-3.0.html for the terms."
            .to_vec(),
    };

    match builtin().cover(&input, Options::default()) {
        Some(coverage) => {
            println!("coverage: {:.1}%", coverage.percent);
            for m in &coverage.matches {
                let via = if m.is_url { "url" } else { "text" };
                println!(
                    "  {} ({}) {:.1}% via {} at bytes {}..{}",
                    m.name, m.kind, m.percent, via, m.start, m.end
                );
            }
        }
        None => println!("no known license found"),
    }
}
