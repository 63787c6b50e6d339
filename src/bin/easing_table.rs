use std::{error::Error, io::Write};

use game_math::easing::*;
use game_math::Float;
use tabwriter::TabWriter;

const CURVES: &[(&str, fn(Float) -> Float)] = &[
    ("quadratic_ease_in", quadratic_ease_in),
    ("quadratic_ease_out", quadratic_ease_out),
    ("quadratic_ease_in_out", quadratic_ease_in_out),
    ("cubic_ease_in", cubic_ease_in),
    ("cubic_ease_out", cubic_ease_out),
    ("cubic_ease_in_out", cubic_ease_in_out),
    ("quartic_ease_in", quartic_ease_in),
    ("quartic_ease_out", quartic_ease_out),
    ("quartic_ease_in_out", quartic_ease_in_out),
    ("quintic_ease_in", quintic_ease_in),
    ("quintic_ease_out", quintic_ease_out),
    ("quintic_ease_in_out", quintic_ease_in_out),
    ("sine_ease_in", sine_ease_in),
    ("sine_ease_out", sine_ease_out),
    ("sine_ease_in_out", sine_ease_in_out),
    ("circular_ease_in", circular_ease_in),
    ("circular_ease_out", circular_ease_out),
    ("circular_ease_in_out", circular_ease_in_out),
    ("exponential_ease_in", exponential_ease_in),
    ("exponential_ease_out", exponential_ease_out),
    ("exponential_ease_in_out", exponential_ease_in_out),
    ("elastic_ease_in", elastic_ease_in),
    ("elastic_ease_out", elastic_ease_out),
    ("elastic_ease_in_out", elastic_ease_in_out),
    ("back_ease_in", back_ease_in),
    ("back_ease_out", back_ease_out),
    ("back_ease_in_out", back_ease_in_out),
    ("bounce_ease_in", bounce_ease_in),
    ("bounce_ease_out", bounce_ease_out),
    ("bounce_ease_in_out", bounce_ease_in_out),
];

fn main() -> Result<(), Box<dyn Error>> {
    let mut tw = TabWriter::new(std::io::stdout()).padding(2).minwidth(8);

    writeln!(tw, "Curve\tt=0.00\tt=0.25\tt=0.50\tt=0.75\tt=1.00")?;
    for (name, curve) in CURVES {
        writeln!(
            tw,
            "{}\t{:+.4}\t{:+.4}\t{:+.4}\t{:+.4}\t{:+.4}",
            name,
            curve(0.0),
            curve(0.25),
            curve(0.5),
            curve(0.75),
            curve(1.0)
        )?;
    }
    tw.flush()?;
    Ok(())
}
