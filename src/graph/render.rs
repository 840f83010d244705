use std::fmt;
use std::io::{self, Write};

use super::VertexId;

/// Written instead of a path when the destination was not reached.
pub const NO_PATH: &str = "<no path>";

const ARROW: &str = " --> ";

/// Writes `path` as `a --> b --> c`, without a line terminator.
pub(super) fn write_route<W: Write>(out: &mut W, path: &[VertexId]) -> io::Result<()> {
    let mut vertices = path.iter();
    if let Some(first) = vertices.next() {
        write!(out, "{first}")?;
    }
    for vertex in vertices {
        write!(out, "{ARROW}{vertex}")?;
    }
    Ok(())
}

pub(super) fn write_no_path<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{NO_PATH}")
}

/// Significant digits kept when printing a distance.
const PRECISION: usize = 6;

/// Displays a distance rounded to six significant digits, trailing zeros
/// dropped, switching to `1.5e+07` notation for very large or small values.
pub(super) struct Distance(pub f64);

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("nan");
        }
        if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-inf" } else { "inf" });
        }

        // The exponent has to be taken after rounding: 999999.5 becomes 1e+06.
        let scientific = format!("{:.*e}", PRECISION - 1, value);
        let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
        let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;

        if exponent < -4 || exponent >= PRECISION as i32 {
            let sign = if exponent < 0 { '-' } else { '+' };
            write!(
                f,
                "{}e{sign}{:02}",
                trim_fraction(mantissa),
                exponent.unsigned_abs()
            )
        } else {
            let decimals = (PRECISION as i32 - 1 - exponent) as usize;
            let fixed = format!("{value:.decimals$}");
            f.write_str(trim_fraction(&fixed))
        }
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
