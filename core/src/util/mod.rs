use crate::errors::{GraphPrepError, Result};
use std::path::{Path, PathBuf};

#[cfg(test)]
pub(crate) mod example_graphs;

/// Derive the path of an output file from the input file name.
///
/// The result is `<output_dir>/<stem>_<suffix>` where `<stem>` is the last
/// component of `input` without its final extension, e.g. `data/web.txt`
/// with suffix `WC.inf` becomes `<output_dir>/web_WC.inf`.
pub fn output_path(input: &Path, output_dir: &Path, suffix: &str) -> Result<PathBuf> {
    let stem = input
        .file_stem()
        .ok_or_else(|| GraphPrepError::NoFileName(input.to_path_buf()))?;
    let mut file_name = stem.to_os_string();
    file_name.push("_");
    file_name.push(suffix);
    Ok(output_dir.join(file_name))
}

/// Format a number like the `%.<precision>g` conversion of C's `printf`.
///
/// Uses scientific notation if the decimal exponent is less than -4 or not
/// less than the precision, fixed notation otherwise. Trailing zeros and a
/// trailing decimal point are removed in both cases.
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);
    if value.is_nan() {
        return "nan".to_string();
    } else if value.is_infinite() {
        return if value > 0.0 {
            "inf".to_string()
        } else {
            "-inf".to_string()
        };
    } else if value == 0.0 {
        return if value.is_sign_negative() {
            "-0".to_string()
        } else {
            "0".to_string()
        };
    }

    // The exponent must be taken after rounding to the requested precision
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        let fixed = format!("{:.*}", decimals, value);
        trim_fraction(&fixed).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_strips_directories_and_extension() {
        assert_eq!(
            PathBuf::from("out/web_WC.inf"),
            output_path(Path::new("data/graphs/web.txt"), Path::new("out"), "WC.inf").unwrap()
        );
        assert_eq!(
            PathBuf::from("./edges_directed.txt"),
            output_path(Path::new("edges"), Path::new("."), "directed.txt").unwrap()
        );
        // only the last extension is removed
        assert_eq!(
            PathBuf::from("snap.tar_IC.inf"),
            output_path(Path::new("/tmp/snap.tar.gz"), Path::new(""), "IC.inf").unwrap()
        );
    }

    #[test]
    fn output_path_needs_file_name() {
        assert!(matches!(
            output_path(Path::new("/"), Path::new("."), "R.inf"),
            Err(GraphPrepError::NoFileName(_))
        ));
    }

    #[test]
    fn general_format_fixed() {
        assert_eq!("0.5", format_general(0.5, 3));
        assert_eq!("0.333", format_general(1.0 / 3.0, 3));
        assert_eq!("0.667", format_general(2.0 / 3.0, 3));
        assert_eq!("1", format_general(1.0, 3));
        assert_eq!("0.01", format_general(0.01, 3));
        assert_eq!("0.000123", format_general(0.0001234, 3));
        assert_eq!("100", format_general(100.0, 3));
        assert_eq!("-0.25", format_general(-0.25, 3));
        assert_eq!("0", format_general(0.0, 3));
    }

    #[test]
    fn general_format_scientific() {
        assert_eq!("1e-05", format_general(0.00001, 3));
        assert_eq!("1.23e+03", format_general(1234.0, 3));
        assert_eq!("1e+03", format_general(999.9, 3));
        assert_eq!("2.5e-07", format_general(2.5e-7, 3));
    }

    #[test]
    fn general_format_precision() {
        assert_eq!("0.3", format_general(1.0 / 3.0, 1));
        assert_eq!("0.33333", format_general(1.0 / 3.0, 5));
        assert_eq!("3e+01", format_general(31.0, 1));
        assert_eq!("inf", format_general(f64::INFINITY, 3));
        assert_eq!("nan", format_general(f64::NAN, 3));
    }
}
