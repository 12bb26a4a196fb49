use std::fmt::Write;

use log::LevelFilter;

use crate::math::Matrix;

/// Environment variable read by [`init_logging`].
pub const LOG_ENV: &str = "DENSE_MATRIX_LOG";

/// Install an `env_logger` reading its filter from `DENSE_MATRIX_LOG`, falling
/// back to `default_filter`. Does nothing if a logger is already installed.
pub fn init_logging(default_filter: &str) {
    let _ = env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or(LOG_ENV, default_filter))
        .is_test(cfg!(test))
        .try_init();
}

/// Render a matrix one row per line, in scientific notation.
///
/// With `max_rows` only that many leading rows are shown. With `max_cols`,
/// rows wider than twice that show the first and last `max_cols` values
/// around an ellipsis.
pub fn format_matrix(
    matrix: &Matrix,
    decimal_places: usize,
    max_rows: Option<usize>,
    max_cols: Option<usize>,
) -> String {
    let (rows, columns) = matrix.shape();
    let rows_to_print = max_rows.unwrap_or(rows).min(rows);
    let cols_to_print = max_cols.unwrap_or(columns).min(columns);

    let mut out = String::new();
    let _ = writeln!(out, "matrix([");
    for r in 0..rows_to_print {
        let row = matrix.row_slice(r);
        let cells: Vec<String> = if cols_to_print * 2 < columns {
            row[..cols_to_print]
                .iter()
                .map(|v| format!("{:.*e}", decimal_places, v))
                .chain(std::iter::once("...".to_string()))
                .chain(
                    row[columns - cols_to_print..]
                        .iter()
                        .map(|v| format!("{:.*e}", decimal_places, v)),
                )
                .collect()
        } else {
            row.iter()
                .map(|v| format!("{:.*e}", decimal_places, v))
                .collect()
        };
        let sep = if r + 1 < rows_to_print || rows_to_print < rows { "," } else { "" };
        let _ = writeln!(out, "  [{}]{}", cells.join(", "), sep);
    }
    if rows_to_print < rows {
        let _ = writeln!(out, "  ...");
    }
    out.push_str("])");
    out
}
