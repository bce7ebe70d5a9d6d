//! Format output dispatch helpers

/// Dispatch output by format. The JSON branch returns a `Result`; the human
/// branch prints and succeeds.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => print_json(&value),
///     human => { println!("done"); }
/// )
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
        }
    };
}
