//! Prompt utilities for reading settings with defaults and optional bounds.
//!
//! Blank input (or end of input) takes the default; unparseable input falls
//! back to the default with a notice; out-of-bounds input re-prompts. All
//! functions are generic over the reader and writer so sessions can be
//! scripted with in-memory buffers.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

fn read_trimmed_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    let bytes = input.read_line(&mut line)?;

    if bytes == 0 {
        // End of input behaves like accepting the default
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

fn prompt_number<T, R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: T,
    lower: Option<T>,
    upper: Option<T>,
) -> io::Result<T>
where
    T: Copy + PartialOrd + Display + FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let line = match read_trimmed_line(input)? {
            None => return Ok(default),
            Some(line) if line.is_empty() => return Ok(default),
            Some(line) => line,
        };

        match line.parse::<T>() {
            Ok(value) => {
                if let Some(upper) = upper {
                    if value > upper {
                        writeln!(
                            output,
                            "Please enter a value less than or equal to {}.",
                            upper
                        )?;
                        continue;
                    }
                }

                if let Some(lower) = lower {
                    if value < lower {
                        writeln!(
                            output,
                            "Please enter a value greater than or equal to {}.",
                            lower
                        )?;
                        continue;
                    }
                }

                return Ok(value);
            }
            Err(_) => {
                writeln!(output, "Invalid input. Using default value of {}.", default)?;
                return Ok(default);
            }
        }
    }
}

pub fn prompt_int<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: i64,
    lower: Option<i64>,
    upper: Option<i64>,
) -> io::Result<i64> {
    prompt_number(input, output, prompt, default, lower, upper)
}

pub fn prompt_float<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: f64,
    lower: Option<f64>,
    upper: Option<f64>,
) -> io::Result<f64> {
    prompt_number(input, output, prompt, default, lower, upper)
}

/// Yes/no prompt defaulting to no: only a `y` or `Y` answer counts.
pub fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<bool> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let line = match read_trimmed_line(input)? {
        None => return Ok(false),
        Some(line) => line,
    };

    Ok(line.eq_ignore_ascii_case("y"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_int(
        input: &str,
        default: i64,
        lower: Option<i64>,
        upper: Option<i64>,
    ) -> (i64, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let value = prompt_int(&mut reader, &mut output, "n: ", default, lower, upper).unwrap();

        (value, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_int_accepts_valid_input() {
        let (value, _) = run_int("42\n", 7, Some(1), Some(100));

        assert_eq!(value, 42);
    }

    #[test]
    fn test_int_blank_line_takes_default() {
        let (value, _) = run_int("\n", 7, None, None);

        assert_eq!(value, 7);
    }

    #[test]
    fn test_int_end_of_input_takes_default() {
        let (value, _) = run_int("", 7, None, None);

        assert_eq!(value, 7);
    }

    #[test]
    fn test_int_unparseable_input_takes_default_with_notice() {
        let (value, output) = run_int("banana\n", 7, None, None);

        assert_eq!(value, 7);
        assert!(output.contains("Invalid input. Using default value of 7."));
    }

    #[test]
    fn test_int_above_upper_bound_reprompts() {
        let (value, output) = run_int("500\n50\n", 7, Some(1), Some(100));

        assert_eq!(value, 50);
        assert!(output.contains("Please enter a value less than or equal to 100."));
    }

    #[test]
    fn test_int_below_lower_bound_reprompts() {
        let (value, output) = run_int("0\n3\n", 7, Some(1), Some(100));

        assert_eq!(value, 3);
        assert!(output.contains("Please enter a value greater than or equal to 1."));
    }

    #[test]
    fn test_int_reprompt_exhausting_input_takes_default() {
        let (value, _) = run_int("500\n", 7, Some(1), Some(100));

        assert_eq!(value, 7);
    }

    #[test]
    fn test_float_accepts_valid_input() {
        let mut reader = Cursor::new(b"0.25\n".to_vec());
        let mut output = Vec::new();

        let value =
            prompt_float(&mut reader, &mut output, "s: ", 0.1, Some(0.0), Some(10.0)).unwrap();

        assert_eq!(value, 0.25);
    }

    #[test]
    fn test_float_bounds_reprompt() {
        let mut reader = Cursor::new(b"11\n2.5\n".to_vec());
        let mut output = Vec::new();

        let value =
            prompt_float(&mut reader, &mut output, "s: ", 0.1, Some(0.0), Some(10.0)).unwrap();

        assert_eq!(value, 2.5);
        assert!(String::from_utf8(output)
            .unwrap()
            .contains("Please enter a value less than or equal to 10."));
    }

    #[test]
    fn test_float_blank_line_takes_default() {
        let mut reader = Cursor::new(b"\n".to_vec());
        let mut output = Vec::new();

        let value = prompt_float(&mut reader, &mut output, "s: ", 0.1, None, None).unwrap();

        assert_eq!(value, 0.1);
    }

    #[test]
    fn test_yes_no_only_y_is_yes() {
        let cases = [
            ("y\n", true),
            ("Y\n", true),
            ("n\n", false),
            ("\n", false),
            ("yes\n", false),
        ];

        for (answer, expected) in cases {
            let mut reader = Cursor::new(answer.as_bytes().to_vec());
            let mut output = Vec::new();

            let value = prompt_yes_no(&mut reader, &mut output, "show? ").unwrap();

            assert_eq!(value, expected, "answer {:?}", answer);
        }
    }

    #[test]
    fn test_yes_no_end_of_input_is_no() {
        let mut reader = Cursor::new(Vec::new());
        let mut output = Vec::new();

        assert!(!prompt_yes_no(&mut reader, &mut output, "show? ").unwrap());
    }
}
