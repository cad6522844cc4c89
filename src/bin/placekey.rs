//! `placekey` -- convert between geo coordinates and Placekeys.
//!
//! ```text
//! placekey from-geo --lat <f64> --lng <f64>
//! placekey to-geo --pk <placekey>
//! ```

use std::process::ExitCode;

const USAGE: &str = "\
placekey - convert between geo coordinates and Placekeys

Usage: placekey from-geo --lat <LAT> --lng <LNG>
       placekey to-geo --pk <PLACEKEY>

from-geo   Print the Placekey containing (LAT, LNG)
to-geo     Print the centroid \"LAT LNG\" of PLACEKEY";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let Some((subcommand, rest)) = args.split_first() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match subcommand.as_str() {
        "from-geo" => from_geo(rest),
        "to-geo" => to_geo(rest),
        _ => {
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}

fn from_geo(args: &[String]) -> ExitCode {
    let (Some(lat), Some(lng)) = (flag_value(args, "--lat"), flag_value(args, "--lng"))
    else {
        eprintln!("from-geo requires --lat and --lng");
        return ExitCode::FAILURE;
    };

    let (Ok(lat), Ok(lng)) = (lat.parse::<f64>(), lng.parse::<f64>()) else {
        eprintln!("--lat and --lng must be numbers");
        return ExitCode::FAILURE;
    };

    match placekey::geo_to_placekey(lat, lng) {
        Ok(pk) => {
            println!("{pk}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn to_geo(args: &[String]) -> ExitCode {
    let Some(pk) = flag_value(args, "--pk") else {
        eprintln!("to-geo requires --pk");
        return ExitCode::FAILURE;
    };

    match placekey::placekey_to_geo(pk) {
        Ok((lat, lng)) => {
            println!("{lat} {lng}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Finds `--flag value` in `args`, whether given as two tokens or one
/// `--flag=value` token.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    let prefix = format!("{flag}=");
    for (i, arg) in args.iter().enumerate() {
        if let Some(value) = arg.strip_prefix(&prefix) {
            return Some(value);
        }
        if arg == flag {
            return args.get(i + 1).map(String::as_str);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_value_accepts_both_forms() {
        let args = vec!["--lat".to_owned(), "40.0".to_owned()];
        assert_eq!(flag_value(&args, "--lat"), Some("40.0"));

        let args = vec!["--lat=40.0".to_owned()];
        assert_eq!(flag_value(&args, "--lat"), Some("40.0"));

        let args = vec!["--lng".to_owned(), "1.0".to_owned()];
        assert_eq!(flag_value(&args, "--lat"), None);
    }
}
