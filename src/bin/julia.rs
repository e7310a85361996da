extern crate clap;
extern crate env_logger;
extern crate julia;
#[macro_use]
extern crate log;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use julia::ppm;
use julia::{Complex, Julia, JuliaParams, Progress, ProgressBar, Raster, Silent, TwoTone};
use std::io;
use std::str::FromStr;

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

fn validate_at_least(s: &str, low: usize, err: &str) -> Result<(), String> {
    match usize::from_str(s) {
        Ok(i) if i >= low => Ok(()),
        _ => Err(err.to_string()),
    }
}

fn validate_positive(s: &str, err: &str) -> Result<(), String> {
    match f64::from_str(s) {
        Ok(f) if f.is_finite() && f > 0.0 => Ok(()),
        _ => Err(err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const SCALE: &str = "scale";
const SEED: &str = "seed";
const DEPTH: &str = "depth";
const THRESHOLD: &str = "threshold";
const THREADS: &str = "threads";
const QUIET: &str = "quiet";

fn args<'a>() -> ArgMatches<'a> {
    App::new("julia")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Julia set renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(false)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file; plain PPM on standard output if omitted"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1080")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        32_768,
                        "Could not parse image size",
                        "Image size must be between 1 and 32768",
                    )
                })
                .help("Pixels per side of the (square) output image"),
        )
        .arg(
            Arg::with_name(SCALE)
                .required(false)
                .long(SCALE)
                .short("z")
                .takes_value(true)
                .default_value("1.5")
                .validator(|s| validate_positive(&s, "Scale must be a positive number"))
                .help("Half-width of the window on the complex plane"),
        )
        .arg(
            Arg::with_name(SEED)
                .required(false)
                .long(SEED)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-0.8,0.156")
                .validator(|s| Complex::from_str(&s).map(|_| ()))
                .help("The constant c in z^2 + c, as RE,IM"),
        )
        .arg(
            Arg::with_name(DEPTH)
                .required(false)
                .long(DEPTH)
                .short("d")
                .takes_value(true)
                .default_value("200")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration depth",
                        "Iteration depth must be between 1 and 1000000",
                    )
                })
                .help("Iterations per pixel before a point counts as bounded"),
        )
        .arg(
            Arg::with_name(THRESHOLD)
                .required(false)
                .long(THRESHOLD)
                .short("t")
                .takes_value(true)
                .default_value("1000")
                .validator(|s| validate_positive(&s, "Threshold must be a positive number"))
                .help("Squared magnitude past which a point has escaped"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("j")
                .takes_value(true)
                .validator(|s| validate_at_least(&s, 1, "Thread count must be at least 1"))
                .help("Number of threads to use in solver (default: all cores)"),
        )
        .arg(
            Arg::with_name(QUIET)
                .long(QUIET)
                .short("q")
                .help("Do not draw a progress bar"),
        )
        .get_matches()
}

fn params(matches: &ArgMatches) -> JuliaParams {
    // Every value has a default and has passed its validator.
    let value = |name: &str| matches.value_of(name).unwrap_or_default();
    let defaults = JuliaParams::default();
    JuliaParams {
        dim: usize::from_str(value(SIZE)).unwrap_or(defaults.dim),
        scale: f64::from_str(value(SCALE)).unwrap_or(defaults.scale),
        seed: Complex::from_str(value(SEED)).unwrap_or(defaults.seed),
        depth: usize::from_str(value(DEPTH)).unwrap_or(defaults.depth),
        threshold: f64::from_str(value(THRESHOLD)).unwrap_or(defaults.threshold),
    }
}

fn run(matches: &ArgMatches) -> julia::Result<()> {
    let params = params(matches);
    let threads = matches
        .value_of(THREADS)
        .and_then(|s| usize::from_str(s).ok())
        .unwrap_or_else(num_cpus::get);
    let julia = Julia::new(params)?;
    info!(
        "rendering {}x{} Julia set for c = {} on {} threads",
        params.dim, params.dim, params.seed, threads
    );

    let progress: Box<dyn Progress> = if matches.is_present(QUIET) {
        Box::new(Silent)
    } else {
        Box::new(ProgressBar::new(params.dim))
    };
    let raster = Raster::render(&julia, &TwoTone::default(), threads, progress.as_ref())?;

    info!("Writing to Image File");
    match matches.value_of(OUTPUT) {
        Some(path) => ppm::save(&raster, path)?,
        None => {
            let stdout = io::stdout();
            ppm::write_ppm(&raster, stdout.lock())?;
        }
    }
    info!("Done");
    Ok(())
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
