//! Console front end: reads a modulus and a polynomial, prints a verdict.
//!
//! Anything not supplied on the command line is prompted for on the input
//! stream, one value per line.

use core::fmt;
use core::str::FromStr;
use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{debug, info};

use crate::structures::modulus::{Modulus, ModulusError};
use crate::structures::poly::{Poly, PolyError};
use crate::structures::search::find_irreducible;

/// Test polynomials over GF(p) for irreducibility.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gfpoly", version)]
pub struct Args {
    /// Prime modulus p (prompted for when absent)
    #[arg(short = 'p', long)]
    pub modulus: Option<u64>,

    /// Skip the primality check on the modulus
    #[arg(long)]
    pub unchecked: bool,

    /// Render every coefficient position, including zero terms
    #[arg(long)]
    pub dense: bool,

    /// Print the first monic irreducible polynomial of this degree instead
    #[arg(long, value_name = "DEGREE", conflicts_with = "coeffs")]
    pub find: Option<usize>,

    /// Coefficients from x^0 upwards (prompted for when absent)
    #[arg(allow_negative_numbers = true)]
    pub coeffs: Vec<i64>,
}

/// Error type for the console front end.
#[derive(Debug)]
pub enum CliError {
    Io(io::Error),
    /// The input ended before a prompted value was read.
    UnexpectedEof,
    /// A prompted value could not be parsed.
    Parse { input: String, expected: &'static str },
    Modulus(ModulusError),
    Poly(PolyError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Io(e) => write!(f, "i/o error: {}", e),
            CliError::UnexpectedEof => write!(f, "unexpected end of input"),
            CliError::Parse { input, expected } => {
                write!(f, "could not parse {:?} as {}", input, expected)
            }
            CliError::Modulus(e) => write!(f, "invalid modulus: {}", e),
            CliError::Poly(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Modulus(e) => Some(e),
            CliError::Poly(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}

impl From<ModulusError> for CliError {
    fn from(e: ModulusError) -> Self {
        CliError::Modulus(e)
    }
}

impl From<PolyError> for CliError {
    fn from(e: PolyError) -> Self {
        CliError::Poly(e)
    }
}

/// Run the front end against the given streams.
pub fn run<R: BufRead, W: Write>(args: &Args, input: &mut R, output: &mut W) -> Result<(), CliError> {
    let p = match args.modulus {
        Some(p) => p,
        None => prompt(input, output, "Enter the modulus p (a prime number): ", "a modulus")?,
    };
    let modulus = if args.unchecked {
        Modulus::new_unchecked(p)?
    } else {
        Modulus::new(p)?
    };
    debug!("working over GF({})", modulus);

    if let Some(degree) = args.find {
        match find_irreducible(modulus, degree)? {
            Some(f) => writeln!(output, "Irreducible: {}", render(&f, args.dense))?,
            None => writeln!(output, "No irreducible polynomial of degree {}", degree)?,
        }
        return Ok(());
    }

    let f = if args.coeffs.is_empty() {
        read_poly(input, output, modulus)?
    } else {
        Poly::new(&args.coeffs, modulus)
    };

    info!("testing {} over GF({})", f, modulus);
    let irreducible = f.is_irreducible()?;

    writeln!(output, "Polynomial: {}", render(&f, args.dense))?;
    writeln!(output, "Status: {}", verdict(irreducible))?;
    Ok(())
}

/// The verdict string printed after `Status:`.
pub fn verdict(irreducible: bool) -> &'static str {
    if irreducible {
        "irreducible"
    } else {
        "reducible"
    }
}

fn render(f: &Poly, dense: bool) -> String {
    if dense {
        f.dense().to_string()
    } else {
        f.to_string()
    }
}

/// Prompt for the degree, then for each coefficient from `x^0` up.
fn read_poly<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    modulus: Modulus,
) -> Result<Poly, CliError> {
    let degree: usize = prompt(input, output, "Enter the degree n: ", "a degree")?;
    if degree.checked_add(1).is_none() {
        return Err(CliError::Parse {
            input: degree.to_string(),
            expected: "a degree",
        });
    }

    // The degree is untrusted, so grow only as coefficients arrive.
    let mut coeffs = Vec::new();
    for i in 0..=degree {
        let message = format!("The coefficient at x^{}: ", i);
        coeffs.push(prompt::<_, _, i64>(input, output, &message, "an integer coefficient")?);
    }

    Ok(Poly::new(&coeffs, modulus))
}

fn prompt<R: BufRead, W: Write, T: FromStr>(
    input: &mut R,
    output: &mut W,
    message: &str,
    expected: &'static str,
) -> Result<T, CliError> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::UnexpectedEof);
    }

    let trimmed = line.trim();
    trimmed.parse().map_err(|_| CliError::Parse {
        input: trimmed.to_string(),
        expected,
    })
}
