use std::io::{
    self,
    BufRead,
    Write
};
use std::str::FromStr;

use log::{
    debug,
    info
};
use thiserror::Error;

use crate::configuration::Configuration;
use crate::function::realfunction::FunctionCode;
use crate::integration::integrationerror::IntegrationError;
use crate::integration::integrator::Integrator;
use crate::integration::sumtype::SumType;
use crate::manager::manager::IManager;
use crate::manager::managererror::ManagerError;
use crate::math::numberformat::format_fixed;
use crate::shell::command::Command;

/// Largest number of fraction digits printed; a double carries no more.
pub const MAX_PRECISION: u32 = 340;

#[derive(Debug, Error)]
enum RequestError {
    #[error("Invalid sum type entered! Try again.")]
    InvalidSumType,
    #[error("Input entered does not match a function!")]
    UnknownFunction,
    #[error("Invalid input was entered! Try again.")]
    InvalidInput,
    #[error("The number of steps must be greater than 0.")]
    NonPositiveSteps,
    #[error("Decimal precision cannot be less than 0")]
    NegativePrecision,
    #[error("No saved integrators are configured.")]
    NoPresets,
    #[error("{0}")]
    Integration(#[from] IntegrationError),
    #[error("{0}")]
    Manager(#[from] ManagerError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("end of input")]
    EndOfInput
}

/// The interactive command loop around `Integrator`.
///
/// Reads one answer per line from `input` and writes prompts and results to
/// `output`. User mistakes are reported and the loop goes on; only I/O
/// failures end `run` with an error. End of input is treated as `q`.
pub struct Shell<'a, R, W> {
    input: R,
    output: W,
    configuration: &'a Configuration
}

impl<'a, R, W> Shell<'a, R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W, configuration: &'a Configuration) -> Shell<'a, R, W> {
        Shell { input, output, configuration }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> io::Result<()> {
        self.write_separator()?;
        loop {
            write!(self.output, "Enter c for Riemann sum\nEnter p for a saved integrator\nEnter q to quit\n ==> ")?;
            self.output.flush()?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => {
                    info!("input closed, leaving shell");
                    writeln!(self.output, "\nExiting program...")?;
                    self.write_separator()?;
                    return Ok(());
                }
            };
            let result = match Command::parse(&line) {
                Some(Command::Compute) => self.compute(),
                Some(Command::Preset) => self.compute_preset(),
                Some(Command::Quit) => {
                    writeln!(self.output, "\nExiting program...")?;
                    self.write_separator()?;
                    return Ok(());
                }
                None => {
                    writeln!(self.output, "\nERROR: Invalid command entered! Try again.")?;
                    self.write_separator()?;
                    continue;
                }
            };
            match result {
                Ok(text) => writeln!(self.output, "\nRiemann approximation is: {}", text)?,
                Err(RequestError::Io(error)) => return Err(error),
                Err(RequestError::EndOfInput) => {
                    info!("input closed mid-request, leaving shell");
                    writeln!(self.output, "\nExiting program...")?;
                    self.write_separator()?;
                    return Ok(());
                }
                Err(error) => {
                    debug!("request rejected: {}", error);
                    writeln!(self.output, "\nERROR: {}", error)?;
                }
            }
            self.write_separator()?;
        }
    }

    fn compute(&mut self) -> Result<String, RequestError> {
        let mut menu = String::from("\n");
        for sum_type in SumType::ALL {
            menu.push_str(&format!("Enter {} for {}\n", sum_type.to_char(), sum_type.description()));
        }
        menu.push_str(" ==> ");
        let sum_type: SumType = self.prompt(&menu)?.parse().map_err(|_| RequestError::InvalidSumType)?;

        let mut menu = String::from("\nEnter the number for the corresponding function:\n");
        for function in FunctionCode::ALL {
            menu.push_str(&format!("  {} for {}\n", function.code(), function));
        }
        menu.push_str("  ==> ");
        let function_code: i64 = self.prompt_parse(&menu)?;
        let function = FunctionCode::try_from(function_code).map_err(|_| RequestError::UnknownFunction)?;

        let num_steps: i64 = self.prompt_parse("\nEnter the number of steps (int): ")?;
        let precision: i64 = self.prompt_parse("Enter an integer for the precision: ")?;
        let left: f64 = self.prompt_parse("Enter a left bound: ")?;
        let right: f64 = self.prompt_parse("Enter a right bound: ")?;
        let precision = Self::validate_precision(precision)?;
        if num_steps <= 0 {
            return Err(RequestError::NonPositiveSteps);
        }

        let integrator = Integrator::from_parts(sum_type, num_steps as u64, function)?;
        self.evaluate(&integrator, precision, left, right)
    }

    fn compute_preset(&mut self) -> Result<String, RequestError> {
        let configuration = self.configuration;
        let manager = configuration.integrator_manager();
        let names = manager.names();
        if names.is_empty() {
            return Err(RequestError::NoPresets);
        }
        let menu = format!("\nSaved integrators: {}\nEnter a name ==> ", names.join(", "));
        let name = self.prompt(&menu)?;
        let integrator = manager.get(&name)?;
        let precision: i64 = self.prompt_parse("Enter an integer for the precision: ")?;
        let left: f64 = self.prompt_parse("Enter a left bound: ")?;
        let right: f64 = self.prompt_parse("Enter a right bound: ")?;
        let precision = Self::validate_precision(precision)?;
        self.evaluate(&integrator, precision, left, right)
    }

    fn evaluate(&self, integrator: &Integrator, precision: u32, left: f64, right: f64) -> Result<String, RequestError> {
        let area = integrator.calculate(left, right)?;
        Ok(format_fixed(area, precision, self.configuration.shell().grouping()))
    }

    fn validate_precision(precision: i64) -> Result<u32, RequestError> {
        if precision < 0 {
            return Err(RequestError::NegativePrecision);
        }
        Ok(u32::try_from(precision).map_or(MAX_PRECISION, |precision| precision.min(MAX_PRECISION)))
    }

    fn prompt(&mut self, text: &str) -> Result<String, RequestError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()?.ok_or(RequestError::EndOfInput)
    }

    fn prompt_parse<T: FromStr>(&mut self, text: &str) -> Result<T, RequestError> {
        self.prompt(text)?.parse::<T>().map_err(|_| RequestError::InvalidInput)
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn write_separator(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", self.configuration.shell().separator())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_session(configuration: &Configuration, script: &str) -> String {
        let mut shell = Shell::new(Cursor::new(script.as_bytes().to_vec()), Vec::new(), configuration);
        shell.run().unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn precision_is_clamped_not_rejected() {
        assert_eq!(Shell::<Cursor<Vec<u8>>, Vec<u8>>::validate_precision(5).unwrap(), 5);
        assert_eq!(Shell::<Cursor<Vec<u8>>, Vec<u8>>::validate_precision(10_000).unwrap(), MAX_PRECISION);
        assert_eq!(
            Shell::<Cursor<Vec<u8>>, Vec<u8>>::validate_precision(i64::MAX).unwrap(),
            MAX_PRECISION
        );
        assert!(matches!(
            Shell::<Cursor<Vec<u8>>, Vec<u8>>::validate_precision(-1),
            Err(RequestError::NegativePrecision)
        ));
    }

    #[test]
    fn end_of_input_mid_request_quits_quietly() {
        let configuration = Configuration::new();
        let output = run_session(&configuration, "c\nl\n1\n");
        assert!(output.contains("Exiting program..."));
        assert!(!output.contains("ERROR"));
    }

    #[test]
    fn answers_are_trimmed() {
        let configuration = Configuration::new();
        let output = run_session(&configuration, "  c \n m\n 1 \n4\n3\n 0 \n2\nq\n");
        assert!(output.contains("Riemann approximation is: 2.625"));
    }
}
