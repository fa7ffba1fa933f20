use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::{info, warn};

use gausssecant::configuration::Configuration;
use gausssecant::error::NumericsError;
use gausssecant::math::distribution::distributionparameters::DistributionParameters;
use gausssecant::math::distribution::gaussian::{gaussian_density, GaussianDensity};
use gausssecant::math::distribution::tailprobability::{
    tail_probability,
    Tail,
    TAIL_POINT_COUNT,
    TAIL_WIDTH_IN_STANDARD_DEVIATIONS
};
use gausssecant::math::integration::simpson::SimpsonRule;
use gausssecant::math::rootfinding::secant::{secant, SecantResult, SecantSettings};

#[derive(Parser)]
#[command(version, about = "Simpson quadrature, Gaussian tail probabilities and secant root finding")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the reference density, integral and root-finding values
    Fixtures,
    /// P(x > c) or P(x < c) for a Gaussian
    Tail {
        #[arg(long, allow_hyphen_values = true)]
        mean: f64,
        #[arg(long, allow_hyphen_values = true)]
        std_dev: f64,
        #[arg(long, allow_hyphen_values = true)]
        cutoff: f64,
        #[arg(long)]
        less_than: bool,
    },
    /// Integrate the configured Gaussian density between two limits
    Integrate {
        #[arg(long, allow_hyphen_values = true)]
        lower: f64,
        #[arg(long, allow_hyphen_values = true)]
        upper: f64,
        #[arg(long)]
        point_count: Option<usize>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {}", error);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), NumericsError> {
    let config = match &cli.config {
        Some(path) => Configuration::from_reader(path)?,
        None => Configuration::new(),
    };

    match cli.command.unwrap_or(Command::Fixtures) {
        Command::Fixtures => print_fixtures(&config),
        Command::Tail { mean, std_dev, cutoff, less_than } => {
            let params = DistributionParameters::new(mean, std_dev)?;
            let tail = Tail::from_greater_than(!less_than);
            let p = tail_probability(&GaussianDensity, &params, cutoff, tail);
            println!("P(x{}{}|{}, {}) = {:0.5}", tail.to_char(), cutoff, mean, std_dev, p);
            Ok(())
        },
        Command::Integrate { lower, upper, point_count } => {
            let rule = match point_count {
                Some(n) => SimpsonRule::new(n)?,
                None => config.simpson_rule()?,
            };
            let params = config.distribution_parameters()?;
            info!("integrating with {} panels", rule.panel_count());
            let p = rule.integrate(&GaussianDensity, &params, lower, upper);
            println!("p={:0.5}", p);
            Ok(())
        }
    }
}

fn print_fixtures(config: &Configuration) -> Result<(), NumericsError> {
    let params = config.distribution_parameters()?;

    let f = gaussian_density(0.0, params.mean(), params.standard_deviation())?;
    println!("p={:0.5}", f);

    let (lower, _) = params.window(TAIL_WIDTH_IN_STANDARD_DEVIATIONS);
    let p = SimpsonRule::new(TAIL_POINT_COUNT)?.integrate(&GaussianDensity, &params, lower, params.mean());
    println!("p={:0.5}", p);

    let p1 = tail_probability(&GaussianDensity, &params, params.mean(), Tail::Upper);
    println!("p1={:0.5}", p1);

    let fn1 = |x: f64| x - 3.0 * x.cos();
    let fn2 = |x: f64| (2.0 * x).cos() * x.powi(3);

    let r1 = secant(fn1, 1.0, 2.0, &SecantSettings::new(5, 1e-4))?;
    let r2 = secant(fn2, 1.0, 2.0, &SecantSettings::new(15, 1e-8))?;
    let r3 = secant(fn2, 1.0, 2.0, &SecantSettings::new(3, 1e-8))?;
    let r4 = secant(fn1, 1.0, 2.0, &config.secant_settings())?;

    report_root("fn1", &r1);
    report_root("fn2", &r2);
    report_root("fn3", &r3);
    report_root("fn1 (configured)", &r4);
    Ok(())
}

fn report_root(name: &str, result: &SecantResult) {
    if !result.is_converged() {
        warn!("{} stopped after {} iterations without meeting tolerance", name, result.iterations());
    }
    println!("root of {} = {:.4}, after {} iterations", name, result.root(), result.iterations());
}
