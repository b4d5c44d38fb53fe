//! Column-wise Gaussian elimination on a random or file-supplied matrix
//!
//! Prints the input matrix, the time spent in each pass, and the factored matrix.
//!
//! ```text
//! colgauss --size 100 --seed 42
//! colgauss --input matrix.txt --no-pivoting
//! RUST_LOG=debug colgauss --config run.json --quiet
//! ```

use clap::Parser;
use math_audio_lu::{
    ColumnMatrix, FactorizationConfig, LuError, Phase, PhaseTimer, RunConfig, factorize_in_place,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "colgauss",
    about = "In-place LU factorization by column-wise Gaussian elimination"
)]
struct Cli {
    /// JSON run configuration; command-line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dimension of the generated matrix
    #[arg(long)]
    size: Option<usize>,

    /// Generated entries are drawn from [0, max_value]
    #[arg(long)]
    max_value: Option<f64>,

    /// Random seed for reproducible matrices
    #[arg(long)]
    seed: Option<u64>,

    /// Singularity tolerance
    #[arg(long)]
    epsilon: Option<f64>,

    /// Skip the pivoting pass
    #[arg(long)]
    no_pivoting: bool,

    /// Read the matrix from a text file (one printed row per line) instead of generating it
    #[arg(long)]
    input: Option<PathBuf>,

    /// Decimals per printed entry
    #[arg(long)]
    precision: Option<usize>,

    /// Do not print the input and factored matrices
    #[arg(long)]
    quiet: bool,

    /// Write the effective configuration to this file and exit
    #[arg(long)]
    write_config: Option<PathBuf>,
}

impl Cli {
    fn run_config(&self) -> Result<RunConfig, String> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_file(path)?,
            None => RunConfig::default(),
        };

        if let Some(size) = self.size {
            config.matrix.size = size;
        }
        if let Some(max_value) = self.max_value {
            config.matrix.max_value = max_value;
        }
        if self.seed.is_some() {
            config.matrix.seed = self.seed;
        }
        if let Some(epsilon) = self.epsilon {
            config.factorization.epsilon = epsilon;
        }
        if self.no_pivoting {
            config.factorization.do_pivoting = false;
        }
        if let Some(precision) = self.precision {
            config.output.precision = precision;
        }
        if self.quiet {
            config.output.print_input = false;
            config.output.print_output = false;
        }

        config.validate()?;
        Ok(config)
    }
}

fn load_matrix(cli: &Cli, config: &RunConfig) -> Result<ColumnMatrix, Box<dyn std::error::Error>> {
    if let Some(path) = &cli.input {
        let text = fs::read_to_string(path)?;
        let matrix = ColumnMatrix::parse_rows(&text)?;
        log::info!("Loaded {0}x{0} matrix from {1}", matrix.dim(), path.display());
        return Ok(matrix);
    }

    let mut rng = match config.matrix.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    Ok(ColumnMatrix::random(
        config.matrix.size,
        config.matrix.max_value,
        &mut rng,
    ))
}

fn report_timing(timer: &PhaseTimer, factorization: &FactorizationConfig) {
    if factorization.do_pivoting {
        if let Some(elapsed) = timer.pivoting {
            println!(
                "{} took {} milliseconds",
                Phase::Pivoting.label(),
                elapsed.as_millis()
            );
        }
    }
    if let Some(elapsed) = timer.elimination {
        println!(
            "{} took {} milliseconds",
            Phase::Elimination.label(),
            elapsed.as_millis()
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let config = cli.run_config()?;

    if let Some(path) = &cli.write_config {
        config.to_file(path)?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    let mut matrix = load_matrix(&cli, &config)?;
    let precision = config.output.precision;

    if config.output.print_input {
        print!("{}", matrix.render(precision));
    }

    let mut timer = PhaseTimer::new();
    match factorize_in_place(&mut matrix, &config.factorization, &mut timer) {
        Ok(report) => {
            log::info!(
                "Factorized {0}x{0} matrix: {1} swaps, {2} elimination steps",
                matrix.dim(),
                report.swaps(),
                report.elimination_steps
            );
        }
        Err(err @ LuError::SingularMatrix { .. }) => {
            println!("singular matrix");
            eprintln!("{}", err);
            process::exit(1);
        }
        Err(err) => return Err(err.into()),
    }

    report_timing(&timer, &config.factorization);

    if config.output.print_output {
        print!("{}", matrix.render(precision));
    }

    Ok(())
}
