//! dorado - Pipeline golden vector generator
//!
//! Usage:
//!   dorado                                    # default 32x32 random case
//!   dorado --n 16 --activation tanh           # smaller matrices, tanh
//!   dorado --matrix-type ones --seed 7        # hand-checkable vectors
//!   dorado --output-dir /tmp/vectors          # write somewhere else

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

mod error;
mod output;

use dorado::artifacts::write_vectors;
use dorado::codec;
use dorado::pipeline::{self, PipelineConfig, PipelineResult};
use dorado::stages::Activation;
use dorado::synthetic::MatrixKind;
use error::Result;

/// dorado - Golden test vector generator
///
/// Generates the input and expected-output hex files a simulation harness
/// replays against the matmul -> activation -> maxpool -> dropout datapath.
#[derive(Parser)]
#[command(name = "dorado")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Matrix size (N x N)
    #[arg(long, default_value = "32")]
    n: usize,

    /// Activation function: relu, sigmoid, tanh, identity
    /// (anything else falls back to identity)
    #[arg(long, default_value = "relu")]
    activation: String,

    /// Pooling window height
    #[arg(long, default_value = "2")]
    pool_h: usize,

    /// Pooling window width
    #[arg(long, default_value = "2")]
    pool_w: usize,

    /// Zero padding around the pooling input
    #[arg(long, default_value = "1")]
    pool_padding: usize,

    /// Dropout probability (recorded only: vectors describe inference)
    #[arg(long, default_value = "0.5", allow_negative_numbers = true)]
    dropout_p: f32,

    /// Output directory for the vector files
    #[arg(long, default_value = "testbench")]
    output_dir: PathBuf,

    /// Random seed
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Kind of input matrices: random, identity, ones, small_int
    #[arg(long, default_value = "random")]
    matrix_type: MatrixKind,

    /// Minimum random value
    #[arg(long, default_value = "-1.0", allow_negative_numbers = true)]
    min_val: f32,

    /// Maximum random value
    #[arg(long, default_value = "1.0", allow_negative_numbers = true)]
    max_val: f32,
}

impl Cli {
    fn to_config(&self) -> PipelineConfig {
        PipelineConfig::default()
            .with_n(self.n)
            .with_activation(Activation::from_tag(&self.activation))
            .with_pool_window(self.pool_h, self.pool_w)
            .with_pool_padding(self.pool_padding)
            .with_dropout(self.dropout_p)
            .with_matrix_kind(self.matrix_type)
            .with_value_range(self.min_val, self.max_val)
            .with_seed(self.seed)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match generate(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}

fn generate(cli: &Cli) -> Result<()> {
    let config = cli.to_config();
    config.validate()?;

    output::section("Generating Pipeline Test Vectors");
    println!();
    println!(
        "1. Generating {n}x{n} input matrices ({kind})...",
        n = config.n,
        kind = config.matrix_kind
    );
    println!("2. Computing matrix multiplication: C = A x B...");
    println!(
        "3. Applying activation function: {}...",
        config.activation.name()
    );
    println!(
        "4. Applying MaxPool2D (pool={}x{}, padding={})...",
        config.pool_h, config.pool_w, config.pool_padding
    );
    println!(
        "5. Applying Dropout (p={}, inference mode)...",
        config.dropout_p
    );

    let result = pipeline::run(&config)?;

    println!();
    println!("6. Writing test files to '{}'...", cli.output_dir.display());
    let files = write_vectors(&config, &result, &cli.output_dir)?;

    let elements = config.n * config.n;
    output::success(&format!("{} ({elements} elements)", files.north.display()));
    output::success(&format!("{} ({elements} elements)", files.west.display()));
    output::success(&format!("{} (1 element)", files.expected.display()));
    output::success(&format!(
        "{} (intermediate values for verification)",
        files.intermediates.display()
    ));

    print_summary(&config, &result);
    Ok(())
}

fn print_summary(config: &PipelineConfig, result: &PipelineResult) {
    output::section("Summary");
    output::kv(
        "Pipeline",
        format!(
            "MatMul -> {} -> MaxPool({}x{}) -> Dropout({})",
            config.activation.name(),
            config.pool_h,
            config.pool_w,
            config.dropout_p
        ),
    );
    output::kv("Matrix size", format!("{n}x{n}", n = config.n));
    match config.seed {
        Some(seed) => output::kv("Seed", seed),
        None => output::kv("Seed", "entropy"),
    }

    println!();
    println!("{}", "Data preview:".white().bold());
    preview_line("A[0,0]", result.a.get(0, 0));
    preview_line("B[0,0]", result.b.get(0, 0));
    preview_line("C[0,0]", result.matmul.get(0, 0));
    preview_line("Final[0]", result.final_output.get(0, 0));
}

fn preview_line(label: &str, value: f32) {
    println!("  {label} = {value:.6} (hex: {})", codec::encode(value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_match_harness_contract() {
        let cli = Cli::parse_from(["dorado"]);
        assert_eq!(cli.n, 32);
        assert_eq!(cli.activation, "relu");
        assert_eq!((cli.pool_h, cli.pool_w), (2, 2));
        assert_eq!(cli.pool_padding, 1);
        assert!((cli.dropout_p - 0.5).abs() < 1e-6);
        assert_eq!(cli.output_dir, PathBuf::from("testbench"));
        assert_eq!(cli.seed, 42);
        assert_eq!(cli.matrix_type, MatrixKind::Random);
        assert!((cli.min_val + 1.0).abs() < 1e-6);
        assert!((cli.max_val - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_config_mirrors_flags() {
        let cli = Cli::parse_from([
            "dorado",
            "--n",
            "8",
            "--activation",
            "tanh",
            "--pool-h",
            "3",
            "--pool-w",
            "2",
            "--pool-padding",
            "0",
            "--dropout-p",
            "0.25",
            "--seed",
            "7",
            "--matrix-type",
            "small_int",
            "--min-val",
            "-2.0",
            "--max-val",
            "2.0",
        ]);
        let config = cli.to_config();

        assert_eq!(config.n, 8);
        assert_eq!(config.activation, Activation::Tanh);
        assert_eq!((config.pool_h, config.pool_w), (3, 2));
        assert_eq!(config.pool_padding, 0);
        assert!((config.dropout_p - 0.25).abs() < 1e-6);
        assert_eq!(config.matrix_kind, MatrixKind::SmallInt);
        assert_eq!(config.value_range, (-2.0, 2.0));
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_strides_are_not_exposed_and_default_to_window() {
        let cli = Cli::parse_from(["dorado", "--pool-h", "3", "--pool-w", "3"]);
        let config = cli.to_config();
        assert_eq!(config.stride_h, None);
        assert_eq!(config.stride_w, None);
    }

    #[test]
    fn test_unknown_activation_falls_back_to_identity() {
        let cli = Cli::parse_from(["dorado", "--activation", "gelu"]);
        assert_eq!(cli.to_config().activation, Activation::Identity);
    }

    #[test]
    fn test_unknown_matrix_type_is_a_parse_error() {
        let parsed = Cli::try_parse_from(["dorado", "--matrix-type", "gaussian"]);
        assert!(parsed.is_err());
    }
}
