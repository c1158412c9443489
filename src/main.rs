use clap::{Args, Parser, Subcommand};
use pxrem::config::{Config, PartialConfig};
use pxrem::convert::Rewriter;
use pxrem::naming::to_dash_case;
use std::io::BufRead;

#[derive(Parser)]
#[command(name = "pxrem")]
#[command(about = "Rewrite pixel lengths in CSS values as rem", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite CSS values (reads one value per stdin line when none are given)
    Convert {
        /// Values to rewrite, e.g. "8px 16px"
        values: Vec<String>,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Print the CSS form of accessor-style property names
    DashCase {
        /// Property names, e.g. "backgroundColor"
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// Print the resolved configuration as TOML
    Config {
        #[command(flatten)]
        config: ConfigArgs,
    },
}

#[derive(Args)]
struct ConfigArgs {
    /// TOML file with overrides (rootValue, unitPrecision, minPixelValue, unit)
    #[arg(short, long)]
    config: Option<String>,

    /// Source unit to convert
    #[arg(long)]
    unit: Option<String>,

    /// Root font size the source unit is divided by
    #[arg(long)]
    root_value: Option<f64>,

    /// Fractional digits kept in converted values
    #[arg(long)]
    unit_precision: Option<u32>,

    /// Values at or below this stay in the source unit
    #[arg(long)]
    min_pixel_value: Option<f64>,
}

impl ConfigArgs {
    fn resolve(&self) -> Result<Config, Box<dyn std::error::Error>> {
        let file = match &self.config {
            Some(path) => PartialConfig::load_from_file(path)?,
            None => PartialConfig::default(),
        };
        let flags = PartialConfig {
            unit: self.unit.clone(),
            root_value: self.root_value,
            unit_precision: self.unit_precision,
            min_pixel_value: self.min_pixel_value,
        };
        let config = file.merge(flags).resolve();
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert { values, config } => convert_values(&values, &config),
        Commands::DashCase { names } => {
            for name in names {
                println!("{}", to_dash_case(&name));
            }
            Ok(())
        }
        Commands::Config { config } => print_config(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn convert_values(
    values: &[String],
    args: &ConfigArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let rewriter = Rewriter::new(args.resolve()?);

    if !values.is_empty() {
        for value in values {
            println!("{}", rewriter.rewrite(value));
        }
        return Ok(());
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        println!("{}", rewriter.rewrite(&line));
    }

    Ok(())
}

fn print_config(args: &ConfigArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.resolve()?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}
