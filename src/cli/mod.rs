use clap::{Parser, ValueEnum};
use int_vector::{GrowthPolicy, PivotPolicy, VectorConfig};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "int_vector_smoke")]
#[command(version, about = "Fill an IntVector, sort it and verify the result", long_about = None)]
pub struct Cli {
    /// Initial capacity; also the number of random values when --values is absent
    #[arg(short, long, default_value_t = 10_000)]
    pub capacity: usize,

    /// Sorting algorithm to run
    #[arg(short, long, value_enum, default_value_t = Algorithm::Quick)]
    pub algorithm: Algorithm,

    /// Quicksort pivot selection
    #[arg(short, long, value_enum, default_value_t = Pivot::MedianOfThree)]
    pub pivot: Pivot,

    /// Growth policy used when inserting into a full vector
    #[arg(short, long, value_enum, default_value_t = Growth::Linear)]
    pub growth: Growth,

    /// Slots added per growth step with --growth linear
    #[arg(long, default_value_t = GrowthPolicy::DEFAULT_INCREMENT)]
    pub increment: usize,

    /// Seed for the random fill
    #[arg(long)]
    pub seed: Option<u64>,

    /// Comma-separated values to sort instead of random ones
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Vec<i32>,

    /// Run the built-in scenarios
    #[arg(short, long)]
    pub test: bool,

    /// Set verbose level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Quick,
    Bubble,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pivot {
    First,
    Last,
    Middle,
    Random,
    MedianOfThree,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Growth {
    Linear,
    Doubling,
}

impl From<Pivot> for PivotPolicy {
    fn from(pivot: Pivot) -> Self {
        match pivot {
            Pivot::First => PivotPolicy::First,
            Pivot::Last => PivotPolicy::Last,
            Pivot::Middle => PivotPolicy::Middle,
            Pivot::Random => PivotPolicy::Random,
            Pivot::MedianOfThree => PivotPolicy::MedianOfThree,
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn vector_config(&self) -> VectorConfig {
        let growth = match self.growth {
            Growth::Linear => GrowthPolicy::Linear {
                increment: self.increment,
            },
            Growth::Doubling => GrowthPolicy::Doubling,
        };
        VectorConfig::new()
            .with_growth(growth)
            .with_pivot(self.pivot.into())
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
