pub mod calendar;
pub mod catalog;
pub mod cli;
pub mod generator;
pub mod sampler;
pub mod summary;
pub mod ui;
pub mod writer;

pub use cli::{Cli, Commands};
pub use generator::{generate, DatasetGenerator, GeneratorConfig, TransactionLine};
pub use sampler::{Sampler, SeededSampler};
pub use summary::DatasetSummary;
pub use ui::{ConsoleUi, Phase, SilentUi, Ui};
