use thiserror::Error;

use super::config::{ConfigError, EvaluatorKind};
use crate::core::error::ParameterError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Invalid parameter: {source}")]
    Parameter {
        #[from]
        source: ParameterError,
    },

    #[error(
        "The {evaluator} evaluator produced a non-finite energy ({value}); check the input for coincident particles"
    )]
    NonFiniteEnergy { evaluator: EvaluatorKind, value: f64 },
}
