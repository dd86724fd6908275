use crate::pipe::{Pipe, PipeError, PipeResult};
use async_trait::async_trait;

/// Parses a decimal string into a `u32`.
///
/// Only ASCII digits are accepted: no sign, no surrounding whitespace.
#[derive(Debug, Clone, Copy)]
pub struct ParseU32Pipe {
    field: &'static str,
}

impl ParseU32Pipe {
    pub const fn new(field: &'static str) -> Self {
        Self { field }
    }
}

#[async_trait]
impl Pipe for ParseU32Pipe {
    type Input = String;
    type Output = u32;

    async fn transform(&self, input: String) -> PipeResult<u32> {
        if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PipeError::Validation(format!(
                "{} must be an unsigned integer, got {:?}",
                self.field, input
            )));
        }
        input.parse::<u32>().map_err(|_| {
            PipeError::Transformation(format!("{} {:?} is out of range", self.field, input))
        })
    }
}

/// Treats an absent or empty optional field as "not supplied".
#[derive(Debug, Default, Clone, Copy)]
pub struct NonEmptyPipe;

#[async_trait]
impl Pipe for NonEmptyPipe {
    type Input = Option<String>;
    type Output = Option<String>;

    async fn transform(&self, input: Option<String>) -> PipeResult<Option<String>> {
        Ok(input.filter(|value| !value.is_empty()))
    }
}
