//! Module providing JSON IO for cobrasbml Models
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::metabolic_model::model::Model;

impl Model {
    /// Read a Model previously written with [`Model::write_json`]
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Model, JsonError> {
        let model_str = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) => return Err(JsonError::UnableToRead(format!("{:?}", err))),
        };
        Ok(serde_json::from_str::<Model>(&model_str)?)
    }

    /// Write the Model to `path` as JSON
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<(), JsonError> {
        let model_string = self.to_json_string()?;
        fs::write(path, model_string)?;
        Ok(())
    }

    /// Serialize the Model into a JSON string
    pub fn to_json_string(&self) -> Result<String, JsonError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Unable to read file due to {0}")]
    UnableToRead(String),
    #[error("Serde json parse error")]
    SerdeJsonParseError(#[from] serde_json::Error),
    #[error("Unable to write to file")]
    UnableToWrite(#[from] std::io::Error),
}
