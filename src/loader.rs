use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use serde_json::Value;

use crate::document::Document;
use crate::error::TfplanError;

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

pub fn load_document<R: Read>(reader: R) -> Result<Document, TfplanError> {
    match serde_json::from_reader::<_, Value>(reader)? {
        Value::Object(doc) => Ok(doc),
        _ => Err(TfplanError::NotAnObject),
    }
}

pub fn load_document_from_path(path: &Path) -> Result<Document, TfplanError> {
    if path.as_os_str() == STDIN_PATH {
        return load_document(io::stdin().lock());
    }
    let file = File::open(path)?;
    load_document(BufReader::new(file))
}
