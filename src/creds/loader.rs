use super::error::{CredsError, CredsResult};
use super::model::{CLIENT_ID_KEY, CLIENT_SECRET_KEY, Credentials, TENANT_ID_KEY};
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const DEFAULT_CREDENTIALS_FILE: &str = "creds.config";

pub fn load(path: &Path) -> CredsResult<Credentials> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => CredsError::NotFound(path.to_path_buf()),
        _ => CredsError::Open {
            path: path.to_path_buf(),
            source: err,
        },
    })?;

    let creds = parse(BufReader::new(file))?;

    let missing = creds.missing();
    if !missing.is_empty() {
        debug!("{} has no value for {}", path.display(), missing.join(", "));
    }

    Ok(creds)
}

/// Reads `KEY=VALUE` lines. Unknown lines are skipped and values are taken
/// verbatim after the first `=`.
pub fn parse<R: BufRead>(reader: R) -> CredsResult<Credentials> {
    let mut creds = Credentials::default();

    for line in reader.lines() {
        let line = line?;

        if let Some(value) = value_of(&line, CLIENT_ID_KEY) {
            creds.client_id = value.to_owned();
        } else if let Some(value) = value_of(&line, CLIENT_SECRET_KEY) {
            creds.client_secret = value.to_owned();
        } else if let Some(value) = value_of(&line, TENANT_ID_KEY) {
            creds.tenant_id = value.to_owned();
        }
    }

    Ok(creds)
}

fn value_of<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.strip_prefix(key)?.strip_prefix('=')
}
