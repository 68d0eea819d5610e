use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// Command name to description, in the order the service sent them.
///
/// Equality ignores order; compare [`CommandListing::iter`] output when order
/// matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandListing(IndexMap<String, String>);

impl CommandListing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, desc)| (name.as_str(), desc.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for CommandListing {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for CommandListing {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, desc)| (name.to_string(), desc.to_string()))
                .collect(),
        )
    }
}

/// Reply of the `list_commands` server function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandsResponse {
    Ok { commands: CommandListing },
    Failed { error: FetchError },
}

impl CommandsResponse {
    pub fn into_result(self) -> Result<CommandListing, FetchError> {
        match self {
            CommandsResponse::Ok { commands } => Ok(commands),
            CommandsResponse::Failed { error } => Err(error),
        }
    }
}

impl From<Result<CommandListing, FetchError>> for CommandsResponse {
    fn from(result: Result<CommandListing, FetchError>) -> Self {
        match result {
            Ok(commands) => CommandsResponse::Ok { commands },
            Err(error) => CommandsResponse::Failed { error },
        }
    }
}
