use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0} is not an object")]
    NotEnumerable(String),

    #[error("Invalid campus {school}/{campus}: {source}")]
    Campus {
        school: String,
        campus: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown dataset kind: {0}")]
pub struct ParseKindError(pub String);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown grade: {0:?}")]
pub struct ParseGradeError(pub String);
