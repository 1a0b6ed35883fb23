use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("field '{inspection_task}' has options but type {field_type:?} is not Single Select")]
    OptionsWithoutSingleSelect {
        inspection_task: String,
        field_type: Option<String>,
    },
    #[error("subform name is empty")]
    EmptyName,
}

pub type Result<T> = std::result::Result<T, ModelError>;
