use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocflowError {
    #[error("OPENAI_API_KEY not set: export it or add it to a .env file")]
    MissingApiKey,

    #[error("invalid value for {var}: '{value}'")]
    InvalidEnvValue { var: &'static str, value: String },

    #[error("input file not found: {0}")]
    InputNotFound(String),

    #[error("template not found: {0}")]
    TemplateNotFound(String),

    #[error("template has no sections: {0}")]
    EmptyTemplate(String),

    #[error("validation tracking file not found: {0}")]
    ValidationNotFound(String),

    #[error("stage '{stage}' failed with exit code {code}")]
    StageFailed { stage: String, code: i32 },

    #[error("failed to launch stage '{stage}': {source}")]
    StageSpawn {
        stage: String,
        #[source]
        source: std::io::Error,
    },

    #[error("stage '{stage}' requires the {needs} stage (remove --skip-{needs})")]
    StageDependency {
        stage: &'static str,
        needs: &'static str,
    },

    #[error("generation failed: {0}")]
    Generation(#[from] openai_client::ChatClientError),

    #[error("template parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DocflowError>;
