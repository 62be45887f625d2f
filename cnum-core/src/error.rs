use thiserror::Error;

#[derive(Error, Debug)]
pub enum CnumError {
    // 扫描器错误
    #[error("Numeral pattern compile failed: {0}")]
    Pattern(String),

    // 配置错误
    #[error("Config parse error: {path} - {reason}")]
    ConfigParse { path: String, reason: String },

    #[error("Config serialize error: {0}")]
    ConfigSerialize(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(String),

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CnumResult<T> = Result<T, CnumError>;
