//! エラーハンドリング
//!
//! 設定・ファイル I/O・CLI 引数など、ドメイン外のエラーをこの型に集約する。
//! 終了コードは sysexits.h に合わせる。

/// 引数不正（EX_USAGE）
pub const EXIT_USAGE: i32 = 64;
/// 入力データ不正（EX_DATAERR）
pub const EXIT_DATAERR: i32 = 65;
/// 内部エラー（EX_SOFTWARE）
pub const EXIT_SOFTWARE: i32 = 70;
/// I/O エラー（EX_IOERR）
pub const EXIT_IOERR: i32 = 74;

/// ワークスペース共通のエラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Io(String),
    #[error("JSON error: {0}")]
    Json(String),
    #[error("{0}")]
    Env(String),
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    InvalidData(String),
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// 使い方の表示が必要なエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => EXIT_USAGE,
            Self::InvalidData(_) | Self::Json(_) => EXIT_DATAERR,
            Self::Io(_) => EXIT_IOERR,
            Self::Env(_) | Self::System(_) => EXIT_SOFTWARE,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
