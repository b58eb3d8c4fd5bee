use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 轉換流程的結果型別
pub type Result<T> = std::result::Result<T, ConvertError>;

/// 轉換流程中可能發生的錯誤
#[derive(Error, Debug)]
pub enum ConvertError {
    /// 來源檔案不存在
    #[error("檔案 '{}' 不存在", .0.display())]
    FileNotFound(PathBuf),

    /// 副檔名不在支援清單中
    #[error("不支援的副檔名 '{extension}'：{}", .path.display())]
    UnsupportedExtension { path: PathBuf, extension: String },

    /// 無法建立輸出目錄
    #[error("無法建立目錄 '{}'：{source}", .path.display())]
    DirectoryCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 輸出目錄不可寫入
    #[error("目錄 '{}' 不可寫入", .0.display())]
    NotWritable(PathBuf),

    /// 找不到轉換程式
    #[error("找不到轉換程式 '{0}'")]
    ConverterNotFound(String),

    /// 尚未設定輸出目錄
    #[error("尚未設定輸出目錄")]
    MissingTargetDirectory,

    /// 無法啟動轉換程式
    #[error("無法啟動轉換程式 '{converter}'：{source}")]
    Spawn {
        converter: String,
        #[source]
        source: io::Error,
    },

    /// 轉換程式以非零狀態結束，攜帶其輸出
    #[error("轉換失敗：{0}")]
    ExecutionFailed(String),

    /// 目錄中沒有可轉換的檔案
    #[error("'{}' 中沒有可轉換的檔案", .0.display())]
    NoInputFiles(PathBuf),

    #[error("IO 錯誤：{0}")]
    Io(#[from] io::Error),
}

impl From<ConvertError> for io::Error {
    fn from(err: ConvertError) -> Self {
        let kind = match &err {
            ConvertError::FileNotFound(_) | ConvertError::ConverterNotFound(_) => io::ErrorKind::NotFound,
            ConvertError::NotWritable(_) => io::ErrorKind::PermissionDenied,
            ConvertError::UnsupportedExtension { .. } | ConvertError::MissingTargetDirectory => io::ErrorKind::InvalidInput,
            ConvertError::Io(e) => e.kind(),
            _ => io::ErrorKind::Other,
        };
        io::Error::new(kind, err.to_string())
    }
}
