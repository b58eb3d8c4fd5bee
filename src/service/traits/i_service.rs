use std::io;
use crate::error::Result;
use crate::models::conversion::{ConversionRequest, ConversionResult};
use crate::models::file::{FileCollectInput, FileCollectOutput};
use crate::models::process::{Invocation, ProcessOutput};

// 轉換服務接口，負責呼叫外部轉換程式
pub trait ConverterServiceTrait: Send + Sync {
    /// 執行一次轉換
    /// # 參數
    /// - request: 已驗證的轉換請求
    /// # 回傳
    /// - 成功時返回轉換程式的輸出行，失敗時返回 ConvertError
    fn execute(&self, request: &ConversionRequest) -> Result<ConversionResult>;
}

// File 服務接口，負責收集待轉換的檔案
pub trait FileServiceTrait: Send + Sync {
    fn collect_files(&self, input: FileCollectInput) -> Result<FileCollectOutput>;
}

// 外部程序執行接口，測試時可替換
pub trait ProcessRunner: Send + Sync {
    fn run(&self, invocation: &Invocation) -> io::Result<ProcessOutput>;
}
