use std::ffi::OsString;
use std::path::PathBuf;

/// 一次外部程序呼叫：程式、參數陣列與 HOME
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
    pub home: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    /// 結束碼；被訊號終止時為 None
    pub status: Option<i32>,
    /// stdout 與 stderr 共用同一管道，依寫入順序合併
    pub output: Vec<u8>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// 依序切成各行，去除結尾空行
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = String::from_utf8_lossy(&self.output)
            .lines()
            .map(|line| line.trim_end_matches('\r').to_string())
            .collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }
        lines
    }
}
