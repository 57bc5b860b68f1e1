//! 验证码采集
//!
//! 核心只消费采集产出的字符串（交给验证查找），帧解码本身属于
//! 外部协作方。

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::task::JoinHandle;
use tracing::debug;

/// 从手工输入中提取验证码
///
/// 形如处方标识符的输入（RX 前缀且长度大于 3）原样通过，其余视为
/// 无效输入。
pub fn detect_code_from_input(input: &str) -> Option<String> {
    if input.starts_with("RX") && input.len() > 3 {
        Some(input.to_string())
    } else {
        None
    }
}

/// 取景帧来源（摄像头等外部设备的句柄）
#[async_trait]
pub trait FrameSource: Send + Sync {
    /// 尝试从当前帧解码出验证码
    async fn decode_frame(&self) -> Option<String>;
}

/// 从不产生解码结果的占位帧来源
pub struct IdleFrameSource;

#[async_trait]
impl FrameSource for IdleFrameSource {
    async fn decode_frame(&self) -> Option<String> {
        None
    }
}

/// 轮询取景帧的扫码器
///
/// 每秒轮询一次帧来源，把解码结果交给回调；停止即中止轮询任务。
pub struct CodeScanner {
    task: Option<JoinHandle<()>>,
}

impl CodeScanner {
    pub fn new() -> Self {
        Self { task: None }
    }

    /// 启动扫码轮询
    pub fn start<F>(&mut self, source: Arc<dyn FrameSource>, on_detected: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.stop();
        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_secs(1));
            loop {
                ticker.tick().await;
                debug!("Scanning for verification codes...");
                if let Some(code) = source.decode_frame().await {
                    on_detected(code);
                }
            }
        }));
    }

    /// 停止扫码轮询
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    pub fn is_scanning(&self) -> bool {
        self.task.is_some()
    }
}

impl Default for CodeScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CodeScanner {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;
    use tokio::time::timeout;

    struct StaticFrameSource {
        code: String,
    }

    #[async_trait]
    impl FrameSource for StaticFrameSource {
        async fn decode_frame(&self) -> Option<String> {
            Some(self.code.clone())
        }
    }

    #[test]
    fn test_detect_code_from_input() {
        assert_eq!(
            detect_code_from_input("RX1700000000000"),
            Some("RX1700000000000".to_string())
        );
        assert_eq!(detect_code_from_input(""), None);
        assert_eq!(detect_code_from_input("RX"), None);
        assert_eq!(detect_code_from_input("RX1"), None);
        assert_eq!(detect_code_from_input("ABC123"), None);
    }

    #[tokio::test]
    async fn test_scanner_forwards_decoded_codes() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scanner = CodeScanner::new();
        scanner.start(
            Arc::new(StaticFrameSource {
                code: "RX42".to_string(),
            }),
            move |code| {
                let _ = tx.send(code);
            },
        );

        let received = timeout(Duration::from_secs(5), rx.recv()).await.unwrap();
        assert_eq!(received, Some("RX42".to_string()));

        scanner.stop();
        assert!(!scanner.is_scanning());
    }

    #[tokio::test]
    async fn test_idle_source_never_detects() {
        assert_eq!(IdleFrameSource.decode_frame().await, None);
    }
}
