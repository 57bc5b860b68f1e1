//! 标识符生成

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

/// 标识符生成能力
///
/// 处方与药品条目使用基于墙钟毫秒数的不透明标识符；调用方注入该
/// 能力，测试中可替换为固定实现。
pub trait IdGenerator: Send + Sync {
    /// 生成处方标识符，格式 `RX<毫秒时间戳>`
    fn next_prescription_id(&self) -> String;

    /// 生成药品条目标识符，格式 `med_<毫秒时间戳>`
    fn next_medication_id(&self) -> String;
}

/// 基于系统时钟的默认实现
///
/// 维护单调递增的毫秒数下限，同一毫秒内的连续调用也不会重复。
pub struct SystemIdGenerator {
    last_millis: AtomicI64,
}

impl SystemIdGenerator {
    pub fn new() -> Self {
        Self {
            last_millis: AtomicI64::new(0),
        }
    }

    fn next_millis(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last_millis.load(Ordering::Relaxed);
        loop {
            let candidate = if now > last { now } else { last + 1 };
            match self.last_millis.compare_exchange_weak(
                last,
                candidate,
                Ordering::Relaxed,
                Ordering::Relaxed,
            ) {
                Ok(_) => return candidate,
                Err(observed) => last = observed,
            }
        }
    }
}

impl IdGenerator for SystemIdGenerator {
    fn next_prescription_id(&self) -> String {
        format!("RX{}", self.next_millis())
    }

    fn next_medication_id(&self) -> String {
        format!("med_{}", self.next_millis())
    }
}

impl Default for SystemIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_id_formats() {
        let ids = SystemIdGenerator::new();
        let rx = ids.next_prescription_id();
        let med = ids.next_medication_id();
        assert!(rx.starts_with("RX"));
        assert!(rx[2..].chars().all(|c| c.is_ascii_digit()));
        assert!(med.starts_with("med_"));
        assert!(med[4..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_same_millisecond_calls_stay_unique() {
        let ids = SystemIdGenerator::new();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(ids.next_prescription_id()));
        }
    }
}
