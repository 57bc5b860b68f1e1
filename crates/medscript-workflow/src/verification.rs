//! 处方验证查找
//!
//! 给定手工输入或扫码得到的验证码，确认其是否对应一张已存储处方。

use std::sync::Arc;

use tracing::{debug, info};

use medscript_core::{MedScriptError, Prescription, Result};
use medscript_store::PrescriptionStore;

/// 验证查找服务
pub struct VerificationService {
    store: Arc<PrescriptionStore>,
}

impl VerificationService {
    pub fn new(store: Arc<PrescriptionStore>) -> Self {
        Self { store }
    }

    /// 按验证码查找处方
    ///
    /// 纯查询：去除首尾空白后做大小写敏感的精确匹配，不做模糊匹配。
    /// 处方列表是权威数据源，验证码索引仅作为派生结构存在。
    pub async fn verify(&self, code: &str) -> Result<Prescription> {
        let code = code.trim();
        if code.is_empty() {
            return Err(MedScriptError::EmptyCode);
        }

        debug!("Verifying code {}", code);
        match self
            .store
            .list_prescriptions()
            .await
            .into_iter()
            .find(|p| p.id == code)
        {
            Some(prescription) => {
                info!("Verified prescription {}", prescription.id);
                Ok(prescription)
            }
            None => Err(MedScriptError::NotFound(code.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use medscript_core::{
        DoctorProfile, Gender, HeightUnit, Medication, Patient, WeightUnit,
    };
    use medscript_store::MemoryBackend;

    fn sample_prescription(id: &str) -> Prescription {
        Prescription {
            id: id.to_string(),
            patient_data: Patient {
                name: "Jane Doe".to_string(),
                dob: "1990-04-12".to_string(),
                gender: Gender::Female,
                mobile: "9876543210".to_string(),
                address: None,
                height: None,
                height_unit: HeightUnit::Cm,
                weight: None,
                weight_unit: WeightUnit::Kg,
                chief_complaint: "Fever".to_string(),
                diagnosis: "Viral infection".to_string(),
                notes: None,
                followup_date: None,
                followup_time: None,
            },
            medications: vec![Medication {
                id: format!("med_{}", id),
                name: "Paracetamol".to_string(),
                strength: "500mg".to_string(),
                dose: "1 tablet".to_string(),
                route: "oral".to_string(),
                frequency: "once-daily".to_string(),
                duration: "5 days".to_string(),
                quantity: None,
                instructions: None,
            }],
            doctor_data: DoctorProfile {
                name: "John Smith".to_string(),
                degree: "MBBS".to_string(),
                registration_number: "REG-1234".to_string(),
                phone: "0123456789".to_string(),
                hospital: "City Clinic".to_string(),
                address: "1 Main St".to_string(),
                signature: None,
            },
            created_at: Utc::now(),
            qr_code: id.to_string(),
        }
    }

    async fn seeded_store(ids: &[&str]) -> Arc<PrescriptionStore> {
        let store = Arc::new(PrescriptionStore::new(Arc::new(MemoryBackend::new())));
        for id in ids {
            store.save_prescription(&sample_prescription(id)).await.unwrap();
        }
        store
    }

    #[tokio::test]
    async fn test_verify_known_code() {
        let store = seeded_store(&["RX100", "RX200"]).await;
        let service = VerificationService::new(store);

        let found = service.verify("RX100").await.unwrap();
        assert_eq!(found.id, "RX100");
    }

    #[tokio::test]
    async fn test_verify_trims_whitespace() {
        let store = seeded_store(&["RX100"]).await;
        let service = VerificationService::new(store);

        let found = service.verify("  RX100  ").await.unwrap();
        assert_eq!(found.id, "RX100");
    }

    #[tokio::test]
    async fn test_empty_code_rejected() {
        let store = seeded_store(&["RX100"]).await;
        let service = VerificationService::new(store);

        assert!(matches!(
            service.verify("").await,
            Err(MedScriptError::EmptyCode)
        ));
        assert!(matches!(
            service.verify("   ").await,
            Err(MedScriptError::EmptyCode)
        ));
    }

    #[tokio::test]
    async fn test_unknown_code_not_found() {
        let store = seeded_store(&["RX100"]).await;
        let service = VerificationService::new(store);

        assert!(matches!(
            service.verify("nonexistent").await,
            Err(MedScriptError::NotFound(_))
        ));
        // 精确匹配，大小写敏感
        assert!(matches!(
            service.verify("rx100").await,
            Err(MedScriptError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_deleted_prescription_not_verifiable() {
        // 删除后的处方不可再验证；索引残留项不影响查找结果
        let store = seeded_store(&["RX100"]).await;
        store.delete_prescription("RX100").await.unwrap();
        let service = VerificationService::new(store.clone());

        assert!(matches!(
            service.verify("RX100").await,
            Err(MedScriptError::NotFound(_))
        ));
        assert!(store.qr_index().await.contains_key("RX100"));
    }

    #[tokio::test]
    async fn test_verify_is_repeatable() {
        let store = seeded_store(&["RX100"]).await;
        let service = VerificationService::new(store);

        let first = service.verify("RX100").await.unwrap();
        let second = service.verify("RX100").await.unwrap();
        assert_eq!(first, second);
    }
}
