//! 处方历史管理

use std::sync::Arc;

use tracing::debug;

use medscript_core::{Prescription, Result};
use medscript_store::PrescriptionStore;

/// 已开处方的查询与删除入口
pub struct PrescriptionHistory {
    store: Arc<PrescriptionStore>,
}

impl PrescriptionHistory {
    pub fn new(store: Arc<PrescriptionStore>) -> Self {
        Self { store }
    }

    /// 全部历史处方，最新在前
    pub async fn list(&self) -> Vec<Prescription> {
        self.store.list_prescriptions().await
    }

    /// 按搜索词过滤历史处方
    ///
    /// 大小写不敏感的子串匹配，命中患者姓名、诊断或处方标识符任一
    /// 即保留；空搜索词返回全部。
    pub async fn search(&self, term: &str) -> Vec<Prescription> {
        let prescriptions = self.store.list_prescriptions().await;
        if term.is_empty() {
            return prescriptions;
        }

        let needle = term.to_lowercase();
        let matched: Vec<Prescription> = prescriptions
            .into_iter()
            .filter(|p| {
                p.patient_data.name.to_lowercase().contains(&needle)
                    || p.patient_data.diagnosis.to_lowercase().contains(&needle)
                    || p.id.to_lowercase().contains(&needle)
            })
            .collect();
        debug!("Search term {:?} matched {} prescriptions", term, matched.len());
        matched
    }

    /// 按标识符删除一张处方
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete_prescription(id).await
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

    fn prescription(id: &str, patient_name: &str, diagnosis: &str) -> Prescription {
        Prescription {
            id: id.to_string(),
            patient_data: Patient {
                name: patient_name.to_string(),
                dob: "1990-04-12".to_string(),
                gender: Gender::Other,
                mobile: "9876543210".to_string(),
                address: None,
                height: None,
                height_unit: HeightUnit::Cm,
                weight: None,
                weight_unit: WeightUnit::Kg,
                chief_complaint: "Headache".to_string(),
                diagnosis: diagnosis.to_string(),
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

    async fn seeded_history() -> PrescriptionHistory {
        let store = Arc::new(PrescriptionStore::new(Arc::new(MemoryBackend::new())));
        store
            .save_prescription(&prescription("RX1", "Jane Doe", "Migraine"))
            .await
            .unwrap();
        store
            .save_prescription(&prescription("RX2", "Bob Roe", "Tension headache"))
            .await
            .unwrap();
        PrescriptionHistory::new(store)
    }

    #[tokio::test]
    async fn test_empty_term_returns_all_newest_first() {
        let history = seeded_history().await;
        let all = history.search("").await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, "RX2");
    }

    #[tokio::test]
    async fn test_search_by_patient_name_case_insensitive() {
        let history = seeded_history().await;
        let matched = history.search("jane").await;
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "RX1");
    }

    #[tokio::test]
    async fn test_search_by_diagnosis() {
        let history = seeded_history().await;
        let matched = history.search("HEADACHE").await;
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "RX2");
    }

    #[tokio::test]
    async fn test_search_by_prescription_id() {
        let history = seeded_history().await;
        let matched = history.search("rx1").await;
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "RX1");
    }

    #[tokio::test]
    async fn test_search_no_match() {
        let history = seeded_history().await;
        assert!(history.search("amoxicillin").await.is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_from_history() {
        let history = seeded_history().await;
        history.delete("RX2").await.unwrap();

        let all = history.list().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "RX1");
    }
}
