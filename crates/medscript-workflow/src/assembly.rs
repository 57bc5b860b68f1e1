//! 处方生成
//!
//! 将校验后的患者信息、非空用药列表与当前医生档案组装为一张
//! 不可变处方并提交存储。

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use medscript_core::{
    IdGenerator, MedScriptError, Medication, Patient, Prescription, Result, Validate,
};
use medscript_store::PrescriptionStore;

/// 处方组装器
pub struct PrescriptionAssembler {
    store: Arc<PrescriptionStore>,
    ids: Arc<dyn IdGenerator>,
}

impl PrescriptionAssembler {
    pub fn new(store: Arc<PrescriptionStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    /// 生成处方
    ///
    /// 前置条件按固定顺序检查：医生档案已配置、患者字段合法、
    /// 用药列表非空。doctor_data 取当前档案的值拷贝；存储提交失败时
    /// 错误原样上抛且不重试，调用方的草稿不受影响。
    pub async fn assemble(
        &self,
        patient: &Patient,
        medications: &[Medication],
    ) -> Result<Prescription> {
        let profile = self
            .store
            .doctor_profile()
            .await
            .ok_or(MedScriptError::MissingProfile)?;

        patient.validate()?;

        if medications.is_empty() {
            return Err(MedScriptError::EmptyMedicationList);
        }

        // 条目标识符缺失或在本张处方内重复时重新分配
        let mut medications = medications.to_vec();
        let mut seen = HashSet::new();
        for medication in &mut medications {
            if medication.id.is_empty() || !seen.insert(medication.id.clone()) {
                medication.id = self.ids.next_medication_id();
                seen.insert(medication.id.clone());
            }
        }

        let id = self.ids.next_prescription_id();
        let prescription = Prescription {
            id: id.clone(),
            patient_data: patient.clone(),
            medications,
            doctor_data: profile,
            created_at: Utc::now(),
            qr_code: id,
        };

        self.store.save_prescription(&prescription).await?;
        info!("Generated prescription {}", prescription.id);
        Ok(prescription)
    }
}
