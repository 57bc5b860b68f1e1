//! 处方文档导出
//!
//! 把一张完整处方渲染为可下载的打印文档。导出对存储没有副作用，
//! 失败也不影响已提交的处方数据。

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, Utc};
use tracing::debug;

use medscript_core::{MedScriptError, Prescription, Result};

/// 渲染完成的处方文档
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub file_name: String,
    pub content: String,
}

/// 文档导出协作方
#[async_trait]
pub trait DocumentExporter: Send + Sync {
    async fn export(&self, prescription: &Prescription) -> Result<RenderedDocument>;
}

/// 纯文本导出实现
///
/// 按打印版式的分节顺序渲染：医生抬头、患者信息、诊疗信息、
/// 用药列表、复诊安排与含验证码的页脚。
pub struct PlainTextExporter {
    include_qr: bool,
}

impl PlainTextExporter {
    pub fn new(include_qr: bool) -> Self {
        Self { include_qr }
    }

    /// 按出生日期计算周岁，未到生日减一；无法解析时不显示年龄
    fn age_in_years(dob: &str) -> Option<i32> {
        let birth = NaiveDate::parse_from_str(dob, "%Y-%m-%d").ok()?;
        let today = Utc::now().date_naive();
        let mut age = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        Some(age)
    }

    fn render(&self, prescription: &Prescription) -> RenderedDocument {
        let doctor = &prescription.doctor_data;
        let patient = &prescription.patient_data;
        let mut doc = String::new();

        let _ = writeln!(doc, "PRESCRIPTION");
        let _ = writeln!(doc, "Dr. {}, {}", doctor.name, doctor.degree);
        let _ = writeln!(doc, "Reg No: {}", doctor.registration_number);
        let _ = writeln!(doc, "{}", doctor.hospital);
        let _ = writeln!(doc);

        let _ = writeln!(doc, "PATIENT INFORMATION");
        let _ = writeln!(doc, "Name: {}", patient.name);
        if let Some(age) = Self::age_in_years(&patient.dob) {
            let _ = writeln!(doc, "Age: {} years", age);
        }
        let _ = writeln!(doc, "Gender: {}", patient.gender);
        let _ = writeln!(doc, "Mobile: {}", patient.mobile);
        let _ = writeln!(doc, "DOB: {}", patient.dob);
        if let Some(address) = &patient.address {
            let _ = writeln!(doc, "Address: {}", address);
        }
        let _ = writeln!(doc);

        let _ = writeln!(doc, "MEDICAL DETAILS");
        let _ = writeln!(doc, "Chief Complaint: {}", patient.chief_complaint);
        let _ = writeln!(doc, "Diagnosis: {}", patient.diagnosis);
        if let Some(notes) = &patient.notes {
            let _ = writeln!(doc, "Notes: {}", notes);
        }
        let _ = writeln!(doc);

        let _ = writeln!(doc, "MEDICATIONS");
        for (index, medication) in prescription.medications.iter().enumerate() {
            let _ = writeln!(
                doc,
                "{}. {} {} - {} - {} - {} - {}",
                index + 1,
                medication.name,
                medication.strength,
                medication.dose,
                medication.route,
                medication.frequency,
                medication.duration
            );
            if let Some(instructions) = &medication.instructions {
                let _ = writeln!(doc, "   Instructions: {}", instructions);
            }
        }

        if let Some(followup_date) = &patient.followup_date {
            let _ = writeln!(doc);
            let _ = writeln!(doc, "FOLLOW-UP");
            let followup_time = patient.followup_time.as_deref().unwrap_or("");
            let _ = writeln!(doc, "Next visit: {} {}", followup_date, followup_time);
        }

        let _ = writeln!(doc);
        let _ = writeln!(doc, "Date: {}", prescription.created_at.format("%Y-%m-%d"));
        let _ = writeln!(doc, "Prescription ID: {}", prescription.id);
        if self.include_qr && !prescription.qr_code.is_empty() {
            let _ = writeln!(doc, "Verification Code: {}", prescription.qr_code);
            let _ = writeln!(doc, "Scan to verify");
        }
        let _ = writeln!(doc, "-- Prescription generated by MedScript --");

        let file_name = format!(
            "prescription_{}_{}.txt",
            patient.name.split_whitespace().collect::<Vec<_>>().join("_"),
            prescription.id
        );

        RenderedDocument {
            file_name,
            content: doc,
        }
    }
}

#[async_trait]
impl DocumentExporter for PlainTextExporter {
    async fn export(&self, prescription: &Prescription) -> Result<RenderedDocument> {
        let document = self.render(prescription);
        debug!(
            "Rendered document {} ({} bytes)",
            document.file_name,
            document.content.len()
        );
        Ok(document)
    }
}

/// 将渲染结果写入目录，返回完整路径
pub async fn write_to_dir<P: AsRef<Path>>(
    document: &RenderedDocument,
    dir: P,
) -> Result<PathBuf> {
    let dir = dir.as_ref();
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| MedScriptError::Persistence(e.to_string()))?;
    let path = dir.join(&document.file_name);
    tokio::fs::write(&path, &document.content)
        .await
        .map_err(|e| MedScriptError::Persistence(e.to_string()))?;
    Ok(path)
}
