//! 字段校验
//!
//! 与表单层一致的字段级规则：必填检查与最小长度，不做跨字段校验
//! （例如复诊时间不要求复诊日期同时存在）。

use serde::de::DeserializeOwned;

use crate::error::{FieldError, MedScriptError, Result, ValidationErrors};
use crate::models::{DoctorProfile, Medication, Patient};

/// 实体字段校验能力
///
/// 一次调用收集全部失败字段，而非在第一个错误处停止。
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn required(errors: &mut Vec<FieldError>, field: &str, value: &str, message: &str) {
    if value.is_empty() {
        errors.push(FieldError::new(field, message));
    }
}

fn min_len(errors: &mut Vec<FieldError>, field: &str, value: &str, min: usize, message: &str) {
    if value.chars().count() < min {
        errors.push(FieldError::new(field, message));
    }
}

fn finish(errors: Vec<FieldError>) -> Result<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(MedScriptError::Validation(ValidationErrors(errors)))
    }
}

impl Validate for DoctorProfile {
    fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        required(&mut errors, "name", &self.name, "Name is required");
        required(&mut errors, "degree", &self.degree, "Degree is required");
        required(
            &mut errors,
            "registrationNumber",
            &self.registration_number,
            "Registration number is required",
        );
        min_len(
            &mut errors,
            "phone",
            &self.phone,
            10,
            "Valid phone number is required",
        );
        required(
            &mut errors,
            "hospital",
            &self.hospital,
            "Hospital/Clinic name is required",
        );
        required(&mut errors, "address", &self.address, "Address is required");
        finish(errors)
    }
}

impl Validate for Medication {
    fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        required(&mut errors, "name", &self.name, "Drug name is required");
        required(&mut errors, "strength", &self.strength, "Strength is required");
        required(&mut errors, "dose", &self.dose, "Dose is required");
        required(&mut errors, "route", &self.route, "Route is required");
        required(&mut errors, "frequency", &self.frequency, "Frequency is required");
        required(&mut errors, "duration", &self.duration, "Duration is required");
        finish(errors)
    }
}

impl Validate for Patient {
    fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();
        required(&mut errors, "name", &self.name, "Patient name is required");
        required(&mut errors, "dob", &self.dob, "Date of birth is required");
        min_len(
            &mut errors,
            "mobile",
            &self.mobile,
            10,
            "Valid mobile number is required",
        );
        required(
            &mut errors,
            "chiefComplaint",
            &self.chief_complaint,
            "Chief complaint is required",
        );
        required(&mut errors, "diagnosis", &self.diagnosis, "Diagnosis is required");
        finish(errors)
    }
}

/// 将未知 JSON 值解析为实体并执行字段校验
///
/// 结构性错误（非对象、字段类型不符、未知枚举值）报告为
/// `MalformedInput`；结构正确的值再走字段级校验。
pub fn parse_entity<T>(value: serde_json::Value) -> Result<T>
where
    T: DeserializeOwned + Validate,
{
    let entity: T = serde_json::from_value(value)
        .map_err(|e| MedScriptError::MalformedInput(e.to_string()))?;
    entity.validate()?;
    Ok(entity)
}
