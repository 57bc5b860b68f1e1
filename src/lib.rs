//! # MedScript
//!
//! 数字处方管理系统：处方生成、本地持久化、历史检索与验证查找。
//! 本 crate 仅聚合各子模块的常用类型，便于演示程序与下游一次引入。

pub use medscript_core::{
    parse_entity, AppSettings, DoctorProfile, FieldError, Gender, HeightUnit, IdGenerator,
    MedScriptError, Medication, Patient, Prescription, Result, SystemIdGenerator, Validate,
    ValidationErrors, WeightUnit,
};
pub use medscript_integration::{
    detect_code_from_input, write_to_dir, CodeScanner, DocumentExporter, FrameSource,
    IdleFrameSource, PlainTextExporter, RenderedDocument,
};
pub use medscript_store::{
    keys, LocalFileBackend, MemoryBackend, PrescriptionStore, StorageBackend,
};
pub use medscript_workflow::{PrescriptionAssembler, PrescriptionHistory, VerificationService};
