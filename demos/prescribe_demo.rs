//! 处方生成演示程序
//!
//! 展示从医生档案配置到处方生成、文档导出、历史检索与验证查找的完整流程

use std::sync::Arc;

use medscript::{
    DoctorProfile, DocumentExporter, Gender, HeightUnit, Medication, MemoryBackend, Patient,
    PlainTextExporter, PrescriptionAssembler, PrescriptionHistory, PrescriptionStore,
    SystemIdGenerator, VerificationService, WeightUnit,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    tracing_subscriber::fmt::init();

    println!("🚀 MedScript 处方流程演示\n");

    let store = Arc::new(PrescriptionStore::new(Arc::new(MemoryBackend::new())));
    let ids = Arc::new(SystemIdGenerator::new());

    // 1. 配置医生档案
    let profile = DoctorProfile {
        name: "Asha Rao".to_string(),
        degree: "MBBS, MD".to_string(),
        registration_number: "MH-2011-40321".to_string(),
        phone: "9822001100".to_string(),
        hospital: "Lotus Multispeciality Clinic".to_string(),
        address: "14 Lake Road, Pune".to_string(),
        signature: None,
    };
    store.set_doctor_profile(&profile).await?;
    println!("✅ 医生档案配置完成");

    // 2. 录入患者与用药草稿
    let patient = Patient {
        name: "Ravi Kumar".to_string(),
        dob: "1984-11-02".to_string(),
        gender: Gender::Male,
        mobile: "9876501234".to_string(),
        address: Some("7 Station Road, Pune".to_string()),
        height: Some("172".to_string()),
        height_unit: HeightUnit::Cm,
        weight: Some("78".to_string()),
        weight_unit: WeightUnit::Kg,
        chief_complaint: "Fever and sore throat for 3 days".to_string(),
        diagnosis: "Acute pharyngitis".to_string(),
        notes: Some("Advised rest and fluids".to_string()),
        followup_date: Some("2026-08-11".to_string()),
        followup_time: Some("10:00".to_string()),
    };
    let medications = vec![
        Medication {
            id: String::new(),
            name: "Paracetamol".to_string(),
            strength: "500mg".to_string(),
            dose: "1 tablet".to_string(),
            route: "oral".to_string(),
            frequency: "three-times-daily".to_string(),
            duration: "5 days".to_string(),
            quantity: Some("15 tablets".to_string()),
            instructions: Some("After food".to_string()),
        },
        Medication {
            id: String::new(),
            name: "Azithromycin".to_string(),
            strength: "500mg".to_string(),
            dose: "1 tablet".to_string(),
            route: "oral".to_string(),
            frequency: "once-daily".to_string(),
            duration: "3 days".to_string(),
            quantity: Some("3 tablets".to_string()),
            instructions: None,
        },
    ];
    println!("✅ 患者信息与 {} 种药品录入完成", medications.len());

    // 3. 生成处方
    let assembler = PrescriptionAssembler::new(store.clone(), ids);
    let prescription = assembler.assemble(&patient, &medications).await?;
    println!(
        "📋 已生成处方 {} (验证码: {})",
        prescription.id, prescription.qr_code
    );

    // 4. 导出打印文档
    let settings = store.settings().await;
    let exporter = PlainTextExporter::new(settings.include_qr);
    let document = exporter.export(&prescription).await?;
    println!(
        "📄 导出文档 {} ({} 字节)",
        document.file_name,
        document.content.len()
    );
    println!("\n{}", document.content);

    // 5. 历史检索
    let history = PrescriptionHistory::new(store.clone());
    let matched = history.search("pharyngitis").await;
    println!("🔍 按诊断检索到 {} 张处方", matched.len());

    // 6. 验证查找
    let verifier = VerificationService::new(store.clone());
    let verified = verifier.verify(&prescription.qr_code).await?;
    println!(
        "🛡️ 验证通过: {} ({})",
        verified.id, verified.patient_data.name
    );

    println!("\n🎉 演示完成");
    Ok(())
}
