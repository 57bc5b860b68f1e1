//! 验证查找演示程序
//!
//! 展示手工输入的验证码识别、查找命中与未命中，以及删除后的行为

use std::sync::Arc;

use medscript::{
    detect_code_from_input, DoctorProfile, Gender, HeightUnit, MedScriptError, Medication,
    MemoryBackend, Patient, PrescriptionAssembler, PrescriptionStore, SystemIdGenerator,
    VerificationService, WeightUnit,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    println!("🛡️ MedScript 验证查找演示\n");

    let store = Arc::new(PrescriptionStore::new(Arc::new(MemoryBackend::new())));
    store
        .set_doctor_profile(&DoctorProfile {
            name: "Asha Rao".to_string(),
            degree: "MBBS, MD".to_string(),
            registration_number: "MH-2011-40321".to_string(),
            phone: "9822001100".to_string(),
            hospital: "Lotus Multispeciality Clinic".to_string(),
            address: "14 Lake Road, Pune".to_string(),
            signature: None,
        })
        .await?;

    // 1. 先开一张处方
    let assembler =
        PrescriptionAssembler::new(store.clone(), Arc::new(SystemIdGenerator::new()));
    let patient = Patient {
        name: "Meera Shah".to_string(),
        dob: "1992-06-18".to_string(),
        gender: Gender::Female,
        mobile: "9898012345".to_string(),
        address: None,
        height: None,
        height_unit: HeightUnit::Cm,
        weight: None,
        weight_unit: WeightUnit::Kg,
        chief_complaint: "Seasonal allergy".to_string(),
        diagnosis: "Allergic rhinitis".to_string(),
        notes: None,
        followup_date: None,
        followup_time: None,
    };
    let prescription = assembler
        .assemble(
            &patient,
            &[Medication {
                id: String::new(),
                name: "Cetirizine".to_string(),
                strength: "10mg".to_string(),
                dose: "1 tablet".to_string(),
                route: "oral".to_string(),
                frequency: "at-night".to_string(),
                duration: "7 days".to_string(),
                quantity: None,
                instructions: None,
            }],
        )
        .await?;
    println!("📋 已生成处方 {}", prescription.id);

    let verifier = VerificationService::new(store.clone());

    // 2. 手工输入识别
    for input in [prescription.id.as_str(), "not-a-code", "RX"] {
        match detect_code_from_input(input) {
            Some(code) => println!("⌨️ 输入 {:?} 识别为验证码 {}", input, code),
            None => println!("⌨️ 输入 {:?} 不是有效验证码", input),
        }
    }

    // 3. 查找命中与未命中
    let verified = verifier.verify(&prescription.qr_code).await?;
    println!("✅ 验证通过: {} ({})", verified.id, verified.patient_data.name);

    match verifier.verify("RX0000000000000").await {
        Err(MedScriptError::NotFound(code)) => println!("❌ 验证码 {} 未找到", code),
        other => println!("意外结果: {:?}", other.map(|p| p.id)),
    }

    // 4. 删除后同一验证码不再命中
    store.delete_prescription(&prescription.id).await?;
    match verifier.verify(&prescription.id).await {
        Err(MedScriptError::NotFound(_)) => {
            println!("🗑️ 处方删除后验证码失效（索引残留项不影响结果）")
        }
        other => println!("意外结果: {:?}", other.map(|p| p.id)),
    }

    println!("\n🎉 演示完成");
    Ok(())
}
