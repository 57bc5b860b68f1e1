//! HTTP处理器

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use medscript_core::{
    parse_entity, AppSettings, DoctorProfile, IdGenerator, MedScriptError, Medication, Patient,
    Prescription,
};
use medscript_store::{PrescriptionStore, StorageBackend};
use medscript_workflow::{PrescriptionAssembler, PrescriptionHistory, VerificationService};

/// 处理器共享状态
pub struct AppState {
    pub store: Arc<PrescriptionStore>,
    pub assembler: PrescriptionAssembler,
    pub verifier: VerificationService,
    pub history: PrescriptionHistory,
}

impl AppState {
    pub fn new(backend: Arc<dyn StorageBackend>, ids: Arc<dyn IdGenerator>) -> Self {
        let store = Arc::new(PrescriptionStore::new(backend));
        Self {
            assembler: PrescriptionAssembler::new(store.clone(), ids),
            verifier: VerificationService::new(store.clone()),
            history: PrescriptionHistory::new(store.clone()),
            store,
        }
    }
}

/// 错误到 HTTP 响应的映射
///
/// 本地包装类型：领域错误不感知 HTTP，状态码只在这一层决定。
pub struct ApiError(MedScriptError);

impl From<MedScriptError> for ApiError {
    fn from(error: MedScriptError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            MedScriptError::Validation(_)
            | MedScriptError::MalformedInput(_)
            | MedScriptError::EmptyMedicationList
            | MedScriptError::EmptyCode => StatusCode::BAD_REQUEST,
            MedScriptError::MissingProfile => StatusCode::CONFLICT,
            MedScriptError::NotFound(_) => StatusCode::NOT_FOUND,
            MedScriptError::Persistence(_)
            | MedScriptError::MalformedStorage(_)
            | MedScriptError::Serialization(_)
            | MedScriptError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let mut body = json!({
            "error": true,
            "message": self.0.to_string(),
            "status": status.as_u16()
        });
        if let MedScriptError::Validation(errors) = &self.0 {
            body["fields"] = json!(errors.0);
        }

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// API根路径处理器
pub async fn api_root() -> impl IntoResponse {
    Json(json!({
        "service": "MedScript Web API",
        "version": "1.0.0",
        "status": "running",
        "endpoints": {
            "health": "/health",
            "api": "/api/v1"
        }
    }))
}

/// 健康检查处理器
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": "1.0.0"
    }))
}

/// 历史查询参数
#[derive(Debug, Deserialize)]
pub struct HistoryQueryParams {
    pub search: Option<String>,
}

/// 处方历史查询处理器
pub async fn list_prescriptions(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HistoryQueryParams>,
) -> impl IntoResponse {
    let prescriptions = match params.search.as_deref() {
        Some(term) => state.history.search(term).await,
        None => state.history.list().await,
    };
    let total = prescriptions.len();

    Json(json!({
        "prescriptions": prescriptions,
        "total": total
    }))
}

/// 处方生成请求体
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPrescriptionRequest {
    pub patient_data: serde_json::Value,
    #[serde(default)]
    pub medications: Vec<serde_json::Value>,
}

/// 处方生成处理器
///
/// 表单层的职责在这里完成：逐实体解析并校验，然后交给组装器。
pub async fn create_prescription(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewPrescriptionRequest>,
) -> ApiResult<impl IntoResponse> {
    let patient: Patient = parse_entity(request.patient_data)?;
    let mut medications = Vec::with_capacity(request.medications.len());
    for value in request.medications {
        medications.push(parse_entity::<Medication>(value)?);
    }

    let prescription = state.assembler.assemble(&patient, &medications).await?;
    info!("Created prescription {} via API", prescription.id);
    Ok((StatusCode::CREATED, Json(prescription)))
}

/// 单张处方查询处理器
pub async fn get_prescription(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Prescription>> {
    let prescription = state
        .store
        .get_prescription_by_id(&id)
        .await
        .ok_or(MedScriptError::NotFound(id))?;
    Ok(Json(prescription))
}

/// 处方删除处理器
pub async fn delete_prescription(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    state.history.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 验证请求体
#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub code: String,
}

/// 验证码查找处理器
pub async fn verify_prescription(
    State(state): State<Arc<AppState>>,
    Json(request): Json<VerifyRequest>,
) -> ApiResult<Json<Prescription>> {
    let prescription = state.verifier.verify(&request.code).await?;
    Ok(Json(prescription))
}

/// 医生档案查询处理器
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DoctorProfile>> {
    let profile = state
        .store
        .doctor_profile()
        .await
        .ok_or(MedScriptError::NotFound("doctorProfile".to_string()))?;
    Ok(Json(profile))
}

/// 医生档案写入处理器
pub async fn put_profile(
    State(state): State<Arc<AppState>>,
    Json(value): Json<serde_json::Value>,
) -> ApiResult<Json<DoctorProfile>> {
    let profile: DoctorProfile = parse_entity(value)?;
    state.store.set_doctor_profile(&profile).await?;
    Ok(Json(profile))
}

/// 应用设置查询处理器
pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<AppSettings> {
    Json(state.store.settings().await)
}

/// 应用设置写入处理器
pub async fn put_settings(
    State(state): State<Arc<AppState>>,
    Json(settings): Json<AppSettings>,
) -> ApiResult<Json<AppSettings>> {
    state.store.set_settings(&settings).await?;
    Ok(Json(settings))
}

/// 重置安装处理器：一步清空全部本地数据
pub async fn reset(State(state): State<Arc<AppState>>) -> ApiResult<impl IntoResponse> {
    state.store.clear_all().await?;
    info!("Cleared all application data");
    Ok(StatusCode::NO_CONTENT)
}
