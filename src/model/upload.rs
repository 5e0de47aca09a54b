use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UploadedImageDto {
    pub url: String,
    pub public_id: String,
    pub original_name: String,
    pub size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct MediaUsageFiguresDto {
    pub storage: String,
    pub bandwidth: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct MediaStatusDto {
    pub cloud_name: String,
    pub plan: String,
    pub usage: MediaUsageFiguresDto,
}
