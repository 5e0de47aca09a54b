use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_APP_ENV: &str = "development";
const DEFAULT_STATIC_DIR: &str = "public";
const DEFAULT_CORS_ORIGINS: &[&str] = &[
    "https://ninja-frontend-eta.vercel.app",
    "http://localhost:3000",
    "http://localhost:5000",
];
const DEFAULT_CORS_ALLOW_SUFFIX: &str = ".vercel.app";

/// Credentials for the hosted image service.
#[derive(Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

/// Admin account created at startup when no admin exists yet.
#[derive(Clone)]
pub struct AdminBootstrap {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub app_env: String,

    pub cors_origins: Vec<String>,
    pub cors_allow_suffix: Option<String>,
    pub static_dir: String,

    pub cloudinary: CloudinaryConfig,

    pub admin: Option<AdminBootstrap>,
    pub seed_database: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let admin = match (optional("ADMIN_EMAIL"), optional("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminBootstrap {
                name: optional("ADMIN_NAME").unwrap_or_else(|| "Admin User".to_string()),
                email,
                password,
            }),
            _ => None,
        };

        let cors_origins = match optional("CORS_ORIGINS") {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
        };

        let cors_allow_suffix = match std::env::var("CORS_ALLOW_SUFFIX") {
            Ok(suffix) if suffix.trim().is_empty() => None,
            Ok(suffix) => Some(suffix.trim().to_string()),
            Err(_) => Some(DEFAULT_CORS_ALLOW_SUFFIX.to_string()),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            port: parsed("PORT")?.unwrap_or(DEFAULT_PORT),
            app_env: optional("APP_ENV").unwrap_or_else(|| DEFAULT_APP_ENV.to_string()),
            cors_origins,
            cors_allow_suffix,
            static_dir: optional("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string()),
            cloudinary: CloudinaryConfig {
                cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
                api_key: required("CLOUDINARY_API_KEY")?,
                api_secret: required("CLOUDINARY_API_SECRET")?,
            },
            admin,
            seed_database: parsed("SEED_DATABASE")?.unwrap_or(false),
        })
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parsed<T: std::str::FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    let Some(value) = optional(name) else {
        return Ok(None);
    };

    value
        .trim()
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}
