// src/auth.rs

//! Shared-secret gate in front of `add`.
//!
//! This is a convenience lock for a shared terminal, not a security control:
//! the secret is compared in plain text, there is no lockout, and nothing
//! recorded in a session is protected by it. The password prompt also echoes
//! what is typed.

use crate::error::{AqualogError, Result};
use std::path::{Path, PathBuf};

pub const DEFAULT_SECRET: &str = "tank123";

pub struct SecretGate {
    secret: String,
    unlocked: bool,
}

impl SecretGate {
    pub fn new(secret: impl Into<String>) -> Self {
        SecretGate {
            secret: secret.into().trim().to_string(),
            unlocked: false,
        }
    }

    /// 密码错误时不改变状态，可无限重试
    pub fn unlock(&mut self, attempt: &str) -> Result<()> {
        if attempt.trim() == self.secret {
            self.unlocked = true;
            tracing::info!("session unlocked");
            Ok(())
        } else {
            tracing::warn!("rejected password attempt");
            Err(AqualogError::Unauthorized)
        }
    }

    pub fn is_unlocked(&self) -> bool {
        self.unlocked
    }
}

/// 密钥文件的标准路径 (~/.config/aqualog/secret)
pub fn secret_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("aqualog").join("secret"))
}

/// 依次取：命令行/环境变量、密钥文件第一行、内置默认值
pub fn resolve_secret(explicit: Option<String>, secret_file: Option<&Path>) -> Result<String> {
    // 与密钥文件一样去掉首尾空白，空值视为未设置
    if let Some(secret) = explicit.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        return Ok(secret.to_string());
    }
    if let Some(path) = secret_file {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            if let Some(line) = content.lines().next().map(str::trim).filter(|l| !l.is_empty()) {
                tracing::debug!(path = %path.display(), "using secret file");
                return Ok(line.to_string());
            }
        }
    }
    Ok(DEFAULT_SECRET.to_string())
}
