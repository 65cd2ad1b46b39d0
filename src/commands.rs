// src/commands.rs

use crate::alerts;
use crate::auth::{self, SecretGate};
use crate::dosing;
use crate::error::{AqualogError, Result};
use crate::models::Reading;
use crate::session::Session;
use crate::store::LogStore;
use std::io::{self, Read};
use std::process::Command;

/// 处理 'session' 命令
pub fn handle_session(secret: Option<String>, editor: String) -> Result<()> {
    let secret_file = auth::secret_file_path();
    let secret = auth::resolve_secret(secret, secret_file.as_deref())?;
    let store = LogStore::open()?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(
        stdin.lock(),
        stdout.lock(),
        store,
        SecretGate::new(secret),
        editor,
    );
    session.run()
}

/// 处理 'dose' 命令：单次读数，不进入会话
pub fn handle_dose(ph: &str, ammonia: &str, nitrite: &str, nitrate: &str) -> Result<()> {
    println!("{}", dose_report(ph, ammonia, nitrite, nitrate)?);
    Ok(())
}

/// 超标参数（如有）加上剂量建议
pub fn dose_report(ph: &str, ammonia: &str, nitrite: &str, nitrate: &str) -> Result<String> {
    let entry = Reading::parse(ph, ammonia, nitrite, nitrate, None)?.into_entry(crate::store::today());

    let mut report = String::new();
    let flagged = alerts::out_of_range_parameters(&entry);
    if !flagged.is_empty() {
        let labels: Vec<&str> = flagged.iter().map(|p| p.label()).collect();
        report.push_str(&format!("Out of range: {}\n", labels.join(", ")));
    }
    report.push_str(&dosing::recommend(Some(&entry)));
    Ok(report)
}

/// 打开编辑器写备注，返回去掉首尾空白后的内容
pub fn notes_from_editor(editor: &str) -> Result<Option<String>> {
    let temp_file = tempfile::NamedTempFile::new()?;
    let status = Command::new(editor).arg(temp_file.path()).status()?;

    if !status.success() {
        return Err(AqualogError::EditorError);
    }
    let mut buf = String::new();
    temp_file.reopen()?.read_to_string(&mut buf)?;

    let trimmed = buf.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}
