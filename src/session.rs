// src/session.rs

use crate::auth::SecretGate;
use crate::cli::{PromptCommand, PromptLine};
use crate::commands;
use crate::error::{AqualogError, Result};
use crate::models::{parse_value, Parameter, Reading};
use crate::render;
use crate::store::LogStore;
use clap::Parser;
use std::io::{BufRead, Write};

/// 交互式会话：读取命令行、操作 store、输出渲染结果
pub struct Session<R, W> {
    input: R,
    output: W,
    store: LogStore,
    gate: SecretGate,
    editor: String,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, store: LogStore, gate: SecretGate, editor: String) -> Self {
        Session {
            input,
            output,
            store,
            gate,
            editor,
        }
    }

    /// 运行到 quit 或输入结束
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("session started");
        writeln!(self.output, "Aquarium Parameter Tracker. Type `help` for commands.")?;

        while let Some(line) = self.prompt("aqualog> ")? {
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }
            let command = match PromptLine::try_parse_from(words) {
                Ok(parsed) => parsed.command,
                Err(e) => {
                    write!(self.output, "{}", e)?;
                    continue;
                }
            };
            if command == PromptCommand::Quit {
                break;
            }
            self.dispatch(command)?;
        }

        let count = self.store.len()?;
        tracing::info!(readings = count, "session ended");
        if self.store.is_empty()? {
            writeln!(self.output, "Session closed.")?;
        } else {
            writeln!(self.output, "Session closed, {} reading(s) discarded.", count)?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub fn store(&self) -> &LogStore {
        &self.store
    }

    fn dispatch(&mut self, command: PromptCommand) -> Result<()> {
        match command {
            PromptCommand::Login => self.login(),
            PromptCommand::Add { edit } => self.add(edit),
            PromptCommand::Table => {
                let text = render::table(&self.store.all()?);
                writeln!(self.output, "{}", text)?;
                Ok(())
            }
            PromptCommand::Chart => {
                let text = render::chart(&self.store.all()?);
                writeln!(self.output, "{}", text)?;
                Ok(())
            }
            PromptCommand::Dose => {
                let text = render::recommendations(self.store.latest()?.as_ref());
                writeln!(self.output, "{}", text)?;
                Ok(())
            }
            PromptCommand::Latest => {
                let text = match self.store.latest()? {
                    Some(entry) => render::table(std::slice::from_ref(&entry)),
                    None => render::EMPTY.to_string(),
                };
                writeln!(self.output, "{}", text)?;
                Ok(())
            }
            PromptCommand::Quit => Ok(()),
        }
    }

    fn login(&mut self) -> Result<()> {
        let Some(attempt) = self.prompt("Password: ")? else {
            return Ok(());
        };
        match self.gate.unlock(attempt.trim()) {
            Ok(()) => writeln!(self.output, "✓ Authenticated.")?,
            Err(e @ AqualogError::Unauthorized) => writeln!(self.output, "{}", e)?,
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn add(&mut self, edit: bool) -> Result<()> {
        if !self.gate.is_unlocked() {
            writeln!(self.output, "Authenticate first with `login`.")?;
            return Ok(());
        }

        let mut values = [0.0; 4];
        for (slot, param) in values.iter_mut().zip(Parameter::ALL) {
            match self.read_value(param)? {
                Some(v) => *slot = v,
                None => {
                    writeln!(self.output, "Cancelled.")?;
                    return Ok(());
                }
            }
        }

        let notes = if edit {
            commands::notes_from_editor(&self.editor)?
        } else {
            self.prompt("Notes (optional): ")?
        };

        let [ph, ammonia, nitrite, nitrate] = values;
        let reading = Reading {
            ph,
            ammonia,
            nitrite,
            nitrate,
            notes: notes.map(|n| n.trim().to_string()).filter(|n| !n.is_empty()),
        };
        self.store.append(reading)?;
        writeln!(self.output, "✓ Reading recorded.")?;
        self.render_all()
    }

    /// 反复提示直到得到合法数值；输入结束返回 None
    fn read_value(&mut self, param: Parameter) -> Result<Option<f64>> {
        loop {
            let Some(text) = self.prompt(&format!("{}: ", param.prompt()))? else {
                return Ok(None);
            };
            match parse_value(param, &text) {
                Ok(v) => return Ok(Some(v)),
                Err(e @ AqualogError::InvalidReading { .. }) => writeln!(self.output, "{}", e)?,
                Err(e) => return Err(e),
            }
        }
    }

    // 每次追加后重画图表、建议和表格
    fn render_all(&mut self) -> Result<()> {
        let entries = self.store.all()?;
        writeln!(self.output, "\n{}", render::chart(&entries))?;
        writeln!(
            self.output,
            "\nLatest Dosing Recommendations\n{}",
            render::recommendations(entries.last())
        )?;
        writeln!(self.output, "\nLog History\n{}", render::table(&entries))?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
