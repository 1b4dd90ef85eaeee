//! Interactive shell around the wizard.
//!
//! One command per line on stdin. Parsing is separated from execution so
//! the grammar can be tested without a terminal.

use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use loan_core::models::{DocumentMeta, FieldKey, StepId};
use loan_core::wizard::Wizard;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::assistant;
use crate::export::application_form_text;
use crate::tasks::{self, Debounce, simulated_delay};
use crate::utils::parse_optional_decimal;

#[derive(Debug, PartialEq)]
pub enum Command {
    Next,
    Back,
    Goto(StepId),
    Set(FieldKey, String),
    Choose { group: String, choice: String },
    Upload { id: String, name: String, size_bytes: u64 },
    Verify,
    Review,
    Export(PathBuf),
    Ask(String),
    Reset,
    Help,
    Quit,
}

/// Parses one input line. Empty lines are `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(None);
    };

    let command = match verb {
        "next" | "n" => Command::Next,
        "back" | "b" => Command::Back,
        "goto" => {
            let index: u8 = parts
                .next()
                .ok_or("usage: goto <step 0-8>")?
                .parse()
                .map_err(|_| "step must be a number 0-8".to_string())?;
            let step = StepId::try_from(index).map_err(|e| e.to_string())?;
            Command::Goto(step)
        }
        "set" => {
            let raw_key = parts.next().ok_or("usage: set <field> <value>")?;
            let key = FieldKey::parse(raw_key).ok_or_else(|| format!("unknown field {raw_key}"))?;
            let value = parts.collect::<Vec<_>>().join(" ");
            Command::Set(key, value)
        }
        "choose" => {
            let group = parts.next().ok_or("usage: choose <group> <choice>")?;
            let choice = parts.collect::<Vec<_>>().join(" ");
            if choice.is_empty() {
                return Err("usage: choose <group> <choice>".to_string());
            }
            Command::Choose {
                group: group.to_string(),
                choice,
            }
        }
        "upload" => {
            let id = parts.next().ok_or("usage: upload <doc> <file> <bytes>")?;
            let name = parts.next().ok_or("usage: upload <doc> <file> <bytes>")?;
            let size_bytes: u64 = parts
                .next()
                .ok_or("usage: upload <doc> <file> <bytes>")?
                .parse()
                .map_err(|_| "size must be a byte count".to_string())?;
            Command::Upload {
                id: id.to_string(),
                name: name.to_string(),
                size_bytes,
            }
        }
        "verify" => Command::Verify,
        "review" => Command::Review,
        "export" => {
            let path = parts.next().ok_or("usage: export <path>")?;
            Command::Export(PathBuf::from(path))
        }
        "ask" => Command::Ask(parts.collect::<Vec<_>>().join(" ")),
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(format!("unknown command {other}, try `help`")),
    };
    Ok(Some(command))
}

/// Coerces the raw `set` argument into the value shape the field expects.
pub fn coerce_value(key: FieldKey, raw: &str) -> loan_core::models::FieldValue {
    match key {
        FieldKey::AgreeOvd | FieldKey::FinalConfirmation => {
            matches!(raw.trim(), "yes" | "true" | "on" | "1").into()
        }
        FieldKey::LoanAmount
        | FieldKey::InterestRate
        | FieldKey::Tenure
        | FieldKey::GrossMonthlyIncome
        | FieldKey::BonusOvertimeArrear
        | FieldKey::TotalMonthlyObligation
        | FieldKey::YearsAtResidence
        | FieldKey::YearsAtEmployer => match parse_optional_decimal(raw) {
            Some(n) => n.into(),
            None => raw.into(),
        },
        _ => raw.into(),
    }
}

pub struct App {
    wizard: Wizard,
    upload_guard: Debounce,
    submit_guard: Debounce,
}

impl App {
    pub fn new(mut wizard: Wizard) -> Self {
        // Suggestions track the step through the post-transition hooks.
        wizard.add_hook(Box::new(|step, _| assistant::print_suggestions(step)));
        Self {
            wizard,
            upload_guard: Debounce::new(),
            submit_guard: Debounce::new(),
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        self.wizard.restore().await;
        self.wizard.render_current();
        assistant::print_suggestions(self.wizard.state().step);
        println!("type `help` for the command list");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.context("reading stdin")? {
            match parse_command(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => self.execute(command).await?,
                Ok(None) => {}
                Err(message) => println!("  {message}"),
            }
        }
        Ok(())
    }

    async fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Next => {
                let submitting = self.wizard.state().step == StepId::FinalReview;
                if submitting {
                    if !self.submit_guard.begin() {
                        println!("  submission already in progress");
                        return Ok(());
                    }
                    println!("  submitting application...");
                    simulated_delay(tasks::SUBMIT_DELAY).await;
                } else {
                    simulated_delay(tasks::TRANSITION_DELAY).await;
                }
                self.wizard.advance().await;
                if submitting {
                    self.submit_guard.finish();
                }
            }
            Command::Back => {
                self.wizard.retreat();
            }
            Command::Goto(step) => {
                self.wizard.jump_to(step);
            }
            Command::Set(key, raw) => {
                self.wizard.capture_field(key, coerce_value(key, &raw)).await;
            }
            Command::Choose { group, choice } => {
                self.wizard.save_selection(&group, &choice).await;
            }
            Command::Upload { id, name, size_bytes } => {
                if !self.upload_guard.begin() {
                    println!("  an upload is already in progress");
                    return Ok(());
                }
                println!("  uploading {name}...");
                simulated_delay(tasks::UPLOAD_DELAY).await;
                let meta = DocumentMeta {
                    mime_type: mime_for(&name),
                    name,
                    size_bytes,
                    uploaded_at: Utc::now(),
                };
                // Rejections surface through the view.
                let _ = self.wizard.record_upload(&id, meta).await;
                self.upload_guard.finish();
            }
            Command::Verify => {
                let mobile = self.wizard.state().text(FieldKey::Mobile).to_string();
                if mobile.is_empty() {
                    println!("  set a mobile number first");
                    return Ok(());
                }
                println!("  verifying {mobile}...");
                simulated_delay(tasks::VERIFY_DELAY).await;
                println!("  mobile number verified");
            }
            Command::Review => {
                for (label, value) in crate::export::review_rows(self.wizard.state()) {
                    println!("  {label}: {value}");
                }
            }
            Command::Export(path) => {
                let text = application_form_text(self.wizard.state());
                std::fs::write(&path, text)
                    .with_context(|| format!("writing {}", path.display()))?;
                println!("  application form written to {}", path.display());
            }
            Command::Ask(question) => {
                println!("  {}", assistant::answer(&question));
            }
            Command::Reset => {
                self.wizard.reset().await;
                println!("  application cleared");
            }
            Command::Help => print_help(),
            Command::Quit => {}
        }
        Ok(())
    }
}

fn mime_for(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mime = if lowered.ends_with(".pdf") {
        "application/pdf"
    } else if lowered.ends_with(".png") {
        "image/png"
    } else if lowered.ends_with(".jpg") || lowered.ends_with(".jpeg") {
        "image/jpeg"
    } else {
        "application/octet-stream"
    };
    mime.to_string()
}

fn print_help() {
    println!(
        "  next | back            move between steps\n\
         \x20 goto <0-8>             jump to a step\n\
         \x20 set <field> <value>    capture a field (see the step listing)\n\
         \x20 choose <group> <val>   pick a selection, e.g. choose loan_type car\n\
         \x20 upload <doc> <file> <bytes>\n\
         \x20                        record a document upload\n\
         \x20 verify                 verify the mobile number\n\
         \x20 review | export <path> | ask <question> | reset | quit"
    );
}
