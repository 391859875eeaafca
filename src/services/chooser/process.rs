use crate::error::{Result, SwitchError};
use std::io::ErrorKind;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, warn};

use super::r#trait::Chooser;

/// Внешняя программа выбора (dmenu, rofi -dmenu, fzf, ...)
pub struct ProcessChooser {
    program: String,
    args: Vec<String>,
}

impl ProcessChooser {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

#[async_trait::async_trait]
impl Chooser for ProcessChooser {
    async fn choose(&self, input: &str) -> Result<String> {
        info!("Запуск chooser: {} {:?}", self.program, self.args);

        // stderr наследуется: интерактивные chooser рисуют интерфейс в терминале
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| SwitchError::ChooserSpawn {
                program: self.program.clone(),
                source,
            })?;

        // Запись в stdin идёт параллельно с чтением stdout: эхо-chooser (cat)
        // иначе заполнит pipe и перестанет читать вход
        let stdin = child.stdin.take();
        let writer = async move {
            if let Some(mut stdin) = stdin {
                match stdin.write_all(input.as_bytes()).await {
                    Ok(()) => {}
                    Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                        debug!("Chooser закрыл stdin до окончания записи");
                    }
                    Err(e) => return Err(e),
                }
            }
            Ok(())
        };

        let (written, output) = tokio::join!(writer, child.wait_with_output());
        written?;
        let output = output?;

        if !output.status.success() {
            warn!("Chooser завершился с кодом {:?}", output.status.code());
            return Err(SwitchError::ChooserExit {
                code: output.status.code(),
            });
        }

        let selection = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("Chooser вернул: {:?}", selection);
        Ok(selection)
    }
}
