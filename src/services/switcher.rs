use crate::error::Result;
use crate::services::chooser::Chooser;
use crate::services::focus::{FocusDispatcher, FocusOutcome};
use crate::services::resolver::IdentityResolver;
use crate::services::window_source::WindowSource;
use std::io::Write;
use tracing::{debug, info, warn};

/// Один проход: перечисление окон -> chooser -> запрос фокуса.
/// Шаги выполняются строго последовательно, первая ошибка прерывает запуск.
pub struct Switcher<'a> {
    windows: &'a dyn WindowSource,
    chooser: &'a dyn Chooser,
    dispatcher: FocusDispatcher,
}

impl<'a> Switcher<'a> {
    pub fn new(
        windows: &'a dyn WindowSource,
        chooser: &'a dyn Chooser,
        dispatcher: FocusDispatcher,
    ) -> Self {
        Self {
            windows,
            chooser,
            dispatcher,
        }
    }

    pub async fn run<W: Write>(&self, out: &mut W) -> Result<FocusOutcome> {
        let identities = IdentityResolver::new(self.windows).resolve_all()?;

        if identities.is_empty() {
            warn!("Оконный менеджер не сообщил ни одного окна");
            return Ok(FocusOutcome::NoWindows);
        }

        debug!("Строки для chooser: {:?}", identities.lines());
        let selection = self.chooser.choose(&identities.chooser_input()).await?;

        let outcome = self
            .dispatcher
            .dispatch(&selection, &identities, self.windows, out)?;
        info!("Результат: {:?}", outcome);

        Ok(outcome)
    }
}
