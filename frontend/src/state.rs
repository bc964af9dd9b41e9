use barberie_domain::{DraftEdit, ViewController};
use std::rc::Rc;
use yew::prelude::*;

/// Screen state shared by the whole app through `use_reducer`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub controller: ViewController,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    StartCreation,
    Cancel,
    Submit,
    Back,
    CreateNew,
    Edit(DraftEdit),
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut controller = self.controller.clone();
        let outcome = match action {
            AppAction::StartCreation => controller.start_creation().map_err(|e| e.to_string()),
            AppAction::Cancel => controller.cancel().map_err(|e| e.to_string()),
            AppAction::Back => controller.back().map_err(|e| e.to_string()),
            AppAction::CreateNew => controller.create_new().map_err(|e| e.to_string()),
            AppAction::Submit => controller.submit().map(|_| ()).map_err(|e| e.to_string()),
            AppAction::Edit(edit) => {
                if controller.update_draft(|draft| draft.apply(edit)) {
                    Ok(())
                } else {
                    Err("no draft open".to_string())
                }
            }
        };

        match outcome {
            Ok(()) => Rc::new(Self { controller }),
            Err(e) => {
                log::warn!("Action ignored: {}", e);
                self
            }
        }
    }
}
