//! Screen navigation state.
//!
//! The current screen is a plain value. Every user action produces a new
//! [`Screen`] instead of mutating shared state.

use chrono::NaiveDate;

use crate::analytics::YearMonth;
use crate::templates::{Template, TemplateId};

/// Application screens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    /// Main menu
    #[default]
    Home,
    /// Template list
    TemplateList,
    /// Template editor
    NewTemplate,
    /// Entry form for a session of a template
    ActiveSession { template_id: TemplateId },
    /// Attendance statistics and calendar
    Planning {
        month: YearMonth,
        selected: Option<NaiveDate>,
    },
}

/// User navigation actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavAction {
    OpenTemplates,
    NewTemplate,
    StartSession(TemplateId),
    OpenPlanning(YearMonth),
    SelectDay(NaiveDate),
    ChangeMonth(YearMonth),
    /// A template or session was saved
    Saved,
    Back,
}

impl Screen {
    /// The screen reached from this one by `action`.
    pub fn on(&self, action: NavAction) -> Screen {
        match (self, action) {
            (_, NavAction::OpenTemplates) => Screen::TemplateList,
            (_, NavAction::NewTemplate) => Screen::NewTemplate,
            (_, NavAction::StartSession(template_id)) => Screen::ActiveSession { template_id },
            (_, NavAction::OpenPlanning(month)) => Screen::Planning {
                month,
                selected: None,
            },
            (Screen::Planning { month, .. }, NavAction::SelectDay(date)) if month.contains(date) => {
                Screen::Planning {
                    month: *month,
                    selected: Some(date),
                }
            }
            (Screen::Planning { .. }, NavAction::ChangeMonth(month)) => Screen::Planning {
                month,
                selected: None,
            },
            (Screen::NewTemplate | Screen::ActiveSession { .. }, NavAction::Saved) => {
                Screen::TemplateList
            }
            (Screen::Home | Screen::TemplateList, NavAction::Back) => Screen::Home,
            (_, NavAction::Back) => Screen::TemplateList,
            (screen, _) => screen.clone(),
        }
    }

    /// Replace a session screen whose template no longer exists.
    pub fn resolve(self, templates: &[Template]) -> Screen {
        match &self {
            Screen::ActiveSession { template_id }
                if !templates.iter().any(|t| &t.id == template_id) =>
            {
                tracing::debug!("Template {} is gone, returning to list", template_id);
                Screen::TemplateList
            }
            _ => self,
        }
    }

    /// Display title.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Menu",
            Screen::TemplateList => "Sport",
            Screen::NewTemplate => "New template",
            Screen::ActiveSession { .. } => "Session",
            Screen::Planning { .. } => "Planning",
        }
    }
}
