//! Lead management board

use crate::core::error::IntakeError;
use crate::core::events::{CrmEvent, EventBus};
use crate::core::query::SearchTerm;
use crate::core::store::EntityStore;
use crate::entities::lead::Lead;
use crate::intake::LeadForm;
use crate::pipeline::KanbanBoard;
use crate::storage::InMemoryStore;
use serde::{Deserialize, Serialize};

/// How the lead board lays out its leads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// One column per pipeline stage
    #[default]
    Kanban,
    /// A single flat list
    List,
}

/// What the lead board currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum LeadView<'a> {
    Kanban(KanbanBoard<'a>),
    List(Vec<&'a Lead>),
}

impl LeadView<'_> {
    /// Number of leads visible in this view
    pub fn visible_count(&self) -> usize {
        match self {
            LeadView::Kanban(board) => board.bucketed_count(),
            LeadView::List(leads) => leads.len(),
        }
    }
}

/// State behind the lead management page: the lead store, the add-lead form,
/// the search box and the view toggle.
#[derive(Debug)]
pub struct LeadBoard {
    store: InMemoryStore<Lead>,
    form: LeadForm,
    search: SearchTerm,
    view_mode: ViewMode,
    events: EventBus,
}

impl LeadBoard {
    pub fn new(store: InMemoryStore<Lead>, events: EventBus) -> Self {
        Self {
            store,
            form: LeadForm::new(),
            search: SearchTerm::default(),
            view_mode: ViewMode::default(),
            events,
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search = SearchTerm::new(term);
        tracing::debug!(term = self.search.as_str(), "Lead search changed");
    }

    pub fn search_term(&self) -> &str {
        self.search.as_str()
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut LeadForm {
        &mut self.form
    }

    /// Submit the add-lead form and announce the new lead
    pub fn submit(&mut self) -> Result<Lead, IntakeError> {
        let lead = self.form.submit(&mut self.store)?;
        self.events.publish(CrmEvent::LeadAdded {
            lead_id: lead.id,
            stage: lead.stage.to_string(),
        });
        Ok(lead)
    }

    /// Every lead in insertion order, ignoring the search box
    pub fn leads(&self) -> &[Lead] {
        self.store.all()
    }

    /// Leads matching the search box, in insertion order
    pub fn filtered(&self) -> Vec<&Lead> {
        self.search.filter(self.store.all())
    }

    /// Matching leads grouped by stage
    pub fn kanban(&self) -> KanbanBoard<'_> {
        KanbanBoard::group(self.filtered())
    }

    /// The view selected by the toggle
    pub fn view(&self) -> LeadView<'_> {
        let view = match self.view_mode {
            ViewMode::Kanban => LeadView::Kanban(self.kanban()),
            ViewMode::List => LeadView::List(self.filtered()),
        };
        tracing::debug!(
            mode = ?self.view_mode,
            term = self.search.as_str(),
            visible = view.visible_count(),
            "Lead view recomputed"
        );
        view
    }
}
