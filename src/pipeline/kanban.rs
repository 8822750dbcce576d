//! Kanban grouping of leads by stage

use crate::entities::lead::{Lead, LeadStage};
use indexmap::IndexMap;

/// Leads partitioned into the six pipeline columns.
///
/// Columns follow the declared stage order and keep each lead's relative
/// position. A lead whose stage is not one of the six lands in no column;
/// it is only counted.
#[derive(Debug, Clone, PartialEq)]
pub struct KanbanBoard<'a> {
    columns: IndexMap<LeadStage, Vec<&'a Lead>>,
    unplaced: usize,
}

impl<'a> KanbanBoard<'a> {
    /// Group already-filtered leads into columns
    pub fn group<I>(leads: I) -> Self
    where
        I: IntoIterator<Item = &'a Lead>,
    {
        let mut columns: IndexMap<LeadStage, Vec<&'a Lead>> = LeadStage::ALL
            .iter()
            .map(|stage| (stage.clone(), Vec::new()))
            .collect();
        let mut unplaced = 0;

        for lead in leads {
            match columns.get_mut(&lead.stage) {
                Some(column) => column.push(lead),
                None => unplaced += 1,
            }
        }

        Self { columns, unplaced }
    }

    /// The leads in one column; empty for stages outside the pipeline
    pub fn column(&self, stage: &LeadStage) -> &[&'a Lead] {
        self.columns.get(stage).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Columns in stage order, empty ones included
    pub fn columns(&self) -> impl Iterator<Item = (&LeadStage, &[&'a Lead])> {
        self.columns
            .iter()
            .map(|(stage, leads)| (stage, leads.as_slice()))
    }

    /// Number of leads placed in a column
    pub fn bucketed_count(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    /// Number of leads whose stage matched no column
    pub fn unplaced_count(&self) -> usize {
        self.unplaced
    }
}
