//! Agent list screen.

use crate::agent::{Agent, AgentType};
use crate::error::CoreError;
use crate::repository::AgentRepository;
use crate::route::Route;
use crate::session::UserSession;
use chrono::{DateTime, Local, TimeZone};

/// Text of the placeholder row shown when there are no agents.
pub const EMPTY_MESSAGE: &str = "No agents found. Click \"Create New Agent\" to get started.";

/// Column headings, in display order.
pub const COLUMNS: [&str; 5] = ["S.No", "Name", "Type", "Date Created", "Actions"];

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardRow {
    Agent(AgentRow),
    /// Informational placeholder for an empty collection.
    Empty(&'static str),
}

/// Display values for a single agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentRow {
    /// 1-based position in the list.
    pub index: usize,
    pub id: String,
    pub name: String,
    pub kind: AgentType,
    pub created: String,
    /// Where the Edit action navigates.
    pub edit_route: Route,
}

/// Controller for the dashboard: greeting, agent table, delete and logout.
pub struct Dashboard<'a> {
    repo: &'a dyn AgentRepository,
    session: &'a UserSession,
    username: String,
    agents: Vec<Agent>,
}

impl<'a> Dashboard<'a> {
    /// Read the session name and the current agent list.
    pub fn load(repo: &'a dyn AgentRepository, session: &'a UserSession) -> Self {
        Self {
            repo,
            session,
            username: session.display_name(),
            agents: repo.list_all(),
        }
    }

    pub fn greeting(&self) -> String {
        if self.username.is_empty() {
            "Welcome".to_string()
        } else {
            format!("Welcome, {}", self.username)
        }
    }

    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// Rows in stored order, or the single placeholder row.
    pub fn rows(&self) -> Vec<DashboardRow> {
        if self.agents.is_empty() {
            return vec![DashboardRow::Empty(EMPTY_MESSAGE)];
        }

        self.agents
            .iter()
            .enumerate()
            .map(|(position, agent)| {
                DashboardRow::Agent(AgentRow {
                    index: position + 1,
                    id: agent.id.clone(),
                    name: agent.name.clone(),
                    kind: agent.kind,
                    created: format_created_date(agent.created_at),
                    edit_route: Route::EditAgent(agent.id.clone()),
                })
            })
            .collect()
    }

    /// Delete an agent and refresh the table from what the repository kept.
    pub fn delete(&mut self, id: &str) -> Result<(), CoreError> {
        self.agents = self.repo.remove(id)?;
        Ok(())
    }

    /// Forget the signed-in user. Agents are left alone.
    pub fn logout(&mut self) -> Result<Route, CoreError> {
        self.session.clear()?;
        self.username.clear();
        Ok(Route::Login)
    }
}

/// Creation date as month/day/year in local time.
pub fn format_created_date(created_at: i64) -> String {
    format_created_date_in(created_at, &Local)
}

fn format_created_date_in<Tz: TimeZone>(created_at: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp_millis(created_at) {
        Some(utc) => utc.with_timezone(tz).format("%-m/%-d/%Y").to_string(),
        None => "Invalid Date".to_string(),
    }
}
