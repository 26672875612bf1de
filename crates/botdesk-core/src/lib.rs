//! botdesk-core: agent records, their persistence, and the screens that edit them.

pub mod agent;
pub mod clipboard;
pub mod config;
pub mod dashboard;
pub mod embed;
mod error;
pub mod form;
pub mod repository;
pub mod route;
pub mod session;
pub mod signup;

pub use agent::{Agent, AgentDraft, AgentType, Clock, ParseAgentTypeError, SystemClock, DEFAULT_COLOR};
pub use clipboard::{Clipboard, ClipboardError, CommandClipboard};
pub use config::{Config, ConfigStore};
pub use dashboard::{AgentRow, Dashboard, DashboardRow};
pub use embed::generate_embed;
pub use error::{CoreError, FormError, ValidationError};
pub use form::{AgentForm, FormMode, FormPhase};
pub use repository::{AgentRepository, StoreAgentRepository};
pub use route::Route;
pub use session::UserSession;
pub use signup::{login, SignupError, SignupForm};
