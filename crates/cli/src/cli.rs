//! Command-line arguments

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rentdesk_client::DEFAULT_API_URL;
use rentdesk_core::room::{RoomDraft, RoomSize};
use rentdesk_core::tenant::TenantDraft;

use crate::session_store::DEFAULT_SESSION_FILE;

#[derive(Debug, Parser)]
#[command(name = "rentdesk")]
#[command(about = "Admin client for the rental management backend", long_about = None)]
pub struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "RENTDESK_API_URL", default_value = DEFAULT_API_URL)]
    pub url: String,

    /// Where the bearer token is kept between runs
    #[arg(
        long,
        global = true,
        env = "RENTDESK_SESSION_FILE",
        default_value = DEFAULT_SESSION_FILE
    )]
    pub session_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and store the session
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Greet the logged-in manager
    Whoami,
    #[command(subcommand)]
    Tenants(TenantCommand),
    #[command(subcommand)]
    Rooms(RoomCommand),
    #[command(subcommand)]
    Board(BoardCommand),
    /// Occupancy and revenue overview
    Stats,
}

#[derive(Debug, Subcommand)]
pub enum TenantCommand {
    List {
        /// Filter by name, email or phone
        #[arg(short, long)]
        search: Option<String>,
    },
    Create(NewTenant),
    Update {
        #[arg(long)]
        id: String,
        #[command(flatten)]
        fields: TenantFields,
    },
    Delete {
        #[arg(long)]
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct NewTenant {
    #[arg(long)]
    pub fullname: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub rental_date: String,
    /// Monthly rent
    #[arg(long)]
    pub rent: f64,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub leave_date: Option<String>,
    #[arg(long)]
    pub emergency_contact: Option<String>,
    #[arg(long)]
    pub active: bool,
}

impl From<NewTenant> for TenantDraft {
    fn from(args: NewTenant) -> Self {
        Self {
            fullname: args.fullname,
            email: args.email,
            phone: args.phone,
            address: args.address,
            rental_date: args.rental_date,
            leave_date: args.leave_date,
            active: args.active,
            emergency_contact: args.emergency_contact,
            rent_money: args.rent,
        }
    }
}

/// Tenant fields for an update; anything left out keeps its current value
#[derive(Debug, Default, Args)]
pub struct TenantFields {
    #[arg(long)]
    pub fullname: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub rental_date: Option<String>,
    #[arg(long)]
    pub rent: Option<f64>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub leave_date: Option<String>,
    #[arg(long)]
    pub emergency_contact: Option<String>,
    #[arg(long)]
    pub active: Option<bool>,
}

impl TenantFields {
    pub fn apply(self, draft: &mut TenantDraft) {
        if let Some(fullname) = self.fullname {
            draft.fullname = fullname;
        }
        if let Some(email) = self.email {
            draft.email = email;
        }
        if let Some(rental_date) = self.rental_date {
            draft.rental_date = rental_date;
        }
        if let Some(rent) = self.rent {
            draft.rent_money = rent;
        }
        if let Some(active) = self.active {
            draft.active = active;
        }
        if self.phone.is_some() {
            draft.phone = self.phone;
        }
        if self.address.is_some() {
            draft.address = self.address;
        }
        if self.leave_date.is_some() {
            draft.leave_date = self.leave_date;
        }
        if self.emergency_contact.is_some() {
            draft.emergency_contact = self.emergency_contact;
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum RoomCommand {
    List,
    Create {
        #[arg(long)]
        name: String,
        /// Small, Medium or Big
        #[arg(long)]
        size: RoomSize,
    },
    Update {
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        size: Option<RoomSize>,
    },
    Delete {
        #[arg(long)]
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

/// Merge optional room update arguments over the current room
pub fn merge_room(current: &RoomDraft, name: Option<String>, size: Option<RoomSize>) -> RoomDraft {
    RoomDraft {
        unique_room_name: name.unwrap_or_else(|| current.unique_room_name.clone()),
        size: size.unwrap_or(current.size),
    }
}

#[derive(Debug, Subcommand)]
pub enum BoardCommand {
    /// Show the unassigned pool and every room's tenants
    Show,
    /// Move a tenant into a room
    Assign {
        #[arg(long)]
        tenant: String,
        #[arg(long)]
        room: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_room_size_case_insensitively() {
        let cli = Cli::parse_from([
            "rentdesk", "rooms", "create", "--name", "Room 101", "--size", "medium",
        ]);
        match cli.command {
            Command::Rooms(RoomCommand::Create { name, size }) => {
                assert_eq!(name, "Room 101");
                assert_eq!(size, RoomSize::Medium);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_update_keeps_unspecified_fields() {
        let mut draft = TenantDraft {
            fullname: "Ada".into(),
            email: "ada@example.com".into(),
            phone: Some("555-0100".into()),
            rental_date: "2024-01-01".into(),
            rent_money: 400.0,
            ..Default::default()
        };
        TenantFields {
            email: Some("ada@lovelace.dev".into()),
            active: Some(true),
            ..Default::default()
        }
        .apply(&mut draft);

        assert_eq!(draft.fullname, "Ada");
        assert_eq!(draft.email, "ada@lovelace.dev");
        assert_eq!(draft.phone.as_deref(), Some("555-0100"));
        assert!(draft.active);
    }

    #[test]
    fn test_room_merge_falls_back_to_current() {
        let current = RoomDraft::new("Room 101", RoomSize::Small);
        let merged = merge_room(&current, None, Some(RoomSize::Big));
        assert_eq!(merged, RoomDraft::new("Room 101", RoomSize::Big));
    }
}
