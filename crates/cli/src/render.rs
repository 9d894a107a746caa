//! Plain-text rendering of tenants, rooms, the board and stats

use std::fmt::Write;

use rentdesk_core::board::{BoardState, IgnoreReason};
use rentdesk_core::room::Room;
use rentdesk_core::stats::DashboardStats;
use rentdesk_core::tenant::Tenant;

fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}

pub fn tenant_table(tenants: &[Tenant]) -> String {
    if tenants.is_empty() {
        return "No tenants found.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<26} {:<24} {:<28} {:<14} {:>9}  {:<6}",
        "ID", "NAME", "EMAIL", "PHONE", "RENT", "ACTIVE"
    );
    for tenant in tenants {
        let _ = writeln!(
            out,
            "{:<26} {:<24} {:<28} {:<14} {:>9.2}  {:<6}",
            tenant.id,
            tenant.fullname,
            tenant.email,
            or_dash(tenant.phone.as_deref()),
            tenant.rent_money,
            if tenant.active { "yes" } else { "no" }
        );
    }
    out
}

pub fn tenant_detail(tenant: &Tenant) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", tenant.fullname, tenant.id);
    let _ = writeln!(out, "  Email:             {}", tenant.email);
    let _ = writeln!(out, "  Phone:             {}", or_dash(tenant.phone.as_deref()));
    let _ = writeln!(out, "  Address:           {}", or_dash(tenant.address.as_deref()));
    let _ = writeln!(out, "  Rental date:       {}", tenant.rental_date);
    let _ = writeln!(out, "  Leave date:        {}", or_dash(tenant.leave_date.as_deref()));
    let _ = writeln!(
        out,
        "  Emergency contact: {}",
        or_dash(tenant.emergency_contact.as_deref())
    );
    let _ = writeln!(out, "  Monthly rent:      {:.2}", tenant.rent_money);
    let _ = writeln!(out, "  Active:            {}", tenant.active);
    out
}

pub fn room_table(rooms: &[Room]) -> String {
    if rooms.is_empty() {
        return "No rooms found.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<26} {:<20} {:<7} {:<9} {:>7}",
        "ID", "NAME", "SIZE", "OCCUPIED", "TENANTS"
    );
    for room in rooms {
        let _ = writeln!(
            out,
            "{:<26} {:<20} {:<7} {:<9} {:>7}",
            room.id,
            room.unique_room_name,
            room.size,
            if room.occupied { "yes" } else { "no" },
            room.tenants.len()
        );
    }
    out
}

/// The unassigned pool followed by one bucket per room
pub fn board(state: &BoardState) -> String {
    let mut out = String::new();
    let pool = state.unassigned();
    let _ = writeln!(out, "Unassigned ({})", pool.len());
    if pool.is_empty() {
        let _ = writeln!(out, "  (empty)");
    }
    for tenant in &pool {
        let _ = writeln!(out, "  - {} [{}]", tenant.fullname, tenant.id);
    }

    for room in &state.rooms {
        let _ = writeln!(
            out,
            "\n{} [{}] {}{}",
            room.unique_room_name,
            room.id,
            room.size,
            if room.occupied { ", occupied" } else { "" }
        );
        if room.tenants.is_empty() {
            let _ = writeln!(out, "  (empty)");
        }
        for tenant in &room.tenants {
            let _ = writeln!(out, "  - {} [{}]", tenant.fullname, tenant.id);
        }
    }
    out
}

pub fn ignore_reason(reason: IgnoreReason) -> &'static str {
    match reason {
        IgnoreReason::EmptyPayload => "no tenant given",
        IgnoreReason::UnknownTenant => "tenant is not on the board",
        IgnoreReason::UnknownRoom => "room is not on the board",
        IgnoreReason::AlreadyInRoom => "tenant is already in that room",
    }
}

pub fn stats(stats: &DashboardStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total rooms:      {}", stats.total_rooms);
    let _ = writeln!(out, "Occupied rooms:   {}", stats.occupied_rooms);
    let _ = writeln!(out, "Free rooms:       {}", stats.free_rooms);
    let _ = writeln!(out, "Occupancy rate:   {}%", stats.occupancy_rate);
    let _ = writeln!(out, "Monthly revenue:  {:.2}", stats.monthly_revenue);
    let _ = writeln!(
        out,
        "Active tenants:   {} of {}",
        stats.active_tenants, stats.total_tenants
    );
    out
}
