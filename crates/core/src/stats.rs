//! Dashboard statistics computed from the room list

use serde::Serialize;

use crate::room::Room;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_rooms: usize,
    pub occupied_rooms: usize,
    pub free_rooms: usize,
    /// Rounded percentage of rooms with at least one tenant
    pub occupancy_rate: u32,
    /// Sum of monthly rent over tenants placed in rooms
    pub monthly_revenue: f64,
    pub active_tenants: usize,
    pub total_tenants: usize,
}

impl DashboardStats {
    pub fn from_rooms(rooms: &[Room]) -> Self {
        let total_rooms = rooms.len();
        let occupied_rooms = rooms.iter().filter(|r| !r.tenants.is_empty()).count();
        let occupancy_rate = if total_rooms == 0 {
            0
        } else {
            ((occupied_rooms as f64 / total_rooms as f64) * 100.0).round() as u32
        };

        let placed = rooms.iter().flat_map(|r| r.tenants.iter());
        let (mut monthly_revenue, mut active_tenants, mut total_tenants) = (0.0, 0, 0);
        for tenant in placed {
            monthly_revenue += tenant.rent_money;
            total_tenants += 1;
            if tenant.active {
                active_tenants += 1;
            }
        }

        Self {
            total_rooms,
            occupied_rooms,
            free_rooms: total_rooms - occupied_rooms,
            occupancy_rate,
            monthly_revenue,
            active_tenants,
            total_tenants,
        }
    }
}
