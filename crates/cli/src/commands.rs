//! Command handlers
//!
//! Each handler drives one of the core views against the API and returns the
//! text to print.

use std::sync::Arc;

use anyhow::{anyhow, bail, Result};
use rentdesk_core::board::{AssignmentBoard, DropOutcome};
use rentdesk_core::room::{RoomDraft, RoomView};
use rentdesk_core::stats::DashboardStats;
use rentdesk_core::tenant::{TenantDraft, TenantView};
use rentdesk_core::RentalApi;

use crate::cli::{merge_room, BoardCommand, RoomCommand, TenantCommand};
use crate::render;

fn confirm(yes: bool, what: &str) -> Result<()> {
    if !yes {
        bail!("Refusing to delete {} without --yes", what);
    }
    Ok(())
}

pub async fn tenants(api: Arc<dyn RentalApi>, command: TenantCommand) -> Result<String> {
    let view = TenantView::new(api);
    match command {
        TenantCommand::List { search } => {
            view.load().await?;
            if let Some(term) = search {
                view.set_search(term).await;
            }
            Ok(render::tenant_table(&view.visible().await))
        }
        TenantCommand::Create(args) => {
            let tenant = view.create(&TenantDraft::from(args)).await?;
            Ok(format!("Created tenant\n{}", render::tenant_detail(&tenant)))
        }
        TenantCommand::Update { id, fields } => {
            view.load().await?;
            let current = view
                .get(&id)
                .await
                .ok_or_else(|| anyhow!("Tenant {} not found", id))?;
            let mut draft = TenantDraft::from(&current);
            fields.apply(&mut draft);
            let tenant = view.update(&id, &draft).await?;
            Ok(format!("Updated tenant\n{}", render::tenant_detail(&tenant)))
        }
        TenantCommand::Delete { id, yes } => {
            confirm(yes, &format!("tenant {}", id))?;
            view.delete(&id).await?;
            Ok(format!("Deleted tenant {}\n", id))
        }
    }
}

pub async fn rooms(api: Arc<dyn RentalApi>, command: RoomCommand) -> Result<String> {
    let view = RoomView::new(api);
    match command {
        RoomCommand::List => Ok(render::room_table(&view.load().await?)),
        RoomCommand::Create { name, size } => {
            let room = view.create(&RoomDraft::new(name, size)).await?;
            Ok(format!(
                "Created room {} ({}, {})\n",
                room.unique_room_name, room.id, room.size
            ))
        }
        RoomCommand::Update { id, name, size } => {
            view.load().await?;
            let current = view
                .get(&id)
                .await
                .ok_or_else(|| anyhow!("Room {} not found", id))?;
            let draft = merge_room(&RoomDraft::from(&current), name, size);
            let room = view.update(&id, &draft).await?;
            Ok(format!(
                "Updated room {} ({}, {})\n",
                room.unique_room_name, room.id, room.size
            ))
        }
        RoomCommand::Delete { id, yes } => {
            confirm(yes, &format!("room {}", id))?;
            view.delete(&id).await?;
            Ok(format!("Deleted room {}\n", id))
        }
    }
}

pub async fn board(api: Arc<dyn RentalApi>, command: BoardCommand) -> Result<String> {
    let board = AssignmentBoard::new(api);
    board.load().await?;
    match command {
        BoardCommand::Show => Ok(render::board(&board.snapshot().await)),
        BoardCommand::Assign { tenant, room } => {
            let Some(dragged) = board.snapshot().await.tenant(&tenant).cloned() else {
                bail!("Tenant {} not found", tenant);
            };
            let payload = board.drag_start(&dragged);
            match board.drop_on(&payload, &room).await {
                Ok(DropOutcome::Assigned(plan)) => Ok(format!(
                    "Assigned {} to room {}\n",
                    plan.tenant.fullname, plan.target_room_id
                )),
                Ok(DropOutcome::Ignored(reason)) => {
                    Ok(format!("Nothing to do: {}\n", render::ignore_reason(reason)))
                }
                Err(e) => Err(anyhow!(board
                    .alert()
                    .await
                    .unwrap_or_else(|| e.user_message()))),
            }
        }
    }
}

pub async fn stats(api: Arc<dyn RentalApi>) -> Result<String> {
    let rooms = RoomView::new(api).load().await?;
    Ok(render::stats(&DashboardStats::from_rooms(&rooms)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::TenantFields;
    use rentdesk_client::{login, ClientConfig, HttpRentalApi};
    use rentdesk_core::room::RoomSize;
    use rentdesk_stub_server::{router, StubConfig, StubState};

    async fn connect() -> Arc<dyn RentalApi> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router(StubState::new(StubConfig::default())))
                .await
                .unwrap();
        });
        let config = ClientConfig::new(format!("http://{}", addr)).without_proxy();
        let session = login(&config, "admin", "admin").await.unwrap();
        Arc::new(HttpRentalApi::new(config, session))
    }

    fn new_tenant(name: &str) -> TenantDraft {
        TenantDraft {
            fullname: name.into(),
            email: format!("{}@example.com", name.to_lowercase()),
            rental_date: "2024-03-01".into(),
            rent_money: 500.0,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn delete_without_yes_sends_nothing() {
        let api = connect().await;
        let tenant = api.create_tenant(&new_tenant("Ada")).await.unwrap();

        let err = tenants(
            api.clone(),
            TenantCommand::Delete {
                id: tenant.id.clone(),
                yes: false,
            },
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("--yes"));
        assert_eq!(api.list_tenants().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_keeps_fields_not_given() {
        let api = connect().await;
        let mut draft = new_tenant("Ada");
        draft.phone = Some("555-0100".into());
        let tenant = api.create_tenant(&draft).await.unwrap();

        tenants(
            api.clone(),
            TenantCommand::Update {
                id: tenant.id.clone(),
                fields: TenantFields {
                    rent: Some(650.0),
                    ..Default::default()
                },
            },
        )
        .await
        .unwrap();

        let stored = api.list_tenants().await.unwrap().remove(0);
        assert_eq!(stored.rent_money, 650.0);
        assert_eq!(stored.phone.as_deref(), Some("555-0100"));
        assert_eq!(stored.fullname, "Ada");
    }

    #[tokio::test]
    async fn assign_then_show_and_stats() {
        let api = connect().await;
        let room = api
            .create_room(&RoomDraft::new("Room 101", RoomSize::Small))
            .await
            .unwrap();
        let tenant = api.create_tenant(&new_tenant("Ada")).await.unwrap();

        let out = board(
            api.clone(),
            BoardCommand::Assign {
                tenant: tenant.id.clone(),
                room: room.id.clone(),
            },
        )
        .await
        .unwrap();
        assert_eq!(out, format!("Assigned Ada to room {}\n", room.id));

        let again = board(
            api.clone(),
            BoardCommand::Assign {
                tenant: tenant.id.clone(),
                room: room.id.clone(),
            },
        )
        .await
        .unwrap();
        assert_eq!(again, "Nothing to do: tenant is already in that room\n");

        let shown = board(api.clone(), BoardCommand::Show).await.unwrap();
        assert!(shown.starts_with("Unassigned (0)"));
        assert!(shown.contains("Room 101"));

        let overview = stats(api).await.unwrap();
        assert!(overview.contains("Occupancy rate:   100%"));
        assert!(overview.contains("Monthly revenue:  500.00"));
    }

    #[tokio::test]
    async fn room_update_merges_over_current() {
        let api = connect().await;
        let room = api
            .create_room(&RoomDraft::new("Room 101", RoomSize::Small))
            .await
            .unwrap();

        let out = rooms(
            api.clone(),
            RoomCommand::Update {
                id: room.id.clone(),
                name: None,
                size: Some(RoomSize::Big),
            },
        )
        .await
        .unwrap();
        assert!(out.contains("Room 101"));
        assert!(out.contains("Big"));
    }
}
