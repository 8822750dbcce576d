//! Walk through the lead and order boards
//!
//! This example demonstrates:
//! - Loading the built-in configuration with the sample records
//! - Adding a lead and an order through the forms
//! - Searching, toggling the lead view and reading the status overview
//! - Listening to the event bus
//!
//! Run with `RUST_LOG=leadflow=debug` to see the library's logs.

use leadflow::prelude::*;
use tokio::sync::broadcast::error::RecvError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("📇 leadflow pipeline demo");
    println!("=========================\n");

    let mut dashboard = Dashboard::from_config(CrmConfig::default_config())?;

    let mut events = dashboard.subscribe();
    let listener = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(envelope) => println!(
                    "  🔔 {} #{} added",
                    envelope.event.entity_type(),
                    envelope.event.entity_id()
                ),
                Err(RecvError::Lagged(skipped)) => println!("  ⚠️  missed {skipped} events"),
                Err(RecvError::Closed) => break,
            }
        }
    });

    // A blank form is rejected and nothing is stored
    match dashboard.leads_mut().submit() {
        Ok(_) => println!("unexpected: blank lead accepted"),
        Err(err) => println!("❌ {err}"),
    }

    dashboard
        .leads_mut()
        .form_mut()
        .set_name("Priya Das")
        .set_company("Orbital Freight")
        .set_email("priya@orbital.io")
        .set_phone("+44-20-5550-0101")
        .set_follow_up_date("2024-07-02")
        .set_product_interest("Full Suite");
    let lead = dashboard.leads_mut().submit()?;
    println!("✅ Added lead #{} ({})", lead.id, lead.company);

    dashboard
        .orders_mut()
        .form_mut()
        .set_lead_id(Some(lead.id))
        .set_client_name(lead.name.clone())
        .set_client_company(lead.company.clone())
        .set_expected_delivery("2024-08-15")
        .set_order_value("$18,250")
        .set_product_type("Full Suite");
    let order = dashboard.orders_mut().submit()?;
    println!("✅ Added order #{} ({})\n", order.id, order.order_value);

    println!("📋 Kanban");
    if let LeadView::Kanban(board) = dashboard.leads().view() {
        for (stage, leads) in board.columns() {
            let names: Vec<_> = leads.iter().map(|lead| lead.name.as_str()).collect();
            println!("  {:<14} {}", stage.as_str(), names.join(", "));
        }
    }

    dashboard.leads_mut().set_view_mode(ViewMode::List);
    dashboard.leads_mut().set_search_term("ORBITAL");
    println!("\n🔎 Search \"ORBITAL\" in list view");
    if let LeadView::List(leads) = dashboard.leads().view() {
        for lead in leads {
            println!("  #{} {} <{}>", lead.id, lead.name, lead.contact);
        }
    }

    println!("\n📦 Orders by status");
    for (status, totals) in dashboard.orders().status_overview().iter() {
        println!(
            "  {:<18} {:>2} orders  {}",
            status.as_str(),
            totals.count,
            totals.formatted_total()
        );
    }

    dashboard.orders_mut().set_search_term("no such client");
    if let Some(empty) = dashboard.orders().empty_state() {
        println!("\n🫙 {}", empty.hint());
    }

    let summary = dashboard.summary();
    println!("\n📊 Summary");
    println!("  Total leads:     {}", summary.total_leads);
    println!("  Active orders:   {}", summary.active_orders);
    println!("  Conversion rate: {:.1}%", summary.conversion_rate);
    println!("  Pipeline value:  {}", summary.formatted_pipeline_value());
    println!("\n{}", serde_json::to_string_pretty(&summary)?);

    drop(dashboard);
    listener.await?;

    Ok(())
}
