//! # vitalis-dashboard
//!
//! Assembles the health-dashboard view for one patient: metrics,
//! recent activity, and a live diabetes-risk prediction. A failed
//! prediction degrades the risk entry instead of failing the view.

mod builder;
mod view;

pub use builder::DashboardBuilder;
pub use view::{ActivityEntry, DashboardView, HealthMetrics, HealthTip, RiskEntry, RiskOutcome};
