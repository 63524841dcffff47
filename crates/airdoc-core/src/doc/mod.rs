//! Direct Operating Cost calculation.
//!
//! `processes` holds the category formulas, `maintenance` the AEA 1989a
//! maintenance model, `run` the orchestration, `outputs` the result types.

pub mod maintenance;
pub mod outputs;
pub mod processes;
pub mod run;

pub use maintenance::{MaintenanceBreakdown, ShapeFactors};
pub use outputs::{CostBreakdown, DocResult};
pub use run::{calculate_costs, maintenance_cost_per_flight, maintenance_detail};
