pub mod aggregation;
pub mod comparison;
pub mod kpi;
pub mod records;

pub use aggregation::{aggregate_revenue_data, daily_revenue_series, DailyRevenue, RevenueBucket};
pub use comparison::{compare_revenue, RevenueComparison};
pub use kpi::{calculate_kpis, KpiReport};
pub use records::{Breakdown, RevenueRecord};
